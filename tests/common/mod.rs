//! Shared test utilities and fixtures.

#![allow(dead_code)]

use rungs::{Lexicon, LoadOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::LazyLock;
use tempfile::NamedTempFile;

// Re-export canonical test utilities from rungs::testing
pub use rungs::testing::{assert_valid_ladder, lexicon_neighbors, make_lexicon, oracle_distance};

// ============================================================================
// FIXTURES
// ============================================================================

/// Path to the bundled sample word list (3- and 4-letter words).
pub fn sample_words_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample_words.txt")
}

/// Sample word list, loaded once per test binary.
static SAMPLE: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon::load(sample_words_path()).expect("Failed to load data/sample_words.txt")
});

pub fn sample_lexicon() -> &'static Lexicon {
    &SAMPLE
}

/// The five-word lexicon of the classic code -> data example.
pub fn code_data_lexicon() -> Lexicon {
    make_lexicon(&["code", "cade", "cate", "date", "data"])
}

// ============================================================================
// TEMPORARY DICTIONARIES
// ============================================================================

/// Write `contents` verbatim to a temporary file.
pub fn write_dictionary(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp dictionary");
    file.flush().expect("Failed to flush temp dictionary");
    file
}

/// Write and load in one go.
pub fn load_dictionary(contents: &str, options: &LoadOptions) -> Lexicon {
    let file = write_dictionary(contents);
    Lexicon::load_with(file.path(), options).expect("Failed to load temp dictionary")
}
