// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The dictionary a ladder is allowed to step through.
//!
//! A lexicon is loaded once from a newline-delimited word list and never
//! changes afterwards. Searches only ever ask it one question: is this exact
//! string a word? No case folding happens at lookup time, so anything that
//! wants case-insensitive behavior normalizes the word list at load time
//! (`LoadOptions::lowercase`) and the query before calling the search.
//!
//! # Blank records
//!
//! Word lists often end with an empty line. By default blank records (after
//! trimming, so `"\r"` from CRLF files counts as blank) are skipped. With
//! [`BlankLines::Reject`] the first blank record aborts the load with
//! [`LexiconError::MalformedEntry`].
//!
//! # Undecodable records
//!
//! Records are read as raw bytes. One that is not valid UTF-8 (a Latin-1
//! `caf\xe9`, say) does not fail the whole load: by default it is decoded
//! lossily and kept, so it can never match a normalized query but the rest of
//! the list is still usable. Under [`BlankLines::Reject`] it is rejected like
//! a blank record, with its line number. Only I/O failures map to
//! [`LexiconError::SourceUnavailable`].

use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::LexiconError;

/// What to do with a record that is empty after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankLines {
    #[default]
    Skip,
    Reject,
}

/// Options for [`Lexicon::load_with`] and [`Lexicon::from_reader`].
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub blank_lines: BlankLines,
    /// Lowercase every entry as it is read.
    pub lowercase: bool,
}

impl LoadOptions {
    /// Options that fail on blank records instead of skipping them.
    pub fn strict() -> Self {
        Self {
            blank_lines: BlankLines::Reject,
            ..Self::default()
        }
    }
}

/// An immutable set of valid words.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Load a word list with default options.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        Self::load_with(path, &LoadOptions::default())
    }

    /// Load a word list, one word per line.
    pub fn load_with(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LexiconError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let lexicon = read_words(BufReader::new(file), options, path).map_err(|err| match err {
            LexiconError::Empty { path: None } => LexiconError::Empty {
                path: Some(path.to_path_buf()),
            },
            other => other,
        })?;

        tracing::debug!(
            path = %path.display(),
            words = lexicon.len(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    /// Build a lexicon from any buffered reader, e.g. stdin or an in-memory cursor.
    pub fn from_reader<R: BufRead>(reader: R, options: &LoadOptions) -> Result<Self, LexiconError> {
        read_words(reader, options, Path::new("<reader>"))
    }

    /// Build a lexicon from words already in memory. Entries are taken verbatim.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive membership test.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of words per length (in characters), ordered by length.
    pub fn length_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for word in &self.words {
            *histogram.entry(word.chars().count()).or_insert(0) += 1;
        }
        histogram
    }
}

impl<S: Into<String>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

fn read_words<R: BufRead>(
    mut reader: R,
    options: &LoadOptions,
    path: &Path,
) -> Result<Lexicon, LexiconError> {
    let mut words = HashSet::new();
    let mut skipped = 0usize;
    let mut undecodable = 0usize;
    let mut buf = Vec::new();
    let mut line = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| LexiconError::SourceUnavailable {
                path: PathBuf::from(path),
                source,
            })?;
        if read == 0 {
            break;
        }
        line += 1;

        let record = match std::str::from_utf8(&buf) {
            Ok(text) => Cow::Borrowed(text),
            Err(_) => match options.blank_lines {
                BlankLines::Skip => {
                    undecodable += 1;
                    String::from_utf8_lossy(&buf)
                }
                BlankLines::Reject => return Err(LexiconError::MalformedEntry { line }),
            },
        };
        let entry = record.trim();

        if entry.is_empty() {
            match options.blank_lines {
                BlankLines::Skip => {
                    skipped += 1;
                    continue;
                }
                BlankLines::Reject => return Err(LexiconError::MalformedEntry { line }),
            }
        }

        if options.lowercase {
            words.insert(entry.to_lowercase());
        } else {
            words.insert(entry.to_string());
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "skipped blank records");
    }
    if undecodable > 0 {
        tracing::warn!(undecodable, "kept records that are not valid UTF-8, decoded lossily");
    }
    if words.is_empty() {
        return Err(LexiconError::Empty { path: None });
    }
    Ok(Lexicon { words })
}
