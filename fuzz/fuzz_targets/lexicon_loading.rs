// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for word list parsing.
//!
//! Any byte stream either loads or fails with a typed error. Loaded words are
//! trimmed and never empty.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rungs::{Lexicon, LexiconError, LoadOptions};

fuzz_target!(|data: &[u8]| {
    for options in [LoadOptions::default(), LoadOptions::strict()] {
        match Lexicon::from_reader(data, &options) {
            Ok(lexicon) => {
                assert!(!lexicon.is_empty());
                for word in lexicon.iter() {
                    assert!(!word.is_empty());
                    assert_eq!(word, word.trim());
                }
            }
            Err(LexiconError::Empty { .. })
            | Err(LexiconError::MalformedEntry { .. })
            | Err(LexiconError::SourceUnavailable { .. }) => {}
        }
    }
});
