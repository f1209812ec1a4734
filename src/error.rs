// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while building a lexicon.
//!
//! Searching never fails: a missing ladder is an ordinary `None`. Everything
//! that can go wrong happens before the first search, while the word list is
//! read, and every such failure is fatal to that load.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Why a word list could not become a [`Lexicon`](crate::Lexicon).
#[derive(Debug)]
pub enum LexiconError {
    /// The word source could not be opened or read.
    SourceUnavailable { path: PathBuf, source: io::Error },
    /// A record was blank or not valid UTF-8, and the load options reject
    /// such records.
    ///
    /// `line` is 1-based.
    MalformedEntry { line: usize },
    /// The source held no words at all.
    Empty { path: Option<PathBuf> },
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconError::SourceUnavailable { path, source } => {
                write!(f, "cannot read word list {}: {}", path.display(), source)
            }
            LexiconError::MalformedEntry { line } => {
                write!(f, "malformed entry at line {} (blank or not UTF-8)", line)
            }
            LexiconError::Empty { path: Some(path) } => {
                write!(f, "word list {} contains no words", path.display())
            }
            LexiconError::Empty { path: None } => write!(f, "word list contains no words"),
        }
    }
}

impl std::error::Error for LexiconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LexiconError::SourceUnavailable { source, .. } => Some(source),
            _ => None,
        }
    }
}
