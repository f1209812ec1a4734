// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Values produced by a ladder search.
//!
//! # Invariants
//!
//! - **Ladder**: non-empty; consecutive words have the same length and differ
//!   in exactly one character position; no word appears twice. The search is
//!   the only producer, so these hold by construction rather than by checks.
//!
//! - **SearchReport**: `ladder.is_none()` is the "no ladder exists" outcome and
//!   is never confused with a found ladder, including the one-word ladder
//!   returned when start and target are equal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used by `Display` for [`Ladder`].
pub const RUNG_SEPARATOR: &str = " -> ";

/// An ordered sequence of words from the start word to the target word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Ladder {
    words: Vec<String>,
}

impl Ladder {
    pub(crate) fn from_words(words: Vec<String>) -> Self {
        debug_assert!(!words.is_empty());
        Self { words }
    }

    /// Number of words, counting both ends. A ladder from a word to itself has length 1.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: the search never produces an empty ladder.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of single-letter substitutions, i.e. `len() - 1`.
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    pub fn start(&self) -> &str {
        &self.words[0]
    }

    pub fn target(&self) -> &str {
        &self.words[self.words.len() - 1]
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(RUNG_SEPARATOR)?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Ladder {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl PartialEq<[&str]> for Ladder {
    fn eq(&self, other: &[&str]) -> bool {
        self.words.len() == other.len() && self.words.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Ladder {
    fn eq(&self, other: &[&str; N]) -> bool {
        self == &other[..]
    }
}

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Ladders taken off the frontier and expanded.
    pub expanded: usize,
    /// Substitution candidates generated.
    pub candidates: usize,
    /// Words that passed the lexicon and visited checks and were enqueued.
    pub enqueued: usize,
    /// Largest frontier length observed.
    pub peak_frontier: usize,
}

/// Outcome of one search together with its counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub ladder: Option<Ladder>,
    pub stats: SearchStats,
}

impl SearchReport {
    pub fn found(&self) -> bool {
        self.ladder.is_some()
    }
}
