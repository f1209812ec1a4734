// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Breadth-first ladder search.
//!
//! The graph is never built. Its vertices are lexicon words, its edges join
//! words one substitution apart, and neighbors are generated on demand from
//! the word being expanded. Because the frontier is FIFO and each word is
//! enqueued at most once, the first ladder that reaches the target is a
//! shortest one.
//!
//! # Termination cases, in order
//!
//! 1. Start and target differ in length: no ladder, nothing searched.
//! 2. Start equals target: the one-word ladder `[start]`.
//! 3. A generated candidate equals the target: the current ladder plus the
//!    target. The target itself is not looked up in the lexicon.
//! 4. Frontier exhausted: no ladder.
//!
//! The start word is seeded into the visited set, so it is never re-entered
//! through a cycle.
//!
//! # Input
//!
//! Words are expected to be lowercase ASCII letters, as produced by
//! [`normalize_word`](crate::normalize_word). Nothing is validated here.
//! Other input is safe: substitutions work on characters, so any string
//! produces valid candidates and the search still terminates with some answer,
//! typically "no ladder".

mod arena;
mod neighbors;

pub use neighbors::{neighbors, Neighbors, ALPHABET};

use std::collections::{HashSet, VecDeque};

use arena::PathArena;
use neighbors::NeighborCursor;

use crate::lexicon::Lexicon;
use crate::types::{Ladder, SearchReport, SearchStats};

/// A search engine bound to one lexicon.
///
/// Holds nothing but the borrow, so any number of searches (on any number of
/// threads) can share the same lexicon.
#[derive(Debug, Clone, Copy)]
pub struct LadderSearch<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> LadderSearch<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Shortest ladder from `start` to `target`, or `None`.
    pub fn find(&self, start: &str, target: &str) -> Option<Ladder> {
        self.run(start, target).ladder
    }

    /// Run a search and keep its counters.
    pub fn run(&self, start: &str, target: &str) -> SearchReport {
        let _span = tracing::debug_span!("find_ladder", start, target).entered();
        let mut stats = SearchStats::default();

        if start.chars().count() != target.chars().count() {
            tracing::debug!("length mismatch, no ladder possible");
            return SearchReport { ladder: None, stats };
        }

        if start == target {
            return SearchReport {
                ladder: Some(Ladder::from_words(vec![start.to_string()])),
                stats,
            };
        }

        let ladder = self.breadth_first(start, target, &mut stats);
        tracing::debug!(
            found = ladder.is_some(),
            rungs = ladder.as_ref().map_or(0, Ladder::len),
            expanded = stats.expanded,
            candidates = stats.candidates,
            enqueued = stats.enqueued,
            peak_frontier = stats.peak_frontier,
            "search finished"
        );
        SearchReport { ladder, stats }
    }

    fn breadth_first(&self, start: &str, target: &str, stats: &mut SearchStats) -> Option<Ladder> {
        let mut arena = PathArena::with_capacity(64);
        let mut visited: HashSet<String> = HashSet::new();
        let mut frontier = VecDeque::new();

        let root = arena.push(start.to_string(), None);
        visited.insert(start.to_string());
        frontier.push_back(root);
        stats.peak_frontier = 1;

        let mut candidate = String::with_capacity(start.len());

        while let Some(node) = frontier.pop_front() {
            stats.expanded += 1;
            let word = arena.word(node);
            tracing::trace!(iteration = stats.expanded, word, "expanding");

            if word == target {
                return Some(arena.ladder_to(node));
            }

            let mut cursor = NeighborCursor::new(word);
            while cursor.next_into(&mut candidate) {
                stats.candidates += 1;

                if candidate == target {
                    return Some(arena.ladder_through(node, &candidate));
                }

                if self.lexicon.contains(&candidate) && !visited.contains(&candidate) {
                    visited.insert(candidate.clone());
                    let child = arena.push(candidate.clone(), Some(node));
                    frontier.push_back(child);
                    stats.enqueued += 1;
                }
            }

            stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        }

        None
    }
}

/// Shortest ladder from `start` to `target` through `lexicon`, or `None` if there is none.
///
/// Both words should already be normalized (lowercase letters). Words of
/// different lengths never have a ladder; equal words have the one-word
/// ladder. Among several shortest ladders, the one whose first differing
/// substitution comes at an earlier position, then an earlier letter, wins.
///
/// ```
/// use rungs::{find_ladder, Lexicon};
///
/// let lexicon = Lexicon::from_words(["cat", "bat", "bad"]);
/// let ladder = find_ladder("cat", "bad", &lexicon).unwrap();
/// assert_eq!(ladder.to_string(), "cat -> bat -> bad");
/// assert!(find_ladder("cat", "dogs", &lexicon).is_none());
/// ```
pub fn find_ladder(start: &str, target: &str, lexicon: &Lexicon) -> Option<Ladder> {
    LadderSearch::new(lexicon).find(start, target)
}
