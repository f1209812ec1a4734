//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::collections::{HashMap, HashSet, VecDeque};

use crate::lexicon::Lexicon;
use crate::search::neighbors;
use crate::types::Ladder;
use crate::utils::substitution_distance;

/// Build a lexicon from string literals.
pub fn make_lexicon(words: &[&str]) -> Lexicon {
    Lexicon::from_words(words.iter().copied())
}

/// Check every structural property a returned ladder must have.
///
/// Panics with a description of the first violation.
pub fn assert_valid_ladder(ladder: &Ladder, start: &str, target: &str, lexicon: &Lexicon) {
    let words = ladder.words();
    assert!(!words.is_empty(), "ladder is empty");
    assert_eq!(ladder.start(), start, "ladder does not begin at start");
    assert_eq!(ladder.target(), target, "ladder does not end at target");

    let mut seen = HashSet::new();
    for word in words {
        assert!(seen.insert(word.as_str()), "word '{}' repeated in {}", word, ladder);
    }

    for pair in words.windows(2) {
        assert_eq!(
            substitution_distance(&pair[0], &pair[1]),
            Some(1),
            "'{}' -> '{}' is not a single substitution",
            pair[0],
            pair[1]
        );
    }

    if words.len() > 2 {
        for word in &words[1..words.len() - 1] {
            assert!(lexicon.contains(word), "'{}' is not in the lexicon", word);
        }
    }
}

/// Shortest number of steps from `start` to `target` by plain BFS over an
/// explicit adjacency map. Obviously correct and slow: the reference the
/// engine is compared against.
///
/// Same edge rules as the engine: intermediate words must be lexicon
/// members, the target need not be.
pub fn oracle_distance(start: &str, target: &str, lexicon: &Lexicon) -> Option<usize> {
    if start.chars().count() != target.chars().count() {
        return None;
    }
    if start == target {
        return Some(0);
    }

    let mut vertices: Vec<&str> = lexicon.iter().collect();
    vertices.push(start);
    vertices.push(target);

    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for &a in &vertices {
        for &b in &vertices {
            if substitution_distance(a, b) == Some(1) {
                adjacency.entry(a).or_default().push(b);
            }
        }
    }

    let mut distance: HashMap<&str, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    distance.insert(start, 0);
    queue.push_back(start);

    while let Some(word) = queue.pop_front() {
        let d = distance[word];
        for &next in adjacency.get(word).into_iter().flatten() {
            if next == target {
                return Some(d + 1);
            }
            if !lexicon.contains(next) || distance.contains_key(next) {
                continue;
            }
            distance.insert(next, d + 1);
            queue.push_back(next);
        }
    }
    None
}

/// All lexicon words one substitution away from `word`.
pub fn lexicon_neighbors(word: &str, lexicon: &Lexicon) -> Vec<String> {
    neighbors(word).filter(|n| lexicon.contains(n)).collect()
}
