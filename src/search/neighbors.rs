// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One-letter substitutions of a word, in a fixed order.
//!
//! The order is part of the contract: positions ascending, and at each
//! position the letters `a` through `z` ascending. When several shortest
//! ladders exist, this order alone (plus FIFO expansion) decides which one
//! the search returns.
//!
//! Substituting a letter with itself yields the word unchanged, so those
//! candidates are skipped. Positions are characters, not bytes: a word with
//! multibyte characters still produces valid strings, just never words the
//! search was asked about.

/// Letters tried at every position, in generation order.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Walks the substitutions of one word, writing each into a caller buffer.
///
/// The search reuses a single `String` across all candidates of an expansion;
/// [`Neighbors`] wraps this for callers who want owned strings.
#[derive(Debug, Clone)]
pub(crate) struct NeighborCursor {
    chars: Vec<char>,
    position: usize,
    letter: usize,
}

impl NeighborCursor {
    pub(crate) fn new(word: &str) -> Self {
        Self {
            chars: word.chars().collect(),
            position: 0,
            letter: 0,
        }
    }

    /// Write the next candidate into `out`. Returns false once exhausted.
    pub(crate) fn next_into(&mut self, out: &mut String) -> bool {
        while self.position < self.chars.len() {
            if self.letter == ALPHABET.len() {
                self.position += 1;
                self.letter = 0;
                continue;
            }

            let replacement = ALPHABET[self.letter];
            self.letter += 1;
            if replacement == self.chars[self.position] {
                continue;
            }

            out.clear();
            out.extend(self.chars[..self.position].iter());
            out.push(replacement);
            out.extend(self.chars[self.position + 1..].iter());
            return true;
        }
        false
    }

    /// Candidates not yet produced. Exact, since the word's own letters are known.
    fn remaining(&self) -> usize {
        if self.position >= self.chars.len() {
            return 0;
        }
        let here = ALPHABET[self.letter..]
            .iter()
            .filter(|&&c| c != self.chars[self.position])
            .count();
        let later = self.chars[self.position + 1..]
            .iter()
            .map(|c| if ALPHABET.contains(c) { 25 } else { 26 })
            .sum::<usize>();
        here + later
    }
}

/// Iterator over every one-letter substitution of a word.
#[derive(Debug, Clone)]
pub struct Neighbors {
    cursor: NeighborCursor,
}

impl Iterator for Neighbors {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut out = String::new();
        self.cursor.next_into(&mut out).then_some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.cursor.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Neighbors {}

/// Every word one substitution away from `word`, whether or not it is in any lexicon.
///
/// ```
/// let first: Vec<String> = rungs::neighbors("cat").take(3).collect();
/// assert_eq!(first, ["aat", "bat", "dat"]);
/// ```
pub fn neighbors(word: &str) -> Neighbors {
    Neighbors {
        cursor: NeighborCursor::new(word),
    }
}
