// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Partial ladders as a predecessor chain.
//!
//! Every word reached during a search gets one node holding the word and the
//! index of the node it was reached from. Extending a ladder is one push, and
//! the full ladder is only materialized for the winner by walking the parents
//! back to the root.

use crate::types::Ladder;

pub(crate) type NodeId = usize;

#[derive(Debug)]
struct PathNode {
    word: String,
    parent: Option<NodeId>,
}

#[derive(Debug, Default)]
pub(crate) struct PathArena {
    nodes: Vec<PathNode>,
}

impl PathArena {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, word: String, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(PathNode { word, parent });
        id
    }

    pub(crate) fn word(&self, id: NodeId) -> &str {
        &self.nodes[id].word
    }

    /// Words from the root to `id`, inclusive.
    pub(crate) fn words_to(&self, id: NodeId) -> Vec<String> {
        let mut words = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = &self.nodes[current];
            words.push(node.word.clone());
            cursor = node.parent;
        }
        words.reverse();
        words
    }

    pub(crate) fn ladder_to(&self, id: NodeId) -> Ladder {
        Ladder::from_words(self.words_to(id))
    }

    /// Ladder to `id` with one more word appended, without storing that word.
    pub(crate) fn ladder_through(&self, id: NodeId, last: &str) -> Ladder {
        let mut words = self.words_to(id);
        words.push(last.to_string());
        Ladder::from_words(words)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}
