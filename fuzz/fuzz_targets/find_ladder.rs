// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ladder search.
//!
//! Arbitrary query pairs against a small fixed word list. The search must
//! never panic, and any ladder it returns must run from start to target in
//! single-letter steps through dictionary words.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rungs::{changed_position, LadderSearch, Lexicon};
use std::sync::OnceLock;

#[derive(Debug, Arbitrary)]
struct QueryInput {
    start_bytes: Vec<u8>,
    target_bytes: Vec<u8>,
}

const WORDS: &[&str] = &[
    "cat", "cot", "cog", "dog", "dot", "bat", "bad", "bed", "bet", "cold", "cord", "card",
    "ward", "warm", "word", "worm", "code", "cade", "cate", "date", "data",
];

/// Keep inputs short so a single run stays fast.
fn to_query(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).chars().take(8).collect()
}

fuzz_target!(|input: QueryInput| {
    static LEXICON: OnceLock<Lexicon> = OnceLock::new();
    let lexicon = LEXICON.get_or_init(|| Lexicon::from_words(WORDS.iter().copied()));

    let start = to_query(&input.start_bytes);
    let target = to_query(&input.target_bytes);

    let report = LadderSearch::new(lexicon).run(&start, &target);
    let Some(ladder) = report.ladder else {
        return;
    };

    assert_eq!(ladder.start(), start);
    assert_eq!(ladder.target(), target);
    assert!(ladder.len() >= 1);

    let words = ladder.words();
    for pair in words.windows(2) {
        assert!(
            changed_position(&pair[0], &pair[1]).is_some(),
            "{:?} -> {:?} is not a single substitution",
            pair[0],
            pair[1]
        );
    }
    if words.len() > 2 {
        for middle in &words[1..words.len() - 1] {
            assert!(lexicon.contains(middle), "{:?} not in lexicon", middle);
        }
    }
});
