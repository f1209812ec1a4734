//! Input outside the normalized contract must not crash the search.
//!
//! Results for such input are whatever the substitution rules produce; the
//! only requirement is a clean answer.

use crate::common::sample_lexicon;
use rungs::{find_ladder, normalize_word, LadderSearch};

#[test]
fn uppercase_query_is_simply_not_found() {
    assert!(find_ladder("COLD", "WARM", sample_lexicon()).is_none());
}

#[test]
fn normalizing_first_makes_it_work() {
    let start = normalize_word("COLD").unwrap();
    let target = normalize_word(" Warm ").unwrap();
    assert!(find_ladder(&start, &target, sample_lexicon()).is_some());
}

#[test]
fn digits_and_symbols_terminate() {
    for (start, target) in [("c0ld", "warm"), ("col-", "warm"), ("....", "cold")] {
        let report = LadderSearch::new(sample_lexicon()).run(start, target);
        assert!(report.stats.expanded >= 1);
    }
}

#[test]
fn a_bad_character_can_be_substituted_away() {
    // position 1 of "c0ld" becomes 'o', giving "cold" and then the usual route
    let ladder = find_ladder("c0ld", "cord", sample_lexicon()).unwrap();
    assert_eq!(ladder, ["c0ld", "cold", "cord"]);
}

#[test]
fn multibyte_characters_count_as_one_position() {
    let ladder = find_ladder("cöld", "cold", sample_lexicon()).unwrap();
    assert_eq!(ladder, ["cöld", "cold"]);
    assert!(find_ladder("cöld", "colds", sample_lexicon()).is_none());
}

#[test]
fn empty_words() {
    assert_eq!(find_ladder("", "", sample_lexicon()).unwrap().len(), 1);
    assert!(find_ladder("", "cat", sample_lexicon()).is_none());
}
