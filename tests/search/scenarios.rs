//! Concrete ladders with known shortest answers.

use crate::common::{assert_valid_ladder, code_data_lexicon, make_lexicon, sample_lexicon};
use rungs::{find_ladder, LadderSearch, Lexicon};

// ============================================================================
// SMALL HAND-BUILT LEXICONS
// ============================================================================

#[test]
fn code_to_data_through_four_substitutions() {
    let lexicon = code_data_lexicon();
    let ladder = find_ladder("code", "data", &lexicon).expect("ladder exists");
    assert_eq!(ladder, ["code", "cade", "cate", "date", "data"]);
    assert_eq!(ladder.len(), 5);
}

#[test]
fn cat_to_bad() {
    let lexicon = make_lexicon(&["cat", "bat", "bad"]);
    let ladder = find_ladder("cat", "bad", &lexicon).expect("ladder exists");
    assert_eq!(ladder, ["cat", "bat", "bad"]);
}

#[test]
fn cat_and_dog_share_no_chain() {
    let lexicon = make_lexicon(&["cat", "dog"]);
    assert!(find_ladder("cat", "dog", &lexicon).is_none());
}

#[test]
fn length_mismatch_is_not_found_for_any_lexicon() {
    for lexicon in [
        Lexicon::default(),
        make_lexicon(&["cat", "dogs"]),
        sample_lexicon().clone(),
    ] {
        let report = LadderSearch::new(&lexicon).run("cat", "dogs");
        assert!(report.ladder.is_none());
        assert_eq!(report.stats.expanded, 0, "length mismatch must not search");
    }
}

#[test]
fn same_word_gives_one_word_ladder() {
    let lexicon = make_lexicon(&["same"]);
    let ladder = find_ladder("same", "same", &lexicon).expect("one-word ladder");
    assert_eq!(ladder, ["same"]);
    assert_eq!(ladder.steps(), 0);
}

#[test]
fn one_word_ladder_is_distinct_from_not_found() {
    let lexicon = make_lexicon(&["same", "dome"]);
    assert!(find_ladder("same", "same", &lexicon).is_some());
    assert!(find_ladder("same", "dome", &lexicon).is_none());
}

// ============================================================================
// SAMPLE WORD LIST
// ============================================================================

fn assert_sample_ladder(start: &str, target: &str, expected: &[&str]) {
    let lexicon = sample_lexicon();
    let ladder = find_ladder(start, target, lexicon)
        .unwrap_or_else(|| panic!("expected a ladder from {} to {}", start, target));
    assert_eq!(ladder, *expected, "{} -> {}", start, target);
    assert_valid_ladder(&ladder, start, target, lexicon);
}

#[test]
fn cold_to_warm() {
    assert_sample_ladder("cold", "warm", &["cold", "cord", "word", "ward", "warm"]);
}

#[test]
fn head_to_tail() {
    assert_sample_ladder("head", "tail", &["head", "heal", "teal", "tell", "tall", "tail"]);
}

#[test]
fn cat_to_dog_with_a_real_word_list() {
    assert_sample_ladder("cat", "dog", &["cat", "cot", "dot", "dog"]);
}

#[test]
fn love_to_hate() {
    assert_sample_ladder("love", "hate", &["love", "lore", "core", "care", "hare", "hate"]);
}

#[test]
fn book_to_hero_takes_seven_steps() {
    assert_sample_ladder(
        "book",
        "hero",
        &["book", "boot", "bolt", "bold", "hold", "held", "herd", "hero"],
    );
}

#[test]
fn neighbors_are_one_step() {
    assert_sample_ladder("cat", "cot", &["cat", "cot"]);
}

#[test]
fn isolated_start_word_has_no_ladder() {
    let report = LadderSearch::new(sample_lexicon()).run("zzzz", "cold");
    assert!(report.ladder.is_none());
    assert_eq!(report.stats.expanded, 1);
    assert_eq!(report.stats.enqueued, 0);
}

#[test]
fn unreachable_target_exhausts_the_component() {
    let report = LadderSearch::new(sample_lexicon()).run("pig", "sty");
    assert!(report.ladder.is_none());
    // every enqueued word is expanded once, plus the start word
    assert_eq!(report.stats.expanded, report.stats.enqueued + 1);
}
