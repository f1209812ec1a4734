//! Identical inputs give identical outputs.

use crate::common::sample_lexicon;
use rungs::{LadderSearch, Lexicon};

const QUERIES: &[(&str, &str)] = &[
    ("cold", "warm"),
    ("head", "tail"),
    ("mud", "top"),
    ("pig", "sty"),
    ("work", "home"),
];

#[test]
fn repeated_searches_agree() {
    let search = LadderSearch::new(sample_lexicon());
    for &(start, target) in QUERIES {
        let first = search.run(start, target);
        let second = search.run(start, target);
        assert_eq!(first, second, "{} -> {}", start, target);
    }
}

#[test]
fn lexicon_insertion_order_does_not_matter() {
    let mut words: Vec<&str> = sample_lexicon().iter().collect();
    words.sort_unstable();
    let sorted = Lexicon::from_words(words.iter().copied());
    words.reverse();
    let reversed = Lexicon::from_words(words.iter().copied());

    for &(start, target) in QUERIES {
        assert_eq!(
            LadderSearch::new(&sorted).run(start, target),
            LadderSearch::new(&reversed).run(start, target),
            "{} -> {}",
            start,
            target
        );
    }
}
