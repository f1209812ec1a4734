//! One lexicon shared by searches on several threads.

use crate::common::sample_lexicon;
use rungs::{find_ladder, Lexicon};
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn lexicon_is_send_and_sync() {
    assert_send_sync::<Lexicon>();
}

#[test]
fn parallel_searches_match_sequential() {
    let lexicon = sample_lexicon();
    let queries = [
        ("cold", "warm"),
        ("head", "tail"),
        ("cat", "dog"),
        ("bolt", "cart"),
        ("fig", "hut"),
        ("pig", "sty"),
    ];

    let sequential: Vec<_> = queries
        .iter()
        .map(|(s, t)| find_ladder(s, t, lexicon))
        .collect();

    let parallel: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = queries
            .iter()
            .map(|(s, t)| scope.spawn(move || find_ladder(s, t, lexicon)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("search thread panicked"))
            .collect()
    });

    assert_eq!(sequential, parallel);
}
