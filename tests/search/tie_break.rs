//! Which ladder wins when several are equally short.
//!
//! Candidates are generated position by position, `a` to `z` at each
//! position, and the frontier is FIFO. The first shortest ladder in that
//! order is the one returned.

use crate::common::make_lexicon;
use rungs::find_ladder;

#[test]
fn earlier_position_wins() {
    // cat -> bat -> bot (position 0 first) vs cat -> cot -> bot (position 1 first)
    let lexicon = make_lexicon(&["cat", "bat", "cot", "bot"]);
    assert_eq!(find_ladder("cat", "bot", &lexicon).unwrap(), ["cat", "bat", "bot"]);
}

#[test]
fn earlier_letter_wins_at_same_position() {
    // hat and mat both change position 0; h < m
    let lexicon = make_lexicon(&["cat", "mat", "hat", "mit", "hit", "xit"]);
    assert_eq!(
        find_ladder("cat", "xit", &lexicon).unwrap(),
        ["cat", "hat", "hit", "xit"]
    );
}

#[test]
fn removing_the_preferred_route_falls_back_to_the_next() {
    let lexicon = make_lexicon(&["cat", "mat", "mit", "xit"]);
    assert_eq!(
        find_ladder("cat", "xit", &lexicon).unwrap(),
        ["cat", "mat", "mit", "xit"]
    );
}

#[test]
fn first_discovery_owns_a_word() {
    // "bot" is reachable from both bat and cot at depth 2. It is claimed by
    // bat (expanded first), so the ladder to "bog" goes through bat.
    let lexicon = make_lexicon(&["cat", "bat", "cot", "bot", "bog"]);
    assert_eq!(
        find_ladder("cat", "bog", &lexicon).unwrap(),
        ["cat", "bat", "bot", "bog"]
    );
}

#[test]
fn swapping_endpoints_can_change_the_route_but_not_the_length() {
    let lexicon = make_lexicon(&["cat", "bat", "cot", "bot"]);
    let forward = find_ladder("cat", "bot", &lexicon).unwrap();
    let backward = find_ladder("bot", "cat", &lexicon).unwrap();
    assert_eq!(forward.len(), backward.len());
    assert_eq!(backward, ["bot", "cot", "cat"]);
}
