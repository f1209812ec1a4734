//! Utility functions for query processing.

/// Normalize a query word: trim surrounding whitespace and lowercase.
///
/// Returns `None` when nothing is left or when any character is not an ASCII
/// letter. The search accepts any string, but only words that pass through
/// here can ever match a lowercase word list.
///
/// - `" Code "` → `Some("code")`
/// - `"DATA"` → `Some("data")`
/// - `"c0de"` → `None`
/// - `""` → `None`
pub fn normalize_word(value: &str) -> Option<String> {
    let word = value.trim().to_ascii_lowercase();
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }
    Some(word)
}

/// Number of positions at which two equal-length words differ, or `None` if
/// their lengths differ.
pub fn substitution_distance(a: &str, b: &str) -> Option<usize> {
    if a.chars().count() != b.chars().count() {
        return None;
    }
    Some(a.chars().zip(b.chars()).filter(|(x, y)| x != y).count())
}

/// The single character position at which two words differ, if there is exactly one.
pub fn changed_position(a: &str, b: &str) -> Option<usize> {
    if substitution_distance(a, b)? != 1 {
        return None;
    }
    a.chars().zip(b.chars()).position(|(x, y)| x != y)
}
