//! Char-indexed helpers over `&str`.
//!
//! The whole engine counts characters, never bytes, so dictionary words with
//! multi-byte characters behave the same as ASCII ones. These helpers are
//! O(n) per call, which is fine for the short strings the engine handles.

pub(crate) fn len(s: &str) -> usize {
    s.chars().count()
}

/// The string with the character at `index` removed.
pub(crate) fn remove(s: &str, index: usize) -> String {
    s.chars()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, ch)| ch)
        .collect()
}

pub(crate) fn slice(s: &str, start: usize, end: usize) -> String {
    s.chars().skip(start).take(end - start).collect()
}

pub(crate) fn suffix(s: &str, start: usize) -> String {
    s.chars().skip(start).collect()
}

pub(crate) fn char_at(s: &str, i: isize) -> Option<char> {
    if i < 0 {
        return None;
    }
    s.chars().nth(i as usize)
}
