//! Whole-word scanning over effect strings.
//!
//! Short names are matched against the `takes` / `leaves` strings as whole
//! words: an occurrence does not count when it touches a word character
//! (alphanumeric or underscore) on either side.

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Every byte offset at which `needle` occurs as a whole word in
/// `haystack`, left to right.
pub fn word_occurrences(haystack: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }
    let needle_head = needle.chars().next().unwrap_or(' ');
    let needle_tail = needle.chars().next_back().unwrap_or(' ');

    let mut occurrences = Vec::new();
    for (start, _) in haystack.match_indices(needle) {
        let end = start + needle.len();
        let left_joined = is_word_char(needle_head)
            && haystack[..start].chars().next_back().is_some_and(is_word_char);
        let right_joined = is_word_char(needle_tail)
            && haystack[end..].chars().next().is_some_and(is_word_char);
        if !left_joined && !right_joined {
            occurrences.push(start);
        }
    }
    occurrences
}

/// Whether `needle` occurs as a whole word anywhere in `haystack`.
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    !word_occurrences(haystack, needle).is_empty()
}
