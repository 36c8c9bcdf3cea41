//! Sentence boundary detection.

/// Collapse every whitespace run in `text` into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Return the first sentence of `text`, terminator included.
///
/// A sentence ends at the first `.`, `!` or `?` that is followed by
/// whitespace or the end of the text. A lone capital letter before a
/// period (`F.`) is treated as an abbreviation, not a boundary. When no
/// boundary exists the whole text is one sentence; empty input yields
/// an empty string.
pub fn first_sentence(text: &str) -> String {
    let trimmed = text.trim_start();
    let chars: Vec<char> = trimmed.chars().collect();
    let len = chars.len();

    for i in 0..len {
        if !matches!(chars[i], '.' | '!' | '?') {
            continue;
        }
        if i + 1 < len && !chars[i + 1].is_whitespace() {
            continue;
        }
        // Abbreviation: a single capital letter owns its period.
        if chars[i] == '.'
            && i >= 1
            && chars[i - 1].is_ascii_uppercase()
            && (i == 1 || chars[i - 2].is_whitespace())
        {
            continue;
        }
        return chars[..=i].iter().collect();
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn collapses_whitespace() {
        assert_eq!(collapse_whitespace("a\n b\t\tc"), "a b c");
    }

    #[test]
    fn takes_first_sentence() {
        assert_eq!(first_sentence("Opens a door. Then more."), "Opens a door.");
    }

    #[test]
    fn question_and_exclamation_end_sentences() {
        assert_eq!(first_sentence("Really? Yes."), "Really?");
        assert_eq!(first_sentence("Go! Now."), "Go!");
    }

    #[test]
    fn no_boundary_yields_whole_text() {
        assert_eq!(first_sentence("no terminator here"), "no terminator here");
    }

    #[test]
    fn period_at_end_is_a_boundary() {
        assert_eq!(first_sentence("Just one."), "Just one.");
    }

    #[test]
    fn abbreviation_is_not_a_boundary() {
        assert_eq!(
            first_sentence("See F. for details. More."),
            "See F. for details."
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(first_sentence(""), "");
    }

    #[test]
    fn period_inside_word_is_not_a_boundary() {
        assert_eq!(first_sentence("v1.2 is out. Next."), "v1.2 is out.");
    }
}
