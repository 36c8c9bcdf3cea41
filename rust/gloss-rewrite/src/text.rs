//! Text services used by the pipeline stages.
//!
//! Rendering, tokenization and part-of-speech tagging sit behind a
//! trait so tests can substitute canned behavior and callers can plug
//! in a heavier tagger without touching the stage logic.

use gloss_prose::{Rendered, Tag};

/// Prose-facing operations the stage transitions depend on.
pub trait TextServices {
    /// Render markup into prose text plus its span structure.
    fn render(&self, markup: &str) -> Rendered;

    /// Split prose into words and tag each with a part of speech.
    fn tokenize_and_tag(&self, prose: &str) -> Vec<(String, Tag)>;

    /// The first sentence of already-collapsed prose.
    fn first_sentence(&self, prose: &str) -> String;
}

/// The stock implementation backed by [`gloss_prose`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardText;

impl TextServices for StandardText {
    fn render(&self, markup: &str) -> Rendered {
        gloss_prose::render(markup)
    }

    fn tokenize_and_tag(&self, prose: &str) -> Vec<(String, Tag)> {
        let mut tagged = Vec::new();
        for word in gloss_prose::words(prose) {
            // Slash-joined words tag as their parts.
            for part in word.split('/') {
                if part.is_empty() {
                    continue;
                }
                // An initialism like `F.` tags on its letter.
                let part = single_capital_trimmed(part);
                tagged.push((part.to_string(), gloss_prose::tag_word(part)));
            }
        }
        tagged
    }

    fn first_sentence(&self, prose: &str) -> String {
        gloss_prose::first_sentence(prose)
    }
}

fn single_capital_trimmed(part: &str) -> &str {
    let mut chars = part.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(c), Some('.'), None) if c.is_uppercase() => &part[..c.len_utf8()],
        _ => part,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slash_joined_words_split_into_parts() {
        let tagged = StandardText.tokenize_and_tag("input/output stream");
        let texts: Vec<&str> = tagged.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(texts, vec!["input", "output", "stream"]);
    }

    #[test]
    fn initialisms_tag_on_their_letter() {
        let tagged = StandardText.tokenize_and_tag("the F. key");
        let texts: Vec<&str> = tagged.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(texts, vec!["the", "F", "key"]);
        assert_eq!(tagged[1].1, Tag::ProperNoun);
    }

    #[test]
    fn tags_follow_the_word_tagger() {
        let tagged = StandardText.tokenize_and_tag("keys open doors.");
        assert_eq!(tagged[0].1, Tag::PluralNoun);
        assert_eq!(tagged[3], (".".to_string(), Tag::Period));
    }
}
