//! The Rendered → Tagged transition and the shared skip sets.
//!
//! Tagging filters the corpus down to tokens that could plausibly be
//! part of an effect name. Rejected tokens are not dropped; they leave
//! a gap in their place, so that a short name like `Fd` cannot match
//! across `Foo or derived` just because `or` went missing.

use gloss_prose::Tag;

use crate::entry::{Rendered, Tagged, TaggedWord};
use crate::text::TextServices;

/// Tokens skipped by spelling, lowercased.
pub const SKIP_WORDS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "not", "try", "need",
    "using", "utilizing", "(", ")", "[", "]", "{", "}",
];

/// Categories that never name effect stuff.
pub fn skip_category(tag: Tag) -> bool {
    matches!(
        tag,
        Tag::Determiner
            | Tag::VerbThirdPerson
            | Tag::Conjunction
            | Tag::Period
            | Tag::Comma
            | Tag::Colon
            | Tag::Pronoun
            | Tag::PossessivePronoun
            | Tag::To
            | Tag::Cardinal
            | Tag::OpenParen
            | Tag::CloseParen
            | Tag::Modal
            | Tag::WhAdverb
    )
}

/// Categories skipped even when the token is capitalized.
pub fn skip_even_capitalized(tag: Tag) -> bool {
    matches!(tag, Tag::Preposition)
}

/// Whether a token is skippable by category or spelling.
pub fn skip_tagged(text: &str, tag: Tag) -> bool {
    skip_category(tag) || SKIP_WORDS.contains(&text.to_lowercase().as_str())
}

/// An uppercase letter, `_` or `-` past the first character. Such a
/// token may be a misspelled short name missing its backticks; it is
/// neither kept nor trusted as a gap-free word.
fn has_interior_break(text: &str) -> bool {
    text.chars()
        .skip(1)
        .any(|c| c == '_' || c == '-' || c.is_uppercase())
}

/// The Rendered → Tagged transition.
pub fn advance(rendered: &Rendered, text: &impl TextServices) -> Tagged {
    let mut tokens = Vec::new();
    for (word, tag) in text.tokenize_and_tag(&rendered.corpus) {
        if has_interior_break(&word) {
            tokens.push(None);
            continue;
        }
        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        if capitalized {
            if skip_even_capitalized(tag) {
                tokens.push(None);
            } else {
                tokens.push(Some(TaggedWord { text: word, tag }));
            }
            continue;
        }
        if skip_tagged(&word, tag) {
            tokens.push(None);
            continue;
        }
        tokens.push(Some(TaggedWord { text: word, tag }));
    }
    Tagged {
        base: rendered.clone(),
        tokens,
    }
}
