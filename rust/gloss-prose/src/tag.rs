//! Rule-based lexical tagging.
//!
//! A small English tagger: closed word classes are looked up in fixed
//! lists (case-insensitively, so `The` is still a determiner), numerals
//! and punctuation are classified by shape, capitalized words default to
//! proper nouns, and the rest is guessed from suffixes with a plain-noun
//! fallback. No training, no context — the pipeline's scoring heuristics
//! only need the coarse category.

/// A lexical category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Noun,
    ProperNoun,
    PluralNoun,
    Verb,
    VerbThirdPerson,
    VerbPast,
    Gerund,
    Adjective,
    Adverb,
    Determiner,
    Conjunction,
    Preposition,
    Pronoun,
    PossessivePronoun,
    Modal,
    To,
    Cardinal,
    WhAdverb,
    Period,
    Comma,
    Colon,
    OpenParen,
    CloseParen,
    Symbol,
}

impl Tag {
    /// Whether this is any noun category.
    pub fn is_noun(self) -> bool {
        matches!(
            self,
            Tag::Noun | Tag::ProperNoun | Tag::PluralNoun
        )
    }

    /// Whether this is the plural common-noun category.
    pub fn is_plural(self) -> bool {
        self == Tag::PluralNoun
    }
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "both", "either", "neither", "another",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet"];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "from", "as", "into", "onto", "over", "under",
    "about", "above", "below", "between", "through", "during", "against", "within", "without",
    "across", "behind", "beyond", "among", "upon", "via", "per", "like",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "itself",
    "themselves", "one", "something", "anything", "everything", "nothing",
];

const POSSESSIVES: &[&str] = &["my", "your", "his", "its", "our", "their", "whose"];

const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would",
];

const WH_ADVERBS: &[&str] = &["how", "when", "where", "why", "whenever", "wherever"];

/// Common third-person singular verb forms; suffix rules would misread
/// most of these as plural nouns.
const THIRD_PERSON_VERBS: &[&str] = &[
    "is", "has", "does", "takes", "leaves", "gives", "gets", "makes", "puts", "sets", "adds",
    "removes", "drops", "pushes", "pops", "opens", "closes", "returns", "holds", "keeps",
    "uses", "sees", "means", "contains", "creates", "becomes", "goes", "comes", "works",
    "expects", "accepts", "produces", "yields", "stores", "loads", "saves", "reads", "writes",
    "moves", "copies", "replaces", "converts", "turns", "forms", "builds", "breaks", "fails",
    "dies", "lives", "asks", "tells", "calls", "runs", "looks", "finds", "checks", "tests",
];

/// Tag a single token.
pub fn tag_word(word: &str) -> Tag {
    if let Some(tag) = tag_punctuation(word) {
        return tag;
    }
    if is_cardinal(word) {
        return Tag::Cardinal;
    }

    let lower = word.to_lowercase();
    let lower = lower.as_str();
    if lower == "to" {
        return Tag::To;
    }
    if DETERMINERS.contains(&lower) {
        return Tag::Determiner;
    }
    if CONJUNCTIONS.contains(&lower) {
        return Tag::Conjunction;
    }
    if PREPOSITIONS.contains(&lower) {
        return Tag::Preposition;
    }
    if POSSESSIVES.contains(&lower) {
        return Tag::PossessivePronoun;
    }
    if PRONOUNS.contains(&lower) {
        return Tag::Pronoun;
    }
    if MODALS.contains(&lower) {
        return Tag::Modal;
    }
    if WH_ADVERBS.contains(&lower) {
        return Tag::WhAdverb;
    }
    if THIRD_PERSON_VERBS.contains(&lower) {
        return Tag::VerbThirdPerson;
    }

    if word.chars().next().is_some_and(|c| c.is_uppercase()) {
        return Tag::ProperNoun;
    }

    tag_by_suffix(lower)
}

fn tag_punctuation(word: &str) -> Option<Tag> {
    if word.chars().any(|c| c.is_alphanumeric()) {
        return None;
    }
    let first = word.chars().next()?;
    Some(match first {
        '.' | '!' | '?' => Tag::Period,
        ',' => Tag::Comma,
        ':' | ';' => Tag::Colon,
        '(' | '[' | '{' => Tag::OpenParen,
        ')' | ']' | '}' => Tag::CloseParen,
        _ => Tag::Symbol,
    })
}

fn is_cardinal(word: &str) -> bool {
    let mut saw_digit = false;
    for c in word.chars() {
        match c {
            '0'..='9' => saw_digit = true,
            '.' | ',' | '-' => {}
            _ => return false,
        }
    }
    saw_digit
}

fn tag_by_suffix(lower: &str) -> Tag {
    let len = lower.len();
    if len > 4 && lower.ends_with("ing") {
        return Tag::Gerund;
    }
    if len > 3 && lower.ends_with("ed") {
        return Tag::VerbPast;
    }
    if len > 3 && lower.ends_with("ly") {
        return Tag::Adverb;
    }
    if len > 4 && (lower.ends_with("able") || lower.ends_with("ible") || lower.ends_with("ous")) {
        return Tag::Adjective;
    }
    if len > 2
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        return Tag::PluralNoun;
    }
    Tag::Noun
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_classes() {
        assert_eq!(tag_word("the"), Tag::Determiner);
        assert_eq!(tag_word("and"), Tag::Conjunction);
        assert_eq!(tag_word("of"), Tag::Preposition);
        assert_eq!(tag_word("it"), Tag::Pronoun);
        assert_eq!(tag_word("its"), Tag::PossessivePronoun);
        assert_eq!(tag_word("should"), Tag::Modal);
        assert_eq!(tag_word("to"), Tag::To);
        assert_eq!(tag_word("when"), Tag::WhAdverb);
    }

    #[test]
    fn closed_classes_ignore_case() {
        assert_eq!(tag_word("The"), Tag::Determiner);
        assert_eq!(tag_word("Takes"), Tag::VerbThirdPerson);
    }

    #[test]
    fn capitalized_defaults_to_proper_noun() {
        assert_eq!(tag_word("Form"), Tag::ProperNoun);
    }

    #[test]
    fn suffix_guesses() {
        assert_eq!(tag_word("doors"), Tag::PluralNoun);
        assert_eq!(tag_word("class"), Tag::Noun);
        assert_eq!(tag_word("opening"), Tag::Gerund);
        assert_eq!(tag_word("opened"), Tag::VerbPast);
        assert_eq!(tag_word("quickly"), Tag::Adverb);
        assert_eq!(tag_word("door"), Tag::Noun);
    }

    #[test]
    fn numbers_and_punctuation() {
        assert_eq!(tag_word("42"), Tag::Cardinal);
        assert_eq!(tag_word("3.14"), Tag::Cardinal);
        assert_eq!(tag_word("."), Tag::Period);
        assert_eq!(tag_word("..."), Tag::Period);
        assert_eq!(tag_word(","), Tag::Comma);
        assert_eq!(tag_word("("), Tag::OpenParen);
        assert_eq!(tag_word("--"), Tag::Symbol);
    }

    #[test]
    fn third_person_verbs() {
        assert_eq!(tag_word("leaves"), Tag::VerbThirdPerson);
        assert_eq!(tag_word("is"), Tag::VerbThirdPerson);
    }
}
