//! Word tokenization.
//!
//! Splits prose into word tokens, separating leading and trailing
//! punctuation into tokens of their own so that a downstream tagger can
//! classify them. Two deliberate exceptions:
//!
//! - a token that is entirely punctuation (like `...`) stays whole;
//! - a single capital letter with a trailing period (`F.`) stays whole —
//!   it is almost certainly an abbreviation, not a sentence end.

/// Punctuation split off the edges of a word.
const EDGE_PUNCT: &[char] = &[
    '.', ',', ':', ';', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'', '`', '*', '_',
];

/// Tokenize `text` into words and edge punctuation, in order.
pub fn words(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for raw in text.split_whitespace() {
        split_word(raw, &mut tokens);
    }
    tokens
}

fn split_word(raw: &str, tokens: &mut Vec<String>) {
    if raw.chars().all(|c| !c.is_alphanumeric()) {
        tokens.push(raw.to_string());
        return;
    }
    if is_capital_abbreviation(raw) {
        tokens.push(raw.to_string());
        return;
    }

    let mut leading = Vec::new();
    let mut trailing = Vec::new();
    let mut core = raw;
    while let Some(ch) = core.chars().next() {
        if EDGE_PUNCT.contains(&ch) {
            leading.push(ch.to_string());
            core = &core[ch.len_utf8()..];
        } else {
            break;
        }
    }
    while let Some(ch) = core.chars().next_back() {
        if EDGE_PUNCT.contains(&ch) {
            trailing.push(ch.to_string());
            core = &core[..core.len() - ch.len_utf8()];
        } else {
            break;
        }
    }
    trailing.reverse();

    tokens.extend(leading);
    if !core.is_empty() {
        tokens.push(core.to_string());
    }
    tokens.extend(trailing);
}

/// `F.` — a single uppercase letter followed by a period.
fn is_capital_abbreviation(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(first), Some('.'), None) if first.is_ascii_uppercase()
    )
}
