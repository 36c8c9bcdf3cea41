//! Candidates — scored, provisional effect fragments.
//!
//! A candidate spans one or more tagged prose tokens. As tokens are
//! appended it grows a running short name from their leading characters:
//! for `Struct view form` the running prefixes are `S`, `Sv`, `Svf`.
//! Equality and hashing are defined on the ordered token texts alone, so
//! two candidates built along different paths compare equal when they
//! cover the same words — scores merge by summation instead of colliding.

use std::hash::{Hash, Hasher};

use gloss_prose::Tag;

use crate::scan::contains_word;
use crate::tag::skip_tagged;

/// Penalty for a token from the skip categories or skip-word list.
pub const SCORE_SKIP: f64 = -0.5;
/// Bonus for a capitalized noun constituent.
pub const SCORE_CAPITAL_NOUN: f64 = 0.2;
/// Extra penalty when that noun is plural.
pub const SCORE_PLURAL_NOUN: f64 = -0.1;
/// Flat bonus for a candidate that survived the purge.
pub const SCORE_REFERENCED: f64 = 1.0;

/// One constituent token of a candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Constituent {
    pub text: String,
    pub tag: Tag,
    /// The short name accumulated up to and including this token.
    pub prefix: String,
}

/// A scored effect fragment owned by one entry.
#[derive(Debug, Clone)]
pub struct Candidate {
    tokens: Vec<Constituent>,
    prefix: String,
    pub score: f64,
    pub owner: String,
}

/// A hashable identity for a candidate: its ordered token texts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateKey(Vec<String>);

impl Candidate {
    pub fn new(owner: &str) -> Self {
        Candidate {
            tokens: Vec::new(),
            prefix: String::new(),
            score: 0.0,
            owner: owner.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Constituent] {
        &self.tokens
    }

    /// Append a constituent, extending the short name and applying the
    /// score deltas.
    pub fn push(&mut self, text: &str, tag: Tag) {
        if let Some(first) = text.chars().next() {
            self.prefix.push(first);
            if skip_tagged(text, tag) {
                self.score += SCORE_SKIP;
            }
            if first.is_uppercase() && tag.is_noun() {
                self.score += SCORE_CAPITAL_NOUN;
                if tag.is_plural() {
                    self.score += SCORE_PLURAL_NOUN;
                }
            }
        }
        self.tokens.push(Constituent {
            text: text.to_string(),
            tag,
            prefix: self.prefix.clone(),
        });
    }

    /// This candidate's short name: the concatenated leading characters.
    pub fn short(&self) -> &str {
        &self.prefix
    }

    /// This candidate's long name: the token texts joined by spaces.
    pub fn long(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Bonus for being named somewhere in the effect text.
    pub fn referenced(&mut self) {
        self.score += SCORE_REFERENCED;
    }

    /// Fold another (structurally equal) candidate's score into this one.
    pub fn merge_score(&mut self, other: &Candidate) {
        self.score += other.score;
    }

    /// Scale the score, e.g. by an outbound reference's strength.
    pub fn scale(&mut self, factor: f64) {
        self.score *= factor;
    }

    /// Truncate to the last constituent whose running prefix occurs as a
    /// whole word in `takes` or `leaves`. Returns `true` when no
    /// constituent matches at all — the candidate is then worthless and
    /// the caller drops it wholesale.
    pub fn purge(&mut self, takes: &str, leaves: &str) -> bool {
        let last_match = self
            .tokens
            .iter()
            .rposition(|t| contains_word(takes, &t.prefix) || contains_word(leaves, &t.prefix));
        match last_match {
            None => true,
            Some(index) => {
                self.tokens.truncate(index + 1);
                self.prefix = self.tokens[index].prefix.clone();
                false
            }
        }
    }

    /// The token-text identity used for equality, hashing and merging.
    pub fn key(&self) -> CandidateKey {
        CandidateKey(self.tokens.iter().map(|t| t.text.clone()).collect())
    }

    fn texts(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.text.as_str())
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.texts().eq(other.texts())
    }
}

impl Eq for Candidate {}

impl Hash for Candidate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for text in self.texts() {
            text.hash(state);
        }
    }
}
