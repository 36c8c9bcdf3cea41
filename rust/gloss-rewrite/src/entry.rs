//! Entries and their stages.
//!
//! An entry progresses through seven transitions, each producing a new
//! immutable value that accumulates fields on top of the previous stage:
//!
//! ```text
//! Raw → Draft → Segmented → Rendered → Tagged → Candidates
//!     → Disambiguated → Final
//! ```
//!
//! `Final` is terminal: advancing it yields an equal value, which is what
//! lets the driver detect the fixpoint by structural comparison.

use gloss_prose::Tag;
use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::text::TextServices;
use crate::world::World;
use crate::{extract, finalize, render, resolve, segment, tag};

/// An input record, straight from the framing layer. Both fields are
/// required; a record missing either fails the whole run at decode time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawEntry {
    pub name: String,
    pub description: String,
}

/// Stage 1: the destructured record.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub name: String,
    pub description: String,
}

/// Stage 2: effect segment found, takes/leaves peeled, prose separated.
#[derive(Debug, Clone, PartialEq)]
pub struct Segmented {
    pub name: String,
    /// The recorded effect segment text.
    pub effect: String,
    pub takes: String,
    pub leaves: String,
    /// The unrendered markdown remainder.
    pub prose: String,
}

/// An outbound reference: a detected mention of another entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reference {
    pub name: String,
    /// 1.0 for a same-as alias, 0.5 for a plain mention.
    pub strength: f64,
    #[serde(rename = "same-as")]
    pub same_as: bool,
}

/// Stage 3: prose rendered; corpus, primer and outbound references known.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub name: String,
    pub effect: String,
    pub takes: String,
    pub leaves: String,
    /// The rendered markdown.
    pub markdown: String,
    /// Flat prose with cross-references replaced by `...`.
    pub corpus: String,
    /// First sentence of the rendered markdown.
    pub primer: String,
    pub outbound: Vec<Reference>,
}

/// A kept corpus token with its lexical category.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedWord {
    pub text: String,
    pub tag: Tag,
}

/// Stage 4: the corpus as a gap-preserving tagged token sequence.
/// `None` is a gap — a skipped token that still breaks adjacency.
#[derive(Debug, Clone, PartialEq)]
pub struct Tagged {
    pub base: Rendered,
    pub tokens: Vec<Option<TaggedWord>>,
}

/// Stage 5: extracted, scored, purged and merged candidates, sorted
/// ascending by score.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidates {
    pub base: Rendered,
    pub candidates: Vec<Candidate>,
}

/// An effect reference retained by an entry, still inline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Eref {
    pub short: String,
    pub long: String,
    pub owner: String,
}

/// Stage 6: collisions resolved (or dropped), candidates flattened into
/// an ordered eref list.
#[derive(Debug, Clone, PartialEq)]
pub struct Disambiguated {
    pub name: String,
    pub effect: String,
    pub markdown: String,
    pub corpus: String,
    pub primer: String,
    pub takes: String,
    pub leaves: String,
    pub erefs: Vec<Eref>,
    pub outbound: Vec<Reference>,
}

/// An eref slot: inline before pooling, a `[pool, owner]` pointer after.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ErefSlot {
    Pooled([usize; 2]),
    Inline(Eref),
}

/// An outbound slot: a named reference before pooling, an entry index
/// after.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutboundSlot {
    Index(usize),
    Named(Reference),
}

/// Stage 7, terminal: the per-entry output record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalEntry {
    pub name: String,
    pub effect: String,
    pub markdown: String,
    pub primer: String,
    /// `[eref index, occurrence ordinal]` pairs, ordered by position in
    /// the takes string.
    pub takes: Vec<[usize; 2]>,
    /// Same, for the leaves string.
    pub leaves: Vec<[usize; 2]>,
    pub erefs: Vec<ErefSlot>,
    pub outbound: Vec<OutboundSlot>,
}

/// An entry at some stage of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Raw(RawEntry),
    Draft(Draft),
    Segmented(Segmented),
    Rendered(Rendered),
    Tagged(Tagged),
    Candidates(Candidates),
    Disambiguated(Disambiguated),
    Final(FinalEntry),
}

impl Entry {
    /// The entry's name; unique within a generation and stable across
    /// stages.
    pub fn name(&self) -> &str {
        match self {
            Entry::Raw(e) => &e.name,
            Entry::Draft(e) => &e.name,
            Entry::Segmented(e) => &e.name,
            Entry::Rendered(e) => &e.name,
            Entry::Tagged(e) => &e.base.name,
            Entry::Candidates(e) => &e.base.name,
            Entry::Disambiguated(e) => &e.name,
            Entry::Final(e) => &e.name,
        }
    }

    /// Whether this entry has reached the terminal stage.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Entry::Final(_))
    }

    /// Advance this entry by exactly one stage against its world view.
    /// Terminal entries pass through unchanged.
    pub fn advance(&self, world: &World<'_>, text: &impl TextServices) -> Entry {
        match self {
            Entry::Raw(raw) => Entry::Draft(Draft {
                name: raw.name.clone(),
                description: raw.description.clone(),
            }),
            Entry::Draft(draft) => Entry::Segmented(segment::advance(draft)),
            Entry::Segmented(segmented) => Entry::Rendered(render::advance(segmented, world, text)),
            Entry::Rendered(rendered) => Entry::Tagged(tag::advance(rendered, text)),
            Entry::Tagged(tagged) => Entry::Candidates(extract::advance(tagged)),
            Entry::Candidates(candidates) => {
                Entry::Disambiguated(resolve::advance(candidates, world))
            }
            Entry::Disambiguated(disambiguated) => {
                Entry::Final(finalize::advance(disambiguated))
            }
            Entry::Final(_) => self.clone(),
        }
    }
}
