//! The Disambiguated → Final transition.
//!
//! Indexes the effect text: every whole-word occurrence of an effect
//! reference's short name in `takes` or `leaves` becomes a
//! `[eref index, ordinal]` pair, ordered by position in the text. The
//! ordinal counts occurrences of that same short name within the field,
//! so `( x x -- x )` keeps its three slots apart.

use crate::entry::{Disambiguated, ErefSlot, FinalEntry, OutboundSlot};
use crate::scan::word_occurrences;

/// The Disambiguated → Final transition.
pub fn advance(disambiguated: &Disambiguated) -> FinalEntry {
    FinalEntry {
        name: disambiguated.name.clone(),
        effect: disambiguated.effect.clone(),
        markdown: disambiguated.markdown.clone(),
        primer: disambiguated.primer.clone(),
        takes: index_field(disambiguated, &disambiguated.takes),
        leaves: index_field(disambiguated, &disambiguated.leaves),
        erefs: disambiguated
            .erefs
            .iter()
            .cloned()
            .map(ErefSlot::Inline)
            .collect(),
        outbound: disambiguated
            .outbound
            .iter()
            .cloned()
            .map(OutboundSlot::Named)
            .collect(),
    }
}

fn index_field(disambiguated: &Disambiguated, field: &str) -> Vec<[usize; 2]> {
    let mut found: Vec<(usize, usize, usize)> = Vec::new();
    for (index, eref) in disambiguated.erefs.iter().enumerate() {
        for (ordinal, start) in word_occurrences(field, &eref.short).into_iter().enumerate() {
            found.push((start, index, ordinal));
        }
    }
    found.sort_by_key(|&(start, _, _)| start);
    found
        .into_iter()
        .map(|(_, index, ordinal)| [index, ordinal])
        .collect()
}
