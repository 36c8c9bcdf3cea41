//! The Candidates → Disambiguated transition.
//!
//! First, candidates propagate along outbound references: a referenced
//! entry lends its candidates, their scores scaled by the reference
//! strength. Then candidate collisions (the same short name claimed by
//! several equally strong candidates) are resolved by asking nearby
//! entries, weighed on a one-dimensional gradient around the entry and
//! its same-as targets, which definition they favor. The surviving
//! candidates become the entry's effect references.

use indexmap::IndexMap;

use crate::candidate::{Candidate, CandidateKey};
use crate::entry::{Candidates, Disambiguated, Entry, Eref};
use crate::scan::contains_word;
use crate::world::World;

/// Gradient width: the scale of `exp(-((x - pivot) / WIDTH)^4)`.
const GRADIENT_WIDTH: f64 = 0.05;
/// Weights below this contribute nothing.
const WEIGHT_THRESHOLD: f64 = 0.05;

/// The Candidates → Disambiguated transition.
pub fn advance(stage: &Candidates, world: &World<'_>) -> Disambiguated {
    let mut candidates = stage.candidates.clone();
    let same_as_names = propagate_outbound(stage, world, &mut candidates);

    let collisions = detect_collisions(&candidates);
    if collisions.is_empty() {
        return to_disambiguated(stage, candidates);
    }

    let mut pivots = world.pivot_set_for(&same_as_names);
    pivots.push(world.pivot());
    let weights = gradient_weights(world.positions(), &pivots);

    for (colliding, group) in &collisions {
        let resolutions = weigh_definitions(world, &weights, colliding);
        let min_collision = group
            .iter()
            .map(|candidate| candidate.score)
            .fold(f64::INFINITY, f64::min);

        let mut likely: Vec<(Candidate, f64)> = resolutions.into_values().collect();
        likely.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut needle = None;
        for (resolution, score) in likely {
            if candidates.iter().any(|candidate| *candidate == resolution) {
                needle = Some(resolution);
                break;
            }
            if score <= min_collision {
                // Nothing nearby is any more confident than the
                // collision itself; refuse to resolve.
                break;
            }
        }
        match needle {
            Some(needle) => candidates.retain(|candidate| {
                *candidate == needle || candidate.short() != colliding.as_str()
            }),
            // Nobody settled the tie; the short name is dropped rather
            // than letting an arbitrary tied candidate claim it.
            None => candidates.retain(|candidate| candidate.short() != colliding.as_str()),
        }
    }

    to_disambiguated(stage, candidates)
}

/// Copy candidates in from referenced entries; returns the names of the
/// same-as targets, in outbound order.
fn propagate_outbound(
    stage: &Candidates,
    world: &World<'_>,
    candidates: &mut Vec<Candidate>,
) -> Vec<String> {
    let takes = &stage.base.takes;
    let leaves = &stage.base.leaves;
    let mut same_as_names = Vec::new();
    for reference in &stage.base.outbound {
        if reference.name == stage.base.name {
            continue;
        }
        if reference.same_as {
            same_as_names.push(reference.name.clone());
        }
        let Some(Entry::Candidates(donor)) = world.by_name(&reference.name) else {
            continue;
        };
        for candidate in &donor.candidates {
            if candidates.iter().any(|own| own == candidate) {
                continue;
            }
            if !contains_word(takes, candidate.short())
                && !contains_word(leaves, candidate.short())
            {
                continue;
            }
            let mut copy = candidate.clone();
            copy.scale(reference.strength);
            candidates.push(copy);
        }
    }
    same_as_names
}

/// Group candidates by short name; a short name whose top score is
/// shared by more than one candidate is a collision. The map holds the
/// tied winners only.
fn detect_collisions(candidates: &[Candidate]) -> IndexMap<String, Vec<Candidate>> {
    let mut by_short: IndexMap<String, Vec<Candidate>> = IndexMap::new();
    for candidate in candidates {
        by_short
            .entry(candidate.short().to_string())
            .or_default()
            .push(candidate.clone());
    }
    let mut collisions = IndexMap::new();
    for (short, group) in by_short {
        let top = group
            .iter()
            .map(|candidate| candidate.score)
            .fold(f64::NEG_INFINITY, f64::max);
        let winners: Vec<Candidate> = group
            .into_iter()
            .filter(|candidate| candidate.score == top)
            .collect();
        if winners.len() > 1 {
            collisions.insert(short, winners);
        }
    }
    collisions
}

/// Sum a flat-top gradient around each pivot over the world line.
/// `exp(-((x - pivot) / 0.05)^4)` decays fast but holds ~1 close to the
/// pivot; adding the per-pivot gradients and clamping at 1 joins nearby
/// tabletops into one long plateau.
fn gradient_weights(positions: &[f64], pivots: &[f64]) -> Vec<f64> {
    positions
        .iter()
        .map(|&x| {
            let mut weight = 0.0;
            for &pivot in pivots {
                let w = (-((x - pivot) / GRADIENT_WIDTH).powi(4)).exp();
                if w >= WEIGHT_THRESHOLD {
                    weight += w;
                }
            }
            weight.min(1.0)
        })
        .collect()
}

/// Ask every entry under the gradient to define `colliding`; duplicate
/// definitions accumulate their weighted scores.
fn weigh_definitions(
    world: &World<'_>,
    weights: &[f64],
    colliding: &str,
) -> IndexMap<CandidateKey, (Candidate, f64)> {
    let mut resolutions: IndexMap<CandidateKey, (Candidate, f64)> = IndexMap::new();
    for (position, &weight) in weights.iter().enumerate() {
        if weight <= WEIGHT_THRESHOLD {
            continue;
        }
        let Entry::Candidates(neighbor) = world.nth(position) else {
            continue;
        };
        let Some(definition) = neighbor
            .candidates
            .iter()
            .find(|candidate| candidate.short() == colliding)
        else {
            continue;
        };
        let weighted = definition.score * weight;
        resolutions
            .entry(definition.key())
            .and_modify(|(_, score)| *score += weighted)
            .or_insert_with(|| (definition.clone(), weighted));
    }
    resolutions
}

/// Fold the surviving candidates into effect references, weakest
/// first so a stronger duplicate short name wins the slot.
fn to_disambiguated(stage: &Candidates, mut candidates: Vec<Candidate>) -> Disambiguated {
    candidates.sort_by(|a, b| a.score.total_cmp(&b.score));
    let mut erefs: IndexMap<String, Eref> = IndexMap::new();
    for candidate in &candidates {
        erefs.insert(
            candidate.short().to_string(),
            Eref {
                short: candidate.short().to_string(),
                long: candidate.long(),
                owner: candidate.owner.clone(),
            },
        );
    }
    Disambiguated {
        name: stage.base.name.clone(),
        effect: stage.base.effect.clone(),
        markdown: stage.base.markdown.clone(),
        corpus: stage.base.corpus.clone(),
        primer: stage.base.primer.clone(),
        takes: stage.base.takes.clone(),
        leaves: stage.base.leaves.clone(),
        erefs: erefs.into_values().collect(),
        outbound: stage.base.outbound.clone(),
    }
}
