//! Effect pooling.
//!
//! Identical effect signatures recur across entries, so the final
//! document keeps one pool of `(short, long)` effects and replaces each
//! entry's inline references with `[pool index, owner index]` pointers.
//! Outbound references shrink to plain entry indices the same way.

use indexmap::IndexMap;
use serde::Serialize;

use crate::entry::{ErefSlot, FinalEntry, OutboundSlot};

/// A pooled effect signature and the entries referencing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolEffect {
    pub short: String,
    pub long: String,
    pub entities: Vec<usize>,
}

/// The assembled knowledge base: every entry in its final stage plus
/// the shared effect pool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Knowledge {
    pub entities: Vec<FinalEntry>,
    pub pool: Vec<PoolEffect>,
}

/// Pool the effects of a finished generation.
pub fn build(entities: Vec<FinalEntry>) -> Knowledge {
    build_with(entities, Vec::new())
}

/// Re-pool a knowledge base. Already pooled slots pass through
/// untouched, so this is a no-op on its own output.
pub fn rebuild(knowledge: Knowledge) -> Knowledge {
    build_with(knowledge.entities, knowledge.pool)
}

fn build_with(mut entities: Vec<FinalEntry>, existing: Vec<PoolEffect>) -> Knowledge {
    let names: IndexMap<String, usize> = entities
        .iter()
        .enumerate()
        .map(|(index, entity)| (entity.name.clone(), index))
        .collect();

    let mut pool: IndexMap<(String, String), PoolEffect> = existing
        .into_iter()
        .map(|effect| ((effect.short.clone(), effect.long.clone()), effect))
        .collect();

    for (index, entity) in entities.iter_mut().enumerate() {
        for slot in &mut entity.erefs {
            let ErefSlot::Inline(eref) = slot else {
                continue;
            };
            let Some(&owner) = names.get(&eref.owner) else {
                continue;
            };
            let entry = pool.entry((eref.short.clone(), eref.long.clone()));
            let position = entry.index();
            entry
                .or_insert_with(|| PoolEffect {
                    short: eref.short.clone(),
                    long: eref.long.clone(),
                    entities: Vec::new(),
                })
                .entities
                .push(index);
            *slot = ErefSlot::Pooled([position, owner]);
        }
        for slot in &mut entity.outbound {
            let OutboundSlot::Named(reference) = slot else {
                continue;
            };
            if let Some(&target) = names.get(&reference.name) {
                *slot = OutboundSlot::Index(target);
            }
        }
    }

    Knowledge {
        entities,
        pool: pool.into_values().collect(),
    }
}
