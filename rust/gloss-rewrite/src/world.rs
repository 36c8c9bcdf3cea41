//! The coordinate world — an immutable per-round view of one generation.
//!
//! Every entry of the current generation is assigned a position on the
//! normalized line `[0, 1]`: the `i`-th of `N` entries sits at `i/(N-1)`
//! (`0.0` when there is a single entry). The positions carry no domain
//! meaning by themselves; the same-as graph is what turns this bare line
//! into a proximity metric for gradient voting.
//!
//! A world is built once per `(round, entry)` pair with the pivot at that
//! entry's index, passed by reference into the transition, and dropped.
//! It never observes this round's outputs.

use indexmap::IndexMap;

use crate::entry::Entry;

pub struct World<'a> {
    generation: &'a [Entry],
    names: &'a IndexMap<String, usize>,
    space: Vec<f64>,
    pivot: f64,
}

impl<'a> World<'a> {
    /// Build a world over `generation` pivoted at index `offset`.
    pub fn new(
        generation: &'a [Entry],
        names: &'a IndexMap<String, usize>,
        offset: usize,
    ) -> Self {
        let space = linspace(generation.len());
        let pivot = space.get(offset).copied().unwrap_or(0.0);
        World {
            generation,
            names,
            space,
            pivot,
        }
    }

    /// The `n`-th member of the generation, counted from the left.
    pub fn nth(&self, n: usize) -> &Entry {
        &self.generation[n]
    }

    /// All positions on the normalized line, in generation order.
    pub fn positions(&self) -> &[f64] {
        &self.space
    }

    /// The pivot entry's position.
    pub fn pivot(&self) -> f64 {
        self.pivot
    }

    /// Whether `name` names an entry of this generation.
    pub fn is_named(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Look an entry up by name.
    pub fn by_name(&self, name: &str) -> Option<&Entry> {
        self.names.get(name).map(|&index| &self.generation[index])
    }

    /// Positions of every entry whose name is in `names`, in generation
    /// order.
    pub fn pivot_set_for(&self, names: &[String]) -> Vec<f64> {
        self.generation
            .iter()
            .enumerate()
            .filter(|(_, entry)| names.iter().any(|name| name == entry.name()))
            .map(|(index, _)| self.space[index])
            .collect()
    }
}

fn linspace(n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![0.0; n];
    }
    (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
}
