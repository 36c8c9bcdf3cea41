//! The rewriting driver.
//!
//! Entries advance in lockstep: each round, every entry is rewritten
//! once against a frozen view of the previous generation, so an entry
//! always sees its neighbors as they were, never as they are becoming.
//! The loop runs until a round changes nothing.

use indexmap::IndexMap;

use crate::entry::{Entry, FinalEntry, RawEntry};
use crate::error::RewriteError;
use crate::text::TextServices;
use crate::world::World;

/// Rounds allowed before giving up on a fixpoint. The pipeline takes a
/// fixed number of stages plus one confirming round, so hitting this
/// means a transition keeps producing fresh output.
pub const DEFAULT_ROUND_CAP: usize = 16;

/// Drives generations of entries to their fixpoint.
#[derive(Debug)]
pub struct Driver<T> {
    text: T,
    round_cap: usize,
}

impl<T: TextServices> Driver<T> {
    pub fn new(text: T) -> Self {
        Driver {
            text,
            round_cap: DEFAULT_ROUND_CAP,
        }
    }

    /// Override the round cap.
    pub fn with_round_cap(mut self, round_cap: usize) -> Self {
        self.round_cap = round_cap;
        self
    }

    /// Rewrite `entries` until every one is terminal.
    pub fn run(&self, entries: Vec<RawEntry>) -> Result<Vec<FinalEntry>, RewriteError> {
        let mut generation: Vec<Entry> = entries.into_iter().map(Entry::Raw).collect();
        let mut names = name_index(&generation);

        let mut settled = false;
        for round in 0..self.round_cap {
            tracing::debug!(round, entries = generation.len(), "rewriting round");
            let mut next = Vec::with_capacity(generation.len());
            let mut modified = false;
            for index in 0..generation.len() {
                let world = World::new(&generation, &names, index);
                let advanced = generation[index].advance(&world, &self.text);
                modified = modified || advanced != generation[index];
                next.push(advanced);
            }
            generation = next;
            names = name_index(&generation);
            if !modified {
                settled = true;
                break;
            }
        }
        if !settled {
            return Err(RewriteError::NoFixpoint {
                rounds: self.round_cap,
            });
        }

        let mut finals = Vec::with_capacity(generation.len());
        for entry in generation {
            match entry {
                Entry::Final(done) => finals.push(done),
                // A generation only settles once every entry is
                // terminal; non-final stages always rewrite to a new
                // value.
                _ => {
                    return Err(RewriteError::NoFixpoint {
                        rounds: self.round_cap,
                    });
                }
            }
        }
        Ok(finals)
    }
}

fn name_index(generation: &[Entry]) -> IndexMap<String, usize> {
    generation
        .iter()
        .enumerate()
        .map(|(index, entry)| (entry.name().to_string(), index))
        .collect()
}
