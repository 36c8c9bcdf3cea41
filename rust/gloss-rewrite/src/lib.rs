//! A staged rewriting pipeline that turns named entries with markdown
//! descriptions into a cross-referenced knowledge base.
//!
//! Every entry walks the same stages, one per round, against a frozen
//! view of the previous generation:
//!
//! ```text
//! Raw → Draft → Segmented → Rendered → Tagged → Candidates
//!     → Disambiguated → Final
//! ```
//!
//! Once a round changes nothing, the finished generation is pooled into
//! a [`Knowledge`] document: entries plus a shared table of effect
//! signatures.
//!
//! ```
//! use gloss_rewrite::{RawEntry, compile};
//!
//! let knowledge = compile(vec![RawEntry {
//!     name: "door".into(),
//!     description: "( -- D ): The Door. Openable.".into(),
//! }])?;
//! assert_eq!(knowledge.entities[0].primer, "The Door.");
//! # Ok::<(), gloss_rewrite::RewriteError>(())
//! ```

pub mod candidate;
pub mod driver;
pub mod entry;
pub mod error;
pub mod extract;
pub mod finalize;
pub mod pool;
pub mod render;
pub mod resolve;
pub mod scan;
pub mod segment;
pub mod tag;
pub mod text;
pub mod world;

pub use candidate::Candidate;
pub use driver::Driver;
pub use entry::{Entry, FinalEntry, RawEntry};
pub use error::RewriteError;
pub use pool::{Knowledge, PoolEffect};
pub use text::{StandardText, TextServices};
pub use world::World;

/// Rewrite `entries` to their fixpoint and pool the result.
pub fn compile(entries: Vec<RawEntry>) -> Result<Knowledge, RewriteError> {
    let finals = Driver::new(StandardText).run(entries)?;
    Ok(pool::build(finals))
}
