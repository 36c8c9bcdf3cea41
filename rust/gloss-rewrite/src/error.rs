//! Error types for the rewriting pipeline.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RewriteError {
    /// The generation kept changing past the configured round cap.
    /// Rather than truncate silently, the driver reports how far it got.
    #[error("generation did not reach a fixpoint within {rounds} rounds")]
    NoFixpoint { rounds: usize },
}
