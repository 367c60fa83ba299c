//! Error types produced by resolution and the lookup factory.

use thiserror::Error;

/// Errors that can occur while building a lookup or resolving entries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConflateError {
    /// The lookup factory was given something other than a mapping.
    #[error("variables must be a mapping, got {found}")]
    InvalidVariables {
        /// Short description of the rejected entry's kind.
        found: &'static str,
    },

    /// Cycle detected while following a chain of references.
    #[error("cyclic reference detected: {cycle}")]
    CyclicReference {
        /// Chain of reference paths participating in the cycle.
        cycle: String,
    },
}
