use thiserror::Error;

/// Errors produced by the standard-dialect decoders.
///
/// Only the pipe form can fail: its framing has a hard structural
/// precondition. The binary form always yields a bundle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StandardError {
    /// The pipe payload did not carry the minimum `TAG|version|block`
    /// structure.
    #[error("invalid pipe structure: expected at least 3 fields, found {found}")]
    InvalidStructure {
        /// Number of pipe-delimited fields actually present.
        found: usize,
    },
}
