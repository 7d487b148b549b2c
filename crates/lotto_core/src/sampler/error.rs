//! Error types for the unique-draw generator.
//!
//! This module defines structured error types for configuration validation
//! and for the two distinct exhaustion failures of rejection sampling. The
//! two exhaustion kinds indicate different remedies, so they are separate
//! variants rather than message text.

use thiserror::Error;

/// Configuration error for the generator.
///
/// These errors occur at build time when invalid parameters are provided.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Draw count outside the valid range (at least 1).
    #[error("invalid draw count {0}: must be at least 1")]
    InvalidDrawCount(usize),

    /// Per-pick retry bound outside the valid range (at least 1).
    #[error("invalid retry bound {0}: must be at least 1")]
    InvalidRetryBound(u64),

    /// Invalid parameter value with name and description.
    #[error("invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Exhaustion failures of the rejection-sampling loop.
///
/// A generation call never returns a truncated sequence: it either yields
/// exactly the requested number of draws or fails with one of these.
///
/// # Remedies
///
/// - [`HistoryCoversSpace`](GenerateError::HistoryCoversSpace): the space
///   is fully covered; nothing can help short of changing the rules.
/// - [`TooManyTries`](GenerateError::TooManyTries): reduce the count, grow
///   the retry bound, or accept that the space is nearly exhausted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The history already covers the full sample space; sampling can
    /// never succeed and was not attempted.
    #[error("history already covers the full sample space of {space} draws")]
    HistoryCoversSpace {
        /// Total number of distinct draws under the rules.
        space: u128,
    },

    /// A single pick exceeded the consecutive-rejection bound.
    #[error("too many tries to find a new unique draw (gave up after {limit} consecutive rejections)")]
    TooManyTries {
        /// The configured per-pick bound that was exceeded.
        limit: u64,
    },
}
