//! Error types for rules construction and draw validation.
//!
//! This module provides:
//! - `RulesError`: Errors from rules configuration construction
//! - `DrawError`: Errors from validating a candidate draw against the rules
//!
//! Every failure mode is a distinct variant so that callers can branch on
//! the kind programmatically rather than matching on message text.

use thiserror::Error;

/// Errors from constructing a [`Rules`](super::Rules) configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// More white numbers requested per draw than the pool can supply.
    #[error("white count {count} exceeds white pool size {pool}")]
    WhiteCountExceedsPool {
        /// Requested number of white numbers per draw.
        count: usize,
        /// Size of the white-number pool.
        pool: u16,
    },

    /// A zero white count or an empty pool leaves nothing to draw.
    #[error("rules require at least one white number and non-empty pools")]
    EmptyConfiguration,
}

/// Errors from validating a candidate draw against a rules configuration.
///
/// Used defensively by history loading to discard malformed records, and
/// available to any caller that accepts draws from an untrusted source.
///
/// # Examples
/// ```
/// use lotto_core::types::{DrawError, Rules};
///
/// let rules = Rules::powerball();
/// let err = rules.validate(&[1, 1, 2, 3, 4], 5).unwrap_err();
/// assert_eq!(err, DrawError::DuplicateWhite { number: 1 });
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// Wrong number of white numbers in the candidate.
    #[error("expected {expected} white numbers, got {got}")]
    WrongWhiteCount {
        /// Number of whites the rules require.
        expected: usize,
        /// Number of whites supplied.
        got: usize,
    },

    /// The same white number appears more than once.
    #[error("duplicate white number {number}")]
    DuplicateWhite {
        /// The repeated number.
        number: u16,
    },

    /// A white number falls outside `[1, white_pool]`.
    #[error("white number {number} out of range [1, {max}]")]
    WhiteOutOfRange {
        /// The offending number.
        number: u16,
        /// Upper bound of the white pool.
        max: u16,
    },

    /// The red number falls outside `[1, red_pool]`.
    #[error("red number {number} out of range [1, {max}]")]
    RedOutOfRange {
        /// The offending number.
        number: u16,
        /// Upper bound of the red pool.
        max: u16,
    },
}
