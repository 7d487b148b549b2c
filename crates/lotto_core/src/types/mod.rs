//! Core draw and rules types.
//!
//! This module provides:
//! - `rules`: Immutable draw-legality configuration and validation
//! - `draw`: Immutable draw value types with structural equality
//! - `error`: Structured error types for rules construction and validation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Rules`] from `rules`
//! - [`Draw`], [`WhiteCombo`] from `draw`
//! - [`DrawError`], [`RulesError`] from `error`

pub mod draw;
pub mod error;
pub mod rules;

// Re-export commonly used types at module level
pub use draw::{Draw, WhiteCombo};
pub use error::{DrawError, RulesError};
pub use rules::Rules;
