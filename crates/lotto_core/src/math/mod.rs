//! Exact integer mathematics for the draw space.

pub mod combinatorics;

pub use combinatorics::binomial;
