//! The unique-draw generator.
//!
//! Produces draws that are individually rules-valid, absent from the
//! caller-supplied history, and pairwise distinct within one call, by
//! rejection sampling against a growing working copy of the exclusion set.

use std::collections::HashSet;

use crate::types::{Draw, Rules};

use super::config::GeneratorConfig;
use super::error::GenerateError;
use super::rng::DrawRng;

/// Generator of draws guaranteed absent from a historical exclusion set.
///
/// The generator is a pure, single-threaded, non-suspending computation:
/// it performs no I/O and completes or fails within one synchronous call.
/// The caller's history set is read but never mutated; uniqueness within a
/// call is tracked in a private working copy.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use lotto_core::sampler::{GeneratorConfig, UniqueDrawGenerator};
/// use lotto_core::types::{Draw, Rules};
///
/// let rules = Rules::powerball();
/// let history: HashSet<Draw> =
///     [Draw::new(&[4, 8, 15, 16, 23], 20, &rules).unwrap()].into();
///
/// let generator = UniqueDrawGenerator::new(rules);
/// let config = GeneratorConfig::builder().count(2).seed(1).build().unwrap();
///
/// let draws = generator.generate(&history, &config).unwrap();
/// assert_eq!(draws.len(), 2);
/// assert!(draws.iter().all(|d| !history.contains(d)));
/// assert_ne!(draws[0], draws[1]);
/// ```
pub struct UniqueDrawGenerator {
    /// The rules the produced draws conform to.
    rules: Rules,
}

impl UniqueDrawGenerator {
    /// Creates a generator for the given rules.
    #[inline]
    pub fn new(rules: Rules) -> Self {
        Self { rules }
    }

    /// Returns the rules this generator draws under.
    #[inline]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Generates `config.count()` draws absent from `history` and from
    /// each other, in acceptance order.
    ///
    /// The PRNG is seeded from `config.seed()` when present (making the
    /// whole output sequence reproducible for the same history and count)
    /// and from OS entropy otherwise.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::HistoryCoversSpace`] before any sampling when
    ///   the history is at least as large as the total space.
    /// - [`GenerateError::TooManyTries`] when a single pick exceeds the
    ///   configured consecutive-rejection bound.
    ///
    /// On failure no partial output is returned.
    pub fn generate(
        &self,
        history: &HashSet<Draw>,
        config: &GeneratorConfig,
    ) -> Result<Vec<Draw>, GenerateError> {
        let mut rng = DrawRng::from_optional_seed(config.seed());
        self.generate_with_rng(history, config.count(), config.max_tries_per_pick(), &mut rng)
    }

    /// Generates draws using a caller-supplied PRNG instance.
    ///
    /// This is the lower-level entry point for callers that thread one RNG
    /// through several operations.
    pub fn generate_with_rng(
        &self,
        history: &HashSet<Draw>,
        count: usize,
        max_tries_per_pick: u64,
        rng: &mut DrawRng,
    ) -> Result<Vec<Draw>, GenerateError> {
        let space = self.rules.total_space();
        if history.len() as u128 >= space {
            return Err(GenerateError::HistoryCoversSpace { space });
        }

        // Working copy: grows by one member per accepted pick so that two
        // picks in the same call can never coincide. The caller's set is
        // left untouched.
        let mut seen: HashSet<Draw> = history.clone();
        let mut results: Vec<Draw> = Vec::with_capacity(count);
        let mut tries: u64 = 0;

        while results.len() < count {
            if tries > max_tries_per_pick {
                return Err(GenerateError::TooManyTries {
                    limit: max_tries_per_pick,
                });
            }
            let candidate = rng.sample_draw(&self.rules);
            tries += 1;
            if seen.contains(&candidate) {
                continue;
            }
            tries = 0;
            seen.insert(candidate.clone());
            results.push(candidate);
        }

        Ok(results)
    }
}
