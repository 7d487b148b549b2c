//! Pseudo-random number generator wrapper for draw sampling.
//!
//! This module provides [`DrawRng`], a seeded PRNG wrapper that samples
//! uniform draws from the full combinatorial space. The generator owns an
//! explicit PRNG instance rather than mutating process-global state, so
//! concurrent or repeated calls in the same process cannot interfere with
//! each other's reproducibility.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::types::{Draw, Rules, WhiteCombo};

/// Draw-sampling random number generator.
///
/// Wraps a [`StdRng`] seeded either from a caller-supplied value (for
/// reproducible sequences) or from OS entropy. Reproducibility is a
/// user-facing convenience, not a cryptographic guarantee.
///
/// # Examples
///
/// ```rust
/// use lotto_core::sampler::DrawRng;
/// use lotto_core::types::Rules;
///
/// let rules = Rules::powerball();
/// let mut a = DrawRng::from_seed(42);
/// let mut b = DrawRng::from_seed(42);
///
/// // Same seed produces identical draws.
/// assert_eq!(a.sample_draw(&rules), b.sample_draw(&rules));
/// ```
pub struct DrawRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation, when one was supplied.
    seed: Option<u64>,
}

impl DrawRng {
    /// Creates an RNG instance initialised with the given seed.
    ///
    /// The same seed always produces the same sequence of draws, enabling
    /// reproducible generation runs.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates an RNG instance seeded from OS entropy.
    ///
    /// Repeated calls in the same process yield different sequences.
    #[inline]
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Creates an RNG from an optional seed: seeded when `Some`, entropy
    /// otherwise.
    #[inline]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Returns the seed used for initialisation, if any.
    ///
    /// Useful for logging reproducibility information.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Samples a white combination: `white_count` distinct values chosen
    /// uniformly without replacement from `[1, white_pool]`, sorted
    /// ascending.
    pub fn sample_whites(&mut self, rules: &Rules) -> WhiteCombo {
        let mut picks: Vec<u16> =
            index::sample(&mut self.inner, rules.white_pool() as usize, rules.white_count())
                .into_iter()
                .map(|i| i as u16 + 1)
                .collect();
        picks.sort_unstable();
        WhiteCombo::from_sorted(picks)
    }

    /// Samples a red number uniformly from `[1, red_pool]`.
    #[inline]
    pub fn sample_red(&mut self, rules: &Rules) -> u16 {
        self.inner.gen_range(1..=rules.red_pool())
    }

    /// Samples one draw uniformly from the full combinatorial space.
    ///
    /// Whites and red are drawn independently; with the whites an
    /// unordered uniform subset, the result is uniform over
    /// [`Rules::total_space`] possibilities.
    pub fn sample_draw(&mut self, rules: &Rules) -> Draw {
        let whites = self.sample_whites(rules);
        let red = self.sample_red(rules);
        Draw::from_parts(whites, red)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampled_draws_are_valid() {
        let rules = Rules::powerball();
        let mut rng = DrawRng::from_seed(7);
        for _ in 0..1_000 {
            let draw = rng.sample_draw(&rules);
            assert!(rules
                .validate(draw.whites().numbers(), draw.red())
                .is_ok());
        }
    }

    #[test]
    fn test_whites_are_sorted_and_distinct() {
        let rules = Rules::powerball();
        let mut rng = DrawRng::from_seed(11);
        for _ in 0..1_000 {
            let whites = rng.sample_whites(&rules);
            let numbers = whites.numbers();
            assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let rules = Rules::powerball();
        let mut a = DrawRng::from_seed(42);
        let mut b = DrawRng::from_seed(42);
        for _ in 0..100 {
            assert_eq!(a.sample_draw(&rules), b.sample_draw(&rules));
        }
    }

    #[test]
    fn test_entropy_seeds_differ() {
        let rules = Rules::powerball();
        let mut a = DrawRng::from_entropy();
        let mut b = DrawRng::from_entropy();
        let seq_a: Vec<_> = (0..10).map(|_| a.sample_draw(&rules)).collect();
        let seq_b: Vec<_> = (0..10).map(|_| b.sample_draw(&rules)).collect();
        // Ten identical draws from independent entropy seeds is beyond
        // astronomically unlikely.
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn test_from_optional_seed() {
        assert_eq!(DrawRng::from_optional_seed(Some(5)).seed(), Some(5));
        assert_eq!(DrawRng::from_optional_seed(None).seed(), None);
    }

    #[test]
    fn test_red_covers_full_pool() {
        let rules = Rules::new(1, 1, 4).unwrap();
        let mut rng = DrawRng::from_seed(3);
        let mut seen = [false; 5];
        for _ in 0..1_000 {
            seen[rng.sample_red(&rules) as usize] = true;
        }
        assert!(!seen[0]);
        assert!(seen[1..=4].iter().all(|&s| s));
    }
}
