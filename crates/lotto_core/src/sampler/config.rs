//! Generation run configuration.
//!
//! This module provides the configuration type and builder for one call to
//! the unique-draw generator.

use super::error::ConfigError;

/// Default per-pick consecutive-rejection bound.
///
/// A heuristic constant with no derivation from the space size; it exists
/// to bound worst-case latency, and callers with unusually full exclusion
/// sets are expected to tune it.
pub const DEFAULT_MAX_TRIES_PER_PICK: u64 = 500_000;

/// Configuration for one generation call.
///
/// Immutable once built. Use [`GeneratorConfigBuilder`] to construct
/// instances.
///
/// # Examples
///
/// ```rust
/// use lotto_core::sampler::{GeneratorConfig, DEFAULT_MAX_TRIES_PER_PICK};
///
/// let config = GeneratorConfig::builder()
///     .count(5)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.count(), 5);
/// assert_eq!(config.seed(), Some(42));
/// assert_eq!(config.max_tries_per_pick(), DEFAULT_MAX_TRIES_PER_PICK);
/// ```
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Number of draws to produce.
    count: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Consecutive-rejection bound per pick.
    max_tries_per_pick: u64,
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Returns the number of draws to produce.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the optional seed for reproducibility.
    ///
    /// `Some(seed)` makes the whole output sequence reproducible for the
    /// same history, rules and count; `None` seeds the generator from OS
    /// entropy so repeated calls differ.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the per-pick consecutive-rejection bound.
    #[inline]
    pub fn max_tries_per_pick(&self) -> u64 {
        self.max_tries_per_pick
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `count` or `max_tries_per_pick` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::InvalidDrawCount(self.count));
        }
        if self.max_tries_per_pick == 0 {
            return Err(ConfigError::InvalidRetryBound(self.max_tries_per_pick));
        }
        Ok(())
    }
}

/// Builder for [`GeneratorConfig`].
///
/// Provides a fluent API with validation at build time.
#[derive(Clone, Debug)]
pub struct GeneratorConfigBuilder {
    count: Option<usize>,
    seed: Option<u64>,
    max_tries_per_pick: u64,
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self {
            count: None,
            seed: None,
            max_tries_per_pick: DEFAULT_MAX_TRIES_PER_PICK,
        }
    }
}

impl GeneratorConfigBuilder {
    /// Sets the number of draws to produce (at least 1).
    #[inline]
    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the seed for reproducible output.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the per-pick consecutive-rejection bound.
    #[inline]
    pub fn max_tries_per_pick(mut self, max_tries_per_pick: u64) -> Self {
        self.max_tries_per_pick = max_tries_per_pick;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `count` is not set or any parameter is
    /// invalid.
    pub fn build(self) -> Result<GeneratorConfig, ConfigError> {
        let count = self.count.ok_or(ConfigError::InvalidParameter {
            name: "count",
            value: "must be specified".to_string(),
        })?;

        let config = GeneratorConfig {
            count,
            seed: self.seed,
            max_tries_per_pick: self.max_tries_per_pick,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_valid() {
        let config = GeneratorConfig::builder().count(5).build().unwrap();

        assert_eq!(config.count(), 5);
        assert_eq!(config.seed(), None);
        assert_eq!(config.max_tries_per_pick(), DEFAULT_MAX_TRIES_PER_PICK);
    }

    #[test]
    fn test_config_builder_with_seed() {
        let config = GeneratorConfig::builder().count(1).seed(42).build().unwrap();
        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_config_builder_with_retry_bound() {
        let config = GeneratorConfig::builder()
            .count(1)
            .max_tries_per_pick(1_000)
            .build()
            .unwrap();
        assert_eq!(config.max_tries_per_pick(), 1_000);
    }

    #[test]
    fn test_config_invalid_zero_count() {
        let result = GeneratorConfig::builder().count(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidDrawCount(0))));
    }

    #[test]
    fn test_config_invalid_zero_retry_bound() {
        let result = GeneratorConfig::builder()
            .count(1)
            .max_tries_per_pick(0)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidRetryBound(0))));
    }

    #[test]
    fn test_config_missing_count() {
        let result = GeneratorConfig::builder().seed(1).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "count", .. })
        ));
    }
}
