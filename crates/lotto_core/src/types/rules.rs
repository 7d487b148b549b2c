//! Draw legality rules.
//!
//! A [`Rules`] value defines the shape of a valid draw: how many distinct
//! "white" numbers are picked, the size of the white-number pool, and the
//! size of the separate "red" (bonus) pool. The configuration is immutable
//! once constructed and is the single source of truth for validation and
//! for the size of the combinatorial space.

use crate::math::combinatorics::binomial;

use super::error::{DrawError, RulesError};

/// Immutable draw-legality configuration.
///
/// Numbers range over `[1, pool]` for both pools. The domain default is the
/// Powerball configuration (5 whites from 69, 1 red from 26), but any
/// pick-N-of-M plus bonus-ball lottery can be expressed.
///
/// # Examples
///
/// ```rust
/// use lotto_core::types::Rules;
///
/// let rules = Rules::powerball();
/// assert_eq!(rules.white_count(), 5);
/// assert_eq!(rules.white_pool(), 69);
/// assert_eq!(rules.red_pool(), 26);
///
/// // A smaller lottery for the same machinery
/// let mini = Rules::new(2, 10, 5).unwrap();
/// assert_eq!(mini.total_space(), 45 * 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rules {
    /// Number of distinct white numbers per draw.
    white_count: usize,
    /// Size of the white-number pool; whites range over `[1, white_pool]`.
    white_pool: u16,
    /// Size of the red-number pool; the red ranges over `[1, red_pool]`.
    red_pool: u16,
}

impl Rules {
    /// Creates a rules configuration, checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::EmptyConfiguration`] when `white_count` or
    /// either pool is zero, and [`RulesError::WhiteCountExceedsPool`] when
    /// more whites are requested per draw than the pool holds.
    pub fn new(white_count: usize, white_pool: u16, red_pool: u16) -> Result<Self, RulesError> {
        if white_count == 0 || white_pool == 0 || red_pool == 0 {
            return Err(RulesError::EmptyConfiguration);
        }
        if white_count > white_pool as usize {
            return Err(RulesError::WhiteCountExceedsPool {
                count: white_count,
                pool: white_pool,
            });
        }
        Ok(Self {
            white_count,
            white_pool,
            red_pool,
        })
    }

    /// The Powerball configuration in force since October 2015: 5 distinct
    /// whites from `[1, 69]` plus one red from `[1, 26]`.
    #[inline]
    pub fn powerball() -> Self {
        Self {
            white_count: 5,
            white_pool: 69,
            red_pool: 26,
        }
    }

    /// Returns the number of distinct white numbers per draw.
    #[inline]
    pub fn white_count(&self) -> usize {
        self.white_count
    }

    /// Returns the size of the white-number pool.
    #[inline]
    pub fn white_pool(&self) -> u16 {
        self.white_pool
    }

    /// Returns the size of the red-number pool.
    #[inline]
    pub fn red_pool(&self) -> u16 {
        self.red_pool
    }

    /// Validates a candidate draw against these rules.
    ///
    /// This is a pure check with no side effects. The whites need not be
    /// sorted; only their shape and ranges are examined.
    ///
    /// # Errors
    ///
    /// - [`DrawError::WrongWhiteCount`] when the arity differs from
    ///   [`white_count`](Self::white_count)
    /// - [`DrawError::DuplicateWhite`] when any two whites are equal
    /// - [`DrawError::WhiteOutOfRange`] when a white falls outside
    ///   `[1, white_pool]`
    /// - [`DrawError::RedOutOfRange`] when the red falls outside
    ///   `[1, red_pool]`
    pub fn validate(&self, whites: &[u16], red: u16) -> Result<(), DrawError> {
        if whites.len() != self.white_count {
            return Err(DrawError::WrongWhiteCount {
                expected: self.white_count,
                got: whites.len(),
            });
        }
        for (i, &w) in whites.iter().enumerate() {
            if whites[..i].contains(&w) {
                return Err(DrawError::DuplicateWhite { number: w });
            }
        }
        for &w in whites {
            if w < 1 || w > self.white_pool {
                return Err(DrawError::WhiteOutOfRange {
                    number: w,
                    max: self.white_pool,
                });
            }
        }
        if red < 1 || red > self.red_pool {
            return Err(DrawError::RedOutOfRange {
                number: red,
                max: self.red_pool,
            });
        }
        Ok(())
    }

    /// Returns the exact count of distinct possible draws under these rules.
    ///
    /// Computed as `C(white_pool, white_count) * red_pool` in 128-bit
    /// integer arithmetic, with no floating-point rounding. The value is
    /// compared against exclusion-set sizes to detect exhaustion, so
    /// exactness matters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lotto_core::types::Rules;
    ///
    /// assert_eq!(Rules::powerball().total_space(), 292_201_338);
    /// ```
    #[inline]
    pub fn total_space(&self) -> u128 {
        binomial(self.white_pool as u64, self.white_count as u64) * self.red_pool as u128
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::powerball()
    }
}
