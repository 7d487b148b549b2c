//! Immutable draw value types.
//!
//! A [`Draw`] pairs a sorted combination of white numbers with a red
//! (bonus) number. Equality and hashing are structural: two draws with the
//! same set of whites and the same red are the same draw regardless of the
//! order the whites were picked in, because the whites are normalised to
//! ascending order at construction.

use std::fmt;

use serde::Serialize;

use super::error::DrawError;
use super::rules::Rules;

/// A sorted combination of distinct white numbers.
///
/// Stored in ascending order so that combinations compare and hash equal
/// regardless of draw order. Immutable once constructed; the only public
/// way to obtain one is through [`Draw::new`] (validated) or the sampler
/// (valid by construction).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WhiteCombo(Vec<u16>);

impl WhiteCombo {
    /// Wraps numbers that are already sorted ascending and distinct.
    ///
    /// Callers inside the crate uphold the invariant; the debug assertion
    /// catches violations in test builds.
    pub(crate) fn from_sorted(numbers: Vec<u16>) -> Self {
        debug_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        Self(numbers)
    }

    /// Returns the white numbers in ascending order.
    #[inline]
    pub fn numbers(&self) -> &[u16] {
        &self.0
    }

    /// Returns the number of whites in the combination.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the combination holds no numbers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for WhiteCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02}", n)?;
        }
        Ok(())
    }
}

/// One lottery draw: a white combination plus the red number.
///
/// Immutable value type with structural equality and hashing; this is the
/// key stored in history/exclusion sets. Serialises as
/// `{"white": [...], "red": n}` for service layers.
///
/// # Examples
///
/// ```rust
/// use lotto_core::types::{Draw, Rules};
///
/// let rules = Rules::powerball();
/// let a = Draw::new(&[23, 4, 16, 8, 15], 22, &rules).unwrap();
/// let b = Draw::new(&[4, 8, 15, 16, 23], 22, &rules).unwrap();
///
/// // Same set of whites, same red: the same draw.
/// assert_eq!(a, b);
/// assert_eq!(a.whites().numbers(), &[4, 8, 15, 16, 23]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Draw {
    /// The sorted white combination.
    #[serde(rename = "white")]
    whites: WhiteCombo,
    /// The red (bonus) number.
    red: u16,
}

impl Draw {
    /// Validates a candidate against the rules and constructs the draw.
    ///
    /// The whites are sorted into ascending order; the input order carries
    /// no meaning.
    ///
    /// # Errors
    ///
    /// Returns the [`DrawError`] kind reported by [`Rules::validate`].
    pub fn new(whites: &[u16], red: u16, rules: &Rules) -> Result<Self, DrawError> {
        rules.validate(whites, red)?;
        let mut sorted = whites.to_vec();
        sorted.sort_unstable();
        Ok(Self {
            whites: WhiteCombo::from_sorted(sorted),
            red,
        })
    }

    /// Assembles a draw from parts the sampler has already made valid.
    pub(crate) fn from_parts(whites: WhiteCombo, red: u16) -> Self {
        Self { whites, red }
    }

    /// Returns the sorted white combination.
    #[inline]
    pub fn whites(&self) -> &WhiteCombo {
        &self.whites
    }

    /// Returns the red (bonus) number.
    #[inline]
    pub fn red(&self) -> u16 {
        self.red
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  PB {:02}", self.whites, self.red)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn rules() -> Rules {
        Rules::powerball()
    }

    #[test]
    fn test_new_sorts_whites() {
        let draw = Draw::new(&[23, 4, 16, 8, 15], 16, &rules()).unwrap();
        assert_eq!(draw.whites().numbers(), &[4, 8, 15, 16, 23]);
    }

    #[test]
    fn test_new_rejects_invalid_candidate() {
        assert!(Draw::new(&[1, 1, 2, 3, 4], 5, &rules()).is_err());
        assert!(Draw::new(&[1, 2, 3, 4, 5], 27, &rules()).is_err());
    }

    #[test]
    fn test_structural_equality_ignores_input_order() {
        let a = Draw::new(&[23, 4, 16, 8, 15], 20, &rules()).unwrap();
        let b = Draw::new(&[4, 8, 15, 16, 23], 20, &rules()).unwrap();
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_different_red_is_a_different_draw() {
        let a = Draw::new(&[4, 8, 15, 16, 23], 20, &rules()).unwrap();
        let b = Draw::new(&[4, 8, 15, 16, 23], 21, &rules()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_formats_zero_padded() {
        let draw = Draw::new(&[4, 8, 15, 16, 23], 9, &rules()).unwrap();
        assert_eq!(draw.to_string(), "04 08 15 16 23  PB 09");
    }

    #[test]
    fn test_serialises_as_white_and_red() {
        let draw = Draw::new(&[4, 8, 15, 16, 23], 9, &rules()).unwrap();
        let json = serde_json::to_value(&draw).unwrap();
        assert_eq!(json["white"], serde_json::json!([4, 8, 15, 16, 23]));
        assert_eq!(json["red"], 9);
    }

    #[test]
    fn test_white_combo_display() {
        let draw = Draw::new(&[4, 8, 15, 16, 23], 9, &rules()).unwrap();
        assert_eq!(draw.whites().to_string(), "04 08 15 16 23");
        assert_eq!(draw.whites().len(), 5);
        assert!(!draw.whites().is_empty());
    }
}
