//! Binomial coefficients in exact integer arithmetic.
//!
//! The size of the draw space is compared against exclusion-set sizes to
//! detect exhaustion, so it must be computed exactly; floating-point
//! approximations are not acceptable here.

/// Computes the binomial coefficient `C(n, k)` exactly.
///
/// Uses the multiplicative formula with 128-bit intermediates. Each partial
/// product `C(n-k+i, i)` is itself a binomial coefficient, so every
/// division is exact and no rounding occurs.
///
/// Returns 0 when `k > n`, matching the combinatorial convention.
///
/// # Examples
///
/// ```rust
/// use lotto_core::math::binomial;
///
/// assert_eq!(binomial(69, 5), 11_238_513);
/// assert_eq!(binomial(5, 0), 1);
/// assert_eq!(binomial(5, 5), 1);
/// assert_eq!(binomial(4, 5), 0);
/// ```
pub fn binomial(n: u64, k: u64) -> u128 {
    if k > n {
        return 0;
    }
    // C(n, k) == C(n, n - k); iterate over the smaller side.
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 1..=k {
        result = result * (n - k + i) as u128 / i as u128;
    }
    result
}
