//! Binomial coefficients computed without full factorials
//!
//! `n! / (n-k)!` collapses to the product `(n-k+1)·…·n`, and pairing each of
//! those factors with one factor of `k!` keeps every partial product equal to
//! a smaller binomial coefficient. Nothing grows past the final result.

/// Number of ways to choose `k` items from `n`, in floating point
///
/// Multiplies by `n-k+i` and divides by `i` in turn for `i` in `1..=k`, using
/// the shorter of `k` and `n - k`. Exact while the result fits in 53 bits.
/// Returns 0 when `k > n` and infinity once the result exceeds `f64::MAX`.
pub fn binomial_coefficient(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }

    let k = k.min(n - k);
    let offset = n - k;
    (1..=k).fold(1.0, |result, step| {
        result * (offset + step) as f64 / step as f64
    })
}

/// Natural logarithm of the binomial coefficient
///
/// Finite for every `k <= n`, including coefficients far beyond `f64::MAX`.
/// Returns negative infinity when `k > n`.
pub fn ln_binomial_coefficient(n: usize, k: usize) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }

    let k = k.min(n - k);
    let offset = n - k;
    (1..=k)
        .map(|step| ((offset + step) as f64 / step as f64).ln())
        .sum()
}
