//! Binomial distribution: independent trials sharing one success probability

use crate::algorithm::mode::UnimodalPmf;
use crate::io::error::Result;
use crate::math::combinatorics::{binomial_coefficient, ln_binomial_coefficient};
use crate::math::validation::{checked_probability, validate_probability};

/// Probability of exactly `k` successes in `n` trials with success probability `p`
///
/// Computes `C(n, k) · p^k · (1-p)^(n-k)`, switching to log space when a
/// factor leaves the normal floating-point range. Returns 0 for `k > n`.
///
/// # Errors
///
/// Returns `InvalidProbability` if `p` lies outside [0, 1]
pub fn binomial_pmf(k: usize, n: usize, p: f64) -> Result<f64> {
    const OPERATION: &str = "binomial_pmf";
    let p = validate_probability(OPERATION, p)?;
    checked_probability(OPERATION, unchecked_pmf(k, n, p))
}

/// Probability of at most `k` successes in `n` trials with success probability `p`
///
/// Sums the mass function over `0..=k`; for `k >= n` the sum is 1 up to rounding.
///
/// # Errors
///
/// Returns `InvalidProbability` if `p` lies outside [0, 1]
pub fn binomial_cdf(k: usize, n: usize, p: f64) -> Result<f64> {
    const OPERATION: &str = "binomial_cdf";
    let p = validate_probability(OPERATION, p)?;
    let total = (0..=k.min(n)).map(|i| unchecked_pmf(i, n, p)).sum();
    checked_probability(OPERATION, total)
}

fn unchecked_pmf(k: usize, n: usize, p: f64) -> f64 {
    if k > n {
        return 0.0;
    }
    // Certain outcomes; the logarithms below would be -inf
    if p <= 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if p >= 1.0 {
        return if k == n { 1.0 } else { 0.0 };
    }

    let coefficient = binomial_coefficient(n, k);
    let successes = p.powf(k as f64);
    let failures = (1.0 - p).powf((n - k) as f64);
    if coefficient.is_finite() && successes.is_normal() && failures.is_normal() {
        return coefficient * successes * failures;
    }

    // Large n: the coefficient overflows or a power underflows on its own
    let ln_mass = ((n - k) as f64).mul_add(
        (-p).ln_1p(),
        (k as f64).mul_add(p.ln(), ln_binomial_coefficient(n, k)),
    );
    ln_mass.exp()
}

/// Trial count and shared success probability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial {
    n: usize,
    p: f64,
}

impl Binomial {
    /// Create a distribution over `n` trials with success probability `p`
    ///
    /// # Errors
    ///
    /// Returns `InvalidProbability` if `p` lies outside [0, 1]
    pub fn new(n: usize, p: f64) -> Result<Self> {
        let p = validate_probability("Binomial::new", p)?;
        Ok(Self { n, p })
    }

    /// Success probability of each trial
    pub const fn p(&self) -> f64 {
        self.p
    }

    /// Expected number of successes
    pub fn mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    /// Variance of the number of successes
    pub fn variance(&self) -> f64 {
        self.n as f64 * self.p * (1.0 - self.p)
    }

    /// Probability of at most `k` successes
    ///
    /// # Errors
    ///
    /// Returns a computation error if rounding drives the sum out of [0, 1]
    pub fn cdf(&self, k: usize) -> Result<f64> {
        binomial_cdf(k, self.n, self.p)
    }

    /// The same trials expressed as a per-trial probability vector
    pub fn probabilities(&self) -> Vec<f64> {
        vec![self.p; self.n]
    }
}

impl UnimodalPmf for Binomial {
    fn trials(&self) -> usize {
        self.n
    }

    fn pmf(&self, k: usize) -> Result<f64> {
        binomial_pmf(k, self.n, self.p)
    }
}
