//! Poisson Binomial distribution: independent trials with individual success probabilities

use crate::algorithm::mode::UnimodalPmf;
use crate::algorithm::recurrence::PoissonBinomialRecurrence;
use crate::io::error::Result;
use crate::math::validation::{checked_probability, validate_probabilities};

/// Probability of exactly `k` successes in `n` trials with per-trial probabilities `p`
///
/// Allocates a fresh memo table for the query. Returns 0 for `k > n`.
///
/// # Errors
///
/// Returns `InvalidArgument` if `p.len() != n` and `InvalidProbability` if
/// any entry of `p` lies outside [0, 1]
pub fn poisson_binomial_pmf(k: usize, n: usize, p: &[f64]) -> Result<f64> {
    const OPERATION: &str = "poisson_binomial_pmf";
    validate_probabilities(OPERATION, n, p)?;

    let mut engine = PoissonBinomialRecurrence::new(p);
    checked_probability(OPERATION, engine.outcome_probability(k))
}

/// Probability of at most `k` successes in `n` trials with per-trial probabilities `p`
///
/// One memo table is shared by every term of the sum. Returns 1 for `k >= n`
/// (up to rounding).
///
/// # Errors
///
/// Returns `InvalidArgument` if `p.len() != n` and `InvalidProbability` if
/// any entry of `p` lies outside [0, 1]
pub fn poisson_binomial_cdf(k: usize, n: usize, p: &[f64]) -> Result<f64> {
    const OPERATION: &str = "poisson_binomial_cdf";
    validate_probabilities(OPERATION, n, p)?;

    let mut engine = PoissonBinomialRecurrence::new(p);
    checked_probability(OPERATION, engine.cumulative_probability(k))
}

/// Validated per-trial success probabilities
#[derive(Debug, Clone, PartialEq)]
pub struct PoissonBinomial {
    probabilities: Vec<f64>,
}

impl PoissonBinomial {
    /// Create a distribution with one trial per probability
    ///
    /// # Errors
    ///
    /// Returns `InvalidProbability` if any entry lies outside [0, 1]
    pub fn new(probabilities: Vec<f64>) -> Result<Self> {
        Self::with_trials(probabilities.len(), probabilities)
    }

    /// Create a distribution, checking the vector against an expected trial count
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `probabilities.len() != n` and
    /// `InvalidProbability` if any entry lies outside [0, 1]
    pub fn with_trials(n: usize, probabilities: Vec<f64>) -> Result<Self> {
        validate_probabilities("PoissonBinomial::new", n, &probabilities)?;
        Ok(Self { probabilities })
    }

    /// Per-trial success probabilities
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Expected number of successes
    pub fn mean(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// Variance of the number of successes
    pub fn variance(&self) -> f64 {
        self.probabilities.iter().map(|p| p * (1.0 - p)).sum()
    }

    /// Probability of at most `k` successes
    ///
    /// # Errors
    ///
    /// Returns a computation error if rounding drives the sum out of [0, 1]
    pub fn cdf(&self, k: usize) -> Result<f64> {
        poisson_binomial_cdf(k, self.trials(), &self.probabilities)
    }

    /// Probability of every outcome count `0..=n`, sharing one memo table
    ///
    /// # Errors
    ///
    /// Returns a computation error if any entry is not a probability
    pub fn pmf_table(&self) -> Result<Vec<f64>> {
        let mut engine = PoissonBinomialRecurrence::new(&self.probabilities);
        (0..=self.trials())
            .map(|k| {
                checked_probability("PoissonBinomial::pmf_table", engine.outcome_probability(k))
            })
            .collect()
    }
}

// Poisson Binomial distributions are log-concave, hence unimodal
impl UnimodalPmf for PoissonBinomial {
    fn trials(&self) -> usize {
        self.probabilities.len()
    }

    fn pmf(&self, k: usize) -> Result<f64> {
        poisson_binomial_pmf(k, self.trials(), &self.probabilities)
    }
}
