//! Monte Carlo simulation of independent Bernoulli trials
//!
//! Provides an empirical check on the exact distributions: each draw runs
//! every trial once and records the number of successes.

use crate::io::configuration::PROGRESS_REFRESH_INTERVAL;
use crate::io::error::{Result, invalid_argument};
use crate::math::validation::validate_probabilities;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Run every trial once and count the successes
pub fn sample_successes<R: Rng>(probabilities: &[f64], rng: &mut R) -> usize {
    probabilities
        .iter()
        .filter(|&&p| rng.random::<f64>() < p)
        .count()
}

/// Outcome counts observed over a batch of draws
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    counts: Vec<usize>,
    samples: usize,
}

impl Simulation {
    /// Number of draws performed
    pub const fn samples(&self) -> usize {
        self.samples
    }

    /// Number of draws that produced exactly `k` successes
    pub fn count(&self, k: usize) -> usize {
        self.counts.get(k).copied().unwrap_or(0)
    }

    /// Observed relative frequency of exactly `k` successes
    pub fn frequency(&self, k: usize) -> f64 {
        self.count(k) as f64 / self.samples as f64
    }

    /// Observed relative frequency of every outcome count `0..=n`
    pub fn frequencies(&self) -> Vec<f64> {
        (0..self.counts.len()).map(|k| self.frequency(k)).collect()
    }
}

/// Draw `samples` outcome counts from a seeded generator
///
/// `on_progress` receives the number of completed draws every
/// [`PROGRESS_REFRESH_INTERVAL`] draws and once more at the end.
///
/// # Errors
///
/// Returns `InvalidProbability` if any probability lies outside [0, 1], or
/// `InvalidArgument` if `samples` is zero
pub fn simulate<F>(
    probabilities: &[f64],
    samples: usize,
    seed: u64,
    mut on_progress: F,
) -> Result<Simulation>
where
    F: FnMut(usize),
{
    const OPERATION: &str = "simulate";
    validate_probabilities(OPERATION, probabilities.len(), probabilities)?;
    if samples == 0 {
        return Err(invalid_argument(OPERATION, &"at least one sample is required"));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut counts = vec![0; probabilities.len() + 1];

    for draw in 1..=samples {
        let successes = sample_successes(probabilities, &mut rng);
        if let Some(count) = counts.get_mut(successes) {
            *count += 1;
        }
        if draw.is_multiple_of(PROGRESS_REFRESH_INTERVAL) {
            on_progress(draw);
        }
    }
    on_progress(samples);

    Ok(Simulation { counts, samples })
}
