//! Mode search for unimodal probability mass functions
//!
//! The search walks outcome counts upward and stops at the first decrease.
//! That is only correct when the mass function has a single peak over
//! `0..=n`; a multimodal function yields its first local maximum instead.

use crate::io::error::Result;

/// Most likely outcome count and its probability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mode {
    /// Outcome count attaining the peak, `None` if no probability exceeded 0
    pub max: Option<usize>,
    /// Probability at the peak
    pub p: f64,
}

/// Distributions whose mass function has a single peak over `0..=n`
///
/// Implementing this trait asserts unimodality, which is what makes the
/// early-exit search in [`find_max`] valid.
pub trait UnimodalPmf {
    /// Number of trials
    fn trials(&self) -> usize;

    /// Probability of exactly `k` successes
    ///
    /// # Errors
    ///
    /// Propagates validation or computation failures of the distribution
    fn pmf(&self, k: usize) -> Result<f64>;

    /// Most likely outcome count
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by [`UnimodalPmf::pmf`]
    fn mode(&self) -> Result<Mode> {
        find_max(self.trials(), self, |k, _, distribution| distribution.pmf(k))
    }
}

/// Locate the outcome count maximizing `pmf(k, n, p)` over `k in 0..=n`
///
/// Ties keep the earliest outcome count; the walk stops as soon as a
/// probability falls below the best seen so far. `pmf` must be unimodal.
///
/// # Errors
///
/// Propagates the first error returned by `pmf`
pub fn find_max<P, F>(n: usize, p: P, mut pmf: F) -> Result<Mode>
where
    P: Copy,
    F: FnMut(usize, usize, P) -> Result<f64>,
{
    let mut best = Mode { max: None, p: 0.0 };

    for k in 0..=n {
        let probability = pmf(k, n, p)?;
        if probability > best.p {
            best = Mode {
                max: Some(k),
                p: probability,
            };
        } else if probability < best.p {
            break;
        }
    }

    Ok(best)
}
