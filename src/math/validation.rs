//! Input checks shared by the distribution queries
//!
//! Trial and outcome counts are unsigned, so only probabilities and vector
//! lengths can be malformed.

use crate::io::configuration::PROBABILITY_SLACK;
use crate::io::error::{Result, computation_error, invalid_argument, invalid_probability};

/// Check that a single success probability is finite and within [0, 1]
///
/// # Errors
///
/// Returns `InvalidProbability` naming `operation` if `p` is NaN, infinite,
/// or outside the unit interval
pub fn validate_probability(operation: &'static str, p: f64) -> Result<f64> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(invalid_probability(operation, None, p))
    }
}

/// Check a per-trial probability vector against the trial count
///
/// # Errors
///
/// Returns `InvalidArgument` if `probabilities.len() != n`, or
/// `InvalidProbability` for the first entry outside [0, 1]
pub fn validate_probabilities(
    operation: &'static str,
    n: usize,
    probabilities: &[f64],
) -> Result<()> {
    if probabilities.len() != n {
        return Err(invalid_argument(
            operation,
            &format!(
                "probability vector has {} entries but {n} trials were requested",
                probabilities.len()
            ),
        ));
    }

    match probabilities
        .iter()
        .enumerate()
        .find(|&(_, &p)| !(p.is_finite() && (0.0..=1.0).contains(&p)))
    {
        Some((index, &value)) => Err(invalid_probability(operation, Some(index), value)),
        None => Ok(()),
    }
}

/// Clamp rounding noise on a computed probability back into [0, 1]
///
/// # Errors
///
/// Returns a computation error if the value is NaN or strays further from
/// the unit interval than accumulated rounding can explain
pub fn checked_probability(operation: &'static str, value: f64) -> Result<f64> {
    if value.is_nan() || value < -PROBABILITY_SLACK || value > 1.0 + PROBABILITY_SLACK {
        return Err(computation_error(
            operation,
            &format!("result {value} is not a probability"),
        ));
    }

    Ok(value.clamp(0.0, 1.0))
}
