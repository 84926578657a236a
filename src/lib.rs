//! Exact distributions over the number of successes in independent Bernoulli trials
//!
//! Covers trials sharing one success probability (Binomial) and trials with
//! individual success probabilities (Poisson Binomial). The Poisson Binomial
//! mass function is evaluated with a memoized recurrence whose table lives
//! only for the duration of one query, so every function here is pure and
//! safe to call concurrently.

#![forbid(unsafe_code)]

/// Memoized recurrence, mode search and Monte Carlo sampling
pub mod algorithm;
/// Command-line surface, configuration, reporting and error handling
pub mod io;
/// Combinatorics, validation and the distribution families
pub mod math;

pub use algorithm::mode::{Mode, UnimodalPmf, find_max};
pub use io::error::{DistributionError, Result};
pub use math::binomial::{Binomial, binomial_cdf, binomial_pmf};
pub use math::distribution::Distribution;
pub use math::poisson_binomial::{PoissonBinomial, poisson_binomial_cdf, poisson_binomial_pmf};
