//! Mathematical core of the crate

/// Binomial distribution queries
pub mod binomial;
/// Binomial coefficients without full factorials
pub mod combinatorics;
/// Unified view over both distribution families
pub mod distribution;
/// Poisson Binomial distribution queries
pub mod poisson_binomial;
/// Probability and length validation
pub mod validation;
