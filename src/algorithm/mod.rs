/// Query-scoped memo table for the Poisson Binomial recurrence
pub mod memo;
/// Mode search for unimodal mass functions
pub mod mode;
/// Memoized Poisson Binomial recurrence
pub mod recurrence;
/// Monte Carlo simulation of Bernoulli trials
pub mod sampling;
