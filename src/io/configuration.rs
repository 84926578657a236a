//! Numeric constants and runtime configuration defaults

/// Absolute tolerance used when checking that a distribution sums to one
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

// Rounding noise can push a sum of probabilities marginally past 1
/// Slack allowed on computed probabilities before they are reported as invalid
pub const PROBABILITY_SLACK: f64 = 1e-12;

// Default values for configurable parameters
/// Fixed seed for reproducible simulation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of Monte Carlo draws per simulation
pub const DEFAULT_SAMPLES: usize = 100_000;

// Output settings
/// Number of decimal digits printed for probabilities
pub const PROBABILITY_DISPLAY_PRECISION: usize = 10;

/// Header line written at the top of exported distribution tables
pub const TABLE_HEADER: &str = "k,pmf,cdf";

// Progress bar display settings
/// Simulations with at most this many draws finish without a progress bar
pub const MAX_UNTRACKED_SAMPLES: usize = 50_000;
/// Number of draws between progress bar refreshes
pub const PROGRESS_REFRESH_INTERVAL: usize = 1_000;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
