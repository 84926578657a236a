/// Command-line argument parsing and query dispatch
pub mod cli;
/// Numeric constants and runtime defaults
pub mod configuration;
/// Error types for distribution operations
pub mod error;
/// Progress display for simulations
pub mod progress;
/// Text and CSV rendering of results
pub mod report;
