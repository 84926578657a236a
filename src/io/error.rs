//! Error types for distribution queries and their command-line surface

use std::fmt;
use std::path::PathBuf;

/// Main error type for all distribution operations
#[derive(Debug)]
pub enum DistributionError {
    /// Query arguments are inconsistent with each other
    ///
    /// Raised when a probability vector's length differs from the trial count.
    InvalidArgument {
        /// Entry point that rejected the arguments
        operation: &'static str,
        /// Description of the inconsistency
        reason: String,
    },

    /// A success probability is NaN, infinite, or outside [0, 1]
    InvalidProbability {
        /// Entry point that rejected the probability
        operation: &'static str,
        /// Position of the offending vector entry, `None` for a scalar probability
        index: Option<usize>,
        /// The rejected value
        value: f64,
    },

    /// Command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for DistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { operation, reason } => {
                write!(f, "Invalid argument to {operation}: {reason}")
            }
            Self::InvalidProbability {
                operation,
                index,
                value,
            } => match index {
                Some(index) => write!(
                    f,
                    "Invalid probability in {operation}: entry {index} is {value}, expected a value in [0, 1]"
                ),
                None => write!(
                    f,
                    "Invalid probability in {operation}: {value} is not a value in [0, 1]"
                ),
            },
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for DistributionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for distribution results
pub type Result<T> = std::result::Result<T, DistributionError>;

/// Create an invalid argument error
pub fn invalid_argument(operation: &'static str, reason: &impl ToString) -> DistributionError {
    DistributionError::InvalidArgument {
        operation,
        reason: reason.to_string(),
    }
}

/// Create an invalid probability error
pub const fn invalid_probability(
    operation: &'static str,
    index: Option<usize>,
    value: f64,
) -> DistributionError {
    DistributionError::InvalidProbability {
        operation,
        index,
        value,
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DistributionError {
    DistributionError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> DistributionError {
    DistributionError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Attach a path and operation to a raw I/O error
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> DistributionError {
    DistributionError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
