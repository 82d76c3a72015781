//! The error type shared by the whole crate

use crate::algorithms::Algorithm;

/// Everything that can go wrong while generating data, sorting or reporting
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested algorithm name is not known
    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),
    /// A dataset or batch parameter is out of range
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
    /// An algorithm produced output that is not non-descending
    #[error("{algorithm} left the sequence unsorted, elements {first} and {second} are out of order")]
    SortInvariantViolation {
        algorithm: Algorithm,
        first: usize,
        second: usize,
    },
    /// Writing a report failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Writing the csv report failed
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Shorthand for [`Error::InvalidParameter`]
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type defaulting to [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;
