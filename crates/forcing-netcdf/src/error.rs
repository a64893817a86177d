//! Error types for forcing-file loading.

use thiserror::Error;

/// Result type for forcing loader operations.
pub type ForcingResult<T> = Result<T, ForcingError>;

/// Error types for forcing-file loading.
#[derive(Debug, Error)]
pub enum ForcingError {
    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Missing required variable, dimension or attribute
    #[error("Missing required data: {0}")]
    MissingData(String),

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    /// Malformed CF time units string
    #[error("Invalid time units: {0}")]
    InvalidTimeUnits(String),
}
