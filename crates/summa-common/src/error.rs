//! Error types for summa-launch crates.

use thiserror::Error;

/// Result type alias using SummaError.
pub type SummaResult<T> = Result<T, SummaError>;

/// Primary error type for run configuration operations.
#[derive(Debug, Error)]
pub enum SummaError {
    // === Validation Errors ===
    #[error("Invalid identifier '{value}': {message}")]
    InvalidIdentifier { value: String, message: String },

    #[error("Invalid run period: start {start} is after end {end}")]
    InvalidPeriod { start: String, end: String },

    #[error("Invalid date '{value}': {message}")]
    InvalidDate { value: String, message: String },

    #[error("Unrecognized model decision: {0}")]
    UnknownDecision(String),

    #[error("Invalid choice '{choice}' for decision '{decision}' (allowed: {allowed})")]
    InvalidChoice {
        decision: String,
        choice: String,
        allowed: String,
    },

    // === Filesystem Errors ===
    #[error("Settings directory does not exist: {0}")]
    MissingSettingsDir(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
