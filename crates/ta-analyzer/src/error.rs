//! Error types for ta-analyzer.
//!
//! Processor failures are isolated per processor: the analyzer logs them and
//! keeps dispatching, so these errors never cross `handle`'s boundary.

use thiserror::Error;

/// Errors a [`PathProcessor`][crate::PathProcessor] may report from `consume`.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Other(String),
}

/// Alias for `Result<T, ProcessorError>`.
pub type ProcessorResult<T> = Result<T, ProcessorError>;
