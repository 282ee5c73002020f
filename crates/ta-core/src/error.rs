//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into `TaError`
//! via `From` impls, or keep them separate and wrap `TaError` as one variant.
//! Both patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `ta-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TaError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ta-*` crates.
pub type TaResult<T> = Result<T, TaError>;
