//! Shared error types for the crate
//!
//! Validation itself reports findings as data and never fails; only the
//! symbol-snapshot loading edge produces errors.

use thiserror::Error;

/// Main error type for hintcheck operations
#[derive(Debug, Error)]
pub enum Error {
    /// JSON errors from snapshot (de)serialization
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
