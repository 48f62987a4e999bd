//! Error types for ev-core.

use thiserror::Error;

/// ev-core error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Parallel per-event sequences differ in length.
    #[error(
        "length mismatch in column '{column}' at event {event}: expected {expected}, got {got}"
    )]
    LengthMismatch {
        /// Column whose event has the unexpected length.
        column: String,
        /// Event index.
        event: usize,
        /// Length of the first referenced column for this event.
        expected: usize,
        /// Length actually found.
        got: usize,
    },

    /// Unknown, duplicate, or otherwise unusable column name.
    #[error("column error: {0}")]
    Column(String),

    /// Expression compile or evaluation error.
    #[error("expression error: {0}")]
    Expression(String),

    /// Invalid histogram axis or incompatible histogram operation.
    #[error("histogram error: {0}")]
    Histogram(String),

    /// Computation error.
    #[error("computation error: {0}")]
    Computation(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
