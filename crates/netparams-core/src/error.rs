//! Error types
//!
//! A single error enum shared by the value type and the collection.

use thiserror::Error;

/// Errors raised by network parameter construction and collection access
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No matrix stored at frequency {frequency} Hz")]
    NotFound { frequency: f64 },

    #[error("Collection is empty")]
    EmptyCollection,

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, NetworkError>;
