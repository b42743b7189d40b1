//! Error types for radar grid decoding and projection.

use thiserror::Error;

/// Result type alias using RadarError.
pub type RadarResult<T> = Result<T, RadarError>;

/// Failure while turning a compressed payload into a grid.
///
/// Decoding is all-or-nothing: when any of these is returned no rows are
/// handed back to the caller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    #[error("Invalid base64 payload: {0}")]
    Base64(String),

    #[error("Decompression failed: {0}")]
    Decompression(String),

    #[error("Decompressed payload is not valid UTF-8: {0}")]
    Utf8(String),

    #[error("Non-numeric field '{field}' at row {row}, column {column}")]
    NonNumeric {
        row: usize,
        column: usize,
        field: String,
    },
}

/// Primary error type for radar grid operations.
#[derive(Debug, Error)]
pub enum RadarError {
    // === Input Errors ===
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Invalid grid shape: expected {expected}, got {actual}")]
    InvalidGridShape { expected: String, actual: String },

    #[error("Invalid projection parameters: {0}")]
    InvalidParameters(String),

    // === Output Errors ===
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RadarError {
    /// Create an InvalidGridShape error.
    pub fn invalid_grid_shape(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::InvalidGridShape {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an InvalidParameters error.
    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }

    /// Whether the error was caused by the caller's input rather than by
    /// output encoding.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, RadarError::Serialization(_))
    }
}

impl From<serde_json::Error> for RadarError {
    fn from(err: serde_json::Error) -> Self {
        RadarError::Serialization(format!("JSON error: {}", err))
    }
}
