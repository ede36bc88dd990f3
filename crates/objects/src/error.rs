//! Error types for the JSON codec.

use thiserror::Error;

/// Errors that can occur while encoding or decoding JSON.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The input was not valid JSON, or did not match the target type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Field assignment needs a JSON object on both sides.
    ///
    /// The string names what was found instead (`array`, `string`, ...).
    #[error("expected a JSON object, found {0}")]
    NotAnObject(String),
}
