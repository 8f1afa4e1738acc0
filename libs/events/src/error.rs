//! Error types for event decoding.

use thiserror::Error;

/// Errors that can occur when decoding a webhook payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload is not a JSON document.
    #[error("invalid JSON payload: {0}")]
    Syntax(String),

    /// The payload is JSON but not an event envelope.
    #[error("invalid event envelope: {0}")]
    Envelope(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            DecodeError::Envelope(err.to_string())
        } else {
            DecodeError::Syntax(err.to_string())
        }
    }
}
