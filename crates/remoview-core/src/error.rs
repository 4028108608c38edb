//! Error types for RemoView

use thiserror::Error;

use crate::models::GuessError;

/// Shown to participants whenever submitted guesses are rejected locally
pub const INVALID_GUESSES_MESSAGE: &str =
    "Please fill all psychic fields and avoid generic terms like \"air\" or \"sky\".";

/// Shown to participants whenever the remote round trip fails, whatever the cause
pub const SESSION_FAILED_MESSAGE: &str =
    "An error occurred during validation. The connection may be unstable. Please try again.";

#[derive(Debug, Error)]
pub enum RemoviewError {
    // Local validation errors
    #[error("Invalid guesses: {0}")]
    InvalidGuesses(#[from] GuessError),

    #[error("Invalid coordinates ({lat}, {lng}): {reason}")]
    InvalidCoordinates { lat: f64, lng: f64, reason: String },

    // Remote errors. `Generation` and `MalformedResponse` carry detail for logs;
    // callers of the session layer only ever see `SessionProcessingFailed`.
    #[error("Generation failed: {reason}")]
    Generation { reason: String },

    #[error("Malformed model response: {reason}")]
    MalformedResponse { reason: String },

    #[error("Failed to process remote viewing session")]
    SessionProcessingFailed,

    // History errors
    #[error("Session not found: {id}")]
    SessionNotFound { id: String },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RemoviewError {
    /// Whether the error came from the remote inference round trip
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            RemoviewError::Generation { .. }
                | RemoviewError::MalformedResponse { .. }
                | RemoviewError::SessionProcessingFailed
        )
    }
}

impl From<serde_json::Error> for RemoviewError {
    fn from(err: serde_json::Error) -> Self {
        RemoviewError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RemoviewError>;
