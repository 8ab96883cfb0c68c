//! Centralized error types for Credence.

use thiserror::Error;

/// Main error type for Credence operations.
#[derive(Error, Debug)]
pub enum CredenceError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Provider HTTP error ({status}): {message}")]
    Http { status: u16, message: String },

    #[error("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Credence operations.
pub type CredenceResult<T> = Result<T, CredenceError>;

impl CredenceError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a provider error.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }
}
