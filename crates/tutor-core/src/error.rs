//! Error types for tutor operations.

use thiserror::Error;

/// Errors that can occur during a completion attempt.
///
/// None of these are fatal to a conversation: the orchestrator
/// substitutes a per-language fallback response whenever a completion
/// attempt fails.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The request could not be sent or timed out.
    #[error("network error: {0}")]
    Network(String),

    /// The service returned a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be parsed.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The response parsed but carried no usable content.
    #[error("response contained no content")]
    EmptyResponse,
}

/// Errors that can occur when constructing or driving the tutor.
#[derive(Debug, Error)]
pub enum TutorError {
    /// Required configuration is missing or invalid.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A completion backend failed to initialize.
    #[error("completion backend error: {0}")]
    Completion(#[from] CompletionError),
}
