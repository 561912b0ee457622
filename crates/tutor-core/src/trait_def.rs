//! The Completion trait definition.

use async_trait::async_trait;

use crate::error::CompletionError;

/// A trait for chat-completion backends.
///
/// Implementations send an assembled system prompt to a completion
/// service and return the generated text. This trait is object-safe
/// and can be used with `Box<dyn Completion>`.
///
/// A failed attempt returns a typed [`CompletionError`] rather than
/// panicking or retrying; the caller decides how to degrade.
#[async_trait]
pub trait Completion: Send + Sync {
    /// Send a prompt and return the trimmed generated text.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;

    /// Get a human-readable name for this backend.
    fn name(&self) -> &str;
}
