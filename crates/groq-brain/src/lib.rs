//! Groq chat-completion backend.
//!
//! This crate provides a [`Completion`] implementation that sends the
//! assembled tutoring prompt to Groq's OpenAI-compatible
//! chat-completions endpoint.
//!
//! # Features
//!
//! - Single-attempt request with a bounded timeout
//! - Typed failures (network, API status, malformed body, empty choices)
//!   so callers can substitute a fallback response
//! - Configurable via environment variables
//!
//! # Usage
//!
//! ```rust,no_run
//! use groq_brain::GroqBrain;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let brain = GroqBrain::from_env()?;
//! // Use the brain...
//! # Ok(())
//! # }
//! ```

mod api_types;
mod brain;
mod config;

pub use brain::GroqBrain;
pub use config::GroqBrainConfig;

// Re-export tutor-core types for convenience
pub use tutor_core::{async_trait, Completion, CompletionError};
