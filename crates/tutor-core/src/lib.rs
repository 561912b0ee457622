//! Core trait and types for the multilingual AI tutor.
//!
//! This crate provides the shared interface between the tutoring
//! pipeline and completion backends. It defines:
//!
//! - [`Completion`] - The trait a chat-completion backend must implement
//! - [`Language`] / [`Subject`] - Closed classification tag sets
//! - [`ConversationTurn`] / [`ConversationLog`] / [`Stats`] - History types
//! - [`CompletionError`] / [`TutorError`] - Error types
//!
//! # Example
//!
//! ```rust
//! use tutor_core::{Completion, CompletionError};
//! use async_trait::async_trait;
//!
//! struct CannedBackend;
//!
//! #[async_trait]
//! impl Completion for CannedBackend {
//!     async fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
//!         Ok("Algebra is the study of symbols and rules.".to_string())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "CannedBackend"
//!     }
//! }
//! ```

mod error;
mod history;
mod trait_def;
mod turn;

pub use error::{CompletionError, TutorError};
pub use history::ConversationLog;
pub use trait_def::Completion;
pub use turn::{ConversationTurn, Language, Stats, Subject};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
