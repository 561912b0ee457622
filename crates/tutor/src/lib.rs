//! Multilingual tutoring pipeline.
//!
//! This crate implements the request-construction and language-handling
//! pipeline behind the AI tutor:
//!
//! - Language detection, including a romanized-script heuristic that can
//!   override the statistical detector ([`detect_language`],
//!   [`detect_romanized`])
//! - Subject and length-preference classification ([`categorize`],
//!   [`detect_length_preference`])
//! - History-aware prompt assembly ([`build_prompt`])
//! - Script transliteration back to Roman letters ([`transliterate`])
//! - The [`AiTeacher`] orchestrator owning the conversation log and the
//!   `chat` / `stats` / `clear_history` contract surface
//!
//! # Usage
//!
//! ```rust,no_run
//! use tutor::AiTeacher;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut teacher = AiTeacher::from_env()?;
//! let turn = teacher.chat("What is algebra?").await;
//! println!("{}", turn.response);
//! # Ok(())
//! # }
//! ```

mod classify;
mod detect;
mod prompt;
mod teacher;
mod translit;

pub use classify::{categorize, detect_length_preference, LengthPreference};
pub use detect::{detect_language, detect_romanized};
pub use prompt::{build_prompt, HISTORY_WINDOW};
pub use teacher::{fallback_response, AiTeacher};
pub use translit::{transliterate, Script};

// Re-export core types for convenience
pub use tutor_core::{
    Completion, CompletionError, ConversationTurn, Language, Stats, Subject, TutorError,
};
