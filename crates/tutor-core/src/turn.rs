//! Conversation turn and classification tag types.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A supported conversation language.
///
/// The detector coerces everything it cannot place into one of these
/// three to [`Language::En`], so code downstream never sees an
/// unrecognized language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// Hindi.
    Hi,
    /// Telugu.
    Te,
}

impl Language {
    /// The two-letter language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Te => "te",
        }
    }

    /// The English display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Te => "Telugu",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A subject category for a question.
///
/// Classification always resolves to one of these; unclassifiable input
/// falls back to [`Subject::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    /// Mathematics questions.
    Math,
    /// Science questions.
    Science,
    /// Everything else.
    General,
}

impl Subject {
    /// The lowercase tag name.
    pub fn tag(&self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::Science => "science",
            Subject::General => "general",
        }
    }
}

impl Default for Subject {
    fn default() -> Self {
        Subject::General
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single completed exchange in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// When the turn was recorded.
    pub timestamp: DateTime<Local>,
    /// The raw text as submitted by the user.
    pub user_input: String,
    /// The detected (or overridden) language.
    pub language: Language,
    /// Display name derived from `language`.
    pub language_name: String,
    /// The classified subject of the question.
    pub category: Subject,
    /// Final response text, post-transliteration if applicable.
    pub response: String,
}

impl ConversationTurn {
    /// Create a turn stamped with the current local time.
    pub fn now(
        user_input: impl Into<String>,
        language: Language,
        category: Subject,
        response: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            user_input: user_input.into(),
            language,
            language_name: language.display_name().to_string(),
            category,
            response: response.into(),
        }
    }
}

/// Session statistics derived from the conversation log.
///
/// Always computed fresh from the log, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Total number of recorded turns.
    pub total_messages: usize,
    /// Distinct languages observed, in first-seen order.
    pub languages_used: Vec<Language>,
    /// Distinct subjects observed, in first-seen order.
    pub subjects_discussed: Vec<Subject>,
}

impl Stats {
    /// Stats for an empty log.
    pub fn empty() -> Self {
        Self {
            total_messages: 0,
            languages_used: Vec::new(),
            subjects_discussed: Vec::new(),
        }
    }
}
