//! Conversation log management.
//!
//! This module provides the append-only in-memory conversation log
//! owned by a single tutoring session, plus the derived statistics.

use crate::turn::{ConversationTurn, Stats};

/// An append-only log of conversation turns for one session.
///
/// Entries are never mutated or removed individually; the only
/// destructive operation is [`ConversationLog::clear`], which resets
/// the log to empty. One log belongs to exactly one session.
///
/// # Example
///
/// ```rust
/// use tutor_core::{ConversationLog, ConversationTurn, Language, Subject};
///
/// let mut log = ConversationLog::new();
/// log.push(ConversationTurn::now(
///     "What is algebra?",
///     Language::En,
///     Subject::Math,
///     "Algebra is...",
/// ));
/// assert_eq!(log.stats().total_messages, 1);
/// ```
#[derive(Debug, Default)]
pub struct ConversationLog {
    turns: Vec<ConversationTurn>,
}

impl ConversationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed turn.
    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    /// The most recent `n` turns, oldest first.
    pub fn last_turns(&self, n: usize) -> &[ConversationTurn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    /// Number of recorded turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the log holds no turns.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Reset the log to empty.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Compute statistics over the log.
    ///
    /// Distinct values keep first-seen order so repeated calls on an
    /// unchanged log yield identical results.
    pub fn stats(&self) -> Stats {
        if self.turns.is_empty() {
            return Stats::empty();
        }

        let mut languages = Vec::new();
        let mut subjects = Vec::new();
        for turn in &self.turns {
            if !languages.contains(&turn.language) {
                languages.push(turn.language);
            }
            if !subjects.contains(&turn.category) {
                subjects.push(turn.category);
            }
        }

        Stats {
            total_messages: self.turns.len(),
            languages_used: languages,
            subjects_discussed: subjects,
        }
    }
}
