//! The tutoring orchestrator.

use groq_brain::GroqBrain;
use tracing::{debug, info, warn};
use tutor_core::{Completion, ConversationLog, ConversationTurn, Language, Stats, TutorError};

use crate::classify::{categorize, detect_length_preference};
use crate::detect::{detect_language, detect_romanized};
use crate::prompt::{build_prompt, HISTORY_WINDOW};
use crate::translit::{transliterate, Script};

/// Canned response used when the completion service fails.
pub fn fallback_response(language: Language) -> &'static str {
    match language {
        Language::En => {
            "I'd love to help you learn! Could you tell me more about what you'd like to know?"
        }
        Language::Hi => "मैं आपकी सीखने में मदद करना चाहूंगा! आप और क्या जानना चाहते हैं?",
        Language::Te => "నేను మీకు నేర్చుకోవడంలో సహాయం చేయాలనుకుంటున్నాను! మీరు మరేమి తెలుసుకోవాలనురాలు?",
    }
}

/// The conversation orchestrator.
///
/// Sequences a `chat` call through detection, classification, prompt
/// assembly, completion, transliteration and history append. Owns the
/// conversation log; one instance serves one session, and mutation goes
/// through `&mut self`, so there is no shared state between sessions.
///
/// The contract surface is exactly [`chat`](AiTeacher::chat),
/// [`stats`](AiTeacher::stats) and
/// [`clear_history`](AiTeacher::clear_history).
pub struct AiTeacher<C: Completion> {
    completion: C,
    log: ConversationLog,
}

impl AiTeacher<GroqBrain> {
    /// Create a teacher backed by the Groq API, configured from
    /// environment variables.
    ///
    /// Fails when `GROQ_API_KEY` is not set; no chat can proceed without
    /// a credential.
    pub fn from_env() -> Result<Self, TutorError> {
        Ok(Self::new(GroqBrain::from_env()?))
    }
}

impl<C: Completion> AiTeacher<C> {
    /// Create a teacher with the given completion backend.
    pub fn new(completion: C) -> Self {
        info!("AiTeacher initialized with backend: {}", completion.name());
        Self {
            completion,
            log: ConversationLog::new(),
        }
    }

    /// Answer a question and record the exchange.
    ///
    /// Always produces a turn: completion failures substitute the
    /// per-language fallback text instead of surfacing an error.
    pub async fn chat(&mut self, user_input: &str) -> ConversationTurn {
        let mut language = detect_language(user_input);
        let length_pref = detect_length_preference(user_input);

        // A romanized Hindi/Telugu question overrides script detection
        // and flags the response for transliteration back to Roman.
        let mut romanize_response = false;
        if let Some(roman_lang) = detect_romanized(user_input) {
            language = roman_lang;
            romanize_response = true;
        }

        debug!(
            "Processing question (language: {}, length: {:?}, romanized: {})",
            language, length_pref, romanize_response
        );

        let prompt = build_prompt(
            user_input,
            length_pref,
            language,
            self.log.last_turns(HISTORY_WINDOW),
        );

        let mut response = match self.completion.complete(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Completion failed, using fallback: {}", e);
                fallback_response(language).to_string()
            }
        };

        if romanize_response {
            response = transliterate(&response, Script::for_language(language));
        }

        let category = categorize(user_input);
        let turn = ConversationTurn::now(user_input, language, category, response);

        info!(
            "Recorded turn (language: {}, category: {}, {} chars)",
            turn.language,
            turn.category,
            turn.response.len()
        );

        self.log.push(turn.clone());
        turn
    }

    /// Session statistics, computed fresh from the log.
    pub fn stats(&self) -> Stats {
        self.log.stats()
    }

    /// Reset the conversation log to empty.
    pub fn clear_history(&mut self) {
        info!("Clearing conversation history ({} turns)", self.log.len());
        self.log.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tutor_core::{async_trait, CompletionError, Subject};

    /// Backend that returns a fixed response and records every prompt.
    struct CannedCompletion {
        response: String,
        prompts: Mutex<Vec<String>>,
    }

    impl CannedCompletion {
        fn new(response: &str) -> Self {
            Self {
                response: response.to_string(),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Completion for CannedCompletion {
        async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.response.clone())
        }

        fn name(&self) -> &str {
            "CannedCompletion"
        }
    }

    /// Backend that always fails.
    struct FailingCompletion;

    #[async_trait]
    impl Completion for FailingCompletion {
        async fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
            Err(CompletionError::Network("connection refused".to_string()))
        }

        fn name(&self) -> &str {
            "FailingCompletion"
        }
    }

    #[tokio::test]
    async fn test_english_math_question() {
        let mut teacher = AiTeacher::new(CannedCompletion::new("Algebra is about symbols."));

        let turn = teacher.chat("What is algebra?").await;

        assert_eq!(turn.language, Language::En);
        assert_eq!(turn.language_name, "English");
        assert_eq!(turn.category, Subject::Math);
        assert!(!turn.response.is_empty());
    }

    #[tokio::test]
    async fn test_hindi_script_question() {
        let mut teacher = AiTeacher::new(CannedCompletion::new("गणित संख्याओं का अध्ययन है।"));

        let turn = teacher.chat("गणित क्या है?").await;

        assert_eq!(turn.language, Language::Hi);
        assert_eq!(turn.category, Subject::Math);
        // Not romanized input, so the response keeps its native script
        assert_eq!(turn.response, "गणित संख्याओं का अध्ययन है।");
    }

    #[tokio::test]
    async fn test_failure_substitutes_english_fallback() {
        let mut teacher = AiTeacher::new(FailingCompletion);

        let turn = teacher.chat("What is algebra?").await;

        assert_eq!(turn.response, fallback_response(Language::En));
        assert_eq!(turn.category, Subject::Math);
    }

    #[tokio::test]
    async fn test_romanized_input_transliterates_response() {
        let mut teacher = AiTeacher::new(CannedCompletion::new("नमस्ते"));

        let turn = teacher.chat("namaste kaise hai").await;

        assert_eq!(turn.language, Language::Hi);
        assert_eq!(turn.response, "namaste");
    }

    #[tokio::test]
    async fn test_romanized_failure_transliterates_fallback() {
        let mut teacher = AiTeacher::new(FailingCompletion);

        let turn = teacher.chat("namaste kaise hai").await;

        assert_eq!(turn.language, Language::Hi);
        // The Hindi fallback, transliterated to Roman letters
        assert_eq!(
            turn.response,
            transliterate(fallback_response(Language::Hi), Script::Devanagari)
        );
    }

    #[tokio::test]
    async fn test_prompt_window_holds_three_most_recent_turns() {
        let backend = CannedCompletion::new("answer");
        let mut teacher = AiTeacher::new(backend);

        for i in 1..=5 {
            teacher.chat(&format!("question {}", i)).await;
        }

        let prompts = teacher.completion.prompts.lock().unwrap();
        let fifth = &prompts[4];

        assert!(!fifth.contains("User: question 1\n"));
        assert!(fifth.contains("User: question 2\n"));
        assert!(fifth.contains("User: question 3\n"));
        assert!(fifth.contains("User: question 4\n"));

        // Oldest of the three first
        let second = fifth.find("User: question 2\n").unwrap();
        let fourth = fifth.find("User: question 4\n").unwrap();
        assert!(second < fourth);
    }

    #[tokio::test]
    async fn test_stats_track_distinct_values() {
        let mut teacher = AiTeacher::new(CannedCompletion::new("answer"));

        teacher.chat("What is algebra?").await;
        teacher.chat("गणित क्या है?").await;
        teacher.chat("Explain physics").await;

        let stats = teacher.stats();
        assert_eq!(stats.total_messages, 3);
        assert_eq!(stats.languages_used, vec![Language::En, Language::Hi]);
        assert_eq!(
            stats.subjects_discussed,
            vec![Subject::Math, Subject::Science]
        );
    }

    #[tokio::test]
    async fn test_clear_history_resets_stats() {
        let mut teacher = AiTeacher::new(CannedCompletion::new("answer"));

        teacher.chat("What is algebra?").await;
        teacher.clear_history();

        assert_eq!(teacher.stats(), Stats::empty());
    }

    #[tokio::test]
    async fn test_category_comes_from_question_not_response() {
        let mut teacher = AiTeacher::new(CannedCompletion::new("physics and chemistry"));

        let turn = teacher.chat("Tell me a story").await;

        assert_eq!(turn.category, Subject::General);
    }
}
