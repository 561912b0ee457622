//! Prompt assembly.
//!
//! Builds the single system prompt sent to the completion service:
//! per-language teacher persona, length instruction, a window of recent
//! history, and the current question ending in a `Teacher:` cue for the
//! model to continue from.

use tutor_core::{ConversationTurn, Language};

use crate::classify::LengthPreference;

/// Number of most recent turns included in the prompt.
pub const HISTORY_WINDOW: usize = 3;

/// The teacher persona for a language.
fn persona(language: Language) -> &'static str {
    match language {
        Language::En => "You are a helpful teacher. Provide clear explanations with examples.",
        Language::Hi => "आप एक सहायक शिक्षक हैं। उदाहरण के साथ स्पष्ट व्याख्या दें।",
        Language::Te => "మీరు సహాయక ఉపాధ్యాయుడు. ఉదాహరణలతో స్పష్ట వివరణలు ఇవ్వండి।",
    }
}

/// The instruction for a length preference.
fn length_instruction(preference: LengthPreference) -> &'static str {
    match preference {
        LengthPreference::Short => "Please answer briefly and concisely.",
        LengthPreference::Long => "Please provide a detailed explanation with examples.",
        LengthPreference::Normal => "Please provide a clear and helpful answer.",
    }
}

/// Assemble the system prompt for a question.
///
/// `history` must already be windowed to the most recent turns, oldest
/// first; [`HISTORY_WINDOW`] is the expected window size. Pure string
/// composition, no I/O.
pub fn build_prompt(
    user_input: &str,
    preference: LengthPreference,
    language: Language,
    history: &[ConversationTurn],
) -> String {
    let mut base = persona(language).to_string();
    if language != Language::En {
        base.push_str(&format!(" Respond in {}.", language.display_name()));
    }

    let mut snippet = String::new();
    for turn in history {
        snippet.push_str(&format!(
            "User: {}\nTeacher: {}\n",
            turn.user_input, turn.response
        ));
    }

    format!(
        "{}\n{}\nConversation history:\n{}User: {}\nTeacher:",
        base,
        length_instruction(preference),
        snippet,
        user_input
    )
}
