//! Subject and length-preference classification.

use tutor_core::Subject;

/// Math keywords (English, Hindi, Telugu).
const MATH_KEYWORDS: &[&str] = &["math", "algebra", "geometry", "गणित", "గణితం"];

/// Science keywords (English, Hindi, Telugu).
const SCIENCE_KEYWORDS: &[&str] = &["science", "physics", "chemistry", "विज्ञान", "శాస్త్రం"];

/// Keywords asking for a shorter answer.
const SHORTER_KEYWORDS: &[&str] = &["short", "brief", "summarize", "in short", "shorter"];

/// Keywords asking for a longer answer.
const LONGER_KEYWORDS: &[&str] = &["more", "detailed", "expand", "explain more", "longer"];

/// How long the user wants the answer to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthPreference {
    /// Brief and concise.
    Short,
    /// A clear, ordinary answer.
    Normal,
    /// A detailed explanation with examples.
    Long,
}

impl Default for LengthPreference {
    fn default() -> Self {
        LengthPreference::Normal
    }
}

/// Classify a question by subject.
///
/// Case-folds the input and checks each subject's keyword list for a
/// substring match, math before science. Anything unmatched is
/// [`Subject::General`].
pub fn categorize(text: &str) -> Subject {
    let lowered = text.to_lowercase();

    if MATH_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        Subject::Math
    } else if SCIENCE_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        Subject::Science
    } else {
        Subject::General
    }
}

/// Infer the requested answer length from the question text.
///
/// Shorter keywords take priority when both kinds are present.
pub fn detect_length_preference(text: &str) -> LengthPreference {
    let lowered = text.to_lowercase();

    if SHORTER_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        LengthPreference::Short
    } else if LONGER_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        LengthPreference::Long
    } else {
        LengthPreference::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_math() {
        assert_eq!(categorize("What is algebra?"), Subject::Math);
        assert_eq!(categorize("GEOMETRY basics"), Subject::Math);
    }

    #[test]
    fn test_categorize_science() {
        assert_eq!(categorize("Explain physics"), Subject::Science);
    }

    #[test]
    fn test_categorize_native_script_keywords() {
        assert_eq!(categorize("गणित क्या है?"), Subject::Math);
        assert_eq!(categorize("శాస్త్రం గురించి చెప్పు"), Subject::Science);
    }

    #[test]
    fn test_categorize_default_general() {
        assert_eq!(categorize("Tell me about history"), Subject::General);
    }

    #[test]
    fn test_math_wins_over_science() {
        // Both subjects match - math is checked first
        assert_eq!(
            categorize("Is algebra used in chemistry?"),
            Subject::Math
        );
    }

    #[test]
    fn test_length_short() {
        assert_eq!(
            detect_length_preference("Give me a brief answer"),
            LengthPreference::Short
        );
    }

    #[test]
    fn test_length_long() {
        assert_eq!(
            detect_length_preference("Explain more about this"),
            LengthPreference::Long
        );
    }

    #[test]
    fn test_length_default_normal() {
        assert_eq!(
            detect_length_preference("What is algebra?"),
            LengthPreference::Normal
        );
    }

    #[test]
    fn test_shorter_wins_over_longer() {
        assert_eq!(
            detect_length_preference("in short, give me a detailed answer"),
            LengthPreference::Short
        );
    }
}
