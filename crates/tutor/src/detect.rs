//! Language detection.
//!
//! Two detectors cooperate here: a statistical script detector for text
//! written in native script, and a small keyword heuristic for Hindi or
//! Telugu typed with Roman letters. When the heuristic fires, its result
//! overrides the statistical detector for the rest of the turn and the
//! final response gets transliterated back to Roman script.

use tutor_core::Language;
use whatlang::Script as DetectedScript;

/// Romanized Hindi marker words.
const HINDI_ROMAN_KEYWORDS: &[&str] = &[
    "namaste", "kaise", "hai", "kya", "koi", "shiksha", "padhai", "sikhao",
];

/// Romanized Telugu marker words.
const TELUGU_ROMAN_KEYWORDS: &[&str] = &[
    "namaskaram", "ela", "unnaru", "emi", "telusu", "chaduvu", "cheppu",
];

/// Detect the working language of an utterance.
///
/// Detection is script-based: Devanagari text is Hindi, Telugu script is
/// Telugu, and everything else (Latin text, symbols, empty input, or a
/// script the detector cannot place) is coerced to English. Never fails.
pub fn detect_language(text: &str) -> Language {
    match whatlang::detect_script(text) {
        Some(DetectedScript::Devanagari) => Language::Hi,
        Some(DetectedScript::Telugu) => Language::Te,
        _ => Language::En,
    }
}

/// Detect Hindi or Telugu written in Roman letters.
///
/// Splits the case-folded input on whitespace and counts whole-word
/// matches against the marker lists. Hindi wins any tie with at least
/// one match; Telugu needs strictly more matches than Hindi. Returns
/// `None` when neither language has a match.
pub fn detect_romanized(text: &str) -> Option<Language> {
    let lowered = text.to_lowercase();

    let mut hindi_count = 0usize;
    let mut telugu_count = 0usize;
    for word in lowered.split_whitespace() {
        if HINDI_ROMAN_KEYWORDS.contains(&word) {
            hindi_count += 1;
        }
        if TELUGU_ROMAN_KEYWORDS.contains(&word) {
            telugu_count += 1;
        }
    }

    if hindi_count > 0 && hindi_count >= telugu_count {
        Some(Language::Hi)
    } else if telugu_count > 0 && telugu_count > hindi_count {
        Some(Language::Te)
    } else {
        None
    }
}
