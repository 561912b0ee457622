//! Script transliteration.
//!
//! Maps Devanagari and Telugu text to an ITRANS-style Roman encoding.
//! This is a character-level script transform, not translation:
//! consonants carry an inherent `a` unless followed by a vowel sign or
//! virama, vowel signs replace the inherent vowel, and anything outside
//! the script's tables passes through unchanged. Pure and total - the
//! transform never fails.

use tutor_core::Language;

/// A source script for transliteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Devanagari (Hindi).
    Devanagari,
    /// Telugu script.
    Telugu,
    /// Roman letters; transliteration is the identity transform.
    Latin,
}

impl Script {
    /// The native script of a language.
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Hi => Script::Devanagari,
            Language::Te => Script::Telugu,
            Language::En => Script::Latin,
        }
    }
}

/// Transliterate `text` from `script` to Roman letters.
///
/// For [`Script::Latin`] the input is returned unchanged. Unmapped
/// characters (punctuation, Latin letters, other scripts) pass through
/// as-is.
pub fn transliterate(text: &str, script: Script) -> String {
    let tables: &dyn ScriptTables = match script {
        Script::Devanagari => &Devanagari,
        Script::Telugu => &Telugu,
        Script::Latin => return text.to_string(),
    };

    let mut out = String::with_capacity(text.len());
    // Whether the previous consonant still carries its inherent 'a'.
    let mut inherent_pending = false;

    for ch in text.chars() {
        if let Some(base) = tables.consonant(ch) {
            if inherent_pending {
                out.push('a');
            }
            out.push_str(base);
            inherent_pending = true;
        } else if let Some(vowel) = tables.vowel_sign(ch) {
            out.push_str(vowel);
            inherent_pending = false;
        } else if ch == tables.virama() {
            inherent_pending = false;
        } else {
            if inherent_pending {
                out.push('a');
                inherent_pending = false;
            }
            match tables.standalone(ch) {
                Some(mapped) => out.push_str(mapped),
                None => out.push(ch),
            }
        }
    }

    if inherent_pending {
        out.push('a');
    }

    out
}

/// Per-script character tables.
trait ScriptTables {
    /// Consonant base (without the inherent vowel), if `ch` is one.
    fn consonant(&self, ch: char) -> Option<&'static str>;
    /// Dependent vowel sign (matra), if `ch` is one.
    fn vowel_sign(&self, ch: char) -> Option<&'static str>;
    /// The vowel-suppressing virama character.
    fn virama(&self) -> char;
    /// Independent vowels, nasalization marks, digits and punctuation.
    fn standalone(&self, ch: char) -> Option<&'static str>;
}

struct Devanagari;

impl ScriptTables for Devanagari {
    fn consonant(&self, ch: char) -> Option<&'static str> {
        Some(match ch {
            'क' => "k",
            'ख' => "kh",
            'ग' => "g",
            'घ' => "gh",
            'ङ' => "~N",
            'च' => "ch",
            'छ' => "Ch",
            'ज' => "j",
            'झ' => "jh",
            'ञ' => "~n",
            'ट' => "T",
            'ठ' => "Th",
            'ड' => "D",
            'ढ' => "Dh",
            'ण' => "N",
            'त' => "t",
            'थ' => "th",
            'द' => "d",
            'ध' => "dh",
            'न' => "n",
            'प' => "p",
            'फ' => "ph",
            'ब' => "b",
            'भ' => "bh",
            'म' => "m",
            'य' => "y",
            'र' => "r",
            'ल' => "l",
            'व' => "v",
            'श' => "sh",
            'ष' => "Sh",
            'स' => "s",
            'ह' => "h",
            'ळ' => "L",
            _ => return None,
        })
    }

    fn vowel_sign(&self, ch: char) -> Option<&'static str> {
        Some(match ch {
            'ा' => "A",
            'ि' => "i",
            'ी' => "I",
            'ु' => "u",
            'ू' => "U",
            'ृ' => "RRi",
            'े' => "e",
            'ै' => "ai",
            'ो' => "o",
            'ौ' => "au",
            _ => return None,
        })
    }

    fn virama(&self) -> char {
        '्'
    }

    fn standalone(&self, ch: char) -> Option<&'static str> {
        Some(match ch {
            'अ' => "a",
            'आ' => "A",
            'इ' => "i",
            'ई' => "I",
            'उ' => "u",
            'ऊ' => "U",
            'ऋ' => "RRi",
            'ए' => "e",
            'ऐ' => "ai",
            'ओ' => "o",
            'औ' => "au",
            'ं' => "M",
            'ः' => "H",
            'ँ' => ".N",
            'ऽ' => ".a",
            '।' => ".",
            '॥' => "..",
            '०' => "0",
            '१' => "1",
            '२' => "2",
            '३' => "3",
            '४' => "4",
            '५' => "5",
            '६' => "6",
            '७' => "7",
            '८' => "8",
            '९' => "9",
            _ => return None,
        })
    }
}

struct Telugu;

impl ScriptTables for Telugu {
    fn consonant(&self, ch: char) -> Option<&'static str> {
        Some(match ch {
            'క' => "k",
            'ఖ' => "kh",
            'గ' => "g",
            'ఘ' => "gh",
            'ఙ' => "~N",
            'చ' => "ch",
            'ఛ' => "Ch",
            'జ' => "j",
            'ఝ' => "jh",
            'ఞ' => "~n",
            'ట' => "T",
            'ఠ' => "Th",
            'డ' => "D",
            'ఢ' => "Dh",
            'ణ' => "N",
            'త' => "t",
            'థ' => "th",
            'ద' => "d",
            'ధ' => "dh",
            'న' => "n",
            'ప' => "p",
            'ఫ' => "ph",
            'బ' => "b",
            'భ' => "bh",
            'మ' => "m",
            'య' => "y",
            'ర' => "r",
            'ఱ' => "R",
            'ల' => "l",
            'ళ' => "L",
            'వ' => "v",
            'శ' => "sh",
            'ష' => "Sh",
            'స' => "s",
            'హ' => "h",
            _ => return None,
        })
    }

    fn vowel_sign(&self, ch: char) -> Option<&'static str> {
        Some(match ch {
            'ా' => "A",
            'ి' => "i",
            'ీ' => "I",
            'ు' => "u",
            'ూ' => "U",
            'ృ' => "RRi",
            'ె' => "e",
            'ే' => "E",
            'ై' => "ai",
            'ొ' => "o",
            'ో' => "O",
            'ౌ' => "au",
            _ => return None,
        })
    }

    fn virama(&self) -> char {
        '్'
    }

    fn standalone(&self, ch: char) -> Option<&'static str> {
        Some(match ch {
            'అ' => "a",
            'ఆ' => "A",
            'ఇ' => "i",
            'ఈ' => "I",
            'ఉ' => "u",
            'ఊ' => "U",
            'ఋ' => "RRi",
            'ఎ' => "e",
            'ఏ' => "E",
            'ఐ' => "ai",
            'ఒ' => "o",
            'ఓ' => "O",
            'ఔ' => "au",
            'ం' => "M",
            'ః' => "H",
            'ఁ' => ".N",
            '౦' => "0",
            '౧' => "1",
            '౨' => "2",
            '౩' => "3",
            '౪' => "4",
            '౫' => "5",
            '౬' => "6",
            '౭' => "7",
            '౮' => "8",
            '౯' => "9",
            _ => return None,
        })
    }
}
