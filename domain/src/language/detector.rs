//! Per-message language detection.
//!
//! Decision order, first match wins:
//!
//! 1. explicit tag prefix (`en:`, `english:`, `tr:`, `turkce:`, `türkçe:`)
//! 2. any Turkish-specific letter → Turkish
//! 3. hint-word counts: English if it has strictly more hits, else Turkish
//!    if it has any, else English
//!
//! A 0/0 tie selects English. Language-neutral input such as "hey" or a bare
//! emoji is therefore answered in English.

use super::code::Language;

const PREFIXES: &[(&str, Language)] = &[
    ("english:", Language::En),
    ("en:", Language::En),
    ("turkce:", Language::Tr),
    ("türkçe:", Language::Tr),
    ("tr:", Language::Tr),
];

const PRIMARY_LETTERS: &[char] = &[
    'ç', 'ğ', 'ı', 'ö', 'ş', 'ü', 'Ç', 'Ğ', 'İ', 'Ö', 'Ş', 'Ü',
];

const PRIMARY_HINTS: &[&str] = &[
    "nedir",
    "nasil",
    "hangi",
    "neler",
    "nerede",
    "misin",
    "musun",
    "misiniz",
    "hakkinda",
    "bilgi",
    "merhaba",
    "selam",
    "anlat",
    "kimdir",
    "var mi",
    "tesekkur",
    "egitim",
    "deneyim",
    "projesi",
    "projeler",
    "iletisim",
    "yetenek",
    "okul",
];

const SECONDARY_HINTS: &[&str] = &[
    "what",
    "how",
    "who",
    "where",
    "which",
    "tell me",
    "about",
    "your",
    "you",
    "hello",
    "thank",
    "please",
    "project",
    "experience",
    "education",
    "skill",
    "contact",
    "have",
    "can ",
    "do ",
];

/// Why a language was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionReason {
    /// The message started with an explicit language tag
    Prefix,
    /// The message contained a Turkish-specific letter
    PrimaryLetter,
    /// Hint words decided
    Hints { primary: usize, secondary: usize },
    /// No signal at all
    Default,
}

/// Result of detecting the language of one message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub language: Language,
    pub reason: DetectionReason,
}

/// Decide which language a raw message should be answered in.
pub fn detect_language(raw: &str) -> Language {
    detect(raw).language
}

/// Like [`detect_language`], also reporting which rule decided.
pub fn detect(raw: &str) -> Detection {
    let lowered = raw.trim_start().to_lowercase();

    if let Some(language) = explicit_prefix(&lowered) {
        return Detection {
            language,
            reason: DetectionReason::Prefix,
        };
    }

    if raw.chars().any(|c| PRIMARY_LETTERS.contains(&c)) {
        return Detection {
            language: Language::PRIMARY,
            reason: DetectionReason::PrimaryLetter,
        };
    }

    let primary = count_hints(&lowered, PRIMARY_HINTS);
    let secondary = count_hints(&lowered, SECONDARY_HINTS);

    let (language, reason) = if secondary > primary {
        (Language::SECONDARY, DetectionReason::Hints { primary, secondary })
    } else if primary > 0 {
        (Language::PRIMARY, DetectionReason::Hints { primary, secondary })
    } else {
        (Language::SECONDARY, DetectionReason::Default)
    };

    Detection { language, reason }
}

fn explicit_prefix(lowered: &str) -> Option<Language> {
    PREFIXES
        .iter()
        .find(|(prefix, _)| lowered.starts_with(prefix))
        .map(|&(_, language)| language)
}

fn count_hints(lowered: &str, hints: &[&str]) -> usize {
    hints.iter().filter(|hint| lowered.contains(*hint)).count()
}
