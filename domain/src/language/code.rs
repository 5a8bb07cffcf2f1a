//! Language value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A supported response language (Value Object)
///
/// Turkish is the primary language of the portfolio, English the secondary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Turkish (primary)
    Tr,
    /// English (secondary)
    En,
}

impl Language {
    /// Every supported language, primary first.
    pub const ALL: [Language; 2] = [Language::Tr, Language::En];

    /// The primary language of the knowledge base
    pub const PRIMARY: Language = Language::Tr;

    /// The secondary language of the knowledge base
    pub const SECONDARY: Language = Language::En;

    /// Get the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
        }
    }

    /// Get the English display name
    pub fn name(&self) -> &'static str {
        match self {
            Language::Tr => "Turkish",
            Language::En => "English",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tr" | "turkish" => Ok(Language::Tr),
            "en" | "english" => Ok(Language::En),
            _ => Err(DomainError::InvalidLanguage(s.to_string())),
        }
    }
}

/// Language of static UI text (banner, prompt, help).
///
/// Derived once when a session starts and independent of the language
/// detected for each message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLanguage(Language);

impl UiLanguage {
    /// Pick the UI language from a locale tag such as `en_US.UTF-8` or `tr-TR`.
    ///
    /// Anything that does not start with `en` selects the primary language.
    pub fn from_locale(locale: &str) -> Self {
        if locale.trim().to_lowercase().starts_with("en") {
            Self(Language::SECONDARY)
        } else {
            Self(Language::PRIMARY)
        }
    }

    pub fn language(&self) -> Language {
        self.0
    }
}

impl Default for UiLanguage {
    fn default() -> Self {
        Self(Language::PRIMARY)
    }
}

impl From<Language> for UiLanguage {
    fn from(language: Language) -> Self {
        Self(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_display() {
        assert_eq!(Language::Tr.code(), "tr");
        assert_eq!(Language::En.to_string(), "en");
        assert_eq!(Language::ALL, [Language::Tr, Language::En]);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("tr".parse::<Language>().unwrap(), Language::Tr);
        assert_eq!("English".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" EN ".parse::<Language>().unwrap(), Language::En);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Tr).unwrap(), "\"tr\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }

    #[test]
    fn test_ui_language_from_locale() {
        assert_eq!(UiLanguage::from_locale("en_US.UTF-8").language(), Language::En);
        assert_eq!(UiLanguage::from_locale("EN-gb").language(), Language::En);
        assert_eq!(UiLanguage::from_locale("tr_TR.UTF-8").language(), Language::Tr);
        assert_eq!(UiLanguage::from_locale("de-DE").language(), Language::Tr);
        assert_eq!(UiLanguage::from_locale("").language(), Language::Tr);
        assert_eq!(UiLanguage::default().language(), Language::Tr);
    }
}
