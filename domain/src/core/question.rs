//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question typed by a visitor (Value Object)
///
/// Always holds trimmed, non-empty text. Whitespace-only input never becomes
/// a `Question`, so it never reaches the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a new question, returning None if the text is blank
    pub fn try_new(content: impl AsRef<str>) -> Option<Self> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for Question {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Question::try_new(s).ok_or_else(|| DomainError::InvalidQuestion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_is_trimmed() {
        let q = Question::try_new("  egitim bilgin nedir \n").unwrap();
        assert_eq!(q.content(), "egitim bilgin nedir");
    }

    #[test]
    fn test_blank_question_rejected() {
        assert!(Question::try_new("").is_none());
        assert!(Question::try_new("   \t\n").is_none());
        assert!(Question::try_from(" ").is_err());
    }

    #[test]
    fn test_display() {
        let q = Question::try_new("hello").unwrap();
        assert_eq!(q.to_string(), "hello");
        assert_eq!(q.into_content(), "hello");
    }
}
