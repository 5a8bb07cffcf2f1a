//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),
}
