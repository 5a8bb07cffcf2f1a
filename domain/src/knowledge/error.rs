//! Knowledge base validation errors

use crate::language::code::Language;
use thiserror::Error;

/// A knowledge base that violates its invariants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeError {
    #[error("knowledge base has no entries")]
    Empty,

    #[error("entry #{index} has an empty id")]
    EmptyId { index: usize },

    #[error("duplicate entry id '{0}'")]
    DuplicateId(String),

    #[error("entry '{0}' has no keywords")]
    NoKeywords(String),

    #[error("entry '{id}' has a blank {kind} at position {position}")]
    BlankTrigger {
        id: String,
        kind: &'static str,
        position: usize,
    },

    #[error("entry '{id}' has no answer for language '{language}'")]
    MissingAnswer { id: String, language: Language },

    #[error("entry '{id}' has an empty answer for language '{language}'")]
    EmptyAnswer { id: String, language: Language },

    #[error("fallback response missing for language '{0}'")]
    MissingFallback(Language),

    #[error("fallback response for language '{0}' is empty")]
    EmptyFallback(Language),
}
