//! Domain layer for folio-assistant
//!
//! This crate contains the matching engine and the conversation entities.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Matching
//!
//! A visitor's free-text question is folded by the [`text::normalize`]
//! normalizer, scored against every [`KnowledgeEntry`] by keyword and
//! variation overlap, and resolved to one canned answer, or to a fallback
//! clarification when nothing scores high enough.
//!
//! ## Languages
//!
//! Turkish is the primary language, English the secondary. Each message is
//! answered in the language [`detect_language`] picks for it; static UI text
//! follows the [`UiLanguage`] chosen once from the locale.

pub mod core;
pub mod knowledge;
pub mod language;
pub mod matching;
pub mod session;
pub mod text;

// Re-export commonly used types
pub use core::{error::DomainError, question::Question};
pub use knowledge::{KnowledgeBase, KnowledgeEntry, KnowledgeError, Response};
pub use language::{
    code::{Language, UiLanguage},
    detector::{Detection, DetectionReason, detect, detect_language},
};
pub use matching::{MIN_CONFIDENCE, MatchOutcome, Matcher, RankedEntry};
pub use session::{
    entities::{Conversation, Message, Role},
    history::{
        DEFAULT_HISTORY_CAP, HistoryDecodeError, MAX_RECORD_BYTES, decode_history, encode_history,
    },
};
pub use text::normalize::normalize;
