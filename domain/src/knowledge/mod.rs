//! Knowledge base domain.
//!
//! - [`entities::KnowledgeEntry`]: one topic, its triggers and per-language answers
//! - [`entities::Response`]: a single answer or a set of equally valid alternatives
//! - [`entities::KnowledgeBase`]: validated, ordered collection of entries with fallbacks
//! - [`error::KnowledgeError`]: validation failures

pub mod entities;
pub mod error;

pub use entities::{KnowledgeBase, KnowledgeEntry, PreparedEntry, Response};
pub use error::KnowledgeError;
