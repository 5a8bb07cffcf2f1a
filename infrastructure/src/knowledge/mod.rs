//! Knowledge base sources
//!
//! The assistant ships with a built-in knowledge base embedded at compile
//! time. A TOML file with the same schema can replace it.

mod loader;

pub use loader::{KnowledgeLoadError, KnowledgeLoader};
