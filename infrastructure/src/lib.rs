//! Infrastructure layer for folio-assistant
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, configuration file loading, and the
//! knowledge base sources.

pub mod config;
pub mod knowledge;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAssistantConfig, FileConfig, FileHistoryConfig,
    FileKnowledgeConfig, FileLoggingConfig, FileOutputConfig,
};
pub use knowledge::{KnowledgeLoadError, KnowledgeLoader};
pub use logging::JsonlConversationLogger;
pub use storage::FileHistoryStore;
