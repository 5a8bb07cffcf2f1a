//! Application layer for folio-assistant
//!
//! This crate contains the chat session use case, port definitions, and
//! session configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ResponseDelay, SessionConfig};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    history_store::{HistoryStore, HistoryStoreError, MemoryHistoryStore},
};
pub use use_cases::chat_session::{
    ChatSession, PendingReply, RejectReason, SessionPhase, SubmitOutcome,
};
