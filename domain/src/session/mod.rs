//! Chat session domain.
//!
//! - [`entities::Message`]: one exchanged message
//! - [`entities::Conversation`]: the ordered message sequence of one chat widget
//! - [`history`]: JSON codec for the persisted message log

pub mod entities;
pub mod history;
