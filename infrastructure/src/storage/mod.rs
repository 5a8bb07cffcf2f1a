//! Persistent storage adapters

mod file_history_store;

pub use file_history_store::FileHistoryStore;
