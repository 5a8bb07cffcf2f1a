//! Port for the persisted message log.
//!
//! The store holds one opaque text record per chat widget, the way browser
//! local storage holds one value per key. Encoding and recovery from bad
//! records are the session's job; the store only reads, writes and removes.

use std::sync::Mutex;
use thiserror::Error;

/// Errors from a history store
#[derive(Error, Debug)]
pub enum HistoryStoreError {
    #[error("history storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("history storage unavailable: {0}")]
    Unavailable(String),
}

/// Storage for the single persisted history record
pub trait HistoryStore: Send + Sync {
    /// Read the record, `None` if nothing has been stored.
    fn read(&self) -> Result<Option<String>, HistoryStoreError>;

    /// Replace the record.
    fn write(&self, record: &str) -> Result<(), HistoryStoreError>;

    /// Delete the record. Removing a missing record is not an error.
    fn remove(&self) -> Result<(), HistoryStoreError>;
}

/// In-memory store, used when persistence is disabled and in tests.
#[derive(Default)]
pub struct MemoryHistoryStore {
    record: Mutex<Option<String>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing record
    pub fn with_record(record: impl Into<String>) -> Self {
        Self {
            record: Mutex::new(Some(record.into())),
        }
    }

    /// Current record, for inspection
    pub fn record(&self) -> Option<String> {
        self.record.lock().ok().and_then(|r| r.clone())
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn read(&self) -> Result<Option<String>, HistoryStoreError> {
        self.record
            .lock()
            .map(|r| r.clone())
            .map_err(|e| HistoryStoreError::Unavailable(e.to_string()))
    }

    fn write(&self, record: &str) -> Result<(), HistoryStoreError> {
        let mut slot = self
            .record
            .lock()
            .map_err(|e| HistoryStoreError::Unavailable(e.to_string()))?;
        *slot = Some(record.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), HistoryStoreError> {
        let mut slot = self
            .record
            .lock()
            .map_err(|e| HistoryStoreError::Unavailable(e.to_string()))?;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryHistoryStore::new();
        assert!(store.read().unwrap().is_none());
        store.write("[]").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("[]"));
        store.remove().unwrap();
        assert!(store.record().is_none());
        // removing twice is fine
        store.remove().unwrap();
    }

    #[test]
    fn test_with_record() {
        let store = MemoryHistoryStore::with_record("x");
        assert_eq!(store.read().unwrap().as_deref(), Some("x"));
    }
}
