//! File-backed chat history record.
//!
//! One record per key, stored as `<dir>/<key>.json`. Writes go to a
//! temporary sibling first and are renamed into place, so a crash never
//! leaves a half-written record behind.

use folio_application::ports::history_store::{HistoryStore, HistoryStoreError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// [`HistoryStore`] keeping the record in a JSON file
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    /// Store the record for `key` inside `dir`.
    ///
    /// Characters outside `[A-Za-z0-9_-]` in the key are replaced with `_`.
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        Self {
            path: dir.as_ref().join(format!("{file_name}.json")),
        }
    }

    /// Path of the record file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl HistoryStore for FileHistoryStore {
    fn read(&self) -> Result<Option<String>, HistoryStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(record) => Ok(Some(record)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, record: &str) -> Result<(), HistoryStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let temp = self.temp_path();
        fs::write(&temp, record)?;
        fs::rename(&temp, &self.path)?;
        debug!("Saved chat history to {}", self.path.display());
        Ok(())
    }

    fn remove(&self) -> Result<(), HistoryStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHistoryStore::new(dir.path(), "md_chat_history");
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHistoryStore::new(dir.path().join("nested/dir"), "md_chat_history");

        store.write("[]").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("[]"));

        store.write("[1]").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("[1]"));
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHistoryStore::new(dir.path(), "md_chat_history");
        store.write("[]").unwrap();

        store.remove().unwrap();
        assert!(store.read().unwrap().is_none());
        store.remove().unwrap();
    }

    #[test]
    fn test_key_is_sanitized() {
        let store = FileHistoryStore::new("/data", "../etc/passwd");
        assert_eq!(store.path(), Path::new("/data/___etc_passwd.json"));
    }

    #[test]
    fn test_separate_keys_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let a = FileHistoryStore::new(dir.path(), "a");
        let b = FileHistoryStore::new(dir.path(), "b");
        a.write("[\"a\"]").unwrap();
        assert!(b.read().unwrap().is_none());
    }
}
