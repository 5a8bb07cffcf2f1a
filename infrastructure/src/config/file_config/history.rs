//! History configuration from TOML (`[history]` section)

use folio_domain::DEFAULT_HISTORY_CAP;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw history configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHistoryConfig {
    /// Persist the conversation between runs
    pub enabled: bool,
    /// Directory holding the history record
    pub dir: Option<PathBuf>,
    /// Record name, one record per key
    pub key: String,
    /// Messages kept when the record is read back
    pub max_messages: usize,
}

impl Default for FileHistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: None,
            key: "md_chat_history".to_string(),
            max_messages: DEFAULT_HISTORY_CAP,
        }
    }
}

impl FileHistoryConfig {
    /// Directory to store history in.
    ///
    /// Falls back to `<data_dir>/folio-assistant`. A leading `~/` is expanded.
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        match &self.dir {
            Some(dir) => Some(expand_home(dir)),
            None => dirs::data_dir().map(|d| d.join("folio-assistant")),
        }
    }
}

fn expand_home(path: &PathBuf) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.clone()),
        Err(_) => path.clone(),
    }
}
