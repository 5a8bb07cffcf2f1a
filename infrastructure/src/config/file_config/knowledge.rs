//! Knowledge base configuration from TOML (`[knowledge]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw knowledge base configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileKnowledgeConfig {
    /// Replace the built-in knowledge base with this file
    pub path: Option<PathBuf>,
}
