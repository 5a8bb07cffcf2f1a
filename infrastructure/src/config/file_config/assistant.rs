//! Assistant configuration from TOML (`[assistant]` section)

use folio_application::ResponseDelay;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw assistant configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssistantConfig {
    /// Lower bound of the simulated thinking delay
    pub min_delay_ms: u64,
    /// Upper bound of the simulated thinking delay
    pub max_delay_ms: u64,
    /// Longest question the REPL submits, in characters
    pub max_input_chars: usize,
    /// Fixed seed for reply delays and alternative selection
    pub seed: Option<u64>,
}

impl Default for FileAssistantConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 300,
            max_delay_ms: 700,
            max_input_chars: 250,
            seed: None,
        }
    }
}

impl FileAssistantConfig {
    pub fn response_delay(&self) -> ResponseDelay {
        ResponseDelay::new(
            Duration::from_millis(self.min_delay_ms),
            Duration::from_millis(self.max_delay_ms),
        )
    }
}
