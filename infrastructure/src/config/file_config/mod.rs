//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types by the
//! composition root.

mod assistant;
mod history;
mod knowledge;
mod logging;
mod output;

pub use assistant::FileAssistantConfig;
pub use history::FileHistoryConfig;
pub use knowledge::FileKnowledgeConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;

use folio_application::SessionConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("assistant.min_delay_ms ({min}) is greater than assistant.max_delay_ms ({max})")]
    InvertedDelayRange { min: u64, max: u64 },

    #[error("assistant.max_input_chars cannot be 0")]
    ZeroInputLimit,

    #[error("history.max_messages cannot be 0")]
    ZeroHistoryCap,

    #[error("history.key cannot be empty")]
    EmptyHistoryKey,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Reply timing and input limits
    pub assistant: FileAssistantConfig,
    /// Persisted chat history
    pub history: FileHistoryConfig,
    /// External knowledge base
    pub knowledge: FileKnowledgeConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Conversation transcript
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let assistant = &self.assistant;
        if assistant.min_delay_ms > assistant.max_delay_ms {
            return Err(ConfigValidationError::InvertedDelayRange {
                min: assistant.min_delay_ms,
                max: assistant.max_delay_ms,
            });
        }

        if assistant.max_input_chars == 0 {
            return Err(ConfigValidationError::ZeroInputLimit);
        }

        if self.history.max_messages == 0 {
            return Err(ConfigValidationError::ZeroHistoryCap);
        }

        if self.history.key.trim().is_empty() {
            return Err(ConfigValidationError::EmptyHistoryKey);
        }

        Ok(())
    }

    /// Session settings described by this file.
    pub fn session_config(&self) -> SessionConfig {
        let mut config = SessionConfig::default()
            .with_response_delay(self.assistant.response_delay())
            .with_history_cap(self.history.max_messages);
        if let Some(seed) = self.assistant.seed {
            config = config.with_seed(seed);
        }
        config
    }
}
