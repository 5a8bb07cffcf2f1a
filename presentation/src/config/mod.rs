//! Presentation-level configuration
//!
//! Settings for the interactive chat, filled in by the composition root from
//! the merged file configuration and CLI flags.

use std::path::{Path, PathBuf};

/// File name of the line-editor history
pub const INPUT_HISTORY_FILE: &str = "input_history.txt";

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Longer input is cut to this many characters before submission
    pub max_input_chars: usize,
    /// Show the "thinking" spinner while a reply is pending
    pub show_progress: bool,
    /// Line-editor history file (up-arrow recall); `None` keeps it in memory
    pub input_history: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 250,
            show_progress: true,
            input_history: dirs::data_dir()
                .map(|p| p.join("folio-assistant").join(INPUT_HISTORY_FILE)),
        }
    }
}

impl ReplConfig {
    pub fn with_max_input_chars(mut self, max: usize) -> Self {
        self.max_input_chars = max;
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_input_history(mut self, path: Option<PathBuf>) -> Self {
        self.input_history = path;
        self
    }

    /// Keep the line-editor history in `dir`, next to the chat record.
    pub fn with_input_history_dir(mut self, dir: &Path) -> Self {
        self.input_history = Some(dir.join(INPUT_HISTORY_FILE));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input_history_location() {
        if let Some(path) = ReplConfig::default().input_history {
            assert!(path.ends_with("folio-assistant/input_history.txt"));
        }
    }

    #[test]
    fn test_input_history_follows_history_dir() {
        let config = ReplConfig::default().with_input_history_dir(Path::new("/tmp/folio-chat"));
        assert_eq!(
            config.input_history,
            Some(PathBuf::from("/tmp/folio-chat/input_history.txt"))
        );
    }

    #[test]
    fn test_input_history_can_be_disabled() {
        let config = ReplConfig::default().with_input_history(None);
        assert!(config.input_history.is_none());
    }
}
