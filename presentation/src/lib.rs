//! Presentation layer for folio-assistant
//!
//! This crate contains the CLI definition, the interactive chat REPL,
//! localized UI strings, output formatting and the "thinking" spinner.

pub mod chat;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use config::ReplConfig;
pub use i18n::UiText;
pub use output::console::ConsoleFormatter;
pub use progress::spinner::ThinkingSpinner;
