//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for folio-assistant
#[derive(Parser, Debug)]
#[command(name = "folio-assistant")]
#[command(author, version, about = "Demir AI - rule-based portfolio chat assistant")]
#[command(long_about = r#"
Demir AI answers questions about Mehmet Demir's education, experience,
projects and skills from a fixed knowledge base, in Turkish or English.

Each question is folded to a plain form, scored against every topic by
keyword overlap, and answered with the best topic's canned reply, or with a
clarification when nothing matches well enough.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./folio.toml        Project-level config
3. ~/.config/folio-assistant/config.toml   Global config

Example:
  folio-assistant "eğitim bilgin nedir"
  folio-assistant --explain "what projects have you built?"
  folio-assistant --locale en
"#)]
pub struct Cli {
    /// Ask one question and exit (starts the chat when omitted)
    pub question: Option<String>,

    /// Also print the matched topic, its score and the detected language
    #[arg(long)]
    pub explain: bool,

    /// UI locale such as "en_US" or "tr" (default: LC_ALL, LC_MESSAGES, LANG)
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Seed for reply delays and answer variations
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Knowledge base file replacing the built-in one
    #[arg(long, value_name = "PATH")]
    pub knowledge: Option<PathBuf>,

    /// Do not read or write the persisted chat history
    #[arg(long)]
    pub no_history: bool,

    /// Directory for the persisted chat history
    #[arg(long, value_name = "DIR")]
    pub history_dir: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also write diagnostics to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Append a JSONL transcript of the conversation to this file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Locale used to pick the UI language.
    ///
    /// `--locale` wins, then the first non-empty of `LC_ALL`, `LC_MESSAGES`
    /// and `LANG`. Empty when none is set.
    pub fn resolve_locale(&self) -> String {
        self.locale.clone().unwrap_or_else(|| {
            ["LC_ALL", "LC_MESSAGES", "LANG"]
                .iter()
                .filter_map(|name| std::env::var(name).ok())
                .find(|value| !value.trim().is_empty())
                .unwrap_or_default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_one_shot() {
        let cli = Cli::parse_from(["folio-assistant", "--explain", "-vv", "egitim bilgin nedir"]);
        assert_eq!(cli.question.as_deref(), Some("egitim bilgin nedir"));
        assert!(cli.explain);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_chat_flags() {
        let cli = Cli::parse_from([
            "folio-assistant",
            "--seed",
            "42",
            "--no-history",
            "--locale",
            "en_US.UTF-8",
            "--knowledge",
            "kb.toml",
        ]);
        assert!(cli.question.is_none());
        assert_eq!(cli.seed, Some(42));
        assert!(cli.no_history);
        assert_eq!(cli.knowledge, Some(PathBuf::from("kb.toml")));
        assert_eq!(cli.resolve_locale(), "en_US.UTF-8");
    }
}
