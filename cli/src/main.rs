//! CLI entrypoint for folio-assistant
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use folio_application::{
    ChatSession, ConversationLogger, HistoryStore, MemoryHistoryStore, NoConversationLogger,
    SessionConfig,
};
use folio_domain::{Matcher, Question, UiLanguage, detect};
use folio_infrastructure::{
    ConfigLoader, FileConfig, FileHistoryStore, JsonlConversationLogger, KnowledgeLoader,
};
use folio_presentation::{ChatRepl, Cli, ConsoleFormatter, ReplConfig, UiText};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file diagnostics are flushed on exit
    let _log_guard = init_tracing(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting folio-assistant");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {e}"))?
    };
    file_config
        .validate()
        .context("Invalid configuration")?;

    if cli.no_color || !file_config.output.color {
        colored::control::set_override(false);
    }

    let text = UiText::for_language(UiLanguage::from_locale(&cli.resolve_locale()));

    let mut session_config = file_config.session_config();
    if let Some(seed) = cli.seed {
        session_config = session_config.with_seed(seed);
    }

    // === Dependency Injection ===
    let knowledge_path = cli.knowledge.as_ref().or(file_config.knowledge.path.as_ref());
    let knowledge = KnowledgeLoader::load(knowledge_path.map(|p| p.as_path()))
        .context("Failed to load knowledge base")?;
    info!("Knowledge base loaded: {} entries", knowledge.entries().len());
    let matcher = Arc::new(Matcher::new(knowledge));

    // Single question mode
    if let Some(question) = &cli.question {
        return answer_once(&matcher, question, &session_config, cli.explain, text);
    }

    let history_dir = history_dir(&cli, &file_config);
    let store = history_store(history_dir.as_deref(), &file_config);
    let logger = conversation_logger(&cli, &file_config);
    let session = ChatSession::restore(matcher, store, logger, session_config);

    let repl_config =
        ReplConfig::default().with_max_input_chars(file_config.assistant.max_input_chars);
    let repl_config = match &history_dir {
        Some(dir) => repl_config.with_input_history_dir(dir),
        None => repl_config.with_input_history(None),
    };

    let mut repl = ChatRepl::new(session, text).with_config(repl_config);
    repl.run().await?;

    Ok(())
}

/// Set up diagnostics on stderr, plus an optional plain-text log file.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create log directory {}", parent.display())
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Answer a single question without touching the persisted chat.
fn answer_once(
    matcher: &Matcher,
    question: &str,
    config: &SessionConfig,
    explain: bool,
    text: &UiText,
) -> Result<()> {
    let Some(question) = Question::try_new(question) else {
        bail!("Question is empty");
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let outcome = matcher.resolve(question.content(), &mut rng);

    println!("{}", outcome.response);

    if explain {
        let ranked = matcher.rank(question.content());
        println!();
        println!(
            "{}",
            ConsoleFormatter::explanation(
                text,
                question.content(),
                &detect(question.content()),
                &ranked
            )
        );
    }

    Ok(())
}

/// Directory holding the chat record and the line-editor history.
///
/// `None` when persistence is disabled or no data directory exists.
fn history_dir(cli: &Cli, config: &FileConfig) -> Option<PathBuf> {
    if cli.no_history || !config.history.enabled {
        info!("Chat history persistence disabled");
        return None;
    }

    let dir = cli.history_dir.clone().or_else(|| config.history.resolved_dir());
    if dir.is_none() {
        warn!("No data directory available; chat history will not be saved");
    }
    dir
}

fn history_store(dir: Option<&Path>, config: &FileConfig) -> Arc<dyn HistoryStore> {
    match dir {
        Some(dir) => {
            let store = FileHistoryStore::new(dir, &config.history.key);
            info!("Chat history: {}", store.path().display());
            Arc::new(store)
        }
        None => Arc::new(MemoryHistoryStore::new()),
    }
}

fn conversation_logger(cli: &Cli, config: &FileConfig) -> Arc<dyn ConversationLogger> {
    let path = cli
        .conversation_log
        .as_ref()
        .or(config.logging.conversation_log.as_ref());

    match path.and_then(JsonlConversationLogger::new) {
        Some(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    }
}
