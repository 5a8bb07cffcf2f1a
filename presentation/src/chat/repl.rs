//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::config::ReplConfig;
use crate::i18n::UiText;
use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::ThinkingSpinner;
use folio_application::{ChatSession, PendingReply, RejectReason, SubmitOutcome};
use folio_domain::core::string::truncate_chars;
use folio_domain::detect;
use reedline::{
    DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal,
};
use std::io;
use tracing::{debug, warn};

/// Input history entries kept by the line editor
const INPUT_HISTORY_CAPACITY: usize = 500;

/// What a slash command asks the loop to do
#[derive(Debug, PartialEq, Eq)]
enum CommandResult {
    Continue,
    Exit,
}

/// Interactive chat REPL
pub struct ChatRepl {
    session: ChatSession,
    config: ReplConfig,
    text: &'static UiText,
    last_question: Option<String>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(session: ChatSession, text: &'static UiText) -> Self {
        Self {
            session,
            config: ReplConfig::default(),
            text,
            last_question: None,
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL until `/quit` or Ctrl-D
    pub async fn run(&mut self) -> io::Result<()> {
        let mut line_editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(self.text.prompt.to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(buffer) => {
                    let line = buffer.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line) == CommandResult::Exit {
                            break;
                        }
                        continue;
                    }

                    self.process_question(line).await;
                }
                Signal::CtrlD => {
                    println!("{}", self.text.goodbye);
                    break;
                }
                _ => {
                    // Ctrl-C clears the line; keep going
                    println!("^C");
                }
            }
        }

        self.session.shutdown();
        Ok(())
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();

        let Some(path) = &self.config.input_history else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(INPUT_HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Input history unavailable ({}): {}", path.display(), e);
                editor
            }
        }
    }

    fn print_welcome(&self) {
        println!("{}", ConsoleFormatter::banner(self.text));

        let restored = self.session.messages().len();
        if restored > 0 {
            println!("{}", ConsoleFormatter::notice(&self.text.restored(restored)));
            println!();
        }
    }

    /// Handle slash commands.
    fn handle_command(&mut self, cmd: &str) -> CommandResult {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("{}", self.text.goodbye);
                CommandResult::Exit
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("{}", ConsoleFormatter::help(self.text));
                CommandResult::Continue
            }
            "/history" => {
                println!();
                println!(
                    "{}",
                    ConsoleFormatter::history(self.text, &self.session.messages())
                );
                CommandResult::Continue
            }
            "/clear" => {
                self.session.clear_history();
                self.last_question = None;
                println!("{}", ConsoleFormatter::notice(self.text.history_cleared));
                CommandResult::Continue
            }
            "/why" => {
                match &self.last_question {
                    Some(question) => {
                        let ranked = self.session.matcher().rank(question);
                        println!();
                        println!(
                            "{}",
                            ConsoleFormatter::explanation(
                                self.text,
                                question,
                                &detect(question),
                                &ranked
                            )
                        );
                    }
                    None => println!("{}", ConsoleFormatter::notice(self.text.nothing_to_explain)),
                }
                CommandResult::Continue
            }
            _ => {
                println!("{}: {}", self.text.unknown_command, cmd);
                println!("{}", ConsoleFormatter::help(self.text));
                CommandResult::Continue
            }
        }
    }

    /// Cut overlong input at a character boundary.
    fn prepare_input<'a>(&self, line: &'a str) -> &'a str {
        let prepared = truncate_chars(line, self.config.max_input_chars);
        if prepared.len() < line.len() {
            println!(
                "{}",
                ConsoleFormatter::notice(&self.text.truncated(self.config.max_input_chars))
            );
        }
        prepared
    }

    async fn process_question(&mut self, line: &str) {
        let question = self.prepare_input(line);

        let pending = match self.session.submit(question) {
            SubmitOutcome::Accepted(pending) => pending,
            SubmitOutcome::Rejected(RejectReason::Busy) => {
                println!("{}", ConsoleFormatter::notice(self.text.busy));
                return;
            }
            SubmitOutcome::Rejected(reason) => {
                debug!("Submission rejected: {:?}", reason);
                return;
            }
        };
        self.last_question = Some(question.trim().to_string());

        println!();
        let spinner = ThinkingSpinner::start(self.text.thinking, self.config.show_progress);
        let reply = Self::await_reply(pending).await;
        spinner.finish();

        match reply {
            Some(message) => println!("{}", ConsoleFormatter::reply(self.text, &message.content)),
            None => println!("{}", ConsoleFormatter::notice(self.text.cancelled)),
        }
    }

    /// Wait for the reply; Ctrl-C cancels it.
    async fn await_reply(pending: PendingReply) -> Option<folio_domain::Message> {
        let cancel = pending.canceller();
        tokio::select! {
            reply = pending.wait() => reply,
            _ = tokio::signal::ctrl_c() => {
                cancel();
                None
            }
        }
    }
}
