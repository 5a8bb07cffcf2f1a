//! Console output formatter for chat messages and match diagnostics

use crate::i18n::UiText;
use colored::Colorize;
use folio_domain::{Detection, DetectionReason, MIN_CONFIDENCE, Message, RankedEntry, Role};

/// Formats chat output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Welcome banner with the command list
    pub fn banner(text: &UiText) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&format!("{}\n", "╭─────────────────────────────────────────────╮".cyan()));
        output.push_str(&format!(
            "{} {:^43} {}\n",
            "│".cyan(),
            text.title.bold(),
            "│".cyan()
        ));
        output.push_str(&format!("{} {:^43} {}\n", "│".cyan(), text.subtitle, "│".cyan()));
        output.push_str(&format!("{}\n", "╰─────────────────────────────────────────────╯".cyan()));
        output.push('\n');
        output.push_str(&Self::help(text));
        output
    }

    /// Command list
    pub fn help(text: &UiText) -> String {
        let rows = [
            ("/help", text.help_help),
            ("/history", text.help_history),
            ("/clear", text.help_clear),
            ("/why", text.help_why),
            ("/quit, /exit, /q", text.help_quit),
        ];

        let mut output = format!("{}\n", text.commands_header.bold());
        for (command, description) in rows {
            output.push_str(&format!("  {:<18} {}\n", command.yellow(), description));
        }
        output
    }

    /// An assistant reply, printed verbatim (line breaks preserved)
    pub fn reply(text: &UiText, content: &str) -> String {
        format!("{}\n{}\n", format!("{}:", text.assistant).cyan().bold(), content)
    }

    /// A short informational line
    pub fn notice(message: &str) -> String {
        format!("{}", message.dimmed())
    }

    /// The whole conversation, oldest first
    pub fn history(text: &UiText, messages: &[Message]) -> String {
        if messages.is_empty() {
            return Self::notice(text.history_empty);
        }

        let mut output = String::new();
        for message in messages {
            let label = match message.role {
                Role::User => format!("{}:", text.you).green().bold(),
                Role::Assistant => format!("{}:", text.assistant).cyan().bold(),
            };
            output.push_str(&format!("{}\n{}\n\n", label, message.content));
        }
        output
    }

    /// Why a question got the answer it got.
    ///
    /// Lists every entry with a non-zero score, highest first, and marks
    /// the winner. The winner is the first entry with the top score, as long
    /// as that score reaches the confidence threshold.
    pub fn explanation(
        text: &UiText,
        question: &str,
        detection: &Detection,
        ranked: &[RankedEntry],
    ) -> String {
        let winner = Self::winner(ranked);

        let mut output = String::new();
        output.push_str(&format!("{} {}\n", "Q:".bold(), question));
        output.push_str(&format!(
            "{} {} ({})\n",
            format!("{}:", text.detected_language).cyan(),
            detection.language.name(),
            Self::reason(&detection.reason)
        ));

        match winner {
            Some(entry) => output.push_str(&format!(
                "{} {} ({})\n",
                "=>".green().bold(),
                entry.id.green().bold(),
                entry.score
            )),
            None => output.push_str(&format!("{} {}\n", "=>".yellow().bold(), text.fallback_label)),
        }

        let mut scored: Vec<&RankedEntry> = ranked.iter().filter(|r| r.score > 0).collect();
        // Stable sort keeps knowledge-base order among equal scores
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        if !scored.is_empty() {
            output.push_str(&format!("{}\n", text.scores_header.bold()));
            for entry in scored {
                let line = format!("  {:>4}  {}", entry.score, entry.id);
                if entry.score < MIN_CONFIDENCE {
                    output.push_str(&format!("{}\n", line.dimmed()));
                } else {
                    output.push_str(&format!("{}\n", line));
                }
            }
        }
        output
    }

    fn winner(ranked: &[RankedEntry]) -> Option<&RankedEntry> {
        let mut best: Option<&RankedEntry> = None;
        for entry in ranked {
            if best.is_none_or(|b| entry.score > b.score) {
                best = Some(entry);
            }
        }
        best.filter(|b| b.score >= MIN_CONFIDENCE)
    }

    fn reason(reason: &DetectionReason) -> String {
        match reason {
            DetectionReason::Prefix => "prefix".to_string(),
            DetectionReason::PrimaryLetter => "turkish letters".to_string(),
            DetectionReason::Hints { primary, secondary } => {
                format!("hints tr={primary} en={secondary}")
            }
            DetectionReason::Default => "default".to_string(),
        }
    }
}
