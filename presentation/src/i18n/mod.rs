//! Localized UI strings
//!
//! Static text (banner, prompt, help, command feedback) follows the
//! [`UiLanguage`] chosen once at start-up. Answers are not translated here;
//! their language is detected per message.

use folio_domain::{Language, UiLanguage};

/// UI strings for one language
#[derive(Debug)]
pub struct UiText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub prompt: &'static str,
    pub commands_header: &'static str,
    pub help_help: &'static str,
    pub help_history: &'static str,
    pub help_clear: &'static str,
    pub help_why: &'static str,
    pub help_quit: &'static str,
    pub thinking: &'static str,
    pub you: &'static str,
    pub assistant: &'static str,
    pub history_empty: &'static str,
    pub history_cleared: &'static str,
    pub nothing_to_explain: &'static str,
    pub unknown_command: &'static str,
    pub busy: &'static str,
    pub cancelled: &'static str,
    pub goodbye: &'static str,
    pub fallback_label: &'static str,
    pub detected_language: &'static str,
    pub scores_header: &'static str,
    restored: fn(usize) -> String,
    truncated: fn(usize) -> String,
}

impl UiText {
    /// Text table for `language`
    pub fn for_language(language: UiLanguage) -> &'static UiText {
        match language.language() {
            Language::Tr => &TURKISH,
            Language::En => &ENGLISH,
        }
    }

    /// Notice shown when earlier messages were restored
    pub fn restored(&self, count: usize) -> String {
        (self.restored)(count)
    }

    /// Notice shown when input was cut to `max` characters
    pub fn truncated(&self, max: usize) -> String {
        (self.truncated)(max)
    }
}

static TURKISH: UiText = UiText {
    title: "Demir AI",
    subtitle: "Mehmet Demir'in dijital asistanı",
    prompt: "sor",
    commands_header: "Komutlar:",
    help_help: "Bu yardımı göster",
    help_history: "Sohbet geçmişini göster",
    help_clear: "Sohbet geçmişini sil",
    help_why: "Son sorunun puan tablosunu göster",
    help_quit: "Çıkış",
    thinking: "Düşünüyor...",
    you: "Sen",
    assistant: "Demir AI",
    history_empty: "Henüz mesaj yok.",
    history_cleared: "Sohbet geçmişi silindi.",
    nothing_to_explain: "Henüz bir soru sorulmadı.",
    unknown_command: "Bilinmeyen komut",
    busy: "Önceki cevap bekleniyor.",
    cancelled: "Cevap iptal edildi.",
    goodbye: "Görüşmek üzere!",
    fallback_label: "eşleşme yok (yedek cevap)",
    detected_language: "Algılanan dil",
    scores_header: "Puanlar",
    restored: |count| format!("Önceki sohbetten {count} mesaj yüklendi (/history)."),
    truncated: |max| format!("Mesaj {max} karaktere kısaltıldı."),
};

static ENGLISH: UiText = UiText {
    title: "Demir AI",
    subtitle: "Mehmet Demir's digital assistant",
    prompt: "ask",
    commands_header: "Commands:",
    help_help: "Show this help",
    help_history: "Show the conversation",
    help_clear: "Delete the conversation history",
    help_why: "Show the score table for the last question",
    help_quit: "Exit",
    thinking: "Thinking...",
    you: "You",
    assistant: "Demir AI",
    history_empty: "No messages yet.",
    history_cleared: "Conversation history cleared.",
    nothing_to_explain: "No question asked yet.",
    unknown_command: "Unknown command",
    busy: "Still waiting for the previous reply.",
    cancelled: "Reply cancelled.",
    goodbye: "Bye!",
    fallback_label: "no match (fallback)",
    detected_language: "Detected language",
    scores_header: "Scores",
    restored: |count| format!("Restored {count} messages from the previous chat (/history)."),
    truncated: |max| format!("Message shortened to {max} characters."),
};
