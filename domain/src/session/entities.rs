//! Session domain entities

use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A message in a conversation (Entity)
///
/// `content` is the final display text, never a template. `timestamp` is in
/// Unix epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: i64,
}

impl Message {
    pub fn user(id: impl Into<String>, content: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id: id.into(),
            role: Role::User,
            content: content.into(),
            timestamp,
        }
    }

    pub fn assistant(id: impl Into<String>, content: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id: id.into(),
            role: Role::Assistant,
            content: content.into(),
            timestamp,
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Ordered message sequence of one chat widget (Entity)
///
/// Timestamps never go backwards: a message stamped earlier than its
/// predecessor is clamped to the predecessor's timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from previously persisted messages.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        let mut conversation = Self::new();
        for message in messages {
            conversation.push(message);
        }
        conversation
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The last `cap` messages, oldest first.
    pub fn recent(&self, cap: usize) -> &[Message] {
        &self.messages[self.messages.len().saturating_sub(cap)..]
    }

    /// Append a message, returning a reference to it as stored.
    pub fn push(&mut self, mut message: Message) -> &Message {
        if let Some(last) = self.messages.last() {
            message.timestamp = message.timestamp.max(last.timestamp);
        }
        self.messages.push(message);
        let last = self.messages.len() - 1;
        &self.messages[last]
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
