//! Persisted message log codec.
//!
//! The log is a single JSON array of [`Message`] objects with no schema
//! version. Anything that does not decode cleanly is rejected as a whole;
//! callers start from an empty conversation instead of migrating.

use super::entities::Message;
use thiserror::Error;

/// Default number of messages kept when a log is read back
pub const DEFAULT_HISTORY_CAP: usize = 50;

/// Records larger than this are discarded without parsing
pub const MAX_RECORD_BYTES: usize = 1024 * 1024;

/// Why a persisted log was discarded
#[derive(Error, Debug)]
pub enum HistoryDecodeError {
    #[error("history record is {0} bytes, over the 1 MiB limit")]
    Oversized(usize),

    #[error("history record is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("history record is not a JSON array")]
    NotASequence,

    #[error("history record contains an invalid message: {0}")]
    InvalidMessage(#[source] serde_json::Error),
}

/// Serialize the full message sequence.
pub fn encode_history(messages: &[Message]) -> Result<String, serde_json::Error> {
    serde_json::to_string(messages)
}

/// Parse a persisted log, keeping only the most recent `cap` messages.
pub fn decode_history(raw: &str, cap: usize) -> Result<Vec<Message>, HistoryDecodeError> {
    if raw.len() > MAX_RECORD_BYTES {
        return Err(HistoryDecodeError::Oversized(raw.len()));
    }

    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(HistoryDecodeError::Malformed)?;
    if !value.is_array() {
        return Err(HistoryDecodeError::NotASequence);
    }

    let mut messages: Vec<Message> =
        serde_json::from_value(value).map_err(HistoryDecodeError::InvalidMessage)?;
    if messages.len() > cap {
        messages.drain(..messages.len() - cap);
    }
    Ok(messages)
}
