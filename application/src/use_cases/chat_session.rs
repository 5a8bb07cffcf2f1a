//! Chat session use case.
//!
//! Drives one chat widget: owns the message sequence, mirrors it to the
//! [`HistoryStore`] after every change, and produces assistant replies with
//! the [`Matcher`] after a short simulated delay.
//!
//! ```text
//!          submit(text)                 reply delivered / cancelled
//!   Idle ───────────────▶ AwaitingResponse ───────────────────────▶ Idle
//! ```
//!
//! At most one reply is in flight: `submit` while awaiting is rejected.

use crate::config::SessionConfig;
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::history_store::HistoryStore;
use folio_domain::core::string::truncate;
use folio_domain::{
    Conversation, Matcher, Message, Question, decode_history, encode_history,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Where the session is in its turn-taking cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Ready for the next question
    Idle,
    /// A reply is scheduled and has not been delivered yet
    AwaitingResponse,
}

/// Why a submission was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Blank or whitespace-only input
    Empty,
    /// A reply is still pending
    Busy,
    /// The session was shut down
    Closed,
}

/// Result of [`ChatSession::submit`]
#[derive(Debug)]
pub enum SubmitOutcome {
    Accepted(PendingReply),
    Rejected(RejectReason),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }

    pub fn into_pending(self) -> Option<PendingReply> {
        match self {
            SubmitOutcome::Accepted(pending) => Some(pending),
            SubmitOutcome::Rejected(_) => None,
        }
    }
}

/// Handle to a scheduled assistant reply.
///
/// Dropping the handle does not cancel the reply; call [`cancel`](Self::cancel)
/// or [`ChatSession::shutdown`] for that.
#[derive(Debug)]
pub struct PendingReply {
    handle: JoinHandle<Option<Message>>,
    token: CancellationToken,
}

impl PendingReply {
    /// Wait for the reply. `None` if it was cancelled.
    pub async fn wait(self) -> Option<Message> {
        self.handle.await.ok().flatten()
    }

    /// Cancel this reply only. The session returns to idle without
    /// appending anything.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// A detached way to cancel this reply, usable after
    /// [`wait`](Self::wait) has taken the handle.
    pub fn canceller(&self) -> impl Fn() + Send + Sync + 'static {
        let token = self.token.clone();
        move || token.cancel()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

struct SessionState {
    conversation: Conversation,
    phase: SessionPhase,
}

struct Shared {
    state: Mutex<SessionState>,
    rng: Mutex<StdRng>,
    matcher: Arc<Matcher>,
    store: Arc<dyn HistoryStore>,
    logger: Arc<dyn ConversationLogger>,
    config: SessionConfig,
    shutdown: CancellationToken,
}

/// One chat widget's conversation.
///
/// Cloning is cheap and every clone drives the same session.
#[derive(Clone)]
pub struct ChatSession {
    shared: Arc<Shared>,
}

impl ChatSession {
    /// Create a session, restoring whatever history the store holds.
    ///
    /// A missing, unreadable or malformed record yields an empty session;
    /// restoring never fails.
    pub fn restore(
        matcher: Arc<Matcher>,
        store: Arc<dyn HistoryStore>,
        logger: Arc<dyn ConversationLogger>,
        config: SessionConfig,
    ) -> Self {
        let messages = match store.read() {
            Ok(Some(raw)) => match decode_history(&raw, config.history_cap) {
                Ok(messages) => messages,
                Err(e) => {
                    warn!("Discarding persisted chat history: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read chat history: {}", e);
                Vec::new()
            }
        };
        info!("Chat session restored with {} messages", messages.len());

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(SessionState {
                    conversation: Conversation::from_messages(messages),
                    phase: SessionPhase::Idle,
                }),
                rng: Mutex::new(rng),
                matcher,
                store,
                logger,
                config,
                shutdown: CancellationToken::new(),
            }),
        }
    }

    /// Snapshot of the message sequence
    pub fn messages(&self) -> Vec<Message> {
        lock(&self.shared.state).conversation.messages().to_vec()
    }

    pub fn phase(&self) -> SessionPhase {
        lock(&self.shared.state).phase
    }

    pub fn matcher(&self) -> &Matcher {
        &self.shared.matcher
    }

    /// Submit a visitor question.
    ///
    /// The user message is appended before this returns; the reply is
    /// produced by a background task after the configured delay. Must be
    /// called from within a tokio runtime.
    pub fn submit(&self, text: &str) -> SubmitOutcome {
        let Some(question) = Question::try_new(text) else {
            return SubmitOutcome::Rejected(RejectReason::Empty);
        };

        let user_message = {
            let mut state = lock(&self.shared.state);
            if self.shared.shutdown.is_cancelled() {
                return SubmitOutcome::Rejected(RejectReason::Closed);
            }
            if state.phase == SessionPhase::AwaitingResponse {
                debug!("Ignoring submission while a reply is pending");
                return SubmitOutcome::Rejected(RejectReason::Busy);
            }

            let message = Message::user(new_message_id(), question.content(), now_millis());
            let stored = state.conversation.push(message).clone();
            state.phase = SessionPhase::AwaitingResponse;
            self.shared.persist(&state.conversation);
            stored
        };

        self.shared.logger.log(ConversationEvent::new(
            "user_message",
            serde_json::json!({
                "id": user_message.id,
                "content": user_message.content,
            }),
        ));

        let delay = self
            .shared
            .config
            .response_delay
            .sample(&mut *lock(&self.shared.rng));
        debug!(
            "Scheduling reply to '{}' in {:?}",
            truncate(question.content(), 60),
            delay
        );

        let token = self.shared.shutdown.child_token();
        let task_token = token.clone();
        let shared = Arc::clone(&self.shared);
        let content = question.into_content();
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => {
                    shared.abandon_reply();
                    None
                }
                _ = tokio::time::sleep(delay) => Some(shared.deliver_reply(&content)),
            }
        });

        SubmitOutcome::Accepted(PendingReply { handle, token })
    }

    /// Empty the conversation and delete the persisted record.
    ///
    /// A reply already in flight is not cancelled; it lands in the emptied
    /// conversation.
    pub fn clear_history(&self) {
        {
            let mut state = lock(&self.shared.state);
            state.conversation.clear();
            if let Err(e) = self.shared.store.remove() {
                warn!("Could not remove chat history: {}", e);
            }
        }
        info!("Chat history cleared");
        self.shared.logger.log(ConversationEvent::new(
            "history_cleared",
            serde_json::json!({}),
        ));
    }

    /// Cancel every pending reply and refuse further submissions.
    pub fn shutdown(&self) {
        self.shared.shutdown.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.shared.shutdown.is_cancelled()
    }
}

impl Shared {
    fn deliver_reply(&self, question: &str) -> Message {
        let outcome = self.matcher.resolve(question, &mut *lock(&self.rng));
        debug!(
            "Matched {} (score {}, language {})",
            outcome.entry_id.as_deref().unwrap_or("<fallback>"),
            outcome.score,
            outcome.language
        );

        let stored = {
            let mut state = lock(&self.state);
            let message = Message::assistant(new_message_id(), outcome.response, now_millis());
            let stored = state.conversation.push(message).clone();
            state.phase = SessionPhase::Idle;
            self.persist(&state.conversation);
            stored
        };

        self.logger.log(ConversationEvent::new(
            "assistant_message",
            serde_json::json!({
                "id": stored.id,
                "entry": outcome.entry_id,
                "score": outcome.score,
                "language": outcome.language,
                "content": stored.content,
            }),
        ));
        stored
    }

    fn abandon_reply(&self) {
        lock(&self.state).phase = SessionPhase::Idle;
        debug!("Pending reply cancelled");
    }

    /// Best-effort mirror of the conversation to the store.
    ///
    /// Only the most recent `history_cap` messages are written, so the record
    /// stays bounded however long the session runs.
    fn persist(&self, conversation: &Conversation) {
        let record = match encode_history(conversation.recent(self.config.history_cap)) {
            Ok(record) => record,
            Err(e) => {
                warn!("Could not encode chat history: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.write(&record) {
            warn!("Chat history save failed: {}", e);
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn new_message_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
