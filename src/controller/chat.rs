//! Chat orchestration: an append-only transcript behind a two-state machine
//! (idle / awaiting response) that serializes sends.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::api::{self, ApiClient};
use crate::correlate::{Correlator, RequestKind};
use crate::models::ChatTurn;

/// Shown verbatim as the content of a synthetic error turn when a chat
/// request fails. The user recovers by sending again.
pub const CHAT_FAILURE_MESSAGE: &str =
    "Something went wrong while answering. Please try again.";

pub struct ChatController {
    inner: Arc<ChatInner>,
}

struct ChatInner {
    api: ApiClient,
    correlator: Arc<Correlator>,
    transcript: RwLock<Vec<ChatTurn>>,
    /// True exactly while a turn is in flight — the `isTyping` signal.
    awaiting: AtomicBool,
}

impl ChatController {
    pub fn new(api: ApiClient, correlator: Arc<Correlator>) -> Self {
        Self {
            inner: Arc::new(ChatInner {
                api,
                correlator,
                transcript: RwLock::new(Vec::new()),
                awaiting: AtomicBool::new(false),
            }),
        }
    }

    /// Send one user message and resolve it to an assistant or error turn.
    ///
    /// Returns `false` without touching any state when the message is
    /// empty/whitespace or another turn is already in flight; the caller
    /// should clear its input buffer only on `true`. The user turn is
    /// appended optimistically before the request goes out and stays in the
    /// transcript regardless of the outcome.
    pub async fn send(&self, message: &str) -> bool {
        let message = message.trim();
        if message.is_empty() {
            return false;
        }
        // Claim the single in-flight slot; a concurrent send loses here
        // before any state is touched.
        if self.inner.awaiting.swap(true, Ordering::SeqCst) {
            tracing::debug!("send ignored: a turn is already in flight");
            return false;
        }

        self.inner.transcript.write().push(ChatTurn::user(message));
        let messages = api::context_messages(&self.inner.transcript.read());

        let id = self.inner.correlator.begin(RequestKind::Chat);
        tracing::debug!(%id, "issuing chat turn");
        let outcome = self.inner.api.contextual_chat(&messages, id).await;

        // Sends are serialized by the awaiting flag, so staleness here means
        // the controller was reset while this turn was in flight.
        let current = self.inner.correlator.is_current(RequestKind::Chat, id);
        if current {
            let turn = match outcome {
                Ok(reply) => {
                    tracing::debug!(%id, citations = reply.citations.len(), "applying chat response");
                    ChatTurn::assistant(reply.content, reply.citations)
                }
                Err(e) => {
                    tracing::warn!(%id, "chat turn failed: {e}");
                    ChatTurn::error(CHAT_FAILURE_MESSAGE)
                }
            };
            self.inner.transcript.write().push(turn);
        } else {
            tracing::debug!(%id, "dropping superseded chat response");
        }
        self.inner.correlator.complete(RequestKind::Chat, id);
        // A reset already returned the controller to idle and may have let a
        // newer send claim the flag; only the still-current turn releases it.
        if current {
            self.inner.awaiting.store(false, Ordering::SeqCst);
        }
        true
    }

    /// True exactly while a turn is awaiting its response.
    pub fn is_typing(&self) -> bool {
        self.inner.awaiting.load(Ordering::SeqCst)
    }

    /// Snapshot of the session transcript, oldest turn first.
    pub fn transcript(&self) -> Vec<ChatTurn> {
        self.inner.transcript.read().clone()
    }

    /// Teardown: invalidate the pending request so an in-flight response is
    /// dropped instead of mutating the transcript, and return to idle.
    pub fn reset(&self) {
        self.inner.correlator.invalidate(RequestKind::Chat);
        self.inner.awaiting.store(false, Ordering::SeqCst);
    }
}
