//! Support conversation sessions
//!
//! This module manages a single user's conversation with the support
//! assistant:
//! - Ordered message history with monotonic ids
//! - Welcome message on first open
//! - Non-blocking submission with a delayed, cancellable assistant reply
//! - Typing indicator while a reply is pending

use crate::assistant::ResponseResolver;
use crate::conversation::message::{Message, MessageId};
use crate::conversation::scheduler::ReplyScheduler;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

/// Conversation behavior knobs
///
/// Defaults give the production feel of a one to two second reply; tests
/// shrink the delays to keep runs fast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Welcome message injected on first open; empty disables the welcome
    pub welcome_text: String,
    /// Lower bound of the simulated reply delay in milliseconds (inclusive)
    pub reply_delay_min_ms: u64,
    /// Upper bound of the simulated reply delay in milliseconds (exclusive)
    pub reply_delay_max_ms: u64,
}

impl SessionConfig {
    /// Set both reply delay bounds at runtime
    pub fn set_reply_delay_ms(&mut self, min_ms: u64, max_ms: u64) {
        self.reply_delay_min_ms = min_ms;
        self.reply_delay_max_ms = max_ms;
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            welcome_text: "Hi! I'm the RoomDesk assistant. Ask me anything about bookings, \
                           mess plans, or payments."
                .to_string(),
            reply_delay_min_ms: 1000,
            reply_delay_max_ms: 2000,
        }
    }
}

/// Mutable state shared between the session handle and its reply worker
#[derive(Debug)]
pub(crate) struct SessionState {
    /// Whether the chat widget is open
    pub(crate) is_open: bool,
    /// Ordered message history, oldest first
    pub(crate) messages: Vec<Message>,
    /// Whether the assistant is "typing" (at least one reply is pending)
    pub(crate) is_assistant_typing: bool,
    /// Number of replies scheduled but not yet appended
    pub(crate) pending_replies: usize,
    /// Bumped on close to invalidate replies scheduled before it
    pub(crate) epoch: u64,
    /// Next message id to hand out
    pub(crate) next_message_id: u64,
    /// Behavior knobs
    pub(crate) config: SessionConfig,
}

impl SessionState {
    /// Hand out the next monotonic message id
    pub(crate) fn next_id(&mut self) -> MessageId {
        let id = MessageId(self.next_message_id);
        self.next_message_id += 1;
        id
    }
}

/// A support conversation between one user and the assistant
///
/// The conversation owns its message history and a background reply worker.
/// All state lives in memory; dropping the conversation aborts the worker
/// and discards the history.
///
/// Must be created inside a Tokio runtime.
pub struct Conversation {
    /// Conversation ID
    id: Uuid,
    /// Shared state, also held by the reply worker
    state: Arc<Mutex<SessionState>>,
    /// Reply worker handle, aborted on drop
    scheduler: ReplyScheduler,
}

impl Conversation {
    /// Create a new conversation in the closed state.
    ///
    /// # Arguments
    /// * `resolver` - The resolver shared across conversations
    /// * `config` - Behavior knobs for this conversation
    pub fn new(resolver: Arc<ResponseResolver>, config: SessionConfig) -> Self {
        let id = Uuid::new_v4();
        let state = Arc::new(Mutex::new(SessionState {
            is_open: false,
            messages: Vec::new(),
            is_assistant_typing: false,
            pending_replies: 0,
            epoch: 0,
            next_message_id: 1,
            config,
        }));
        let scheduler = ReplyScheduler::spawn(state.clone(), resolver);

        debug!("Created conversation {}", id);
        Self {
            id,
            state,
            scheduler,
        }
    }

    /// Conversation ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Open the conversation.
    ///
    /// The first open of an empty conversation appends the assistant's
    /// welcome message; reopening never adds another one because the
    /// history is no longer empty.
    pub async fn open(&self) {
        let mut state = self.state.lock().await;
        state.is_open = true;

        if state.messages.is_empty() && !state.config.welcome_text.is_empty() {
            let id = state.next_id();
            let text = state.config.welcome_text.clone();
            state.messages.push(Message::assistant(id, &text));
            info!("Opened conversation {} with welcome message", self.id);
        } else {
            debug!("Opened conversation {}", self.id);
        }
    }

    /// Close the conversation.
    ///
    /// History is kept for a later reopen, but replies still pending are
    /// cancelled and the typing flag drops. Closing an already closed
    /// conversation is a no-op.
    pub async fn close(&self) {
        let mut state = self.state.lock().await;
        if !state.is_open {
            return;
        }

        state.is_open = false;
        state.epoch += 1;
        if state.pending_replies > 0 {
            debug!(
                "Cancelled {} pending replies for conversation {}",
                state.pending_replies, self.id
            );
        }
        state.pending_replies = 0;
        state.is_assistant_typing = false;

        info!("Closed conversation {}", self.id);
    }

    /// Submit a user message and schedule the assistant's reply.
    ///
    /// The trimmed text is appended immediately and the call returns without
    /// waiting for the reply; the typing flag is observable right away and
    /// the reply lands after the configured delay. Replies arrive in
    /// submission order, one per message.
    ///
    /// # Arguments
    /// * `text` - The user's message; surrounding whitespace is trimmed
    ///
    /// # Returns
    /// The id of the appended message, or `None` when the text is empty
    /// after trimming or the conversation is closed
    pub async fn submit_user_message(&self, text: &str) -> Option<MessageId> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("Ignoring empty submission to conversation {}", self.id);
            return None;
        }

        let mut state = self.state.lock().await;
        if !state.is_open {
            debug!("Ignoring submission to closed conversation {}", self.id);
            return None;
        }

        let id = state.next_id();
        state.messages.push(Message::user(id, trimmed));
        state.pending_replies += 1;
        state.is_assistant_typing = true;

        // Enqueue under the lock: mailbox order must match history append
        // order even with concurrent submitters
        self.scheduler.schedule(trimmed.to_string(), state.epoch);

        Some(id)
    }

    /// Snapshot of the message history, oldest first
    pub async fn messages(&self) -> Vec<Message> {
        self.state.lock().await.messages.clone()
    }

    /// Number of messages in the history
    pub async fn message_count(&self) -> usize {
        self.state.lock().await.messages.len()
    }

    /// Whether the conversation is open
    pub async fn is_open(&self) -> bool {
        self.state.lock().await.is_open
    }

    /// Whether the assistant is "typing" a reply
    pub async fn is_assistant_typing(&self) -> bool {
        self.state.lock().await.is_assistant_typing
    }
}
