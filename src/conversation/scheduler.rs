//! Delayed assistant replies
//!
//! One worker task per conversation consumes scheduled replies from a
//! mailbox, sleeps for the simulated typing delay, resolves the response,
//! and appends it, strictly in submission order. Replies scheduled before a
//! close are discarded by an epoch check; dropping the scheduler aborts the
//! worker.

use crate::assistant::ResponseResolver;
use crate::conversation::message::Message;
use crate::conversation::session::SessionState;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// A reply waiting for its typing delay
struct PendingReply {
    /// The user text to resolve
    text: String,
    /// Session epoch at submission time
    epoch: u64,
}

/// Handle to a conversation's reply worker
pub(crate) struct ReplyScheduler {
    tx: UnboundedSender<PendingReply>,
    worker: JoinHandle<()>,
}

impl ReplyScheduler {
    /// Spawn the reply worker for a conversation.
    ///
    /// Must be called inside a Tokio runtime.
    pub(crate) fn spawn(
        state: Arc<Mutex<SessionState>>,
        resolver: Arc<ResponseResolver>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(run_worker(state, resolver, rx));
        Self { tx, worker }
    }

    /// Queue a reply to the given user text
    pub(crate) fn schedule(&self, text: String, epoch: u64) {
        if self.tx.send(PendingReply { text, epoch }).is_err() {
            warn!("Reply worker is gone; dropping scheduled reply");
        }
    }
}

impl Drop for ReplyScheduler {
    fn drop(&mut self) {
        self.worker.abort();
    }
}

/// Consume scheduled replies one at a time, preserving submission order
async fn run_worker(
    state: Arc<Mutex<SessionState>>,
    resolver: Arc<ResponseResolver>,
    mut rx: UnboundedReceiver<PendingReply>,
) {
    while let Some(pending) = rx.recv().await {
        let (min_ms, max_ms, stale) = {
            let state = state.lock().await;
            (
                state.config.reply_delay_min_ms,
                state.config.reply_delay_max_ms,
                state.epoch != pending.epoch,
            )
        };
        if stale {
            debug!("Discarding reply scheduled before the conversation closed");
            continue;
        }

        tokio::time::sleep(reply_delay(min_ms, max_ms)).await;

        let reply = resolver.resolve(&pending.text);

        let mut state = state.lock().await;
        if state.epoch != pending.epoch {
            debug!("Discarding reply scheduled before the conversation closed");
            continue;
        }
        let id = state.next_id();
        state.messages.push(Message::assistant(id, &reply));
        state.pending_replies = state.pending_replies.saturating_sub(1);
        state.is_assistant_typing = state.pending_replies > 0;
    }
}

/// Sample the simulated typing delay from `[min_ms, max_ms)`.
///
/// An empty or inverted range collapses to `min_ms`.
fn reply_delay(min_ms: u64, max_ms: u64) -> Duration {
    let delay_ms = if max_ms > min_ms {
        rand::thread_rng().gen_range(min_ms..max_ms)
    } else {
        min_ms
    };
    Duration::from_millis(delay_ms)
}
