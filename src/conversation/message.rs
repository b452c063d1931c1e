//! Conversation messages and identifiers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a message within one conversation or chat.
///
/// Ids come from a monotonic per-conversation counter starting at 1: later
/// messages always compare greater, and two messages never share an id even
/// when they share a timestamp. Ids are opaque to callers; only the library
/// hands them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub(crate) u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    /// The customer using the support chat
    User,
    /// The automated support assistant
    Assistant,
}

impl Sender {
    /// Display label for the chat transcript
    pub fn label(&self) -> &str {
        match self {
            Self::User => "You",
            Self::Assistant => "Assistant",
        }
    }
}

/// A single message in a support conversation
///
/// Messages are immutable once appended; edits and deletions don't exist in
/// the support chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Message ID, unique and ordered within the conversation
    pub id: MessageId,
    /// Who authored the message
    pub sender: Sender,
    /// Message text
    pub text: String,
    /// When the message was appended
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a user message stamped with the current time
    pub fn user(id: MessageId, text: &str) -> Self {
        Self {
            id,
            sender: Sender::User,
            text: text.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Create an assistant message stamped with the current time
    pub fn assistant(id: MessageId, text: &str) -> Self {
        Self {
            id,
            sender: Sender::Assistant,
            text: text.to_string(),
            timestamp: Utc::now(),
        }
    }
}
