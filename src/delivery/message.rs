//! Direct message structures and delivery status tracking

use crate::conversation::message::MessageId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery status of a direct message
///
/// Statuses only move forward: `Pending → Sent → Delivered → Read`.
/// Skipping ahead is allowed when an intermediate notification was lost;
/// moving backward never is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    /// Accepted locally, not yet acknowledged by the transport
    #[default]
    Pending,
    /// Acknowledged by the transport
    Sent,
    /// Delivered to the recipient's device
    Delivered,
    /// Read by the recipient
    Read,
}

impl DeliveryStatus {
    /// Position in the forward-only lifecycle
    fn rank(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Sent => 1,
            Self::Delivered => 2,
            Self::Read => 3,
        }
    }

    /// Whether a transition from `self` to `next` moves forward
    pub fn can_advance_to(self, next: DeliveryStatus) -> bool {
        next.rank() > self.rank()
    }

    /// Get human-readable delivery status indicator
    ///
    /// `Read` shows the same double check as `Delivered`; the UI tints it.
    pub fn indicator(&self) -> &str {
        match self {
            Self::Pending => "…",
            Self::Sent => "✓",
            Self::Delivered => "✓✓",
            Self::Read => "✓✓",
        }
    }

    /// Get the status name for logs and accessibility labels
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
            Self::Read => "read",
        }
    }
}

/// A message in a direct chat between the user and a property owner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectMessage {
    /// Message ID, unique and ordered within the chat
    pub id: MessageId,
    /// UID of the sender
    pub sender: String,
    /// Message text
    pub text: String,
    /// When the message was appended locally
    pub timestamp: DateTime<Utc>,
    /// Current delivery status
    pub status: DeliveryStatus,
}

impl DirectMessage {
    /// Create a new outgoing message in `Pending` status
    pub fn new(id: MessageId, sender: &str, text: &str) -> Self {
        Self {
            id,
            sender: sender.to_string(),
            text: text.to_string(),
            timestamp: Utc::now(),
            status: DeliveryStatus::Pending,
        }
    }

    /// Get human-readable delivery status indicator for this message
    pub fn status_indicator(&self) -> &str {
        self.status.indicator()
    }
}
