//! Direct chat history and delivery transitions

use crate::conversation::message::MessageId;
use crate::delivery::message::{DeliveryStatus, DirectMessage};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// A direct chat between the local user and one peer (e.g. a property owner)
///
/// The chat owns its ordered message history and the per-message delivery
/// lifecycle. History is kept behind accessors so statuses can only move
/// through the `mark_*` transitions, which are forward-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerChat {
    /// Chat ID, passed to the transport when sending
    pub id: Uuid,
    /// UID of the peer this chat is with
    pub peer_uid: String,
    /// Messages in this chat, oldest first
    messages: Vec<DirectMessage>,
    /// Whether the chat holds messages the local user has not seen
    has_unread: bool,
    /// Next message id to hand out
    next_message_id: u64,
}

impl PeerChat {
    /// Create a new chat with a peer
    pub fn new(peer_uid: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            peer_uid: peer_uid.to_string(),
            messages: Vec::new(),
            has_unread: false,
            next_message_id: 1,
        }
    }

    /// Messages in this chat, oldest first
    pub fn messages(&self) -> &[DirectMessage] {
        &self.messages
    }

    /// Look up a message by id
    pub fn message(&self, id: MessageId) -> Option<&DirectMessage> {
        self.messages.iter().find(|message| message.id == id)
    }

    /// Append an outgoing message in `Pending` status.
    ///
    /// Whitespace-only text is ignored and returns `None`.
    pub fn append_outgoing(&mut self, sender: &str, text: &str) -> Option<MessageId> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("Ignoring empty outgoing message for chat {}", self.id);
            return None;
        }

        let id = self.next_id();
        self.messages.push(DirectMessage::new(id, sender, trimmed));
        Some(id)
    }

    /// Append an incoming message.
    ///
    /// Incoming messages enter at `Delivered` (they already reached this
    /// device) and flag the chat unread. Whitespace-only text is ignored.
    pub fn append_incoming(&mut self, sender: &str, text: &str) -> Option<MessageId> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("Ignoring empty incoming message for chat {}", self.id);
            return None;
        }

        let id = self.next_id();
        let mut message = DirectMessage::new(id, sender, trimmed);
        message.status = DeliveryStatus::Delivered;
        self.messages.push(message);
        self.has_unread = true;
        Some(id)
    }

    /// Mark a message as sent (the transport acknowledged it)
    pub fn mark_sent(&mut self, id: MessageId) -> bool {
        self.advance(id, DeliveryStatus::Sent)
    }

    /// Mark a message as delivered to the recipient's device
    pub fn mark_delivered(&mut self, id: MessageId) -> bool {
        self.advance(id, DeliveryStatus::Delivered)
    }

    /// Mark a message as read by the recipient
    pub fn mark_read(&mut self, id: MessageId) -> bool {
        self.advance(id, DeliveryStatus::Read)
    }

    /// Whether the chat holds messages the local user has not seen
    pub fn has_unread(&self) -> bool {
        self.has_unread
    }

    /// Flag the chat as having unread messages
    pub fn mark_unread(&mut self) {
        self.has_unread = true;
    }

    /// Clear the unread flag (the local user viewed the chat)
    pub fn clear_unread(&mut self) {
        self.has_unread = false;
    }

    /// Advance a message to `target` if that moves its status forward.
    ///
    /// Unknown ids and non-forward transitions are no-ops returning `false`,
    /// so duplicate or late delivery notifications never error.
    fn advance(&mut self, id: MessageId, target: DeliveryStatus) -> bool {
        let message = match self.messages.iter_mut().find(|message| message.id == id) {
            Some(message) => message,
            None => {
                debug!(
                    "Ignoring status update for unknown message {} in chat {}",
                    id, self.id
                );
                return false;
            }
        };

        if !message.status.can_advance_to(target) {
            debug!(
                "Ignoring {} -> {} transition for message {} in chat {}",
                message.status.label(),
                target.label(),
                id,
                self.id
            );
            return false;
        }

        message.status = target;
        true
    }

    /// Hand out the next monotonic message id
    fn next_id(&mut self) -> MessageId {
        let id = MessageId(self.next_message_id);
        self.next_message_id += 1;
        id
    }
}
