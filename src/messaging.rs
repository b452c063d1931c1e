//! High-level messaging module
//!
//! This module provides user-facing functions that combine chat history
//! and transport operations for direct messages between the user and a
//! peer such as a property owner.

use crate::{conversation::MessageId, delivery::PeerChat, transport::MessageTransport};
use tracing::{info, warn};

/// Send a direct message to the peer of a chat
///
/// The message is appended to the chat in `Pending` status, then handed to
/// the transport. If the transport accepts it, the message is promoted to
/// `Sent`; if the send fails, it stays `Pending` so the caller can retry
/// later by inspecting message statuses.
///
/// # Arguments
/// * `transport` - The transport used to deliver the message
/// * `chat` - The chat the message belongs to
/// * `sender` - UID of the sending user
/// * `text` - Message text; whitespace-only text is ignored
///
/// # Returns
/// * `Some(MessageId)` - Message appended (sent or still pending)
/// * `None` - Text was empty, nothing was appended
///
/// # Example
/// ```rust,no_run
/// use roomdesk::delivery::{DirectMessage, PeerChat};
/// use roomdesk::messaging::send_direct_message;
/// use roomdesk::transport::MessageTransport;
/// use roomdesk::Result;
/// use async_trait::async_trait;
/// use uuid::Uuid;
///
/// struct NoopTransport;
///
/// #[async_trait]
/// impl MessageTransport for NoopTransport {
///     async fn send(&self, _chat_id: Uuid, _message: &DirectMessage) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// # async fn example() {
/// let mut chat = PeerChat::new("owner_17");
/// let transport = NoopTransport;
///
/// if let Some(id) = send_direct_message(&transport, &mut chat, "user_42", "Is the room free?").await {
///     println!("Message {} status: {}", id, chat.message(id).unwrap().status_indicator());
/// }
/// # }
/// ```
pub async fn send_direct_message(
    transport: &dyn MessageTransport,
    chat: &mut PeerChat,
    sender: &str,
    text: &str,
) -> Option<MessageId> {
    let id = chat.append_outgoing(sender, text)?;
    // append_outgoing just pushed this id, so the lookup cannot miss
    let message = chat.message(id)?.clone();

    match transport.send(chat.id, &message).await {
        Ok(()) => {
            info!("Message {} sent in chat {}", id, chat.id);
            chat.mark_sent(id);
        }
        Err(e) => {
            warn!(
                "Failed to send message {} in chat {}: {}. Message stays pending.",
                id, chat.id, e
            );
        }
    }

    Some(id)
}

/// Record a direct message received from the peer of a chat
///
/// The message enters the chat in `Delivered` status and the chat is
/// flagged unread.
///
/// # Arguments
/// * `chat` - The chat the message belongs to
/// * `sender` - UID of the peer who sent the message
/// * `text` - Message text; whitespace-only text is ignored
///
/// # Returns
/// * `Some(MessageId)` - Message recorded in the chat
/// * `None` - Text was empty, nothing was recorded
pub fn receive_direct_message(chat: &mut PeerChat, sender: &str, text: &str) -> Option<MessageId> {
    let id = chat.append_incoming(sender, text)?;
    info!("Received message {} from {} in chat {}", id, sender, chat.id);
    Some(id)
}
