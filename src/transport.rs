//! Outbound message transport
//!
//! The chat core never performs I/O itself. The application injects a
//! [`MessageTransport`] implementation (HTTP client, websocket, in-memory
//! test double) and the messaging layer calls it when a direct message
//! needs to leave the device.

use crate::Result;
use crate::delivery::DirectMessage;
use async_trait::async_trait;
use uuid::Uuid;

/// Hook for sending direct messages out of the chat core
///
/// `Ok(())` means the transport accepted the message and it can be marked
/// sent. An error means the send failed and the message stays pending so
/// the caller can retry later.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Send a direct message belonging to the given chat
    async fn send(&self, chat_id: Uuid, message: &DirectMessage) -> Result<()>;
}
