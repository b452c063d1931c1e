//! Message delivery module
//!
//! This module tracks direct chats between the user and a property owner,
//! including per-message delivery status:
//! - `message` - Direct messages and the forward-only status lifecycle
//! - `chat` - Chat history, unread tracking, and status transitions

// Submodules
pub mod chat;
pub mod message;

// Re-export commonly used types
pub use chat::PeerChat;
pub use message::{DeliveryStatus, DirectMessage};
