//! Conversation sessions with the support assistant
//!
//! This module manages the user-facing chat session:
//! - `message` - Messages, identifiers, and senders
//! - `session` - Session state, history, and lifecycle
//! - `scheduler` - Delayed assistant replies (internal)

// Submodules
pub mod message;
mod scheduler;
pub mod session;

// Re-export commonly used types
pub use message::{Message, MessageId, Sender};
pub use session::{Conversation, SessionConfig};
