//! RoomDesk - Customer support chat for a room and mess booking marketplace
//!
//! This library provides the core chat functionality behind the RoomDesk
//! support widget: a rule-based assistant that answers FAQ-style questions,
//! conversation sessions with simulated typing, and delivery tracking for
//! direct messages between tenants and property owners.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assistant;
pub mod conversation;
pub mod delivery;
pub mod transport;
pub mod messaging;
pub mod identity;
pub mod support;

/// Result type alias for RoomDesk operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for RoomDesk operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// FAQ catalog loading or validation error
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Transport layer error
    #[error("Transport error: {0}")]
    Transport(String),

    /// Caller is not signed in
    #[error("Not authenticated")]
    Unauthenticated,

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Initialize the RoomDesk library with logging
pub fn init() {
    tracing_subscriber::fmt::init();
}

#[cfg(test)]
mod tests;
