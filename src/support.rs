//! Support desk entry point
//!
//! This module wires the assistant and conversation layers together:
//! - Holds the FAQ-backed response resolver shared by all conversations
//! - Holds the session configuration applied to new conversations
//! - Gates conversation opening on the signed-in user

use crate::assistant::{FaqIndex, ResponseResolver};
use crate::conversation::{Conversation, SessionConfig};
use crate::identity::IdentityProvider;
use crate::{Error, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Factory for support conversations
///
/// One `SupportDesk` typically lives for the whole app session. Every
/// conversation it opens shares the same resolver, so answers stay
/// consistent across conversations.
#[derive(Debug, Clone)]
pub struct SupportDesk {
    /// Resolver shared by all conversations opened by this desk
    resolver: Arc<ResponseResolver>,
    /// Configuration applied to new conversations
    config: SessionConfig,
}

impl SupportDesk {
    /// Create a support desk backed by the built-in FAQ catalog
    pub fn new() -> Self {
        Self::with_index(FaqIndex::default())
    }

    /// Create a support desk backed by the given FAQ index
    pub fn with_index(index: FaqIndex) -> Self {
        Self {
            resolver: Arc::new(ResponseResolver::new(index)),
            config: SessionConfig::default(),
        }
    }

    /// Replace the configuration applied to new conversations
    ///
    /// Conversations already opened keep the configuration they were
    /// opened with.
    pub fn set_config(&mut self, config: SessionConfig) {
        self.config = config;
    }

    /// The resolver shared by conversations opened by this desk
    pub fn resolver(&self) -> Arc<ResponseResolver> {
        self.resolver.clone()
    }

    /// Open a support conversation for the signed-in user
    ///
    /// The conversation is returned already open, with the welcome message
    /// in place. Must be called inside a Tokio runtime.
    ///
    /// # Arguments
    /// * `identity` - Source of the signed-in user
    ///
    /// # Returns
    /// * `Ok(Conversation)` - Open conversation ready for messages
    /// * `Err(Error::Unauthenticated)` - No user is signed in
    ///
    /// # Example
    /// ```rust,no_run
    /// use roomdesk::identity::IdentityProvider;
    /// use roomdesk::support::SupportDesk;
    ///
    /// struct Signed;
    ///
    /// impl IdentityProvider for Signed {
    ///     fn current_user_id(&self) -> Option<String> {
    ///         Some("user_42".to_string())
    ///     }
    /// }
    ///
    /// # async fn example() -> roomdesk::Result<()> {
    /// let desk = SupportDesk::new();
    /// let conversation = desk.open_conversation(&Signed).await?;
    ///
    /// conversation.submit_user_message("How do I book a room?").await;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn open_conversation(&self, identity: &dyn IdentityProvider) -> Result<Conversation> {
        if !identity.is_authenticated() {
            debug!("Rejecting support conversation: no user signed in");
            return Err(Error::Unauthenticated);
        }

        let user_uid = identity.current_user_id().ok_or(Error::Unauthenticated)?;

        let conversation = Conversation::new(self.resolver.clone(), self.config.clone());
        conversation.open().await;

        info!(
            "Opened support conversation {} for user {}",
            conversation.id(),
            user_uid
        );
        Ok(conversation)
    }
}

impl Default for SupportDesk {
    fn default() -> Self {
        Self::new()
    }
}
