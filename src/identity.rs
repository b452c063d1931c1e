//! User identity seam
//!
//! The chat core does not manage accounts or sessions itself. The host
//! application implements [`IdentityProvider`] on top of whatever auth it
//! uses, and the core only asks two questions: who is signed in, and is
//! anyone signed in at all.

/// Source of the currently signed-in user
pub trait IdentityProvider: Send + Sync {
    /// UID of the signed-in user, or `None` when nobody is signed in
    fn current_user_id(&self) -> Option<String>;

    /// Whether a user is currently signed in
    fn is_authenticated(&self) -> bool {
        self.current_user_id().is_some()
    }
}
