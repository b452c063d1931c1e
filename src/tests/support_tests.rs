use crate::Error;
use crate::assistant::{FaqEntry, FaqIndex};
use crate::conversation::SessionConfig;
use crate::identity::IdentityProvider;
use crate::support::SupportDesk;
use std::time::Duration;
use tokio::time::sleep;

struct SignedIn;

impl IdentityProvider for SignedIn {
    fn current_user_id(&self) -> Option<String> {
        Some("user_42".to_string())
    }
}

struct SignedOut;

impl IdentityProvider for SignedOut {
    fn current_user_id(&self) -> Option<String> {
        None
    }
}

/// Desk over the given index with short reply delays
fn create_fast_desk(index: FaqIndex) -> SupportDesk {
    let mut desk = SupportDesk::with_index(index);
    let mut config = SessionConfig::default();
    config.set_reply_delay_ms(10, 20);
    desk.set_config(config);
    desk
}

#[test]
fn test_identity_default_method() {
    assert!(SignedIn.is_authenticated());
    assert!(!SignedOut.is_authenticated());
}

#[tokio::test]
async fn test_open_conversation_requires_authentication() {
    let desk = SupportDesk::new();

    let result = desk.open_conversation(&SignedOut).await;

    assert!(matches!(result, Err(Error::Unauthenticated)));
}

#[tokio::test]
async fn test_opened_conversation_is_ready() {
    let desk = SupportDesk::new();

    let conversation = desk
        .open_conversation(&SignedIn)
        .await
        .expect("Failed to open conversation");

    assert!(conversation.is_open().await);
    assert_eq!(conversation.message_count().await, 1);
}

#[test]
fn test_default_desk_uses_builtin_catalog() {
    let desk = SupportDesk::default();

    assert_eq!(desk.resolver().index().len(), FaqIndex::default().len());
}

#[tokio::test]
async fn test_conversations_share_resolver() {
    let index = FaqIndex::from_entries(vec![FaqEntry::new(
        "Bookings",
        "Booking rooms?",
        "Open the listing and tap Book Now.",
    )]);
    let desk = create_fast_desk(index);

    let first = desk
        .open_conversation(&SignedIn)
        .await
        .expect("Failed to open conversation");
    let second = desk
        .open_conversation(&SignedIn)
        .await
        .expect("Failed to open conversation");
    assert_ne!(first.id(), second.id());

    first.submit_user_message("booking help").await;
    second.submit_user_message("booking help").await;

    sleep(Duration::from_millis(100)).await;

    let first_reply = first.messages().await.last().unwrap().text.clone();
    let second_reply = second.messages().await.last().unwrap().text.clone();
    assert_eq!(first_reply, "Open the listing and tap Book Now.");
    assert_eq!(first_reply, second_reply);
}

#[tokio::test]
async fn test_unmatched_input_falls_back() {
    let desk = create_fast_desk(FaqIndex::from_entries(Vec::new()));
    let conversation = desk
        .open_conversation(&SignedIn)
        .await
        .expect("Failed to open conversation");

    conversation.submit_user_message("hello there").await;
    sleep(Duration::from_millis(100)).await;

    let messages = conversation.messages().await;
    assert!(messages.last().unwrap().text.contains("Hi there"));
}
