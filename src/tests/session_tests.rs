use crate::assistant::{FaqEntry, FaqIndex, ResponseResolver};
use crate::conversation::{Conversation, Sender, SessionConfig};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Barrier;
use tokio::time::sleep;

fn create_test_resolver() -> Arc<ResponseResolver> {
    let index = FaqIndex::from_entries(vec![FaqEntry::new(
        "Bookings",
        "Booking rooms?",
        "Open the listing and tap Book Now.",
    )]);
    Arc::new(ResponseResolver::new(index))
}

/// Resolver with one distinct answer per input, for ordering tests
fn create_order_resolver() -> Arc<ResponseResolver> {
    let index = FaqIndex::from_entries(vec![
        FaqEntry::new("Support", "alpha details", "Alpha answer."),
        FaqEntry::new("Support", "beta details", "Beta answer."),
        FaqEntry::new("Support", "gamma details", "Gamma answer."),
    ]);
    Arc::new(ResponseResolver::new(index))
}

/// Short reply delays keep the async tests fast
fn create_fast_config() -> SessionConfig {
    let mut config = SessionConfig::default();
    config.set_reply_delay_ms(10, 20);
    config
}

#[tokio::test]
async fn test_open_injects_welcome_once() {
    let conversation = Conversation::new(create_test_resolver(), SessionConfig::default());

    conversation.open().await;
    conversation.open().await;
    conversation.open().await;

    let messages = conversation.messages().await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender, Sender::Assistant);
    assert!(messages[0].text.contains("RoomDesk assistant"));
}

#[tokio::test]
async fn test_reopen_keeps_history_without_new_welcome() {
    let conversation = Conversation::new(create_test_resolver(), SessionConfig::default());

    conversation.open().await;
    conversation.close().await;
    conversation.open().await;

    assert!(conversation.is_open().await);
    assert_eq!(conversation.message_count().await, 1);
}

#[tokio::test]
async fn test_empty_submissions_are_ignored() {
    let conversation = Conversation::new(create_test_resolver(), SessionConfig::default());
    conversation.open().await;

    for input in ["", "   ", "\n\t"] {
        assert!(conversation.submit_user_message(input).await.is_none());
    }

    assert_eq!(conversation.message_count().await, 1);
    assert!(!conversation.is_assistant_typing().await);
}

#[tokio::test]
async fn test_submit_appends_and_schedules_reply() {
    let conversation = Conversation::new(create_test_resolver(), create_fast_config());
    conversation.open().await;

    let id = conversation.submit_user_message("  booking help  ").await;

    // The user message and typing state are visible before the reply lands
    assert!(id.is_some());
    assert!(conversation.is_assistant_typing().await);
    let messages = conversation.messages().await;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].sender, Sender::User);
    assert_eq!(messages[1].text, "booking help");

    sleep(Duration::from_millis(100)).await;

    let messages = conversation.messages().await;
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].sender, Sender::Assistant);
    assert_eq!(messages[2].text, "Open the listing and tap Book Now.");
    assert!(!conversation.is_assistant_typing().await);
}

#[tokio::test]
async fn test_replies_arrive_in_submission_order() {
    let conversation = Conversation::new(create_order_resolver(), create_fast_config());
    conversation.open().await;

    conversation.submit_user_message("alpha").await;
    conversation.submit_user_message("beta").await;
    conversation.submit_user_message("gamma").await;

    sleep(Duration::from_millis(300)).await;

    let messages = conversation.messages().await;
    assert_eq!(messages.len(), 7);

    let replies: Vec<&str> = messages
        .iter()
        .filter(|message| message.sender == Sender::Assistant)
        .skip(1) // welcome
        .map(|message| message.text.as_str())
        .collect();
    assert_eq!(replies, ["Alpha answer.", "Beta answer.", "Gamma answer."]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_submitters_get_matching_replies() {
    for _ in 0..20 {
        let mut config = SessionConfig::default();
        config.set_reply_delay_ms(0, 0);
        let conversation = Arc::new(Conversation::new(create_order_resolver(), config));
        conversation.open().await;

        let barrier = Arc::new(Barrier::new(2));
        let first = {
            let conversation = conversation.clone();
            let barrier = barrier.clone();
            tokio::spawn(async move {
                barrier.wait().await;
                conversation.submit_user_message("alpha").await;
            })
        };
        let second = {
            let conversation = conversation.clone();
            let barrier = barrier.clone();
            tokio::spawn(async move {
                barrier.wait().await;
                conversation.submit_user_message("beta").await;
            })
        };
        first.await.expect("Failed to join submitter");
        second.await.expect("Failed to join submitter");

        let mut messages = conversation.messages().await;
        for _ in 0..100 {
            if messages.len() == 5 {
                break;
            }
            sleep(Duration::from_millis(5)).await;
            messages = conversation.messages().await;
        }
        assert_eq!(messages.len(), 5);

        // Whichever submission landed first, each reply must answer the
        // user message at the same position in the history
        let users: Vec<&str> = messages
            .iter()
            .filter(|message| message.sender == Sender::User)
            .map(|message| message.text.as_str())
            .collect();
        let replies: Vec<&str> = messages
            .iter()
            .filter(|message| message.sender == Sender::Assistant)
            .skip(1) // welcome
            .map(|message| message.text.as_str())
            .collect();
        for (user, reply) in users.iter().zip(replies.iter()) {
            let expected = if *user == "alpha" {
                "Alpha answer."
            } else {
                "Beta answer."
            };
            assert_eq!(*reply, expected);
        }
    }
}

#[tokio::test]
async fn test_close_cancels_pending_replies() {
    let mut config = SessionConfig::default();
    config.set_reply_delay_ms(50, 100);
    let conversation = Conversation::new(create_test_resolver(), config);
    conversation.open().await;

    conversation.submit_user_message("booking help").await;
    conversation.close().await;

    sleep(Duration::from_millis(200)).await;

    // Welcome and the user message stay; the cancelled reply never lands
    assert!(!conversation.is_open().await);
    assert!(!conversation.is_assistant_typing().await);
    assert_eq!(conversation.message_count().await, 2);
}

#[tokio::test]
async fn test_reopened_conversation_accepts_new_messages() {
    let mut config = SessionConfig::default();
    config.set_reply_delay_ms(50, 100);
    let conversation = Conversation::new(create_test_resolver(), config);
    conversation.open().await;

    conversation.submit_user_message("booking help").await;
    conversation.close().await;
    conversation.open().await;
    conversation.submit_user_message("booking again").await;

    sleep(Duration::from_millis(200)).await;

    let messages = conversation.messages().await;
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[3].sender, Sender::Assistant);
    assert_eq!(messages[3].text, "Open the listing and tap Book Now.");
}

#[tokio::test]
async fn test_submit_while_closed_is_ignored() {
    let conversation = Conversation::new(create_test_resolver(), create_fast_config());

    // Never opened
    assert!(conversation.submit_user_message("booking help").await.is_none());
    assert_eq!(conversation.message_count().await, 0);

    conversation.open().await;
    conversation.close().await;

    assert!(conversation.submit_user_message("booking help").await.is_none());
    assert_eq!(conversation.message_count().await, 1);
}

#[tokio::test]
async fn test_message_ids_are_unique_and_monotonic() {
    let conversation = Conversation::new(create_test_resolver(), create_fast_config());
    conversation.open().await;

    conversation.submit_user_message("booking help").await;
    conversation.submit_user_message("booking again").await;
    conversation.submit_user_message("booking once more").await;

    sleep(Duration::from_millis(300)).await;

    let messages = conversation.messages().await;
    assert_eq!(messages.len(), 7);
    for pair in messages.windows(2) {
        assert!(pair[0].id < pair[1].id);
    }
}

#[tokio::test]
async fn test_welcome_skipped_when_text_empty() {
    let mut config = create_fast_config();
    config.welcome_text = String::new();
    let conversation = Conversation::new(create_test_resolver(), config);

    conversation.open().await;

    assert!(conversation.is_open().await);
    assert_eq!(conversation.message_count().await, 0);
}

#[test]
fn test_default_session_config() {
    let config = SessionConfig::default();

    assert_eq!(config.reply_delay_min_ms, 1000);
    assert_eq!(config.reply_delay_max_ms, 2000);
    assert!(!config.welcome_text.is_empty());
}

#[test]
fn test_sender_labels() {
    assert_eq!(Sender::User.label(), "You");
    assert_eq!(Sender::Assistant.label(), "Assistant");
}

#[tokio::test]
async fn test_drop_with_pending_reply_is_clean() {
    let mut config = SessionConfig::default();
    config.set_reply_delay_ms(50, 100);
    let conversation = Conversation::new(create_test_resolver(), config);
    conversation.open().await;
    conversation.submit_user_message("booking help").await;

    // Dropping mid-reply aborts the worker without panicking
    drop(conversation);
    sleep(Duration::from_millis(150)).await;
}
