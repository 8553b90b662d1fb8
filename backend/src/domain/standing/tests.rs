//! Behaviour tests for standing-message publication.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rstest::{fixture, rstest};

use super::*;
use crate::domain::chat::{AccountId, ChannelId, ChannelMessage, MessageId};
use crate::domain::ports::{
    MockChatChannel, MockStandingMessageStore, StandingMessageStore, StandingMessageStoreError,
};
use crate::domain::rendering::{Component, Embed, MessagePayload, SelectMenu};
use crate::outbound::memory::InMemoryStandingMessageStore;
use crate::test_support::chat::SimulatedChatChannel;

const BOT: u64 = 4_242;

fn channel() -> ChannelId {
    ChannelId::new(1_366_698_054_777_962_610).expect("non-zero")
}

fn stranger() -> AccountId {
    AccountId::new(7).expect("non-zero")
}

fn menu_payload() -> MessagePayload {
    MessagePayload::embed(Embed::new("🔥 Existence Downloads", 0x5865F2)).with_component(
        Component::Select(SelectMenu {
            custom_id: "permanent_product_select".to_owned(),
            placeholder: "Select a product".to_owned(),
            options: Vec::new(),
        }),
    )
}

fn board_payload(label: &str) -> MessagePayload {
    MessagePayload::embed(Embed::new("📊 Existence Tool Status", 0x00FF00).description(label))
}

struct Harness {
    chat: Arc<SimulatedChatChannel>,
    store: Arc<InMemoryStandingMessageStore>,
    publisher: StandingMessagePublisher,
}

#[fixture]
fn harness() -> Harness {
    let chat = Arc::new(SimulatedChatChannel::new(BOT));
    let store = Arc::new(InMemoryStandingMessageStore::new());
    let publisher = StandingMessagePublisher::new(chat.clone(), store.clone());
    Harness {
        chat,
        store,
        publisher,
    }
}

#[rstest]
#[tokio::test]
async fn second_ensure_skips_and_builds_once(harness: Harness) {
    let builds = AtomicUsize::new(0);
    let build = || {
        builds.fetch_add(1, Ordering::SeqCst);
        menu_payload()
    };

    let first = harness
        .publisher
        .ensure_published(channel(), StandingMessageKind::ProductMenu, build)
        .await;
    let second = harness
        .publisher
        .ensure_published(channel(), StandingMessageKind::ProductMenu, build)
        .await;

    let PublishOutcome::Sent(sent) = first else {
        panic!("expected first publication to send, got {first:?}");
    };
    assert_eq!(second, PublishOutcome::Skipped(sent));
    assert_eq!(builds.load(Ordering::SeqCst), 1);
    assert_eq!(harness.chat.posted_to(channel()).len(), 1);
}

#[rstest]
#[tokio::test]
async fn history_scan_finds_post_from_previous_run(harness: Harness) {
    let existing = harness.chat.seed_message(
        channel(),
        harness.chat.bot_id(),
        Some("📊 Existence Tool Status"),
        false,
    );

    let outcome = harness
        .publisher
        .ensure_published(channel(), StandingMessageKind::StatusBoard, || {
            panic!("build must not run when a post exists")
        })
        .await;

    assert_eq!(outcome, PublishOutcome::Skipped(existing));
    let recorded = harness
        .store
        .find(channel(), StandingMessageKind::StatusBoard)
        .await
        .expect("find");
    assert_eq!(recorded, Some(existing));
}

#[rstest]
#[tokio::test]
async fn posts_by_other_authors_do_not_count(harness: Harness) {
    harness
        .chat
        .seed_message(channel(), stranger(), Some("📊 Existence Tool Status"), false);

    let outcome = harness
        .publisher
        .ensure_published(channel(), StandingMessageKind::StatusBoard, || {
            board_payload("fresh")
        })
        .await;

    assert!(matches!(outcome, PublishOutcome::Sent(_)));
}

#[rstest]
#[tokio::test]
async fn menu_without_components_is_not_a_match(harness: Harness) {
    harness.chat.seed_message(
        channel(),
        harness.chat.bot_id(),
        Some("🔥 Existence Downloads"),
        false,
    );

    let outcome = harness
        .publisher
        .ensure_published(channel(), StandingMessageKind::ProductMenu, menu_payload)
        .await;

    assert!(matches!(outcome, PublishOutcome::Sent(_)));
}

#[rstest]
#[tokio::test]
async fn scan_is_limited_to_recent_history(harness: Harness) {
    harness.chat.seed_message(
        channel(),
        harness.chat.bot_id(),
        Some("🎮 Welcome to Existence"),
        false,
    );
    for _ in 0..HISTORY_SCAN_LIMIT {
        harness.chat.seed_message(channel(), stranger(), None, false);
    }

    let outcome = harness
        .publisher
        .ensure_published(channel(), StandingMessageKind::Welcome, || {
            MessagePayload::embed(Embed::new("🎮 Welcome to Existence", 0x9B59B6))
        })
        .await;

    assert!(matches!(outcome, PublishOutcome::Sent(_)));
}

#[rstest]
#[tokio::test]
async fn record_outlives_the_scan_window(harness: Harness) {
    let PublishOutcome::Sent(sent) = harness
        .publisher
        .ensure_published(channel(), StandingMessageKind::ProductMenu, menu_payload)
        .await
    else {
        panic!("expected initial send");
    };
    for _ in 0..20 {
        harness.chat.seed_message(channel(), stranger(), None, false);
    }

    let outcome = harness
        .publisher
        .ensure_published(channel(), StandingMessageKind::ProductMenu, menu_payload)
        .await;

    assert_eq!(outcome, PublishOutcome::Skipped(sent));
}

#[rstest]
#[tokio::test]
async fn stale_record_falls_back_to_publishing(harness: Harness) {
    let gone = MessageId::new(1).expect("non-zero");
    harness
        .store
        .record(channel(), StandingMessageKind::StatusBoard, gone)
        .await
        .expect("record");

    let outcome = harness
        .publisher
        .ensure_published(channel(), StandingMessageKind::StatusBoard, || {
            board_payload("fresh")
        })
        .await;

    let PublishOutcome::Sent(sent) = outcome else {
        panic!("expected a fresh send, got {outcome:?}");
    };
    let recorded = harness
        .store
        .find(channel(), StandingMessageKind::StatusBoard)
        .await
        .expect("find");
    assert_eq!(recorded, Some(sent));
}

#[rstest]
#[tokio::test]
async fn chat_outage_is_absorbed(harness: Harness) {
    harness.chat.set_failing(true);

    let outcome = harness
        .publisher
        .ensure_published(channel(), StandingMessageKind::ProductMenu, menu_payload)
        .await;

    assert_eq!(outcome, PublishOutcome::Failed);
    assert!(harness.chat.posted().is_empty());
}

#[rstest]
#[tokio::test]
async fn send_failure_is_absorbed() {
    let mut chat = MockChatChannel::new();
    chat.expect_bot_profile().returning(|| {
        Ok(crate::domain::chat::BotProfile {
            id: AccountId::new(BOT).expect("non-zero"),
            avatar_url: None,
        })
    });
    chat.expect_recent_messages().returning(|_, _| Ok(Vec::new()));
    chat.expect_send()
        .times(1)
        .returning(|_, _| Err(crate::domain::ports::ChatChannelError::forbidden("missing permissions")));
    let publisher =
        StandingMessagePublisher::new(Arc::new(chat), Arc::new(InMemoryStandingMessageStore::new()));

    let outcome = publisher
        .ensure_published(channel(), StandingMessageKind::Welcome, || {
            MessagePayload::embed(Embed::new("🎮 Welcome to Existence", 0x9B59B6))
        })
        .await;

    assert_eq!(outcome, PublishOutcome::Failed);
}

#[rstest]
#[tokio::test]
async fn store_outage_degrades_to_scan() {
    let chat = Arc::new(SimulatedChatChannel::new(BOT));
    let mut store = MockStandingMessageStore::new();
    store
        .expect_find()
        .returning(|_, _| Err(StandingMessageStoreError::io("disk unplugged")));
    store
        .expect_record()
        .returning(|_, _, _| Err(StandingMessageStoreError::io("disk unplugged")));
    let publisher = StandingMessagePublisher::new(chat.clone(), Arc::new(store));

    let first = publisher
        .ensure_published(channel(), StandingMessageKind::ProductMenu, menu_payload)
        .await;
    let second = publisher
        .ensure_published(channel(), StandingMessageKind::ProductMenu, menu_payload)
        .await;

    let PublishOutcome::Sent(sent) = first else {
        panic!("expected send despite store outage, got {first:?}");
    };
    assert_eq!(second, PublishOutcome::Skipped(sent));
}

#[rstest]
#[tokio::test]
async fn refresh_sends_replacement_before_deleting(harness: Harness) {
    let PublishOutcome::Sent(previous) = harness
        .publisher
        .ensure_published(channel(), StandingMessageKind::StatusBoard, || {
            board_payload("old")
        })
        .await
    else {
        panic!("expected initial send");
    };

    let outcome = harness
        .publisher
        .refresh(channel(), StandingMessageKind::StatusBoard, || {
            board_payload("new")
        })
        .await;

    let RefreshOutcome::Replaced { previous: replaced, current } = outcome else {
        panic!("expected replacement, got {outcome:?}");
    };
    assert_eq!(replaced, previous);
    assert!(current > previous, "replacement is sent after the original");
    assert_eq!(harness.chat.deleted(), vec![(channel(), previous)]);
    let history: Vec<MessageId> = harness
        .chat
        .history(channel())
        .iter()
        .map(|message: &ChannelMessage| message.id)
        .collect();
    assert_eq!(history, vec![current]);
    let recorded = harness
        .store
        .find(channel(), StandingMessageKind::StatusBoard)
        .await
        .expect("find");
    assert_eq!(recorded, Some(current));
}

#[rstest]
#[tokio::test]
async fn refresh_without_previous_post_is_a_no_op(harness: Harness) {
    let outcome = harness
        .publisher
        .refresh(channel(), StandingMessageKind::StatusBoard, || {
            panic!("nothing to replace")
        })
        .await;

    assert_eq!(outcome, RefreshOutcome::NothingToReplace);
    assert!(harness.chat.posted().is_empty());
}

#[rstest]
#[case(StandingMessageKind::ProductMenu, "Existence Downloads")]
#[case(StandingMessageKind::StatusBoard, "Existence Tool Status")]
#[case(StandingMessageKind::Welcome, "Welcome to Existence")]
fn fingerprints(#[case] kind: StandingMessageKind, #[case] fingerprint: &str) {
    assert_eq!(kind.fingerprint(), fingerprint);
}
