//! Behavioural tests for standing messages across process restarts.

use std::sync::Arc;

use rstest::{fixture, rstest};
use storefront::domain::chat::ChannelId;
use storefront::domain::ports::{ChatChannel, NoopSleeper, StandingMessageStore};
use storefront::domain::standing::{PublishOutcome, StandingMessagePublisher};
use storefront::domain::{ChatDestinations, ChatDispatcher, ChatDispatcherPorts};
use storefront::outbound::file_store::{JsonFileStandingMessageStore, STANDING_MESSAGES_FILE};
use storefront::outbound::memory::{InMemoryProductCatalogue, InMemoryStandingMessageStore};
use storefront::test_support::cap_fs::{path_exists, write_file};
use storefront::test_support::chat::SimulatedChatChannel;
use storefront::test_support::clock::MutableClock;
use storefront::test_support::state_dir::TempStateDir;

fn channel(raw: u64) -> ChannelId {
    ChannelId::new(raw).expect("non-zero")
}

fn destinations() -> ChatDestinations {
    ChatDestinations {
        menu: channel(101),
        status: channel(202),
        news: channel(303),
    }
}

fn dispatcher(
    chat: Arc<SimulatedChatChannel>,
    store: Arc<dyn StandingMessageStore>,
) -> ChatDispatcher {
    ChatDispatcher::new(
        ChatDispatcherPorts {
            catalogue: Arc::new(InMemoryProductCatalogue::seeded().expect("seed validates")),
            chat: chat.clone(),
            publisher: StandingMessagePublisher::new(chat, store),
            sleeper: Arc::new(NoopSleeper),
            clock: Arc::new(MutableClock::at_millis(1_750_000_000_000)),
        },
        destinations(),
    )
}

fn file_store(state: &TempStateDir) -> Arc<dyn StandingMessageStore> {
    Arc::new(JsonFileStandingMessageStore::open(state.path()).expect("open state dir"))
}

#[fixture]
fn chat() -> Arc<SimulatedChatChannel> {
    Arc::new(SimulatedChatChannel::new(7_777))
}

#[rstest]
#[tokio::test]
async fn restart_with_persisted_records_sends_nothing(chat: Arc<SimulatedChatChannel>) {
    let state = TempStateDir::new();

    let first = dispatcher(chat.clone(), file_store(&state))
        .publish_standing_messages()
        .await;
    let restarted = dispatcher(chat.clone(), file_store(&state))
        .publish_standing_messages()
        .await;

    assert!(first.iter().all(|o| matches!(o, PublishOutcome::Sent(_))));
    assert_eq!(
        restarted.to_vec(),
        first
            .iter()
            .map(|o| match o {
                PublishOutcome::Sent(id) => PublishOutcome::Skipped(*id),
                other => *other,
            })
            .collect::<Vec<_>>()
    );
    assert_eq!(chat.posted().len(), 3);
    assert!(path_exists(&state.path().join(STANDING_MESSAGES_FILE)));
}

#[rstest]
#[tokio::test]
async fn lost_state_falls_back_to_history_scan(chat: Arc<SimulatedChatChannel>) {
    dispatcher(chat.clone(), Arc::new(InMemoryStandingMessageStore::new()))
        .publish_standing_messages()
        .await;

    let outcomes = dispatcher(chat.clone(), Arc::new(InMemoryStandingMessageStore::new()))
        .publish_standing_messages()
        .await;

    assert!(outcomes.iter().all(|o| matches!(o, PublishOutcome::Skipped(_))));
    assert_eq!(chat.posted().len(), 3);
}

#[rstest]
#[tokio::test]
async fn manually_deleted_message_is_republished(chat: Arc<SimulatedChatChannel>) {
    let state = TempStateDir::new();
    let first = dispatcher(chat.clone(), file_store(&state))
        .publish_standing_messages()
        .await;
    let PublishOutcome::Sent(menu) = first[0] else {
        panic!("menu should have been sent");
    };
    // An operator removes the menu while the bot is offline.
    chat.delete(destinations().menu, menu).await.expect("delete");

    let restarted = dispatcher(chat.clone(), file_store(&state))
        .publish_standing_messages()
        .await;

    assert!(matches!(restarted[0], PublishOutcome::Sent(id) if id != menu));
    assert!(matches!(restarted[1], PublishOutcome::Skipped(_)));
    assert!(matches!(restarted[2], PublishOutcome::Skipped(_)));
}

#[rstest]
fn corrupt_state_file_is_reported() {
    let state = TempStateDir::new();
    write_file(&state.path().join(STANDING_MESSAGES_FILE), b"{not json").expect("write");

    assert!(JsonFileStandingMessageStore::open(state.path()).is_err());
}
