//! Behaviour tests for chat command and interaction routing.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::chat::{AccountId, MessageId};
use crate::domain::ports::{MockSleeper, NoopSleeper};
use crate::domain::rendering::Component;
use crate::outbound::memory::{InMemoryProductCatalogue, InMemoryStandingMessageStore};
use crate::test_support::chat::SimulatedChatChannel;
use crate::test_support::clock::MutableClock;

const BOT: u64 = 4_242;
const NOW_MILLIS: i64 = 1_750_000_000_000;

fn id(raw: u64) -> ChannelId {
    ChannelId::new(raw).expect("non-zero")
}

fn destinations() -> ChatDestinations {
    ChatDestinations {
        menu: id(1_366_698_054_777_962_610),
        status: id(1_366_051_838_797_025_351),
        news: id(1_385_298_522_085_003_388),
    }
}

fn lobby() -> ChannelId {
    id(555)
}

struct Harness {
    chat: Arc<SimulatedChatChannel>,
    dispatcher: ChatDispatcher,
}

fn build(chat: Arc<SimulatedChatChannel>, sleeper: Arc<dyn Sleeper>) -> ChatDispatcher {
    let catalogue = Arc::new(InMemoryProductCatalogue::seeded().expect("seed validates"));
    let publisher =
        StandingMessagePublisher::new(chat.clone(), Arc::new(InMemoryStandingMessageStore::new()));
    ChatDispatcher::new(
        ChatDispatcherPorts {
            catalogue,
            chat,
            publisher,
            sleeper,
            clock: Arc::new(MutableClock::at_millis(NOW_MILLIS)),
        },
        destinations(),
    )
}

#[fixture]
fn harness() -> Harness {
    let chat = Arc::new(SimulatedChatChannel::new(BOT));
    let dispatcher = build(chat.clone(), Arc::new(NoopSleeper));
    Harness { chat, dispatcher }
}

fn inbound(harness: &Harness, content: &str) -> InboundMessage {
    let message_id = harness
        .chat
        .seed_message(lobby(), AccountId::new(7).expect("non-zero"), None, false);
    InboundMessage {
        channel: lobby(),
        id: message_id,
        author_name: "ada".to_owned(),
        author_is_bot: false,
        content: content.to_owned(),
    }
}

fn first_title(payload: &MessagePayload) -> &str {
    payload.first_embed_title().expect("embed title")
}

#[rstest]
#[tokio::test]
async fn products_command_replies_with_ephemeral_menu(harness: Harness) {
    let message = inbound(&harness, "!Products");

    harness.dispatcher.handle_message(&message).await;

    let posted = harness.chat.posted();
    assert_eq!(posted.len(), 1);
    let reply = posted.first().expect("reply");
    assert_eq!(reply.reply_to, Some(message.id));
    let Some(Component::Select(menu)) = reply.payload.components.first() else {
        panic!("expected select menu");
    };
    assert_eq!(menu.custom_id, "product_select");
}

#[rstest]
#[case("!featured", "⭐ Featured Products", 4)]
#[case("!popular", "🔥 Popular Products", 3)]
#[case("!help", "🤖 Existence Bot Commands", 9)]
#[tokio::test]
async fn list_commands_reply_in_place(
    harness: Harness,
    #[case] content: &str,
    #[case] title: &str,
    #[case] fields: usize,
) {
    let message = inbound(&harness, content);

    harness.dispatcher.handle_message(&message).await;

    let posted = harness.chat.posted_to(lobby());
    let reply = posted.first().expect("reply");
    assert_eq!(first_title(&reply.payload), title);
    assert_eq!(reply.payload.embeds.first().map(|e| e.fields.len()), Some(fields));
}

#[rstest]
#[tokio::test]
async fn bot_authors_and_chatter_are_ignored(harness: Harness) {
    let mut from_bot = inbound(&harness, "!help");
    from_bot.author_is_bot = true;
    let chatter = inbound(&harness, "what's new?");

    harness.dispatcher.handle_message(&from_bot).await;
    harness.dispatcher.handle_message(&chatter).await;

    assert!(harness.chat.posted().is_empty());
}

#[rstest]
#[tokio::test]
async fn status_command_sends_header_then_paced_cards() {
    let chat = Arc::new(SimulatedChatChannel::new(BOT));
    let mut sleeper = MockSleeper::new();
    sleeper
        .expect_sleep()
        .withf(|duration| *duration == STATUS_CARD_PACING)
        .times(4)
        .returning(|_| ());
    let dispatcher = build(chat.clone(), Arc::new(sleeper));
    let message_id = chat.seed_message(lobby(), AccountId::new(7).expect("non-zero"), None, false);
    let message = InboundMessage {
        channel: lobby(),
        id: message_id,
        author_name: "ada".to_owned(),
        author_is_bot: false,
        content: "!status".to_owned(),
    };

    dispatcher.handle_message(&message).await;

    let posted = chat.posted_to(lobby());
    assert_eq!(posted.len(), 6);
    let header = posted.first().expect("header");
    assert_eq!(header.reply_to, Some(message_id));
    assert_eq!(first_title(&header.payload), "📊 Existence Tool Status");
    let titles: Vec<&str> = posted.iter().skip(1).map(|p| first_title(&p.payload)).collect();
    assert_eq!(
        titles,
        vec![
            "🔧 Rust Arcane External",
            "🔧 Rust Pro External",
            "🔧 BO6 Engine",
            "📦 NFA Account Loader",
            "🔒 Spoofer",
        ]
    );
}

#[rstest]
#[tokio::test]
async fn news_command_posts_to_news_channel_and_deletes_trigger(harness: Harness) {
    let message = inbound(&harness, "!news Launch | Version 2.0 is out");

    harness.dispatcher.handle_message(&message).await;

    let news = harness.chat.posted_to(destinations().news);
    let post = news.first().expect("news post");
    assert_eq!(first_title(&post.payload), "📰 Launch");
    assert_eq!(
        post.payload.embeds.first().and_then(|e| e.description.clone()),
        Some("Version 2.0 is out".to_owned())
    );
    assert_eq!(harness.chat.deleted(), vec![(lobby(), message.id)]);
}

#[rstest]
#[tokio::test]
async fn malformed_announcement_replies_with_usage_only(harness: Harness) {
    let message = inbound(&harness, "!announcement no delimiter here");

    harness.dispatcher.handle_message(&message).await;

    let posted = harness.chat.posted();
    assert_eq!(posted.len(), 1);
    let reply = posted.first().expect("usage reply");
    assert_eq!(reply.channel, lobby());
    assert!(
        reply
            .payload
            .content
            .as_deref()
            .is_some_and(|text| text.starts_with("Usage: `!announcement"))
    );
    assert!(harness.chat.deleted().is_empty());
}

#[rstest]
#[tokio::test]
async fn welcome_command_is_idempotent(harness: Harness) {
    let first = inbound(&harness, "!welcome");
    let second = inbound(&harness, "!welcome");

    harness.dispatcher.handle_message(&first).await;
    harness.dispatcher.handle_message(&second).await;

    assert_eq!(harness.chat.posted_to(destinations().news).len(), 1);
    assert_eq!(
        harness.chat.deleted(),
        vec![(lobby(), first.id), (lobby(), second.id)]
    );
}

#[rstest]
#[tokio::test]
async fn failing_command_gets_generic_apology() {
    let mut chat = crate::domain::ports::MockChatChannel::new();
    chat.expect_reply()
        .withf(|_, _, payload| payload.content.is_none())
        .times(1)
        .returning(|_, _, _| Err(ChatChannelError::forbidden("cannot reply with embeds")));
    chat.expect_reply()
        .withf(|_, _, payload| payload.content.as_deref() == Some(GENERIC_ERROR_REPLY))
        .times(1)
        .returning(|_, _, _| Ok(MessageId::new(9).expect("non-zero")));
    let chat: Arc<dyn ChatChannel> = Arc::new(chat);
    let dispatcher = ChatDispatcher::new(
        ChatDispatcherPorts {
            catalogue: Arc::new(InMemoryProductCatalogue::seeded().expect("seed validates")),
            chat: chat.clone(),
            publisher: StandingMessagePublisher::new(
                chat,
                Arc::new(InMemoryStandingMessageStore::new()),
            ),
            sleeper: Arc::new(NoopSleeper),
            clock: Arc::new(MutableClock::at_millis(NOW_MILLIS)),
        },
        destinations(),
    );

    dispatcher
        .handle_message(&InboundMessage {
            channel: lobby(),
            id: MessageId::new(1).expect("non-zero"),
            author_name: "ada".to_owned(),
            author_is_bot: false,
            content: "!help".to_owned(),
        })
        .await;
}

#[rstest]
#[case("product_select")]
#[case("permanent_product_select")]
fn select_menu_choice_yields_product_summary(harness: Harness, #[case] custom_id: &str) {
    let reply = harness.dispatcher.handle_interaction(&InboundInteraction {
        custom_id: custom_id.to_owned(),
        values: vec!["4".to_owned()],
    });

    let reply = reply.expect("summary");
    assert_eq!(first_title(&reply), "📦 NFA Account Loader");
}

#[rstest]
fn download_button_for_pending_product_reports_unavailable(harness: Harness) {
    let reply = harness.dispatcher.handle_interaction(&InboundInteraction {
        custom_id: "download_5".to_owned(),
        values: Vec::new(),
    });

    assert_eq!(
        reply.as_ref().map(first_title),
        Some("⚠️ Download Not Available")
    );
}

#[rstest]
#[case("download_99", &[])]
#[case("download_abc", &[])]
#[case("product_select", &["99"])]
#[case("product_select", &["x"])]
#[case("product_select", &[])]
#[case("mystery_button", &[])]
fn unknown_interactions_are_ignored(
    harness: Harness,
    #[case] custom_id: &str,
    #[case] values: &[&str],
) {
    let reply = harness.dispatcher.handle_interaction(&InboundInteraction {
        custom_id: custom_id.to_owned(),
        values: values.iter().map(|v| (*v).to_owned()).collect(),
    });

    assert_eq!(reply, None);
}

#[rstest]
#[tokio::test]
async fn startup_publishes_each_standing_message_once(harness: Harness) {
    let first = harness.dispatcher.publish_standing_messages().await;
    let second = harness.dispatcher.publish_standing_messages().await;

    assert!(first.iter().all(|o| matches!(o, PublishOutcome::Sent(_))));
    assert!(second.iter().all(|o| matches!(o, PublishOutcome::Skipped(_))));
    for channel in [destinations().menu, destinations().status, destinations().news] {
        assert_eq!(harness.chat.posted_to(channel).len(), 1);
    }
}

#[rstest]
#[tokio::test]
async fn status_refresh_replaces_board(harness: Harness) {
    harness.dispatcher.publish_standing_messages().await;

    let outcome = harness.dispatcher.refresh_status_board().await;

    assert!(matches!(outcome, RefreshOutcome::Replaced { .. }));
    assert_eq!(harness.chat.history(destinations().status).len(), 1);
}
