//! A scripted chat session driven through the dispatcher.

use std::sync::Arc;

use rstest::{fixture, rstest};
use storefront::domain::chat::{AccountId, ChannelId, InboundInteraction, InboundMessage};
use storefront::domain::ports::NoopSleeper;
use storefront::domain::rendering::{Component, MessagePayload};
use storefront::domain::standing::StandingMessagePublisher;
use storefront::domain::{ChatDestinations, ChatDispatcher, ChatDispatcherPorts};
use storefront::outbound::memory::{InMemoryProductCatalogue, InMemoryStandingMessageStore};
use storefront::test_support::chat::SimulatedChatChannel;
use storefront::test_support::clock::MutableClock;

const LOBBY: u64 = 9_001;
const NEWS: u64 = 303;

struct Session {
    chat: Arc<SimulatedChatChannel>,
    dispatcher: ChatDispatcher,
}

impl Session {
    async fn say(&self, content: &str) -> InboundMessage {
        let channel = ChannelId::new(LOBBY).expect("non-zero");
        let id = self.chat.seed_message(
            channel,
            AccountId::new(12).expect("non-zero"),
            None,
            false,
        );
        let message = InboundMessage {
            channel,
            id,
            author_name: "grace".to_owned(),
            author_is_bot: false,
            content: content.to_owned(),
        };
        self.dispatcher.handle_message(&message).await;
        message
    }

    fn click(&self, custom_id: &str, values: &[&str]) -> Option<MessagePayload> {
        self.dispatcher.handle_interaction(&InboundInteraction {
            custom_id: custom_id.to_owned(),
            values: values.iter().map(|v| (*v).to_owned()).collect(),
        })
    }
}

#[fixture]
fn session() -> Session {
    let chat = Arc::new(SimulatedChatChannel::new(5_555));
    let dispatcher = ChatDispatcher::new(
        ChatDispatcherPorts {
            catalogue: Arc::new(InMemoryProductCatalogue::seeded().expect("seed validates")),
            chat: chat.clone(),
            publisher: StandingMessagePublisher::new(
                chat.clone(),
                Arc::new(InMemoryStandingMessageStore::new()),
            ),
            sleeper: Arc::new(NoopSleeper),
            clock: Arc::new(MutableClock::at_millis(1_750_000_000_000)),
        },
        ChatDestinations {
            menu: ChannelId::new(101).expect("non-zero"),
            status: ChannelId::new(202).expect("non-zero"),
            news: ChannelId::new(NEWS).expect("non-zero"),
        },
    );
    Session { chat, dispatcher }
}

#[rstest]
#[tokio::test]
async fn browse_select_and_download(session: Session) {
    session.say("!products").await;
    let menu = session.chat.posted().pop().expect("menu reply");
    let Some(Component::Select(select)) = menu.payload.components.first() else {
        panic!("menu carries a select");
    };
    let first = select.options.first().expect("options");

    let summary = session
        .click(&select.custom_id, &[first.value.as_str()])
        .expect("summary");
    let Some(Component::Buttons(buttons)) = summary.components.first() else {
        panic!("summary carries a download button");
    };
    let download = session
        .click(&buttons.first().expect("button").custom_id, &[])
        .expect("download reply");

    let embed = download.embeds.first().expect("embed");
    assert_eq!(embed.title, "🔗 Download Link");
    let link = embed.field_named("Download").expect("link field");
    assert!(link.value.contains("https://downloads.existence.invalid/rust-arcane-external"));
}

#[rstest]
#[tokio::test]
async fn update_announcement_lands_in_news(session: Session) {
    let trigger = session
        .say("!update Rust Arcane | Fixed detection issues | more soon")
        .await;

    let news = session.chat.posted_to(ChannelId::new(NEWS).expect("non-zero"));
    let embed = news
        .first()
        .and_then(|post| post.payload.embeds.first())
        .expect("news embed");
    assert_eq!(embed.title, "🔄 Rust Arcane Update");
    assert_eq!(
        embed.description.as_deref(),
        Some("Fixed detection issues | more soon")
    );
    assert!(embed.field_named("📝 Version Info").is_some());
    assert_eq!(session.chat.deleted(), vec![(trigger.channel, trigger.id)]);
}
