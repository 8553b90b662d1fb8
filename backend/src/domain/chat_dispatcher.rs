//! Routes inbound chat traffic to catalogue queries and renderings.
//!
//! Text commands answer through [`ChatChannel`]; component interactions
//! return an ephemeral payload that the inbound adapter sends back as the
//! interaction response.

use std::sync::Arc;
use std::time::Duration;

use mockable::Clock;
use tracing::{debug, info, warn};

use crate::domain::catalogue::ProductId;
use crate::domain::chat::{BotProfile, ChannelId, InboundInteraction, InboundMessage};
use crate::domain::commands::{Announcement, ChatCommand, InteractionId};
use crate::domain::ports::{ChatChannel, ChatChannelError, ProductCatalogue, Sleeper};
use crate::domain::rendering::{
    GENERIC_ERROR_REPLY, MenuVariant, MessagePayload, announcement_post, download_reply,
    featured_list, help, popular_list, product_menu, product_summary, status_board, status_card,
    status_header, welcome_post,
};
use crate::domain::standing::{
    PublishOutcome, RefreshOutcome, StandingMessageKind, StandingMessagePublisher,
};

/// Pause between successive `!status` cards.
pub const STATUS_CARD_PACING: Duration = Duration::from_millis(500);

/// Destination channels for standing posts and announcements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatDestinations {
    /// Standing product menu.
    pub menu: ChannelId,
    /// Standing status board.
    pub status: ChannelId,
    /// Welcome post and announcements.
    pub news: ChannelId,
}

/// Collaborators required by [`ChatDispatcher`].
pub struct ChatDispatcherPorts {
    pub catalogue: Arc<dyn ProductCatalogue>,
    pub chat: Arc<dyn ChatChannel>,
    pub publisher: StandingMessagePublisher,
    pub sleeper: Arc<dyn Sleeper>,
    pub clock: Arc<dyn Clock + Send + Sync>,
}

/// Chat front end of the storefront.
pub struct ChatDispatcher {
    catalogue: Arc<dyn ProductCatalogue>,
    chat: Arc<dyn ChatChannel>,
    publisher: StandingMessagePublisher,
    sleeper: Arc<dyn Sleeper>,
    clock: Arc<dyn Clock + Send + Sync>,
    destinations: ChatDestinations,
}

impl ChatDispatcher {
    pub fn new(ports: ChatDispatcherPorts, destinations: ChatDestinations) -> Self {
        let ChatDispatcherPorts {
            catalogue,
            chat,
            publisher,
            sleeper,
            clock,
        } = ports;
        Self {
            catalogue,
            chat,
            publisher,
            sleeper,
            clock,
            destinations,
        }
    }

    /// Handle one inbound message. Never fails; problems are logged and,
    /// for recognised commands, answered with a generic apology.
    pub async fn handle_message(&self, message: &InboundMessage) {
        if message.author_is_bot {
            return;
        }
        let Some(command) = ChatCommand::parse(&message.content) else {
            return;
        };
        info!(
            command = command.name(),
            author = %message.author_name,
            channel = %message.channel,
            "processing chat command"
        );

        if let Err(error) = self.run(command, message).await {
            warn!(%error, channel = %message.channel, "chat command failed");
            let apology = MessagePayload::text(GENERIC_ERROR_REPLY);
            if let Err(error) = self.chat.reply(message.channel, message.id, &apology).await {
                warn!(%error, "could not deliver error reply");
            }
        }
    }

    /// Resolve a component interaction into its ephemeral reply.
    ///
    /// Unknown custom ids and unknown products yield `None`.
    #[must_use]
    pub fn handle_interaction(&self, interaction: &InboundInteraction) -> Option<MessagePayload> {
        let id = match interaction.custom_id.parse::<InteractionId>() {
            Ok(id) => id,
            Err(error) => {
                debug!(%error, "ignoring component interaction");
                return None;
            }
        };
        let now = self.clock.utc();

        match id {
            InteractionId::ProductSelect | InteractionId::PermanentProductSelect => {
                let product_id = interaction.values.first()?.parse::<ProductId>().ok()?;
                let product = self.catalogue.by_id(product_id)?;
                Some(product_summary(&product, now))
            }
            InteractionId::Download(product_id) => {
                let product = self.catalogue.by_id(product_id)?;
                info!(product = %product_id, available = product.download().is_available(), "download requested");
                Some(download_reply(&product, now))
            }
        }
    }

    /// Ensure the menu, status board and welcome post exist, in that order.
    pub async fn publish_standing_messages(&self) -> [PublishOutcome; 3] {
        let bot = self.bot_profile().await;
        let menu = self.ensure_menu().await;
        let board = self.ensure_status_board().await;
        let welcome = self.ensure_welcome(bot.as_ref()).await;
        [menu, board, welcome]
    }

    /// Re-render the status board so its glyphs advance.
    pub async fn refresh_status_board(&self) -> RefreshOutcome {
        let products = self.catalogue.all();
        let now = self.clock.utc();
        self.publisher
            .refresh(
                self.destinations.status,
                StandingMessageKind::StatusBoard,
                move || status_board(&products, now),
            )
            .await
    }

    async fn ensure_menu(&self) -> PublishOutcome {
        let catalogue = Arc::clone(&self.catalogue);
        let now = self.clock.utc();
        self.publisher
            .ensure_published(
                self.destinations.menu,
                StandingMessageKind::ProductMenu,
                move || product_menu(&catalogue.all(), MenuVariant::Standing, now),
            )
            .await
    }

    async fn ensure_status_board(&self) -> PublishOutcome {
        let catalogue = Arc::clone(&self.catalogue);
        let now = self.clock.utc();
        self.publisher
            .ensure_published(
                self.destinations.status,
                StandingMessageKind::StatusBoard,
                move || status_board(&catalogue.all(), now),
            )
            .await
    }

    async fn ensure_welcome(&self, bot: Option<&BotProfile>) -> PublishOutcome {
        let now = self.clock.utc();
        self.publisher
            .ensure_published(
                self.destinations.news,
                StandingMessageKind::Welcome,
                move || welcome_post(bot, now),
            )
            .await
    }

    /// Bot identity for avatars; a lookup failure only loses decoration.
    async fn bot_profile(&self) -> Option<BotProfile> {
        match self.chat.bot_profile().await {
            Ok(profile) => Some(profile),
            Err(error) => {
                debug!(%error, "bot profile unavailable");
                None
            }
        }
    }

    async fn run(
        &self,
        command: ChatCommand,
        message: &InboundMessage,
    ) -> Result<(), ChatChannelError> {
        let now = self.clock.utc();
        match command {
            ChatCommand::Products => {
                let menu = product_menu(&self.catalogue.all(), MenuVariant::Ephemeral, now);
                self.reply(message, &menu).await
            }
            ChatCommand::Featured => {
                self.reply(message, &featured_list(&self.catalogue.featured(), now))
                    .await
            }
            ChatCommand::Popular => {
                self.reply(message, &popular_list(&self.catalogue.popular(), now))
                    .await
            }
            ChatCommand::Help => self.reply(message, &help(now)).await,
            ChatCommand::Status => self.send_status_cards(message).await,
            ChatCommand::Welcome => {
                let bot = self.bot_profile().await;
                self.ensure_welcome(bot.as_ref()).await;
                self.chat.delete(message.channel, message.id).await
            }
            ChatCommand::Publish { kind, argument } => {
                let announcement = match Announcement::parse(kind, &argument) {
                    Ok(announcement) => announcement,
                    Err(error) => {
                        debug!(%error, "malformed publishing command");
                        return self
                            .reply(message, &MessagePayload::text(error.usage()))
                            .await;
                    }
                };
                self.post_announcement(&announcement).await;
                self.chat.delete(message.channel, message.id).await
            }
        }
    }

    async fn reply(
        &self,
        message: &InboundMessage,
        payload: &MessagePayload,
    ) -> Result<(), ChatChannelError> {
        self.chat.reply(message.channel, message.id, payload).await?;
        Ok(())
    }

    async fn send_status_cards(&self, message: &InboundMessage) -> Result<(), ChatChannelError> {
        let now = self.clock.utc();
        self.reply(message, &status_header(now)).await?;

        for (index, product) in self.catalogue.all().iter().enumerate() {
            if index > 0 {
                self.sleeper.sleep(STATUS_CARD_PACING).await;
            }
            self.chat
                .send(message.channel, &status_card(product, now))
                .await?;
        }
        Ok(())
    }

    /// Post to the news channel. Delivery failures are logged only.
    async fn post_announcement(&self, announcement: &Announcement) {
        let avatar = self
            .bot_profile()
            .await
            .and_then(|profile| profile.avatar_url);
        let payload = announcement_post(announcement, avatar, self.clock.utc());
        match self.chat.send(self.destinations.news, &payload).await {
            Ok(sent) => info!(kind = %announcement.kind, message = %sent, "announcement posted"),
            Err(error) => {
                warn!(kind = %announcement.kind, %error, "announcement not posted");
            }
        }
    }
}

#[cfg(test)]
#[path = "chat_dispatcher_tests.rs"]
mod tests;
