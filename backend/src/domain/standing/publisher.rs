//! Check-then-send publication of standing messages.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::StandingMessageKind;
use crate::domain::chat::{ChannelId, MessageId};
use crate::domain::ports::{
    ChatChannel, ChatChannelError, StandingMessageStore, StandingMessageStoreError,
};
use crate::domain::rendering::MessagePayload;

/// Number of recent messages scanned for an existing standing post.
pub const HISTORY_SCAN_LIMIT: u8 = 10;

/// Result of [`StandingMessagePublisher::ensure_published`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// A standing message already exists; nothing was sent.
    Skipped(MessageId),
    /// A new standing message was sent.
    Sent(MessageId),
    /// A chat call failed; the failure was logged.
    Failed,
}

/// Result of [`StandingMessagePublisher::refresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Replaced {
        previous: MessageId,
        current: MessageId,
    },
    /// No previous message exists; first publication belongs to startup.
    NothingToReplace,
    Failed,
}

/// Keeps standing messages present exactly once per channel.
///
/// Check-then-send is not atomic: two processes starting together can both
/// miss each other's post and send twice.
#[derive(Clone)]
pub struct StandingMessagePublisher {
    chat: Arc<dyn ChatChannel>,
    store: Arc<dyn StandingMessageStore>,
}

impl StandingMessagePublisher {
    pub fn new(chat: Arc<dyn ChatChannel>, store: Arc<dyn StandingMessageStore>) -> Self {
        Self { chat, store }
    }

    /// Send the standing message of `kind` unless one already exists.
    ///
    /// `build` is called at most once, and only when sending. Chat failures
    /// are logged and reported as [`PublishOutcome::Failed`].
    pub async fn ensure_published<F>(
        &self,
        channel: ChannelId,
        kind: StandingMessageKind,
        build: F,
    ) -> PublishOutcome
    where
        F: FnOnce() -> MessagePayload + Send,
    {
        match self.try_ensure_published(channel, kind, build).await {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(%channel, %kind, %error, "standing message publication failed");
                PublishOutcome::Failed
            }
        }
    }

    /// Replace an existing standing message with a freshly built one.
    ///
    /// The replacement is sent before the previous message is deleted, so
    /// the channel is never left without the post.
    pub async fn refresh<F>(
        &self,
        channel: ChannelId,
        kind: StandingMessageKind,
        build: F,
    ) -> RefreshOutcome
    where
        F: FnOnce() -> MessagePayload + Send,
    {
        match self.try_refresh(channel, kind, build).await {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(%channel, %kind, %error, "standing message refresh failed");
                RefreshOutcome::Failed
            }
        }
    }

    async fn try_ensure_published<F>(
        &self,
        channel: ChannelId,
        kind: StandingMessageKind,
        build: F,
    ) -> Result<PublishOutcome, ChatChannelError>
    where
        F: FnOnce() -> MessagePayload + Send,
    {
        if let Some(existing) = self.locate(channel, kind).await? {
            info!(%channel, %kind, message = %existing, "standing message already present");
            return Ok(PublishOutcome::Skipped(existing));
        }

        let payload = build();
        let sent = self.chat.send(channel, &payload).await?;
        self.remember(channel, kind, sent).await;
        info!(%channel, %kind, message = %sent, "standing message sent");
        Ok(PublishOutcome::Sent(sent))
    }

    async fn try_refresh<F>(
        &self,
        channel: ChannelId,
        kind: StandingMessageKind,
        build: F,
    ) -> Result<RefreshOutcome, ChatChannelError>
    where
        F: FnOnce() -> MessagePayload + Send,
    {
        let Some(previous) = self.locate(channel, kind).await? else {
            debug!(%channel, %kind, "no standing message to refresh");
            return Ok(RefreshOutcome::NothingToReplace);
        };

        let payload = build();
        let current = self.chat.send(channel, &payload).await?;
        self.remember(channel, kind, current).await;
        if let Err(error) = self.chat.delete(channel, previous).await {
            warn!(%channel, %kind, message = %previous, %error, "previous standing message not deleted");
        }
        info!(%channel, %kind, %previous, %current, "standing message refreshed");
        Ok(RefreshOutcome::Replaced { previous, current })
    }

    /// Find the live standing message, preferring the durable record.
    async fn locate(
        &self,
        channel: ChannelId,
        kind: StandingMessageKind,
    ) -> Result<Option<MessageId>, ChatChannelError> {
        if let Some(recorded) = self.recorded(channel, kind).await {
            if self.chat.fetch_message(channel, recorded).await?.is_some() {
                return Ok(Some(recorded));
            }
            debug!(%channel, %kind, message = %recorded, "recorded standing message is gone");
            if let Err(error) = self.store.forget(channel, kind).await {
                log_store_error(channel, kind, &error);
            }
        }

        let bot = self.chat.bot_profile().await?.id;
        let recent = self
            .chat
            .recent_messages(channel, HISTORY_SCAN_LIMIT)
            .await?;
        let Some(found) = recent.iter().find(|message| kind.matches(message, bot)) else {
            return Ok(None);
        };
        self.remember(channel, kind, found.id).await;
        Ok(Some(found.id))
    }

    async fn recorded(&self, channel: ChannelId, kind: StandingMessageKind) -> Option<MessageId> {
        match self.store.find(channel, kind).await {
            Ok(recorded) => recorded,
            Err(error) => {
                log_store_error(channel, kind, &error);
                None
            }
        }
    }

    async fn remember(&self, channel: ChannelId, kind: StandingMessageKind, message: MessageId) {
        if let Err(error) = self.store.record(channel, kind, message).await {
            log_store_error(channel, kind, &error);
        }
    }
}

fn log_store_error(
    channel: ChannelId,
    kind: StandingMessageKind,
    error: &StandingMessageStoreError,
) {
    warn!(%channel, %kind, %error, "standing message store unavailable; relying on history scan");
}
