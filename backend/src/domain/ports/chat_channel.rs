//! Port abstraction for outbound chat channel operations.
//!
//! The [`ChatChannel`] trait covers the handful of REST calls the bot makes:
//! reading recent history, sending, replying and deleting. Adapters map
//! their SDK errors onto [`ChatChannelError`].

use async_trait::async_trait;

use crate::domain::chat::{BotProfile, ChannelId, ChannelMessage, MessageId};
use crate::domain::rendering::MessagePayload;

use super::define_port_error;

define_port_error! {
    /// Errors raised by chat channel adapters.
    pub enum ChatChannelError {
        /// The channel does not exist or the bot cannot see it.
        ChannelUnavailable { channel: String } => "chat channel {channel} is unavailable",
        /// The platform refused the call for lack of permissions.
        Forbidden { message: String } => "chat operation forbidden: {message}",
        /// Transport or platform failure.
        Transport { message: String } => "chat transport failed: {message}",
        /// The bot is not logged in yet.
        NotReady => "chat client is not ready",
    }
}

/// Outbound chat operations used by the publisher and dispatcher.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatChannel: Send + Sync {
    /// Identity of the logged-in bot account.
    async fn bot_profile(&self) -> Result<BotProfile, ChatChannelError>;

    /// Most recent messages in `channel`, newest first, at most `limit`.
    async fn recent_messages(
        &self,
        channel: ChannelId,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, ChatChannelError>;

    /// Fetch one message; `Ok(None)` when it has been deleted.
    async fn fetch_message(
        &self,
        channel: ChannelId,
        message: MessageId,
    ) -> Result<Option<ChannelMessage>, ChatChannelError>;

    /// Post a new message.
    async fn send(
        &self,
        channel: ChannelId,
        payload: &MessagePayload,
    ) -> Result<MessageId, ChatChannelError>;

    /// Post a message as a reply to `reply_to`.
    async fn reply(
        &self,
        channel: ChannelId,
        reply_to: MessageId,
        payload: &MessagePayload,
    ) -> Result<MessageId, ChatChannelError>;

    /// Delete a message. Deleting a message that is already gone succeeds.
    async fn delete(&self, channel: ChannelId, message: MessageId)
    -> Result<(), ChatChannelError>;
}
