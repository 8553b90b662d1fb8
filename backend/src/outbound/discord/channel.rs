//! serenity REST adapter for the [`ChatChannel`] port.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{
    ChannelId as SerenityChannelId, GetMessages, Http, HttpError, Message,
    MessageId as SerenityMessageId,
};
use tokio::sync::OnceCell;
use tracing::debug;

use crate::domain::chat::{AccountId, BotProfile, ChannelId, ChannelMessage, MessageId};
use crate::domain::ports::{ChatChannel, ChatChannelError};
use crate::domain::rendering::MessagePayload;

use super::payload::create_message;

const NOT_FOUND: u16 = 404;
const FORBIDDEN: u16 = 403;

fn status_of(error: &serenity::Error) -> Option<u16> {
    match error {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            Some(response.status_code.as_u16())
        }
        _ => None,
    }
}

fn map_error(channel: ChannelId, error: &serenity::Error) -> ChatChannelError {
    match status_of(error) {
        Some(NOT_FOUND) => ChatChannelError::channel_unavailable(channel.to_string()),
        Some(FORBIDDEN) => ChatChannelError::forbidden(error.to_string()),
        _ => ChatChannelError::transport(error.to_string()),
    }
}

fn to_serenity_channel(channel: ChannelId) -> SerenityChannelId {
    SerenityChannelId::new(channel.get())
}

fn to_serenity_message(message: MessageId) -> SerenityMessageId {
    SerenityMessageId::new(message.get())
}

fn snapshot(message: &Message) -> Option<ChannelMessage> {
    Some(ChannelMessage {
        id: MessageId::new(message.id.get())?,
        author: AccountId::new(message.author.id.get())?,
        first_embed_title: message.embeds.first().and_then(|embed| embed.title.clone()),
        has_components: !message.components.is_empty(),
    })
}

fn sent_id(message: &Message) -> Result<MessageId, ChatChannelError> {
    MessageId::new(message.id.get())
        .ok_or_else(|| ChatChannelError::transport("platform returned message id 0"))
}

/// Chat channel backed by the Discord REST API.
pub struct SerenityChatChannel {
    http: Arc<Http>,
    profile: OnceCell<BotProfile>,
}

impl SerenityChatChannel {
    pub fn new(http: Arc<Http>) -> Self {
        Self {
            http,
            profile: OnceCell::new(),
        }
    }

    async fn load_profile(&self) -> Result<BotProfile, ChatChannelError> {
        let user = self
            .http
            .get_current_user()
            .await
            .map_err(|error| ChatChannelError::transport(error.to_string()))?;
        let id = AccountId::new(user.id.get())
            .ok_or_else(|| ChatChannelError::transport("platform returned user id 0"))?;
        Ok(BotProfile {
            id,
            avatar_url: user.avatar_url(),
        })
    }
}

#[async_trait]
impl ChatChannel for SerenityChatChannel {
    async fn bot_profile(&self) -> Result<BotProfile, ChatChannelError> {
        self.profile
            .get_or_try_init(|| self.load_profile())
            .await
            .cloned()
    }

    async fn recent_messages(
        &self,
        channel: ChannelId,
        limit: u8,
    ) -> Result<Vec<ChannelMessage>, ChatChannelError> {
        let messages = to_serenity_channel(channel)
            .messages(&self.http, GetMessages::new().limit(limit))
            .await
            .map_err(|error| map_error(channel, &error))?;
        Ok(messages.iter().filter_map(snapshot).collect())
    }

    async fn fetch_message(
        &self,
        channel: ChannelId,
        message: MessageId,
    ) -> Result<Option<ChannelMessage>, ChatChannelError> {
        match to_serenity_channel(channel)
            .message(&self.http, to_serenity_message(message))
            .await
        {
            Ok(found) => Ok(snapshot(&found)),
            Err(error) if status_of(&error) == Some(NOT_FOUND) => {
                debug!(%channel, %message, "recorded message no longer exists");
                Ok(None)
            }
            Err(error) => Err(map_error(channel, &error)),
        }
    }

    async fn send(
        &self,
        channel: ChannelId,
        payload: &MessagePayload,
    ) -> Result<MessageId, ChatChannelError> {
        let sent = to_serenity_channel(channel)
            .send_message(&self.http, create_message(payload))
            .await
            .map_err(|error| map_error(channel, &error))?;
        sent_id(&sent)
    }

    async fn reply(
        &self,
        channel: ChannelId,
        reply_to: MessageId,
        payload: &MessagePayload,
    ) -> Result<MessageId, ChatChannelError> {
        let target = to_serenity_channel(channel);
        let builder =
            create_message(payload).reference_message((target, to_serenity_message(reply_to)));
        let sent = target
            .send_message(&self.http, builder)
            .await
            .map_err(|error| map_error(channel, &error))?;
        sent_id(&sent)
    }

    async fn delete(
        &self,
        channel: ChannelId,
        message: MessageId,
    ) -> Result<(), ChatChannelError> {
        match to_serenity_channel(channel)
            .delete_message(&self.http, to_serenity_message(message))
            .await
        {
            Ok(()) => Ok(()),
            Err(error) if status_of(&error) == Some(NOT_FOUND) => Ok(()),
            Err(error) => Err(map_error(channel, &error)),
        }
    }
}
