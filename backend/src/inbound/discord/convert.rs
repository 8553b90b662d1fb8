//! serenity model to domain conversions.

use serenity::all::{ComponentInteraction, ComponentInteractionDataKind, Message};

use crate::domain::chat::{ChannelId, InboundInteraction, InboundMessage, MessageId};

/// Domain view of a gateway message; `None` only for zero snowflakes.
#[must_use]
pub fn inbound_message(message: &Message) -> Option<InboundMessage> {
    Some(InboundMessage {
        channel: ChannelId::new(message.channel_id.get())?,
        id: MessageId::new(message.id.get())?,
        author_name: message.author.name.clone(),
        author_is_bot: message.author.bot,
        content: message.content.clone(),
    })
}

/// Domain view of a component interaction.
#[must_use]
pub fn inbound_interaction(component: &ComponentInteraction) -> InboundInteraction {
    InboundInteraction {
        custom_id: component.data.custom_id.clone(),
        values: selected_values(&component.data.kind),
    }
}

fn selected_values(kind: &ComponentInteractionDataKind) -> Vec<String> {
    match kind {
        ComponentInteractionDataKind::StringSelect { values } => values.clone(),
        _ => Vec::new(),
    }
}
