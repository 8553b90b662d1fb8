//! Conversion from platform-neutral payloads to serenity builders.

use serenity::all::{
    ButtonStyle as SerenityButtonStyle, CreateActionRow, CreateButton, CreateEmbed,
    CreateEmbedFooter, CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage,
    CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption, ReactionType, Timestamp,
};
use tracing::debug;

use crate::domain::rendering::{
    Button, ButtonStyle, Component, Embed, MessagePayload, SelectMenu,
};

fn embed(source: &Embed) -> CreateEmbed {
    let mut embed = CreateEmbed::new().title(&source.title).colour(source.colour);
    if let Some(description) = &source.description {
        embed = embed.description(description);
    }
    for field in &source.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }
    if let Some(footer) = &source.footer {
        let mut built = CreateEmbedFooter::new(&footer.text);
        if let Some(icon) = &footer.icon_url {
            built = built.icon_url(icon);
        }
        embed = embed.footer(built);
    }
    if let Some(at) = source.timestamp {
        match Timestamp::from_unix_timestamp(at.timestamp()) {
            Ok(timestamp) => embed = embed.timestamp(timestamp),
            Err(error) => debug!(%error, "dropping out-of-range embed timestamp"),
        }
    }
    if let Some(url) = &source.thumbnail_url {
        embed = embed.thumbnail(url);
    }
    embed
}

fn select_menu(menu: &SelectMenu) -> CreateSelectMenu {
    let options = menu
        .options
        .iter()
        .map(|option| {
            CreateSelectMenuOption::new(&option.label, &option.value)
                .description(&option.description)
                .emoji(ReactionType::Unicode(option.emoji.clone()))
        })
        .collect();
    CreateSelectMenu::new(&menu.custom_id, CreateSelectMenuKind::String { options })
        .placeholder(&menu.placeholder)
}

fn button(source: &Button) -> CreateButton {
    let style = match source.style {
        ButtonStyle::Primary => SerenityButtonStyle::Primary,
        ButtonStyle::Secondary => SerenityButtonStyle::Secondary,
    };
    CreateButton::new(&source.custom_id)
        .label(&source.label)
        .emoji(ReactionType::Unicode(source.emoji.clone()))
        .style(style)
}

fn action_row(component: &Component) -> CreateActionRow {
    match component {
        Component::Select(menu) => CreateActionRow::SelectMenu(select_menu(menu)),
        Component::Buttons(buttons) => {
            CreateActionRow::Buttons(buttons.iter().map(button).collect())
        }
    }
}

fn embeds(payload: &MessagePayload) -> Vec<CreateEmbed> {
    payload.embeds.iter().map(embed).collect()
}

fn action_rows(payload: &MessagePayload) -> Vec<CreateActionRow> {
    payload.components.iter().map(action_row).collect()
}

/// Channel message builder for `payload`.
pub fn create_message(payload: &MessagePayload) -> CreateMessage {
    let message = CreateMessage::new()
        .embeds(embeds(payload))
        .components(action_rows(payload));
    match &payload.content {
        Some(content) => message.content(content),
        None => message,
    }
}

/// Ephemeral interaction reply for `payload`.
pub fn ephemeral_response(payload: &MessagePayload) -> CreateInteractionResponse {
    let message = CreateInteractionResponseMessage::new()
        .ephemeral(true)
        .embeds(embeds(payload))
        .components(action_rows(payload));
    let message = match &payload.content {
        Some(content) => message.content(content),
        None => message,
    };
    CreateInteractionResponse::Message(message)
}
