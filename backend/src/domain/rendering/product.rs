//! Product-centric renderings: menus, lists, detail and download replies.

use chrono::{DateTime, Utc};

use super::{Button, ButtonStyle, Component, Embed, MessagePayload, SelectMenu, SelectOption};
use crate::domain::catalogue::{Category, Product};
use crate::domain::commands::InteractionId;

/// Platform cap on options in one select menu.
pub const MAX_SELECT_OPTIONS: usize = 25;
const OPTION_DESCRIPTION_CHARS: usize = 100;
const LIST_LIMIT: usize = 5;

const MENU_TITLE: &str = "🔥 Existence Downloads";
const MENU_DESCRIPTION: &str = "Select a product from the dropdown menu below to view download links for our available products.";
const MENU_COLOUR: u32 = 0x0058_65F2;
const SUCCESS_COLOUR: u32 = 0x0000_FF00;
const FAILURE_COLOUR: u32 = 0x00FF_0000;

/// Which select menu a product menu carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuVariant {
    /// Reply to `!products`.
    Ephemeral,
    /// Standing menu in the catalogue channel.
    Standing,
}

impl MenuVariant {
    fn interaction_id(self) -> InteractionId {
        match self {
            Self::Ephemeral => InteractionId::ProductSelect,
            Self::Standing => InteractionId::PermanentProductSelect,
        }
    }
}

/// One option per product, capped at [`MAX_SELECT_OPTIONS`].
#[must_use]
pub fn select_options(products: &[Product]) -> Vec<SelectOption> {
    products
        .iter()
        .take(MAX_SELECT_OPTIONS)
        .map(|product| SelectOption {
            label: product.name().to_owned(),
            description: product
                .description()
                .chars()
                .take(OPTION_DESCRIPTION_CHARS)
                .collect(),
            value: product.id().to_string(),
            emoji: product.category().emoji().to_owned(),
        })
        .collect()
}

/// Catalogue menu: a heading embed plus a product select menu.
#[must_use]
pub fn product_menu(products: &[Product], variant: MenuVariant, now: DateTime<Utc>) -> MessagePayload {
    let embed = Embed::new(MENU_TITLE, MENU_COLOUR)
        .description(MENU_DESCRIPTION)
        .timestamp(now);

    MessagePayload::embed(embed).with_component(Component::Select(SelectMenu {
        custom_id: variant.interaction_id().to_string(),
        placeholder: "Select a product".to_owned(),
        options: select_options(products),
    }))
}

fn titled(product: &Product) -> String {
    format!("{} {}", product.category().emoji(), product.name())
}

fn list(
    title: &str,
    description: &str,
    colour: u32,
    products: &[Product],
    now: DateTime<Utc>,
) -> MessagePayload {
    let embed = products.iter().take(LIST_LIMIT).fold(
        Embed::new(title, colour).description(description).timestamp(now),
        |embed, product| {
            embed.field(
                titled(product),
                format!(
                    "{}\n**Category:** {}",
                    product.description(),
                    product.category()
                ),
                false,
            )
        },
    );
    MessagePayload::embed(embed)
}

/// Reply to `!featured`; at most five products.
#[must_use]
pub fn featured_list(products: &[Product], now: DateTime<Utc>) -> MessagePayload {
    list(
        "⭐ Featured Products",
        "Check out our hand-picked featured products",
        0x00F1_C40F,
        products,
        now,
    )
}

/// Reply to `!popular`; at most five products.
#[must_use]
pub fn popular_list(products: &[Product], now: DateTime<Utc>) -> MessagePayload {
    list(
        "🔥 Popular Products",
        "Most downloaded products by our community",
        0x00E7_4C3C,
        products,
        now,
    )
}

fn badge(product: &Product) -> &'static str {
    if product.is_featured() {
        "⭐ Featured"
    } else if product.is_popular() {
        "🔥 Popular"
    } else {
        "📦 Available"
    }
}

/// Ephemeral detail view shown after a menu selection.
#[must_use]
pub fn product_summary(product: &Product, now: DateTime<Utc>) -> MessagePayload {
    let embed = Embed::new(titled(product), product.color_indicator().rgb())
        .description(product.description())
        .field("Category", product.category().label(), true)
        .field("Status", badge(product), true)
        .timestamp(now);

    let label = match product.category() {
        Category::Loader => "Access Loader",
        _ => "Download",
    };

    MessagePayload::embed(embed).with_component(Component::Buttons(vec![Button {
        custom_id: InteractionId::Download(product.id()).to_string(),
        label: label.to_owned(),
        emoji: "⬇️".to_owned(),
        style: ButtonStyle::Primary,
    }]))
}

/// Ephemeral reply to a download button.
#[must_use]
pub fn download_reply(product: &Product, now: DateTime<Utc>) -> MessagePayload {
    let Some(url) = product.download().url() else {
        let embed = Embed::new("⚠️ Download Not Available", FAILURE_COLOUR)
            .description(format!(
                "**{}** download link is not configured yet.",
                product.name()
            ))
            .timestamp(now);
        return MessagePayload::embed(embed);
    };

    let embed = Embed::new("🔗 Download Link", SUCCESS_COLOUR)
        .description(format!("**{}** is ready for download.", product.name()))
        .field("Product", product.name(), true)
        .field("Category", product.category().label(), true)
        .field("Download", format!("[Click here to download]({url})"), false)
        .timestamp(now);
    MessagePayload::embed(embed)
}
