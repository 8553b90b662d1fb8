//! Catalogue and bot content rendered into chat payloads.
//!
//! Every function here is pure: the current time is passed in so animated
//! glyphs and timestamps are deterministic under test.

mod announcement;
mod payload;
mod product;
mod static_posts;
mod status;


use chrono::{DateTime, Utc};

pub use announcement::announcement_post;
pub use payload::{
    Button, ButtonStyle, Component, Embed, EmbedField, EmbedFooter, MessagePayload, SelectMenu,
    SelectOption,
};
pub use product::{
    MAX_SELECT_OPTIONS, MenuVariant, download_reply, featured_list, popular_list, product_menu,
    product_summary, select_options,
};
pub use static_posts::{GENERIC_ERROR_REPLY, help, welcome_post};
pub use status::{progress_bar, status_board, status_card, status_header};

/// Platform markdown for a relative timestamp such as "5 minutes ago".
fn relative_time(at: DateTime<Utc>) -> String {
    format!("<t:{}:R>", at.timestamp())
}

/// Platform markdown for a full date and time.
fn full_time(at: DateTime<Utc>) -> String {
    format!("<t:{}:F>", at.timestamp())
}
