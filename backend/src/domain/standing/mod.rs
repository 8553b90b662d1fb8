//! Standing messages: posts that should exist once per channel.
//!
//! [`StandingMessagePublisher`] keeps the product menu, status board and
//! welcome post present across restarts. It trusts the durable record first
//! and falls back to scanning recent history for a fingerprinted post.

mod publisher;

#[cfg(test)]
mod tests;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chat::{AccountId, ChannelMessage};

pub use publisher::{HISTORY_SCAN_LIMIT, PublishOutcome, RefreshOutcome, StandingMessagePublisher};

/// The standing posts the bot maintains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandingMessageKind {
    ProductMenu,
    StatusBoard,
    Welcome,
}

impl StandingMessageKind {
    pub const ALL: [Self; 3] = [Self::ProductMenu, Self::StatusBoard, Self::Welcome];

    /// Substring of the first embed title that identifies this kind.
    #[must_use]
    pub const fn fingerprint(self) -> &'static str {
        match self {
            Self::ProductMenu => "Existence Downloads",
            Self::StatusBoard => "Existence Tool Status",
            Self::Welcome => "Welcome to Existence",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ProductMenu => "product_menu",
            Self::StatusBoard => "status_board",
            Self::Welcome => "welcome",
        }
    }

    /// Whether a matching post must also carry components.
    ///
    /// The product menu is only useful with its select menu attached.
    const fn requires_components(self) -> bool {
        matches!(self, Self::ProductMenu)
    }

    /// Whether `message`, authored by `bot`, is an instance of this kind.
    #[must_use]
    pub fn matches(self, message: &ChannelMessage, bot: AccountId) -> bool {
        message.author == bot
            && message
                .first_embed_title
                .as_deref()
                .is_some_and(|title| title.contains(self.fingerprint()))
            && (!self.requires_components() || message.has_components)
    }
}

impl fmt::Display for StandingMessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
