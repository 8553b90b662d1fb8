//! Platform-neutral chat identifiers and message snapshots.
//!
//! Adapters translate their SDK models into these types so the domain never
//! depends on the chat platform's client library.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! snowflake_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(NonZeroU64);

        impl $name {
            /// Wrap a raw snowflake; zero is rejected.
            #[must_use]
            pub fn new(raw: u64) -> Option<Self> {
                NonZeroU64::new(raw).map(Self)
            }

            #[must_use]
            pub fn get(self) -> u64 {
                self.0.get()
            }
        }

        impl From<NonZeroU64> for $name {
            fn from(value: NonZeroU64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                raw.parse::<NonZeroU64>().map(Self)
            }
        }
    };
}

snowflake_id! {
    /// Chat channel identifier.
    ChannelId
}

snowflake_id! {
    /// Chat message identifier.
    MessageId
}

snowflake_id! {
    /// Chat account identifier (users and bots alike).
    AccountId
}

/// What the publisher needs to know about an existing channel message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMessage {
    pub id: MessageId,
    pub author: AccountId,
    /// Title of the first embed, if the message carries one.
    pub first_embed_title: Option<String>,
    /// Whether the message carries at least one component row.
    pub has_components: bool,
}

/// Identity of the bot account the process is logged in as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotProfile {
    pub id: AccountId,
    pub avatar_url: Option<String>,
}

/// Inbound text message, already stripped of SDK detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub channel: ChannelId,
    pub id: MessageId,
    pub author_name: String,
    pub author_is_bot: bool,
    pub content: String,
}

/// Inbound component interaction (select menu choice or button press).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundInteraction {
    pub custom_id: String,
    /// Selected values; empty for buttons.
    pub values: Vec<String>,
}
