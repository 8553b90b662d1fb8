//! Discord gateway inbound adapter.
//!
//! [`DiscordEventHandler`] turns gateway events into [`ChatDispatcher`]
//! calls; [`connect`] builds the serenity client around it.
//!
//! [`ChatDispatcher`]: crate::domain::ChatDispatcher

mod convert;
mod handler;

use serenity::Client;
use serenity::all::GatewayIntents;

pub use convert::{inbound_interaction, inbound_message};
pub use handler::DiscordEventHandler;

/// Gateway intents needed to read commands and receive interactions.
#[must_use]
pub fn gateway_intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
}

/// Build a gateway client for `token`. Call `start` on the result to log in.
pub async fn connect(token: &str, handler: DiscordEventHandler) -> serenity::Result<Client> {
    Client::builder(token, gateway_intents())
        .event_handler(handler)
        .await
}
