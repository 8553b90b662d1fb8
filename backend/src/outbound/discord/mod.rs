//! Discord adapters built on serenity's REST client.

mod channel;
mod payload;

pub use channel::SerenityChatChannel;
pub use payload::{create_message, ephemeral_response};
