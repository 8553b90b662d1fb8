//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod chat_channel;
mod product_catalogue;
mod sleeper;
mod standing_message_store;
mod user_directory;

#[cfg(test)]
pub use chat_channel::MockChatChannel;
pub use chat_channel::{ChatChannel, ChatChannelError};
#[cfg(test)]
pub use product_catalogue::MockProductCatalogue;
pub use product_catalogue::ProductCatalogue;
#[cfg(test)]
pub use sleeper::MockSleeper;
pub use sleeper::{NoopSleeper, Sleeper, TokioSleeper};
#[cfg(test)]
pub use standing_message_store::MockStandingMessageStore;
pub use standing_message_store::{StandingMessageStore, StandingMessageStoreError};
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::UserDirectory;
