//! Process-lifetime adapters backed by plain collections.

mod catalogue;
mod standing_store;
mod users;

pub use catalogue::InMemoryProductCatalogue;
pub use standing_store::InMemoryStandingMessageStore;
pub use users::InMemoryUserDirectory;
