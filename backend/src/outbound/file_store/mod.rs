//! File-backed adapters rooted in a configured state directory.

mod atomic_io;
mod standing_store;

pub use standing_store::{JsonFileStandingMessageStore, STANDING_MESSAGES_FILE};
