//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: seeded catalogue, user directory and a volatile
//!   standing-message store
//! - **file_store**: JSON standing-message store written atomically
//! - **discord**: serenity-backed chat channel
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod discord;
pub mod file_store;
pub mod memory;
