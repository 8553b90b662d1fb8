//! Port abstraction for durable standing-message records.
//!
//! A record remembers which message currently represents a standing kind in
//! a channel, so restarts can skip re-publishing without scanning history.

use async_trait::async_trait;

use crate::domain::chat::{ChannelId, MessageId};
use crate::domain::standing::StandingMessageKind;

use super::define_port_error;

define_port_error! {
    /// Errors raised by standing-message store adapters.
    pub enum StandingMessageStoreError {
        /// Reading or writing the backing storage failed.
        Io { message: String } => "standing message store i/o failed: {message}",
        /// Stored records could not be decoded.
        Serialization { message: String } => "standing message store serialization failed: {message}",
    }
}

/// Keyed `(channel, kind) -> message` records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StandingMessageStore: Send + Sync {
    async fn find(
        &self,
        channel: ChannelId,
        kind: StandingMessageKind,
    ) -> Result<Option<MessageId>, StandingMessageStoreError>;

    /// Insert or replace the record for `(channel, kind)`.
    async fn record(
        &self,
        channel: ChannelId,
        kind: StandingMessageKind,
        message: MessageId,
    ) -> Result<(), StandingMessageStoreError>;

    /// Drop the record for `(channel, kind)`, if any.
    async fn forget(
        &self,
        channel: ChannelId,
        kind: StandingMessageKind,
    ) -> Result<(), StandingMessageStoreError>;
}
