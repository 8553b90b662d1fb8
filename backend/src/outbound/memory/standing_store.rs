//! Volatile standing-message store.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::chat::{ChannelId, MessageId};
use crate::domain::ports::{StandingMessageStore, StandingMessageStoreError};
use crate::domain::standing::StandingMessageKind;

/// Records kept for the process lifetime only.
///
/// Used when no state directory is configured; restarts then rely on the
/// history scan alone.
#[derive(Debug, Default)]
pub struct InMemoryStandingMessageStore {
    records: Mutex<HashMap<(ChannelId, StandingMessageKind), MessageId>>,
}

impl InMemoryStandingMessageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StandingMessageStore for InMemoryStandingMessageStore {
    async fn find(
        &self,
        channel: ChannelId,
        kind: StandingMessageKind,
    ) -> Result<Option<MessageId>, StandingMessageStoreError> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records.get(&(channel, kind)).copied())
    }

    async fn record(
        &self,
        channel: ChannelId,
        kind: StandingMessageKind,
        message: MessageId,
    ) -> Result<(), StandingMessageStoreError> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.insert((channel, kind), message);
        Ok(())
    }

    async fn forget(
        &self,
        channel: ChannelId,
        kind: StandingMessageKind,
    ) -> Result<(), StandingMessageStoreError> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.remove(&(channel, kind));
        Ok(())
    }
}
