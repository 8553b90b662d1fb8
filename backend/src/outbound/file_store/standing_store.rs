//! Standing-message records persisted as a small JSON document.
//!
//! The whole document is held in memory and rewritten atomically after each
//! change. Writes are serialised by an async mutex so concurrent publishers
//! never interleave partial documents. The in-memory view only changes once
//! the new document is on disk.

use std::collections::BTreeMap;
use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use super::atomic_io::write_atomic;
use crate::domain::chat::{ChannelId, MessageId};
use crate::domain::ports::{StandingMessageStore, StandingMessageStoreError};
use crate::domain::standing::StandingMessageKind;

/// File name of the record document inside the state directory.
pub const STANDING_MESSAGES_FILE: &str = "standing-messages.json";
const DOCUMENT_VERSION: u32 = 1;

type Records = BTreeMap<(ChannelId, StandingMessageKind), MessageId>;

#[derive(Debug, Serialize, Deserialize)]
struct Document {
    version: u32,
    records: Vec<RecordRow>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RecordRow {
    channel: ChannelId,
    kind: StandingMessageKind,
    message: MessageId,
}

impl Document {
    fn from_records(records: &Records) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            records: records
                .iter()
                .map(|(&(channel, kind), &message)| RecordRow {
                    channel,
                    kind,
                    message,
                })
                .collect(),
        }
    }

    fn into_records(self) -> Records {
        self.records
            .into_iter()
            .map(|row| ((row.channel, row.kind), row.message))
            .collect()
    }
}

/// Durable `(channel, kind) -> message` records in a JSON file.
pub struct JsonFileStandingMessageStore {
    dir: Arc<Dir>,
    records: Mutex<Records>,
}

impl JsonFileStandingMessageStore {
    /// Open (creating if needed) the state directory and load any records.
    ///
    /// # Errors
    ///
    /// Fails when the directory cannot be created or opened, or when an
    /// existing document cannot be read or decoded.
    pub fn open(state_dir: &Utf8Path) -> Result<Self, StandingMessageStoreError> {
        Dir::create_ambient_dir_all(state_dir, ambient_authority()).map_err(io_error)?;
        let dir = Dir::open_ambient_dir(state_dir, ambient_authority()).map_err(io_error)?;

        let records = match dir.read_to_string(STANDING_MESSAGES_FILE) {
            Ok(contents) => {
                let document: Document = serde_json::from_str(&contents).map_err(|error| {
                    StandingMessageStoreError::serialization(error.to_string())
                })?;
                if document.version != DOCUMENT_VERSION {
                    return Err(StandingMessageStoreError::serialization(format!(
                        "unsupported document version {}",
                        document.version
                    )));
                }
                document.into_records()
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => Records::new(),
            Err(error) => return Err(io_error(error)),
        };
        debug!(path = %state_dir, count = records.len(), "loaded standing message records");

        Ok(Self {
            dir: Arc::new(dir),
            records: Mutex::new(records),
        })
    }

    async fn persist(&self, records: &Records) -> Result<(), StandingMessageStoreError> {
        let contents = serde_json::to_string_pretty(&Document::from_records(records))
            .map_err(|error| StandingMessageStoreError::serialization(error.to_string()))?;
        let dir = Arc::clone(&self.dir);
        tokio::task::spawn_blocking(move || write_atomic(&dir, STANDING_MESSAGES_FILE, &contents))
            .await
            .map_err(|error| StandingMessageStoreError::io(error.to_string()))?
            .map_err(io_error)
    }
}

fn io_error(error: io::Error) -> StandingMessageStoreError {
    StandingMessageStoreError::io(error.to_string())
}

#[async_trait]
impl StandingMessageStore for JsonFileStandingMessageStore {
    async fn find(
        &self,
        channel: ChannelId,
        kind: StandingMessageKind,
    ) -> Result<Option<MessageId>, StandingMessageStoreError> {
        Ok(self.records.lock().await.get(&(channel, kind)).copied())
    }

    async fn record(
        &self,
        channel: ChannelId,
        kind: StandingMessageKind,
        message: MessageId,
    ) -> Result<(), StandingMessageStoreError> {
        let mut records = self.records.lock().await;
        if records.get(&(channel, kind)) == Some(&message) {
            return Ok(());
        }
        let mut next = records.clone();
        next.insert((channel, kind), message);
        self.persist(&next).await?;
        *records = next;
        Ok(())
    }

    async fn forget(
        &self,
        channel: ChannelId,
        kind: StandingMessageKind,
    ) -> Result<(), StandingMessageStoreError> {
        let mut records = self.records.lock().await;
        if !records.contains_key(&(channel, kind)) {
            return Ok(());
        }
        let mut next = records.clone();
        next.remove(&(channel, kind));
        self.persist(&next).await?;
        *records = next;
        Ok(())
    }
}
