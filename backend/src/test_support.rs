//! Test utilities for the storefront crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Compiled for `cfg(test)` and under the `test-support` feature.

pub mod cap_fs {
    //! Capability-safe filesystem helpers for tests.
    //!
    //! These mirror the production file store's `cap_std` access so tests
    //! can inspect and corrupt state files without touching `std::fs`.

    use std::io;

    use camino::Utf8Path;
    use cap_std::{ambient_authority, fs_utf8::Dir};

    /// Read a UTF-8 text file through `cap_std`.
    pub fn read_file_to_string(path: &Utf8Path) -> io::Result<String> {
        let (parent, file_name) = parent_and_file_name(path)?;
        let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
        directory.read_to_string(file_name)
    }

    /// Write bytes to a file through `cap_std`.
    pub fn write_file(path: &Utf8Path, contents: &[u8]) -> io::Result<()> {
        let (parent, file_name) = parent_and_file_name(path)?;
        let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
        directory.write(file_name, contents)
    }

    /// Remove a directory and everything beneath it through `cap_std`.
    pub fn remove_dir_all(path: &Utf8Path) -> io::Result<()> {
        let (parent, dir_name) = parent_and_file_name(path)?;
        let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
        directory.remove_dir_all(dir_name)
    }

    /// Return true when `path` exists, false when it does not.
    pub fn path_exists(path: &Utf8Path) -> bool {
        let Ok((parent, file_name)) = parent_and_file_name(path) else {
            return false;
        };
        let Ok(directory) = Dir::open_ambient_dir(parent, ambient_authority()) else {
            return false;
        };
        directory.exists(file_name)
    }

    fn parent_and_file_name(path: &Utf8Path) -> io::Result<(&Utf8Path, &str)> {
        let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
        let file_name = path.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "path must include a file name",
            )
        })?;
        Ok((parent, file_name))
    }
}

pub mod state_dir {
    //! Temporary state directories for the file-backed store.

    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    /// A temporary directory plus its UTF-8 path.
    ///
    /// The directory is removed when the guard is dropped.
    pub struct TempStateDir {
        _guard: TempDir,
        path: Utf8PathBuf,
    }

    impl TempStateDir {
        /// Create a fresh directory, panicking when the platform refuses.
        pub fn new() -> Self {
            let guard = TempDir::new().expect("create temp state dir");
            let path = Utf8PathBuf::from_path_buf(guard.path().to_path_buf())
                .expect("temp dir path is UTF-8");
            Self {
                _guard: guard,
                path,
            }
        }

        pub fn path(&self) -> &Utf8PathBuf {
            &self.path
        }
    }

    impl Default for TempStateDir {
        fn default() -> Self {
            Self::new()
        }
    }
}

pub mod chat {
    //! In-memory stand-in for a chat platform.

    use std::collections::HashMap;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    use async_trait::async_trait;

    use crate::domain::chat::{AccountId, BotProfile, ChannelId, ChannelMessage, MessageId};
    use crate::domain::ports::{ChatChannel, ChatChannelError};
    use crate::domain::rendering::MessagePayload;

    /// A message the bot posted through the simulated channel.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct PostedMessage {
        pub channel: ChannelId,
        pub id: MessageId,
        pub reply_to: Option<MessageId>,
        pub payload: MessagePayload,
    }

    #[derive(Default)]
    struct State {
        next_id: u64,
        /// Oldest first, per channel.
        history: HashMap<ChannelId, Vec<ChannelMessage>>,
        posted: Vec<PostedMessage>,
        deleted: Vec<(ChannelId, MessageId)>,
        failing: bool,
    }

    /// Simulated channel history with call recording.
    ///
    /// Sends append to the channel history authored by the bot, so a later
    /// history scan sees them exactly like the real platform would.
    pub struct SimulatedChatChannel {
        bot: BotProfile,
        state: Mutex<State>,
    }

    impl SimulatedChatChannel {
        pub fn new(bot_id: u64) -> Self {
            Self {
                bot: BotProfile {
                    id: AccountId::new(bot_id).expect("bot id must be non-zero"),
                    avatar_url: Some("https://cdn.existence.invalid/bot.png".to_owned()),
                },
                state: Mutex::new(State {
                    next_id: 1_000,
                    ..State::default()
                }),
            }
        }

        fn lock(&self) -> MutexGuard<'_, State> {
            self.state.lock().unwrap_or_else(PoisonError::into_inner)
        }

        pub fn bot_id(&self) -> AccountId {
            self.bot.id
        }

        /// Append a message authored by `author` to the channel history.
        pub fn seed_message(
            &self,
            channel: ChannelId,
            author: AccountId,
            title: Option<&str>,
            has_components: bool,
        ) -> MessageId {
            let mut state = self.lock();
            let id = next_message_id(&mut state);
            state.history.entry(channel).or_default().push(ChannelMessage {
                id,
                author,
                first_embed_title: title.map(str::to_owned),
                has_components,
            });
            id
        }

        /// Make every subsequent call fail with a transport error.
        pub fn set_failing(&self, failing: bool) {
            self.lock().failing = failing;
        }

        pub fn posted(&self) -> Vec<PostedMessage> {
            self.lock().posted.clone()
        }

        pub fn posted_to(&self, channel: ChannelId) -> Vec<PostedMessage> {
            self.lock()
                .posted
                .iter()
                .filter(|message| message.channel == channel)
                .cloned()
                .collect()
        }

        pub fn deleted(&self) -> Vec<(ChannelId, MessageId)> {
            self.lock().deleted.clone()
        }

        pub fn history(&self, channel: ChannelId) -> Vec<ChannelMessage> {
            self.lock().history.get(&channel).cloned().unwrap_or_default()
        }

        fn post(
            &self,
            channel: ChannelId,
            reply_to: Option<MessageId>,
            payload: &MessagePayload,
        ) -> Result<MessageId, ChatChannelError> {
            let mut state = self.lock();
            ensure_available(&state)?;
            let id = next_message_id(&mut state);
            state.history.entry(channel).or_default().push(ChannelMessage {
                id,
                author: self.bot.id,
                first_embed_title: payload.first_embed_title().map(str::to_owned),
                has_components: !payload.components.is_empty(),
            });
            state.posted.push(PostedMessage {
                channel,
                id,
                reply_to,
                payload: payload.clone(),
            });
            Ok(id)
        }
    }

    fn next_message_id(state: &mut State) -> MessageId {
        state.next_id += 1;
        MessageId::new(state.next_id).expect("ids start above zero")
    }

    fn ensure_available(state: &State) -> Result<(), ChatChannelError> {
        if state.failing {
            return Err(ChatChannelError::transport("simulated outage"));
        }
        Ok(())
    }

    #[async_trait]
    impl ChatChannel for SimulatedChatChannel {
        async fn bot_profile(&self) -> Result<BotProfile, ChatChannelError> {
            ensure_available(&self.lock())?;
            Ok(self.bot.clone())
        }

        async fn recent_messages(
            &self,
            channel: ChannelId,
            limit: u8,
        ) -> Result<Vec<ChannelMessage>, ChatChannelError> {
            let state = self.lock();
            ensure_available(&state)?;
            Ok(state
                .history
                .get(&channel)
                .map(|messages| {
                    messages
                        .iter()
                        .rev()
                        .take(usize::from(limit))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default())
        }

        async fn fetch_message(
            &self,
            channel: ChannelId,
            message: MessageId,
        ) -> Result<Option<ChannelMessage>, ChatChannelError> {
            let state = self.lock();
            ensure_available(&state)?;
            Ok(state
                .history
                .get(&channel)
                .and_then(|messages| messages.iter().find(|m| m.id == message))
                .cloned())
        }

        async fn send(
            &self,
            channel: ChannelId,
            payload: &MessagePayload,
        ) -> Result<MessageId, ChatChannelError> {
            self.post(channel, None, payload)
        }

        async fn reply(
            &self,
            channel: ChannelId,
            reply_to: MessageId,
            payload: &MessagePayload,
        ) -> Result<MessageId, ChatChannelError> {
            self.post(channel, Some(reply_to), payload)
        }

        async fn delete(
            &self,
            channel: ChannelId,
            message: MessageId,
        ) -> Result<(), ChatChannelError> {
            let mut state = self.lock();
            ensure_available(&state)?;
            if let Some(messages) = state.history.get_mut(&channel) {
                messages.retain(|m| m.id != message);
            }
            state.deleted.push((channel, message));
            Ok(())
        }
    }
}

pub mod clock {
    //! Controllable clock for time-dependent renderings.

    use std::sync::{Mutex, MutexGuard, PoisonError};

    use chrono::{DateTime, Local, TimeDelta, Utc};
    use mockable::Clock;

    /// Clock that only moves when told to.
    pub struct MutableClock(Mutex<DateTime<Utc>>);

    impl MutableClock {
        pub fn new(now: DateTime<Utc>) -> Self {
            Self(Mutex::new(now))
        }

        /// Clock frozen at `millis` since the Unix epoch.
        pub fn at_millis(millis: i64) -> Self {
            Self::new(DateTime::from_timestamp_millis(millis).expect("timestamp in range"))
        }

        pub fn advance_millis(&self, millis: i64) {
            *self.lock_clock() += TimeDelta::milliseconds(millis);
        }

        fn lock_clock(&self) -> MutexGuard<'_, DateTime<Utc>> {
            self.0.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    impl Clock for MutableClock {
        fn local(&self) -> DateTime<Local> {
            self.utc().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            *self.lock_clock()
        }
    }
}
