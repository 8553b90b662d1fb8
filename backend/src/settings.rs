//! Runtime configuration loaded via OrthoConfig.
//!
//! Every value can come from the command line, a config file or a
//! `STOREFRONT_`-prefixed environment variable. Unset values fall back to the
//! production defaults below.

use std::net::SocketAddr;
use std::num::NonZeroU64;
use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::ChatDestinations;
use crate::domain::DEFAULT_REFRESH_PERIOD;
use crate::domain::chat::ChannelId;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_STATE_DIR: &str = "state";
const DEFAULT_MENU_CHANNEL: u64 = 1_366_698_054_777_962_610;
const DEFAULT_STATUS_CHANNEL: u64 = 1_366_051_838_797_025_351;
const DEFAULT_NEWS_CHANNEL: u64 = 1_385_298_522_085_003_388;
const SECONDS_PER_HOUR: u64 = 60 * 60;

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("bind address {value:?} is not a socket address")]
    BindAddr { value: String },
    #[error("{setting} must be a non-zero channel id")]
    ChannelId { setting: &'static str },
    #[error("status refresh interval must be at least one hour")]
    RefreshInterval,
}

/// Storefront process settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STOREFRONT")]
pub struct StorefrontSettings {
    /// Socket address for the HTTP server.
    pub bind_addr: Option<String>,
    /// Discord bot token. Without one the chat side stays offline.
    pub discord_token: Option<String>,
    /// Channel holding the standing product menu.
    pub menu_channel_id: Option<u64>,
    /// Channel holding the standing status board.
    pub status_channel_id: Option<u64>,
    /// Channel for the welcome post and announcements.
    pub news_channel_id: Option<u64>,
    /// Directory for the standing-message state file.
    pub state_dir: Option<String>,
    /// Hours between status board refreshes.
    pub status_refresh_hours: Option<u64>,
}

fn channel(value: Option<u64>, default: u64, setting: &'static str) -> Result<ChannelId, SettingsError> {
    NonZeroU64::new(value.unwrap_or(default))
        .map(ChannelId::from)
        .ok_or(SettingsError::ChannelId { setting })
}

impl StorefrontSettings {
    /// Parsed bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|_| SettingsError::BindAddr {
            value: raw.to_owned(),
        })
    }

    /// Discord token, ignoring blank values.
    pub fn discord_token(&self) -> Option<&str> {
        self.discord_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// Menu, status and news channels.
    pub fn destinations(&self) -> Result<ChatDestinations, SettingsError> {
        Ok(ChatDestinations {
            menu: channel(self.menu_channel_id, DEFAULT_MENU_CHANNEL, "menu_channel_id")?,
            status: channel(
                self.status_channel_id,
                DEFAULT_STATUS_CHANNEL,
                "status_channel_id",
            )?,
            news: channel(self.news_channel_id, DEFAULT_NEWS_CHANNEL, "news_channel_id")?,
        })
    }

    /// State directory, falling back to `./state`.
    pub fn state_dir(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.state_dir.as_deref().unwrap_or(DEFAULT_STATE_DIR))
    }

    /// Status board refresh period; five hours unless configured.
    pub fn status_refresh_period(&self) -> Result<Duration, SettingsError> {
        match self.status_refresh_hours {
            None => Ok(DEFAULT_REFRESH_PERIOD),
            Some(0) => Err(SettingsError::RefreshInterval),
            Some(hours) => Ok(Duration::from_secs(hours.saturating_mul(SECONDS_PER_HOUR))),
        }
    }
}
