//! Download availability for a product.

use serde::{Deserialize, Serialize};
use url::Url;

use super::CatalogueValidationError;

/// Seed value meaning "no download published yet".
pub const PENDING_DOWNLOAD_SENTINEL: &str = "#";

/// Either a published download URL or the pending sentinel.
///
/// Serialised as the raw string, so pending links appear as `"#"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DownloadLink {
    Pending,
    Available(Url),
}

impl DownloadLink {
    /// Parse a seeded download value.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueValidationError::InvalidDownloadUrl`] when the value
    /// is neither the sentinel nor an absolute URL.
    pub fn parse(raw: &str) -> Result<Self, CatalogueValidationError> {
        if raw == PENDING_DOWNLOAD_SENTINEL {
            return Ok(Self::Pending);
        }
        Url::parse(raw)
            .map(Self::Available)
            .map_err(|_| CatalogueValidationError::InvalidDownloadUrl {
                value: raw.to_owned(),
            })
    }

    /// Whether a download can be offered.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// The published URL, if any.
    #[must_use]
    pub const fn url(&self) -> Option<&Url> {
        match self {
            Self::Available(url) => Some(url),
            Self::Pending => None,
        }
    }

    /// Raw string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available(url) => url.as_str(),
            Self::Pending => PENDING_DOWNLOAD_SENTINEL,
        }
    }
}

impl TryFrom<String> for DownloadLink {
    type Error = CatalogueValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DownloadLink> for String {
    fn from(value: DownloadLink) -> Self {
        value.as_str().to_owned()
    }
}
