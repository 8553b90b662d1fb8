//! Component custom ids.

use std::fmt;
use std::str::FromStr;

use crate::domain::catalogue::ProductId;

pub const PRODUCT_SELECT_ID: &str = "product_select";
pub const PERMANENT_PRODUCT_SELECT_ID: &str = "permanent_product_select";
const DOWNLOAD_PREFIX: &str = "download_";

/// Custom id carried by a select menu or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionId {
    /// Ephemeral menu posted by `!products`.
    ProductSelect,
    /// Standing menu in the catalogue channel.
    PermanentProductSelect,
    /// Download button for a product.
    Download(ProductId),
}

/// Errors raised while parsing a custom id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InteractionIdError {
    #[error("unrecognised component id '{custom_id}'")]
    Unrecognised { custom_id: String },
    #[error("component id '{custom_id}' does not name a product")]
    InvalidProduct { custom_id: String },
}

impl FromStr for InteractionId {
    type Err = InteractionIdError;

    fn from_str(custom_id: &str) -> Result<Self, Self::Err> {
        match custom_id {
            PRODUCT_SELECT_ID => Ok(Self::ProductSelect),
            PERMANENT_PRODUCT_SELECT_ID => Ok(Self::PermanentProductSelect),
            other => {
                let raw = other.strip_prefix(DOWNLOAD_PREFIX).ok_or_else(|| {
                    InteractionIdError::Unrecognised {
                        custom_id: other.to_owned(),
                    }
                })?;
                raw.parse::<ProductId>()
                    .map(Self::Download)
                    .map_err(|_| InteractionIdError::InvalidProduct {
                        custom_id: other.to_owned(),
                    })
            }
        }
    }
}

impl fmt::Display for InteractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProductSelect => f.write_str(PRODUCT_SELECT_ID),
            Self::PermanentProductSelect => f.write_str(PERMANENT_PRODUCT_SELECT_ID),
            Self::Download(id) => write!(f, "{DOWNLOAD_PREFIX}{id}"),
        }
    }
}
