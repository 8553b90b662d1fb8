//! Product catalogue domain types.
//!
//! Products are validated once at seed time and never mutated afterwards.
//! Category, colour palette and download availability are closed domain
//! types so renderers can rely on exhaustive lookups.

use std::fmt;

mod category;
mod colour;
mod download;
mod product;
mod seed;
mod validation;


pub use category::{Category, FALLBACK_FEATURES};
pub use colour::{ColorIndicator, FALLBACK_COLOUR};
pub use download::{DownloadLink, PENDING_DOWNLOAD_SENTINEL};
pub use product::{Product, ProductDraft, ProductId};
pub use seed::seed_drafts;

/// Validation errors returned by catalogue constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueValidationError {
    EmptyField { field: &'static str },
    UnknownCategory { label: String },
    InvalidDownloadUrl { value: String },
    InvalidProductId { value: String },
}

impl fmt::Display for CatalogueValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::UnknownCategory { label } => write!(f, "unknown product category '{label}'"),
            Self::InvalidDownloadUrl { value } => {
                write!(f, "download url '{value}' is neither '#' nor an absolute URL")
            }
            Self::InvalidProductId { value } => {
                write!(f, "product id must be a positive integer (got '{value}')")
            }
        }
    }
}

impl std::error::Error for CatalogueValidationError {}
