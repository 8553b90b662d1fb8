//! Product entity and identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::validate_non_empty_field;
use super::{CatalogueValidationError, Category, ColorIndicator, DownloadLink};

/// Positive product identifier assigned sequentially at seed time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(try_from = "u32", into = "u32")]
#[schema(value_type = u32, example = 1)]
pub struct ProductId(u32);

impl ProductId {
    /// Validate and construct a [`ProductId`].
    pub fn new(value: u32) -> Result<Self, CatalogueValidationError> {
        if value == 0 {
            return Err(CatalogueValidationError::InvalidProductId {
                value: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = CatalogueValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw
            .parse::<u32>()
            .map_err(|_| CatalogueValidationError::InvalidProductId {
                value: raw.to_owned(),
            })?;
        Self::new(value)
    }
}

impl TryFrom<u32> for ProductId {
    type Error = CatalogueValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductId> for u32 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

/// Unvalidated product fields, as written in the seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub color_indicator: String,
    pub download_url: String,
    pub featured: bool,
    pub popular: bool,
}

/// Catalogue product.
///
/// ## Invariants
/// - `name` and `description` are non-empty once trimmed.
/// - `category` is one of the closed [`Category`] set.
/// - Instances are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    #[schema(example = "Rust Arcane External")]
    name: String,
    #[schema(example = "Get the rust arcane external loader.")]
    description: String,
    #[schema(value_type = String, example = "External Tool")]
    category: Category,
    #[schema(value_type = String, example = "orange")]
    color_indicator: ColorIndicator,
    #[schema(value_type = String, example = "#")]
    download_url: DownloadLink,
    featured: bool,
    popular: bool,
}

impl Product {
    /// Validate a draft and assign it an identifier.
    pub fn new(id: ProductId, draft: ProductDraft) -> Result<Self, CatalogueValidationError> {
        let name = validate_non_empty_field(draft.name, "product.name")?;
        let description = validate_non_empty_field(draft.description, "product.description")?;
        let category = draft.category.parse::<Category>()?;
        let download_url = DownloadLink::parse(&draft.download_url)?;

        Ok(Self {
            id,
            name,
            description,
            category,
            color_indicator: ColorIndicator::from_name(&draft.color_indicator),
            download_url,
            featured: draft.featured,
            popular: draft.popular,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
    pub fn category(&self) -> Category {
        self.category
    }
    pub fn color_indicator(&self) -> &ColorIndicator {
        &self.color_indicator
    }
    pub fn download(&self) -> &DownloadLink {
        &self.download_url
    }
    pub fn is_featured(&self) -> bool {
        self.featured
    }
    pub fn is_popular(&self) -> bool {
        self.popular
    }

    /// Whether `query`, already lowercased, occurs in the name, description
    /// or category label.
    pub fn matches_lowercase(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
            || self.category.label().to_lowercase().contains(query)
    }
}
