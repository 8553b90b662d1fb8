//! Port abstraction for read-only catalogue queries.
//!
//! The catalogue is seeded once and never mutated, so every query is
//! synchronous and infallible; an unknown id is simply absent.

use crate::domain::catalogue::{Product, ProductId};

/// Read access to the product catalogue.
#[cfg_attr(test, mockall::automock)]
pub trait ProductCatalogue: Send + Sync {
    /// All products in seed order.
    fn all(&self) -> Vec<Product>;

    /// Look up one product by identifier.
    fn by_id(&self, id: ProductId) -> Option<Product>;

    /// Products whose category label equals `label` exactly.
    ///
    /// Unknown labels yield an empty list rather than an error.
    fn by_category(&self, label: &str) -> Vec<Product>;

    /// Products flagged as featured, in seed order.
    fn featured(&self) -> Vec<Product>;

    /// Products flagged as popular, in seed order.
    fn popular(&self) -> Vec<Product>;

    /// Case-insensitive substring search over name, description and
    /// category label. An empty query returns the whole catalogue.
    fn search(&self, query: &str) -> Vec<Product>;
}
