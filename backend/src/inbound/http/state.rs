//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::ProductCatalogue;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub catalogue: Arc<dyn ProductCatalogue>,
}

impl HttpState {
    pub fn new(catalogue: Arc<dyn ProductCatalogue>) -> Self {
        Self { catalogue }
    }
}
