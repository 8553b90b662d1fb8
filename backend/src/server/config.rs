//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use storefront::domain::ports::ProductCatalogue;

/// Everything the HTTP server needs besides health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) catalogue: Arc<dyn ProductCatalogue>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, catalogue: Arc<dyn ProductCatalogue>) -> Self {
        Self {
            bind_addr,
            catalogue,
        }
    }
}
