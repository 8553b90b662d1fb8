//! HTTP inbound adapter exposing the read-only catalogue API.

pub mod error;
pub mod health;
pub mod products;
pub mod state;

pub use error::ApiResult;
