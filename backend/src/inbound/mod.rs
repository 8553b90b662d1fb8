//! Inbound adapters that translate external requests into domain service
//! calls while keeping framework details at the edge.
//!
//! HTTP handlers live under [`http`]; gateway events from Discord are
//! handled under [`discord`].

pub mod discord;
pub mod http;
