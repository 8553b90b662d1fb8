//! Domain primitives, ports and services.
//!
//! Purpose: hold the storefront's catalogue model, the chat command surface
//! and the services that drive standing messages. Nothing here depends on
//! actix-web or serenity; adapters live under `inbound` and `outbound`.
//!
//! Public surface:
//! - Error (alias to `error::Error`) - transport-agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`) - stable error identifier.
//! - TraceId - task-local correlation identifier.
//! - ChatDispatcher - chat front end over the catalogue.
//! - StatusBoardRefresher - periodic status board re-render.

pub mod catalogue;
pub mod chat;
pub mod chat_dispatcher;
pub mod commands;
pub mod error;
pub mod ports;
pub mod rendering;
pub mod standing;
pub mod status_refresher;
pub mod trace_id;
pub mod user;

pub use self::chat_dispatcher::{
    ChatDestinations, ChatDispatcher, ChatDispatcherPorts, STATUS_CARD_PACING,
};
pub use self::error::{Error, ErrorCode};
pub use self::status_refresher::{DEFAULT_REFRESH_PERIOD, StatusBoardRefresher};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserValidationError};
