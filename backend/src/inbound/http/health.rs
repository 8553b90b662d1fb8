//! Health endpoints: liveness and readiness probes for orchestration.
//!
//! Readiness only tracks the HTTP side. The chat connection is reported as
//! a response header so a missing Discord token never fails the probe.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

/// Response header reporting whether the chat gateway is connected.
pub const CHAT_STATUS_HEADER: &str = "x-chat-connected";

/// Shared health state for the probes.
#[derive(Default)]
pub struct HealthState {
    ready: AtomicBool,
    chat_connected: AtomicBool,
}

impl HealthState {
    /// Create a new health state starting as not ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Record that the chat gateway finished its handshake.
    pub fn mark_chat_connected(&self) {
        self.chat_connected.store(true, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn is_chat_connected(&self) -> bool {
        self.chat_connected.load(Ordering::Acquire)
    }

    fn probe_response(&self, probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .insert_header((CHAT_STATUS_HEADER, self.is_chat_connected().to_string()))
            .finish()
    }
}

/// Readiness probe. Return 200 once the HTTP server is bound; 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    state.probe_response(state.is_ready())
}

/// Liveness probe. Answers 200 whenever the server can respond at all.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    security([]),
    responses((status = 200, description = "Server is alive"))
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    state.probe_response(true)
}
