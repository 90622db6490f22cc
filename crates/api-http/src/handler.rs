//! HTTP Request Handlers
//!
//! Maps each inbound request onto one `QueueService` call.

use crate::error::QueueReply;
use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::Method;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use boundq_core::application::{QueueService, ServiceStats};
use boundq_core::domain::{DomainError, Outcome, RequestKind};
use std::time::Instant;
use tracing::debug;

/// Build the router. Every path except `GET /stats` dispatches on method.
pub fn router(service: QueueService) -> Router {
    Router::new()
        .route("/stats", get(stats).fallback(dispatch))
        .fallback(dispatch)
        .with_state(service)
}

/// POST = offer, GET = poll, anything else = no-op
pub fn request_kind(method: &Method) -> RequestKind {
    if method == Method::POST {
        RequestKind::Offer
    } else if method == Method::GET {
        RequestKind::Poll
    } else {
        RequestKind::Other
    }
}

/// Largest offer body read; a signed i64 plus CRLF needs 22 bytes
pub const MAX_OFFER_BYTES: usize = 64;

/// Log wording per outcome; full/empty are backpressure, not faults
pub fn log_message(outcome: &Outcome) -> &'static str {
    if outcome.is_retryable() {
        "Queue request deferred, caller may retry"
    } else {
        "Handled queue request"
    }
}

pub async fn dispatch(
    State(service): State<QueueService>,
    method: Method,
    body: Body,
) -> impl IntoResponse {
    let started = Instant::now();

    // Only offers read the body; the size limit is ours so an oversized
    // payload still ends up as malformed input.
    let outcome = match request_kind(&method) {
        RequestKind::Offer => match to_bytes(body, MAX_OFFER_BYTES).await {
            Ok(bytes) => service.handle_offer_bytes(&bytes),
            Err(e) => service.reject_offer(DomainError::MalformedInput(format!(
                "payload over {} bytes or unreadable: {}",
                MAX_OFFER_BYTES, e
            ))),
        },
        kind => service.handle(kind, &[]),
    };

    debug!(
        method = %method,
        outcome = %outcome,
        elapsed_us = started.elapsed().as_micros() as u64,
        "{}",
        log_message(&outcome)
    );

    QueueReply(outcome)
}

pub async fn stats(State(service): State<QueueService>) -> Json<ServiceStats> {
    Json(service.stats())
}
