//! Outcome → HTTP status mapping
//!
//! Full and empty rejections share 503 so a caller can tell "try again
//! later" apart from 400 "your input was invalid".

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use boundq_core::domain::Outcome;

/// HTTP status per outcome
pub mod code {
    use axum::http::StatusCode;

    pub const ACCEPTED: StatusCode = StatusCode::OK;
    pub const DELIVERED: StatusCode = StatusCode::OK;
    pub const REJECTED_FULL: StatusCode = StatusCode::SERVICE_UNAVAILABLE;
    pub const REJECTED_EMPTY: StatusCode = StatusCode::SERVICE_UNAVAILABLE;
    pub const MALFORMED_INPUT: StatusCode = StatusCode::BAD_REQUEST;
}

pub fn to_status(outcome: &Outcome) -> StatusCode {
    match outcome {
        Outcome::Accepted => code::ACCEPTED,
        Outcome::Delivered(_) => code::DELIVERED,
        Outcome::RejectedFull => code::REJECTED_FULL,
        Outcome::RejectedEmpty => code::REJECTED_EMPTY,
        Outcome::MalformedInput(_) => code::MALFORMED_INPUT,
    }
}

/// Response wrapper for a queue [`Outcome`]
#[derive(Debug)]
pub struct QueueReply(pub Outcome);

impl IntoResponse for QueueReply {
    fn into_response(self) -> Response {
        let status = to_status(&self.0);
        match self.0 {
            // Bare decimal, no trailing newline
            Outcome::Delivered(value) => (
                status,
                [(header::CONTENT_TYPE, "text/plain")],
                value.to_string(),
            )
                .into_response(),
            Outcome::MalformedInput(reason) => (
                status,
                [(header::CONTENT_TYPE, "text/plain")],
                reason,
            )
                .into_response(),
            Outcome::Accepted | Outcome::RejectedFull | Outcome::RejectedEmpty => {
                status.into_response()
            }
        }
    }
}
