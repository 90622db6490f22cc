// Request Outcome Model

use crate::domain::queue::Value;
use std::fmt;

/// Kind of an inbound request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Offer,
    Poll,
    Other,
}

/// Result of handling exactly one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Offer stored, or a no-op request acknowledged
    Accepted,
    /// Poll removed this value from the head
    Delivered(Value),
    /// Queue at capacity; retry later
    RejectedFull,
    /// Queue has no element; retry later
    RejectedEmpty,
    /// Offer payload was not a decimal integer
    MalformedInput(String),
}

impl Outcome {
    /// Full/empty rejections are backpressure, not faults
    pub fn is_retryable(&self) -> bool {
        matches!(self, Outcome::RejectedFull | Outcome::RejectedEmpty)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Accepted => write!(f, "ACCEPTED"),
            Outcome::Delivered(v) => write!(f, "DELIVERED({})", v),
            Outcome::RejectedFull => write!(f, "REJECTED_FULL"),
            Outcome::RejectedEmpty => write!(f, "REJECTED_EMPTY"),
            Outcome::MalformedInput(_) => write!(f, "MALFORMED_INPUT"),
        }
    }
}
