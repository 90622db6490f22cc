//! SDK Request/Response Types
//!
//! Mirrors the stats document served by the api-http crate.

use serde::Deserialize;

/// Result of an offer that reached the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offered {
    Accepted,
    /// Queue at capacity; nothing was stored
    Full,
}

/// Response from `GET /stats`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceStats {
    pub capacity: usize,
    pub size: usize,
    pub accepted: u64,
    pub rejected_full: u64,
    pub delivered: u64,
    pub rejected_empty: u64,
    pub malformed: u64,
    pub other: u64,
    pub uptime_seconds: u64,
}
