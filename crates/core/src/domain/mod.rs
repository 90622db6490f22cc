// Domain Layer - The queue, its outcomes, and payload rules

pub mod error;
pub mod outcome;
pub mod payload;
pub mod queue;

// Re-exports
pub use error::DomainError;
pub use outcome::{Outcome, RequestKind};
pub use payload::{parse_payload, parse_payload_bytes};
pub use queue::{BoundedQueue, QueueStats, Value, MAX_CAPACITY};
