// Queue Service - maps requests onto the bounded queue

use crate::domain::{
    parse_payload, parse_payload_bytes, BoundedQueue, DomainError, Outcome, RequestKind,
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace};

/// Stats snapshot served to operators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
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

#[derive(Debug, Default)]
struct Counters {
    accepted: AtomicU64,
    rejected_full: AtomicU64,
    delivered: AtomicU64,
    rejected_empty: AtomicU64,
    malformed: AtomicU64,
    other: AtomicU64,
}

impl Counters {
    fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

#[derive(Debug)]
struct Inner {
    queue: BoundedQueue,
    counters: Counters,
    started_at: Instant,
}

/// Stateless request handler over the one shared queue.
///
/// Cloning yields another handle to the same queue. Every call returns
/// exactly one [`Outcome`]; nothing here waits or retries.
#[derive(Debug, Clone)]
pub struct QueueService {
    inner: Arc<Inner>,
}

impl QueueService {
    pub fn new(queue: BoundedQueue) -> Self {
        Self {
            inner: Arc::new(Inner {
                queue,
                counters: Counters::default(),
                started_at: Instant::now(),
            }),
        }
    }

    /// Build a service around a fresh queue of `capacity` slots
    pub fn with_capacity(capacity: usize) -> crate::Result<Self> {
        Ok(Self::new(BoundedQueue::new(capacity)?))
    }

    /// Route one request to its handler
    pub fn handle(&self, kind: RequestKind, body: &[u8]) -> Outcome {
        match kind {
            RequestKind::Offer => self.handle_offer_bytes(body),
            RequestKind::Poll => self.handle_poll(),
            RequestKind::Other => self.handle_other(),
        }
    }

    /// Parse `payload` and enqueue it. Parsing happens before the queue lock.
    pub fn handle_offer(&self, payload: &str) -> Outcome {
        self.offer_parsed(parse_payload(payload))
    }

    pub fn handle_offer_bytes(&self, body: &[u8]) -> Outcome {
        self.offer_parsed(parse_payload_bytes(body))
    }

    /// Offer whose body never made it to parsing (e.g. over the size limit)
    pub fn reject_offer(&self, reason: DomainError) -> Outcome {
        self.offer_parsed(Err(reason))
    }

    fn offer_parsed(&self, parsed: Result<i64, DomainError>) -> Outcome {
        let counters = &self.inner.counters;
        let value = match parsed {
            Ok(value) => value,
            Err(e) => {
                Counters::bump(&counters.malformed);
                debug!(error = %e, "Rejected malformed offer");
                return Outcome::MalformedInput(e.to_string());
            }
        };

        if self.inner.queue.enqueue(value) {
            Counters::bump(&counters.accepted);
            trace!(value, "Received");
            Outcome::Accepted
        } else {
            Counters::bump(&counters.rejected_full);
            trace!(value, "Full queue");
            Outcome::RejectedFull
        }
    }

    pub fn handle_poll(&self) -> Outcome {
        let counters = &self.inner.counters;
        match self.inner.queue.dequeue() {
            Some(value) => {
                Counters::bump(&counters.delivered);
                trace!(value, "Sent");
                Outcome::Delivered(value)
            }
            None => {
                Counters::bump(&counters.rejected_empty);
                trace!("Empty queue");
                Outcome::RejectedEmpty
            }
        }
    }

    /// Unrecognized request kinds are acknowledged without touching the queue
    pub fn handle_other(&self) -> Outcome {
        Counters::bump(&self.inner.counters.other);
        Outcome::Accepted
    }

    pub fn queue(&self) -> &BoundedQueue {
        &self.inner.queue
    }

    pub fn stats(&self) -> ServiceStats {
        let c = &self.inner.counters;
        let queue = self.inner.queue.stats();
        ServiceStats {
            capacity: queue.capacity,
            size: queue.size,
            accepted: c.accepted.load(Ordering::Relaxed),
            rejected_full: c.rejected_full.load(Ordering::Relaxed),
            delivered: c.delivered.load(Ordering::Relaxed),
            rejected_empty: c.rejected_empty.load(Ordering::Relaxed),
            malformed: c.malformed.load(Ordering::Relaxed),
            other: c.other.load(Ordering::Relaxed),
            uptime_seconds: self.inner.started_at.elapsed().as_secs(),
        }
    }
}
