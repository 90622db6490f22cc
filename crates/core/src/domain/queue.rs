// Queue Domain Model

use crate::domain::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Queue element
pub type Value = i64;

/// Upper bound on capacity (slots are allocated up front)
pub const MAX_CAPACITY: usize = 1 << 24;

/// Point-in-time view of the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStats {
    pub capacity: usize,
    pub size: usize,
}

/// Fixed-capacity FIFO of integers, safe for concurrent use.
///
/// Both `enqueue` and `dequeue` run their whole check-then-mutate body
/// under one mutex and never wait: a full queue rejects, an empty queue
/// reports empty. Storage is a ring buffer of exactly `capacity` slots.
#[derive(Debug)]
pub struct BoundedQueue {
    capacity: usize,
    ring: Mutex<Ring>,
}

#[derive(Debug)]
struct Ring {
    slots: Box<[Value]>,
    head: usize,
    len: usize,
}

impl Ring {
    fn push(&mut self, value: Value) -> bool {
        let cap = self.slots.len();
        if self.len == cap {
            return false;
        }
        let tail = (self.head + self.len) % cap;
        self.slots[tail] = value;
        self.len += 1;
        true
    }

    fn pop(&mut self) -> Option<Value> {
        if self.len == 0 {
            return None;
        }
        let value = self.slots[self.head];
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        Some(value)
    }
}

impl BoundedQueue {
    /// Create an empty queue holding at most `capacity` values
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 || capacity > MAX_CAPACITY {
            return Err(DomainError::InvalidCapacity(capacity));
        }

        Ok(Self {
            capacity,
            ring: Mutex::new(Ring {
                slots: vec![0; capacity].into_boxed_slice(),
                head: 0,
                len: 0,
            }),
        })
    }

    /// Append `value` at the tail. Returns `false` (and stores nothing) when full.
    pub fn enqueue(&self, value: Value) -> bool {
        self.lock().push(value)
    }

    /// Remove the head value. Returns `None` when empty.
    pub fn dequeue(&self) -> Option<Value> {
        self.lock().pop()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> QueueStats {
        QueueStats {
            capacity: self.capacity,
            size: self.len(),
        }
    }

    // Ring is only written after its checks pass, so a poisoned guard
    // still holds a consistent state.
    fn lock(&self) -> MutexGuard<'_, Ring> {
        self.ring.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_capacity() {
        assert_eq!(
            BoundedQueue::new(0).unwrap_err(),
            DomainError::InvalidCapacity(0)
        );
    }

    #[test]
    fn test_rejects_oversized_capacity() {
        assert!(BoundedQueue::new(MAX_CAPACITY + 1).is_err());
        assert!(BoundedQueue::new(MAX_CAPACITY).is_ok());
    }

    #[test]
    fn test_enqueue_until_full() {
        let queue = BoundedQueue::new(2).unwrap();

        assert!(queue.enqueue(1));
        assert!(queue.enqueue(2));
        assert!(!queue.enqueue(3));
        assert_eq!(queue.len(), 2);

        // Rejection is idempotent under unchanged state
        assert!(!queue.enqueue(3));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_dequeue_empty_is_none() {
        let queue = BoundedQueue::new(1).unwrap();

        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_zero_is_a_value_not_empty() {
        let queue = BoundedQueue::new(1).unwrap();

        assert!(queue.enqueue(0));
        assert_eq!(queue.dequeue(), Some(0));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_fifo_across_wraparound() {
        let queue = BoundedQueue::new(3).unwrap();

        // Walk head around the ring several times
        let mut next_in = 0;
        let mut next_out = 0;
        for _ in 0..10 {
            while queue.enqueue(next_in) {
                next_in += 1;
            }
            assert_eq!(queue.len(), 3);
            assert_eq!(queue.dequeue(), Some(next_out));
            assert_eq!(queue.dequeue(), Some(next_out + 1));
            next_out += 2;
        }

        while let Some(v) = queue.dequeue() {
            assert_eq!(v, next_out);
            next_out += 1;
        }
        assert_eq!(next_out, next_in);
    }

    #[test]
    fn test_extreme_values_survive() {
        let queue = BoundedQueue::new(2).unwrap();

        assert!(queue.enqueue(i64::MIN));
        assert!(queue.enqueue(i64::MAX));
        assert_eq!(queue.dequeue(), Some(i64::MIN));
        assert_eq!(queue.dequeue(), Some(i64::MAX));
    }

    #[test]
    fn test_stats_snapshot() {
        let queue = BoundedQueue::new(4).unwrap();
        queue.enqueue(7);

        assert_eq!(
            queue.stats(),
            QueueStats {
                capacity: 4,
                size: 1
            }
        );
    }
}
