//! Concurrency properties of the bounded queue and its service
//!
//! Many threads hammer one queue; afterwards nothing may be lost,
//! duplicated, or stored beyond capacity.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use boundq_core::application::QueueService;
use boundq_core::domain::{BoundedQueue, Outcome};

/// 100 concurrent offers of distinct values against capacity 10
#[test]
fn test_concurrent_offers_respect_capacity() {
    let service = QueueService::with_capacity(10).unwrap();
    let barrier = Arc::new(Barrier::new(100));

    let handles: Vec<_> = (0..100)
        .map(|i| {
            let service = service.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                (i, service.handle_offer(&i.to_string()))
            })
        })
        .collect();

    let mut accepted = HashSet::new();
    let mut rejected = 0;
    for handle in handles {
        match handle.join().unwrap() {
            (i, Outcome::Accepted) => {
                accepted.insert(i as i64);
            }
            (_, Outcome::RejectedFull) => rejected += 1,
            (i, other) => panic!("offer {} got unexpected outcome {:?}", i, other),
        }
    }

    assert_eq!(accepted.len(), 10, "Expected exactly 10 accepted offers");
    assert_eq!(rejected, 90, "Expected exactly 90 rejected offers");

    // The accepted set is exactly what comes back out
    let mut drained = HashSet::new();
    for _ in 0..10 {
        match service.handle_poll() {
            Outcome::Delivered(v) => assert!(drained.insert(v), "duplicate value {}", v),
            other => panic!("expected a value, got {:?}", other),
        }
    }
    assert_eq!(drained, accepted);
    assert_eq!(service.handle_poll(), Outcome::RejectedEmpty);
}

/// Mixed producers and consumers: size stays in bounds and values are conserved
#[test]
fn test_mixed_load_conserves_values() {
    const CAPACITY: usize = 8;
    const PRODUCERS: i64 = 4;
    const PER_PRODUCER: i64 = 500;
    const CONSUMERS: usize = 4;

    let queue = Arc::new(BoundedQueue::new(CAPACITY).unwrap());
    let produced_done = Arc::new(AtomicUsize::new(0));

    let producers: Vec<_> = (0..PRODUCERS)
        .map(|p| {
            let queue = queue.clone();
            let produced_done = produced_done.clone();
            thread::spawn(move || {
                for n in 0..PER_PRODUCER {
                    let value = p * PER_PRODUCER + n;
                    // Caller-side retry: the queue itself never waits
                    while !queue.enqueue(value) {
                        assert!(queue.len() <= CAPACITY);
                        thread::yield_now();
                    }
                }
                produced_done.fetch_add(1, Ordering::SeqCst);
            })
        })
        .collect();

    let consumers: Vec<_> = (0..CONSUMERS)
        .map(|_| {
            let queue = queue.clone();
            let produced_done = produced_done.clone();
            thread::spawn(move || {
                let mut seen = Vec::new();
                loop {
                    match queue.dequeue() {
                        Some(v) => seen.push(v),
                        None if produced_done.load(Ordering::SeqCst) == PRODUCERS as usize => {
                            // Producers finished; one last sweep
                            while let Some(v) = queue.dequeue() {
                                seen.push(v);
                            }
                            return seen;
                        }
                        None => thread::yield_now(),
                    }
                    assert!(queue.len() <= CAPACITY);
                }
            })
        })
        .collect();

    for p in producers {
        p.join().unwrap();
    }

    let mut all: Vec<i64> = Vec::new();
    for c in consumers {
        all.extend(c.join().unwrap());
    }
    all.sort_unstable();

    let expected: Vec<i64> = (0..PRODUCERS * PER_PRODUCER).collect();
    assert_eq!(all, expected, "values lost or duplicated");
    assert!(queue.is_empty());
}

/// Each consumer sees one producer's values in the order they were offered
#[test]
fn test_single_producer_order_is_preserved() {
    let queue = Arc::new(BoundedQueue::new(4).unwrap());

    let producer = {
        let queue = queue.clone();
        thread::spawn(move || {
            for v in 0..1000 {
                while !queue.enqueue(v) {
                    thread::yield_now();
                }
            }
        })
    };

    let mut received = Vec::with_capacity(1000);
    while received.len() < 1000 {
        if let Some(v) = queue.dequeue() {
            received.push(v);
        } else {
            thread::yield_now();
        }
    }
    producer.join().unwrap();

    let expected: Vec<i64> = (0..1000).collect();
    assert_eq!(received, expected);
}

/// Stats counters agree with the queue after concurrent traffic
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_counters_balance_under_tasks() {
    let service = QueueService::with_capacity(5).unwrap();

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..50 {
        let service = service.clone();
        tasks.spawn(async move {
            if i % 2 == 0 {
                service.handle_offer(&i.to_string());
            } else {
                service.handle_poll();
            }
        });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap();
    }

    let stats = service.stats();
    assert!(stats.size <= stats.capacity);
    assert_eq!(stats.accepted + stats.rejected_full, 25);
    assert_eq!(stats.delivered + stats.rejected_empty, 25);
    assert_eq!(stats.size as u64, stats.accepted - stats.delivered);
}
