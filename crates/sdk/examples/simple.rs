//! Simple SDK Example
//!
//! Offers a few values, then drains the queue.
//!
//! # Usage
//!
//! 1. Start the server:
//!    ```bash
//!    cargo run --package boundq-daemon -- --bind-address 127.0.0.1 --bind-port 9527 --capacity 2
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package boundq-sdk --example simple
//!    ```

use boundq_sdk::{Offered, QueueClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("boundq SDK - Simple Example");
    println!("===========================\n");

    let client = QueueClient::new("http://127.0.0.1:9527")?;

    println!("1. Offering values...");
    for value in [1, 2, 3] {
        match client.offer(value).await? {
            Offered::Accepted => println!("   ✓ {} accepted", value),
            Offered::Full => println!("   ✗ {} rejected: queue full", value),
        }
    }

    println!("\n2. Draining...");
    while let Some(value) = client.poll().await? {
        println!("   ✓ received {}", value);
    }
    println!("   queue empty");

    let stats = client.stats().await?;
    println!(
        "\n3. Stats: accepted={} rejected_full={} delivered={}",
        stats.accepted, stats.rejected_full, stats.delivered
    );

    Ok(())
}
