//! boundq SDK - Rust Client Library
//!
//! Thin typed client for the boundq HTTP queue. It never retries: a full
//! or empty queue is reported back so the caller decides when to try again.
//!
//! # Example
//!
//! ```no_run
//! use boundq_sdk::{Offered, QueueClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = QueueClient::new("http://127.0.0.1:9527")?;
//!
//!     if client.offer(42).await? == Offered::Full {
//!         println!("queue full, try later");
//!     }
//!
//!     if let Some(value) = client.poll().await? {
//!         println!("got {}", value);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::QueueClient;
pub use error::{Result, SdkError};
pub use types::{Offered, ServiceStats};
