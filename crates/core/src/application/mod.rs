// Application Layer - Request handling and lifecycle

pub mod queue_service;
pub mod shutdown;

// Re-exports
pub use queue_service::{QueueService, ServiceStats};
pub use shutdown::{shutdown_channel, ShutdownSender, ShutdownToken};
