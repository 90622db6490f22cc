//! boundq - Server Entry Point

mod config;
mod telemetry;

use anyhow::{Context, Result};
use boundq_api_http::{HttpServer, HttpServerConfig};
use boundq_core::application::QueueService;
use clap::Parser;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::telemetry::{init_logging, LogFormat};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let config = ServerConfig::parse();

    // 2. Initialize logging
    init_logging(LogFormat::from_env())?;

    info!("boundq v{} starting...", VERSION);

    // 3. Create the one queue for this process
    let capacity = usize::try_from(config.capacity).context("Capacity does not fit in memory")?;
    let service = QueueService::with_capacity(capacity).context("Invalid queue capacity")?;

    // 4. Start HTTP server
    let server_config = HttpServerConfig {
        host: config.bind_address,
        port: config.bind_port,
    };
    let handle = HttpServer::new(server_config, service)
        .start()
        .await
        .context("HTTP server start failed")?;

    info!(addr = %handle.local_addr(), capacity, "System ready. Press Ctrl+C to shutdown");

    // 5. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 6. Graceful shutdown; queue contents are discarded
    handle.stop();
    match tokio::time::timeout(SHUTDOWN_TIMEOUT, handle.stopped()).await {
        Ok(result) => result.context("HTTP server stop failed")?,
        Err(_) => warn!("Timed out waiting for in-flight requests"),
    }

    info!("Shutdown complete.");

    Ok(())
}
