//! HTTP Server
//!
//! Binds a TCP listener and serves the queue router until stopped.

use crate::handler::router;
use boundq_core::application::{shutdown_channel, QueueService, ShutdownSender};
use boundq_core::{AppError, Result};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// HTTP Server Configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

/// HTTP Server
pub struct HttpServer {
    config: HttpServerConfig,
    service: QueueService,
}

/// Handle to a running server
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown_tx: ShutdownSender,
    task: JoinHandle<std::io::Result<()>>,
}

impl ServerHandle {
    /// Address actually bound (resolves port 0)
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Ask the server to stop accepting and drain in-flight requests
    pub fn stop(&self) {
        self.shutdown_tx.shutdown();
    }

    /// Wait until the serve loop has exited
    pub async fn stopped(self) -> Result<()> {
        match self.task.await {
            Ok(result) => result.map_err(AppError::Io),
            Err(e) => Err(AppError::Internal(format!("Server task failed: {}", e))),
        }
    }
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, service: QueueService) -> Self {
        Self { config, service }
    }

    /// Bind and start serving in the background
    pub async fn start(self) -> Result<ServerHandle> {
        // Tuple form so bare IPv6 literals ("::1") resolve
        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;
        let local_addr = listener.local_addr()?;

        info!(
            addr = %local_addr,
            capacity = self.service.queue().capacity(),
            "Starting HTTP server"
        );

        let (shutdown_tx, mut shutdown_rx) = shutdown_channel();
        let app = router(self.service);

        let task = tokio::spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(async move { shutdown_rx.wait().await })
                .await;
            if let Err(e) = &result {
                error!(error = %e, "HTTP server exited with error");
            }
            result
        });

        Ok(ServerHandle {
            local_addr,
            shutdown_tx,
            task,
        })
    }
}
