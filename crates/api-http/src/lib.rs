//! HTTP API Layer
//!
//! Carries queue requests over plain HTTP: `POST` offers, `GET` polls,
//! any other method is acknowledged as a no-op.

pub mod error;
pub mod handler;
pub mod server;

pub use server::{HttpServer, HttpServerConfig, ServerHandle};
