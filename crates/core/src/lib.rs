// boundq Core - Bounded queue & request service
// NO transport dependencies

pub mod application;
pub mod domain;
pub mod error;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
