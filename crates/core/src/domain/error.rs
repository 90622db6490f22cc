// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid capacity: {0} (must be between 1 and {})", crate::domain::queue::MAX_CAPACITY)]
    InvalidCapacity(usize),

    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
