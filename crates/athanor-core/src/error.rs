use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AthanorError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Event decoding error: {0}")]
    Decode(String),

    #[error("Read cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AthanorError>;

// Custom Error Types:
//
// Any error implementing `std::error::Error + Send + Sync + 'static` can be
// converted to `AthanorError::Other` through the `#[from] anyhow::Error`
// variant. For better control, implement `From<YourError> for AthanorError`
// directly.
