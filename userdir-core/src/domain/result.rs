//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Every variant is a programming-contract violation on the caller's
/// side, not a transient fault, so nothing here is retried or
/// recovered from.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Duplicate user id: {id}")]
    DuplicateId { id: i32 },
}

impl Error {
    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a duplicate-id error
    pub fn duplicate_id(id: i32) -> Self {
        Self::DuplicateId { id }
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
