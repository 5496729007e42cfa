//! Result and error types for the core library

use thiserror::Error;

/// Core library error type.
///
/// Field-level validation failures are values, not errors; they never
/// show up here. This covers the storage and plumbing failures.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::not_found("no session record");
        assert_eq!(err.to_string(), "Not found: no session record");

        let err = Error::storage("quota exceeded");
        assert!(err.to_string().contains("Storage error"));
    }
}
