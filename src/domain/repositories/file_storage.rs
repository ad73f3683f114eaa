//! Storage port for binary files.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid storage path: {0}")]
    InvalidPath(String),
}

/// Writes files under storage-relative paths such as `images/truck_1612334000.jpg`.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::LocalFileStorage`] - Local filesystem
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Writes `contents` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidPath`] if the path escapes the storage root.
    /// Returns [`StorageError::Io`] if the write fails.
    async fn put(&self, path: &str, contents: Vec<u8>) -> Result<(), StorageError>;
}
