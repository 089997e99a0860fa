//! Error types for the key/value store

use thiserror::Error;

/// Errors that can occur when working with the local key/value store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Error reading or writing the backing file
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing or serializing the stored document
    #[error("Storage format error: {0}")]
    Format(#[from] serde_json::Error),
}
