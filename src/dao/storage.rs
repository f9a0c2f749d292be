use std::{io, path::PathBuf};
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by document backends regardless of where the bytes live.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem failure while touching the backing file.
    #[error("{operation} {}: {source}", path.display())]
    Io {
        /// What the backend was doing, e.g. "reading".
        operation: &'static str,
        /// File the operation targeted.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The persisted payload does not deserialize into a document.
    #[error("malformed tournament document: {0}")]
    Malformed(#[source] serde_json::Error),
    /// The in-memory document failed to serialize.
    #[error("encoding tournament document: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StorageError {
    /// Construct an I/O error tagged with the operation and file path.
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        StorageError::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}
