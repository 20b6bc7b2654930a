/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Key cannot be mapped to a storage location
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Backend lock was poisoned by a panicking writer
    #[error("Storage lock poisoned")]
    Poisoned,

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error raised by a `KeyValueStore` backend
    #[error(transparent)]
    Core(#[from] musiq_core::MusiqError),
}

impl From<StorageError> for musiq_core::MusiqError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Core(inner) => inner,
            StorageError::Io(io) => musiq_core::MusiqError::Io(io),
            other => musiq_core::MusiqError::storage(other.to_string()),
        }
    }
}
