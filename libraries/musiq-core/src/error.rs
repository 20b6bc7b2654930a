/// Core error types for Musiq
use thiserror::Error;

/// Result type alias using `MusiqError`
pub type Result<T> = std::result::Result<T, MusiqError>;

/// Core error type for Musiq
#[derive(Error, Debug)]
pub enum MusiqError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl MusiqError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
