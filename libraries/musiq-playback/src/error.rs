//! Error types for playback management
//!
//! Transition operators never fail; these errors belong to the collaborators
//! around them (history persistence, the playback surface, parsing).

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The surface refused to start playback (e.g. autoplay policy)
    #[error("Playback rejected: {0}")]
    PlayRejected(String),

    /// Play requested before any source was loaded
    #[error("No source loaded")]
    NoSourceLoaded,

    /// Unknown repeat mode name
    #[error("Invalid repeat mode: {0}")]
    InvalidRepeatMode(String),

    /// History persistence failed
    #[error("History error: {0}")]
    History(#[from] musiq_core::MusiqError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
