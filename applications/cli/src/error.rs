/// CLI error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Library error: {0}")]
    Library(#[from] musiq_core::MusiqError),

    #[error("Playback error: {0}")]
    Playback(#[from] musiq_playback::PlaybackError),
}

impl CliError {
    pub fn track_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "Track",
            id: id.into(),
        }
    }

    pub fn playlist_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "Playlist",
            id: id.into(),
        }
    }
}

impl From<musiq_storage::StorageError> for CliError {
    fn from(err: musiq_storage::StorageError) -> Self {
        // StorageError -> MusiqError -> CliError
        CliError::Library(err.into())
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
