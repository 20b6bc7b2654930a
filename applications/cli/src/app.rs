/// Wiring between configuration, storage, library and playback
use crate::config::CliConfig;
use crate::error::{CliError, Result};
use musiq_core::Track;
use musiq_library::Library;
use musiq_playback::{HistoryRecorder, PlaybackController};
use musiq_storage::{FileStore, LibraryStorage};
use std::sync::Arc;

/// Everything a command needs, opened once per invocation
#[derive(Debug)]
pub struct App {
    pub config: CliConfig,
    pub library: Library,
}

impl App {
    /// Open the data directory and load the library
    pub fn open(config: CliConfig) -> Result<Self> {
        let store = FileStore::open(&config.storage.data_dir)?;
        tracing::debug!("Using data directory {}", store.dir().display());

        let library = Library::initialize(LibraryStorage::new(Arc::new(store)))?;
        Ok(Self { config, library })
    }

    /// Fresh controller sharing the library's storage
    pub fn controller(&self) -> PlaybackController {
        PlaybackController::new(self.config.playback_config(), self.library.storage().store())
    }

    pub fn history(&self) -> HistoryRecorder {
        HistoryRecorder::with_capacity(
            self.library.storage().store(),
            self.config.playback.history_size,
        )
    }

    /// Catalogue tracks matching every given filter
    pub fn filter_tracks(
        &self,
        query: Option<&str>,
        genre: Option<&str>,
        artist: Option<&str>,
    ) -> Vec<&Track> {
        self.library
            .search(query.unwrap_or_default())
            .into_iter()
            .filter(|t| genre.map_or(true, |g| t.genre.eq_ignore_ascii_case(g)))
            .filter(|t| artist.map_or(true, |a| t.artist.eq_ignore_ascii_case(a)))
            .collect()
    }

    /// Resolve the track to start and the queue it plays from
    ///
    /// With a playlist the queue is the playlist; otherwise the whole catalogue.
    pub fn play_queue(&self, track_id: &str, playlist_id: Option<&str>) -> Result<(Track, Vec<Track>)> {
        let track = self
            .library
            .track(track_id)
            .cloned()
            .ok_or_else(|| CliError::track_not_found(track_id))?;

        let queue: Vec<Track> = match playlist_id {
            Some(id) => {
                if self.library.playlist(id).is_none() {
                    return Err(CliError::playlist_not_found(id));
                }
                self.library.playlist_tracks(id)?.into_iter().cloned().collect()
            }
            None => self.library.tracks().to_vec(),
        };

        Ok((track, queue))
    }
}
