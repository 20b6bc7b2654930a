//! In-memory view of the user's library, kept in step with storage

use chrono::Utc;
use musiq_core::{HistoryEntry, MusiqError, Playlist, Result, Track, User};
use musiq_storage::LibraryStorage;
use std::collections::HashSet;

use crate::sample::sample_tracks;

/// Tracks, playlists, likes, downloads and the local user
///
/// Every mutation updates the in-memory copy first and then persists it, so
/// the two never disagree after a successful call.
#[derive(Debug)]
pub struct Library {
    storage: LibraryStorage,
    current_user: Option<User>,
    tracks: Vec<Track>,
    playlists: Vec<Playlist>,
    liked_track_ids: Vec<String>,
    downloaded_track_ids: Vec<String>,
}

impl Library {
    /// Load everything from `storage`
    ///
    /// A stored user with a legacy (non-UUID) id gets a fresh id, which is
    /// persisted. An empty catalogue is seeded with the sample tracks.
    pub fn initialize(storage: LibraryStorage) -> Result<Self> {
        let mut current_user = storage.user();
        if let Some(user) = current_user.as_mut() {
            if !user.has_uuid_id() {
                tracing::warn!("Replacing legacy user id {:?} with a UUID", user.id);
                user.id = uuid::Uuid::new_v4().to_string();
                storage.set_user(user)?;
            }
        }

        let mut tracks = storage.tracks();
        if tracks.is_empty() {
            tracks = sample_tracks();
            tracing::info!("Seeding library with {} sample tracks", tracks.len());
            storage.set_tracks(&tracks)?;
        }

        let library = Self {
            current_user,
            tracks,
            playlists: storage.playlists(),
            liked_track_ids: storage.liked_tracks(),
            downloaded_track_ids: storage.downloads(),
            storage,
        };

        tracing::debug!(
            "Library loaded: {} tracks, {} playlists",
            library.tracks.len(),
            library.playlists.len()
        );
        Ok(library)
    }

    pub fn storage(&self) -> &LibraryStorage {
        &self.storage
    }

    // ===== User =====

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Sign in locally; replaces any current user
    pub fn login(&mut self, name: &str, email: &str) -> Result<&User> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(MusiqError::invalid_input("name and email are required"));
        }

        let user = User::new(name, email);
        self.storage.set_user(&user)?;
        Ok(&*self.current_user.insert(user))
    }

    pub fn logout(&mut self) -> Result<()> {
        self.current_user = None;
        self.storage.remove_user()?;
        Ok(())
    }

    // ===== Tracks =====

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Append a track to the catalogue
    pub fn add_track(&mut self, track: Track) -> Result<()> {
        if self.track(&track.id).is_some() {
            return Err(MusiqError::invalid_input(format!(
                "track {} already exists",
                track.id
            )));
        }
        self.storage.add_track(track.clone())?;
        self.tracks.push(track);
        Ok(())
    }

    /// Flip the liked state of a track; returns `true` if now liked
    ///
    /// The track's `is_liked` flag follows, and the catalogue is re-persisted.
    pub fn toggle_like(&mut self, track_id: &str) -> Result<bool> {
        let now_liked = self.storage.toggle_like(track_id)?;
        self.liked_track_ids = self.storage.liked_tracks();

        for track in self.tracks.iter_mut().filter(|t| t.id == track_id) {
            track.is_liked = now_liked;
        }
        self.storage.set_tracks(&self.tracks)?;
        Ok(now_liked)
    }

    /// Flip the downloaded state of a track; returns `true` if now downloaded
    pub fn toggle_download(&mut self, track_id: &str) -> Result<bool> {
        let now_downloaded = self.storage.toggle_download(track_id)?;
        self.downloaded_track_ids = self.storage.downloads();
        Ok(now_downloaded)
    }

    pub fn is_liked(&self, track_id: &str) -> bool {
        self.liked_track_ids.iter().any(|id| id == track_id)
    }

    pub fn is_downloaded(&self, track_id: &str) -> bool {
        self.downloaded_track_ids.iter().any(|id| id == track_id)
    }

    // ===== Playlists =====

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn playlist(&self, id: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    /// Store a new playlist and return its id
    pub fn create_playlist(&mut self, playlist: Playlist) -> Result<String> {
        let id = playlist.id.clone();
        self.storage.add_playlist(playlist.clone())?;
        self.playlists.push(playlist);
        Ok(id)
    }

    /// Apply `update` to a playlist and bump its `updated_at`
    pub fn update_playlist(&mut self, id: &str, update: impl FnOnce(&mut Playlist)) -> Result<()> {
        let playlist = self
            .playlists
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| MusiqError::PlaylistNotFound(id.to_string()))?;

        update(playlist);
        playlist.updated_at = Utc::now();
        self.storage.set_playlists(&self.playlists)?;
        Ok(())
    }

    /// Remove a playlist; returns `false` if it did not exist
    pub fn delete_playlist(&mut self, id: &str) -> Result<bool> {
        let before = self.playlists.len();
        self.playlists.retain(|p| p.id != id);
        if self.playlists.len() == before {
            return Ok(false);
        }
        self.storage.delete_playlist(id)?;
        Ok(true)
    }

    /// Append a track to a playlist; returns `false` if it was already there
    pub fn add_track_to_playlist(&mut self, playlist_id: &str, track_id: &str) -> Result<bool> {
        let playlist = self
            .playlist(playlist_id)
            .ok_or_else(|| MusiqError::PlaylistNotFound(playlist_id.to_string()))?;
        if playlist.contains(track_id) {
            return Ok(false);
        }

        self.update_playlist(playlist_id, |p| p.track_ids.push(track_id.to_string()))?;
        Ok(true)
    }

    pub fn remove_track_from_playlist(&mut self, playlist_id: &str, track_id: &str) -> Result<()> {
        self.update_playlist(playlist_id, |p| p.track_ids.retain(|id| id != track_id))
    }

    // ===== Queries =====

    /// Case-insensitive match over title, artist, album and genre
    ///
    /// An empty (or whitespace) query returns the whole catalogue.
    pub fn search(&self, query: &str) -> Vec<&Track> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.tracks.iter().collect();
        }
        self.tracks.iter().filter(|t| t.matches(&needle)).collect()
    }

    /// Top `limit` tracks by play count, most played first
    pub fn trending(&self, limit: usize) -> Vec<&Track> {
        let mut tracks: Vec<&Track> = self.tracks.iter().collect();
        tracks.sort_by(|a, b| b.play_count.cmp(&a.play_count));
        tracks.truncate(limit);
        tracks
    }

    /// Distinct genres in catalogue order
    pub fn genres(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.tracks
            .iter()
            .map(|t| t.genre.as_str())
            .filter(|genre| !genre.is_empty() && seen.insert(*genre))
            .collect()
    }

    pub fn tracks_by_artist(&self, artist: &str) -> Vec<&Track> {
        self.tracks.iter().filter(|t| t.artist == artist).collect()
    }

    pub fn tracks_by_genre(&self, genre: &str) -> Vec<&Track> {
        self.tracks
            .iter()
            .filter(|t| t.genre.eq_ignore_ascii_case(genre))
            .collect()
    }

    /// Tracks of a playlist in playlist order; unknown ids are skipped
    pub fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<&Track>> {
        let playlist = self
            .playlist(playlist_id)
            .ok_or_else(|| MusiqError::PlaylistNotFound(playlist_id.to_string()))?;
        Ok(self.resolve(playlist.track_ids.iter().map(String::as_str)))
    }

    /// Liked tracks in catalogue order
    pub fn liked_tracks(&self) -> Vec<&Track> {
        self.tracks.iter().filter(|t| self.is_liked(&t.id)).collect()
    }

    /// Downloaded tracks in catalogue order
    pub fn downloaded_tracks(&self) -> Vec<&Track> {
        self.tracks
            .iter()
            .filter(|t| self.is_downloaded(&t.id))
            .collect()
    }

    /// Distinct tracks among the first `window` history entries, newest first
    pub fn recently_played(&self, history: &[HistoryEntry], window: usize) -> Vec<&Track> {
        let mut seen = HashSet::new();
        let ids = history
            .iter()
            .take(window)
            .map(|entry| entry.track_id.as_str())
            .filter(|id| seen.insert(*id));
        self.resolve(ids)
    }

    /// Every history entry paired with its track; unknown ids are skipped
    pub fn history_tracks<'a>(
        &'a self,
        history: &'a [HistoryEntry],
    ) -> Vec<(&'a HistoryEntry, &'a Track)> {
        history
            .iter()
            .filter_map(|entry| self.track(&entry.track_id).map(|track| (entry, track)))
            .collect()
    }

    fn resolve<'a>(&self, ids: impl Iterator<Item = &'a str>) -> Vec<&Track> {
        ids.filter_map(|id| self.track(id)).collect()
    }
}
