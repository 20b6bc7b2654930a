//! Typed access to the library documents in device-local storage

use crate::error::Result;
use chrono::Utc;
use musiq_core::{keys, KeyValueStore, KeyValueStoreExt, Playlist, Track, User};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Library storage over a shared `KeyValueStore`
///
/// Mirrors the documents the web client keeps in local storage. Reads never
/// fail: a missing or corrupted document reads as empty. Writes report
/// errors so the caller can decide whether to surface them.
#[derive(Clone)]
pub struct LibraryStorage {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for LibraryStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibraryStorage").finish_non_exhaustive()
    }
}

impl LibraryStorage {
    /// Wrap a backend
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Underlying backend, for collaborators that share it (e.g. history)
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.store)
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.store.get_json(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Error reading {} from storage: {}", key, e);
                None
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        self.store.set_json(key, value).map_err(|e| {
            tracing::warn!("Error writing {} to storage: {}", key, e);
            e.into()
        })
    }

    // ===== User =====

    /// Signed-in user, if any
    pub fn user(&self) -> Option<User> {
        self.read(keys::USER)
    }

    pub fn set_user(&self, user: &User) -> Result<()> {
        self.write(keys::USER, user)
    }

    pub fn remove_user(&self) -> Result<()> {
        Ok(self.store.remove(keys::USER)?)
    }

    // ===== Tracks =====

    /// Stored catalogue (empty when nothing was saved yet)
    pub fn tracks(&self) -> Vec<Track> {
        self.read(keys::TRACKS).unwrap_or_default()
    }

    pub fn set_tracks(&self, tracks: &[Track]) -> Result<()> {
        self.write(keys::TRACKS, tracks)
    }

    pub fn add_track(&self, track: Track) -> Result<()> {
        let mut tracks = self.tracks();
        tracks.push(track);
        self.set_tracks(&tracks)
    }

    // ===== Playlists =====

    pub fn playlists(&self) -> Vec<Playlist> {
        self.read(keys::PLAYLISTS).unwrap_or_default()
    }

    pub fn set_playlists(&self, playlists: &[Playlist]) -> Result<()> {
        self.write(keys::PLAYLISTS, playlists)
    }

    pub fn add_playlist(&self, playlist: Playlist) -> Result<()> {
        let mut playlists = self.playlists();
        playlists.push(playlist);
        self.set_playlists(&playlists)
    }

    /// Apply `update` to the playlist with `id` and bump its `updated_at`
    ///
    /// Returns `false` when no such playlist exists.
    pub fn update_playlist(&self, id: &str, update: impl FnOnce(&mut Playlist)) -> Result<bool> {
        let mut playlists = self.playlists();
        let Some(playlist) = playlists.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };

        update(playlist);
        playlist.updated_at = Utc::now();
        self.set_playlists(&playlists)?;
        Ok(true)
    }

    pub fn delete_playlist(&self, id: &str) -> Result<()> {
        let mut playlists = self.playlists();
        playlists.retain(|p| p.id != id);
        self.set_playlists(&playlists)
    }

    // ===== Liked tracks =====

    pub fn liked_tracks(&self) -> Vec<String> {
        self.read(keys::LIKED_TRACKS).unwrap_or_default()
    }

    pub fn set_liked_tracks(&self, track_ids: &[String]) -> Result<()> {
        self.write(keys::LIKED_TRACKS, track_ids)
    }

    /// Flip the liked state of `track_id`; returns `true` if now liked
    pub fn toggle_like(&self, track_id: &str) -> Result<bool> {
        let mut liked = self.liked_tracks();
        let now_liked = toggle_id(&mut liked, track_id);
        self.set_liked_tracks(&liked)?;
        Ok(now_liked)
    }

    pub fn is_liked(&self, track_id: &str) -> bool {
        self.liked_tracks().iter().any(|id| id == track_id)
    }

    // ===== Downloads =====

    pub fn downloads(&self) -> Vec<String> {
        self.read(keys::DOWNLOADS).unwrap_or_default()
    }

    pub fn set_downloads(&self, track_ids: &[String]) -> Result<()> {
        self.write(keys::DOWNLOADS, track_ids)
    }

    /// Flip the downloaded state of `track_id`; returns `true` if now downloaded
    pub fn toggle_download(&self, track_id: &str) -> Result<bool> {
        let mut downloads = self.downloads();
        let now_downloaded = toggle_id(&mut downloads, track_id);
        self.set_downloads(&downloads)?;
        Ok(now_downloaded)
    }

    pub fn is_downloaded(&self, track_id: &str) -> bool {
        self.downloads().iter().any(|id| id == track_id)
    }

    // ===== Maintenance =====

    /// Remove every Musiq document, history included
    pub fn clear_all(&self) -> Result<()> {
        for key in keys::ALL {
            self.store.remove(key)?;
        }
        Ok(())
    }
}

/// Remove `id` if present, append it otherwise; returns `true` if appended
fn toggle_id(ids: &mut Vec<String>, id: &str) -> bool {
    if let Some(pos) = ids.iter().position(|existing| existing == id) {
        ids.remove(pos);
        false
    } else {
        ids.push(id.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn storage() -> LibraryStorage {
        LibraryStorage::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn toggle_id_appends_then_removes() {
        let mut ids = vec!["a".to_string()];
        assert!(toggle_id(&mut ids, "b"));
        assert_eq!(ids, vec!["a", "b"]);
        assert!(!toggle_id(&mut ids, "a"));
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn corrupted_document_reads_as_empty() {
        let storage = storage();
        storage.store().set(keys::LIKED_TRACKS, "{not json").unwrap();

        assert!(storage.liked_tracks().is_empty());
        // And the next write repairs it
        assert!(storage.toggle_like("t1").unwrap());
        assert_eq!(storage.liked_tracks(), vec!["t1"]);
    }

    #[test]
    fn update_missing_playlist_returns_false() {
        let storage = storage();
        assert!(!storage.update_playlist("nope", |p| p.name.clear()).unwrap());
    }

    #[test]
    fn update_playlist_bumps_timestamp() {
        let storage = storage();
        let playlist = Playlist::new("Before");
        let created = playlist.updated_at;
        let id = playlist.id.clone();
        storage.add_playlist(playlist).unwrap();

        assert!(storage
            .update_playlist(&id, |p| p.name = "After".to_string())
            .unwrap());

        let stored = &storage.playlists()[0];
        assert_eq!(stored.name, "After");
        assert!(stored.updated_at >= created);
    }
}
