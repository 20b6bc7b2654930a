//! Library persistence across sessions on a file-backed store

use musiq_core::{HistoryEntry, Playlist, Track};
use musiq_library::Library;
use musiq_storage::{FileStore, LibraryStorage};
use std::sync::Arc;
use tempfile::TempDir;

fn open(dir: &TempDir) -> Library {
    let store = FileStore::open(dir.path()).unwrap();
    Library::initialize(LibraryStorage::new(Arc::new(store))).unwrap()
}

// ============================================================================
// Session persistence
// ============================================================================

#[test]
fn test_seed_happens_once() {
    let dir = TempDir::new().unwrap();

    let mut first = open(&dir);
    first
        .add_track(Track::new("mine", "Home Demo", "Me", 95.0).with_genre("Lo-fi"))
        .unwrap();

    let second = open(&dir);
    assert_eq!(second.tracks().len(), 11);
    assert_eq!(second.genres().last(), Some(&"Lo-fi"));
}

#[test]
fn test_likes_and_downloads_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let mut library = open(&dir);
    let liked = library.tracks()[0].id.clone();
    let downloaded = library.tracks()[1].id.clone();

    library.toggle_like(&liked).unwrap();
    library.toggle_download(&downloaded).unwrap();

    let reopened = open(&dir);
    assert!(reopened.is_liked(&liked));
    assert!(reopened.track(&liked).unwrap().is_liked);
    assert!(reopened.is_downloaded(&downloaded));
    assert_eq!(reopened.downloaded_tracks().len(), 1);
}

#[test]
fn test_playlists_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let mut library = open(&dir);
    let track_ids: Vec<String> = library.tracks().iter().take(3).map(|t| t.id.clone()).collect();

    let id = library.create_playlist(Playlist::new("Road trip")).unwrap();
    for track_id in track_ids.iter().rev() {
        library.add_track_to_playlist(&id, track_id).unwrap();
    }

    let reopened = open(&dir);
    let titles: Vec<&str> = reopened
        .playlist_tracks(&id)
        .unwrap()
        .into_iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Ocean Waves", "Electric Pulse", "Midnight Dreams"]);
}

#[test]
fn test_user_survives_reopen_until_logout() {
    let dir = TempDir::new().unwrap();
    let mut library = open(&dir);
    let id = library.login("Dana", "dana@example.com").unwrap().id.clone();

    let mut reopened = open(&dir);
    assert_eq!(reopened.current_user().map(|u| u.id.as_str()), Some(id.as_str()));

    reopened.logout().unwrap();
    assert!(open(&dir).current_user().is_none());
}

// ============================================================================
// History resolution
// ============================================================================

#[test]
fn test_recently_played_window() {
    let dir = TempDir::new().unwrap();
    let library = open(&dir);
    let ids: Vec<&str> = library.tracks().iter().map(|t| t.id.as_str()).collect();

    // Newest first, as the recorder stores it
    let history: Vec<HistoryEntry> = [ids[3], ids[3], ids[5], ids[0], ids[3], ids[1], ids[2]]
        .iter()
        .map(|id| HistoryEntry::now(*id))
        .collect();

    let recent: Vec<&str> = library
        .recently_played(&history, 6)
        .into_iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(recent, vec!["Urban Rhythm", "Summer Vibes", "Midnight Dreams", "Electric Pulse"]);
    assert_eq!(library.history_tracks(&history).len(), 7);
}
