//! Integration tests for the file-backed library storage
//!
//! Tests persistence across reopen, corruption handling and wiping local data.

use musiq_core::{keys, KeyValueStore, Playlist, Track, User};
use musiq_storage::{FileStore, LibraryStorage};
use std::sync::Arc;

fn open(dir: &std::path::Path) -> LibraryStorage {
    LibraryStorage::new(Arc::new(FileStore::open(dir).expect("Failed to open store")))
}

#[test]
fn test_documents_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let storage = open(dir.path());
        storage
            .set_tracks(&[Track::new("t1", "Midnight Dreams", "Aurora Waves", 240.0)])
            .unwrap();
        storage.toggle_like("t1").unwrap();
        storage.toggle_download("t1").unwrap();
        storage.add_playlist(Playlist::new("Favourites")).unwrap();
        storage.set_user(&User::new("Alice", "alice@example.com")).unwrap();
    }

    let storage = open(dir.path());
    assert_eq!(storage.tracks().len(), 1);
    assert!(storage.is_liked("t1"));
    assert!(storage.is_downloaded("t1"));
    assert_eq!(storage.playlists()[0].name, "Favourites");
    assert_eq!(storage.user().unwrap().name, "Alice");
}

#[test]
fn test_corrupted_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("musiq_tracks.json"), "[{\"id\": ").unwrap();

    let storage = open(dir.path());
    assert!(storage.tracks().is_empty());
}

#[test]
fn test_toggle_download_twice_removes() {
    let dir = tempfile::tempdir().unwrap();
    let storage = open(dir.path());

    assert!(storage.toggle_download("t2").unwrap());
    assert!(!storage.toggle_download("t2").unwrap());
    assert!(storage.downloads().is_empty());
}

#[test]
fn test_delete_playlist_keeps_others() {
    let dir = tempfile::tempdir().unwrap();
    let storage = open(dir.path());

    let keep = Playlist::new("Keep");
    let drop = Playlist::new("Drop");
    let drop_id = drop.id.clone();
    storage.add_playlist(keep).unwrap();
    storage.add_playlist(drop).unwrap();

    storage.delete_playlist(&drop_id).unwrap();

    let names: Vec<String> = storage.playlists().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Keep"]);
}

#[test]
fn test_clear_all_removes_every_document() {
    let dir = tempfile::tempdir().unwrap();
    let storage = open(dir.path());

    storage.toggle_like("t1").unwrap();
    storage.store().set(keys::HISTORY, "[]").unwrap();
    storage.set_user(&User::new("Bob", "bob@example.com")).unwrap();

    storage.clear_all().unwrap();

    assert!(storage.user().is_none());
    assert!(storage.liked_tracks().is_empty());
    assert!(storage.store().get(keys::HISTORY).unwrap().is_none());
}
