//! Musiq - Library
//!
//! The user's catalogue as the client sees it: tracks (seeded with a sample
//! catalogue on first run), playlists, liked and downloaded track ids, and a
//! locally stored user. All state is persisted through
//! [`musiq_storage::LibraryStorage`].
//!
//! # Example
//!
//! ```rust
//! use musiq_library::Library;
//! use musiq_storage::{LibraryStorage, MemoryStore};
//! use std::sync::Arc;
//!
//! let storage = LibraryStorage::new(Arc::new(MemoryStore::new()));
//! let mut library = Library::initialize(storage).unwrap();
//!
//! let top = library.trending(1)[0].id.clone();
//! assert!(library.toggle_like(&top).unwrap());
//! assert_eq!(library.liked_tracks().len(), 1);
//! ```

#![forbid(unsafe_code)]

mod library;
mod sample;

pub use library::Library;
pub use sample::sample_tracks;
