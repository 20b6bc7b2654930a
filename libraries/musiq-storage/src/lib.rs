//! Musiq Storage
//!
//! Device-local persistence for Musiq.
//!
//! # Architecture
//!
//! - **Backends**: `MemoryStore` (process lifetime) and `FileStore` (one JSON
//!   file per key in a data directory) implement `musiq_core::KeyValueStore`
//! - **Typed access**: `LibraryStorage` reads and writes the well-known keys
//!   (user, tracks, playlists, liked ids, downloads)
//! - **Corruption is absence**: malformed documents are logged and read as
//!   empty rather than failing the caller
//!
//! # Example
//!
//! ```rust
//! use musiq_storage::{LibraryStorage, MemoryStore};
//! use std::sync::Arc;
//!
//! let storage = LibraryStorage::new(Arc::new(MemoryStore::new()));
//! assert!(storage.toggle_like("t1").unwrap());
//! assert_eq!(storage.liked_tracks(), vec!["t1".to_string()]);
//! ```

mod error;
mod file;
mod library;
mod memory;

pub use error::{Result, StorageError};
pub use file::FileStore;
pub use library::LibraryStorage;
pub use memory::MemoryStore;
