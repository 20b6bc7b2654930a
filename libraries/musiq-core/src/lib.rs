//! Musiq Core
//!
//! Platform-agnostic domain types, traits, and error handling for Musiq.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `User`, `HistoryEntry`
//! - **Persistence**: the `KeyValueStore` trait and the well-known storage keys
//! - **Error Handling**: Unified `MusiqError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use musiq_core::types::{Playlist, Track, User};
//!
//! let user = User::new("Alice", "alice@example.com");
//! let track = Track::new("t1", "Midnight Dreams", "Aurora Waves", 240.0);
//! let mut playlist = Playlist::new("Late night");
//! playlist.track_ids.push(track.id.clone());
//!
//! assert_eq!(user.name, "Alice");
//! assert_eq!(playlist.track_ids, vec!["t1".to_string()]);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod keys;
pub mod store;
pub mod types;

pub use error::{MusiqError, Result};
pub use store::{KeyValueStore, KeyValueStoreExt};
pub use types::{format_duration, HistoryEntry, Playlist, Track, User};
