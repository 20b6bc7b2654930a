//! Well-known keys in device-local storage
//!
//! Every persisted value lives under one of these keys as a JSON document.

/// Signed-in user record
pub const USER: &str = "musiq_user";

/// Track catalogue
pub const TRACKS: &str = "musiq_tracks";

/// User playlists
pub const PLAYLISTS: &str = "musiq_playlists";

/// Liked track ids
pub const LIKED_TRACKS: &str = "musiq_liked_tracks";

/// Downloaded track ids
pub const DOWNLOADS: &str = "musiq_downloads";

/// Listening history, newest first
pub const HISTORY: &str = "musiq_history";

/// All keys owned by Musiq, used when wiping local data
pub const ALL: [&str; 6] = [USER, TRACKS, PLAYLISTS, LIKED_TRACKS, DOWNLOADS, HISTORY];
