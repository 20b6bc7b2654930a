/// Track domain type
use serde::{Deserialize, Serialize};

/// Audio track
///
/// Field names follow the camelCase layout the web client persists, so a
/// catalogue written by either side round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Opaque track identifier
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Genre
    pub genre: String,

    /// Duration in seconds
    pub duration: f64,

    /// Audio source reference handed to the playback surface
    pub audio_url: String,

    /// Cover image reference
    pub cover_url: String,

    /// Play count reported by the catalogue
    #[serde(default)]
    pub play_count: u64,

    /// Liked flag as fetched; the liked-id list is authoritative
    #[serde(default)]
    pub is_liked: bool,

    /// Free-form description (uploads only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Uploader id (uploads only)
    #[serde(
        rename = "posted_by",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub posted_by: Option<String>,

    /// Upload timestamp as reported by the backend
    #[serde(
        rename = "created_at",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}

impl Track {
    /// Create a track with the metadata playback needs
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        duration: f64,
    ) -> Self {
        let id = id.into();
        Self {
            audio_url: format!("/audio/{}.mp3", id),
            cover_url: format!("/covers/{}.jpg", id),
            id,
            title: title.into(),
            artist: artist.into(),
            album: String::new(),
            genre: String::new(),
            duration: duration.max(0.0),
            play_count: 0,
            is_liked: false,
            description: None,
            posted_by: None,
            created_at: None,
        }
    }

    /// Set the album
    #[must_use]
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    /// Set the genre
    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Set the play count
    #[must_use]
    pub fn with_play_count(mut self, play_count: u64) -> Self {
        self.play_count = play_count;
        self
    }

    /// Case-insensitive match against title, artist, album and genre
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.title, &self.artist, &self.album, &self.genre]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Format seconds as `m:ss`
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}
