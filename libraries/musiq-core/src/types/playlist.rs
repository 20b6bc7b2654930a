/// Playlist domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User playlist
///
/// Holds track ids rather than tracks; resolution goes through the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: String,

    /// Playlist name
    pub name: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Ordered track ids
    #[serde(default)]
    pub track_ids: Vec<String>,

    /// Cover image reference
    #[serde(default)]
    pub cover_url: String,

    /// Visible to other users
    #[serde(default)]
    pub is_public: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Playlist {
    /// Create an empty playlist with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            description: String::new(),
            track_ids: Vec::new(),
            cover_url: String::new(),
            is_public: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the playlist already contains `track_id`
    pub fn contains(&self, track_id: &str) -> bool {
        self.track_ids.iter().any(|id| id == track_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_playlist_is_empty() {
        let playlist = Playlist::new("Road trip");
        assert_eq!(playlist.name, "Road trip");
        assert!(playlist.track_ids.is_empty());
        assert_eq!(playlist.created_at, playlist.updated_at);
        assert!(uuid::Uuid::parse_str(&playlist.id).is_ok());
    }

    #[test]
    fn serializes_track_ids_in_camel_case() {
        let mut playlist = Playlist::new("Focus");
        playlist.track_ids.push("t1".to_string());

        let json = serde_json::to_value(&playlist).unwrap();
        assert_eq!(json["trackIds"][0], "t1");
        assert!(json["createdAt"].is_string());
        assert!(playlist.contains("t1"));
    }
}
