/// Listening history entry
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One play of a track
///
/// Persisted as `{"trackId": ..., "playedAt": ...}` with an ISO-8601 timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Played track id
    pub track_id: String,

    /// When playback started
    pub played_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Entry stamped with the current time
    pub fn now(track_id: impl Into<String>) -> Self {
        Self {
            track_id: track_id.into(),
            played_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_layout() {
        let entry: HistoryEntry = serde_json::from_str(
            r#"{"trackId":"t9","playedAt":"2024-03-02T18:30:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(entry.track_id, "t9");

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["trackId"], "t9");
        assert!(json["playedAt"].as_str().unwrap().starts_with("2024-03-02T18:30:00"));
    }
}
