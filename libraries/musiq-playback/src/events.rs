//! Playback Events
//!
//! Two directions of traffic cross the playback core:
//! - `PlaybackEvent`: emitted by the controller after each transition so
//!   rendering layers and the playback surface can catch up
//! - `MediaEvent`: reported by the playback surface (time, metadata, end)

use crate::types::RepeatMode;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// A track started from the beginning (new track, or a repeat of the same one)
    TrackChanged {
        /// ID of the new (current) track
        track_id: String,
        /// ID of the track playing before, if any
        previous_track_id: Option<String>,
    },

    /// Play/pause flag flipped
    StateChanged {
        /// Whether playback is now running
        is_playing: bool,
    },

    /// Playhead moved without a track change
    Seeked {
        /// New position in seconds
        position: f64,
    },

    /// Volume or mute changed
    VolumeChanged {
        /// New volume level (0.0-1.0)
        level: f32,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Shuffle flag flipped
    ShuffleChanged { enabled: bool },

    /// Repeat mode changed
    RepeatChanged { mode: RepeatMode },

    /// Queue replaced
    QueueChanged {
        /// New queue length
        length: usize,
    },
}

/// Events reported by the playback surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MediaEvent {
    /// Playhead position in seconds
    TimeUpdate(f64),

    /// Total length became known (seconds)
    LoadedMetadata(f64),

    /// Track reached its natural end
    Ended,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_for_ui_bridges() {
        let event = PlaybackEvent::RepeatChanged {
            mode: RepeatMode::One,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"RepeatChanged":{"mode":"one"}}"#);

        let back: PlaybackEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
