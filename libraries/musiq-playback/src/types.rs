//! Core types for playback management

use crate::error::PlaybackError;
use crate::volume::Volume;
use musiq_core::Track;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stop when queue ends
    #[default]
    Off,

    /// Loop entire queue
    All,

    /// Loop current track only
    One,
}

impl RepeatMode {
    /// Next mode in the off → all → one → off cycle
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RepeatMode::Off => "off",
            RepeatMode::All => "all",
            RepeatMode::One => "one",
        }
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepeatMode {
    type Err = PlaybackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(RepeatMode::Off),
            "all" => Ok(RepeatMode::All),
            "one" => Ok(RepeatMode::One),
            other => Err(PlaybackError::InvalidRepeatMode(other.to_string())),
        }
    }
}

/// Seconds into a track after which "previous" restarts instead of going back
pub const RESTART_THRESHOLD_SECS: f64 = 3.0;

/// Configuration for the playback controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Maximum history size (default: 50)
    pub history_size: usize,

    /// Initial volume (0.0-1.0, default: 0.7)
    pub volume: f32,

    /// Initial shuffle flag (default: false)
    pub shuffle: bool,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,

    /// Seconds after which `previous()` restarts the current track (default: 3)
    pub restart_threshold: f64,

    /// Seed for the shuffle picker; `None` uses the thread RNG
    pub seed: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            history_size: crate::history::DEFAULT_CAPACITY,
            volume: 0.7,
            shuffle: false,
            repeat: RepeatMode::Off,
            restart_threshold: RESTART_THRESHOLD_SECS,
            seed: None,
        }
    }
}

/// Snapshot of "what is playing"
///
/// Only the transition operators in [`crate::reducer`] produce new values;
/// everything else reads through the accessors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackState {
    pub(crate) current_track: Option<Track>,
    pub(crate) queue: Vec<Track>,
    pub(crate) current_index: usize,
    pub(crate) is_playing: bool,
    pub(crate) elapsed: f64,
    pub(crate) duration: f64,
    pub(crate) volume: Volume,
    pub(crate) shuffle: bool,
    pub(crate) repeat: RepeatMode,
}

impl PlaybackState {
    /// Empty state seeded with the configured volume, shuffle and repeat
    pub fn new(config: &PlaybackConfig) -> Self {
        Self {
            volume: Volume::new(config.volume),
            shuffle: config.shuffle,
            repeat: config.repeat,
            ..Self::default()
        }
    }

    /// Currently loaded track (`None` only before the first play)
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    pub fn queue(&self) -> &[Track] {
        &self.queue
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Seconds into the current track
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Total length of the current track in seconds (0 when unknown)
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// Tracks after the current index
    pub fn up_next(&self) -> &[Track] {
        self.queue.get(self.current_index + 1..).unwrap_or(&[])
    }

    /// Progress through the current track in `[0, 1]`
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.history_size, 50);
        assert_eq!(config.volume, 0.7);
        assert!(!config.shuffle);
        assert_eq!(config.repeat, RepeatMode::Off);
        assert_eq!(config.restart_threshold, 3.0);
    }

    #[test]
    fn repeat_cycle_order() {
        assert_eq!(RepeatMode::Off.cycle(), RepeatMode::All);
        assert_eq!(RepeatMode::All.cycle(), RepeatMode::One);
        assert_eq!(RepeatMode::One.cycle(), RepeatMode::Off);
    }

    #[test]
    fn repeat_parse() {
        assert_eq!("ALL".parse::<RepeatMode>().unwrap(), RepeatMode::All);
        assert_eq!("one".parse::<RepeatMode>().unwrap(), RepeatMode::One);
        assert!("twice".parse::<RepeatMode>().is_err());
        assert_eq!(RepeatMode::One.to_string(), "one");
    }

    #[test]
    fn new_state_uses_config() {
        let config = PlaybackConfig {
            volume: 0.25,
            shuffle: true,
            repeat: RepeatMode::All,
            ..Default::default()
        };
        let state = PlaybackState::new(&config);

        assert!(state.current_track().is_none());
        assert!(state.queue().is_empty());
        assert!(!state.is_playing());
        assert_eq!(state.volume().level(), 0.25);
        assert!(state.shuffle());
        assert_eq!(state.repeat(), RepeatMode::All);
        assert!(state.up_next().is_empty());
        assert_eq!(state.progress(), 0.0);
    }
}
