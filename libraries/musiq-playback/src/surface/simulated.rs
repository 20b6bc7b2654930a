//! In-memory playback surface driven by an explicit clock

use super::MediaSurface;
use crate::error::{PlaybackError, Result};
use crate::events::MediaEvent;
use std::collections::{HashMap, VecDeque};

/// Commands received by a [`SimulatedSurface`], in order
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    Load(String),
    Play,
    Pause,
    Seek(f64),
    SetVolume(f32),
}

/// Surface that renders nothing and advances only when told to
///
/// Durations come from [`set_duration`](Self::set_duration) or the fallback
/// passed to [`with_default_duration`](Self::with_default_duration); a
/// source with no known duration never ends.
#[derive(Debug, Default)]
pub struct SimulatedSurface {
    durations: HashMap<String, f64>,
    default_duration: Option<f64>,

    loaded: Option<String>,
    position: f64,
    duration: f64,
    playing: bool,
    volume: f32,
    reject_play: bool,

    pending: VecDeque<MediaEvent>,
    commands: Vec<SurfaceCommand>,
}

impl SimulatedSurface {
    pub fn new() -> Self {
        Self {
            volume: 1.0,
            ..Self::default()
        }
    }

    /// Duration reported for sources without an explicit entry
    #[must_use]
    pub fn with_default_duration(mut self, seconds: f64) -> Self {
        self.default_duration = Some(seconds);
        self
    }

    /// Register the length of `url`
    pub fn set_duration(&mut self, url: impl Into<String>, seconds: f64) {
        self.durations.insert(url.into(), seconds);
    }

    /// Refuse every `play` call (models an autoplay policy)
    pub fn set_reject_play(&mut self, reject: bool) {
        self.reject_play = reject;
    }

    /// Move the clock forward by `seconds`
    ///
    /// Queues a time update, or a final update plus `Ended` when the source
    /// runs out. Does nothing while paused.
    pub fn advance(&mut self, seconds: f64) {
        if !self.playing || self.loaded.is_none() {
            return;
        }

        self.position += seconds.max(0.0);
        if self.duration > 0.0 && self.position >= self.duration {
            self.position = self.duration;
            self.playing = false;
            self.pending.push_back(MediaEvent::TimeUpdate(self.position));
            self.pending.push_back(MediaEvent::Ended);
        } else {
            self.pending.push_back(MediaEvent::TimeUpdate(self.position));
        }
    }

    pub fn loaded_url(&self) -> Option<&str> {
        self.loaded.as_deref()
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }
}

impl MediaSurface for SimulatedSurface {
    fn load(&mut self, url: &str) {
        self.commands.push(SurfaceCommand::Load(url.to_string()));
        self.loaded = Some(url.to_string());
        self.position = 0.0;
        self.playing = false;
        self.pending.clear();

        let duration = self.durations.get(url).copied().or(self.default_duration);
        self.duration = duration.unwrap_or(0.0);
        if let Some(duration) = duration {
            self.pending.push_back(MediaEvent::LoadedMetadata(duration));
        }
    }

    fn play(&mut self) -> Result<()> {
        self.commands.push(SurfaceCommand::Play);
        if self.reject_play {
            return Err(PlaybackError::PlayRejected(
                "autoplay is not allowed".to_string(),
            ));
        }
        if self.loaded.is_none() {
            return Err(PlaybackError::NoSourceLoaded);
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.commands.push(SurfaceCommand::Pause);
        self.playing = false;
    }

    fn seek(&mut self, position: f64) {
        self.commands.push(SurfaceCommand::Seek(position));
        self.position = if self.duration > 0.0 {
            position.clamp(0.0, self.duration)
        } else {
            position.max(0.0)
        };
    }

    fn set_volume(&mut self, level: f32) {
        self.commands.push(SurfaceCommand::SetVolume(level));
        self.volume = level.clamp(0.0, 1.0);
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        self.pending.drain(..).collect()
    }
}
