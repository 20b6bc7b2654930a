//! Playback controller
//!
//! Owns the single `PlaybackState`, routes every change through
//! [`reduce`](crate::reducer::reduce), persists history for started tracks
//! and buffers [`PlaybackEvent`]s for rendering layers and the surface.

use crate::events::{MediaEvent, PlaybackEvent};
use crate::history::HistoryRecorder;
use crate::random::{IndexSource, SeededSource, ThreadRngSource};
use crate::reducer::{reduce, Action, Context, Effect};
use crate::types::{PlaybackConfig, PlaybackState, RepeatMode};
use crate::volume::Volume;
use musiq_core::{HistoryEntry, KeyValueStore, Track};
use std::sync::Arc;

/// Single writer of the playback state
pub struct PlaybackController {
    state: PlaybackState,
    random: Box<dyn IndexSource>,
    history: HistoryRecorder,
    restart_threshold: f64,

    /// Events emitted since the last drain
    pending_events: Vec<PlaybackEvent>,
}

impl std::fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("state", &self.state)
            .field("history", &self.history)
            .field("pending_events", &self.pending_events.len())
            .finish_non_exhaustive()
    }
}

impl PlaybackController {
    /// Create a controller persisting history into `store`
    ///
    /// Shuffle uses a seeded picker when `config.seed` is set, the thread
    /// RNG otherwise.
    pub fn new(config: PlaybackConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let random: Box<dyn IndexSource> = match config.seed {
            Some(seed) => Box::new(SeededSource::new(seed)),
            None => Box::new(ThreadRngSource),
        };

        Self {
            state: PlaybackState::new(&config),
            random,
            history: HistoryRecorder::with_capacity(store, config.history_size),
            restart_threshold: config.restart_threshold,
            pending_events: Vec::new(),
        }
    }

    /// Replace the shuffle picker
    #[must_use]
    pub fn with_random(mut self, random: Box<dyn IndexSource>) -> Self {
        self.random = random;
        self
    }

    /// Apply an action and return the effects it produced
    ///
    /// History failures are logged and swallowed; playback continues.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let replaces_queue = matches!(action, Action::Play { .. });
        let before = self.state.clone();

        let mut ctx = Context {
            random: self.random.as_mut(),
            restart_threshold: self.restart_threshold,
        };
        let transition = reduce(std::mem::take(&mut self.state), action, &mut ctx);
        self.state = transition.state;

        for effect in &transition.effects {
            match effect {
                Effect::Started(track_id) => {
                    tracing::debug!("Started track {}", track_id);
                    if let Err(e) = self.history.record(track_id) {
                        tracing::warn!("Failed to record history for {}: {}", track_id, e);
                    }
                    self.pending_events.push(PlaybackEvent::TrackChanged {
                        track_id: track_id.clone(),
                        previous_track_id: before.current_track().map(|t| t.id.clone()),
                    });
                }
                Effect::Restarted => {
                    self.pending_events
                        .push(PlaybackEvent::Seeked { position: 0.0 });
                }
                Effect::Seeked(position) => {
                    self.pending_events.push(PlaybackEvent::Seeked {
                        position: *position,
                    });
                }
            }
        }

        self.emit_changes(&before, replaces_queue);
        transition.effects
    }

    fn emit_changes(&mut self, before: &PlaybackState, replaces_queue: bool) {
        let after = &self.state;

        if replaces_queue {
            self.pending_events.push(PlaybackEvent::QueueChanged {
                length: after.queue().len(),
            });
        }
        if before.is_playing() != after.is_playing() {
            self.pending_events.push(PlaybackEvent::StateChanged {
                is_playing: after.is_playing(),
            });
        }
        if before.volume() != after.volume() {
            let volume = after.volume();
            self.pending_events.push(PlaybackEvent::VolumeChanged {
                level: volume.level(),
                is_muted: volume.is_muted(),
            });
        }
        if before.shuffle() != after.shuffle() {
            self.pending_events.push(PlaybackEvent::ShuffleChanged {
                enabled: after.shuffle(),
            });
        }
        if before.repeat() != after.repeat() {
            self.pending_events.push(PlaybackEvent::RepeatChanged {
                mode: after.repeat(),
            });
        }
    }

    // ===== Operators =====

    /// Start `track`, replacing the queue with `queue` (singleton when `None`)
    pub fn play(&mut self, track: Track, queue: Option<Vec<Track>>) {
        self.dispatch(Action::Play { track, queue });
    }

    pub fn toggle_play(&mut self) {
        self.dispatch(Action::TogglePlay);
    }

    pub fn next(&mut self) {
        self.dispatch(Action::Next);
    }

    pub fn previous(&mut self) {
        self.dispatch(Action::Previous);
    }

    /// Set volume level (clamped to 0.0-1.0)
    pub fn set_volume(&mut self, level: f32) {
        self.dispatch(Action::SetVolume(level));
    }

    pub fn toggle_mute(&mut self) {
        self.dispatch(Action::ToggleMute);
    }

    pub fn toggle_shuffle(&mut self) {
        self.dispatch(Action::ToggleShuffle);
    }

    pub fn cycle_repeat(&mut self) {
        self.dispatch(Action::CycleRepeat);
    }

    pub fn seek(&mut self, position: f64) {
        self.dispatch(Action::Seek(position));
    }

    /// Seek to a fraction (0.0-1.0) of the current track
    pub fn seek_percent(&mut self, fraction: f64) {
        self.dispatch(Action::SeekPercent(fraction));
    }

    /// Start the queue entry at `index`; out-of-range indices are ignored
    pub fn skip_to(&mut self, index: usize) {
        self.dispatch(Action::SkipTo(index));
    }

    pub fn on_time_update(&mut self, position: f64) {
        self.dispatch(Action::TimeUpdate(position));
    }

    pub fn on_duration_known(&mut self, duration: f64) {
        self.dispatch(Action::DurationKnown(duration));
    }

    pub fn on_ended(&mut self) {
        self.dispatch(Action::Ended);
    }

    /// Feed one surface report into the matching operator
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate(position) => self.on_time_update(position),
            MediaEvent::LoadedMetadata(duration) => self.on_duration_known(duration),
            MediaEvent::Ended => self.on_ended(),
        }
    }

    // ===== Queries =====

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.state.current_track()
    }

    pub fn queue(&self) -> &[Track] {
        self.state.queue()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn elapsed(&self) -> f64 {
        self.state.elapsed()
    }

    pub fn duration(&self) -> f64 {
        self.state.duration()
    }

    pub fn volume(&self) -> Volume {
        self.state.volume()
    }

    pub fn shuffle(&self) -> bool {
        self.state.shuffle()
    }

    pub fn repeat(&self) -> RepeatMode {
        self.state.repeat()
    }

    /// Tracks after the current one
    pub fn up_next(&self) -> &[Track] {
        self.state.up_next()
    }

    pub fn history(&self) -> &HistoryRecorder {
        &self.history
    }

    /// Persisted history, newest first
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        self.history.read()
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns every event emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }
}
