//! Playback surface abstraction
//!
//! The surface is whatever actually renders audio (a media element, an
//! audio backend, or the in-memory [`SimulatedSurface`]). It never mutates
//! playback state itself: [`SurfaceBinding`] translates controller events
//! into surface commands and feeds surface reports back as operators.

mod simulated;

pub use simulated::{SimulatedSurface, SurfaceCommand};

use crate::controller::PlaybackController;
use crate::error::Result;
use crate::events::{MediaEvent, PlaybackEvent};
use crate::reducer::Action;

/// Something that can load a URL and render it
pub trait MediaSurface {
    /// Replace the loaded source; position resets to 0
    fn load(&mut self, url: &str);

    /// Start or resume rendering
    ///
    /// May be refused (autoplay policy, nothing loaded).
    fn play(&mut self) -> Result<()>;

    fn pause(&mut self);

    /// Move the playhead (seconds)
    fn seek(&mut self, position: f64);

    /// Output gain, 0.0-1.0
    fn set_volume(&mut self, level: f32);

    /// Reports since the last poll, oldest first
    fn poll_events(&mut self) -> Vec<MediaEvent>;
}

/// Keeps a surface in step with a controller
#[derive(Debug)]
pub struct SurfaceBinding<S> {
    surface: S,
    /// Whether the surface has received any gain yet
    volume_applied: bool,
}

impl<S: MediaSurface> SurfaceBinding<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            volume_applied: false,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Drain controller events and apply them to the surface
    ///
    /// Returns the drained events so callers can render them too. A refused
    /// `play` is logged and otherwise ignored; the controller keeps its flag.
    pub fn sync(&mut self, controller: &mut PlaybackController) -> Vec<PlaybackEvent> {
        let events = controller.drain_events();

        let mut reload = false;
        let mut play_state_changed = false;
        let mut seek_to = None;
        let mut volume_changed = false;

        for event in &events {
            match event {
                PlaybackEvent::TrackChanged { .. } => {
                    reload = true;
                    // Loading resets the playhead; earlier seeks are moot
                    seek_to = None;
                }
                PlaybackEvent::Seeked { position } => seek_to = Some(*position),
                PlaybackEvent::StateChanged { .. } => play_state_changed = true,
                PlaybackEvent::VolumeChanged { .. } => volume_changed = true,
                PlaybackEvent::ShuffleChanged { .. }
                | PlaybackEvent::RepeatChanged { .. }
                | PlaybackEvent::QueueChanged { .. } => {}
            }
        }

        if reload {
            if let Some(track) = controller.current_track() {
                tracing::debug!("Loading {}", track.audio_url);
                self.surface.load(&track.audio_url);
            }
        }
        if let Some(position) = seek_to {
            self.surface.seek(position);
        }
        if volume_changed || !self.volume_applied {
            self.surface.set_volume(controller.volume().effective());
            self.volume_applied = true;
        }

        // A restart after natural end needs an explicit resume
        if reload || play_state_changed || seek_to.is_some() {
            if controller.is_playing() {
                if let Err(e) = self.surface.play() {
                    tracing::warn!("Surface refused to play: {}", e);
                }
            } else if play_state_changed {
                self.surface.pause();
            }
        }

        events
    }

    /// Feed surface reports into the controller; returns how many were handled
    ///
    /// An `Ended` report that neither starts nor restarts a track means the
    /// surface ran off the end of the queue (or shuffle picked the same
    /// entry). The surface has already stopped, so the controller is paused
    /// to match and the next `sync` sends the pause.
    pub fn pump(&mut self, controller: &mut PlaybackController) -> usize {
        let reports = self.surface.poll_events();
        let count = reports.len();
        for report in reports {
            match report {
                MediaEvent::Ended => {
                    let effects = controller.dispatch(Action::Ended);
                    if effects.is_empty() && controller.is_playing() {
                        tracing::debug!("Surface stopped at end of queue");
                        controller.toggle_play();
                    }
                }
                other => controller.handle_media_event(other),
            }
        }
        count
    }

    /// `pump` then `sync`
    pub fn tick(&mut self, controller: &mut PlaybackController) -> Vec<PlaybackEvent> {
        self.pump(controller);
        self.sync(controller)
    }
}
