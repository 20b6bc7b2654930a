//! Simulated listening sessions
//!
//! Drives a controller against a [`SimulatedSurface`] on a fixed clock so a
//! queue can be "played" from the terminal without decoding audio.

use musiq_core::Track;
use musiq_playback::{PlaybackController, PlaybackEvent, SimulatedSurface, SurfaceBinding};

/// Clock step used when none (or a non-positive one) is given
pub const DEFAULT_STEP_SECS: f64 = 1.0;

/// What happened during a session
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SessionReport {
    /// Tracks started, in order (including the first)
    pub started: Vec<String>,

    /// Simulated seconds that passed
    pub listened: f64,

    /// Whether playback stopped on its own before the time ran out
    pub finished: bool,
}

/// Surface that knows the length of every track in `tracks`
pub fn surface_for(tracks: &[Track]) -> SimulatedSurface {
    let mut surface = SimulatedSurface::new();
    for track in tracks {
        surface.set_duration(track.audio_url.clone(), track.duration);
    }
    surface
}

/// Run the clock for up to `listen` seconds
///
/// `on_event` sees every controller event after it reached the surface.
pub fn run(
    controller: &mut PlaybackController,
    binding: &mut SurfaceBinding<SimulatedSurface>,
    listen: f64,
    step: f64,
    mut on_event: impl FnMut(&PlaybackController, &PlaybackEvent),
) -> SessionReport {
    let step = if step.is_finite() && step > 0.0 {
        step
    } else {
        DEFAULT_STEP_SECS
    };
    let mut report = SessionReport::default();

    let mut handle = |controller: &PlaybackController, events: Vec<PlaybackEvent>, report: &mut SessionReport| {
        for event in events {
            if let PlaybackEvent::TrackChanged { track_id, .. } = &event {
                report.started.push(track_id.clone());
            }
            on_event(controller, &event);
        }
    };

    let events = binding.sync(controller);
    handle(controller, events, &mut report);

    while report.listened < listen {
        if !controller.is_playing() {
            report.finished = true;
            break;
        }

        binding.surface_mut().advance(step);
        report.listened += step;

        let events = binding.tick(controller);
        handle(controller, events, &mut report);
    }

    if !controller.is_playing() {
        report.finished = true;
    }

    tracing::debug!(
        "Session ended after {:.0}s with {} tracks started",
        report.listened,
        report.started.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use musiq_playback::PlaybackConfig;
    use musiq_storage::MemoryStore;
    use std::sync::Arc;

    fn tracks() -> Vec<Track> {
        vec![
            Track::new("a", "A", "Artist", 5.0),
            Track::new("b", "B", "Artist", 5.0),
        ]
    }

    fn controller() -> PlaybackController {
        PlaybackController::new(PlaybackConfig::default(), Arc::new(MemoryStore::new()))
    }

    #[test]
    fn plays_queue_to_the_end() {
        let queue = tracks();
        let mut controller = controller();
        let mut binding = SurfaceBinding::new(surface_for(&queue));
        controller.play(queue[0].clone(), Some(queue.clone()));

        let report = run(&mut controller, &mut binding, 60.0, 1.0, |_, _| {});

        assert_eq!(report.started, vec!["a", "b"]);
        assert!(report.finished);
        assert_eq!(report.listened, 10.0);
    }

    #[test]
    fn stops_when_time_runs_out() {
        let queue = tracks();
        let mut controller = controller();
        let mut binding = SurfaceBinding::new(surface_for(&queue));
        controller.play(queue[0].clone(), Some(queue.clone()));

        let report = run(&mut controller, &mut binding, 3.0, 0.0, |_, _| {});

        assert_eq!(report.started, vec!["a"]);
        assert!(!report.finished);
        assert_eq!(controller.elapsed(), 3.0);
    }

    #[test]
    fn nothing_loaded_finishes_immediately() {
        let mut controller = controller();
        let mut binding = SurfaceBinding::new(SimulatedSurface::new());

        let report = run(&mut controller, &mut binding, 10.0, 1.0, |_, _| {});
        assert!(report.finished);
        assert!(report.started.is_empty());
        assert_eq!(report.listened, 0.0);
    }
}
