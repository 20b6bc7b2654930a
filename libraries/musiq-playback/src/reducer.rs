//! Transition operators
//!
//! `reduce` is the only function that produces a new `PlaybackState`. It is
//! pure: state and action in, new state and effects out. Persisting history
//! and driving the playback surface are left to the owner of the state,
//! which reads them from the returned effects.
//!
//! Every operator is total. Misuse (navigating an empty queue, toggling
//! without a track) leaves the state unchanged.

use crate::random::IndexSource;
use crate::types::{PlaybackState, RepeatMode};
use musiq_core::Track;

/// Inputs to the transition operators
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Start `track`, replacing the queue with `queue` (or a singleton)
    Play {
        track: Track,
        queue: Option<Vec<Track>>,
    },

    /// Flip the play/pause flag
    TogglePlay,

    /// Skip forward
    Next,

    /// Skip backward (or restart past the threshold)
    Previous,

    /// Set volume level (clamped to 0.0-1.0)
    SetVolume(f32),

    /// Flip mute
    ToggleMute,

    /// Flip shuffle; queue order is untouched
    ToggleShuffle,

    /// off → all → one → off
    CycleRepeat,

    /// Surface reported the playhead position
    TimeUpdate(f64),

    /// Surface reported the track length
    DurationKnown(f64),

    /// User moved the playhead
    Seek(f64),

    /// User moved the playhead to a fraction of the track
    SeekPercent(f64),

    /// Start the queue entry at this index
    SkipTo(usize),

    /// Surface reported natural end of track
    Ended,
}

/// Side effects the owner of the state must apply
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// A track started from zero; record it in history
    Started(String),

    /// The current track restarts from zero without a history entry
    Restarted,

    /// The playhead moved to this position (seconds)
    Seeked(f64),
}

/// Result of one transition
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: PlaybackState,
    pub effects: Vec<Effect>,
}

/// Per-call inputs that are not part of the state
pub struct Context<'a> {
    /// Picker for shuffle
    pub random: &'a mut dyn IndexSource,

    /// Seconds after which `Previous` restarts instead of going back
    pub restart_threshold: f64,
}

/// Apply `action` to `state`
pub fn reduce(mut state: PlaybackState, action: Action, ctx: &mut Context<'_>) -> Transition {
    let mut effects = Vec::new();

    match action {
        Action::Play { track, queue } => {
            let queue = match queue {
                Some(queue) if !queue.is_empty() => queue,
                _ => vec![track.clone()],
            };
            let index = queue.iter().position(|t| t.id == track.id).unwrap_or(0);

            state.queue = queue;
            state.current_index = index;
            state.is_playing = true;
            start(&mut state, track, &mut effects);
        }

        Action::TogglePlay => {
            if state.current_track.is_some() {
                state.is_playing = !state.is_playing;
            }
        }

        Action::Next => {
            step_forward(&mut state, ctx, &mut effects);
        }

        Action::Previous => {
            if !state.queue.is_empty() {
                if state.elapsed > ctx.restart_threshold {
                    state.elapsed = 0.0;
                    effects.push(Effect::Restarted);
                } else {
                    let index = match state.current_index {
                        0 => state.queue.len() - 1,
                        i => (i - 1).min(state.queue.len() - 1),
                    };
                    start_at(&mut state, index, &mut effects);
                }
            }
        }

        Action::SetVolume(level) => state.volume.set_level(level),

        Action::ToggleMute => state.volume.toggle_mute(),

        Action::ToggleShuffle => state.shuffle = !state.shuffle,

        Action::CycleRepeat => state.repeat = state.repeat.cycle(),

        Action::TimeUpdate(position) => {
            if state.current_track.is_some() {
                state.elapsed = clamp_position(position, state.duration);
            }
        }

        Action::DurationKnown(duration) => {
            state.duration = sanitize_seconds(duration);
            if state.duration > 0.0 {
                state.elapsed = state.elapsed.min(state.duration);
            }
        }

        Action::Seek(position) => seek(&mut state, position, &mut effects),

        Action::SeekPercent(fraction) => {
            if state.duration > 0.0 {
                let fraction = if fraction.is_finite() {
                    fraction.clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let position = fraction * state.duration;
                seek(&mut state, position, &mut effects);
            }
        }

        Action::SkipTo(index) => {
            if index < state.queue.len() {
                state.is_playing = true;
                start_at(&mut state, index, &mut effects);
            }
        }

        Action::Ended => {
            if state.repeat == RepeatMode::One && state.current_track.is_some() {
                state.elapsed = 0.0;
                effects.push(Effect::Restarted);
            } else {
                step_forward(&mut state, ctx, &mut effects);
            }
        }
    }

    Transition { state, effects }
}

/// Shared forward step for `Next` and `Ended`
///
/// Leaves the state untouched when the pick lands on the current index and
/// repeat is not "one" (last entry with repeat off, or a shuffle reselect).
fn step_forward(state: &mut PlaybackState, ctx: &mut Context<'_>, effects: &mut Vec<Effect>) {
    let len = state.queue.len();
    if len == 0 {
        return;
    }

    let current = state.current_index;
    let candidate = if state.shuffle {
        // May pick the current index again
        ctx.random.next_index(len).min(len - 1)
    } else if current + 1 < len {
        current + 1
    } else if state.repeat == RepeatMode::All {
        0
    } else {
        current.min(len - 1)
    };

    if candidate != current || state.repeat == RepeatMode::One {
        start_at(state, candidate, effects);
    }
}

/// Make the queue entry at `index` current and start it from zero
fn start_at(state: &mut PlaybackState, index: usize, effects: &mut Vec<Effect>) {
    let track = state.queue[index].clone();
    state.current_index = index;
    start(state, track, effects);
}

fn start(state: &mut PlaybackState, track: Track, effects: &mut Vec<Effect>) {
    state.elapsed = 0.0;
    state.duration = sanitize_seconds(track.duration);
    effects.push(Effect::Started(track.id.clone()));
    state.current_track = Some(track);
}

fn seek(state: &mut PlaybackState, position: f64, effects: &mut Vec<Effect>) {
    if state.current_track.is_some() {
        state.elapsed = clamp_position(position, state.duration);
        effects.push(Effect::Seeked(state.elapsed));
    }
}

/// Non-finite or negative seconds become 0
fn sanitize_seconds(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}

/// Clamp a playhead position into `[0, duration]` (upper bound only when known)
fn clamp_position(position: f64, duration: f64) -> f64 {
    let position = sanitize_seconds(position);
    if duration > 0.0 {
        position.min(duration)
    } else {
        position
    }
}
