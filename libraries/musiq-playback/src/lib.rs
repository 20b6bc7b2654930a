//! Musiq - Playback Management
//!
//! Platform-agnostic playback state machine for Musiq.
//!
//! This crate provides:
//! - A pure transition function over one `PlaybackState`
//! - Queue navigation (next/previous/skip) with shuffle and repeat
//! - Volume control (0.0-1.0, mute/unmute)
//! - Seek by position and by percentage
//! - Bounded listening history persisted through `KeyValueStore`
//! - A `MediaSurface` trait plus binding for whatever renders audio
//!
//! # Architecture
//!
//! `PlaybackController` is the only writer of the state. Every operator goes
//! through [`reducer::reduce`], which returns the new state and the effects
//! (track started, restarted, seeked). The controller applies the effects:
//! it records history and buffers [`PlaybackEvent`]s, which a
//! [`SurfaceBinding`] turns into surface commands.
//!
//! Shuffle picks the next index at random through an injected
//! [`IndexSource`]; the queue order itself never changes.
//!
//! # Example
//!
//! ```rust
//! use musiq_core::Track;
//! use musiq_playback::{PlaybackConfig, PlaybackController, RepeatMode};
//! use musiq_storage::MemoryStore;
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new());
//! let mut controller = PlaybackController::new(PlaybackConfig::default(), store);
//!
//! let queue = vec![
//!     Track::new("a", "Midnight Dreams", "Aurora Waves", 240.0),
//!     Track::new("b", "Electric Pulse", "Neon Lights", 198.0),
//! ];
//! controller.play(queue[0].clone(), Some(queue.clone()));
//! controller.next();
//!
//! assert_eq!(controller.current_track().map(|t| t.id.as_str()), Some("b"));
//!
//! controller.cycle_repeat();
//! assert_eq!(controller.repeat(), RepeatMode::All);
//!
//! controller.next();
//! assert_eq!(controller.current_index(), 0);
//! assert_eq!(controller.history_entries().len(), 3);
//! ```

#![forbid(unsafe_code)]

pub mod controller;
pub mod error;
pub mod events;
pub mod history;
pub mod random;
pub mod reducer;
pub mod surface;
pub mod types;
pub mod volume;

pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::{MediaEvent, PlaybackEvent};
pub use history::HistoryRecorder;
pub use random::{IndexSource, SeededSource, SequenceSource, ThreadRngSource};
pub use reducer::{reduce, Action, Effect, Transition};
pub use surface::{MediaSurface, SimulatedSurface, SurfaceBinding, SurfaceCommand};
pub use types::{PlaybackConfig, PlaybackState, RepeatMode, RESTART_THRESHOLD_SECS};
pub use volume::Volume;
