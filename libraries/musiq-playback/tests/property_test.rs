//! Property-based tests for the playback controller
//!
//! Uses proptest to verify invariants across many random inputs.

use musiq_core::Track;
use musiq_playback::{
    Action, PlaybackConfig, PlaybackController, RepeatMode, SequenceSource,
};
use musiq_storage::MemoryStore;
use proptest::prelude::*;
use std::sync::Arc;

// ===== Helpers =====

fn queue_of(len: usize) -> Vec<Track> {
    (0..len)
        .map(|i| Track::new(format!("t{}", i), format!("Track {}", i), "Artist", 60.0 + i as f64))
        .collect()
}

fn controller_with(config: PlaybackConfig, picks: Vec<usize>) -> PlaybackController {
    PlaybackController::new(config, Arc::new(MemoryStore::new()))
        .with_random(Box::new(SequenceSource::new(picks)))
}

fn arbitrary_action(queue_len: usize) -> impl Strategy<Value = Action> {
    prop_oneof![
        (0..queue_len).prop_map(move |i| Action::Play {
            track: queue_of(queue_len)[i].clone(),
            queue: Some(queue_of(queue_len)),
        }),
        Just(Action::TogglePlay),
        Just(Action::Next),
        Just(Action::Previous),
        (-1.0f32..2.0).prop_map(Action::SetVolume),
        Just(Action::ToggleMute),
        Just(Action::ToggleShuffle),
        Just(Action::CycleRepeat),
        (-10.0f64..500.0).prop_map(Action::TimeUpdate),
        (0.0f64..400.0).prop_map(Action::DurationKnown),
        (-10.0f64..500.0).prop_map(Action::Seek),
        (-0.5f64..1.5).prop_map(Action::SeekPercent),
        (0..queue_len + 2).prop_map(Action::SkipTo),
        Just(Action::Ended),
    ]
}

// ===== Property Tests =====

proptest! {
    /// Property: with repeat all and no shuffle, n nexts land on (i + n) mod len
    #[test]
    fn next_wraps_with_repeat_all(len in 1usize..20, start in 0usize..20, n in 0usize..60) {
        let start = start % len;
        let queue = queue_of(len);
        let mut controller = controller_with(PlaybackConfig::default(), vec![0]);

        controller.play(queue[start].clone(), Some(queue));
        controller.cycle_repeat();
        prop_assert_eq!(controller.repeat(), RepeatMode::All);

        for _ in 0..n {
            controller.next();
        }
        prop_assert_eq!(controller.current_index(), (start + n) % len);
    }

    /// Property: previous restarts past 3 seconds, otherwise steps back with wrap
    #[test]
    fn previous_rule(len in 1usize..20, start in 0usize..20, elapsed in 0.0f64..59.0) {
        let start = start % len;
        let queue = queue_of(len);
        let mut controller = controller_with(PlaybackConfig::default(), vec![0]);

        controller.play(queue[start].clone(), Some(queue));
        controller.on_time_update(elapsed);
        controller.previous();

        if elapsed > 3.0 {
            prop_assert_eq!(controller.current_index(), start);
        } else {
            prop_assert_eq!(controller.current_index(), (start + len - 1) % len);
        }
        prop_assert_eq!(controller.elapsed(), 0.0);
    }

    /// Property: three repeat cycles return to the starting mode
    #[test]
    fn repeat_cycle_is_periodic(initial in 0u8..3, rounds in 0usize..5) {
        let repeat = match initial {
            0 => RepeatMode::Off,
            1 => RepeatMode::All,
            _ => RepeatMode::One,
        };
        let config = PlaybackConfig { repeat, ..Default::default() };
        let mut controller = controller_with(config, vec![0]);

        for _ in 0..rounds * 3 {
            controller.cycle_repeat();
        }
        prop_assert_eq!(controller.repeat(), repeat);
    }

    /// Property: state invariants hold after any operation sequence
    #[test]
    fn invariants_hold(
        len in 1usize..8,
        picks in prop::collection::vec(0usize..16, 1..10),
        actions in prop::collection::vec(arbitrary_action(7), 1..60),
    ) {
        let mut controller = controller_with(PlaybackConfig::default(), picks);

        for action in actions {
            // Keep Play/SkipTo meaningful for this queue length
            let action = match action {
                Action::Play { .. } => {
                    let queue = queue_of(len);
                    Action::Play { track: queue[0].clone(), queue: Some(queue) }
                }
                other => other,
            };
            controller.dispatch(action);

            let state = controller.state();
            if !state.queue().is_empty() {
                prop_assert!(state.current_index() < state.queue().len());
            }
            prop_assert!(state.elapsed() >= 0.0);
            if state.duration() > 0.0 {
                prop_assert!(state.elapsed() <= state.duration());
            }
            let level = state.volume().level();
            prop_assert!((0.0..=1.0).contains(&level));
        }

        let history = controller.history_entries();
        prop_assert!(history.len() <= 50);
        for pair in history.windows(2) {
            prop_assert!(pair[0].played_at >= pair[1].played_at);
        }
    }

    /// Property: history never exceeds its configured capacity
    #[test]
    fn history_is_bounded(capacity in 1usize..20, plays in 0usize..80) {
        let queue = queue_of(3);
        let config = PlaybackConfig { history_size: capacity, ..Default::default() };
        let mut controller = controller_with(config, vec![0]);

        for i in 0..plays {
            controller.play(queue[i % 3].clone(), Some(queue.clone()));
        }

        let history = controller.history_entries();
        prop_assert_eq!(history.len(), plays.min(capacity));
        if plays > 0 {
            prop_assert_eq!(history[0].track_id.as_str(), queue[(plays - 1) % 3].id.as_str());
        }
    }
}
