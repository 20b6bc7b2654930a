//! Random index sources for shuffle
//!
//! Shuffle does not reorder the queue; it picks the next index at random.
//! The picker is injected so tests and seeded sessions are deterministic.

use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

/// Source of uniformly distributed queue indices
pub trait IndexSource: Send {
    /// Pick an index in `[0, len)`
    ///
    /// Callers never pass `len == 0`; implementations return 0 if they do.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Picks from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl IndexSource for ThreadRngSource {
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        thread_rng().gen_range(0..len)
    }
}

/// Reproducible picker seeded from a `u64`
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IndexSource for SeededSource {
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of picks (wrapped modulo `len`), cycling forever
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<usize>,
    position: usize,
}

impl SequenceSource {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            position: 0,
        }
    }
}

impl IndexSource for SequenceSource {
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 || self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value % len
    }
}
