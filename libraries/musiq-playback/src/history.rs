//! Playback history recorder
//!
//! Append-only, capped log of started tracks, persisted newest-first under
//! the `musiq_history` key.

use crate::error::Result;
use musiq_core::{keys, HistoryEntry, KeyValueStore, KeyValueStoreExt};
use std::collections::HashSet;
use std::sync::Arc;

/// Default history capacity
pub const DEFAULT_CAPACITY: usize = 50;

/// Persisted listening history with bounded size
///
/// Every call reads the persisted list, so several recorders (or the web
/// client) sharing one store see each other's entries.
#[derive(Clone)]
pub struct HistoryRecorder {
    store: Arc<dyn KeyValueStore>,

    /// Maximum number of kept entries
    capacity: usize,
}

impl std::fmt::Debug for HistoryRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryRecorder")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl HistoryRecorder {
    /// Create a recorder with the default capacity of 50
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_capacity(store, DEFAULT_CAPACITY)
    }

    /// Create a recorder keeping at most `capacity` entries
    pub fn with_capacity(store: Arc<dyn KeyValueStore>, capacity: usize) -> Self {
        Self { store, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record a play of `track_id` stamped with the current time
    pub fn record(&self, track_id: &str) -> Result<()> {
        self.record_entry(HistoryEntry::now(track_id))
    }

    /// Prepend `entry`, drop everything past capacity, persist
    pub fn record_entry(&self, entry: HistoryEntry) -> Result<()> {
        let mut entries = self.read();
        entries.insert(0, entry);
        entries.truncate(self.capacity);
        self.store.set_json(keys::HISTORY, &entries)?;
        Ok(())
    }

    /// Entries, newest first
    ///
    /// Missing or malformed data reads as an empty history.
    pub fn read(&self) -> Vec<HistoryEntry> {
        match self.store.get_json::<Vec<HistoryEntry>>(keys::HISTORY) {
            Ok(entries) => entries.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Ignoring unreadable listening history: {}", e);
                Vec::new()
            }
        }
    }

    /// Empty the persisted log
    pub fn clear(&self) -> Result<()> {
        self.store.set_json(keys::HISTORY, &Vec::<HistoryEntry>::new())?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// The first `limit` entries with repeated track ids removed
    ///
    /// Keeps the newest play of each track; this is the "recently played"
    /// summary, so the result can be shorter than `limit`.
    pub fn recent_unique(&self, limit: usize) -> Vec<HistoryEntry> {
        let mut seen = HashSet::new();
        self.read()
            .into_iter()
            .take(limit)
            .filter(|entry| seen.insert(entry.track_id.clone()))
            .collect()
    }
}
