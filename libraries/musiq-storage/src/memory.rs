//! In-memory backend

use crate::error::StorageError;
use musiq_core::{KeyValueStore, MusiqError};
use std::collections::HashMap;
use std::sync::RwLock;

/// Key/value store that lives for the process lifetime
///
/// Used by tests and by sessions that should not touch the disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> MusiqError {
    StorageError::Poisoned.into()
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> musiq_core::Result<Option<String>> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> musiq_core::Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> musiq_core::Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.remove(key);
        Ok(())
    }
}
