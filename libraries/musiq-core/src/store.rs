//! Persistence service trait
//!
//! Generic get/set/remove of JSON documents by string key. Backends live in
//! `musiq-storage`; this crate only defines the seam.

use crate::error::Result;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Device-local key/value storage
///
/// Values are opaque strings (JSON in practice). Implementations must be
/// shareable so the playback history and the library can write through the
/// same backend.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`
    ///
    /// Returns `Ok(None)` when nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` (removing a missing key is not an error)
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Typed JSON helpers for any `KeyValueStore`
pub trait KeyValueStoreExt: KeyValueStore {
    /// Read and deserialize the value under `key`
    ///
    /// Malformed JSON is reported as `MusiqError::Serialization`; callers
    /// that treat corruption as absence decide that themselves.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize `value` and store it under `key`
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapStore(Mutex<HashMap<String, String>>);

    impl KeyValueStore for MapStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.0.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.0
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.0.lock().unwrap().remove(key);
            Ok(())
        }
    }

    #[test]
    fn json_helpers_work_through_trait_objects() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MapStore::default());
        store.set_json("ids", &vec!["a", "b"]).unwrap();

        let ids: Option<Vec<String>> = store.get_json("ids").unwrap();
        assert_eq!(ids, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn missing_key_reads_as_none() {
        let store = MapStore::default();
        let value: Option<Vec<String>> = store.get_json("nothing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let store = MapStore::default();
        store.set("ids", "[not json").unwrap();
        assert!(store.get_json::<Vec<String>>("ids").is_err());
    }
}
