//! Keyed Cache Module
//!
//! Wraps an external store so callers address entries by raw key.

use tracing::debug;

use crate::keys::{KeyBuilder, KeyStats, PhysicalKey};

// == Key Value Store ==
/// Minimal interface of an external cache backend such as a memcached client.
///
/// Keys passed in are physical keys already within the length budget.
pub trait KeyValueStore {
    /// Error reported by the backend
    type Error: std::error::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    fn set(&mut self, key: &str, value: String) -> Result<(), Self::Error>;

    /// Returns whether an entry was removed.
    fn delete(&mut self, key: &str) -> Result<bool, Self::Error>;
}

// == Keyed Cache ==
/// A store addressed through a [`KeyBuilder`].
#[derive(Debug)]
pub struct KeyedCache<S> {
    /// Key construction settings for this namespace and version
    builder: KeyBuilder,
    /// Backend receiving physical keys
    store: S,
    /// Outcomes of key construction
    stats: KeyStats,
}

impl<S: KeyValueStore> KeyedCache<S> {
    // == Constructor ==
    pub fn new(builder: KeyBuilder, store: S) -> Self {
        Self {
            builder,
            store,
            stats: KeyStats::new(),
        }
    }

    // == Physical Key ==
    /// Returns the physical key `raw_key` maps to, without touching the store.
    pub fn physical_key(&self, raw_key: &str) -> PhysicalKey {
        self.builder.build(raw_key)
    }

    // == Get ==
    /// Retrieves the value stored under `raw_key`.
    pub fn get(&mut self, raw_key: &str) -> Result<Option<String>, S::Error> {
        let key = self.resolve(raw_key);
        self.store.get(key.as_str())
    }

    // == Set ==
    /// Stores `value` under `raw_key`, returning the physical key used.
    pub fn set(&mut self, raw_key: &str, value: String) -> Result<PhysicalKey, S::Error> {
        let key = self.resolve(raw_key);
        self.store.set(key.as_str(), value)?;
        Ok(key)
    }

    // == Delete ==
    /// Removes the entry stored under `raw_key`.
    pub fn delete(&mut self, raw_key: &str) -> Result<bool, S::Error> {
        let key = self.resolve(raw_key);
        self.store.delete(key.as_str())
    }

    // == Accessors ==
    pub fn builder(&self) -> &KeyBuilder {
        &self.builder
    }

    pub fn stats(&self) -> &KeyStats {
        &self.stats
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the wrapper and returns the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }

    fn resolve(&mut self, raw_key: &str) -> PhysicalKey {
        let key = self.builder.build(raw_key);
        self.stats.record(&key);
        if key.is_hashed() {
            debug!("Raw key of {} chars stored as {}", raw_key.chars().count(), key);
        }
        key
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::convert::Infallible;

    #[derive(Debug, Default)]
    struct MapStore {
        entries: HashMap<String, String>,
    }

    impl KeyValueStore for MapStore {
        type Error = Infallible;

        fn get(&self, key: &str) -> Result<Option<String>, Infallible> {
            Ok(self.entries.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: String) -> Result<(), Infallible> {
            self.entries.insert(key.to_string(), value);
            Ok(())
        }

        fn delete(&mut self, key: &str) -> Result<bool, Infallible> {
            Ok(self.entries.remove(key).is_some())
        }
    }

    fn keyed() -> KeyedCache<MapStore> {
        KeyedCache::new(KeyBuilder::new("app", 1).unwrap(), MapStore::default())
    }

    #[test]
    fn test_set_uses_physical_key() {
        let mut cache = keyed();

        let key = cache.set("foo", "bar".to_string()).unwrap();

        assert_eq!(key.as_str(), "NH_appfoo");
        assert_eq!(
            cache.store().entries.get("NH_appfoo"),
            Some(&"bar".to_string())
        );
    }

    #[test]
    fn test_get_and_delete_round_trip() {
        let mut cache = keyed();
        cache.set("foo", "bar".to_string()).unwrap();

        assert_eq!(cache.get("foo").unwrap(), Some("bar".to_string()));
        assert!(cache.delete("foo").unwrap());
        assert_eq!(cache.get("foo").unwrap(), None);
        assert!(!cache.delete("foo").unwrap());
    }

    #[test]
    fn test_long_keys_stay_distinct() {
        let mut cache = keyed();
        let stem = "s".repeat(300);

        cache.set(&format!("{}1", stem), "one".to_string()).unwrap();
        cache.set(&format!("{}2", stem), "two".to_string()).unwrap();

        assert_eq!(cache.store().entries.len(), 2);
        assert_eq!(cache.get(&format!("{}1", stem)).unwrap(), Some("one".to_string()));
        assert_eq!(cache.get(&format!("{}2", stem)).unwrap(), Some("two".to_string()));
    }

    #[test]
    fn test_stats_recorded_per_call() {
        let mut cache = keyed();

        cache.set("short", "v".to_string()).unwrap();
        cache.get(&"l".repeat(400)).unwrap();

        assert_eq!(cache.stats().unhashed, 1);
        assert_eq!(cache.stats().hashed, 1);
    }

    #[test]
    fn test_physical_key_does_not_record() {
        let cache = keyed();

        assert_eq!(cache.physical_key("foo").as_str(), "NH_appfoo");
        assert_eq!(cache.stats().total(), 0);
    }

    #[test]
    fn test_into_inner() {
        let mut cache = keyed();
        cache.set("foo", "bar".to_string()).unwrap();

        let store = cache.into_inner();
        assert_eq!(store.entries.len(), 1);
    }
}
