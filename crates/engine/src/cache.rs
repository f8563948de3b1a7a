//! Bounded TTL + LRU cache store.
//!
//! The store is a plain synchronous structure; coordination of concurrent
//! misses lives in the fetch layer. Map order doubles as recency order: a
//! hit moves the entry to the back, eviction pops the front.

use std::time::{Duration, Instant};

use indexmap::IndexMap;
use serde_json::Value;

/// A cached decoded payload plus its insertion time. An entry is valid iff
/// `now - inserted_at < ttl`; validity is checked lazily on read, never
/// swept proactively.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    inserted_at: Instant,
}

#[derive(Debug)]
pub struct CacheStore {
    entries: IndexMap<String, CacheEntry>,
    ttl: Duration,
    capacity: usize,
}

impl CacheStore {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: IndexMap::new(),
            ttl,
            // A zero capacity would turn `put` into an unbounded insert.
            capacity: capacity.max(1),
        }
    }

    /// Valid hit: clone the value and refresh recency. Expired entries are
    /// dropped on the spot.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let entry = self.entries.get(key)?;
        if entry.inserted_at.elapsed() >= self.ttl {
            self.entries.shift_remove(key);
            return None;
        }
        let (key, entry) = self.entries.shift_remove_entry(key)?;
        let value = entry.value.clone();
        self.entries.insert(key, entry);
        Some(value)
    }

    /// Insert with a fresh timestamp, evicting the least-recently-used entry
    /// once capacity is exceeded.
    pub fn put(&mut self, key: String, value: Value) {
        self.entries.shift_remove(&key);
        if self.entries.len() >= self.capacity {
            self.entries.shift_remove_index(0);
        }
        self.entries.insert(
            key,
            CacheEntry {
                value,
                inserted_at: Instant::now(),
            },
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hit_within_ttl_returns_value() {
        let mut store = CacheStore::new(Duration::from_secs(60), 8);
        store.put("k".into(), json!({"a": 1}));
        assert_eq!(store.get("k"), Some(json!({"a": 1})));
    }

    #[test]
    fn expired_entry_is_dropped_lazily() {
        let mut store = CacheStore::new(Duration::from_millis(5), 8);
        store.put("k".into(), json!(1));
        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(store.get("k"), None);
        assert!(store.is_empty(), "expired entry must be removed on read");
    }

    #[test]
    fn least_recently_used_is_evicted_at_capacity() {
        let mut store = CacheStore::new(Duration::from_secs(60), 2);
        store.put("a".into(), json!(1));
        store.put("b".into(), json!(2));
        // Touch "a" so "b" becomes the eviction candidate.
        assert!(store.get("a").is_some());
        store.put("c".into(), json!(3));
        assert_eq!(store.get("b"), None);
        assert!(store.get("a").is_some());
        assert!(store.get("c").is_some());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn reinserting_a_key_refreshes_its_value() {
        let mut store = CacheStore::new(Duration::from_secs(60), 2);
        store.put("k".into(), json!(1));
        store.put("k".into(), json!(2));
        assert_eq!(store.get("k"), Some(json!(2)));
        assert_eq!(store.len(), 1);
    }
}
