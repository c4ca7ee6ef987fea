//! TTL response memoizer
//!
//! List endpoints that back dropdowns (tariffs, available payers, payer
//! types) are memoized for a few minutes so reopening a form does not
//! refetch an unchanged catalogue. Any mutation through the owning adapter
//! invalidates its keys. Values are stored as JSON so one cache serves
//! every response type.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Default time-to-live for cached list responses
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// A small in-process TTL cache keyed by string
pub struct TtlCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

struct CacheEntry {
    stored_at: Instant,
    value: serde_json::Value,
}

impl TtlCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Cache with the standard five-minute TTL
    pub fn with_default_ttl() -> Self {
        Self::new(DEFAULT_TTL)
    }

    /// Returns the cached value for `key` if present and fresh
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let mut entries = self.entries.lock().ok()?;
        let entry = entries.get(key)?;
        if entry.stored_at.elapsed() > self.ttl {
            entries.remove(key);
            return None;
        }
        serde_json::from_value(entry.value.clone()).ok()
    }

    /// Stores a value under `key`
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let Ok(value) = serde_json::to_value(value) else {
            return;
        };
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                key.to_string(),
                CacheEntry {
                    stored_at: Instant::now(),
                    value,
                },
            );
        }
    }

    /// Drops every key starting with `prefix`; called after mutations
    pub fn invalidate_prefix(&self, prefix: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.retain(|key, _| !key.starts_with(prefix));
        }
    }

    /// Drops everything
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Default for TtlCache {
    fn default() -> Self {
        Self::with_default_ttl()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let cache = TtlCache::with_default_ttl();
        cache.set("tariffs-page-1", &vec!["a".to_string(), "b".to_string()]);

        let hit: Option<Vec<String>> = cache.get("tariffs-page-1");
        assert_eq!(hit, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_expired_entry_misses() {
        let cache = TtlCache::new(Duration::from_millis(0));
        cache.set("k", &1u32);
        std::thread::sleep(Duration::from_millis(5));

        let hit: Option<u32> = cache.get("k");
        assert_eq!(hit, None);
    }

    #[test]
    fn test_invalidate_prefix() {
        let cache = TtlCache::with_default_ttl();
        cache.set("tariffs-page-1", &1u32);
        cache.set("tariffs-page-2", &2u32);
        cache.set("payer-types", &3u32);

        cache.invalidate_prefix("tariffs-");

        assert_eq!(cache.get::<u32>("tariffs-page-1"), None);
        assert_eq!(cache.get::<u32>("tariffs-page-2"), None);
        assert_eq!(cache.get::<u32>("payer-types"), Some(3));
    }

    #[test]
    fn test_wrong_type_misses_safely() {
        let cache = TtlCache::with_default_ttl();
        cache.set("k", &"text");
        let hit: Option<u32> = cache.get("k");
        assert_eq!(hit, None);
    }
}
