//! In-memory cache backed by moka.
//!
//! `moka::sync::Cache` gives lock-free reads, concurrent writes and bounded
//! size with automatic eviction, so it satisfies the concurrent get/set
//! contract without extra locking.

use std::hash::Hash;
use std::time::Duration;

use moka::sync::Cache as MokaCache;

use super::traits::Cache;

/// Bounded in-memory cache.
///
/// Cloning is cheap and clones share the same storage.
pub struct MemoryCache<K, V> {
    cache: MokaCache<K, V>,
    max_entries: u64,
}

impl<K, V> Clone for MemoryCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            max_entries: self.max_entries,
        }
    }
}

impl<K, V> MemoryCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Create a new memory cache.
    ///
    /// # Arguments
    ///
    /// * `max_entries` - Maximum number of entries before eviction
    /// * `ttl` - Optional time-to-live for entries
    pub fn new(max_entries: u64, ttl: Option<Duration>) -> Self {
        let mut builder = MokaCache::builder().max_capacity(max_entries);

        if let Some(ttl) = ttl {
            builder = builder.time_to_live(ttl);
        }

        Self {
            cache: builder.build(),
            max_entries,
        }
    }

    /// Maximum number of entries.
    pub fn max_entries(&self) -> u64 {
        self.max_entries
    }

    /// Approximate number of entries.
    ///
    /// moka updates counters lazily; call [`run_pending_tasks`](Self::run_pending_tasks)
    /// first when an exact figure matters.
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Remove a single entry.
    pub fn invalidate(&self, key: &K) {
        self.cache.invalidate(key);
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }

    /// Run pending eviction and bookkeeping work.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl<K, V> Cache<K, V> for MemoryCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &K) -> Option<V> {
        self.cache.get(key)
    }

    fn set(&self, key: K, value: V) {
        self.cache.insert(key, value);
    }
}
