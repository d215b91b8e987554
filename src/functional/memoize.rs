//! Concurrent memoization cache
//!
//! Backs every `memoized()` wrapper in this crate. Entries are computed at most
//! once per key, even under concurrent callers: a lookup first takes a shared
//! read on the key's shard and only falls back to the shard's entry lock when
//! the key is absent. The computation runs while that entry is held, so any
//! other caller for the same key waits for it instead of computing again.
//!
//! The cache is unbounded and lives exactly as long as the wrapper that owns it.
//!
//! The entry lock is the shard's write lock. While one key computes, lookups
//! of every other key hashed to the same shard block until it finishes. For
//! slow computations raise [`MemoConfig::shard_amount`] so keys spread over
//! more shards.
//!
//! A computation must not call back into the same cache for a key on the same
//! shard; doing so deadlocks.

use crate::config::MemoConfig;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of a cache's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

impl CacheStats {
    /// Fraction of lookups answered from the cache, `0.0` when nothing was looked up.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Compute-if-absent map keyed by the memoized input.
pub struct MemoCache<K, V> {
    map: DashMap<K, V>,
    shard_amount: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K: Eq + Hash, V: Clone> MemoCache<K, V> {
    pub fn new() -> Self {
        Self::with_config(MemoConfig::default())
    }

    pub fn with_config(config: MemoConfig) -> Self {
        Self {
            map: DashMap::with_capacity_and_shard_amount(
                config.initial_capacity,
                config.shard_amount,
            ),
            shard_amount: config.shard_amount,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns the cached value for `key`, computing and storing it first if absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdas::functional::memoize::MemoCache;
    ///
    /// let cache: MemoCache<u32, u64> = MemoCache::new();
    /// assert_eq!(cache.get_or_insert_with(3, || 6), 6);
    /// assert_eq!(cache.get_or_insert_with(3, || unreachable!()), 6);
    /// assert_eq!(cache.stats().misses, 1);
    /// ```
    pub fn get_or_insert_with<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(cached) = self.map.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return cached.value().clone();
        }

        match self.map.entry(key) {
            Entry::Occupied(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                entry.get().clone()
            }
            Entry::Vacant(entry) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                log::trace!("memo cache miss, computing value");
                let value = compute();
                entry.insert(value).value().clone()
            }
        }
    }

    /// Fallible variant of [`MemoCache::get_or_insert_with`].
    ///
    /// A failed computation stores nothing; the next call for the same key
    /// computes again.
    pub fn get_or_try_insert_with<E, F>(&self, key: K, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(cached) = self.map.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(cached.value().clone());
        }

        match self.map.entry(key) {
            Entry::Occupied(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Ok(entry.get().clone())
            }
            Entry::Vacant(entry) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                log::trace!("memo cache miss, computing fallible value");
                let value = compute()?;
                Ok(entry.insert(value).value().clone())
            }
        }
    }

    /// The cached value for `key`, if any. Does not touch the counters.
    pub fn get(&self, key: &K) -> Option<V> {
        self.map.get(key).map(|cached| cached.value().clone())
    }

    /// Number of independently locked shards.
    pub fn shard_amount(&self) -> usize {
        self.shard_amount
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Drops every entry. Counters are kept.
    pub fn clear(&self) {
        log::debug!("clearing memo cache with {} entries", self.map.len());
        self.map.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.map.len(),
        }
    }
}

impl<K: Eq + Hash, V: Clone> Default for MemoCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V: Clone> fmt::Debug for MemoCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoCache")
            .field("shard_amount", &self.shard_amount)
            .field("stats", &self.stats())
            .finish()
    }
}
