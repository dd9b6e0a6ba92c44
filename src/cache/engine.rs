//! Cache Engine Module
//!
//! Concurrent key to document map with sliding TTL expiration.

use std::time::Duration;

use dashmap::DashMap;
use tracing::debug;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats, CachedDocument, StatsCounters};
use crate::config::Config;

// == Cache Engine ==
/// In-memory cache with per-entry expiry.
///
/// Entries live in a sharded [`DashMap`]. Every mutation of a key runs under
/// that key's shard guard, so a refresh on read and a sweep of the same key
/// cannot interleave, while unrelated keys on other shards never contend.
#[derive(Debug)]
pub struct CacheEngine {
    /// Key-document storage
    entries: DashMap<String, CacheEntry>,
    /// Performance statistics
    stats: StatsCounters,
    /// Lifetime granted on every write and every hit
    ttl: Duration,
    /// Interval between sweep passes
    check_period: Duration,
}

impl CacheEngine {
    // == Constructor ==
    /// Creates an empty engine.
    ///
    /// # Arguments
    /// * `ttl` - Lifetime of an entry since its last write or access
    /// * `check_period` - How often the sweep task should call [`evict_expired`](Self::evict_expired)
    pub fn new(ttl: Duration, check_period: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            stats: StatsCounters::new(),
            ttl,
            check_period,
        }
    }

    /// Creates an engine from the server configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.ttl_duration(), config.check_period_duration())
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn check_period(&self) -> Duration {
        self.check_period
    }

    // == Get ==
    /// Looks up a key and refreshes its TTL on a hit.
    ///
    /// An entry past its expiry that the sweep has not reached yet is
    /// removed here and reported as a miss.
    pub fn get(&self, key: &str) -> Option<CachedDocument> {
        let now = current_timestamp_ms();

        if let Some(mut entry) = self.entries.get_mut(key) {
            if !entry.is_expired_at(now) {
                entry.refresh_at(now, self.ttl);
                self.stats.record_hit();
                debug!("Cache hit -> {}", key);
                return Some(entry.value.clone());
            }
        }

        if self
            .entries
            .remove_if(key, |_, entry| entry.is_expired_at(now))
            .is_some()
        {
            self.stats.record_expired(1);
        }
        self.stats.record_miss();
        debug!("Cache miss -> {}", key);
        None
    }

    // == Set ==
    /// Stores a document under `key` with the engine's TTL.
    ///
    /// Any existing entry is replaced wholesale.
    pub fn set(&self, key: impl Into<String>, value: CachedDocument) {
        self.set_with_ttl(key, value, self.ttl);
    }

    /// Stores a document under `key` with an explicit TTL.
    pub fn set_with_ttl(&self, key: impl Into<String>, value: CachedDocument, ttl: Duration) {
        self.entries.insert(key.into(), CacheEntry::new(value, ttl));
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Returns whether an entry was present. Deleting an absent key is fine.
    pub fn delete(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Bulk Delete ==
    /// Removes every present key among `keys`, returning how many were removed.
    pub fn bulk_delete<I, S>(&self, keys: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter()
            .filter(|key| self.entries.remove(key.as_ref()).is_some())
            .count()
    }

    // == Keys ==
    /// Returns all live keys. Order is unspecified.
    pub fn keys(&self) -> Vec<String> {
        let now = current_timestamp_ms();
        self.entries
            .iter()
            .filter(|entry| !entry.value().is_expired_at(now))
            .map(|entry| entry.key().clone())
            .collect()
    }

    // == Evict Expired ==
    /// Removes all entries whose TTL has elapsed.
    ///
    /// Returns the number of entries removed.
    pub fn evict_expired(&self) -> usize {
        let now = current_timestamp_ms();
        let mut removed = 0;

        self.entries.retain(|_, entry| {
            let keep = !entry.is_expired_at(now);
            if !keep {
                removed += 1;
            }
            keep
        });

        self.stats.record_expired(removed as u64);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    // == Length ==
    /// Returns the current number of entries, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
