//! Request Mediator
//!
//! Sits between the HTTP handlers and the two storage layers. Reads are
//! answered from the cache engine; writes go to the durable store first and
//! are only cached once the store has accepted them.

use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::cache::{CacheEngine, CachedDocument};
use crate::error::{CacheError, Result};
use crate::keygen::KeyGenerator;
use crate::store::DocumentStore;

// == Loaded Entry ==
/// A cache key together with the document it resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedEntry {
    pub key: String,
    pub document: CachedDocument,
}

// == Cache Service ==
pub struct CacheService {
    cache: Arc<CacheEngine>,
    store: Arc<dyn DocumentStore>,
    keys: Arc<dyn KeyGenerator>,
    /// Held across the store write and the cache write of an update
    update_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl CacheService {
    pub fn new(
        cache: Arc<CacheEngine>,
        store: Arc<dyn DocumentStore>,
        keys: Arc<dyn KeyGenerator>,
    ) -> Self {
        Self {
            cache,
            store,
            keys,
            update_locks: DashMap::new(),
        }
    }

    /// The engine this service reads from and writes to.
    pub fn cache(&self) -> &Arc<CacheEngine> {
        &self.cache
    }

    // == Load ==
    /// Resolves `key` against the cache.
    ///
    /// A hit refreshes the entry's TTL. A miss never consults the durable
    /// store: a fresh key and placeholder document are allocated, cached and
    /// returned in place of the requested key.
    pub fn load(&self, key: &str) -> LoadedEntry {
        if let Some(document) = self.cache.get(key) {
            return LoadedEntry {
                key: key.to_string(),
                document,
            };
        }

        let new_key = self.keys.key();
        let document = CachedDocument::Placeholder(Value::String(self.keys.placeholder()));
        self.cache.set(new_key.clone(), document.clone());
        debug!("Placeholder allocated -> {} (requested {})", new_key, key);

        LoadedEntry {
            key: new_key,
            document,
        }
    }

    // == Create ==
    /// Persists `data`, then caches the saved record under a new key.
    ///
    /// Nothing is cached if the store rejects the write.
    pub async fn create(&self, data: Value) -> Result<LoadedEntry> {
        let record = self.store.create(data).await?;

        let key = self.keys.key();
        let document = CachedDocument::Stored(record);
        self.cache.set(key.clone(), document.clone());
        debug!("Cache populated on create -> {}", key);

        Ok(LoadedEntry { key, document })
    }

    // == Update ==
    /// Replaces the `data` of the document cached under `key`.
    ///
    /// The durable record is updated first; on success the cache entry under
    /// the same key is overwritten and its TTL reset. Updates to one key run
    /// one at a time, so the cache ends up holding the last write the store
    /// accepted. A key that is not cached, or holds a placeholder, has no
    /// durable record and yields `NotFound` without allocating anything.
    pub async fn update(&self, key: &str, data: Value) -> Result<LoadedEntry> {
        let lock = Arc::clone(self.update_locks.entry(key.to_string()).or_default().value());
        let result = {
            let _guard = lock.lock().await;
            self.update_locked(key, data).await
        };

        drop(lock);
        self.update_locks
            .remove_if(key, |_, lock| Arc::strong_count(lock) == 1);

        result
    }

    async fn update_locked(&self, key: &str, data: Value) -> Result<LoadedEntry> {
        let record_id = self
            .cache
            .get(key)
            .and_then(|document| document.record_id())
            .ok_or_else(|| CacheError::NotFound(format!("No such cache exists: {}", key)))?;

        let record = self.store.update(record_id, data).await?;

        let document = CachedDocument::Stored(record);
        self.cache.set(key, document.clone());

        Ok(LoadedEntry {
            key: key.to_string(),
            document,
        })
    }

    // == Remove ==
    /// Drops `key` from the cache. The durable store is not touched.
    pub fn remove(&self, key: &str) -> bool {
        self.cache.delete(key)
    }

    // == Bulk Delete ==
    /// Drops every key in a comma-separated list from the cache.
    ///
    /// Empty segments are ignored. Returns the number of entries removed.
    pub fn bulk_delete(&self, keys: &str) -> usize {
        let count = self
            .cache
            .bulk_delete(keys.split(',').filter(|key| !key.is_empty()));
        info!("Cache deleted -> {}", count);
        count
    }

    // == List ==
    /// All live cache keys.
    pub fn list(&self) -> Vec<String> {
        self.cache.keys()
    }
}
