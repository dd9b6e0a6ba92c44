//! In-process document store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use super::{DocumentStore, Record, RecordId, StoreError, StoreResult};

/// `DocumentStore` backed by a `HashMap` behind an async `RwLock`.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    records: RwLock<HashMap<RecordId, Record>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get(&self, id: RecordId) -> StoreResult<Record> {
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, data: Value) -> StoreResult<Record> {
        let record = Record {
            id: RecordId::new(),
            data,
            created_at: Utc::now(),
        };
        self.records.write().await.insert(record.id, record.clone());
        debug!("Record created -> {}", record.id);
        Ok(record)
    }

    async fn update(&self, id: RecordId, data: Value) -> StoreResult<Record> {
        let mut records = self.records.write().await;
        let record = records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        record.data = data;
        Ok(record.clone())
    }

    async fn list(&self) -> StoreResult<Vec<Record>> {
        let mut all: Vec<Record> = self.records.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }
}
