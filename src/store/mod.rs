//! Durable Store Module
//!
//! The canonical copy of every document lives behind [`DocumentStore`].
//! The cache only ever talks to this trait, so the backing service can be
//! swapped without touching the cache core.

mod memory;

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

pub use memory::MemoryDocumentStore;

// == Record Identity ==
/// Server-assigned identity of a durable record.
///
/// Never exposed as a cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Allocates a fresh record id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// == Record ==
/// A persisted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub data: Value,
    pub created_at: DateTime<Utc>,
}

// == Store Error ==
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record with this id
    #[error("record not found: {0}")]
    NotFound(RecordId),

    /// The backing service could not complete the call
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

// == Document Store ==
/// Opaque key to document persistence service.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetches a record by its id.
    async fn get(&self, id: RecordId) -> StoreResult<Record>;

    /// Persists a new record and returns it with its assigned identity.
    async fn create(&self, data: Value) -> StoreResult<Record>;

    /// Replaces the `data` field of an existing record.
    ///
    /// Identity and creation time are left unchanged.
    async fn update(&self, id: RecordId, data: Value) -> StoreResult<Record>;

    /// Lists all records, newest first.
    async fn list(&self) -> StoreResult<Vec<Record>>;
}
