//! Cached Document Module
//!
//! The value type held by every cache entry.

use serde_json::Value;

use crate::store::{Record, RecordId};

// == Cached Document ==
/// A document as the cache sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedDocument {
    /// Mirrors a record persisted in the durable store
    Stored(Record),
    /// Synthesized on a read miss; nothing durable behind it
    Placeholder(Value),
}

impl CachedDocument {
    /// The client-facing `data` payload.
    pub fn data(&self) -> &Value {
        match self {
            CachedDocument::Stored(record) => &record.data,
            CachedDocument::Placeholder(data) => data,
        }
    }

    /// Consumes the document, returning its payload.
    pub fn into_data(self) -> Value {
        match self {
            CachedDocument::Stored(record) => record.data,
            CachedDocument::Placeholder(data) => data,
        }
    }

    /// Identity of the durable record, if there is one.
    pub fn record_id(&self) -> Option<RecordId> {
        match self {
            CachedDocument::Stored(record) => Some(record.id),
            CachedDocument::Placeholder(_) => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, CachedDocument::Placeholder(_))
    }
}
