//! Cache Module
//!
//! Provides the in-memory document cache with sliding TTL expiration.

mod document;
mod engine;
mod entry;
mod stats;


// Re-export public types
pub use document::CachedDocument;
pub use engine::CacheEngine;
pub use entry::CacheEntry;
pub use stats::{CacheStats, StatsCounters};
