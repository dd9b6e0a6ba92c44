//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with sliding TTL.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::cache::CachedDocument;

// == Cache Entry ==
/// Represents a single cache entry with value and expiry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored document
    pub value: CachedDocument,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` from now.
    ///
    /// `Duration::MAX` saturates to an entry that never expires.
    pub fn new(value: CachedDocument, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: current_timestamp_ms().saturating_add(duration_ms(ttl)),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at the given clock reading.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to the expiration time.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }

    // == Refresh ==
    /// Pushes the expiry out to `now_ms + ttl`.
    pub fn refresh_at(&mut self, now_ms: u64, ttl: Duration) {
        self.expires_at = now_ms.saturating_add(duration_ms(ttl));
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn duration_ms(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX)
}
