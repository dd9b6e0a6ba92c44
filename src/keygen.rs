//! Identifier Generator
//!
//! Produces opaque cache keys and placeholder tokens.

use uuid::Uuid;

/// Source of unique opaque strings.
pub trait KeyGenerator: Send + Sync {
    /// Returns a key that has never been handed out before.
    fn key(&self) -> String;

    /// Returns the payload stored for a synthesized entry.
    ///
    /// An opaque token; callers must not read meaning into it.
    fn placeholder(&self) -> String;
}

/// UUID v4 backed generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidKeyGenerator;

impl KeyGenerator for UuidKeyGenerator {
    fn key(&self) -> String {
        Uuid::new_v4().to_string()
    }

    /// First 8 hex digits of a fresh UUID.
    fn placeholder(&self) -> String {
        let mut simple = Uuid::new_v4().simple().to_string();
        simple.truncate(8);
        simple
    }
}
