//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

/// Request body for create (POST /caches) and update (PUT /caches/:key)
///
/// # Fields
/// - `data`: The opaque document to store
#[derive(Debug, Clone, Deserialize)]
pub struct DataRequest {
    /// The document payload
    #[serde(default)]
    pub data: Option<Value>,
}

impl DataRequest {
    /// Checks that `data` is present.
    ///
    /// Returns the payload, or an error message if it is missing or null.
    pub fn validate(self) -> Result<Value, String> {
        match self.data {
            Some(Value::Null) | None => Err("\"data\" is required".to_string()),
            Some(data) => Ok(data),
        }
    }
}
