//! Error types for the cache server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;
use crate::store::StoreError;

// == Cache Error Enum ==
/// Unified error type for the cache service and its HTTP surface.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Requested durable record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The in-memory map could not serve the operation
    #[error("Internal cache error: {0}")]
    Internal(String),

    /// The durable store call failed
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl From<StoreError> for CacheError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => CacheError::NotFound(format!("No such record exists: {}", id)),
            other => CacheError::Persistence(other.to_string()),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            CacheError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            CacheError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            CacheError::Internal(msg) => {
                error!("Internal cache error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal cache error".to_string(),
                )
            }
            CacheError::Persistence(msg) => {
                // Store details stay in the log.
                error!("Persistence failure: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;
