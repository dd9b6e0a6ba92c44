//! Parameter binding for `:key` routes
//!
//! Resolves the path key through the cache before the handler runs, so
//! the read handler receives an already-loaded entry.

use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequestParts, Path},
    http::request::Parts,
};

use super::handlers::AppState;
use crate::error::CacheError;
use crate::service::LoadedEntry;

/// The entry a `:key` path parameter resolved to.
///
/// On a cache miss this holds a freshly allocated placeholder under a new
/// key, not the requested one.
#[derive(Debug)]
pub struct LoadedKey(pub LoadedEntry);

#[async_trait]
impl FromRequestParts<AppState> for LoadedKey {
    type Rejection = CacheError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Path(key) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| match rejection {
                PathRejection::MissingPathParams(err) => CacheError::Internal(err.body_text()),
                other => CacheError::InvalidRequest(other.body_text()),
            })?;

        Ok(Self(state.service.load(&key)))
    }
}
