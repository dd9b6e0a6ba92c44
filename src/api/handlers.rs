//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::extract::LoadedKey;
use crate::cache::CacheEngine;
use crate::error::{CacheError, Result};
use crate::keygen::UuidKeyGenerator;
use crate::models::{CacheResponse, DataRequest, HealthResponse, StatsResponse};
use crate::service::CacheService;
use crate::store::MemoryDocumentStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Mediator over the cache engine and the durable store
    pub service: Arc<CacheService>,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: CacheService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Wires a cache engine with the configured TTL and check period to an
    /// in-process document store and UUID keys.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let cache = Arc::new(CacheEngine::from_config(config));
        Self::new(CacheService::new(
            cache,
            Arc::new(MemoryDocumentStore::new()),
            Arc::new(UuidKeyGenerator),
        ))
    }

    /// The cache engine behind the service.
    pub fn cache(&self) -> Arc<CacheEngine> {
        Arc::clone(self.service.cache())
    }
}

/// Handler for GET /caches
///
/// Lists every live cache key.
pub async fn list_handler(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.service.list())
}

/// Handler for POST /caches
///
/// Persists `data` and caches it under a newly generated key.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(req): Json<DataRequest>,
) -> Result<Json<CacheResponse>> {
    let data = req.validate().map_err(CacheError::InvalidRequest)?;
    let created = state.service.create(data).await?;

    Ok(Json(created.into()))
}

/// Handler for GET /caches/:key
///
/// Returns the cached document, or a placeholder under a new key on a miss.
pub async fn get_handler(LoadedKey(entry): LoadedKey) -> Json<CacheResponse> {
    Json(entry.into())
}

/// Handler for PUT /caches/:key
///
/// Persists the new `data` for a cached record and refreshes the cache.
/// The body is checked before the key is looked up.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(req): Json<DataRequest>,
) -> Result<Json<CacheResponse>> {
    let data = req.validate().map_err(CacheError::InvalidRequest)?;
    let updated = state.service.update(&key, data).await?;

    Ok(Json(updated.into()))
}

/// Handler for DELETE /caches/:key
///
/// Removes the key from the cache only.
pub async fn delete_handler(State(state): State<AppState>, Path(key): Path<String>) -> StatusCode {
    state.service.remove(&key);
    StatusCode::OK
}

/// Handler for DELETE /caches/bulk/:keys
///
/// Removes every key in the comma-separated list from the cache.
pub async fn bulk_delete_handler(
    State(state): State<AppState>,
    Path(keys): Path<String>,
) -> StatusCode {
    state.service.bulk_delete(&keys);
    StatusCode::OK
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.service.cache().stats().into())
}

/// Handler for GET /health-check
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;

    fn state() -> AppState {
        AppState::from_config(&Config::default())
    }

    fn body(data: serde_json::Value) -> Json<DataRequest> {
        Json(DataRequest { data: Some(data) })
    }

    #[tokio::test]
    async fn test_create_and_get_handler() {
        let state = state();

        let created = create_handler(State(state.clone()), body(json!({"name": "x"})))
            .await
            .unwrap();
        assert!(!created.key.is_empty());
        assert_eq!(created.data, json!({"name": "x"}));

        let loaded = state.service.load(&created.key);
        let response = get_handler(LoadedKey(loaded)).await;
        assert_eq!(response.key, created.key);
        assert_eq!(response.data, json!({"name": "x"}));
    }

    #[tokio::test]
    async fn test_create_without_data() {
        let state = state();

        let result = create_handler(State(state.clone()), Json(DataRequest { data: None })).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
        assert!(state.service.list().is_empty());
    }

    #[tokio::test]
    async fn test_update_handler() {
        let state = state();
        let created = create_handler(State(state.clone()), body(json!({"a": 1})))
            .await
            .unwrap();

        let updated = update_handler(
            State(state.clone()),
            Path(created.key.clone()),
            body(json!({"a": 2})),
        )
        .await
        .unwrap();

        assert_eq!(updated.key, created.key);
        assert_eq!(updated.data, json!({"a": 2}));
    }

    #[tokio::test]
    async fn test_update_handler_rejects_before_lookup() {
        let state = state();

        let missing = update_handler(
            State(state.clone()),
            Path("unknown".to_string()),
            Json(DataRequest { data: None }),
        )
        .await;
        assert!(matches!(missing, Err(CacheError::InvalidRequest(_))));

        let unknown = update_handler(State(state.clone()), Path("unknown".to_string()), body(json!(1))).await;
        assert!(matches!(unknown, Err(CacheError::NotFound(_))));

        assert!(state.service.list().is_empty());
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let state = state();
        let created = create_handler(State(state.clone()), body(json!(1)))
            .await
            .unwrap();

        let status = delete_handler(State(state.clone()), Path(created.key.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert!(state.service.list().is_empty());

        // Deleting again is still OK
        let status = delete_handler(State(state.clone()), Path(created.key.clone())).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_bulk_delete_handler() {
        let state = state();
        let created = create_handler(State(state.clone()), body(json!(1)))
            .await
            .unwrap();

        let keys = format!("1,2,3,{}", created.key);
        let status = bulk_delete_handler(State(state.clone()), Path(keys)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(state.service.list().is_empty());
    }

    #[tokio::test]
    async fn test_list_handler() {
        let state = state();
        let created = create_handler(State(state.clone()), body(json!(1)))
            .await
            .unwrap();

        let keys = list_handler(State(state)).await;
        assert_eq!(keys.0, vec![created.key.clone()]);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = state();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
