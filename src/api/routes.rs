//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    bulk_delete_handler, create_handler, delete_handler, get_handler, health_handler,
    list_handler, stats_handler, update_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /caches` - List live cache keys
/// - `POST /caches` - Persist and cache a new document
/// - `GET /caches/:key` - Read a document (allocates a placeholder on a miss)
/// - `PUT /caches/:key` - Update a loaded document
/// - `DELETE /caches/:key` - Drop a key from the cache
/// - `DELETE /caches/bulk/:keys` - Drop a comma-separated list of keys
/// - `GET /stats` - Cache statistics
/// - `GET /health-check` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/caches", get(list_handler).post(create_handler))
        .route(
            "/caches/:key",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .route("/caches/bulk/:keys", delete(bulk_delete_handler))
        .route("/stats", get(stats_handler))
        .route("/health-check", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
