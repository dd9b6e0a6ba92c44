//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `GET /caches` - List live cache keys
//! - `POST /caches` - Create a document
//! - `GET /caches/:key` - Read a document
//! - `PUT /caches/:key` - Update a document
//! - `DELETE /caches/:key` - Delete a key
//! - `DELETE /caches/bulk/:keys` - Delete many keys
//! - `GET /stats` - Get cache statistics
//! - `GET /health-check` - Health check endpoint

pub mod extract;
pub mod handlers;
pub mod routes;

pub use extract::LoadedKey;
pub use handlers::*;
pub use routes::create_router;
