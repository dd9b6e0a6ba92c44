//! Write-Through Cache - A document cache in front of a durable store
//!
//! Provides an in-memory layer with sliding TTL expiration that absorbs
//! repeated reads, while every write is persisted before it is cached.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod keygen;
pub mod models;
pub mod service;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use service::CacheService;
pub use tasks::SweepTask;
