//! DL Cache Proxy - A caching reverse proxy for a single lookup API
//!
//! Serves upstream JSON responses from a bounded in-memory cache with a
//! uniform TTL, fetching from upstream on a miss.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod tasks;
pub mod upstream;

pub use api::{create_router, AppState};
pub use config::Config;
pub use lookup::{LookupResult, LookupService};
pub use tasks::spawn_cleanup_task;
