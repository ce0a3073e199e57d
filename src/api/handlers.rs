//! API Handlers
//!
//! HTTP request handlers for each proxy endpoint.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::Result;
use crate::lookup::{LookupResult, LookupService, SharedCache};
use crate::models::{CacheDetail, CacheListingResponse, HealthResponse, TimeFormat};
use crate::upstream::UpstreamClient;

/// Application state shared across all handlers.
///
/// Built once at startup; the cache inside lives for the whole process.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide cache, also held by `lookup`
    pub cache: SharedCache,
    pub lookup: LookupService,
    pub time_format: TimeFormat,
}

impl AppState {
    /// Creates a new AppState around `cache` and `upstream`.
    pub fn new(cache: CacheStore<Value>, upstream: UpstreamClient) -> Self {
        let cache = Arc::new(RwLock::new(cache));
        Self {
            lookup: LookupService::new(cache.clone(), upstream),
            cache,
            time_format: TimeFormat::default(),
        }
    }

    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let cache = CacheStore::with_options(config.cache_options());
        let upstream = UpstreamClient::new(config.upstream_base_url.clone());
        Self::new(cache, upstream).with_time_format(config.time_format)
    }
}

/// Handler for GET /dl/:id
///
/// Returns the cached or freshly fetched upstream JSON. Upstream error
/// statuses are forwarded with their body.
pub async fn lookup_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<LookupResult> {
    state.lookup.lookup(&id).await
}

/// Handler for GET /api/cache
///
/// Lists entries that still have lifetime left. Expired entries still held
/// by the store are skipped here.
pub async fn cache_listing_handler(State(state): State<AppState>) -> Json<CacheListingResponse> {
    let cache = state.cache.read().await;
    let now = Instant::now();

    let details = cache
        .keys()
        .into_iter()
        .filter_map(|key| {
            cache
                .remaining_ttl_at(&key, now)
                .map(|remaining| CacheDetail::new(key, remaining, state.time_format))
        })
        .collect();

    Json(CacheListingResponse::new(details))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
