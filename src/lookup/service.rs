//! Lookup Service
//!
//! Serves ids from the cache and falls back to upstream on a miss.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::result::{generic_upstream_error, LookupResult};
use crate::cache::CacheStore;
use crate::error::{ProxyError, Result};
use crate::upstream::UpstreamClient;

/// Cache shared by every request for the lifetime of the process.
pub type SharedCache = Arc<RwLock<CacheStore<Value>>>;

/// Read-through cache in front of the upstream client.
///
/// Concurrent misses for the same id are not coalesced: each one fetches
/// and the last write wins.
#[derive(Clone)]
pub struct LookupService {
    cache: SharedCache,
    upstream: UpstreamClient,
}

impl LookupService {
    pub fn new(cache: SharedCache, upstream: UpstreamClient) -> Self {
        Self { cache, upstream }
    }

    /// Resolves `id`, fetching and caching it on a miss.
    ///
    /// Returns `Err` only when upstream reports success with a body that is
    /// not JSON.
    pub async fn lookup(&self, id: &str) -> Result<LookupResult> {
        if let Some(value) = self.cached(id).await {
            info!(id, "cache hit");
            return Ok(LookupResult::Hit(value));
        }

        info!(id, "cache miss, fetching upstream");
        let response = match self.upstream.fetch(id).await {
            Ok(response) => response,
            Err(e) => {
                error!(id, error = %e, "upstream transport failure");
                return Ok(LookupResult::TransportError(e.to_string()));
            }
        };

        if !response.is_success() {
            warn!(id, status = %response.status, "upstream returned error status");
            let body: Value = serde_json::from_slice(&response.body)
                .unwrap_or_else(|_| generic_upstream_error());
            return Ok(LookupResult::UpstreamError {
                status: response.status,
                body,
            });
        }

        let value: Value = serde_json::from_slice(&response.body).map_err(|e| {
            ProxyError::Internal(format!("upstream body for {id} is not JSON: {e}"))
        })?;

        self.cache.write().await.set(id, value.clone());
        Ok(LookupResult::FetchedOk(value))
    }

    /// Reads `id` from the cache. Takes the write lock only when reads
    /// mutate entries.
    async fn cached(&self, id: &str) -> Option<Value> {
        {
            let cache = self.cache.read().await;
            if !cache.tracks_access() {
                return cache.peek(id);
            }
        }
        self.cache.write().await.get(id)
    }
}
