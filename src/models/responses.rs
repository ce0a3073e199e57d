//! Response DTOs for the proxy API
//!
//! Defines the structure of outgoing HTTP response bodies other than the
//! proxied upstream payloads, which are passed through untouched.

use std::time::Duration;

use serde::Serialize;

use crate::models::TimeFormat;

/// One live entry in the cache listing.
#[derive(Debug, Clone, Serialize)]
pub struct CacheDetail {
    /// The cached id
    pub videoid: String,
    /// Remaining lifetime, human-readable
    #[serde(rename = "remainingTime")]
    pub remaining_time: String,
    /// Remaining lifetime in milliseconds
    #[serde(rename = "remainingTTL_ms")]
    pub remaining_ttl_ms: u64,
}

impl CacheDetail {
    pub fn new(videoid: impl Into<String>, remaining: Duration, format: TimeFormat) -> Self {
        Self {
            videoid: videoid.into(),
            remaining_time: format.render(remaining),
            remaining_ttl_ms: remaining.as_millis() as u64,
        }
    }
}

/// Response body for GET /api/cache
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheListingResponse {
    /// Number of live entries listed
    pub total_cached_items: usize,
    pub cache_details: Vec<CacheDetail>,
}

impl CacheListingResponse {
    pub fn new(cache_details: Vec<CacheDetail>) -> Self {
        Self {
            total_cached_items: cache_details.len(),
            cache_details,
        }
    }
}

/// Response body for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
