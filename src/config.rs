//! Configuration Module
//!
//! Handles loading and managing proxy configuration from environment variables.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::cache::{CacheOptions, DEFAULT_MAX_ENTRIES};
use crate::models::TimeFormat;
use crate::upstream::DEFAULT_UPSTREAM_BASE_URL;

/// Proxy configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Entry TTL in seconds
    pub cache_ttl: u64,
    /// HTTP listen port
    pub port: u16,
    /// Base URL the id is appended to
    pub upstream_base_url: String,
    /// Rendering of remaining lifetimes in `/api/cache`
    pub time_format: TimeFormat,
    /// Expired-entry purge interval in seconds, 0 = never purge
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 500)
    /// - `CACHE_TTL_SECS` - Entry TTL in seconds (default: 3600)
    /// - `PORT` - HTTP listen port (default: 3000)
    /// - `UPSTREAM_BASE_URL` - Upstream base URL
    /// - `REMAINING_TIME_FORMAT` - `ms` or `hms` (default: `ms`)
    /// - `CLEANUP_INTERVAL` - Purge frequency in seconds (default: 0, disabled)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_entries: parse_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            cache_ttl: parse_var("CACHE_TTL_SECS").unwrap_or(defaults.cache_ttl),
            port: parse_var("PORT").unwrap_or(defaults.port),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.upstream_base_url),
            time_format: parse_var("REMAINING_TIME_FORMAT").unwrap_or(defaults.time_format),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
        }
    }

    /// Cache options derived from this configuration.
    pub fn cache_options(&self) -> CacheOptions {
        CacheOptions {
            max_entries: self.max_entries,
            ttl: Duration::from_secs(self.cache_ttl),
            ..CacheOptions::default()
        }
    }
}

/// Reads and parses an environment variable.
///
/// Unset variables yield `None`. Invalid values are logged and also yield
/// `None`, so the caller's default applies.
fn parse_var<T>(name: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(var = name, value = %raw, error = %e, "ignoring invalid environment value");
            None
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            cache_ttl: 3600,
            port: 3000,
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            time_format: TimeFormat::MinutesSeconds,
            cleanup_interval: 0,
        }
    }
}
