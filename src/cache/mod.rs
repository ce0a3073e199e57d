//! Cache Module
//!
//! Provides an in-memory cache bounded by entry count with a uniform TTL.

use std::time::Duration;

mod entry;
mod lru;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::RecencyOrder;
pub use store::CacheStore;

// == Public Constants ==
/// Default maximum number of entries
pub const DEFAULT_MAX_ENTRIES: usize = 500;

/// Default entry lifetime
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

// == Cache Options ==
/// Capacity, lifetime and access policy of a store.
#[derive(Debug, Clone, Copy)]
pub struct CacheOptions {
    /// Maximum number of distinct keys held at once
    pub max_entries: usize,
    /// Lifetime applied to every entry at insertion
    pub ttl: Duration,
    /// Move a key to the front of the eviction order when it is read
    pub touch_on_get: bool,
    /// Restart an entry's lifetime when it is read
    pub update_age_on_get: bool,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            ttl: DEFAULT_TTL,
            touch_on_get: false,
            update_age_on_get: false,
        }
    }
}
