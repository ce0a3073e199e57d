//! Cache Entry Module
//!
//! Defines a single cache entry and its age arithmetic.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with value and timing metadata.
///
/// The TTL is owned by the store and applied uniformly, so the entry only
/// remembers when it was inserted.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// When the entry was inserted (or its age last reset)
    pub inserted_at: Instant,
    /// When the entry was last read under a touching access policy
    pub last_accessed_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped at `now`.
    pub fn new(value: V, now: Instant) -> Self {
        Self {
            value,
            inserted_at: now,
            last_accessed_at: now,
        }
    }

    // == Age ==
    /// Time elapsed since insertion, saturating at zero for instants before it.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.inserted_at)
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl` at `now`.
    ///
    /// Boundary condition: once the age reaches the TTL exactly, the entry is
    /// expired. This keeps `is_expired_at` and `remaining_at` in agreement.
    pub fn is_expired_at(&self, ttl: Duration, now: Instant) -> bool {
        self.age_at(now) >= ttl
    }

    // == Remaining TTL ==
    /// Returns the remaining lifetime, or None once the entry has expired.
    pub fn remaining_at(&self, ttl: Duration, now: Instant) -> Option<Duration> {
        ttl.checked_sub(self.age_at(now)).filter(|d| !d.is_zero())
    }
}
