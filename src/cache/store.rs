//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with a recency order and a
//! uniform TTL. Expiry is lazy: expired entries stay in place until they are
//! overwritten, evicted, deleted or purged, but are never returned as hits.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::{CacheEntry, CacheOptions, RecencyOrder};

// == Cache Store ==
/// Bounded cache with capacity eviction and TTL expiry.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Eviction order
    order: RecencyOrder,
    options: CacheOptions,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a store holding at most `max_entries` entries, each living `ttl`.
    ///
    /// Reads neither refresh recency nor reset age.
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self::with_options(CacheOptions {
            max_entries,
            ttl,
            ..CacheOptions::default()
        })
    }

    /// Creates a store with an explicit access policy.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_options(mut options: CacheOptions) -> Self {
        options.max_entries = options.max_entries.max(1);
        Self {
            entries: HashMap::with_capacity(options.max_entries),
            order: RecencyOrder::new(),
            options,
        }
    }

    // == Set ==
    /// Inserts or overwrites `key`, stamping it with the current time.
    ///
    /// If a new key would exceed capacity, the entry at the back of the
    /// recency order is evicted first.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        self.set_at(key, value, Instant::now());
    }

    pub fn set_at(&mut self, key: impl Into<String>, value: V, now: Instant) {
        let key = key.into();

        if !self.entries.contains_key(&key) && self.entries.len() >= self.options.max_entries {
            if let Some(evicted) = self.order.pop_oldest() {
                self.entries.remove(&evicted);
                debug!(key = %evicted, "evicted cache entry to stay within capacity");
            }
        }

        self.entries.insert(key.clone(), CacheEntry::new(value, now));
        self.order.touch(&key);
    }

    // == Get ==
    /// Returns the value for `key` if present and not expired, applying the
    /// configured access policy.
    pub fn get(&mut self, key: &str) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    pub fn get_at(&mut self, key: &str, now: Instant) -> Option<V> {
        let ttl = self.options.ttl;
        let entry = self
            .entries
            .get_mut(key)
            .filter(|entry| !entry.is_expired_at(ttl, now))?;

        if self.options.update_age_on_get {
            entry.inserted_at = now;
        }
        if self.options.touch_on_get {
            entry.last_accessed_at = now;
            self.order.touch(key);
        }
        Some(entry.value.clone())
    }

    // == Peek ==
    /// Read-only `get` that ignores the access policy.
    ///
    /// Equivalent to `get` when `tracks_access` is false, so shared readers
    /// can serve hits without exclusive access.
    pub fn peek(&self, key: &str) -> Option<V> {
        self.peek_at(key, Instant::now())
    }

    pub fn peek_at(&self, key: &str, now: Instant) -> Option<V> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(self.options.ttl, now))
            .map(|entry| entry.value.clone())
    }

    /// Whether reads change recency or age under the configured policy.
    pub fn tracks_access(&self) -> bool {
        self.options.touch_on_get || self.options.update_age_on_get
    }

    // == Contains ==
    /// Existence check that never alters recency or age.
    pub fn contains(&self, key: &str) -> bool {
        self.contains_at(key, Instant::now())
    }

    pub fn contains_at(&self, key: &str, now: Instant) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired_at(self.options.ttl, now))
    }

    // == Remaining TTL ==
    /// Returns how long `key` stays fresh, or None if absent or expired.
    pub fn remaining_ttl(&self, key: &str) -> Option<Duration> {
        self.remaining_ttl_at(key, Instant::now())
    }

    pub fn remaining_ttl_at(&self, key: &str, now: Instant) -> Option<Duration> {
        self.entries
            .get(key)
            .and_then(|entry| entry.remaining_at(self.options.ttl, now))
    }

    // == Keys ==
    /// Returns every physically present key, newest first.
    ///
    /// Expired entries that have not been purged are included; callers that
    /// need live keys must check `remaining_ttl`.
    pub fn keys(&self) -> Vec<String> {
        self.order.iter().map(str::to_string).collect()
    }

    // == Delete ==
    /// Removes `key`, returning whether it was present.
    pub fn delete(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.order.remove(key);
            true
        } else {
            false
        }
    }

    // == Purge Expired ==
    /// Physically removes all expired entries, returning how many were dropped.
    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    pub fn purge_expired_at(&mut self, now: Instant) -> usize {
        let ttl = self.options.ttl;
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(ttl, now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.entries.remove(key);
            self.order.remove(key);
        }

        expired.len()
    }

    pub fn ttl(&self) -> Duration {
        self.options.ttl
    }

    pub fn max_entries(&self) -> usize {
        self.options.max_entries
    }

    /// Number of physically present entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
