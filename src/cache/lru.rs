//! Recency Order Module
//!
//! Tracks the eviction order of cache keys.

use std::collections::VecDeque;

// == Recency Order ==
/// Eviction order for cache keys.
///
/// Keys are stored in a VecDeque where:
/// - Front = most recently inserted (or touched)
/// - Back = next eviction candidate
///
/// Whether reads move a key to the front is decided by the store's access
/// policy; the tracker only records what it is told.
#[derive(Debug, Default)]
pub struct RecencyOrder {
    order: VecDeque<String>,
}

impl RecencyOrder {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Moves `key` to the front, inserting it if it is not tracked yet.
    pub fn touch(&mut self, key: &str) {
        self.remove(key);
        self.order.push_front(key.to_string());
    }

    // == Remove ==
    /// Stops tracking `key`. Unknown keys are ignored.
    pub fn remove(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
        }
    }

    // == Pop Oldest ==
    /// Removes and returns the eviction candidate.
    pub fn pop_oldest(&mut self) -> Option<String> {
        self.order.pop_back()
    }

    // == Peek Oldest ==
    /// Returns the eviction candidate without removing it.
    #[cfg(test)]
    pub fn peek_oldest(&self) -> Option<&str> {
        self.order.back().map(String::as_str)
    }

    // == Iteration ==
    /// Iterates keys from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
