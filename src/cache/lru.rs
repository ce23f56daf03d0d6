//! LRU Tracker Module
//!
//! Least-recently-used bookkeeping for the optional entry bound.

use std::collections::HashMap;

// == LRU Tracker ==
/// Tracks the last use of every cached city key with a logical clock.
///
/// Touching is O(1); eviction scans for the smallest tick, which is fine for
/// the few hundred keys a city cache holds.
#[derive(Debug, Default)]
pub struct LruTracker {
    /// Last-use tick per key
    ticks: HashMap<String, u64>,
    /// Monotonic logical clock, bumped on every touch
    clock: u64,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as just used, inserting it if unknown.
    pub fn touch(&mut self, key: &str) {
        self.clock += 1;
        match self.ticks.get_mut(key) {
            Some(tick) => *tick = self.clock,
            None => {
                self.ticks.insert(key.to_string(), self.clock);
            }
        }
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&str> {
        self.ticks
            .iter()
            .min_by_key(|(_, tick)| **tick)
            .map(|(key, _)| key.as_str())
    }

    // == Evict Oldest ==
    /// Removes and returns the least recently used key.
    pub fn evict_oldest(&mut self) -> Option<String> {
        let oldest = self.peek_oldest()?.to_string();
        self.ticks.remove(&oldest);
        Some(oldest)
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}
