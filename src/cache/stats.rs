//! Cache Statistics Module
//!
//! Counters for cache hits, geocoder traffic and degraded fallbacks.

use serde::Serialize;

// == Cache Stats ==
/// Tracks lookup-cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Lookups answered from the cache without a network call
    pub hits: u64,
    /// Lookups that had to go to the geocoder
    pub misses: u64,
    /// Geocoder calls issued
    pub fetches: u64,
    /// Geocoder calls that failed (transport, status or parse)
    pub fetch_failures: u64,
    /// Failed fetches answered with previously cached data
    pub fallbacks: u64,
    /// Entries evicted by the LRU bound
    pub evictions: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_fetch(&mut self) {
        self.fetches += 1;
    }

    pub fn record_fetch_failure(&mut self) {
        self.fetch_failures += 1;
    }

    pub fn record_fallback(&mut self) {
        self.fallbacks += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
