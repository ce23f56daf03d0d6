//! Cache Entry Module
//!
//! Defines the geocoding result snapshot stored under each normalized city key.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::geocode::LocationCandidate;

// == Cache Entry ==
/// A geocoding result snapshot for one normalized city name.
///
/// Entries are never mutated in place; a successful refetch replaces the whole entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    /// Normalized city name (see [`normalize_key`](super::normalize_key))
    pub key: String,
    /// Candidates in the order the geocoding service ranked them
    pub data: Vec<LocationCandidate>,
    /// Fetch timestamp (Unix milliseconds)
    pub fetched_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry fetched at `fetched_at`.
    pub fn new(key: impl Into<String>, data: Vec<LocationCandidate>, fetched_at: u64) -> Self {
        Self {
            key: key.into(),
            data,
            fetched_at,
        }
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was fetched, saturating at zero
    /// when the clock is behind `fetched_at`.
    pub fn age_ms(&self, now: u64) -> u64 {
        now.saturating_sub(self.fetched_at)
    }

    // == Is Fresh ==
    /// Checks whether the entry may be served without refetching.
    ///
    /// Boundary condition: an entry whose age equals the TTL is already stale.
    pub fn is_fresh(&self, now: u64, ttl_ms: u64) -> bool {
        self.age_ms(now) < ttl_ms
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A clock set before the epoch reads as `0`, which only makes entries look older.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL: u64 = 1_000;

    fn entry_at(fetched_at: u64) -> CacheEntry {
        let data = vec![LocationCandidate::new("London", "GB", 51.5, -0.12)];
        CacheEntry::new("london", data, fetched_at)
    }

    #[test]
    fn test_entry_creation() {
        let entry = entry_at(42);

        assert_eq!(entry.key, "london");
        assert_eq!(entry.data.len(), 1);
        assert_eq!(entry.fetched_at, 42);
    }

    #[test]
    fn test_entry_fresh_within_ttl() {
        let entry = entry_at(10_000);

        assert!(entry.is_fresh(10_000, TTL));
        assert!(entry.is_fresh(10_999, TTL));
    }

    #[test]
    fn test_freshness_boundary_condition() {
        let entry = entry_at(10_000);

        // Age == TTL is stale
        assert!(!entry.is_fresh(11_000, TTL));
        assert!(!entry.is_fresh(11_001, TTL));
    }

    #[test]
    fn test_clock_behind_fetch_time_is_fresh() {
        let entry = entry_at(10_000);

        assert_eq!(entry.age_ms(9_000), 0);
        assert!(entry.is_fresh(9_000, TTL));
    }

    #[test]
    fn test_current_timestamp_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(current_timestamp_ms() > 1_577_836_800_000);
    }
}
