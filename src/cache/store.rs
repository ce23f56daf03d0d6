//! Cache Store Module
//!
//! Synchronous storage engine behind the lookup cache: keyed entries,
//! insertion-ordered key iteration, an optional LRU bound and statistics.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats, LruTracker};
use crate::geocode::LocationCandidate;

// == Cache Store ==
/// Normalized-key storage for geocoding snapshots.
///
/// Key iteration follows first-insertion order: replacing an entry keeps the
/// key where it was, so substring scans return older cities first.
#[derive(Debug)]
pub struct CacheStore {
    /// Entries by normalized key
    entries: HashMap<String, CacheEntry>,
    /// Keys in first-insertion order
    order: Vec<String>,
    /// LRU access tracker, only consulted when bounded
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries, `0` for unbounded
    max_entries: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a store holding at most `max_entries` keys (`0` = unbounded).
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries,
        }
    }

    /// Creates a store that never evicts.
    pub fn unbounded() -> Self {
        Self::new(0)
    }

    pub fn is_bounded(&self) -> bool {
        self.max_entries > 0
    }

    // == Get ==
    /// Looks up an entry by normalized key and marks it as used.
    ///
    /// Freshness is the caller's concern: stale entries are returned as-is.
    pub fn get(&mut self, key: &str) -> Option<&CacheEntry> {
        if self.entries.contains_key(key) {
            self.lru.touch(key);
        }
        self.entries.get(key)
    }

    // == Peek ==
    /// Looks up an entry without touching LRU state.
    pub fn peek(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    // == Insert ==
    /// Stores an entry, replacing any previous entry under the same key.
    ///
    /// When bounded and full, the least recently used key is evicted first.
    pub fn insert(&mut self, entry: CacheEntry) {
        let key = entry.key.clone();

        if !self.entries.contains_key(&key) {
            if self.is_bounded() && self.entries.len() >= self.max_entries {
                self.evict_one();
            }
            self.order.push(key.clone());
        }

        self.entries.insert(key.clone(), entry);
        self.lru.touch(&key);
        self.stats.set_total_entries(self.entries.len());
    }

    fn evict_one(&mut self) {
        if let Some(evicted) = self.lru.evict_oldest() {
            self.entries.remove(&evicted);
            self.order.retain(|k| k != &evicted);
            self.stats.record_eviction();
            tracing::debug!("Evicted least recently used city '{}'", evicted);
        }
    }

    // == Substring Matches ==
    /// Concatenates the candidates of every key containing `needle`, scanning
    /// keys in insertion order, and truncates the result to `limit`.
    pub fn collect_substring_matches(
        &mut self,
        needle: &str,
        limit: usize,
    ) -> Vec<LocationCandidate> {
        let mut matches = Vec::new();
        let mut matched_keys = Vec::new();

        for key in &self.order {
            if matches.len() >= limit {
                break;
            }
            if !key.contains(needle) {
                continue;
            }
            if let Some(entry) = self.entries.get(key) {
                matches.extend(entry.data.iter().cloned());
                matched_keys.push(key.clone());
            }
        }

        for key in &matched_keys {
            self.lru.touch(key);
        }

        matches.truncate(limit);
        matches
    }

    // == Keys ==
    /// Iterates keys in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Mutable access for the lookup layer, which owns hit/miss semantics.
    pub fn stats_mut(&mut self) -> &mut CacheStats {
        &mut self.stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::unbounded()
    }
}
