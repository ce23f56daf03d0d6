//! Cache Module
//!
//! City-lookup caching: normalized keys, TTL staleness with stale-on-failure
//! fallback, substring suggestions and bulk preload.

mod entry;
mod location_cache;
mod lru;
mod popular;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use location_cache::{Clock, LocationCache, PreloadReport};
pub use lru::LruTracker;
pub use popular::POPULAR_CITIES;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default time-to-live for a cached lookup: 7 days in milliseconds
pub const DEFAULT_TTL_MS: u64 = 7 * 24 * 60 * 60 * 1000;

/// Maximum candidates returned by a partial-match suggestion
pub const MAX_SUGGESTIONS: usize = 5;

/// Suggestions for inputs shorter than this (after trimming) are always empty
pub const MIN_SUGGESTION_INPUT_CHARS: usize = 2;

// == Key Normalization ==
/// Derives the cache key for a raw city query: lower-cased, then trimmed.
pub fn normalize_key(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}
