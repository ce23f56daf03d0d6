//! Location Cache Module
//!
//! The lookup layer callers talk to. Serves fresh entries without I/O,
//! refetches stale or missing ones through the injected [`Geocoder`], and
//! degrades to stale data or an empty list when the geocoder fails.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{
    current_timestamp_ms, normalize_key, CacheEntry, CacheStats, CacheStore, DEFAULT_TTL_MS,
    MAX_SUGGESTIONS, MIN_SUGGESTION_INPUT_CHARS, POPULAR_CITIES,
};
use crate::config::Config;
use crate::geocode::{Geocoder, LocationCandidate};

/// Source of "now" in Unix milliseconds.
pub type Clock = Arc<dyn Fn() -> u64 + Send + Sync>;

// == Preload Report ==
/// Outcome of a preload run. Carries counts only, never location data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreloadReport {
    /// Cities in the preload list, repeats included
    pub requested: usize,
    /// Distinct normalized keys in the list
    pub distinct: usize,
    /// Distinct keys holding an entry once every fetch settled
    pub cached: usize,
    pub elapsed_ms: u64,
}

// == Location Cache ==
/// City lookup cache over a pluggable geocoder.
///
/// Every operation is total: geocoder failures are logged and absorbed, and
/// callers always get a (possibly empty) candidate list back.
///
/// Concurrent misses on the same key are not coalesced. Each one fetches and
/// the last response to arrive replaces the entry.
pub struct LocationCache {
    store: RwLock<CacheStore>,
    geocoder: Arc<dyn Geocoder>,
    ttl_ms: u64,
    clock: Clock,
}

impl LocationCache {
    // == Constructor ==
    /// Creates an empty, unbounded cache with the 7 day TTL and the system clock.
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            store: RwLock::new(CacheStore::unbounded()),
            geocoder,
            ttl_ms: DEFAULT_TTL_MS,
            clock: Arc::new(current_timestamp_ms),
        }
    }

    /// Creates a cache with TTL and bound taken from configuration.
    pub fn from_config(config: &Config, geocoder: Arc<dyn Geocoder>) -> Self {
        Self::new(geocoder)
            .with_ttl_ms(config.cache_ttl_secs.saturating_mul(1000))
            .with_max_entries(config.max_entries)
    }

    pub fn with_ttl_ms(mut self, ttl_ms: u64) -> Self {
        self.ttl_ms = ttl_ms;
        self
    }

    /// Bounds the cache to `max_entries` keys with LRU eviction (`0` = unbounded).
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.store = RwLock::new(CacheStore::new(max_entries));
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    // == Fetch City Data ==
    /// Returns candidates for `city_name`, from cache when fresh.
    ///
    /// On a miss or a stale entry the geocoder is called with the normalized
    /// name. A successful response replaces the entry; a failure falls back to
    /// the entry seen when the lookup started (or a newer one written
    /// meanwhile), however old, or to an empty list.
    pub async fn fetch_city_data(
        &self,
        city_name: &str,
        api_key: &str,
    ) -> Vec<LocationCandidate> {
        let key = normalize_key(city_name);
        let now = (self.clock)();

        // Stale data seen at lookup time, kept in case a concurrent insert
        // evicts the key before the refetch settles
        let prior = {
            let mut store = self.store.write().await;
            let seen = store
                .get(&key)
                .map(|entry| (entry.is_fresh(now, self.ttl_ms), entry.data.clone()));

            let stats = store.stats_mut();
            match seen {
                Some((true, data)) => {
                    stats.record_hit();
                    debug!("Cache hit for city '{}'", key);
                    return data;
                }
                seen => {
                    stats.record_miss();
                    stats.record_fetch();
                    seen.map(|(_, data)| data)
                }
            }
        };

        // Lock released: other lookups proceed while the geocoder is in flight
        match self.geocoder.geocode(&key, api_key).await {
            Ok(data) => {
                let mut store = self.store.write().await;
                store.insert(CacheEntry::new(key, data.clone(), now));
                data
            }
            Err(e) => {
                warn!("Error fetching data for city \"{}\": {}", city_name, e);

                let mut store = self.store.write().await;
                let fallback = store.peek(&key).map(|entry| entry.data.clone()).or(prior);
                let stats = store.stats_mut();
                stats.record_fetch_failure();

                match fallback {
                    Some(data) => {
                        stats.record_fallback();
                        debug!("Serving cached data for '{}' after failed fetch", key);
                        data
                    }
                    None => Vec::new(),
                }
            }
        }
    }

    // == Get City Suggestions ==
    /// Returns suggestions for partially typed input.
    ///
    /// Inputs under two characters (after trimming) yield nothing. An exact key
    /// is served even when stale; otherwise up to five candidates are gathered
    /// from every cached key containing the input, oldest key first. Only when
    /// nothing matches does this fall back to [`fetch_city_data`](Self::fetch_city_data).
    pub async fn get_city_suggestions(
        &self,
        user_input: &str,
        api_key: &str,
    ) -> Vec<LocationCandidate> {
        if user_input.trim().chars().count() < MIN_SUGGESTION_INPUT_CHARS {
            return Vec::new();
        }

        let key = normalize_key(user_input);

        {
            let mut store = self.store.write().await;

            let exact = store.get(&key).map(|entry| entry.data.clone());
            if let Some(data) = exact {
                store.stats_mut().record_hit();
                return data;
            }

            let partial = store.collect_substring_matches(&key, MAX_SUGGESTIONS);
            if !partial.is_empty() {
                store.stats_mut().record_hit();
                debug!("Served {} cached suggestions for '{}'", partial.len(), key);
                return partial;
            }
        }

        self.fetch_city_data(user_input, api_key).await
    }

    // == Preload ==
    /// Warms the cache with [`POPULAR_CITIES`], all fetched concurrently.
    pub async fn preload_popular_cities(&self, api_key: &str) -> PreloadReport {
        self.preload(POPULAR_CITIES, api_key).await
    }

    /// Fetches every city concurrently and waits for all of them to settle.
    ///
    /// A failing city only affects its own entry.
    pub async fn preload<S: AsRef<str>>(&self, cities: &[S], api_key: &str) -> PreloadReport {
        let started = Instant::now();

        join_all(
            cities
                .iter()
                .map(|city| self.fetch_city_data(city.as_ref(), api_key)),
        )
        .await;

        let distinct: HashSet<String> = cities.iter().map(|c| normalize_key(c.as_ref())).collect();
        let cached = {
            let store = self.store.read().await;
            distinct.iter().filter(|key| store.contains(key)).count()
        };

        let report = PreloadReport {
            requested: cities.len(),
            distinct: distinct.len(),
            cached,
            elapsed_ms: started.elapsed().as_millis() as u64,
        };
        info!(
            "Popular cities preloaded into cache: {}/{} cities cached in {}ms",
            report.cached, report.distinct, report.elapsed_ms
        );
        report
    }

    // == Introspection ==
    /// Returns a copy of the entry stored for `city_name`, if any.
    pub async fn entry(&self, city_name: &str) -> Option<CacheEntry> {
        let store = self.store.read().await;
        store.peek(&normalize_key(city_name)).cloned()
    }

    /// Returns the cached keys in first-insertion order.
    pub async fn keys(&self) -> Vec<String> {
        let store = self.store.read().await;
        store.keys().map(str::to_string).collect()
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}
