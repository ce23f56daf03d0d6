//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check key normalization and lookup invariants over
//! generated city names.

use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::cache::{normalize_key, CacheEntry, CacheStore, LocationCache, MAX_SUGGESTIONS};
use crate::geocode::{GeocodeError, Geocoder, LocationCandidate};

const KEY: &str = "prop-key";

// == Test Geocoder ==
#[derive(Default)]
struct CountingGeocoder {
    calls: AtomicUsize,
}

#[async_trait]
impl Geocoder for CountingGeocoder {
    async fn geocode(
        &self,
        city: &str,
        _api_key: &str,
    ) -> Result<Vec<LocationCandidate>, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![LocationCandidate::new(city, "XX", 0.0, 0.0)])
    }
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

// == Strategies ==
/// Free text as typed into a search box, accented Latin letters included
fn raw_input_strategy() -> impl Strategy<Value = String> {
    "[ \\t\\na-zA-ZÀ-ÖØ-öø-þ'-]{0,40}"
}

/// Lower-case city names, at least two characters
fn city_strategy() -> impl Strategy<Value = String> {
    "[a-z]{2,12}( [a-z]{2,8})?"
}

/// Randomly re-cases a string and pads it with whitespace
fn disguise(city: &str, upper_mask: &[bool], left: usize, right: usize) -> String {
    let recased: String = city
        .chars()
        .zip(upper_mask.iter().cycle())
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
        .collect();
    format!("{}{}{}", " ".repeat(left), recased, "\t".repeat(right))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Normalizing twice equals normalizing once.
    #[test]
    fn prop_normalize_idempotent(raw in raw_input_strategy()) {
        let once = normalize_key(&raw);
        prop_assert_eq!(normalize_key(&once), once.clone());
        prop_assert_eq!(once.trim(), once.as_str());
    }

    // Case and surrounding whitespace never split a city into two entries.
    #[test]
    fn prop_case_whitespace_equivalence(
        city in city_strategy(),
        upper_mask in prop::collection::vec(any::<bool>(), 1..8),
        left in 0usize..4,
        right in 0usize..4,
    ) {
        let geocoder = Arc::new(CountingGeocoder::default());
        let cache = LocationCache::new(geocoder.clone());
        let disguised = disguise(&city, &upper_mask, left, right);

        let (first, second, len) = runtime().block_on(async {
            let first = cache.fetch_city_data(&disguised, KEY).await;
            let second = cache.fetch_city_data(&city, KEY).await;
            (first, second, cache.len().await)
        });

        prop_assert_eq!(first, second);
        prop_assert_eq!(geocoder.calls.load(Ordering::SeqCst), 1);
        prop_assert_eq!(len, 1);
    }

    // Inputs under two characters never touch the geocoder.
    #[test]
    fn prop_short_input_guard(
        input in "[ \\t]{0,3}[a-zA-Z]?[ \\t]{0,3}",
        api_key in "[a-z0-9]{0,16}",
    ) {
        let geocoder = Arc::new(CountingGeocoder::default());
        let cache = LocationCache::new(geocoder.clone());

        let result = runtime().block_on(cache.get_city_suggestions(&input, &api_key));

        prop_assert!(result.is_empty());
        prop_assert_eq!(geocoder.calls.load(Ordering::SeqCst), 0);
    }

    // Partial matches are the insertion-ordered concatenation, cut at five.
    #[test]
    fn prop_substring_matches_are_truncated_prefix(
        sizes in prop::collection::vec(0usize..4, 1..6),
        unrelated in 0usize..3,
    ) {
        let mut store = CacheStore::unbounded();
        let mut expected = Vec::new();

        for (i, size) in sizes.iter().enumerate() {
            let key = format!("port {}", i);
            let data: Vec<_> = (0..*size)
                .map(|j| LocationCandidate::new(format!("{}-{}", key, j), "XX", 0.0, 0.0))
                .collect();
            expected.extend(data.iter().cloned());
            store.insert(CacheEntry::new(key, data, 0));
        }
        for i in 0..unrelated {
            let data = vec![LocationCandidate::new("lake", "XX", 0.0, 0.0)];
            store.insert(CacheEntry::new(format!("lake {}", i), data, 0));
        }

        let matches = store.collect_substring_matches("port", MAX_SUGGESTIONS);
        expected.truncate(MAX_SUGGESTIONS);

        prop_assert!(matches.len() <= MAX_SUGGESTIONS);
        prop_assert_eq!(matches, expected);
    }

    // A bounded store never holds more than its bound.
    #[test]
    fn prop_bounded_store_respects_capacity(
        max_entries in 1usize..10,
        keys in prop::collection::vec(city_strategy(), 1..40),
    ) {
        let mut store = CacheStore::new(max_entries);

        for key in &keys {
            store.insert(CacheEntry::new(key.clone(), Vec::new(), 0));
            prop_assert!(store.len() <= max_entries);
        }

        let last = keys.last().unwrap();
        prop_assert!(store.contains(last), "Most recent insert must survive");
        prop_assert_eq!(store.keys().count(), store.len());
    }
}
