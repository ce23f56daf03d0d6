//! Popular City Preload Task
//!
//! Background task that warms the lookup cache so the first keystrokes in
//! the search box hit cached data.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::LocationCache;

/// Spawns a task that preloads the popular city list.
///
/// The first run starts immediately. With a non-zero `interval_secs` the
/// preload repeats on that interval, refreshing whatever has gone stale;
/// with `0` the task finishes after the first run.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(LocationCache::new(geocoder));
/// let preload_handle = spawn_preload_task(cache.clone(), api_key, 0);
/// // Later, during shutdown:
/// preload_handle.abort();
/// ```
pub fn spawn_preload_task(
    cache: Arc<LocationCache>,
    api_key: Arc<str>,
    interval_secs: u64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if interval_secs == 0 {
            info!("Starting one-shot popular city preload");
        } else {
            info!(
                "Starting popular city preload task with interval of {} seconds",
                interval_secs
            );
        }

        loop {
            let report = cache.preload_popular_cities(&api_key).await;
            debug!(
                "Preload run: {} requested, {} distinct, {} cached",
                report.requested, report.distinct, report.cached
            );

            if interval_secs == 0 {
                break;
            }
            tokio::time::sleep(Duration::from_secs(interval_secs)).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::POPULAR_CITIES;
    use crate::geocode::{GeocodeError, Geocoder, LocationCandidate};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

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

    #[tokio::test]
    async fn test_one_shot_preload_populates_cache() {
        let cache = Arc::new(LocationCache::new(Arc::new(CountingGeocoder::default())));

        let handle = spawn_preload_task(cache.clone(), Arc::from("key"), 0);
        handle.await.unwrap();

        for city in POPULAR_CITIES {
            assert!(cache.entry(city).await.is_some(), "missing {}", city);
        }
    }

    #[tokio::test]
    async fn test_interval_preload_refreshes_stale_entries() {
        let geocoder = Arc::new(CountingGeocoder::default());
        // Zero TTL: every run refetches
        let cache = Arc::new(LocationCache::new(geocoder.clone()).with_ttl_ms(0));

        let handle = spawn_preload_task(cache.clone(), Arc::from("key"), 1);
        tokio::time::sleep(Duration::from_millis(1500)).await;
        handle.abort();

        let distinct = cache.len().await;
        assert!(geocoder.calls.load(Ordering::SeqCst) >= distinct * 2);
    }

    #[tokio::test]
    async fn test_preload_task_can_be_aborted() {
        let cache = Arc::new(LocationCache::new(Arc::new(CountingGeocoder::default())));

        let handle = spawn_preload_task(cache, Arc::from("key"), 3600);
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
