//! API Handlers
//!
//! HTTP request handlers for each lookup service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::cache::{LocationCache, PreloadReport};
use crate::error::{LookupError, Result};
use crate::models::{
    validate_query, HealthResponse, LocationsResponse, StatsResponse, SuggestionQuery,
};

/// Application state shared across all handlers.
///
/// The cache synchronizes internally, so it is shared behind a plain `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// City lookup cache
    pub cache: Arc<LocationCache>,
    /// API key forwarded to the geocoder
    pub api_key: Arc<str>,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: Arc<LocationCache>, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            cache,
            api_key: api_key.into(),
        }
    }
}

/// Handler for GET /cities/:name
///
/// Full lookup: fresh cache entry, else geocoder, else stale entry, else empty.
pub async fn city_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<LocationsResponse>> {
    if let Some(error_msg) = validate_query(&name) {
        return Err(LookupError::InvalidRequest(error_msg));
    }

    let locations = state.cache.fetch_city_data(&name, &state.api_key).await;
    Ok(Json(LocationsResponse::new(name, locations)))
}

/// Handler for GET /suggestions?q=...
///
/// Typeahead lookup served from whatever is cached when possible.
pub async fn suggestions_handler(
    State(state): State<AppState>,
    Query(query): Query<SuggestionQuery>,
) -> Result<Json<LocationsResponse>> {
    if let Some(error_msg) = validate_query(&query.q) {
        return Err(LookupError::InvalidRequest(error_msg));
    }

    let locations = state.cache.get_city_suggestions(&query.q, &state.api_key).await;
    Ok(Json(LocationsResponse::new(query.q, locations)))
}

/// Handler for POST /preload
///
/// Warms the cache with the popular city list and waits for it to settle.
pub async fn preload_handler(State(state): State<AppState>) -> Json<PreloadReport> {
    Json(state.cache.preload_popular_cities(&state.api_key).await)
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;
    Json(StatsResponse::new(&stats, state.cache.ttl_ms()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::{GeocodeError, Geocoder, LocationCandidate};
    use async_trait::async_trait;

    struct EchoGeocoder;

    #[async_trait]
    impl Geocoder for EchoGeocoder {
        async fn geocode(
            &self,
            city: &str,
            _api_key: &str,
        ) -> std::result::Result<Vec<LocationCandidate>, GeocodeError> {
            Ok(vec![LocationCandidate::new(city, "XX", 0.0, 0.0)])
        }
    }

    fn test_state() -> AppState {
        AppState::new(Arc::new(LocationCache::new(Arc::new(EchoGeocoder))), "test-key")
    }

    #[tokio::test]
    async fn test_city_handler() {
        let state = test_state();

        let response = city_handler(State(state.clone()), Path("Oslo".to_string()))
            .await
            .unwrap();

        assert_eq!(response.query, "Oslo");
        assert_eq!(response.count, 1);
        assert_eq!(response.locations[0].name, "oslo");
        assert_eq!(state.cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_city_handler_rejects_long_name() {
        let result = city_handler(State(test_state()), Path("x".repeat(300))).await;
        assert!(matches!(result, Err(LookupError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_suggestions_handler_short_input() {
        let state = test_state();

        let response = suggestions_handler(
            State(state.clone()),
            Query(SuggestionQuery { q: "o".to_string() }),
        )
        .await
        .unwrap();

        assert_eq!(response.count, 0);
        assert!(state.cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_preload_handler() {
        let state = test_state();

        let report = preload_handler(State(state.clone())).await;

        assert_eq!(report.cached, report.distinct);
        assert_eq!(state.cache.len().await, report.distinct);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let response = stats_handler(State(test_state())).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
        assert_eq!(response.ttl_secs, 604_800);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
