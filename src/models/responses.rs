//! Response DTOs for the lookup service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::geocode::LocationCandidate;

/// Response body for city lookups and suggestions
/// (GET /cities/:name, GET /suggestions)
#[derive(Debug, Clone, Serialize)]
pub struct LocationsResponse {
    /// The query as received
    pub query: String,
    /// Number of candidates returned
    pub count: usize,
    /// Candidates in ranking order
    pub locations: Vec<LocationCandidate>,
}

impl LocationsResponse {
    pub fn new(query: impl Into<String>, locations: Vec<LocationCandidate>) -> Self {
        Self {
            query: query.into(),
            count: locations.len(),
            locations,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub fetches: u64,
    pub fetch_failures: u64,
    pub fallbacks: u64,
    pub evictions: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Freshness window in seconds
    pub ttl_secs: u64,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, ttl_ms: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            fetches: stats.fetches,
            fetch_failures: stats.fetch_failures,
            fallbacks: stats.fallbacks,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            ttl_secs: ttl_ms / 1000,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
