//! Configuration Module
//!
//! Handles loading service configuration from environment variables.

use std::env;

/// Public OpenWeatherMap host used when no API URL is configured
pub const DEFAULT_API_URL: &str = "https://api.openweathermap.org";

/// Last-resort API key for local development
pub const DEFAULT_API_KEY: &str = "demo";

/// 7 days
pub const DEFAULT_CACHE_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Geocoding API base URL
    pub api_url: String,
    /// Geocoding API key forwarded on every lookup
    pub api_key: String,
    /// Freshness window for cached lookups, in seconds
    pub cache_ttl_secs: u64,
    /// Maximum number of cached cities, 0 for unbounded
    pub max_entries: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Geocoding request timeout in seconds
    pub request_timeout_secs: u64,
    /// Warm the cache with popular cities at startup
    pub preload_on_start: bool,
    /// Re-run the preload every N seconds, 0 to preload once
    pub preload_interval_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `WEATHER_API_URL`, then `APP_API_URL` - API base URL (default: OpenWeatherMap)
    /// - `WEATHER_API_KEY`, then `APP_API_KEY` - API key (default: `demo`)
    /// - `CACHE_TTL_SECS` - Cache freshness window (default: 604800)
    /// - `MAX_ENTRIES` - Maximum cached cities, 0 = unbounded (default: 0)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `REQUEST_TIMEOUT_SECS` - Geocoding timeout (default: 10)
    /// - `PRELOAD_ON_START` - Preload popular cities (default: true)
    /// - `PRELOAD_INTERVAL_SECS` - Preload refresh interval, 0 = once (default: 0)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: first_non_empty(&["WEATHER_API_URL", "APP_API_URL"])
                .unwrap_or(defaults.api_url),
            api_key: first_non_empty(&["WEATHER_API_KEY", "APP_API_KEY"])
                .unwrap_or(defaults.api_key),
            cache_ttl_secs: parse_var("CACHE_TTL_SECS").unwrap_or(defaults.cache_ttl_secs),
            max_entries: parse_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout_secs),
            preload_on_start: parse_var("PRELOAD_ON_START").unwrap_or(defaults.preload_on_start),
            preload_interval_secs: parse_var("PRELOAD_INTERVAL_SECS")
                .unwrap_or(defaults.preload_interval_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            max_entries: 0,
            server_port: 3000,
            request_timeout_secs: 10,
            preload_on_start: true,
            preload_interval_secs: 0,
        }
    }
}

/// Value of the first variable in `names` that is set and non-empty.
fn first_non_empty(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
