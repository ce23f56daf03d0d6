//! City Lookup - A caching front for a geocoding API
//!
//! Turns free-text city queries into ranked location candidates, serving
//! repeat and partial queries from memory with TTL staleness and
//! stale-on-failure fallback.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod geocode;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{normalize_key, LocationCache, PreloadReport};
pub use config::Config;
pub use geocode::{GeocodeError, Geocoder, LocationCandidate, OpenWeatherGeocoder};
pub use tasks::spawn_preload_task;
