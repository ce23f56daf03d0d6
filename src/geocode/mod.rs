//! Geocode Module
//!
//! The injected fetch capability behind the lookup cache and the
//! OpenWeatherMap-backed implementation used in production.

mod client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use client::OpenWeatherGeocoder;

/// Number of candidates requested per geocoding call
pub const GEOCODE_RESULT_LIMIT: usize = 5;

// == Location Candidate ==
/// A place returned by the geocoding service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationCandidate {
    /// Display name of the place
    pub name: String,
    /// ISO 3166 country code
    pub country: String,
    /// Administrative subdivision, when the service knows one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl LocationCandidate {
    pub fn new(name: impl Into<String>, country: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            state: None,
            lat,
            lon,
        }
    }
}

// == Geocode Error ==
/// Ways a geocoding call can fail. All of them are recovered by the cache.
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// Connection, TLS or timeout failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status
    #[error("geocoding API responded with status: {0}")]
    Status(u16),

    /// The body was not a JSON array of candidates
    #[error("malformed geocoding response: {0}")]
    Parse(#[from] serde_json::Error),
}

// == Geocoder ==
/// Resolves a normalized city name to ranked candidates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<Vec<LocationCandidate>, GeocodeError>;
}
