//! OpenWeatherMap direct geocoding client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{GeocodeError, Geocoder, LocationCandidate, GEOCODE_RESULT_LIMIT};

const DIRECT_GEOCODING_PATH: &str = "/geo/1.0/direct";

/// Calls `GET {base_url}/geo/1.0/direct?q=..&limit=5&appid=..`.
#[derive(Debug, Clone)]
pub struct OpenWeatherGeocoder {
    client: Client,
    base_url: String,
}

impl OpenWeatherGeocoder {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GeocodeError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, DIRECT_GEOCODING_PATH)
    }
}

#[async_trait]
impl Geocoder for OpenWeatherGeocoder {
    async fn geocode(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<Vec<LocationCandidate>, GeocodeError> {
        let limit = GEOCODE_RESULT_LIMIT.to_string();
        let response = self
            .client
            .get(self.endpoint())
            .query(&[("q", city), ("limit", limit.as_str()), ("appid", api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status.as_u16()));
        }

        // Read as bytes so a bad body surfaces as a parse error, not a transport one
        let body = response.bytes().await?;
        let candidates: Vec<LocationCandidate> = serde_json::from_slice(&body)?;

        tracing::debug!("Geocoded '{}' to {} candidates", city, candidates.len());
        Ok(candidates)
    }
}
