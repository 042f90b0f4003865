use reqwest::Client;
use std::time::Duration;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::geocode::models::ReverseGeocodeResult;

pub struct GeocodeClient {
    http_client: Client,
    base_url: String,
}

impl GeocodeClient {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        // Nominatim's usage policy requires an identifying User-Agent.
        let http_client = Client::builder()
            .user_agent(config.geocoding_user_agent.clone())
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            base_url: config.geocoding_base_url.clone(),
        }
    }

    /// Reverse geocode a coordinate pair to an address.
    ///
    /// Returns `Ok(None)` when the server knows no address for the location.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Geocoding` if the request fails or returns an error
    /// status.
    pub async fn reverse(&self, lat: f64, lon: f64) -> AppResult<Option<ReverseGeocodeResult>> {
        let url = format!(
            "{}/reverse?format=jsonv2&lat={lat}&lon={lon}",
            self.base_url
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Geocoding(format!("Request failed: {e}")))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(AppError::Geocoding(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        // Nominatim reports "unable to geocode" as a 200 with an error member.
        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::Geocoding(format!("Failed to parse response: {e}")))?;

        if value.get("error").is_some() {
            return Ok(None);
        }

        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| AppError::Geocoding(format!("Failed to parse response: {e}")))
    }
}
