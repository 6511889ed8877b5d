//! Open-Elevation lookup client.

use serde::Deserialize;
use std::time::Duration;

use crate::error::Result;

const OPEN_ELEVATION_URL: &str = "https://api.open-elevation.com";

#[derive(Debug, Deserialize)]
struct ElevationResponse {
    results: Vec<ElevationResult>,
}

#[derive(Debug, Deserialize)]
struct ElevationResult {
    elevation: f64,
}

#[derive(Debug, Clone)]
pub struct ElevationClient {
    client: reqwest::Client,
    base_url: String,
}

impl ElevationClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: OPEN_ELEVATION_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Elevation in metres, or unknown on any failure.
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Option<f64> {
        let url = format!(
            "{}/api/v1/lookup?locations={},{}",
            self.base_url, latitude, longitude
        );

        let response = match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                tracing::warn!("elevation provider returned HTTP {}", response.status());
                return None;
            }
            Err(e) => {
                tracing::warn!("elevation request failed: {e}");
                return None;
            }
        };

        match response.json::<ElevationResponse>().await {
            Ok(payload) => payload.results.first().map(|r| r.elevation),
            Err(e) => {
                tracing::warn!("elevation payload parse error: {e}");
                None
            }
        }
    }
}
