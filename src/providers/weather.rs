//! Open-Meteo forecast client.
//!
//! Free endpoint, no API key. A failed request or malformed payload
//! degrades to an all-unknown reading; the pipeline never sees an
//! error from here.

use serde::Deserialize;
use std::time::Duration;

use crate::error::Result;

const OPEN_METEO_URL: &str = "https://api.open-meteo.com";

/// Current conditions and daily extremes for one location. Every field
/// may be absent when the provider failed or omitted it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherReading {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub cloud_cover: Option<f64>,
    pub precipitation: Option<f64>,
    pub temp_max: Option<f64>,
    pub temp_min: Option<f64>,
}

impl WeatherReading {
    /// Reading with every field unknown, used when the provider fails.
    pub fn unknown() -> Self {
        Self::default()
    }
}

// --- Open-Meteo JSON response types ---

#[derive(Debug, Deserialize)]
struct MeteoResponse {
    current: Option<MeteoCurrent>,
    daily: Option<MeteoDaily>,
}

#[derive(Debug, Deserialize)]
struct MeteoCurrent {
    temperature_2m: Option<f64>,
    relative_humidity_2m: Option<f64>,
    wind_speed_10m: Option<f64>,
    cloud_cover: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct MeteoDaily {
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_sum: Vec<Option<f64>>,
}

fn first(values: &[Option<f64>]) -> Option<f64> {
    values.first().copied().flatten()
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: OPEN_METEO_URL.to_string(),
        })
    }

    /// Point the client at a different host (tests).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Fetch current conditions and today's extremes. Total: any
    /// failure is logged and reported as an all-unknown reading.
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> WeatherReading {
        let url = format!("{}/v1/forecast", self.base_url);
        let request = self.client.get(&url).query(&[
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            (
                "current",
                "temperature_2m,relative_humidity_2m,wind_speed_10m,cloud_cover".to_string(),
            ),
            (
                "daily",
                "temperature_2m_max,temperature_2m_min,precipitation_sum".to_string(),
            ),
            ("timezone", "Asia/Kolkata".to_string()),
        ]);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("weather request failed for ({latitude}, {longitude}): {e}");
                return WeatherReading::unknown();
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                "weather provider returned HTTP {} for ({latitude}, {longitude})",
                response.status()
            );
            return WeatherReading::unknown();
        }

        let payload: MeteoResponse = match response.json().await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("weather payload parse error: {e}");
                return WeatherReading::unknown();
            }
        };

        let current = payload.current.unwrap_or(MeteoCurrent {
            temperature_2m: None,
            relative_humidity_2m: None,
            wind_speed_10m: None,
            cloud_cover: None,
        });

        let (temp_max, temp_min, precipitation) = match payload.daily {
            Some(daily) => (
                first(&daily.temperature_2m_max),
                first(&daily.temperature_2m_min),
                first(&daily.precipitation_sum),
            ),
            None => (None, None, None),
        };

        WeatherReading {
            temperature: current.temperature_2m,
            humidity: current.relative_humidity_2m,
            wind_speed: current.wind_speed_10m,
            cloud_cover: current.cloud_cover,
            precipitation,
            temp_max,
            temp_min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> WeatherClient {
        WeatherClient::new(Duration::from_secs(2))
            .unwrap()
            .with_base_url(&server.uri())
    }

    #[tokio::test]
    async fn test_fetch_complete_reading() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "current": {
                    "temperature_2m": 31.4,
                    "relative_humidity_2m": 64.0,
                    "wind_speed_10m": 11.2,
                    "cloud_cover": 40.0
                },
                "daily": {
                    "temperature_2m_max": [34.9],
                    "temperature_2m_min": [27.1],
                    "precipitation_sum": [0.4]
                }
            })))
            .mount(&server)
            .await;

        let reading = test_client(&server).fetch(19.08, 72.88).await;

        assert_eq!(reading.temperature, Some(31.4));
        assert_eq!(reading.wind_speed, Some(11.2));
        assert_eq!(reading.temp_max, Some(34.9));
        assert_eq!(reading.temp_min, Some(27.1));
        assert_eq!(reading.precipitation, Some(0.4));
    }

    #[tokio::test]
    async fn test_partial_payload_degrades_per_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "current": { "temperature_2m": 28.0 }
            })))
            .mount(&server)
            .await;

        let reading = test_client(&server).fetch(19.08, 72.88).await;

        assert_eq!(reading.temperature, Some(28.0));
        assert_eq!(reading.wind_speed, None);
        assert_eq!(reading.temp_max, None);
    }

    #[tokio::test]
    async fn test_server_error_yields_unknown() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let reading = test_client(&server).fetch(19.08, 72.88).await;
        assert_eq!(reading, WeatherReading::unknown());
    }
}
