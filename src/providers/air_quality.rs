//! OpenAQ air-quality client with PM2.5 → AQI conversion.

use serde::Deserialize;
use std::time::Duration;

use crate::error::Result;

const OPENAQ_URL: &str = "https://api.openaq.org";

/// Simplified US-EPA PM2.5 breakpoint conversion. Values are truncated
/// to whole AQI points, matching the published breakpoint tables.
pub fn pm25_to_aqi(pm25: f64) -> f64 {
    let aqi = if pm25 <= 12.0 {
        (50.0 / 12.0) * pm25
    } else if pm25 <= 35.4 {
        50.0 + ((100.0 - 50.0) / (35.4 - 12.1)) * (pm25 - 12.1)
    } else if pm25 <= 55.4 {
        100.0 + ((150.0 - 100.0) / (55.4 - 35.5)) * (pm25 - 35.5)
    } else if pm25 <= 150.4 {
        150.0 + ((200.0 - 150.0) / (150.4 - 55.5)) * (pm25 - 55.5)
    } else if pm25 <= 250.4 {
        200.0 + ((300.0 - 200.0) / (250.4 - 150.5)) * (pm25 - 150.5)
    } else {
        300.0 + ((500.0 - 300.0) / (500.4 - 250.5)) * (pm25 - 250.5)
    };

    aqi.floor()
}

// --- OpenAQ JSON response types ---

#[derive(Debug, Deserialize)]
struct AqResponse {
    #[serde(default)]
    results: Vec<AqLocation>,
}

#[derive(Debug, Deserialize)]
struct AqLocation {
    #[serde(default)]
    measurements: Vec<AqMeasurement>,
}

#[derive(Debug, Deserialize)]
struct AqMeasurement {
    parameter: String,
    value: f64,
}

#[derive(Debug, Clone)]
pub struct AirQualityClient {
    client: reqwest::Client,
    base_url: String,
}

impl AirQualityClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: OPENAQ_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// AQI derived from the nearest station's PM2.5 reading within
    /// 50 km, or unknown on any failure or when no PM2.5 is reported.
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Option<f64> {
        let url = format!("{}/v2/latest", self.base_url);
        let request = self.client.get(&url).query(&[
            ("coordinates", format!("{},{}", latitude, longitude)),
            ("radius", "50000".to_string()),
            ("limit", "1".to_string()),
        ]);

        let response = match request.send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                tracing::warn!("air-quality provider returned HTTP {}", response.status());
                return None;
            }
            Err(e) => {
                tracing::warn!("air-quality request failed: {e}");
                return None;
            }
        };

        let payload: AqResponse = match response.json().await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("air-quality payload parse error: {e}");
                return None;
            }
        };

        let pm25 = payload
            .results
            .first()?
            .measurements
            .iter()
            .find(|m| m.parameter == "pm25")
            .map(|m| m.value)?;

        let aqi = pm25_to_aqi(pm25);
        if aqi > 0.0 {
            Some(aqi)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_pm25_breakpoints() {
        assert_eq!(pm25_to_aqi(0.0), 0.0);
        assert_eq!(pm25_to_aqi(12.0), 50.0);
        // Moderate band
        assert_eq!(pm25_to_aqi(24.0), 75.0);
        // Unhealthy-for-sensitive band starts above 35.4
        assert!(pm25_to_aqi(40.0) > 100.0);
        assert!(pm25_to_aqi(40.0) < 150.0);
        // Hazardous tail keeps rising
        assert!(pm25_to_aqi(300.0) > 300.0);
    }

    #[test]
    fn test_pm25_monotonic() {
        let mut last = -1.0;
        for step in 0..100 {
            let aqi = pm25_to_aqi(step as f64 * 4.0);
            assert!(aqi >= last);
            last = aqi;
        }
    }

    #[tokio::test]
    async fn test_fetch_pm25_station() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{
                    "measurements": [
                        { "parameter": "no2", "value": 30.0 },
                        { "parameter": "pm25", "value": 24.0 }
                    ]
                }]
            })))
            .mount(&server)
            .await;

        let client = AirQualityClient::new(Duration::from_secs(2))
            .unwrap()
            .with_base_url(&server.uri());

        assert_eq!(client.fetch(19.08, 72.88).await, Some(75.0));
    }

    #[tokio::test]
    async fn test_no_pm25_is_unknown() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{ "measurements": [{ "parameter": "o3", "value": 12.0 }] }]
            })))
            .mount(&server)
            .await;

        let client = AirQualityClient::new(Duration::from_secs(2))
            .unwrap()
            .with_base_url(&server.uri());

        assert_eq!(client.fetch(19.08, 72.88).await, None);
    }
}
