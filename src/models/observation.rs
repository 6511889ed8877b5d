use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{CollectError, Result};
use crate::models::City;

/// Everything observed or looked up for one city before estimation.
///
/// Any observed field may be absent when the upstream provider failed.
/// Absence is a first-class value here, never a NaN marker: estimators
/// substitute their documented defaults at the point of use.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CityObservation {
    #[validate(length(min = 1))]
    pub name: String,

    pub state: String,

    #[validate(range(min = 1, max = 2))]
    pub tier: u8,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    // Current conditions (°C, %, km/h, %, mm)
    pub temperature: Option<f64>,
    pub temp_max: Option<f64>,
    pub temp_min: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub cloud_cover: Option<f64>,
    pub precipitation: Option<f64>,

    pub elevation: Option<f64>,
    pub aqi: Option<f64>,

    // Demographics (census lookup, always present via defaults)
    pub population: f64,
    pub area_km2: f64,
}

impl CityObservation {
    pub fn builder(city: &City) -> CityObservationBuilder {
        CityObservationBuilder::new(city)
    }

    /// People per km². Zero area yields zero density rather than a
    /// division blow-up.
    pub fn population_density(&self) -> f64 {
        if self.area_km2 > 0.0 {
            self.population / self.area_km2
        } else {
            0.0
        }
    }

    pub fn has_weather_data(&self) -> bool {
        self.temperature.is_some()
            || self.temp_max.is_some()
            || self.temp_min.is_some()
            || self.wind_speed.is_some()
            || self.cloud_cover.is_some()
    }

    /// Identity check: a record can only be computed for a city with a
    /// name and in-range coordinates.
    pub fn validate_identity(&self) -> Result<()> {
        self.validate()
            .map_err(|e| CollectError::InvalidCity(format!("{}: {}", self.name, e)))
    }
}

pub struct CityObservationBuilder {
    observation: CityObservation,
}

impl CityObservationBuilder {
    pub fn new(city: &City) -> Self {
        Self {
            observation: CityObservation {
                name: city.name.clone(),
                state: city.state.clone(),
                tier: city.tier,
                latitude: city.latitude,
                longitude: city.longitude,
                temperature: None,
                temp_max: None,
                temp_min: None,
                humidity: None,
                wind_speed: None,
                cloud_cover: None,
                precipitation: None,
                elevation: None,
                aqi: None,
                population: 0.0,
                area_km2: 0.0,
            },
        }
    }

    pub fn temperature(mut self, temp: Option<f64>) -> Self {
        self.observation.temperature = temp;
        self
    }

    pub fn temp_range(mut self, temp_max: Option<f64>, temp_min: Option<f64>) -> Self {
        self.observation.temp_max = temp_max;
        self.observation.temp_min = temp_min;
        self
    }

    pub fn humidity(mut self, humidity: Option<f64>) -> Self {
        self.observation.humidity = humidity;
        self
    }

    pub fn wind_speed(mut self, wind_speed: Option<f64>) -> Self {
        self.observation.wind_speed = wind_speed;
        self
    }

    pub fn cloud_cover(mut self, cloud_cover: Option<f64>) -> Self {
        self.observation.cloud_cover = cloud_cover;
        self
    }

    pub fn precipitation(mut self, precipitation: Option<f64>) -> Self {
        self.observation.precipitation = precipitation;
        self
    }

    pub fn elevation(mut self, elevation: Option<f64>) -> Self {
        self.observation.elevation = elevation;
        self
    }

    pub fn aqi(mut self, aqi: Option<f64>) -> Self {
        self.observation.aqi = aqi;
        self
    }

    pub fn demographics(mut self, population: f64, area_km2: f64) -> Self {
        self.observation.population = population;
        self.observation.area_km2 = area_km2;
        self
    }

    pub fn build(self) -> CityObservation {
        self.observation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_city() -> City {
        City::new("Mumbai", "Maharashtra", 1, 19.08, 72.88)
    }

    #[test]
    fn test_builder_defaults_to_unknown() {
        let obs = CityObservation::builder(&test_city()).build();

        assert_eq!(obs.name, "Mumbai");
        assert!(obs.temperature.is_none());
        assert!(obs.wind_speed.is_none());
        assert!(!obs.has_weather_data());
    }

    #[test]
    fn test_population_density() {
        let obs = CityObservation::builder(&test_city())
            .demographics(20_411_000.0, 603.0)
            .build();

        assert!((obs.population_density() - 33_849.0).abs() < 1.0);
    }

    #[test]
    fn test_zero_area_density() {
        let obs = CityObservation::builder(&test_city())
            .demographics(1_000_000.0, 0.0)
            .build();

        assert_eq!(obs.population_density(), 0.0);
    }

    #[test]
    fn test_identity_validation() {
        let mut obs = CityObservation::builder(&test_city()).build();
        assert!(obs.validate_identity().is_ok());

        obs.name = String::new();
        assert!(obs.validate_identity().is_err());

        let mut obs = CityObservation::builder(&test_city()).build();
        obs.latitude = 123.0;
        assert!(obs.validate_identity().is_err());
    }
}
