use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;
use crate::models::{CityObservation, LandCoverClass};

/// The secondary UHI factors derived for one city.
///
/// Every value is already clamped into its physical range by the
/// estimator that produced it; `UhiRecord::validate_ranges` re-checks
/// the same bounds when records are read back from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub urban_greenness_pct: f64,
    pub ndvi: f64,
    pub albedo: f64,
    pub impervious_surface_pct: f64,
    pub building_density: f64,
    pub distance_to_water_km: f64,
    pub solar_radiation: f64,
    pub traffic_density: f64,
    pub energy_consumption_mwh: f64,
    pub anthropogenic_heat_flux: f64,
    pub urban_sprawl_rate: f64,
    pub cooling_degree_days: f64,
    pub annual_rainfall_mm: f64,
    pub health_impact_per_100k: f64,
}

/// One complete dataset row: observation, land cover, derived metrics
/// and the composite UHI intensity. Assembled once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UhiRecord {
    pub city_name: String,
    pub state: String,
    pub tier: u8,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub elevation_m: f64,

    pub temperature_c: Option<f64>,
    pub temp_max_c: Option<f64>,
    pub temp_min_c: Option<f64>,

    #[validate(range(min = 0.5, max = 10.0))]
    pub uhi_intensity_c: f64,

    pub humidity_pct: Option<f64>,
    pub wind_speed_kmh: Option<f64>,
    pub cloud_cover_pct: Option<f64>,
    pub precipitation_mm: Option<f64>,

    #[validate(range(min = 0.0))]
    pub annual_rainfall_mm: f64,

    #[validate(range(min = 0.0))]
    pub cooling_degree_days: f64,

    pub land_cover: LandCoverClass,

    #[validate(range(min = 0.05, max = 0.85))]
    pub ndvi: f64,

    #[validate(range(min = 0.0, max = 100.0))]
    pub urban_greenness_pct: f64,

    #[validate(range(min = 0.05, max = 0.40))]
    pub albedo: f64,

    #[validate(range(min = 20.0, max = 90.0))]
    pub impervious_surface_pct: f64,

    #[validate(range(min = 100.0, max = 8000.0))]
    pub building_density: f64,

    #[validate(range(min = 0.0))]
    pub distance_to_water_km: f64,

    #[validate(range(min = 10.0, max = 30.0))]
    pub solar_radiation: f64,

    pub population: f64,
    pub population_density: f64,

    #[validate(range(min = 0.0))]
    pub energy_consumption_mwh: f64,

    #[validate(range(min = 100.0, max = 10000.0))]
    pub traffic_density: f64,

    #[validate(range(min = 5.0, max = 200.0))]
    pub anthropogenic_heat_flux: f64,

    #[validate(range(min = 1.0, max = 12.0))]
    pub urban_sprawl_rate: f64,

    pub aqi: Option<f64>,

    #[validate(range(min = 0.0))]
    pub health_impact_per_100k: f64,
}

impl UhiRecord {
    pub fn assemble(
        observation: &CityObservation,
        elevation_m: f64,
        land_cover: LandCoverClass,
        metrics: DerivedMetrics,
        uhi_intensity_c: f64,
    ) -> Self {
        Self {
            city_name: observation.name.clone(),
            state: observation.state.clone(),
            tier: observation.tier,
            latitude: observation.latitude,
            longitude: observation.longitude,
            elevation_m,
            temperature_c: observation.temperature,
            temp_max_c: observation.temp_max,
            temp_min_c: observation.temp_min,
            uhi_intensity_c,
            humidity_pct: observation.humidity,
            wind_speed_kmh: observation.wind_speed,
            cloud_cover_pct: observation.cloud_cover,
            precipitation_mm: observation.precipitation,
            annual_rainfall_mm: metrics.annual_rainfall_mm,
            cooling_degree_days: metrics.cooling_degree_days,
            land_cover,
            ndvi: metrics.ndvi,
            urban_greenness_pct: metrics.urban_greenness_pct,
            albedo: metrics.albedo,
            impervious_surface_pct: metrics.impervious_surface_pct,
            building_density: metrics.building_density,
            distance_to_water_km: metrics.distance_to_water_km,
            solar_radiation: metrics.solar_radiation,
            population: observation.population,
            population_density: observation.population_density(),
            energy_consumption_mwh: metrics.energy_consumption_mwh,
            traffic_density: metrics.traffic_density,
            anthropogenic_heat_flux: metrics.anthropogenic_heat_flux,
            urban_sprawl_rate: metrics.urban_sprawl_rate,
            aqi: observation.aqi,
            health_impact_per_100k: metrics.health_impact_per_100k,
        }
    }

    /// Check every derived metric against its physical clamp range.
    pub fn validate_ranges(&self) -> Result<()> {
        self.validate()?;
        Ok(())
    }

    pub fn has_temperature_data(&self) -> bool {
        self.temperature_c.is_some() || self.temp_max_c.is_some() || self.temp_min_c.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    fn sample_metrics() -> DerivedMetrics {
        DerivedMetrics {
            urban_greenness_pct: 18.0,
            ndvi: 0.21,
            albedo: 0.15,
            impervious_surface_pct: 72.0,
            building_density: 2500.0,
            distance_to_water_km: 2.0,
            solar_radiation: 22.0,
            traffic_density: 8000.0,
            energy_consumption_mwh: 24_000_000.0,
            anthropogenic_heat_flux: 120.0,
            urban_sprawl_rate: 6.5,
            cooling_degree_days: 12.0,
            annual_rainfall_mm: 2100.0,
            health_impact_per_100k: 40.0,
        }
    }

    #[test]
    fn test_assemble_carries_observation_fields() {
        let city = City::new("Mumbai", "Maharashtra", 1, 19.08, 72.88);
        let obs = CityObservation::builder(&city)
            .temperature(Some(31.5))
            .temp_range(Some(34.0), Some(27.0))
            .wind_speed(Some(12.0))
            .demographics(20_411_000.0, 603.0)
            .build();

        let record = UhiRecord::assemble(
            &obs,
            14.0,
            LandCoverClass::Urban,
            sample_metrics(),
            4.2,
        );

        assert_eq!(record.city_name, "Mumbai");
        assert_eq!(record.temperature_c, Some(31.5));
        assert_eq!(record.wind_speed_kmh, Some(12.0));
        assert_eq!(record.land_cover, LandCoverClass::Urban);
        assert!((record.population_density - obs.population_density()).abs() < f64::EPSILON);
        assert!(record.validate_ranges().is_ok());
    }

    #[test]
    fn test_out_of_range_metric_fails_validation() {
        let city = City::new("Mumbai", "Maharashtra", 1, 19.08, 72.88);
        let obs = CityObservation::builder(&city)
            .demographics(1_000_000.0, 200.0)
            .build();

        let mut record = UhiRecord::assemble(
            &obs,
            14.0,
            LandCoverClass::Urban,
            sample_metrics(),
            4.2,
        );
        record.ndvi = 0.99;

        assert!(record.validate_ranges().is_err());
    }
}
