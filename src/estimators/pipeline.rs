//! Per-city estimation pipeline.
//!
//! Runs the primitive estimators in dependency order over one
//! `CityObservation` and assembles the complete `UhiRecord`. Unknown
//! observations degrade through per-estimator defaults; the only
//! failure path is a malformed city identity.

use crate::error::Result;
use crate::estimators::rng::JitterRng;
use crate::estimators::{activity, climate, geography, intensity, surface};
use crate::models::{CityObservation, DerivedMetrics, LandCoverClass, UhiRecord};

pub struct UhiEstimator {
    rng: JitterRng,
}

impl Default for UhiEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl UhiEstimator {
    pub fn new() -> Self {
        Self {
            rng: JitterRng::default(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: JitterRng::from_seed_u64(seed),
        }
    }

    /// Compute the full record for one city.
    ///
    /// Total for every syntactically valid observation: missing
    /// weather, elevation or air-quality fields never fail a city.
    pub fn compute_record(&mut self, observation: &CityObservation) -> Result<UhiRecord> {
        observation.validate_identity()?;

        let rng = &mut self.rng.0;
        let population_density = observation.population_density();

        let greenness = geography::estimate_urban_greenness(&observation.name, rng);
        let land_cover = LandCoverClass::classify(greenness, population_density);

        let ndvi = surface::estimate_ndvi(greenness, observation.latitude, rng);
        let albedo = surface::estimate_albedo(land_cover, ndvi, rng);
        let impervious = surface::estimate_impervious_surface(land_cover, population_density, rng);
        let building_density = surface::estimate_building_density(population_density, impervious, rng);

        let solar_radiation =
            climate::estimate_solar_radiation(observation.latitude, observation.cloud_cover, rng);

        let traffic_density = activity::estimate_traffic_density(
            observation.population,
            observation.tier,
            population_density,
        );
        let energy_consumption = activity::estimate_energy_consumption(observation.population);
        let anthropogenic_heat = activity::estimate_anthropogenic_heat(
            energy_consumption,
            observation.population,
            traffic_density,
        );
        let sprawl_rate =
            activity::estimate_urban_sprawl_rate(observation.population, observation.tier, rng);

        let uhi = intensity::uhi_intensity(ndvi, albedo, impervious, observation.wind_speed);

        let cooling_dd = climate::cooling_degree_days(observation.temp_max, observation.temp_min);

        let distance_to_water = geography::distance_to_water(&observation.name, rng);
        let annual_rainfall =
            geography::estimate_annual_rainfall(&observation.name, observation.latitude, rng);
        let health_impact =
            activity::estimate_health_impact(observation.aqi, observation.temperature);

        let elevation_m = match observation.elevation {
            Some(elevation) => elevation,
            None => geography::fallback_elevation(rng),
        };

        let metrics = DerivedMetrics {
            urban_greenness_pct: greenness,
            ndvi,
            albedo,
            impervious_surface_pct: impervious,
            building_density,
            distance_to_water_km: distance_to_water,
            solar_radiation,
            traffic_density,
            energy_consumption_mwh: energy_consumption,
            anthropogenic_heat_flux: anthropogenic_heat,
            urban_sprawl_rate: sprawl_rate,
            cooling_degree_days: cooling_dd,
            annual_rainfall_mm: annual_rainfall,
            health_impact_per_100k: health_impact,
        };

        Ok(UhiRecord::assemble(
            observation,
            elevation_m,
            land_cover,
            metrics,
            uhi,
        ))
    }
}
