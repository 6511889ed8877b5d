//! Human-activity estimators: traffic, waste heat, energy demand,
//! expansion rate and health impact.

use rand::Rng;

use crate::utils::constants::{
    ANTHROPOGENIC_HEAT_MAX, ANTHROPOGENIC_HEAT_MIN, DEFAULT_AQI, SPRAWL_RATE_MAX, SPRAWL_RATE_MIN,
    TRAFFIC_DENSITY_MAX, TRAFFIC_DENSITY_MIN,
};

/// Estimate traffic density (vehicles per km² of road).
///
/// Tier-1 metros carry a higher vehicle ownership rate, scaled further
/// by how dense the city is.
pub fn estimate_traffic_density(population: f64, tier: u8, population_density: f64) -> f64 {
    let mut ownership_rate = if tier == 1 { 0.25 } else { 0.15 };

    if population_density > 20_000.0 {
        ownership_rate *= 1.3;
    } else if population_density > 10_000.0 {
        ownership_rate *= 1.1;
    }

    let total_vehicles = population * ownership_rate;

    // Road area approximated as 12% of the built-up area
    let urban_area = population / 5_000.0;
    let road_area = urban_area * 0.12;

    let traffic_density = if road_area > 0.0 {
        total_vehicles / road_area
    } else {
        1000.0
    };

    traffic_density.clamp(TRAFFIC_DENSITY_MIN, TRAFFIC_DENSITY_MAX)
}

/// Annual energy consumption estimate (MWh/year) from population.
pub fn estimate_energy_consumption(population: f64) -> f64 {
    const CONSUMPTION_PER_CAPITA_KWH: f64 = 1200.0;
    (population / 1000.0) * CONSUMPTION_PER_CAPITA_KWH
}

/// Estimate anthropogenic heat flux (W/m²) from energy use, traffic and
/// population.
pub fn estimate_anthropogenic_heat(
    energy_consumption_mwh: f64,
    population: f64,
    traffic_density: f64,
) -> f64 {
    let energy_heat = (energy_consumption_mwh / 1_000_000.0) * 10.0;
    let traffic_heat = (traffic_density / 1000.0) * 5.0;
    let population_heat = (population / 1_000_000.0) * 8.0;

    let total = energy_heat + traffic_heat + population_heat;
    total.clamp(ANTHROPOGENIC_HEAT_MIN, ANTHROPOGENIC_HEAT_MAX)
}

/// Estimate the annual urban sprawl rate (%/year). Metros and larger
/// cities expand faster.
pub fn estimate_urban_sprawl_rate<R: Rng>(population: f64, tier: u8, rng: &mut R) -> f64 {
    let base_rate = if tier == 1 {
        rng.gen_range(3.0..8.0)
    } else {
        rng.gen_range(2.0..5.0)
    };

    let size_bonus = if population > 5_000_000.0 {
        2.0
    } else if population > 2_000_000.0 {
        1.0
    } else {
        0.0
    };

    let rate: f64 = base_rate + size_bonus + rng.gen_range(-1.0..1.0);
    rate.clamp(SPRAWL_RATE_MIN, SPRAWL_RATE_MAX)
}

/// Estimate heat/pollution mortality (deaths per 100k) from air quality
/// and temperature. Unknown AQI falls back to a moderate default;
/// unknown temperature contributes nothing.
pub fn estimate_health_impact(aqi: Option<f64>, temperature: Option<f64>) -> f64 {
    let aqi = aqi.unwrap_or(DEFAULT_AQI);

    let base_rate = 20.0;
    let aqi_factor = (aqi / 100.0) * 15.0;

    let temp_factor = match temperature {
        Some(t) if t > 35.0 || t < 10.0 => 10.0,
        Some(t) if t > 30.0 || t < 15.0 => 5.0,
        _ => 0.0,
    };

    base_rate + aqi_factor + temp_factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::rng::JitterRng;

    #[test]
    fn test_traffic_density_clamped() {
        for population in [10_000.0, 1_000_000.0, 32_941_000.0] {
            for tier in [1, 2] {
                for density in [2_000.0, 15_000.0, 40_000.0] {
                    let v = estimate_traffic_density(population, tier, density);
                    assert!((TRAFFIC_DENSITY_MIN..=TRAFFIC_DENSITY_MAX).contains(&v));
                }
            }
        }
    }

    #[test]
    fn test_traffic_ownership_rates() {
        // With road_area = population * 0.12 / 5000 the density reduces to
        // rate * 5000 / 0.12, so tier 1 at low density → 0.25 → 10416.7,
        // clamped to the ceiling; tier 2 → 0.15 → 6250
        let tier1 = estimate_traffic_density(1_000_000.0, 1, 1_000.0);
        assert_eq!(tier1, TRAFFIC_DENSITY_MAX);

        let tier2 = estimate_traffic_density(1_000_000.0, 2, 1_000.0);
        assert!((tier2 - 6250.0).abs() < 1.0);
    }

    #[test]
    fn test_zero_population_fallback() {
        let v = estimate_traffic_density(0.0, 1, 5_000.0);
        assert_eq!(v, 1000.0);
    }

    #[test]
    fn test_energy_consumption_scales_with_population() {
        assert_eq!(estimate_energy_consumption(1_000_000.0), 1_200_000.0);
    }

    #[test]
    fn test_anthropogenic_heat_clamped() {
        let v = estimate_anthropogenic_heat(0.0, 0.0, 0.0);
        assert_eq!(v, ANTHROPOGENIC_HEAT_MIN);

        let v = estimate_anthropogenic_heat(40_000_000.0, 33_000_000.0, 10_000.0);
        assert_eq!(v, ANTHROPOGENIC_HEAT_MAX);
    }

    #[test]
    fn test_sprawl_rate_clamped_and_tiered() {
        let mut rng = JitterRng::from_seed_u64(41);
        for _ in 0..100 {
            // Tier 1 megacity: base [3,8) + 2 + jitter [-1,1) → [4,11)
            let v = estimate_urban_sprawl_rate(20_000_000.0, 1, &mut rng.0);
            assert!((4.0..11.0).contains(&v));

            // Small tier 2 city: base [2,5) + jitter [-1,1) → [1,6)
            let v = estimate_urban_sprawl_rate(900_000.0, 2, &mut rng.0);
            assert!((SPRAWL_RATE_MIN..6.0).contains(&v));
        }
    }

    #[test]
    fn test_health_impact_defaults() {
        // Unknown AQI → default 100 → 20 + 15
        assert_eq!(estimate_health_impact(None, Some(25.0)), 35.0);

        // Unknown temperature adds no heat bonus
        assert_eq!(estimate_health_impact(Some(200.0), None), 50.0);

        // Extreme heat
        assert_eq!(estimate_health_impact(Some(100.0), Some(40.0)), 45.0);

        // Warm but not extreme
        assert_eq!(estimate_health_impact(Some(100.0), Some(32.0)), 40.0);
    }
}
