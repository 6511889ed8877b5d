//! Urban form estimators: vegetation index, reflectivity, sealed
//! surface share and building density.

use rand::Rng;

use crate::models::LandCoverClass;
use crate::utils::constants::{
    ALBEDO_MAX, ALBEDO_MIN, BUILDING_DENSITY_MAX, BUILDING_DENSITY_MIN, IMPERVIOUS_MAX,
    IMPERVIOUS_MIN, NDVI_MAX, NDVI_MIN,
};

/// Estimate NDVI from the urban greenness ratio.
///
/// Latitude selects the seasonal jitter band: tropical south swings
/// slightly upward, the more seasonal north mostly downward.
pub fn estimate_ndvi<R: Rng>(greenness_pct: f64, latitude: f64, rng: &mut R) -> f64 {
    let base = (greenness_pct / 100.0) * 0.6;

    let seasonal = if latitude < 15.0 {
        rng.gen_range(-0.05..0.10)
    } else if latitude > 28.0 {
        rng.gen_range(-0.15..0.05)
    } else {
        rng.gen_range(-0.10..0.05)
    };

    (base + seasonal).clamp(NDVI_MIN, NDVI_MAX)
}

/// Estimate surface albedo from land cover, adjusted upward with
/// vegetation density.
pub fn estimate_albedo<R: Rng>(land_cover: LandCoverClass, ndvi: f64, rng: &mut R) -> f64 {
    let (lo, hi) = land_cover.albedo_base_range();
    let base = rng.gen_range(lo..hi);

    let ndvi_adjustment = (ndvi - 0.3) * 0.1;

    (base + ndvi_adjustment).clamp(ALBEDO_MIN, ALBEDO_MAX)
}

/// Estimate the impervious (sealed) surface percentage from land cover
/// and population density.
pub fn estimate_impervious_surface<R: Rng>(
    land_cover: LandCoverClass,
    population_density: f64,
    rng: &mut R,
) -> f64 {
    let base = land_cover.impervious_base();

    let density_bonus = if population_density > 20_000.0 {
        15.0
    } else if population_density > 10_000.0 {
        10.0
    } else if population_density > 5_000.0 {
        5.0
    } else {
        0.0
    };

    let impervious = base + density_bonus + rng.gen_range(-5.0..5.0);
    impervious.clamp(IMPERVIOUS_MIN, IMPERVIOUS_MAX)
}

/// Estimate building density (buildings per km²) from population
/// density and sealed surface share.
pub fn estimate_building_density<R: Rng>(
    population_density: f64,
    impervious_surface_pct: f64,
    rng: &mut R,
) -> f64 {
    let base = (population_density / 1000.0) * 0.5;
    let impervious_factor = (impervious_surface_pct / 100.0) * 2000.0;

    let density = base + impervious_factor + rng.gen_range(-200.0..200.0);
    density.clamp(BUILDING_DENSITY_MIN, BUILDING_DENSITY_MAX)
}
