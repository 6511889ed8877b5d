//! Composite UHI intensity scorer.

use crate::utils::constants::{UHI_INTENSITY_MAX, UHI_INTENSITY_MIN};

/// Estimated UHI intensity (°C above surrounding rural areas).
///
/// Additive factor model: sealed surfaces strengthen the island,
/// vegetation, reflectivity and wind weaken it. Unknown wind
/// contributes exactly zero. Note that vegetation is counted both
/// directly and through albedo; the weighting is kept as-is because
/// changing it would shift the whole output distribution.
pub fn uhi_intensity(
    ndvi: f64,
    albedo: f64,
    impervious_surface_pct: f64,
    wind_speed_kmh: Option<f64>,
) -> f64 {
    let base = 2.0;

    let impervious_factor = (impervious_surface_pct / 100.0) * 3.0;
    let vegetation_factor = -(ndvi * 5.0);
    let albedo_factor = -(albedo - 0.15) * 5.0;

    let wind_factor = match wind_speed_kmh {
        Some(wind) => -(wind / 10.0) * 1.5,
        None => 0.0,
    };

    let intensity = base + impervious_factor + vegetation_factor + albedo_factor + wind_factor;
    intensity.clamp(UHI_INTENSITY_MIN, UHI_INTENSITY_MAX)
}
