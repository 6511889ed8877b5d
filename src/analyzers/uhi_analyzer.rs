//! Descriptive statistics, correlations and rankings over a collected
//! UHI dataset.

use std::collections::HashSet;

use crate::error::{CollectError, Result};
use crate::models::{LandCoverClass, UhiRecord};

#[derive(Debug, Clone, Copy)]
pub struct MetricSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

#[derive(Debug)]
pub struct LandCoverStats {
    pub land_cover: LandCoverClass,
    pub count: usize,
    pub avg_uhi: f64,
    pub avg_ndvi: f64,
    pub avg_impervious: f64,
}

#[derive(Debug)]
pub struct RegionStats {
    pub region: &'static str,
    pub count: usize,
    pub avg_uhi: f64,
    pub avg_ndvi: f64,
    pub avg_impervious: f64,
}

#[derive(Debug)]
pub struct DatasetStatistics {
    pub total_records: usize,
    pub states_covered: usize,
    pub total_population: f64,
    pub uhi: MetricSummary,
    pub hottest_city: String,
    pub coolest_city: String,
    pub avg_ndvi: f64,
    pub avg_impervious: f64,
    pub avg_greenness: f64,
    /// (factor, Pearson r against UHI intensity), sorted by |r| descending.
    pub correlations: Vec<(String, f64)>,
    pub land_cover_stats: Vec<LandCoverStats>,
    pub regional_stats: Vec<RegionStats>,
}

/// Latitude band label, south to north.
fn region_of(latitude: f64) -> &'static str {
    if latitude <= 15.0 {
        "South (<15°N)"
    } else if latitude <= 23.0 {
        "Central (15-23°N)"
    } else if latitude <= 28.0 {
        "North-Central (23-28°N)"
    } else {
        "North (>28°N)"
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count > 0 {
        sum / count as f64
    } else {
        f64::NAN
    }
}

/// Pearson correlation over paired samples. NaN when there are fewer
/// than two pairs or a series has zero variance.
fn pearson(pairs: &[(f64, f64)]) -> f64 {
    let n = pairs.len() as f64;
    if pairs.len() < 2 {
        return f64::NAN;
    }

    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for &(x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }

    cov / (var_x.sqrt() * var_y.sqrt())
}

pub struct UhiAnalyzer;

impl Default for UhiAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl UhiAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, records: &[UhiRecord]) -> Result<DatasetStatistics> {
        if records.is_empty() {
            return Err(CollectError::Config("No records to analyze".to_string()));
        }

        let mut states = HashSet::new();
        let mut uhi_min = f64::INFINITY;
        let mut uhi_max = f64::NEG_INFINITY;
        let mut hottest_city = String::new();
        let mut coolest_city = String::new();

        for record in records {
            states.insert(record.state.clone());

            if record.uhi_intensity_c < uhi_min {
                uhi_min = record.uhi_intensity_c;
                coolest_city = record.city_name.clone();
            }
            if record.uhi_intensity_c > uhi_max {
                uhi_max = record.uhi_intensity_c;
                hottest_city = record.city_name.clone();
            }
        }

        let uhi = MetricSummary {
            min: uhi_min,
            max: uhi_max,
            mean: mean(records.iter().map(|r| r.uhi_intensity_c)),
        };

        Ok(DatasetStatistics {
            total_records: records.len(),
            states_covered: states.len(),
            total_population: records.iter().map(|r| r.population).sum(),
            uhi,
            hottest_city,
            coolest_city,
            avg_ndvi: mean(records.iter().map(|r| r.ndvi)),
            avg_impervious: mean(records.iter().map(|r| r.impervious_surface_pct)),
            avg_greenness: mean(records.iter().map(|r| r.urban_greenness_pct)),
            correlations: self.correlations(records),
            land_cover_stats: self.land_cover_stats(records),
            regional_stats: self.regional_stats(records),
        })
    }

    /// Pearson r of each candidate factor against UHI intensity,
    /// strongest first. Optional factors correlate over the records
    /// where they are present.
    fn correlations(&self, records: &[UhiRecord]) -> Vec<(String, f64)> {
        let always: &[(&str, fn(&UhiRecord) -> f64)] = &[
            ("Impervious Surface (%)", |r| r.impervious_surface_pct),
            ("NDVI", |r| r.ndvi),
            ("Albedo", |r| r.albedo),
            ("Urban Greenness (%)", |r| r.urban_greenness_pct),
            ("Population Density", |r| r.population_density),
            ("Building Density", |r| r.building_density),
            ("Anthropogenic Heat Flux", |r| r.anthropogenic_heat_flux),
            ("Distance to Water (km)", |r| r.distance_to_water_km),
            ("Solar Radiation", |r| r.solar_radiation),
        ];
        let optional: &[(&str, fn(&UhiRecord) -> Option<f64>)] = &[
            ("Temperature (°C)", |r| r.temperature_c),
            ("Wind Speed (km/h)", |r| r.wind_speed_kmh),
            ("Humidity (%)", |r| r.humidity_pct),
        ];

        let mut correlations: Vec<(String, f64)> = Vec::new();

        for (label, accessor) in always {
            let pairs: Vec<(f64, f64)> = records
                .iter()
                .map(|r| (accessor(r), r.uhi_intensity_c))
                .collect();
            let r = pearson(&pairs);
            if !r.is_nan() {
                correlations.push((label.to_string(), r));
            }
        }

        for (label, accessor) in optional {
            let pairs: Vec<(f64, f64)> = records
                .iter()
                .filter_map(|r| accessor(r).map(|v| (v, r.uhi_intensity_c)))
                .collect();
            let r = pearson(&pairs);
            if !r.is_nan() {
                correlations.push((label.to_string(), r));
            }
        }

        correlations.sort_by(|a, b| {
            b.1.abs()
                .partial_cmp(&a.1.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        correlations
    }

    fn land_cover_stats(&self, records: &[UhiRecord]) -> Vec<LandCoverStats> {
        let classes = [
            LandCoverClass::Urban,
            LandCoverClass::Industrial,
            LandCoverClass::GreenSpace,
            LandCoverClass::MixedUrban,
            LandCoverClass::Water,
        ];

        classes
            .into_iter()
            .filter_map(|class| {
                let group: Vec<&UhiRecord> =
                    records.iter().filter(|r| r.land_cover == class).collect();
                if group.is_empty() {
                    return None;
                }
                Some(LandCoverStats {
                    land_cover: class,
                    count: group.len(),
                    avg_uhi: mean(group.iter().map(|r| r.uhi_intensity_c)),
                    avg_ndvi: mean(group.iter().map(|r| r.ndvi)),
                    avg_impervious: mean(group.iter().map(|r| r.impervious_surface_pct)),
                })
            })
            .collect()
    }

    fn regional_stats(&self, records: &[UhiRecord]) -> Vec<RegionStats> {
        let regions = [
            "South (<15°N)",
            "Central (15-23°N)",
            "North-Central (23-28°N)",
            "North (>28°N)",
        ];

        regions
            .into_iter()
            .filter_map(|region| {
                let group: Vec<&UhiRecord> = records
                    .iter()
                    .filter(|r| region_of(r.latitude) == region)
                    .collect();
                if group.is_empty() {
                    return None;
                }
                Some(RegionStats {
                    region,
                    count: group.len(),
                    avg_uhi: mean(group.iter().map(|r| r.uhi_intensity_c)),
                    avg_ndvi: mean(group.iter().map(|r| r.ndvi)),
                    avg_impervious: mean(group.iter().map(|r| r.impervious_surface_pct)),
                })
            })
            .collect()
    }

    /// Records sorted by UHI intensity, strongest island first.
    pub fn rank_by_uhi<'a>(&self, records: &'a [UhiRecord]) -> Vec<&'a UhiRecord> {
        let mut ranked: Vec<&UhiRecord> = records.iter().collect();
        ranked.sort_by(|a, b| {
            b.uhi_intensity_c
                .partial_cmp(&a.uhi_intensity_c)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }

    /// Records sorted by NDVI, greenest first.
    pub fn rank_by_ndvi<'a>(&self, records: &'a [UhiRecord]) -> Vec<&'a UhiRecord> {
        let mut ranked: Vec<&UhiRecord> = records.iter().collect();
        ranked.sort_by(|a, b| b.ndvi.partial_cmp(&a.ndvi).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }
}

impl DatasetStatistics {
    pub fn summary(&self) -> String {
        format!(
            "Cities: {} across {} states\n\
            Total Population: {:.0}\n\
            UHI Intensity: {:.2}°C to {:.2}°C (mean {:.2}°C)\n\
            Hottest Island: {} / Coolest: {}\n\
            Averages: NDVI {:.3}, Impervious {:.1}%, Greenness {:.1}%",
            self.total_records,
            self.states_covered,
            self.total_population,
            self.uhi.min,
            self.uhi.max,
            self.uhi.mean,
            self.hottest_city,
            self.coolest_city,
            self.avg_ndvi,
            self.avg_impervious,
            self.avg_greenness,
        )
    }

    pub fn detailed_summary(&self) -> String {
        let mut out = self.summary();

        out.push_str("\n\nCorrelation with UHI Intensity:\n");
        for (i, (factor, r)) in self.correlations.iter().enumerate() {
            let direction = if *r > 0.0 { "positive" } else { "negative" };
            out.push_str(&format!(
                "{:2}. {:30} r = {:+.3} ({})\n",
                i + 1,
                factor,
                r,
                direction
            ));
        }

        out.push_str("\nBy Land Cover:\n");
        for stats in &self.land_cover_stats {
            out.push_str(&format!(
                "- {:12} {:2} cities, avg UHI {:.2}°C, avg NDVI {:.3}, avg impervious {:.1}%\n",
                stats.land_cover.label(),
                stats.count,
                stats.avg_uhi,
                stats.avg_ndvi,
                stats.avg_impervious
            ));
        }

        out.push_str("\nBy Region:\n");
        for stats in &self.regional_stats {
            out.push_str(&format!(
                "- {:24} {:2} cities, avg UHI {:.2}°C, avg NDVI {:.3}\n",
                stats.region, stats.count, stats.avg_uhi, stats.avg_ndvi
            ));
        }

        out
    }
}
