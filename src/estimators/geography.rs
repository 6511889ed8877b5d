//! Location-keyed estimators: greenness, water proximity and rainfall.
//!
//! These lean on small gazetteers of known city characteristics and
//! fall back to latitude-banded or uniform draws for everything else.

use rand::Rng;

/// Cities with notably higher urban green cover.
const GREEN_CITIES: &[&str] = &[
    "Bangalore",
    "Chandigarh",
    "Mysore",
    "Thiruvananthapuram",
    "Bhopal",
    "Guwahati",
    "Srinagar",
];

/// Coastal cities and their approximate distance (km) to open water.
const COASTAL_CITIES: &[(&str, f64)] = &[
    ("Mumbai", 2.0),
    ("Chennai", 3.0),
    ("Visakhapatnam", 1.0),
    ("Thiruvananthapuram", 5.0),
    ("Surat", 8.0),
    ("Kolkata", 15.0),
];

/// River cities and their approximate distance (km) to the river.
const RIVER_CITIES: &[(&str, f64)] = &[
    ("Delhi", 5.0),
    ("Ahmedabad", 8.0),
    ("Pune", 12.0),
    ("Hyderabad", 7.0),
    ("Varanasi", 2.0),
    ("Allahabad", 1.0),
    ("Patna", 3.0),
    ("Kanpur", 4.0),
    ("Lucknow", 6.0),
    ("Agra", 3.0),
    ("Srinagar", 1.0),
    ("Guwahati", 2.0),
];

/// Monsoon-heavy cities.
const HIGH_RAINFALL_CITIES: &[&str] = &["Mumbai", "Chennai", "Guwahati", "Thiruvananthapuram"];

fn table_lookup(table: &[(&str, f64)], name: &str) -> Option<f64> {
    table
        .iter()
        .find(|(city, _)| *city == name)
        .map(|&(_, value)| value)
}

/// Estimate the urban greenness ratio (%).
pub fn estimate_urban_greenness<R: Rng>(city_name: &str, rng: &mut R) -> f64 {
    if GREEN_CITIES.contains(&city_name) {
        rng.gen_range(25.0..40.0)
    } else {
        rng.gen_range(10.0..25.0)
    }
}

/// Approximate distance to the nearest major water body (km).
pub fn distance_to_water<R: Rng>(city_name: &str, rng: &mut R) -> f64 {
    if let Some(km) = table_lookup(COASTAL_CITIES, city_name) {
        km
    } else if let Some(km) = table_lookup(RIVER_CITIES, city_name) {
        km
    } else {
        rng.gen_range(15.0..50.0)
    }
}

/// Estimate annual rainfall (mm) from known monsoon cities, otherwise
/// banded by latitude.
pub fn estimate_annual_rainfall<R: Rng>(city_name: &str, latitude: f64, rng: &mut R) -> f64 {
    if HIGH_RAINFALL_CITIES.contains(&city_name) {
        rng.gen_range(1500.0..2500.0)
    } else if latitude < 15.0 {
        rng.gen_range(800.0..1200.0)
    } else if latitude > 28.0 {
        rng.gen_range(600.0..1000.0)
    } else {
        rng.gen_range(700.0..1100.0)
    }
}

/// Substitute elevation (m) when the lookup provider failed.
pub fn fallback_elevation<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(10.0..500.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::rng::JitterRng;

    #[test]
    fn test_green_cities_draw_higher() {
        let mut rng = JitterRng::from_seed_u64(43);
        for _ in 0..50 {
            let green = estimate_urban_greenness("Bangalore", &mut rng.0);
            assert!((25.0..40.0).contains(&green));

            let other = estimate_urban_greenness("Kanpur", &mut rng.0);
            assert!((10.0..25.0).contains(&other));
        }
    }

    #[test]
    fn test_water_distance_tables() {
        let mut rng = JitterRng::from_seed_u64(47);
        assert_eq!(distance_to_water("Mumbai", &mut rng.0), 2.0);
        assert_eq!(distance_to_water("Varanasi", &mut rng.0), 2.0);
        // Cities in neither table fall back to a uniform draw
        let inland = distance_to_water("Nagpur", &mut rng.0);
        assert!((15.0..50.0).contains(&inland));
    }

    #[test]
    fn test_rainfall_bands() {
        let mut rng = JitterRng::from_seed_u64(53);
        for _ in 0..50 {
            let monsoon = estimate_annual_rainfall("Mumbai", 19.08, &mut rng.0);
            assert!((1500.0..2500.0).contains(&monsoon));

            let south = estimate_annual_rainfall("Madurai", 9.93, &mut rng.0);
            assert!((800.0..1200.0).contains(&south));

            let north = estimate_annual_rainfall("Ludhiana", 30.9, &mut rng.0);
            assert!((600.0..1000.0).contains(&north));

            let central = estimate_annual_rainfall("Nagpur", 21.15, &mut rng.0);
            assert!((700.0..1100.0).contains(&central));
        }
    }

    #[test]
    fn test_fallback_elevation_range() {
        let mut rng = JitterRng::from_seed_u64(59);
        for _ in 0..100 {
            let elevation = fallback_elevation(&mut rng.0);
            assert!((10.0..500.0).contains(&elevation));
        }
    }
}
