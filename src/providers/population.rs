//! Static census lookup (2021 estimates) for the city roster.

use crate::utils::constants::{DEFAULT_AREA_KM2, DEFAULT_POPULATION};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationInfo {
    pub population: f64,
    pub area_km2: f64,
}

impl PopulationInfo {
    pub fn population_density(&self) -> f64 {
        if self.area_km2 > 0.0 {
            self.population / self.area_km2
        } else {
            0.0
        }
    }
}

/// (name, population, area in km²)
const POPULATION_TABLE: &[(&str, f64, f64)] = &[
    ("Mumbai", 20_411_000.0, 603.0),
    ("Delhi", 32_941_000.0, 1484.0),
    ("Bangalore", 13_193_000.0, 741.0),
    ("Hyderabad", 10_494_000.0, 650.0),
    ("Ahmedabad", 8_450_000.0, 505.0),
    ("Chennai", 11_324_000.0, 426.0),
    ("Kolkata", 15_134_000.0, 206.0),
    ("Surat", 7_785_000.0, 326.0),
    ("Pune", 7_764_000.0, 331.0),
    ("Jaipur", 3_876_000.0, 467.0),
    ("Lucknow", 3_382_000.0, 349.0),
    ("Kanpur", 3_067_000.0, 267.0),
    ("Nagpur", 2_968_000.0, 227.0),
    ("Indore", 3_276_000.0, 276.0),
    ("Thane", 2_171_000.0, 147.0),
    ("Bhopal", 2_371_000.0, 285.0),
    ("Visakhapatnam", 2_035_000.0, 682.0),
    ("Pimpri-Chinchwad", 1_729_000.0, 181.0),
    ("Patna", 2_049_000.0, 250.0),
    ("Vadodara", 2_065_000.0, 235.0),
    ("Ghaziabad", 1_729_000.0, 130.0),
    ("Ludhiana", 1_618_000.0, 310.0),
    ("Agra", 1_746_000.0, 188.0),
    ("Nashik", 1_561_000.0, 264.0),
    ("Faridabad", 1_394_000.0, 143.0),
    ("Meerut", 1_543_000.0, 141.0),
    ("Rajkot", 1_390_000.0, 170.0),
    ("Kalyan-Dombivli", 1_247_000.0, 137.0),
    ("Vasai-Virar", 1_222_000.0, 233.0),
    ("Varanasi", 1_435_000.0, 112.0),
    ("Srinagar", 1_180_000.0, 294.0),
    ("Aurangabad", 1_175_000.0, 138.0),
    ("Dhanbad", 1_162_000.0, 227.0),
    ("Amritsar", 1_183_000.0, 139.0),
    ("Navi Mumbai", 1_120_000.0, 344.0),
    ("Allahabad", 1_217_000.0, 365.0),
    ("Ranchi", 1_126_000.0, 175.0),
    ("Howrah", 1_077_000.0, 57.0),
    ("Coimbatore", 2_151_000.0, 257.0),
    ("Jabalpur", 1_268_000.0, 263.0),
    ("Gwalior", 1_102_000.0, 518.0),
    ("Vijayawada", 1_048_000.0, 218.0),
    ("Jodhpur", 1_137_000.0, 227.0),
    ("Madurai", 1_470_000.0, 148.0),
    ("Raipur", 1_122_000.0, 226.0),
    ("Kota", 1_001_000.0, 527.0),
    ("Chandigarh", 1_055_000.0, 114.0),
    ("Guwahati", 963_000.0, 328.0),
    ("Thiruvananthapuram", 957_000.0, 214.0),
    ("Mysore", 990_000.0, 155.0),
];

/// Census lookup by city name. Unlisted cities get a conservative
/// one-million default at 5000 people/km².
pub fn lookup(city_name: &str) -> PopulationInfo {
    POPULATION_TABLE
        .iter()
        .find(|(name, _, _)| *name == city_name)
        .map(|&(_, population, area_km2)| PopulationInfo {
            population,
            area_km2,
        })
        .unwrap_or(PopulationInfo {
            population: DEFAULT_POPULATION,
            area_km2: DEFAULT_AREA_KM2,
        })
}
