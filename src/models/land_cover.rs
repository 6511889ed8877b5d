use serde::{Deserialize, Serialize};

/// Dominant land cover class of a city's built-up area.
///
/// Classification and the per-class base tables are kept as exhaustive
/// matches so adding a variant forces every table to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandCoverClass {
    Urban,
    Industrial,
    #[serde(rename = "Green Space")]
    GreenSpace,
    #[serde(rename = "Mixed Urban")]
    MixedUrban,
    Water,
}

impl LandCoverClass {
    /// Classify from urban greenness ratio (%) and population density
    /// (people/km²). Thresholds are strict: greenness of exactly 30 is
    /// not green space, density of exactly 15000 is not urban.
    pub fn classify(greenness_pct: f64, population_density: f64) -> Self {
        if greenness_pct > 30.0 {
            LandCoverClass::GreenSpace
        } else if population_density > 15_000.0 {
            LandCoverClass::Urban
        } else if population_density > 10_000.0 {
            LandCoverClass::Industrial
        } else {
            LandCoverClass::MixedUrban
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LandCoverClass::Urban => "Urban",
            LandCoverClass::Industrial => "Industrial",
            LandCoverClass::GreenSpace => "Green Space",
            LandCoverClass::MixedUrban => "Mixed Urban",
            LandCoverClass::Water => "Water",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Urban" => Some(LandCoverClass::Urban),
            "Industrial" => Some(LandCoverClass::Industrial),
            "Green Space" => Some(LandCoverClass::GreenSpace),
            "Mixed Urban" => Some(LandCoverClass::MixedUrban),
            "Water" => Some(LandCoverClass::Water),
            _ => None,
        }
    }

    /// Albedo sampling range for this class. Urbanised surfaces reflect
    /// less than vegetation; open water least of all.
    pub fn albedo_base_range(&self) -> (f64, f64) {
        match self {
            LandCoverClass::Urban => (0.12, 0.18),
            LandCoverClass::Industrial => (0.10, 0.15),
            LandCoverClass::GreenSpace => (0.20, 0.30),
            LandCoverClass::MixedUrban => (0.15, 0.22),
            LandCoverClass::Water => (0.05, 0.10),
        }
    }

    /// Base impervious surface percentage for this class, before the
    /// density bonus and jitter.
    pub fn impervious_base(&self) -> f64 {
        match self {
            LandCoverClass::Urban => 70.0,
            LandCoverClass::Industrial => 75.0,
            LandCoverClass::GreenSpace => 30.0,
            LandCoverClass::MixedUrban => 55.0,
            LandCoverClass::Water => 45.0,
        }
    }
}
