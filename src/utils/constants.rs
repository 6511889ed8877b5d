/// Physical clamp ranges for derived metrics
pub const NDVI_MIN: f64 = 0.05;
pub const NDVI_MAX: f64 = 0.85;

pub const ALBEDO_MIN: f64 = 0.05;
pub const ALBEDO_MAX: f64 = 0.40;

pub const IMPERVIOUS_MIN: f64 = 20.0;
pub const IMPERVIOUS_MAX: f64 = 90.0;

pub const BUILDING_DENSITY_MIN: f64 = 100.0;
pub const BUILDING_DENSITY_MAX: f64 = 8000.0;

pub const SOLAR_RADIATION_MIN: f64 = 10.0;
pub const SOLAR_RADIATION_MAX: f64 = 30.0;

pub const TRAFFIC_DENSITY_MIN: f64 = 100.0;
pub const TRAFFIC_DENSITY_MAX: f64 = 10_000.0;

pub const ANTHROPOGENIC_HEAT_MIN: f64 = 5.0;
pub const ANTHROPOGENIC_HEAT_MAX: f64 = 200.0;

pub const SPRAWL_RATE_MIN: f64 = 1.0;
pub const SPRAWL_RATE_MAX: f64 = 12.0;

pub const UHI_INTENSITY_MIN: f64 = 0.5;
pub const UHI_INTENSITY_MAX: f64 = 10.0;

/// Comfort baseline (°C) for cooling degree days
pub const CDD_BASE_TEMP: f64 = 18.0;

/// Solar-radiation cloud term used when cloud cover is unknown
pub const DEFAULT_CLOUD_TERM: f64 = 2.0;

/// Moderate AQI assumed when the air-quality lookup failed
pub const DEFAULT_AQI: f64 = 100.0;

/// Census fallback for cities missing from the population table
pub const DEFAULT_POPULATION: f64 = 1_000_000.0;
pub const DEFAULT_AREA_KM2: f64 = 200.0;

/// Collection defaults
pub const DEFAULT_RATE_LIMIT_MS: u64 = 1500;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
