pub mod air_quality;
pub mod elevation;
pub mod population;
pub mod weather;

pub use air_quality::{pm25_to_aqi, AirQualityClient};
pub use elevation::ElevationClient;
pub use population::{lookup as population_lookup, PopulationInfo};
pub use weather::{WeatherClient, WeatherReading};
