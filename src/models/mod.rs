pub mod city;
pub mod land_cover;
pub mod observation;
pub mod record;

pub use city::{all_cities, City};
pub use land_cover::LandCoverClass;
pub use observation::{CityObservation, CityObservationBuilder};
pub use record::{DerivedMetrics, UhiRecord};
