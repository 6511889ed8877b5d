pub mod activity;
pub mod climate;
pub mod geography;
pub mod intensity;
pub mod pipeline;
pub mod rng;
pub mod surface;

pub use pipeline::UhiEstimator;
pub use rng::JitterRng;
