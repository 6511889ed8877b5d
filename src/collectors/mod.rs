pub mod dataset_collector;

pub use dataset_collector::{CollectionReport, DatasetCollector};
