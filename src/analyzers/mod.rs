pub mod uhi_analyzer;

pub use uhi_analyzer::{DatasetStatistics, LandCoverStats, MetricSummary, RegionStats, UhiAnalyzer};
