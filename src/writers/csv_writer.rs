//! CSV dataset persistence.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::UhiRecord;

pub struct CsvWriter;

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write the dataset, creating parent directories as needed.
    pub fn write_records(&self, records: &[UhiRecord], path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        Ok(())
    }

    pub fn read_records(&self, path: &Path) -> Result<Vec<UhiRecord>> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: UhiRecord = row?;
            records.push(record);
        }
        Ok(records)
    }

    /// Read at most `limit` records (0 reads everything).
    pub fn read_sample_records(&self, path: &Path, limit: usize) -> Result<Vec<UhiRecord>> {
        let records = self.read_records(path)?;
        if limit == 0 || limit >= records.len() {
            Ok(records)
        } else {
            Ok(records.into_iter().take(limit).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::UhiEstimator;
    use crate::models::{City, CityObservation};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_records() -> Vec<UhiRecord> {
        let mut estimator = UhiEstimator::with_seed(3);
        ["Mumbai", "Delhi", "Bhopal"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let city = City::new(name, "Test State", 1 + (i % 2) as u8, 19.0 + i as f64, 77.0);
                let obs = CityObservation::builder(&city)
                    .temperature(Some(30.0))
                    .temp_range(Some(38.0), Some(26.0))
                    .wind_speed(Some(9.0))
                    .demographics(2_000_000.0 * (i + 1) as f64, 400.0)
                    .build();
                estimator.compute_record(&obs).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dataset.csv");

        let records = sample_records();
        let writer = CsvWriter::new();
        writer.write_records(&records, &path).unwrap();

        let restored = writer.read_records(&path).unwrap();
        assert_eq!(restored.len(), records.len());
        assert_eq!(restored[0].city_name, records[0].city_name);
        assert_eq!(restored[0].land_cover, records[0].land_cover);
        assert!((restored[0].uhi_intensity_c - records[0].uhi_intensity_c).abs() < 1e-9);
        // Unknown fields survive as empty cells
        assert_eq!(restored[0].aqi, records[0].aqi);
    }

    #[test]
    fn test_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/dataset.csv");

        CsvWriter::new()
            .write_records(&sample_records(), &path)
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_sample_limits() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dataset.csv");

        let writer = CsvWriter::new();
        writer.write_records(&sample_records(), &path).unwrap();

        assert_eq!(writer.read_sample_records(&path, 2).unwrap().len(), 2);
        assert_eq!(writer.read_sample_records(&path, 0).unwrap().len(), 3);
        assert_eq!(writer.read_sample_records(&path, 99).unwrap().len(), 3);
    }
}
