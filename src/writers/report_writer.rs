//! Plain-text analysis summary.

use chrono::Local;
use std::fs;
use std::path::Path;

use crate::analyzers::{DatasetStatistics, UhiAnalyzer};
use crate::error::Result;
use crate::models::UhiRecord;

pub struct ReportWriter;

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, stats: &DatasetStatistics, records: &[UhiRecord]) -> String {
        let divider = "=".repeat(80);
        let mut out = String::new();

        out.push_str(&divider);
        out.push_str("\nURBAN HEAT ISLAND ANALYSIS SUMMARY\n");
        out.push_str(&divider);
        out.push_str(&format!(
            "\nGenerated: {}\n\n",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ));

        out.push_str("KEY FINDINGS:\n");
        out.push_str(&format!("1. Average UHI Intensity: {:.2}°C\n", stats.uhi.mean));
        out.push_str(&format!(
            "2. Highest UHI: {} ({:.2}°C)\n",
            stats.hottest_city, stats.uhi.max
        ));
        out.push_str(&format!(
            "3. Lowest UHI: {} ({:.2}°C)\n",
            stats.coolest_city, stats.uhi.min
        ));
        out.push_str(&format!(
            "4. Average Impervious Surface: {:.1}%\n",
            stats.avg_impervious
        ));
        out.push_str(&format!("5. Average NDVI: {:.3}\n", stats.avg_ndvi));
        out.push_str(&format!(
            "6. Average Urban Greenness: {:.1}%\n\n",
            stats.avg_greenness
        ));

        out.push_str("CORRELATION WITH UHI INTENSITY:\n");
        for (factor, r) in &stats.correlations {
            out.push_str(&format!("{:30}: {:+.3}\n", factor, r));
        }

        out.push_str("\nTOP 10 CITIES BY UHI INTENSITY:\n");
        let ranked = UhiAnalyzer::new().rank_by_uhi(records);
        for (i, record) in ranked.iter().take(10).enumerate() {
            out.push_str(&format!(
                "{:2}. {:20} ({:20}) UHI {:.2}°C, impervious {:.1}%, NDVI {:.3}\n",
                i + 1,
                record.city_name,
                record.state,
                record.uhi_intensity_c,
                record.impervious_surface_pct,
                record.ndvi
            ));
        }

        out
    }

    pub fn write_summary(
        &self,
        stats: &DatasetStatistics,
        records: &[UhiRecord],
        path: &Path,
    ) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.render(stats, records))?;
        Ok(())
    }
}
