use chrono::Local;
use std::path::{Path, PathBuf};

/// Generate a timestamped dataset filename:
/// `{output_dir}/uhi-dataset-{YYYYMMDD_HHMMSS}.csv`
pub fn generate_default_dataset_filename(output_dir: &Path) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    output_dir.join(format!("uhi-dataset-{}.csv", stamp))
}

/// Generate a timestamped summary-report filename:
/// `{output_dir}/uhi-summary-{YYYYMMDD_HHMMSS}.txt`
pub fn generate_default_report_filename(output_dir: &Path) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    output_dir.join(format!("uhi-summary-{}.txt", stamp))
}
