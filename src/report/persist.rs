//! Report persistence with timestamped filenames.

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::types::ReportResult;

/// Generate a timestamp string in YYYYMMDD_HHMMSS format
pub fn generate_timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Generate a report filename for a given timestamp
pub fn report_filename(timestamp: &str) -> String {
    format!("test_report_{}.html", timestamp)
}

/// Write a rendered report under `directory`, creating it if absent.
///
/// The filename carries a second-resolution timestamp so successive runs get
/// distinct files. Two calls within the same clock second collide and the
/// last writer wins; callers that need sub-second uniqueness must serialize
/// their runs. Returns the path written.
pub fn persist(html: &str, directory: &Path) -> ReportResult<PathBuf> {
    fs::create_dir_all(directory)?;

    let path = directory.join(report_filename(&generate_timestamp()));
    fs::write(&path, html)?;

    Ok(path)
}
