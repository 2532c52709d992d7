// Reports directory - cleared at session start, receives the run summary

use crate::error::Result;
use crate::harness::SuiteReport;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name of the JSON summary inside the reports directory
pub const REPORT_FILE: &str = "suite-report.json";

/// Default reports directory, next to the crate manifest.
pub fn default_reports_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("reports")
}

/// Empties `dir`, creating it when missing.
///
/// Entries that cannot be removed are logged and left in place; only a
/// failure to create or list the directory itself is an error.
pub fn clean_reports_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "unreadable reports entry");
                continue;
            }
        };
        let path = entry.path();
        // symlink_metadata: a link to a directory is removed, never followed
        let removed = match fs::symlink_metadata(&path) {
            Ok(meta) if meta.is_dir() => fs::remove_dir_all(&path),
            Ok(_) => fs::remove_file(&path),
            Err(err) => Err(err),
        };
        match removed {
            Ok(()) => debug!(path = %path.display(), "removed"),
            Err(err) => warn!(path = %path.display(), error = %err, "failed to remove report entry"),
        }
    }
    Ok(())
}

/// Writes `report` as pretty JSON into `dir`, returning the file path.
pub fn write_report(dir: &Path, report: &SuiteReport) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(REPORT_FILE);
    fs::write(&path, serde_json::to_string_pretty(report)?)?;
    Ok(path)
}
