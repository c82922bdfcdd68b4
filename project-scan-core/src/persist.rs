//! JSON persistence of the record set
//!
//! The file is a single object keyed by project identifier, pretty-printed,
//! in report order.

use std::path::Path;

use crate::error::{Result, ScanError};
use crate::model::ScanReport;

/// Write the report to `path`, replacing any existing file
pub fn save(report: &ScanReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json).map_err(|source| ScanError::Persist { path: path.to_path_buf(), source })
}

/// Read a report previously written by [`save`]
pub fn load(path: &Path) -> Result<ScanReport> {
    let json = std::fs::read_to_string(path)
        .map_err(|source| ScanError::Persist { path: path.to_path_buf(), source })?;
    Ok(serde_json::from_str(&json)?)
}
