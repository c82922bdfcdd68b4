//! Init-config command

use anyhow::{Context, Result, bail};
use project_scan_core::ScanConfig;
use std::path::Path;
use tracing::info;

/// Write the default configuration to `path`, refusing to overwrite
pub fn execute(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    ScanConfig::default()
        .save(path)
        .with_context(|| format!("Failed to write configuration to {}", path.display()))?;
    info!("Wrote default configuration to {}", path.display());

    Ok(())
}
