//! Report command - re-render a saved record set

use anyhow::{Context, Result};
use project_scan_core::{ScanReport, persist, report};
use tracing::info;

use crate::cli::app::ReportArgs;

pub fn execute(args: ReportArgs) -> Result<()> {
    let saved = persist::load(&args.file)
        .with_context(|| format!("Failed to load analysis from {}", args.file.display()))?;

    let text = render(&saved);
    if args.stdout {
        print!("{}", text);
    } else {
        for line in text.lines() {
            info!("{}", line);
        }
    }

    Ok(())
}

/// Digest followed by the summary
fn render(saved: &ScanReport) -> String {
    let mut text = report::render(&saved.projects);
    text.push_str(&report::render_summary(&saved.projects));
    text
}
