//! Scan progress reporting
//!
//! The pipeline never writes to stdout. It reports what it is doing to a
//! [`ScanObserver`]; the default observer turns those calls into `tracing`
//! events.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::ScanError;

/// Receives progress notifications from a [`Scanner`](crate::scanner::Scanner)
pub trait ScanObserver {
    fn project_found(&self, _project: &str, _documents: usize) {}

    fn project_missing(&self, _project: &str, _path: &Path) {}

    fn document_analyzed(&self, _project: &str, _filename: &str) {}

    fn document_failed(&self, _project: &str, _error: &ScanError) {}

    fn scan_complete(&self, _projects: usize) {}
}

/// Emits `tracing` events for every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ScanObserver for TracingObserver {
    fn project_found(&self, project: &str, documents: usize) {
        info!(project, documents, "Found project");
    }

    fn project_missing(&self, project: &str, path: &Path) {
        warn!(project, path = %path.display(), "Project folder not found");
    }

    fn document_analyzed(&self, project: &str, filename: &str) {
        debug!(project, filename, "Analyzed document");
    }

    fn document_failed(&self, project: &str, error: &ScanError) {
        warn!(project, %error, "Skipping document");
    }

    fn scan_complete(&self, projects: usize) {
        info!(projects, "Scan complete");
    }
}

/// Discards every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl ScanObserver for NullObserver {}
