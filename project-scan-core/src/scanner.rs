//! Pipeline orchestration: documents → extraction → merge → derived fields

use chrono::Utc;
use std::collections::HashSet;

use crate::config::ScanConfig;
use crate::describe::DescriptionSynthesizer;
use crate::error::{Result, ScanError};
use crate::extract::PatternExtractor;
use crate::model::{ProjectRecord, RawDocument, ScanReport, SourceDocument};
use crate::observer::{ScanObserver, TracingObserver};
use crate::scoring;
use crate::source::DocumentSource;

/// Compute the derived fields once every document has been merged
///
/// Order matters: status is classified from the freshly scored progress.
pub fn finalize(record: &mut ProjectRecord, synthesizer: &DescriptionSynthesizer) {
    record.progress = scoring::score(record);
    record.status = scoring::classify(record.progress);
    record.short_description = synthesizer.synthesize(record);
    record.last_updated = Utc::now();
}

/// Runs the scan pipeline over an allow-list of projects
pub struct Scanner {
    projects: Vec<String>,
    extractor: PatternExtractor,
    synthesizer: DescriptionSynthesizer,
    observer: Box<dyn ScanObserver>,
}

impl Scanner {
    /// Create a scanner from configuration, reporting through `tracing`
    ///
    /// Repeated identifiers in the allow-list are scanned once, at their
    /// first position.
    pub fn new(config: &ScanConfig) -> Self {
        let mut seen = HashSet::new();
        let projects = config
            .projects
            .iter()
            .filter(|project| seen.insert(project.as_str()))
            .cloned()
            .collect();

        Self {
            projects,
            extractor: PatternExtractor::new(),
            synthesizer: DescriptionSynthesizer::new(config.descriptions.clone()),
            observer: Box::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: impl ScanObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Identifiers that will be scanned, in report order
    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    /// Scan every listed project
    ///
    /// Recoverable errors (a missing project, an unreadable document) go to
    /// the observer and the scan carries on. Any other error from the source
    /// aborts the scan.
    pub fn scan(&self, source: &dyn DocumentSource) -> Result<ScanReport> {
        let mut report = ScanReport::default();

        for project in &self.projects {
            let loads = match source.project_documents(project) {
                Ok(loads) => loads,
                Err(error) if error.is_recoverable() => {
                    self.report_recoverable(project, &error);
                    continue;
                }
                Err(error) => return Err(error),
            };

            let mut documents = Vec::with_capacity(loads.len());
            for load in loads {
                match load {
                    Ok(document) => documents.push(document),
                    Err(error) if error.is_recoverable() => self.report_recoverable(project, &error),
                    Err(error) => return Err(error),
                }
            }

            self.observer.project_found(project, documents.len());
            report.projects.push(self.analyze_project(project, &documents));
        }

        self.observer.scan_complete(report.len());
        Ok(report)
    }

    fn report_recoverable(&self, project: &str, error: &ScanError) {
        match error {
            ScanError::MissingProjectDirectory { path, .. } => self.observer.project_missing(project, path),
            _ => self.observer.document_failed(project, error),
        }
    }

    /// Build one finalized record from a project's readable documents
    pub fn analyze_project(&self, name: &str, documents: &[RawDocument]) -> ProjectRecord {
        let mut record = ProjectRecord::new(name);

        for document in documents {
            let data = self.extractor.extract(&document.content);
            record.merge(&data);
            record.markdown_files.push(SourceDocument {
                filename: document.filename.clone(),
                path: document.path.clone(),
                data,
            });
            self.observer.document_analyzed(name, &document.filename);
        }

        finalize(&mut record, &self.synthesizer);
        record
    }
}
