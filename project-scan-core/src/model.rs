//! Data model for documents, extractions and project records

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A document as supplied by a [`DocumentSource`](crate::source::DocumentSource)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub filename: String,
    /// Path relative to the scan root, lossily decoded
    pub path: String,
    pub content: String,
}

impl RawDocument {
    pub fn new(filename: impl Into<String>, path: impl Into<String>, content: impl Into<String>) -> Self {
        Self { filename: filename.into(), path: path.into(), content: content.into() }
    }
}

/// Structured fields pulled out of a single document
///
/// List fields keep match order and may hold duplicates. An absent
/// category is an empty list or empty string, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub title: String,
    pub description: String,
    pub business_model: String,
    pub market_analysis: String,
    pub completed_features: Vec<String>,
    pub in_progress_features: Vec<String>,
    pub todo_features: Vec<String>,
    pub tech_stack: Vec<String>,
}

impl ExtractionResult {
    /// True when no category matched anything
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && self.business_model.is_empty()
            && self.market_analysis.is_empty()
            && self.completed_features.is_empty()
            && self.in_progress_features.is_empty()
            && self.todo_features.is_empty()
            && self.tech_stack.is_empty()
    }
}

/// Discrete project status, derived from progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    Planning,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] =
        [Self::NotStarted, Self::Planning, Self::InProgress, Self::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::Planning => "Planning",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for one document that contributed to a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    pub filename: String,
    pub path: String,
    /// What the document contributed before merging
    pub data: ExtractionResult,
}

/// The merged, scored and classified aggregate for one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub status: ProjectStatus,
    /// Completion percentage, always within 0..=100
    pub progress: u8,
    pub completed_features: Vec<String>,
    pub in_progress_features: Vec<String>,
    pub todo_features: Vec<String>,
    pub tech_stack: Vec<String>,
    pub business_model: String,
    pub market_analysis: String,
    pub last_updated: DateTime<Utc>,
    pub markdown_files: Vec<SourceDocument>,
}

impl ProjectRecord {
    /// Create an empty record; derived fields stay at their defaults until
    /// [`finalize`](crate::scanner::finalize) runs
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: String::new(),
            description: String::new(),
            short_description: String::new(),
            status: ProjectStatus::NotStarted,
            progress: 0,
            completed_features: Vec::new(),
            in_progress_features: Vec::new(),
            todo_features: Vec::new(),
            tech_stack: Vec::new(),
            business_model: String::new(),
            market_analysis: String::new(),
            last_updated: Utc::now(),
            markdown_files: Vec::new(),
        }
    }
}

/// All records produced by one scan, in allow-list order
///
/// Persists as a JSON object keyed by project identifier. On load the key
/// is authoritative: it overwrites the record's `name`, and a repeated key
/// replaces the earlier record in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub projects: Vec<ProjectRecord>,
}

impl ScanReport {
    pub fn get(&self, name: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl Serialize for ScanReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.projects.len()))?;
        for project in &self.projects {
            map.serialize_entry(&project.name, project)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ScanReport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ReportVisitor;

        impl<'de> Visitor<'de> for ReportVisitor {
            type Value = ScanReport;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of project identifier to project record")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ScanReport, A::Error> {
                let mut projects = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, mut record)) = access.next_entry::<String, ProjectRecord>()? {
                    record.name = name;
                    match projects.iter().position(|p: &ProjectRecord| p.name == record.name) {
                        Some(index) => projects[index] = record,
                        None => projects.push(record),
                    }
                }
                Ok(ScanReport { projects })
            }
        }

        deserializer.deserialize_map(ReportVisitor)
    }
}
