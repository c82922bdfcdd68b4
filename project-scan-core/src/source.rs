//! Document discovery and loading
//!
//! A [`DocumentSource`] hands the scanner each project's documents in
//! discovery order. That order decides which document wins a scalar field,
//! so sources must be deterministic.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::model::RawDocument;

/// One document slot: either its content or the reason it could not be read
pub type DocumentLoad = Result<RawDocument>;

/// Supplies raw documents for a project identifier
pub trait DocumentSource {
    /// Documents for `project`, in discovery order
    ///
    /// Returns [`ScanError::MissingProjectDirectory`] when the project does
    /// not exist. Individual unreadable documents are reported in place so
    /// the rest of the project can still be scanned.
    fn project_documents(&self, project: &str) -> Result<Vec<DocumentLoad>>;
}

/// Walks `<root>/<project>` on disk
#[derive(Debug, Clone)]
pub struct FsDocumentSource {
    root: PathBuf,
    extensions: Vec<String>,
    excluded_dirs: Vec<String>,
}

impl FsDocumentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let defaults = ScanConfig::default();
        Self {
            root: root.into(),
            extensions: defaults.extensions,
            excluded_dirs: defaults.excluded_dirs,
        }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            root: config.root.clone(),
            extensions: config.extensions.clone(),
            excluded_dirs: config.excluded_dirs.clone(),
        }
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.excluded_dirs.iter().any(|dir| dir == name))
    }

    fn has_document_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    fn load(&self, path: &Path) -> DocumentLoad {
        let content = std::fs::read_to_string(path).map_err(|source| ScanError::UnreadableDocument {
            path: path.to_path_buf(),
            source,
        })?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        Ok(RawDocument::new(filename, relative.to_string_lossy(), content))
    }
}

impl DocumentSource for FsDocumentSource {
    fn project_documents(&self, project: &str) -> Result<Vec<DocumentLoad>> {
        let dir = self.root.join(project);
        if !dir.is_dir() {
            return Err(ScanError::MissingProjectDirectory { project: project.to_string(), path: dir });
        }

        let mut documents = Vec::new();
        let walker = WalkDir::new(&dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_excluded(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| dir.clone());
                    documents.push(Err(ScanError::UnreadableDocument { path, source: err.into() }));
                    continue;
                }
            };
            // Symlinked documents count; `is_file` follows the link
            if entry.path().is_file() && self.has_document_extension(entry.path()) {
                documents.push(self.load(entry.path()));
            }
        }

        Ok(documents)
    }
}

/// In-memory documents, for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct StaticDocumentSource {
    projects: HashMap<String, Vec<RawDocument>>,
}

impl StaticDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a project and its documents in discovery order
    pub fn with_project(mut self, project: impl Into<String>, documents: Vec<RawDocument>) -> Self {
        self.projects.insert(project.into(), documents);
        self
    }
}

impl DocumentSource for StaticDocumentSource {
    fn project_documents(&self, project: &str) -> Result<Vec<DocumentLoad>> {
        self.projects
            .get(project)
            .map(|documents| documents.iter().cloned().map(Ok).collect())
            .ok_or_else(|| ScanError::MissingProjectDirectory {
                project: project.to_string(),
                path: PathBuf::from(project),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &[u8]) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn names(loads: &[DocumentLoad]) -> Vec<String> {
        loads
            .iter()
            .filter_map(|load| load.as_ref().ok())
            .map(|doc| doc.path.replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_filters_extensions_and_excluded_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "App/README.md", b"# App");
        write(root, "App/notes.TXT", b"notes");
        write(root, "App/main.rs", b"fn main() {}");
        write(root, "App/node_modules/pkg/README.md", b"# dep");
        write(root, "App/docs/STATUS.md", b"- [x] done");

        let source = FsDocumentSource::new(root);
        let loads = source.project_documents("App").unwrap();
        assert_eq!(names(&loads), vec!["App/README.md", "App/docs/STATUS.md", "App/notes.TXT"]);
    }

    #[test]
    fn test_missing_project_directory() {
        let temp_dir = TempDir::new().unwrap();
        let source = FsDocumentSource::new(temp_dir.path());
        let err = source.project_documents("Nope").unwrap_err();
        assert!(matches!(err, ScanError::MissingProjectDirectory { ref project, .. } if project == "Nope"));
    }

    #[test]
    fn test_file_in_place_of_project_directory_is_missing() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "Flat", b"not a dir");
        let source = FsDocumentSource::new(temp_dir.path());
        assert!(source.project_documents("Flat").is_err());
    }

    #[test]
    fn test_unreadable_document_reported_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "App/a.md", b"fine");
        write(root, "App/b.md", &[0xff, 0xfe, 0xfd]);
        write(root, "App/c.md", b"also fine");

        let loads = FsDocumentSource::new(root).project_documents("App").unwrap();
        assert_eq!(loads.len(), 3);
        assert!(loads[0].is_ok());
        assert!(matches!(loads[1], Err(ScanError::UnreadableDocument { .. })));
        assert!(loads[2].is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_file_name_still_persists() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("P");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join(OsStr::from_bytes(b"notes\xff.md")), "- [x] a\n").unwrap();

        let loads = FsDocumentSource::new(temp_dir.path()).project_documents("P").unwrap();
        let doc = loads[0].as_ref().unwrap();
        assert_eq!(doc.path, "P/notes\u{fffd}.md");
        assert_eq!(doc.filename, "notes\u{fffd}.md");

        let config = ScanConfig { root: temp_dir.path().to_path_buf(), projects: vec!["P".into()], ..Default::default() };
        let report = crate::scanner::Scanner::new(&config)
            .with_observer(crate::observer::NullObserver)
            .scan(&FsDocumentSource::from_config(&config))
            .unwrap();
        assert_eq!(report.projects[0].completed_features, vec!["a"]);

        let output = temp_dir.path().join("analysis.json");
        crate::persist::save(&report, &output).unwrap();
        assert_eq!(crate::persist::load(&output).unwrap(), report);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_document_is_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "shared.md", b"- [x] shared\n");
        fs::create_dir_all(root.join("P")).unwrap();
        std::os::unix::fs::symlink(root.join("shared.md"), root.join("P/README.md")).unwrap();

        let loads = FsDocumentSource::new(root).project_documents("P").unwrap();
        assert_eq!(names(&loads), vec!["P/README.md"]);
        assert_eq!(loads[0].as_ref().unwrap().content, "- [x] shared\n");
    }

    #[test]
    fn test_static_source() {
        let source = StaticDocumentSource::new()
            .with_project("P", vec![RawDocument::new("a.md", "P/a.md", "text")]);
        assert_eq!(source.project_documents("P").unwrap().len(), 1);
        assert!(source.project_documents("Q").is_err());
    }
}
