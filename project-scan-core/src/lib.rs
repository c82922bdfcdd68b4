//! Core functionality for project-scan
//!
//! This crate turns a directory of loosely structured project notes into
//! structured status records: documents are matched against an ordered rule
//! table, merged per project, scored, classified and summarized.

pub mod config;
pub mod describe;
pub mod error;
pub mod extract;
pub mod merge;
pub mod model;
pub mod normalize;
pub mod observer;
pub mod persist;
pub mod report;
pub mod scanner;
pub mod scoring;
pub mod source;

pub use config::ScanConfig;
pub use describe::{DescriptionSynthesizer, ShortDescription};
pub use error::{Result, ScanError};
pub use extract::PatternExtractor;
pub use model::{ExtractionResult, ProjectRecord, ProjectStatus, RawDocument, ScanReport, SourceDocument};
pub use observer::{NullObserver, ScanObserver, TracingObserver};
pub use scanner::Scanner;
pub use source::{DocumentSource, FsDocumentSource, StaticDocumentSource};
