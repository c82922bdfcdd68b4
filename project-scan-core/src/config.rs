//! Scan configuration
//!
//! Loaded from TOML; every field has a default so a partial file is valid.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::describe;
use crate::error::{Result, ScanError};

/// Project identifiers scanned when none are configured
pub const DEFAULT_PROJECTS: &[&str] =
    &["DIYAPP", "BusinessLoclAi", "AiAutoAgency", "CryptoTradingBot", "StockTradingBot"];

/// Main configuration for a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory holding one sub-directory per project
    pub root: PathBuf,

    /// Where the JSON record set is written
    pub output: PathBuf,

    /// Project identifiers to scan, in report order
    pub projects: Vec<String>,

    /// Document extensions to read, without the dot
    pub extensions: Vec<String>,

    /// Directory names never descended into
    pub excluded_dirs: Vec<String>,

    /// Fixed short descriptions keyed by project identifier
    pub descriptions: BTreeMap<String, String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(".."),
            output: PathBuf::from("ai_project_analysis.json"),
            projects: DEFAULT_PROJECTS.iter().map(|p| p.to_string()).collect(),
            extensions: vec!["md".to_string(), "txt".to_string()],
            excluded_dirs: vec!["node_modules".to_string()],
            descriptions: describe::builtin_overrides(),
        }
    }
}

impl ScanConfig {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ScanError::Config {
            path: path.to_path_buf(),
            message: format!("Failed to read config file: {}", e),
        })?;

        toml::from_str(&content).map_err(|e| ScanError::Config {
            path: path.to_path_buf(),
            message: format!("Failed to parse config file: {}", e),
        })
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ScanError::Config {
            path: path.to_path_buf(),
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content)
            .map_err(|source| ScanError::Persist { path: path.to_path_buf(), source })
    }
}
