//! Scan command - extract, score and persist every configured project

use anyhow::{Context, Result};
use project_scan_core::{FsDocumentSource, ScanConfig, Scanner, persist, report};
use tracing::info;

use crate::cli::app::ScanArgs;

/// Run a scan with `args` layered over `config`
pub fn execute(args: ScanArgs, mut config: ScanConfig) -> Result<()> {
    apply_overrides(&mut config, args.root, args.output, args.projects);

    let scanner = Scanner::new(&config);
    info!("Scanning {} projects under {}", scanner.projects().len(), config.root.display());

    let source = FsDocumentSource::from_config(&config);
    let scan_report = scanner
        .scan(&source)
        .with_context(|| format!("Failed to scan projects under {}", config.root.display()))?;

    if !args.quiet {
        for line in report::render(&scan_report.projects).lines() {
            info!("{}", line);
        }
    }

    persist::save(&scan_report, &config.output)
        .with_context(|| format!("Failed to write analysis to {}", config.output.display()))?;
    info!("Analysis saved to {}", config.output.display());

    for line in report::render_summary(&scan_report.projects).lines() {
        info!("{}", line);
    }

    Ok(())
}

fn apply_overrides(
    config: &mut ScanConfig,
    root: Option<std::path::PathBuf>,
    output: Option<std::path::PathBuf>,
    projects: Vec<String>,
) {
    if let Some(root) = root {
        config.root = root;
    }
    if let Some(output) = output {
        config.output = output;
    }
    if !projects.is_empty() {
        config.projects = projects;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_config() {
        let mut config = ScanConfig::default();
        apply_overrides(&mut config, Some("/srv".into()), None, vec!["Solo".into()]);
        assert_eq!(config.root, PathBuf::from("/srv"));
        assert_eq!(config.output, PathBuf::from("ai_project_analysis.json"));
        assert_eq!(config.projects, vec!["Solo"]);
    }

    #[test]
    fn test_empty_project_flag_keeps_configured_list() {
        let mut config = ScanConfig::default();
        apply_overrides(&mut config, None, None, Vec::new());
        assert_eq!(config.projects.len(), 5);
    }

    #[test]
    fn test_execute_writes_json() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("Alpha");
        std::fs::create_dir_all(&project).unwrap();
        std::fs::write(project.join("STATUS.md"), "- [x] One\n- [x] Two\n- [ ] Three\n").unwrap();
        let output = temp_dir.path().join("out.json");

        let args = ScanArgs {
            root: Some(temp_dir.path().to_path_buf()),
            output: Some(output.clone()),
            projects: vec!["Alpha".into(), "Missing".into(), "Alpha".into()],
            quiet: true,
        };
        execute(args, ScanConfig::default()).unwrap();

        let saved = persist::load(&output).unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved.projects[0].progress, 66);
        let raw = std::fs::read_to_string(&output).unwrap();
        assert_eq!(raw.matches("\"Alpha\": {").count(), 1);
    }
}
