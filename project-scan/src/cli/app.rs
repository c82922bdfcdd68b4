use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "project-scan",
    version,
    about = "Project Scan - Turn project notes into status records",
    long_about = "Project Scan reads the markdown and text notes in each project folder, extracts features, tech stack and business notes, and reports a progress score and status for every project."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan project folders and write the record set
    #[command(about = "Scan project folders, write JSON records and log the digest")]
    Scan(ScanArgs),

    /// Render a saved record set
    #[command(about = "Render the digest and summary from a saved JSON record set")]
    Report(ReportArgs),

    /// Write the default configuration
    #[command(name = "init-config", about = "Write the default configuration as TOML")]
    InitConfig {
        /// Destination of the configuration file
        #[arg(default_value = "project-scan.toml")]
        path: PathBuf,
    },
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Directory holding one folder per project
    #[arg(long, help = "Directory holding one folder per project")]
    pub root: Option<PathBuf>,

    /// JSON output file
    #[arg(short, long, help = "Where to write the JSON record set")]
    pub output: Option<PathBuf>,

    /// Projects to scan, replacing the configured list
    #[arg(short, long = "project", help = "Project to scan (repeatable)")]
    pub projects: Vec<String>,

    /// Skip logging the digest
    #[arg(short, long, help = "Do not log the rendered digest")]
    pub quiet: bool,
}

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Previously written JSON record set
    #[arg(help = "JSON record set written by a previous scan")]
    pub file: PathBuf,

    /// Print to stdout instead of the log
    #[arg(long, help = "Write the digest and summary to stdout")]
    pub stdout: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scan_with_overrides() {
        let cli = Cli::try_parse_from([
            "project-scan", "-vv", "scan", "--root", "/srv", "--project", "A", "--project", "B", "--quiet",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.root, Some(PathBuf::from("/srv")));
                assert_eq!(args.projects, vec!["A", "B"]);
                assert!(args.quiet);
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_init_config_default_path() {
        let cli = Cli::try_parse_from(["project-scan", "init-config"]).unwrap();
        assert!(matches!(cli.command, Commands::InitConfig { ref path } if path == &PathBuf::from("project-scan.toml")));
    }

    #[test]
    fn test_report_requires_file() {
        assert!(Cli::try_parse_from(["project-scan", "report"]).is_err());
        let cli = Cli::try_parse_from(["project-scan", "-c", "x.toml", "report", "out.json", "--stdout"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }
}
