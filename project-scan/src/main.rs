use anyhow::{Context, Result};
use clap::Parser;
use project_scan_core::ScanConfig;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Parse CLI arguments first to get verbosity level
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let config = match &cli.config {
        Some(path) => ScanConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ScanConfig::default(),
    };
    debug!("Configuration: {:?}", config);

    match cli.command {
        Commands::Scan(args) => {
            info!("Scan command: {:?}", args);
            cli::commands::scan::execute(args, config)?;
        }
        Commands::Report(args) => {
            info!("Report command: {:?}", args);
            cli::commands::report::execute(args)?;
        }
        Commands::InitConfig { path } => {
            cli::commands::init_config::execute(&path)?;
        }
    }

    Ok(())
}
