//! Quote charting CLI application.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use quoteview_config::load_config_or_default;
use quoteview_monitor::setup_logging;
use std::path::Path;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config_or_default(&cli.config);

    // Setup logging; flags win over the config file
    let (level, json, file) = match &config {
        Ok(config) => (
            cli.log_level
                .map(|l| l.as_str().to_string())
                .unwrap_or_else(|| config.logging.level.clone()),
            cli.json_logs || config.logging.format == "json",
            config.logging.file.clone(),
        ),
        Err(_) => (
            cli.log_level.unwrap_or(cli::LogLevel::Info).as_str().to_string(),
            cli.json_logs,
            None,
        ),
    };
    let _guard = setup_logging(&level, json, file.as_deref().map(Path::new));
    if let Ok(config) = &config {
        info!(app = %config.app.name, version = env!("CARGO_PKG_VERSION"), "starting");
    }

    // Execute command
    match cli.command {
        Commands::Fetch(args) => cli::commands::fetch::run(args, config?).await,
        Commands::Analyze(args) => cli::commands::analyze::run(args, config?).await,
        Commands::Charts => cli::commands::charts::run(),
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config),
    }
}
