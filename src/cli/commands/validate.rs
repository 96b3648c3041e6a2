//! Validate configuration command.

use anyhow::Result;
use quoteview_config::load_config;
use std::path::Path;

pub fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    };
    if let Err(e) = config.validate() {
        println!("Configuration error: {}", e);
        return Err(e.into());
    }

    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Log level: {}", config.logging.level);
    println!("Symbol: {}", config.chart.symbol);
    println!("Days kept: {}", config.chart.limit);
    println!("SMA window: {}", config.chart.sma_window);
    println!("VWMA window: {}", config.chart.vwma_window);
    println!("Histogram bins: {}", config.chart.histogram_bins);
    println!(
        "API key variable: {} ({})",
        config.provider.api_key_env,
        if std::env::var_os(&config.provider.api_key_env).is_some() {
            "set"
        } else {
            "not set"
        }
    );
    println!();
    println!("Effective configuration:");
    println!("{}", config.to_toml()?);

    Ok(())
}
