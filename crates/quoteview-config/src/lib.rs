//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, ChartSettings, LoggingConfig, ProviderSettings};

use config::{Config, ConfigError, Environment, File};
use quoteview_core::error::ChartError;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ChartError),

    #[error("Invalid configuration: {0}")]
    Field(String),

    #[error("Failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Load configuration from file and environment.
pub fn load_config(path: &Path) -> Result<AppConfig, SettingsError> {
    build(path, true)
}

/// Like [`load_config`], falling back to defaults when the file is missing.
pub fn load_config_or_default(path: &Path) -> Result<AppConfig, SettingsError> {
    if !path.exists() {
        warn!(path = %path.display(), "config file not found, using defaults");
    }
    build(path, false)
}

fn build(path: &Path, required: bool) -> Result<AppConfig, SettingsError> {
    let config = Config::builder()
        .add_source(File::from(path).required(required))
        .add_source(
            Environment::with_prefix("QUOTEVIEW")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("chart.charts")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

impl AppConfig {
    /// Check values the type system does not.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.chart.pipeline_config().validate()?;
        if self.chart.symbol.trim().is_empty() {
            return Err(SettingsError::Field("chart.symbol is empty".into()));
        }
        if !matches!(self.provider.output_size.as_str(), "compact" | "full") {
            return Err(SettingsError::Field(format!(
                "provider.output_size must be compact or full, got {}",
                self.provider.output_size
            )));
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(SettingsError::Field(format!(
                "logging.format must be pretty or json, got {}",
                self.logging.format
            )));
        }
        Ok(())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
