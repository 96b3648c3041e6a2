//! Configuration structures.

use quoteview_core::error::ProviderError;
use quoteview_core::types::ChartKind;
use quoteview_data::AlphaVantageConfig;
use quoteview_pipeline::PipelineConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub chart: ChartSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Name attached to startup logs
    pub name: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "quoteview".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Quote provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub base_url: String,
    /// Set to route through the RapidAPI gateway
    pub rapidapi_host: Option<String>,
    pub output_size: String,
    pub timeout_secs: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key_env: "ALPHA_VANTAGE_API_KEY".to_string(),
            base_url: "https://www.alphavantage.co".to_string(),
            rapidapi_host: None,
            output_size: "compact".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ProviderSettings {
    /// Build the client config, reading the key from the environment.
    pub fn alpha_vantage(&self) -> Result<AlphaVantageConfig, ProviderError> {
        let mut config = AlphaVantageConfig::from_env(&self.api_key_env)?;
        config.base_url = self.base_url.clone();
        config.rapidapi_host = self.rapidapi_host.clone();
        config.output_size = self.output_size.clone();
        config.timeout = Duration::from_secs(self.timeout_secs);
        Ok(config)
    }
}

/// Chart data settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub symbol: String,
    pub limit: usize,
    pub sma_window: usize,
    pub vwma_window: usize,
    pub histogram_bins: usize,
    pub charts: Vec<ChartKind>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        let pipeline = PipelineConfig::default();
        Self {
            symbol: "MSFT".to_string(),
            limit: pipeline.limit,
            sma_window: pipeline.sma_window,
            vwma_window: pipeline.vwma_window,
            histogram_bins: pipeline.histogram_bins,
            charts: pipeline.charts,
        }
    }
}

impl ChartSettings {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            limit: self.limit,
            sma_window: self.sma_window,
            vwma_window: self.vwma_window,
            histogram_bins: self.histogram_bins,
            charts: self.charts.clone(),
        }
    }
}
