//! Fetch command implementation.

use anyhow::{bail, Context, Result};
use quoteview_config::AppConfig;
use quoteview_core::error::ChartError;
use quoteview_data::AlphaVantageProvider;
use quoteview_pipeline::ChartPipeline;
use tracing::{error, info};

use super::{emit, resolve};
use crate::cli::FetchArgs;

pub async fn run(args: FetchArgs, config: AppConfig) -> Result<()> {
    let (symbol, pipeline_config) = resolve(&args.report, &config)?;
    info!("Fetching {} daily quotes", symbol);

    let provider_config = config.provider.alpha_vantage().with_context(|| {
        format!(
            "Quote provider is not configured; set {} to your API key",
            config.provider.api_key_env
        )
    })?;
    let provider = AlphaVantageProvider::new(provider_config)?;

    let pipeline = ChartPipeline::new(pipeline_config);
    let report = match pipeline.fetch_and_run(&provider, &symbol).await {
        Ok(report) => report,
        Err(ChartError::Provider(e)) if e.is_rate_limited() => {
            error!(error = %e, "quote provider rate limit");
            bail!("The quote provider's request limit was reached. Please try again later.");
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to prepare chart data for {}", symbol))
        }
    };

    emit(&report, &args.report)
}
