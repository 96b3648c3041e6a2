//! Analyze command implementation.

use anyhow::{Context, Result};
use quoteview_config::AppConfig;
use quoteview_data::FileQuoteSource;
use quoteview_pipeline::ChartPipeline;
use tracing::info;

use super::{emit, resolve};
use crate::cli::AnalyzeArgs;

pub async fn run(args: AnalyzeArgs, config: AppConfig) -> Result<()> {
    let (symbol, pipeline_config) = resolve(&args.report, &config)?;
    info!("Analyzing {} from {:?}", symbol, args.data);

    let source = FileQuoteSource::new(&args.data)
        .with_context(|| format!("Cannot open quote file {}", args.data.display()))?;
    let raw = source.load().context("Failed to read quotes")?;

    let report = ChartPipeline::new(pipeline_config)
        .run(&symbol, &raw)
        .with_context(|| format!("Failed to prepare chart data for {}", symbol))?;

    emit(&report, &args.report)
}
