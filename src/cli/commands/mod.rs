//! CLI command implementations.

pub mod analyze;
pub mod charts;
pub mod fetch;
pub mod validate;

use anyhow::{Context, Result};
use quoteview_config::AppConfig;
use quoteview_pipeline::{ChartReport, PipelineConfig};
use tracing::info;

use crate::cli::{OutputFormat, ReportArgs};

/// Symbol and pipeline settings after applying command-line overrides.
fn resolve(args: &ReportArgs, config: &AppConfig) -> Result<(String, PipelineConfig)> {
    config.validate().context("Invalid configuration")?;

    let symbol = args
        .symbol
        .clone()
        .unwrap_or_else(|| config.chart.symbol.clone())
        .to_uppercase();
    let mut pipeline = config.chart.pipeline_config();
    if let Some(limit) = args.limit {
        pipeline.limit = limit;
    }
    if let Some(charts) = &args.charts {
        pipeline.charts = charts.clone();
    }
    pipeline.validate().context("Invalid chart options")?;

    Ok((symbol, pipeline))
}

/// Print the report and save it if requested.
fn emit(report: &ChartReport, args: &ReportArgs) -> Result<()> {
    match args.output {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Csv => print!("{}", report.series_to_csv()),
        OutputFormat::Text => println!("{}", report.summary()),
    }

    if let Some(save_path) = &args.save {
        let json = report.to_json()?;
        std::fs::write(save_path, json)
            .with_context(|| format!("Failed to write {}", save_path.display()))?;
        info!("Report saved to {:?}", save_path);
    }

    Ok(())
}
