//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use quoteview_core::types::ChartKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quoteview")]
#[command(author, version, about = "Daily quote normalization and rolling statistics for charts")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (defaults to the config file's level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch daily quotes from Alpha Vantage and compute chart data
    Fetch(FetchArgs),
    /// Compute chart data from a saved quote file
    Analyze(AnalyzeArgs),
    /// List chart kinds and the data each one uses
    Charts,
    /// Validate configuration
    ValidateConfig,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Options shared by the report-producing commands.
#[derive(clap::Args)]
pub struct ReportArgs {
    /// Ticker symbol (defaults to chart.symbol)
    #[arg(short = 'S', long)]
    pub symbol: Option<String>,

    /// Most recent days to keep
    #[arg(long)]
    pub limit: Option<usize>,

    /// Charts to prepare (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub charts: Option<Vec<ChartKind>>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Save the JSON report to a file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct FetchArgs {
    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Quote file (provider JSON response or OHLCV CSV)
    #[arg(long)]
    pub data: PathBuf,

    #[command(flatten)]
    pub report: ReportArgs,
}
