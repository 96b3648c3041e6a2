//! Normalize-then-compute pipeline producing chart reports.

mod engine;
mod report;
mod statistics;

pub use engine::{ChartPipeline, PipelineConfig};
pub use report::ChartReport;
pub use statistics::SeriesSummary;
