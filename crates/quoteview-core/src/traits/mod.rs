//! Core traits for the charting pipeline.

mod provider;
mod statistic;

pub use provider::QuoteProvider;
pub use statistic::RollingStatistic;
