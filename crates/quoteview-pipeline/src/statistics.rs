//! Descriptive statistics for a normalized series.

use chrono::NaiveDate;
use quoteview_core::types::Series;
use serde::{Deserialize, Serialize};

/// Figures a chart header or axis setup needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Oldest date in the series
    pub first_date: NaiveDate,
    /// Most recent date in the series
    pub last_date: NaiveDate,
    /// Number of observations
    pub observations: usize,
    pub min_close: f64,
    pub max_close: f64,
    pub mean_close: f64,
    /// Lowest low, bottom of a candlestick axis
    pub min_low: f64,
    /// Highest high, top of a candlestick axis
    pub max_high: f64,
    /// Sum of volumes, capped at `u64::MAX`
    pub total_volume: u64,
    /// Last close minus first close
    pub change: f64,
    /// Change relative to the first close (0 when the first close is 0)
    pub change_pct: f64,
}

impl SeriesSummary {
    /// Summarize a series. Returns `None` for an empty series.
    pub fn from_series(series: &Series) -> Option<Self> {
        let (first_date, last_date) = series.date_range()?;
        let first = series.first()?;
        let last = series.last()?;
        let (min_close, max_close) = series.close_range()?;
        let (min_low, max_high) = series.price_range()?;

        let mean_close = series.iter().map(|o| o.close).sum::<f64>() / series.len() as f64;
        let total_volume = series
            .iter()
            .fold(0u64, |total, o| total.saturating_add(o.volume));
        let change = last.close - first.close;
        let change_pct = if first.close > 0.0 {
            change / first.close * 100.0
        } else {
            0.0
        };

        Some(Self {
            first_date,
            last_date,
            observations: series.len(),
            min_close,
            max_close,
            mean_close,
            min_low,
            max_high,
            total_volume,
            change,
            change_pct,
        })
    }
}
