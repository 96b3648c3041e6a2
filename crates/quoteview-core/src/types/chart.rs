//! Chart kinds a presentation layer can draw from a report.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chart kind served by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Bar,
    Line,
    Area,
    Scatter,
    Histogram,
    Candlestick,
    MovingAverage,
    Vwma,
    Cumulative,
}

/// Data a chart kind consumes beyond the normalized series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartInput {
    /// Closes (and dates) only.
    Closes,
    /// Open, high, low and close.
    Ohlc,
    /// Simple moving average.
    Sma,
    /// Volume-weighted moving average.
    Vwma,
    /// Running close total.
    Cumulative,
    /// Close histogram bins.
    Bins,
}

impl ChartKind {
    /// Every chart kind, in display order.
    pub const ALL: [ChartKind; 9] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Area,
        ChartKind::Scatter,
        ChartKind::Histogram,
        ChartKind::Candlestick,
        ChartKind::MovingAverage,
        ChartKind::Vwma,
        ChartKind::Cumulative,
    ];

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Area => "area",
            ChartKind::Scatter => "scatter",
            ChartKind::Histogram => "histogram",
            ChartKind::Candlestick => "candlestick",
            ChartKind::MovingAverage => "moving-average",
            ChartKind::Vwma => "vwma",
            ChartKind::Cumulative => "cumulative",
        }
    }

    /// What the chart needs from the pipeline.
    pub fn input(&self) -> ChartInput {
        match self {
            ChartKind::Bar | ChartKind::Line | ChartKind::Area | ChartKind::Scatter => {
                ChartInput::Closes
            }
            ChartKind::Candlestick => ChartInput::Ohlc,
            ChartKind::Histogram => ChartInput::Bins,
            ChartKind::MovingAverage => ChartInput::Sma,
            ChartKind::Vwma => ChartInput::Vwma,
            ChartKind::Cumulative => ChartInput::Cumulative,
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Closing price per day as bars",
            ChartKind::Line => "Closing price over time as a line",
            ChartKind::Area => "Closing price over time as a filled area",
            ChartKind::Scatter => "Closing price per day as points",
            ChartKind::Histogram => "Distribution of closing prices in equal-width bins",
            ChartKind::Candlestick => "Open, high, low and close per day",
            ChartKind::MovingAverage => "Close with its trailing simple moving average",
            ChartKind::Vwma => "Trailing volume-weighted moving average",
            ChartKind::Cumulative => "Running total of closing prices",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bar" => Ok(ChartKind::Bar),
            "line" => Ok(ChartKind::Line),
            "area" => Ok(ChartKind::Area),
            "scatter" => Ok(ChartKind::Scatter),
            "histogram" | "hist" => Ok(ChartKind::Histogram),
            "candlestick" | "candle" => Ok(ChartKind::Candlestick),
            "moving-average" | "moving_average" | "sma" => Ok(ChartKind::MovingAverage),
            "vwma" => Ok(ChartKind::Vwma),
            "cumulative" | "cumsum" => Ok(ChartKind::Cumulative),
            _ => Err(format!("Unknown chart kind: {}", s)),
        }
    }
}
