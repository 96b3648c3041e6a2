//! Error types for the charting pipeline.

use chrono::NaiveDate;
use thiserror::Error;

/// Top-level pipeline error.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Statistic error: {0}")]
    Statistic(#[from] StatisticError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Errors raised while loading or normalizing quotes.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("No quotes available")]
    EmptyInput,

    #[error("Malformed quote for {date}: field '{field}' has value {value:?}")]
    MalformedQuote {
        date: String,
        field: &'static str,
        value: String,
    },

    #[error("Duplicate quote date: {0}")]
    DuplicateDate(NaiveDate),

    #[error("Invalid limit {0}: must be at least 1")]
    InvalidLimit(usize),

    #[error("Observations out of order: {next} does not follow {previous}")]
    UnorderedDates { previous: NaiveDate, next: NaiveDate },

    #[error("Series capacity exceeded: {len} observations for capacity {capacity}")]
    CapacityExceeded { len: usize, capacity: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Rolling statistic and binning errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatisticError {
    #[error("Invalid window {0}: must be at least 1")]
    InvalidWindow(usize),

    #[error("Invalid bin count {0}: must be at least 1")]
    InvalidBinCount(usize),

    #[error("Division by zero: total volume is zero in the {window}-day window ending {date}")]
    DivisionByZero { date: NaiveDate, window: usize },
}

/// Quote provider errors.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Response has no daily time series")]
    MissingTimeSeries,

    #[error("Parse error: {0}")]
    Parse(String),
}

impl ProviderError {
    /// Whether the provider refused the call because of its request quota.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ProviderError::RateLimited(_))
    }
}

/// Result type alias for pipeline operations.
pub type ChartResult<T> = Result<T, ChartError>;
