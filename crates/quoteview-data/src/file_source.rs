//! Quotes saved to disk.

use async_trait::async_trait;
use csv::ReaderBuilder;
use quoteview_core::error::{DataError, ProviderError};
use quoteview_core::traits::QuoteProvider;
use quoteview_core::types::{RawQuote, RawQuotes};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::alpha_vantage::extract_time_series;

/// CSV record format. Values stay text until normalization.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open", default)]
    open: Option<String>,
    #[serde(alias = "High", default)]
    high: Option<String>,
    #[serde(alias = "Low", default)]
    low: Option<String>,
    #[serde(alias = "Close", default)]
    close: Option<String>,
    #[serde(alias = "Volume", default)]
    volume: Option<String>,
}

impl From<CsvRecord> for RawQuote {
    fn from(record: CsvRecord) -> Self {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            open: present(record.open),
            high: present(record.high),
            low: present(record.low),
            close: present(record.close),
            volume: present(record.volume),
        }
    }
}

/// Quotes read from a saved provider response (`.json`) or an OHLCV export (`.csv`).
pub struct FileQuoteSource {
    path: PathBuf,
}

impl FileQuoteSource {
    /// Create a source for an existing file.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(DataError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("quote file not found: {}", path.display()),
            )));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Read every quote in the file.
    pub fn load(&self) -> Result<RawQuotes, DataError> {
        let is_csv = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

        let quotes = if is_csv {
            self.load_csv()?
        } else {
            let text = std::fs::read_to_string(&self.path)?;
            parse_json(&text)?
        };

        debug!(path = %self.path.display(), days = quotes.len(), "loaded quote file");
        Ok(quotes)
    }

    fn load_csv(&self) -> Result<RawQuotes, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| DataError::Parse(e.to_string()))?;

        let mut quotes = RawQuotes::new();
        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::Parse(e.to_string()))?;
            let date = record.date.clone();
            if quotes.insert(date.clone(), record.into()).is_some() {
                return Err(DataError::Parse(format!("duplicate row for {}", date)));
            }
        }
        Ok(quotes)
    }
}

/// Accept either a full `TIME_SERIES_DAILY` response or a bare date map.
fn parse_json(text: &str) -> Result<RawQuotes, DataError> {
    let json: Value = serde_json::from_str(text).map_err(|e| DataError::Parse(e.to_string()))?;

    let wrapped = json.get("Time Series (Daily)").is_some();
    let quotes = if wrapped {
        extract_time_series(json).map_err(|e| DataError::Parse(e.to_string()))?
    } else {
        serde_json::from_value(json).map_err(|e| DataError::Parse(e.to_string()))?
    };
    Ok(quotes)
}

#[async_trait]
impl QuoteProvider for FileQuoteSource {
    async fn daily_quotes(&self, _symbol: &str) -> Result<RawQuotes, ProviderError> {
        self.load().map_err(|e| ProviderError::Parse(e.to_string()))
    }

    fn name(&self) -> &str {
        "file"
    }
}
