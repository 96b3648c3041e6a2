//! Raw quote normalization.

use chrono::NaiveDate;
use num_traits::ToPrimitive;
use quoteview_core::error::DataError;
use quoteview_core::types::{Observation, RawQuote, RawQuotes, Series};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

/// Date format of provider keys.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Turn raw quotes into an ascending series of the `limit` most recent days.
///
/// Fails on the first unparseable date or field; no partial series is
/// returned. A missing open, high or low takes the close; a missing volume
/// is zero. A missing close is malformed.
pub fn normalize(symbol: &str, raw: &RawQuotes, limit: usize) -> Result<Series, DataError> {
    if limit == 0 {
        return Err(DataError::InvalidLimit(limit));
    }
    if raw.is_empty() {
        return Err(DataError::EmptyInput);
    }

    let mut dated = raw
        .iter()
        .map(|(key, quote)| Ok((parse_date(key)?, key.as_str(), quote)))
        .collect::<Result<Vec<_>, DataError>>()?;

    // Most recent first, so the limit keeps the newest days
    dated.sort_by(|a, b| b.0.cmp(&a.0));
    if let Some(pair) = dated.windows(2).find(|pair| pair[0].0 == pair[1].0) {
        return Err(DataError::DuplicateDate(pair[0].0));
    }
    dated.truncate(limit);
    dated.reverse();

    let observations = dated
        .into_iter()
        .map(|(date, key, quote)| parse_quote(date, key, quote))
        .collect::<Result<Vec<_>, DataError>>()?;

    debug!(
        symbol,
        raw_dates = raw.len(),
        retained = observations.len(),
        "normalized quotes"
    );

    Series::from_ascending(symbol, observations)?.bounded(limit)
}

fn parse_date(key: &str) -> Result<NaiveDate, DataError> {
    NaiveDate::parse_from_str(key.trim(), DATE_FORMAT).map_err(|_| DataError::MalformedQuote {
        date: key.to_string(),
        field: "date",
        value: key.to_string(),
    })
}

fn parse_quote(date: NaiveDate, key: &str, quote: &RawQuote) -> Result<Observation, DataError> {
    let close = match &quote.close {
        Some(text) => parse_price(key, "close", text)?,
        None => {
            return Err(DataError::MalformedQuote {
                date: key.to_string(),
                field: "close",
                value: String::new(),
            })
        }
    };
    let price_or_close = |field: &'static str, text: &Option<String>| match text {
        Some(text) => parse_price(key, field, text),
        None => Ok(close),
    };

    Ok(Observation {
        date,
        open: price_or_close("open", &quote.open)?,
        high: price_or_close("high", &quote.high)?,
        low: price_or_close("low", &quote.low)?,
        close,
        volume: match &quote.volume {
            Some(text) => parse_volume(key, text)?,
            None => 0,
        },
    })
}

/// Parse a non-negative decimal price.
///
/// The text must be a plain decimal; the float is then read from the same
/// text so it is the nearest `f64` to what the provider sent. Values outside
/// the `Decimal` range (magnitude above about 7.9e28) are malformed.
fn parse_price(key: &str, field: &'static str, text: &str) -> Result<f64, DataError> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed)
        .ok()
        .filter(|d| !d.is_sign_negative() || d.is_zero())
        .and_then(|_| trimmed.parse::<f64>().ok())
        .ok_or_else(|| malformed(key, field, text))
}

/// Parse a non-negative integral volume, tolerating a zero fraction.
fn parse_volume(key: &str, text: &str) -> Result<u64, DataError> {
    let trimmed = text.trim();
    if let Ok(volume) = trimmed.parse::<u64>() {
        return Ok(volume);
    }
    Decimal::from_str(trimmed)
        .ok()
        .filter(|d| d.fract().is_zero())
        .and_then(|d| d.to_u64())
        .ok_or_else(|| malformed(key, "volume", text))
}

fn malformed(key: &str, field: &'static str, text: &str) -> DataError {
    DataError::MalformedQuote {
        date: key.to_string(),
        field,
        value: text.to_string(),
    }
}
