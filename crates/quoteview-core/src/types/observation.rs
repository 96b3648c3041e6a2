//! Daily OHLCV observations and the bounded series that holds them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// One trading day's normalized OHLCV record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Trading day
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Shares traded
    pub volume: u64,
}

impl Observation {
    /// Create a new observation.
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Observations for one symbol, strictly ascending by date.
///
/// Deserialization goes through [`Series::from_ascending`], so the order
/// holds for every constructed series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SeriesRecord")]
pub struct Series {
    /// Symbol identifier
    pub symbol: String,
    observations: Vec<Observation>,
    /// Maximum length (0 = unlimited)
    #[serde(skip)]
    capacity: usize,
}

impl Series {
    /// Create a new empty series.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            observations: Vec::new(),
            capacity: 0,
        }
    }

    /// Build a series from observations that are already in date order.
    pub fn from_ascending(
        symbol: impl Into<String>,
        observations: Vec<Observation>,
    ) -> Result<Self, DataError> {
        for pair in observations.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(DataError::UnorderedDates {
                    previous: pair[0].date,
                    next: pair[1].date,
                });
            }
        }
        Ok(Self {
            symbol: symbol.into(),
            observations,
            capacity: 0,
        })
    }

    /// Restrict the series to a capacity, failing if it already holds more.
    pub fn bounded(mut self, capacity: usize) -> Result<Self, DataError> {
        if capacity > 0 && self.observations.len() > capacity {
            return Err(DataError::CapacityExceeded {
                len: self.observations.len(),
                capacity,
            });
        }
        self.capacity = capacity;
        Ok(self)
    }

    /// Get the number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Maximum length (0 = unlimited).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get all observations as a slice.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Get an observation by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&Observation> {
        self.observations.get(index)
    }

    /// Get the first (oldest) observation.
    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    /// Get the last (most recent) observation.
    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Get an iterator over the observations.
    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.observations.iter()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.observations.iter().map(|o| o.date).collect()
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.close).collect()
    }

    /// First and last date, for a time axis.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.first()?.date, self.last()?.date))
    }

    /// Lowest and highest close, for a value axis.
    pub fn close_range(&self) -> Option<(f64, f64)> {
        extent(self.observations.iter().map(|o| o.close))
    }

    /// Lowest low and highest high, for a candlestick value axis.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let low = extent(self.observations.iter().map(|o| o.low))?.0;
        let high = extent(self.observations.iter().map(|o| o.high))?.1;
        Some((low, high))
    }
}

/// Wire form of a [`Series`], validated on the way in.
#[derive(Deserialize)]
struct SeriesRecord {
    symbol: String,
    observations: Vec<Observation>,
}

impl TryFrom<SeriesRecord> for Series {
    type Error = DataError;

    fn try_from(record: SeriesRecord) -> Result<Self, Self::Error> {
        Series::from_ascending(record.symbol, record.observations)
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn obs(d: u32, close: f64) -> Observation {
        Observation::new(day(d), close - 1.0, close + 2.0, close - 3.0, close, 1000)
    }

    #[test]
    fn test_from_ascending_validates_order() {
        assert!(Series::from_ascending("MSFT", vec![obs(1, 1.0), obs(2, 2.0)]).is_ok());
        assert!(Series::from_ascending("MSFT", vec![obs(2, 1.0), obs(1, 2.0)]).is_err());
        assert!(Series::from_ascending("MSFT", vec![]).unwrap().is_empty());
    }

    #[test]
    fn test_bounded() {
        let series = Series::from_ascending("MSFT", vec![obs(1, 1.0), obs(2, 2.0)]).unwrap();
        assert!(series.clone().bounded(1).is_err());
        assert_eq!(series.bounded(2).unwrap().capacity(), 2);
    }

    #[test]
    fn test_series_extractions() {
        let series =
            Series::from_ascending("MSFT", vec![obs(1, 100.5), obs(2, 101.5)]).unwrap();

        assert_eq!(series.closes(), vec![100.5, 101.5]);
        assert_eq!(series.dates(), vec![day(1), day(2)]);
    }

    #[test]
    fn test_ranges() {
        let series = Series::from_ascending(
            "MSFT",
            vec![obs(1, 100.0), obs(2, 90.0), obs(3, 110.0)],
        )
        .unwrap();

        assert_eq!(series.date_range(), Some((day(1), day(3))));
        assert_eq!(series.close_range(), Some((90.0, 110.0)));
        assert_eq!(series.price_range(), Some((87.0, 112.0)));
        assert_eq!(Series::new("MSFT").close_range(), None);
    }

    #[test]
    fn test_serializes_dates_as_iso() {
        let json = serde_json::to_string(&obs(3, 10.0)).unwrap();
        assert!(json.contains("\"date\":\"2024-01-03\""));
    }

    #[test]
    fn test_deserialize_checks_order() {
        let ordered = r#"{"symbol":"MSFT","observations":[
            {"date":"2024-01-01","open":1.0,"high":1.0,"low":1.0,"close":1.0,"volume":5},
            {"date":"2024-01-02","open":2.0,"high":2.0,"low":2.0,"close":2.0,"volume":5}]}"#;
        let series: Series = serde_json::from_str(ordered).unwrap();
        assert_eq!(series.closes(), vec![1.0, 2.0]);

        let unordered = r#"{"symbol":"MSFT","observations":[
            {"date":"2024-01-02","open":2.0,"high":2.0,"low":2.0,"close":2.0,"volume":5},
            {"date":"2024-01-01","open":1.0,"high":1.0,"low":1.0,"close":1.0,"volume":5}]}"#;
        let err = serde_json::from_str::<Series>(unordered).unwrap_err();
        assert!(err.to_string().contains("out of order"));
    }

    #[test]
    fn test_serialized_series_round_trips() {
        let series = Series::from_ascending("MSFT", vec![obs(1, 10.0), obs(2, 11.0)]).unwrap();
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(serde_json::from_str::<Series>(&json).unwrap(), series);
    }
}
