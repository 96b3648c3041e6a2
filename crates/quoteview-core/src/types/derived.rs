//! Outputs of the statistics engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One date-keyed value of a rolling statistic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl DerivedPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// One equal-width histogram bucket over close prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub count: usize,
}

impl Bin {
    /// Width of the bucket.
    #[inline]
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }
}
