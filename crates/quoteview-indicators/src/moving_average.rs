//! Moving average statistics.

use quoteview_core::error::StatisticError;
use quoteview_core::traits::RollingStatistic;
use quoteview_core::types::{DerivedPoint, Series};

use crate::window::trailing_window;

/// Simple Moving Average (SMA).
///
/// Arithmetic mean of the closes in the trailing window. The first
/// `window - 1` points average over the shorter prefix available.
#[derive(Debug, Clone)]
pub struct Sma {
    window: usize,
}

impl Sma {
    /// Create a new SMA with the specified window.
    pub fn new(window: usize) -> Result<Self, StatisticError> {
        if window == 0 {
            return Err(StatisticError::InvalidWindow(window));
        }
        Ok(Self { window })
    }
}

impl RollingStatistic for Sma {
    fn compute(&self, series: &Series) -> Result<Vec<DerivedPoint>, StatisticError> {
        let observations = series.observations();
        let mut result = Vec::with_capacity(observations.len());

        // Sum each window directly so window 1 reproduces the closes exactly
        for (i, obs) in observations.iter().enumerate() {
            let span = &observations[trailing_window(i, self.window)];
            let sum: f64 = span.iter().map(|o| o.close).sum();
            result.push(DerivedPoint::new(obs.date, sum / span.len() as f64));
        }

        Ok(result)
    }

    fn window(&self) -> Option<usize> {
        Some(self.window)
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

/// Volume-Weighted Moving Average (VWMA).
///
/// Each close in the trailing window is weighted by its volume. A window
/// whose volumes sum to zero is an error rather than a NaN.
#[derive(Debug, Clone)]
pub struct Vwma {
    window: usize,
}

impl Vwma {
    /// Create a new VWMA with the specified window.
    pub fn new(window: usize) -> Result<Self, StatisticError> {
        if window == 0 {
            return Err(StatisticError::InvalidWindow(window));
        }
        Ok(Self { window })
    }
}

impl RollingStatistic for Vwma {
    fn compute(&self, series: &Series) -> Result<Vec<DerivedPoint>, StatisticError> {
        let observations = series.observations();
        let mut result = Vec::with_capacity(observations.len());

        for (i, obs) in observations.iter().enumerate() {
            let span = &observations[trailing_window(i, self.window)];
            let (weighted, volume) = span.iter().fold((0.0_f64, 0.0_f64), |(pv, v), o| {
                let vol = o.volume as f64;
                (pv + o.close * vol, v + vol)
            });

            if volume == 0.0 {
                return Err(StatisticError::DivisionByZero {
                    date: obs.date,
                    window: self.window,
                });
            }
            result.push(DerivedPoint::new(obs.date, weighted / volume));
        }

        Ok(result)
    }

    fn window(&self) -> Option<usize> {
        Some(self.window)
    }

    fn name(&self) -> &str {
        "VWMA"
    }
}

/// Trailing simple moving average of closes.
pub fn sma(series: &Series, window: usize) -> Result<Vec<DerivedPoint>, StatisticError> {
    Sma::new(window)?.compute(series)
}

/// Trailing volume-weighted moving average of closes.
pub fn vwma(series: &Series, window: usize) -> Result<Vec<DerivedPoint>, StatisticError> {
    Vwma::new(window)?.compute(series)
}
