//! Running total of closes.

use quoteview_core::error::StatisticError;
use quoteview_core::traits::RollingStatistic;
use quoteview_core::types::{DerivedPoint, Series};

/// Cumulative sum of closes from the first observation.
#[derive(Debug, Clone, Default)]
pub struct Cumulative;

impl RollingStatistic for Cumulative {
    fn compute(&self, series: &Series) -> Result<Vec<DerivedPoint>, StatisticError> {
        Ok(cumulative(series))
    }

    fn window(&self) -> Option<usize> {
        None
    }

    fn name(&self) -> &str {
        "Cumulative"
    }
}

/// Running total of closes, one point per observation.
pub fn cumulative(series: &Series) -> Vec<DerivedPoint> {
    let mut total = 0.0;
    series
        .iter()
        .map(|obs| {
            total += obs.close;
            DerivedPoint::new(obs.date, total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{series, values};

    #[test]
    fn test_constant_closes() {
        let s = series(&[50.0, 50.0, 50.0], &[1, 1, 1]);
        assert_eq!(values(&cumulative(&s)), vec![50.0, 100.0, 150.0]);
    }

    #[test]
    fn test_each_step_adds_close() {
        let s = series(&[331.21, 0.1, 0.2, 329.87, 12.5], &[1; 5]);
        let result = cumulative(&s);

        assert_eq!(result[0].value, s.get(0).unwrap().close);
        for i in 1..result.len() {
            assert_eq!(result[i].value, result[i - 1].value + s.get(i).unwrap().close);
        }
    }

    #[test]
    fn test_trait_matches_function() {
        let s = series(&[1.0, 2.0, 4.0], &[1; 3]);
        assert_eq!(Cumulative.compute(&s).unwrap(), cumulative(&s));
        assert_eq!(Cumulative.window(), None);
    }

    #[test]
    fn test_empty() {
        assert!(cumulative(&series(&[], &[])).is_empty());
    }
}
