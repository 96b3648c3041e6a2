//! Rolling statistic trait definitions.

use crate::error::StatisticError;
use crate::types::{DerivedPoint, Series};

/// A statistic derived from a series, one output point per observation.
///
/// Implementations never shrink the output: early points use a window
/// truncated at the start of the series.
pub trait RollingStatistic: Send + Sync {
    /// Compute the derived series.
    ///
    /// # Arguments
    /// * `series` - Ascending observations
    ///
    /// # Returns
    /// One point per observation, dated like its input
    fn compute(&self, series: &Series) -> Result<Vec<DerivedPoint>, StatisticError>;

    /// Trailing window length, or `None` when the statistic spans the whole series.
    fn window(&self) -> Option<usize>;

    /// Get the name of the statistic.
    fn name(&self) -> &str;
}
