//! Equal-width histogram of closes.

use quoteview_core::error::StatisticError;
use quoteview_core::types::{Bin, Series};
use tracing::trace;

/// Bin closes into `bin_count` equal-width buckets over `[min, max]`.
///
/// A value equal to a bucket's upper bound belongs to that bucket. The
/// domain minimum goes to the first bucket and the last bucket ends exactly
/// at the domain maximum, so every close is counted once. A series with a
/// single distinct close yields one bucket of minimal width. A domain too
/// narrow to split into `bin_count` distinct bounds yields one bucket over
/// `[min, max]`.
pub fn histogram(series: &Series, bin_count: usize) -> Result<Vec<Bin>, StatisticError> {
    if bin_count == 0 {
        return Err(StatisticError::InvalidBinCount(bin_count));
    }
    let Some((min, max)) = series.close_range() else {
        return Ok(Vec::new());
    };

    if min == max {
        let epsilon = min.abs().max(1.0) * f64::EPSILON;
        return Ok(vec![Bin {
            lower_bound: min,
            upper_bound: min + epsilon,
            count: series.len(),
        }]);
    }

    let width = (max - min) / bin_count as f64;
    let mut bins: Vec<Bin> = (0..bin_count)
        .map(|k| Bin {
            lower_bound: min + width * k as f64,
            upper_bound: if k + 1 == bin_count {
                max
            } else {
                min + width * (k + 1) as f64
            },
            count: 0,
        })
        .collect();

    if bins.iter().any(|b| b.upper_bound <= b.lower_bound) {
        trace!(bins = bin_count, min, max, "domain below float resolution, single bin");
        return Ok(vec![Bin {
            lower_bound: min,
            upper_bound: max,
            count: series.len(),
        }]);
    }

    for obs in series {
        let index = bins
            .iter()
            .position(|b| obs.close <= b.upper_bound)
            .unwrap_or(bin_count - 1);
        bins[index].count += 1;
    }

    trace!(bins = bin_count, min, max, "binned closes");
    Ok(bins)
}
