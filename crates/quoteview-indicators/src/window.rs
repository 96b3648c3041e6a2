//! Trailing window bounds shared by the moving averages.

use std::ops::Range;

/// Indices of the trailing window ending at `index`.
///
/// The window covers `[max(0, index + 1 - window), index]`, so it is
/// truncated at the start of the series. `window` must be at least 1.
#[inline]
pub fn trailing_window(index: usize, window: usize) -> Range<usize> {
    debug_assert!(window > 0);
    (index + 1).saturating_sub(window)..index + 1
}
