//! Rolling statistics over daily series.
//!
//! This crate provides the derived series a chart renderer overlays on prices:
//! - Moving averages (SMA, VWMA) over a trailing window
//! - Cumulative close
//! - Equal-width close histogram
//!
//! Every rolling statistic returns exactly one point per observation. Near
//! the start of the series the trailing window is truncated rather than
//! left undefined.

pub mod cumulative;
pub mod histogram;
pub mod moving_average;
pub mod window;

pub use cumulative::{cumulative, Cumulative};
pub use histogram::histogram;
pub use moving_average::{sma, vwma, Sma, Vwma};
pub use window::trailing_window;
