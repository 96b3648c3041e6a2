//! Core data types for the charting pipeline.

mod chart;
mod derived;
mod observation;
mod quote;

pub use chart::{ChartInput, ChartKind};
pub use derived::{Bin, DerivedPoint};
pub use observation::{Observation, Series};
pub use quote::{RawQuote, RawQuotes};
