//! Core types and traits for the quote charting pipeline.
//!
//! This crate provides the foundational building blocks including:
//! - Raw provider quotes (RawQuote, RawQuotes)
//! - Normalized market data (Observation, Series)
//! - Statistic outputs (DerivedPoint, Bin) and chart kinds
//! - Core traits for rolling statistics and quote providers

pub mod types;
pub mod traits;
pub mod error;

pub use error::{ChartError, ChartResult};
pub use types::*;
pub use traits::*;
