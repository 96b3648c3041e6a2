//! Quote providers and series normalization.

mod alpha_vantage;
mod file_source;
mod normalize;

pub use alpha_vantage::{parse_response, AlphaVantageConfig, AlphaVantageProvider};
pub use file_source::FileQuoteSource;
pub use normalize::normalize;
