//! Quote provider trait definitions.

use crate::error::ProviderError;
use crate::types::RawQuotes;
use async_trait::async_trait;

/// Source of daily quotes for a symbol.
///
/// Providers return quotes untouched; parsing and selection belong to the
/// normalizer. Failures are returned as-is and never retried here.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch daily quotes keyed by ISO date.
    ///
    /// # Arguments
    /// * `symbol` - The ticker to fetch
    async fn daily_quotes(&self, symbol: &str) -> Result<RawQuotes, ProviderError>;

    /// Get the provider name.
    fn name(&self) -> &str;
}
