//! Raw provider quotes, as delivered before normalization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One trading day's quote exactly as the provider sends it.
///
/// Every field is text. Fields a provider omits stay `None` and are
/// resolved by the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuote {
    #[serde(rename = "1. open", alias = "open", default, skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,
    #[serde(rename = "2. high", alias = "high", default, skip_serializing_if = "Option::is_none")]
    pub high: Option<String>,
    #[serde(rename = "3. low", alias = "low", default, skip_serializing_if = "Option::is_none")]
    pub low: Option<String>,
    #[serde(rename = "4. close", alias = "close", default, skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
    #[serde(rename = "5. volume", alias = "volume", default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
}

impl RawQuote {
    /// Create a quote with all five fields present.
    pub fn new(
        open: impl Into<String>,
        high: impl Into<String>,
        low: impl Into<String>,
        close: impl Into<String>,
        volume: impl Into<String>,
    ) -> Self {
        Self {
            open: Some(open.into()),
            high: Some(high.into()),
            low: Some(low.into()),
            close: Some(close.into()),
            volume: Some(volume.into()),
        }
    }

    /// Create a quote carrying only a close price.
    pub fn close_only(close: impl Into<String>) -> Self {
        Self {
            close: Some(close.into()),
            ..Self::default()
        }
    }
}

/// Quotes for one symbol keyed by ISO-8601 date string.
pub type RawQuotes = BTreeMap<String, RawQuote>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_provider_fields() {
        let json = r#"{
            "1. open": "330.1200",
            "2. high": "334.0000",
            "3. low": "329.5000",
            "4. close": "333.7000",
            "5. volume": "21000000"
        }"#;
        let quote: RawQuote = serde_json::from_str(json).unwrap();

        assert_eq!(quote.open.as_deref(), Some("330.1200"));
        assert_eq!(quote.close.as_deref(), Some("333.7000"));
        assert_eq!(quote.volume.as_deref(), Some("21000000"));
    }

    #[test]
    fn test_deserialize_partial_quote() {
        let raw: RawQuotes =
            serde_json::from_str(r#"{"2023-01-01": {"4. close": "80"}}"#).unwrap();
        let quote = &raw["2023-01-01"];

        assert_eq!(quote, &RawQuote::close_only("80"));
        assert!(quote.volume.is_none());
    }

    #[test]
    fn test_serialize_uses_provider_names() {
        let json = serde_json::to_string(&RawQuote::close_only("100")).unwrap();
        assert_eq!(json, r#"{"4. close":"100"}"#);
    }
}
