//! Alpha Vantage daily time series provider.

use async_trait::async_trait;
use quoteview_core::error::ProviderError;
use quoteview_core::traits::QuoteProvider;
use quoteview_core::types::RawQuotes;
use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Key of the daily series in a `TIME_SERIES_DAILY` response.
const TIME_SERIES_KEY: &str = "Time Series (Daily)";

/// Alpha Vantage API configuration.
#[derive(Debug, Clone)]
pub struct AlphaVantageConfig {
    pub api_key: String,
    /// Base URL; `/query` is appended
    pub base_url: String,
    /// RapidAPI gateway host. When set, the key travels in RapidAPI headers.
    pub rapidapi_host: Option<String>,
    /// `compact` (latest 100 days) or `full`
    pub output_size: String,
    pub timeout: Duration,
}

impl AlphaVantageConfig {
    /// Config for the direct Alpha Vantage endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://www.alphavantage.co".to_string(),
            rapidapi_host: None,
            output_size: "compact".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Config for the RapidAPI gateway.
    pub fn rapidapi(api_key: impl Into<String>) -> Self {
        let host = "alpha-vantage.p.rapidapi.com";
        Self {
            base_url: format!("https://{}", host),
            rapidapi_host: Some(host.to_string()),
            ..Self::new(api_key)
        }
    }

    /// Load the API key from the named environment variable.
    pub fn from_env(key_var: &str) -> Result<Self, ProviderError> {
        let api_key = std::env::var(key_var)
            .map_err(|_| ProviderError::Configuration(format!("{} not set", key_var)))?;
        Ok(Self::new(api_key))
    }

    fn query_url(&self) -> String {
        format!("{}/query", self.base_url.trim_end_matches('/'))
    }
}

/// Alpha Vantage client.
pub struct AlphaVantageProvider {
    config: AlphaVantageConfig,
    client: Client,
}

impl AlphaVantageProvider {
    /// Create a new client.
    pub fn new(config: AlphaVantageConfig) -> Result<Self, ProviderError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::Configuration("API key is empty".into()));
        }

        let mut headers = header::HeaderMap::new();
        if let Some(host) = &config.rapidapi_host {
            headers.insert(
                "X-RapidAPI-Key",
                header::HeaderValue::from_str(&config.api_key)
                    .map_err(|e| ProviderError::Configuration(e.to_string()))?,
            );
            headers.insert(
                "X-RapidAPI-Host",
                header::HeaderValue::from_str(host)
                    .map_err(|e| ProviderError::Configuration(e.to_string()))?,
            );
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Connection(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn query_params(&self, symbol: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("function", "TIME_SERIES_DAILY".to_string()),
            ("symbol", symbol.to_string()),
            ("outputsize", self.config.output_size.clone()),
            ("datatype", "json".to_string()),
        ];
        if self.config.rapidapi_host.is_none() {
            params.push(("apikey", self.config.api_key.clone()));
        }
        params
    }
}

#[async_trait]
impl QuoteProvider for AlphaVantageProvider {
    async fn daily_quotes(&self, symbol: &str) -> Result<RawQuotes, ProviderError> {
        let url = self.config.query_url();
        debug!(symbol, url = %url, "requesting daily series");

        let resp = self
            .client
            .get(&url)
            .query(&self.query_params(symbol))
            .send()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;

        let quotes = parse_response(status, &body)?;
        info!(symbol, days = quotes.len(), "fetched daily quotes");
        Ok(quotes)
    }

    fn name(&self) -> &str {
        "alpha-vantage"
    }
}

/// Interpret a `TIME_SERIES_DAILY` response.
///
/// Alpha Vantage reports quota exhaustion with a 200 and a `Note` or
/// `Information` message, so the body is inspected before the status.
pub fn parse_response(status: StatusCode, body: &str) -> Result<RawQuotes, ProviderError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ProviderError::RateLimited(format!("HTTP {}", status)));
    }

    let json: Value = match serde_json::from_str(body) {
        Ok(json) => json,
        Err(_) if !status.is_success() => {
            return Err(ProviderError::Api(format!("HTTP {}: {}", status, body)));
        }
        Err(e) => return Err(ProviderError::Parse(e.to_string())),
    };

    for key in ["Note", "Information"] {
        if let Some(message) = json.get(key).and_then(Value::as_str) {
            warn!(message, "provider refused request");
            return Err(ProviderError::RateLimited(message.to_string()));
        }
    }
    if let Some(message) = json.get("Error Message").and_then(Value::as_str) {
        return Err(ProviderError::Api(message.to_string()));
    }
    if !status.is_success() {
        return Err(ProviderError::Api(format!("HTTP {}: {}", status, body)));
    }

    extract_time_series(json)
}

/// Pull the date-keyed series out of a parsed response.
pub(crate) fn extract_time_series(mut json: Value) -> Result<RawQuotes, ProviderError> {
    let series = json
        .get_mut(TIME_SERIES_KEY)
        .map(Value::take)
        .ok_or(ProviderError::MissingTimeSeries)?;
    serde_json::from_value(series).map_err(|e| ProviderError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Meta Data": {
            "1. Information": "Daily Prices (open, high, low, close) and Volumes",
            "2. Symbol": "MSFT"
        },
        "Time Series (Daily)": {
            "2024-03-01": {
                "1. open": "411.2700",
                "2. high": "415.8700",
                "3. low": "410.0000",
                "4. close": "415.5000",
                "5. volume": "17823447"
            },
            "2024-02-29": {
                "1. open": "408.6400",
                "2. high": "414.2000",
                "3. low": "405.9200",
                "4. close": "413.6400",
                "5. volume": "31947280"
            }
        }
    }"#;

    #[test]
    fn test_parse_time_series() {
        let quotes = parse_response(StatusCode::OK, SAMPLE).unwrap();

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes["2024-03-01"].close.as_deref(), Some("415.5000"));
        assert_eq!(quotes["2024-02-29"].volume.as_deref(), Some("31947280"));
    }

    #[test]
    fn test_note_is_rate_limit() {
        let body = r#"{"Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute."}"#;
        let err = parse_response(StatusCode::OK, body).unwrap_err();
        assert!(err.is_rate_limited());
    }

    #[test]
    fn test_information_is_rate_limit() {
        let body = r#"{"Information": "You have exceeded the daily request limit."}"#;
        assert!(parse_response(StatusCode::OK, body).unwrap_err().is_rate_limited());
    }

    #[test]
    fn test_http_429() {
        let err = parse_response(StatusCode::TOO_MANY_REQUESTS, "").unwrap_err();
        assert!(err.is_rate_limited());
    }

    #[test]
    fn test_error_message() {
        let body = r#"{"Error Message": "Invalid API call."}"#;
        match parse_response(StatusCode::OK, body) {
            Err(ProviderError::Api(msg)) => assert_eq!(msg, "Invalid API call."),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_missing_series() {
        let body = r#"{"Meta Data": {}}"#;
        assert!(matches!(
            parse_response(StatusCode::OK, body),
            Err(ProviderError::MissingTimeSeries)
        ));
    }

    #[test]
    fn test_server_error_text() {
        let err = parse_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, ProviderError::Api(msg) if msg.contains("502")));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            parse_response(StatusCode::OK, "not json"),
            Err(ProviderError::Parse(_))
        ));
    }

    #[test]
    fn test_query_params() {
        let direct = AlphaVantageProvider::new(AlphaVantageConfig::new("demo")).unwrap();
        let params = direct.query_params("MSFT");
        assert!(params.contains(&("function", "TIME_SERIES_DAILY".to_string())));
        assert!(params.contains(&("apikey", "demo".to_string())));

        let gateway = AlphaVantageProvider::new(AlphaVantageConfig::rapidapi("demo")).unwrap();
        assert!(!gateway.query_params("MSFT").iter().any(|(k, _)| *k == "apikey"));
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            AlphaVantageProvider::new(AlphaVantageConfig::new(" ")),
            Err(ProviderError::Configuration(_))
        ));
    }

    #[test]
    fn test_query_url() {
        let mut config = AlphaVantageConfig::new("k");
        config.base_url = "http://localhost:8080/".to_string();
        assert_eq!(config.query_url(), "http://localhost:8080/query");
    }
}
