//! Chart pipeline.

use quoteview_core::error::{ChartError, ChartResult, DataError, StatisticError};
use quoteview_core::traits::QuoteProvider;
use quoteview_core::types::{ChartInput, ChartKind, RawQuotes};
use quoteview_data::normalize;
use quoteview_indicators::{cumulative, histogram, sma, vwma};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::report::ChartReport;
use crate::statistics::SeriesSummary;

/// Pipeline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Most recent days kept
    pub limit: usize,
    /// Trailing window of the simple moving average
    pub sma_window: usize,
    /// Trailing window of the volume-weighted moving average
    pub vwma_window: usize,
    /// Equal-width buckets in the close histogram
    pub histogram_bins: usize,
    /// Charts to prepare data for
    pub charts: Vec<ChartKind>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            sma_window: 5,
            vwma_window: 5,
            histogram_bins: 20,
            charts: ChartKind::ALL.to_vec(),
        }
    }
}

impl PipelineConfig {
    /// Check every parameter before any data is touched.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.limit == 0 {
            return Err(DataError::InvalidLimit(self.limit).into());
        }
        if self.sma_window == 0 {
            return Err(StatisticError::InvalidWindow(self.sma_window).into());
        }
        if self.vwma_window == 0 {
            return Err(StatisticError::InvalidWindow(self.vwma_window).into());
        }
        if self.histogram_bins == 0 {
            return Err(StatisticError::InvalidBinCount(self.histogram_bins).into());
        }
        if self.charts.is_empty() {
            return Err(ChartError::Config("no charts selected".into()));
        }
        Ok(())
    }

    fn needs(&self, input: ChartInput) -> bool {
        self.charts.iter().any(|kind| kind.input() == input)
    }
}

/// Runs normalization and the statistics the selected charts need.
pub struct ChartPipeline {
    config: PipelineConfig,
}

impl ChartPipeline {
    /// Create a new pipeline.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Build a report from quotes already in hand.
    ///
    /// Any failing stage aborts the run; a report is complete or absent.
    pub fn run(&self, symbol: &str, raw: &RawQuotes) -> ChartResult<ChartReport> {
        self.config.validate()?;

        let series = normalize(symbol, raw, self.config.limit)?;
        let summary = SeriesSummary::from_series(&series).ok_or(DataError::EmptyInput)?;

        let sma = if self.config.needs(ChartInput::Sma) {
            Some(sma(&series, self.config.sma_window)?)
        } else {
            None
        };
        let vwma = if self.config.needs(ChartInput::Vwma) {
            Some(vwma(&series, self.config.vwma_window)?)
        } else {
            None
        };
        let cumulative = self
            .config
            .needs(ChartInput::Cumulative)
            .then(|| cumulative(&series));
        let histogram = if self.config.needs(ChartInput::Bins) {
            Some(histogram(&series, self.config.histogram_bins)?)
        } else {
            None
        };

        debug!(
            symbol,
            observations = series.len(),
            sma = sma.is_some(),
            vwma = vwma.is_some(),
            cumulative = cumulative.is_some(),
            histogram = histogram.is_some(),
            "computed chart data"
        );

        Ok(ChartReport {
            symbol: symbol.to_string(),
            config: self.config.clone(),
            summary,
            series,
            sma,
            vwma,
            cumulative,
            histogram,
        })
    }

    /// Fetch quotes from a provider, then build a report.
    ///
    /// Provider failures, rate limits included, are returned to the caller
    /// without retrying.
    pub async fn fetch_and_run(
        &self,
        provider: &dyn QuoteProvider,
        symbol: &str,
    ) -> ChartResult<ChartReport> {
        info!(symbol, provider = provider.name(), "fetching quotes");
        let raw = provider.daily_quotes(symbol).await?;
        self.run(symbol, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quoteview_core::error::ProviderError;
    use quoteview_core::types::RawQuote;

    fn quotes(days: &[(&str, &str, &str)]) -> RawQuotes {
        days.iter()
            .map(|(date, close, volume)| {
                (
                    date.to_string(),
                    RawQuote::new(*close, *close, *close, *close, *volume),
                )
            })
            .collect()
    }

    fn sample() -> RawQuotes {
        quotes(&[
            ("2023-01-01", "80", "100"),
            ("2023-01-02", "90", "100"),
            ("2023-01-03", "100", "200"),
        ])
    }

    fn values(points: &[quoteview_core::types::DerivedPoint]) -> Vec<f64> {
        points.iter().map(|p| p.value).collect()
    }

    #[test]
    fn test_run_all_charts() {
        let pipeline = ChartPipeline::new(PipelineConfig {
            sma_window: 2,
            vwma_window: 2,
            histogram_bins: 2,
            ..PipelineConfig::default()
        });
        let report = pipeline.run("MSFT", &sample()).unwrap();

        assert_eq!(report.series.closes(), vec![80.0, 90.0, 100.0]);
        assert_eq!(values(report.sma.as_ref().unwrap()), vec![80.0, 85.0, 95.0]);
        let vwma = values(report.vwma.as_ref().unwrap());
        assert!((vwma[2] - (90.0 * 100.0 + 100.0 * 200.0) / 300.0).abs() < 1e-10);
        assert_eq!(values(report.cumulative.as_ref().unwrap()), vec![80.0, 170.0, 270.0]);
        let bins = report.histogram.as_ref().unwrap();
        assert_eq!(bins.iter().map(|b| b.count).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(report.summary.observations, 3);
    }

    #[test]
    fn test_only_requested_statistics() {
        let pipeline = ChartPipeline::new(PipelineConfig {
            charts: vec![ChartKind::Line, ChartKind::MovingAverage],
            ..PipelineConfig::default()
        });
        let report = pipeline.run("MSFT", &sample()).unwrap();

        assert!(report.sma.is_some());
        assert!(report.vwma.is_none());
        assert!(report.cumulative.is_none());
        assert!(report.histogram.is_none());
    }

    #[test]
    fn test_zero_volume_fails_vwma_run() {
        let raw = quotes(&[("2023-01-01", "80", "0"), ("2023-01-02", "90", "0")]);
        let pipeline = ChartPipeline::new(PipelineConfig::default());

        assert!(matches!(
            pipeline.run("MSFT", &raw),
            Err(ChartError::Statistic(StatisticError::DivisionByZero { .. }))
        ));

        // Same data is fine when no VWMA chart is requested
        let pipeline = ChartPipeline::new(PipelineConfig {
            charts: vec![ChartKind::Bar],
            ..PipelineConfig::default()
        });
        assert!(pipeline.run("MSFT", &raw).is_ok());
    }

    #[test]
    fn test_max_volumes_do_not_overflow() {
        let max = u64::MAX.to_string();
        let raw = quotes(&[("2023-01-01", "80", max.as_str()), ("2023-01-02", "90", max.as_str())]);
        let pipeline = ChartPipeline::new(PipelineConfig {
            charts: vec![ChartKind::Bar],
            ..PipelineConfig::default()
        });

        let report = pipeline.run("MSFT", &raw).unwrap();
        assert_eq!(report.summary.total_volume, u64::MAX);
        assert_eq!(report.series.len(), 2);
    }

    #[test]
    fn test_malformed_aborts_run() {
        let mut raw = sample();
        raw.insert("2023-01-04".into(), RawQuote::close_only("?"));
        let pipeline = ChartPipeline::new(PipelineConfig::default());

        assert!(matches!(
            pipeline.run("MSFT", &raw),
            Err(ChartError::Data(DataError::MalformedQuote { .. }))
        ));
    }

    #[test]
    fn test_empty_quotes() {
        let pipeline = ChartPipeline::new(PipelineConfig::default());
        assert!(matches!(
            pipeline.run("MSFT", &RawQuotes::new()),
            Err(ChartError::Data(DataError::EmptyInput))
        ));
    }

    #[test]
    fn test_validate() {
        assert!(PipelineConfig::default().validate().is_ok());

        let bad = PipelineConfig {
            sma_window: 0,
            ..PipelineConfig::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(ChartError::Statistic(StatisticError::InvalidWindow(0)))
        ));

        let none = PipelineConfig {
            charts: vec![],
            ..PipelineConfig::default()
        };
        assert!(matches!(none.validate(), Err(ChartError::Config(_))));
    }

    struct StaticProvider(Result<RawQuotes, fn() -> ProviderError>);

    #[async_trait]
    impl QuoteProvider for StaticProvider {
        async fn daily_quotes(&self, _symbol: &str) -> Result<RawQuotes, ProviderError> {
            match &self.0 {
                Ok(raw) => Ok(raw.clone()),
                Err(make) => Err(make()),
            }
        }

        fn name(&self) -> &str {
            "static"
        }
    }

    #[tokio::test]
    async fn test_fetch_and_run() {
        let pipeline = ChartPipeline::new(PipelineConfig::default());
        let report = pipeline
            .fetch_and_run(&StaticProvider(Ok(sample())), "MSFT")
            .await
            .unwrap();
        assert_eq!(report.symbol, "MSFT");
        assert_eq!(report.series.len(), 3);
    }

    #[tokio::test]
    async fn test_rate_limit_surfaces() {
        let pipeline = ChartPipeline::new(PipelineConfig::default());
        let provider = StaticProvider(Err(|| ProviderError::RateLimited("5 calls per minute".into())));

        match pipeline.fetch_and_run(&provider, "MSFT").await {
            Err(ChartError::Provider(e)) => assert!(e.is_rate_limited()),
            other => panic!("unexpected: {:?}", other.map(|r| r.symbol)),
        }
    }
}
