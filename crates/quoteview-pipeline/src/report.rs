//! Chart report generation.

use quoteview_core::types::{Bin, DerivedPoint, Series};
use serde::{Deserialize, Serialize};

use crate::{PipelineConfig, SeriesSummary};

/// Everything a renderer needs for the selected charts of one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartReport {
    pub symbol: String,
    /// Configuration used
    pub config: PipelineConfig,
    pub summary: SeriesSummary,
    /// Normalized observations, oldest first
    pub series: Series,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sma: Option<Vec<DerivedPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vwma: Option<Vec<DerivedPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cumulative: Option<Vec<DerivedPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub histogram: Option<Vec<Bin>>,
}

impl ChartReport {
    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str(&format!("{:^59}\n", format!("{} DAILY CHART DATA", self.symbol)));
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        s.push_str("SERIES\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!(
            "  Period:              {} to {}\n",
            self.summary.first_date, self.summary.last_date
        ));
        s.push_str(&format!(
            "  Observations:        {}\n",
            self.summary.observations
        ));
        s.push_str(&format!(
            "  Close Range:         {:.2} - {:.2}\n",
            self.summary.min_close, self.summary.max_close
        ));
        s.push_str(&format!(
            "  Mean Close:          {:.2}\n",
            self.summary.mean_close
        ));
        s.push_str(&format!(
            "  Change:              {:+.2} ({:+.2}%)\n",
            self.summary.change, self.summary.change_pct
        ));
        s.push_str(&format!(
            "  Total Volume:        {}\n",
            self.summary.total_volume
        ));
        s.push('\n');

        s.push_str("DAILY\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!(
            "  {:<12}{:>10}{:>10}{:>10}{:>10}\n",
            "Date", "Close", "SMA", "VWMA", "Cum."
        ));
        for (i, obs) in self.series.iter().enumerate() {
            s.push_str(&format!(
                "  {:<12}{:>10.2}{:>10}{:>10}{:>10}\n",
                obs.date.to_string(),
                obs.close,
                cell(&self.sma, i),
                cell(&self.vwma, i),
                cell(&self.cumulative, i),
            ));
        }
        s.push('\n');

        if let Some(bins) = &self.histogram {
            s.push_str("HISTOGRAM\n");
            s.push_str("───────────────────────────────────────────────────────────\n");
            for bin in bins.iter().filter(|b| b.count > 0) {
                s.push_str(&format!(
                    "  {:>10.2} - {:<10.2} {}\n",
                    bin.lower_bound,
                    bin.upper_bound,
                    "#".repeat(bin.count)
                ));
            }
            s.push('\n');
        }

        s.push_str("═══════════════════════════════════════════════════════════\n");

        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV (observations only).
    pub fn series_to_csv(&self) -> String {
        let mut csv = String::from("date,open,high,low,close,volume\n");
        for obs in &self.series {
            csv.push_str(&format!(
                "{},{},{},{},{},{}\n",
                obs.date, obs.open, obs.high, obs.low, obs.close, obs.volume
            ));
        }
        csv
    }
}

fn cell(points: &Option<Vec<DerivedPoint>>, index: usize) -> String {
    points
        .as_ref()
        .and_then(|p| p.get(index))
        .map(|p| format!("{:.2}", p.value))
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChartPipeline;
    use quoteview_core::types::{ChartKind, RawQuote, RawQuotes};

    fn report(charts: Vec<ChartKind>) -> ChartReport {
        let raw: RawQuotes = [
            ("2023-01-01", "80"),
            ("2023-01-02", "90"),
            ("2023-01-03", "100"),
        ]
        .iter()
        .map(|(d, c)| (d.to_string(), RawQuote::new(*c, *c, *c, *c, "10")))
        .collect();
        let config = PipelineConfig {
            sma_window: 2,
            charts,
            ..PipelineConfig::default()
        };
        ChartPipeline::new(config).run("MSFT", &raw).unwrap()
    }

    #[test]
    fn test_report_summary() {
        let summary = report(ChartKind::ALL.to_vec()).summary();

        assert!(summary.contains("MSFT DAILY CHART DATA"));
        assert!(summary.contains("2023-01-01 to 2023-01-03"));
        assert!(summary.contains("85.00"));
        assert!(summary.contains("+20.00"));
        assert!(summary.contains("HISTOGRAM"));
    }

    #[test]
    fn test_summary_marks_missing_columns() {
        let summary = report(vec![ChartKind::Line]).summary();
        assert!(summary.contains(" -"));
        assert!(!summary.contains("HISTOGRAM"));
    }

    #[test]
    fn test_json_shape() {
        let json = report(vec![ChartKind::MovingAverage]).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["symbol"], "MSFT");
        assert_eq!(value["series"]["observations"][0]["date"], "2023-01-01");
        assert_eq!(value["sma"][1]["value"], 85.0);
        assert!(value.get("vwma").is_none());
        assert_eq!(value["config"]["charts"][0], "moving-average");
    }

    #[test]
    fn test_series_to_csv() {
        let csv = report(vec![ChartKind::Bar]).series_to_csv();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "date,open,high,low,close,volume");
        assert_eq!(lines[1], "2023-01-01,80,80,80,80,10");
        assert_eq!(lines.len(), 4);
    }
}
