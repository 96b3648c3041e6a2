//! List chart kinds command.

use anyhow::Result;
use quoteview_core::types::{ChartInput, ChartKind};

pub fn run() -> Result<()> {
    println!("Available Charts");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for kind in ChartKind::ALL {
        let uses = match kind.input() {
            ChartInput::Closes => "series closes",
            ChartInput::Ohlc => "series open/high/low/close",
            ChartInput::Sma => "simple moving average (chart.sma_window)",
            ChartInput::Vwma => "volume-weighted moving average (chart.vwma_window)",
            ChartInput::Cumulative => "cumulative close",
            ChartInput::Bins => "close histogram (chart.histogram_bins)",
        };
        println!("  {}", kind);
        println!("  ───────────────────────────────────────────────────────");
        println!("  {}", kind.description());
        println!("  Uses: {}", uses);
        println!();
    }

    println!("Use --charts <a,b,...> to select charts.");

    Ok(())
}
