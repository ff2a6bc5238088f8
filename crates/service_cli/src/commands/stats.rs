//! Stats command implementation
//!
//! Aggregates a saved daily forecast document over a date range.

use almanac_core::calendar::{CalendarDate, HistoryWindow};
use almanac_core::stats::{compute_stats_with, StatsResult};
use rust_decimal::Decimal;
use std::path::Path;
use tracing::info;

use crate::config::{AppConfig, OutputFormat};
use crate::source::JsonFileSource;
use crate::Result;

/// Range and window inputs of the stats command.
#[derive(Debug, Clone)]
pub struct StatsRequest<'a> {
    /// Range start, `YYYY-MM-DD`
    pub start: &'a str,
    /// Range end, `YYYY-MM-DD`
    pub end: &'a str,
    /// Forecast document path
    pub samples: &'a Path,
    /// Reference date; the local date when absent
    pub today: Option<&'a str>,
}

/// Validates the request and aggregates the forecast document.
pub fn compute(request: &StatsRequest<'_>, config: &AppConfig) -> Result<StatsResult> {
    let today = match request.today {
        Some(text) => CalendarDate::parse(text)?,
        None => CalendarDate::today()?,
    };
    let window = HistoryWindow::new(today, config.max_history_years);
    let source = JsonFileSource::new(request.samples);

    Ok(compute_stats_with(request.start, request.end, &window, &source)?)
}

fn display(value: Option<Decimal>, text: &str) -> String {
    match value {
        Some(value) => format!("{} ({})", value, text),
        None => "-".to_string(),
    }
}

/// Formats a result for printing.
pub fn render(stats: &StatsResult, format: OutputFormat) -> Result<String> {
    super::render(
        format,
        stats,
        &[
            ("Min", display(stats.min, &stats.min_text)),
            ("Max", display(stats.max, &stats.max_text)),
            ("Average", display(stats.average, &stats.average_text)),
        ],
    )
}

/// Run the stats command
pub fn run(request: &StatsRequest<'_>, config: &AppConfig) -> Result<()> {
    info!("Computing temperature statistics...");
    info!("  Range: {} to {}", request.start, request.end);
    info!("  Samples: {}", request.samples.display());
    info!("  Historical window: {} years", config.max_history_years);

    let stats = compute(request, config)?;
    println!("{}", render(&stats, config.format)?);

    info!("Statistics complete");
    Ok(())
}
