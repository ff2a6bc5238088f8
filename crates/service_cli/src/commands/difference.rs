//! Difference command implementation
//!
//! Counts the days between two calendar dates.

use almanac_core::calendar::{difference, CalendarDate};
use serde::Serialize;
use tracing::info;

use crate::config::OutputFormat;
use crate::Result;

/// Result of the difference command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifferenceReport {
    /// First date as given, normalised
    pub start_date: CalendarDate,
    /// Second date as given, normalised
    pub end_date: CalendarDate,
    /// Absolute number of days between them
    pub days: i64,
}

/// Parses both dates and counts the days between them.
pub fn compute(start: &str, end: &str) -> Result<DifferenceReport> {
    let start_date = CalendarDate::parse(start)?;
    let end_date = CalendarDate::parse(end)?;

    Ok(DifferenceReport {
        start_date,
        end_date,
        days: difference(start_date, end_date),
    })
}

/// Formats a report for printing.
pub fn render(report: &DifferenceReport, format: OutputFormat) -> Result<String> {
    super::render(
        format,
        report,
        &[
            ("Start", report.start_date.to_string()),
            ("End", report.end_date.to_string()),
            ("Days", report.days.to_string()),
        ],
    )
}

/// Run the difference command
pub fn run(start: &str, end: &str, format: OutputFormat) -> Result<()> {
    info!("Computing day difference...");
    info!("  Start: {}", start);
    info!("  End: {}", end);

    let report = compute(start, end)?;
    println!("{}", render(&report, format)?);

    info!("Difference complete: {} days", report.days);
    Ok(())
}
