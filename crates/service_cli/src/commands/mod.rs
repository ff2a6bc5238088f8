//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands build a
//! serialisable report, render it in the configured [`OutputFormat`] and
//! print it.

pub mod check;
pub mod difference;
pub mod stats;
pub mod words;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// Renders `rows` as aligned `label: value` lines, or `report` as pretty JSON.
pub(crate) fn render<T: Serialize>(
    format: OutputFormat,
    report: &T,
    rows: &[(&str, String)],
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
            let lines: Vec<String> = rows
                .iter()
                .map(|(label, value)| {
                    let label = format!("{}:", label);
                    format!("{:<width$}  {}", label, value, width = width + 1)
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}
