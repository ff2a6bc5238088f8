//! Check command implementation
//!
//! Prints the effective configuration after file, environment and CLI
//! overrides have been applied.

use serde::Serialize;
use tracing::info;

use crate::config::{AppConfig, OutputFormat};
use crate::{Result, VERSION};

/// Effective configuration snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    /// Crate version
    pub version: &'static str,
    /// Active log level
    pub log_level: String,
    /// Historical window for statistics ranges
    pub max_history_years: u32,
    /// Output format
    pub format: String,
}

impl CheckReport {
    /// Snapshot `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            version: VERSION,
            log_level: config.log_level.to_string(),
            max_history_years: config.max_history_years,
            format: config.format.to_string(),
        }
    }
}

/// Formats a report for printing.
pub fn render(report: &CheckReport, format: OutputFormat) -> Result<String> {
    super::render(
        format,
        report,
        &[
            ("Version", report.version.to_string()),
            ("Log level", report.log_level.clone()),
            ("History (years)", report.max_history_years.to_string()),
            ("Format", report.format.clone()),
        ],
    )
}

/// Run the check command
pub fn run(config: &AppConfig) -> Result<()> {
    info!("Checking configuration...");

    let report = CheckReport::from_config(config);
    println!("{}", render(&report, config.format)?);

    info!("Configuration OK");
    Ok(())
}
