//! File-backed temperature sample source.
//!
//! Reads a saved Open-Meteo style daily forecast document:
//!
//! ```json
//! { "daily": {
//!     "time": ["2026-01-01", "2026-01-02"],
//!     "temperature_2m_min": [10.1, null],
//!     "temperature_2m_max": [23.0, 21.4],
//!     "temperature_2m_mean": [15.4, 15.9] } }
//! ```
//!
//! `null` readings are gaps. When `time` is present only the days inside the
//! requested range are kept; without it every reading is used.

use almanac_core::calendar::{CalendarDate, DateRange};
use almanac_core::stats::{SampleSource, TemperatureSampleSet};
use almanac_core::types::SourceError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level forecast document.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDocument {
    /// Daily aggregates, absent when the provider returned none
    pub daily: Option<DailySeries>,
}

/// Daily series keyed the way Open-Meteo names them.
#[derive(Debug, Clone, Deserialize)]
pub struct DailySeries {
    /// Day of each reading, `YYYY-MM-DD`
    pub time: Option<Vec<String>>,
    /// Daily minimum at 2 m
    #[serde(rename = "temperature_2m_min")]
    pub min: Option<Vec<Option<f64>>>,
    /// Daily maximum at 2 m
    #[serde(rename = "temperature_2m_max")]
    pub max: Option<Vec<Option<f64>>>,
    /// Daily mean at 2 m
    #[serde(rename = "temperature_2m_mean")]
    pub mean: Option<Vec<Option<f64>>>,
}

impl DailySeries {
    /// Selects the readings that fall inside `range`.
    ///
    /// # Errors
    /// `SourceError` when a `time` entry is not a date or a series length
    /// differs from the `time` length.
    pub fn select(&self, range: &DateRange) -> Result<TemperatureSampleSet, SourceError> {
        let Some(time) = &self.time else {
            return Ok(TemperatureSampleSet {
                min: self.min.as_deref().map(fill_gaps),
                max: self.max.as_deref().map(fill_gaps),
                mean: self.mean.as_deref().map(fill_gaps),
            });
        };

        let mut keep = Vec::with_capacity(time.len());
        for day in time {
            let date = CalendarDate::parse(day)
                .map_err(|e| SourceError::new(format!("Bad day in forecast: {}", e)))?;
            keep.push(range.start() <= date && date <= range.end());
        }
        debug!(
            days = time.len(),
            selected = keep.iter().filter(|k| **k).count(),
            "selected forecast days"
        );

        let pick = |name: &str, series: &Option<Vec<Option<f64>>>| {
            series
                .as_deref()
                .map(|values| {
                    if values.len() != keep.len() {
                        return Err(SourceError::new(format!(
                            "Series {} has {} readings for {} days",
                            name,
                            values.len(),
                            keep.len()
                        )));
                    }
                    let selected: Vec<Option<f64>> = values
                        .iter()
                        .zip(&keep)
                        .filter(|(_, k)| **k)
                        .map(|(v, _)| *v)
                        .collect();
                    Ok(fill_gaps(&selected))
                })
                .transpose()
        };

        Ok(TemperatureSampleSet {
            min: pick("temperature_2m_min", &self.min)?,
            max: pick("temperature_2m_max", &self.max)?,
            mean: pick("temperature_2m_mean", &self.mean)?,
        })
    }
}

/// Maps `null` readings to NaN, which aggregation skips.
fn fill_gaps(values: &[Option<f64>]) -> Vec<f64> {
    values.iter().map(|v| v.unwrap_or(f64::NAN)).collect()
}

/// Parses a forecast document and selects the readings for `range`.
///
/// # Errors
/// `SourceError` for malformed JSON, a missing `daily` object, or an
/// inconsistent document.
pub fn parse_forecast(json: &str, range: &DateRange) -> Result<TemperatureSampleSet, SourceError> {
    let document: ForecastDocument = serde_json::from_str(json)
        .map_err(|e| SourceError::new(format!("Malformed forecast document: {}", e)))?;
    let daily = document
        .daily
        .ok_or_else(|| SourceError::new("No weather data available"))?;
    daily.select(range)
}

/// Sample source reading a forecast document from disk on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source for the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the document path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SampleSource for JsonFileSource {
    fn fetch(&self, range: &DateRange) -> Result<TemperatureSampleSet, SourceError> {
        debug!(path = %self.path.display(), "reading forecast document");
        let json = std::fs::read_to_string(&self.path).map_err(|e| {
            SourceError::new(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        parse_forecast(&json, range)
    }
}
