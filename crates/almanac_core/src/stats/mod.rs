//! Temperature statistics.
//!
//! This module provides:
//! - `samples`: `TemperatureSampleSet` and the `SampleSource` seam for fetching it
//! - `aggregate`: Range validation, min/max/mean reduction and word rendering
//!
//! # Examples
//!
//! ```
//! use almanac_core::calendar::{CalendarDate, DateRange, HistoryWindow};
//! use almanac_core::stats::{compute_stats_with, TemperatureSampleSet};
//! use almanac_core::types::SourceError;
//!
//! let today = CalendarDate::parse("2026-10-17").unwrap();
//! let window = HistoryWindow::new(today, 1);
//! let source = |_: &DateRange| -> Result<TemperatureSampleSet, SourceError> {
//!     Ok(TemperatureSampleSet::new(vec![20.0, 18.5], vec![30.0, 28.5], vec![25.0, 23.5]))
//! };
//!
//! let stats = compute_stats_with("2026-10-10", "2026-10-11", &window, &source).unwrap();
//! assert_eq!(stats.min_text, "positive eighteen point five zero");
//! ```

pub mod aggregate;
pub mod samples;

pub use aggregate::{aggregate, compute_stats, compute_stats_with, StatsResult};
pub use samples::{SampleSource, TemperatureSampleSet};
