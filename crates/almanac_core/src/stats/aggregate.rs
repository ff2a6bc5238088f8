//! Min/max/average reduction with word rendering.
//!
//! Each series is reduced on its own. An absent, empty or all-gap series
//! leaves its value absent and its text empty without affecting the other
//! two. Values are rounded half-up to two places before rendering.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::samples::{SampleSource, TemperatureSampleSet};
use crate::calendar::{validate_range, DateRange, HistoryWindow};
use crate::text::signed::to_signed_words;
use crate::types::decimal::{decimal_from_f64, round_half_up};
use crate::types::error::StatsError;

/// Aggregate temperatures for a date range, as numbers and as words.
///
/// Text fields are empty exactly when the matching value is absent. A value
/// is absent when its series had no finite reading, or when the reduced
/// value rounds to a magnitude of 1000 or more and cannot be spelled; the
/// latter case is logged at `warn`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StatsResult {
    /// Lowest daily minimum.
    pub min: Option<Decimal>,
    /// Highest daily maximum.
    pub max: Option<Decimal>,
    /// Mean of the daily means.
    pub average: Option<Decimal>,
    /// `min` in words.
    pub min_text: String,
    /// `max` in words.
    pub max_text: String,
    /// `average` in words.
    pub average_text: String,
}

/// Validates `range` against `window`, then aggregates `samples`.
///
/// Validation runs first; on failure `samples` is never inspected.
///
/// # Errors
/// `StatsError::InvalidDate` when the range starts in the future or before
/// the window.
pub fn compute_stats(
    range: &DateRange,
    window: &HistoryWindow,
    samples: &TemperatureSampleSet,
) -> Result<StatsResult, StatsError> {
    validate_range(range, window)?;
    Ok(aggregate(samples))
}

/// Parses and validates the range, fetches samples from `source`, aggregates.
///
/// The source is only called once the range is known to be valid.
///
/// # Errors
/// - `StatsError::InvalidDate` for malformed dates, an inverted range or a
///   range outside the window
/// - `StatsError::DataUnavailable` when the source fails
pub fn compute_stats_with<S>(
    start: &str,
    end: &str,
    window: &HistoryWindow,
    source: &S,
) -> Result<StatsResult, StatsError>
where
    S: SampleSource + ?Sized,
{
    let range = DateRange::parse(start, end)?;
    validate_range(&range, window)?;

    debug!(start = %range.start(), end = %range.end(), "fetching temperature samples");
    let samples = source.fetch(&range).map_err(|err| {
        warn!(error = %err, "temperature sample source failed");
        StatsError::from(err)
    })?;

    Ok(aggregate(&samples))
}

/// Reduces the three series independently.
pub fn aggregate(samples: &TemperatureSampleSet) -> StatsResult {
    let (min, min_text) = summarise("min", reduce(samples.min.as_deref(), Reduction::Min));
    let (max, max_text) = summarise("max", reduce(samples.max.as_deref(), Reduction::Max));
    let (average, average_text) =
        summarise("average", reduce(samples.mean.as_deref(), Reduction::Mean));

    StatsResult {
        min,
        max,
        average,
        min_text,
        max_text,
        average_text,
    }
}

#[derive(Copy, Clone, Debug)]
enum Reduction {
    Min,
    Max,
    Mean,
}

/// Reduces the finite readings of a series, `None` when there are none.
fn reduce(series: Option<&[f64]>, reduction: Reduction) -> Option<f64> {
    let mut readings = series?.iter().copied().filter(|v| v.is_finite());
    let first = readings.next()?;

    let value = match reduction {
        Reduction::Min => readings.fold(first, f64::min),
        Reduction::Max => readings.fold(first, f64::max),
        Reduction::Mean => {
            let (sum, count) = readings.fold((first, 1usize), |(sum, count), v| (sum + v, count + 1));
            sum / count as f64
        }
    };
    Some(value)
}

/// Rounds a reduced value and spells it; any failure leaves the series absent.
fn summarise(series: &str, value: Option<f64>) -> (Option<Decimal>, String) {
    let Some(value) = value else {
        debug!(series, "no readings");
        return (None, String::new());
    };

    let rendered = decimal_from_f64(value)
        .map(round_half_up)
        .and_then(|rounded| Ok((rounded, to_signed_words(Some(rounded))?)));

    match rendered {
        Ok((rounded, text)) => (Some(rounded), text),
        Err(err) => {
            warn!(series, value, error = %err, "reading cannot be rendered, leaving it absent");
            (None, String::new())
        }
    }
}
