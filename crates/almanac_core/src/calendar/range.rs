//! Date ranges and the historical-window policy.

use super::date::CalendarDate;
use super::gregorian::difference;
use crate::types::error::DateError;

/// An inclusive date range with `start <= end`.
///
/// # Examples
///
/// ```
/// use almanac_core::calendar::DateRange;
///
/// let range = DateRange::parse("2024-01-01", "2024-01-10").unwrap();
/// assert_eq!(range.day_count(), 10);
///
/// assert!(DateRange::parse("2024-01-10", "2024-01-01").is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateRange {
    /// Creates a range.
    ///
    /// # Errors
    /// `DateError::StartAfterEnd` when `start > end`.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, DateError> {
        if start > end {
            return Err(DateError::StartAfterEnd { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// Parses both bounds as `YYYY-MM-DD` and creates a range.
    ///
    /// # Errors
    /// A parse error for either bound, or `DateError::StartAfterEnd`.
    pub fn parse(start: &str, end: &str) -> Result<Self, DateError> {
        Self::new(CalendarDate::parse(start)?, CalendarDate::parse(end)?)
    }

    /// Returns the first day of the range.
    pub fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the last day of the range.
    pub fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns the number of days covered, both bounds included.
    pub fn day_count(&self) -> i64 {
        difference(self.start, self.end) + 1
    }
}

/// How far back a range may start, relative to a reference day.
///
/// The reference day is passed in rather than read from a clock so that
/// validation stays deterministic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HistoryWindow {
    today: CalendarDate,
    max_history_years: u32,
}

impl HistoryWindow {
    /// Creates a window ending at `today` and reaching back `max_history_years`.
    pub fn new(today: CalendarDate, max_history_years: u32) -> Self {
        HistoryWindow {
            today,
            max_history_years,
        }
    }

    /// Returns the reference day.
    pub fn today(&self) -> CalendarDate {
        self.today
    }

    /// Returns the window length in years.
    pub fn max_history_years(&self) -> u32 {
        self.max_history_years
    }

    /// Returns the earliest accepted start, or `None` when the window reaches
    /// past year 1.
    pub fn earliest_start(&self) -> Option<CalendarDate> {
        self.today.minus_years(self.max_history_years)
    }
}

/// Checks that `range` starts inside `window`.
///
/// Range ordering is already guaranteed by [`DateRange`]. A start on the
/// earliest day of the window, or on `today`, is accepted.
///
/// # Errors
/// - `DateError::StartInFuture` when the start is after `today`
/// - `DateError::StartBeforeWindow` when the start precedes `today` minus the window
///
/// # Examples
///
/// ```
/// use almanac_core::calendar::{validate_range, CalendarDate, DateRange, HistoryWindow};
///
/// let today = CalendarDate::parse("2026-10-17").unwrap();
/// let window = HistoryWindow::new(today, 1);
///
/// let ok = DateRange::parse("2025-10-17", "2026-10-17").unwrap();
/// assert!(validate_range(&ok, &window).is_ok());
///
/// let old = DateRange::parse("2025-10-16", "2026-10-17").unwrap();
/// assert!(validate_range(&old, &window).is_err());
/// ```
pub fn validate_range(range: &DateRange, window: &HistoryWindow) -> Result<(), DateError> {
    let start = range.start();
    let today = window.today();

    if start > today {
        return Err(DateError::StartInFuture { start, today });
    }

    if let Some(earliest) = window.earliest_start() {
        if start < earliest {
            return Err(DateError::StartBeforeWindow {
                start,
                earliest,
                years: window.max_history_years(),
            });
        }
    }

    Ok(())
}
