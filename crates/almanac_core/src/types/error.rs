//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Malformed date text, out-of-range components and date-range policy violations
//! - `NumberError`: Numeral input outside the supported magnitude domain
//! - `SourceError`: Failure reported by a temperature sample source
//! - `StatsError`: Errors from the statistics pipeline

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calendar::CalendarDate;

/// Date-related errors.
///
/// Every variant describes a client-input problem and is never worth
/// retrying. Messages name the offending field and value.
///
/// # Variants
/// - `Empty`: No date text supplied
/// - `Format`: Text does not match `YYYY-MM-DD`
/// - `YearOutOfRange`, `MonthOutOfRange`, `DayOutOfRange`: Component outside its bounds
/// - `StartAfterEnd`, `StartInFuture`, `StartBeforeWindow`: Date-range policy violations
///
/// # Examples
/// ```
/// use almanac_core::types::DateError;
///
/// let err = DateError::MonthOutOfRange { month: 13 };
/// assert_eq!(format!("{}", err), "Month must be between 1 and 12, got: 13");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Date text was empty.
    #[error("Date cannot be empty")]
    Empty,

    /// Date text did not match `YYYY-MM-DD`.
    #[error("Invalid date format. Expected YYYY-MM-DD, got: {input}")]
    Format {
        /// The rejected text
        input: String,
    },

    /// Year outside [1, 9999].
    #[error("Year must be between 1 and 9999, got: {year}")]
    YearOutOfRange {
        /// Year component
        year: i32,
    },

    /// Month outside [1, 12].
    #[error("Month must be between 1 and 12, got: {month}")]
    MonthOutOfRange {
        /// Month component
        month: u32,
    },

    /// Day outside [1, days in month].
    #[error("Day must be between 1 and {max} for month {month} of {year}, got: {day}")]
    DayOutOfRange {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component
        day: u32,
        /// Days in that month
        max: u32,
    },

    /// Range start is after its end.
    #[error("Start date {start} must be before or equal to end date {end}")]
    StartAfterEnd {
        /// Range start
        start: CalendarDate,
        /// Range end
        end: CalendarDate,
    },

    /// Range start is after the reference day.
    #[error("Start date {start} cannot be in the future (today is {today})")]
    StartInFuture {
        /// Range start
        start: CalendarDate,
        /// Reference day
        today: CalendarDate,
    },

    /// Range start precedes the historical window.
    #[error(
        "Start date {start} is too far in the past. Maximum historical data is {years} year(s), earliest allowed is {earliest}"
    )]
    StartBeforeWindow {
        /// Range start
        start: CalendarDate,
        /// Earliest accepted start
        earliest: CalendarDate,
        /// Window length in years
        years: u32,
    },
}

/// Numeral-related errors.
///
/// # Examples
/// ```
/// use almanac_core::types::NumberError;
/// use rust_decimal::Decimal;
///
/// let err = NumberError::OutOfRange { value: Decimal::new(100000, 2) };
/// assert!(format!("{}", err).contains("1000.00"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumberError {
    /// Value outside the spellable domain.
    #[error("Number must be between 0 and 999.99, got: {value}")]
    OutOfRange {
        /// The rejected value, after rounding
        value: Decimal,
    },

    /// NaN or infinite input.
    #[error("Number must be finite, got: {value}")]
    NotFinite {
        /// The rejected value
        value: f64,
    },

    /// Finite input too large for decimal arithmetic.
    #[error("Number cannot be represented as a decimal: {value}")]
    Unrepresentable {
        /// The rejected value
        value: f64,
    },

    /// Text that is not a decimal number.
    #[error("Invalid number: {input}")]
    Parse {
        /// The rejected text
        input: String,
    },
}

/// Failure reported by a [`SampleSource`](crate::stats::SampleSource).
///
/// # Examples
/// ```
/// use almanac_core::types::SourceError;
///
/// let err = SourceError::new("connection reset");
/// assert_eq!(err.message(), "connection reset");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SourceError {
    message: String,
}

impl SourceError {
    /// Create a source error with a description of what failed.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure description.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors from the temperature statistics pipeline.
///
/// `InvalidDate` means the input itself is wrong. `DataUnavailable` means the
/// sample source failed and the same request may succeed later.
///
/// # Examples
/// ```
/// use almanac_core::types::{SourceError, StatsError};
///
/// let err: StatsError = SourceError::new("timed out").into();
/// assert!(err.is_retryable());
/// assert_eq!(format!("{}", err), "Weather data unavailable: timed out");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Date text or date range rejected.
    #[error(transparent)]
    InvalidDate(#[from] DateError),

    /// The sample source could not produce data.
    #[error("Weather data unavailable: {0}")]
    DataUnavailable(String),
}

impl StatsError {
    /// Whether retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StatsError::DataUnavailable(_))
    }
}

impl From<SourceError> for StatsError {
    fn from(err: SourceError) -> Self {
        StatsError::DataUnavailable(err.message)
    }
}
