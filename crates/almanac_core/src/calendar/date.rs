//! Validated calendar dates.
//!
//! [`CalendarDate`] can only be obtained through validating constructors, so
//! an out-of-range year, month or day never escapes this module.

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

use super::gregorian::days_in_month;
use crate::types::error::DateError;

/// Earliest supported year.
pub const MIN_YEAR: i32 = 1;

/// Latest supported year.
pub const MAX_YEAR: i32 = 9999;

/// A proleptic Gregorian date between 0001-01-01 and 9999-12-31.
///
/// Ordering follows the calendar. Text form is always `YYYY-MM-DD` with a
/// zero-padded four-digit year.
///
/// # Examples
///
/// ```
/// use almanac_core::calendar::CalendarDate;
///
/// let date = CalendarDate::from_ymd(2024, 2, 29).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.to_string(), "2024-02-29");
///
/// let parsed: CalendarDate = "2024-02-29".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// assert!(CalendarDate::from_ymd(2023, 2, 29).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a date from year, month and day components.
    ///
    /// # Errors
    /// Year outside 1-9999, month outside 1-12, or a day outside the month.
    /// Nothing is clamped.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::YearOutOfRange { year });
        }
        let max = days_in_month(year, month)?;
        if day < 1 || day > max {
            return Err(DateError::DayOutOfRange {
                year,
                month,
                day,
                max,
            });
        }
        Ok(CalendarDate { year, month, day })
    }

    /// Parses strict `YYYY-MM-DD` text.
    ///
    /// Exactly three hyphen-separated fields of 4, 2 and 2 ASCII digits. The
    /// components are then checked as in [`CalendarDate::from_ymd`].
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac_core::calendar::CalendarDate;
    ///
    /// assert!(CalendarDate::parse("2024-06-15").is_ok());
    /// assert!(CalendarDate::parse("2024-6-15").is_err());
    /// assert!(CalendarDate::parse("15-06-2024").is_err());
    /// assert!(CalendarDate::parse("2024-06-31").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        if s.is_empty() {
            return Err(DateError::Empty);
        }
        let format_error = || DateError::Format {
            input: s.to_string(),
        };

        let fields: Vec<&str> = s.split('-').collect();
        let [year, month, day] = fields.as_slice() else {
            return Err(format_error());
        };

        let year = parse_field(year, 4).ok_or_else(format_error)?;
        let month = parse_field(month, 2).ok_or_else(format_error)?;
        let day = parse_field(day, 2).ok_or_else(format_error)?;

        // Four digits always fit in i32
        Self::from_ymd(year as i32, month, day)
    }

    /// Returns today's date from the local system clock.
    ///
    /// Only the service layer should call this; engines take "today" as a
    /// parameter.
    ///
    /// # Errors
    /// The system clock reports a year outside 1-9999.
    pub fn today() -> Result<Self, DateError> {
        Self::try_from(Local::now().date_naive())
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns the same calendar day `years` years earlier.
    ///
    /// February 29 maps to February 28 when the target year is not a leap
    /// year. Returns `None` when the result would precede year 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac_core::calendar::CalendarDate;
    ///
    /// let leap = CalendarDate::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap.minus_years(1).unwrap().to_string(), "2023-02-28");
    /// assert_eq!(leap.minus_years(4).unwrap().to_string(), "2020-02-29");
    /// assert!(leap.minus_years(2024).is_none());
    /// ```
    pub fn minus_years(&self, years: u32) -> Option<Self> {
        let year = i32::try_from(years)
            .ok()
            .and_then(|years| self.year.checked_sub(years))
            .filter(|year| *year >= MIN_YEAR)?;
        let max = days_in_month(year, self.month).ok()?;
        Some(CalendarDate {
            year,
            month: self.month,
            day: self.day.min(max),
        })
    }
}

/// Parses a fixed-width all-digit field.
fn parse_field(field: &str, width: usize) -> Option<u32> {
    if field.len() != width || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, DateError> {
        CalendarDate::parse(s)
    }
}

impl fmt::Display for CalendarDate {
    /// Formats the date as `YYYY-MM-DD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, DateError> {
        CalendarDate::from_ymd(date.year(), date.month(), date.day())
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        // Every CalendarDate is inside chrono's range
        NaiveDate::from_ymd_opt(date.year, date.month, date.day).unwrap_or_default()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::CalendarDate;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for CalendarDate {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for CalendarDate {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            CalendarDate::parse(&s).map_err(de::Error::custom)
        }
    }
}
