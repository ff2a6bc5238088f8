//! Leap years, month lengths and day ordinals.
//!
//! Ordinals count days from 0001-01-01 (ordinal 1). They are only meaningful
//! differentially; [`difference`] is the public way to use them.

use super::date::CalendarDate;
use crate::types::error::DateError;

/// Days before the first of each month in a common year.
const DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Returns true for Gregorian leap years.
///
/// Divisible by 4, except centuries, except centuries divisible by 400.
///
/// # Examples
///
/// ```
/// use almanac_core::calendar::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2023));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    if year % 400 == 0 {
        return true;
    }
    if year % 100 == 0 {
        return false;
    }
    year % 4 == 0
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
/// `DateError::MonthOutOfRange` when `month` is not in 1-12.
///
/// # Examples
///
/// ```
/// use almanac_core::calendar::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2).unwrap(), 29);
/// assert_eq!(days_in_month(2023, 2).unwrap(), 28);
/// assert!(days_in_month(2023, 13).is_err());
/// ```
pub fn days_in_month(year: i32, month: u32) -> Result<u32, DateError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(DateError::MonthOutOfRange { month }),
    }
}

/// Returns the day ordinal of `date`, with 0001-01-01 as day 1.
///
/// Equal to summing 365 or 366 for every year before `date.year()`, then the
/// lengths of the earlier months of that year, then the day, but computed in
/// constant time.
pub fn to_ordinal(date: CalendarDate) -> i64 {
    let elapsed_years = i64::from(date.year()) - 1;
    let days_before_year =
        365 * elapsed_years + elapsed_years / 4 - elapsed_years / 100 + elapsed_years / 400;

    let month_index = (date.month() - 1) as usize;
    let leap_day = i64::from(date.month() > 2 && is_leap_year(date.year()));
    let days_before_month = DAYS_BEFORE_MONTH[month_index] + leap_day;

    days_before_year + days_before_month + i64::from(date.day())
}

/// Returns the absolute number of days between two dates.
///
/// Argument order does not matter.
///
/// # Examples
///
/// ```
/// use almanac_core::calendar::{difference, CalendarDate};
///
/// let a = CalendarDate::from_ymd(2023, 1, 1).unwrap();
/// let b = CalendarDate::from_ymd(2024, 1, 1).unwrap();
/// assert_eq!(difference(a, b), 365);
/// assert_eq!(difference(b, a), 365);
/// ```
pub fn difference(a: CalendarDate, b: CalendarDate) -> i64 {
    (to_ordinal(b) - to_ordinal(a)).abs()
}

/// Parses two `YYYY-MM-DD` strings and returns the days between them.
///
/// # Errors
/// The first `DateError` raised while parsing `start`, then `end`.
pub fn difference_str(start: &str, end: &str) -> Result<i64, DateError> {
    let start = CalendarDate::parse(start)?;
    let end = CalendarDate::parse(end)?;
    Ok(difference(start, end))
}
