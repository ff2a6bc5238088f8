//! Proleptic Gregorian calendar arithmetic.
//!
//! This module provides:
//! - `date`: `CalendarDate`, a validated `YYYY-MM-DD` date in years 1-9999
//! - `gregorian`: Leap-year rule, month lengths, day ordinals and day differences
//! - `range`: `DateRange` and the historical-window policy used by statistics
//!
//! # Examples
//!
//! ```
//! use almanac_core::calendar::{difference_str, is_leap_year};
//!
//! assert!(is_leap_year(2000));
//! assert!(!is_leap_year(1900));
//! assert_eq!(difference_str("2024-01-11", "2024-01-01").unwrap(), 10);
//! ```

pub mod date;
pub mod gregorian;
pub mod range;

pub use date::CalendarDate;
pub use gregorian::{days_in_month, difference, difference_str, is_leap_year, to_ordinal};
pub use range::{validate_range, DateRange, HistoryWindow};
