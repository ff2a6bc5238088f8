//! # almanac_core: Calendar, Numeral Text and Temperature Statistics Engines
//!
//! ## Core Layer Role
//!
//! almanac_core holds every rule-bearing computation of the workspace:
//! - Proleptic Gregorian calendar arithmetic (`calendar`)
//! - English word rendering of decimals and signed magnitudes (`text`)
//! - Temperature statistics with date-range policy (`stats`)
//! - Value types and structured errors (`types`)
//!
//! ## Purity
//!
//! Nothing in this crate touches the network or the filesystem, and the
//! engines never read the system clock: policy inputs such as "today" are
//! passed in by the caller, so every engine operation is a deterministic
//! function of its arguments. The one clock reader is the
//! `CalendarDate::today()` helper, kept for callers that need a default.
//!
//! ## Usage Examples
//!
//! ```rust
//! use almanac_core::calendar::{difference, CalendarDate};
//! use almanac_core::text::to_words_str;
//!
//! let start = CalendarDate::parse("2024-01-01").unwrap();
//! let end = CalendarDate::parse("2024-03-01").unwrap();
//! assert_eq!(difference(start, end), 60);
//!
//! assert_eq!(to_words_str("105").unwrap(), "one hundred five");
//! assert_eq!(to_words_str("0.01").unwrap(), "zero point zero one");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `CalendarDate` and `StatsResult`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calendar;
pub mod stats;
pub mod text;
pub mod types;
