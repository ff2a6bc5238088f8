//! Core value and error types.
//!
//! This module provides:
//! - `decimal`: Half-up rounding helpers, `DecimalMagnitude` and `SignedMagnitude`
//! - `error`: Structured error types for date, number and statistics operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`DecimalMagnitude`], [`SignedMagnitude`], [`Sign`], [`round_half_up`] from `decimal`
//! - [`DateError`], [`NumberError`], [`StatsError`], [`SourceError`] from `error`

pub mod decimal;
pub mod error;

pub use decimal::{decimal_from_f64, round_half_up, DecimalMagnitude, Sign, SignedMagnitude};
pub use error::{DateError, NumberError, SourceError, StatsError};
