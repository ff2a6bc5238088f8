//! English word rendering of decimals.
//!
//! This module provides:
//! - `numeral`: Words for a [`DecimalMagnitude`](crate::types::DecimalMagnitude) in [0, 999.99]
//! - `signed`: The same words behind a "positive"/"minus" prefix, for temperatures

pub mod numeral;
pub mod signed;

pub use numeral::{to_words, to_words_decimal, to_words_f64, to_words_str};
pub use signed::{to_signed_words, to_signed_words_f64};
