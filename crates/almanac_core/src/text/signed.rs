//! Signed magnitudes in words, for temperatures.

use rust_decimal::Decimal;

use super::numeral::to_words;
use crate::types::decimal::{decimal_from_f64, DecimalMagnitude, SignedMagnitude};
use crate::types::error::NumberError;

/// Spells a signed value with a "positive" or "minus" prefix.
///
/// `None` yields an empty string, which callers use when there is no value to
/// show. Zero, and anything that rounds to zero, is "positive".
///
/// # Errors
/// `NumberError::OutOfRange` when the magnitude is 1000 or more after rounding.
///
/// # Examples
///
/// ```
/// use almanac_core::text::to_signed_words;
/// use rust_decimal::Decimal;
///
/// assert_eq!(to_signed_words(Some(Decimal::new(-54, 1))).unwrap(), "minus five point four zero");
/// assert_eq!(to_signed_words(Some(Decimal::ZERO)).unwrap(), "positive zero");
/// assert_eq!(to_signed_words(None).unwrap(), "");
/// ```
pub fn to_signed_words(value: Option<Decimal>) -> Result<String, NumberError> {
    let Some(value) = value else {
        return Ok(String::new());
    };

    let signed = SignedMagnitude::new(value);
    let magnitude = DecimalMagnitude::new(signed.magnitude())?;
    Ok(format!("{} {}", signed.sign().word(), to_words(magnitude)))
}

/// Float variant of [`to_signed_words`].
///
/// # Errors
/// Non-finite input, or a magnitude of 1000 or more.
pub fn to_signed_words_f64(value: Option<f64>) -> Result<String, NumberError> {
    to_signed_words(value.map(decimal_from_f64).transpose()?)
}
