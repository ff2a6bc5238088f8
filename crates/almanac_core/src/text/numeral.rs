//! Numeral-to-words engine.
//!
//! Integer parts are spelled positionally ("one hundred five", "thirty six").
//! A non-zero fraction adds "point" and both fractional digits one by one,
//! zeros included ("one point five zero"). A zero fraction adds nothing.
//!
//! # Examples
//!
//! ```
//! use almanac_core::text::to_words_str;
//!
//! assert_eq!(to_words_str("36.40").unwrap(), "thirty six point four zero");
//! assert_eq!(to_words_str("36.406").unwrap(), "thirty six point four one");
//! assert_eq!(to_words_str("999.99").unwrap(), "nine hundred ninety nine point nine nine");
//! ```

use rust_decimal::Decimal;

use crate::types::decimal::DecimalMagnitude;
use crate::types::error::NumberError;

const DIGITS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

// Indexed by tens digit; 0 and 1 never looked up.
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Spells a magnitude in English words.
///
/// Total over the domain of [`DecimalMagnitude`]; the value was already
/// rounded half-up to two places when it was constructed.
pub fn to_words(value: DecimalMagnitude) -> String {
    let mut words: Vec<&'static str> = Vec::with_capacity(8);

    push_integer_words(value.integer_part(), &mut words);

    if value.fraction() != 0 {
        words.push("point");
        for digit in value.fraction_digits() {
            words.push(DIGITS[digit as usize]);
        }
    }

    words.join(" ")
}

/// Spells a decimal after checking it lies in [0, 999.99] once rounded.
///
/// # Errors
/// `NumberError::OutOfRange` outside the domain.
pub fn to_words_decimal(value: Decimal) -> Result<String, NumberError> {
    DecimalMagnitude::new(value).map(to_words)
}

/// Spells a float after checking it is finite and in [0, 999.99] once rounded.
///
/// # Errors
/// `NumberError::NotFinite` or `NumberError::OutOfRange`.
pub fn to_words_f64(value: f64) -> Result<String, NumberError> {
    DecimalMagnitude::from_f64(value).map(to_words)
}

/// Spells decimal text such as `"36.40"`.
///
/// # Errors
/// `NumberError::Parse` for non-numeric text, `NumberError::OutOfRange`
/// outside the domain.
pub fn to_words_str(value: &str) -> Result<String, NumberError> {
    value.parse::<DecimalMagnitude>().map(to_words)
}

/// Pushes the words for 0-999.
fn push_integer_words(number: u32, words: &mut Vec<&'static str>) {
    if number == 0 {
        words.push(DIGITS[0]);
        return;
    }

    let hundreds = number / 100;
    if hundreds > 0 {
        words.push(DIGITS[hundreds as usize]);
        words.push("hundred");
    }

    let remainder = number % 100;
    match remainder {
        0 => {}
        10..=19 => words.push(TEENS[(remainder - 10) as usize]),
        _ => {
            let tens = remainder / 10;
            let ones = remainder % 10;
            if tens > 0 {
                words.push(TENS[tens as usize]);
            }
            if ones > 0 {
                words.push(DIGITS[ones as usize]);
            }
        }
    }
}
