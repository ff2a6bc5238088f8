//! Decimal value types with two-place half-up rounding.
//!
//! Every rounding in the workspace goes through [`round_half_up`], which
//! rounds midpoints away from zero (2.675 becomes 2.68, -2.675 becomes -2.68).
//! `rust_decimal`'s plain `round_dp` uses banker's rounding and must not be
//! used here.
//!
//! # Examples
//!
//! ```
//! use almanac_core::types::{round_half_up, DecimalMagnitude};
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let x = Decimal::from_str("36.405").unwrap();
//! assert_eq!(round_half_up(x).to_string(), "36.41");
//!
//! let m: DecimalMagnitude = "36.4".parse().unwrap();
//! assert_eq!(m.integer_part(), 36);
//! assert_eq!(m.fraction_digits(), [4, 0]);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

use super::error::NumberError;

/// Number of fractional digits kept by every rounding.
pub const SCALE: u32 = 2;

/// Largest value [`DecimalMagnitude`] accepts, in hundredths (999.99).
pub const MAX_HUNDREDTHS: u32 = 99_999;

/// Rounds to two fractional digits, midpoints away from zero.
///
/// Rounding an already two-place value returns it unchanged.
pub fn round_half_up(value: Decimal) -> Decimal {
    let rounded = value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        // Drop the sign of a negative zero.
        Decimal::new(0, SCALE)
    } else {
        rounded
    }
}

/// Converts a float to a decimal through its shortest round-trip text.
///
/// This keeps the value a reader sees (`2.675_f64` becomes `2.675`, not the
/// binary neighbour `2.67499999...`), so midpoint rounding behaves as expected.
///
/// # Errors
/// `NumberError::NotFinite` for NaN or infinities, `NumberError::Unrepresentable`
/// when the value exceeds decimal range.
pub fn decimal_from_f64(value: f64) -> Result<Decimal, NumberError> {
    if !value.is_finite() {
        return Err(NumberError::NotFinite { value });
    }
    Decimal::from_str(&value.to_string()).map_err(|_| NumberError::Unrepresentable { value })
}

/// A non-negative decimal with two fractional digits in [0.00, 999.99].
///
/// This is the sole input domain of the numeral text engine. Construction
/// rounds half-up first and rejects anything outside the domain, so a value of
/// this type can always be spelled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DecimalMagnitude {
    hundredths: u32,
}

impl DecimalMagnitude {
    /// Zero.
    pub const ZERO: DecimalMagnitude = DecimalMagnitude { hundredths: 0 };

    /// Largest spellable value, 999.99.
    pub const MAX: DecimalMagnitude = DecimalMagnitude {
        hundredths: MAX_HUNDREDTHS,
    };

    /// Rounds `value` half-up to two places and checks the domain.
    ///
    /// # Errors
    /// `NumberError::OutOfRange` when the rounded value is negative or above 999.99.
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac_core::types::DecimalMagnitude;
    /// use rust_decimal::Decimal;
    ///
    /// let m = DecimalMagnitude::new(Decimal::new(999_994, 3)).unwrap();
    /// assert_eq!(m.value(), Decimal::new(99_999, 2));
    ///
    /// // 999.995 rounds to 1000.00, which cannot be spelled
    /// assert!(DecimalMagnitude::new(Decimal::new(999_995, 3)).is_err());
    /// ```
    pub fn new(value: Decimal) -> Result<Self, NumberError> {
        let rounded = round_half_up(value);
        let out_of_range = NumberError::OutOfRange { value: rounded };
        if rounded.is_sign_negative() || rounded > DecimalMagnitude::MAX.value() {
            return Err(out_of_range);
        }
        rounded
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|hundredths| hundredths.to_u32())
            .filter(|hundredths| *hundredths <= MAX_HUNDREDTHS)
            .map(|hundredths| DecimalMagnitude { hundredths })
            .ok_or(out_of_range)
    }

    /// Builds a magnitude from a float.
    ///
    /// # Errors
    /// Non-finite input or a value outside [0, 999.99] after rounding.
    pub fn from_f64(value: f64) -> Result<Self, NumberError> {
        Self::new(decimal_from_f64(value)?)
    }

    /// Returns the value as a two-place decimal.
    pub fn value(&self) -> Decimal {
        Decimal::new(i64::from(self.hundredths), SCALE)
    }

    /// Returns the integer part (0-999).
    pub fn integer_part(&self) -> u32 {
        self.hundredths / 100
    }

    /// Returns the fractional part in hundredths (0-99).
    pub fn fraction(&self) -> u32 {
        self.hundredths % 100
    }

    /// Returns the two fractional digits, tenths first.
    pub fn fraction_digits(&self) -> [u32; 2] {
        let fraction = self.fraction();
        [fraction / 10, fraction % 10]
    }
}

impl FromStr for DecimalMagnitude {
    type Err = NumberError;

    /// Parses decimal text such as `"36.40"` or `"105"`.
    fn from_str(s: &str) -> Result<Self, NumberError> {
        let value = Decimal::from_str(s.trim()).map_err(|_| NumberError::Parse {
            input: s.to_string(),
        })?;
        Self::new(value)
    }
}

impl TryFrom<Decimal> for DecimalMagnitude {
    type Error = NumberError;

    fn try_from(value: Decimal) -> Result<Self, NumberError> {
        Self::new(value)
    }
}

impl fmt::Display for DecimalMagnitude {
    /// Formats with exactly two fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.integer_part(), self.fraction())
    }
}

/// Sign of a [`SignedMagnitude`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Zero or above.
    Positive,
    /// Strictly below zero after rounding.
    Negative,
}

impl Sign {
    /// Returns the spoken prefix, `"positive"` or `"minus"`.
    pub fn word(&self) -> &'static str {
        match self {
            Sign::Positive => "positive",
            Sign::Negative => "minus",
        }
    }
}

/// An explicit sign plus a non-negative two-place magnitude.
///
/// The magnitude has no upper bound here; only rendering to words requires it
/// to fit [`DecimalMagnitude`]. Classification happens after rounding, so
/// `-0.001` is `Positive` zero.
///
/// # Examples
///
/// ```
/// use almanac_core::types::{Sign, SignedMagnitude};
/// use rust_decimal::Decimal;
///
/// let t = SignedMagnitude::new(Decimal::new(-54, 1));
/// assert_eq!(t.sign(), Sign::Negative);
/// assert_eq!(t.magnitude(), Decimal::new(540, 2));
///
/// let z = SignedMagnitude::new(Decimal::new(-1, 3));
/// assert_eq!(z.sign(), Sign::Positive);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SignedMagnitude {
    sign: Sign,
    magnitude: Decimal,
}

impl SignedMagnitude {
    /// Rounds `value` half-up to two places and splits off its sign.
    pub fn new(value: Decimal) -> Self {
        let rounded = round_half_up(value);
        if rounded < Decimal::ZERO {
            SignedMagnitude {
                sign: Sign::Negative,
                magnitude: rounded.abs(),
            }
        } else {
            SignedMagnitude {
                sign: Sign::Positive,
                magnitude: rounded,
            }
        }
    }

    /// Builds a signed magnitude from a float.
    ///
    /// # Errors
    /// Non-finite or unrepresentable input.
    pub fn from_f64(value: f64) -> Result<Self, NumberError> {
        Ok(Self::new(decimal_from_f64(value)?))
    }

    /// Returns the sign.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the rounded absolute value.
    pub fn magnitude(&self) -> Decimal {
        self.magnitude
    }

    /// Returns the rounded signed value.
    pub fn value(&self) -> Decimal {
        match self.sign {
            Sign::Positive => self.magnitude,
            Sign::Negative => -self.magnitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_up_midpoints() {
        assert_eq!(round_half_up(dec!(2.675)), dec!(2.68));
        assert_eq!(round_half_up(dec!(2.665)), dec!(2.67));
        assert_eq!(round_half_up(dec!(-2.675)), dec!(-2.68));
        assert_eq!(round_half_up(dec!(0.005)), dec!(0.01));
    }

    #[test]
    fn test_round_half_up_idempotent() {
        for v in [dec!(0.00), dec!(18.50), dec!(-24.17), dec!(999.99)] {
            assert_eq!(round_half_up(v), v);
            assert_eq!(round_half_up(round_half_up(v)), round_half_up(v));
        }
    }

    #[test]
    fn test_round_half_up_negative_zero() {
        let r = round_half_up(dec!(-0.001));
        assert!(r.is_zero());
        assert!(!r.is_sign_negative());
    }

    #[test]
    fn test_decimal_from_f64_shortest_text() {
        assert_eq!(decimal_from_f64(2.675).unwrap(), dec!(2.675));
        assert_eq!(decimal_from_f64(0.1).unwrap(), dec!(0.1));
        assert_eq!(decimal_from_f64(-15.0).unwrap(), dec!(-15));
    }

    #[test]
    fn test_decimal_from_f64_rejects_non_finite() {
        assert!(matches!(
            decimal_from_f64(f64::NAN),
            Err(NumberError::NotFinite { .. })
        ));
        assert!(matches!(
            decimal_from_f64(f64::INFINITY),
            Err(NumberError::NotFinite { .. })
        ));
        assert!(matches!(
            decimal_from_f64(1e40),
            Err(NumberError::Unrepresentable { .. })
        ));
    }

    #[test]
    fn test_magnitude_domain_bounds() {
        assert_eq!(DecimalMagnitude::new(dec!(0)).unwrap(), DecimalMagnitude::ZERO);
        assert_eq!(
            DecimalMagnitude::new(dec!(999.99)).unwrap(),
            DecimalMagnitude::MAX
        );
        assert!(DecimalMagnitude::new(dec!(1000)).is_err());
        assert!(DecimalMagnitude::new(dec!(-0.01)).is_err());
        // Rounds to zero before the sign check
        assert_eq!(
            DecimalMagnitude::new(dec!(-0.004)).unwrap(),
            DecimalMagnitude::ZERO
        );
    }

    #[test]
    fn test_magnitude_rejects_far_out_of_domain() {
        let huge = Decimal::from_i128_with_scale(10i128.pow(27), 0);
        for value in [Decimal::MAX, Decimal::MIN, huge, -huge] {
            assert!(
                matches!(
                    DecimalMagnitude::new(value),
                    Err(NumberError::OutOfRange { .. })
                ),
                "value {}",
                value
            );
        }
        assert!(matches!(
            DecimalMagnitude::from_f64(1e27),
            Err(NumberError::OutOfRange { .. })
        ));
        assert!(matches!(
            "79228162514264337593543950335".parse::<DecimalMagnitude>(),
            Err(NumberError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_signed_magnitude_extremes() {
        let max = SignedMagnitude::new(Decimal::MAX);
        assert_eq!(max.sign(), Sign::Positive);
        assert_eq!(max.magnitude(), Decimal::MAX);

        let min = SignedMagnitude::new(Decimal::MIN);
        assert_eq!(min.sign(), Sign::Negative);
        assert_eq!(min.magnitude(), Decimal::MAX);
    }

    #[test]
    fn test_magnitude_parts() {
        let m: DecimalMagnitude = "36.404".parse().unwrap();
        assert_eq!(m.integer_part(), 36);
        assert_eq!(m.fraction(), 40);
        assert_eq!(m.fraction_digits(), [4, 0]);

        let m: DecimalMagnitude = "36.406".parse().unwrap();
        assert_eq!(m.fraction(), 41);

        let m: DecimalMagnitude = "0.04".parse().unwrap();
        assert_eq!(m.fraction_digits(), [0, 4]);
    }

    #[test]
    fn test_magnitude_parse_errors() {
        assert!(matches!(
            "abc".parse::<DecimalMagnitude>(),
            Err(NumberError::Parse { .. })
        ));
        assert!(matches!(
            "1000".parse::<DecimalMagnitude>(),
            Err(NumberError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_magnitude_display() {
        let m: DecimalMagnitude = "5".parse().unwrap();
        assert_eq!(m.to_string(), "5.00");
        assert_eq!(DecimalMagnitude::MAX.to_string(), "999.99");
    }

    #[test]
    fn test_signed_magnitude_classification() {
        let neg = SignedMagnitude::new(dec!(-5.4));
        assert_eq!(neg.sign(), Sign::Negative);
        assert_eq!(neg.magnitude(), dec!(5.40));
        assert_eq!(neg.value(), dec!(-5.40));

        let zero = SignedMagnitude::new(dec!(0.0));
        assert_eq!(zero.sign(), Sign::Positive);

        let tiny = SignedMagnitude::new(dec!(-0.001));
        assert_eq!(tiny.sign(), Sign::Positive);
        assert!(tiny.magnitude().is_zero());
    }

    #[test]
    fn test_sign_words() {
        assert_eq!(Sign::Positive.word(), "positive");
        assert_eq!(Sign::Negative.word(), "minus");
    }
}
