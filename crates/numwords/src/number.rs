//! Exact signed decimal values.
//!
//! Every rendering entry point takes a [`Decimal`]: an arbitrary-precision
//! integer part plus the literal fractional digits. Integers convert
//! losslessly, strings parse exactly, and floats convert through their
//! shortest round-trip representation (the digits `Display` prints), so
//! `0.145_f64` is read as `0.145` rather than its binary neighbour
//! `0.14499999999999999`.
//!
//! # Invariants
//!
//! 1. Fractional digits are each in `0..=9` with no trailing zeros.
//! 2. Zero is never negative (`-0` and `-0.000` normalise to `0`).

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::error::{NumwordsError, Result};

/// An exact, signed decimal number of unbounded magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Decimal {
    negative: bool,
    integer: BigUint,
    fraction: Vec<u8>,
}

impl Decimal {
    fn from_parts(negative: bool, integer: BigUint, mut fraction: Vec<u8>) -> Self {
        while fraction.last() == Some(&0) {
            fraction.pop();
        }
        let zero = integer.is_zero() && fraction.is_empty();
        Self {
            negative: negative && !zero,
            integer,
            fraction,
        }
    }

    /// The value zero.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.integer.is_zero() && self.fraction.is_empty()
    }

    /// The whole-number part, without sign.
    #[must_use]
    pub fn integer_part(&self) -> &BigUint {
        &self.integer
    }

    /// Digits after the decimal point, most significant first.
    #[must_use]
    pub fn fraction_digits(&self) -> &[u8] {
        &self.fraction
    }

    /// The same value with the sign cleared.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            integer: self.integer.clone(),
            fraction: self.fraction.clone(),
        }
    }
}

impl From<BigUint> for Decimal {
    fn from(value: BigUint) -> Self {
        Self::from_parts(false, value, Vec::new())
    }
}

impl From<BigInt> for Decimal {
    fn from(value: BigInt) -> Self {
        Self::from_parts(
            value.sign() == Sign::Minus,
            value.magnitude().clone(),
            Vec::new(),
        )
    }
}

macro_rules! impl_from_primitive_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Decimal {
                fn from(value: $ty) -> Self {
                    Self::from(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_primitive_int!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl TryFrom<f64> for Decimal {
    type Error = NumwordsError;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(NumwordsError::NonFiniteNumber { value });
        }
        // `Display` for floats prints the shortest round-trip digits and
        // never switches to exponent notation.
        value.to_string().parse()
    }
}

impl TryFrom<f32> for Decimal {
    type Error = NumwordsError;

    fn try_from(value: f32) -> Result<Self> {
        if !value.is_finite() {
            return Err(NumwordsError::NonFiniteNumber {
                value: f64::from(value),
            });
        }
        value.to_string().parse()
    }
}

impl FromStr for Decimal {
    type Err = NumwordsError;

    /// Parse `[+-]?digits[.digits]`. Either side of the point may be empty,
    /// but not both.
    fn from_str(input: &str) -> Result<Self> {
        let (negative, body) = match input.as_bytes().first() {
            Some(b'-') => (true, &input[1..]),
            Some(b'+') => (false, &input[1..]),
            _ => (false, input),
        };
        let (int_digits, frac_digits) = body.split_once('.').unwrap_or((body, ""));

        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(NumwordsError::invalid_number(input, "no digits"));
        }
        if !int_digits.bytes().all(|b| b.is_ascii_digit())
            || !frac_digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(NumwordsError::invalid_number(
                input,
                "expected only decimal digits and at most one '.'",
            ));
        }

        let integer = if int_digits.is_empty() {
            BigUint::zero()
        } else {
            BigUint::parse_bytes(int_digits.as_bytes(), 10)
                .ok_or_else(|| NumwordsError::invalid_number(input, "bad integer part"))?
        };
        let fraction = frac_digits.bytes().map(|b| b - b'0').collect();

        Ok(Self::from_parts(negative, integer, fraction))
    }
}

impl TryFrom<&str> for Decimal {
    type Error = NumwordsError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl From<&Decimal> for Decimal {
    fn from(value: &Decimal) -> Self {
        value.clone()
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{}", self.integer)?;
        if !self.fraction.is_empty() {
            f.write_str(".")?;
            for digit in &self.fraction {
                write!(f, "{digit}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn parses_plain_integer() {
        let d = dec("1234");
        assert!(!d.is_negative());
        assert_eq!(d.integer_part(), &BigUint::from(1234u32));
        assert!(d.fraction_digits().is_empty());
    }

    #[test]
    fn parses_sign_and_fraction() {
        let d = dec("-17.45");
        assert!(d.is_negative());
        assert_eq!(d.integer_part(), &BigUint::from(17u32));
        assert_eq!(d.fraction_digits(), &[4, 5]);
    }

    #[test]
    fn leading_or_trailing_point_is_accepted() {
        assert_eq!(dec(".5"), dec("0.5"));
        assert_eq!(dec("5."), dec("5"));
        assert_eq!(dec("+3"), dec("3"));
    }

    #[test]
    fn trailing_zeros_are_trimmed() {
        assert_eq!(dec("100.00"), dec("100"));
        assert_eq!(dec("2.50").fraction_digits(), &[5]);
    }

    #[test]
    fn negative_zero_is_zero() {
        let d = dec("-0.000");
        assert!(d.is_zero());
        assert!(!d.is_negative());
        assert_eq!(Decimal::try_from(-0.0_f64).unwrap(), Decimal::zero());
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "-", ".", "1.2.3", "12a", "1e5", " 1", "--1"] {
            let err = bad.parse::<Decimal>().unwrap_err();
            assert!(
                matches!(err, NumwordsError::InvalidNumber { .. }),
                "{bad:?} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn floats_use_shortest_representation() {
        assert_eq!(Decimal::try_from(0.145_f64).unwrap(), dec("0.145"));
        assert_eq!(Decimal::try_from(60.87_f64).unwrap(), dec("60.87"));
        assert_eq!(Decimal::try_from(0.1_f32).unwrap(), dec("0.1"));
        assert_eq!(Decimal::try_from(1e21_f64).unwrap(), dec("1000000000000000000000"));
    }

    #[test]
    fn non_finite_floats_fail() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                Decimal::try_from(value),
                Err(NumwordsError::NonFiniteNumber { .. })
            ));
        }
    }

    #[test]
    fn integers_convert_exactly() {
        assert_eq!(Decimal::from(-42i32), dec("-42"));
        assert_eq!(Decimal::from(u128::MAX).to_string(), u128::MAX.to_string());
        let big: BigInt = "-10000000000000000000000000000001".parse().unwrap();
        assert_eq!(Decimal::from(big), dec("-10000000000000000000000000000001"));
    }

    #[test]
    fn display_round_trips() {
        for s in ["0", "-17.45", "0.001", "923002388.19"] {
            assert_eq!(dec(s).to_string(), s);
        }
    }

    #[test]
    fn abs_clears_sign() {
        assert_eq!(dec("-2.5").abs(), dec("2.5"));
    }
}
