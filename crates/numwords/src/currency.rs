//! Currency units, pluralization, and rounding to minor units.
//!
//! A currency amount is spoken as two phrases, one per unit, joined by the
//! locale connector: `"seventeen dollars and forty-five cents"`. This module
//! holds the unit names and the arithmetic that splits a [`Decimal`] into
//! whole major units and rounded minor units. Phrase assembly lives on
//! [`Formatter`](crate::Formatter).
//!
//! # Rounding
//!
//! Minor units are hundredths. The amount is rounded half-up on its exact
//! decimal digits: only the third fractional digit decides, so `0.145`
//! rounds to fifteen and `0.144997` to fourteen. A rounded minor count of
//! 100 carries into the major count (`0.999` is one major unit).
//!
//! # Pluralization
//!
//! [`pluralize`] appends `"s"` to a unit unless the count is exactly one.
//! This is an English-only rule; irregular plurals ("penny"/"pence") are
//! not expressible.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::number::Decimal;

/// Minor units per major unit.
pub const MINOR_PER_MAJOR: u32 = 100;

/// Names of the two units of a currency, in singular form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyUnits {
    pub major: String,
    pub minor: String,
}

impl CurrencyUnits {
    #[must_use]
    pub fn new(major: impl Into<String>, minor: impl Into<String>) -> Self {
        Self {
            major: major.into(),
            minor: minor.into(),
        }
    }
}

impl Default for CurrencyUnits {
    fn default() -> Self {
        Self::new("dollar", "cent")
    }
}

/// `unit` for a count of exactly one, `unit + "s"` otherwise.
#[must_use]
pub fn pluralize(unit: &str, count: &BigUint) -> String {
    if count.is_one() {
        unit.to_string()
    } else {
        format!("{unit}s")
    }
}

/// An unsigned amount split into whole major units and rounded minor units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitAmount {
    pub major: BigUint,
    pub minor: u32,
}

impl SplitAmount {
    /// Split `|amount|` into major and minor units, rounding half-up.
    #[must_use]
    pub fn round_half_up(amount: &Decimal) -> Self {
        let digits = amount.fraction_digits();
        let digit = |i: usize| u32::from(digits.get(i).copied().unwrap_or(0));

        let mut minor = digit(0) * 10 + digit(1);
        if digit(2) >= 5 {
            minor += 1;
        }

        let mut major = amount.integer_part().clone();
        if minor == MINOR_PER_MAJOR {
            major += 1u32;
            minor = 0;
        }
        Self { major, minor }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.major.is_zero() && self.minor == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(s: &str) -> (u64, u32) {
        let amount: Decimal = s.parse().unwrap();
        let split = SplitAmount::round_half_up(&amount);
        let major = u64::try_from(&split.major).unwrap();
        (major, split.minor)
    }

    #[test]
    fn default_units_are_dollars_and_cents() {
        let units = CurrencyUnits::default();
        assert_eq!(units.major, "dollar");
        assert_eq!(units.minor, "cent");
    }

    #[test]
    fn pluralize_singular_only_for_one() {
        assert_eq!(pluralize("dollar", &BigUint::from(1u32)), "dollar");
        assert_eq!(pluralize("dollar", &BigUint::from(0u32)), "dollars");
        assert_eq!(pluralize("dollar", &BigUint::from(2u32)), "dollars");
        assert_eq!(pluralize("cent", &BigUint::from(21u32)), "cents");
    }

    #[test]
    fn whole_amounts_have_no_minor_units() {
        assert_eq!(split("0"), (0, 0));
        assert_eq!(split("765"), (765, 0));
    }

    #[test]
    fn two_digit_fractions_are_exact() {
        assert_eq!(split("60.87"), (60, 87));
        assert_eq!(split("0.01"), (0, 1));
        assert_eq!(split("2523.04"), (2523, 4));
        assert_eq!(split("100.5"), (100, 50));
    }

    #[test]
    fn third_digit_decides_rounding() {
        assert_eq!(split("0.144997"), (0, 14));
        assert_eq!(split("0.145001"), (0, 15));
        assert_eq!(split("0.145"), (0, 15));
        assert_eq!(split("0.1449"), (0, 14));
    }

    #[test]
    fn rounding_carries_into_major() {
        assert_eq!(split("0.995"), (1, 0));
        assert_eq!(split("199.999"), (200, 0));
    }

    #[test]
    fn sub_half_cent_rounds_to_zero() {
        let amount: Decimal = "0.004".parse().unwrap();
        assert!(SplitAmount::round_half_up(&amount).is_zero());
    }

    #[test]
    fn sign_is_ignored() {
        assert_eq!(split("-17.45"), (17, 45));
    }
}
