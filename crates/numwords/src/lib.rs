#![forbid(unsafe_code)]

//! Spoken-word rendering of numbers and currency amounts.
//!
//! Turns integers of any size, exact decimals, and two-unit currency
//! amounts into words ("one hundred twenty-three dollars and four cents"),
//! driven by a per-language [`LocaleTable`].
//!
//! # How it fits together
//! - [`LocaleTable`]: immutable naming data (special names, scale words,
//!   glue words), validated once.
//! - [`decompose()`]: splits an integer into (magnitude, scale word) groups.
//! - [`Formatter`]: a validated table plus the integer, decimal, and
//!   currency renderers.
//! - [`Registry`]: locale key to formatter mapping. Create your own and
//!   pass it around, or use the process-wide [`Registry::global`] through
//!   the free functions below.
//!
//! # Example
//!
//! ```
//! assert_eq!(numwords::render_int(42, "en").unwrap(), "forty-two");
//! assert_eq!(
//!     numwords::render_currency(-17.45, "en").unwrap(),
//!     "minus seventeen dollars and forty-five cents"
//! );
//! assert_eq!(
//!     numwords::render_number("23.45", "en").unwrap(),
//!     "twenty-three point four-five"
//! );
//! assert!(numwords::render_int(1, "xx").is_err());
//! ```
//!
//! The engine assumes a linearly composable naming scheme. Base-twenty
//! constructions and irregular currency plurals are out of reach.

pub mod currency;
pub mod decompose;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod number;
pub mod registry;

use std::sync::Arc;

use num_bigint::BigInt;

pub use currency::{CurrencyUnits, SplitAmount, pluralize};
pub use decompose::{Group, Scale, decompose};
pub use error::{NumwordsError, Result};
pub use formatter::Formatter;
pub use locale::{LocaleTable, ScaleStep};
pub use number::Decimal;
pub use registry::{DEFAULT_LOCALE, Registry};

fn to_decimal<A>(value: A) -> Result<Decimal>
where
    A: TryInto<Decimal>,
    NumwordsError: From<A::Error>,
{
    Ok(value.try_into()?)
}

/// Spell an integer with the globally registered `locale`.
pub fn render_int(n: impl Into<BigInt>, locale: &str) -> Result<String> {
    Ok(Registry::global().for_locale(locale)?.render_int(n))
}

/// Spell a decimal (`"23.45"`, `23.45`, `23`) digit by digit after the point.
pub fn render_number<A>(value: A, locale: &str) -> Result<String>
where
    A: TryInto<Decimal>,
    NumwordsError: From<A::Error>,
{
    let formatter = Registry::global().for_locale(locale)?;
    Ok(formatter.render_number(&to_decimal(value)?))
}

/// Spell a currency amount in the locale's default units.
pub fn render_currency<A>(amount: A, locale: &str) -> Result<String>
where
    A: TryInto<Decimal>,
    NumwordsError: From<A::Error>,
{
    let formatter = Registry::global().for_locale(locale)?;
    Ok(formatter.render_currency(&to_decimal(amount)?))
}

/// Spell a currency amount in explicit units.
pub fn render_currency_with<A>(amount: A, locale: &str, units: &CurrencyUnits) -> Result<String>
where
    A: TryInto<Decimal>,
    NumwordsError: From<A::Error>,
{
    let formatter = Registry::global().for_locale(locale)?;
    Ok(formatter.render_currency_with(&to_decimal(amount)?, units))
}

/// Register `table` under `key` in the global registry.
pub fn register_locale(key: impl Into<String>, table: LocaleTable) -> Result<()> {
    Registry::global().register_locale(key, table)
}

/// Fetch the globally registered formatter for `key`.
pub fn for_locale(key: &str) -> Result<Arc<Formatter>> {
    Registry::global().for_locale(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_functions_accept_several_input_types() {
        assert_eq!(render_currency(1, "en").unwrap(), "one dollar");
        assert_eq!(render_currency(0.02, "en").unwrap(), "two cents");
        assert_eq!(render_currency("9", "en").unwrap(), "nine dollars");
        let amount: Decimal = "10".parse().unwrap();
        assert_eq!(render_currency(&amount, "en").unwrap(), "ten dollars");
    }

    #[test]
    fn free_functions_surface_parse_errors() {
        assert!(matches!(
            render_currency("12,50", "en"),
            Err(NumwordsError::InvalidNumber { .. })
        ));
        assert!(matches!(
            render_number(f64::NAN, "en"),
            Err(NumwordsError::NonFiniteNumber { .. })
        ));
    }

    #[test]
    fn unknown_locale_is_reported_before_parsing() {
        assert!(matches!(
            render_currency("not a number", "zz"),
            Err(NumwordsError::UnknownLocale { .. })
        ));
        assert!(matches!(
            render_int(1, "zz"),
            Err(NumwordsError::UnknownLocale { .. })
        ));
    }

    #[test]
    fn render_currency_with_units() {
        let units = CurrencyUnits::new("pound", "penny");
        assert_eq!(
            render_currency_with(2.5, "en", &units).unwrap(),
            "two pounds and fifty pennys"
        );
    }

    #[test]
    fn register_then_lookup_globally() {
        let mut table = LocaleTable::english();
        table.currency = CurrencyUnits::new("euro", "cent");
        register_locale("en-eu-lib-test", table).unwrap();
        assert_eq!(
            render_currency(3, "en-eu-lib-test").unwrap(),
            "three euros"
        );
        assert_eq!(for_locale("en-eu-lib-test").unwrap().key(), "en-eu-lib-test");
    }
}
