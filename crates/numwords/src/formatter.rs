//! Word rendering for integers, decimals, and currency amounts.
//!
//! A [`Formatter`] binds one validated [`LocaleTable`] to the rendering
//! rules:
//!
//! 1. Negative values get the locale's negative marker, once, up front.
//! 2. Integers with a special name are spelled verbatim.
//! 3. Other integers below 100 are `tens-ones` (`"forty-two"`).
//! 4. Larger integers are decomposed into scale groups; each non-zero
//!    group is spelled as `"<magnitude> <scale>"`, groups are joined by
//!    single spaces, and a non-zero `n % 100` is appended after a space.
//!    There is no "and" inside an integer: 101 is `"one hundred one"`.
//!
//! Rule 4 re-enters the renderer for each magnitude. That nesting is
//! driven by an explicit work stack, so inputs with hundreds of digits do
//! not grow the call stack.
//!
//! # Example
//!
//! ```
//! use numwords::{Decimal, Formatter, LocaleTable};
//!
//! let en = Formatter::new("en", LocaleTable::english()).unwrap();
//! assert_eq!(en.render_int(42), "forty-two");
//! assert_eq!(en.render_int(-101), "minus one hundred one");
//!
//! let amount: Decimal = "2523.04".parse().unwrap();
//! assert_eq!(
//!     en.render_currency(&amount),
//!     "two thousand five hundred twenty-three dollars and four cents"
//! );
//! ```

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::currency::{CurrencyUnits, SplitAmount, pluralize};
use crate::decompose::{Scale, decompose};
use crate::error::Result;
use crate::locale::{HUNDREDS_THRESHOLD, LocaleTable};
use crate::number::Decimal;

/// Pending output of the integer renderer.
enum Piece<'a> {
    Number(BigUint),
    Text(&'a str),
}

/// A locale table bundled with the rendering operations.
#[derive(Debug, Clone)]
pub struct Formatter {
    key: String,
    table: LocaleTable,
    scales: Vec<Scale>,
    hundred: BigUint,
}

impl Formatter {
    /// Validate `table` and build a formatter for it.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedLocaleTable`](crate::NumwordsError::MalformedLocaleTable)
    /// if the table breaks any of its invariants.
    pub fn new(key: impl Into<String>, table: LocaleTable) -> Result<Self> {
        let key = key.into();
        table.validate()?;

        let scales = table
            .scale_steps
            .iter()
            .map(|step| Scale {
                threshold: BigUint::from(step.threshold),
                word: step.word.clone(),
            })
            .collect();

        tracing::debug!(
            locale = %key,
            scale_steps = table.scale_steps.len(),
            special_names = table.special_names.len(),
            "built number formatter"
        );

        Ok(Self {
            key,
            table,
            scales,
            hundred: BigUint::from(HUNDREDS_THRESHOLD),
        })
    }

    /// The registry key this formatter was built for.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn table(&self) -> &LocaleTable {
        &self.table
    }

    /// Spell an integer of any size.
    #[must_use]
    pub fn render_int(&self, n: impl Into<BigInt>) -> String {
        let n = n.into();
        let mut out = String::new();
        if n.sign() == Sign::Minus {
            out.push_str(&self.table.negative_marker);
        }
        self.write_unsigned(n.magnitude().clone(), &mut out);
        out
    }

    /// Spell a decimal as `"<integer> point <digit>-<digit>…"`.
    ///
    /// Fractional digits are read one at a time; a value without a
    /// fractional part reads exactly like [`render_int`](Self::render_int).
    #[must_use]
    pub fn render_number(&self, value: &Decimal) -> String {
        let mut out = String::new();
        if value.is_negative() {
            out.push_str(&self.table.negative_marker);
        }
        self.write_unsigned(value.integer_part().clone(), &mut out);

        let digits = value.fraction_digits();
        if !digits.is_empty() {
            out.push(' ');
            out.push_str(&self.table.decimal_point);
            out.push(' ');
            for (i, &digit) in digits.iter().enumerate() {
                if i > 0 {
                    out.push('-');
                }
                out.push_str(self.special_name(u32::from(digit)));
            }
        }
        out
    }

    /// Spell a currency amount in the locale's default units.
    #[must_use]
    pub fn render_currency(&self, amount: &Decimal) -> String {
        self.render_currency_with(amount, &self.table.currency)
    }

    /// Spell a currency amount as major and minor unit phrases.
    ///
    /// The sign is decided once for the whole amount, so at most one
    /// negative marker appears. An amount that rounds to zero reads
    /// `"zero <major>s"` without a marker.
    #[must_use]
    pub fn render_currency_with(&self, amount: &Decimal, units: &CurrencyUnits) -> String {
        let split = SplitAmount::round_half_up(amount);
        let mut out = String::new();

        if split.is_zero() {
            self.write_unit_phrase(&split.major, &units.major, &mut out);
            return out;
        }
        if amount.is_negative() {
            out.push_str(&self.table.negative_marker);
        }

        let include_major = !split.major.is_zero();
        let include_minor = split.minor != 0;
        if include_major {
            self.write_unit_phrase(&split.major, &units.major, &mut out);
        }
        if include_major && include_minor {
            out.push_str(&self.table.connector);
        }
        if include_minor {
            self.write_unit_phrase(&BigUint::from(split.minor), &units.minor, &mut out);
        }
        out
    }

    fn write_unit_phrase(&self, count: &BigUint, unit: &str, out: &mut String) {
        self.write_unsigned(count.clone(), out);
        out.push(' ');
        out.push_str(&pluralize(unit, count));
    }

    fn special_name(&self, n: u32) -> &str {
        // Presence of 0..=20 and the tens is checked in `Formatter::new`.
        self.table.special_names.get(&n).map_or("", String::as_str)
    }

    fn write_unsigned(&self, n: BigUint, out: &mut String) {
        let mut stack = vec![Piece::Number(n)];

        while let Some(piece) = stack.pop() {
            let n = match piece {
                Piece::Text(text) => {
                    out.push_str(text);
                    continue;
                }
                Piece::Number(n) => n,
            };

            let small = u32::try_from(&n).ok();
            if let Some(word) = small.and_then(|v| self.table.special_names.get(&v)) {
                out.push_str(word);
                continue;
            }
            if let Some(v) = small.filter(|&v| u128::from(v) < HUNDREDS_THRESHOLD) {
                out.push_str(self.special_name(v / 10 * 10));
                out.push('-');
                out.push_str(self.special_name(v % 10));
                continue;
            }

            let mut pieces = Vec::new();
            for group in decompose(&n, &self.scales) {
                if group.magnitude.is_zero() {
                    continue;
                }
                if !pieces.is_empty() {
                    pieces.push(Piece::Text(" "));
                }
                pieces.push(Piece::Number(group.magnitude));
                pieces.push(Piece::Text(" "));
                pieces.push(Piece::Text(group.word));
            }
            let rest = &n % &self.hundred;
            if !rest.is_zero() {
                pieces.push(Piece::Text(" "));
                pieces.push(Piece::Number(rest));
            }
            stack.extend(pieces.into_iter().rev());
        }
    }
}
