//! Per-language naming data.
//!
//! A [`LocaleTable`] holds everything the renderer needs to spell numbers
//! in one language: the irregular small-number names, the descending list
//! of scale words, and the glue words for signs, decimals, and currency.
//! Tables are plain data. They are validated once, when a formatter is
//! built from them, and never mutated afterwards.
//!
//! # Invariants (checked by [`LocaleTable::validate`])
//!
//! 1. `special_names` has a non-empty entry for every integer in `0..=20`
//!    and every multiple of ten in `30..=90`.
//! 2. `scale_steps` is non-empty, strictly descending by threshold, and
//!    ends at the hundreds boundary (`100`).
//! 3. Scale words and currency unit names are non-empty.
//!
//! # Loading from JSON
//!
//! ```
//! use numwords::LocaleTable;
//!
//! let mut table = LocaleTable::english();
//! table.negative_marker = "negative ".into();
//! let json = serde_json::to_string(&table).unwrap();
//!
//! let parsed = LocaleTable::parse_and_validate(&json).unwrap();
//! assert_eq!(parsed.negative_marker, "negative ");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::currency::CurrencyUnits;
use crate::error::{NumwordsError, Result};

/// Threshold at which `special_names` plus hyphenation stop applying.
pub const HUNDREDS_THRESHOLD: u128 = 100;

/// One (threshold, word) pair, e.g. `1_000_000 -> "million"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleStep {
    pub threshold: u128,
    pub word: String,
}

impl ScaleStep {
    #[must_use]
    pub fn new(threshold: u128, word: impl Into<String>) -> Self {
        Self {
            threshold,
            word: word.into(),
        }
    }
}

/// Naming data for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleTable {
    /// Prefixed to negative renderings, including any trailing space.
    pub negative_marker: String,
    /// Joins a major-unit phrase to a minor-unit phrase, including spaces.
    pub connector: String,
    /// Irregular names for small integers.
    pub special_names: BTreeMap<u32, String>,
    /// Scale words, strictly descending by threshold.
    pub scale_steps: Vec<ScaleStep>,
    /// Word spoken between the integer and fractional digits.
    #[serde(default = "default_decimal_point")]
    pub decimal_point: String,
    /// Units used when a currency rendering names none.
    #[serde(default)]
    pub currency: CurrencyUnits,
}

fn default_decimal_point() -> String {
    "point".to_string()
}

const ENGLISH_SPECIAL_NAMES: [(u32, &str); 28] = [
    (0, "zero"),
    (1, "one"),
    (2, "two"),
    (3, "three"),
    (4, "four"),
    (5, "five"),
    (6, "six"),
    (7, "seven"),
    (8, "eight"),
    (9, "nine"),
    (10, "ten"),
    (11, "eleven"),
    (12, "twelve"),
    (13, "thirteen"),
    (14, "fourteen"),
    (15, "fifteen"),
    (16, "sixteen"),
    (17, "seventeen"),
    (18, "eighteen"),
    (19, "nineteen"),
    (20, "twenty"),
    (30, "thirty"),
    (40, "forty"),
    (50, "fifty"),
    (60, "sixty"),
    (70, "seventy"),
    (80, "eighty"),
    (90, "ninety"),
];

const ENGLISH_SCALE_STEPS: [(u128, &str); 5] = [
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
    (100, "hundred"),
];

impl LocaleTable {
    /// The built-in English table registered under `"en"`.
    #[must_use]
    pub fn english() -> Self {
        Self {
            negative_marker: "minus ".to_string(),
            connector: " and ".to_string(),
            special_names: ENGLISH_SPECIAL_NAMES
                .iter()
                .map(|&(n, word)| (n, word.to_string()))
                .collect(),
            scale_steps: ENGLISH_SCALE_STEPS
                .iter()
                .map(|&(threshold, word)| ScaleStep::new(threshold, word))
                .collect(),
            decimal_point: default_decimal_point(),
            currency: CurrencyUnits::default(),
        }
    }

    /// Deserialize a table from JSON and validate it.
    pub fn parse_and_validate(raw_json: &str) -> Result<Self> {
        let parsed: Self = serde_json::from_str(raw_json)?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// The integers that must have an entry in `special_names`.
    pub fn required_special_names() -> impl Iterator<Item = u32> {
        (0..=20).chain((30..=90).step_by(10))
    }

    /// Check the table invariants listed in the module docs.
    pub fn validate(&self) -> Result<()> {
        for n in Self::required_special_names() {
            match self.special_names.get(&n) {
                None => {
                    return Err(NumwordsError::malformed(format!(
                        "special_names is missing an entry for {n}"
                    )));
                }
                Some(word) if word.trim().is_empty() => {
                    return Err(NumwordsError::malformed(format!(
                        "special_names entry for {n} must not be empty"
                    )));
                }
                Some(_) => {}
            }
        }

        let Some(last) = self.scale_steps.last() else {
            return Err(NumwordsError::malformed("scale_steps must not be empty"));
        };
        for pair in self.scale_steps.windows(2) {
            if pair[0].threshold <= pair[1].threshold {
                return Err(NumwordsError::malformed(format!(
                    "scale_steps must be strictly descending ({} '{}' is followed by {} '{}')",
                    pair[0].threshold, pair[0].word, pair[1].threshold, pair[1].word
                )));
            }
        }
        if last.threshold != HUNDREDS_THRESHOLD {
            return Err(NumwordsError::malformed(format!(
                "smallest scale threshold must be {HUNDREDS_THRESHOLD}, found {}",
                last.threshold
            )));
        }
        if let Some(step) = self.scale_steps.iter().find(|s| s.word.trim().is_empty()) {
            return Err(NumwordsError::malformed(format!(
                "scale word for {} must not be empty",
                step.threshold
            )));
        }

        if self.currency.major.trim().is_empty() || self.currency.minor.trim().is_empty() {
            return Err(NumwordsError::malformed(
                "currency unit names must not be empty",
            ));
        }

        Ok(())
    }
}
