//! Locale key to [`Formatter`] registry.
//!
//! # Invariants
//!
//! 1. **Whole-entry replacement**: `register_locale` validates and builds
//!    the formatter first, then publishes a new map in one atomic swap.
//!    A rejected table leaves the registry untouched, and readers never
//!    see a partially built formatter.
//!
//! 2. **Last write wins**: registering an existing key replaces its
//!    formatter; formatters already handed out stay valid (they are
//!    reference counted) but are no longer returned by lookups.
//!
//! 3. **Thread safety**: `Registry` is `Send + Sync`. Lookups are wait-free
//!    snapshot reads through `arc-swap`; registration is read-copy-update.
//!    Each call is atomic on its own, but a `register_locale` followed by
//!    `for_locale` is not a transaction: a concurrent writer may land in
//!    between. Callers that need a stable view should register at startup
//!    and only read afterwards.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown key | `for_locale` on an unregistered key | `UnknownLocale` |
//! | Bad table | Table breaks an invariant | `MalformedLocaleTable`, registry unchanged |

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use crate::error::{NumwordsError, Result};
use crate::formatter::Formatter;
use crate::locale::LocaleTable;

/// Key under which the built-in English table is registered.
pub const DEFAULT_LOCALE: &str = "en";

type FormatterMap = HashMap<String, Arc<Formatter>>;

/// Mapping from locale key to formatter.
///
/// # Example
///
/// ```
/// use numwords::{LocaleTable, NumwordsError, Registry};
///
/// let registry = Registry::new();
/// assert_eq!(registry.for_locale("en").unwrap().render_int(20), "twenty");
///
/// let mut table = LocaleTable::english();
/// table.negative_marker = "negative ".into();
/// registry.register_locale("en-neg", table).unwrap();
/// assert_eq!(
///     registry.for_locale("en-neg").unwrap().render_int(-3),
///     "negative three"
/// );
///
/// assert!(matches!(
///     registry.for_locale("fr"),
///     Err(NumwordsError::UnknownLocale { .. })
/// ));
/// ```
pub struct Registry {
    formatters: ArcSwap<FormatterMap>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("locales", &self.locales())
            .finish()
    }
}

impl Registry {
    /// A registry holding only the built-in English formatter.
    #[must_use]
    pub fn new() -> Self {
        let mut map = FormatterMap::new();
        match Formatter::new(DEFAULT_LOCALE, LocaleTable::english()) {
            Ok(formatter) => {
                map.insert(DEFAULT_LOCALE.to_string(), Arc::new(formatter));
            }
            Err(err) => {
                tracing::error!(error = %err, "built-in English table failed validation");
            }
        }
        Self {
            formatters: ArcSwap::from_pointee(map),
        }
    }

    /// A registry with no locales at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            formatters: ArcSwap::from_pointee(FormatterMap::new()),
        }
    }

    /// The process-wide registry, created with [`Registry::new`] on first use.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    /// Build a formatter for `table` and bind it to `key`.
    ///
    /// # Errors
    ///
    /// Returns `MalformedLocaleTable` if the table is invalid; the registry
    /// is left unchanged in that case.
    pub fn register_locale(&self, key: impl Into<String>, table: LocaleTable) -> Result<()> {
        let key = key.into();
        let formatter = match Formatter::new(key.clone(), table) {
            Ok(formatter) => Arc::new(formatter),
            Err(err) => {
                tracing::warn!(locale = %key, error = %err, "rejected locale table");
                return Err(err);
            }
        };

        let previous = self.formatters.rcu(|current| {
            let mut next = FormatterMap::clone(current);
            next.insert(key.clone(), Arc::clone(&formatter));
            next
        });
        tracing::debug!(
            locale = %key,
            replaced = previous.contains_key(&key),
            "registered locale"
        );
        Ok(())
    }

    /// Look up the formatter bound to `key`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocale` if `key` was never registered.
    pub fn for_locale(&self, key: &str) -> Result<Arc<Formatter>> {
        match self.formatters.load().get(key) {
            Some(formatter) => Ok(Arc::clone(formatter)),
            None => {
                tracing::trace!(locale = %key, "locale lookup missed");
                Err(NumwordsError::unknown_locale(key))
            }
        }
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.formatters.load().contains_key(key)
    }

    /// All registered keys, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.formatters.load().keys().cloned().collect();
        keys.sort_unstable();
        keys
    }
}
