use thiserror::Error;

pub type Result<T> = std::result::Result<T, NumwordsError>;

/// Errors from locale registration, lookup, and number parsing.
#[derive(Debug, Error)]
pub enum NumwordsError {
    #[error("unknown locale: {key}")]
    UnknownLocale { key: String },

    #[error("malformed locale table: {reason}")]
    MalformedLocaleTable { reason: String },

    #[error("invalid number '{input}': {reason}")]
    InvalidNumber { input: String, reason: String },

    #[error("number is not finite: {value}")]
    NonFiniteNumber { value: f64 },

    #[error("locale table JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NumwordsError {
    #[must_use]
    pub fn unknown_locale(key: impl Into<String>) -> Self {
        Self::UnknownLocale { key: key.into() }
    }

    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedLocaleTable {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn invalid_number(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidNumber {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

impl From<std::convert::Infallible> for NumwordsError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
