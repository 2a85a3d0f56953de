use serde::Serialize;

use crate::CoreError;

/// A normalized stock ticker symbol.
///
/// Construction trims surrounding whitespace and uppercases, so `" aapl "`
/// and `"AAPL"` are the same ticker. Empty input is rejected up front,
/// before any fetch is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// Normalize and validate a raw ticker string.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyTicker`] for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(CoreError::EmptyTicker);
        }
        Ok(Self(normalized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
