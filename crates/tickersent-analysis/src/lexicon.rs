//! Fixed keyword lists for the heuristic classifier and scorer.
//!
//! The lists preserve the ad-hoc vocabulary of the original scanner: no
//! stemming, no negation handling ("not good" still scores positive). That
//! literal behavior is the heuristic's contract.

use std::collections::HashSet;

/// Bullish post vocabulary. Each keyword present adds +1.
pub(crate) const POSITIVE: &[&str] = &[
    "moon",
    "bull",
    "bullish",
    "buy",
    "calls",
    "long",
    "rocket",
    "rally",
    "gain",
    "gains",
    "green",
    "pump",
    "breakout",
    "undervalued",
    "win",
    "profit",
    "upside",
    "strong",
    "beat",
    "growth",
];

/// Bearish post vocabulary. Each keyword present subtracts 1.
pub(crate) const NEGATIVE: &[&str] = &[
    "crash",
    "bear",
    "bearish",
    "sell",
    "puts",
    "short",
    "drop",
    "dump",
    "tank",
    "loss",
    "losses",
    "red",
    "overvalued",
    "weak",
    "miss",
    "bagholder",
    "bankrupt",
    "bankruptcy",
    "scam",
    "fraud",
    "downside",
];

/// Terms whose presence marks an ambiguous ticker mention as finance-related.
pub(crate) const FINANCIAL_CONTEXT: &[&str] = &[
    "stock",
    "stocks",
    "shares",
    "market",
    "trading",
    "invest",
    "investing",
    "earnings",
    "dividend",
    "bullish",
    "bearish",
    "buy",
    "sell",
    "hold",
    "options",
    "calls",
    "puts",
    "yolo",
    "dd",
    "dip",
    "crash",
    "rally",
    "portfolio",
    "ticker",
];

/// Lowercased whole-word tokens of `text`.
///
/// Words are split on whitespace with non-alphanumeric edges trimmed, so
/// `"moon,"` and `"$AAPL"` tokenize to `moon` and `aapl`. Interior
/// punctuation is kept (`brk.b` stays one token).
pub(crate) fn tokens(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect()
}
