use serde::Serialize;
use tickersent_core::Ticker;

use crate::error::AnalysisError;

/// Relevance grade assigned to a document for a ticker.
///
/// The ordering matters: a request threshold of `Medium` admits `Medium`
/// and `High` verdicts and rejects the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Irrelevant,
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Confidence::Irrelevant => "irrelevant",
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        };
        f.write_str(s)
    }
}

/// Result of classifying one document against a ticker.
///
/// Deterministic given (document, ticker, classifier variant, lexicon).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelevanceVerdict {
    pub confidence: Confidence,
}

impl RelevanceVerdict {
    #[must_use]
    pub fn new(confidence: Confidence) -> Self {
        Self { confidence }
    }

    /// Whether this verdict clears a minimum confidence threshold.
    #[must_use]
    pub fn passes(self, min_confidence: Confidence) -> bool {
        self.confidence >= min_confidence
    }
}

/// Polarity label assigned by a sentiment scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// Polarity label plus a numeric score.
///
/// The lexicon scorer stores a signed keyword count (as a whole-number
/// float); the model-backed scorer stores the top label's probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    pub score: f32,
}

impl SentimentResult {
    /// Build from a signed keyword count; the label follows the sign.
    #[must_use]
    pub fn from_keyword_count(count: i32) -> Self {
        let label = match count.cmp(&0) {
            std::cmp::Ordering::Greater => SentimentLabel::Positive,
            std::cmp::Ordering::Less => SentimentLabel::Negative,
            std::cmp::Ordering::Equal => SentimentLabel::Neutral,
        };
        #[allow(clippy::cast_precision_loss)]
        let score = count as f32;
        Self { label, score }
    }
}

/// Relevance classifier variant selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierKind {
    Rule,
    Model,
}

/// Sentiment scorer variant selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerKind {
    Lexicon,
    Model,
}

/// One analysis request: which ticker, how many documents, how strict the
/// relevance filter is, and which classifier/scorer variants to run.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub ticker: Ticker,
    pub limit: usize,
    pub min_confidence: Confidence,
    pub classifier: ClassifierKind,
    pub scorer: ScorerKind,
}

impl AnalysisRequest {
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidLimit`] when `limit` is zero.
    pub fn new(
        ticker: Ticker,
        limit: usize,
        min_confidence: Confidence,
        classifier: ClassifierKind,
        scorer: ScorerKind,
    ) -> Result<Self, AnalysisError> {
        if limit == 0 {
            return Err(AnalysisError::InvalidLimit(limit));
        }
        Ok(Self {
            ticker,
            limit,
            min_confidence,
            classifier,
            scorer,
        })
    }
}
