//! Aggregated analysis report.

use serde::Serialize;
use tickersent_core::{Document, Ticker};

use crate::types::{RelevanceVerdict, SentimentLabel, SentimentResult};

/// One scored document. Entries are ordered by relevance rank.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub document: Document,
    pub verdict: RelevanceVerdict,
    pub sentiment: SentimentResult,
}

/// Per-label counts and score aggregates over a set of sentiment results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub total_score: f32,
    pub average_score: f32,
}

impl SentimentSummary {
    /// Aggregate counts, total and mean score.
    ///
    /// Empty input short-circuits to an all-zero summary; the mean is 0.0,
    /// never NaN.
    #[must_use]
    pub fn from_results(results: &[SentimentResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            match result.label {
                SentimentLabel::Positive => summary.positive += 1,
                SentimentLabel::Negative => summary.negative += 1,
                SentimentLabel::Neutral => summary.neutral += 1,
            }
            summary.total_score += result.score;
        }
        if !results.is_empty() {
            #[allow(clippy::cast_precision_loss)]
            let denom = results.len() as f32;
            summary.average_score = summary.total_score / denom;
        }
        summary
    }
}

/// Full result of one analysis request, handed to the display layer.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub ticker: Ticker,
    /// Scored documents, confidence descending; ties keep fetch order.
    pub entries: Vec<ReportEntry>,
    pub summary: SentimentSummary,
}

impl AnalysisReport {
    /// The valid zero-entry terminal state: nothing fetched, or nothing
    /// passed the relevance filter.
    #[must_use]
    pub fn empty(ticker: Ticker) -> Self {
        Self {
            ticker,
            entries: Vec::new(),
            summary: SentimentSummary::default(),
        }
    }

    /// Number of scored documents in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
