//! Request-scoped memoization of analysis reports.

use std::collections::HashMap;
use std::sync::Arc;

use tickersent_core::Ticker;

use crate::report::AnalysisReport;

/// In-memory cache of completed reports keyed by (ticker, limit).
///
/// No eviction: entries live as long as the owning process. Purely an
/// optimization to skip re-fetching and re-scoring identical requests;
/// correctness never depends on a hit.
#[derive(Default)]
pub struct RequestCache {
    entries: HashMap<(Ticker, usize), Arc<AnalysisReport>>,
}

impl RequestCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, ticker: &Ticker, limit: usize) -> Option<Arc<AnalysisReport>> {
        self.entries.get(&(ticker.clone(), limit)).cloned()
    }

    /// Store a report under its ticker and the request limit, returning the
    /// shared handle.
    pub fn insert(&mut self, limit: usize, report: AnalysisReport) -> Arc<AnalysisReport> {
        let report = Arc::new(report);
        self.entries
            .insert((report.ticker.clone(), limit), Arc::clone(&report));
        report
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
