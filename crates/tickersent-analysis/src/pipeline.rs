//! Analysis pipeline orchestration.

use tickersent_core::Document;

use crate::error::AnalysisError;
use crate::relevance::RelevanceClassifier;
use crate::report::{AnalysisReport, ReportEntry, SentimentSummary};
use crate::sentiment::SentimentScorer;
use crate::types::{AnalysisRequest, RelevanceVerdict};

/// Run one analysis request over a fetched document batch.
///
/// 1. Classify every document for relevance (single batched call).
/// 2. Retain documents whose verdict passes the request threshold.
/// 3. Stable-sort survivors by confidence descending; ties keep fetch order,
///    so the sample is biased toward the highest-confidence matches when
///    more documents qualify than the limit allows.
/// 4. Truncate to the request limit.
/// 5. Score the survivors (single batched call).
/// 6. Aggregate the report.
///
/// An empty input batch, or a batch where nothing passes the filter,
/// produces a zero-entry report: a valid terminal state, not an error.
///
/// # Errors
///
/// Returns [`AnalysisError`] when a classifier or scorer capability fails;
/// the request fails as a whole, with no partial report.
pub async fn run_analysis(
    request: &AnalysisRequest,
    documents: Vec<Document>,
    classifier: &dyn RelevanceClassifier,
    scorer: &dyn SentimentScorer,
) -> Result<AnalysisReport, AnalysisError> {
    let fetched = documents.len();
    let verdicts = classifier.classify_batch(&documents, &request.ticker).await?;

    let mut retained: Vec<(Document, RelevanceVerdict)> = documents
        .into_iter()
        .zip(verdicts)
        .filter(|(_, verdict)| verdict.passes(request.min_confidence))
        .collect();

    // Stable sort keeps fetch order within each confidence level.
    retained.sort_by(|a, b| b.1.confidence.cmp(&a.1.confidence));
    retained.truncate(request.limit);

    tracing::debug!(
        ticker = %request.ticker,
        classifier = classifier.name(),
        min_confidence = %request.min_confidence,
        fetched,
        retained = retained.len(),
        "relevance filter applied"
    );

    if retained.is_empty() {
        tracing::info!(ticker = %request.ticker, "no relevant documents");
        return Ok(AnalysisReport::empty(request.ticker.clone()));
    }

    let (docs, verdicts): (Vec<Document>, Vec<RelevanceVerdict>) = retained.into_iter().unzip();
    let results = scorer.score_batch(&docs).await?;

    tracing::debug!(
        ticker = %request.ticker,
        scorer = scorer.name(),
        scored = results.len(),
        "sentiment scoring complete"
    );

    let summary = SentimentSummary::from_results(&results);
    let entries = docs
        .into_iter()
        .zip(verdicts)
        .zip(results)
        .map(|((document, verdict), sentiment)| ReportEntry {
            document,
            verdict,
            sentiment,
        })
        .collect();

    Ok(AnalysisReport {
        ticker: request.ticker.clone(),
        entries,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use tickersent_core::Ticker;

    use super::*;
    use crate::relevance::RuleBasedClassifier;
    use crate::sentiment::LexiconScorer;
    use crate::types::{ClassifierKind, Confidence, ScorerKind, SentimentLabel};

    fn request(ticker: &str, limit: usize, min_confidence: Confidence) -> AnalysisRequest {
        AnalysisRequest::new(
            Ticker::parse(ticker).unwrap(),
            limit,
            min_confidence,
            ClassifierKind::Rule,
            ScorerKind::Lexicon,
        )
        .unwrap()
    }

    async fn run(request: &AnalysisRequest, documents: Vec<Document>) -> AnalysisReport {
        run_analysis(request, documents, &RuleBasedClassifier, &LexiconScorer)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn empty_input_yields_empty_report() {
        let report = run(&request("AAPL", 10, Confidence::Low), Vec::new()).await;
        assert!(report.is_empty());
        assert_eq!(report.summary, SentimentSummary::default());
    }

    #[tokio::test]
    async fn nothing_relevant_yields_empty_report() {
        let docs = vec![
            Document::post("pictures of my cat"),
            Document::post("weekend hiking plans"),
        ];
        let report = run(&request("AAPL", 10, Confidence::Low), docs).await;
        assert!(report.is_empty());
        assert_eq!(report.summary.positive, 0);
        assert_eq!(report.summary.average_score, 0.0);
    }

    #[tokio::test]
    async fn aapl_scenario_end_to_end() {
        let docs = vec![
            Document::post("$AAPL to the moon, buying more"),
            Document::post("I hate AAPL, total crash incoming"),
            Document::post("random text unrelated"),
        ];
        let report = run(&request("AAPL", 10, Confidence::Low), docs).await;

        assert_eq!(report.len(), 2);

        assert_eq!(report.entries[0].verdict.confidence, Confidence::High);
        assert_eq!(report.entries[0].sentiment.label, SentimentLabel::Positive);
        assert_eq!(report.entries[0].sentiment.score, 1.0);

        assert_eq!(report.entries[1].verdict.confidence, Confidence::Low);
        assert_eq!(report.entries[1].sentiment.label, SentimentLabel::Negative);
        assert_eq!(report.entries[1].sentiment.score, -1.0);

        assert_eq!(report.summary.positive, 1);
        assert_eq!(report.summary.negative, 1);
        assert_eq!(report.summary.neutral, 0);
        assert_eq!(report.summary.total_score, 0.0);
        assert_eq!(report.summary.average_score, 0.0);
    }

    #[tokio::test]
    async fn default_threshold_excludes_low_confidence() {
        let docs = vec![
            Document::post("$AAPL breakout incoming"),
            Document::post("AAPL shares worth a look"),
        ];
        let report = run(&request("AAPL", 10, Confidence::Medium), docs).await;
        assert_eq!(report.len(), 1);
        assert_eq!(report.entries[0].verdict.confidence, Confidence::High);
    }

    #[tokio::test]
    async fn limit_truncates_after_confidence_sort() {
        let docs = vec![
            Document::post("AAPL shares look cheap"),
            Document::post("$AAPL first cashtag"),
            Document::post("AAPL stock chatter"),
            Document::post("$AAPL second cashtag"),
        ];
        let report = run(&request("AAPL", 2, Confidence::Low), docs).await;

        // Exactly `limit` entries, highest confidence first.
        assert_eq!(report.len(), 2);
        assert_eq!(report.entries[0].verdict.confidence, Confidence::High);
        assert_eq!(report.entries[1].verdict.confidence, Confidence::High);
        assert_eq!(report.entries[0].document.body, "$AAPL first cashtag");
        assert_eq!(report.entries[1].document.body, "$AAPL second cashtag");
    }

    #[tokio::test]
    async fn ties_keep_fetch_order() {
        let docs = vec![
            Document::post("$AAPL alpha"),
            Document::post("$AAPL beta"),
            Document::post("$AAPL gamma"),
        ];
        let report = run(&request("AAPL", 10, Confidence::Low), docs).await;
        let bodies: Vec<&str> = report
            .entries
            .iter()
            .map(|e| e.document.body.as_str())
            .collect();
        assert_eq!(bodies, ["$AAPL alpha", "$AAPL beta", "$AAPL gamma"]);
    }
}
