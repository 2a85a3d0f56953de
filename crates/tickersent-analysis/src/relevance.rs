//! Relevance classification: is this document actually about the ticker?

use std::sync::Arc;

use async_trait::async_trait;
use regex::Regex;
use tickersent_core::{Document, Ticker};

use crate::error::AnalysisError;
use crate::inference::InferenceClient;
use crate::lexicon;
use crate::types::{ClassifierKind, Confidence, RelevanceVerdict};

/// Zero-shot candidate label meaning "this text is about investing".
pub const RELEVANT_LABEL: &str = "about stock market investing";
/// Zero-shot candidate label meaning "this text is not about stocks".
pub const IRRELEVANT_LABEL: &str = "not about stocks";

/// A relevance classification capability.
///
/// The contract is batch-level so the model-backed variant makes one round
/// trip per request instead of one per document.
#[async_trait]
pub trait RelevanceClassifier: Send + Sync {
    /// Short variant name for logs.
    fn name(&self) -> &'static str;

    /// Classify every document against `ticker`, one verdict per input in
    /// input order.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::ClassifierUnavailable`] when a model-backed
    /// capability fails, or [`AnalysisError::Pattern`] if a ticker pattern
    /// cannot be compiled.
    async fn classify_batch(
        &self,
        documents: &[Document],
        ticker: &Ticker,
    ) -> Result<Vec<RelevanceVerdict>, AnalysisError>;
}

/// Select the classifier implementation for a request.
///
/// # Errors
///
/// Returns [`AnalysisError::ClassifierUnavailable`] when the model variant
/// is requested but no inference endpoint is configured.
pub fn build_classifier(
    kind: ClassifierKind,
    inference: Option<&Arc<InferenceClient>>,
    model_max_chars: usize,
) -> Result<Box<dyn RelevanceClassifier>, AnalysisError> {
    match kind {
        ClassifierKind::Rule => Ok(Box::new(RuleBasedClassifier)),
        ClassifierKind::Model => {
            let inference = inference.ok_or_else(|| {
                AnalysisError::ClassifierUnavailable(
                    "no inference endpoint configured (set TICKERSENT_INFERENCE_URL)".to_string(),
                )
            })?;
            Ok(Box::new(ModelRelevanceClassifier::new(
                Arc::clone(inference),
                model_max_chars,
            )))
        }
    }
}

/// Compiled whole-word patterns for one ticker, reused across a batch.
struct TickerMatcher {
    cashtag: Regex,
    word: Regex,
}

impl TickerMatcher {
    fn new(ticker: &Ticker) -> Result<Self, AnalysisError> {
        // Escape so metacharacters in a symbol (BRK.B) never reach the
        // pattern raw.
        let escaped = regex::escape(&ticker.as_str().to_lowercase());
        let cashtag = Regex::new(&format!(r"\${escaped}\b"))?;
        let word = Regex::new(&format!(r"\b{escaped}\b"))?;
        Ok(Self { cashtag, word })
    }
}

/// Deterministic rule-based matcher.
///
/// Three checks in strict priority order, first match wins:
///
/// 1. cashtag (`$TICKER` as a whole token) anywhere → [`Confidence::High`]
/// 2. ticker as a whole word in the title → [`Confidence::Medium`]
/// 3. ticker as a whole word anywhere, plus a financial-context keyword →
///    [`Confidence::Low`]
///
/// Anything else is [`Confidence::Irrelevant`].
pub struct RuleBasedClassifier;

impl RuleBasedClassifier {
    fn classify_document(matcher: &TickerMatcher, document: &Document) -> Confidence {
        let combined = document.combined().to_lowercase();
        if matcher.cashtag.is_match(&combined) {
            return Confidence::High;
        }
        if let Some(title) = document.title.as_deref() {
            if matcher.word.is_match(&title.to_lowercase()) {
                return Confidence::Medium;
            }
        }
        if matcher.word.is_match(&combined) && has_financial_context(&combined) {
            return Confidence::Low;
        }
        Confidence::Irrelevant
    }
}

#[async_trait]
impl RelevanceClassifier for RuleBasedClassifier {
    fn name(&self) -> &'static str {
        "rule"
    }

    async fn classify_batch(
        &self,
        documents: &[Document],
        ticker: &Ticker,
    ) -> Result<Vec<RelevanceVerdict>, AnalysisError> {
        let matcher = TickerMatcher::new(ticker)?;
        Ok(documents
            .iter()
            .map(|doc| RelevanceVerdict::new(Self::classify_document(&matcher, doc)))
            .collect())
    }
}

/// Whether any financial-context keyword appears as a whole word.
fn has_financial_context(text: &str) -> bool {
    let toks = lexicon::tokens(text);
    lexicon::FINANCIAL_CONTEXT.iter().any(|k| toks.contains(*k))
}

/// Zero-shot model-backed classifier.
///
/// Submits the whole batch (truncated to the model's input cap) in a single
/// call. The verdict is binary: `High` when the top-ranked label is the
/// investing label, `Irrelevant` otherwise.
pub struct ModelRelevanceClassifier {
    inference: Arc<InferenceClient>,
    max_chars: usize,
}

impl ModelRelevanceClassifier {
    #[must_use]
    pub fn new(inference: Arc<InferenceClient>, max_chars: usize) -> Self {
        Self {
            inference,
            max_chars,
        }
    }
}

#[async_trait]
impl RelevanceClassifier for ModelRelevanceClassifier {
    fn name(&self) -> &'static str {
        "model"
    }

    async fn classify_batch(
        &self,
        documents: &[Document],
        ticker: &Ticker,
    ) -> Result<Vec<RelevanceVerdict>, AnalysisError> {
        if documents.is_empty() {
            return Ok(Vec::new());
        }

        let truncated: Vec<String> = documents
            .iter()
            .map(|doc| doc.truncated(self.max_chars))
            .collect();
        let inputs: Vec<&str> = truncated.iter().map(String::as_str).collect();

        let rankings = self
            .inference
            .zero_shot(&inputs, &[RELEVANT_LABEL, IRRELEVANT_LABEL])
            .await?;

        tracing::debug!(ticker = %ticker, count = rankings.len(), "zero-shot batch classified");

        rankings
            .into_iter()
            .enumerate()
            .map(|(i, ranking)| {
                let top = ranking.labels.first().ok_or_else(|| {
                    AnalysisError::ClassifierUnavailable(format!(
                        "zero-shot returned no labels for input {i}"
                    ))
                })?;
                let confidence = if top == RELEVANT_LABEL {
                    Confidence::High
                } else {
                    Confidence::Irrelevant
                };
                Ok(RelevanceVerdict::new(confidence))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(ticker: &str, document: &Document) -> Confidence {
        let ticker = Ticker::parse(ticker).unwrap();
        let matcher = TickerMatcher::new(&ticker).unwrap();
        RuleBasedClassifier::classify_document(&matcher, document)
    }

    #[test]
    fn cashtag_in_body_is_high() {
        let doc = Document::post("loading up on $AAPL today");
        assert_eq!(classify("AAPL", &doc), Confidence::High);
    }

    #[test]
    fn cashtag_in_title_is_high() {
        let doc = Document::titled("$TSLA delivery numbers", "big quarter");
        assert_eq!(classify("TSLA", &doc), Confidence::High);
    }

    #[test]
    fn cashtag_at_end_of_text_is_high() {
        let doc = Document::post("all in on $GME");
        assert_eq!(classify("GME", &doc), Confidence::High);
    }

    #[test]
    fn cashtag_inside_longer_symbol_does_not_match() {
        // $AAPLX is a different symbol; the word boundary must reject it.
        let doc = Document::post("holding $AAPLX since March");
        assert_eq!(classify("AAPL", &doc), Confidence::Irrelevant);
    }

    #[test]
    fn ticker_in_title_without_cashtag_is_medium() {
        let doc = Document::titled("AAPL quarterly results", "nothing notable here");
        assert_eq!(classify("AAPL", &doc), Confidence::Medium);
    }

    #[test]
    fn ticker_in_body_with_context_is_low() {
        let doc = Document::post("thinking about picking up some AAPL shares");
        assert_eq!(classify("AAPL", &doc), Confidence::Low);
    }

    #[test]
    fn ticker_in_body_without_context_is_irrelevant() {
        let doc = Document::post("AAPL is a fun string of letters");
        assert_eq!(classify("AAPL", &doc), Confidence::Irrelevant);
    }

    #[test]
    fn context_without_ticker_is_irrelevant() {
        let doc = Document::post("the stock market was wild today");
        assert_eq!(classify("AAPL", &doc), Confidence::Irrelevant);
    }

    #[test]
    fn single_letter_ticker_does_not_match_inside_words() {
        // "T" must not match inside "THE" or "TODAY".
        let doc = Document::post("THE market was busy TODAY, stock talk everywhere");
        assert_eq!(classify("T", &doc), Confidence::Irrelevant);
    }

    #[test]
    fn single_letter_ticker_matches_whole_word() {
        let doc = Document::post("adding T to my dividend portfolio");
        assert_eq!(classify("T", &doc), Confidence::Low);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let doc = Document::post("$aapl looking strong");
        assert_eq!(classify("AAPL", &doc), Confidence::High);
    }

    #[test]
    fn ticker_with_regex_metacharacters_is_escaped() {
        let doc = Document::post("buy brk.b shares while cheap");
        assert_eq!(classify("BRK.B", &doc), Confidence::Low);
    }

    #[test]
    fn metacharacter_ticker_does_not_match_as_wildcard() {
        // Unescaped, "BRK.B" would match "brkxb" via the dot.
        let doc = Document::post("brkxb stock chatter");
        assert_eq!(classify("BRK.B", &doc), Confidence::Irrelevant);
    }

    #[test]
    fn cashtag_wins_over_title_match() {
        let doc = Document::titled("AAPL roundup", "market recap, $AAPL led gains");
        assert_eq!(classify("AAPL", &doc), Confidence::High);
    }

    #[tokio::test]
    async fn batch_preserves_input_order() {
        let ticker = Ticker::parse("AAPL").unwrap();
        let docs = vec![
            Document::post("$AAPL up big"),
            Document::post("unrelated chatter"),
            Document::post("AAPL earnings call today"),
        ];
        let verdicts = RuleBasedClassifier
            .classify_batch(&docs, &ticker)
            .await
            .unwrap();
        assert_eq!(verdicts.len(), 3);
        assert_eq!(verdicts[0].confidence, Confidence::High);
        assert_eq!(verdicts[1].confidence, Confidence::Irrelevant);
        assert_eq!(verdicts[2].confidence, Confidence::Low);
    }
}
