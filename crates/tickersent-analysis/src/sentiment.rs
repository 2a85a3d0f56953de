//! Sentiment scoring: what polarity does a document carry?

use std::sync::Arc;

use async_trait::async_trait;
use tickersent_core::Document;

use crate::error::AnalysisError;
use crate::inference::InferenceClient;
use crate::lexicon;
use crate::types::{ScorerKind, SentimentLabel, SentimentResult};

/// A sentiment scoring capability.
///
/// Variants are interchangeable: the pipeline never branches on the
/// concrete scorer.
#[async_trait]
pub trait SentimentScorer: Send + Sync {
    /// Short variant name for logs.
    fn name(&self) -> &'static str;

    /// Score every document, one result per input in input order.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::ClassifierUnavailable`] when a model-backed
    /// capability fails.
    async fn score_batch(
        &self,
        documents: &[Document],
    ) -> Result<Vec<SentimentResult>, AnalysisError>;
}

/// Select the scorer implementation for a request.
///
/// # Errors
///
/// Returns [`AnalysisError::ClassifierUnavailable`] when the model variant
/// is requested but no inference endpoint is configured.
pub fn build_scorer(
    kind: ScorerKind,
    inference: Option<&Arc<InferenceClient>>,
    model_max_chars: usize,
) -> Result<Box<dyn SentimentScorer>, AnalysisError> {
    match kind {
        ScorerKind::Lexicon => Ok(Box::new(LexiconScorer)),
        ScorerKind::Model => {
            let inference = inference.ok_or_else(|| {
                AnalysisError::ClassifierUnavailable(
                    "no inference endpoint configured (set TICKERSENT_INFERENCE_URL)".to_string(),
                )
            })?;
            Ok(Box::new(ModelSentimentScorer::new(
                Arc::clone(inference),
                model_max_chars,
            )))
        }
    }
}

/// Keyword-count heuristic scorer.
///
/// +1 per positive keyword present as a whole word, -1 per negative keyword
/// present; the label follows the sign. Presence counts once per keyword
/// regardless of repetition, so the score is independent of both token
/// order and keyword-list order.
pub struct LexiconScorer;

impl LexiconScorer {
    /// Score a single document. Pure and stateless.
    #[must_use]
    pub fn score_document(document: &Document) -> SentimentResult {
        let toks = lexicon::tokens(&document.combined());
        let mut count = 0_i32;
        for keyword in lexicon::POSITIVE {
            if toks.contains(*keyword) {
                count += 1;
            }
        }
        for keyword in lexicon::NEGATIVE {
            if toks.contains(*keyword) {
                count -= 1;
            }
        }
        SentimentResult::from_keyword_count(count)
    }
}

#[async_trait]
impl SentimentScorer for LexiconScorer {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    async fn score_batch(
        &self,
        documents: &[Document],
    ) -> Result<Vec<SentimentResult>, AnalysisError> {
        Ok(documents.iter().map(Self::score_document).collect())
    }
}

/// Model-backed scorer: one batched three-way classification call per
/// request, top label and its probability taken as the result.
pub struct ModelSentimentScorer {
    inference: Arc<InferenceClient>,
    max_chars: usize,
}

impl ModelSentimentScorer {
    #[must_use]
    pub fn new(inference: Arc<InferenceClient>, max_chars: usize) -> Self {
        Self {
            inference,
            max_chars,
        }
    }
}

#[async_trait]
impl SentimentScorer for ModelSentimentScorer {
    fn name(&self) -> &'static str {
        "model"
    }

    async fn score_batch(
        &self,
        documents: &[Document],
    ) -> Result<Vec<SentimentResult>, AnalysisError> {
        if documents.is_empty() {
            return Ok(Vec::new());
        }

        let truncated: Vec<String> = documents
            .iter()
            .map(|doc| doc.truncated(self.max_chars))
            .collect();
        let inputs: Vec<&str> = truncated.iter().map(String::as_str).collect();

        let predictions = self.inference.classify(&inputs).await?;

        predictions
            .into_iter()
            .map(|prediction| {
                let label = parse_sentiment_label(&prediction.label)?;
                Ok(SentimentResult {
                    label,
                    score: prediction.score,
                })
            })
            .collect()
    }
}

/// Map a serving-endpoint label to a [`SentimentLabel`].
///
/// An unknown label means the endpoint is serving the wrong model; that is
/// surfaced as an error, never silently treated as neutral.
fn parse_sentiment_label(label: &str) -> Result<SentimentLabel, AnalysisError> {
    match label.to_ascii_lowercase().as_str() {
        "positive" => Ok(SentimentLabel::Positive),
        "negative" => Ok(SentimentLabel::Negative),
        "neutral" => Ok(SentimentLabel::Neutral),
        other => Err(AnalysisError::ClassifierUnavailable(format!(
            "unexpected sentiment label: {other}"
        ))),
    }
}
