//! Relevance and sentiment scoring pipeline for ticker mentions.
//!
//! Takes a fetched batch of short text documents, decides which are actually
//! about the target ticker (rule-based matcher or model-backed zero-shot
//! classifier), scores the survivors for polarity (keyword lexicon or
//! model-backed classifier), and aggregates a per-ticker report.

pub mod cache;
pub mod error;
pub mod inference;
pub mod pipeline;
pub mod relevance;
pub mod report;
pub mod sentiment;
pub mod types;

mod lexicon;

pub use cache::RequestCache;
pub use error::AnalysisError;
pub use inference::InferenceClient;
pub use pipeline::run_analysis;
pub use relevance::{
    build_classifier, ModelRelevanceClassifier, RelevanceClassifier, RuleBasedClassifier,
};
pub use report::{AnalysisReport, ReportEntry, SentimentSummary};
pub use sentiment::{build_scorer, LexiconScorer, ModelSentimentScorer, SentimentScorer};
pub use types::{
    AnalysisRequest, ClassifierKind, Confidence, RelevanceVerdict, ScorerKind, SentimentLabel,
    SentimentResult,
};
