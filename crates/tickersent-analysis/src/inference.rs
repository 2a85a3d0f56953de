//! HTTP client for a text-classification serving endpoint.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// A single label candidate returned by the endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub score: f32,
}

/// Per-input zero-shot ranking. Labels are sorted by descending score, so
/// the first label is the endpoint's best guess.
#[derive(Debug, Clone, Deserialize)]
pub struct ZeroShotRanking {
    pub labels: Vec<String>,
    pub scores: Vec<f32>,
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a [&'a str],
}

#[derive(Serialize)]
struct ZeroShotRequest<'a> {
    inputs: &'a [&'a str],
    candidate_labels: &'a [&'a str],
}

/// Client for the classification serving endpoint.
///
/// Built once per process and shared by every model-backed variant; the
/// inner `reqwest::Client` keeps its connection pool across calls, so the
/// expensive setup happens exactly once.
pub struct InferenceClient {
    client: reqwest::Client,
    base_url: String,
}

impl InferenceClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Classify a batch of texts in one call, returning each input's
    /// top-ranked prediction in input order.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::ClassifierUnavailable`] on transport failure,
    /// non-success status, an undecodable body, or a response whose
    /// cardinality does not match the input.
    pub async fn classify(&self, inputs: &[&str]) -> Result<Vec<Prediction>, AnalysisError> {
        let request = ClassifyRequest { inputs };
        let response = self
            .client
            .post(format!("{}/predict", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisError::ClassifierUnavailable(format!("predict request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AnalysisError::ClassifierUnavailable(format!(
                "predict returned status {}",
                response.status()
            )));
        }

        let candidates: Vec<Vec<Prediction>> = response.json().await.map_err(|e| {
            AnalysisError::ClassifierUnavailable(format!("predict response parse error: {e}"))
        })?;

        if candidates.len() != inputs.len() {
            return Err(AnalysisError::ClassifierUnavailable(format!(
                "predict returned {} results for {} inputs",
                candidates.len(),
                inputs.len()
            )));
        }

        candidates
            .into_iter()
            .enumerate()
            .map(|(i, mut ranked)| {
                if ranked.is_empty() {
                    Err(AnalysisError::ClassifierUnavailable(format!(
                        "predict returned no candidates for input {i}"
                    )))
                } else {
                    Ok(ranked.remove(0))
                }
            })
            .collect()
    }

    /// Rank candidate labels for a batch of texts in one zero-shot call.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::ClassifierUnavailable`] on transport failure,
    /// non-success status, an undecodable body, or a response whose
    /// cardinality does not match the input.
    pub async fn zero_shot(
        &self,
        inputs: &[&str],
        candidate_labels: &[&str],
    ) -> Result<Vec<ZeroShotRanking>, AnalysisError> {
        let request = ZeroShotRequest {
            inputs,
            candidate_labels,
        };
        let response = self
            .client
            .post(format!("{}/zero-shot", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                AnalysisError::ClassifierUnavailable(format!("zero-shot request failed: {e}"))
            })?;

        if !response.status().is_success() {
            return Err(AnalysisError::ClassifierUnavailable(format!(
                "zero-shot returned status {}",
                response.status()
            )));
        }

        let rankings: Vec<ZeroShotRanking> = response.json().await.map_err(|e| {
            AnalysisError::ClassifierUnavailable(format!("zero-shot response parse error: {e}"))
        })?;

        if rankings.len() != inputs.len() {
            return Err(AnalysisError::ClassifierUnavailable(format!(
                "zero-shot returned {} results for {} inputs",
                rankings.len(),
                inputs.len()
            )));
        }

        Ok(rankings)
    }
}
