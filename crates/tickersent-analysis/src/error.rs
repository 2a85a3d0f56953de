use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The model-backed classifier or scorer could not be reached or returned
    /// an unusable response. The pipeline surfaces this instead of falling
    /// back to the heuristic variants.
    #[error("classifier unavailable: {0}")]
    ClassifierUnavailable(String),

    #[error("document limit must be positive, got {0}")]
    InvalidLimit(usize),

    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}
