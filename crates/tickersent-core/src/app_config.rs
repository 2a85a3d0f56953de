/// Runtime configuration for the scanner.
#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Base URL of the classification serving endpoint. Only required when
    /// a model-backed classifier or scorer variant is selected.
    pub inference_url: Option<String>,
    /// Character cap applied to documents before model submission.
    pub model_max_chars: usize,
    pub twitter_auth_token: Option<String>,
    pub twitter_ct0: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("inference_url", &self.inference_url)
            .field("model_max_chars", &self.model_max_chars)
            .field(
                "twitter_auth_token",
                &self.twitter_auth_token.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "twitter_ct0",
                &self.twitter_ct0.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}
