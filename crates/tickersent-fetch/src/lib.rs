//! Document retrieval for tickersent.
//!
//! Posts come from Twitter/X via the `bird` CLI, or from a local text file
//! for offline runs. Credentials are environment-supplied, never embedded
//! in source.

use thiserror::Error;

mod file;
mod twitter;

pub use file::read_posts;
pub use twitter::fetch_ticker_posts;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("twitter credentials not configured (set TWITTER_AUTH_TOKEN and TWITTER_CT0)")]
    CredentialsMissing,

    #[error("bird subprocess error: {0}")]
    Subprocess(String),

    #[error("search output parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
