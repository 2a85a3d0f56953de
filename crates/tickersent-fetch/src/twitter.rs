//! Twitter/X post source via the `bird` CLI.
//!
//! Invokes `bird search "{query}" --json -n {limit} --auth-token ... --ct0 ...`
//! as a subprocess and maps each tweet to a title-less [`Document`].

use std::collections::HashSet;

use serde::Deserialize;
use tickersent_core::{AppConfig, Document, Ticker};

use crate::FetchError;

#[derive(Deserialize)]
struct SearchTweet {
    id: String,
    text: String,
}

/// Fetch up to `limit` recent posts mentioning `ticker`.
///
/// The query matches both the cashtag and the bare symbol, English only,
/// retweets excluded. Results are deduplicated by tweet id and returned in
/// fetch order.
///
/// # Errors
///
/// Returns [`FetchError::CredentialsMissing`] when the auth token pair is
/// not configured, [`FetchError::Subprocess`] when `bird` cannot be spawned
/// or exits non-zero, and [`FetchError::Parse`] on unparseable output.
pub async fn fetch_ticker_posts(
    config: &AppConfig,
    ticker: &Ticker,
    limit: usize,
) -> Result<Vec<Document>, FetchError> {
    let (auth_token, ct0) = match (&config.twitter_auth_token, &config.twitter_ct0) {
        (Some(a), Some(c)) => (a.as_str(), c.as_str()),
        _ => return Err(FetchError::CredentialsMissing),
    };

    let symbol = ticker.as_str();
    let query = format!("${symbol} OR {symbol} lang:en -filter:retweets");

    let output = tokio::process::Command::new("bird")
        .args([
            "search",
            &query,
            "--json",
            "-n",
            &limit.to_string(),
            "--auth-token",
            auth_token,
            "--ct0",
            ct0,
        ])
        .output()
        .await
        .map_err(|e| FetchError::Subprocess(format!("bird spawn failed: {e}")))?;

    if !output.status.success() {
        return Err(FetchError::Subprocess(format!(
            "bird search exited with {}",
            output.status
        )));
    }

    let tweets: Vec<SearchTweet> = serde_json::from_slice(&output.stdout)?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut documents = Vec::new();
    for tweet in tweets {
        if !seen.insert(tweet.id) {
            continue;
        }
        documents.push(Document::post(tweet.text));
        if documents.len() == limit {
            break;
        }
    }

    tracing::debug!(ticker = %ticker, count = documents.len(), "fetched posts");
    Ok(documents)
}
