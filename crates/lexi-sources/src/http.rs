//! Status handling shared by every source fetcher.

use reqwest::StatusCode;

use crate::error::SourceError;

/// Seconds to back off when a 429 carries no usable `Retry-After`.
const DEFAULT_BACKOFF_SECS: u64 = 60;

/// Sort a response into found, not found, or unavailable.
///
/// A 404 means the source has no entry for the word and yields `None`. A 429
/// becomes [`SourceError::RateLimited`] so the engine can log how long the
/// source asked callers to back off. Any other failure status becomes
/// [`SourceError::Api`] carrying the body.
pub async fn check_found(
    resp: reqwest::Response,
) -> Result<Option<reqwest::Response>, SourceError> {
    match resp.status() {
        StatusCode::NOT_FOUND => Ok(None),
        StatusCode::TOO_MANY_REQUESTS => Err(SourceError::RateLimited {
            retry_after_secs: backoff_secs(&resp),
        }),
        status if status.is_success() => Ok(Some(resp)),
        status => Err(SourceError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        }),
    }
}

/// Read the body as JSON, mapping decode failures to [`SourceError::Parse`].
pub async fn read_json(resp: reqwest::Response) -> Result<serde_json::Value, SourceError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| SourceError::Parse(e.to_string()))
}

fn backoff_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_BACKOFF_SECS)
}
