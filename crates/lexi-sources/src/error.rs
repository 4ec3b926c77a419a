//! Source fetcher error types.
//!
//! Every variant means "this source is unavailable right now". The engine
//! logs these and falls through to the next source; they never fail a word.

use thiserror::Error;

use crate::SourceKind;

/// Errors that can occur when querying a reference-data source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP transport error (connection refused, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Source returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the source.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Response body was not the JSON the source is documented to return.
    #[error("parse error: {0}")]
    Parse(String),

    /// The source requires credentials that are not configured.
    #[error("{0} is not configured")]
    NotConfigured(SourceKind),

    /// The source returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}
