//! Generative client error types.

use thiserror::Error;

/// Errors from the prompt catalog and the text/image generation clients.
///
/// Unlike source errors these are fatal to the field being generated:
/// synthesis is the last resort and has nothing to fall back to.
#[derive(Debug, Error)]
pub enum GenAiError {
    /// HTTP transport error (connection refused, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response did not contain the generated payload at `path`.
    #[error("response missing {path}: {body}")]
    MissingContent { path: &'static str, body: String },

    /// The payload was present but could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The prompt catalog is missing, unreadable, or malformed.
    #[error("prompt catalog error: {0}")]
    Catalog(String),

    /// Every attempt failed with a transient error.
    #[error("gave up after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: u32,
        last: Box<GenAiError>,
    },
}

impl GenAiError {
    /// Whether another attempt could plausibly succeed.
    ///
    /// Transport failures, rate limiting, server errors, and responses that
    /// came back without content are transient. Client errors (bad key,
    /// invalid request) and local failures are not.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Http(_) | Self::MissingContent { .. } => true,
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            Self::Decode(_) | Self::Catalog(_) | Self::RetriesExhausted { .. } => false,
        }
    }
}
