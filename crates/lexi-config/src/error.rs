//! Errors raised while loading or checking Lexicard settings.

use thiserror::Error;

/// Raised at startup; none of these are recoverable per request.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or environment variable could not be merged or decoded.
    #[error("failed to load lexicard settings: {0}")]
    Figment(#[from] figment::Error),

    /// Credentials every run depends on are missing.
    #[error("no credentials configured for [{section}]; set them in config.toml or LEXICARD_* variables")]
    NotConfigured { section: String },

    /// A setting is present but no run could use it.
    #[error("setting '{field}' is unusable: {reason}")]
    InvalidValue { field: String, reason: String },
}
