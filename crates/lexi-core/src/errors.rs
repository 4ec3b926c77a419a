//! Cross-cutting error types for Lexicard.
//!
//! Source, generative, and engine errors live in their own crates. The CLI
//! converges them all into `anyhow`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A field name did not match any known [`Field`](crate::Field).
    #[error("Unknown field: {0}")]
    InvalidField(String),

    /// Input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),
}
