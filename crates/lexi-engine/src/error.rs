use lexi_core::{CoreError, Field};
use lexi_genai::GenAiError;
use thiserror::Error;

/// Fatal failures of a word or image generation run.
///
/// Source outages never appear here; the aggregator absorbs them.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Generative synthesis failed for a field, so the whole word fails.
    #[error("generating {field} for '{word}' failed")]
    Field {
        word: String,
        field: Field,
        #[source]
        source: GenAiError,
    },

    /// Every source and synthesis came back empty for a mandatory field.
    #[error("no {field} could be produced for '{word}'")]
    Empty { word: String, field: Field },

    #[error("image generation for '{word}' failed")]
    Images {
        word: String,
        #[source]
        source: GenAiError,
    },

    /// The per-run HTTP session or prompt catalog could not be set up.
    #[error("session setup failed: {0}")]
    Session(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
