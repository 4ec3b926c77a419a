//! HTTP-backed generator construction.
//!
//! One `reqwest::Client` is built per generator and shared by every fetcher
//! and generative call, so connections are reused across fields and across
//! the words of a batch. It is released when the generator is dropped; open
//! a new generator to scope the client to a single run.

use lexi_config::{HttpConfig, LexiConfig};
use lexi_genai::{OpenAiClient, PromptCatalog};
use lexi_sources::SourceClient;
use std::sync::Arc;

use crate::{WordGenerator, error::EngineError};

/// A [`WordGenerator`] wired to the real external services.
pub type HttpWordGenerator = WordGenerator<SourceClient, OpenAiClient, OpenAiClient>;

impl HttpWordGenerator {
    /// Build the shared HTTP client, load the prompt catalog, and wire the
    /// source and generative clients onto them.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Session`] if the HTTP client cannot be built or
    /// the prompt catalog fails to load.
    pub fn open(config: &LexiConfig) -> Result<Self, EngineError> {
        let http = http_client(&config.http)?;
        let catalog = PromptCatalog::from_config(&config.openai)
            .map_err(|e| EngineError::Session(e.to_string()))?;

        let sources = SourceClient::new(http.clone(), config);
        let openai = OpenAiClient::new(http, config, Arc::new(catalog));
        tracing::debug!(timeout = ?config.http.timeout(), "generation session opened");

        Ok(Self::new(sources, openai.clone(), openai, config))
    }
}

/// Build the per-run HTTP client with the configured timeout.
///
/// # Errors
///
/// Returns [`EngineError::Session`] if the TLS backend fails to initialize.
pub fn http_client(config: &HttpConfig) -> Result<reqwest::Client, EngineError> {
    reqwest::Client::builder()
        .timeout(config.timeout())
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| EngineError::Session(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_with_defaults() {
        let generator = HttpWordGenerator::open(&LexiConfig::default()).unwrap();
        assert_eq!(generator.defaults().synonyms.count, 8);
    }

    #[test]
    fn open_fails_on_missing_catalog() {
        let mut config = LexiConfig::default();
        config.openai.prompt_catalog = Some("/nonexistent/prompts.toml".into());
        let err = HttpWordGenerator::open(&config).unwrap_err();
        assert!(matches!(err, EngineError::Session(_)));
    }
}
