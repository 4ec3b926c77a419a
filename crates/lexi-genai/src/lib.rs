//! # lexi-genai
//!
//! Generative collaborators for Lexicard: the prompt catalog, the
//! chat-completion client used for field synthesis, and the text-to-image
//! client used by the image pipeline.
//!
//! The engine depends on the [`TextGenerator`] and [`ImageGenerator`]
//! traits; [`OpenAiClient`] implements both over HTTP.

pub mod chat;
pub mod images;
pub mod prompts;
pub mod retry;

mod error;
mod http;

pub use chat::{ChatRequest, TextGenerator};
pub use error::GenAiError;
pub use images::ImageGenerator;
pub use prompts::{ChatMessage, PromptCatalog, PromptKey, PromptTemplate, Role};
pub use retry::RetryPolicy;

use lexi_config::LexiConfig;
use std::fmt;
use std::sync::Arc;

/// HTTP client for the `OpenAI` chat and image endpoints.
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    chat_model: String,
    image_size: String,
    retry: RetryPolicy,
    catalog: Arc<PromptCatalog>,
}

impl OpenAiClient {
    /// Build a client on top of an existing HTTP client.
    #[must_use]
    pub fn new(http: reqwest::Client, config: &LexiConfig, catalog: Arc<PromptCatalog>) -> Self {
        Self {
            http,
            api_key: config.openai.api_key.clone(),
            base_url: config.openai.base_url().to_string(),
            chat_model: config.openai.chat_model.clone(),
            image_size: config.openai.image_size.clone(),
            retry: RetryPolicy::from(&config.retry),
            catalog,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }
}

impl fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("chat_model", &self.chat_model)
            .field("image_size", &self.image_size)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}
