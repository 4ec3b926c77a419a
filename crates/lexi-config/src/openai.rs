//! `OpenAI` chat-completion and image-generation configuration.

use serde::{Deserialize, Serialize};

fn default_api_base() -> String {
    String::from("https://api.openai.com/v1")
}

fn default_chat_model() -> String {
    String::from("gpt-3.5-turbo")
}

fn default_image_size() -> String {
    String::from("1024x1024")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAiConfig {
    /// Bearer token for the `OpenAI` API.
    #[serde(default)]
    pub api_key: String,

    /// API base URL, without a trailing slash.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Chat model used when a prompt catalog entry does not name one.
    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    /// Requested image dimensions (`WIDTHxHEIGHT`).
    #[serde(default = "default_image_size")]
    pub image_size: String,

    /// Optional path to a TOML prompt catalog replacing the built-in one.
    #[serde(default)]
    pub prompt_catalog: Option<String>,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: default_api_base(),
            chat_model: default_chat_model(),
            image_size: default_image_size(),
            prompt_catalog: None,
        }
    }
}

impl OpenAiConfig {
    /// Check if an API key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Base URL with any trailing slash removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.api_base.trim().trim_end_matches('/')
    }
}
