//! Chat-completion client.

use serde::Serialize;
use serde_json::Value;
use std::future::Future;

use crate::{
    OpenAiClient,
    error::GenAiError,
    http::{check_response, excerpt, read_json},
    prompts::{ChatMessage, PromptKey},
};

const CONTENT_PATH: &str = "choices[0].message.content";

/// A rendered chat-completion request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f32>,
}

/// Produces free text for a catalog prompt.
///
/// `count` fills the `{count}` placeholder; prompts without one ignore it.
pub trait TextGenerator: Sync {
    fn generate(
        &self,
        key: PromptKey,
        word: &str,
        count: usize,
    ) -> impl Future<Output = Result<String, GenAiError>> + Send;
}

impl<G: TextGenerator> TextGenerator for &G {
    fn generate(
        &self,
        key: PromptKey,
        word: &str,
        count: usize,
    ) -> impl Future<Output = Result<String, GenAiError>> + Send {
        (**self).generate(key, word, count)
    }
}

impl OpenAiClient {
    /// Send a chat request under the configured retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError`] once retries are exhausted or on a permanent
    /// failure such as a rejected API key.
    pub async fn complete(&self, request: &ChatRequest) -> Result<String, GenAiError> {
        self.retry.run(move || self.complete_once(request)).await
    }

    async fn complete_once(&self, request: &ChatRequest) -> Result<String, GenAiError> {
        let url = format!("{}/chat/completions", self.base_url);
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;
        let body = read_json(check_response(resp).await?, CONTENT_PATH).await?;
        extract_content(&body)
    }
}

impl TextGenerator for OpenAiClient {
    async fn generate(&self, key: PromptKey, word: &str, count: usize) -> Result<String, GenAiError> {
        let request = self.catalog.get(key).render(word, count, &self.chat_model);
        tracing::debug!(%key, word, count, model = %request.model, "chat completion");
        self.complete(&request).await
    }
}

/// Pull the generated text out of a completion response.
fn extract_content(body: &Value) -> Result<String, GenAiError> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| GenAiError::MissingContent {
            path: CONTENT_PATH,
            body: excerpt(&body.to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::Role;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": "gpt-3.5-turbo-0125",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": "1. closeness\n2. nearness\n3. vicinity" },
                "finish_reason": "stop"
            }
        ],
        "usage": { "prompt_tokens": 30, "completion_tokens": 12, "total_tokens": 42 }
    }"#;

    #[test]
    fn extract_content_from_completion() {
        let body: Value = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(
            extract_content(&body).unwrap(),
            "1. closeness\n2. nearness\n3. vicinity"
        );
    }

    #[test]
    fn empty_choices_is_missing_content() {
        let body = serde_json::json!({ "choices": [] });
        let err = extract_content(&body).unwrap_err();
        assert!(matches!(
            err,
            GenAiError::MissingContent { path: "choices[0].message.content", .. }
        ));
    }

    #[test]
    fn null_content_is_missing_content() {
        let body = serde_json::json!({ "choices": [{ "message": { "role": "assistant", "content": null } }] });
        assert!(extract_content(&body).is_err());
    }

    #[test]
    fn request_omits_unset_sampling_parameters() {
        let request = ChatRequest {
            model: "gpt-3.5-turbo".into(),
            messages: vec![ChatMessage {
                role: Role::User,
                content: "is light an offensive word?".into(),
            }],
            max_tokens: Some(90),
            temperature: None,
            presence_penalty: None,
            frequency_penalty: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "gpt-3.5-turbo",
                "messages": [{ "role": "user", "content": "is light an offensive word?" }],
                "max_tokens": 90
            })
        );
    }
}
