//! Text-to-image client.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Serialize;
use serde_json::Value;
use std::future::Future;

use crate::{
    OpenAiClient,
    error::GenAiError,
    http::{check_response, excerpt, read_json},
};

const IMAGE_PATH: &str = "data[0].b64_json";

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    prompt: &'a str,
    n: u8,
    size: &'a str,
    response_format: &'static str,
}

/// Renders one image for a prompt and returns the raw PNG bytes.
pub trait ImageGenerator: Sync {
    fn generate_image(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<Vec<u8>, GenAiError>> + Send;
}

impl<G: ImageGenerator> ImageGenerator for &G {
    fn generate_image(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<Vec<u8>, GenAiError>> + Send {
        (**self).generate_image(prompt)
    }
}

impl ImageGenerator for OpenAiClient {
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>, GenAiError> {
        let url = format!("{}/images/generations", self.base_url);
        let request = ImageRequest {
            prompt,
            n: 1,
            size: &self.image_size,
            response_format: "b64_json",
        };
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let body = read_json(check_response(resp).await?, IMAGE_PATH).await?;
        extract_image(&body)
    }
}

fn extract_image(body: &Value) -> Result<Vec<u8>, GenAiError> {
    let encoded = body
        .pointer("/data/0/b64_json")
        .and_then(Value::as_str)
        .ok_or_else(|| GenAiError::MissingContent {
            path: IMAGE_PATH,
            body: excerpt(&body.to_string()),
        })?;
    STANDARD
        .decode(encoded)
        .map_err(|e| GenAiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_decodes_payload() {
        let body = serde_json::json!({
            "created": 1_700_000_000,
            "data": [{ "b64_json": STANDARD.encode(b"\x89PNG\r\n") }]
        });
        assert_eq!(extract_image(&body).unwrap(), b"\x89PNG\r\n");
    }

    #[test]
    fn url_response_is_missing_content() {
        let body = serde_json::json!({ "data": [{ "url": "https://example.invalid/img.png" }] });
        assert!(matches!(
            extract_image(&body),
            Err(GenAiError::MissingContent { path: "data[0].b64_json", .. })
        ));
    }

    #[test]
    fn invalid_base64_is_decode_error() {
        let body = serde_json::json!({ "data": [{ "b64_json": "not base64!" }] });
        assert!(matches!(extract_image(&body), Err(GenAiError::Decode(_))));
    }

    #[test]
    fn request_wire_shape() {
        let request = ImageRequest {
            prompt: "a lantern glowing in fog",
            n: 1,
            size: "1024x1024",
            response_format: "b64_json",
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "prompt": "a lantern glowing in fog",
                "n": 1,
                "size": "1024x1024",
                "response_format": "b64_json"
            })
        );
    }
}
