//! Response helpers shared by the chat and image endpoints.

use serde_json::Value;

use crate::error::GenAiError;

/// Longest body excerpt carried inside an error.
const BODY_EXCERPT: usize = 512;

/// Map non-success statuses to [`GenAiError::Api`], keeping the body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GenAiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    Err(GenAiError::Api {
        status: status.as_u16(),
        message: excerpt(&resp.text().await.unwrap_or_default()),
    })
}

/// Read the body as JSON. A non-JSON body counts as missing content.
pub async fn read_json(resp: reqwest::Response, path: &'static str) -> Result<Value, GenAiError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|_| GenAiError::MissingContent {
        path,
        body: excerpt(&body),
    })
}

/// Trim a body to a loggable size on a char boundary.
pub fn excerpt(body: &str) -> String {
    if body.chars().count() <= BODY_EXCERPT {
        return body.to_string();
    }
    let mut short: String = body.chars().take(BODY_EXCERPT).collect();
    short.push('…');
    short
}
