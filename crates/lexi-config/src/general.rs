//! Network, retry, filtering, and image-batch settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const fn default_timeout_secs() -> u64 {
    20
}

fn default_user_agent() -> String {
    String::from("lexicard/0.1")
}

const fn default_max_attempts() -> u32 {
    3
}

const fn default_base_delay_ms() -> u64 {
    500
}

const fn default_max_delay_ms() -> u64 {
    4_000
}

const fn default_max_sentence_words() -> usize {
    14
}

const fn default_min_quote_chars() -> usize {
    15
}

const fn default_min_rhyme_chars() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Per-request timeout applied to every outbound call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl HttpConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Retry policy for the generative text client.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first. `1` disables retry.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay before the first retry; doubles on each subsequent one.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Backoff is capped here.
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

/// Thresholds for the per-field filters.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    /// Sentences with more words than this are dropped.
    #[serde(default = "default_max_sentence_words")]
    pub max_sentence_words: usize,

    /// Quotes shorter than this many characters are dropped.
    #[serde(default = "default_min_quote_chars")]
    pub min_quote_chars: usize,

    /// Rhymes shorter than this many characters are dropped.
    #[serde(default = "default_min_rhyme_chars")]
    pub min_rhyme_chars: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_sentence_words: default_max_sentence_words(),
            min_quote_chars: default_min_quote_chars(),
            min_rhyme_chars: default_min_rhyme_chars(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ImageConfig {
    /// Keep the images that succeeded when some submissions in a batch fail.
    #[serde(default)]
    pub allow_partial: bool,

    /// Wrapping template applied when the caller supplies none. Must contain
    /// a `{prompt}` placeholder.
    #[serde(default)]
    pub default_template: Option<String>,
}
