//! # lexi-config
//!
//! Layered configuration loading for Lexicard using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LEXICARD_*` prefix, `__` as separator)
//! 2. Project-level `.lexicard/config.toml`
//! 3. User-level `~/.config/lexicard/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LEXICARD_OPENAI__API_KEY` -> `openai.api_key`,
//! `LEXICARD_THESAURUS__BASIC_KEY` -> `thesaurus.basic_key`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use lexi_config::LexiConfig;
//!
//! let config = LexiConfig::load_with_dotenv().expect("config");
//! config.validate().expect("credentials present");
//! println!("timeout: {:?}", config.http.timeout());
//! ```

mod error;
mod general;
mod openai;
mod sources;
mod thesaurus;

pub use error::ConfigError;
pub use general::{FilterConfig, HttpConfig, ImageConfig, RetryConfig};
pub use openai::OpenAiConfig;
pub use sources::{DictionaryConfig, RhymeConfig};
pub use thesaurus::ThesaurusConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use lexi_core::GenerationOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LexiConfig {
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub thesaurus: ThesaurusConfig,
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    #[serde(default)]
    pub rhymes: RhymeConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub filters: FilterConfig,
    #[serde(default)]
    pub images: ImageConfig,
    /// Default per-field overrides applied to every generation.
    #[serde(default)]
    pub fields: GenerationOptions,
}

impl LexiConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".lexicard/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("LEXICARD_").split("__"))
    }

    /// Check the settings every generation run depends on.
    ///
    /// Missing generative credentials are fatal at startup rather than on the
    /// first request. Thesaurus keys are optional: a tier without a key is
    /// simply skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the `OpenAI` key is absent and
    /// [`ConfigError::InvalidValue`] for values no run could use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.openai.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "openai".into(),
            });
        }
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "http.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry.max_attempts".into(),
                reason: "must be at least 1".into(),
            });
        }
        if let Some(template) = &self.images.default_template {
            if !template.contains("{prompt}") {
                return Err(ConfigError::InvalidValue {
                    field: "images.default_template".into(),
                    reason: "must contain a {prompt} placeholder".into(),
                });
            }
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lexicard").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) looking for a `.env`
    /// file, then falls back to the current directory.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> LexiConfig {
        LexiConfig {
            openai: OpenAiConfig {
                api_key: "sk-test".into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn default_config_is_not_runnable() {
        let config = LexiConfig::default();
        assert!(!config.openai.is_configured());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { section }) if section == "openai"
        ));
    }

    #[test]
    fn configured_key_validates() {
        assert!(configured().validate().is_ok());
    }

    #[test]
    fn zero_timeout_rejected() {
        let mut config = configured();
        config.http.timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "http.timeout_secs"
        ));
    }

    #[test]
    fn zero_attempts_rejected() {
        let mut config = configured();
        config.retry.max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn template_without_placeholder_rejected() {
        let mut config = configured();
        config.images.default_template = Some("watercolor of a word".into());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "images.default_template"
        ));
    }

    #[test]
    fn figment_builds_without_files() {
        let config: LexiConfig = LexiConfig::figment()
            .extract()
            .expect("should extract defaults");
        assert_eq!(config.http.timeout_secs, 20);
        assert_eq!(config.fields.synonyms.count, 8);
    }
}
