//! Prompt catalog: one parameterized chat request template per prompt key.
//!
//! The built-in catalog is embedded from `prompts.toml`. A replacement file
//! can be supplied through `openai.prompt_catalog`; it must define every key.

use lexi_config::OpenAiConfig;
use lexi_core::Field;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::chat::ChatRequest;
use crate::error::GenAiError;

const BUILTIN: &str = include_str!("prompts.toml");

/// Identifies one catalog entry.
///
/// Every [`Field`] has its own prompt; [`PromptKey::ImagePrompts`] drives the
/// image pipeline's description step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKey {
    PartOfSpeech,
    Pronunciation,
    Offensive,
    Synonyms,
    Antonyms,
    Sentences,
    Definitions,
    InspirationalQuotes,
    Rhymes,
    ImagePrompts,
}

impl PromptKey {
    pub const ALL: [Self; 10] = [
        Self::PartOfSpeech,
        Self::Pronunciation,
        Self::Offensive,
        Self::Synonyms,
        Self::Antonyms,
        Self::Sentences,
        Self::Definitions,
        Self::InspirationalQuotes,
        Self::Rhymes,
        Self::ImagePrompts,
    ];

    /// Table name in the catalog file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ImagePrompts => "imagePrompts",
            Self::PartOfSpeech => Field::PartOfSpeech.as_str(),
            Self::Pronunciation => Field::Pronunciation.as_str(),
            Self::Offensive => Field::Offensive.as_str(),
            Self::Synonyms => Field::Synonyms.as_str(),
            Self::Antonyms => Field::Antonyms.as_str(),
            Self::Sentences => Field::Sentences.as_str(),
            Self::Definitions => Field::Definitions.as_str(),
            Self::InspirationalQuotes => Field::InspirationalQuotes.as_str(),
            Self::Rhymes => Field::Rhymes.as_str(),
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl From<Field> for PromptKey {
    fn from(field: Field) -> Self {
        match field {
            Field::PartOfSpeech => Self::PartOfSpeech,
            Field::Pronunciation => Self::Pronunciation,
            Field::Offensive => Self::Offensive,
            Field::Synonyms => Self::Synonyms,
            Field::Antonyms => Self::Antonyms,
            Field::Sentences => Self::Sentences,
            Field::Definitions => Self::Definitions,
            Field::InspirationalQuotes => Self::InspirationalQuotes,
            Field::Rhymes => Self::Rhymes,
        }
    }
}

impl fmt::Display for PromptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptKey {
    type Err = GenAiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| GenAiError::Catalog(format!("unknown prompt key '{s}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// One immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTemplate {
    /// Model override; `None` uses the configured chat model.
    #[serde(default)]
    pub model: Option<String>,
    /// Role-tagged message templates with `{word}` and `{count}` placeholders.
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub presence_penalty: Option<f32>,
    #[serde(default)]
    pub frequency_penalty: Option<f32>,
}

impl PromptTemplate {
    /// Substitute placeholders and produce a ready-to-send request.
    #[must_use]
    pub fn render(&self, word: &str, count: usize, default_model: &str) -> ChatRequest {
        let count = count.to_string();
        let messages = self
            .messages
            .iter()
            .map(|m| ChatMessage {
                role: m.role,
                content: m.content.replace("{count}", &count).replace("{word}", word),
            })
            .collect();

        ChatRequest {
            model: self
                .model
                .clone()
                .unwrap_or_else(|| default_model.to_string()),
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            presence_penalty: self.presence_penalty,
            frequency_penalty: self.frequency_penalty,
        }
    }

    fn validate(&self, key: PromptKey) -> Result<(), GenAiError> {
        if self.messages.is_empty() {
            return Err(GenAiError::Catalog(format!("prompt '{key}' has no messages")));
        }
        if !self.messages.iter().any(|m| m.content.contains("{word}")) {
            return Err(GenAiError::Catalog(format!(
                "prompt '{key}' never mentions {{word}}"
            )));
        }
        Ok(())
    }
}

/// The full, validated set of prompt templates.
///
/// Loaded once per process and shared read-only.
#[derive(Debug, Clone)]
pub struct PromptCatalog {
    /// Indexed by [`PromptKey::index`]; construction guarantees every key.
    entries: Vec<PromptTemplate>,
}

impl PromptCatalog {
    /// The catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError::Catalog`] if the embedded file is malformed.
    pub fn builtin() -> Result<Self, GenAiError> {
        Self::from_toml(BUILTIN)
    }

    /// Load the catalog named by the config, or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError::Catalog`] if the file cannot be read or fails
    /// validation.
    pub fn from_config(config: &OpenAiConfig) -> Result<Self, GenAiError> {
        match config.prompt_catalog.as_deref() {
            Some(path) => Self::load(Path::new(path)),
            None => Self::builtin(),
        }
    }

    /// Read and validate a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError::Catalog`] on I/O or validation failure.
    pub fn load(path: &Path) -> Result<Self, GenAiError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| GenAiError::Catalog(format!("{}: {e}", path.display())))?;
        Self::from_toml(&text)
    }

    /// Parse and validate catalog text.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError::Catalog`] for TOML errors, unknown keys, missing
    /// keys, or entries without usable messages.
    pub fn from_toml(text: &str) -> Result<Self, GenAiError> {
        let raw: HashMap<String, PromptTemplate> =
            toml::from_str(text).map_err(|e| GenAiError::Catalog(e.to_string()))?;

        let mut by_key = HashMap::with_capacity(raw.len());
        for (name, template) in raw {
            let key: PromptKey = name.parse()?;
            template.validate(key)?;
            by_key.insert(key, template);
        }

        let entries = PromptKey::ALL
            .into_iter()
            .map(|key| {
                by_key
                    .remove(&key)
                    .ok_or_else(|| GenAiError::Catalog(format!("prompt '{key}' is missing")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    #[must_use]
    pub fn get(&self, key: PromptKey) -> &PromptTemplate {
        &self.entries[key.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (PromptKey, &PromptTemplate)> {
        PromptKey::ALL.into_iter().zip(self.entries.iter())
    }
}
