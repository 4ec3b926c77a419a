//! Merriam-Webster thesaurus configuration (basic and advanced tiers).

use serde::{Deserialize, Serialize};

fn default_basic_url() -> String {
    String::from("https://www.dictionaryapi.com/api/v3/references/thesaurus/json")
}

fn default_advanced_url() -> String {
    String::from("https://www.dictionaryapi.com/api/v3/references/ithesaurus/json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThesaurusConfig {
    /// API key for the basic (collegiate) thesaurus.
    #[serde(default)]
    pub basic_key: String,

    /// API key for the advanced (intermediate) thesaurus.
    #[serde(default)]
    pub advanced_key: String,

    #[serde(default = "default_basic_url")]
    pub basic_url: String,

    #[serde(default = "default_advanced_url")]
    pub advanced_url: String,
}

impl Default for ThesaurusConfig {
    fn default() -> Self {
        Self {
            basic_key: String::new(),
            advanced_key: String::new(),
            basic_url: default_basic_url(),
            advanced_url: default_advanced_url(),
        }
    }
}

impl ThesaurusConfig {
    /// Whether the basic tier can be queried.
    #[must_use]
    pub fn basic_configured(&self) -> bool {
        !self.basic_key.trim().is_empty()
    }

    /// Whether the advanced tier can be queried.
    #[must_use]
    pub fn advanced_configured(&self) -> bool {
        !self.advanced_key.trim().is_empty()
    }
}
