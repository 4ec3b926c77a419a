//! Keyless reference sources: the free dictionary and the rhyme services.

use serde::{Deserialize, Serialize};

fn default_dictionary_url() -> String {
    String::from("https://api.dictionaryapi.dev/api/v2/entries/en")
}

fn default_datamuse_url() -> String {
    String::from("https://api.datamuse.com/words")
}

fn default_rhymebrain_url() -> String {
    String::from("https://rhymebrain.com/talk")
}

const fn default_max_results() -> usize {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DictionaryConfig {
    #[serde(default = "default_dictionary_url")]
    pub url: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            url: default_dictionary_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RhymeConfig {
    #[serde(default = "default_datamuse_url")]
    pub datamuse_url: String,

    #[serde(default = "default_rhymebrain_url")]
    pub rhymebrain_url: String,

    /// Upper bound on candidates requested from each rhyme service.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for RhymeConfig {
    fn default() -> Self {
        Self {
            datamuse_url: default_datamuse_url(),
            rhymebrain_url: default_rhymebrain_url(),
            max_results: default_max_results(),
        }
    }
}
