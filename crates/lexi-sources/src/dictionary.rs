//! Free Dictionary API client.
//!
//! One lookup yields the part of speech, every definition, example
//! sentences, incidental synonyms/antonyms, and the etymology note.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    SourceClient, SourceData,
    error::SourceError,
    http::{check_found, read_json},
};

#[derive(Deserialize)]
struct DictionaryEntry {
    #[serde(default)]
    origin: Option<String>,
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Meaning {
    #[serde(default)]
    part_of_speech: Option<String>,
    #[serde(default)]
    definitions: Vec<Definition>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

#[derive(Deserialize)]
struct Definition {
    definition: String,
    #[serde(default)]
    example: Option<String>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

impl SourceClient {
    /// Look `word` up in the free dictionary.
    ///
    /// A 404 ("No Definitions Found") yields empty data.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure or an unexpected body.
    pub async fn fetch_dictionary(&self, word: &str) -> Result<SourceData, SourceError> {
        let url = format!(
            "{}/{}",
            self.dictionary.url.trim_end_matches('/'),
            urlencoding::encode(word)
        );
        let Some(resp) = check_found(self.http.get(&url).send().await?).await? else {
            tracing::debug!(word, "dictionary has no entry");
            return Ok(SourceData::default());
        };

        parse_dictionary(read_json(resp).await?)
    }
}

/// Flatten the first entry of a dictionary response.
fn parse_dictionary(body: Value) -> Result<SourceData, SourceError> {
    let mut entries: Vec<DictionaryEntry> =
        serde_json::from_value(body).map_err(|e| SourceError::Parse(e.to_string()))?;
    if entries.is_empty() {
        return Ok(SourceData::default());
    }
    let entry = entries.swap_remove(0);

    let mut data = SourceData {
        origin: entry.origin.filter(|o| !o.trim().is_empty()),
        part_of_speech: entry
            .meanings
            .first()
            .and_then(|m| m.part_of_speech.as_deref())
            .map(str::to_lowercase),
        ..SourceData::default()
    };

    for meaning in entry.meanings {
        for def in meaning.definitions {
            data.definitions.push(def.definition.to_lowercase());
            if let Some(example) = def.example.filter(|e| !e.trim().is_empty()) {
                data.sentences.push(example.to_lowercase());
            }
            data.synonyms.extend(def.synonyms.iter().map(|s| s.to_lowercase()));
            data.antonyms.extend(def.antonyms.iter().map(|s| s.to_lowercase()));
        }
        data.synonyms.extend(meaning.synonyms.iter().map(|s| s.to_lowercase()));
        data.antonyms.extend(meaning.antonyms.iter().map(|s| s.to_lowercase()));
    }

    Ok(data)
}
