//! Rhyme services: Datamuse (primary) and `RhymeBrain` (secondary).
//!
//! Both return a JSON array of `{ "word": ... }` objects ordered by rhyme
//! quality. Length and self-match filtering happen in the engine.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    SourceClient, SourceData,
    error::SourceError,
    http::{check_found, read_json},
};

#[derive(Deserialize)]
struct RhymeEntry {
    word: String,
}

impl SourceClient {
    /// Perfect rhymes from Datamuse (`rel_rhy`).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure or an unexpected body.
    pub async fn fetch_datamuse(&self, word: &str) -> Result<SourceData, SourceError> {
        let url = format!(
            "{}?rel_rhy={}&max={}",
            self.rhymes.datamuse_url,
            urlencoding::encode(word),
            self.rhymes.max_results
        );
        self.fetch_rhymes(&url).await
    }

    /// Rhymes from `RhymeBrain` (`getRhymes`).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure or an unexpected body.
    pub async fn fetch_rhymebrain(&self, word: &str) -> Result<SourceData, SourceError> {
        let url = format!(
            "{}?function=getRhymes&word={}&maxResults={}",
            self.rhymes.rhymebrain_url,
            urlencoding::encode(word),
            self.rhymes.max_results
        );
        self.fetch_rhymes(&url).await
    }

    async fn fetch_rhymes(&self, url: &str) -> Result<SourceData, SourceError> {
        let Some(resp) = check_found(self.http.get(url).send().await?).await? else {
            return Ok(SourceData::default());
        };
        Ok(SourceData {
            rhymes: parse_rhymes(read_json(resp).await?)?,
            ..SourceData::default()
        })
    }
}

fn parse_rhymes(body: Value) -> Result<Vec<String>, SourceError> {
    let entries: Vec<RhymeEntry> =
        serde_json::from_value(body).map_err(|e| SourceError::Parse(e.to_string()))?;
    Ok(entries
        .into_iter()
        .map(|e| e.word.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect())
}
