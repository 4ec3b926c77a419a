//! # lexi-sources
//!
//! Reference-data HTTP fetchers for Lexicard.
//!
//! Each fetcher issues one lookup keyed by the word and extracts a
//! source-specific subset of fields:
//! - Merriam-Webster thesaurus, basic and advanced tiers (synonyms, antonyms,
//!   offensiveness)
//! - Free Dictionary API (part of speech, definitions, example sentences,
//!   incidental synonyms/antonyms, origin)
//! - Datamuse and `RhymeBrain` (rhymes)
//!
//! "Not found" is never an error: a fetcher that has nothing for the word
//! returns an empty [`SourceData`]. Only transport failures and malformed
//! bodies surface as [`SourceError`].

pub mod dictionary;
pub mod rhymes;
pub mod thesaurus;

mod error;
mod http;

pub use error::SourceError;

use lexi_config::{DictionaryConfig, LexiConfig, RhymeConfig, ThesaurusConfig};
use lexi_core::Field;
use std::fmt;
use std::future::Future;

// ── Types ──────────────────────────────────────────────────────────

/// One external reference-data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceKind {
    ThesaurusBasic,
    ThesaurusAdvanced,
    Dictionary,
    Datamuse,
    RhymeBrain,
}

impl SourceKind {
    pub const ALL: [Self; 5] = [
        Self::ThesaurusBasic,
        Self::ThesaurusAdvanced,
        Self::Dictionary,
        Self::Datamuse,
        Self::RhymeBrain,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThesaurusBasic => "thesaurus-basic",
            Self::ThesaurusAdvanced => "thesaurus-advanced",
            Self::Dictionary => "dictionary",
            Self::Datamuse => "datamuse",
            Self::RhymeBrain => "rhymebrain",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partial field values contributed by one source. All strings are
/// lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceData {
    pub part_of_speech: Option<String>,
    /// Definitive offensiveness flag, when the source publishes one.
    pub offensive: Option<bool>,
    pub origin: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub definitions: Vec<String>,
    pub sentences: Vec<String>,
    pub rhymes: Vec<String>,
}

impl SourceData {
    /// True when the source contributed nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.part_of_speech.is_none()
            && self.offensive.is_none()
            && self.origin.is_none()
            && self.synonyms.is_empty()
            && self.antonyms.is_empty()
            && self.definitions.is_empty()
            && self.sentences.is_empty()
            && self.rhymes.is_empty()
    }

    /// Take the values for a list field. Scalar fields yield nothing.
    #[must_use]
    pub fn take_list(&mut self, field: Field) -> Vec<String> {
        let list = match field {
            Field::Synonyms => &mut self.synonyms,
            Field::Antonyms => &mut self.antonyms,
            Field::Definitions => &mut self.definitions,
            Field::Sentences => &mut self.sentences,
            Field::Rhymes => &mut self.rhymes,
            Field::InspirationalQuotes
            | Field::PartOfSpeech
            | Field::Pronunciation
            | Field::Offensive => return Vec::new(),
        };
        std::mem::take(list)
    }
}

/// Anything that can look a word up in a [`SourceKind`].
///
/// [`SourceClient`] is the HTTP implementation; tests substitute in-memory
/// fetchers.
pub trait SourceFetcher: Sync {
    /// Fetch the partial field map `source` has for `word`.
    fn fetch(
        &self,
        source: SourceKind,
        word: &str,
    ) -> impl Future<Output = Result<SourceData, SourceError>> + Send;
}

impl<F: SourceFetcher> SourceFetcher for &F {
    fn fetch(
        &self,
        source: SourceKind,
        word: &str,
    ) -> impl Future<Output = Result<SourceData, SourceError>> + Send {
        (**self).fetch(source, word)
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for querying every reference-data source.
///
/// Holds a clone of the caller's `reqwest::Client`, so every fetcher in one
/// generation run shares the same connection pool.
#[derive(Debug, Clone)]
pub struct SourceClient {
    http: reqwest::Client,
    thesaurus: ThesaurusConfig,
    dictionary: DictionaryConfig,
    rhymes: RhymeConfig,
}

impl SourceClient {
    /// Build a source client on top of an existing HTTP client.
    #[must_use]
    pub fn new(http: reqwest::Client, config: &LexiConfig) -> Self {
        Self {
            http,
            thesaurus: config.thesaurus.clone(),
            dictionary: config.dictionary.clone(),
            rhymes: config.rhymes.clone(),
        }
    }

    /// Look `word` up in a specific source.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the HTTP request fails, the source returns
    /// a non-success status other than 404, the body is not JSON, or the
    /// source needs credentials that are not configured.
    pub async fn lookup(&self, source: SourceKind, word: &str) -> Result<SourceData, SourceError> {
        match source {
            SourceKind::ThesaurusBasic | SourceKind::ThesaurusAdvanced => {
                self.fetch_thesaurus(source, word).await
            }
            SourceKind::Dictionary => self.fetch_dictionary(word).await,
            SourceKind::Datamuse => self.fetch_datamuse(word).await,
            SourceKind::RhymeBrain => self.fetch_rhymebrain(word).await,
        }
    }
}

impl SourceFetcher for SourceClient {
    async fn fetch(&self, source: SourceKind, word: &str) -> Result<SourceData, SourceError> {
        self.lookup(source, word).await
    }
}
