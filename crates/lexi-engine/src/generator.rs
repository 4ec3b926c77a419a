//! Word generation orchestrator.

use futures::{StreamExt, future::try_join_all, stream};
use lexi_config::{FilterConfig, ImageConfig, LexiConfig};
use lexi_core::{Field, GenerationOptions, WordRecord, validate_word};
use lexi_genai::{ImageGenerator, TextGenerator};
use lexi_sources::SourceFetcher;
use tracing::instrument;

use crate::{
    aggregator::{Aggregator, FieldValue},
    error::EngineError,
    state::FieldState,
};

/// Produces [`WordRecord`]s (and, see `images`, illustrations) for words.
///
/// Generic over its collaborators so tests can run the full pipeline against
/// in-memory fetchers and generators.
#[derive(Debug)]
pub struct WordGenerator<S, T, I> {
    pub(crate) sources: S,
    pub(crate) text: T,
    pub(crate) images: I,
    pub(crate) filters: FilterConfig,
    pub(crate) image_config: ImageConfig,
    defaults: GenerationOptions,
}

impl<S, T, I> WordGenerator<S, T, I> {
    #[must_use]
    pub fn new(sources: S, text: T, images: I, config: &LexiConfig) -> Self {
        Self {
            sources,
            text,
            images,
            filters: config.filters.clone(),
            image_config: config.images.clone(),
            defaults: config.fields.clone(),
        }
    }

    /// The configured per-field options.
    #[must_use]
    pub const fn defaults(&self) -> &GenerationOptions {
        &self.defaults
    }
}

impl<S, T, I> WordGenerator<S, T, I>
where
    S: SourceFetcher,
    T: TextGenerator,
    I: ImageGenerator,
{
    /// Generate every field for `word` concurrently.
    ///
    /// All nine aggregations run at once against shared clients but private
    /// state. The first fatal field error drops the others and fails the word.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Core`] for an invalid word and
    /// [`EngineError::Field`] / [`EngineError::Empty`] from the failing field.
    #[instrument(skip(self, options))]
    pub async fn generate(
        &self,
        word: &str,
        options: &GenerationOptions,
    ) -> Result<WordRecord, EngineError> {
        let word = validate_word(word)?;
        self.run(word, options, None).await
    }

    /// Fill in whatever `record` is missing, keeping what it already has.
    ///
    /// # Errors
    ///
    /// Same as [`Self::generate`].
    #[instrument(skip_all, fields(word = %record.word))]
    pub async fn top_up(
        &self,
        record: &WordRecord,
        options: &GenerationOptions,
    ) -> Result<WordRecord, EngineError> {
        let word = validate_word(&record.word)?;
        self.run(word, options, Some(record)).await
    }

    /// Generate several words with at most `concurrency` in flight.
    ///
    /// Results come back in input order; one word failing does not affect
    /// the others.
    pub async fn generate_many(
        &self,
        words: &[String],
        options: &GenerationOptions,
        concurrency: usize,
    ) -> Vec<Result<WordRecord, EngineError>> {
        stream::iter(words)
            .map(|word| self.generate(word, options))
            .buffered(concurrency.max(1))
            .collect()
            .await
    }

    async fn run(
        &self,
        word: String,
        options: &GenerationOptions,
        seed: Option<&WordRecord>,
    ) -> Result<WordRecord, EngineError> {
        let values = {
            let aggregator = Aggregator::new(&word, &self.sources, &self.text, &self.filters);
            let runs = Field::ALL.into_iter().map(|field| {
                let state = seed.map_or_else(FieldState::new, |record| {
                    FieldState::from_record(record, field)
                });
                aggregator.aggregate(field, options, state)
            });
            try_join_all(runs).await?
        };

        tracing::debug!(word = %word, "all fields aggregated");
        Ok(assemble(word, Field::ALL.into_iter().zip(values)))
    }
}

fn assemble(word: String, values: impl IntoIterator<Item = (Field, FieldValue)>) -> WordRecord {
    let mut record = WordRecord {
        word,
        part_of_speech: String::new(),
        pronunciation: String::new(),
        offensive: false,
        synonyms: Vec::new(),
        antonyms: Vec::new(),
        sentences: Vec::new(),
        definitions: Vec::new(),
        inspirational_quotes: Vec::new(),
        rhymes: Vec::new(),
    };
    for (field, value) in values {
        match (field, value) {
            (Field::PartOfSpeech, FieldValue::Text(v)) => record.part_of_speech = v,
            (Field::Pronunciation, FieldValue::Text(v)) => record.pronunciation = v,
            (Field::Offensive, FieldValue::Flag(v)) => record.offensive = v,
            (Field::Synonyms, FieldValue::List(v)) => record.synonyms = v,
            (Field::Antonyms, FieldValue::List(v)) => record.antonyms = v,
            (Field::Sentences, FieldValue::List(v)) => record.sentences = v,
            (Field::Definitions, FieldValue::List(v)) => record.definitions = v,
            (Field::InspirationalQuotes, FieldValue::List(v)) => record.inspirational_quotes = v,
            (Field::Rhymes, FieldValue::List(v)) => record.rhymes = v,
            (field, value) => {
                tracing::error!(%field, ?value, "value shape does not match field, discarded");
            }
        }
    }
    record
}
