//! The per-field aggregation state machine.
//!
//! Each field runs the same sequence: cached check, sources in priority
//! order while short, one synthesis round for the remaining shortfall, then
//! filter and format. Source failures are absorbed; synthesis failures are
//! fatal for the field.

use lexi_config::FilterConfig;
use lexi_core::{Field, GenerationOptions, PartOfSpeechOptions, PronunciationOptions};
use lexi_genai::{PromptKey, TextGenerator};
use lexi_sources::{SourceData, SourceFetcher, SourceKind};
use tracing::instrument;

use crate::{
    error::EngineError,
    policy::{self, sources_for},
    memo::SourceMemo,
    state::FieldState,
};

/// The aggregated value of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
}

/// Runs the field aggregations of one word.
///
/// Built per word generation. Fields share its source memo, so each source
/// is queried at most once per word, but every field keeps its own state.
#[derive(Debug)]
pub struct Aggregator<'a, S, T> {
    word: &'a str,
    memo: SourceMemo<'a, S>,
    text: &'a T,
    filters: &'a FilterConfig,
}

impl<'a, S, T> Aggregator<'a, S, T>
where
    S: SourceFetcher,
    T: TextGenerator,
{
    #[must_use]
    pub fn new(word: &'a str, sources: &'a S, text: &'a T, filters: &'a FilterConfig) -> Self {
        Self {
            word,
            memo: SourceMemo::new(sources, word),
            text,
            filters,
        }
    }

    /// Aggregate one field, starting from `state`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Field`] if synthesis was needed and failed, or
    /// [`EngineError::Empty`] if a mandatory scalar field ended up empty.
    #[instrument(skip(self, options, state), fields(word = %self.word))]
    pub async fn aggregate(
        &self,
        field: Field,
        options: &GenerationOptions,
        state: FieldState,
    ) -> Result<FieldValue, EngineError> {
        match field {
            Field::PartOfSpeech => self
                .part_of_speech(options.part_of_speech, state)
                .await
                .map(FieldValue::Text),
            Field::Pronunciation => self
                .pronunciation(options.pronunciation, state)
                .await
                .map(FieldValue::Text),
            Field::Offensive => self.offensive(state).await.map(FieldValue::Flag),
            Field::Synonyms
            | Field::Antonyms
            | Field::Sentences
            | Field::Definitions
            | Field::InspirationalQuotes
            | Field::Rhymes => self
                .list(field, options, state)
                .await
                .map(FieldValue::List),
        }
    }

    async fn list(
        &self,
        field: Field,
        options: &GenerationOptions,
        mut state: FieldState,
    ) -> Result<Vec<String>, EngineError> {
        let word = self.word;
        let count = options.count(field);
        let keep = |value: &str| policy::keep(field, word, value, self.filters);

        if state.shortfall(count) == 0 {
            tracing::debug!(%field, "satisfied from cache");
        } else {
            for &source in sources_for(field) {
                if state.shortfall(count) == 0 {
                    break;
                }
                if let Some(mut data) = self.fetch(source, &mut state).await {
                    let added = state.accept(data.take_list(field), keep);
                    tracing::debug!(%field, %source, added, "merged source values");
                }
            }

            let shortfall = state.shortfall(count);
            if shortfall > 0 {
                tracing::info!(word, %field, shortfall, "synthesizing shortfall");
                let raw = self.synthesize(field, shortfall).await?;
                state.accept(policy::parse_lines(&raw), keep);
            }
        }

        let mut values = policy::format_list(field, word, state.into_values(), options);
        values.truncate(count);
        Ok(values)
    }

    async fn part_of_speech(
        &self,
        options: PartOfSpeechOptions,
        mut state: FieldState,
    ) -> Result<String, EngineError> {
        let word = self.word;
        let field = Field::PartOfSpeech;
        if state.is_empty() {
            for &source in sources_for(field) {
                if let Some(data) = self.fetch(source, &mut state).await {
                    state.accept(data.part_of_speech, |_| true);
                }
                if !state.is_empty() {
                    break;
                }
            }
        }
        if state.is_empty() {
            tracing::info!(word, %field, shortfall = 1, "synthesizing shortfall");
            let raw = self.synthesize(field, 1).await?;
            state.accept([raw], |_| true);
        }

        let formatted = state
            .into_values()
            .first()
            .map(|raw| policy::format_part_of_speech(raw, options))
            .unwrap_or_default();
        non_empty(word, field, formatted)
    }

    async fn pronunciation(
        &self,
        options: PronunciationOptions,
        mut state: FieldState,
    ) -> Result<String, EngineError> {
        let word = self.word;
        let field = Field::Pronunciation;
        if state.is_empty() {
            let raw = self.synthesize(field, 1).await?;
            state.accept([raw], |_| true);
        }

        let formatted = state
            .into_values()
            .first()
            .map(|raw| policy::format_pronunciation(raw, options))
            .unwrap_or_default();
        non_empty(word, field, formatted)
    }

    /// Stops at the first definitive answer.
    async fn offensive(&self, mut state: FieldState) -> Result<bool, EngineError> {
        let word = self.word;
        let field = Field::Offensive;
        if let Some(flag) = state.flag() {
            return Ok(flag);
        }
        for &source in sources_for(field) {
            if let Some(flag) = self
                .fetch(source, &mut state)
                .await
                .and_then(|data| data.offensive)
            {
                tracing::debug!(%source, flag, "definitive offensiveness signal");
                return Ok(flag);
            }
        }

        tracing::info!(word, %field, "no source signal, asking the model");
        let raw = self.synthesize(field, 1).await?;
        Ok(policy::parse_offensive(&raw))
    }

    /// Source data for this field, at most once per source.
    async fn fetch(&self, source: SourceKind, state: &mut FieldState) -> Option<SourceData> {
        if !state.mark_attempted(source) {
            return None;
        }
        self.memo.get(source).await
    }

    async fn synthesize(&self, field: Field, count: usize) -> Result<String, EngineError> {
        self.text
            .generate(PromptKey::from(field), self.word, count)
            .await
            .map_err(|source| EngineError::Field {
                word: self.word.to_string(),
                field,
                source,
            })
    }
}

fn non_empty(word: &str, field: Field, value: String) -> Result<String, EngineError> {
    if value.is_empty() {
        return Err(EngineError::Empty {
            word: word.to_string(),
            field,
        });
    }
    Ok(value)
}
