//! Per-(word, field) aggregation state.

use lexi_core::{Field, WordRecord};
use lexi_sources::SourceKind;
use std::collections::HashSet;

/// Accumulator for one field aggregation run.
///
/// Created per run and never shared between fields, so concurrent runs
/// cannot see each other's values.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    values: Vec<String>,
    /// Lower-cased copies of `values`, for case-insensitive dedupe.
    seen: HashSet<String>,
    attempted: HashSet<SourceKind>,
    flag: Option<bool>,
}

impl FieldState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from values that already exist, e.g. a stored record being
    /// topped up. Seeds skip the field filters but are still deduped.
    #[must_use]
    pub fn seeded<I>(values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut state = Self::new();
        state.accept(values, |_| true);
        state
    }

    /// Seed the state for `field` from an existing record.
    ///
    /// Empty scalar values leave the state unseeded so the field is
    /// regenerated.
    #[must_use]
    pub fn from_record(record: &WordRecord, field: Field) -> Self {
        match field {
            Field::PartOfSpeech => Self::seeded(non_empty(&record.part_of_speech)),
            Field::Pronunciation => Self::seeded(non_empty(&record.pronunciation)),
            Field::Offensive => Self {
                flag: Some(record.offensive),
                ..Self::default()
            },
            Field::Synonyms => Self::seeded(record.synonyms.iter().cloned()),
            Field::Antonyms => Self::seeded(record.antonyms.iter().cloned()),
            Field::Sentences => Self::seeded(record.sentences.iter().cloned()),
            Field::Definitions => Self::seeded(record.definitions.iter().cloned()),
            Field::InspirationalQuotes => {
                Self::seeded(record.inspirational_quotes.iter().cloned())
            }
            Field::Rhymes => Self::seeded(record.rhymes.iter().cloned()),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Items still missing to reach `count`.
    #[must_use]
    pub fn shortfall(&self, count: usize) -> usize {
        count.saturating_sub(self.values.len())
    }

    /// Record an attempt on `source`. Returns `false` if it was already tried.
    pub fn mark_attempted(&mut self, source: SourceKind) -> bool {
        self.attempted.insert(source)
    }

    #[must_use]
    pub fn was_attempted(&self, source: SourceKind) -> bool {
        self.attempted.contains(&source)
    }

    #[must_use]
    pub const fn flag(&self) -> Option<bool> {
        self.flag
    }

    pub const fn set_flag(&mut self, flag: bool) {
        self.flag = Some(flag);
    }

    /// Merge candidates that pass `keep` and are not yet present.
    ///
    /// Returns how many were added.
    pub fn accept<I, F>(&mut self, candidates: I, keep: F) -> usize
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> bool,
    {
        let before = self.values.len();
        for candidate in candidates {
            let candidate = candidate.trim();
            if candidate.is_empty() || !keep(candidate) {
                continue;
            }
            if self.seen.insert(candidate.to_lowercase()) {
                self.values.push(candidate.to_string());
            }
        }
        self.values.len() - before
    }

    #[must_use]
    pub fn into_values(self) -> Vec<String> {
        self.values
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
