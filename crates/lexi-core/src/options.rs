//! Per-field generation overrides.
//!
//! Every struct deserializes with defaults, so a partial TOML or JSON table
//! (e.g. only `[fields.sentences] bold = true`) is valid.

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Options for a plain list field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Requested number of items.
    pub count: usize,
}

impl ListOptions {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceOptions {
    pub count: usize,
    /// Wrap occurrences of the word in `<b>` tags.
    pub bold: bool,
    /// Ensure terminal punctuation when true, strip it when false.
    pub punctuate: bool,
}

impl Default for SentenceOptions {
    fn default() -> Self {
        Self {
            count: 8,
            bold: false,
            punctuate: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefinitionOptions {
    pub count: usize,
    /// Ensure terminal punctuation when true, strip it when false.
    pub punctuate: bool,
    /// Upper-case the first letter.
    pub capitalize: bool,
}

impl Default for DefinitionOptions {
    fn default() -> Self {
        Self {
            count: 8,
            punctuate: false,
            capitalize: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartOfSpeechOptions {
    /// Replace the full name with its abbreviation (`adjective` → `adj`).
    pub abbreviate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PronunciationOptions {
    /// Lower-case the result, removing emphasis expressed through capitals.
    pub lowercase: bool,
}

impl Default for PronunciationOptions {
    fn default() -> Self {
        Self { lowercase: true }
    }
}

/// Overrides for every field of one word generation.
///
/// Keys stay snake_case: the `LEXICARD_FIELDS__*` environment layer
/// lower-cases names, so camelCase keys could never be overridden there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub part_of_speech: PartOfSpeechOptions,
    pub pronunciation: PronunciationOptions,
    pub synonyms: ListOptions,
    pub antonyms: ListOptions,
    pub sentences: SentenceOptions,
    pub definitions: DefinitionOptions,
    pub inspirational_quotes: ListOptions,
    pub rhymes: ListOptions,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            part_of_speech: PartOfSpeechOptions::default(),
            pronunciation: PronunciationOptions::default(),
            synonyms: ListOptions::new(8),
            antonyms: ListOptions::new(8),
            sentences: SentenceOptions::default(),
            definitions: DefinitionOptions::default(),
            inspirational_quotes: ListOptions::new(6),
            rhymes: ListOptions::new(6),
        }
    }
}

impl GenerationOptions {
    /// Requested item count for `field`. Scalar fields always request one.
    #[must_use]
    pub const fn count(&self, field: Field) -> usize {
        match field {
            Field::PartOfSpeech | Field::Pronunciation | Field::Offensive => 1,
            Field::Synonyms => self.synonyms.count,
            Field::Antonyms => self.antonyms.count,
            Field::Sentences => self.sentences.count,
            Field::Definitions => self.definitions.count,
            Field::InspirationalQuotes => self.inspirational_quotes.count,
            Field::Rhymes => self.rhymes.count,
        }
    }

    /// Override the requested count for a list field. Scalar fields ignore it.
    pub fn set_count(&mut self, field: Field, count: usize) {
        match field {
            Field::PartOfSpeech | Field::Pronunciation | Field::Offensive => {}
            Field::Synonyms => self.synonyms.count = count,
            Field::Antonyms => self.antonyms.count = count,
            Field::Sentences => self.sentences.count = count,
            Field::Definitions => self.definitions.count = count,
            Field::InspirationalQuotes => self.inspirational_quotes.count = count,
            Field::Rhymes => self.rhymes.count = count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_counts() {
        let options = GenerationOptions::default();
        assert_eq!(options.count(Field::Synonyms), 8);
        assert_eq!(options.count(Field::Antonyms), 8);
        assert_eq!(options.count(Field::Sentences), 8);
        assert_eq!(options.count(Field::Definitions), 8);
        assert_eq!(options.count(Field::InspirationalQuotes), 6);
        assert_eq!(options.count(Field::Rhymes), 6);
        assert_eq!(options.count(Field::Offensive), 1);
        assert!(options.pronunciation.lowercase);
    }

    #[test]
    fn partial_table_keeps_defaults() {
        let options: GenerationOptions =
            serde_json::from_str(r#"{"sentences": {"bold": true}, "rhymes": {"count": 3}}"#)
                .unwrap();
        assert!(options.sentences.bold);
        assert_eq!(options.sentences.count, 8);
        assert_eq!(options.rhymes.count, 3);
        assert_eq!(options.synonyms.count, 8);
    }

    #[test]
    fn set_count_ignores_scalars() {
        let mut options = GenerationOptions::default();
        options.set_count(Field::Synonyms, 3);
        options.set_count(Field::Pronunciation, 9);
        assert_eq!(options.count(Field::Synonyms), 3);
        assert_eq!(options.count(Field::Pronunciation), 1);
    }
}
