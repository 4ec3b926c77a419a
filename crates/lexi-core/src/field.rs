//! The fixed set of fields that make up a word record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// One independently aggregated attribute of a [`WordRecord`](crate::WordRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    PartOfSpeech,
    Pronunciation,
    Offensive,
    Synonyms,
    Antonyms,
    Sentences,
    Definitions,
    InspirationalQuotes,
    Rhymes,
}

impl Field {
    /// All fields, in record order.
    pub const ALL: [Self; 9] = [
        Self::PartOfSpeech,
        Self::Pronunciation,
        Self::Offensive,
        Self::Synonyms,
        Self::Antonyms,
        Self::Sentences,
        Self::Definitions,
        Self::InspirationalQuotes,
        Self::Rhymes,
    ];

    /// Wire name, matching the `WordRecord` JSON keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PartOfSpeech => "partOfSpeech",
            Self::Pronunciation => "pronunciation",
            Self::Offensive => "offensive",
            Self::Synonyms => "synonyms",
            Self::Antonyms => "antonyms",
            Self::Sentences => "sentences",
            Self::Definitions => "definitions",
            Self::InspirationalQuotes => "inspirationalQuotes",
            Self::Rhymes => "rhymes",
        }
    }

    /// Whether the field holds a sequence of strings rather than a scalar.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(
            self,
            Self::Synonyms
                | Self::Antonyms
                | Self::Sentences
                | Self::Definitions
                | Self::InspirationalQuotes
                | Self::Rhymes
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::InvalidField(s.to_string()))
    }
}
