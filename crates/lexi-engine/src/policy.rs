//! Field-specific filter and format policy.
//!
//! Filters run as values are accepted, so shortfall is always measured in
//! usable items. Formatting runs once, after all values are in.

use lexi_config::FilterConfig;
use lexi_core::format::{
    abbreviate_part_of_speech, capitalize, depunctuate, embolden, punctuate, strip_list_marker,
    to_ascii, word_count,
};
use lexi_core::{Field, GenerationOptions, PartOfSpeechOptions, PronunciationOptions};
use lexi_sources::SourceKind;

/// Sources tried for `field`, in priority order.
#[must_use]
pub const fn sources_for(field: Field) -> &'static [SourceKind] {
    match field {
        Field::Synonyms | Field::Antonyms => &[
            SourceKind::ThesaurusBasic,
            SourceKind::ThesaurusAdvanced,
            SourceKind::Dictionary,
        ],
        Field::Offensive => &[SourceKind::ThesaurusBasic, SourceKind::ThesaurusAdvanced],
        Field::PartOfSpeech | Field::Definitions | Field::Sentences => &[SourceKind::Dictionary],
        Field::Rhymes => &[SourceKind::Datamuse, SourceKind::RhymeBrain],
        Field::Pronunciation | Field::InspirationalQuotes => &[],
    }
}

/// Whether `value` may enter the accumulator for `field`.
#[must_use]
pub fn keep(field: Field, word: &str, value: &str, filters: &FilterConfig) -> bool {
    let is_self = || value.to_lowercase() == word.to_lowercase();
    match field {
        Field::Synonyms | Field::Antonyms => !value.contains('-') && !is_self(),
        Field::Rhymes => value.chars().count() >= filters.min_rhyme_chars && !is_self(),
        Field::Sentences => word_count(value) <= filters.max_sentence_words,
        Field::InspirationalQuotes => value.chars().count() >= filters.min_quote_chars,
        Field::Definitions | Field::PartOfSpeech | Field::Pronunciation | Field::Offensive => true,
    }
}

/// Split a newline-delimited model response into clean, lower-cased items.
#[must_use]
pub fn parse_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(strip_list_marker)
        .map(|line| line.to_lowercase())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Apply the display format for a list field.
#[must_use]
pub fn format_list(
    field: Field,
    word: &str,
    values: Vec<String>,
    options: &GenerationOptions,
) -> Vec<String> {
    match field {
        Field::Sentences => {
            let opts = options.sentences;
            values
                .into_iter()
                .map(|s| {
                    // Punctuation first: the closing tag would otherwise count
                    // as terminal punctuation.
                    let s = if opts.punctuate {
                        punctuate(&s)
                    } else {
                        depunctuate(&s)
                    };
                    if opts.bold { embolden(&s, word) } else { s }
                })
                .collect()
        }
        Field::Definitions => {
            let opts = options.definitions;
            values
                .into_iter()
                .map(|d| {
                    let d = if opts.punctuate {
                        punctuate(&d)
                    } else {
                        depunctuate(&d)
                    };
                    if opts.capitalize { capitalize(&d) } else { d }
                })
                .collect()
        }
        Field::InspirationalQuotes => values
            .into_iter()
            .map(|q| punctuate(&capitalize(&q)))
            .collect(),
        Field::Synonyms
        | Field::Antonyms
        | Field::Rhymes
        | Field::PartOfSpeech
        | Field::Pronunciation
        | Field::Offensive => values.into_iter().map(|v| v.to_lowercase()).collect(),
    }
}

/// `"Noun."` becomes `"noun"`; abbreviated on request.
#[must_use]
pub fn format_part_of_speech(raw: &str, options: PartOfSpeechOptions) -> String {
    let first = first_line(raw);
    let cleaned = depunctuate(first.trim()).to_lowercase();
    if options.abbreviate {
        abbreviate_part_of_speech(&cleaned)
    } else {
        cleaned
    }
}

#[must_use]
pub fn format_pronunciation(raw: &str, options: PronunciationOptions) -> String {
    let ascii = to_ascii(first_line(raw).trim());
    if options.lowercase {
        ascii.to_lowercase()
    } else {
        ascii
    }
}

/// A generative offensiveness answer is "yes" if it says so anywhere.
#[must_use]
pub fn parse_offensive(raw: &str) -> bool {
    raw.to_lowercase().contains("yes")
}

fn first_line(raw: &str) -> String {
    raw.lines()
        .map(strip_list_marker)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
}
