//! # lexi-core
//!
//! Core types shared across all Lexicard crates:
//! - The closed [`Field`] set a word record is built from
//! - [`WordRecord`] and [`ImageAsset`], the outputs handed to rendering and storage
//! - Per-field generation options ([`GenerationOptions`])
//! - Pure text formatting helpers ([`format`])
//! - Cross-cutting error types

pub mod errors;
pub mod field;
pub mod format;
pub mod options;
pub mod record;

pub use errors::CoreError;
pub use field::Field;
pub use options::{
    DefinitionOptions, GenerationOptions, ListOptions, PartOfSpeechOptions, PronunciationOptions,
    SentenceOptions,
};
pub use record::{IMAGE_HEIGHT, IMAGE_WIDTH, ImageAsset, WordRecord};

/// Normalize a lookup word.
///
/// Trims surrounding whitespace and lower-cases. Multi-word phrases are
/// rejected because every external source keys its lookup by a single path
/// segment.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] if the word is empty or contains
/// internal whitespace.
pub fn validate_word(word: &str) -> Result<String, CoreError> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("word must not be empty".into()));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(format!(
            "'{trimmed}' is not a single word"
        )));
    }
    Ok(trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_word_normalizes() {
        assert_eq!(validate_word("  Propinquity ").unwrap(), "propinquity");
    }

    #[test]
    fn validate_word_rejects_empty() {
        assert!(matches!(validate_word("   "), Err(CoreError::Validation(_))));
    }

    #[test]
    fn validate_word_rejects_phrases() {
        assert!(matches!(
            validate_word("ice cream"),
            Err(CoreError::Validation(_))
        ));
    }
}
