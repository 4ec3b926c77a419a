//! Whole-word generation: fan-out, assembly, isolation, and failure.

mod common;

use common::{MockImages, MockSources, MockText, full_text, generator, synonyms};
use lexi_core::{Field, GenerationOptions};
use lexi_engine::EngineError;
use lexi_genai::PromptKey;
use lexi_sources::{SourceData, SourceKind};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn small_options() -> GenerationOptions {
    let mut options = GenerationOptions::default();
    for field in Field::ALL {
        options.set_count(field, 2);
    }
    options
}

#[tokio::test]
async fn generates_every_field() {
    let generator = generator(MockSources::new(), full_text(), MockImages::new());

    let record = generator
        .generate("  Propinquity ", &small_options())
        .await
        .unwrap();

    assert_eq!(record.word, "propinquity");
    assert_eq!(record.part_of_speech, "noun");
    assert_eq!(record.pronunciation, "pro-pin-kwi-tee");
    assert!(!record.offensive);
    assert_eq!(record.synonyms, vec!["closeness", "nearness"]);
    assert_eq!(record.antonyms, vec!["distance", "remoteness"]);
    assert_eq!(
        record.sentences,
        vec![
            "the propinquity of the houses was evident",
            "their propinquity bred friendship",
        ]
    );
    assert_eq!(
        record.definitions,
        vec!["nearness in place or time", "similarity in nature"]
    );
    assert_eq!(
        record.inspirational_quotes,
        vec!["Propinquity is the seed of every friendship."]
    );
    assert_eq!(record.rhymes, vec!["iniquity", "ubiquity"]);
}

#[tokio::test]
async fn list_lengths_never_exceed_requested_counts() {
    let options = small_options();
    let generator = generator(MockSources::new(), full_text(), MockImages::new());

    let record = generator.generate("propinquity", &options).await.unwrap();

    assert!(record.synonyms.len() <= options.count(Field::Synonyms));
    assert!(record.antonyms.len() <= options.count(Field::Antonyms));
    assert!(record.sentences.len() <= options.count(Field::Sentences));
    assert!(record.definitions.len() <= options.count(Field::Definitions));
    assert!(record.inspirational_quotes.len() <= options.count(Field::InspirationalQuotes));
    assert!(record.rhymes.len() <= options.count(Field::Rhymes));
}

#[tokio::test]
async fn one_fatal_field_fails_the_word() {
    let generator = generator(
        MockSources::new(),
        full_text().failing(PromptKey::Rhymes),
        MockImages::new(),
    );

    let err = generator
        .generate("propinquity", &small_options())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        EngineError::Field {
            field: Field::Rhymes,
            ..
        }
    ));
}

#[tokio::test]
async fn failing_field_drops_in_flight_siblings() {
    let text = full_text()
        .stalling(PromptKey::Pronunciation)
        .failing(PromptKey::Rhymes);
    let generator = generator(MockSources::new(), &text, MockImages::new());

    let outcome = tokio::time::timeout(
        Duration::from_secs(30),
        generator.generate("propinquity", &small_options()),
    )
    .await
    .expect("a failed field must not wait for its siblings");

    assert!(matches!(
        outcome,
        Err(EngineError::Field {
            field: Field::Rhymes,
            ..
        })
    ));
    assert_eq!(text.calls(PromptKey::Pronunciation), vec![1]);
    assert!(!text.finished(PromptKey::Pronunciation));
}

#[tokio::test]
async fn each_source_fetched_once_per_word() {
    let sources = MockSources::new();
    let generator = generator(&sources, full_text(), MockImages::new());

    generator
        .generate("propinquity", &small_options())
        .await
        .unwrap();

    for source in SourceKind::ALL {
        assert_eq!(sources.calls(source), 1, "{source} fetched more than once");
    }
}

#[tokio::test]
async fn invalid_word_rejected_before_any_call() {
    let sources = MockSources::new();
    let generator = generator(sources, full_text(), MockImages::new());

    let err = generator
        .generate("two words", &small_options())
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::Core(_)));
}

#[tokio::test]
async fn concurrent_words_do_not_share_state() {
    let sources = MockSources::new()
        .with("light", SourceKind::ThesaurusBasic, synonyms(&["glow", "radiance"]))
        .with("shadow", SourceKind::ThesaurusBasic, synonyms(&["shade", "gloom"]));
    let generator = generator(sources, full_text(), MockImages::new());
    let options = small_options();

    let (light, shadow) = tokio::join!(
        generator.generate("light", &options),
        generator.generate("shadow", &options)
    );
    let (light, shadow) = (light.unwrap(), shadow.unwrap());

    assert_eq!(light.synonyms, vec!["glow", "radiance"]);
    assert_eq!(shadow.synonyms, vec!["shade", "gloom"]);
}

#[tokio::test]
async fn batch_keeps_input_order_and_isolates_failures() {
    let text = full_text().respond_for("bad", PromptKey::Pronunciation, "");
    let generator = generator(MockSources::new(), text, MockImages::new());
    let words = vec!["light".to_string(), "bad".to_string(), "shadow".to_string()];

    let results = generator.generate_many(&words, &small_options(), 2).await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().word, "light");
    assert!(matches!(
        results[1],
        Err(EngineError::Empty {
            field: Field::Pronunciation,
            ..
        })
    ));
    assert_eq!(results[2].as_ref().unwrap().word, "shadow");
}

#[tokio::test]
async fn top_up_keeps_existing_values() {
    let sources = MockSources::new().with(
        "light",
        SourceKind::Dictionary,
        SourceData {
            part_of_speech: Some("verb".into()),
            ..SourceData::default()
        },
    );
    let generator = generator(sources, full_text(), MockImages::new());
    let options = small_options();

    let mut stored = generator.generate("light", &options).await.unwrap();
    stored.synonyms = vec!["glow".into()];
    stored.pronunciation = "LITE".into();

    let topped = generator.top_up(&stored, &options).await.unwrap();

    assert_eq!(topped.part_of_speech, "verb");
    assert_eq!(topped.pronunciation, "lite");
    assert_eq!(topped.synonyms, vec!["glow", "closeness"]);
}
