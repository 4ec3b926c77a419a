//! In-memory collaborators with call recording.

#![allow(dead_code)]

use lexi_config::LexiConfig;
use lexi_engine::WordGenerator;
use lexi_genai::{GenAiError, ImageGenerator, PromptKey, TextGenerator};
use lexi_sources::{SourceData, SourceError, SourceFetcher, SourceKind};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

/// Canned source responses keyed by (word, source).
#[derive(Default)]
pub struct MockSources {
    data: HashMap<(String, SourceKind), SourceData>,
    failing: HashSet<SourceKind>,
    calls: Mutex<Vec<(String, SourceKind)>>,
}

impl MockSources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, word: &str, source: SourceKind, data: SourceData) -> Self {
        self.data.insert((word.to_string(), source), data);
        self
    }

    pub fn failing(mut self, source: SourceKind) -> Self {
        self.failing.insert(source);
        self
    }

    pub fn calls(&self, source: SourceKind) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, s)| *s == source)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl SourceFetcher for MockSources {
    async fn fetch(&self, source: SourceKind, word: &str) -> Result<SourceData, SourceError> {
        self.calls.lock().unwrap().push((word.to_string(), source));
        if self.failing.contains(&source) {
            return Err(SourceError::Api {
                status: 503,
                message: "service unavailable".into(),
            });
        }
        Ok(self
            .data
            .get(&(word.to_string(), source))
            .cloned()
            .unwrap_or_default())
    }
}

/// Canned model responses keyed by prompt, optionally per word.
#[derive(Default)]
pub struct MockText {
    responses: HashMap<PromptKey, String>,
    word_responses: HashMap<(String, PromptKey), String>,
    failing: HashSet<PromptKey>,
    stalling: HashSet<PromptKey>,
    calls: Mutex<Vec<(PromptKey, String, usize)>>,
    finished: Mutex<Vec<PromptKey>>,
}

impl MockText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, key: PromptKey, text: &str) -> Self {
        self.responses.insert(key, text.to_string());
        self
    }

    pub fn respond_for(mut self, word: &str, key: PromptKey, text: &str) -> Self {
        self.word_responses
            .insert((word.to_string(), key), text.to_string());
        self
    }

    pub fn failing(mut self, key: PromptKey) -> Self {
        self.failing.insert(key);
        self
    }

    /// Calls for `key` sleep for an hour before answering.
    pub fn stalling(mut self, key: PromptKey) -> Self {
        self.stalling.insert(key);
        self
    }

    /// Whether any call for `key` ran to completion.
    pub fn finished(&self, key: PromptKey) -> bool {
        self.finished.lock().unwrap().contains(&key)
    }

    /// Requested counts for every call made with `key`.
    pub fn calls(&self, key: PromptKey) -> Vec<usize> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _, _)| *k == key)
            .map(|(_, _, count)| *count)
            .collect()
    }
}

impl TextGenerator for MockText {
    async fn generate(&self, key: PromptKey, word: &str, count: usize) -> Result<String, GenAiError> {
        self.calls
            .lock()
            .unwrap()
            .push((key, word.to_string(), count));
        if self.stalling.contains(&key) {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        self.finished.lock().unwrap().push(key);
        if self.failing.contains(&key) {
            return Err(GenAiError::MissingContent {
                path: "choices[0].message.content",
                body: "{}".into(),
            });
        }
        Ok(self
            .word_responses
            .get(&(word.to_string(), key))
            .or_else(|| self.responses.get(&key))
            .cloned()
            .unwrap_or_default())
    }
}

/// Returns the prompt bytes as the "image"; fails prompts containing a marker.
#[derive(Default)]
pub struct MockImages {
    fail_marker: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockImages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(marker: &str) -> Self {
        Self {
            fail_marker: Some(marker.to_string()),
            ..Self::default()
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl ImageGenerator for MockImages {
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>, GenAiError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self
            .fail_marker
            .as_deref()
            .is_some_and(|marker| prompt.contains(marker))
        {
            return Err(GenAiError::Api {
                status: 400,
                message: "content policy violation".into(),
            });
        }
        Ok(prompt.as_bytes().to_vec())
    }
}

/// Model responses that satisfy every field on their own.
pub fn full_text() -> MockText {
    MockText::new()
        .respond(PromptKey::PartOfSpeech, "Noun.")
        .respond(PromptKey::Pronunciation, "prō-PIN-kwi-tee")
        .respond(PromptKey::Offensive, "no")
        .respond(PromptKey::Synonyms, "1. closeness\n2. nearness\n3. vicinity\n4. adjacency")
        .respond(PromptKey::Antonyms, "1. distance\n2. remoteness\n3. separation")
        .respond(
            PromptKey::Sentences,
            "The propinquity of the houses was evident.\nTheir propinquity bred friendship.",
        )
        .respond(
            PromptKey::Definitions,
            "Nearness in place or time.\nSimilarity in nature.",
        )
        .respond(
            PromptKey::InspirationalQuotes,
            "Propinquity is the seed of every friendship\nShort one",
        )
        .respond(PromptKey::Rhymes, "iniquity\nubiquity\nity")
}

pub fn generator<S, T, I>(sources: S, text: T, images: I) -> WordGenerator<S, T, I> {
    WordGenerator::new(sources, text, images, &LexiConfig::default())
}

pub fn synonyms(values: &[&str]) -> SourceData {
    SourceData {
        synonyms: values.iter().map(|v| (*v).to_string()).collect(),
        ..SourceData::default()
    }
}
