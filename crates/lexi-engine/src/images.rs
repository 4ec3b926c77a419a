//! Image synthesis pipeline.
//!
//! One chat call produces `count` short scene descriptions; each is wrapped
//! in the style template and submitted to the image model concurrently.

use futures::future::{join_all, try_join_all};
use lexi_core::format::{depunctuate, strip_list_marker};
use lexi_core::{CoreError, IMAGE_HEIGHT, IMAGE_WIDTH, ImageAsset, validate_word};
use lexi_genai::{GenAiError, ImageGenerator, PromptKey, TextGenerator};
use lexi_sources::SourceFetcher;
use tracing::instrument;

use crate::{WordGenerator, error::EngineError};

/// Placeholder replaced by the scene description.
pub const PROMPT_PLACEHOLDER: &str = "{prompt}";
/// Optional placeholder replaced by the word itself.
pub const WORD_PLACEHOLDER: &str = "{word}";

impl<S, T, I> WordGenerator<S, T, I>
where
    S: SourceFetcher,
    T: TextGenerator,
    I: ImageGenerator,
{
    /// Generate up to `count` illustrations of `word`, in prompt order.
    ///
    /// `template` overrides `images.default_template`. Unless
    /// `images.allow_partial` is set, any failed submission fails the batch.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Core`] for an invalid word or a template
    /// without `{prompt}`, and [`EngineError::Images`] when description or
    /// image generation fails.
    #[instrument(skip(self))]
    pub async fn generate_images(
        &self,
        word: &str,
        count: usize,
        template: Option<&str>,
    ) -> Result<Vec<ImageAsset>, EngineError> {
        let word = validate_word(word)?;
        let template = template
            .map(str::to_string)
            .or_else(|| self.image_config.default_template.clone());
        if let Some(t) = &template {
            if !t.contains(PROMPT_PLACEHOLDER) {
                return Err(CoreError::Validation(format!(
                    "image template must contain {PROMPT_PLACEHOLDER}"
                ))
                .into());
            }
        }
        if count == 0 {
            return Ok(Vec::new());
        }

        let raw = self
            .text
            .generate(PromptKey::ImagePrompts, &word, count)
            .await
            .map_err(|source| EngineError::Images {
                word: word.clone(),
                source,
            })?;
        let descriptions = parse_descriptions(&raw, count);
        if descriptions.len() < count {
            tracing::warn!(
                requested = count,
                received = descriptions.len(),
                "fewer image descriptions than requested"
            );
        }

        let submissions = descriptions.iter().map(|description| {
            let prompt = apply_template(template.as_deref(), description, &word);
            let style_template = template.clone();
            async move {
                let data = self.images.generate_image(&prompt).await?;
                Ok::<_, GenAiError>(ImageAsset {
                    data,
                    width: IMAGE_WIDTH,
                    height: IMAGE_HEIGHT,
                    prompt,
                    style_template,
                })
            }
        });

        if !self.image_config.allow_partial {
            return try_join_all(submissions)
                .await
                .map_err(|source| EngineError::Images {
                    word: word.clone(),
                    source,
                });
        }

        let mut assets = Vec::with_capacity(descriptions.len());
        let mut last_error = None;
        for (index, result) in join_all(submissions).await.into_iter().enumerate() {
            match result {
                Ok(asset) => assets.push(asset),
                Err(e) => {
                    tracing::warn!(index, error = %e, "image submission failed, skipping");
                    last_error = Some(e);
                }
            }
        }
        match last_error {
            Some(source) if assets.is_empty() => Err(EngineError::Images { word, source }),
            _ => Ok(assets),
        }
    }
}

/// One description per line, enumeration and trailing punctuation removed.
fn parse_descriptions(raw: &str, count: usize) -> Vec<String> {
    raw.lines()
        .map(|line| depunctuate(&strip_list_marker(line)))
        .filter(|line| !line.is_empty())
        .take(count)
        .collect()
}

fn apply_template(template: Option<&str>, description: &str, word: &str) -> String {
    template.map_or_else(
        || description.to_string(),
        |t| {
            t.replace(WORD_PLACEHOLDER, word)
                .replace(PROMPT_PLACEHOLDER, description)
        },
    )
}
