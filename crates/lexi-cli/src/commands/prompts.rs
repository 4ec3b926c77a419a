use anyhow::Context;
use lexi_config::LexiConfig;
use lexi_genai::PromptCatalog;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PromptSummary<'a> {
    key: &'static str,
    model: &'a str,
    messages: usize,
    max_tokens: Option<u32>,
}

/// Handle `lexi prompts`. Needs no credentials.
pub fn handle(config: &LexiConfig, format: OutputFormat) -> anyhow::Result<()> {
    let catalog =
        PromptCatalog::from_config(&config.openai).context("failed to load prompt catalog")?;
    output(&summarize(&catalog, &config.openai.chat_model), format)
}

fn summarize<'a>(catalog: &'a PromptCatalog, default_model: &'a str) -> Vec<PromptSummary<'a>> {
    catalog
        .iter()
        .map(|(key, template)| PromptSummary {
            key: key.as_str(),
            model: template.model.as_deref().unwrap_or(default_model),
            messages: template.messages.len(),
            max_tokens: template.max_tokens,
        })
        .collect()
}
