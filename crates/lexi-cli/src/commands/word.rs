use anyhow::Context;
use lexi_config::LexiConfig;
use lexi_core::{GenerationOptions, WordRecord};
use lexi_engine::HttpWordGenerator;

use crate::cli::{OutputFormat, WordArgs};
use crate::output::output;

/// Handle `lexi word`.
///
/// One word prints a single record; several print an array in input order.
/// Words that fail are reported on stderr and make the command exit non-zero
/// after the successful records are printed.
pub async fn handle(
    args: &WordArgs,
    config: &LexiConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let options = apply_overrides(config.fields.clone(), args);
    let generator =
        HttpWordGenerator::open(config).context("failed to open generation session")?;

    if let [word] = args.words.as_slice() {
        let record = generator
            .generate(word, &options)
            .await
            .with_context(|| format!("failed to generate '{word}'"))?;
        return output(&record, format);
    }

    let results = generator
        .generate_many(&args.words, &options, args.concurrency)
        .await;

    let mut records: Vec<WordRecord> = Vec::with_capacity(results.len());
    let mut failed = Vec::new();
    for (word, result) in args.words.iter().zip(results) {
        match result {
            Ok(record) => records.push(record),
            Err(error) => {
                tracing::error!(%word, error = %error, "word generation failed");
                failed.push(word.as_str());
            }
        }
    }

    output(&records, format)?;
    if !failed.is_empty() {
        anyhow::bail!("failed to generate {}", failed.join(", "));
    }
    Ok(())
}

/// Layer command-line flags over the configured field defaults.
///
/// Flags only switch formatting on; leaving one off keeps the configured value.
fn apply_overrides(mut options: GenerationOptions, args: &WordArgs) -> GenerationOptions {
    for &(field, count) in &args.counts {
        options.set_count(field, count);
    }
    options.sentences.bold |= args.bold;
    options.sentences.punctuate |= args.punctuate;
    options.definitions.punctuate |= args.punctuate;
    options.definitions.capitalize |= args.capitalize;
    options.part_of_speech.abbreviate |= args.abbreviate;
    options
}
