use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use lexi_config::LexiConfig;
use lexi_core::ImageAsset;
use lexi_engine::HttpWordGenerator;
use serde::Serialize;

use crate::cli::{ImagesArgs, OutputFormat};
use crate::output::output;

/// Metadata printed for an image written to disk.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WrittenImage<'a> {
    path: PathBuf,
    width: u32,
    height: u32,
    prompt: &'a str,
    style_template: Option<&'a str>,
}

/// Handle `lexi images`.
///
/// With `--out` the PNGs are written as `<word>-<n>.png` and only metadata is
/// printed; otherwise the assets are printed with base64 data inline.
pub async fn handle(
    args: &ImagesArgs,
    config: &LexiConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let generator =
        HttpWordGenerator::open(config).context("failed to open generation session")?;
    let assets = generator
        .generate_images(&args.word, args.count, args.template.as_deref())
        .await
        .with_context(|| format!("failed to illustrate '{}'", args.word))?;

    match &args.out {
        Some(dir) => {
            let written = write_assets(dir, &args.word, &assets)?;
            output(&written, format)
        }
        None => output(&assets, format),
    }
}

fn write_assets<'a>(
    dir: &Path,
    word: &str,
    assets: &'a [ImageAsset],
) -> anyhow::Result<Vec<WrittenImage<'a>>> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let stem = word.trim().to_lowercase();

    assets
        .iter()
        .enumerate()
        .map(|(index, asset)| {
            let path = dir.join(format!("{stem}-{}.png", index + 1));
            fs::write(&path, &asset.data)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = asset.data.len(), "image written");
            Ok(WrittenImage {
                path,
                width: asset.width,
                height: asset.height,
                prompt: &asset.prompt,
                style_template: asset.style_template.as_deref(),
            })
        })
        .collect()
}
