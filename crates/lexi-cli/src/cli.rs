use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use lexi_core::Field;

/// Output encoding for everything printed on stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Single-line JSON
    Raw,
}

/// Top-level CLI parser for the `lexi` binary.
#[derive(Debug, Parser)]
#[command(name = "lexi", version, about = "Lexicard - illustrated vocabulary generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a full word record for each word
    Word(WordArgs),
    /// Generate illustrations for a word
    Images(ImagesArgs),
    /// List the active prompt catalog
    Prompts,
}

#[derive(Debug, Args)]
pub struct WordArgs {
    /// Words to generate, one record each
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Per-field item count, e.g. `--count synonyms=4` (repeatable)
    #[arg(short, long = "count", value_name = "FIELD=N", value_parser = parse_count)]
    pub counts: Vec<(Field, usize)>,

    /// Wrap the word in <b> tags inside example sentences
    #[arg(long)]
    pub bold: bool,

    /// End sentences and definitions with punctuation
    #[arg(long)]
    pub punctuate: bool,

    /// Capitalize definitions
    #[arg(long)]
    pub capitalize: bool,

    /// Abbreviate the part of speech (adjective -> adj)
    #[arg(long)]
    pub abbreviate: bool,

    /// Words generated at once
    #[arg(long, default_value_t = 2)]
    pub concurrency: usize,
}

#[derive(Debug, Args)]
pub struct ImagesArgs {
    /// Word to illustrate
    pub word: String,

    /// Number of images
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Style template wrapping each prompt; must contain `{prompt}`
    #[arg(short, long)]
    pub template: Option<String>,

    /// Directory to write PNG files into
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

fn parse_count(raw: &str) -> Result<(Field, usize), String> {
    let (name, count) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=N, got '{raw}'"))?;
    let field: Field = name.trim().parse().map_err(|e| format!("{e}"))?;
    if !field.is_list() {
        return Err(format!("'{field}' is not a list field"));
    }
    let count = count
        .trim()
        .parse()
        .map_err(|_| format!("invalid count '{count}'"))?;
    Ok((field, count))
}
