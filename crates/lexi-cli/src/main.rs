use anyhow::Context;
use clap::Parser;
use lexi_config::LexiConfig;

mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("lexi error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = LexiConfig::load_with_dotenv().context("failed to load lexicard configuration")?;

    match cli.command {
        cli::Commands::Prompts => commands::prompts::handle(&config, cli.format),
        cli::Commands::Word(args) => {
            config.validate().context("invalid lexicard configuration")?;
            commands::word::handle(&args, &config, cli.format).await
        }
        cli::Commands::Images(args) => {
            config.validate().context("invalid lexicard configuration")?;
            commands::images::handle(&args, &config, cli.format).await
        }
    }
}

/// Logs go to stderr so stdout carries nothing but JSON.
fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("LEXICARD_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
