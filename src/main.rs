//! CLI entry point: run one checkout and print the resulting descriptor.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use srcpin::checkout::Checkout;
use srcpin::config::{self, Config};
use srcpin::mirror::RsyncCli;
use srcpin::vcs::GitCli;

#[derive(Parser, Debug)]
#[command(name = "srcpin", about = "Reproducible source checkout for build pipelines")]
struct Cli {
    /// Source repository: a fetchable URL, or file://<path> for a local tree.
    source: String,
    /// Exact revision to check out.
    revision: String,
    /// Existing directory to check out into.
    destination: PathBuf,
    /// Path to an optional YAML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the descriptor JSON.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => config::load_config(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    let checkout = Checkout::new(
        Arc::new(GitCli::new(&config.git)),
        Arc::new(RsyncCli::new(&config.rsync)),
    );

    let descriptor = checkout
        .run(&cli.source, &cli.revision, &cli.destination)
        .await
        .context("checkout did not complete; discard the destination before retrying")?;

    println!("{}", serde_json::to_string_pretty(&descriptor)?);
    Ok(())
}
