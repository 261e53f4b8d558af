//! Book catalog pipeline CLI
//!
//! Run with: cargo run -p bookery -- <command>

use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookery::{catalog, config::Config, images, ingestion};

#[derive(Parser)]
#[command(name = "bookery", version, about = "Book catalog production pipeline")]
struct Cli {
    /// Configuration file (defaults to bookery.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download the published books CSV
    Fetch,
    /// Build the JSON catalog from the books CSV and tag vocabulary
    Parse,
    /// Fetch cover images and derive thumbnails for the catalog
    Covers,
    /// Parse, then ingest covers
    All,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookery=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Fetch => fetch(&config)?,
        Command::Parse => {
            catalog::run(&config)?;
        }
        Command::Covers => {
            images::run(&config)?;
        }
        Command::All => {
            catalog::run(&config)?;
            images::run(&config)?;
        }
    }

    Ok(())
}

fn fetch(config: &Config) -> anyhow::Result<()> {
    let key = &config.sources.spreadsheet_key;
    if key.is_empty() {
        bail!("sources.spreadsheet_key is not configured");
    }
    ingestion::fetch_books_csv(key, &config.sources.books_csv, config.http.timeout_secs)?;
    Ok(())
}
