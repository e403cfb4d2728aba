//! Tiffin CLI - catalog browsing and store replay tools.
//!
//! # Usage
//!
//! ```bash
//! # List category chips for the bundled catalog
//! tiffin categories
//!
//! # Show the home screen after tapping "Pizza" and typing "garlic"
//! tiffin browse --category Pizza --search garlic
//!
//! # Replay a recorded action script and print the final state
//! tiffin replay session.json
//!
//! # Use another catalog
//! tiffin --catalog ./catalog.json browse
//! ```
//!
//! # Commands
//!
//! - `categories` - List distinct restaurant categories
//! - `browse` - Print the restaurants visible on the home screen
//! - `replay` - Apply a JSON array of store actions

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tiffin_storefront::config::{LogFormat, StorefrontConfig};

mod commands;

#[derive(Parser)]
#[command(name = "tiffin")]
#[command(author, version, about = "Tiffin storefront tools")]
struct Cli {
    /// Catalog JSON file (overrides `TIFFIN_CATALOG_PATH`)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog categories
    Categories,
    /// Print the restaurants shown on the home screen
    Browse {
        /// Category chip to tap
        #[arg(short, long)]
        category: Option<String>,

        /// Search text to type after tapping the chip
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Replay a JSON array of store actions
    Replay {
        /// Path to the action script
        script: PathBuf,
    },
}

fn main() {
    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(config.log_format);

    let cli = Cli::parse();

    if let Err(e) = run(cli, &config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing with `EnvFilter`, defaulting to info for our crates.
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tiffin_storefront=info,tiffin_cli=info".into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn run(cli: Cli, config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = commands::load_catalog(cli.catalog.as_deref(), config)?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Categories => commands::browse::categories(&catalog, &mut out)?,
        Commands::Browse { category, search } => commands::browse::browse(
            &catalog,
            category.as_deref(),
            search.as_deref(),
            &mut out,
        )?,
        Commands::Replay { script } => {
            commands::replay::replay_file(&script, &catalog, config, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}
