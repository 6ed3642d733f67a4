//! CLI entry point for indice-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "indice-rs")]
#[command(version)]
#[command(about = "Generates the content/_index.md post listing for a markdown blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the index document (the default)
    #[command(alias = "g")]
    Generate,

    /// List all posts that would appear in the index
    List {
        /// Emit the posts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report posts whose date does not parse
    Check,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "indice_rs=debug,info"
    } else {
        "indice_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    // Running with no arguments regenerates the index
    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => {
            let site = indice_rs::Site::new(&base_dir)?;
            tracing::info!("Generating index from {:?}", site.content_dir);
            indice_rs::commands::generate::run(&site)?;
        }

        Commands::List { json } => {
            let site = indice_rs::Site::new(&base_dir)?;
            indice_rs::commands::list::run(&site, json)?;
        }

        Commands::Check => {
            let site = indice_rs::Site::new(&base_dir)?;
            indice_rs::commands::check::run(&site)?;
        }

        Commands::Version => {
            println!("indice-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
