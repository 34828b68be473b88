//! Mercadito CLI - Data file seeding and validation tools.
//!
//! # Usage
//!
//! ```bash
//! # Write the demo data files into ./data
//! mercadito-cli seed
//!
//! # Overwrite existing data files
//! mercadito-cli seed --force
//!
//! # Check the data files for consistency problems
//! mercadito-cli validate --data-dir data
//! ```
//!
//! # Commands
//!
//! - `seed` - Write the demo `tienda.json` and `usuarios.json`
//! - `validate` - Check the data files for duplicate ids, negative prices
//!   and dangling category references

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "mercadito-cli")]
#[command(author, version, about = "Mercadito CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the demo data files
    Seed {
        /// Directory to write `tienda.json` and `usuarios.json` into
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
    /// Check the data files for consistency problems
    Validate {
        /// Directory holding `tienda.json` and `usuarios.json`
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { data_dir, force } => commands::seed::run(&data_dir, force).await?,
        Commands::Validate { data_dir } => commands::validate::run(&data_dir).await?,
    }
    Ok(())
}
