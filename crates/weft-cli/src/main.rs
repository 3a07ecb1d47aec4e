//! # weft CLI
//!
//! Command-line interface for weft, a utility-class CSS generator.
//!
//! ## Usage
//!
//! - `weft init` - Write a starter `weft.toml`
//! - `weft build` - Scan content files and generate the stylesheet
//! - `weft check` - Validate the configuration and report what it declares

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// weft - generate utility-class CSS from your templates
#[derive(Parser)]
#[command(name = "weft")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate utility-class CSS from your templates")]
#[command(long_about = None)]
struct Cli {
    /// Project root (where weft.toml lives)
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter weft.toml in the project root
    Init {
        /// Overwrite an existing weft.toml
        #[arg(long)]
        force: bool,
    },
    /// Scan content files and generate the stylesheet
    Build {
        /// Output path override (relative to the project root)
        #[arg(short, long)]
        output: Option<String>,

        /// Emit minified CSS
        #[arg(long)]
        minify: bool,

        /// Skip the build cache entirely
        #[arg(long)]
        no_cache: bool,

        /// Re-read every file even if the cache says it is unchanged
        #[arg(long)]
        force: bool,

        /// Worker threads (0 = auto)
        #[arg(long)]
        threads: Option<usize>,
    },
    /// Validate the configuration and report what it declares
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Init { force } => commands::init(&cli.root, force),
        Commands::Build {
            output,
            minify,
            no_cache,
            force,
            threads,
        } => commands::build(
            &cli.root,
            commands::BuildArgs {
                output,
                minify,
                no_cache,
                force,
                threads,
            },
        ),
        Commands::Check => commands::check(&cli.root),
    }
}
