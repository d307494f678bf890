//! notediff CLI
//!
//! Command-line interface for the notediff engine

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use notediff_core::logging_facility::{self, Profile};
use notediff_core::NoteDiffConfig;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "notediff")]
#[command(about = "notediff - Line-level diff and selective patching for notes", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Logging profile (development, production, test); overrides the config file
    #[arg(long, global = true)]
    log_profile: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the line diff between two files
    Diff(commands::diff::DiffArgs),
    /// Apply selected change blocks and write the merged text
    Apply(commands::apply::ApplyArgs),
    /// Check a saved diff report against two files
    Validate(commands::validate::ValidateArgs),
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => NoteDiffConfig::load(path)?,
        None => NoteDiffConfig::default(),
    };
    logging_facility::init(cli.log_profile.unwrap_or(config.logging.profile));

    match cli.command {
        Commands::Diff(args) => commands::diff::execute(args, &config),
        Commands::Apply(args) => commands::apply::execute(args, &config),
        Commands::Validate(args) => commands::validate::execute(args),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
