//! Validate command
//!
//! Usage: notediff validate <ORIGINAL> <NEW> --diff <REPORT_JSON>

use std::path::PathBuf;

use clap::Args;
use notediff_core::errors::ExError;
use notediff_core::{validate_diff, DiffReport};

use super::read_text;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Original (saved) file
    pub original: PathBuf,

    /// New (proposed) file
    pub new: PathBuf,

    /// Diff report produced by `notediff diff --format json`
    #[arg(short, long)]
    pub diff: PathBuf,
}

/// Execute validate command
pub fn execute(args: ValidateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let original = read_text(&args.original)?;
    let new = read_text(&args.new)?;
    let report_json = read_text(&args.diff)?;

    let report =
        DiffReport::from_json(&report_json).map_err(|e| ExError::from(e).with_op("validate"))?;
    report
        .identity
        .verify(&original, &new)
        .map_err(|e| ExError::from(e).with_op("validate"))?;
    validate_diff(&original, &new, &report.lines)
        .map_err(|e| ExError::from(e).with_op("validate"))?;

    println!(
        "✓ Diff is consistent ({} blocks, +{} -{})",
        report.stats.blocks, report.stats.added, report.stats.deleted
    );
    Ok(())
}
