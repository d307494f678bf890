//! Apply command
//!
//! Usage: notediff apply <ORIGINAL> <NEW> [--accept <IDS> | --reject <IDS>] [--output <FILE>]

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Args;
use notediff_core::{BlockId, EditReview, NoteDiffConfig};

use super::{read_text, write_output};

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Original (saved) file
    pub original: PathBuf,

    /// New (proposed) file
    pub new: PathBuf,

    /// Accept only these block ids (comma-separated)
    #[arg(long, value_delimiter = ',', conflicts_with = "reject")]
    pub accept: Option<Vec<BlockId>>,

    /// Accept every block except these ids (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub reject: Option<Vec<BlockId>>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute apply command
pub fn execute(args: ApplyArgs, config: &NoteDiffConfig) -> Result<(), Box<dyn std::error::Error>> {
    let original = read_text(&args.original)?;
    let new = read_text(&args.new)?;

    let mut review = EditReview::with_limits(&original, &new, &config.limits)?;

    if let Some(accept) = args.accept {
        review.select(accept)?;
    } else if let Some(reject) = args.reject {
        for id in reject.into_iter().collect::<BTreeSet<_>>() {
            review.toggle_block(id)?;
        }
    }

    let counts = review.counts();
    tracing::info!(
        request_id = %review.request_id(),
        total = counts.total,
        selected = counts.selected,
        "applying selection"
    );

    let merged = review.apply()?;
    write_output(args.output.as_deref(), &merged)?;
    Ok(())
}
