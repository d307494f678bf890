//! Diff command
//!
//! Usage: notediff diff <ORIGINAL> <NEW> [--format text|json] [--output <FILE>]

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use notediff_core::errors::ExError;
use notediff_core::{compute_diff, Diff, DiffLineKind, DiffReport, NoteDiffConfig};

use super::{read_text, write_output};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One marked row per diff line
    Text,
    /// Diff report with content digests and totals
    Json,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Original (saved) file
    pub original: PathBuf,

    /// New (proposed) file
    pub new: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute diff command
pub fn execute(args: DiffArgs, config: &NoteDiffConfig) -> Result<(), Box<dyn std::error::Error>> {
    let original = read_text(&args.original)?;
    let new = read_text(&args.new)?;

    config
        .limits
        .check(&original, &new)
        .map_err(|e| ExError::from(e).with_op("diff"))?;
    let diff = compute_diff(&original, &new);
    tracing::debug!(rows = diff.len(), blocks = diff.stats().blocks, "diff computed");

    let rendered = match args.format {
        OutputFormat::Text => render_text(&diff),
        OutputFormat::Json => {
            let mut json = DiffReport::new(&original, &new, diff)
                .to_json_pretty()
                .map_err(|e| ExError::from(e).with_op("diff"))?;
            json.push('\n');
            json
        }
    };

    write_output(args.output.as_deref(), &rendered)?;
    Ok(())
}

/// Render rows as `<marker> <old#> <new#> <block> | <content>`.
pub fn render_text(diff: &Diff) -> String {
    if diff.is_empty() {
        return "No changes\n".to_string();
    }

    let number = |n: Option<usize>| n.map(|n| n.to_string()).unwrap_or_default();
    let mut out = String::new();
    for line in diff {
        let marker = match line.kind {
            DiffLineKind::Common => ' ',
            DiffLineKind::Added => '+',
            DiffLineKind::Deleted => '-',
            DiffLineKind::HunkHeader => '@',
        };
        let block = line
            .change_block_id
            .map(|id| format!("#{}", id))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{} {:>5} {:>5} {:>4} | {}",
            marker,
            number(line.original_line_number),
            number(line.new_line_number),
            block,
            line.content
        );
    }
    out
}
