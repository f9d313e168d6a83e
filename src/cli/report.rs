//! Summary printing.
//!
//! Separate from core logic to allow potgen to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command summary to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

fn print_extract<W: Write>(summary: &ExtractSummary, verbose: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} {} from {} source {}",
            summary.message_count,
            plural(summary.message_count, "message", "messages"),
            summary.files_scanned,
            plural(summary.files_scanned, "file", "files"),
        )
        .green()
    );

    if verbose {
        match &summary.config_path {
            Some(path) => {
                let _ = writeln!(writer, "  config: {}", path.display());
            }
            None => {
                let _ = writeln!(writer, "  config: {}", "defaults".dimmed());
            }
        }
        match summary.remap_count {
            Some(count) => {
                let _ = writeln!(writer, "  remap table: {} entries", count);
            }
            None => {
                let _ = writeln!(writer, "  remap table: {}", "not found".dimmed());
            }
        }
        let _ = writeln!(
            writer,
            "  {} {}, {} translator {} merged into existing entries",
            summary.location_count,
            plural(summary.location_count, "location", "locations"),
            summary.comments_merged,
            plural(summary.comments_merged, "comment", "comments"),
        );
    }

    let _ = writeln!(writer, "  {} {}", "-->".blue(), summary.output_path.display());

    match summary.diff {
        Some(_) if !summary.changed => {
            let _ = writeln!(writer, "  {}", "Template unchanged.".dimmed());
        }
        Some(diff) => {
            let _ = writeln!(
                writer,
                "  Template changes: {} added, {} removed",
                diff.added.to_string().green(),
                diff.removed.to_string().red(),
            );
        }
        None => {
            let _ = writeln!(writer, "  Template created (no previous catalog).");
        }
    }

    if summary.files_skipped > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} could not be read",
            "warning:".bold().yellow(),
            summary.files_skipped,
            plural(summary.files_skipped, "file", "files"),
        );
    }

    if summary.diagnostic_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} message {} skipped",
            "warning:".bold().yellow(),
            summary.diagnostic_count,
            plural(summary.diagnostic_count, "occurrence was", "occurrences were"),
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} already exists", summary.path.display()).red()
        );
    }
}
