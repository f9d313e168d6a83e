//! Full extraction run: scan, extract, merge, render, write.
//!
//! Files are extracted in parallel, but merged into the catalog one at a time
//! in sorted path order so that entry order only depends on the source tree.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use rayon::prelude::*;

use super::{
    catalog::{AddKind, Catalog},
    extract::{ExtractContext, ExtractedMessage, extract_file},
    patterns::default_patterns,
    remap::RemapTable,
    scanner::scan_files,
    serialize::render_catalog,
    summary::{CatalogDiff, read_msgids},
};
use crate::config::Config;

pub struct ExtractOptions {
    pub root: PathBuf,
    pub config: Config,
    pub verbose: bool,
}

/// Rendered catalog plus the counters gathered while building it.
#[derive(Debug)]
pub struct GeneratedCatalog {
    pub content: String,
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub message_count: usize,
    /// Distinct locations recorded across all entries.
    pub location_count: usize,
    pub comments_merged: usize,
    pub diagnostic_count: usize,
    /// Number of remap entries, `None` when the remap file is missing.
    pub remap_count: Option<usize>,
}

/// Counters gathered while merging extracted messages into a catalog.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    pub files_merged: usize,
    pub files_failed: usize,
    /// Occurrences that created an entry or added a location to one.
    pub locations_added: usize,
    /// Comments appended to an entry that already existed.
    pub comments_merged: usize,
    /// Occurrences dropped with a warning.
    pub diagnostic_count: usize,
}

#[derive(Debug)]
pub struct PipelineOutput {
    pub generated: GeneratedCatalog,
    pub output_path: PathBuf,
    /// Difference with the catalog that was at `output_path`, if any.
    pub diff: Option<CatalogDiff>,
    /// Whether the written content differs from the previous file.
    pub changed: bool,
}

fn warn(message: impl std::fmt::Display) {
    eprintln!("{} {}", "warning:".bold().yellow(), message);
}

fn load_remaps(path: &Path) -> Option<RemapTable> {
    match RemapTable::load(path) {
        Ok(Some(table)) => Some(table),
        Ok(None) => {
            warn(format!(
                "Remap table not found: {} (labels are not remapped)",
                path.display()
            ));
            None
        }
        Err(err) => {
            warn(format!("{:#} (labels are not remapped)", err));
            None
        }
    }
}

/// Merge per-file extraction results into `catalog`, in the given order.
///
/// A file that failed to read is reported and skipped. An empty message is
/// reported and dropped, since `msgid ""` is reserved for the header.
pub fn merge_extractions(
    catalog: &mut Catalog,
    extractions: impl IntoIterator<Item = Result<Vec<ExtractedMessage>>>,
) -> MergeStats {
    let mut stats = MergeStats::default();

    for extraction in extractions {
        let messages = match extraction {
            Ok(messages) => messages,
            Err(err) => {
                warn(format!("{:#}", err));
                stats.files_failed += 1;
                continue;
            }
        };
        stats.files_merged += 1;

        for message in &messages {
            if message.text.is_empty() {
                warn(format!("{}: empty message skipped", message.location));
                stats.diagnostic_count += 1;
                continue;
            }
            match catalog.add(message) {
                Ok(outcome) => {
                    if outcome.kind != AddKind::Unchanged {
                        stats.locations_added += 1;
                    }
                    if outcome.comment_merged {
                        stats.comments_merged += 1;
                    }
                }
                Err(err) => {
                    warn(format!("{}: {}", message.location, err));
                    stats.diagnostic_count += 1;
                }
            }
        }
    }

    stats
}

/// Scan the tree under `options.root` and render its catalog without writing it.
pub fn generate_catalog(options: &ExtractOptions) -> Result<GeneratedCatalog> {
    let root = options.root.as_path();
    if !root.is_dir() {
        bail!("Source root is not a directory: {}", root.display());
    }

    let config = &options.config;
    let remaps = load_remaps(&root.join(&config.remap_file));
    let remap_count = remaps.as_ref().map(RemapTable::len);
    let remaps = remaps.unwrap_or_default();

    let scan = scan_files(root, &config.extensions, &config.exclude_dirs, options.verbose);
    let ctx = ExtractContext {
        patterns: default_patterns(),
        remaps: &remaps,
        line_numbers: config.line_numbers,
    };

    let extractions: Vec<Result<Vec<ExtractedMessage>>> = scan
        .files
        .par_iter()
        .map(|path| extract_file(path, root, &ctx))
        .collect();

    let mut catalog = Catalog::new();
    let stats = merge_extractions(&mut catalog, extractions);

    Ok(GeneratedCatalog {
        content: render_catalog(&catalog, &config.header),
        files_scanned: stats.files_merged,
        files_skipped: scan.skipped_count + stats.files_failed,
        message_count: catalog.len(),
        location_count: stats.locations_added,
        comments_merged: stats.comments_merged,
        diagnostic_count: stats.diagnostic_count,
        remap_count,
    })
}

/// Generate the catalog and write it to the configured output path.
pub fn run_pipeline(options: &ExtractOptions) -> Result<PipelineOutput> {
    let generated = generate_catalog(options)?;
    let output_path = options.root.join(&options.config.output);

    let previous = match fs::read_to_string(&output_path) {
        Ok(content) => Some(content),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => {
            if options.verbose {
                warn(format!(
                    "Failed to read previous catalog {}: {}",
                    output_path.display(),
                    err
                ));
            }
            None
        }
    };

    let diff = previous.as_deref().map(|old| {
        CatalogDiff::between(&read_msgids(old), &read_msgids(&generated.content))
    });
    let changed = previous.as_deref() != Some(generated.content.as_str());

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&output_path, &generated.content)
        .with_context(|| format!("Failed to write catalog: {}", output_path.display()))?;

    Ok(PipelineOutput {
        generated,
        output_path,
        diff,
        changed,
    })
}
