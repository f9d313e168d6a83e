use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;
use crate::core::summary::CatalogDiff;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub output_path: PathBuf,
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub message_count: usize,
    pub location_count: usize,
    pub comments_merged: usize,
    pub diagnostic_count: usize,
    /// Number of remap entries, `None` when the remap file is missing.
    pub remap_count: Option<usize>,
    /// `None` when there was no previous catalog.
    pub diff: Option<CatalogDiff>,
    pub changed: bool,
    /// Config file used, `None` when running with defaults.
    pub config_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub path: PathBuf,
}

/// Result of running potgen commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}
