use std::path::{Path, PathBuf};

use colored::Colorize;
use walkdir::{DirEntry, WalkDir};

use super::extract::relative_location_path;

/// Result of scanning files.
pub struct ScanResult {
    /// Candidate files, sorted by their relative forward-slash path.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

fn is_excluded_dir(entry: &DirEntry, exclude_dirs: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && exclude_dirs
            .iter()
            .any(|name| entry.file_name().to_string_lossy() == name.as_str())
}

/// Regular files, and symlinks whose target is a regular file.
fn is_source_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| extensions.iter().any(|e| e.as_str() == ext))
}

pub fn scan_files(
    root: &Path,
    extensions: &[String],
    exclude_dirs: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files: Vec<(String, PathBuf)> = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry, exclude_dirs));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!(
                        "{} Failed to access path: {}",
                        "warning:".bold().yellow(),
                        e
                    );
                }
                continue;
            }
        };

        if is_source_file(&entry) && has_extension(entry.path(), extensions) {
            let path = entry.into_path();
            files.push((relative_location_path(&path, root), path));
        }
    }

    files.sort_by(|(a, _), (b, _)| a.cmp(b));

    ScanResult {
        files: files.into_iter().map(|(_, path)| path).collect(),
        skipped_count,
    }
}
