//! Per-file message extraction.

use std::{fmt, fs, path::Path};

use anyhow::{Context, Result};

use super::{
    comments::CommentState,
    label::normalize_label,
    patterns::{ExtractionPattern, PatternKind},
    remap::RemapTable,
};

/// Where a message was found. Rendered as `path` or `path:line`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub path: String,
    pub line: Option<usize>,
}

impl SourceLocation {
    pub fn new(path: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.path, line),
            None => write!(f, "{}", self.path),
        }
    }
}

/// One message occurrence, ready to be merged into the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMessage {
    pub text: String,
    pub location: SourceLocation,
    /// Translator comment for this occurrence; empty when there is none.
    pub comment: String,
}

/// Everything shared by the extraction of all files in a run.
#[derive(Debug, Clone, Copy)]
pub struct ExtractContext<'a> {
    pub patterns: &'a [ExtractionPattern],
    pub remaps: &'a RemapTable,
    /// Append `:<line>` to every location.
    pub line_numbers: bool,
}

/// Extract all messages from `source`, whose locations are reported as `path`.
pub fn extract_source(source: &str, path: &str, ctx: &ExtractContext) -> Vec<ExtractedMessage> {
    let mut messages = Vec::new();
    let mut state = CommentState::Idle;

    for (idx, line) in source.lines().enumerate() {
        let scan = state.scan_line(line);
        state = scan.state;
        if !scan.is_code {
            continue;
        }

        let comment = scan.comment.unwrap_or_default();
        let location = SourceLocation::new(path, ctx.line_numbers.then_some(idx + 1));

        for pattern in ctx.patterns {
            for captured in pattern.captures(line) {
                match pattern.kind {
                    PatternKind::Message => messages.push(ExtractedMessage {
                        text: captured.to_string(),
                        location: location.clone(),
                        comment: comment.clone(),
                    }),
                    PatternKind::PropertyPath => {
                        for segment in captured.split('/').filter(|s| !s.is_empty()) {
                            messages.push(ExtractedMessage {
                                text: normalize_label(segment, ctx.remaps),
                                location: location.clone(),
                                comment: comment.clone(),
                            });
                        }
                    }
                }
            }
        }
    }

    messages
}

/// Relative, forward-slash form of `path` used in catalog locations.
pub fn relative_location_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Read `path` and extract its messages, in line order. Invalid UTF-8 is
/// replaced, not rejected.
pub fn extract_file(
    path: &Path,
    root: &Path,
    ctx: &ExtractContext,
) -> Result<Vec<ExtractedMessage>> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let source = String::from_utf8_lossy(&bytes);
    Ok(extract_source(&source, &relative_location_path(path, root), ctx))
}
