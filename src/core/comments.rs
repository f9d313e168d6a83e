//! Translator comment correlation.
//!
//! A comment containing [`TRANSLATORS_MARKER`] is collected line by line and
//! handed to the messages found on the line where the comment ends:
//!
//! ```cpp
//! // TRANSLATORS: Tooltip text
//! // continued.
//! button->set_tooltip_text(TTR("Snap"));  // <- receives both lines
//! ```
//!
//! Block comments end on the line holding `*/`, which is scanned as code too:
//!
//! ```cpp
//! /* TRANSLATORS: Unit suffix. */ label->set_text(TTR("px"));
//! ```

pub const TRANSLATORS_MARKER: &str = "TRANSLATORS:";

const LINE_COMMENT: &str = "//";
const BLOCK_COMMENT_END: &str = "*/";

/// Correlator state carried from one line to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CommentState {
    #[default]
    Idle,
    InBlockComment { lines: Vec<String> },
    InLineCommentRun { lines: Vec<String> },
}

/// Result of feeding one line to the correlator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineScan {
    pub state: CommentState,
    /// Comment finalized on this line, if any. Applies to this line's messages only.
    pub comment: Option<String>,
    /// Whether the line should be searched for messages.
    pub is_code: bool,
}

impl CommentState {
    pub fn scan_line(self, line: &str) -> LineScan {
        let state = match self {
            CommentState::Idle if line.contains(TRANSLATORS_MARKER) => {
                if line.trim().starts_with(LINE_COMMENT) {
                    CommentState::InLineCommentRun { lines: Vec::new() }
                } else {
                    CommentState::InBlockComment { lines: Vec::new() }
                }
            }
            state => state,
        };

        match state {
            CommentState::Idle => LineScan {
                state: CommentState::Idle,
                comment: None,
                is_code: true,
            },
            CommentState::InBlockComment { mut lines } => {
                let trimmed = line.trim();
                let start = text_start(trimmed, 0);
                match trimmed.rfind(BLOCK_COMMENT_END) {
                    Some(end) => {
                        push_fragment(&mut lines, slice_between(trimmed, start, end));
                        finalize(lines)
                    }
                    None => {
                        push_fragment(&mut lines, &trimmed[start..]);
                        LineScan {
                            state: CommentState::InBlockComment { lines },
                            comment: None,
                            is_code: false,
                        }
                    }
                }
            }
            CommentState::InLineCommentRun { mut lines } => {
                let trimmed = line.trim();
                if !trimmed.starts_with(LINE_COMMENT) {
                    return finalize(lines);
                }
                let start = text_start(trimmed, LINE_COMMENT.len());
                push_fragment(&mut lines, &trimmed[start..]);
                LineScan {
                    state: CommentState::InLineCommentRun { lines },
                    comment: None,
                    is_code: false,
                }
            }
        }
    }
}

/// Offset of the comment text: right after the marker when present,
/// `default` otherwise.
fn text_start(line: &str, default: usize) -> usize {
    line.find(TRANSLATORS_MARKER)
        .map_or(default, |pos| pos + TRANSLATORS_MARKER.len())
}

/// `line[start..end]`, empty when the closer sits before the text start.
fn slice_between(line: &str, start: usize, end: usize) -> &str {
    if start <= end { &line[start..end] } else { "" }
}

fn push_fragment(lines: &mut Vec<String>, fragment: &str) {
    if !fragment.is_empty() {
        lines.push(fragment.to_string());
    }
}

fn finalize(lines: Vec<String>) -> LineScan {
    LineScan {
        state: CommentState::Idle,
        comment: Some(lines.join("\n")),
        is_code: true,
    }
}
