//! Recognized call-site shapes.
//!
//! Each pattern captures the quoted argument in group 1. Every pattern is tried
//! on every line, so a line can yield messages from several shapes.

use std::sync::LazyLock;

use regex::Regex;

/// How the captured text becomes catalog messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// The captured text is the message, verbatim.
    Message,
    /// A `/`-separated property path; each segment becomes a label.
    PropertyPath,
}

#[derive(Debug)]
pub struct ExtractionPattern {
    pub name: &'static str,
    pub kind: PatternKind,
    pub regex: Regex,
}

impl ExtractionPattern {
    fn new(name: &'static str, kind: PatternKind, pattern: &str) -> Self {
        Self {
            name,
            kind,
            regex: Regex::new(pattern).unwrap(),
        }
    }

    /// Captured arguments of every non-overlapping match on `line`.
    pub fn captures<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.regex
            .captures_iter(line)
            .filter_map(|captures| captures.get(1).map(|m| m.as_str()))
    }
}

static DEFAULT_PATTERNS: LazyLock<Vec<ExtractionPattern>> = LazyLock::new(|| {
    use PatternKind::*;

    vec![
        ExtractionPattern::new("RTR", Message, r#"RTR\("(([^"\\]|\\.)*)"\)"#),
        ExtractionPattern::new("TTR", Message, r#"TTR\("(([^"\\]|\\.)*)"\)"#),
        ExtractionPattern::new("TTRC", Message, r#"TTRC\("(([^"\\]|\\.)*)"\)"#),
        ExtractionPattern::new("_initial_set", PropertyPath, r#"_initial_set\("([^"]+?)","#),
        ExtractionPattern::new("GLOBAL_DEF", PropertyPath, r#"GLOBAL_DEF(?:_RST)?\("([^".]+?)","#),
        ExtractionPattern::new("EDITOR_DEF", PropertyPath, r#"EDITOR_DEF(?:_RST)?\("([^"]+?)","#),
        ExtractionPattern::new(
            "ADD_PROPERTY",
            PropertyPath,
            r#"ADD_PROPERTY\(PropertyInfo\(Variant::[A-Z]+,\s*"([^"]+?)","#,
        ),
        // The group prefix argument is not part of the message.
        ExtractionPattern::new("ADD_GROUP", Message, r#"ADD_GROUP\("([^"]+?)","#),
    ]
});

/// The built-in pattern table.
pub fn default_patterns() -> &'static [ExtractionPattern] {
    &DEFAULT_PATTERNS
}
