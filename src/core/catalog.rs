//! In-memory message catalog.
//!
//! Entries are kept in first-seen order and never move. Later occurrences of
//! a message only extend its location list or its translator comment block.

use std::collections::HashMap;

use thiserror::Error;

use super::extract::{ExtractedMessage, SourceLocation};

/// Translator guidance attached to an entry.
///
/// The first line is rendered after the `TRANSLATORS:` header; comments merged
/// in later are appended as plain lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatorBlock {
    pub lines: Vec<String>,
}

impl TranslatorBlock {
    fn push_comment(&mut self, comment: &str) {
        self.lines
            .extend(comment.split('\n').map(|line| line.trim().to_string()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub text: String,
    pub locations: Vec<String>,
    pub translator_block: Option<TranslatorBlock>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddKind {
    /// A new entry was appended.
    Created,
    /// An existing entry gained a location.
    LocationAdded,
    /// The location was already listed.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    pub kind: AddKind,
    /// A comment was merged into an entry that already existed.
    pub comment_merged: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog index points to missing entry {index} for message \"{text}\"")]
    MissingEntry { text: String, index: usize },
}

#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, text: &str) -> Option<&CatalogEntry> {
        self.index.get(text).and_then(|&idx| self.entries.get(idx))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add(&mut self, message: &ExtractedMessage) -> Result<AddOutcome, CatalogError> {
        self.add_message(&message.text, &message.location, &message.comment)
    }

    /// Record one occurrence of `text` at `location`, with an optional
    /// (possibly empty) translator comment.
    ///
    /// Fails without touching the catalog when the index is out of sync with
    /// the entry list.
    pub fn add_message(
        &mut self,
        text: &str,
        location: &SourceLocation,
        comment: &str,
    ) -> Result<AddOutcome, CatalogError> {
        let location = location.to_string();

        let Some(&idx) = self.index.get(text) else {
            let translator_block = (!comment.is_empty()).then(|| {
                let mut block = TranslatorBlock::default();
                block.push_comment(comment);
                block
            });
            self.index.insert(text.to_string(), self.entries.len());
            self.entries.push(CatalogEntry {
                text: text.to_string(),
                locations: vec![location],
                translator_block,
            });
            return Ok(AddOutcome {
                kind: AddKind::Created,
                comment_merged: false,
            });
        };

        let entry = self
            .entries
            .get_mut(idx)
            .ok_or_else(|| CatalogError::MissingEntry {
                text: text.to_string(),
                index: idx,
            })?;

        let comment_merged = !comment.is_empty();
        if comment_merged {
            entry
                .translator_block
                .get_or_insert_with(TranslatorBlock::default)
                .push_comment(comment);
        }

        let kind = if entry.locations.contains(&location) {
            AddKind::Unchanged
        } else {
            entry.locations.push(location);
            AddKind::LocationAdded
        };

        Ok(AddOutcome {
            kind,
            comment_merged,
        })
    }
}
