//! Change summary against the previously written catalog.

use std::collections::BTreeSet;

/// Collect the `msgid` values of a catalog, skipping the header entry.
///
/// Values are kept in their escaped form. Wrapped msgids (an empty `msgid ""`
/// followed by quoted continuation lines) are joined.
pub fn read_msgids(catalog: &str) -> BTreeSet<String> {
    let mut msgids = BTreeSet::new();
    let mut current: Option<String> = None;

    for line in catalog.lines() {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix("msgid ") {
            flush(&mut current, &mut msgids);
            current = Some(unquote(rest).to_string());
        } else if line.starts_with('"') {
            if let Some(msgid) = current.as_mut() {
                msgid.push_str(unquote(line));
            }
        } else {
            flush(&mut current, &mut msgids);
        }
    }
    flush(&mut current, &mut msgids);

    msgids
}

fn flush(current: &mut Option<String>, msgids: &mut BTreeSet<String>) {
    if let Some(msgid) = current.take().filter(|m| !m.is_empty()) {
        msgids.insert(msgid);
    }
}

fn unquote(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(s)
}

/// Message-level difference between two catalogs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogDiff {
    pub added: usize,
    pub removed: usize,
}

impl CatalogDiff {
    pub fn between(old: &BTreeSet<String>, new: &BTreeSet<String>) -> Self {
        Self {
            added: new.difference(old).count(),
            removed: old.difference(new).count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}
