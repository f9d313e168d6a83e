//! Gettext template rendering.

use super::catalog::{Catalog, CatalogEntry};
use crate::config::HeaderConfig;

/// Render the header block, followed by every entry in catalog order.
pub fn render_catalog(catalog: &Catalog, header: &HeaderConfig) -> String {
    let mut out = render_header(header);
    for entry in catalog.entries() {
        out.push('\n');
        render_entry(entry, &mut out);
    }
    out
}

fn render_header(header: &HeaderConfig) -> String {
    let mut out = String::new();
    for line in &header.comments {
        if line.is_empty() {
            out.push_str("#\n");
        } else {
            out.push_str(&format!("# {}\n", line));
        }
    }
    out.push_str("#, fuzzy\n");
    out.push_str("msgid \"\"\n");
    out.push_str("msgstr \"\"\n");
    for (field, value) in [
        ("Project-Id-Version", header.project_id_version.as_str()),
        ("Report-Msgid-Bugs-To", header.report_msgid_bugs_to.as_str()),
        ("MIME-Version", "1.0"),
        ("Content-Type", "text/plain; charset=UTF-8"),
        ("Content-Transfer-Encoding", "8-bit"),
    ] {
        out.push_str(&format!("\"{}: {}\\n\"\n", field, value));
    }
    out
}

fn render_entry(entry: &CatalogEntry, out: &mut String) {
    if let Some(block) = &entry.translator_block {
        for (i, line) in block.lines.iter().enumerate() {
            if i == 0 {
                out.push_str(&format!("#. TRANSLATORS: {}\n", line));
            } else {
                out.push_str(&format!("#. {}\n", line));
            }
        }
    }
    out.push_str(&format!("#: {}\n", entry.locations.join(" ")));
    // Text is already escaped by the source literal.
    out.push_str(&format!("msgid \"{}\"\n", entry.text));
    out.push_str("msgstr \"\"\n");
}
