//! potgen - gettext template extraction for C++ source trees
//!
//! potgen scans a source tree for marked user-facing strings (`TTR("...")`,
//! property paths such as `GLOBAL_DEF("rendering/quality/msaa", ...)`),
//! correlates `TRANSLATORS:` comments with them, and writes a deduplicated,
//! location-annotated `.pot` catalog that is stable across runs.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (patterns, comment correlation, catalog)

pub mod cli;
pub mod config;
pub mod core;
