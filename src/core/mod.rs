//! Extraction engine.
//!
//! ## Module Structure
//!
//! - `remap`: Label remap table loaded from a source file
//! - `patterns`: Recognized call-site shapes
//! - `label`: Property-path segment to label conversion
//! - `comments`: `TRANSLATORS:` comment correlation state machine
//! - `extract`: Per-file message extraction
//! - `catalog`: Deduplicating, order-preserving catalog builder
//! - `serialize`: Gettext template rendering
//! - `scanner`: Candidate file discovery
//! - `summary`: Change summary against the previous catalog
//! - `pipeline`: Full run from source tree to written catalog

pub mod catalog;
pub mod comments;
pub mod extract;
pub mod label;
pub mod patterns;
pub mod pipeline;
pub mod remap;
pub mod scanner;
pub mod serialize;
pub mod summary;

pub use catalog::{AddKind, AddOutcome, Catalog, CatalogEntry, CatalogError, TranslatorBlock};
pub use comments::{CommentState, LineScan};
pub use extract::{ExtractContext, ExtractedMessage, SourceLocation};
pub use pipeline::{
    ExtractOptions, GeneratedCatalog, MergeStats, PipelineOutput, generate_catalog,
    merge_extractions, run_pipeline,
};
pub use remap::RemapTable;
