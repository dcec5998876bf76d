//! Core extraction engine.
//!
//! ## Module Structure
//!
//! - `cjk`: CJK character classification and run extraction
//! - `romanize`: Romanizer trait and the Hepburn implementation
//! - `key`: Translation key derivation
//! - `namespace`: Namespace prefixes from file paths
//! - `scan`: Line and markup scanners
//! - `syntax`: Lookup expressions per file type
//! - `substitute`: Longest-first text substitution
//! - `dictionary`: Translation bundles and side-car files
//! - `pipeline`: One extraction run, end to end

pub mod cjk;
pub mod dictionary;
pub mod key;
pub mod namespace;
pub mod pipeline;
pub mod romanize;
pub mod scan;
pub mod substitute;
pub mod syntax;

pub use pipeline::{Extraction, PipelineConfig, RunSummary, run};
