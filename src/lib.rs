//! Romakey - extract hard-coded Japanese text into translation keys
//!
//! Romakey scans HTML templates, scripts and Ruby files for Japanese text,
//! replaces each occurrence with a lookup expression for a generated key and
//! writes the key-to-text dictionary to a JSON or YAML side-car file. Keys are
//! romanized from the text and namespaced by the file's path.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (scan, derive keys, substitute, emit)
//! - `error`: Error taxonomy of the engine
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;
