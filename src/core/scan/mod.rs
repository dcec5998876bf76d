//! Detection of Japanese text in source documents.
//!
//! ## Modes
//!
//! - `line`: line-oriented text (scripts, Ruby, locale files)
//! - `markup`: HTML text nodes and selected attributes

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod line;
pub mod markup;

pub use markup::MarkupOptions;

/// How a source document is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Line by line over the raw text.
    Line,
    /// Over the parsed HTML tree.
    Tree,
}

impl ScanMode {
    /// HTML files are scanned as a tree, everything else line by line.
    pub fn for_path(path: &Path) -> Self {
        let is_html = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("html"));
        if is_html { ScanMode::Tree } else { ScanMode::Line }
    }
}

/// Where an extracted string was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceContext {
    /// 1-based line number.
    Line(usize),
    /// A text node.
    Text,
    /// An attribute value.
    Attribute { element: String, name: String },
}

impl fmt::Display for SourceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceContext::Line(line) => write!(f, "line {line}"),
            SourceContext::Text => write!(f, "text"),
            SourceContext::Attribute { element, name } => write!(f, "<{element} {name}>"),
        }
    }
}

/// A run of Japanese text together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedString {
    pub text: String,
    pub context: SourceContext,
}

impl ExtractedString {
    pub fn new(text: impl Into<String>, context: SourceContext) -> Self {
        Self {
            text: text.into(),
            context,
        }
    }
}

/// Orders candidates longest first, by character count.
///
/// Equal lengths keep their document order.
pub fn sort_longest_first(candidates: &mut [ExtractedString]) {
    candidates.sort_by_key(|c| std::cmp::Reverse(c.text.chars().count()));
}
