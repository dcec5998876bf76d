//! Error types raised by the extraction pipeline.
//!
//! Filesystem and serialization failures travel as `anyhow::Error` with
//! context attached at the call site. The variants here are the failures the
//! pipeline itself decides on.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RomakeyError {
    /// The trim substring or the application-root anchor is not in the path.
    #[error("anchor \"{anchor}\" not found in path {}", path.display())]
    AnchorNotFound { anchor: String, path: PathBuf },

    /// The anchor matched, but no path segment follows it.
    #[error("no path segments follow anchor \"{anchor}\" in {}", path.display())]
    NothingAfterAnchor { anchor: String, path: PathBuf },

    /// The source path has no file name to build a namespace from.
    #[error("cannot derive a namespace from path {}", .0.display())]
    EmptyPath(PathBuf),

    /// No lookup-expression syntax exists for this extension.
    #[error("unsupported file extension \"{0}\" (expected html, js or rb)")]
    UnsupportedExtension(String),

    /// An existing side-car file whose root is not a mapping.
    #[error("root of side-car file must be a mapping: {}", path.display())]
    InvalidSideCar { path: PathBuf },
}
