//! Namespace prefixes derived from source file paths.
//!
//! A namespace is built from path segments: the first kept segment is used as
//! is, every following segment is title-cased and loses its underscores, and
//! the pieces are concatenated. `app/zcs/foo/bar_baz.html` anchored at `zcs`
//! becomes `fooBarBaz`.

use std::path::{Component, Path};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::RomakeyError;

/// Application-root segment used when neither `--trim` nor `--key` is given.
pub const DEFAULT_ANCHOR: &str = "zcs";

/// Directory segments kept by the `segments` default strategy.
pub const DEFAULT_SEGMENT_COUNT: usize = 3;

/// Convention used when no trim anchor and no explicit key are supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultNamespace {
    /// Segments after the application-root anchor.
    #[default]
    Anchor,
    /// The last few directories plus the file name.
    Segments,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceStrategy {
    /// Everything after the first occurrence of a substring.
    Trim(String),
    /// A verbatim, possibly dotted, namespace.
    ExplicitKey(String),
    /// Everything after a whole path segment.
    Anchor(String),
    /// The last `n` directory segments and the file stem.
    LastSegments(usize),
}

impl NamespaceStrategy {
    /// Picks the strategy in effect: trim first, then an explicit key, then
    /// the configured default.
    pub fn select(
        trim: Option<&str>,
        key: Option<&str>,
        default: DefaultNamespace,
        anchor: &str,
        segment_count: usize,
    ) -> Self {
        let non_empty = |s: Option<&str>| s.filter(|s| !s.is_empty()).map(str::to_string);

        if let Some(trim) = non_empty(trim) {
            Self::Trim(trim)
        } else if let Some(key) = non_empty(key) {
            Self::ExplicitKey(key)
        } else {
            match default {
                DefaultNamespace::Anchor => Self::Anchor(anchor.to_string()),
                DefaultNamespace::Segments => Self::LastSegments(segment_count),
            }
        }
    }

    /// Whether the side-car dictionary nests under each dotted segment.
    pub fn is_nested(&self) -> bool {
        matches!(self, Self::ExplicitKey(_))
    }

    pub fn resolve(&self, path: &Path) -> Result<String, RomakeyError> {
        let (absolute, segments) = normalized_segments(path);
        if segments.is_empty() {
            return Err(RomakeyError::EmptyPath(path.to_path_buf()));
        }

        let kept: Vec<&str> = match self {
            Self::ExplicitKey(key) => return Ok(key.clone()),
            Self::Trim(trim) => after_substring(absolute, &segments, trim, path)?,
            Self::Anchor(anchor) => {
                let idx = segments
                    .iter()
                    .position(|s| s == anchor)
                    .ok_or_else(|| RomakeyError::AnchorNotFound {
                        anchor: anchor.clone(),
                        path: path.to_path_buf(),
                    })?;
                segments[idx + 1..].iter().map(String::as_str).collect()
            }
            Self::LastSegments(count) => {
                let Some((stem, dirs)) = segments.split_last() else {
                    return Err(RomakeyError::EmptyPath(path.to_path_buf()));
                };
                let skip = dirs.len().saturating_sub(*count);
                dirs[skip..]
                    .iter()
                    .chain(std::iter::once(stem))
                    .map(String::as_str)
                    .collect()
            }
        };

        let kept: Vec<&str> = kept.into_iter().filter(|s| !s.is_empty()).collect();
        if kept.is_empty() {
            let anchor = match self {
                Self::Trim(a) | Self::Anchor(a) => a.clone(),
                _ => String::new(),
            };
            return Err(RomakeyError::NothingAfterAnchor {
                anchor,
                path: path.to_path_buf(),
            });
        }

        Ok(compose(&kept))
    }
}

/// Segments after the first occurrence of `trim` in the joined path.
///
/// Everything from the end of the match through the next separator is
/// dropped, so the rest of a partially matched segment goes away and a match
/// ending on a separator drops the segment that follows it.
fn after_substring<'s>(
    absolute: bool,
    segments: &'s [String],
    trim: &str,
    path: &Path,
) -> Result<Vec<&'s str>, RomakeyError> {
    let joined = join_segments(absolute, segments);
    let idx = joined
        .find(trim)
        .ok_or_else(|| RomakeyError::AnchorNotFound {
            anchor: trim.to_string(),
            path: path.to_path_buf(),
        })?;
    let end = idx + trim.len();

    // separators up to the match end, plus the segment the remainder starts in
    let first = joined[..end]
        .matches('/')
        .count()
        .saturating_sub(usize::from(absolute))
        + 1;

    Ok(segments
        .get(first..)
        .unwrap_or_default()
        .iter()
        .map(String::as_str)
        .collect())
}

fn join_segments(absolute: bool, segments: &[String]) -> String {
    let joined = segments.join("/");
    if absolute { format!("/{joined}") } else { joined }
}

/// Lexically normalized path segments with the extension stripped from the
/// file name.
fn normalized_segments(path: &Path) -> (bool, Vec<String>) {
    let mut absolute = false;
    let mut segments: Vec<String> = Vec::new();

    for component in path.components() {
        match component {
            Component::RootDir | Component::Prefix(_) => absolute = true,
            Component::CurDir => {}
            Component::ParentDir => {
                if segments.pop().is_none() && !absolute {
                    segments.push("..".to_string());
                }
            }
            Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
        }
    }

    if let Some(last) = segments.last_mut() {
        if let Some(stem) = Path::new(last.as_str()).file_stem() {
            *last = stem.to_string_lossy().into_owned();
        }
    }
    (absolute, segments)
}

fn compose(segments: &[&str]) -> String {
    let mut prefix = segments[0].to_string();
    for segment in &segments[1..] {
        prefix.push_str(&title_case(segment).replace('_', ""));
    }
    prefix
}

/// Upper-cases the first cased letter of every word and lower-cases the rest,
/// where a word starts after any character without case.
pub fn title_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut prev_cased = false;
    for c in segment.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = c.is_lowercase() || c.is_uppercase();
    }
    out
}
