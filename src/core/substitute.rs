//! Rewrites extracted text into lookup expressions.
//!
//! All needles are matched by a single alternation ordered longest first.
//! The regex engine prefers earlier alternatives at the same position, so a
//! longer needle always wins over a shorter one it contains, and text that
//! was already replaced is never matched again.

use std::collections::HashMap;
use std::ops::Range;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::{Captures, Regex};

/// Regions of an HTML document that are copied through untouched.
static MASKED_REGION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b.*?</script\s*>|<style\b.*?</style\s*>|<!--.*?-->").unwrap()
});

const QUOTES: [char; 3] = ['\'', '"', '`'];

/// One piece of text and the expression that replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub needle: String,
    pub replacement: String,
}

impl Substitution {
    pub fn new(needle: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
            replacement: replacement.into(),
        }
    }
}

/// Result of a rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub replaced: usize,
}

pub struct Substituter {
    regex: Option<Regex>,
    replacements: HashMap<String, String>,
}

impl Substituter {
    /// Builds the matcher.
    ///
    /// With `string_literals`, a quoted literal whose whole content is a
    /// needle is replaced including its quotes.
    pub fn new(substitutions: &[Substitution], string_literals: bool) -> Result<Self> {
        let mut ordered: Vec<&Substitution> = Vec::with_capacity(substitutions.len());
        for substitution in substitutions {
            if substitution.needle.is_empty()
                || ordered.iter().any(|s| s.needle == substitution.needle)
            {
                continue;
            }
            ordered.push(substitution);
        }
        ordered.sort_by_key(|s| std::cmp::Reverse(s.needle.chars().count()));

        let mut alternatives = Vec::new();
        let mut replacements = HashMap::new();
        for substitution in ordered {
            let escaped = regex::escape(&substitution.needle);
            if string_literals {
                for quote in QUOTES {
                    let q = regex::escape(&quote.to_string());
                    alternatives.push(format!("{q}{escaped}{q}"));
                    replacements.insert(
                        format!("{quote}{}{quote}", substitution.needle),
                        substitution.replacement.clone(),
                    );
                }
            }
            alternatives.push(escaped);
            replacements.insert(substitution.needle.clone(), substitution.replacement.clone());
        }

        let regex = if alternatives.is_empty() {
            None
        } else {
            Some(
                Regex::new(&alternatives.join("|"))
                    .context("Failed to build substitution pattern")?,
            )
        };
        Ok(Self {
            regex,
            replacements,
        })
    }

    /// Replaces every needle in `text`.
    pub fn apply(&self, text: &str) -> Rewrite {
        let Some(regex) = &self.regex else {
            return Rewrite {
                content: text.to_string(),
                replaced: 0,
            };
        };

        let mut replaced = 0;
        let content = regex
            .replace_all(text, |caps: &Captures<'_>| {
                let matched = &caps[0];
                replaced += 1;
                self.replacements
                    .get(matched)
                    .cloned()
                    .unwrap_or_else(|| matched.to_string())
            })
            .into_owned();

        Rewrite { content, replaced }
    }

    /// Replaces needles everywhere except inside `masked` byte ranges.
    ///
    /// Ranges must be sorted and non-overlapping.
    pub fn apply_outside(&self, text: &str, masked: &[Range<usize>]) -> Rewrite {
        let mut content = String::with_capacity(text.len());
        let mut replaced = 0;
        let mut cursor = 0;

        for range in masked {
            let rewrite = self.apply(&text[cursor..range.start]);
            content.push_str(&rewrite.content);
            replaced += rewrite.replaced;
            content.push_str(&text[range.clone()]);
            cursor = range.end;
        }
        let rewrite = self.apply(&text[cursor..]);
        content.push_str(&rewrite.content);
        replaced += rewrite.replaced;

        Rewrite { content, replaced }
    }
}

/// Byte ranges of `<script>`, `<style>` and comment blocks in an HTML text.
pub fn masked_regions(html: &str) -> Vec<Range<usize>> {
    MASKED_REGION_REGEX
        .find_iter(html)
        .map(|m| m.range())
        .collect()
}
