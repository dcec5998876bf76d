//! Translation key derivation.

use super::romanize::Romanizer;

/// Default number of romanized words kept in a key.
pub const DEFAULT_MAX_WORDS: usize = 3;

/// Derives stable lookup keys from extracted Japanese text.
///
/// A key is the romanized text without parentheses, cut to the first
/// `max_words` words and joined with underscores. Two texts that share their
/// leading words produce the same key.
pub struct KeyDeriver<'a> {
    romanizer: &'a dyn Romanizer,
    max_words: usize,
}

impl<'a> KeyDeriver<'a> {
    pub fn new(romanizer: &'a dyn Romanizer, max_words: usize) -> Self {
        Self {
            romanizer,
            max_words: max_words.max(1),
        }
    }

    pub fn derive(&self, text: &str) -> String {
        let romaji = self.romanizer.romanize(text).replace(['(', ')'], "");
        let key = romaji
            .split_whitespace()
            .take(self.max_words)
            .collect::<Vec<_>>()
            .join("_");

        if key.is_empty() {
            code_point_key(text, self.max_words)
        } else {
            key
        }
    }
}

/// Fallback for text the romanizer renders as nothing (punctuation only).
fn code_point_key(text: &str, max_words: usize) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .take(max_words)
        .map(|c| format!("u{:x}", c as u32))
        .collect::<Vec<_>>()
        .join("_")
}
