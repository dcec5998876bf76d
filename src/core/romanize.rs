//! Romanization of Japanese text into space-separated Latin words.

use std::sync::LazyLock;

use ib_romaji::HepburnRomanizer;

use super::cjk::is_cjk;

static ROMANIZER: LazyLock<HepburnRomanizer> = LazyLock::new(HepburnRomanizer::default);

/// Converts Japanese text into a Latin-alphabet phonetic rendering.
///
/// Implementations return lowercase ASCII words separated by single spaces.
pub trait Romanizer {
    fn romanize(&self, text: &str) -> String;
}

/// Hepburn romanization backed by `ib-romaji`.
///
/// The text is segmented into word-like chunks first (a kanji run together
/// with its trailing hiragana, a katakana run, a hiragana run), and each chunk
/// becomes one word of the output. Characters that have no reading are
/// written as `u` followed by their hex code point.
#[derive(Debug, Default, Clone, Copy)]
pub struct Hepburn;

impl Romanizer for Hepburn {
    fn romanize(&self, text: &str) -> String {
        segment(text)
            .into_iter()
            .map(romanize_chunk)
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Hiragana,
    Katakana,
    Kanji,
    Latin,
    Separator,
}

fn script_of(c: char) -> Script {
    match c {
        '\u{3041}'..='\u{309F}' => Script::Hiragana,
        '\u{30A0}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' | '\u{FF66}'..='\u{FF9F}' => {
            Script::Katakana
        }
        '\u{3005}' | '\u{3400}'..='\u{4DBF}' | '\u{4E00}'..='\u{9FFF}' | '\u{F900}'..='\u{FAFF}' => {
            Script::Kanji
        }
        c if c.is_ascii_alphanumeric() => Script::Latin,
        c if is_cjk(c) && !matches!(c, '\u{3000}'..='\u{303F}') => Script::Kanji,
        _ => Script::Separator,
    }
}

/// Splits text into chunks that romanize to one word each.
fn segment(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut last: Option<Script> = None;

    for (idx, c) in text.char_indices() {
        let script = script_of(c);
        let joins = match (last, script) {
            (_, Script::Separator) => false,
            (Some(prev), next) if prev == next => true,
            // okurigana stay attached to their kanji stem
            (Some(Script::Kanji), Script::Hiragana) => true,
            _ => false,
        };
        if joins {
            last = Some(script);
            continue;
        }
        if last.is_some() {
            chunks.push(&text[start..idx]);
        }
        if script == Script::Separator {
            last = None;
        } else {
            last = Some(script);
            start = idx;
        }
    }
    if last.is_some() {
        chunks.push(&text[start..]);
    }
    chunks
}

fn romanize_chunk(chunk: &str) -> String {
    if chunk.chars().all(|c| c.is_ascii_alphanumeric()) {
        return chunk.to_ascii_lowercase();
    }

    let whole = ROMANIZER
        .romanize_kana_str_all(chunk)
        .filter(|romaji| !romaji.chars().any(is_cjk))
        .map(|romaji| normalize(&romaji))
        .filter(|romaji| !romaji.is_empty());

    match whole {
        Some(romaji) => romaji,
        None => normalize(&chunk.chars().map(romanize_char).collect::<String>()),
    }
}

fn romanize_char(c: char) -> String {
    let mut buf = [0u8; 4];
    match ROMANIZER.romanize_kana_str_all(c.encode_utf8(&mut buf)) {
        Some(romaji) if !romaji.chars().any(is_cjk) && !romaji.is_empty() => romaji,
        _ if c.is_ascii_alphanumeric() => c.to_string(),
        _ => format!("u{:x}", c as u32),
    }
}

/// Keeps lowercase ASCII letters and digits; drops everything else.
fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_segment() {
        assert_eq!(segment("日本語"), vec!["日本語"]);
        assert_eq!(segment("話す"), vec!["話す"]);
        assert_eq!(segment("日本語を話す"), vec!["日本語を", "話す"]);
        assert_eq!(segment("カタカナとひらがな"), vec!["カタカナ", "とひらがな"]);
        assert_eq!(segment("保存、削除。"), vec!["保存", "削除"]);
        assert_eq!(segment("ＡＢ Web 表示"), vec!["Web", "表示"]);
        assert!(segment("。、").is_empty());
    }

    #[test]
    fn test_romanize_kana() {
        assert_eq!(Hepburn.romanize("あいうえお"), "aiueo");
        assert_eq!(Hepburn.romanize("アイウエオ"), "aiueo");
    }

    #[test]
    fn test_romanize_separates_words() {
        let romaji = Hepburn.romanize("アイウエオ、あいうえお");
        assert_eq!(romaji, "aiueo aiueo");
    }

    #[test]
    fn test_romanize_output_is_ascii_words() {
        for text in ["日本語を話す", "保存（必須）", "「はい」", "ｱｲｳ", "麤"] {
            let romaji = Hepburn.romanize(text);
            assert!(!romaji.is_empty(), "{text} romanized to nothing");
            assert!(
                romaji
                    .split(' ')
                    .all(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_alphanumeric())),
                "{text} -> {romaji}"
            );
        }
    }

    #[test]
    fn test_romanize_punctuation_only_is_empty() {
        assert_eq!(Hepburn.romanize("。、"), "");
    }
}
