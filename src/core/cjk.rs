//! CJK character classification and extraction.

/// Full-width punctuation kept inside extracted runs in markup mode.
pub const PUNCTUATION_WHITELIST: &[char] = &['\u{FF08}', '\u{FF09}']; // （ ）

/// Reports whether `c` belongs to a CJK script block.
///
/// Covers Hangul Jamo, the CJK radicals through Yi block (which includes CJK
/// punctuation, kana and the unified ideographs), Hangul syllables,
/// compatibility ideographs and forms, half-width kana and the supplementary
/// ideograph planes.
pub fn is_cjk(c: char) -> bool {
    matches!(
        c as u32,
        0x1100..=0x11FF
            | 0x2E80..=0xA4CF
            | 0xA840..=0xA87F
            | 0xAC00..=0xD7AF
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF65..=0xFFDC
            | 0x20000..=0x2FFFF
    )
}

pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk)
}

/// Returns only the CJK characters of `text`, in order.
///
/// With `keep_punctuation`, characters from [`PUNCTUATION_WHITELIST`] are kept
/// as well. The scanners use [`cjk_runs`] instead, which keeps runs separated
/// by other text apart. Joined, those runs equal this result unless a run is
/// made only of whitelisted punctuation.
///
/// # Examples
///
/// ```
/// use romakey::core::cjk::extract_cjk;
///
/// assert_eq!(extract_cjk("Save 保存 now", false), "保存");
/// assert_eq!(extract_cjk("設定（必須）", true), "設定（必須）");
/// assert_eq!(extract_cjk("設定（必須）", false), "設定必須");
/// ```
pub fn extract_cjk(text: &str, keep_punctuation: bool) -> String {
    text.chars()
        .filter(|&c| retained(c, keep_punctuation))
        .collect()
}

/// Splits `text` into maximal runs of CJK characters.
///
/// Runs made only of whitelisted punctuation are dropped, so every returned
/// run contains at least one CJK character.
pub fn cjk_runs(text: &str, keep_punctuation: bool) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, c) in text.char_indices() {
        match (retained(c, keep_punctuation), start) {
            (true, None) => start = Some(idx),
            (false, Some(s)) => {
                runs.push(&text[s..idx]);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push(&text[s..]);
    }

    runs.retain(|run| contains_cjk(run));
    runs
}

fn retained(c: char, keep_punctuation: bool) -> bool {
    is_cjk(c) || (keep_punctuation && PUNCTUATION_WHITELIST.contains(&c))
}
