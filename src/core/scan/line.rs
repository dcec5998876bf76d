use super::{ExtractedString, SourceContext};
use crate::core::cjk::{cjk_runs, contains_cjk};

/// Collects the Japanese runs of every line, in file order.
///
/// Lines without CJK characters contribute nothing.
pub fn scan(content: &str) -> Vec<ExtractedString> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| contains_cjk(line))
        .flat_map(|(idx, line)| {
            cjk_runs(line, false)
                .into_iter()
                .map(move |run| ExtractedString::new(run, SourceContext::Line(idx + 1)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scan_lines() {
        let content = "const a = 1;\nalert('保存しました');\n// nothing\nconst b = \"名前\" + '（必須）';\n";
        let found = scan(content);
        assert_eq!(
            found,
            vec![
                ExtractedString::new("保存しました", SourceContext::Line(2)),
                ExtractedString::new("名前", SourceContext::Line(4)),
                ExtractedString::new("必須", SourceContext::Line(4)),
            ]
        );
    }

    #[test]
    fn test_scan_without_japanese() {
        assert!(scan("puts 'hello'\nputs 'world'\n").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_scan_crlf() {
        let found = scan("a\r\nb = 'はい'\r\n");
        assert_eq!(found, vec![ExtractedString::new("はい", SourceContext::Line(2))]);
    }
}
