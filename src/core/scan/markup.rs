use scraper::{ElementRef, Html, Node};

use super::{ExtractedString, SourceContext};
use crate::core::cjk::cjk_runs;

/// Elements whose content is never scanned.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style"];

/// Which attributes besides text nodes are scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupOptions {
    /// Elements whose `title` attribute is scanned.
    pub title_elements: Vec<String>,
    /// Elements whose tooltip attributes are scanned.
    pub tooltip_elements: Vec<String>,
    pub tooltip_attributes: Vec<String>,
}

impl Default for MarkupOptions {
    fn default() -> Self {
        Self {
            title_elements: vec!["i".to_string()],
            tooltip_elements: vec!["span".to_string()],
            tooltip_attributes: vec!["uib-tooltip".to_string()],
        }
    }
}

/// Collects Japanese runs from text nodes, then `title` attributes, then
/// tooltip attributes.
///
/// Runs keep full-width parentheses. `<script>` and `<style>` content is
/// skipped, as are comments.
pub fn scan(content: &str, options: &MarkupOptions) -> Vec<ExtractedString> {
    let document = parse(content);
    let mut found = Vec::new();

    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let skipped = node.ancestors().any(|ancestor| {
            matches!(ancestor.value(), Node::Element(e) if SKIPPED_ELEMENTS.contains(&e.name()))
        });
        if skipped {
            continue;
        }
        found.extend(
            cjk_runs(text, true)
                .into_iter()
                .map(|run| ExtractedString::new(run, SourceContext::Text)),
        );
    }

    let elements: Vec<ElementRef<'_>> = document
        .tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .collect();

    for element in &elements {
        let name = element.value().name();
        if options.title_elements.iter().any(|e| e == name) {
            collect_attribute(element, "title", &mut found);
        }
    }

    for element in &elements {
        let name = element.value().name();
        if options.tooltip_elements.iter().any(|e| e == name) {
            for attribute in &options.tooltip_attributes {
                collect_attribute(element, attribute, &mut found);
            }
        }
    }

    found
}

fn collect_attribute(element: &ElementRef<'_>, attribute: &str, found: &mut Vec<ExtractedString>) {
    let Some(value) = element.value().attr(attribute) else {
        return;
    };
    for run in cjk_runs(value, true) {
        found.push(ExtractedString::new(
            run,
            SourceContext::Attribute {
                element: element.value().name().to_string(),
                name: attribute.to_string(),
            },
        ));
    }
}

/// Full documents are parsed as documents, templates as fragments.
fn parse(content: &str) -> Html {
    let head = content
        .chars()
        .take(1024)
        .collect::<String>()
        .to_ascii_lowercase();
    if head.contains("<!doctype") || head.contains("<html") {
        Html::parse_document(content)
    } else {
        Html::parse_fragment(content)
    }
}
