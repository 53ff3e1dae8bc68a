use lsp_types::{LanguageString, MarkedString};
use tree_sitter::Node;

use crate::node_path::{is_pseudo_name, node_text, pseudo_punctuation};

/// Cascade specificity of a selector as (id, class, type) counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Specificity {
    pub id: u32,
    pub class: u32,
    pub element: u32,
}

/// Compute the specificity of a selector subtree.
pub fn specificity(node: Node, source: &str) -> Specificity {
    let mut spec = Specificity::default();
    count(node, source, &mut spec);
    spec
}

fn count(node: Node, source: &str, spec: &mut Specificity) {
    match node.kind() {
        "id_selector" => spec.id += 1,
        "class_selector" | "attribute_selector" => spec.class += 1,
        "pseudo_element_selector" => spec.element += 1,
        "tag_name" => {
            // the name after `::` was already counted by its pseudo node
            if !is_pseudo_name(node) {
                spec.element += 1;
            }
        }
        "pseudo_class_selector" => {
            count_pseudo_class(node, source, spec);
            return;
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        count(child, source, spec);
    }
}

// `:where()` contributes nothing; `:not()`, `:is()` and `:has()` count
// only their argument selectors.
fn count_pseudo_class(node: Node, source: &str, spec: &mut Specificity) {
    // the compound base nested before the `:` still counts
    if let Some(punct) = pseudo_punctuation(node) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.end_byte() <= punct.start_byte() {
                count(child, source, spec);
            }
        }
    }

    let mut cursor = node.walk();
    let name = node
        .children(&mut cursor)
        .find(|c| c.kind() == "class_name")
        .map(|c| node_text(c, source).to_ascii_lowercase())
        .unwrap_or_default();

    match name.as_str() {
        "where" => {}
        "not" | "is" | "has" => {
            let mut cursor = node.walk();
            if let Some(args) = node.children(&mut cursor).find(|c| c.kind() == "arguments") {
                let mut args_cursor = args.walk();
                for child in args.named_children(&mut args_cursor) {
                    count(child, source, spec);
                }
            };
        }
        _ => spec.class += 1,
    }
}

fn specificity_note(spec: Specificity) -> MarkedString {
    MarkedString::String(format!(
        "[Selector Specificity](https://developer.mozilla.org/docs/Web/CSS/Specificity): ({}, {}, {})",
        spec.id, spec.class, spec.element
    ))
}

fn code_fence(text: &str) -> MarkedString {
    MarkedString::LanguageString(LanguageString {
        language: "css".to_string(),
        value: text.to_string(),
    })
}

/// Render a selector as hover fragments: a CSS code fence plus its
/// specificity.
pub fn selector_to_contents(node: Node, source: &str) -> Vec<MarkedString> {
    let text = node_text(node, source).trim();
    vec![code_fence(text), specificity_note(specificity(node, source))]
}

/// Render a single simple selector the same way.
pub fn simple_selector_to_contents(node: Node, source: &str) -> Vec<MarkedString> {
    let text = node_text(node, source).trim();
    vec![code_fence(text), specificity_note(specificity(node, source))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node_path::node_path;

    fn spec_of(source: &str) -> Specificity {
        let tree = css_parser::parse(source).expect("parse failed");
        let path = node_path(&tree, 0);
        let node = path
            .iter()
            .find(|n| n.kind() == "selectors")
            .copied()
            .expect("no selectors node");
        specificity(node, source)
    }

    #[test]
    fn test_specificity_counts() {
        assert_eq!(
            spec_of("a { color: red; }"),
            Specificity { id: 0, class: 0, element: 1 }
        );
        assert_eq!(
            spec_of(".item { color: red; }"),
            Specificity { id: 0, class: 1, element: 0 }
        );
        assert_eq!(
            spec_of("#nav ul li.active { color: red; }"),
            Specificity { id: 1, class: 1, element: 2 }
        );
        assert_eq!(
            spec_of("a:hover { color: red; }"),
            Specificity { id: 0, class: 1, element: 1 }
        );
        assert_eq!(
            spec_of("li::before { content: \"\"; }"),
            Specificity { id: 0, class: 0, element: 2 }
        );
    }

    #[test]
    fn test_specificity_functional_pseudo_classes() {
        // :where() adds nothing, :not() counts its argument
        assert_eq!(
            spec_of("a:where(.x) { color: red; }"),
            Specificity { id: 0, class: 0, element: 1 }
        );
        assert_eq!(
            spec_of("a:not(.x) { color: red; }"),
            Specificity { id: 0, class: 1, element: 1 }
        );
    }

    #[test]
    fn test_selector_contents_shape() {
        let source = "#nav li { color: red; }";
        let tree = css_parser::parse(source).unwrap();
        let path = node_path(&tree, 1);
        let node = path.iter().find(|n| n.kind() == "selectors").copied().unwrap();
        let contents = selector_to_contents(node, source);
        assert_eq!(contents.len(), 2);
        match &contents[0] {
            MarkedString::LanguageString(ls) => {
                assert_eq!(ls.language, "css");
                assert_eq!(ls.value, "#nav li");
            }
            other => panic!("expected code fence, got {other:?}"),
        }
        match &contents[1] {
            MarkedString::String(s) => assert!(s.contains("(1, 0, 1)"), "got {s}"),
            other => panic!("expected specificity note, got {other:?}"),
        }
    }
}
