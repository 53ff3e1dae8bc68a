use tree_sitter::{Node, Tree};

/// The syntactic kinds the hover walk recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A selector list or combinator selector (`ul > li`).
    Selector,
    /// A single simple selector: tag, class, id, universal, attribute.
    SimpleSelector,
    /// A `property: value` declaration.
    Declaration,
    /// An at-rule, either the grammar's generic `at_rule` or one of the
    /// dedicated statements (`@media`, `@import`, ...).
    AtRule,
    /// A `:pseudo-class` or `::pseudo-element` selector.
    PseudoSelector,
    Other,
}

/// Classify a tree-sitter node into the kinds recognized by hover.
pub fn classify(node: Node) -> NodeKind {
    match node.kind() {
        "selectors" | "descendant_selector" | "child_selector" | "sibling_selector"
        | "adjacent_sibling_selector" => NodeKind::Selector,
        "class_selector" | "id_selector" | "universal_selector" | "attribute_selector"
        | "namespace_selector" | "nesting_selector" => NodeKind::SimpleSelector,
        // A `tag_name` after `::` is the pseudo-element's name, not an
        // element selector; the enclosing pseudo node covers it.
        "tag_name" => {
            if is_pseudo_name(node) {
                NodeKind::Other
            } else {
                NodeKind::SimpleSelector
            }
        }
        "declaration" => NodeKind::Declaration,
        "at_rule" | "postcss_statement" | "media_statement" | "import_statement"
        | "charset_statement" | "namespace_statement" | "keyframes_statement"
        | "supports_statement" => NodeKind::AtRule,
        "pseudo_class_selector" | "pseudo_element_selector" => NodeKind::PseudoSelector,
        _ => NodeKind::Other,
    }
}

/// True when a name node is the target of pseudo punctuation (`::before`).
pub fn is_pseudo_name(node: Node) -> bool {
    matches!(node.prev_sibling().map(|s| s.kind()), Some(":" | "::"))
}

/// Ordered chain of named nodes from the tree root down to the innermost
/// node containing `byte_offset`. Empty when the offset falls outside the
/// root node.
pub fn node_path(tree: &Tree, byte_offset: usize) -> Vec<Node<'_>> {
    let mut path = Vec::new();
    let root = tree.root_node();
    if byte_offset < root.start_byte() || byte_offset > root.end_byte() {
        return path;
    }

    let mut current = root;
    loop {
        if current.is_named() {
            path.push(current);
        }
        let mut next = None;
        let mut cursor = current.walk();
        for child in current.children(&mut cursor) {
            if child.start_byte() <= byte_offset && byte_offset <= child.end_byte() {
                next = Some(child);
                break;
            }
        }
        match next {
            Some(child) => current = child,
            None => break,
        }
    }

    path
}

/// Extract the text of a node from the source.
pub fn node_text<'a>(node: Node<'a>, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// The `@`-prefixed name of an at-rule node: the `at_keyword` token for a
/// generic `at_rule`, or the leading keyword token of a dedicated statement
/// (`media_statement` → `@media`).
pub fn at_rule_name(node: Node, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    let keyword = node
        .children(&mut cursor)
        .find(|c| node_text(*c, source).starts_with('@'))?;
    Some(node_text(keyword, source).to_string())
}

/// The `:`/`::` punctuation token of a pseudo selector node. Compound
/// selectors nest their base before the punctuation (`a:hover`), so this
/// marks where the pseudo portion starts.
pub fn pseudo_punctuation(node: Node) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let punct = node
        .children(&mut cursor)
        .find(|c| matches!(c.kind(), ":" | "::"));
    punct
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> tree_sitter::Tree {
        css_parser::parse(source).expect("parse failed")
    }

    #[test]
    fn test_node_path_outer_to_inner() {
        let source = "a:hover { color: red; }";
        let tree = parse(source);
        // offset inside `color`
        let offset = source.find("color").unwrap() + 2;
        let path = node_path(&tree, offset);
        let kinds: Vec<&str> = path.iter().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            vec!["stylesheet", "rule_set", "block", "declaration", "property_name"]
        );
    }

    #[test]
    fn test_node_path_empty_outside_root() {
        let source = "a { color: red; }";
        let tree = parse(source);
        assert!(node_path(&tree, source.len() + 10).is_empty());
    }

    #[test]
    fn test_classify_selector_kinds() {
        let source = "ul > li.item { color: red; }";
        let tree = parse(source);
        let offset = source.find("item").unwrap();
        let path = node_path(&tree, offset);
        let kinds: Vec<NodeKind> = path.iter().map(|n| classify(*n)).collect();
        assert!(kinds.contains(&NodeKind::Selector));
        assert!(kinds.contains(&NodeKind::SimpleSelector));
    }

    #[test]
    fn test_classify_pseudo_element_name_is_not_simple_selector() {
        let source = "li::before { content: \"-\"; }";
        let tree = parse(source);
        let offset = source.find("before").unwrap() + 1;
        let path = node_path(&tree, offset);
        let last = *path.last().unwrap();
        assert_eq!(last.kind(), "tag_name");
        assert_eq!(classify(last), NodeKind::Other);
        // the base `li` is still a simple selector
        let li_path = node_path(&tree, source.find("li").unwrap());
        let li = *li_path.last().unwrap();
        assert_eq!(li.kind(), "tag_name");
        assert_eq!(classify(li), NodeKind::SimpleSelector);
    }

    #[test]
    fn test_at_rule_name() {
        let source = "@media screen { a { color: red; } }\n@font-face { src: url(x.woff2); }";
        let tree = parse(source);
        let root = tree.root_node();
        let media = root.named_child(0).unwrap();
        assert_eq!(classify(media), NodeKind::AtRule);
        assert_eq!(at_rule_name(media, source).as_deref(), Some("@media"));

        let font_face = root.named_child(1).unwrap();
        assert_eq!(classify(font_face), NodeKind::AtRule);
        assert_eq!(at_rule_name(font_face, source).as_deref(), Some("@font-face"));
    }

    #[test]
    fn test_pseudo_punctuation() {
        let source = "a:hover { color: red; }";
        let tree = parse(source);
        let offset = source.find("hover").unwrap();
        let path = node_path(&tree, offset);
        let pseudo = path
            .iter()
            .find(|n| n.kind() == "pseudo_class_selector")
            .unwrap();
        let punct = pseudo_punctuation(*pseudo).unwrap();
        assert_eq!(punct.kind(), ":");
        assert_eq!(&source[punct.start_byte()..pseudo.end_byte()], ":hover");
    }
}
