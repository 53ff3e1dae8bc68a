use tree_sitter::Language;

/// Returns the tree-sitter [`Language`] for CSS.
pub fn language() -> Language {
    tree_sitter_css::LANGUAGE.into()
}

/// Parse CSS source code, returning the tree-sitter [`Tree`].
pub fn parse(source: &str) -> Option<tree_sitter::Tree> {
    let mut parser = tree_sitter::Parser::new();
    parser.set_language(&language()).expect("failed to set CSS language");
    parser.parse(source, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_rule_set() {
        let source = r#"a:hover { color: red; }"#;
        let tree = parse(source).expect("parse failed");
        let root = tree.root_node();
        assert_eq!(root.kind(), "stylesheet");
        assert!(!root.has_error(), "tree has errors: {}", root.to_sexp());
    }

    #[test]
    fn test_parse_at_rules() {
        let source = r#"@media screen and (min-width: 30em) {
    .card { display: flex; }
}

@font-face {
    font-family: "Body";
    src: url(body.woff2);
}"#;
        let tree = parse(source).expect("parse failed");
        let root = tree.root_node();
        assert_eq!(root.kind(), "stylesheet");
        assert!(!root.has_error(), "tree has errors: {}", root.to_sexp());
        // @media is a dedicated statement, @font-face parses as a generic at_rule
        let media = root.named_child(0).expect("no media node");
        assert_eq!(media.kind(), "media_statement");
    }

    #[test]
    fn test_parse_pseudo_selectors() {
        let source = r#"li::before { content: "-"; }
input:focus { outline: none; }"#;
        let tree = parse(source).expect("parse failed");
        let root = tree.root_node();
        assert!(!root.has_error(), "tree has errors: {}", root.to_sexp());
    }

    #[test]
    fn test_parse_custom_properties() {
        let source = r#":root { --main-bg: #fff; }
body { background: var(--main-bg); }"#;
        let tree = parse(source).expect("parse failed");
        assert!(!tree.root_node().has_error());
    }
}
