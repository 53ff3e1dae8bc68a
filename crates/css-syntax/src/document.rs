use lsp_types::Diagnostic;
use ropey::Rope;
use tree_sitter::Tree;

use crate::diagnostics::extract_diagnostics;

/// A document's state: source text (as Rope), parse tree, and diagnostics.
pub struct DocumentState {
    pub rope: Rope,
    pub tree: Tree,
    pub diagnostics: Vec<Diagnostic>,
}

impl DocumentState {
    /// Create a new document state from full source text.
    pub fn new(source: &str) -> Option<Self> {
        let tree = css_parser::parse(source)?;
        let diagnostics = extract_diagnostics(&tree, source);
        let rope = Rope::from_str(source);

        Some(DocumentState {
            rope,
            tree,
            diagnostics,
        })
    }

    /// Re-parse the document from new source text.
    /// Used when applying document changes (full sync).
    pub fn reparse_full(&mut self, source: &str) {
        self.rope = Rope::from_str(source);
        if let Some(new_tree) = css_parser::parse(source) {
            self.diagnostics = extract_diagnostics(&new_tree, source);
            self.tree = new_tree;
        }
    }

    /// Get current source text.
    pub fn source(&self) -> String {
        self.rope.to_string()
    }
}
