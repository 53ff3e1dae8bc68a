use dashmap::DashMap;
use lsp_types::Url;

use css_syntax::data::CssData;
use css_syntax::document::DocumentState;

use crate::capabilities::MarkdownSupport;

/// Global server state holding all open documents, the bundled CSS
/// documentation, and the memoized markdown-capability answer.
pub struct WorldState {
    pub documents: DashMap<Url, DocumentState>,
    pub data: CssData,
    pub markdown_support: MarkdownSupport,
}

impl WorldState {
    pub fn new() -> Self {
        WorldState {
            documents: DashMap::new(),
            data: CssData::bundled(),
            markdown_support: MarkdownSupport::new(),
        }
    }

    /// Return the number of currently open documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}
