use std::sync::{Mutex, OnceLock};

use lsp_types::{ClientCapabilities, MarkupKind};

/// Whether the client accepts markdown in hover responses.
///
/// The hover content formats advertised at `initialize` are recorded here;
/// the answer is resolved lazily on first use and cached for the life of
/// the server. A client that never declared capabilities is assumed to
/// accept markdown.
#[derive(Default)]
pub struct MarkdownSupport {
    /// Outer `None` until capabilities are recorded; inner `None` when the
    /// client declared capabilities without a hover content-format list.
    content_formats: Mutex<Option<Option<Vec<MarkupKind>>>>,
    resolved: OnceLock<bool>,
}

impl MarkdownSupport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the client's capabilities. Has no effect on an already
    /// resolved answer.
    pub fn record(&self, capabilities: &ClientCapabilities) {
        let formats = capabilities
            .text_document
            .as_ref()
            .and_then(|td| td.hover.as_ref())
            .and_then(|hover| hover.content_format.clone());
        *self.content_formats.lock().unwrap() = Some(formats);
    }

    /// True when hover responses may carry markdown.
    pub fn supports_markdown(&self) -> bool {
        *self.resolved.get_or_init(|| {
            match self.content_formats.lock().unwrap().as_ref() {
                None => true,
                Some(formats) => formats
                    .as_ref()
                    .is_some_and(|f| f.contains(&MarkupKind::Markdown)),
            }
        })
    }
}
