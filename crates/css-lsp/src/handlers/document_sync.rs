use lsp_types::{
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams, Url,
};
use tower_lsp::Client;

use css_syntax::document::DocumentState;

use crate::state::WorldState;

pub async fn handle_did_open(
    client: &Client,
    state: &WorldState,
    params: DidOpenTextDocumentParams,
) {
    let uri = params.text_document.uri;
    let text = params.text_document.text;

    if let Some(doc) = DocumentState::new(&text) {
        publish_diagnostics(client, &uri, &doc).await;
        state.documents.insert(uri, doc);
    }
}

pub async fn handle_did_change(
    client: &Client,
    state: &WorldState,
    params: DidChangeTextDocumentParams,
) {
    let uri = params.text_document.uri;

    if let Some(mut doc) = state.documents.get_mut(&uri) {
        for change in params.content_changes {
            if let Some(range) = change.range {
                // Range-based change: splice the new text in, then reparse.
                let mut source = doc.source();
                let start = crate::convert::lsp_position_to_byte_offset(&doc.rope, range.start);
                let end = crate::convert::lsp_position_to_byte_offset(&doc.rope, range.end);
                if let (Some(start), Some(end)) = (start, end) {
                    source.replace_range(start..end, &change.text);
                }
                doc.reparse_full(&source);
            } else {
                // Full document sync
                doc.reparse_full(&change.text);
            }
        }
        publish_diagnostics(client, &uri, &doc).await;
    }
}

pub async fn handle_did_close(state: &WorldState, params: DidCloseTextDocumentParams) {
    // Hover needs no cross-document knowledge, so a closed document can
    // be dropped entirely.
    state.documents.remove(&params.text_document.uri);
}

async fn publish_diagnostics(client: &Client, uri: &Url, doc: &DocumentState) {
    client
        .publish_diagnostics(uri.clone(), doc.diagnostics.clone(), None)
        .await;
}
