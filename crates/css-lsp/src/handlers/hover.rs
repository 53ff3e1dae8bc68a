use lsp_types::{Hover, HoverParams};

use css_syntax::hover::{compute_hover, plain_text_contents};

use crate::convert::lsp_position_to_byte_offset;
use crate::state::WorldState;

pub fn handle_hover(state: &WorldState, params: HoverParams) -> Option<Hover> {
    let uri = params.text_document_position_params.text_document.uri;
    let position = params.text_document_position_params.position;

    let doc = state.documents.get(&uri)?;
    let byte_offset = lsp_position_to_byte_offset(&doc.rope, position)?;

    let payload = compute_hover(&doc, byte_offset, &state.data)?;
    let contents = if state.markdown_support.supports_markdown() {
        payload.contents
    } else {
        plain_text_contents(payload.contents)
    };

    Some(Hover {
        contents,
        range: Some(payload.range),
    })
}
