use lsp_types::{
    HoverContents, MarkedString, MarkupContent, MarkupKind, Position, Range,
};
use tree_sitter::Node;

use crate::data::{browser_label, CssData, Description};
use crate::document::DocumentState;
use crate::node_path::{
    at_rule_name, classify, node_path, node_text, pseudo_punctuation, NodeKind,
};
use crate::selectors::{selector_to_contents, simple_selector_to_contents};

/// The hover result for one request: contents plus the source range of the
/// construct they describe.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverPayload {
    pub contents: HoverContents,
    pub range: Range,
}

/// Compute the hover for a byte offset.
///
/// Walks the chain of enclosing nodes from the outside in. Every recognized
/// node overwrites the current result, so the innermost recognized construct
/// wins; nodes whose lookup yields nothing leave an earlier match intact.
/// The walk never exits early.
pub fn compute_hover(
    doc: &DocumentState,
    byte_offset: usize,
    data: &CssData,
) -> Option<HoverPayload> {
    let source = doc.source();
    let path = node_path(&doc.tree, byte_offset);
    tracing::debug!(offset = byte_offset, depth = path.len(), "hover walk");

    let mut result: Option<HoverPayload> = None;
    for node in path {
        match classify(node) {
            NodeKind::Selector => {
                result = Some(HoverPayload {
                    contents: HoverContents::Array(selector_to_contents(node, &source)),
                    range: node_range(node),
                });
            }
            NodeKind::SimpleSelector => {
                // at-rule-like constructs (`@at-root`) can parse as simple
                // selectors; they carry no selector semantics
                if !is_at_rule_like(node_text(node, &source)) {
                    result = Some(HoverPayload {
                        contents: HoverContents::Array(simple_selector_to_contents(node, &source)),
                        range: node_range(node),
                    });
                }
            }
            NodeKind::Declaration => {
                if let Some(payload) = declaration_hover(node, &source, data) {
                    result = Some(payload);
                }
            }
            NodeKind::AtRule => {
                if let Some(payload) = at_rule_hover(node, &source, data) {
                    result = Some(payload);
                }
            }
            NodeKind::PseudoSelector => {
                if let Some(payload) = pseudo_hover(node, &source, data) {
                    result = Some(payload);
                }
            }
            NodeKind::Other => {}
        }
    }

    result
}

pub(crate) fn is_at_rule_like(text: &str) -> bool {
    text.starts_with('@')
}

/// Hover for a declaration, keyed by its full property name (vendor
/// prefixes and custom-property names included).
fn declaration_hover(node: Node, source: &str, data: &CssData) -> Option<HoverPayload> {
    let mut cursor = node.walk();
    let name_node = node
        .children(&mut cursor)
        .find(|c| c.kind() == "property_name")?;
    let entry = data.property(node_text(name_node, source))?;

    let contents = match &entry.description {
        // already-structured content is used as-is; the support note only
        // accompanies plain descriptions
        Description::Markdown(markup) => HoverContents::Markup(markup.clone()),
        Description::Plain(text) => {
            let mut fragments = Vec::new();
            if !text.is_empty() {
                fragments.push(MarkedString::String(text.clone()));
            }
            if let Some(label) = entry.browsers.as_deref().and_then(browser_label) {
                fragments.push(MarkedString::String(label));
            }
            if fragments.is_empty() {
                return None;
            }
            HoverContents::Array(fragments)
        }
    };

    Some(HoverPayload {
        contents,
        range: node_range(node),
    })
}

fn at_rule_hover(node: Node, source: &str, data: &CssData) -> Option<HoverPayload> {
    let name = at_rule_name(node, source)?;
    let entry = data.at_directive(&name)?;
    Some(HoverPayload {
        contents: description_contents(&entry.description),
        range: node_range(node),
    })
}

/// Hover for a pseudo selector. The looked-up text and the reported range
/// start at the `:`/`::` punctuation, so `a:hover` resolves `:hover` only.
/// `::`-prefixed text is a pseudo-element, anything else a pseudo-class.
fn pseudo_hover(node: Node, source: &str, data: &CssData) -> Option<HoverPayload> {
    let punct = pseudo_punctuation(node)?;

    // drop any parenthesized arguments from the lookup key
    let mut cursor = node.walk();
    let end = node
        .children(&mut cursor)
        .find(|c| c.kind() == "arguments")
        .map_or(node.end_byte(), |args| args.start_byte());
    let text = &source[punct.start_byte()..end];

    let entry = if text.starts_with("::") {
        data.pseudo_element(text)
    } else {
        data.pseudo_class(text)
    }?;

    Some(HoverPayload {
        contents: description_contents(&entry.description),
        range: Range {
            start: point_to_position(punct.start_position()),
            end: point_to_position(node.end_position()),
        },
    })
}

fn description_contents(description: &Description) -> HoverContents {
    match description {
        Description::Plain(text) => HoverContents::Scalar(MarkedString::String(text.clone())),
        Description::Markdown(markup) => HoverContents::Markup(markup.clone()),
    }
}

/// Strip markup semantics from hover contents for clients that only accept
/// plain text. Produces a new value; already-plain contents pass through
/// unchanged, so the conversion is idempotent.
pub fn plain_text_contents(contents: HoverContents) -> HoverContents {
    match contents {
        HoverContents::Markup(markup) => HoverContents::Markup(MarkupContent {
            kind: MarkupKind::PlainText,
            value: markup.value,
        }),
        HoverContents::Array(fragments) => {
            HoverContents::Array(fragments.into_iter().map(plain_text_fragment).collect())
        }
        HoverContents::Scalar(fragment) => HoverContents::Scalar(plain_text_fragment(fragment)),
    }
}

fn plain_text_fragment(fragment: MarkedString) -> MarkedString {
    match fragment {
        MarkedString::String(s) => MarkedString::String(s),
        MarkedString::LanguageString(ls) => MarkedString::String(ls.value),
    }
}

fn point_to_position(point: tree_sitter::Point) -> Position {
    Position {
        line: point.row as u32,
        character: point.column as u32,
    }
}

fn node_range(node: Node) -> Range {
    Range {
        start: point_to_position(node.start_position()),
        end: point_to_position(node.end_position()),
    }
}
