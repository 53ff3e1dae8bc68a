use lsp_types::Position;

/// Convert an LSP `Position` to a byte offset in a Rope.
/// LSP uses 0-based line/character (UTF-16); for ASCII-dominated
/// stylesheets, byte offset ≈ UTF-16 offset.
pub fn lsp_position_to_byte_offset(rope: &ropey::Rope, pos: Position) -> Option<usize> {
    let line = pos.line as usize;
    if line >= rope.len_lines() {
        return None;
    }
    let line_start = rope.line_to_byte(line);
    let col = pos.character as usize;
    Some(line_start + col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ropey::Rope;

    #[test]
    fn test_position_to_offset() {
        let rope = Rope::from_str("a {\n    color: red;\n}\n");
        assert_eq!(
            lsp_position_to_byte_offset(&rope, Position { line: 0, character: 0 }),
            Some(0)
        );
        assert_eq!(
            lsp_position_to_byte_offset(&rope, Position { line: 1, character: 4 }),
            Some(8)
        );
    }

    #[test]
    fn test_position_past_last_line() {
        let rope = Rope::from_str("a { color: red; }");
        assert!(lsp_position_to_byte_offset(&rope, Position { line: 5, character: 0 }).is_none());
    }
}
