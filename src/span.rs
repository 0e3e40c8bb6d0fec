use tower_lsp::lsp_types::{Position, Range};

/// A half-open column range on a single line. Columns are UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct TextSpan {
    pub line: u32,
    pub start: u32,
    pub end: u32,
}

impl TextSpan {
    pub fn new(line: u32, start: u32, end: u32) -> Self { Self { line, start, end } }

    pub fn to_range(&self) -> Range {
        Range {
            start: Position {
                line: self.line,
                character: self.start,
            },
            end: Position {
                line: self.line,
                character: self.end,
            },
        }
    }
}

/// Length of `text` in UTF-16 code units.
pub fn utf16_len(text: &str) -> u32 {
    text.encode_utf16().count() as u32
}

/// UTF-16 column of a byte offset within `line`.
pub fn utf16_col(line: &str, byte_offset: usize) -> u32 {
    utf16_len(&line[..byte_offset])
}

/// Byte offset of a UTF-16 column within `line`.
///
/// Returns `None` when the column lies past the end of the line or falls
/// inside a surrogate pair.
pub fn byte_offset(line: &str, col: u32) -> Option<usize> {
    let mut units = 0u32;
    for (offset, ch) in line.char_indices() {
        if units == col {
            return Some(offset);
        }
        if units > col {
            return None;
        }
        units += ch.len_utf16() as u32;
    }
    (units == col).then_some(line.len())
}
