use tower_lsp::lsp_types::{Hover, HoverContents, Location, MarkedString, Position, Range, Url};

use crate::span::utf16_len;

/// Reports the document URI and its length in UTF-16 units. The cursor is
/// not consulted.
pub(super) fn hover(uri: &Url, text: &str, _position: Position) -> Hover {
    Hover {
        contents: HoverContents::Scalar(MarkedString::String(format!(
            "File: {}, Characters: {}",
            uri,
            utf16_len(text)
        ))),
        range: None,
    }
}

/// Points one line above the cursor in the same document, column 0, zero
/// width. Line 0 stays on line 0.
pub(super) fn definition(uri: &Url, position: Position) -> Location {
    let target = Position {
        line: position.line.saturating_sub(1),
        character: 0,
    };
    Location {
        uri: uri.clone(),
        range: Range {
            start: target,
            end: target,
        },
    }
}
