use tower_lsp::lsp_types::{Position, Range};

/// Line start offsets of a text, for converting between byte offsets and LSP positions
///
/// Columns count characters, not UTF-16 code units.
#[derive(Debug, Clone, PartialEq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(content: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, ch) in content.char_indices() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Convert byte offset to LSP position
    pub fn position(&self, content: &str, byte_offset: usize) -> Position {
        let byte_offset = byte_offset.min(content.len());
        let line = match self.line_starts.binary_search(&byte_offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[line];
        let character = content
            .get(line_start..byte_offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(0);

        Position {
            line: line as u32,
            character: character as u32,
        }
    }

    /// Convert a byte range to an LSP range
    pub fn range(&self, content: &str, start: usize, end: usize) -> Range {
        Range {
            start: self.position(content, start),
            end: self.position(content, end),
        }
    }

    /// Convert LSP position to byte offset, `None` when the position is past the text
    pub fn offset(&self, content: &str, position: Position) -> Option<usize> {
        let line_start = *self.line_starts.get(position.line as usize)?;
        let line_end = self
            .line_starts
            .get(position.line as usize + 1)
            .copied()
            .unwrap_or(content.len());
        let line = &content[line_start..line_end];

        let mut chars = line.char_indices();
        for _ in 0..position.character {
            chars.next()?;
        }
        Some(line_start + chars.next().map(|(i, _)| i).unwrap_or(line.len()))
    }

    /// Text of a single line without its line terminator
    pub fn line_text<'a>(&self, content: &'a str, line: u32) -> Option<&'a str> {
        let start = *self.line_starts.get(line as usize)?;
        let end = self
            .line_starts
            .get(line as usize + 1)
            .copied()
            .unwrap_or(content.len());
        Some(content[start..end].trim_end_matches(['\n', '\r']))
    }
}

/// Check whether a position lies inside a range (end inclusive)
pub fn range_contains(range: &Range, position: Position) -> bool {
    let after_start = (position.line, position.character) >= (range.start.line, range.start.character);
    let before_end = (position.line, position.character) <= (range.end.line, range.end.character);
    after_start && before_end
}
