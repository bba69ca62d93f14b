//! Stylesheet Document
//!
//! A single open stylesheet with its content, version and the variable extraction
//! of that content. Any content change re-runs the extraction from scratch.

use tower_lsp::lsp_types::{Range, Url};

use crate::css::extractor::extract_variables;
use crate::css::variable_table::VariableExtraction;
use crate::language::text_position::LineIndex;

/// Represents a stylesheet document and the variables declared in it
#[derive(Debug, Clone)]
pub struct CssDocument {
    /// Document URI
    pub uri: Url,
    /// Language id reported by the client (`css`, `less`, ...)
    pub language_id: String,
    content: String,
    version: i32,
    line_index: LineIndex,
    extraction: VariableExtraction,
}

impl CssDocument {
    /// Create a document and extract its variables
    pub fn new(uri: Url, language_id: String, content: String, version: i32) -> Self {
        let line_index = LineIndex::new(&content);
        let extraction = extract_variables(&content);
        Self {
            uri,
            language_id,
            content,
            version,
            line_index,
            extraction,
        }
    }

    /// Replace the whole content and re-extract
    pub fn replace_content(&mut self, content: String, version: i32) {
        self.line_index = LineIndex::new(&content);
        self.extraction = extract_variables(&content);
        self.content = content;
        self.version = version;
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    /// Text covered by `range`, `None` when the range is outside the content
    pub fn text_in(&self, range: Range) -> Option<&str> {
        let start = self.line_index.offset(&self.content, range.start)?;
        let end = self.line_index.offset(&self.content, range.end)?;
        self.content.get(start..end)
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Variables extracted from the current content
    pub fn extraction(&self) -> &VariableExtraction {
        &self.extraction
    }
}
