//! Variable Hover Provider
//!
//! Provides hover information for custom properties:
//! - on a declaration line, the variable's value in every selector context
//! - on a `var(--name)` reference, what the reference resolves to at that spot

use std::fmt::Write;

use tower_lsp::lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, Position};

use crate::css::color::ColorClassifier;
use crate::css::constants::ROOT_SELECTOR;
use crate::css::document::CssDocument;
use crate::css::navigation::{declared_variable_in_line, enclosing_block, reference_at_offset};
use crate::css::report::VariableReport;
use crate::css::variable_resolver::{VariableResolutionStatus, VariableResolver};

/// Provides hover information for custom properties
pub struct VariableHoverProvider {
    classifier: ColorClassifier,
}

impl VariableHoverProvider {
    pub fn new(classifier: ColorClassifier) -> Self {
        Self { classifier }
    }

    /// Hover for a position in a document
    pub fn hover(&self, document: &CssDocument, position: Position) -> Option<Hover> {
        let content = document.content();
        let index = document.line_index();
        let line = index.line_text(content, position.line)?;

        let markdown = match declared_variable_in_line(line) {
            Some(name) => self.declaration_table(document, name)?,
            None => {
                let offset = index.offset(content, position)?;
                let name = reference_at_offset(content, offset)?;
                self.reference_summary(document, name, position)
            }
        };

        Some(Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value: markdown,
            }),
            range: None,
        })
    }

    /// Markdown table of a variable across all selectors that declare it
    fn declaration_table(&self, document: &CssDocument, name: &str) -> Option<String> {
        let report = VariableReport::build(document.extraction(), &self.classifier);
        let row = report.row(name)?;

        let mut markdown = format!("**`{}`**\n\n| Selector | Value | Resolved |\n|---|---|---|\n", name);
        for (selector, cell) in report.selectors.iter().zip(&row.cells) {
            let Some(cell) = cell else {
                continue;
            };
            let resolved = cell.resolved.as_deref().unwrap_or("");
            let _ = writeln!(
                markdown,
                "| `{}` | `{}` | {} |",
                selector,
                cell.raw,
                if resolved.is_empty() { String::new() } else { format!("`{}`", resolved) }
            );
        }
        Some(markdown)
    }

    /// One line describing what `var(name)` resolves to at `position`
    fn reference_summary(&self, document: &CssDocument, name: &str, position: Position) -> String {
        let selector = enclosing_block(document.extraction(), position)
            .map(|block| block.selector.as_str())
            .unwrap_or(ROOT_SELECTOR);
        let reference = format!("var({})", name);

        match VariableResolver::new(document.extraction()).resolve(&reference, selector) {
            VariableResolutionStatus::Resolved(value) => {
                let color = if self.classifier.is_color(&value) { " (color)" } else { "" };
                format!("`{}` → `{}`{} in `{}`", name, value, color, selector)
            }
            VariableResolutionStatus::Unresolved => {
                format!("`{}` cannot be resolved in `{}`", name, selector)
            }
        }
    }
}
