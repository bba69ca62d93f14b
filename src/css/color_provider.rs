//! Variable Color Provider
//!
//! Provides color decorations for custom property declarations whose resolved
//! value is a color, so `--accent: var(--brand)` gets the swatch of `--brand`.

use tower_lsp::lsp_types::{Color as LspColor, ColorInformation, ColorPresentation, Range, TextEdit};

use crate::css::color::{Color, ColorClassifier};
use crate::css::constants::VAR_FUNCTION_OPEN;
use crate::css::variable_resolver::VariableResolver;
use crate::css::variable_table::VariableExtraction;

/// Color information provider for declarations
pub struct VariableColorProvider {
    classifier: ColorClassifier,
}

impl VariableColorProvider {
    pub fn new(classifier: ColorClassifier) -> Self {
        Self { classifier }
    }

    /// One color decoration per declaration that resolves to a parseable color
    pub fn provide_document_colors(&self, extraction: &VariableExtraction) -> Vec<ColorInformation> {
        let resolver = VariableResolver::new(extraction);

        extraction
            .sites()
            .filter_map(|(name, selector, site)| {
                let status = resolver.resolve_variable(name, selector)?;
                let value = status.value()?;
                if !self.classifier.is_color(value) {
                    return None;
                }
                let color = Color::parse(value)?;

                Some(ColorInformation {
                    range: site.value_range,
                    color: LspColor {
                        red: color.r as f32 / 255.0,
                        green: color.g as f32 / 255.0,
                        blue: color.b as f32 / 255.0,
                        alpha: color.a,
                    },
                })
            })
            .collect()
    }

    /// Provide color presentations for a given color
    ///
    /// `current` is the text under `range`. A value built from `var()` keeps its
    /// reference, so its presentations carry no text edit.
    pub fn provide_color_presentations(
        &self,
        color: &LspColor,
        range: Range,
        current: Option<&str>,
    ) -> Vec<ColorPresentation> {
        let editable = !current.is_some_and(|text| text.contains(VAR_FUNCTION_OPEN));
        let value = Color::new_rgba(
            (color.red * 255.0).round() as u8,
            (color.green * 255.0).round() as u8,
            (color.blue * 255.0).round() as u8,
            color.alpha,
        );

        let hex = if color.alpha == 1.0 {
            value.to_hex()
        } else {
            value.to_hex_with_alpha()
        };

        [hex, value.to_string()]
            .into_iter()
            .map(|label| ColorPresentation {
                text_edit: editable.then(|| TextEdit {
                    range,
                    new_text: label.clone(),
                }),
                label,
                additional_text_edits: None,
            })
            .collect()
    }
}
