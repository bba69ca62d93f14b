//! Variable report
//!
//! The tabular view of one extraction: selectors as columns, one row per variable
//! in first-declaration order, each cell carrying the raw value, its resolution
//! and whether it is a color. Serialized as JSON for the `showVariables` command
//! and rendered as plain text by the command line.

use std::fmt::Write;

use serde::Serialize;

use crate::css::color::ColorClassifier;
use crate::css::variable_resolver::VariableResolver;
use crate::css::variable_table::VariableExtraction;

/// One (variable, selector) cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableCell {
    /// Raw declared value
    pub raw: String,
    /// Resolved value, only when resolution succeeded and differs from `raw`
    pub resolved: Option<String>,
    /// Whether the final value (resolved, or raw when it is already a literal) is a color
    pub is_color: bool,
    /// Zero-based line of the declaration
    pub line: Option<u32>,
}

/// One variable with a cell per selector column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableRow {
    pub name: String,
    /// Same length and order as [`VariableReport::selectors`], `None` where undeclared
    pub cells: Vec<Option<VariableCell>>,
}

/// The full table for a document
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct VariableReport {
    pub selectors: Vec<String>,
    pub rows: Vec<VariableRow>,
}

impl VariableReport {
    /// Build the report for an extraction
    pub fn build(extraction: &VariableExtraction, classifier: &ColorClassifier) -> Self {
        let resolver = VariableResolver::new(extraction);
        let selectors = extraction.selectors().to_vec();

        let rows = extraction
            .variables()
            .iter()
            .map(|(name, values)| {
                let cells = selectors
                    .iter()
                    .map(|selector| {
                        let raw = values.get(selector)?;
                        let status = resolver.resolve(raw, selector);
                        let is_color = status.value().is_some_and(|value| classifier.is_color(value));
                        let resolved = status
                            .value()
                            .filter(|value| value != raw)
                            .map(str::to_string);

                        Some(VariableCell {
                            raw: raw.clone(),
                            resolved,
                            is_color,
                            line: extraction.site(name, selector).map(|site| site.range.start.line),
                        })
                    })
                    .collect();

                VariableRow {
                    name: name.clone(),
                    cells,
                }
            })
            .collect();

        Self { selectors, rows }
    }

    /// Keep only rows whose name contains `filter`, ignoring case
    pub fn filter(mut self, filter: &str) -> Self {
        let needle = filter.to_lowercase();
        self.rows.retain(|row| row.name.to_lowercase().contains(&needle));
        self
    }

    /// Row for a variable name
    pub fn row(&self, name: &str) -> Option<&VariableRow> {
        self.rows.iter().find(|row| row.name == name)
    }

    /// Cell for a variable under a selector
    pub fn cell(&self, name: &str, selector: &str) -> Option<&VariableCell> {
        let column = self.selectors.iter().position(|s| s == selector)?;
        self.row(name)?.cells.get(column)?.as_ref()
    }

    /// Render as aligned plain text, one row per variable
    pub fn render_text(&self) -> String {
        let mut header = vec!["Variable".to_string()];
        header.extend(self.selectors.iter().cloned());

        let mut lines: Vec<Vec<String>> = vec![header];
        for row in &self.rows {
            let mut line = vec![row.name.clone()];
            line.extend(row.cells.iter().map(|cell| match cell {
                Some(cell) => cell.display(),
                None => String::new(),
            }));
            lines.push(line);
        }

        let columns = self.selectors.len() + 1;
        let widths: Vec<usize> = (0..columns)
            .map(|column| {
                lines
                    .iter()
                    .map(|line| line[column].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut output = String::new();
        for line in &lines {
            let mut text = String::new();
            for (column, value) in line.iter().enumerate() {
                let padding = widths[column] - value.chars().count();
                let _ = write!(text, "{}{}  ", value, " ".repeat(padding));
            }
            output.push_str(text.trim_end());
            output.push('\n');
        }
        output
    }
}

impl VariableCell {
    /// Raw value with a color marker and the resolved value when it differs
    pub fn display(&self) -> String {
        let mut text = String::new();
        if self.is_color {
            text.push_str("● ");
        }
        text.push_str(&self.raw);
        if let Some(resolved) = &self.resolved {
            let _ = write!(text, " (resolved: {})", resolved);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::color::ColorHeuristic;
    use crate::css::extractor::extract_variables;

    const THEMES: &str = r#"
:root { --main: #336699; --gap: 4px; }
:root[data-theme="dark"] { --main: var(--accent, #000); }
"#;

    #[test]
    fn test_report_columns_and_rows() {
        let extraction = extract_variables(THEMES);
        let report = VariableReport::build(&extraction, &ColorClassifier::default());

        assert_eq!(report.selectors, vec![":root", ":root[data-theme=\"dark\"]"]);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].name, "--main");
        assert_eq!(report.rows[1].name, "--gap");
        assert_eq!(report.rows[1].cells.len(), 2);
        assert!(report.rows[1].cells[1].is_none());
    }

    #[test]
    fn test_report_cells() {
        let extraction = extract_variables(THEMES);
        let report = VariableReport::build(&extraction, &ColorClassifier::new(ColorHeuristic::Named));

        let root = report.cell("--main", ":root").unwrap();
        assert_eq!(root.raw, "#336699");
        assert_eq!(root.resolved, None);
        assert!(root.is_color);
        assert_eq!(root.line, Some(1));

        let dark = report.cell("--main", ":root[data-theme=\"dark\"]").unwrap();
        assert_eq!(dark.raw, "var(--accent, #000)");
        assert_eq!(dark.resolved.as_deref(), Some("#000"));
        assert!(dark.is_color);

        let gap = report.cell("--gap", ":root").unwrap();
        assert!(!gap.is_color);
    }

    #[test]
    fn test_report_filter() {
        let extraction = extract_variables(THEMES);
        let report = VariableReport::build(&extraction, &ColorClassifier::default()).filter("MA");

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].name, "--main");
        assert_eq!(report.selectors.len(), 2);
    }

    #[test]
    fn test_render_text() {
        let extraction = extract_variables(THEMES);
        let text = VariableReport::build(&extraction, &ColorClassifier::default()).render_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Variable"));
        assert!(lines[1].contains("● var(--accent, #000) (resolved: #000)"));
        assert!(lines[2].starts_with("--gap"));
        assert!(lines[2].ends_with("4px"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let extraction = extract_variables(":root { --a: red; }");
        let report = VariableReport::build(&extraction, &ColorClassifier::default());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["selectors"][0], ":root");
        assert_eq!(json["rows"][0]["cells"][0]["isColor"], true);
    }
}
