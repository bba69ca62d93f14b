//! Navigation between the variable tables and the stylesheet text
//!
//! Covers three lookups: from a (selector, variable) cell back to its declaration,
//! from an editor line to the variable it declares, and from a `var()` reference
//! under the cursor to the declaration it resolves to.

use std::sync::LazyLock;

use regex::Regex;
use tower_lsp::lsp_types::{Position, Range};

use crate::css::constants::{LINE_DECLARATION_PATTERN, ROOT_SELECTOR, VAR_FUNCTION_OPEN};
use crate::css::variable_table::{RootBlock, VariableExtraction};
use crate::language::text_position::{range_contains, LineIndex};

static LINE_DECLARATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(LINE_DECLARATION_PATTERN).expect("Failed to compile line declaration regex")
});

/// Range of the declaration of `variable` stored under exactly `selector`
pub fn find_declaration(extraction: &VariableExtraction, selector: &str, variable: &str) -> Option<Range> {
    extraction.site(variable, selector).map(|site| site.range)
}

/// Line of `variable` declared under `selector`, found by scanning the text
///
/// The block span starts at the first line containing the selector and ends at
/// the next line containing `}`. The first line of that span containing
/// `<variable>:` is returned. Finds declarations the extraction skipped.
pub fn find_declaration_line(content: &str, selector: &str, variable: &str) -> Option<u32> {
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.iter().position(|line| line.contains(selector))?;
    let end = start + lines[start..].iter().position(|line| line.contains('}'))?;

    let needle = format!("{}:", variable);
    (start..=end)
        .find(|&i| lines[i].contains(needle.as_str()))
        .map(|i| i as u32)
}

/// Name of the variable declared on a line, like `--main` for `  --main: red;`
pub fn declared_variable_in_line(line: &str) -> Option<&str> {
    let declaration = LINE_DECLARATION_REGEX.find(line)?;
    Some(declaration.as_str().trim_end_matches(':').trim_end())
}

/// Root block whose range contains `position`
pub fn enclosing_block(extraction: &VariableExtraction, position: Position) -> Option<&RootBlock> {
    extraction
        .blocks()
        .iter()
        .find(|block| range_contains(&block.range, position))
}

/// Variable name referenced by the `var(--name` call under `offset`
pub fn reference_at_offset(content: &str, offset: usize) -> Option<&str> {
    let offset = offset.min(content.len());
    let line_start = content[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = content[offset..]
        .find('\n')
        .map(|i| offset + i)
        .unwrap_or(content.len());
    let line = &content[line_start..line_end];
    let cursor = offset - line_start;

    let mut search_from = 0;
    while let Some(found) = line[search_from..].find(VAR_FUNCTION_OPEN) {
        let call_start = search_from + found;
        let name_start = call_start + VAR_FUNCTION_OPEN.len();
        let rest = &line[name_start..];
        let name_len = rest
            .trim_start()
            .find(|ch: char| ch == ',' || ch == ')' || ch.is_whitespace())
            .unwrap_or(rest.trim_start().len());
        let leading = rest.len() - rest.trim_start().len();
        let name_end = name_start + leading + name_len;

        if cursor >= call_start && cursor <= name_end {
            let name = &line[name_start + leading..name_end];
            return name.starts_with("--").then_some(name);
        }
        search_from = name_start;
    }
    None
}

/// Declaration range a `var()` reference at `position` points to
///
/// The reference is looked up under the selector of the enclosing root block,
/// then under `:root`.
pub fn definition_at(
    extraction: &VariableExtraction,
    content: &str,
    index: &LineIndex,
    position: Position,
) -> Option<Range> {
    let offset = index.offset(content, position)?;
    let name = reference_at_offset(content, offset)?;

    enclosing_block(extraction, position)
        .and_then(|block| find_declaration(extraction, &block.selector, name))
        .or_else(|| find_declaration(extraction, ROOT_SELECTOR, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::extractor::extract_variables;

    const THEMES: &str = ":root {\n  --main: #336699;\n  --gap: 4px;\n}\n:root[data-theme=\"dark\"] {\n  --main: var(--accent, #000);\n  --text: var(--main);\n}\n";

    #[test]
    fn test_find_declaration_exact() {
        let extraction = extract_variables(THEMES);

        let range = find_declaration(&extraction, ":root[data-theme=\"dark\"]", "--main").unwrap();
        assert_eq!(range.start, Position { line: 5, character: 2 });

        let range = find_declaration(&extraction, ":root", "--gap").unwrap();
        assert_eq!(range.start.line, 2);

        assert!(find_declaration(&extraction, ":root", "--text").is_none());
    }

    #[test]
    fn test_find_declaration_line_by_scan() {
        assert_eq!(find_declaration_line(THEMES, ":root", "--gap"), Some(2));
        assert_eq!(find_declaration_line(THEMES, "[data-theme=\"dark\"]", "--text"), Some(6));
        assert_eq!(find_declaration_line(THEMES, ":root", "--text"), None);
        assert_eq!(find_declaration_line(THEMES, ".missing", "--gap"), None);
    }

    #[test]
    fn test_declared_variable_in_line() {
        assert_eq!(declared_variable_in_line("  --main-color: red;"), Some("--main-color"));
        assert_eq!(declared_variable_in_line("--gap :4px;"), Some("--gap"));
        assert_eq!(declared_variable_in_line("  color: var(--main);"), None);
    }

    #[test]
    fn test_reference_at_offset() {
        let line = "color: var(--main, red);";
        let offset = line.find("main").unwrap();
        assert_eq!(reference_at_offset(line, offset), Some("--main"));
        assert_eq!(reference_at_offset(line, 0), None);
        assert_eq!(reference_at_offset("a: var(x);", 8), None);
    }

    #[test]
    fn test_definition_prefers_enclosing_block() {
        let extraction = extract_variables(THEMES);
        let index = LineIndex::new(THEMES);

        // `var(--main)` inside the dark block points at the dark declaration
        let target = definition_at(&extraction, THEMES, &index, Position { line: 6, character: 17 }).unwrap();
        assert_eq!(target.start.line, 5);

        // `var(--accent, ...)` is declared nowhere
        assert!(definition_at(&extraction, THEMES, &index, Position { line: 5, character: 16 }).is_none());
    }
}
