//! Custom property extraction for CSS and LESS stylesheets.
//!
//! Finds every rule block whose selector is root-like (`:root`, `html:root`,
//! `:root.dark`, `:root[data-theme="dark"]`, ...) and records each `--name: value;`
//! declaration found in its body under that selector.
//!
//! Blocks are delimited with a brace depth counter, so a nested block inside a
//! root rule does not cut the body short. This is still not a CSS parser: braces
//! inside comments or strings are counted like any other brace, and an
//! unterminated block runs to the end of the text. Whole `//` comment lines in
//! front of a selector (LESS) are left out of it.

use std::sync::LazyLock;

use regex::Regex;

use crate::css::constants::{DECLARATION_PATTERN, ROOT_SELECTOR_PATTERN};
use crate::css::variable_table::{DeclarationSite, RootBlock, VariableExtraction};
use crate::language::text_position::LineIndex;

static ROOT_SELECTOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ROOT_SELECTOR_PATTERN).expect("Failed to compile root selector regex")
});

static DECLARATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DECLARATION_PATTERN).expect("Failed to compile declaration regex")
});

/// Extract the variable and context tables from stylesheet text
///
/// Every call starts from empty tables. Text without root-like blocks gives an
/// empty extraction.
pub fn extract_variables(source: &str) -> VariableExtraction {
    let index = LineIndex::new(source);
    let mut extraction = VariableExtraction::new();
    let bytes = source.as_bytes();

    let mut prelude_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                let body_end = find_closing_brace(bytes, i + 1);
                let selector_from = prelude_start + skip_line_comments(&source[prelude_start..i]);
                let prelude = &source[selector_from..i];

                if let Some(selector_match) = ROOT_SELECTOR_REGEX.find(prelude) {
                    let raw_selector = selector_match.as_str();
                    let selector = raw_selector.trim();
                    let leading = raw_selector.len() - raw_selector.trim_start().len();
                    let selector_start = selector_from + selector_match.start() + leading;
                    let block_end = (body_end + 1).min(bytes.len());

                    extraction.push_block(RootBlock {
                        selector: selector.to_string(),
                        range: index.range(source, selector_start, block_end),
                    });
                    collect_declarations(source, &index, i + 1, body_end, selector, &mut extraction);

                    i = block_end;
                    prelude_start = block_end;
                    continue;
                }

                // Not a root rule, look for root rules nested inside it
                prelude_start = i + 1;
            }
            b'}' | b';' => prelude_start = i + 1,
            _ => {}
        }
        i += 1;
    }

    extraction.finish();
    log::debug!(
        "Extracted {} variables from {} root blocks",
        extraction.variables().len(),
        extraction.blocks().len()
    );
    extraction
}

/// Length of the part of a prelude up to the end of its last `//` comment line
fn skip_line_comments(prelude: &str) -> usize {
    let mut offset = 0;
    let mut skip = 0;
    for line in prelude.split_inclusive('\n') {
        offset += line.len();
        if line.trim_start().starts_with("//") {
            skip = offset;
        }
    }
    skip
}

/// Find the `}` closing a block whose body starts at `from`
///
/// Returns the text length when the block is never closed.
fn find_closing_brace(bytes: &[u8], from: usize) -> usize {
    let mut depth = 1usize;
    for (offset, byte) in bytes[from..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return from + offset;
                }
            }
            _ => {}
        }
    }
    bytes.len()
}

/// Scan a root block body for `--name: value;` declarations
fn collect_declarations(
    source: &str,
    index: &LineIndex,
    body_start: usize,
    body_end: usize,
    selector: &str,
    extraction: &mut VariableExtraction,
) {
    let body = &source[body_start..body_end];

    for captures in DECLARATION_REGEX.captures_iter(body) {
        let (Some(whole), Some(name), Some(value)) = (captures.get(0), captures.get(1), captures.get(2)) else {
            continue;
        };

        let raw_value = value.as_str();
        let trimmed = raw_value.trim();
        let value_start = body_start + value.start() + (raw_value.len() - raw_value.trim_start().len());

        let site = DeclarationSite {
            range: index.range(source, body_start + whole.start(), body_start + whole.end()),
            value_range: index.range(source, value_start, value_start + trimmed.len()),
        };

        extraction.insert(
            format!("--{}", name.as_str()),
            selector.to_string(),
            trimmed.to_string(),
            site,
        );
    }
}
