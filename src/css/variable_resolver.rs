//! Variable resolution for CSS custom properties.
//!
//! Resolves a raw declared value by following `var(--name, fallback)` references
//! through the context table:
//!
//! - **Context lookup**: a reference is looked up in the selector the value was
//!   declared under, then in `:root`, then the reference's fallback is used.
//! - **Literal values**: anything that is not exactly one `var(...)` call is
//!   returned as is, including values that merely contain a `var()`.
//! - **Cycles**: chains deeper than [`MAX_RESOLUTION_DEPTH`] resolve to
//!   `Unresolved`, which also covers self references and mutual cycles.
//!
//! Resolution reads the table only and caches nothing.

use crate::css::constants::{CUSTOM_PROPERTY_PREFIX, MAX_RESOLUTION_DEPTH, VAR_FUNCTION_OPEN};
use crate::css::variable_table::VariableExtraction;

/// Status of a variable's resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableResolutionStatus {
    /// Value resolved to a literal
    Resolved(String),
    /// Missing reference without fallback, empty value, or depth bound exceeded
    Unresolved,
}

impl VariableResolutionStatus {
    /// The resolved literal, if any
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Unresolved => None,
        }
    }
}

/// A parsed `var(<name>[, <fallback>])` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarReference<'a> {
    pub name: &'a str,
    pub fallback: Option<&'a str>,
}

impl<'a> VarReference<'a> {
    /// Parse a value that consists of exactly one `var(...)` call
    ///
    /// The parenthesis opened by `var(` must close at the last character, so
    /// `var(--a) var(--b)` is not a reference. The name and the fallback are split
    /// at the first comma outside nested parentheses.
    pub fn parse(value: &'a str) -> Option<Self> {
        let value = value.trim();
        let inner = value.strip_prefix(VAR_FUNCTION_OPEN)?.strip_suffix(')')?;
        if inner.is_empty() || !is_balanced(inner) {
            return None;
        }

        match top_level_comma(inner) {
            Some(comma) => Some(Self {
                name: inner[..comma].trim(),
                fallback: Some(inner[comma + 1..].trim()),
            }),
            None => Some(Self {
                name: inner.trim(),
                fallback: None,
            }),
        }
    }
}

/// Check that parentheses never close below depth zero and end at depth zero
fn is_balanced(text: &str) -> bool {
    let mut depth = 0usize;
    for ch in text.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    depth == 0
}

/// Byte offset of the first comma not nested in parentheses
fn top_level_comma(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

/// Resolves raw values against the context table of one extraction
#[derive(Debug, Clone, Copy)]
pub struct VariableResolver<'a> {
    extraction: &'a VariableExtraction,
}

impl<'a> VariableResolver<'a> {
    /// Create a resolver reading from `extraction`
    pub fn new(extraction: &'a VariableExtraction) -> Self {
        Self { extraction }
    }

    /// Resolve a raw value declared under `selector`
    pub fn resolve(&self, value: &str, selector: &str) -> VariableResolutionStatus {
        self.resolve_at_depth(value, selector, 0)
    }

    /// Resolve the value stored for `name` under exactly `selector`
    ///
    /// Returns `None` when the variable is not declared under that selector.
    pub fn resolve_variable(&self, name: &str, selector: &str) -> Option<VariableResolutionStatus> {
        let raw = self.extraction.raw_value(name, selector)?;
        Some(self.resolve(raw, selector))
    }

    /// Depth-bounded resolution step
    pub fn resolve_at_depth(&self, value: &str, selector: &str, depth: usize) -> VariableResolutionStatus {
        if depth > MAX_RESOLUTION_DEPTH {
            return VariableResolutionStatus::Unresolved;
        }

        let Some(reference) = VarReference::parse(value) else {
            return VariableResolutionStatus::Resolved(value.to_string());
        };

        if !reference.name.starts_with(CUSTOM_PROPERTY_PREFIX) {
            return match reference.fallback {
                Some(fallback) => VariableResolutionStatus::Resolved(fallback.to_string()),
                None => VariableResolutionStatus::Unresolved,
            };
        }

        let next = self
            .extraction
            .lookup(reference.name, selector)
            .or(reference.fallback);

        match next {
            Some(next) if !next.is_empty() => self.resolve_at_depth(next, selector, depth + 1),
            _ => VariableResolutionStatus::Unresolved,
        }
    }
}

/// Resolve `value` declared under `selector` against `extraction`, starting at depth 0
pub fn resolve(extraction: &VariableExtraction, value: &str, selector: &str) -> VariableResolutionStatus {
    VariableResolver::new(extraction).resolve(value, selector)
}
