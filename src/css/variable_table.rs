//! Variable tables produced by one extraction pass.
//!
//! The same facts are kept in two views: by variable name (the row axis of the
//! report) and by selector (used for context lookups while resolving). Both views
//! are only written through [`VariableExtraction::insert`] so they never disagree.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use tower_lsp::lsp_types::Range;

use crate::css::constants::ROOT_SELECTOR;

/// Selector → raw value, in first-declaration order
pub type SelectorValues = IndexMap<String, String>;

/// Variable name → raw value, in first-declaration order
pub type ContextValues = IndexMap<String, String>;

/// Variable name → (selector → raw value)
pub type VariableTable = IndexMap<String, SelectorValues>;

/// Selector → (variable name → raw value)
pub type ContextTable = IndexMap<String, ContextValues>;

/// Where a stored declaration came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeclarationSite {
    /// Range of the whole declaration, from `--` to the terminating `;`
    pub range: Range,
    /// Range of the raw value (already trimmed)
    pub value_range: Range,
}

/// A root-like rule block matched in the source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootBlock {
    /// Selector text, trimmed
    pub selector: String,
    /// Range from the start of the selector to the closing brace (inclusive)
    pub range: Range,
}

/// Result of extracting custom properties from a stylesheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableExtraction {
    variables: VariableTable,
    contexts: ContextTable,
    selectors: Vec<String>,
    sites: IndexMap<(String, String), DeclarationSite>,
    blocks: Vec<RootBlock>,
}

impl VariableExtraction {
    /// Create an empty extraction
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration in both views, overwriting an earlier value for the same pair
    pub(crate) fn insert(
        &mut self,
        name: String,
        selector: String,
        value: String,
        site: DeclarationSite,
    ) {
        self.variables
            .entry(name.clone())
            .or_default()
            .insert(selector.clone(), value.clone());
        self.contexts
            .entry(selector.clone())
            .or_default()
            .insert(name.clone(), value);
        self.sites.insert((name, selector), site);
    }

    pub(crate) fn push_block(&mut self, block: RootBlock) {
        self.blocks.push(block);
    }

    /// Rebuild the selector set from the variable table
    pub(crate) fn finish(&mut self) {
        let selectors: IndexSet<&String> = self
            .variables
            .values()
            .flat_map(|values| values.keys())
            .collect();
        self.selectors = selectors.into_iter().cloned().collect();
    }

    /// Variable name → selector → raw value
    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Selector → variable name → raw value
    pub fn contexts(&self) -> &ContextTable {
        &self.contexts
    }

    /// Ordered, de-duplicated selectors that hold at least one variable
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// Root blocks in source order, including blocks without declarations
    pub fn blocks(&self) -> &[RootBlock] {
        &self.blocks
    }

    /// Raw value declared for `name` under exactly `selector`
    pub fn raw_value(&self, name: &str, selector: &str) -> Option<&str> {
        self.contexts
            .get(selector)
            .and_then(|values| values.get(name))
            .map(String::as_str)
    }

    /// Raw value for `name` under `selector`, falling back to `:root`
    pub fn lookup(&self, name: &str, selector: &str) -> Option<&str> {
        self.raw_value(name, selector)
            .or_else(|| self.raw_value(name, ROOT_SELECTOR))
    }

    /// Source location of the stored declaration for (`name`, `selector`)
    pub fn site(&self, name: &str, selector: &str) -> Option<&DeclarationSite> {
        self.sites.get(&(name.to_string(), selector.to_string()))
    }

    /// All declarations with their selector, in insertion order
    pub fn sites(&self) -> impl Iterator<Item = (&str, &str, &DeclarationSite)> {
        self.sites
            .iter()
            .map(|((name, selector), site)| (name.as_str(), selector.as_str(), site))
    }

    /// Whether no variable was found
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
