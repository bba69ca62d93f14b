//! CSS Variable Constants
//!
//! Selector names, limits, patterns and command identifiers shared across the
//! extractor, resolver and language server.

/// Reserved context consulted when a variable is missing from the declaring selector
pub const ROOT_SELECTOR: &str = ":root";

/// Resolution depth after which a `var()` chain is reported as unresolved
pub const MAX_RESOLUTION_DEPTH: usize = 10;

/// Prefix shared by every custom property name
pub const CUSTOM_PROPERTY_PREFIX: &str = "--";

/// Function name of a variable reference
pub const VAR_FUNCTION_OPEN: &str = "var(";

// Patterns

/// Root-like selector, anchored at the end of a block prelude.
/// Selector characters, then `:root`, then class-like or attribute suffixes.
pub const ROOT_SELECTOR_PATTERN: &str = r"[A-Za-z0-9_\s\-\[\]=]*:root(?:[.A-Za-z0-9_\-]|\[[^\[\]{}]*\])*\s*$";

/// Custom property declaration inside a root block body, ASCII names only
pub const DECLARATION_PATTERN: &str = r"--([A-Za-z0-9_-]+)\s*:\s*([^;]+);";

/// Custom property declaration at the start of an editor line (cursor focus)
pub const LINE_DECLARATION_PATTERN: &str = r"--[A-Za-z0-9_-]+\s?:";

// Language ids

/// Language ids handled when no configuration is provided
pub const DEFAULT_LANGUAGE_IDS: &[&str] = &["css", "less"];

// Commands

/// Returns the variable report of a document
pub const COMMAND_SHOW_VARIABLES: &str = "cssVariableViewer.showVariables";
/// Returns the location of a variable declared under a selector
pub const COMMAND_LOCATE_DECLARATION: &str = "cssVariableViewer.locateDeclaration";
/// Returns the variable declared on a given line, if any
pub const COMMAND_FOCUS_VARIABLE: &str = "cssVariableViewer.focusVariable";

/// All commands advertised by the server
pub const ALL_COMMANDS: &[&str] = &[
    COMMAND_SHOW_VARIABLES,
    COMMAND_LOCATE_DECLARATION,
    COMMAND_FOCUS_VARIABLE,
];
