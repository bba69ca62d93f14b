//! CSS Variable Viewer Library
//!
//! Extracts CSS custom properties grouped by their `:root`-like selector, resolves
//! `var()` references across those contexts, and flags color values.

pub mod cli;
pub mod config;
pub mod css;
pub mod error;
pub mod language;
pub mod logging;

pub use css::color::is_color;
pub use css::extractor::extract_variables;
pub use css::variable_resolver::{resolve, VariableResolutionStatus};
pub use css::variable_table::VariableExtraction;
