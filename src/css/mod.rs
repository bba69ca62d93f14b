//! CSS custom property (variable) support
//!
//! Extracts `--name: value;` declarations from root-like rule blocks, resolves
//! `var()` chains per selector context, and serves the result to editors:
//! - regex and brace-depth scanning instead of a full CSS parser
//! - tower-lsp for Language Server Protocol implementation

pub mod color;
pub mod color_keywords;
pub mod color_provider;
pub mod commands;
pub mod constants;
pub mod document;
pub mod extractor;
pub mod hover;
pub mod navigation;
pub mod report;
pub mod server;
pub mod session;
pub mod variable_resolver;
pub mod variable_table;

#[cfg(test)]
mod extractor_tests;
#[cfg(test)]
mod session_tests;
