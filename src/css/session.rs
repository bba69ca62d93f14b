//! Viewer Session
//!
//! Owns the open stylesheet documents, the active document and the configuration.
//! Handlers receive the session explicitly instead of reaching for shared globals.

use std::collections::HashMap;

use tower_lsp::lsp_types::{Location, Position, Range, Url};

use crate::config::ViewerConfig;
use crate::css::color::ColorClassifier;
use crate::css::document::CssDocument;
use crate::css::navigation::{declared_variable_in_line, find_declaration, find_declaration_line};
use crate::css::report::VariableReport;
use crate::error::{ViewerError, ViewerResult};

/// Documents and settings of one editor connection
#[derive(Debug, Default)]
pub struct ViewerSession {
    documents: HashMap<Url, CssDocument>,
    active: Option<Url>,
    config: ViewerConfig,
}

impl ViewerSession {
    /// Create an empty session
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            documents: HashMap::new(),
            active: None,
            config,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Replace the configuration, documents are kept
    pub fn set_config(&mut self, config: ViewerConfig) {
        self.config = config;
    }

    pub fn color_classifier(&self) -> ColorClassifier {
        ColorClassifier::new(self.config.color_heuristic)
    }

    /// Open a document and make it active
    ///
    /// Fails for language ids the configuration does not handle.
    pub fn open_document(&mut self, uri: Url, language_id: &str, content: String, version: i32) -> ViewerResult<()> {
        if !self.config.handles_language(language_id) {
            return Err(ViewerError::UnsupportedLanguage {
                language_id: language_id.to_string(),
            });
        }

        let document = CssDocument::new(uri.clone(), language_id.to_string(), content, version);
        log::info!(
            "Opened {} with {} variables in {} contexts",
            uri,
            document.extraction().variables().len(),
            document.extraction().selectors().len()
        );
        self.documents.insert(uri.clone(), document);
        self.active = Some(uri);
        Ok(())
    }

    /// Replace the content of an open document and make it active
    pub fn update_document(&mut self, uri: &Url, content: String, version: i32) -> ViewerResult<()> {
        let document = self
            .documents
            .get_mut(uri)
            .ok_or_else(|| ViewerError::DocumentNotFound { uri: uri.to_string() })?;
        document.replace_content(content, version);
        log::debug!(
            "Updated {} to version {} with {} variables",
            uri,
            document.version(),
            document.extraction().variables().len()
        );
        self.active = Some(uri.clone());
        Ok(())
    }

    /// Close a document, clearing the active document if it was this one
    pub fn close_document(&mut self, uri: &Url) {
        self.documents.remove(uri);
        if self.active.as_ref() == Some(uri) {
            self.active = None;
        }
    }

    pub fn get_document(&self, uri: &Url) -> Option<&CssDocument> {
        self.documents.get(uri)
    }

    /// The most recently opened or edited document
    pub fn active_document(&self) -> Option<&CssDocument> {
        self.active.as_ref().and_then(|uri| self.documents.get(uri))
    }

    /// Document for `uri`, or the active document when `uri` is `None`
    fn target_document(&self, uri: Option<&Url>) -> ViewerResult<&CssDocument> {
        match uri {
            Some(uri) => self
                .get_document(uri)
                .ok_or_else(|| ViewerError::DocumentNotFound { uri: uri.to_string() }),
            None => self.active_document().ok_or(ViewerError::NoActiveDocument),
        }
    }

    /// Variable report of a document, optionally filtered by name
    pub fn report(&self, uri: Option<&Url>, filter: Option<&str>) -> ViewerResult<VariableReport> {
        let document = self.target_document(uri)?;
        let report = VariableReport::build(document.extraction(), &self.color_classifier());
        Ok(match filter {
            Some(filter) => report.filter(filter),
            None => report,
        })
    }

    /// Location of `variable` declared under `selector`
    ///
    /// Declarations the extraction skipped, like one missing its `;`, are still
    /// found by scanning the block text and located as a whole line.
    pub fn locate_declaration(&self, uri: Option<&Url>, selector: &str, variable: &str) -> ViewerResult<Location> {
        let document = self.target_document(uri)?;
        let range = find_declaration(document.extraction(), selector, variable)
            .or_else(|| {
                let line = find_declaration_line(document.content(), selector, variable)?;
                let text = document.line_index().line_text(document.content(), line)?;
                Some(Range {
                    start: Position { line, character: 0 },
                    end: Position {
                        line,
                        character: text.chars().count() as u32,
                    },
                })
            })
            .ok_or_else(|| ViewerError::VariableNotFound {
                variable: variable.to_string(),
                selector: selector.to_string(),
            })?;

        Ok(Location {
            uri: document.uri.clone(),
            range,
        })
    }

    /// Variable declared on `line`, used to focus its row
    pub fn variable_on_line(&self, uri: Option<&Url>, line: u32) -> ViewerResult<Option<String>> {
        let document = self.target_document(uri)?;
        Ok(document
            .line_index()
            .line_text(document.content(), line)
            .and_then(declared_variable_in_line)
            .map(str::to_string))
    }
}
