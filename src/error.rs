//! Error types for the viewer's host surfaces
//!
//! Extraction and resolution never fail: missing data shows up as empty tables
//! or `Unresolved`. These errors cover what sits around the core: reading
//! stylesheets, parsing settings and serving commands.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for viewer operations
#[derive(Error, Debug)]
pub enum ViewerError {
    /// IO errors (reading stylesheets, log files, etc.)
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing/serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Input file could not be found
    #[error("File not found: {path:?}")]
    FileNotFound { path: PathBuf },

    /// Document language is not handled by the configuration
    #[error("Unsupported language '{language_id}', expected a stylesheet")]
    UnsupportedLanguage { language_id: String },

    /// Document is not open in the session
    #[error("Document not found: {uri}")]
    DocumentNotFound { uri: String },

    /// No document was opened or edited yet
    #[error("No active document")]
    NoActiveDocument,

    /// Variable is not declared under the selector
    #[error("Variable '{variable}' is not declared under '{selector}'")]
    VariableNotFound { variable: String, selector: String },

    /// Command arguments are missing or malformed
    #[error("Invalid arguments for '{command}': {message}")]
    InvalidArguments { command: String, message: String },

    /// Command is not provided by this server
    #[error("Unknown command '{command}'")]
    UnknownCommand { command: String },
}

/// Result type alias for viewer operations
pub type ViewerResult<T> = Result<T, ViewerError>;

impl From<std::io::Error> for ViewerError {
    fn from(err: std::io::Error) -> Self {
        ViewerError::Io {
            source: err,
            message: "IO operation failed".to_string(),
        }
    }
}

impl From<serde_json::Error> for ViewerError {
    fn from(err: serde_json::Error) -> Self {
        ViewerError::Json {
            source: err,
            message: "JSON operation failed".to_string(),
        }
    }
}

/// Helper trait for converting IO errors with context
pub trait IoContext<T> {
    fn with_io_context(self, message: &str) -> ViewerResult<T>;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn with_io_context(self, message: &str) -> ViewerResult<T> {
        self.map_err(|e| ViewerError::Io {
            message: message.to_string(),
            source: e,
        })
    }
}

/// Helper trait for converting JSON errors with context
pub trait JsonContext<T> {
    fn with_json_context(self, message: &str) -> ViewerResult<T>;
}

impl<T> JsonContext<T> for Result<T, serde_json::Error> {
    fn with_json_context(self, message: &str) -> ViewerResult<T> {
        self.map_err(|e| ViewerError::Json {
            message: message.to_string(),
            source: e,
        })
    }
}
