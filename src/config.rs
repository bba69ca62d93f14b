//! Viewer configuration
//!
//! Read from the client's `initializationOptions` and from
//! `workspace/didChangeConfiguration` settings. Every key is optional.
//!
//! ```json
//! {
//!     "languages": ["css", "less", "scss"],
//!     "colorHeuristic": "named",
//!     "logLevel": "debug"
//! }
//! ```

use std::fs;
use std::path::Path;

use log::LevelFilter;
use serde::Deserialize;
use serde_json::Value;

use crate::css::color::ColorHeuristic;
use crate::css::constants::DEFAULT_LANGUAGE_IDS;
use crate::error::{IoContext, JsonContext, ViewerError, ViewerResult};

/// Settings of the viewer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewerConfig {
    /// Language ids whose documents are processed
    pub languages: Vec<String>,
    /// How bare words are classified as colors
    pub color_heuristic: ColorHeuristic,
    /// Log level name (`error`, `warn`, `info`, `debug`, `trace`, `off`)
    pub log_level: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGE_IDS.iter().map(|id| id.to_string()).collect(),
            color_heuristic: ColorHeuristic::default(),
            log_level: None,
        }
    }
}

impl ViewerConfig {
    /// Parse settings, accepting either the settings object itself or one nested
    /// under a `cssVariableViewer` key
    pub fn from_value(value: Value) -> ViewerResult<Self> {
        let value = match value {
            Value::Object(mut map) if map.contains_key("cssVariableViewer") => {
                map.remove("cssVariableViewer").unwrap_or(Value::Null)
            }
            other => other,
        };

        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value).with_json_context("Invalid viewer configuration")
    }

    /// Parse settings, falling back to defaults with a warning
    pub fn from_value_or_default(value: Option<Value>) -> Self {
        let Some(value) = value else {
            return Self::default();
        };

        match Self::from_value(value) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Read settings from a JSON file
    pub fn load(path: &Path) -> ViewerResult<Self> {
        if !path.exists() {
            return Err(ViewerError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path).with_io_context("Failed to read configuration")?;
        let value: Value = serde_json::from_str(&text).with_json_context("Failed to parse configuration")?;
        Self::from_value(value)
    }

    /// Whether documents with this language id are processed
    pub fn handles_language(&self, language_id: &str) -> bool {
        self.languages
            .iter()
            .any(|language| language.eq_ignore_ascii_case(language_id))
    }

    /// Configured log level, if set and valid
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.log_level.as_deref().and_then(|level| level.parse().ok())
    }
}
