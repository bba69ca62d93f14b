//! Command line handling for the `css_variable_viewer` binary

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ViewerConfig;
use crate::css::color::ColorClassifier;
use crate::css::extractor::extract_variables;
use crate::css::report::VariableReport;
use crate::error::{IoContext, JsonContext, ViewerError, ViewerResult};

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Run the language server on stdio
    Serve,
    /// Print the variable report of a stylesheet
    Table {
        path: PathBuf,
        json: bool,
        filter: Option<String>,
        config: Option<PathBuf>,
    },
}

/// Usage text for the binary
pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [lsp]\n\
         \x20      {program} table <stylesheet> [--json] [--filter <text>] [--config <settings.json>]\n\
         \x20 lsp:   Start the CSS variable language server on stdio (default)\n\
         \x20 table: Print the variables of a stylesheet per :root context\n\
         Example: {program} table theme.css --filter color"
    )
}

/// Parse arguments, excluding the program name
pub fn parse_args(args: &[String]) -> ViewerResult<CliCommand> {
    let Some(mode) = args.first() else {
        return Ok(CliCommand::Serve);
    };

    match mode.as_str() {
        "lsp" => Ok(CliCommand::Serve),
        "table" => {
            let mut path = None;
            let mut json = false;
            let mut filter = None;
            let mut config = None;

            let mut rest = args[1..].iter();
            while let Some(arg) = rest.next() {
                match arg.as_str() {
                    "--json" => json = true,
                    "--filter" => filter = Some(option_value(&mut rest, "--filter")?),
                    "--config" => config = Some(PathBuf::from(option_value(&mut rest, "--config")?)),
                    other if path.is_none() && !other.starts_with("--") => path = Some(PathBuf::from(other)),
                    other => {
                        return Err(invalid(format!("unexpected argument '{}'", other)));
                    }
                }
            }

            let path = path.ok_or_else(|| invalid("missing stylesheet path".to_string()))?;
            Ok(CliCommand::Table { path, json, filter, config })
        }
        other => Err(invalid(format!("unknown mode '{}'", other))),
    }
}

fn option_value<'a>(rest: &mut impl Iterator<Item = &'a String>, option: &str) -> ViewerResult<String> {
    rest.next()
        .cloned()
        .ok_or_else(|| invalid(format!("{} needs a value", option)))
}

fn invalid(message: String) -> ViewerError {
    ViewerError::InvalidArguments {
        command: "table".to_string(),
        message,
    }
}

/// Read a stylesheet from disk
pub fn load_stylesheet(path: &Path) -> ViewerResult<String> {
    if !path.exists() {
        return Err(ViewerError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).with_io_context(&format!("Failed to read {}", path.display()))
}

/// Render the report of stylesheet text as plain text or pretty JSON
pub fn render_report(source: &str, config: &ViewerConfig, json: bool, filter: Option<&str>) -> ViewerResult<String> {
    let extraction = extract_variables(source);
    let mut report = VariableReport::build(&extraction, &ColorClassifier::new(config.color_heuristic));
    if let Some(filter) = filter {
        report = report.filter(filter);
    }

    if json {
        serde_json::to_string_pretty(&report).with_json_context("Failed to serialize report")
    } else {
        Ok(report.render_text())
    }
}

/// Run the `table` mode and return what should be printed
pub fn run_table(path: &Path, json: bool, filter: Option<&str>, config: Option<&Path>) -> ViewerResult<String> {
    let config = match config {
        Some(config_path) => ViewerConfig::load(config_path)?,
        None => ViewerConfig::default(),
    };
    let source = load_stylesheet(path)?;
    log::info!("Rendering variables of {}", path.display());
    render_report(&source, &config, json, filter)
}
