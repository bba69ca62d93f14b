//! Workspace commands
//!
//! Commands the editor side calls to fill and drive its variable panel. Each one
//! takes an optional JSON object argument and answers with JSON.

use serde::Deserialize;
use serde_json::{json, Value};
use tower_lsp::lsp_types::Url;

use crate::css::constants::{COMMAND_FOCUS_VARIABLE, COMMAND_LOCATE_DECLARATION, COMMAND_SHOW_VARIABLES};
use crate::css::session::ViewerSession;
use crate::error::{ViewerError, ViewerResult};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ShowVariablesArgs {
    uri: Option<Url>,
    filter: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocateDeclarationArgs {
    uri: Option<Url>,
    selector: String,
    variable: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FocusVariableArgs {
    uri: Option<Url>,
    line: u32,
}

/// Run a command against the session
pub fn execute_command(session: &ViewerSession, command: &str, arguments: &[Value]) -> ViewerResult<Value> {
    match command {
        COMMAND_SHOW_VARIABLES => {
            let args: ShowVariablesArgs = match arguments.first() {
                Some(value) => parse_arguments(command, value)?,
                None => ShowVariablesArgs::default(),
            };
            let report = session.report(args.uri.as_ref(), args.filter.as_deref())?;
            Ok(serde_json::to_value(report)?)
        }
        COMMAND_LOCATE_DECLARATION => {
            let args: LocateDeclarationArgs = parse_arguments(command, required(command, arguments)?)?;
            let location = session.locate_declaration(args.uri.as_ref(), &args.selector, &args.variable)?;
            Ok(serde_json::to_value(location)?)
        }
        COMMAND_FOCUS_VARIABLE => {
            let args: FocusVariableArgs = parse_arguments(command, required(command, arguments)?)?;
            let variable = session.variable_on_line(args.uri.as_ref(), args.line)?;
            Ok(json!({ "variable": variable }))
        }
        _ => Err(ViewerError::UnknownCommand {
            command: command.to_string(),
        }),
    }
}

fn required<'a>(command: &str, arguments: &'a [Value]) -> ViewerResult<&'a Value> {
    arguments.first().ok_or_else(|| ViewerError::InvalidArguments {
        command: command.to_string(),
        message: "missing argument object".to_string(),
    })
}

fn parse_arguments<T: for<'de> Deserialize<'de>>(command: &str, value: &Value) -> ViewerResult<T> {
    serde_json::from_value(value.clone()).map_err(|e| ViewerError::InvalidArguments {
        command: command.to_string(),
        message: e.to_string(),
    })
}
