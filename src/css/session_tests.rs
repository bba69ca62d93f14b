use serde_json::json;
use tower_lsp::lsp_types::{Position, Url};

use crate::config::ViewerConfig;
use crate::css::color::ColorHeuristic;
use crate::css::commands::execute_command;
use crate::css::constants::{COMMAND_FOCUS_VARIABLE, COMMAND_LOCATE_DECLARATION, COMMAND_SHOW_VARIABLES};
use crate::css::session::ViewerSession;
use crate::error::ViewerError;

const THEMES: &str = ":root {\n  --main: #336699;\n  --border: solid;\n}\n:root[data-theme=\"dark\"] {\n  --main: var(--accent, #000);\n}\n";

fn theme_uri() -> Url {
    Url::parse("file:///project/theme.css").unwrap()
}

fn session_with_theme() -> ViewerSession {
    let mut session = ViewerSession::default();
    session
        .open_document(theme_uri(), "css", THEMES.to_string(), 1)
        .unwrap();
    session
}

#[test]
fn test_open_update_close() {
    let mut session = session_with_theme();
    let uri = theme_uri();

    assert_eq!(session.active_document().unwrap().uri, uri);
    assert_eq!(session.get_document(&uri).unwrap().extraction().variables().len(), 2);
    let document = session.get_document(&uri).unwrap();
    let site = document.extraction().site("--main", ":root").unwrap();
    assert_eq!(document.text_in(site.value_range), Some("#336699"));

    session
        .update_document(&uri, ":root { --only: 1px; }".to_string(), 2)
        .unwrap();
    let document = session.get_document(&uri).unwrap();
    assert_eq!(document.version(), 2);
    assert_eq!(document.extraction().variables().len(), 1);
    assert!(document.extraction().raw_value("--main", ":root").is_none());

    session.close_document(&uri);
    assert!(session.get_document(&uri).is_none());
    assert!(session.active_document().is_none());
}

#[test]
fn test_language_gate() {
    let mut session = ViewerSession::default();
    let uri = Url::parse("file:///project/readme.md").unwrap();

    let result = session.open_document(uri.clone(), "markdown", THEMES.to_string(), 1);
    assert!(matches!(result, Err(ViewerError::UnsupportedLanguage { .. })));
    assert!(session.get_document(&uri).is_none());

    let less = Url::parse("file:///project/theme.less").unwrap();
    assert!(session.open_document(less, "less", THEMES.to_string(), 1).is_ok());
}

#[test]
fn test_update_unknown_document() {
    let mut session = ViewerSession::default();
    let result = session.update_document(&theme_uri(), String::new(), 2);
    assert!(matches!(result, Err(ViewerError::DocumentNotFound { .. })));
}

#[test]
fn test_report_uses_active_document() {
    let session = session_with_theme();

    let report = session.report(None, None).unwrap();
    assert_eq!(report.selectors.len(), 2);
    assert_eq!(report.rows.len(), 2);

    let filtered = session.report(Some(&theme_uri()), Some("BORDER")).unwrap();
    assert_eq!(filtered.rows.len(), 1);

    assert!(matches!(
        ViewerSession::default().report(None, None),
        Err(ViewerError::NoActiveDocument)
    ));
}

#[test]
fn test_color_heuristic_from_config() {
    let mut session = session_with_theme();
    assert!(session.report(None, None).unwrap().cell("--border", ":root").unwrap().is_color);

    session.set_config(ViewerConfig {
        color_heuristic: ColorHeuristic::Named,
        ..ViewerConfig::default()
    });
    assert!(!session.report(None, None).unwrap().cell("--border", ":root").unwrap().is_color);
}

#[test]
fn test_locate_and_focus() {
    let session = session_with_theme();

    let location = session
        .locate_declaration(None, ":root[data-theme=\"dark\"]", "--main")
        .unwrap();
    assert_eq!(location.uri, theme_uri());
    assert_eq!(location.range.start, Position { line: 5, character: 2 });

    let missing = session.locate_declaration(None, ":root[data-theme=\"dark\"]", "--border");
    assert!(matches!(missing, Err(ViewerError::VariableNotFound { .. })));

    assert_eq!(session.variable_on_line(None, 2).unwrap().as_deref(), Some("--border"));
    assert_eq!(session.variable_on_line(None, 0).unwrap(), None);
    assert_eq!(session.variable_on_line(Some(&theme_uri()), 1).unwrap().as_deref(), Some("--main"));
}

#[test]
fn test_locate_declaration_without_semicolon() {
    let mut session = ViewerSession::default();
    let content = ":root {\n  --gap: 4px;\n  --last: 8px\n}\n";
    session
        .open_document(theme_uri(), "css", content.to_string(), 1)
        .unwrap();
    assert!(session.active_document().unwrap().extraction().raw_value("--last", ":root").is_none());

    let location = session.locate_declaration(None, ":root", "--last").unwrap();
    assert_eq!(location.range.start, Position { line: 2, character: 0 });
    assert_eq!(location.range.end, Position { line: 2, character: 13 });

    let exact = session.locate_declaration(None, ":root", "--gap").unwrap();
    assert_eq!(exact.range.start, Position { line: 1, character: 2 });
}

#[test]
fn test_show_variables_command() {
    let session = session_with_theme();

    let value = execute_command(&session, COMMAND_SHOW_VARIABLES, &[]).unwrap();
    assert_eq!(value["selectors"][1], ":root[data-theme=\"dark\"]");
    assert_eq!(value["rows"][0]["cells"][1]["resolved"], "#000");

    let value = execute_command(
        &session,
        COMMAND_SHOW_VARIABLES,
        &[json!({ "uri": "file:///project/theme.css", "filter": "border" })],
    )
    .unwrap();
    assert_eq!(value["rows"].as_array().unwrap().len(), 1);
}

#[test]
fn test_locate_and_focus_commands() {
    let session = session_with_theme();

    let value = execute_command(
        &session,
        COMMAND_LOCATE_DECLARATION,
        &[json!({ "selector": ":root", "variable": "--border" })],
    )
    .unwrap();
    assert_eq!(value["uri"], "file:///project/theme.css");
    assert_eq!(value["range"]["start"]["line"], 2);

    let value = execute_command(&session, COMMAND_FOCUS_VARIABLE, &[json!({ "line": 1 })]).unwrap();
    assert_eq!(value, json!({ "variable": "--main" }));

    let value = execute_command(&session, COMMAND_FOCUS_VARIABLE, &[json!({ "line": 3 })]).unwrap();
    assert_eq!(value, json!({ "variable": null }));
}

#[test]
fn test_command_errors() {
    let session = session_with_theme();

    assert!(matches!(
        execute_command(&session, COMMAND_LOCATE_DECLARATION, &[]),
        Err(ViewerError::InvalidArguments { .. })
    ));
    assert!(matches!(
        execute_command(&session, COMMAND_FOCUS_VARIABLE, &[json!({ "line": "one" })]),
        Err(ViewerError::InvalidArguments { .. })
    ));
    assert!(matches!(
        execute_command(&session, "cssVariableViewer.paint", &[]),
        Err(ViewerError::UnknownCommand { .. })
    ));
}
