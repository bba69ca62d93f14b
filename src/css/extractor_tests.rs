use tower_lsp::lsp_types::Position;

use crate::css::extractor::extract_variables;
use crate::css::variable_resolver::{resolve, VariableResolutionStatus};

#[test]
fn test_no_root_blocks() {
    let content = r#"
            .button { --size: 10px; color: red; }
            body { margin: 0; }
        "#;

    let extraction = extract_variables(content);
    assert!(extraction.is_empty());
    assert!(extraction.contexts().is_empty());
    assert!(extraction.selectors().is_empty());
    assert!(extraction.blocks().is_empty());

    assert!(extract_variables("").is_empty());
}

#[test]
fn test_single_declaration() {
    let extraction = extract_variables(":root { --x: 10px; }");

    assert_eq!(extraction.variables()["--x"][":root"], "10px");
    assert_eq!(extraction.contexts()[":root"]["--x"], "10px");
    assert_eq!(extraction.selectors(), &[":root".to_string()]);
}

#[test]
fn test_values_are_trimmed_but_inner_whitespace_kept() {
    let content = ":root {\n    --shadow :   0 1px  2px rgba(0, 0, 0, 0.2)   ;\n}";
    let extraction = extract_variables(content);

    assert_eq!(
        extraction.raw_value("--shadow", ":root"),
        Some("0 1px  2px rgba(0, 0, 0, 0.2)")
    );
}

#[test]
fn test_variable_order_is_first_declaration() {
    let content = r#"
            :root { --b: 1; --a: 2; }
            :root.dark { --c: 3; --b: 4; }
        "#;
    let extraction = extract_variables(content);

    let names: Vec<&str> = extraction.variables().keys().map(String::as_str).collect();
    assert_eq!(names, vec!["--b", "--a", "--c"]);

    let selectors: Vec<&str> = extraction.variables()["--b"].keys().map(String::as_str).collect();
    assert_eq!(selectors, vec![":root", ":root.dark"]);
}

#[test]
fn test_later_declaration_overwrites() {
    let content = r#"
            :root { --main: red; }
            :root { --main: blue; --main: green; }
        "#;
    let extraction = extract_variables(content);

    assert_eq!(extraction.raw_value("--main", ":root"), Some("green"));
    assert_eq!(extraction.variables().len(), 1);
    assert_eq!(extraction.selectors().len(), 1);
    assert_eq!(extraction.blocks().len(), 2);

    // The stored site belongs to the value that won
    let site = extraction.site("--main", ":root").unwrap();
    assert_eq!(site.range.start.line, 2);
}

#[test]
fn test_tables_agree() {
    let content = r#"
            :root { --a: 1px; --b: var(--a); }
            html:root { --a: 2px; }
            :root[data-theme="dark"] { --b: 3px; }
        "#;
    let extraction = extract_variables(content);

    let mut by_name = 0;
    for (name, values) in extraction.variables() {
        for (selector, value) in values {
            assert_eq!(extraction.contexts()[selector][name], *value);
            by_name += 1;
        }
    }
    let by_selector: usize = extraction.contexts().values().map(|values| values.len()).sum();
    assert_eq!(by_name, by_selector);
    assert_eq!(by_name, 4);
}

#[test]
fn test_root_like_selectors() {
    let content = r#"
            :root { --a: 1; }
            html:root { --b: 2; }
            :root.theme-light { --c: 3; }
            :root[data-theme="dark"] { --d: 4; }
            :root:hover { --e: 5; }
            .root { --f: 6; }
        "#;
    let extraction = extract_variables(content);

    assert_eq!(
        extraction.selectors(),
        &[
            ":root".to_string(),
            "html:root".to_string(),
            ":root.theme-light".to_string(),
            ":root[data-theme=\"dark\"]".to_string(),
        ]
    );
    assert!(extraction.variables().get("--e").is_none());
    assert!(extraction.variables().get("--f").is_none());
}

#[test]
fn test_nested_braces_do_not_truncate_body() {
    let content = r#"
            :root {
                --before: 1px;
                .inner { color: red; }
                --after: 2px;
            }
        "#;
    let extraction = extract_variables(content);

    assert_eq!(extraction.raw_value("--before", ":root"), Some("1px"));
    assert_eq!(extraction.raw_value("--after", ":root"), Some("2px"));
}

#[test]
fn test_root_block_nested_in_other_block() {
    let content = r#"
            @media (prefers-color-scheme: dark) {
                :root { --bg: black; }
            }
        "#;
    let extraction = extract_variables(content);

    assert_eq!(extraction.raw_value("--bg", ":root"), Some("black"));
}

#[test]
fn test_malformed_declarations_are_skipped() {
    let content = ":root { --ok: 1px; --missing-colon 2px; color: red; --last: 3px; --unterminated: 4px }";
    let extraction = extract_variables(content);

    assert_eq!(extraction.raw_value("--ok", ":root"), Some("1px"));
    assert_eq!(extraction.raw_value("--last", ":root"), Some("3px"));
    assert!(extraction.variables().get("--unterminated").is_none());
}

#[test]
fn test_unterminated_block_runs_to_end() {
    let extraction = extract_variables(":root { --a: 1px; --b: 2px;");

    assert_eq!(extraction.raw_value("--a", ":root"), Some("1px"));
    assert_eq!(extraction.raw_value("--b", ":root"), Some("2px"));
}

#[test]
fn test_extraction_is_idempotent() {
    let content = r#"
            :root { --main: #336699; }
            :root[data-theme="dark"] { --main: var(--accent, #000); }
        "#;

    assert_eq!(extract_variables(content), extract_variables(content));
}

#[test]
fn test_declaration_ranges() {
    let content = ":root {\n  --main: #336699;\n}";
    let extraction = extract_variables(content);

    let site = extraction.site("--main", ":root").unwrap();
    assert_eq!(site.range.start, Position { line: 1, character: 2 });
    assert_eq!(site.range.end, Position { line: 1, character: 18 });
    assert_eq!(site.value_range.start, Position { line: 1, character: 10 });
    assert_eq!(site.value_range.end, Position { line: 1, character: 17 });

    let block = &extraction.blocks()[0];
    assert_eq!(block.selector, ":root");
    assert_eq!(block.range.start, Position { line: 0, character: 0 });
    assert_eq!(block.range.end, Position { line: 2, character: 1 });
}

#[test]
fn test_line_comment_before_selector() {
    let content = "// Base theme\n:root { --a: 5px; }\n  // Dark theme\n:root.dark { --b: var(--a); }";
    let extraction = extract_variables(content);

    assert_eq!(extraction.selectors(), &[":root".to_string(), ":root.dark".to_string()]);
    assert_eq!(extraction.blocks()[0].range.start, Position { line: 1, character: 0 });
    assert_eq!(
        resolve(&extraction, "var(--b)", ":root.dark"),
        VariableResolutionStatus::Resolved("5px".to_string())
    );
}

#[test]
fn test_names_are_ascii() {
    let extraction = extract_variables(":root { --ü: red; --größe: 1px; --ok_1: 2px; }");

    let names: Vec<&str> = extraction.variables().keys().map(String::as_str).collect();
    assert_eq!(names, vec!["--ok_1"]);
}
