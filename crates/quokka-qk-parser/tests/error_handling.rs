//! Error recovery tests.
//!
//! The parser records a diagnostic and keeps going, so these tests pin
//! down both the messages and the recovery shape: what cascades, what
//! does not, and that parsing always terminates.

use quokka_qk_ast::{Node, NodeKind, Pos};
use quokka_qk_parser::{parse_program, ParseOutcome};

fn messages(outcome: &ParseOutcome) -> Vec<&str> {
    outcome
        .diagnostics
        .iter()
        .map(|d| d.message.as_str())
        .collect()
}

fn statements(program: &Node) -> &[Node] {
    match &program.kind {
        NodeKind::Program { statements } => statements,
        other => panic!("expected Program, got {other:?}"),
    }
}

#[test]
fn test_missing_semicolon_after_import() {
    let outcome = parse_program("@import \"dev.j\"");
    assert_eq!(messages(&outcome), vec!["Expected ';' after import"]);
    // The import itself still makes it into the tree.
    assert_eq!(
        statements(&outcome.program)[0].kind,
        NodeKind::Import {
            path: "dev.j".into()
        }
    );
}

#[test]
fn test_diagnostic_position_and_rendering() {
    let outcome = parse_program("@import \"dev.j\"");
    let diagnostic = &outcome.diagnostics[0];
    assert_eq!(diagnostic.pos, Pos::new(1, 15));
    assert_eq!(
        diagnostic.to_string(),
        "[1:15] Parse error: Expected ';' after import"
    );
}

#[test]
fn test_import_with_non_string_path() {
    // The path field is read from the token before the mismatch is
    // reported, so the bad token's text becomes the path.
    let outcome = parse_program("@import 5;");
    assert_eq!(messages(&outcome), vec!["Expected string path"]);
    assert_eq!(
        statements(&outcome.program)[0].kind,
        NodeKind::Import { path: "5".into() }
    );
}

#[test]
fn test_declaration_missing_as_cascades() {
    let outcome = parse_program("new Sensor s temp1;");
    assert_eq!(
        messages(&outcome),
        vec![
            "Expected 'as'",
            "Expected alias name",
            "Expected ';' after declaration",
        ]
    );
}

#[test]
fn test_mismatched_consume_always_advances() {
    // Every consume moves past the offending token, so a declaration
    // made of wrong tokens walks forward one diagnostic at a time
    // instead of looping.
    let outcome = parse_program("new new;");
    assert_eq!(
        messages(&outcome),
        vec![
            "Expected device type",
            "Expected device name",
            "Expected 'as'",
            "Expected alias name",
            "Expected ';' after declaration",
        ]
    );
}

#[test]
fn test_declaration_at_end_of_input_has_empty_name() {
    let outcome = parse_program("new");
    assert_eq!(outcome.diagnostics.len(), 5);
    match &statements(&outcome.program)[0].kind {
        NodeKind::Declaration { name, .. } => assert_eq!(name, ""),
        other => panic!("expected Declaration, got {other:?}"),
    }
}

#[test]
fn test_if_missing_open_paren() {
    let outcome = parse_program("if a == 1) then { };");
    assert_eq!(
        messages(&outcome),
        vec!["Expected '(' after 'if'", "Unexpected token"]
    );
    // The statement still comes out as an if with a comparison condition.
    assert!(matches!(
        statements(&outcome.program)[0].kind,
        NodeKind::IfStatement { .. }
    ));
}

#[test]
fn test_unclosed_block_reports_both_delimiters() {
    let outcome = parse_program("if (a) then { go(x);");
    assert_eq!(
        messages(&outcome),
        vec!["Expected '}'", "Expected ';' after if statement"]
    );
}

#[test]
fn test_unexpected_token_yields_placeholder() {
    let outcome = parse_program("+;");
    assert_eq!(
        messages(&outcome),
        vec![
            "Unexpected token",
            "Expected ';' after expression",
            "Unexpected token",
        ]
    );
    // The placeholder is an identifier with an empty name.
    match &statements(&outcome.program)[0].kind {
        NodeKind::ExpressionStatement { expr } => {
            assert_eq!(expr.kind, NodeKind::Identifier { name: "".into() });
        }
        other => panic!("expected ExpressionStatement, got {other:?}"),
    }
}

#[test]
fn test_garbage_input_terminates() {
    let outcome = parse_program(")))");
    assert_eq!(outcome.diagnostics.len(), 6);
    assert_eq!(statements(&outcome.program).len(), 3);
    assert!(outcome.has_errors());
    assert_eq!(outcome.error_count(), 6);
}

#[test]
fn test_missing_member_name_keeps_object() {
    let outcome = parse_program("dev.5;");
    assert_eq!(
        messages(&outcome),
        vec![
            "Expected member name",
            "Expected ';' after expression",
            "Unexpected token",
        ]
    );
    // The chain collapses back to the object parsed so far.
    match &statements(&outcome.program)[0].kind {
        NodeKind::ExpressionStatement { expr } => {
            assert_eq!(expr.kind, NodeKind::Identifier { name: "dev".into() });
        }
        other => panic!("expected ExpressionStatement, got {other:?}"),
    }
}

#[test]
fn test_no_postfix_chain_after_direct_call() {
    // A call on a bare identifier ends the expression; a trailing
    // member chain is a syntax error, not a postfix.
    let outcome = parse_program("f(1).g;");
    assert_eq!(messages(&outcome), vec!["Expected ';' after expression"]);
    let statements = statements(&outcome.program);
    assert_eq!(statements.len(), 2);
}

#[test]
fn test_keyword_cannot_start_an_expression() {
    let outcome = parse_program("funct(1);");
    assert_eq!(outcome.diagnostics[0].message, "Unexpected token");
}

#[test]
fn test_unknown_character_reaches_parser_as_unknown() {
    let outcome = parse_program("?;");
    assert_eq!(outcome.diagnostics[0].message, "Unexpected token");
    assert_eq!(outcome.diagnostics[0].pos, Pos::new(1, 0));
}

#[test]
fn test_clean_parse_reports_nothing() {
    let outcome = parse_program("@import \"dev.j\";\nnew Sensor s as temp1;");
    assert!(!outcome.has_errors());
    assert_eq!(outcome.error_count(), 0);
}
