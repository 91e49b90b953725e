//! Tests for diagnostics: recovery, codes, limits and batch separators.

mod common;
use common::*;

use oxide_tsql::{DiagnosticCode, ParseOptions, Severity, SqlVersion};

#[test]
fn error_empty_input() {
    let result = parse_result("");
    assert!(result.diagnostics.is_empty());
    assert!(result.script.is_empty());
    assert_eq!(result.script.span.end, 0);
}

#[test]
fn error_only_comments_and_semicolons() {
    let result = parse_result("-- nothing here\n/* or here */ ;;");
    assert!(result.diagnostics.is_empty());
    assert_eq!(result.script.statements().count(), 0);
}

#[test]
fn error_recovers_at_next_statement() {
    let result =
        parse_result("SELECT 1;\nSELECT FROM WHERE;\nPRINT 'after'\nUPDATE t SET a = 1");
    assert_eq!(result.errors().count(), 1);
    let kinds: Vec<&str> = result.script.statements().map(|s| s.kind()).collect();
    assert_eq!(kinds, ["Select", "Print", "Update"]);
}

#[test]
fn error_recovers_at_statement_keyword_without_semicolon() {
    let result = parse_result("SELECT * FROM t WHERE (a = \nINSERT INTO log VALUES (1)");
    assert!(result.has_errors());
    let kinds: Vec<&str> = result.script.statements().map(|s| s.kind()).collect();
    assert_eq!(kinds, ["Insert"]);
}

#[test]
fn error_unexpected_token_reports_expected_set() {
    let error = parse_err("SELECT a FROM t WHERE");
    assert_eq!(error.code, DiagnosticCode::UnexpectedEndOfInput);
    assert_eq!(error.severity, Severity::Error);

    let error = parse_err("CREATE TABLE t (id INT,, name INT)");
    assert_eq!(error.code, DiagnosticCode::UnexpectedToken);
    assert!(!error.expected.is_empty());
    assert!(error.message.contains("Unexpected token"));
}

#[test]
fn error_positions_point_at_offending_token() {
    let sql = "SELECT 1\nSELECT FROM t";
    let error = parse_err(sql);
    assert_eq!(error.span.line, 2);
    assert_eq!(error.span.text(sql), "FROM");
}

#[test]
fn error_lexical_codes() {
    assert_eq!(parse_err("SELECT 'open").code, DiagnosticCode::UnterminatedString);
    assert_eq!(parse_err("SELECT [open").code, DiagnosticCode::UnterminatedIdentifier);
    assert_eq!(parse_err("SELECT 1 /* open").code, DiagnosticCode::UnterminatedComment);
    assert_eq!(parse_err("SELECT 1 ` 2").code, DiagnosticCode::UnexpectedCharacter);
}

#[test]
fn error_strict_mode_stops_at_first_error() {
    let options = ParseOptions::default().with_strict(true);
    let result =
        oxide_tsql::parse_with("SELECT 1; SELECT FROM; SELECT FROM; SELECT 2;", &options);
    assert_eq!(result.errors().count(), 1);
    assert_eq!(result.script.statements().count(), 1);
}

#[test]
fn error_limit_suppresses_further_errors() {
    let options = ParseOptions::default().with_max_errors(Some(2));
    let result = oxide_tsql::parse_with(
        "SELECT FROM; SELECT FROM; SELECT FROM; SELECT FROM; PRINT 1;",
        &options,
    );
    assert_eq!(result.errors().count(), 2);
    let warnings: Vec<DiagnosticCode> = result.warnings().map(|d| d.code).collect();
    assert_eq!(warnings, [DiagnosticCode::TooManyErrors]);
    assert_eq!(result.script.statements().count(), 1);
}

#[test]
fn error_go_repeat_count() {
    let script = parse_script("PRINT 'a'\nGO 3\nPRINT 'b'\ngo\n");
    assert_eq!(script.batches.len(), 2);
    assert_eq!(script.batches[0].repeat_count, Some(3));
    assert_eq!(script.batches[1].repeat_count, None);
}

#[test]
fn error_go_repeat_count_overflow_is_a_warning() {
    let result = parse_result("PRINT 'a'\nGO 99999999999\n");
    assert!(!result.has_errors());
    let warning = result.warnings().next().unwrap();
    assert_eq!(warning.code, DiagnosticCode::RepeatCountOverflow);
    assert_eq!(result.script.batches[0].repeat_count, None);
}

#[test]
fn error_go_is_only_a_separator_on_its_own_line() {
    let script = parse_script("SELECT go FROM t\nGO");
    assert_eq!(script.batches.len(), 1);
    assert_eq!(script.batches[0].statements.len(), 1);
}

#[test]
fn error_does_not_cross_batches() {
    let result = parse_result("SELECT (1\nGO\nSELECT 2\nGO");
    assert_eq!(result.errors().count(), 1);
    assert_eq!(result.script.batches.len(), 2);
    assert!(result.script.batches[0].statements.is_empty());
    assert_eq!(result.script.batches[1].statements.len(), 1);
}

#[test]
fn error_version_gating_is_not_fatal() {
    let result = parse_with_version(
        "SELECT a FROM t WHERE a IS DISTINCT FROM b; \
         SELECT SYSDATETIMEOFFSET() AT TIME ZONE 'UTC';",
        SqlVersion::Sql120,
    );
    let codes: Vec<&str> = result.errors().map(|d| d.code.as_str()).collect();
    assert_eq!(codes, ["TSQL4001", "TSQL4001"]);
    assert_eq!(result.script.statements().count(), 2);

    let result =
        parse_with_version("SELECT a FROM t WHERE a IS DISTINCT FROM b", SqlVersion::Sql160);
    assert!(!result.has_errors());
}

#[test]
fn error_quoted_identifier_off_reads_strings() {
    let options = ParseOptions::default().with_quoted_identifier(false);
    let result = oxide_tsql::parse_with("SELECT \"text\"", &options);
    assert!(!result.has_errors());
    let json = oxide_tsql::serialize::to_value(&result.script);
    let element = &json["Batches"][0]["Statements"][0]["QueryExpression"]["SelectElements"][0];
    assert_eq!(element["Expression"]["LiteralType"], "String");
}

#[test]
fn error_diagnostics_serialize_with_codes() {
    let result = parse_result("SELECT FROM");
    let json = serde_json::to_value(&result.diagnostics).unwrap();
    assert_eq!(json[0]["Code"], "TSQL2001");
    assert_eq!(json[0]["Severity"], "Error");
}

#[test]
fn error_deep_nesting_is_reported() {
    let depth = oxide_tsql::parser::MAX_NESTING_DEPTH;
    let sql = format!(
        "PRINT 'before';\nSELECT * FROM t WHERE {}a = 1{};\nPRINT 'after'",
        "(".repeat(depth * 4),
        ")".repeat(depth * 4)
    );
    let result = std::thread::Builder::new()
        .stack_size(8 << 20)
        .spawn(move || parse_result(&sql))
        .unwrap()
        .join()
        .unwrap();
    let errors: Vec<_> = result.errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, DiagnosticCode::NestingTooDeep);
    assert_eq!(errors[0].code.as_str(), "TSQL2005");
    let kinds: Vec<&str> = result.script.statements().map(|s| s.kind()).collect();
    assert_eq!(kinds, ["Print", "Print"]);
}
