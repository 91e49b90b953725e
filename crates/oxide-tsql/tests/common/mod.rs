#![allow(dead_code)]

use oxide_tsql::ast::{
    CreateTableStatement, DeleteStatement, InsertStatement, MergeStatement, QueryExpression,
    QuerySpecification, SelectStatement, UpdateStatement,
};
use oxide_tsql::{Diagnostic, ParseOptions, ParseResult, Script, SqlVersion, Statement};

pub fn parse_result(sql: &str) -> ParseResult {
    oxide_tsql::parse(sql)
}

pub fn parse_with_version(sql: &str, version: SqlVersion) -> ParseResult {
    oxide_tsql::parse_with(sql, &ParseOptions::default().with_version(version))
}

/// Parses a script that must be free of errors.
pub fn parse_script(sql: &str) -> Script {
    let result = oxide_tsql::parse(sql);
    let errors: Vec<&Diagnostic> = result.errors().collect();
    assert!(errors.is_empty(), "Failed to parse: {sql}\nErrors: {errors:?}");
    result.script
}

/// Parses a script holding exactly one statement.
pub fn parse(sql: &str) -> Statement {
    let script = parse_script(sql);
    let mut statements: Vec<Statement> = script.statements().cloned().collect();
    assert_eq!(statements.len(), 1, "Expected one statement in: {sql}");
    statements.remove(0)
}

/// Returns the first error diagnostic raised for `sql`.
pub fn parse_err(sql: &str) -> Diagnostic {
    oxide_tsql::parse(sql)
        .errors()
        .next()
        .cloned()
        .unwrap_or_else(|| panic!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> SelectStatement {
    match parse(sql) {
        Statement::Select(s) => *s,
        other => panic!("Expected SELECT, got {}", other.kind()),
    }
}

pub fn parse_insert(sql: &str) -> InsertStatement {
    match parse(sql) {
        Statement::Insert(i) => *i,
        other => panic!("Expected INSERT, got {}", other.kind()),
    }
}

pub fn parse_update(sql: &str) -> UpdateStatement {
    match parse(sql) {
        Statement::Update(u) => *u,
        other => panic!("Expected UPDATE, got {}", other.kind()),
    }
}

pub fn parse_delete(sql: &str) -> DeleteStatement {
    match parse(sql) {
        Statement::Delete(d) => *d,
        other => panic!("Expected DELETE, got {}", other.kind()),
    }
}

pub fn parse_merge(sql: &str) -> MergeStatement {
    match parse(sql) {
        Statement::Merge(m) => *m,
        other => panic!("Expected MERGE, got {}", other.kind()),
    }
}

pub fn parse_create_table(sql: &str) -> CreateTableStatement {
    match parse(sql) {
        Statement::CreateTable(t) => *t,
        other => panic!("Expected CREATE TABLE, got {}", other.kind()),
    }
}

/// Unwraps a plain query specification.
pub fn specification(query: &QueryExpression) -> &QuerySpecification {
    match query {
        QueryExpression::Specification(q) => q,
        other => panic!("Expected query specification, got {other:?}"),
    }
}

/// Returns the variant names of every top-level statement.
pub fn kinds(sql: &str) -> Vec<&'static str> {
    parse_script(sql).statements().map(Statement::kind).collect()
}
