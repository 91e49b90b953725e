//! Identifiers and dotted names.

use std::hash::{Hash, Hasher};

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use super::Literal;
use crate::lexer::Span;

/// How an identifier was delimited in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum QuoteType {
    /// A regular identifier.
    None,
    /// `[bracketed]`.
    Square,
    /// `"double quoted"`.
    Double,
    /// A `@variable` used in a name position.
    Var,
}

/// A single identifier.
///
/// Equality and hashing consider the value and quote style only; the span
/// is ignored.
#[derive(Debug, Clone, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
#[ast(node = Identifier)]
pub struct Identifier {
    /// The unescaped name.
    pub value: String,
    /// The delimiter used in source.
    pub quote_type: QuoteType,
    /// Source span, delimiters included.
    pub span: Span,
}

impl Identifier {
    /// Creates an identifier.
    #[must_use]
    pub fn new(value: impl Into<String>, quote_type: QuoteType, span: Span) -> Self {
        Self {
            value: value.into(),
            quote_type,
            span,
        }
    }

    /// Compares the names case-insensitively, ignoring quoting.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.value.eq_ignore_ascii_case(name)
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.quote_type == other.quote_type
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.quote_type.hash(state);
    }
}

/// A dotted sequence of identifiers such as `t.col` or `db.dbo.t.col`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
#[ast(node = MultiPartIdentifier)]
pub struct MultiPartIdentifier {
    /// The parts, in source order.
    pub identifiers: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

impl MultiPartIdentifier {
    /// Returns the number of parts.
    #[must_use]
    pub fn count(&self) -> usize {
        self.identifiers.len()
    }

    /// Returns the last part.
    #[must_use]
    pub fn last(&self) -> Option<&Identifier> {
        self.identifiers.last()
    }
}

/// A schema-scoped object name of up to four parts:
/// `server.database.schema.base`.
///
/// Parts skipped with consecutive dots (`db..t`) are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
#[ast(node = SchemaObjectName)]
pub struct SchemaObjectName {
    /// Linked server part.
    pub server_identifier: Option<Identifier>,
    /// Database part.
    pub database_identifier: Option<Identifier>,
    /// Schema part.
    pub schema_identifier: Option<Identifier>,
    /// The object itself.
    pub base_identifier: Identifier,
    /// Number of parts written, skipped parts included.
    pub count: u8,
    /// Source span.
    pub span: Span,
}

impl SchemaObjectName {
    /// Builds a one-part name.
    #[must_use]
    pub fn simple(base_identifier: Identifier) -> Self {
        let span = base_identifier.span;
        Self {
            server_identifier: None,
            database_identifier: None,
            schema_identifier: None,
            base_identifier,
            count: 1,
            span,
        }
    }

    /// Returns the present parts in source order.
    #[must_use]
    pub fn identifiers(&self) -> Vec<&Identifier> {
        [
            self.server_identifier.as_ref(),
            self.database_identifier.as_ref(),
            self.schema_identifier.as_ref(),
            Some(&self.base_identifier),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// A name written either as an identifier or as a string literal, as in
/// column aliases (`AS 'total'`) and index hints (`INDEX(0)`).
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum IdentifierOrValueExpression {
    /// A name.
    Identifier(Identifier),
    /// A literal.
    Value(Literal),
}

impl IdentifierOrValueExpression {
    /// Returns the name or literal value as text.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Identifier(id) => &id.value,
            Self::Value(literal) => &literal.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(value: &str, start: usize) -> Identifier {
        Identifier::new(value, QuoteType::None, Span::new(start, start + value.len(), 1))
    }

    #[test]
    fn test_identifier_equality_ignores_span() {
        let a = ident("name", 0);
        let b = ident("name", 40);
        assert_eq!(a, b);

        let bracketed = Identifier::new("name", QuoteType::Square, Span::new(0, 6, 1));
        assert_ne!(a, bracketed);
        assert!(bracketed.matches("NAME"));
    }

    #[test]
    fn test_schema_object_name_identifiers() {
        let name = SchemaObjectName {
            server_identifier: None,
            database_identifier: Some(ident("db", 0)),
            schema_identifier: None,
            base_identifier: ident("t", 4),
            count: 3,
            span: Span::new(0, 5, 1),
        };
        let parts: Vec<&str> = name.identifiers().iter().map(|i| i.value.as_str()).collect();
        assert_eq!(parts, vec!["db", "t"]);
        assert_eq!(SchemaObjectName::simple(ident("x", 0)).count, 1);
    }
}
