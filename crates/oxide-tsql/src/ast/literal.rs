//! Literal values.

use oxide_tsql_derive::AstNode;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::lexer::Span;

/// Unescaped byte length above which a non-national string is a large
/// object (`varchar(max)`).
pub const MAX_VARCHAR_LENGTH: usize = 8000;

/// Character length above which a national string is a large object
/// (`nvarchar(max)`).
pub const MAX_NVARCHAR_LENGTH: usize = 4000;

/// The kind of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum LiteralType {
    /// `42`
    Integer,
    /// `3.14`
    Numeric,
    /// `1.5E10`
    Real,
    /// `$12.50`
    Money,
    /// `'text'` or `N'text'`
    String,
    /// `0x1F`
    Binary,
    /// `NULL`
    Null,
    /// `DEFAULT`
    Default,
    /// `MAX` in a type parameter.
    Max,
    /// `{d '2020-01-01'}` and friends.
    Odbc,
    /// A bare word used where a literal is expected, e.g. `ON` in an option.
    Identifier,
}

impl LiteralType {
    /// Returns the serialized type tag of a literal of this kind.
    #[must_use]
    pub const fn type_tag(&self) -> &'static str {
        match self {
            Self::Integer => "IntegerLiteral",
            Self::Numeric => "NumericLiteral",
            Self::Real => "RealLiteral",
            Self::Money => "MoneyLiteral",
            Self::String => "StringLiteral",
            Self::Binary => "BinaryLiteral",
            Self::Null => "NullLiteral",
            Self::Default => "DefaultLiteral",
            Self::Max => "MaxLiteral",
            Self::Odbc => "OdbcLiteral",
            Self::Identifier => "IdentifierLiteral",
        }
    }
}

/// The type prefix of an ODBC brace literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum OdbcLiteralType {
    /// `{t '…'}`
    Time,
    /// `{d '…'}`
    Date,
    /// `{ts '…'}`
    Timestamp,
    /// `{guid '…'}`
    Guid,
}

impl OdbcLiteralType {
    /// Parses the prefix word of an ODBC literal.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "t" => Some(Self::Time),
            "d" => Some(Self::Date),
            "ts" => Some(Self::Timestamp),
            "guid" => Some(Self::Guid),
            _ => None,
        }
    }
}

/// A literal value.
///
/// `value` holds the semantic value (string escapes resolved, `N` prefix
/// dropped) while `text` holds the exact source spelling.
#[derive(Debug, Clone, PartialEq, AstNode)]
#[ast(node = Literal)]
pub struct Literal {
    /// The literal kind.
    pub literal_type: LiteralType,
    /// The value. Numbers keep their source text so precision is preserved.
    pub value: String,
    /// The exact source text.
    pub text: String,
    /// `N'…'` prefix was present.
    pub is_national: bool,
    /// The string exceeds the non-`max` length limits.
    pub is_large_object: bool,
    /// Prefix of an ODBC literal.
    pub odbc_literal_type: Option<OdbcLiteralType>,
    /// Source span.
    pub span: Span,
}

impl Literal {
    /// Creates a literal whose value is its source text.
    #[must_use]
    pub fn new(literal_type: LiteralType, text: impl Into<String>, span: Span) -> Self {
        let text = text.into();
        Self {
            literal_type,
            value: text.clone(),
            text,
            is_national: false,
            is_large_object: false,
            odbc_literal_type: None,
            span,
        }
    }

    /// Creates a string literal, deriving the large-object flag.
    #[must_use]
    pub fn string(value: String, text: impl Into<String>, is_national: bool, span: Span) -> Self {
        let is_large_object = if is_national {
            value.chars().count() > MAX_NVARCHAR_LENGTH
        } else {
            value.len() > MAX_VARCHAR_LENGTH
        };
        Self {
            literal_type: LiteralType::String,
            value,
            text: text.into(),
            is_national,
            is_large_object,
            odbc_literal_type: None,
            span,
        }
    }

    /// Returns true for `NULL`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.literal_type == LiteralType::Null
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("$type", self.literal_type.type_tag())?;
        map.serialize_entry("LiteralType", &self.literal_type)?;
        map.serialize_entry("Value", &self.value)?;
        map.serialize_entry("Text", &self.text)?;
        if self.literal_type == LiteralType::String {
            map.serialize_entry("IsNational", &self.is_national)?;
            map.serialize_entry("IsLargeObject", &self.is_large_object)?;
        }
        if let Some(odbc) = &self.odbc_literal_type {
            map.serialize_entry("OdbcLiteralType", odbc)?;
        }
        map.serialize_entry("Span", &self.span)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_large_object_thresholds() {
        let span = Span::new(0, 1, 1);
        let short = Literal::string("a".repeat(8000), "'…'", false, span);
        assert!(!short.is_large_object);
        let long = Literal::string("a".repeat(8001), "'…'", false, span);
        assert!(long.is_large_object);

        let national = Literal::string("é".repeat(4000), "N'…'", true, span);
        assert!(!national.is_large_object);
        let national_long = Literal::string("é".repeat(4001), "N'…'", true, span);
        assert!(national_long.is_large_object);
    }

    #[test]
    fn test_literal_serialization_tag() {
        let literal = Literal::new(LiteralType::Integer, "1", Span::new(7, 8, 1));
        let value = serde_json::to_value(&literal).unwrap();
        assert_eq!(value["$type"], "IntegerLiteral");
        assert_eq!(value["LiteralType"], "Integer");
        assert_eq!(value["Value"], "1");
        assert!(value.get("IsNational").is_none());
    }

    #[test]
    fn test_odbc_prefix() {
        assert_eq!(OdbcLiteralType::from_word("TS"), Some(OdbcLiteralType::Timestamp));
        assert_eq!(OdbcLiteralType::from_word("fn"), None);
    }
}
