//! Data type references.

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use super::{Literal, SchemaObjectName};
use crate::lexer::Span;

/// A reference to a data type.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
#[ast(node = DataTypeReference)]
pub enum DataTypeReference {
    /// A built-in type such as `INT` or `NVARCHAR(100)`.
    Sql(SqlDataTypeReference),
    /// `XML [( [CONTENT | DOCUMENT] schema_collection )]`.
    Xml(XmlDataTypeReference),
    /// A user-defined alias or CLR type.
    User(UserDataTypeReference),
}

impl DataTypeReference {
    /// Returns the type name as written.
    #[must_use]
    pub fn name(&self) -> &SchemaObjectName {
        match self {
            Self::Sql(t) => &t.name,
            Self::Xml(t) => &t.name,
            Self::User(t) => &t.name,
        }
    }

    /// Returns the built-in type, if this is one.
    #[must_use]
    pub fn sql_data_type_option(&self) -> Option<SqlDataTypeOption> {
        match self {
            Self::Sql(t) => Some(t.sql_data_type_option),
            _ => None,
        }
    }
}

keyword_enum! {
    /// Built-in SQL Server types.
    pub enum SqlDataTypeOption {
        BigInt = "BIGINT",
        Int = "INT",
        SmallInt = "SMALLINT",
        TinyInt = "TINYINT",
        Bit = "BIT",
        Decimal = "DECIMAL",
        Numeric = "NUMERIC",
        Money = "MONEY",
        SmallMoney = "SMALLMONEY",
        Float = "FLOAT",
        Real = "REAL",
        DateTime = "DATETIME",
        SmallDateTime = "SMALLDATETIME",
        Date = "DATE",
        Time = "TIME",
        DateTime2 = "DATETIME2",
        DateTimeOffset = "DATETIMEOFFSET",
        Char = "CHAR",
        VarChar = "VARCHAR",
        Text = "TEXT",
        NChar = "NCHAR",
        NVarChar = "NVARCHAR",
        NText = "NTEXT",
        Binary = "BINARY",
        VarBinary = "VARBINARY",
        Image = "IMAGE",
        Cursor = "CURSOR",
        SqlVariant = "SQL_VARIANT",
        Table = "TABLE",
        Timestamp = "TIMESTAMP",
        RowVersion = "ROWVERSION",
        UniqueIdentifier = "UNIQUEIDENTIFIER",
    }
}

impl SqlDataTypeOption {
    /// Resolves a type name, accepting the ISO synonyms (`INTEGER`,
    /// `DEC`, `CHARACTER VARYING`, `DOUBLE PRECISION`, …).
    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        let normalized = name
            .split_whitespace()
            .map(str::to_ascii_uppercase)
            .collect::<Vec<_>>()
            .join(" ");
        Self::from_word(&normalized).or(match normalized.as_str() {
            "INTEGER" => Some(Self::Int),
            "DEC" => Some(Self::Decimal),
            "DOUBLE PRECISION" => Some(Self::Float),
            "CHARACTER" => Some(Self::Char),
            "CHAR VARYING" | "CHARACTER VARYING" => Some(Self::VarChar),
            "NATIONAL CHAR" | "NATIONAL CHARACTER" => Some(Self::NChar),
            "NATIONAL CHAR VARYING" | "NATIONAL CHARACTER VARYING" => Some(Self::NVarChar),
            "NATIONAL TEXT" => Some(Self::NText),
            "BINARY VARYING" => Some(Self::VarBinary),
            _ => None,
        })
    }

    /// Returns true for types that accept a `MAX` length.
    #[must_use]
    pub const fn accepts_max(&self) -> bool {
        matches!(self, Self::VarChar | Self::NVarChar | Self::VarBinary)
    }
}

/// A built-in type with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SqlDataTypeReference {
    /// The type name as written; multi-word synonyms keep their spelling.
    pub name: SchemaObjectName,
    /// The resolved built-in type.
    pub sql_data_type_option: SqlDataTypeOption,
    /// Length, precision and scale arguments (`MAX` included).
    pub parameters: Vec<Literal>,
    /// Source span.
    pub span: Span,
}

/// Whether an `XML` type is constrained to documents or content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum XmlDataTypeOption {
    /// Neither keyword was written.
    None,
    /// `CONTENT`
    Content,
    /// `DOCUMENT`
    Document,
}

/// `XML [( [CONTENT | DOCUMENT] collection )]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct XmlDataTypeReference {
    /// The type name.
    pub name: SchemaObjectName,
    /// `CONTENT` / `DOCUMENT`.
    pub xml_data_type_option: XmlDataTypeOption,
    /// The schema collection.
    pub xml_schema_collection: Option<SchemaObjectName>,
    /// Source span.
    pub span: Span,
}

/// A user-defined type, possibly schema-qualified.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct UserDataTypeReference {
    /// The type name.
    pub name: SchemaObjectName,
    /// Arguments, rarely used.
    pub parameters: Vec<Literal>,
    /// Source span.
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name_synonyms() {
        assert_eq!(
            SqlDataTypeOption::from_type_name("nvarchar"),
            Some(SqlDataTypeOption::NVarChar)
        );
        assert_eq!(
            SqlDataTypeOption::from_type_name("Double  Precision"),
            Some(SqlDataTypeOption::Float)
        );
        assert_eq!(
            SqlDataTypeOption::from_type_name("national character varying"),
            Some(SqlDataTypeOption::NVarChar)
        );
        assert_eq!(SqlDataTypeOption::from_type_name("geography"), None);
    }

    #[test]
    fn test_accepts_max() {
        assert!(SqlDataTypeOption::VarBinary.accepts_max());
        assert!(!SqlDataTypeOption::Int.accepts_max());
        assert_eq!(SqlDataTypeOption::SqlVariant.as_str(), "SQL_VARIANT");
    }
}
