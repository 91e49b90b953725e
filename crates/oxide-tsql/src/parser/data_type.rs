//! Data type references.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{
    DataTypeReference, Identifier, Literal, LiteralType, QuoteType, SchemaObjectName,
    SqlDataTypeOption, SqlDataTypeReference, UserDataTypeReference, XmlDataTypeOption,
    XmlDataTypeReference,
};
use crate::lexer::{Span, TokenKind};

/// Longest multi-word type name (`NATIONAL CHARACTER VARYING`).
const MAX_TYPE_WORDS: usize = 3;

impl Parser<'_> {
    /// Parses a data type: built-in, `XML` or user-defined.
    pub(super) fn parse_data_type(&mut self) -> Result<DataTypeReference, ParseError> {
        let start = self.current.span;

        if self.check_word("XML") && !self.peek_is(1, &TokenKind::Dot) {
            let name = SchemaObjectName::simple(self.parse_name()?);
            return self.parse_xml_data_type(name, start);
        }

        if let Some((option, words)) = self.peek_builtin_type() {
            for _ in 0..words {
                self.advance();
            }
            let span = self.span_from(start);
            let name =
                SchemaObjectName::simple(Identifier::new(self.text(span), QuoteType::None, span));
            return self.finish_sql_data_type(name, option, start);
        }

        let name = self.parse_schema_object_name()?;
        let qualifier = match (&name.schema_identifier, name.count) {
            (None, 1) => true,
            (Some(schema), 2) => schema.matches("sys"),
            _ => false,
        };
        if qualifier && name.base_identifier.matches("xml") {
            return self.parse_xml_data_type(name, start);
        }
        let builtin = if qualifier {
            SqlDataTypeOption::from_type_name(&name.base_identifier.value)
        } else {
            None
        };
        if let Some(option) = builtin {
            return self.finish_sql_data_type(name, option, start);
        }

        let parameters = if self.check(&TokenKind::LeftParen) {
            self.parse_parenthesized_list(Self::parse_type_parameter)?
        } else {
            Vec::new()
        };
        Ok(DataTypeReference::User(UserDataTypeReference {
            name,
            parameters,
            span: self.span_from(start),
        }))
    }

    /// Looks ahead for the longest run of unquoted words naming a built-in
    /// type. Returns the type and the number of words it spans.
    fn peek_builtin_type(&mut self) -> Option<(SqlDataTypeOption, usize)> {
        let mut words = Vec::with_capacity(MAX_TYPE_WORDS + 1);
        for n in 0..=MAX_TYPE_WORDS {
            match self.peek_nth(n).word() {
                Some(word) => words.push(word.to_owned()),
                None => break,
            }
        }
        for len in (1..=words.len()).rev() {
            if let Some(option) = SqlDataTypeOption::from_type_name(&words[..len].join(" ")) {
                if len == 1 && self.peek_is(1, &TokenKind::Dot) {
                    return None;
                }
                return Some((option, len));
            }
        }
        None
    }

    fn finish_sql_data_type(
        &mut self,
        name: SchemaObjectName,
        sql_data_type_option: SqlDataTypeOption,
        start: Span,
    ) -> Result<DataTypeReference, ParseError> {
        let takes_parameters = !matches!(
            sql_data_type_option,
            SqlDataTypeOption::Table | SqlDataTypeOption::Cursor
        );
        let parameters = if takes_parameters && self.check(&TokenKind::LeftParen) {
            self.parse_parenthesized_list(Self::parse_type_parameter)?
        } else {
            Vec::new()
        };
        Ok(DataTypeReference::Sql(SqlDataTypeReference {
            name,
            sql_data_type_option,
            parameters,
            span: self.span_from(start),
        }))
    }

    /// `MAX` or a signed number.
    fn parse_type_parameter(&mut self) -> Result<Literal, ParseError> {
        if self.check_word("MAX") {
            let span = self.current.span;
            self.advance();
            return Ok(Literal::new(LiteralType::Max, self.text(span), span));
        }
        self.parse_signed_literal()
    }

    fn parse_xml_data_type(
        &mut self,
        name: SchemaObjectName,
        start: Span,
    ) -> Result<DataTypeReference, ParseError> {
        let mut xml_data_type_option = XmlDataTypeOption::None;
        let mut xml_schema_collection = None;
        if self.eat(&TokenKind::LeftParen) {
            if self.eat_word("CONTENT") {
                xml_data_type_option = XmlDataTypeOption::Content;
            } else if self.eat_word("DOCUMENT") {
                xml_data_type_option = XmlDataTypeOption::Document;
            }
            xml_schema_collection = Some(self.parse_schema_object_name()?);
            self.expect(&TokenKind::RightParen)?;
        }
        Ok(DataTypeReference::Xml(XmlDataTypeReference {
            name,
            xml_data_type_option,
            xml_schema_collection,
            span: self.span_from(start),
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::parser::{ParseOptions, Parser};

    fn data_type(sql: &str) -> DataTypeReference {
        let mut parser = Parser::new(sql, &ParseOptions::default());
        parser.parse_data_type().unwrap()
    }

    #[test]
    fn test_builtin_with_parameters() {
        let DataTypeReference::Sql(t) = data_type("DECIMAL(18, 4)") else {
            panic!("expected built-in type");
        };
        assert_eq!(t.sql_data_type_option, SqlDataTypeOption::Decimal);
        let values: Vec<_> = t.parameters.iter().map(|p| p.value.as_str()).collect();
        assert_eq!(values, ["18", "4"]);
    }

    #[test]
    fn test_max_parameter() {
        let DataTypeReference::Sql(t) = data_type("nvarchar(max)") else {
            panic!("expected built-in type");
        };
        assert_eq!(t.sql_data_type_option, SqlDataTypeOption::NVarChar);
        assert_eq!(t.parameters[0].literal_type, LiteralType::Max);
    }

    #[test]
    fn test_multi_word_synonyms() {
        let DataTypeReference::Sql(t) = data_type("double precision") else {
            panic!("expected built-in type");
        };
        assert_eq!(t.sql_data_type_option, SqlDataTypeOption::Float);
        assert_eq!(t.name.base_identifier.value, "double precision");

        assert_eq!(
            data_type("NATIONAL CHARACTER VARYING(20)").sql_data_type_option(),
            Some(SqlDataTypeOption::NVarChar)
        );
        assert_eq!(
            data_type("char varying(5)").sql_data_type_option(),
            Some(SqlDataTypeOption::VarChar)
        );
    }

    #[test]
    fn test_bracketed_and_sys_qualified_builtins() {
        assert_eq!(
            data_type("[int]").sql_data_type_option(),
            Some(SqlDataTypeOption::Int)
        );
        assert_eq!(
            data_type("sys.datetime2(7)").sql_data_type_option(),
            Some(SqlDataTypeOption::DateTime2)
        );
    }

    #[test]
    fn test_user_defined_type() {
        let DataTypeReference::User(t) = data_type("dbo.PhoneNumber") else {
            panic!("expected user type");
        };
        assert_eq!(t.name.base_identifier.value, "PhoneNumber");
        assert!(matches!(data_type("geography"), DataTypeReference::User(_)));
    }

    #[test]
    fn test_xml_type() {
        let DataTypeReference::Xml(t) = data_type("XML(DOCUMENT dbo.Schemas)") else {
            panic!("expected xml type");
        };
        assert_eq!(t.xml_data_type_option, XmlDataTypeOption::Document);
        assert!(t.xml_schema_collection.is_some());
        assert!(matches!(data_type("xml"), DataTypeReference::Xml(_)));
    }

    #[test]
    fn test_stops_before_following_words() {
        let mut parser = Parser::new("INT IDENTITY(1, 1)", &ParseOptions::default());
        let t = parser.parse_data_type().unwrap();
        assert_eq!(t.sql_data_type_option(), Some(SqlDataTypeOption::Int));
        assert!(parser.current.is_word(crate::lexer::Keyword::Identity));
    }
}
