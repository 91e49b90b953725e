//! `CREATE`, `ALTER` and `DROP` dispatch, plus the smaller schema objects:
//! types, sequences, schemas, synonyms and partitioning.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{
    AlterPartitionFunctionStatement, AlterPartitionSchemeStatement, AlterSchemaStatement,
    AssemblyName, CreatePartitionFunctionStatement, CreatePartitionSchemeStatement,
    CreateSchemaStatement, CreateSynonymStatement, CreateTypeTableStatement,
    CreateTypeUddtStatement, CreateTypeUdtStatement, DataTypeSequenceOption, DdlAction,
    DropEventSessionStatement, DropFullTextIndexStatement, DropIndexClause, DropIndexStatement,
    DropMasterKeyStatement, DropNamedObjectKind, DropNamedObjectStatement, DropObjectKind,
    DropObjectsStatement, DropTriggerStatement, IdentifierOrValueExpression,
    PartitionFunctionRange, ScalarExpressionSequenceOption, SequenceOption, SequenceOptionKind,
    SequenceStatement, Statement, TransferEntityKind, TriggerScope,
};
use crate::dialect::Feature;
use crate::lexer::{Keyword, Span, TokenKind};

impl Parser<'_> {
    /// `CREATE …` and `CREATE OR ALTER …`.
    pub(super) fn parse_create_statement(&mut self) -> Result<Statement, ParseError> {
        let start = self.expect_keyword(Keyword::Create)?;
        if self.check_keyword(Keyword::Or) && self.peek_keyword(1, Keyword::Alter) {
            self.advance();
            self.advance();
            self.require(Feature::CreateOrAlter, self.span_from(start));
            return self.parse_module_statement(start, DdlAction::CreateOrAlter);
        }
        if self.check_module_start() {
            return self.parse_module_statement(start, DdlAction::Create);
        }
        if self.eat_keyword(Keyword::Table) {
            return self
                .parse_create_table_statement(start)
                .map(|s| Statement::CreateTable(Box::new(s)));
        }
        if self.check_index_start() {
            return self.parse_create_index_statement(start);
        }
        if self.eat_word("TYPE") {
            return self.parse_create_type_statement(start);
        }
        if self.eat_word("SEQUENCE") {
            return self
                .parse_sequence_statement(start, DdlAction::Create)
                .map(|s| Statement::Sequence(Box::new(s)));
        }
        if self.eat_keyword(Keyword::Schema) {
            return self
                .parse_create_schema_statement(start)
                .map(|s| Statement::CreateSchema(Box::new(s)));
        }
        if self.eat_word("SYNONYM") {
            return self
                .parse_create_synonym_statement(start)
                .map(|s| Statement::CreateSynonym(Box::new(s)));
        }
        if self.eat_words(&["PARTITION", "FUNCTION"]) {
            return self
                .parse_create_partition_function_statement(start)
                .map(|s| Statement::CreatePartitionFunction(Box::new(s)));
        }
        if self.eat_words(&["PARTITION", "SCHEME"]) {
            return self
                .parse_create_partition_scheme_statement(start)
                .map(|s| Statement::CreatePartitionScheme(Box::new(s)));
        }
        if self.eat_words(&["DATABASE", "AUDIT", "SPECIFICATION"]) {
            return self
                .parse_audit_specification_statement(start, DdlAction::Create, false)
                .map(|s| Statement::AuditSpecification(Box::new(s)));
        }
        if self.eat_keyword(Keyword::Database) {
            return self
                .parse_create_database_statement(start)
                .map(|s| Statement::CreateDatabase(Box::new(s)));
        }
        self.parse_create_principal_or_server_object(start)
    }

    /// `CREATE` forms handled by the security and server productions.
    fn parse_create_principal_or_server_object(
        &mut self,
        start: Span,
    ) -> Result<Statement, ParseError> {
        if let Some(result) = self.parse_security_object(start, DdlAction::Create) {
            return result;
        }
        if let Some(result) = self.parse_server_object(start, DdlAction::Create) {
            return result;
        }
        Err(self.unexpected(&["object type"]))
    }

    /// `ALTER …`.
    pub(super) fn parse_alter_statement(&mut self) -> Result<Statement, ParseError> {
        let start = self.expect_keyword(Keyword::Alter)?;
        if self.check_module_start() {
            return self.parse_module_statement(start, DdlAction::Alter);
        }
        if self.eat_keyword(Keyword::Table) {
            return self
                .parse_alter_table_statement(start)
                .map(|s| Statement::AlterTable(Box::new(s)));
        }
        if self.eat_keyword(Keyword::Index) {
            return self
                .parse_alter_index_statement(start)
                .map(|s| Statement::AlterIndex(Box::new(s)));
        }
        if self.eat_word("SEQUENCE") {
            return self
                .parse_sequence_statement(start, DdlAction::Alter)
                .map(|s| Statement::Sequence(Box::new(s)));
        }
        if self.eat_keyword(Keyword::Schema) {
            return self
                .parse_alter_schema_statement(start)
                .map(|s| Statement::AlterSchema(Box::new(s)));
        }
        if self.eat_words(&["PARTITION", "FUNCTION"]) {
            return self
                .parse_alter_partition_function_statement(start)
                .map(|s| Statement::AlterPartitionFunction(Box::new(s)));
        }
        if self.eat_words(&["PARTITION", "SCHEME"]) {
            return self
                .parse_alter_partition_scheme_statement(start)
                .map(|s| Statement::AlterPartitionScheme(Box::new(s)));
        }
        if self.eat_words(&["DATABASE", "AUDIT", "SPECIFICATION"]) {
            return self
                .parse_audit_specification_statement(start, DdlAction::Alter, false)
                .map(|s| Statement::AuditSpecification(Box::new(s)));
        }
        if self.eat_keyword(Keyword::Database) {
            return self.parse_alter_database_statement(start);
        }
        if let Some(result) = self.parse_security_object(start, DdlAction::Alter) {
            return result;
        }
        if let Some(result) = self.parse_server_object(start, DdlAction::Alter) {
            return result;
        }
        Err(self.unexpected(&["object type"]))
    }

    /// `DROP …`.
    pub(super) fn parse_drop_statement(&mut self) -> Result<Statement, ParseError> {
        if self.peek_word(1, "SIGNATURE")
            || (self.peek_word(1, "COUNTER") && self.peek_word(2, "SIGNATURE"))
        {
            return self
                .parse_signature_statement(true)
                .map(|s| Statement::DropSignature(Box::new(s)));
        }
        let start = self.expect_keyword(Keyword::Drop)?;
        if self.eat_keyword(Keyword::Index) {
            return self
                .parse_drop_index_statement(start)
                .map(|s| Statement::DropIndex(Box::new(s)));
        }
        if self.eat_keyword(Keyword::Trigger) {
            return self
                .parse_drop_trigger_statement(start)
                .map(|s| Statement::DropTrigger(Box::new(s)));
        }
        if self.eat_words(&["EVENT", "SESSION"]) {
            return self
                .parse_drop_event_session_statement(start)
                .map(|s| Statement::DropEventSession(Box::new(s)));
        }
        if self.eat_words(&["FULLTEXT", "INDEX"]) {
            self.expect_keyword(Keyword::On)?;
            let table_name = self.parse_schema_object_name()?;
            return Ok(Statement::DropFullTextIndex(Box::new(DropFullTextIndexStatement {
                table_name,
                span: self.span_from(start),
            })));
        }
        if self.eat_words(&["MASTER", "KEY"]) {
            return Ok(Statement::DropMasterKey(Box::new(DropMasterKeyStatement {
                span: self.span_from(start),
            })));
        }
        if self.check_keyword(Keyword::Database) && !self.peek_word(1, "AUDIT") {
            self.advance();
            return self
                .parse_drop_database_statement(start)
                .map(|s| Statement::DropDatabase(Box::new(s)));
        }
        if let Some(object_kind) = self.eat_multi_word(drop_object_kind) {
            let is_if_exists = self.parse_if_exists();
            let objects = self.parse_comma_separated(Self::parse_schema_object_name)?;
            return Ok(Statement::DropObjects(Box::new(DropObjectsStatement {
                object_kind,
                is_if_exists,
                objects,
                span: self.span_from(start),
            })));
        }
        if let Some(object_kind) = self.eat_multi_word(DropNamedObjectKind::from_word) {
            let is_if_exists = self.parse_if_exists();
            let name = self.parse_identifier()?;
            return Ok(Statement::DropNamedObject(Box::new(DropNamedObjectStatement {
                object_kind,
                is_if_exists,
                name,
                span: self.span_from(start),
            })));
        }
        Err(self.unexpected(&["object type"]))
    }

    /// Optional `IF EXISTS` after `DROP kind`.
    pub(super) fn parse_if_exists(&mut self) -> bool {
        if self.check_keyword(Keyword::If) && self.peek_keyword(1, Keyword::Exists) {
            let start = self.current.span;
            self.advance();
            self.advance();
            self.require(Feature::DropIfExists, self.span_from(start));
            return true;
        }
        false
    }

    /// `DROP INDEX [IF EXISTS] ix ON t [WITH (…)], …` or the legacy
    /// `DROP INDEX t.ix, …`.
    fn parse_drop_index_statement(
        &mut self,
        start: Span,
    ) -> Result<DropIndexStatement, ParseError> {
        let is_if_exists = self.parse_if_exists();
        let drop_index_clauses = self.parse_comma_separated(|p| {
            let clause_start = p.current.span;
            let mut parts = vec![p.parse_identifier()?];
            while p.eat(&TokenKind::Dot) {
                parts.push(p.parse_identifier()?);
            }
            let Some(index) = parts.pop() else {
                return Err(p.unexpected(&["index name"]));
            };
            if parts.is_empty() {
                p.expect_keyword(Keyword::On)?;
                let object = p.parse_schema_object_name()?;
                let options = p.parse_with_option_list(Self::parse_index_option)?;
                return Ok(DropIndexClause {
                    legacy_object: None,
                    index,
                    object: Some(object),
                    options,
                    span: p.span_from(clause_start),
                });
            }
            let object_span = parts
                .iter()
                .map(|part| part.span)
                .reduce(|a, b| a.merge(b))
                .unwrap_or(clause_start);
            let parts = parts.into_iter().map(Some).collect();
            let mut legacy_object = p.schema_object_name_from_parts(parts, clause_start)?;
            legacy_object.span = object_span;
            Ok(DropIndexClause {
                legacy_object: Some(legacy_object),
                index,
                object: None,
                options: Vec::new(),
                span: p.span_from(clause_start),
            })
        })?;
        Ok(DropIndexStatement {
            is_if_exists,
            drop_index_clauses,
            span: self.span_from(start),
        })
    }

    /// `DROP TRIGGER [IF EXISTS] name, … [ON DATABASE | ON ALL SERVER]`
    fn parse_drop_trigger_statement(
        &mut self,
        start: Span,
    ) -> Result<DropTriggerStatement, ParseError> {
        let is_if_exists = self.parse_if_exists();
        let objects = self.parse_comma_separated(Self::parse_schema_object_name)?;
        let trigger_scope = if self.eat_keyword(Keyword::On) {
            if self.eat_keyword(Keyword::Database) {
                TriggerScope::Database
            } else {
                self.expect_keyword(Keyword::All)?;
                self.expect_word("SERVER")?;
                TriggerScope::AllServer
            }
        } else {
            TriggerScope::Normal
        };
        Ok(DropTriggerStatement {
            is_if_exists,
            objects,
            trigger_scope,
            span: self.span_from(start),
        })
    }

    /// `DROP EVENT SESSION [IF EXISTS] name ON SERVER | DATABASE`
    fn parse_drop_event_session_statement(
        &mut self,
        start: Span,
    ) -> Result<DropEventSessionStatement, ParseError> {
        let is_if_exists = self.parse_if_exists();
        let name = self.parse_identifier()?;
        self.expect_keyword(Keyword::On)?;
        let is_server = if self.eat_word("SERVER") {
            true
        } else {
            self.expect_keyword(Keyword::Database)?;
            false
        };
        Ok(DropEventSessionStatement {
            is_if_exists,
            name,
            is_server,
            span: self.span_from(start),
        })
    }

    // --- Types ---

    /// `CREATE TYPE name FROM base | AS TABLE (…) | EXTERNAL NAME asm[.class]`
    fn parse_create_type_statement(&mut self, start: Span) -> Result<Statement, ParseError> {
        let name = self.parse_schema_object_name()?;
        if self.eat_keyword(Keyword::From) {
            let data_type = self.parse_data_type()?;
            let nullable = self.parse_nullability();
            return Ok(Statement::CreateTypeUddt(Box::new(CreateTypeUddtStatement {
                name,
                data_type,
                nullable,
                span: self.span_from(start),
            })));
        }
        if self.eat_keyword(Keyword::External) {
            self.expect_word("NAME")?;
            let assembly_start = self.current.span;
            let assembly = self.parse_identifier()?;
            let class_name = if self.eat(&TokenKind::Dot) {
                Some(self.parse_identifier()?)
            } else {
                None
            };
            return Ok(Statement::CreateTypeUdt(Box::new(CreateTypeUdtStatement {
                name,
                assembly_name: AssemblyName {
                    name: assembly,
                    class_name,
                    span: self.span_from(assembly_start),
                },
                span: self.span_from(start),
            })));
        }
        self.expect_keyword(Keyword::As)?;
        self.expect_keyword(Keyword::Table)?;
        let definition = self.parse_table_definition()?;
        let options = self.parse_with_option_list(Self::parse_table_option)?;
        Ok(Statement::CreateTypeTable(Box::new(CreateTypeTableStatement {
            name,
            definition,
            options,
            span: self.span_from(start),
        })))
    }

    /// Optional `NULL` / `NOT NULL`.
    pub(super) fn parse_nullability(&mut self) -> Option<bool> {
        if self.eat_keyword(Keyword::Null) {
            return Some(true);
        }
        if self.check_keyword(Keyword::Not) && self.peek_keyword(1, Keyword::Null) {
            self.advance();
            self.advance();
            return Some(false);
        }
        None
    }

    // --- Sequences ---

    /// `CREATE | ALTER SEQUENCE name option …`
    fn parse_sequence_statement(
        &mut self,
        start: Span,
        action: DdlAction,
    ) -> Result<SequenceStatement, ParseError> {
        let name = self.parse_schema_object_name()?;
        let mut sequence_options = Vec::new();
        while let Some(option) = self.parse_sequence_option()? {
            sequence_options.push(option);
        }
        Ok(SequenceStatement {
            action,
            name,
            sequence_options,
            span: self.span_from(start),
        })
    }

    fn parse_sequence_option(&mut self) -> Result<Option<SequenceOption>, ParseError> {
        let start = self.current.span;
        if self.check_word("NO") {
            let Some(option_kind) = self
                .peek_nth(1)
                .word()
                .and_then(SequenceOptionKind::from_word)
            else {
                return Ok(None);
            };
            self.advance();
            self.advance();
            return Ok(Some(SequenceOption::Scalar(ScalarExpressionSequenceOption {
                option_kind,
                no_value: true,
                option_value: None,
                span: self.span_from(start),
            })));
        }
        let Some((option_kind, _)) = self.peek_option_key::<SequenceOptionKind>() else {
            return Ok(None);
        };
        self.parse_option_key::<SequenceOptionKind>("sequence")?;
        let option_value = match option_kind {
            SequenceOptionKind::As => {
                let data_type = self.parse_data_type()?;
                return Ok(Some(SequenceOption::DataType(DataTypeSequenceOption {
                    option_kind,
                    data_type,
                    span: self.span_from(start),
                })));
            }
            SequenceOptionKind::Cycle => None,
            SequenceOptionKind::Restart => {
                if self.eat_keyword(Keyword::With) {
                    Some(self.parse_scalar_expression()?)
                } else {
                    None
                }
            }
            SequenceOptionKind::Cache => {
                if self.check_expression_start() {
                    Some(self.parse_scalar_expression()?)
                } else {
                    None
                }
            }
            SequenceOptionKind::IncrementBy
            | SequenceOptionKind::MaxValue
            | SequenceOptionKind::MinValue
            | SequenceOptionKind::StartWith => Some(self.parse_scalar_expression()?),
        };
        Ok(Some(SequenceOption::Scalar(ScalarExpressionSequenceOption {
            option_kind,
            no_value: false,
            option_value,
            span: self.span_from(start),
        })))
    }

    // --- Schemas and synonyms ---

    /// `CREATE SCHEMA name [AUTHORIZATION owner] [element …]`
    fn parse_create_schema_statement(
        &mut self,
        start: Span,
    ) -> Result<CreateSchemaStatement, ParseError> {
        let name = self.parse_identifier()?;
        let owner = if self.eat_keyword(Keyword::Authorization) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let mut schema_elements = Vec::new();
        while self.check_keyword(Keyword::Create)
            || self.check_keyword(Keyword::Grant)
            || self.check_keyword(Keyword::Revoke)
            || self.check_keyword(Keyword::Deny)
        {
            schema_elements.push(self.parse_statement()?);
        }
        Ok(CreateSchemaStatement {
            name,
            owner,
            schema_elements,
            span: self.span_from(start),
        })
    }

    /// `ALTER SCHEMA name TRANSFER [OBJECT:: | TYPE:: | XML SCHEMA
    /// COLLECTION::] object`
    fn parse_alter_schema_statement(
        &mut self,
        start: Span,
    ) -> Result<AlterSchemaStatement, ParseError> {
        let name = self.parse_identifier()?;
        self.expect_word("TRANSFER")?;
        let object_kind = if self.peek_is(1, &TokenKind::DoubleColon) {
            let kind = if self.eat_word("OBJECT") {
                TransferEntityKind::Object
            } else if self.eat_word("TYPE") {
                TransferEntityKind::Type
            } else {
                return Err(self.unexpected(&["OBJECT", "TYPE", "XML SCHEMA COLLECTION"]));
            };
            self.expect(&TokenKind::DoubleColon)?;
            kind
        } else if self.eat_words(&["XML", "SCHEMA", "COLLECTION"]) {
            self.expect(&TokenKind::DoubleColon)?;
            TransferEntityKind::XmlSchemaCollection
        } else {
            TransferEntityKind::NotSpecified
        };
        let object_name = self.parse_schema_object_name()?;
        Ok(AlterSchemaStatement {
            name,
            object_kind,
            object_name,
            span: self.span_from(start),
        })
    }

    /// `CREATE SYNONYM name FOR target`
    fn parse_create_synonym_statement(
        &mut self,
        start: Span,
    ) -> Result<CreateSynonymStatement, ParseError> {
        let name = self.parse_schema_object_name()?;
        self.expect_keyword(Keyword::For)?;
        let for_name = self.parse_schema_object_name()?;
        Ok(CreateSynonymStatement {
            name,
            for_name,
            span: self.span_from(start),
        })
    }

    // --- Partitioning ---

    /// `CREATE PARTITION FUNCTION pf (type) AS RANGE [LEFT | RIGHT] FOR
    /// VALUES (…)`
    fn parse_create_partition_function_statement(
        &mut self,
        start: Span,
    ) -> Result<CreatePartitionFunctionStatement, ParseError> {
        let name = self.parse_identifier()?;
        self.expect(&TokenKind::LeftParen)?;
        let parameter_type = self.parse_data_type()?;
        self.expect(&TokenKind::RightParen)?;
        self.expect_keyword(Keyword::As)?;
        self.expect_word("RANGE")?;
        let range = if self.eat_keyword(Keyword::Left) {
            PartitionFunctionRange::Left
        } else if self.eat_keyword(Keyword::Right) {
            PartitionFunctionRange::Right
        } else {
            PartitionFunctionRange::NotSpecified
        };
        self.expect_keyword(Keyword::For)?;
        self.expect_keyword(Keyword::Values)?;
        self.expect(&TokenKind::LeftParen)?;
        let boundary_values = if self.check(&TokenKind::RightParen) {
            Vec::new()
        } else {
            self.parse_comma_separated(Self::parse_scalar_expression)?
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(CreatePartitionFunctionStatement {
            name,
            parameter_type,
            range,
            boundary_values,
            span: self.span_from(start),
        })
    }

    /// `ALTER PARTITION FUNCTION pf () SPLIT | MERGE RANGE (value)`
    fn parse_alter_partition_function_statement(
        &mut self,
        start: Span,
    ) -> Result<AlterPartitionFunctionStatement, ParseError> {
        let name = self.parse_identifier()?;
        self.expect(&TokenKind::LeftParen)?;
        self.expect(&TokenKind::RightParen)?;
        let is_split = if self.eat_word("SPLIT") {
            true
        } else {
            self.expect_keyword(Keyword::Merge)?;
            false
        };
        self.expect_word("RANGE")?;
        self.expect(&TokenKind::LeftParen)?;
        let boundary = self.parse_scalar_expression()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(AlterPartitionFunctionStatement {
            name,
            is_split,
            boundary,
            span: self.span_from(start),
        })
    }

    /// `CREATE PARTITION SCHEME ps AS PARTITION pf [ALL] TO (fg, …)`
    fn parse_create_partition_scheme_statement(
        &mut self,
        start: Span,
    ) -> Result<CreatePartitionSchemeStatement, ParseError> {
        let name = self.parse_identifier()?;
        self.expect_keyword(Keyword::As)?;
        self.expect_word("PARTITION")?;
        let partition_function = self.parse_identifier()?;
        let is_all = self.eat_keyword(Keyword::All);
        self.expect_keyword(Keyword::To)?;
        let file_groups = self.parse_parenthesized_list(Self::parse_file_group_name)?;
        Ok(CreatePartitionSchemeStatement {
            name,
            partition_function,
            is_all,
            file_groups,
            span: self.span_from(start),
        })
    }

    /// `ALTER PARTITION SCHEME ps NEXT USED [fg]`
    fn parse_alter_partition_scheme_statement(
        &mut self,
        start: Span,
    ) -> Result<AlterPartitionSchemeStatement, ParseError> {
        let name = self.parse_identifier()?;
        self.expect_word("NEXT")?;
        self.expect_word("USED")?;
        let file_group = if self.check_identifier() || self.check_string() {
            Some(self.parse_file_group_name()?)
        } else {
            None
        };
        Ok(AlterPartitionSchemeStatement {
            name,
            file_group,
            span: self.span_from(start),
        })
    }

    /// A file group, partition scheme or filestream location: a name
    /// (`PRIMARY` and `DEFAULT` included) or a string.
    pub(super) fn parse_file_group_name(
        &mut self,
    ) -> Result<IdentifierOrValueExpression, ParseError> {
        if self.check_string() {
            return self
                .parse_string_literal()
                .map(IdentifierOrValueExpression::Value);
        }
        self.parse_name().map(IdentifierOrValueExpression::Identifier)
    }
}

/// `PROC` abbreviates `PROCEDURE`.
fn drop_object_kind(word: &str) -> Option<DropObjectKind> {
    if word.eq_ignore_ascii_case("PROC") {
        return Some(DropObjectKind::Procedure);
    }
    DropObjectKind::from_word(word)
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::parser::{ParseOptions, Parser};

    fn statement(sql: &str) -> Statement {
        let mut parser = Parser::new(sql, &ParseOptions::default());
        parser.parse_statement().unwrap()
    }

    #[test]
    fn test_drop_objects() {
        let Statement::DropObjects(stmt) = statement("DROP TABLE IF EXISTS dbo.a, b") else {
            panic!("expected DROP TABLE");
        };
        assert_eq!(stmt.object_kind, DropObjectKind::Table);
        assert!(stmt.is_if_exists);
        assert_eq!(stmt.objects.len(), 2);

        assert!(matches!(
            statement("DROP PROC dbo.p"),
            Statement::DropObjects(s) if s.object_kind == DropObjectKind::Procedure
        ));
        assert!(matches!(
            statement("DROP EXTERNAL DATA SOURCE src"),
            Statement::DropNamedObject(s)
                if s.object_kind == DropNamedObjectKind::ExternalDataSource
        ));
        assert!(matches!(
            statement("DROP USER bob"),
            Statement::DropNamedObject(s) if s.object_kind == DropNamedObjectKind::User
        ));
    }

    #[test]
    fn test_drop_if_exists_is_gated() {
        let options = ParseOptions::default().with_version(crate::dialect::SqlVersion::Sql120);
        let mut parser = Parser::new("DROP VIEW IF EXISTS v", &options);
        parser.parse_statement().unwrap();
        assert_eq!(parser.diagnostics().len(), 1);
        assert_eq!(parser.diagnostics()[0].code.as_str(), "TSQL4001");
    }

    #[test]
    fn test_drop_index_forms() {
        let Statement::DropIndex(stmt) =
            statement("DROP INDEX ix ON dbo.t WITH (ONLINE = ON), t2.ix2")
        else {
            panic!("expected DROP INDEX");
        };
        let clauses = &stmt.drop_index_clauses;
        assert!(clauses[0].object.is_some());
        assert_eq!(clauses[0].options.len(), 1);
        let legacy = clauses[1].legacy_object.as_ref().unwrap();
        assert_eq!(legacy.base_identifier.value, "t2");
        assert!(legacy.span.end <= clauses[1].index.span.start);
    }

    #[test]
    fn test_drop_trigger_scope() {
        assert!(matches!(
            statement("DROP TRIGGER trg ON ALL SERVER"),
            Statement::DropTrigger(s) if s.trigger_scope == TriggerScope::AllServer
        ));
    }

    #[test]
    fn test_create_types() {
        assert!(matches!(
            statement("CREATE TYPE dbo.Ssn FROM VARCHAR(11) NOT NULL"),
            Statement::CreateTypeUddt(s) if s.nullable == Some(false)
        ));
        assert!(matches!(
            statement("CREATE TYPE dbo.Ids AS TABLE (id INT PRIMARY KEY)"),
            Statement::CreateTypeTable(_)
        ));
        assert!(matches!(
            statement("CREATE TYPE dbo.Point EXTERNAL NAME Geo.[Geo.Point]"),
            Statement::CreateTypeUdt(s) if s.assembly_name.class_name.is_some()
        ));
    }

    #[test]
    fn test_sequence_options() {
        let Statement::Sequence(stmt) = statement(
            "CREATE SEQUENCE dbo.s AS BIGINT START WITH 1 INCREMENT BY -1 NO MAXVALUE CYCLE CACHE",
        ) else {
            panic!("expected sequence");
        };
        let kinds: Vec<_> = stmt
            .sequence_options
            .iter()
            .map(SequenceOption::option_kind)
            .collect();
        assert_eq!(
            kinds,
            [
                SequenceOptionKind::As,
                SequenceOptionKind::StartWith,
                SequenceOptionKind::IncrementBy,
                SequenceOptionKind::MaxValue,
                SequenceOptionKind::Cycle,
                SequenceOptionKind::Cache,
            ]
        );
        assert!(matches!(
            &stmt.sequence_options[3],
            SequenceOption::Scalar(o) if o.no_value
        ));

        assert!(matches!(
            statement("ALTER SEQUENCE s RESTART WITH 10"),
            Statement::Sequence(s) if s.action == DdlAction::Alter
        ));
    }

    #[test]
    fn test_schema_statements() {
        let Statement::CreateSchema(stmt) =
            statement("CREATE SCHEMA sales AUTHORIZATION dbo CREATE TABLE t (id INT)")
        else {
            panic!("expected CREATE SCHEMA");
        };
        assert_eq!(stmt.schema_elements.len(), 1);

        assert!(matches!(
            statement("ALTER SCHEMA sales TRANSFER OBJECT::dbo.t"),
            Statement::AlterSchema(s) if s.object_kind == TransferEntityKind::Object
        ));
    }

    #[test]
    fn test_partitioning() {
        let Statement::CreatePartitionFunction(stmt) =
            statement("CREATE PARTITION FUNCTION pf (INT) AS RANGE RIGHT FOR VALUES (1, 100)")
        else {
            panic!("expected partition function");
        };
        assert_eq!(stmt.range, PartitionFunctionRange::Right);
        assert_eq!(stmt.boundary_values.len(), 2);

        assert!(matches!(
            statement("CREATE PARTITION SCHEME ps AS PARTITION pf ALL TO ([PRIMARY])"),
            Statement::CreatePartitionScheme(s) if s.is_all
        ));
        assert!(matches!(
            statement("ALTER PARTITION FUNCTION pf () SPLIT RANGE (500)"),
            Statement::AlterPartitionFunction(s) if s.is_split
        ));
        assert!(matches!(
            statement("ALTER PARTITION SCHEME ps NEXT USED fg2"),
            Statement::AlterPartitionScheme(s) if s.file_group.is_some()
        ));
    }

    #[test]
    fn test_unknown_object_type() {
        let mut parser = Parser::new("CREATE WIDGET w", &ParseOptions::default());
        assert!(parser.parse_statement().is_err());
    }
}
