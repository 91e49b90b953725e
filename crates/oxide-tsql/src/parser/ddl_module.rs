//! Views, procedures, functions and triggers.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{
    DdlAction, ExecuteAsModuleOption, FunctionReturnType, FunctionStatement, GeneralModuleOption,
    MethodSpecifier, ModuleOption, ModuleOptionKind, ParameterModifier, ProcedureParameter,
    ProcedureReference, ProcedureStatement, ScalarFunctionReturnType, SelectFunctionReturnType,
    SelectStatement, Statement, TableValuedFunctionReturnType, TriggerAction, TriggerActionType,
    TriggerObject, TriggerScope, TriggerStatement, TriggerType, ViewOption, ViewOptionKind,
    ViewStatement,
};
use crate::lexer::{Keyword, Span, TokenKind};

impl Parser<'_> {
    /// Returns true at `VIEW`, `PROC[EDURE]`, `FUNCTION` or `TRIGGER`.
    pub(super) fn check_module_start(&mut self) -> bool {
        self.check_keyword(Keyword::View)
            || self.check_keyword(Keyword::Proc)
            || self.check_keyword(Keyword::Procedure)
            || self.check_keyword(Keyword::Function)
            || self.check_keyword(Keyword::Trigger)
    }

    /// Parses the module after `CREATE`, `ALTER` or `CREATE OR ALTER`.
    pub(super) fn parse_module_statement(
        &mut self,
        start: Span,
        action: DdlAction,
    ) -> Result<Statement, ParseError> {
        if self.eat_keyword(Keyword::View) {
            return self
                .parse_view_statement(start, action)
                .map(|s| Statement::View(Box::new(s)));
        }
        if self.eat_keyword(Keyword::Proc) || self.eat_keyword(Keyword::Procedure) {
            return self
                .parse_procedure_statement(start, action)
                .map(|s| Statement::Procedure(Box::new(s)));
        }
        if self.eat_keyword(Keyword::Function) {
            return self
                .parse_function_statement(start, action)
                .map(|s| Statement::Function(Box::new(s)));
        }
        self.expect_keyword(Keyword::Trigger)?;
        self.parse_trigger_statement(start, action)
            .map(|s| Statement::Trigger(Box::new(s)))
    }

    // --- Views ---

    /// `VIEW name [(cols)] [WITH attrs] AS select [WITH CHECK OPTION]`
    fn parse_view_statement(
        &mut self,
        start: Span,
        action: DdlAction,
    ) -> Result<ViewStatement, ParseError> {
        let schema_object_name = self.parse_schema_object_name()?;
        let columns = if self.check(&TokenKind::LeftParen) {
            self.parse_identifier_list()?
        } else {
            Vec::new()
        };
        let view_options = if self.eat_keyword(Keyword::With) {
            self.parse_comma_separated(|p| {
                let (option_kind, span) = p.parse_option_key::<ViewOptionKind>("view")?;
                Ok(ViewOption { option_kind, span })
            })?
        } else {
            Vec::new()
        };
        self.expect_keyword(Keyword::As)?;
        let select_statement = self.parse_module_select()?;
        let with_check_option = self.eat_words(&["WITH", "CHECK", "OPTION"]);
        Ok(ViewStatement {
            action,
            schema_object_name,
            columns,
            view_options,
            select_statement,
            with_check_option,
            span: self.span_from(start),
        })
    }

    /// A `SELECT` body, with or without common table expressions.
    fn parse_module_select(&mut self) -> Result<SelectStatement, ParseError> {
        if self.check_keyword(Keyword::With) {
            let ctes = self.parse_with_ctes_and_xml_namespaces()?;
            return self.parse_select_statement(Some(ctes));
        }
        self.parse_select_statement(None)
    }

    // --- Procedures ---

    /// `PROC name [;n] [params] [WITH options] [FOR REPLICATION] AS body`
    fn parse_procedure_statement(
        &mut self,
        start: Span,
        action: DdlAction,
    ) -> Result<ProcedureStatement, ParseError> {
        let name_start = self.current.span;
        let name = self.parse_schema_object_name()?;
        let number = if self.eat(&TokenKind::Semicolon) {
            Some(self.parse_integer_literal()?)
        } else {
            None
        };
        let procedure_reference = ProcedureReference {
            name,
            number,
            span: self.span_from(name_start),
        };
        let parameters = if self.eat(&TokenKind::LeftParen) {
            let parameters = if self.check(&TokenKind::RightParen) {
                Vec::new()
            } else {
                self.parse_comma_separated(Self::parse_procedure_parameter)?
            };
            self.expect(&TokenKind::RightParen)?;
            parameters
        } else if self.check_variable() {
            self.parse_comma_separated(Self::parse_procedure_parameter)?
        } else {
            Vec::new()
        };
        let options = self.parse_module_options()?;
        let is_for_replication = self.eat_words(&["FOR", "REPLICATION"]);
        self.expect_keyword(Keyword::As)?;
        let (method_specifier, statements) = if self.check_keyword(Keyword::External) {
            (Some(self.parse_method_specifier()?), Vec::new())
        } else {
            (None, self.parse_statement_list(|_| false)?)
        };
        Ok(ProcedureStatement {
            action,
            procedure_reference,
            parameters,
            options,
            is_for_replication,
            method_specifier,
            statements,
            span: self.span_from(start),
        })
    }

    /// `@p [AS] type [VARYING] [NULL | NOT NULL] [= default]
    /// [OUT | OUTPUT] [READONLY]`
    fn parse_procedure_parameter(&mut self) -> Result<ProcedureParameter, ParseError> {
        let start = self.current.span;
        let variable_name = self.parse_variable()?;
        self.eat_keyword(Keyword::As);
        let data_type = self.parse_data_type()?;
        let is_varying = self.eat_word("VARYING");
        let nullable = self.parse_nullability();
        let value = if self.eat(&TokenKind::Eq) {
            Some(self.parse_scalar_expression()?)
        } else {
            None
        };
        let modifier = if self.eat_word("OUT") || self.eat_word("OUTPUT") {
            ParameterModifier::Output
        } else if self.eat_word("READONLY") {
            ParameterModifier::ReadOnly
        } else {
            ParameterModifier::None
        };
        Ok(ProcedureParameter {
            variable_name,
            data_type,
            is_varying,
            nullable,
            value,
            modifier,
            span: self.span_from(start),
        })
    }

    /// Optional `WITH option, …` of a procedure, function or trigger.
    fn parse_module_options(&mut self) -> Result<Vec<ModuleOption>, ParseError> {
        if !self.check_keyword(Keyword::With) || self.peek_word(1, "APPEND") {
            return Ok(Vec::new());
        }
        self.advance();
        self.parse_comma_separated(Self::parse_module_option)
    }

    fn parse_module_option(&mut self) -> Result<ModuleOption, ParseError> {
        let start = self.current.span;
        let (option_kind, _) = self.parse_option_key::<ModuleOptionKind>("module")?;
        match option_kind {
            ModuleOptionKind::ExecuteAs | ModuleOptionKind::ExecAs => {
                let execute_as = self.parse_execute_as_clause()?;
                Ok(ModuleOption::ExecuteAs(ExecuteAsModuleOption {
                    option_kind,
                    execute_as,
                    span: self.span_from(start),
                }))
            }
            ModuleOptionKind::CalledOnNullInput => {
                self.expect_keyword(Keyword::Null)?;
                self.expect_word("INPUT")?;
                Ok(self.general_module_option(option_kind, start))
            }
            ModuleOptionKind::ReturnsNullOnNullInput => {
                self.expect_keyword(Keyword::On)?;
                self.expect_keyword(Keyword::Null)?;
                self.expect_word("INPUT")?;
                Ok(self.general_module_option(option_kind, start))
            }
            _ => {
                let value =
                    self.parse_option_value(option_kind.as_str(), option_kind.value_shape())?;
                Ok(ModuleOption::General(GeneralModuleOption {
                    option_kind,
                    value,
                    span: self.span_from(start),
                }))
            }
        }
    }

    fn general_module_option(&self, option_kind: ModuleOptionKind, start: Span) -> ModuleOption {
        ModuleOption::General(GeneralModuleOption {
            option_kind,
            value: None,
            span: self.span_from(start),
        })
    }

    /// `EXTERNAL NAME assembly.class.method`
    fn parse_method_specifier(&mut self) -> Result<MethodSpecifier, ParseError> {
        let start = self.expect_keyword(Keyword::External)?;
        self.expect_word("NAME")?;
        let assembly_name = self.parse_identifier()?;
        self.expect(&TokenKind::Dot)?;
        let class_name = self.parse_identifier()?;
        self.expect(&TokenKind::Dot)?;
        let method_name = self.parse_identifier()?;
        Ok(MethodSpecifier {
            assembly_name,
            class_name,
            method_name,
            span: self.span_from(start),
        })
    }

    // --- Functions ---

    /// `FUNCTION name ([params]) RETURNS … [WITH options] [AS] body`
    fn parse_function_statement(
        &mut self,
        start: Span,
        action: DdlAction,
    ) -> Result<FunctionStatement, ParseError> {
        let name = self.parse_schema_object_name()?;
        self.expect(&TokenKind::LeftParen)?;
        let parameters = if self.check(&TokenKind::RightParen) {
            Vec::new()
        } else {
            self.parse_comma_separated(Self::parse_procedure_parameter)?
        };
        self.expect(&TokenKind::RightParen)?;
        self.expect_word("RETURNS")?;
        let return_type = self.parse_function_return_type()?;
        let options = self.parse_module_options()?;
        self.eat_keyword(Keyword::As);

        let mut method_specifier = None;
        let mut return_select = None;
        let mut statements = Vec::new();
        if self.check_keyword(Keyword::External) {
            method_specifier = Some(self.parse_method_specifier()?);
        } else if matches!(return_type, FunctionReturnType::Select(_)) {
            self.expect_word("RETURN")?;
            return_select = Some(self.parse_inline_function_body()?);
        } else {
            self.expect_keyword(Keyword::Begin)?;
            statements = self.parse_statement_list(|p| p.check_keyword(Keyword::End))?;
            self.expect_keyword(Keyword::End)?;
        }
        Ok(FunctionStatement {
            action,
            name,
            parameters,
            return_type,
            options,
            method_specifier,
            return_select,
            statements,
            span: self.span_from(start),
        })
    }

    /// `type`, `TABLE` or `@t TABLE (…)`.
    fn parse_function_return_type(&mut self) -> Result<FunctionReturnType, ParseError> {
        let start = self.current.span;
        if self.eat_keyword(Keyword::Table) {
            return Ok(FunctionReturnType::Select(SelectFunctionReturnType { span: start }));
        }
        if self.check_variable() {
            let variable_name = self.parse_variable()?;
            self.expect_keyword(Keyword::Table)?;
            let definition = self.parse_table_definition()?;
            return Ok(FunctionReturnType::TableValued(TableValuedFunctionReturnType {
                variable_name,
                definition,
                span: self.span_from(start),
            }));
        }
        let data_type = self.parse_data_type()?;
        Ok(FunctionReturnType::Scalar(ScalarFunctionReturnType {
            data_type,
            span: self.span_from(start),
        }))
    }

    /// `select` or `(select)` after `RETURN` of an inline function.
    fn parse_inline_function_body(&mut self) -> Result<SelectStatement, ParseError> {
        let parenthesized = self.check(&TokenKind::LeftParen)
            && (self.peek_keyword(1, Keyword::Select) || self.peek_keyword(1, Keyword::With));
        if !parenthesized {
            return self.parse_module_select();
        }
        self.advance();
        let select = self.parse_module_select()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(select)
    }

    // --- Triggers ---

    /// `TRIGGER name ON target [WITH options] FOR | AFTER | INSTEAD OF
    /// actions [WITH APPEND] [NOT FOR REPLICATION] AS body`
    fn parse_trigger_statement(
        &mut self,
        start: Span,
        action: DdlAction,
    ) -> Result<TriggerStatement, ParseError> {
        let name = self.parse_schema_object_name()?;
        let object_start = self.expect_keyword(Keyword::On)?;
        let (trigger_scope, object_name) = if self.eat_keyword(Keyword::Database) {
            (TriggerScope::Database, None)
        } else if self.eat_keyword(Keyword::All) {
            self.expect_word("SERVER")?;
            (TriggerScope::AllServer, None)
        } else {
            (TriggerScope::Normal, Some(self.parse_schema_object_name()?))
        };
        let trigger_object = TriggerObject {
            trigger_scope,
            name: object_name,
            span: self.span_from(object_start),
        };
        let options = self.parse_module_options()?;
        let trigger_type = if self.eat_keyword(Keyword::For) {
            TriggerType::For
        } else if self.eat_word("AFTER") {
            TriggerType::After
        } else if self.eat_words(&["INSTEAD", "OF"]) {
            TriggerType::InsteadOf
        } else {
            return Err(self.unexpected(&["FOR", "AFTER", "INSTEAD OF"]));
        };
        let trigger_actions = self.parse_comma_separated(|p| {
            let start = p.current.span;
            let (trigger_action_type, event_name) = if p.eat_keyword(Keyword::Insert) {
                (TriggerActionType::Insert, None)
            } else if p.eat_keyword(Keyword::Update) {
                (TriggerActionType::Update, None)
            } else if p.eat_keyword(Keyword::Delete) {
                (TriggerActionType::Delete, None)
            } else {
                (TriggerActionType::Event, Some(p.parse_name()?))
            };
            Ok(TriggerAction {
                trigger_action_type,
                event_name,
                span: p.span_from(start),
            })
        })?;
        let with_append = self.eat_words(&["WITH", "APPEND"]);
        let is_not_for_replication = self.eat_words(&["NOT", "FOR", "REPLICATION"]);
        self.expect_keyword(Keyword::As)?;
        let (method_specifier, statements) = if self.check_keyword(Keyword::External) {
            (Some(self.parse_method_specifier()?), Vec::new())
        } else {
            (None, self.parse_statement_list(|_| false)?)
        };
        Ok(TriggerStatement {
            action,
            name,
            trigger_object,
            options,
            trigger_type,
            trigger_actions,
            with_append,
            is_not_for_replication,
            method_specifier,
            statements,
            span: self.span_from(start),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::dialect::SqlVersion;
    use crate::parser::{ParseOptions, Parser};

    fn statement(sql: &str) -> Statement {
        let mut parser = Parser::new(sql, &ParseOptions::default());
        parser.parse_statement().unwrap()
    }

    #[test]
    fn test_view() {
        let Statement::View(view) = statement(
            "CREATE VIEW dbo.v (a, b) WITH SCHEMABINDING, VIEW_METADATA \
             AS SELECT x, y FROM dbo.t WITH CHECK OPTION",
        ) else {
            panic!("expected VIEW");
        };
        assert_eq!(view.action, DdlAction::Create);
        assert_eq!(view.columns.len(), 2);
        assert_eq!(view.view_options[1].option_kind, ViewOptionKind::ViewMetadata);
        assert!(view.with_check_option);
    }

    #[test]
    fn test_view_with_cte() {
        assert!(matches!(
            statement("ALTER VIEW v AS WITH c AS (SELECT 1 AS n) SELECT n FROM c"),
            Statement::View(v)
                if v.action == DdlAction::Alter
                    && v.select_statement.with_ctes_and_xml_namespaces.is_some()
        ));
    }

    #[test]
    fn test_procedure() {
        let Statement::Procedure(proc) = statement(
            "CREATE PROCEDURE dbo.p @id INT, @name NVARCHAR(50) = NULL OUTPUT, @t dbo.tt READONLY
             WITH RECOMPILE, EXECUTE AS OWNER
             AS
             SET NOCOUNT ON;
             SELECT @id;
             RETURN 0",
        ) else {
            panic!("expected PROCEDURE");
        };
        assert_eq!(proc.parameters.len(), 3);
        assert_eq!(proc.parameters[1].modifier, ParameterModifier::Output);
        assert!(proc.parameters[1].value.is_some());
        assert_eq!(proc.parameters[2].modifier, ParameterModifier::ReadOnly);
        assert_eq!(proc.options[0].option_kind(), ModuleOptionKind::Recompile);
        assert!(matches!(proc.options[1], ModuleOption::ExecuteAs(_)));
        assert_eq!(proc.statements.len(), 3);
    }

    #[test]
    fn test_procedure_body_stops_at_batch_separator() {
        let mut parser = Parser::new(
            "CREATE PROC p AS SELECT 1\nGO\nSELECT 2",
            &ParseOptions::default(),
        );
        let Statement::Procedure(proc) = parser.parse_statement().unwrap() else {
            panic!("expected PROCEDURE");
        };
        assert_eq!(proc.statements.len(), 1);
    }

    #[test]
    fn test_clr_procedure() {
        assert!(matches!(
            statement("CREATE PROC p @x INT AS EXTERNAL NAME asm.[Ns.Class].Method"),
            Statement::Procedure(p) if p.method_specifier.is_some() && p.statements.is_empty()
        ));
    }

    #[test]
    fn test_create_or_alter_is_gated() {
        let options = ParseOptions::default().with_version(SqlVersion::Sql120);
        let mut parser = Parser::new("CREATE OR ALTER PROC p AS RETURN", &options);
        let Statement::Procedure(proc) = parser.parse_statement().unwrap() else {
            panic!("expected PROCEDURE");
        };
        assert_eq!(proc.action, DdlAction::CreateOrAlter);
        assert_eq!(parser.diagnostics()[0].code.as_str(), "TSQL4001");
    }

    #[test]
    fn test_scalar_function() {
        let Statement::Function(func) = statement(
            "CREATE FUNCTION dbo.f (@a INT, @b INT = 2) RETURNS INT
             WITH SCHEMABINDING, RETURNS NULL ON NULL INPUT
             AS BEGIN RETURN @a + @b END",
        ) else {
            panic!("expected FUNCTION");
        };
        assert!(matches!(func.return_type, FunctionReturnType::Scalar(_)));
        assert_eq!(
            func.options[1].option_kind(),
            ModuleOptionKind::ReturnsNullOnNullInput
        );
        assert_eq!(func.statements.len(), 1);
    }

    #[test]
    fn test_inline_function() {
        let Statement::Function(func) = statement(
            "CREATE FUNCTION f (@id INT) RETURNS TABLE AS RETURN (SELECT * FROM t WHERE id = @id)",
        ) else {
            panic!("expected FUNCTION");
        };
        assert!(matches!(func.return_type, FunctionReturnType::Select(_)));
        assert!(func.return_select.is_some());
    }

    #[test]
    fn test_multi_statement_function() {
        let Statement::Function(func) = statement(
            "CREATE FUNCTION f () RETURNS @r TABLE (id INT) AS
             BEGIN INSERT INTO @r VALUES (1); RETURN; END",
        ) else {
            panic!("expected FUNCTION");
        };
        assert!(func.parameters.is_empty());
        assert!(matches!(func.return_type, FunctionReturnType::TableValued(_)));
        assert_eq!(func.statements.len(), 2);
    }

    #[test]
    fn test_dml_trigger() {
        let Statement::Trigger(trigger) = statement(
            "CREATE TRIGGER trg ON dbo.t AFTER INSERT, UPDATE NOT FOR REPLICATION
             AS BEGIN SET NOCOUNT ON; END",
        ) else {
            panic!("expected TRIGGER");
        };
        assert_eq!(trigger.trigger_object.trigger_scope, TriggerScope::Normal);
        assert_eq!(trigger.trigger_type, TriggerType::After);
        assert_eq!(trigger.trigger_actions.len(), 2);
        assert!(trigger.is_not_for_replication);
    }

    #[test]
    fn test_ddl_trigger() {
        let Statement::Trigger(trigger) = statement(
            "CREATE TRIGGER audit_ddl ON DATABASE FOR CREATE_TABLE, DROP_TABLE AS PRINT 'x'",
        ) else {
            panic!("expected TRIGGER");
        };
        assert_eq!(trigger.trigger_object.trigger_scope, TriggerScope::Database);
        assert!(trigger
            .trigger_actions
            .iter()
            .all(|a| a.trigger_action_type == TriggerActionType::Event));

        assert!(matches!(
            statement("CREATE TRIGGER t ON dbo.v INSTEAD OF DELETE AS RETURN"),
            Statement::Trigger(t) if t.trigger_type == TriggerType::InsteadOf
        ));
    }
}
