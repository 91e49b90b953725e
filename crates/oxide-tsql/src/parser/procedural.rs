//! Control flow, variables, `EXECUTE`, cursors, session `SET`,
//! transactions and Service Broker conversations.

use super::error::ParseError;
use super::parser::Parser;
use super::pratt::token_to_assignment;
use crate::ast::{
    AtomicBlockOption, BeginConversationTimerStatement, BeginDialogStatement,
    BeginEndBlockStatement, BeginTransactionStatement, BreakStatement, CloseCursorStatement,
    CommitTransactionStatement, ContinueStatement, CursorDefinition, CursorOption, CursorOptionKind,
    DeallocateCursorStatement, DeclareCursorStatement, DeclareTableVariableStatement,
    DeclareVariableElement, DeclareVariableStatement, DialogOption, DialogOptionKind,
    EndConversationStatement, ExecutableEntity, ExecutableProcedureReference, ExecutableStringList,
    ExecuteAsClause, ExecuteAsOption, ExecuteAsStatement, ExecuteOption, ExecuteOptionKind,
    ExecuteParameter, ExecuteSpecification, ExecuteStatement, FetchCursorStatement,
    FetchOrientation, FetchType, GeneralSetCommandType, GeneralSetStatement,
    GetConversationGroupStatement, GoToStatement, Identifier, IdentifierOrValueExpression,
    IfStatement, IsolationLevel, MoveConversationStatement, OpenCursorStatement, OptionState,
    PredicateSetStatement, PrintStatement, ProcedureReference, ProcedureReferenceName,
    RaiseErrorOption, RaiseErrorStatement, ReceiveStatement, ResultColumnDefinition,
    ResultSetDefinition, ResultSetType, ReturnStatement, RevertStatement,
    RollbackTransactionStatement, SaveTransactionStatement, SendStatement,
    SetIdentityInsertStatement, SetOptions, SetRowCountStatement, SetStatisticsOptions,
    SetStatisticsStatement, SetTextSizeStatement, SetTransactionIsolationLevelStatement,
    SetVariableStatement, Statement, ThrowStatement, TryCatchStatement, UseStatement,
    VariableMethodCall, WaitForOption, WaitForStatement, WhileStatement,
};
use crate::lexer::{Keyword, Span, TokenKind};

/// Reserved words that can begin a scalar expression.
const EXPRESSION_KEYWORDS: &[Keyword] = &[
    Keyword::Case,
    Keyword::Coalesce,
    Keyword::Convert,
    Keyword::CurrentDate,
    Keyword::CurrentTime,
    Keyword::CurrentTimestamp,
    Keyword::CurrentUser,
    Keyword::Left,
    Keyword::Not,
    Keyword::Null,
    Keyword::NullIf,
    Keyword::Right,
    Keyword::SessionUser,
    Keyword::SystemUser,
    Keyword::TryConvert,
    Keyword::User,
];

/// Unreserved words that begin a statement.
const CONTEXTUAL_STATEMENT_WORDS: &[&str] = &["THROW", "RECEIVE", "SEND", "MOVE", "GET"];

impl Parser<'_> {
    /// Returns true if the current token can begin a scalar expression
    /// rather than the next statement.
    pub(super) fn check_expression_start(&mut self) -> bool {
        match &self.current.kind {
            TokenKind::Integer(_)
            | TokenKind::Numeric(_)
            | TokenKind::Real(_)
            | TokenKind::Money(_)
            | TokenKind::String { .. }
            | TokenKind::Binary(_)
            | TokenKind::Variable(_)
            | TokenKind::GlobalVariable(_)
            | TokenKind::LeftParen
            | TokenKind::LeftBrace
            | TokenKind::Minus
            | TokenKind::Plus
            | TokenKind::Tilde => true,
            TokenKind::Identifier(_)
            | TokenKind::BracketIdentifier(_)
            | TokenKind::QuotedIdentifier(_) => {
                !self.check_any_word(CONTEXTUAL_STATEMENT_WORDS)
                    && !self.peek_is(1, &TokenKind::Colon)
            }
            TokenKind::Keyword(keyword) => EXPRESSION_KEYWORDS.contains(keyword),
            _ => false,
        }
    }

    // --- Blocks and control flow ---

    /// `BEGIN …`: blocks, `TRY`/`CATCH`, transactions and dialogs.
    pub(super) fn parse_begin_statement(&mut self) -> Result<Statement, ParseError> {
        if self.peek_word(1, "TRY") {
            return self
                .parse_try_catch_statement()
                .map(|s| Statement::TryCatch(Box::new(s)));
        }
        if self.peek_keyword(1, Keyword::Tran)
            || self.peek_keyword(1, Keyword::Transaction)
            || self.peek_keyword(1, Keyword::Distributed)
        {
            return self
                .parse_begin_transaction_statement()
                .map(|s| Statement::BeginTransaction(Box::new(s)));
        }
        if self.peek_word(1, "DIALOG") {
            return self
                .parse_begin_dialog_statement()
                .map(|s| Statement::BeginDialog(Box::new(s)));
        }
        if self.peek_word(1, "CONVERSATION") && self.peek_word(2, "TIMER") {
            return self
                .parse_begin_conversation_timer_statement()
                .map(|s| Statement::BeginConversationTimer(Box::new(s)));
        }
        self.parse_begin_end_block()
            .map(|s| Statement::BeginEndBlock(Box::new(s)))
    }

    /// `BEGIN [ATOMIC WITH (…)] statements END`
    fn parse_begin_end_block(&mut self) -> Result<BeginEndBlockStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Begin)?;
        let mut is_atomic = false;
        let mut atomic_block_options = Vec::new();
        if self.check_word("ATOMIC") {
            self.advance();
            is_atomic = true;
            atomic_block_options = self.parse_with_option_list(|p| {
                p.parse_general_option::<AtomicBlockOption>("atomic block")
            })?;
        }
        let statement_list = self.parse_statement_list(check_block_end)?;
        self.expect_keyword(Keyword::End)?;
        Ok(BeginEndBlockStatement {
            is_atomic,
            atomic_block_options,
            statement_list,
            span: self.span_from(start),
        })
    }

    /// `BEGIN TRY … END TRY BEGIN CATCH … END CATCH`
    fn parse_try_catch_statement(&mut self) -> Result<TryCatchStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Begin)?;
        self.expect_word("TRY")?;
        let try_statements = self.parse_statement_list(check_block_end)?;
        self.expect_keyword(Keyword::End)?;
        self.expect_word("TRY")?;
        while self.eat(&TokenKind::Semicolon) {}
        self.expect_keyword(Keyword::Begin)?;
        self.expect_word("CATCH")?;
        let catch_statements = self.parse_statement_list(check_block_end)?;
        self.expect_keyword(Keyword::End)?;
        self.expect_word("CATCH")?;
        Ok(TryCatchStatement {
            try_statements,
            catch_statements,
            span: self.span_from(start),
        })
    }

    /// `IF cond stmt [ELSE stmt]`
    pub(super) fn parse_if_statement(&mut self) -> Result<IfStatement, ParseError> {
        let start = self.expect_keyword(Keyword::If)?;
        let predicate = self.parse_boolean_expression()?;
        let then_statement = self.parse_terminated_statement()?;
        if self.check(&TokenKind::Semicolon) && self.peek_keyword(1, Keyword::Else) {
            self.advance();
        }
        let else_statement = if self.eat_keyword(Keyword::Else) {
            Some(self.parse_terminated_statement()?)
        } else {
            None
        };
        Ok(IfStatement {
            predicate,
            then_statement,
            else_statement,
            span: self.span_from(start),
        })
    }

    /// `WHILE cond stmt`
    pub(super) fn parse_while_statement(&mut self) -> Result<WhileStatement, ParseError> {
        let start = self.expect_keyword(Keyword::While)?;
        let predicate = self.parse_boolean_expression()?;
        let statement = self.parse_terminated_statement()?;
        Ok(WhileStatement {
            predicate,
            statement,
            span: self.span_from(start),
        })
    }

    pub(super) fn parse_break_statement(&mut self) -> Result<BreakStatement, ParseError> {
        let span = self.expect_keyword(Keyword::Break)?;
        Ok(BreakStatement { span })
    }

    pub(super) fn parse_continue_statement(&mut self) -> Result<ContinueStatement, ParseError> {
        let span = self.expect_keyword(Keyword::Continue)?;
        Ok(ContinueStatement { span })
    }

    pub(super) fn parse_goto_statement(&mut self) -> Result<GoToStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Goto)?;
        let label_name = self.parse_identifier()?;
        Ok(GoToStatement {
            label_name,
            span: self.span_from(start),
        })
    }

    /// `RETURN [expr]`
    pub(super) fn parse_return_statement(&mut self) -> Result<ReturnStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Return)?;
        let expression = if self.check_expression_start() {
            Some(self.parse_scalar_expression()?)
        } else {
            None
        };
        Ok(ReturnStatement {
            expression,
            span: self.span_from(start),
        })
    }

    /// `THROW [number, message, state]`
    pub(super) fn parse_throw_statement(&mut self) -> Result<ThrowStatement, ParseError> {
        let start = self.expect_word("THROW")?;
        if !self.check_expression_start() {
            return Ok(ThrowStatement {
                error_number: None,
                message: None,
                state: None,
                span: self.span_from(start),
            });
        }
        let error_number = self.parse_scalar_expression()?;
        self.expect(&TokenKind::Comma)?;
        let message = self.parse_scalar_expression()?;
        self.expect(&TokenKind::Comma)?;
        let state = self.parse_scalar_expression()?;
        Ok(ThrowStatement {
            error_number: Some(error_number),
            message: Some(message),
            state: Some(state),
            span: self.span_from(start),
        })
    }

    pub(super) fn parse_print_statement(&mut self) -> Result<PrintStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Print)?;
        let expression = self.parse_scalar_expression()?;
        Ok(PrintStatement {
            expression,
            span: self.span_from(start),
        })
    }

    /// `RAISERROR (msg, severity, state [, arg …]) [WITH LOG | NOWAIT |
    /// SETERROR, …]`
    pub(super) fn parse_raiserror_statement(&mut self) -> Result<RaiseErrorStatement, ParseError> {
        let start = self.expect_keyword(Keyword::RaisError)?;
        self.expect(&TokenKind::LeftParen)?;
        let first_parameter = self.parse_scalar_expression()?;
        self.expect(&TokenKind::Comma)?;
        let second_parameter = self.parse_scalar_expression()?;
        self.expect(&TokenKind::Comma)?;
        let third_parameter = self.parse_scalar_expression()?;
        let mut optional_parameters = Vec::new();
        while self.eat(&TokenKind::Comma) {
            optional_parameters.push(self.parse_scalar_expression()?);
        }
        self.expect(&TokenKind::RightParen)?;
        let raise_error_options = if self.eat_keyword(Keyword::With) {
            self.parse_comma_separated(|p| {
                if p.eat_word("LOG") {
                    Ok(RaiseErrorOption::Log)
                } else if p.eat_word("NOWAIT") {
                    Ok(RaiseErrorOption::NoWait)
                } else if p.eat_word("SETERROR") {
                    Ok(RaiseErrorOption::SetError)
                } else {
                    Err(ParseError::invalid_value(
                        "RAISERROR",
                        &["LOG", "NOWAIT", "SETERROR"],
                        &p.current,
                    ))
                }
            })?
        } else {
            Vec::new()
        };
        Ok(RaiseErrorStatement {
            first_parameter,
            second_parameter,
            third_parameter,
            optional_parameters,
            raise_error_options,
            span: self.span_from(start),
        })
    }

    /// `WAITFOR DELAY t | TIME t | (statement) [, TIMEOUT n]`
    pub(super) fn parse_waitfor_statement(&mut self) -> Result<WaitForStatement, ParseError> {
        let start = self.expect_keyword(Keyword::WaitFor)?;
        let (wait_for_option, parameter, statement) = if self.eat_word("DELAY") {
            (WaitForOption::Delay, Some(self.parse_scalar_expression()?), None)
        } else if self.eat_word("TIME") {
            (WaitForOption::Time, Some(self.parse_scalar_expression()?), None)
        } else {
            self.expect(&TokenKind::LeftParen)?;
            let statement = self.parse_statement()?;
            self.expect(&TokenKind::RightParen)?;
            (WaitForOption::Statement, None, Some(statement))
        };
        let timeout = if self.check(&TokenKind::Comma) && self.peek_word(1, "TIMEOUT") {
            self.advance();
            self.advance();
            Some(self.parse_scalar_expression()?)
        } else {
            None
        };
        Ok(WaitForStatement {
            wait_for_option,
            parameter,
            statement,
            timeout,
            span: self.span_from(start),
        })
    }

    // --- Variables ---

    /// `DECLARE` of scalar variables, a table variable or a cursor.
    pub(super) fn parse_declare_statement(&mut self) -> Result<Statement, ParseError> {
        let start = self.expect_keyword(Keyword::Declare)?;
        if !self.check_variable() {
            return self
                .parse_declare_cursor(start)
                .map(|s| Statement::DeclareCursor(Box::new(s)));
        }
        let is_table = if self.peek_keyword(1, Keyword::Table) {
            true
        } else {
            self.peek_keyword(1, Keyword::As) && self.peek_keyword(2, Keyword::Table)
        };
        if is_table {
            let variable_name = self.parse_variable()?;
            self.eat_keyword(Keyword::As);
            self.expect_keyword(Keyword::Table)?;
            let definition = self.parse_table_definition()?;
            return Ok(Statement::DeclareTableVariable(Box::new(
                DeclareTableVariableStatement {
                    variable_name,
                    definition,
                    span: self.span_from(start),
                },
            )));
        }
        let declarations = self.parse_comma_separated(|p| {
            let start = p.current.span;
            let variable_name = p.parse_variable()?;
            p.eat_keyword(Keyword::As);
            let data_type = p.parse_data_type()?;
            let value = if p.eat(&TokenKind::Eq) {
                Some(p.parse_scalar_expression()?)
            } else {
                None
            };
            Ok(DeclareVariableElement {
                variable_name,
                data_type,
                value,
                span: p.span_from(start),
            })
        })?;
        Ok(Statement::DeclareVariable(Box::new(DeclareVariableStatement {
            declarations,
            span: self.span_from(start),
        })))
    }

    /// `name [options] CURSOR [options] FOR select`
    fn parse_declare_cursor(&mut self, start: Span) -> Result<DeclareCursorStatement, ParseError> {
        let name = self.parse_identifier()?;
        let cursor_definition = self.parse_cursor_definition()?;
        Ok(DeclareCursorStatement {
            name,
            cursor_definition,
            span: self.span_from(start),
        })
    }

    /// `[options] CURSOR [options] FOR select`
    fn parse_cursor_definition(&mut self) -> Result<CursorDefinition, ParseError> {
        let start = self.current.span;
        let mut options = self.parse_cursor_options();
        self.expect_keyword(Keyword::Cursor)?;
        options.extend(self.parse_cursor_options());
        self.expect_keyword(Keyword::For)?;
        let select = self.parse_select_statement(None)?;
        Ok(CursorDefinition {
            options,
            select,
            span: self.span_from(start),
        })
    }

    fn parse_cursor_options(&mut self) -> Vec<CursorOption> {
        let mut options = Vec::new();
        while let Some(option_kind) = self.current.word().and_then(CursorOptionKind::from_word) {
            let span = self.current.span;
            self.advance();
            options.push(CursorOption { option_kind, span });
        }
        options
    }

    /// Every form of `SET`.
    pub(super) fn parse_set_statement(&mut self) -> Result<Statement, ParseError> {
        let start = self.expect_keyword(Keyword::Set)?;
        if self.check_variable() {
            return self
                .parse_set_variable(start)
                .map(|s| Statement::SetVariable(Box::new(s)));
        }
        if self.eat_keyword(Keyword::RowCount) {
            let number_rows = self.parse_scalar_expression()?;
            return Ok(Statement::SetRowCount(Box::new(SetRowCountStatement {
                number_rows,
                span: self.span_from(start),
            })));
        }
        if self.eat_keyword(Keyword::TextSize) {
            let text_size = self.parse_scalar_expression()?;
            return Ok(Statement::SetTextSize(Box::new(SetTextSizeStatement {
                text_size,
                span: self.span_from(start),
            })));
        }
        if self.eat_keyword(Keyword::Transaction) {
            self.expect_word("ISOLATION")?;
            self.expect_word("LEVEL")?;
            let level = self.parse_isolation_level()?;
            return Ok(Statement::SetTransactionIsolationLevel(Box::new(
                SetTransactionIsolationLevelStatement {
                    level,
                    span: self.span_from(start),
                },
            )));
        }
        if self.eat_keyword(Keyword::IdentityInsert) {
            let table = self.parse_schema_object_name()?;
            let is_on = self.parse_option_state("IDENTITY_INSERT")? == OptionState::On;
            return Ok(Statement::SetIdentityInsert(Box::new(SetIdentityInsertStatement {
                table,
                is_on,
                span: self.span_from(start),
            })));
        }
        if self.eat_keyword(Keyword::Statistics) {
            let options = self.parse_comma_separated(|p| {
                let option = p
                    .current
                    .word()
                    .and_then(SetStatisticsOptions::from_word)
                    .ok_or_else(|| {
                        ParseError::invalid_value(
                            "SET STATISTICS",
                            SetStatisticsOptions::WORDS,
                            &p.current,
                        )
                    })?;
                p.advance();
                Ok(option)
            })?;
            let is_on = self.parse_option_state("SET STATISTICS")? == OptionState::On;
            return Ok(Statement::SetStatistics(Box::new(SetStatisticsStatement {
                options,
                is_on,
                span: self.span_from(start),
            })));
        }
        if let Some(command_type) = self.current.word().and_then(GeneralSetCommandType::from_word)
        {
            self.advance();
            let parameter = self.parse_scalar_expression()?;
            return Ok(Statement::GeneralSet(Box::new(GeneralSetStatement {
                command_type,
                parameter,
                span: self.span_from(start),
            })));
        }
        let options = self.parse_comma_separated(|p| {
            let option = p
                .current
                .word()
                .and_then(SetOptions::from_word)
                .ok_or_else(|| ParseError::unknown_option("SET", &p.current))?;
            p.advance();
            Ok(option)
        })?;
        let is_on = self.parse_option_state("SET")? == OptionState::On;
        Ok(Statement::PredicateSet(Box::new(PredicateSetStatement {
            options,
            is_on,
            span: self.span_from(start),
        })))
    }

    fn parse_isolation_level(&mut self) -> Result<IsolationLevel, ParseError> {
        if self.eat_keyword(Keyword::Read) {
            if self.eat_word("UNCOMMITTED") {
                return Ok(IsolationLevel::ReadUncommitted);
            }
            self.expect_word("COMMITTED")?;
            return Ok(IsolationLevel::ReadCommitted);
        }
        if self.eat_word("REPEATABLE") {
            self.expect_keyword(Keyword::Read)?;
            return Ok(IsolationLevel::RepeatableRead);
        }
        if self.eat_word("SNAPSHOT") {
            return Ok(IsolationLevel::Snapshot);
        }
        if self.eat_word("SERIALIZABLE") {
            return Ok(IsolationLevel::Serializable);
        }
        Err(ParseError::invalid_value(
            "ISOLATION LEVEL",
            &["READ UNCOMMITTED", "READ COMMITTED", "REPEATABLE READ", "SNAPSHOT", "SERIALIZABLE"],
            &self.current,
        ))
    }

    /// `SET @v op expr`, `SET @v = CURSOR …` or `SET @v.method(args)`.
    fn parse_set_variable(&mut self, start: Span) -> Result<SetVariableStatement, ParseError> {
        let variable = self.parse_variable()?;
        let mut method_call = None;
        if self.eat(&TokenKind::Dot) {
            let method_start = self.current.span;
            let method_name = self.parse_name()?;
            let parameters = if self.check(&TokenKind::LeftParen) {
                self.parse_call_arguments()?
            } else {
                Vec::new()
            };
            method_call = Some(VariableMethodCall {
                method_name,
                parameters,
                span: self.span_from(method_start),
            });
            if token_to_assignment(&self.current.kind).is_none() {
                return Ok(SetVariableStatement {
                    variable,
                    method_call,
                    assignment_kind: None,
                    expression: None,
                    cursor_definition: None,
                    span: self.span_from(start),
                });
            }
        }
        let Some(assignment_kind) = token_to_assignment(&self.current.kind) else {
            return Err(self.unexpected(&["="]));
        };
        self.advance();
        let cursor_ahead = self.check_keyword(Keyword::Cursor)
            || (self.current.word().and_then(CursorOptionKind::from_word).is_some()
                && !self.peek_is(1, &TokenKind::Dot));
        if method_call.is_none() && cursor_ahead {
            let cursor_definition = self.parse_cursor_definition()?;
            return Ok(SetVariableStatement {
                variable,
                method_call: None,
                assignment_kind: Some(assignment_kind),
                expression: None,
                cursor_definition: Some(cursor_definition),
                span: self.span_from(start),
            });
        }
        let expression = self.parse_scalar_expression()?;
        Ok(SetVariableStatement {
            variable,
            method_call,
            assignment_kind: Some(assignment_kind),
            expression: Some(expression),
            cursor_definition: None,
            span: self.span_from(start),
        })
    }

    // --- EXECUTE ---

    /// `EXECUTE …` or `EXECUTE AS …`.
    pub(super) fn parse_execute_statement(&mut self) -> Result<Statement, ParseError> {
        if self.peek_keyword(1, Keyword::As) {
            let start = self.current.span;
            self.advance();
            self.advance();
            let execute_context = self.parse_execute_as_clause()?;
            let mut with_no_revert = false;
            let mut cookie = None;
            if self.eat_keyword(Keyword::With) {
                if self.eat_word("NO") {
                    self.expect_keyword(Keyword::Revert)?;
                    with_no_revert = true;
                } else {
                    self.expect_word("COOKIE")?;
                    self.expect_keyword(Keyword::Into)?;
                    cookie = Some(self.parse_variable()?);
                }
            }
            return Ok(Statement::ExecuteAs(Box::new(ExecuteAsStatement {
                execute_context,
                with_no_revert,
                cookie,
                span: self.span_from(start),
            })));
        }
        let start = self.current.span;
        let execute_specification = self.parse_execute_specification()?;
        let options = if self.eat_keyword(Keyword::With) {
            self.parse_comma_separated(Self::parse_execute_option)?
        } else {
            Vec::new()
        };
        Ok(Statement::Execute(Box::new(ExecuteStatement {
            execute_specification,
            options,
            span: self.span_from(start),
        })))
    }

    /// The principal after `EXECUTE AS`: `CALLER`, `SELF`, `OWNER`, a
    /// string, or `LOGIN | USER = 'name'`.
    pub(super) fn parse_execute_as_clause(&mut self) -> Result<ExecuteAsClause, ParseError> {
        let start = self.current.span;
        let (execute_as_option, literal) = if self.eat_word("CALLER") {
            (ExecuteAsOption::Caller, None)
        } else if self.eat_word("SELF") {
            (ExecuteAsOption::SelfPrincipal, None)
        } else if self.eat_word("OWNER") {
            (ExecuteAsOption::Owner, None)
        } else if self.eat_word("LOGIN") {
            self.expect(&TokenKind::Eq)?;
            (ExecuteAsOption::Login, Some(self.parse_string_literal()?))
        } else if self.eat_keyword(Keyword::User) {
            self.expect(&TokenKind::Eq)?;
            (ExecuteAsOption::User, Some(self.parse_string_literal()?))
        } else if self.check_string() {
            (ExecuteAsOption::User, Some(self.parse_string_literal()?))
        } else {
            return Err(self.unexpected(&["CALLER", "SELF", "OWNER", "LOGIN", "USER", "string"]));
        };
        Ok(ExecuteAsClause {
            execute_as_option,
            literal,
            span: self.span_from(start),
        })
    }

    /// `EXEC [@ret =] proc [params]` or `EXEC (strings) [AS …] [AT server]`.
    pub(super) fn parse_execute_specification(
        &mut self,
    ) -> Result<ExecuteSpecification, ParseError> {
        let start = self.current.span;
        if !self.eat_keyword(Keyword::Exec) {
            self.expect_keyword(Keyword::Execute)?;
        }

        if self.check(&TokenKind::LeftParen) {
            let entity_start = self.current.span;
            self.advance();
            let mut strings = vec![self.parse_scalar_expression()?];
            let mut parameters = Vec::new();
            while self.eat(&TokenKind::Comma) {
                if self.check_variable() || self.check_literal() {
                    parameters.push(self.parse_execute_parameter()?);
                } else {
                    strings.push(self.parse_scalar_expression()?);
                }
            }
            self.expect(&TokenKind::RightParen)?;
            let executable_entity = ExecutableEntity::Strings(ExecutableStringList {
                strings,
                parameters,
                span: self.span_from(entity_start),
            });
            let execute_context = if self.eat_keyword(Keyword::As) {
                Some(self.parse_execute_as_clause()?)
            } else {
                None
            };
            let linked_server = if self.eat_word("AT") {
                Some(self.parse_identifier()?)
            } else {
                None
            };
            return Ok(ExecuteSpecification {
                variable: None,
                executable_entity,
                execute_context,
                linked_server,
                span: self.span_from(start),
            });
        }

        let variable = if self.check_variable() && self.peek_is(1, &TokenKind::Eq) {
            let variable = self.parse_variable()?;
            self.advance();
            Some(variable)
        } else {
            None
        };
        let entity_start = self.current.span;
        let procedure_reference = if self.check_variable() {
            ProcedureReferenceName::Variable(self.parse_variable()?)
        } else {
            let name = self.parse_schema_object_name()?;
            let number = if self.check(&TokenKind::Semicolon)
                && matches!(self.peek_nth(1).kind, TokenKind::Integer(_))
            {
                self.advance();
                Some(self.parse_integer_literal()?)
            } else {
                None
            };
            ProcedureReferenceName::Reference(ProcedureReference {
                name,
                number,
                span: self.span_from(entity_start),
            })
        };
        let parameters = if self.check_expression_start() || self.check_keyword(Keyword::Default)
        {
            self.parse_comma_separated(Self::parse_execute_parameter)?
        } else {
            Vec::new()
        };
        Ok(ExecuteSpecification {
            variable,
            executable_entity: ExecutableEntity::Procedure(ExecutableProcedureReference {
                procedure_reference,
                parameters,
                span: self.span_from(entity_start),
            }),
            execute_context: None,
            linked_server: None,
            span: self.span_from(start),
        })
    }

    /// `[@name =] value [OUTPUT]`
    fn parse_execute_parameter(&mut self) -> Result<ExecuteParameter, ParseError> {
        let start = self.current.span;
        let variable = if self.check_variable() && self.peek_is(1, &TokenKind::Eq) {
            let variable = self.parse_variable()?;
            self.advance();
            Some(variable)
        } else {
            None
        };
        let parameter_value = self.parse_scalar_expression()?;
        let is_output = self.eat_word("OUTPUT") || self.eat_word("OUT");
        Ok(ExecuteParameter {
            variable,
            parameter_value,
            is_output,
            span: self.span_from(start),
        })
    }

    /// `RECOMPILE` or `RESULT SETS …`.
    fn parse_execute_option(&mut self) -> Result<ExecuteOption, ParseError> {
        let start = self.current.span;
        if self.eat_word("RECOMPILE") {
            return Ok(ExecuteOption {
                option_kind: ExecuteOptionKind::Recompile,
                definitions: Vec::new(),
                span: self.span_from(start),
            });
        }
        self.expect_word("RESULT")?;
        self.expect_word("SETS")?;
        let (option_kind, definitions) = if self.eat_word("UNDEFINED") {
            (ExecuteOptionKind::ResultSetsUndefined, Vec::new())
        } else if self.eat_word("NONE") {
            (ExecuteOptionKind::ResultSetsNone, Vec::new())
        } else {
            let definitions = self.parse_parenthesized_list(Self::parse_result_set_definition)?;
            (ExecuteOptionKind::ResultSets, definitions)
        };
        Ok(ExecuteOption {
            option_kind,
            definitions,
            span: self.span_from(start),
        })
    }

    /// `(col type [NULL | NOT NULL], …)`, `AS OBJECT name`, `AS TYPE name`
    /// or `AS FOR XML`.
    fn parse_result_set_definition(&mut self) -> Result<ResultSetDefinition, ParseError> {
        let start = self.current.span;
        if self.eat_keyword(Keyword::As) {
            let (result_set_type, name) = if self.eat_word("OBJECT") {
                (ResultSetType::Object, Some(self.parse_schema_object_name()?))
            } else if self.eat_word("TYPE") {
                (ResultSetType::Type, Some(self.parse_schema_object_name()?))
            } else {
                self.expect_keyword(Keyword::For)?;
                self.expect_word("XML")?;
                (ResultSetType::ForXml, None)
            };
            return Ok(ResultSetDefinition {
                result_set_type,
                columns: Vec::new(),
                name,
                span: self.span_from(start),
            });
        }
        let columns = self.parse_parenthesized_list(|p| {
            let column_name = p.parse_identifier()?;
            let start = column_name.span;
            let data_type = p.parse_data_type()?;
            let nullable = if p.eat_keyword(Keyword::Null) {
                Some(true)
            } else if p.check_keyword(Keyword::Not) && p.peek_keyword(1, Keyword::Null) {
                p.advance();
                p.advance();
                Some(false)
            } else {
                None
            };
            Ok(ResultColumnDefinition {
                column_name,
                data_type,
                nullable,
                span: p.span_from(start),
            })
        })?;
        Ok(ResultSetDefinition {
            result_set_type: ResultSetType::Inline,
            columns,
            name: None,
            span: self.span_from(start),
        })
    }

    /// `REVERT [WITH COOKIE = @c]`
    pub(super) fn parse_revert_statement(&mut self) -> Result<RevertStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Revert)?;
        let cookie = if self.check_keyword(Keyword::With) && self.peek_word(1, "COOKIE") {
            self.advance();
            self.advance();
            self.expect(&TokenKind::Eq)?;
            Some(self.parse_scalar_expression()?)
        } else {
            None
        };
        Ok(RevertStatement {
            cookie,
            span: self.span_from(start),
        })
    }

    pub(super) fn parse_use_statement(&mut self) -> Result<UseStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Use)?;
        let database_name = self.parse_identifier()?;
        Ok(UseStatement {
            database_name,
            span: self.span_from(start),
        })
    }

    // --- Cursors ---

    pub(super) fn parse_open_cursor_statement(
        &mut self,
    ) -> Result<OpenCursorStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Open)?;
        let cursor = self.parse_cursor_id()?;
        Ok(OpenCursorStatement {
            cursor,
            span: self.span_from(start),
        })
    }

    pub(super) fn parse_close_cursor_statement(
        &mut self,
    ) -> Result<CloseCursorStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Close)?;
        let cursor = self.parse_cursor_id()?;
        Ok(CloseCursorStatement {
            cursor,
            span: self.span_from(start),
        })
    }

    pub(super) fn parse_deallocate_cursor_statement(
        &mut self,
    ) -> Result<DeallocateCursorStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Deallocate)?;
        let cursor = self.parse_cursor_id()?;
        Ok(DeallocateCursorStatement {
            cursor,
            span: self.span_from(start),
        })
    }

    /// `FETCH [orientation] [FROM] cursor [INTO @a, …]`
    pub(super) fn parse_fetch_cursor_statement(
        &mut self,
    ) -> Result<FetchCursorStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Fetch)?;
        let orientation_start = self.current.span;
        let orientation = match self.current.word().map(str::to_ascii_uppercase).as_deref() {
            Some("NEXT") => Some(FetchOrientation::Next),
            Some("PRIOR") => Some(FetchOrientation::Prior),
            Some("FIRST") => Some(FetchOrientation::First),
            Some("LAST") => Some(FetchOrientation::Last),
            Some("ABSOLUTE") => Some(FetchOrientation::Absolute),
            Some("RELATIVE") => Some(FetchOrientation::Relative),
            _ => None,
        };
        let fetch_type = match orientation {
            Some(orientation) => {
                self.advance();
                let row_offset = if matches!(
                    orientation,
                    FetchOrientation::Absolute | FetchOrientation::Relative
                ) {
                    Some(self.parse_scalar_expression()?)
                } else {
                    None
                };
                Some(FetchType {
                    orientation,
                    row_offset,
                    span: self.span_from(orientation_start),
                })
            }
            None => None,
        };
        if fetch_type.is_some() {
            self.expect_keyword(Keyword::From)?;
        } else {
            self.eat_keyword(Keyword::From);
        }
        let cursor = self.parse_cursor_id()?;
        let into_variables = if self.eat_keyword(Keyword::Into) {
            self.parse_comma_separated(Self::parse_variable)?
        } else {
            Vec::new()
        };
        Ok(FetchCursorStatement {
            fetch_type,
            cursor,
            into_variables,
            span: self.span_from(start),
        })
    }

    // --- Transactions ---

    /// `BEGIN [DISTRIBUTED] TRAN[SACTION] [name [WITH MARK ['desc']]]`
    fn parse_begin_transaction_statement(
        &mut self,
    ) -> Result<BeginTransactionStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Begin)?;
        let distributed = self.eat_keyword(Keyword::Distributed);
        if !self.eat_keyword(Keyword::Tran) {
            self.expect_keyword(Keyword::Transaction)?;
        }
        let name = self.parse_transaction_name()?;
        let mut mark_defined = false;
        let mut mark_description = None;
        if name.is_some() && self.check_keyword(Keyword::With) && self.peek_word(1, "MARK") {
            self.advance();
            self.advance();
            mark_defined = true;
            if self.check_string() {
                mark_description = Some(self.parse_scalar_expression()?);
            }
        }
        Ok(BeginTransactionStatement {
            distributed,
            name,
            mark_defined,
            mark_description,
            span: self.span_from(start),
        })
    }

    fn parse_transaction_name(&mut self) -> Result<Option<Identifier>, ParseError> {
        let is_name = self.check_variable()
            || (self.check_identifier() && !self.check_any_word(CONTEXTUAL_STATEMENT_WORDS));
        if is_name {
            return self.parse_identifier_or_variable().map(Some);
        }
        Ok(None)
    }

    /// `COMMIT [TRAN[SACTION] [name] | WORK] [WITH (DELAYED_DURABILITY = ON|OFF)]`
    pub(super) fn parse_commit_statement(
        &mut self,
    ) -> Result<CommitTransactionStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Commit)?;
        let name = if self.eat_keyword(Keyword::Tran) || self.eat_keyword(Keyword::Transaction) {
            self.parse_transaction_name()?
        } else {
            self.eat_word("WORK");
            None
        };
        let mut delayed_durability_option = OptionState::NotSet;
        if self.check_keyword(Keyword::With) && self.peek_is(1, &TokenKind::LeftParen) {
            self.advance();
            self.advance();
            self.expect_word("DELAYED_DURABILITY")?;
            self.expect(&TokenKind::Eq)?;
            delayed_durability_option = self.parse_option_state("DELAYED_DURABILITY")?;
            self.expect(&TokenKind::RightParen)?;
        }
        Ok(CommitTransactionStatement {
            name,
            delayed_durability_option,
            span: self.span_from(start),
        })
    }

    /// `ROLLBACK [TRAN[SACTION] [name] | WORK]`
    pub(super) fn parse_rollback_statement(
        &mut self,
    ) -> Result<RollbackTransactionStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Rollback)?;
        let name = if self.eat_keyword(Keyword::Tran) || self.eat_keyword(Keyword::Transaction) {
            self.parse_transaction_name()?
        } else {
            self.eat_word("WORK");
            None
        };
        Ok(RollbackTransactionStatement {
            name,
            span: self.span_from(start),
        })
    }

    /// `SAVE TRAN[SACTION] name`
    pub(super) fn parse_save_statement(&mut self) -> Result<SaveTransactionStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Save)?;
        if !self.eat_keyword(Keyword::Tran) {
            self.expect_keyword(Keyword::Transaction)?;
        }
        let name = self.parse_identifier_or_variable()?;
        Ok(SaveTransactionStatement {
            name,
            span: self.span_from(start),
        })
    }

    // --- Service Broker ---

    /// `BEGIN DIALOG [CONVERSATION] @h FROM SERVICE s TO SERVICE 'target'
    /// [, 'instance'] [ON CONTRACT c] [WITH option, …]`
    fn parse_begin_dialog_statement(&mut self) -> Result<BeginDialogStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Begin)?;
        self.expect_word("DIALOG")?;
        let is_conversation = self.eat_word("CONVERSATION");
        let handle = self.parse_variable()?;
        self.expect_keyword(Keyword::From)?;
        self.expect_word("SERVICE")?;
        let initiator_service_name =
            IdentifierOrValueExpression::Identifier(self.parse_identifier()?);
        self.expect_keyword(Keyword::To)?;
        self.expect_word("SERVICE")?;
        let target_service_name = self.parse_scalar_expression()?;
        let instance_spec = if self.eat(&TokenKind::Comma) {
            Some(self.parse_scalar_expression()?)
        } else {
            None
        };
        let contract_name = if self.eat_keyword(Keyword::On) {
            self.expect_word("CONTRACT")?;
            Some(IdentifierOrValueExpression::Identifier(self.parse_identifier()?))
        } else {
            None
        };
        let options = self.parse_with_bare_option_list(Self::parse_dialog_option)?;
        Ok(BeginDialogStatement {
            is_conversation,
            handle,
            initiator_service_name,
            target_service_name,
            instance_spec,
            contract_name,
            options,
            span: self.span_from(start),
        })
    }

    fn parse_dialog_option(&mut self) -> Result<DialogOption, ParseError> {
        let start = self.current.span;
        let (option_kind, _) = self.parse_option_key::<DialogOptionKind>("dialog")?;
        self.expect(&TokenKind::Eq)?;
        let (value, option_value) = if option_kind == DialogOptionKind::Encryption {
            let value = self.parse_option_value(option_kind.as_str(), option_kind.value_shape())?;
            (None, value)
        } else {
            (Some(self.parse_scalar_expression()?), None)
        };
        Ok(DialogOption {
            option_kind,
            value,
            option_value,
            span: self.span_from(start),
        })
    }

    /// `BEGIN CONVERSATION TIMER (@h) TIMEOUT = n`
    fn parse_begin_conversation_timer_statement(
        &mut self,
    ) -> Result<BeginConversationTimerStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Begin)?;
        self.expect_word("CONVERSATION")?;
        self.expect_word("TIMER")?;
        self.expect(&TokenKind::LeftParen)?;
        let handle = self.parse_scalar_expression()?;
        self.expect(&TokenKind::RightParen)?;
        self.expect_word("TIMEOUT")?;
        self.expect(&TokenKind::Eq)?;
        let timeout = self.parse_scalar_expression()?;
        Ok(BeginConversationTimerStatement {
            handle,
            timeout,
            span: self.span_from(start),
        })
    }

    /// `RECEIVE [TOP (n)] cols FROM queue [INTO @t] [WHERE cond]`
    pub(super) fn parse_receive_statement(&mut self) -> Result<ReceiveStatement, ParseError> {
        let start = self.expect_word("RECEIVE")?;
        let top = if self.eat_keyword(Keyword::Top) {
            self.expect(&TokenKind::LeftParen)?;
            let top = self.parse_scalar_expression()?;
            self.expect(&TokenKind::RightParen)?;
            Some(top)
        } else {
            None
        };
        let select_elements = self.parse_comma_separated(Self::parse_select_element)?;
        self.expect_keyword(Keyword::From)?;
        let queue = self.parse_schema_object_name()?;
        let into = if self.eat_keyword(Keyword::Into) {
            Some(self.parse_variable()?)
        } else {
            None
        };
        let where_clause = if self.eat_keyword(Keyword::Where) {
            Some(self.parse_boolean_expression()?)
        } else {
            None
        };
        Ok(ReceiveStatement {
            top,
            select_elements,
            queue,
            into,
            where_clause,
            span: self.span_from(start),
        })
    }

    /// `SEND ON CONVERSATION h | (h, …) [MESSAGE TYPE name] [(body)]`
    pub(super) fn parse_send_statement(&mut self) -> Result<SendStatement, ParseError> {
        let start = self.expect_word("SEND")?;
        self.expect_keyword(Keyword::On)?;
        self.expect_word("CONVERSATION")?;
        let conversation_handles = if self.check(&TokenKind::LeftParen) {
            self.parse_parenthesized_list(Self::parse_scalar_expression)?
        } else {
            vec![self.parse_scalar_expression()?]
        };
        let message_type_name = if self.eat_word("MESSAGE") {
            self.expect_word("TYPE")?;
            Some(IdentifierOrValueExpression::Identifier(self.parse_identifier()?))
        } else {
            None
        };
        let message_body = if self.eat(&TokenKind::LeftParen) {
            let body = self.parse_scalar_expression()?;
            self.expect(&TokenKind::RightParen)?;
            Some(body)
        } else {
            None
        };
        Ok(SendStatement {
            conversation_handles,
            message_type_name,
            message_body,
            span: self.span_from(start),
        })
    }

    /// `END CONVERSATION h [WITH ERROR = n DESCRIPTION = 'x' | WITH CLEANUP]`
    pub(super) fn parse_end_conversation_statement(
        &mut self,
    ) -> Result<EndConversationStatement, ParseError> {
        let start = self.expect_keyword(Keyword::End)?;
        self.expect_word("CONVERSATION")?;
        let conversation = self.parse_scalar_expression()?;
        let mut with_cleanup = false;
        let mut error_code = None;
        let mut error_description = None;
        if self.eat_keyword(Keyword::With) {
            if self.eat_word("CLEANUP") {
                with_cleanup = true;
            } else {
                self.expect_word("ERROR")?;
                self.expect(&TokenKind::Eq)?;
                error_code = Some(self.parse_scalar_expression()?);
                self.expect_word("DESCRIPTION")?;
                self.expect(&TokenKind::Eq)?;
                error_description = Some(self.parse_scalar_expression()?);
            }
        }
        Ok(EndConversationStatement {
            conversation,
            with_cleanup,
            error_code,
            error_description,
            span: self.span_from(start),
        })
    }

    /// `MOVE CONVERSATION h TO group`
    pub(super) fn parse_move_conversation_statement(
        &mut self,
    ) -> Result<MoveConversationStatement, ParseError> {
        let start = self.expect_word("MOVE")?;
        self.expect_word("CONVERSATION")?;
        let conversation = self.parse_scalar_expression()?;
        self.expect_keyword(Keyword::To)?;
        let group = self.parse_scalar_expression()?;
        Ok(MoveConversationStatement {
            conversation,
            group,
            span: self.span_from(start),
        })
    }

    /// `GET CONVERSATION GROUP @g FROM queue`
    pub(super) fn parse_get_conversation_group_statement(
        &mut self,
    ) -> Result<GetConversationGroupStatement, ParseError> {
        let start = self.expect_word("GET")?;
        self.expect_word("CONVERSATION")?;
        self.expect_word("GROUP")?;
        let group_id = self.parse_variable()?;
        self.expect_keyword(Keyword::From)?;
        let queue = self.parse_schema_object_name()?;
        Ok(GetConversationGroupStatement {
            group_id,
            queue,
            span: self.span_from(start),
        })
    }
}

/// `END` closes a block unless it begins `END CONVERSATION`.
fn check_block_end(parser: &mut Parser<'_>) -> bool {
    parser.check_keyword(Keyword::End) && !parser.peek_word(1, "CONVERSATION")
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
    fn test_if_else_with_semicolon() {
        let Statement::If(stmt) = statement("IF @a > 1 SELECT 1; ELSE SELECT 2") else {
            panic!("expected IF");
        };
        assert!(matches!(stmt.then_statement, Statement::Select(_)));
        assert!(stmt.else_statement.is_some());
    }

    #[test]
    fn test_block_allows_end_conversation() {
        let Statement::BeginEndBlock(block) =
            statement("BEGIN END CONVERSATION @h; PRINT 'done' END")
        else {
            panic!("expected block");
        };
        assert_eq!(block.statement_list.len(), 2);
        assert!(matches!(block.statement_list[0], Statement::EndConversation(_)));
    }

    #[test]
    fn test_try_catch() {
        let Statement::TryCatch(stmt) = statement(
            "BEGIN TRY SELECT 1/0; END TRY BEGIN CATCH THROW; END CATCH",
        ) else {
            panic!("expected TRY/CATCH");
        };
        assert_eq!(stmt.try_statements.len(), 1);
        assert!(matches!(
            &stmt.catch_statements[0],
            Statement::Throw(t) if t.error_number.is_none()
        ));
    }

    #[test]
    fn test_atomic_block() {
        let Statement::BeginEndBlock(block) = statement(
            "BEGIN ATOMIC WITH (TRANSACTION ISOLATION LEVEL = SNAPSHOT, LANGUAGE = N'English') \
             SELECT 1 END",
        ) else {
            panic!("expected block");
        };
        assert!(block.is_atomic);
        assert_eq!(block.atomic_block_options.len(), 2);
    }

    #[test]
    fn test_return_without_value_before_statement() {
        let mut parser = Parser::new("RETURN SELECT 1", &ParseOptions::default());
        let Statement::Return(stmt) = parser.parse_statement().unwrap() else {
            panic!("expected RETURN");
        };
        assert!(stmt.expression.is_none());
        assert!(matches!(parser.parse_statement().unwrap(), Statement::Select(_)));
    }

    #[test]
    fn test_declare_forms() {
        let Statement::DeclareVariable(stmt) =
            statement("DECLARE @a INT = 1, @b AS NVARCHAR(20)")
        else {
            panic!("expected DECLARE");
        };
        assert_eq!(stmt.declarations.len(), 2);
        assert!(stmt.declarations[0].value.is_some());

        assert!(matches!(
            statement("DECLARE @t TABLE (id INT PRIMARY KEY, name SYSNAME NULL)"),
            Statement::DeclareTableVariable(_)
        ));

        let Statement::DeclareCursor(stmt) =
            statement("DECLARE c CURSOR LOCAL FAST_FORWARD FOR SELECT id FROM t")
        else {
            panic!("expected cursor");
        };
        assert_eq!(stmt.cursor_definition.options.len(), 2);
    }

    #[test]
    fn test_set_forms() {
        assert!(matches!(
            statement("SET NOCOUNT, XACT_ABORT ON"),
            Statement::PredicateSet(s) if s.options.len() == 2 && s.is_on
        ));
        assert!(matches!(
            statement("SET TRANSACTION ISOLATION LEVEL READ UNCOMMITTED"),
            Statement::SetTransactionIsolationLevel(s) if s.level == IsolationLevel::ReadUncommitted
        ));
        assert!(matches!(
            statement("SET IDENTITY_INSERT dbo.t OFF"),
            Statement::SetIdentityInsert(s) if !s.is_on
        ));
        assert!(matches!(
            statement("SET STATISTICS IO, TIME ON"),
            Statement::SetStatistics(s) if s.options.len() == 2
        ));
        assert!(matches!(
            statement("SET DATEFIRST 1"),
            Statement::GeneralSet(s) if s.command_type == GeneralSetCommandType::DateFirst
        ));
        assert!(matches!(
            statement("SET @x += 2"),
            Statement::SetVariable(s) if s.assignment_kind == Some(AssignmentKind::AddEquals)
        ));
        assert!(matches!(
            statement("SET @c = CURSOR FOR SELECT 1"),
            Statement::SetVariable(s) if s.cursor_definition.is_some()
        ));
    }

    #[test]
    fn test_unknown_set_option() {
        let mut parser = Parser::new("SET BOGUS ON", &ParseOptions::default());
        let err = parser.parse_statement().unwrap_err();
        assert_eq!(err.code.as_str(), "TSQL2003");
    }

    #[test]
    fn test_execute_forms() {
        let Statement::Execute(stmt) = statement(
            "EXEC @rc = dbo.usp_load @day = '2024-01-01', @rows = @n OUTPUT WITH RECOMPILE",
        ) else {
            panic!("expected EXEC");
        };
        let spec = &stmt.execute_specification;
        assert!(spec.variable.is_some());
        let ExecutableEntity::Procedure(proc) = &spec.executable_entity else {
            panic!("expected procedure");
        };
        assert_eq!(proc.parameters.len(), 2);
        assert!(proc.parameters[1].is_output);
        assert_eq!(stmt.options[0].option_kind, ExecuteOptionKind::Recompile);

        let Statement::Execute(stmt) = statement("EXEC ('SELECT ' + @cols) AT Remote") else {
            panic!("expected EXEC");
        };
        assert!(stmt.execute_specification.linked_server.is_some());

        assert!(matches!(
            statement("EXECUTE AS USER = 'bob' WITH NO REVERT"),
            Statement::ExecuteAs(s) if s.with_no_revert
        ));
    }

    #[test]
    fn test_result_sets() {
        let Statement::Execute(stmt) =
            statement("EXEC p WITH RESULT SETS ((id INT NOT NULL, name NVARCHAR(10)))")
        else {
            panic!("expected EXEC");
        };
        let option = &stmt.options[0];
        assert_eq!(option.option_kind, ExecuteOptionKind::ResultSets);
        assert_eq!(option.definitions[0].columns[0].nullable, Some(false));
    }

    #[test]
    fn test_cursor_statements() {
        let Statement::FetchCursor(stmt) =
            statement("FETCH ABSOLUTE 5 FROM GLOBAL c INTO @a, @b")
        else {
            panic!("expected FETCH");
        };
        assert_eq!(
            stmt.fetch_type.as_ref().map(|f| f.orientation),
            Some(FetchOrientation::Absolute)
        );
        assert!(stmt.cursor.is_global);
        assert_eq!(stmt.into_variables.len(), 2);
    }

    #[test]
    fn test_transactions() {
        assert!(matches!(
            statement("BEGIN DISTRIBUTED TRANSACTION t1"),
            Statement::BeginTransaction(s) if s.distributed && s.name.is_some()
        ));
        assert!(matches!(
            statement("COMMIT TRAN WITH (DELAYED_DURABILITY = ON)"),
            Statement::CommitTransaction(s) if s.delayed_durability_option == OptionState::On
        ));
        assert!(matches!(statement("ROLLBACK"), Statement::RollbackTransaction(_)));
    }

    #[test]
    fn test_service_broker() {
        assert!(matches!(
            statement(
                "BEGIN DIALOG CONVERSATION @h FROM SERVICE [Init] TO SERVICE 'Target' \
                 ON CONTRACT [C] WITH ENCRYPTION = OFF, LIFETIME = 600"
            ),
            Statement::BeginDialog(s) if s.options.len() == 2
        ));
        assert!(matches!(
            statement(
                "RECEIVE TOP (1) message_body FROM dbo.q INTO @t \
                 WHERE conversation_group_id = @g"
            ),
            Statement::Receive(s) if s.into.is_some()
        ));
        assert!(matches!(
            statement("SEND ON CONVERSATION @h MESSAGE TYPE [M] (@body)"),
            Statement::Send(s) if s.message_body.is_some()
        ));
        assert!(matches!(
            statement("WAITFOR (RECEIVE message_body FROM dbo.q), TIMEOUT 1000"),
            Statement::WaitFor(s) if s.timeout.is_some()
        ));
    }

    #[test]
    fn test_raiserror() {
        let Statement::RaisError(stmt) =
            statement("RAISERROR ('bad %s', 16, 1, @name) WITH NOWAIT, LOG")
        else {
            panic!("expected RAISERROR");
        };
        assert_eq!(stmt.optional_parameters.len(), 1);
        assert_eq!(stmt.raise_error_options.len(), 2);
    }
}
