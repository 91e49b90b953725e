//! Scalar and boolean expressions.
//!
//! Scalar operators are parsed with a Pratt climber driven by the binding
//! powers in [`super::pratt`]. Search conditions have their own climber for
//! `NOT`, `AND` and `OR`; predicates (comparison, `IN`, `LIKE`, …) are
//! parsed as a tail after a scalar operand.

use super::error::ParseError;
use super::parser::Parser;
use super::pratt::{
    boolean_binding_power, infix_binding_power, token_to_binary_op, token_to_comparison,
    token_to_unary_op, NOT_BP, POSTFIX_BP, UNARY_BP,
};
use crate::ast::{
    AtTimeZoneCall, BinaryExpression, BooleanBinaryExpression, BooleanBinaryExpressionType,
    BooleanComparisonExpression, BooleanExpression, BooleanIsNullExpression, BooleanNotExpression,
    BooleanParenthesisExpression, BooleanTernaryExpression, BooleanTernaryExpressionType,
    CallTarget, CastCall, CoalesceExpression, CollateExpression, ColumnReferenceExpression,
    ColumnType, ConvertCall, DistinctPredicate, ExistsPredicate, ExpressionCallTarget,
    FullTextFunctionType, FullTextPredicate, FunctionCall, GlobalVariableExpression,
    GraphMatchComposite, GraphMatchPredicate, GraphMatchStep, Identifier, IdentityFunctionCall,
    IifCall, InPredicate, LikePredicate, Literal, LiteralType, MultiPartIdentifier,
    MultiPartIdentifierCallTarget, NextValueForExpression, NullIfExpression, NullTreatment,
    OdbcFunctionCall, OdbcLiteralType, OrderByClause, OverClause, ParameterlessCall,
    ParameterlessCallType, ParenthesisExpression, ParseCall, PartitionFunctionCall,
    ScalarExpression, ScalarSubquery, SearchedCaseExpression, SearchedWhenClause,
    SimpleCaseExpression, SimpleWhenClause, StaticMethodCall, StaticPropertyAccess,
    SubqueryComparisonPredicate, SubqueryComparisonPredicateType, UnaryExpression,
    UniqueRowFilter, UpdateCall, VariableCallTarget, WindowDelimiter, WindowDelimiterType,
    WindowFrameClause, WindowFrameType, WithinGroupClause,
};
use crate::dialect::Feature;
use crate::lexer::{Keyword, Span, TokenKind};

/// The body shared by `OVER (…)` and named window definitions.
pub(super) struct WindowSpecification {
    pub(super) window_name: Option<Identifier>,
    pub(super) partitions: Vec<ScalarExpression>,
    pub(super) order_by_clause: Option<OrderByClause>,
    pub(super) window_frame_clause: Option<WindowFrameClause>,
}

/// Either side of the scalar/boolean ambiguity raised by `(`.
enum Operand {
    Scalar(ScalarExpression),
    Boolean(BooleanExpression),
}

impl Parser<'_> {
    /// Parses a scalar expression.
    pub(super) fn parse_scalar_expression(&mut self) -> Result<ScalarExpression, ParseError> {
        self.parse_scalar(0)
    }

    fn parse_scalar(&mut self, min_bp: u8) -> Result<ScalarExpression, ParseError> {
        self.nested(|p| p.parse_scalar_bp(min_bp))
    }

    fn parse_scalar_bp(&mut self, min_bp: u8) -> Result<ScalarExpression, ParseError> {
        let start = self.current.span;
        let left = if let Some(op) = token_to_unary_op(&self.current.kind) {
            self.advance();
            let expression = self.parse_scalar(UNARY_BP)?;
            ScalarExpression::Unary(Box::new(UnaryExpression {
                unary_expression_type: op,
                expression,
                span: self.span_from(start),
            }))
        } else {
            self.parse_scalar_primary()?
        };
        self.continue_scalar(left, start, min_bp)
    }

    /// Applies postfix and infix operators to an already parsed operand.
    fn continue_scalar(
        &mut self,
        mut left: ScalarExpression,
        start: Span,
        min_bp: u8,
    ) -> Result<ScalarExpression, ParseError> {
        loop {
            if self.check_keyword(Keyword::Collate) {
                self.advance();
                let collation = self.parse_identifier()?;
                left = ScalarExpression::Collate(Box::new(CollateExpression {
                    expression: left,
                    collation,
                    span: self.span_from(start),
                }));
                continue;
            }
            if self.check_word("AT") && self.peek_word(1, "TIME") && self.peek_word(2, "ZONE") {
                let at = self.current.span;
                self.advance();
                self.advance();
                self.advance();
                self.require(Feature::AtTimeZone, self.span_from(at));
                let time_zone = self.parse_scalar(POSTFIX_BP)?;
                left = ScalarExpression::AtTimeZone(Box::new(AtTimeZoneCall {
                    date_value: left,
                    time_zone,
                    span: self.span_from(start),
                }));
                continue;
            }

            let Some((left_bp, right_bp)) = infix_binding_power(&self.current.kind) else {
                break;
            };
            if left_bp < min_bp {
                break;
            }
            let Some(op) = token_to_binary_op(&self.current.kind) else {
                break;
            };
            self.advance();
            let right = self.parse_scalar(right_bp)?;
            left = ScalarExpression::Binary(Box::new(BinaryExpression {
                first_expression: left,
                binary_expression_type: op,
                second_expression: right,
                span: self.span_from(start),
            }));
        }
        Ok(left)
    }

    fn parse_scalar_primary(&mut self) -> Result<ScalarExpression, ParseError> {
        let start = self.current.span;
        let call_follows = self.peek_is(1, &TokenKind::LeftParen);
        match &self.current.kind {
            TokenKind::Integer(_)
            | TokenKind::Numeric(_)
            | TokenKind::Real(_)
            | TokenKind::Money(_)
            | TokenKind::String { .. }
            | TokenKind::Binary(_)
            | TokenKind::Keyword(Keyword::Null) => {
                Ok(ScalarExpression::Literal(self.parse_literal()?))
            }
            TokenKind::Keyword(Keyword::Default) => {
                self.advance();
                Ok(ScalarExpression::Literal(Literal::new(
                    LiteralType::Default,
                    self.text(start),
                    start,
                )))
            }
            TokenKind::Variable(_) => self.parse_variable_expression(),
            TokenKind::GlobalVariable(name) => {
                let name = name.clone();
                self.advance();
                Ok(ScalarExpression::GlobalVariable(GlobalVariableExpression {
                    name,
                    span: start,
                }))
            }
            TokenKind::LeftParen => self.parse_parenthesized_scalar(),
            TokenKind::LeftBrace => self.parse_odbc_expression(),
            TokenKind::Keyword(Keyword::Case) => self.parse_case_expression(),
            TokenKind::Keyword(Keyword::Convert) => self.parse_convert_call(false),
            TokenKind::Keyword(Keyword::TryConvert) => self.parse_convert_call(true),
            TokenKind::Keyword(Keyword::Coalesce) => {
                self.advance();
                let expressions = self.parse_parenthesized_list(Self::parse_scalar_expression)?;
                Ok(ScalarExpression::Coalesce(CoalesceExpression {
                    expressions,
                    span: self.span_from(start),
                }))
            }
            TokenKind::Keyword(Keyword::NullIf) => {
                self.advance();
                self.expect(&TokenKind::LeftParen)?;
                let first_expression = self.parse_scalar_expression()?;
                self.expect(&TokenKind::Comma)?;
                let second_expression = self.parse_scalar_expression()?;
                self.expect(&TokenKind::RightParen)?;
                Ok(ScalarExpression::NullIf(Box::new(NullIfExpression {
                    first_expression,
                    second_expression,
                    span: self.span_from(start),
                })))
            }
            TokenKind::Keyword(
                kw @ (Keyword::User
                | Keyword::CurrentUser
                | Keyword::SessionUser
                | Keyword::SystemUser
                | Keyword::CurrentTimestamp
                | Keyword::CurrentDate),
            ) => {
                let parameterless_call_type = match kw {
                    Keyword::User => ParameterlessCallType::User,
                    Keyword::CurrentUser => ParameterlessCallType::CurrentUser,
                    Keyword::SessionUser => ParameterlessCallType::SessionUser,
                    Keyword::SystemUser => ParameterlessCallType::SystemUser,
                    Keyword::CurrentTimestamp => ParameterlessCallType::CurrentTimestamp,
                    _ => ParameterlessCallType::CurrentDate,
                };
                self.advance();
                Ok(ScalarExpression::ParameterlessCall(ParameterlessCall {
                    parameterless_call_type,
                    span: start,
                }))
            }
            TokenKind::Keyword(Keyword::Left | Keyword::Right) if call_follows => {
                let function_name = self.parse_name()?;
                self.parse_function_call(None, function_name, start)
            }
            TokenKind::Keyword(Keyword::Identity) if call_follows => {
                self.parse_identity_function()
            }
            TokenKind::Keyword(Keyword::IdentityCol) => {
                self.advance();
                Ok(ScalarExpression::ColumnReference(ColumnReferenceExpression {
                    column_type: ColumnType::IdentityCol,
                    multi_part_identifier: None,
                    span: start,
                }))
            }
            TokenKind::Keyword(Keyword::RowGuidCol) => {
                self.advance();
                Ok(ScalarExpression::ColumnReference(ColumnReferenceExpression {
                    column_type: ColumnType::RowGuidCol,
                    multi_part_identifier: None,
                    span: start,
                }))
            }
            TokenKind::Identifier(_) => self.parse_identifier_expression(),
            TokenKind::BracketIdentifier(_) | TokenKind::QuotedIdentifier(_) => {
                self.parse_name_expression()
            }
            _ => Err(self.unexpected(&["expression"])),
        }
    }

    /// Dispatches the built-ins spelled with non-reserved words before
    /// falling back to a name.
    fn parse_identifier_expression(&mut self) -> Result<ScalarExpression, ParseError> {
        let call = self.peek_is(1, &TokenKind::LeftParen);
        if call && self.check_word("CAST") {
            return self.parse_cast_call(false);
        }
        if call && self.check_word("TRY_CAST") {
            return self.parse_cast_call(true);
        }
        if call && self.check_word("PARSE") {
            return self.parse_parse_call(false);
        }
        if call && self.check_word("TRY_PARSE") {
            return self.parse_parse_call(true);
        }
        if call && self.check_word("IIF") {
            return self.parse_iif_call();
        }
        if self.check_word("NEXT")
            && self.peek_word(1, "VALUE")
            && self.peek_keyword(2, Keyword::For)
        {
            return self.parse_next_value_for();
        }
        if self.check_word("$PARTITION") && self.peek_is(1, &TokenKind::Dot) {
            return self.parse_partition_function_call(None, self.current.span);
        }
        if let TokenKind::Identifier(name) = &self.current.kind {
            if let Some(column_type) = ColumnType::pseudo_column(name) {
                let span = self.current.span;
                self.advance();
                return Ok(ScalarExpression::ColumnReference(ColumnReferenceExpression {
                    column_type,
                    multi_part_identifier: None,
                    span,
                }));
            }
        }
        self.parse_name_expression()
    }

    /// A column reference, function call or static method call starting
    /// with a (possibly dotted) name.
    fn parse_name_expression(&mut self) -> Result<ScalarExpression, ParseError> {
        let start = self.current.span;
        let mut parts = vec![self.parse_identifier()?];
        while self.check(&TokenKind::Dot) {
            if self.peek_word(1, "$PARTITION") && parts.len() == 1 {
                self.advance();
                let database_name = parts.pop();
                return self.parse_partition_function_call(database_name, start);
            }
            if !self.peek_is_identifier(1) {
                break;
            }
            self.advance();
            parts.push(self.parse_identifier()?);
        }

        if self.check(&TokenKind::LeftParen) {
            let function_name = parts.pop().ok_or_else(|| self.unexpected(&["function name"]))?;
            let call_target = if parts.is_empty() {
                None
            } else {
                let multi_part_identifier = MultiPartIdentifier {
                    span: start.merge(parts[parts.len() - 1].span),
                    identifiers: parts,
                };
                Some(CallTarget::MultiPartIdentifier(MultiPartIdentifierCallTarget {
                    span: multi_part_identifier.span,
                    multi_part_identifier,
                }))
            };
            return self.parse_function_call(call_target, function_name, start);
        }

        if self.check(&TokenKind::DoubleColon) {
            let parts = parts.into_iter().map(Some).collect();
            let type_name = self.schema_object_name_from_parts(parts, start)?;
            self.advance();
            let member_name = self.parse_name()?;
            if !self.check(&TokenKind::LeftParen) {
                return Ok(ScalarExpression::StaticPropertyAccess(Box::new(
                    StaticPropertyAccess {
                        type_name,
                        property_name: member_name,
                        span: self.span_from(start),
                    },
                )));
            }
            let parameters = self.parse_call_arguments()?;
            return Ok(ScalarExpression::StaticMethodCall(Box::new(StaticMethodCall {
                type_name,
                method_name: member_name,
                parameters,
                span: self.span_from(start),
            })));
        }

        let column_type = parts
            .last()
            .filter(|_| parts.len() > 1)
            .and_then(|last| ColumnType::pseudo_column(&last.value))
            .unwrap_or(ColumnType::Regular);
        let span = self.span_from(start);
        Ok(ScalarExpression::ColumnReference(ColumnReferenceExpression {
            column_type,
            multi_part_identifier: Some(MultiPartIdentifier {
                identifiers: parts,
                span,
            }),
            span,
        }))
    }

    /// `@v` or `@v.method(args)`.
    fn parse_variable_expression(&mut self) -> Result<ScalarExpression, ParseError> {
        let start = self.current.span;
        let variable = self.parse_variable()?;
        if self.check(&TokenKind::Dot) && self.peek_is(2, &TokenKind::LeftParen) {
            self.advance();
            let function_name = self.parse_name()?;
            let call_target = CallTarget::Variable(VariableCallTarget {
                span: variable.span,
                variable,
            });
            return self.parse_function_call(Some(call_target), function_name, start);
        }
        Ok(ScalarExpression::Variable(variable))
    }

    /// `( expr )`, `( subquery )` and `(expr).method(args)` in a scalar
    /// position.
    fn parse_parenthesized_scalar(&mut self) -> Result<ScalarExpression, ParseError> {
        let start = self.expect(&TokenKind::LeftParen)?;
        if self.check_keyword(Keyword::Select) || self.check_keyword(Keyword::With) {
            let query_expression = self.parse_query_expression()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(ScalarExpression::ScalarSubquery(Box::new(ScalarSubquery {
                query_expression,
                span: self.span_from(start),
            })));
        }
        if self.check(&TokenKind::LeftParen) && self.looks_like_query() {
            let query_expression = self.parse_query_expression()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(ScalarExpression::ScalarSubquery(Box::new(ScalarSubquery {
                query_expression,
                span: self.span_from(start),
            })));
        }
        let expression = self.parse_scalar_expression()?;
        self.expect(&TokenKind::RightParen)?;
        let parenthesis = ScalarExpression::Parenthesis(Box::new(ParenthesisExpression {
            expression,
            span: self.span_from(start),
        }));
        self.parse_expression_method_call(parenthesis, start)
    }

    fn parse_expression_method_call(
        &mut self,
        expression: ScalarExpression,
        start: Span,
    ) -> Result<ScalarExpression, ParseError> {
        if !(self.check(&TokenKind::Dot) && self.peek_is(2, &TokenKind::LeftParen)) {
            return Ok(expression);
        }
        let target_span = self.span_from(start);
        self.advance();
        let function_name = self.parse_name()?;
        let call_target = CallTarget::Expression(Box::new(ExpressionCallTarget {
            span: target_span,
            expression,
        }));
        self.parse_function_call(Some(call_target), function_name, start)
    }

    /// Returns true if a run of `(` is followed by `SELECT` or `WITH`.
    pub(super) fn looks_like_query(&mut self) -> bool {
        let mut n = 0;
        while n < 3 && matches!(self.peek_nth(n).kind, TokenKind::LeftParen) {
            n += 1;
        }
        let token = self.peek_nth(n);
        token.is_word(Keyword::Select) || token.is_word(Keyword::With)
    }

    /// Parses `( [args] )` for calls that take plain scalar arguments.
    pub(super) fn parse_call_arguments(&mut self) -> Result<Vec<ScalarExpression>, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let parameters = if self.check(&TokenKind::RightParen) {
            Vec::new()
        } else {
            self.parse_comma_separated(Self::parse_scalar_expression)?
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(parameters)
    }

    /// Parses the argument list and trailing clauses of a function call
    /// whose name has been consumed.
    fn parse_function_call(
        &mut self,
        call_target: Option<CallTarget>,
        function_name: Identifier,
        start: Span,
    ) -> Result<ScalarExpression, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let unique_row_filter = if self.eat_keyword(Keyword::Distinct) {
            UniqueRowFilter::Distinct
        } else if self.eat_keyword(Keyword::All) {
            UniqueRowFilter::All
        } else {
            UniqueRowFilter::NotSpecified
        };
        let parameters = if self.check(&TokenKind::Star) {
            let span = self.current.span;
            self.advance();
            vec![ScalarExpression::ColumnReference(ColumnReferenceExpression {
                column_type: ColumnType::Wildcard,
                multi_part_identifier: None,
                span,
            })]
        } else if self.check(&TokenKind::RightParen) {
            Vec::new()
        } else {
            self.parse_comma_separated(Self::parse_scalar_expression)?
        };
        self.expect(&TokenKind::RightParen)?;

        let within_group_clause = if self.check_keyword(Keyword::Within) {
            let within = self.current.span;
            self.advance();
            self.expect_keyword(Keyword::Group)?;
            self.expect(&TokenKind::LeftParen)?;
            let order_by_clause = self.parse_order_by_clause()?;
            self.expect(&TokenKind::RightParen)?;
            Some(WithinGroupClause {
                order_by_clause,
                span: self.span_from(within),
            })
        } else {
            None
        };
        let null_treatment = if self.check_word("IGNORE") && self.peek_word(1, "NULLS") {
            self.advance();
            self.advance();
            Some(NullTreatment::IgnoreNulls)
        } else if self.check_word("RESPECT") && self.peek_word(1, "NULLS") {
            self.advance();
            self.advance();
            Some(NullTreatment::RespectNulls)
        } else {
            None
        };
        let over_clause = if self.check_keyword(Keyword::Over) {
            Some(self.parse_over_clause()?)
        } else {
            None
        };

        let call = ScalarExpression::FunctionCall(Box::new(FunctionCall {
            call_target,
            function_name,
            unique_row_filter,
            parameters,
            null_treatment,
            within_group_clause,
            over_clause,
            span: self.span_from(start),
        }));
        self.parse_expression_method_call(call, start)
    }

    /// `OVER window_name` or `OVER ( [window_name] [PARTITION BY …]
    /// [ORDER BY …] [frame] )`.
    pub(super) fn parse_over_clause(&mut self) -> Result<OverClause, ParseError> {
        let start = self.expect_keyword(Keyword::Over)?;
        if self.check_identifier() {
            let window_name = self.parse_identifier()?;
            return Ok(OverClause {
                window_name: Some(window_name),
                partitions: Vec::new(),
                order_by_clause: None,
                window_frame_clause: None,
                span: self.span_from(start),
            });
        }
        self.expect(&TokenKind::LeftParen)?;
        let spec = self.parse_window_specification()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(OverClause {
            window_name: spec.window_name,
            partitions: spec.partitions,
            order_by_clause: spec.order_by_clause,
            window_frame_clause: spec.window_frame_clause,
            span: self.span_from(start),
        })
    }

    /// The inside of an `OVER (…)` or `WINDOW w AS (…)`.
    pub(super) fn parse_window_specification(&mut self) -> Result<WindowSpecification, ParseError> {
        let window_name = if self.check_identifier()
            && !self.check_any_word(&["PARTITION", "ROWS", "RANGE"])
        {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let partitions = if self.check_word("PARTITION") {
            self.advance();
            self.expect_keyword(Keyword::By)?;
            self.parse_comma_separated(Self::parse_scalar_expression)?
        } else {
            Vec::new()
        };
        let order_by_clause = if self.check_keyword(Keyword::Order) {
            Some(self.parse_order_by_clause()?)
        } else {
            None
        };
        let window_frame_clause = if self.check_any_word(&["ROWS", "RANGE"]) {
            Some(self.parse_window_frame_clause()?)
        } else {
            None
        };
        Ok(WindowSpecification {
            window_name,
            partitions,
            order_by_clause,
            window_frame_clause,
        })
    }

    fn parse_window_frame_clause(&mut self) -> Result<WindowFrameClause, ParseError> {
        let start = self.current.span;
        let window_frame_type = if self.eat_word("ROWS") {
            WindowFrameType::Rows
        } else {
            self.expect_word("RANGE")?;
            WindowFrameType::Range
        };
        let (top, bottom) = if self.eat_keyword(Keyword::Between) {
            let top = self.parse_window_delimiter()?;
            self.expect_keyword(Keyword::And)?;
            let bottom = self.parse_window_delimiter()?;
            (top, Some(bottom))
        } else {
            (self.parse_window_delimiter()?, None)
        };
        Ok(WindowFrameClause {
            window_frame_type,
            top,
            bottom,
            span: self.span_from(start),
        })
    }

    fn parse_window_delimiter(&mut self) -> Result<WindowDelimiter, ParseError> {
        let start = self.current.span;
        if self.eat_word("UNBOUNDED") {
            let window_delimiter_type = if self.eat_word("PRECEDING") {
                WindowDelimiterType::UnboundedPreceding
            } else {
                self.expect_word("FOLLOWING")?;
                WindowDelimiterType::UnboundedFollowing
            };
            return Ok(WindowDelimiter {
                offset_value: None,
                window_delimiter_type,
                span: self.span_from(start),
            });
        }
        if self.eat_keyword(Keyword::Current) {
            self.expect_word("ROW")?;
            return Ok(WindowDelimiter {
                offset_value: None,
                window_delimiter_type: WindowDelimiterType::CurrentRow,
                span: self.span_from(start),
            });
        }
        let offset_value = self.parse_scalar_expression()?;
        let window_delimiter_type = if self.eat_word("PRECEDING") {
            WindowDelimiterType::ValuePreceding
        } else {
            self.expect_word("FOLLOWING")?;
            WindowDelimiterType::ValueFollowing
        };
        Ok(WindowDelimiter {
            offset_value: Some(offset_value),
            window_delimiter_type,
            span: self.span_from(start),
        })
    }

    fn parse_case_expression(&mut self) -> Result<ScalarExpression, ParseError> {
        let start = self.expect_keyword(Keyword::Case)?;
        if self.check_keyword(Keyword::When) {
            let mut when_clauses = Vec::new();
            while self.check_keyword(Keyword::When) {
                let when = self.current.span;
                self.advance();
                let when_expression = self.parse_boolean_expression()?;
                self.expect_keyword(Keyword::Then)?;
                let then_expression = self.parse_scalar_expression()?;
                when_clauses.push(SearchedWhenClause {
                    when_expression,
                    then_expression,
                    span: self.span_from(when),
                });
            }
            let else_expression = self.parse_case_else()?;
            return Ok(ScalarExpression::SearchedCase(Box::new(SearchedCaseExpression {
                when_clauses,
                else_expression,
                span: self.span_from(start),
            })));
        }

        let input_expression = self.parse_scalar_expression()?;
        let mut when_clauses = Vec::new();
        loop {
            let when = self.expect_keyword(Keyword::When)?;
            let when_expression = self.parse_scalar_expression()?;
            self.expect_keyword(Keyword::Then)?;
            let then_expression = self.parse_scalar_expression()?;
            when_clauses.push(SimpleWhenClause {
                when_expression,
                then_expression,
                span: self.span_from(when),
            });
            if !self.check_keyword(Keyword::When) {
                break;
            }
        }
        let else_expression = self.parse_case_else()?;
        Ok(ScalarExpression::SimpleCase(Box::new(SimpleCaseExpression {
            input_expression,
            when_clauses,
            else_expression,
            span: self.span_from(start),
        })))
    }

    fn parse_case_else(&mut self) -> Result<Option<ScalarExpression>, ParseError> {
        let else_expression = if self.eat_keyword(Keyword::Else) {
            Some(self.parse_scalar_expression()?)
        } else {
            None
        };
        self.expect_keyword(Keyword::End)?;
        Ok(else_expression)
    }

    fn parse_cast_call(&mut self, is_try: bool) -> Result<ScalarExpression, ParseError> {
        let start = self.current.span;
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let parameter = self.parse_scalar_expression()?;
        self.expect_keyword(Keyword::As)?;
        let data_type = self.parse_data_type()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(ScalarExpression::Cast(Box::new(CastCall {
            is_try,
            parameter,
            data_type,
            span: self.span_from(start),
        })))
    }

    fn parse_convert_call(&mut self, is_try: bool) -> Result<ScalarExpression, ParseError> {
        let start = self.current.span;
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let data_type = self.parse_data_type()?;
        self.expect(&TokenKind::Comma)?;
        let parameter = self.parse_scalar_expression()?;
        let style = if self.eat(&TokenKind::Comma) {
            Some(self.parse_scalar_expression()?)
        } else {
            None
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(ScalarExpression::Convert(Box::new(ConvertCall {
            is_try,
            data_type,
            parameter,
            style,
            span: self.span_from(start),
        })))
    }

    fn parse_parse_call(&mut self, is_try: bool) -> Result<ScalarExpression, ParseError> {
        let start = self.current.span;
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let string_value = self.parse_scalar_expression()?;
        self.expect_keyword(Keyword::As)?;
        let data_type = self.parse_data_type()?;
        let culture = if self.eat_word("USING") {
            Some(self.parse_scalar_expression()?)
        } else {
            None
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(ScalarExpression::Parse(Box::new(ParseCall {
            is_try,
            string_value,
            data_type,
            culture,
            span: self.span_from(start),
        })))
    }

    fn parse_iif_call(&mut self) -> Result<ScalarExpression, ParseError> {
        let start = self.current.span;
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let predicate = self.parse_boolean_expression()?;
        self.expect(&TokenKind::Comma)?;
        let then_expression = self.parse_scalar_expression()?;
        self.expect(&TokenKind::Comma)?;
        let else_expression = self.parse_scalar_expression()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(ScalarExpression::Iif(Box::new(IifCall {
            predicate,
            then_expression,
            else_expression,
            span: self.span_from(start),
        })))
    }

    fn parse_next_value_for(&mut self) -> Result<ScalarExpression, ParseError> {
        let start = self.current.span;
        self.advance();
        self.advance();
        self.expect_keyword(Keyword::For)?;
        let sequence_name = self.parse_schema_object_name()?;
        let over_clause = if self.check_keyword(Keyword::Over) {
            Some(self.parse_over_clause()?)
        } else {
            None
        };
        Ok(ScalarExpression::NextValueFor(Box::new(NextValueForExpression {
            sequence_name,
            over_clause,
            span: self.span_from(start),
        })))
    }

    fn parse_identity_function(&mut self) -> Result<ScalarExpression, ParseError> {
        let start = self.expect_keyword(Keyword::Identity)?;
        self.expect(&TokenKind::LeftParen)?;
        let data_type = self.parse_data_type()?;
        let (seed, increment) = if self.eat(&TokenKind::Comma) {
            let seed = self.parse_scalar_expression()?;
            self.expect(&TokenKind::Comma)?;
            (Some(seed), Some(self.parse_scalar_expression()?))
        } else {
            (None, None)
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(ScalarExpression::IdentityFunctionCall(Box::new(IdentityFunctionCall {
            data_type,
            seed,
            increment,
            span: self.span_from(start),
        })))
    }

    /// `$PARTITION.fn(args)`; the current token is `$PARTITION`.
    fn parse_partition_function_call(
        &mut self,
        database_name: Option<Identifier>,
        start: Span,
    ) -> Result<ScalarExpression, ParseError> {
        self.expect_word("$PARTITION")?;
        self.expect(&TokenKind::Dot)?;
        let function_name = self.parse_identifier()?;
        let parameters = self.parse_call_arguments()?;
        Ok(ScalarExpression::PartitionFunctionCall(PartitionFunctionCall {
            database_name,
            function_name,
            parameters,
            span: self.span_from(start),
        }))
    }

    /// `{fn name(args)}` or `{d|t|ts|guid 'value'}`.
    fn parse_odbc_expression(&mut self) -> Result<ScalarExpression, ParseError> {
        let start = self.expect(&TokenKind::LeftBrace)?;
        if self.eat_word("FN") {
            let name = self.parse_name()?;
            let parameters = self.parse_call_arguments()?;
            self.expect(&TokenKind::RightBrace)?;
            return Ok(ScalarExpression::OdbcFunctionCall(OdbcFunctionCall {
                name,
                parameters,
                span: self.span_from(start),
            }));
        }
        let odbc_literal_type = self
            .current
            .word()
            .and_then(OdbcLiteralType::from_word)
            .ok_or_else(|| self.unexpected(&["fn", "d", "t", "ts", "guid"]))?;
        self.advance();
        let value = self.parse_string_literal()?;
        self.expect(&TokenKind::RightBrace)?;
        let span = self.span_from(start);
        Ok(ScalarExpression::Literal(Literal {
            value: value.value,
            is_national: value.is_national,
            odbc_literal_type: Some(odbc_literal_type),
            ..Literal::new(LiteralType::Odbc, self.text(span), span)
        }))
    }

    // --- Search conditions ---

    /// Parses a search condition.
    pub(super) fn parse_boolean_expression(&mut self) -> Result<BooleanExpression, ParseError> {
        self.parse_boolean(0)
    }

    fn parse_boolean(&mut self, min_bp: u8) -> Result<BooleanExpression, ParseError> {
        self.nested(|p| p.parse_boolean_bp(min_bp))
    }

    fn parse_boolean_bp(&mut self, min_bp: u8) -> Result<BooleanExpression, ParseError> {
        let start = self.current.span;
        let left = if self.check_keyword(Keyword::Not) {
            self.advance();
            let expression = self.parse_boolean(NOT_BP)?;
            BooleanExpression::Not(Box::new(BooleanNotExpression {
                expression,
                span: self.span_from(start),
            }))
        } else {
            self.parse_boolean_primary()?
        };
        self.continue_boolean(left, start, min_bp)
    }

    fn continue_boolean(
        &mut self,
        mut left: BooleanExpression,
        start: Span,
        min_bp: u8,
    ) -> Result<BooleanExpression, ParseError> {
        while let Some((left_bp, right_bp)) = boolean_binding_power(&self.current.kind) {
            if left_bp < min_bp {
                break;
            }
            let binary_expression_type = if self.check_keyword(Keyword::And) {
                BooleanBinaryExpressionType::And
            } else {
                BooleanBinaryExpressionType::Or
            };
            self.advance();
            let right = self.parse_boolean(right_bp)?;
            left = BooleanExpression::Binary(Box::new(BooleanBinaryExpression {
                first_expression: left,
                binary_expression_type,
                second_expression: right,
                span: self.span_from(start),
            }));
        }
        Ok(left)
    }

    fn parse_boolean_primary(&mut self) -> Result<BooleanExpression, ParseError> {
        let start = self.current.span;
        if self.check_keyword(Keyword::Exists) {
            self.advance();
            let subquery = self.parse_subquery()?;
            return Ok(BooleanExpression::Exists(Box::new(ExistsPredicate {
                subquery,
                span: self.span_from(start),
            })));
        }
        if self.check_keyword(Keyword::Contains) && self.peek_is(1, &TokenKind::LeftParen) {
            return self.parse_full_text_predicate(FullTextFunctionType::Contains);
        }
        if self.check_keyword(Keyword::FreeText) && self.peek_is(1, &TokenKind::LeftParen) {
            return self.parse_full_text_predicate(FullTextFunctionType::FreeText);
        }
        if self.check_word("MATCH") && self.peek_is(1, &TokenKind::LeftParen) {
            return self.parse_graph_match_predicate();
        }
        if self.check_keyword(Keyword::Update) && self.peek_is(1, &TokenKind::LeftParen) {
            self.advance();
            self.expect(&TokenKind::LeftParen)?;
            let identifier = self.parse_identifier()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(BooleanExpression::UpdateCall(UpdateCall {
                identifier,
                span: self.span_from(start),
            }));
        }
        if self.check(&TokenKind::LeftParen) {
            return match self.parse_parenthesized_operand()? {
                Operand::Boolean(condition) => Ok(condition),
                Operand::Scalar(scalar) => {
                    let scalar = self.continue_scalar(scalar, start, 0)?;
                    self.parse_predicate_tail(scalar, start)
                }
            };
        }
        let scalar = self.parse_scalar_expression()?;
        self.parse_predicate_tail(scalar, start)
    }

    /// Parses `( … )` in a boolean position, deciding from its content
    /// whether it holds a condition or a value.
    fn parse_parenthesized_operand(&mut self) -> Result<Operand, ParseError> {
        self.nested(Self::parse_parenthesized_operand_body)
    }

    fn parse_parenthesized_operand_body(&mut self) -> Result<Operand, ParseError> {
        let start = self.expect(&TokenKind::LeftParen)?;
        if self.looks_like_query() {
            let query_expression = self.parse_query_expression()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(Operand::Scalar(ScalarExpression::ScalarSubquery(Box::new(
                ScalarSubquery {
                    query_expression,
                    span: self.span_from(start),
                },
            ))));
        }
        let inner = self.parse_boolean_or_scalar()?;
        self.expect(&TokenKind::RightParen)?;
        let span = self.span_from(start);
        Ok(match inner {
            Operand::Boolean(expression) => Operand::Boolean(BooleanExpression::Parenthesis(
                Box::new(BooleanParenthesisExpression { expression, span }),
            )),
            Operand::Scalar(expression) => Operand::Scalar(ScalarExpression::Parenthesis(
                Box::new(ParenthesisExpression { expression, span }),
            )),
        })
    }

    fn parse_boolean_or_scalar(&mut self) -> Result<Operand, ParseError> {
        let start = self.current.span;
        let starts_condition = self.check_keyword(Keyword::Not)
            || self.check_keyword(Keyword::Exists)
            || ((self.check_keyword(Keyword::Contains)
                || self.check_keyword(Keyword::FreeText)
                || self.check_keyword(Keyword::Update)
                || self.check_word("MATCH"))
                && self.peek_is(1, &TokenKind::LeftParen));
        if starts_condition {
            return self.parse_boolean_expression().map(Operand::Boolean);
        }

        let scalar = if self.check(&TokenKind::LeftParen) {
            match self.parse_parenthesized_operand()? {
                Operand::Boolean(condition) => {
                    return self.continue_boolean(condition, start, 0).map(Operand::Boolean);
                }
                Operand::Scalar(scalar) => scalar,
            }
        } else {
            self.parse_scalar_prefix_operand()?
        };
        let scalar = self.continue_scalar(scalar, start, 0)?;
        if self.check_predicate_tail() {
            let condition = self.parse_predicate_tail(scalar, start)?;
            return self.continue_boolean(condition, start, 0).map(Operand::Boolean);
        }
        Ok(Operand::Scalar(scalar))
    }

    /// A scalar operand with its prefix operators but no infix tail.
    fn parse_scalar_prefix_operand(&mut self) -> Result<ScalarExpression, ParseError> {
        let start = self.current.span;
        if let Some(op) = token_to_unary_op(&self.current.kind) {
            self.advance();
            let expression = self.parse_scalar(UNARY_BP)?;
            return Ok(ScalarExpression::Unary(Box::new(UnaryExpression {
                unary_expression_type: op,
                expression,
                span: self.span_from(start),
            })));
        }
        self.parse_scalar_primary()
    }

    fn check_predicate_tail(&mut self) -> bool {
        if token_to_comparison(&self.current.kind).is_some() {
            return true;
        }
        if self.check_keyword(Keyword::Is)
            || self.check_keyword(Keyword::In)
            || self.check_keyword(Keyword::Like)
            || self.check_keyword(Keyword::Between)
        {
            return true;
        }
        self.check_keyword(Keyword::Not)
            && (self.peek_keyword(1, Keyword::In)
                || self.peek_keyword(1, Keyword::Like)
                || self.peek_keyword(1, Keyword::Between))
    }

    /// Parses the predicate that follows a scalar operand.
    fn parse_predicate_tail(
        &mut self,
        left: ScalarExpression,
        start: Span,
    ) -> Result<BooleanExpression, ParseError> {
        if let Some(comparison_type) = token_to_comparison(&self.current.kind) {
            self.advance();
            let quantifier = if self.check_keyword(Keyword::Any)
                || self.check_keyword(Keyword::Some)
            {
                Some(SubqueryComparisonPredicateType::Any)
            } else if self.check_keyword(Keyword::All) {
                Some(SubqueryComparisonPredicateType::All)
            } else {
                None
            };
            if let Some(subquery_comparison_predicate_type) = quantifier {
                self.advance();
                let subquery = self.parse_subquery()?;
                return Ok(BooleanExpression::SubqueryComparison(Box::new(
                    SubqueryComparisonPredicate {
                        expression: left,
                        comparison_type,
                        subquery_comparison_predicate_type,
                        subquery,
                        span: self.span_from(start),
                    },
                )));
            }
            let second_expression = self.parse_scalar_expression()?;
            return Ok(BooleanExpression::Comparison(Box::new(BooleanComparisonExpression {
                first_expression: left,
                comparison_type,
                second_expression,
                span: self.span_from(start),
            })));
        }

        if self.check_keyword(Keyword::Is) {
            let is = self.current.span;
            self.advance();
            let is_not = self.eat_keyword(Keyword::Not);
            if self.eat_keyword(Keyword::Distinct) {
                self.expect_keyword(Keyword::From)?;
                self.require(Feature::IsDistinctFrom, self.span_from(is));
                let second_expression = self.parse_scalar_expression()?;
                return Ok(BooleanExpression::Distinct(Box::new(DistinctPredicate {
                    first_expression: left,
                    is_not,
                    second_expression,
                    span: self.span_from(start),
                })));
            }
            self.expect_keyword(Keyword::Null)?;
            return Ok(BooleanExpression::IsNull(Box::new(BooleanIsNullExpression {
                expression: left,
                is_not,
                span: self.span_from(start),
            })));
        }

        let not_defined = self.check_keyword(Keyword::Not)
            && (self.peek_keyword(1, Keyword::In)
                || self.peek_keyword(1, Keyword::Like)
                || self.peek_keyword(1, Keyword::Between));
        if not_defined {
            self.advance();
        }

        if self.eat_keyword(Keyword::In) {
            self.expect(&TokenKind::LeftParen)?;
            let paren = self.previous.span;
            let (values, subquery) = if self.looks_like_query() {
                let query_expression = self.parse_query_expression()?;
                self.expect(&TokenKind::RightParen)?;
                let subquery = ScalarSubquery {
                    query_expression,
                    span: self.span_from(paren),
                };
                (Vec::new(), Some(subquery))
            } else {
                let values = self.parse_comma_separated(Self::parse_scalar_expression)?;
                self.expect(&TokenKind::RightParen)?;
                (values, None)
            };
            return Ok(BooleanExpression::In(Box::new(InPredicate {
                expression: left,
                not_defined,
                values,
                subquery,
                span: self.span_from(start),
            })));
        }

        if self.eat_keyword(Keyword::Like) {
            let second_expression = self.parse_scalar_expression()?;
            let escape_expression = if self.eat_keyword(Keyword::Escape) {
                Some(self.parse_scalar_expression()?)
            } else {
                None
            };
            return Ok(BooleanExpression::Like(Box::new(LikePredicate {
                first_expression: left,
                not_defined,
                second_expression,
                escape_expression,
                span: self.span_from(start),
            })));
        }

        if self.eat_keyword(Keyword::Between) {
            let second_expression = self.parse_scalar_expression()?;
            self.expect_keyword(Keyword::And)?;
            let third_expression = self.parse_scalar_expression()?;
            let ternary_expression_type = if not_defined {
                BooleanTernaryExpressionType::NotBetween
            } else {
                BooleanTernaryExpressionType::Between
            };
            return Ok(BooleanExpression::Ternary(Box::new(BooleanTernaryExpression {
                first_expression: left,
                ternary_expression_type,
                second_expression,
                third_expression,
                span: self.span_from(start),
            })));
        }

        Err(self.unexpected(&["comparison operator", "IS", "IN", "LIKE", "BETWEEN"]))
    }

    /// `( query )` as a subquery.
    pub(super) fn parse_subquery(&mut self) -> Result<ScalarSubquery, ParseError> {
        let start = self.expect(&TokenKind::LeftParen)?;
        let query_expression = self.parse_query_expression()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(ScalarSubquery {
            query_expression,
            span: self.span_from(start),
        })
    }

    /// `CONTAINS | FREETEXT ( columns, search [, LANGUAGE term] )`
    fn parse_full_text_predicate(
        &mut self,
        full_text_function_type: FullTextFunctionType,
    ) -> Result<BooleanExpression, ParseError> {
        let start = self.current.span;
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let mut property_name = None;
        let columns = if self.check(&TokenKind::LeftParen) {
            self.parse_parenthesized_list(Self::parse_full_text_column)?
        } else if self.check_word("PROPERTY") && self.peek_is(1, &TokenKind::LeftParen) {
            self.advance();
            self.expect(&TokenKind::LeftParen)?;
            let column = self.parse_full_text_column()?;
            self.expect(&TokenKind::Comma)?;
            property_name = Some(self.parse_scalar_expression()?);
            self.expect(&TokenKind::RightParen)?;
            vec![column]
        } else {
            vec![self.parse_full_text_column()?]
        };
        self.expect(&TokenKind::Comma)?;
        let value = self.parse_scalar_expression()?;
        let language_term = if self.eat(&TokenKind::Comma) {
            self.expect_word("LANGUAGE")?;
            Some(self.parse_scalar_expression()?)
        } else {
            None
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(BooleanExpression::FullText(Box::new(FullTextPredicate {
            full_text_function_type,
            columns,
            property_name,
            value,
            language_term,
            span: self.span_from(start),
        })))
    }

    /// A column in a full-text predicate or `*`.
    pub(super) fn parse_full_text_column(
        &mut self,
    ) -> Result<ColumnReferenceExpression, ParseError> {
        let start = self.current.span;
        if self.eat(&TokenKind::Star) {
            return Ok(ColumnReferenceExpression {
                column_type: ColumnType::Wildcard,
                multi_part_identifier: None,
                span: start,
            });
        }
        let multi_part_identifier = self.parse_multi_part_identifier()?;
        Ok(ColumnReferenceExpression {
            column_type: ColumnType::Regular,
            span: multi_part_identifier.span,
            multi_part_identifier: Some(multi_part_identifier),
        })
    }

    /// Graph `MATCH(a-(e)->b AND b<-(f)-c)`.
    fn parse_graph_match_predicate(&mut self) -> Result<BooleanExpression, ParseError> {
        let start = self.current.span;
        self.advance();
        self.require(Feature::GraphMatch, start);
        self.expect(&TokenKind::LeftParen)?;
        let mut patterns = vec![self.parse_graph_match_composite()?];
        while self.eat_keyword(Keyword::And) {
            patterns.push(self.parse_graph_match_composite()?);
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(BooleanExpression::GraphMatch(GraphMatchPredicate {
            patterns,
            span: self.span_from(start),
        }))
    }

    fn parse_graph_match_composite(&mut self) -> Result<GraphMatchComposite, ParseError> {
        let first_node = self.parse_identifier()?;
        let start = first_node.span;
        let mut steps = Vec::new();
        loop {
            let step_start = self.current.span;
            let arrow_on_right = match self.current.kind {
                TokenKind::Minus => {
                    self.advance();
                    true
                }
                TokenKind::Lt => {
                    self.advance();
                    self.expect(&TokenKind::Minus)?;
                    false
                }
                _ => break,
            };
            self.expect(&TokenKind::LeftParen)?;
            let edge = self.parse_identifier()?;
            self.expect(&TokenKind::RightParen)?;
            self.expect(&TokenKind::Minus)?;
            if arrow_on_right {
                self.expect(&TokenKind::Gt)?;
            }
            let node = self.parse_identifier()?;
            steps.push(GraphMatchStep {
                edge,
                arrow_on_right,
                node,
                span: self.span_from(step_start),
            });
        }
        if steps.is_empty() {
            return Err(self.unexpected(&["-", "<-"]));
        }
        Ok(GraphMatchComposite {
            first_node,
            steps,
            span: self.span_from(start),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::lexer::Span;
    use crate::parser::{ParseOptions, Parser};

    fn scalar(sql: &str) -> ScalarExpression {
        let mut parser = Parser::new(sql, &ParseOptions::default());
        parser.parse_scalar_expression().unwrap()
    }

    fn condition(sql: &str) -> BooleanExpression {
        let mut parser = Parser::new(sql, &ParseOptions::default());
        parser.parse_boolean_expression().unwrap()
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        let ScalarExpression::Binary(add) = scalar("1 + 2 * 3") else {
            panic!("expected binary expression");
        };
        assert_eq!(add.binary_expression_type, BinaryExpressionType::Add);
        assert!(matches!(
            &add.second_expression,
            ScalarExpression::Binary(mul)
                if mul.binary_expression_type == BinaryExpressionType::Multiply
        ));
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        let ScalarExpression::Binary(outer) = scalar("a - b - c") else {
            panic!("expected binary expression");
        };
        assert!(matches!(outer.first_expression, ScalarExpression::Binary(_)));
        assert!(matches!(outer.second_expression, ScalarExpression::ColumnReference(_)));
    }

    #[test]
    fn test_unary_minus_and_collate() {
        let ScalarExpression::Unary(unary) = scalar("-x") else {
            panic!("expected unary expression");
        };
        assert_eq!(unary.unary_expression_type, UnaryExpressionType::Negative);

        let ScalarExpression::Collate(collate) = scalar("name COLLATE Latin1_General_CI_AS") else {
            panic!("expected collate");
        };
        assert_eq!(collate.collation.value, "Latin1_General_CI_AS");
    }

    #[test]
    fn test_function_calls() {
        let ScalarExpression::FunctionCall(count) = scalar("COUNT(*)") else {
            panic!("expected function call");
        };
        assert!(matches!(
            &count.parameters[0],
            ScalarExpression::ColumnReference(c) if c.column_type == ColumnType::Wildcard
        ));

        let ScalarExpression::FunctionCall(call) = scalar("dbo.fn(1, DISTINCT_x)") else {
            panic!("expected function call");
        };
        assert_eq!(call.function_name.value, "fn");
        assert!(matches!(call.call_target, Some(CallTarget::MultiPartIdentifier(_))));
        assert_eq!(call.parameters.len(), 2);

        let ScalarExpression::FunctionCall(agg) = scalar("COUNT(DISTINCT id)") else {
            panic!("expected function call");
        };
        assert_eq!(agg.unique_row_filter, UniqueRowFilter::Distinct);
    }

    #[test]
    fn test_over_clause_with_frame() {
        let sql = "SUM(x) OVER (PARTITION BY a ORDER BY b \
                   ROWS BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW)";
        let ScalarExpression::FunctionCall(call) = scalar(sql) else {
            panic!("expected function call");
        };
        let over = call.over_clause.unwrap();
        assert_eq!(over.partitions.len(), 1);
        assert!(over.order_by_clause.is_some());
        let frame = over.window_frame_clause.unwrap();
        assert_eq!(frame.window_frame_type, WindowFrameType::Rows);
        assert_eq!(frame.top.window_delimiter_type, WindowDelimiterType::UnboundedPreceding);
        assert_eq!(
            frame.bottom.unwrap().window_delimiter_type,
            WindowDelimiterType::CurrentRow
        );
    }

    #[test]
    fn test_within_group() {
        let ScalarExpression::FunctionCall(call) =
            scalar("STRING_AGG(name, ',') WITHIN GROUP (ORDER BY name DESC)")
        else {
            panic!("expected function call");
        };
        let within = call.within_group_clause.unwrap();
        assert_eq!(
            within.order_by_clause.order_by_elements[0].sort_order,
            SortOrder::Descending
        );
    }

    #[test]
    fn test_case_forms() {
        assert!(matches!(
            scalar("CASE WHEN a > 1 THEN 'x' ELSE 'y' END"),
            ScalarExpression::SearchedCase(_)
        ));
        let ScalarExpression::SimpleCase(case) =
            scalar("CASE a WHEN 1 THEN 'one' WHEN 2 THEN 'two' END")
        else {
            panic!("expected simple case");
        };
        assert_eq!(case.when_clauses.len(), 2);
        assert!(case.else_expression.is_none());
    }

    #[test]
    fn test_conversions() {
        let ScalarExpression::Cast(cast) = scalar("TRY_CAST(x AS DECIMAL(10, 2))") else {
            panic!("expected cast");
        };
        assert!(cast.is_try);
        assert_eq!(
            cast.data_type.sql_data_type_option(),
            Some(SqlDataTypeOption::Decimal)
        );

        let ScalarExpression::Convert(convert) = scalar("CONVERT(VARCHAR(20), d, 120)") else {
            panic!("expected convert");
        };
        assert!(convert.style.is_some());

        assert!(matches!(
            scalar("PARSE('1' AS INT USING 'en-US')"),
            ScalarExpression::Parse(p) if p.culture.is_some()
        ));
    }

    #[test]
    fn test_builtins() {
        assert!(matches!(scalar("IIF(a > 1, 1, 0)"), ScalarExpression::Iif(_)));
        assert!(matches!(
            scalar("COALESCE(a, b, 0)"),
            ScalarExpression::Coalesce(c) if c.expressions.len() == 3
        ));
        assert!(matches!(scalar("NULLIF(a, 0)"), ScalarExpression::NullIf(_)));
        assert!(matches!(
            scalar("CURRENT_TIMESTAMP"),
            ScalarExpression::ParameterlessCall(c)
                if c.parameterless_call_type == ParameterlessCallType::CurrentTimestamp
        ));
        assert!(matches!(scalar("NEXT VALUE FOR dbo.seq"), ScalarExpression::NextValueFor(_)));
        assert!(matches!(scalar("LEFT(name, 3)"), ScalarExpression::FunctionCall(_)));
        assert!(matches!(scalar("RIGHT(name, 2)"), ScalarExpression::FunctionCall(_)));
        assert!(matches!(
            scalar("IDENTITY(INT, 1, 1)"),
            ScalarExpression::IdentityFunctionCall(_)
        ));
        assert!(matches!(scalar("$PARTITION.pf(col)"), ScalarExpression::PartitionFunctionCall(_)));
        assert!(matches!(
            scalar("$ACTION"),
            ScalarExpression::ColumnReference(c) if c.column_type == ColumnType::PseudoColumnAction
        ));
    }

    #[test]
    fn test_variables_and_methods() {
        assert!(matches!(scalar("@x"), ScalarExpression::Variable(v) if v.name == "@x"));
        assert!(matches!(scalar("@@ROWCOUNT"), ScalarExpression::GlobalVariable(_)));

        let ScalarExpression::FunctionCall(call) = scalar("@doc.value('(/a)[1]', 'int')") else {
            panic!("expected method call");
        };
        assert!(matches!(call.call_target, Some(CallTarget::Variable(_))));

        assert!(matches!(
            scalar("geography::Point(1, 2, 4326)"),
            ScalarExpression::StaticMethodCall(_)
        ));
    }

    #[test]
    fn test_static_property_without_parentheses() {
        let ScalarExpression::StaticPropertyAccess(access) = scalar("a::b") else {
            panic!("expected static property");
        };
        assert_eq!(access.type_name.base_identifier.value, "a");
        assert_eq!(access.property_name.value, "b");
        assert_eq!(access.span, Span::new(0, 4, 1));

        let ScalarExpression::Binary(binary) = scalar("hierarchyid::GetRoot + 1") else {
            panic!("expected binary");
        };
        assert!(matches!(binary.first_expression, ScalarExpression::StaticPropertyAccess(_)));
    }

    #[test]
    fn test_odbc_forms() {
        let ScalarExpression::Literal(literal) = scalar("{d '2020-01-31'}") else {
            panic!("expected literal");
        };
        assert_eq!(literal.literal_type, LiteralType::Odbc);
        assert_eq!(literal.value, "2020-01-31");
        assert_eq!(literal.text, "{d '2020-01-31'}");
        assert!(matches!(scalar("{fn UCASE('a')}"), ScalarExpression::OdbcFunctionCall(_)));
    }

    #[test]
    fn test_scalar_subquery() {
        assert!(matches!(
            scalar("(SELECT MAX(id) FROM t)"),
            ScalarExpression::ScalarSubquery(_)
        ));
        assert!(matches!(scalar("(1 + 2)"), ScalarExpression::Parenthesis(_)));
    }

    #[test]
    fn test_boolean_precedence() {
        let BooleanExpression::Binary(or) = condition("a = 1 OR b = 2 AND c = 3") else {
            panic!("expected OR");
        };
        assert_eq!(or.binary_expression_type, BooleanBinaryExpressionType::Or);
        assert!(matches!(
            &or.second_expression,
            BooleanExpression::Binary(and)
                if and.binary_expression_type == BooleanBinaryExpressionType::And
        ));
    }

    #[test]
    fn test_not_binds_tighter_than_and() {
        let BooleanExpression::Binary(and) = condition("NOT a = 1 AND b = 2") else {
            panic!("expected AND");
        };
        assert!(matches!(and.first_expression, BooleanExpression::Not(_)));
    }

    #[test]
    fn test_parentheses_disambiguation() {
        assert!(matches!(
            condition("(a = 1 OR b = 2) AND c = 3"),
            BooleanExpression::Binary(b)
                if matches!(b.first_expression, BooleanExpression::Parenthesis(_))
        ));
        let BooleanExpression::Comparison(cmp) = condition("(a + b) * 2 > 10") else {
            panic!("expected comparison");
        };
        assert!(matches!(cmp.first_expression, ScalarExpression::Binary(_)));
        assert!(matches!(
            condition("((a = 1))"),
            BooleanExpression::Parenthesis(_)
        ));
        assert!(matches!(
            condition("(SELECT COUNT(*) FROM t) > 0"),
            BooleanExpression::Comparison(_)
        ));
    }

    #[test]
    fn test_predicates() {
        assert!(matches!(condition("a IS NOT NULL"), BooleanExpression::IsNull(p) if p.is_not));
        assert!(matches!(
            condition("a NOT IN (1, 2)"),
            BooleanExpression::In(p) if p.not_defined && p.values.len() == 2
        ));
        assert!(matches!(
            condition("a IN (SELECT id FROM t)"),
            BooleanExpression::In(p) if p.subquery.is_some()
        ));
        assert!(matches!(
            condition("name LIKE 'a!%' ESCAPE '!'"),
            BooleanExpression::Like(p) if p.escape_expression.is_some()
        ));
        assert!(matches!(
            condition("a NOT BETWEEN 1 AND 5"),
            BooleanExpression::Ternary(p)
                if p.ternary_expression_type == BooleanTernaryExpressionType::NotBetween
        ));
        assert!(matches!(
            condition("EXISTS (SELECT 1 FROM t)"),
            BooleanExpression::Exists(_)
        ));
        assert!(matches!(
            condition("a > ALL (SELECT b FROM t)"),
            BooleanExpression::SubqueryComparison(p)
                if p.subquery_comparison_predicate_type == SubqueryComparisonPredicateType::All
        ));
        assert!(matches!(
            condition("a IS DISTINCT FROM b"),
            BooleanExpression::Distinct(p) if !p.is_not
        ));
    }

    #[test]
    fn test_between_and_does_not_leak() {
        let BooleanExpression::Binary(and) = condition("a BETWEEN 1 AND 5 AND b = 2") else {
            panic!("expected AND");
        };
        assert!(matches!(and.first_expression, BooleanExpression::Ternary(_)));
    }

    #[test]
    fn test_full_text_and_graph() {
        assert!(matches!(
            condition("CONTAINS((title, body), '\"sql*\"')"),
            BooleanExpression::FullText(p) if p.columns.len() == 2
        ));
        assert!(matches!(
            condition("FREETEXT(*, 'word')"),
            BooleanExpression::FullText(p) if p.columns[0].column_type == ColumnType::Wildcard
        ));
        let BooleanExpression::GraphMatch(graph) = condition("MATCH(p1-(f)->p2<-(g)-p3)") else {
            panic!("expected MATCH");
        };
        let steps = &graph.patterns[0].steps;
        assert_eq!(steps.len(), 2);
        assert!(steps[0].arrow_on_right);
        assert!(!steps[1].arrow_on_right);
    }

    #[test]
    fn test_spans_cover_operands() {
        let sql = "a + b * c";
        let expression = scalar(sql);
        let ScalarExpression::Binary(binary) = &expression else {
            panic!("expected binary expression");
        };
        assert_eq!(binary.span.text(sql), sql);
    }
}
