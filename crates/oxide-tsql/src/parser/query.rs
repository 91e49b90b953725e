//! Queries: `SELECT`, set operators, CTEs and the clauses that hang off a
//! query expression.

use super::error::ParseError;
use super::parser::Parser;
use super::pratt::token_to_assignment;
use crate::ast::{
    BinaryQueryExpression, BinaryQueryExpressionType, BrowseForClause, CommonTableExpression,
    CompositeGroupingSpecification, CubeGroupingSpecification, CursorId,
    ExpressionGroupingSpecification, ExpressionWithSortOrder, ForClause, FromClause,
    GeneralOptimizerHint, GrandTotalGroupingSpecification, GroupByClause, GroupByOption,
    GroupingSetsGroupingSpecification, GroupingSpecification, HavingClause,
    IdentifierOrValueExpression, JsonForClause, JsonForClauseOption, JsonForClauseOptionKind,
    LiteralOptimizerHint, OffsetClause, OptimizeForOptimizerHint, OptimizerHint, OptimizerHintKind,
    OptionClause, OrderByClause, QueryExpression, QueryParenthesisExpression, QuerySpecification,
    ReadOnlyForClause, ScalarExpression, RollupGroupingSpecification, SelectAliasAssignment,
    SelectElement, SelectScalarExpression, SelectSetVariable, SelectStarExpression, SelectStatement,
    SortOrder, TableHintsOptimizerHint, TopRowFilter, UniqueRowFilter, UpdateForClause, UseHintList,
    ValueShape, VariableValuePair, WhereClause, WindowClause, WindowDefinition,
    WithCtesAndXmlNamespaces, XmlForClause, XmlForClauseOption, XmlForClauseOptionKind,
    XmlNamespaces, XmlNamespacesElement,
};
use crate::dialect::Feature;
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_> {
    /// `[WITH …] query [OPTION (…)]`
    pub(super) fn parse_select_statement(
        &mut self,
        with_ctes_and_xml_namespaces: Option<WithCtesAndXmlNamespaces>,
    ) -> Result<SelectStatement, ParseError> {
        let start = with_ctes_and_xml_namespaces
            .as_ref()
            .map_or(self.current.span, |w| w.span);
        let query_expression = self.parse_query_expression()?;
        let option_clause = self.parse_option_clause()?;
        Ok(SelectStatement {
            with_ctes_and_xml_namespaces,
            query_expression,
            option_clause,
            span: self.span_from(start),
        })
    }

    /// `WITH [XMLNAMESPACES (…),] cte [, cte]*`
    pub(super) fn parse_with_ctes_and_xml_namespaces(
        &mut self,
    ) -> Result<WithCtesAndXmlNamespaces, ParseError> {
        let start = self.expect_keyword(Keyword::With)?;
        let xml_namespaces = if self.check_word("XMLNAMESPACES") {
            Some(self.parse_xml_namespaces()?)
        } else {
            None
        };
        let mut common_table_expressions = Vec::new();
        if xml_namespaces.is_none() || self.eat(&TokenKind::Comma) {
            common_table_expressions =
                self.parse_comma_separated(Self::parse_common_table_expression)?;
        }
        Ok(WithCtesAndXmlNamespaces {
            xml_namespaces,
            common_table_expressions,
            span: self.span_from(start),
        })
    }

    fn parse_xml_namespaces(&mut self) -> Result<XmlNamespaces, ParseError> {
        let start = self.expect_word("XMLNAMESPACES")?;
        let elements = self.parse_parenthesized_list(|p| {
            let start = p.current.span;
            if p.eat_keyword(Keyword::Default) {
                let string = p.parse_string_literal()?;
                return Ok(XmlNamespacesElement {
                    is_default: true,
                    string,
                    identifier: None,
                    span: p.span_from(start),
                });
            }
            let string = p.parse_string_literal()?;
            p.expect_keyword(Keyword::As)?;
            let identifier = p.parse_identifier()?;
            Ok(XmlNamespacesElement {
                is_default: false,
                string,
                identifier: Some(identifier),
                span: p.span_from(start),
            })
        })?;
        Ok(XmlNamespaces {
            elements,
            span: self.span_from(start),
        })
    }

    fn parse_common_table_expression(&mut self) -> Result<CommonTableExpression, ParseError> {
        let expression_name = self.parse_identifier()?;
        let start = expression_name.span;
        let columns = if self.check(&TokenKind::LeftParen) {
            self.parse_identifier_list()?
        } else {
            Vec::new()
        };
        self.expect_keyword(Keyword::As)?;
        self.expect(&TokenKind::LeftParen)?;
        let query_expression = self.parse_query_expression()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(CommonTableExpression {
            expression_name,
            columns,
            query_expression,
            span: self.span_from(start),
        })
    }

    /// A full query expression: set operators, then `ORDER BY`,
    /// `OFFSET … FETCH` and `FOR`, attached to the outermost node.
    pub(super) fn parse_query_expression(&mut self) -> Result<QueryExpression, ParseError> {
        self.nested(Self::parse_query_expression_body)
    }

    fn parse_query_expression_body(&mut self) -> Result<QueryExpression, ParseError> {
        let start = self.current.span;
        let mut query = self.parse_union_level()?;

        let order_by_clause = if self.check_keyword(Keyword::Order) {
            Some(self.parse_order_by_clause()?)
        } else {
            None
        };
        let offset_clause = if order_by_clause.is_some() && self.check_word("OFFSET") {
            Some(self.parse_offset_clause()?)
        } else {
            None
        };
        let for_clause = self.parse_for_clause()?;

        if order_by_clause.is_some() || offset_clause.is_some() || for_clause.is_some() {
            let span = self.span_from(start);
            let tail = query.tail_mut();
            if order_by_clause.is_some() {
                *tail.order_by_clause = order_by_clause;
            }
            if offset_clause.is_some() {
                *tail.offset_clause = offset_clause;
            }
            if for_clause.is_some() {
                *tail.for_clause = for_clause;
            }
            *tail.span = span;
        }
        Ok(query)
    }

    /// `UNION` and `EXCEPT`, left associative.
    fn parse_union_level(&mut self) -> Result<QueryExpression, ParseError> {
        let start = self.current.span;
        let mut left = self.parse_intersect_level()?;
        loop {
            let binary_query_expression_type = if self.check_keyword(Keyword::Union) {
                BinaryQueryExpressionType::Union
            } else if self.check_keyword(Keyword::Except) {
                BinaryQueryExpressionType::Except
            } else {
                break;
            };
            self.advance();
            let all = self.eat_keyword(Keyword::All);
            let right = self.parse_intersect_level()?;
            left = QueryExpression::Binary(Box::new(BinaryQueryExpression {
                first_query_expression: left,
                binary_query_expression_type,
                all,
                second_query_expression: right,
                order_by_clause: None,
                offset_clause: None,
                for_clause: None,
                span: self.span_from(start),
            }));
        }
        Ok(left)
    }

    /// `INTERSECT` binds tighter than `UNION` and `EXCEPT`.
    fn parse_intersect_level(&mut self) -> Result<QueryExpression, ParseError> {
        let start = self.current.span;
        let mut left = self.parse_query_primary()?;
        while self.eat_keyword(Keyword::Intersect) {
            let all = self.eat_keyword(Keyword::All);
            let right = self.parse_query_primary()?;
            left = QueryExpression::Binary(Box::new(BinaryQueryExpression {
                first_query_expression: left,
                binary_query_expression_type: BinaryQueryExpressionType::Intersect,
                all,
                second_query_expression: right,
                order_by_clause: None,
                offset_clause: None,
                for_clause: None,
                span: self.span_from(start),
            }));
        }
        Ok(left)
    }

    fn parse_query_primary(&mut self) -> Result<QueryExpression, ParseError> {
        if self.check(&TokenKind::LeftParen) {
            let start = self.current.span;
            self.advance();
            let query_expression = self.parse_query_expression()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(QueryExpression::Parenthesis(Box::new(QueryParenthesisExpression {
                query_expression,
                order_by_clause: None,
                offset_clause: None,
                for_clause: None,
                span: self.span_from(start),
            })));
        }
        self.parse_query_specification()
            .map(|q| QueryExpression::Specification(Box::new(q)))
    }

    /// `SELECT … [INTO …] [FROM …] [WHERE …] [GROUP BY …] [HAVING …]
    /// [WINDOW …]`
    fn parse_query_specification(&mut self) -> Result<QuerySpecification, ParseError> {
        let start = self.expect_keyword(Keyword::Select)?;
        let unique_row_filter = if self.eat_keyword(Keyword::Distinct) {
            UniqueRowFilter::Distinct
        } else if self.eat_keyword(Keyword::All) {
            UniqueRowFilter::All
        } else {
            UniqueRowFilter::NotSpecified
        };
        let top_row_filter = if self.check_keyword(Keyword::Top) {
            Some(self.parse_top_row_filter()?)
        } else {
            None
        };
        let select_elements = self.parse_comma_separated(Self::parse_select_element)?;

        let (into, on_file_group) = if self.eat_keyword(Keyword::Into) {
            let into = self.parse_schema_object_name()?;
            let on_file_group = if self.eat_keyword(Keyword::On) {
                Some(self.parse_identifier()?)
            } else {
                None
            };
            (Some(into), on_file_group)
        } else {
            (None, None)
        };

        let from_clause = if self.check_keyword(Keyword::From) {
            Some(self.parse_from_clause()?)
        } else {
            None
        };
        let where_clause = if self.check_keyword(Keyword::Where) {
            Some(self.parse_where_clause()?)
        } else {
            None
        };
        let group_by_clause = if self.check_keyword(Keyword::Group) {
            Some(self.parse_group_by_clause()?)
        } else {
            None
        };
        let having_clause = if self.check_keyword(Keyword::Having) {
            let having = self.current.span;
            self.advance();
            let search_condition = self.parse_boolean_expression()?;
            Some(HavingClause {
                search_condition,
                span: self.span_from(having),
            })
        } else {
            None
        };
        let window_clause = if self.check_window_clause() {
            Some(self.parse_window_clause()?)
        } else {
            None
        };

        Ok(QuerySpecification {
            unique_row_filter,
            top_row_filter,
            select_elements,
            into,
            on_file_group,
            from_clause,
            where_clause,
            group_by_clause,
            having_clause,
            window_clause,
            order_by_clause: None,
            offset_clause: None,
            for_clause: None,
            span: self.span_from(start),
        })
    }

    /// `TOP (expr) | TOP n [PERCENT] [WITH TIES]`
    pub(super) fn parse_top_row_filter(&mut self) -> Result<TopRowFilter, ParseError> {
        let start = self.expect_keyword(Keyword::Top)?;
        let expression = if self.check(&TokenKind::LeftParen) {
            self.parse_scalar_expression()?
        } else {
            ScalarExpression::Literal(self.parse_literal()?)
        };
        let percent = self.eat_keyword(Keyword::Percent);
        let with_ties = if self.check_keyword(Keyword::With) && self.peek_word(1, "TIES") {
            self.advance();
            self.advance();
            true
        } else {
            false
        };
        Ok(TopRowFilter {
            expression,
            percent,
            with_ties,
            span: self.span_from(start),
        })
    }

    pub(super) fn parse_select_element(&mut self) -> Result<SelectElement, ParseError> {
        let start = self.current.span;
        if self.eat(&TokenKind::Star) {
            return Ok(SelectElement::Star(SelectStarExpression {
                qualifier: None,
                span: start,
            }));
        }
        if self.check_qualified_star() {
            let qualifier = self.parse_multi_part_identifier()?;
            self.expect(&TokenKind::Dot)?;
            self.expect(&TokenKind::Star)?;
            return Ok(SelectElement::Star(SelectStarExpression {
                qualifier: Some(qualifier),
                span: self.span_from(start),
            }));
        }
        if self.check_variable() {
            let assignment_kind = token_to_assignment(&self.peek_nth(1).kind);
            if let Some(assignment_kind) = assignment_kind {
                let variable = self.parse_variable()?;
                self.advance();
                let expression = self.parse_scalar_expression()?;
                return Ok(SelectElement::SetVariable(SelectSetVariable {
                    variable,
                    assignment_kind,
                    expression,
                    span: self.span_from(start),
                }));
            }
        }
        let named_alias = self.check_identifier() || self.check_string();
        if named_alias && self.peek_is(1, &TokenKind::Eq) {
            let column_name = self.parse_column_alias()?;
            self.advance();
            let expression = self.parse_scalar_expression()?;
            return Ok(SelectElement::AliasAssignment(SelectAliasAssignment {
                column_name,
                expression,
                span: self.span_from(start),
            }));
        }

        let expression = self.parse_scalar_expression()?;
        let column_name = if self.eat_keyword(Keyword::As) {
            Some(self.parse_column_alias()?)
        } else if self.check_alias_start() || self.check_string() {
            Some(self.parse_column_alias()?)
        } else {
            None
        };
        Ok(SelectElement::ScalarExpression(SelectScalarExpression {
            expression,
            column_name,
            span: self.span_from(start),
        }))
    }

    /// `t.*` or `s.t.*` ahead.
    fn check_qualified_star(&mut self) -> bool {
        let mut n = 0;
        while self.peek_is_identifier(n) && self.peek_is(n + 1, &TokenKind::Dot) {
            if self.peek_is(n + 2, &TokenKind::Star) {
                return true;
            }
            n += 2;
        }
        false
    }

    fn parse_column_alias(&mut self) -> Result<IdentifierOrValueExpression, ParseError> {
        if self.check_string() {
            return self.parse_string_literal().map(IdentifierOrValueExpression::Value);
        }
        self.parse_identifier().map(IdentifierOrValueExpression::Identifier)
    }

    /// Returns true if the current token can start an implicit alias.
    /// Unreserved words that begin a following clause or statement are
    /// excluded.
    pub(super) fn check_alias_start(&mut self) -> bool {
        if !self.check_identifier() {
            return false;
        }
        if self.check_window_clause() {
            return false;
        }
        !(self.check_word("THROW") && !self.peek_is(1, &TokenKind::Comma))
    }

    fn check_window_clause(&mut self) -> bool {
        self.check_word("WINDOW") && self.peek_is_identifier(1) && self.peek_keyword(2, Keyword::As)
    }

    /// `FROM table_source [, table_source]*`
    pub(super) fn parse_from_clause(&mut self) -> Result<FromClause, ParseError> {
        let start = self.expect_keyword(Keyword::From)?;
        let table_references = self.parse_comma_separated(Self::parse_table_reference)?;
        Ok(FromClause {
            table_references,
            span: self.span_from(start),
        })
    }

    /// `WHERE condition | WHERE CURRENT OF [GLOBAL] cursor`
    pub(super) fn parse_where_clause(&mut self) -> Result<WhereClause, ParseError> {
        let start = self.expect_keyword(Keyword::Where)?;
        if self.check_keyword(Keyword::Current) && self.peek_keyword(1, Keyword::Of) {
            self.advance();
            self.advance();
            let cursor = self.parse_cursor_id()?;
            return Ok(WhereClause {
                search_condition: None,
                cursor: Some(cursor),
                span: self.span_from(start),
            });
        }
        let search_condition = self.parse_boolean_expression()?;
        Ok(WhereClause {
            search_condition: Some(search_condition),
            cursor: None,
            span: self.span_from(start),
        })
    }

    /// `[GLOBAL] name | @variable`
    pub(super) fn parse_cursor_id(&mut self) -> Result<CursorId, ParseError> {
        let start = self.current.span;
        let is_global = self.check_word("GLOBAL") && !self.peek_is(1, &TokenKind::Eof)
            && (self.peek_is_identifier(1) || self.peek_is(1, &TokenKind::Variable(String::new())));
        if is_global {
            self.advance();
        }
        let name = self.parse_identifier_or_variable()?;
        Ok(CursorId {
            is_global,
            name,
            span: self.span_from(start),
        })
    }

    fn parse_group_by_clause(&mut self) -> Result<GroupByClause, ParseError> {
        let start = self.expect_keyword(Keyword::Group)?;
        self.expect_keyword(Keyword::By)?;
        let all = self.eat_keyword(Keyword::All);
        let grouping_specifications =
            self.parse_comma_separated(|p| p.parse_grouping_specification(false))?;
        let group_by_option = if self.check_keyword(Keyword::With) && self.peek_word(1, "ROLLUP") {
            self.advance();
            self.advance();
            Some(GroupByOption::Rollup)
        } else if self.check_keyword(Keyword::With) && self.peek_word(1, "CUBE") {
            self.advance();
            self.advance();
            Some(GroupByOption::Cube)
        } else {
            None
        };
        Ok(GroupByClause {
            all,
            grouping_specifications,
            group_by_option,
            span: self.span_from(start),
        })
    }

    /// One grouping item. Inside `ROLLUP`, `CUBE` and `GROUPING SETS` a
    /// parenthesized list is a composite item.
    fn parse_grouping_specification(
        &mut self,
        nested: bool,
    ) -> Result<GroupingSpecification, ParseError> {
        let start = self.current.span;
        if self.check(&TokenKind::LeftParen) && self.peek_is(1, &TokenKind::RightParen) {
            self.advance();
            self.advance();
            return Ok(GroupingSpecification::GrandTotal(GrandTotalGroupingSpecification {
                span: self.span_from(start),
            }));
        }
        if self.check_word("ROLLUP") && self.peek_is(1, &TokenKind::LeftParen) {
            self.advance();
            let arguments =
                self.parse_parenthesized_list(|p| p.parse_grouping_specification(true))?;
            return Ok(GroupingSpecification::Rollup(RollupGroupingSpecification {
                arguments,
                span: self.span_from(start),
            }));
        }
        if self.check_word("CUBE") && self.peek_is(1, &TokenKind::LeftParen) {
            self.advance();
            let arguments =
                self.parse_parenthesized_list(|p| p.parse_grouping_specification(true))?;
            return Ok(GroupingSpecification::Cube(CubeGroupingSpecification {
                arguments,
                span: self.span_from(start),
            }));
        }
        if self.check_word("GROUPING") && self.peek_word(1, "SETS") {
            self.advance();
            self.advance();
            let sets = self.parse_parenthesized_list(|p| p.parse_grouping_specification(true))?;
            return Ok(GroupingSpecification::GroupingSets(
                GroupingSetsGroupingSpecification {
                    sets,
                    span: self.span_from(start),
                },
            ));
        }
        if nested && self.check(&TokenKind::LeftParen) {
            let items = self.parse_parenthesized_list(|p| p.parse_grouping_specification(true))?;
            return Ok(GroupingSpecification::Composite(CompositeGroupingSpecification {
                items,
                span: self.span_from(start),
            }));
        }
        let expression = self.parse_scalar_expression()?;
        Ok(GroupingSpecification::Expression(ExpressionGroupingSpecification {
            expression,
            span: self.span_from(start),
        }))
    }

    fn parse_window_clause(&mut self) -> Result<WindowClause, ParseError> {
        let start = self.expect_word("WINDOW")?;
        self.require(Feature::WindowClause, start);
        let window_definitions = self.parse_comma_separated(|p| {
            let window_name = p.parse_identifier()?;
            let start = window_name.span;
            p.expect_keyword(Keyword::As)?;
            p.expect(&TokenKind::LeftParen)?;
            let spec = p.parse_window_specification()?;
            p.expect(&TokenKind::RightParen)?;
            Ok(WindowDefinition {
                window_name,
                ref_window_name: spec.window_name,
                partitions: spec.partitions,
                order_by_clause: spec.order_by_clause,
                window_frame_clause: spec.window_frame_clause,
                span: p.span_from(start),
            })
        })?;
        Ok(WindowClause {
            window_definitions,
            span: self.span_from(start),
        })
    }

    /// `ORDER BY expr [ASC | DESC], …`
    pub(super) fn parse_order_by_clause(&mut self) -> Result<OrderByClause, ParseError> {
        let start = self.expect_keyword(Keyword::Order)?;
        self.expect_keyword(Keyword::By)?;
        let order_by_elements = self.parse_comma_separated(|p| {
            let start = p.current.span;
            let expression = p.parse_scalar_expression()?;
            let sort_order = if p.eat_keyword(Keyword::Asc) {
                SortOrder::Ascending
            } else if p.eat_keyword(Keyword::Desc) {
                SortOrder::Descending
            } else {
                SortOrder::NotSpecified
            };
            Ok(ExpressionWithSortOrder {
                expression,
                sort_order,
                span: p.span_from(start),
            })
        })?;
        Ok(OrderByClause {
            order_by_elements,
            span: self.span_from(start),
        })
    }

    /// `OFFSET n ROW[S] [FETCH FIRST | NEXT n ROW[S] ONLY]`
    fn parse_offset_clause(&mut self) -> Result<OffsetClause, ParseError> {
        let start = self.expect_word("OFFSET")?;
        let offset_expression = self.parse_scalar_expression()?;
        if !self.eat_word("ROWS") {
            self.expect_word("ROW")?;
        }
        let fetch_expression = if self.eat_keyword(Keyword::Fetch) {
            if !self.eat_word("NEXT") {
                self.expect_word("FIRST")?;
            }
            let expression = self.parse_scalar_expression()?;
            if !self.eat_word("ROWS") {
                self.expect_word("ROW")?;
            }
            self.expect_word("ONLY")?;
            Some(expression)
        } else {
            None
        };
        Ok(OffsetClause {
            offset_expression,
            fetch_expression,
            span: self.span_from(start),
        })
    }

    /// `FOR BROWSE | READ ONLY | UPDATE [OF …] | XML … | JSON …`
    fn parse_for_clause(&mut self) -> Result<Option<ForClause>, ParseError> {
        if !self.check_keyword(Keyword::For) {
            return Ok(None);
        }
        let start = self.current.span;
        let clause = if self.peek_keyword(1, Keyword::Browse) {
            self.advance();
            self.advance();
            ForClause::Browse(BrowseForClause {
                span: self.span_from(start),
            })
        } else if self.peek_keyword(1, Keyword::Read) && self.peek_word(2, "ONLY") {
            self.advance();
            self.advance();
            self.advance();
            ForClause::ReadOnly(ReadOnlyForClause {
                span: self.span_from(start),
            })
        } else if self.peek_keyword(1, Keyword::Update) {
            self.advance();
            self.advance();
            let columns = if self.eat_keyword(Keyword::Of) {
                self.parse_comma_separated(Self::parse_multi_part_identifier)?
            } else {
                Vec::new()
            };
            ForClause::Update(UpdateForClause {
                columns,
                span: self.span_from(start),
            })
        } else if self.peek_word(1, "XML") {
            self.advance();
            self.advance();
            let options = self.parse_comma_separated(Self::parse_xml_for_clause_option)?;
            ForClause::Xml(XmlForClause {
                options,
                span: self.span_from(start),
            })
        } else if self.peek_word(1, "JSON") {
            self.advance();
            self.advance();
            let options = self.parse_comma_separated(Self::parse_json_for_clause_option)?;
            ForClause::Json(JsonForClause {
                options,
                span: self.span_from(start),
            })
        } else {
            return Ok(None);
        };
        Ok(Some(clause))
    }

    fn parse_xml_for_clause_option(&mut self) -> Result<XmlForClauseOption, ParseError> {
        let start = self.current.span;
        let option_kind = if self.eat_word("ELEMENTS") {
            if self.eat_word("XSINIL") {
                XmlForClauseOptionKind::ElementsXsiNil
            } else if self.eat_word("ABSENT") {
                XmlForClauseOptionKind::ElementsAbsent
            } else {
                XmlForClauseOptionKind::Elements
            }
        } else if self.eat_words(&["BINARY", "BASE64"]) {
            XmlForClauseOptionKind::BinaryBase64
        } else {
            let kind = match self.current.word().map(str::to_ascii_uppercase).as_deref() {
                Some("RAW") => XmlForClauseOptionKind::Raw,
                Some("AUTO") => XmlForClauseOptionKind::Auto,
                Some("EXPLICIT") => XmlForClauseOptionKind::Explicit,
                Some("PATH") => XmlForClauseOptionKind::Path,
                Some("XMLDATA") => XmlForClauseOptionKind::XmlData,
                Some("XMLSCHEMA") => XmlForClauseOptionKind::XmlSchema,
                Some("TYPE") => XmlForClauseOptionKind::Type,
                Some("ROOT") => XmlForClauseOptionKind::Root,
                _ => {
                    return Err(self.unexpected(&[
                        "RAW", "AUTO", "EXPLICIT", "PATH", "ELEMENTS", "XMLDATA", "XMLSCHEMA",
                        "BINARY BASE64", "TYPE", "ROOT",
                    ]));
                }
            };
            self.advance();
            kind
        };
        let value = if self.eat(&TokenKind::LeftParen) {
            let value = self.parse_string_literal()?;
            self.expect(&TokenKind::RightParen)?;
            Some(value)
        } else {
            None
        };
        Ok(XmlForClauseOption {
            option_kind,
            value,
            span: self.span_from(start),
        })
    }

    fn parse_json_for_clause_option(&mut self) -> Result<JsonForClauseOption, ParseError> {
        let start = self.current.span;
        let option_kind = match self.current.word().map(str::to_ascii_uppercase).as_deref() {
            Some("AUTO") => JsonForClauseOptionKind::Auto,
            Some("PATH") => JsonForClauseOptionKind::Path,
            Some("ROOT") => JsonForClauseOptionKind::Root,
            Some("INCLUDE_NULL_VALUES") => JsonForClauseOptionKind::IncludeNullValues,
            Some("WITHOUT_ARRAY_WRAPPER") => JsonForClauseOptionKind::WithoutArrayWrapper,
            _ => {
                return Err(self.unexpected(&[
                    "AUTO",
                    "PATH",
                    "ROOT",
                    "INCLUDE_NULL_VALUES",
                    "WITHOUT_ARRAY_WRAPPER",
                ]));
            }
        };
        self.advance();
        let is_root = option_kind == JsonForClauseOptionKind::Root;
        let value = if is_root && self.eat(&TokenKind::LeftParen) {
            let value = self.parse_string_literal()?;
            self.expect(&TokenKind::RightParen)?;
            Some(value)
        } else {
            None
        };
        Ok(JsonForClauseOption {
            option_kind,
            value,
            span: self.span_from(start),
        })
    }

    /// `OPTION ( hint, … )`, if present.
    pub(super) fn parse_option_clause(&mut self) -> Result<Option<OptionClause>, ParseError> {
        if !(self.check_keyword(Keyword::Option) && self.peek_is(1, &TokenKind::LeftParen)) {
            return Ok(None);
        }
        let start = self.current.span;
        self.advance();
        let optimizer_hints = self.parse_option_list(Self::parse_optimizer_hint)?;
        Ok(Some(OptionClause {
            optimizer_hints,
            span: self.span_from(start),
        }))
    }

    fn parse_optimizer_hint(&mut self) -> Result<OptimizerHint, ParseError> {
        let start = self.current.span;
        let (hint_kind, _) = self.parse_option_key::<OptimizerHintKind>("query hint")?;
        let hint = match hint_kind {
            OptimizerHintKind::OptimizeFor => {
                let pairs = self.parse_parenthesized_list(|p| {
                    let start = p.current.span;
                    let variable = p.parse_variable()?;
                    if p.eat_word("UNKNOWN") {
                        return Ok(VariableValuePair {
                            variable,
                            value: None,
                            is_for_unknown: true,
                            span: p.span_from(start),
                        });
                    }
                    p.expect(&TokenKind::Eq)?;
                    let value = p.parse_scalar_expression()?;
                    Ok(VariableValuePair {
                        variable,
                        value: Some(value),
                        is_for_unknown: false,
                        span: p.span_from(start),
                    })
                })?;
                OptimizerHint::OptimizeFor(OptimizeForOptimizerHint {
                    hint_kind,
                    pairs,
                    span: self.span_from(start),
                })
            }
            OptimizerHintKind::UseHint => {
                let hints = self.parse_parenthesized_list(Self::parse_string_literal)?;
                OptimizerHint::UseHint(UseHintList {
                    hint_kind,
                    hints,
                    span: self.span_from(start),
                })
            }
            OptimizerHintKind::UsePlan => {
                let value = self.parse_string_literal()?;
                OptimizerHint::UsePlan(LiteralOptimizerHint {
                    hint_kind,
                    value,
                    span: self.span_from(start),
                })
            }
            OptimizerHintKind::TableHint => {
                self.expect(&TokenKind::LeftParen)?;
                let object_name = self.parse_schema_object_name()?;
                let mut table_hints = Vec::new();
                while self.eat(&TokenKind::Comma) {
                    table_hints.push(self.parse_table_hint()?);
                }
                self.expect(&TokenKind::RightParen)?;
                OptimizerHint::TableHints(TableHintsOptimizerHint {
                    hint_kind,
                    object_name,
                    table_hints,
                    span: self.span_from(start),
                })
            }
            OptimizerHintKind::Label
            | OptimizerHintKind::MaxGrantPercent
            | OptimizerHintKind::MinGrantPercent => {
                self.expect(&TokenKind::Eq)?;
                let value = self.parse_option_literal()?;
                OptimizerHint::Literal(LiteralOptimizerHint {
                    hint_kind,
                    value,
                    span: self.span_from(start),
                })
            }
            _ if hint_kind.value_shape() == ValueShape::Integer => {
                let value = self.parse_integer_literal()?;
                OptimizerHint::Literal(LiteralOptimizerHint {
                    hint_kind,
                    value,
                    span: self.span_from(start),
                })
            }
            _ => OptimizerHint::General(GeneralOptimizerHint {
                hint_kind,
                span: self.span_from(start),
            }),
        };
        Ok(hint)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::parser::{ParseOptions, Parser};

    fn select(sql: &str) -> SelectStatement {
        let mut parser = Parser::new(sql, &ParseOptions::default());
        match parser.parse_statement().unwrap() {
            Statement::Select(s) => *s,
            other => panic!("expected SELECT, got {}", other.kind()),
        }
    }

    fn specification(query: &QueryExpression) -> &QuerySpecification {
        match query {
            QueryExpression::Specification(q) => q,
            _ => panic!("expected query specification"),
        }
    }

    #[test]
    fn test_simple_select() {
        let stmt = select("SELECT DISTINCT TOP 10 PERCENT a, b AS x, c y FROM t WHERE a > 1");
        let q = specification(&stmt.query_expression);
        assert_eq!(q.unique_row_filter, UniqueRowFilter::Distinct);
        assert!(q.top_row_filter.as_ref().unwrap().percent);
        assert_eq!(q.select_elements.len(), 3);
        assert!(q.from_clause.is_some());
        assert!(q.where_clause.is_some());
    }

    #[test]
    fn test_select_element_forms() {
        let stmt = select("SELECT *, t.*, total = a + b, @v = 1, 'label' = c, d 'alias' FROM t");
        let q = specification(&stmt.query_expression);
        assert!(matches!(&q.select_elements[0], SelectElement::Star(s) if s.qualifier.is_none()));
        assert!(matches!(&q.select_elements[1], SelectElement::Star(s) if s.qualifier.is_some()));
        assert!(matches!(&q.select_elements[2], SelectElement::AliasAssignment(_)));
        assert!(matches!(&q.select_elements[3], SelectElement::SetVariable(_)));
        assert!(matches!(
            &q.select_elements[4],
            SelectElement::AliasAssignment(a)
                if matches!(a.column_name, IdentifierOrValueExpression::Value(_))
        ));
        assert!(matches!(
            &q.select_elements[5],
            SelectElement::ScalarExpression(s) if s.column_name.is_some()
        ));
    }

    #[test]
    fn test_intersect_binds_tighter_than_union() {
        let stmt = select("SELECT 1 UNION SELECT 2 INTERSECT SELECT 3");
        let QueryExpression::Binary(union) = &stmt.query_expression else {
            panic!("expected binary query");
        };
        assert_eq!(union.binary_query_expression_type, BinaryQueryExpressionType::Union);
        assert!(matches!(
            &union.second_query_expression,
            QueryExpression::Binary(b)
                if b.binary_query_expression_type == BinaryQueryExpressionType::Intersect
        ));
    }

    #[test]
    fn test_order_by_attaches_to_outermost_query() {
        let stmt = select(
            "SELECT a FROM t UNION ALL SELECT a FROM u \
             ORDER BY a OFFSET 5 ROWS FETCH NEXT 10 ROWS ONLY",
        );
        let QueryExpression::Binary(union) = &stmt.query_expression else {
            panic!("expected binary query");
        };
        assert!(union.all);
        assert!(union.order_by_clause.is_some());
        assert!(union.offset_clause.as_ref().unwrap().fetch_expression.is_some());
        assert!(specification(&union.second_query_expression).order_by_clause.is_none());
    }

    #[test]
    fn test_ctes_and_namespaces() {
        let stmt = select(
            "WITH XMLNAMESPACES ('urn:a' AS a), c (x) AS (SELECT 1), \
             d AS (SELECT x FROM c) SELECT * FROM d",
        );
        let with = stmt.with_ctes_and_xml_namespaces.unwrap();
        assert_eq!(with.xml_namespaces.unwrap().elements.len(), 1);
        assert_eq!(with.common_table_expressions.len(), 2);
        assert_eq!(with.common_table_expressions[0].columns.len(), 1);
        assert_eq!(stmt.span.start, 0);
    }

    #[test]
    fn test_group_by_forms() {
        let stmt = select(
            "SELECT a, b FROM t GROUP BY GROUPING SETS ((a, b), a, ()) HAVING COUNT(*) > 1",
        );
        let q = specification(&stmt.query_expression);
        let group_by = q.group_by_clause.as_ref().unwrap();
        let GroupingSpecification::GroupingSets(sets) = &group_by.grouping_specifications[0] else {
            panic!("expected grouping sets");
        };
        assert!(matches!(sets.sets[0], GroupingSpecification::Composite(_)));
        assert!(matches!(sets.sets[1], GroupingSpecification::Expression(_)));
        assert!(matches!(sets.sets[2], GroupingSpecification::GrandTotal(_)));
        assert!(q.having_clause.is_some());

        let stmt = select("SELECT a FROM t GROUP BY a WITH ROLLUP");
        let q = specification(&stmt.query_expression);
        assert_eq!(
            q.group_by_clause.as_ref().unwrap().group_by_option,
            Some(GroupByOption::Rollup)
        );
    }

    #[test]
    fn test_window_clause() {
        let stmt = select("SELECT SUM(x) OVER w FROM t WINDOW w AS (PARTITION BY a ORDER BY b)");
        let q = specification(&stmt.query_expression);
        let window = q.window_clause.as_ref().unwrap();
        assert_eq!(window.window_definitions[0].window_name.value, "w");
        assert_eq!(window.window_definitions[0].partitions.len(), 1);
    }

    #[test]
    fn test_for_clauses() {
        let stmt = select("SELECT a FROM t FOR XML PATH('row'), ROOT('rows'), ELEMENTS XSINIL");
        let q = specification(&stmt.query_expression);
        let Some(ForClause::Xml(xml)) = &q.for_clause else {
            panic!("expected FOR XML");
        };
        assert_eq!(xml.options.len(), 3);
        assert_eq!(xml.options[2].option_kind, XmlForClauseOptionKind::ElementsXsiNil);

        let stmt = select("SELECT a FROM t FOR JSON AUTO, WITHOUT_ARRAY_WRAPPER");
        let q = specification(&stmt.query_expression);
        assert!(matches!(&q.for_clause, Some(ForClause::Json(j)) if j.options.len() == 2));
    }

    #[test]
    fn test_option_clause() {
        let stmt = select(
            "SELECT a FROM t OPTION (MAXDOP 4, RECOMPILE, \
             OPTIMIZE FOR (@p = 1, @q UNKNOWN), USE HINT ('DISABLE_OPTIMIZED_NESTED_LOOP'))",
        );
        let hints = stmt.option_clause.unwrap().optimizer_hints;
        assert_eq!(hints.len(), 4);
        assert_eq!(hints[0].hint_kind(), OptimizerHintKind::MaxDop);
        assert!(matches!(&hints[0], OptimizerHint::Literal(h) if h.value.value == "4"));
        assert!(matches!(&hints[1], OptimizerHint::General(_)));
        assert!(matches!(&hints[2], OptimizerHint::OptimizeFor(h) if h.pairs[1].is_for_unknown));
        assert!(matches!(&hints[3], OptimizerHint::UseHint(h) if h.hints.len() == 1));
    }

    #[test]
    fn test_select_into_and_parenthesized_query() {
        let stmt = select("SELECT a INTO #tmp FROM t");
        let q = specification(&stmt.query_expression);
        assert_eq!(q.into.as_ref().unwrap().base_identifier.value, "#tmp");

        let stmt = select("(SELECT a FROM t) ORDER BY a");
        let QueryExpression::Parenthesis(p) = &stmt.query_expression else {
            panic!("expected parenthesized query");
        };
        assert!(p.order_by_clause.is_some());
    }
}
