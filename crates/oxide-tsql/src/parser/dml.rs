//! `INSERT`, `UPDATE`, `DELETE`, `MERGE` and the bulk maintenance
//! statements that modify table data.

use super::error::ParseError;
use super::parser::Parser;
use super::pratt::token_to_assignment;
use crate::ast::{
    AssignmentKind, AssignmentSetClause, BulkInsertStatement, DataModificationSpecification,
    DeleteMergeAction, DeleteSpecification, DeleteStatement, ExecuteInsertSource,
    FunctionCallSetClause, GeneralStatisticsOption, IdentifierOrValueExpression,
    InsertMergeAction, InsertOption, InsertSource, InsertSpecification, InsertStatement,
    LiteralRange, MergeAction, MergeActionClause, MergeCondition, MergeSpecification,
    MergeStatement, NamedTableReference, OutputClause, OutputIntoClause, SampleStatisticsOption,
    SampleUnit, ScalarExpression, SelectInsertSource, SetClause, StatisticsOption,
    StatisticsOptionKind, TableReference, TopRowFilter, TruncateTableStatement,
    UpdateMergeAction, UpdateSpecification, UpdateStatement, UpdateStatisticsStatement,
    ValuesInsertSource, VariableTableReference, WithCtesAndXmlNamespaces,
};
use crate::lexer::{Keyword, Span, TokenKind};

/// The two `OUTPUT` clauses a modification may carry.
#[derive(Default)]
struct OutputClauses {
    output_into_clause: Option<OutputIntoClause>,
    output_clause: Option<OutputClause>,
}

impl Parser<'_> {
    pub(super) fn parse_insert_statement(
        &mut self,
        with_ctes_and_xml_namespaces: Option<WithCtesAndXmlNamespaces>,
    ) -> Result<InsertStatement, ParseError> {
        let start = statement_start(with_ctes_and_xml_namespaces.as_ref(), self.current.span);
        let insert_specification = self.parse_insert_specification()?;
        let option_clause = self.parse_option_clause()?;
        Ok(InsertStatement {
            with_ctes_and_xml_namespaces,
            insert_specification,
            option_clause,
            span: self.span_from(start),
        })
    }

    pub(super) fn parse_update_statement(
        &mut self,
        with_ctes_and_xml_namespaces: Option<WithCtesAndXmlNamespaces>,
    ) -> Result<UpdateStatement, ParseError> {
        let start = statement_start(with_ctes_and_xml_namespaces.as_ref(), self.current.span);
        let update_specification = self.parse_update_specification()?;
        let option_clause = self.parse_option_clause()?;
        Ok(UpdateStatement {
            with_ctes_and_xml_namespaces,
            update_specification,
            option_clause,
            span: self.span_from(start),
        })
    }

    pub(super) fn parse_delete_statement(
        &mut self,
        with_ctes_and_xml_namespaces: Option<WithCtesAndXmlNamespaces>,
    ) -> Result<DeleteStatement, ParseError> {
        let start = statement_start(with_ctes_and_xml_namespaces.as_ref(), self.current.span);
        let delete_specification = self.parse_delete_specification()?;
        let option_clause = self.parse_option_clause()?;
        Ok(DeleteStatement {
            with_ctes_and_xml_namespaces,
            delete_specification,
            option_clause,
            span: self.span_from(start),
        })
    }

    pub(super) fn parse_merge_statement(
        &mut self,
        with_ctes_and_xml_namespaces: Option<WithCtesAndXmlNamespaces>,
    ) -> Result<MergeStatement, ParseError> {
        let start = statement_start(with_ctes_and_xml_namespaces.as_ref(), self.current.span);
        let merge_specification = self.parse_merge_specification()?;
        let option_clause = self.parse_option_clause()?;
        Ok(MergeStatement {
            with_ctes_and_xml_namespaces,
            merge_specification,
            option_clause,
            span: self.span_from(start),
        })
    }

    /// A modification used as a table source.
    pub(super) fn parse_data_modification_specification(
        &mut self,
    ) -> Result<DataModificationSpecification, ParseError> {
        match self.current.as_keyword() {
            Some(Keyword::Insert) => self
                .parse_insert_specification()
                .map(|s| DataModificationSpecification::Insert(Box::new(s))),
            Some(Keyword::Update) => self
                .parse_update_specification()
                .map(|s| DataModificationSpecification::Update(Box::new(s))),
            Some(Keyword::Delete) => self
                .parse_delete_specification()
                .map(|s| DataModificationSpecification::Delete(Box::new(s))),
            Some(Keyword::Merge) => self
                .parse_merge_specification()
                .map(|s| DataModificationSpecification::Merge(Box::new(s))),
            _ => Err(self.unexpected(&["INSERT", "UPDATE", "DELETE", "MERGE"])),
        }
    }

    /// `INSERT [TOP (n)] [INTO] target [(cols)] [OUTPUT …] source`
    fn parse_insert_specification(&mut self) -> Result<InsertSpecification, ParseError> {
        let start = self.expect_keyword(Keyword::Insert)?;
        let top_row_filter = self.parse_dml_top()?;
        let insert_option = if self.eat_keyword(Keyword::Into) {
            InsertOption::Into
        } else if self.eat_keyword(Keyword::Over) {
            InsertOption::Over
        } else {
            InsertOption::None
        };
        let target = self.parse_dml_target(false)?;
        let columns = if self.check(&TokenKind::LeftParen) && !self.looks_like_query() {
            self.parse_parenthesized_list(Self::parse_column_reference)?
        } else {
            Vec::new()
        };
        let outputs = self.parse_output_clauses()?;
        let insert_source = self.parse_insert_source()?;
        Ok(InsertSpecification {
            top_row_filter,
            insert_option,
            target,
            columns,
            output_into_clause: outputs.output_into_clause,
            output_clause: outputs.output_clause,
            insert_source,
            span: self.span_from(start),
        })
    }

    fn parse_insert_source(&mut self) -> Result<InsertSource, ParseError> {
        let start = self.current.span;
        if self.check_keyword(Keyword::Default) && self.peek_keyword(1, Keyword::Values) {
            self.advance();
            self.advance();
            return Ok(InsertSource::Values(ValuesInsertSource {
                is_default_values: true,
                row_values: Vec::new(),
                span: self.span_from(start),
            }));
        }
        if self.eat_keyword(Keyword::Values) {
            let row_values = self.parse_comma_separated(Self::parse_row_value)?;
            return Ok(InsertSource::Values(ValuesInsertSource {
                is_default_values: false,
                row_values,
                span: self.span_from(start),
            }));
        }
        if self.check_keyword(Keyword::Exec) || self.check_keyword(Keyword::Execute) {
            let execute = self.parse_execute_specification()?;
            return Ok(InsertSource::Execute(Box::new(ExecuteInsertSource {
                execute,
                span: self.span_from(start),
            })));
        }
        let select = self.parse_query_expression()?;
        Ok(InsertSource::Select(SelectInsertSource {
            select,
            span: self.span_from(start),
        }))
    }

    /// `UPDATE [TOP (n)] target SET … [OUTPUT …] [FROM …] [WHERE …]`
    fn parse_update_specification(&mut self) -> Result<UpdateSpecification, ParseError> {
        let start = self.expect_keyword(Keyword::Update)?;
        let top_row_filter = self.parse_dml_top()?;
        let target = self.parse_dml_target(false)?;
        self.expect_keyword(Keyword::Set)?;
        let set_clauses = self.parse_comma_separated(Self::parse_set_clause)?;
        let outputs = self.parse_output_clauses()?;
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
        Ok(UpdateSpecification {
            top_row_filter,
            target,
            set_clauses,
            output_into_clause: outputs.output_into_clause,
            output_clause: outputs.output_clause,
            from_clause,
            where_clause,
            span: self.span_from(start),
        })
    }

    /// `DELETE [TOP (n)] [FROM] target [OUTPUT …] [FROM …] [WHERE …]`
    fn parse_delete_specification(&mut self) -> Result<DeleteSpecification, ParseError> {
        let start = self.expect_keyword(Keyword::Delete)?;
        let top_row_filter = self.parse_dml_top()?;
        self.eat_keyword(Keyword::From);
        let target = self.parse_dml_target(false)?;
        let outputs = self.parse_output_clauses()?;
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
        Ok(DeleteSpecification {
            top_row_filter,
            target,
            output_into_clause: outputs.output_into_clause,
            output_clause: outputs.output_clause,
            from_clause,
            where_clause,
            span: self.span_from(start),
        })
    }

    /// `MERGE [TOP (n)] [INTO] target [[AS] alias] USING source ON cond
    /// WHEN … [OUTPUT …]`
    fn parse_merge_specification(&mut self) -> Result<MergeSpecification, ParseError> {
        let start = self.expect_keyword(Keyword::Merge)?;
        let top_row_filter = self.parse_dml_top()?;
        self.eat_keyword(Keyword::Into);
        let target = self.parse_dml_target(true)?;
        self.expect_word("USING")?;
        let table_reference = self.parse_table_reference()?;
        self.expect_keyword(Keyword::On)?;
        let search_condition = self.parse_boolean_expression()?;
        let mut action_clauses = Vec::new();
        while self.check_keyword(Keyword::When) {
            action_clauses.push(self.parse_merge_action_clause()?);
        }
        if action_clauses.is_empty() {
            return Err(self.unexpected(&["WHEN"]));
        }
        let outputs = self.parse_output_clauses()?;
        Ok(MergeSpecification {
            top_row_filter,
            target,
            table_reference,
            search_condition,
            action_clauses,
            output_into_clause: outputs.output_into_clause,
            output_clause: outputs.output_clause,
            span: self.span_from(start),
        })
    }

    /// `WHEN [NOT] MATCHED [BY TARGET | BY SOURCE] [AND cond] THEN action`
    fn parse_merge_action_clause(&mut self) -> Result<MergeActionClause, ParseError> {
        let start = self.expect_keyword(Keyword::When)?;
        let condition = if self.eat_keyword(Keyword::Not) {
            self.expect_word("MATCHED")?;
            if self.eat_keyword(Keyword::By) {
                if self.eat_word("SOURCE") {
                    MergeCondition::NotMatchedBySource
                } else {
                    self.expect_word("TARGET")?;
                    MergeCondition::NotMatched
                }
            } else {
                MergeCondition::NotMatched
            }
        } else {
            self.expect_word("MATCHED")?;
            MergeCondition::Matched
        };
        let search_condition = if self.eat_keyword(Keyword::And) {
            Some(self.parse_boolean_expression()?)
        } else {
            None
        };
        self.expect_keyword(Keyword::Then)?;

        let action_start = self.current.span;
        let action = if self.eat_keyword(Keyword::Update) {
            self.expect_keyword(Keyword::Set)?;
            let set_clauses = self.parse_comma_separated(Self::parse_set_clause)?;
            MergeAction::Update(UpdateMergeAction {
                set_clauses,
                span: self.span_from(action_start),
            })
        } else if self.eat_keyword(Keyword::Delete) {
            MergeAction::Delete(DeleteMergeAction {
                span: self.span_from(action_start),
            })
        } else {
            self.expect_keyword(Keyword::Insert)?;
            let columns = if self.check(&TokenKind::LeftParen) {
                self.parse_parenthesized_list(Self::parse_column_reference)?
            } else {
                Vec::new()
            };
            let source_start = self.current.span;
            let source = if self.check_keyword(Keyword::Default) {
                self.advance();
                self.expect_keyword(Keyword::Values)?;
                ValuesInsertSource {
                    is_default_values: true,
                    row_values: Vec::new(),
                    span: self.span_from(source_start),
                }
            } else {
                self.expect_keyword(Keyword::Values)?;
                let row = self.parse_row_value()?;
                ValuesInsertSource {
                    is_default_values: false,
                    row_values: vec![row],
                    span: self.span_from(source_start),
                }
            };
            MergeAction::Insert(InsertMergeAction {
                columns,
                source,
                span: self.span_from(action_start),
            })
        };
        Ok(MergeActionClause {
            condition,
            search_condition,
            action,
            span: self.span_from(start),
        })
    }

    /// `TOP (n) [PERCENT]` of a modification statement.
    fn parse_dml_top(&mut self) -> Result<Option<TopRowFilter>, ParseError> {
        if self.check_keyword(Keyword::Top) {
            return self.parse_top_row_filter().map(Some);
        }
        Ok(None)
    }

    /// The object a modification writes to: a table variable, a rowset
    /// function, or a named object with optional hints.
    fn parse_dml_target(&mut self, allow_alias: bool) -> Result<TableReference, ParseError> {
        let start = self.current.span;
        if self.check_variable() {
            let variable = self.parse_variable()?;
            let alias = if allow_alias {
                self.parse_table_alias()?
            } else {
                None
            };
            return Ok(TableReference::Variable(VariableTableReference {
                variable,
                alias,
                span: self.span_from(start),
            }));
        }
        if self.check_keyword(Keyword::OpenQuery)
            || self.check_keyword(Keyword::OpenRowset)
            || self.check_keyword(Keyword::OpenDataSource)
        {
            return self.parse_table_reference();
        }
        let schema_object = self.parse_schema_object_name()?;
        let alias = if allow_alias {
            self.parse_table_alias()?
        } else {
            None
        };
        let table_hints = self.parse_with_option_list(Self::parse_table_hint)?;
        Ok(TableReference::Named(NamedTableReference {
            schema_object,
            for_path: false,
            temporal_clause: None,
            alias,
            table_sample_clause: None,
            table_hints,
            span: self.span_from(start),
        }))
    }

    /// `col = expr`, `@v = expr`, `@v = col = expr`, `col += expr` or a
    /// mutator call such as `col.WRITE(…)`.
    fn parse_set_clause(&mut self) -> Result<SetClause, ParseError> {
        let start = self.current.span;
        if self.check_variable() {
            let variable = self.parse_variable()?;
            let assignment_kind = self.parse_assignment_operator()?;
            let column = if self.peek_assignment_after_column() {
                let column = self.parse_column_reference()?;
                self.expect(&TokenKind::Eq)?;
                Some(column)
            } else {
                None
            };
            let new_value = self.parse_scalar_expression()?;
            return Ok(SetClause::Assignment(AssignmentSetClause {
                variable: Some(variable),
                column,
                assignment_kind,
                new_value,
                span: self.span_from(start),
            }));
        }
        if self.peek_assignment_after_column() {
            let column = self.parse_column_reference()?;
            let assignment_kind = self.parse_assignment_operator()?;
            let new_value = self.parse_scalar_expression()?;
            return Ok(SetClause::Assignment(AssignmentSetClause {
                variable: None,
                column: Some(column),
                assignment_kind,
                new_value,
                span: self.span_from(start),
            }));
        }
        match self.parse_scalar_expression()? {
            ScalarExpression::FunctionCall(call) if call.call_target.is_some() => {
                Ok(SetClause::FunctionCall(FunctionCallSetClause {
                    mutator_function: *call,
                    span: self.span_from(start),
                }))
            }
            _ => Err(ParseError::unexpected(&["assignment"], &self.previous)),
        }
    }

    /// Returns true if a dotted name followed by an assignment operator is
    /// ahead.
    fn peek_assignment_after_column(&mut self) -> bool {
        let mut n = 0;
        if !self.peek_is_identifier(0) {
            return false;
        }
        while self.peek_is(n + 1, &TokenKind::Dot) {
            n += 2;
            if !self.peek_is_identifier(n) {
                return false;
            }
        }
        token_to_assignment(&self.peek_nth(n + 1).kind).is_some()
    }

    fn parse_assignment_operator(&mut self) -> Result<AssignmentKind, ParseError> {
        match token_to_assignment(&self.current.kind) {
            Some(kind) => {
                self.advance();
                Ok(kind)
            }
            None => Err(self.unexpected(&["="])),
        }
    }

    /// `[OUTPUT … INTO target [(cols)]] [OUTPUT …]`
    fn parse_output_clauses(&mut self) -> Result<OutputClauses, ParseError> {
        let mut outputs = OutputClauses::default();
        while self.check_word("OUTPUT") {
            let start = self.current.span;
            self.advance();
            let select_columns = self.parse_comma_separated(Self::parse_select_element)?;
            if self.eat_keyword(Keyword::Into) {
                let into_table = self.parse_dml_target(false)?;
                let into_table_columns = if self.check(&TokenKind::LeftParen) {
                    self.parse_parenthesized_list(Self::parse_column_reference)?
                } else {
                    Vec::new()
                };
                outputs.output_into_clause = Some(OutputIntoClause {
                    select_columns,
                    into_table,
                    into_table_columns,
                    span: self.span_from(start),
                });
            } else {
                outputs.output_clause = Some(OutputClause {
                    select_columns,
                    span: self.span_from(start),
                });
                break;
            }
        }
        Ok(outputs)
    }

    /// `TRUNCATE TABLE name [WITH (PARTITIONS (n | n TO m, …))]`
    pub(super) fn parse_truncate_table_statement(
        &mut self,
    ) -> Result<TruncateTableStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Truncate)?;
        self.expect_keyword(Keyword::Table)?;
        let table_name = self.parse_schema_object_name()?;
        let mut partition_ranges = Vec::new();
        if self.check_keyword(Keyword::With) && self.peek_is(1, &TokenKind::LeftParen) {
            self.advance();
            self.expect(&TokenKind::LeftParen)?;
            self.expect_word("PARTITIONS")?;
            partition_ranges = self.parse_parenthesized_list(Self::parse_literal_range)?;
            self.expect(&TokenKind::RightParen)?;
        }
        Ok(TruncateTableStatement {
            table_name,
            partition_ranges,
            span: self.span_from(start),
        })
    }

    /// `n` or `n TO m`.
    pub(super) fn parse_literal_range(&mut self) -> Result<LiteralRange, ParseError> {
        let start = self.current.span;
        let from = self.parse_integer_literal()?;
        let to = if self.eat_keyword(Keyword::To) {
            Some(self.parse_integer_literal()?)
        } else {
            None
        };
        Ok(LiteralRange {
            from,
            to,
            span: self.span_from(start),
        })
    }

    /// `BULK INSERT table FROM 'file' [WITH (option, …)]`
    pub(super) fn parse_bulk_insert_statement(
        &mut self,
    ) -> Result<BulkInsertStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Bulk)?;
        self.expect_keyword(Keyword::Insert)?;
        let to = self.parse_schema_object_name()?;
        self.expect_keyword(Keyword::From)?;
        let from = if self.check_string() {
            IdentifierOrValueExpression::Value(self.parse_string_literal()?)
        } else {
            IdentifierOrValueExpression::Identifier(self.parse_identifier()?)
        };
        let options = self.parse_with_option_list(Self::parse_bulk_insert_option)?;
        Ok(BulkInsertStatement {
            to,
            from,
            options,
            span: self.span_from(start),
        })
    }

    /// `UPDATE STATISTICS table [stat | (stat, …)] [WITH option, …]`
    pub(super) fn parse_update_statistics_statement(
        &mut self,
    ) -> Result<UpdateStatisticsStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Update)?;
        self.expect_keyword(Keyword::Statistics)?;
        let schema_object_name = self.parse_schema_object_name()?;
        let sub_elements = if self.check(&TokenKind::LeftParen) {
            self.parse_identifier_list()?
        } else if self.check_identifier() {
            vec![self.parse_identifier()?]
        } else {
            Vec::new()
        };
        let statistics_options = self.parse_with_bare_option_list(Self::parse_statistics_option)?;
        Ok(UpdateStatisticsStatement {
            schema_object_name,
            sub_elements,
            statistics_options,
            span: self.span_from(start),
        })
    }

    /// One statistics option, shared with `CREATE STATISTICS`.
    pub(super) fn parse_statistics_option(&mut self) -> Result<StatisticsOption, ParseError> {
        let start = self.current.span;
        let (option_kind, _) = self.parse_option_key::<StatisticsOptionKind>("statistics")?;
        if option_kind == StatisticsOptionKind::Sample {
            let sample = self.parse_signed_literal()?;
            let unit = if self.eat_keyword(Keyword::Percent) {
                SampleUnit::Percent
            } else {
                self.expect_word("ROWS")?;
                SampleUnit::Rows
            };
            return Ok(StatisticsOption::Sample(SampleStatisticsOption {
                option_kind,
                sample,
                unit,
                span: self.span_from(start),
            }));
        }
        let value = self.parse_option_value(option_kind.as_str(), option_kind.value_shape())?;
        Ok(StatisticsOption::General(GeneralStatisticsOption {
            option_kind,
            value,
            span: self.span_from(start),
        }))
    }
}

fn statement_start(with: Option<&WithCtesAndXmlNamespaces>, current: Span) -> Span {
    with.map_or(current, |w| w.span)
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
    fn test_insert_values() {
        let Statement::Insert(stmt) = statement("INSERT INTO dbo.t (a, b) VALUES (1, 2), (3, 4)")
        else {
            panic!("expected INSERT");
        };
        let spec = &stmt.insert_specification;
        assert_eq!(spec.insert_option, InsertOption::Into);
        assert_eq!(spec.columns.len(), 2);
        assert!(matches!(
            &spec.insert_source,
            InsertSource::Values(v) if v.row_values.len() == 2
        ));
    }

    #[test]
    fn test_insert_sources() {
        let Statement::Insert(stmt) = statement("INSERT t DEFAULT VALUES") else {
            panic!("expected INSERT");
        };
        assert!(matches!(
            &stmt.insert_specification.insert_source,
            InsertSource::Values(v) if v.is_default_values
        ));

        let Statement::Insert(stmt) = statement("INSERT INTO t SELECT * FROM u") else {
            panic!("expected INSERT");
        };
        assert!(matches!(stmt.insert_specification.insert_source, InsertSource::Select(_)));

        let Statement::Insert(stmt) = statement("INSERT INTO t EXEC dbo.usp_load @day = 1") else {
            panic!("expected INSERT");
        };
        assert!(matches!(stmt.insert_specification.insert_source, InsertSource::Execute(_)));
    }

    #[test]
    fn test_output_into() {
        let Statement::Delete(stmt) =
            statement("DELETE FROM t OUTPUT deleted.id INTO @log (id) WHERE x = 1")
        else {
            panic!("expected DELETE");
        };
        let spec = &stmt.delete_specification;
        let output = spec.output_into_clause.as_ref().unwrap();
        assert!(matches!(output.into_table, TableReference::Variable(_)));
        assert_eq!(output.into_table_columns.len(), 1);
        assert!(spec.where_clause.is_some());
    }

    #[test]
    fn test_update_set_clauses() {
        let Statement::Update(stmt) = statement(
            "UPDATE TOP (10) t SET a = 1, @v = b = b + 1, c += 2, d.WRITE(N'x', 0, 1) \
             FROM t JOIN u ON t.id = u.id WHERE u.flag = 1",
        ) else {
            panic!("expected UPDATE");
        };
        let spec = &stmt.update_specification;
        assert!(spec.top_row_filter.is_some());
        assert_eq!(spec.set_clauses.len(), 4);
        let SetClause::Assignment(second) = &spec.set_clauses[1] else {
            panic!("expected assignment");
        };
        assert!(second.variable.is_some() && second.column.is_some());
        assert!(matches!(
            &spec.set_clauses[2],
            SetClause::Assignment(a) if a.assignment_kind == AssignmentKind::AddEquals
        ));
        assert!(matches!(&spec.set_clauses[3], SetClause::FunctionCall(_)));
        assert!(spec.from_clause.is_some());
    }

    #[test]
    fn test_merge() {
        let Statement::Merge(stmt) = statement(
            "MERGE INTO dbo.target AS t USING src AS s ON t.id = s.id \
             WHEN MATCHED AND s.deleted = 1 THEN DELETE \
             WHEN MATCHED THEN UPDATE SET t.v = s.v \
             WHEN NOT MATCHED BY TARGET THEN INSERT (id, v) VALUES (s.id, s.v) \
             WHEN NOT MATCHED BY SOURCE THEN DELETE \
             OUTPUT $action, inserted.id;",
        ) else {
            panic!("expected MERGE");
        };
        let spec = &stmt.merge_specification;
        assert_eq!(spec.action_clauses.len(), 4);
        assert!(spec.action_clauses[0].search_condition.is_some());
        assert_eq!(spec.action_clauses[2].condition, MergeCondition::NotMatched);
        assert_eq!(
            spec.action_clauses[3].condition,
            MergeCondition::NotMatchedBySource
        );
        assert!(spec.output_clause.is_some());
        assert_eq!(spec.target.alias().unwrap().value, "t");
    }

    #[test]
    fn test_merge_target_without_alias() {
        let Statement::Merge(stmt) =
            statement("MERGE t USING s ON t.id = s.id WHEN MATCHED THEN DELETE;")
        else {
            panic!("expected MERGE");
        };
        let spec = &stmt.merge_specification;
        assert!(spec.target.alias().is_none());
        assert!(matches!(&spec.table_reference, TableReference::Named(n) if n.alias.is_none()));

        let Statement::Merge(stmt) = statement(
            "MERGE INTO dbo.t WITH (HOLDLOCK) USING s ON t.a = s.a \
             WHEN NOT MATCHED THEN INSERT (a) VALUES (1);",
        ) else {
            panic!("expected MERGE");
        };
        assert!(stmt.merge_specification.target.alias().is_none());
    }

    #[test]
    fn test_truncate_with_partitions() {
        let Statement::TruncateTable(stmt) =
            statement("TRUNCATE TABLE dbo.t WITH (PARTITIONS (1, 3 TO 5))")
        else {
            panic!("expected TRUNCATE");
        };
        assert_eq!(stmt.partition_ranges.len(), 2);
        assert_eq!(stmt.partition_ranges[1].to.as_ref().unwrap().value, "5");
    }

    #[test]
    fn test_bulk_insert() {
        let Statement::BulkInsert(stmt) = statement(
            "BULK INSERT dbo.t FROM 'c:\\data.csv' \
             WITH (FIELDTERMINATOR = ',', FIRSTROW = 2, TABLOCK)",
        ) else {
            panic!("expected BULK INSERT");
        };
        assert_eq!(stmt.options.len(), 3);
        assert_eq!(stmt.options[2].option_kind(), BulkInsertOptionKind::TabLock);
    }

    #[test]
    fn test_update_statistics() {
        let Statement::UpdateStatistics(stmt) =
            statement("UPDATE STATISTICS dbo.t (s1, s2) WITH SAMPLE 50 PERCENT, NORECOMPUTE")
        else {
            panic!("expected UPDATE STATISTICS");
        };
        assert_eq!(stmt.sub_elements.len(), 2);
        assert!(matches!(
            &stmt.statistics_options[0],
            StatisticsOption::Sample(s) if s.unit == SampleUnit::Percent
        ));
    }

    #[test]
    fn test_cte_before_delete() {
        let Statement::Delete(stmt) =
            statement("WITH d AS (SELECT id FROM t) DELETE FROM d")
        else {
            panic!("expected DELETE");
        };
        assert!(stmt.with_ctes_and_xml_namespaces.is_some());
        assert_eq!(stmt.span.start, 0);
    }
}
