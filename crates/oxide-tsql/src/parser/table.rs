//! Table sources of a `FROM` clause and table hints.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{
    AdHocDataSource, AdHocTableReference, BuiltInFunctionTableReference, BulkInsertOption,
    BulkInsertOptionKind, BulkOpenRowset, ChangeTableChangesTableReference,
    ChangeTableVersionTableReference, ColumnReferenceExpression, ColumnType,
    DataModificationTableReference, ForceSeekTableHint, FullTextFunctionType,
    FullTextTableReference, GeneralTableHint, GlobalFunctionTableReference, Identifier,
    IdentifierOrValueExpression, IndexTableHint, InlineDerivedTable, JoinHint,
    JoinParenthesisTableReference, LiteralTableHint, NamedTableReference,
    OdbcQualifiedJoinTableReference, OpenJsonTableReference, OpenQueryTableReference,
    OpenRowsetColumnDefinition, OpenRowsetCosmos, OpenRowsetTableReference, OpenXmlTableReference,
    OrderBulkInsertOption, PivotedTableReference, PredictTableReference, QualifiedJoin,
    QualifiedJoinType, QueryDerivedTable, RowValue, SchemaDeclarationItem,
    SchemaDeclarationItemOpenjson, SchemaObjectFunctionTableReference, SemanticFunctionType,
    SemanticTableReference, TableHint, TableHintKind, TableReference, TableSampleClause,
    TableSampleClauseOption, TemporalClause, TemporalClauseType, UnpivotedTableReference,
    UnqualifiedJoin, UnqualifiedJoinType, VariableMethodCallTableReference, VariableTableReference,
};
use crate::dialect::Feature;
use crate::lexer::{Keyword, Span, TokenKind};

/// Unqualified table-valued functions built into the engine.
const BUILTIN_TABLE_FUNCTIONS: &[&str] = &["STRING_SPLIT", "GENERATE_SERIES"];

impl Parser<'_> {
    /// Parses a table source with any joins, `APPLY`, `PIVOT` and
    /// `UNPIVOT` that follow it.
    pub(super) fn parse_table_reference(&mut self) -> Result<TableReference, ParseError> {
        self.nested(Self::parse_table_reference_body)
    }

    fn parse_table_reference_body(&mut self) -> Result<TableReference, ParseError> {
        let start = self.current.span;
        let mut left = self.parse_table_primary()?;
        loop {
            if self.check_pivot() {
                left = self.parse_pivot_suffix(left, start)?;
                continue;
            }
            if let Some((unqualified_join_type, words)) = self.peek_unqualified_join() {
                for _ in 0..words {
                    self.advance();
                }
                let second_table_reference = self.parse_table_primary()?;
                left = TableReference::UnqualifiedJoin(Box::new(UnqualifiedJoin {
                    first_table_reference: left,
                    unqualified_join_type,
                    second_table_reference,
                    span: self.span_from(start),
                }));
                continue;
            }
            let Some((qualified_join_type, join_hint)) = self.parse_qualified_join_type()? else {
                break;
            };
            let second_table_reference = self.parse_join_operand()?;
            self.expect_keyword(Keyword::On)?;
            let search_condition = self.parse_boolean_expression()?;
            left = TableReference::QualifiedJoin(Box::new(QualifiedJoin {
                first_table_reference: left,
                qualified_join_type,
                join_hint,
                second_table_reference,
                search_condition,
                span: self.span_from(start),
            }));
        }
        Ok(left)
    }

    /// The right side of a qualified join. A nested join written without
    /// parentheses (`a JOIN b JOIN c ON … ON …`) binds to the right.
    fn parse_join_operand(&mut self) -> Result<TableReference, ParseError> {
        let start = self.current.span;
        let mut operand = self.parse_table_primary()?;
        while self.check_pivot() {
            operand = self.parse_pivot_suffix(operand, start)?;
        }
        if self.check_keyword(Keyword::On) {
            return Ok(operand);
        }
        if let Some((qualified_join_type, join_hint)) = self.parse_qualified_join_type()? {
            let second_table_reference = self.parse_join_operand()?;
            self.expect_keyword(Keyword::On)?;
            let search_condition = self.parse_boolean_expression()?;
            operand = TableReference::QualifiedJoin(Box::new(QualifiedJoin {
                first_table_reference: operand,
                qualified_join_type,
                join_hint,
                second_table_reference,
                search_condition,
                span: self.span_from(start),
            }));
        }
        Ok(operand)
    }

    fn peek_unqualified_join(&mut self) -> Option<(UnqualifiedJoinType, usize)> {
        if self.check_keyword(Keyword::Cross) {
            if self.peek_keyword(1, Keyword::Join) {
                return Some((UnqualifiedJoinType::CrossJoin, 2));
            }
            if self.peek_word(1, "APPLY") {
                return Some((UnqualifiedJoinType::CrossApply, 2));
            }
        }
        if self.check_keyword(Keyword::Outer) && self.peek_word(1, "APPLY") {
            return Some((UnqualifiedJoinType::OuterApply, 2));
        }
        None
    }

    /// `[INNER | {LEFT | RIGHT | FULL} [OUTER]] [hint] JOIN`
    fn parse_qualified_join_type(
        &mut self,
    ) -> Result<Option<(QualifiedJoinType, JoinHint)>, ParseError> {
        let join_type = match self.current.as_keyword() {
            Some(Keyword::Join) => QualifiedJoinType::Inner,
            Some(Keyword::Inner) => QualifiedJoinType::Inner,
            Some(Keyword::Left) => QualifiedJoinType::LeftOuter,
            Some(Keyword::Right) => QualifiedJoinType::RightOuter,
            Some(Keyword::Full) => QualifiedJoinType::FullOuter,
            _ => return Ok(None),
        };
        // LEFT and RIGHT are also function names.
        if matches!(join_type, QualifiedJoinType::LeftOuter | QualifiedJoinType::RightOuter)
            && self.peek_is(1, &TokenKind::LeftParen)
        {
            return Ok(None);
        }
        if self.eat_keyword(Keyword::Join) {
            return Ok(Some((join_type, JoinHint::None)));
        }
        self.advance();
        if join_type != QualifiedJoinType::Inner {
            self.eat_keyword(Keyword::Outer);
        }
        let join_hint = if self.eat_word("LOOP") {
            JoinHint::Loop
        } else if self.eat_word("HASH") {
            JoinHint::Hash
        } else if self.eat_keyword(Keyword::Merge) {
            JoinHint::Merge
        } else if self.eat_word("REMOTE") {
            JoinHint::Remote
        } else {
            JoinHint::None
        };
        self.expect_keyword(Keyword::Join)?;
        Ok(Some((join_type, join_hint)))
    }

    fn check_pivot(&self) -> bool {
        self.check_keyword(Keyword::Pivot) || self.check_keyword(Keyword::Unpivot)
    }

    /// `PIVOT (…) [AS] alias` or `UNPIVOT (…) [AS] alias` applied to
    /// `table_reference`.
    fn parse_pivot_suffix(
        &mut self,
        table_reference: TableReference,
        start: Span,
    ) -> Result<TableReference, ParseError> {
        if self.eat_keyword(Keyword::Pivot) {
            self.expect(&TokenKind::LeftParen)?;
            let aggregate_function_identifier = self.parse_multi_part_identifier()?;
            let value_columns = self.parse_parenthesized_list(Self::parse_column_reference)?;
            self.expect_keyword(Keyword::For)?;
            let pivot_column = self.parse_column_reference()?;
            self.expect_keyword(Keyword::In)?;
            let in_columns = self.parse_identifier_list()?;
            self.expect(&TokenKind::RightParen)?;
            let alias = self.parse_table_alias()?;
            return Ok(TableReference::Pivoted(Box::new(PivotedTableReference {
                table_reference,
                aggregate_function_identifier,
                value_columns,
                pivot_column,
                in_columns,
                alias,
                span: self.span_from(start),
            })));
        }
        self.expect_keyword(Keyword::Unpivot)?;
        self.expect(&TokenKind::LeftParen)?;
        let value_column = self.parse_identifier()?;
        self.expect_keyword(Keyword::For)?;
        let pivot_column = self.parse_identifier()?;
        self.expect_keyword(Keyword::In)?;
        let in_columns = self.parse_parenthesized_list(Self::parse_column_reference)?;
        self.expect(&TokenKind::RightParen)?;
        let alias = self.parse_table_alias()?;
        Ok(TableReference::Unpivoted(Box::new(UnpivotedTableReference {
            table_reference,
            value_column,
            pivot_column,
            in_columns,
            alias,
            span: self.span_from(start),
        })))
    }

    /// A single table source without trailing joins.
    fn parse_table_primary(&mut self) -> Result<TableReference, ParseError> {
        let start = self.current.span;
        let odbc_join = self.check(&TokenKind::LeftBrace) && self.peek_word(1, "OJ");
        match &self.current.kind {
            TokenKind::LeftParen => return self.parse_parenthesized_table(),
            TokenKind::LeftBrace if odbc_join => {
                self.advance();
                self.advance();
                let table_reference = self.parse_table_reference()?;
                self.expect(&TokenKind::RightBrace)?;
                return Ok(TableReference::OdbcQualifiedJoin(Box::new(
                    OdbcQualifiedJoinTableReference {
                        table_reference,
                        span: self.span_from(start),
                    },
                )));
            }
            TokenKind::Variable(_) => return self.parse_variable_table(),
            TokenKind::DoubleColon => {
                self.advance();
                let name = self.parse_identifier()?;
                let parameters = self.parse_call_arguments()?;
                let alias = self.parse_table_alias()?;
                let columns = self.parse_optional_column_list()?;
                return Ok(TableReference::GlobalFunction(GlobalFunctionTableReference {
                    name,
                    parameters,
                    alias,
                    columns,
                    span: self.span_from(start),
                }));
            }
            _ => {}
        }
        match self.current.as_keyword() {
            Some(Keyword::OpenRowset) => return self.parse_openrowset(),
            Some(Keyword::OpenQuery) => return self.parse_openquery(),
            Some(Keyword::OpenXml) => return self.parse_openxml(),
            Some(Keyword::OpenDataSource) => return self.parse_opendatasource(),
            Some(Keyword::ContainsTable) => {
                return self.parse_full_text_table(FullTextFunctionType::Contains);
            }
            Some(Keyword::FreeTextTable) => {
                return self.parse_full_text_table(FullTextFunctionType::FreeText);
            }
            Some(Keyword::SemanticKeyPhraseTable) => {
                return self.parse_semantic_table(SemanticFunctionType::SemanticKeyPhraseTable);
            }
            Some(Keyword::SemanticSimilarityTable) => {
                return self.parse_semantic_table(SemanticFunctionType::SemanticSimilarityTable);
            }
            Some(Keyword::SemanticSimilarityDetailsTable) => {
                return self
                    .parse_semantic_table(SemanticFunctionType::SemanticSimilarityDetailsTable);
            }
            _ => {}
        }
        if self.peek_is(1, &TokenKind::LeftParen) {
            if self.check_word("OPENJSON") {
                return self.parse_openjson();
            }
            if self.check_word("CHANGETABLE") {
                return self.parse_changetable();
            }
            if self.check_word("PREDICT") {
                return self.parse_predict();
            }
        }
        self.parse_named_table()
    }

    /// `( query )`, `( VALUES … )`, `( DML … OUTPUT … )` or `( join )`.
    fn parse_parenthesized_table(&mut self) -> Result<TableReference, ParseError> {
        let start = self.current.span;
        if self.peek_keyword(1, Keyword::Values) {
            self.advance();
            self.advance();
            let row_values = self.parse_comma_separated(Self::parse_row_value)?;
            self.expect(&TokenKind::RightParen)?;
            let alias = self.parse_table_alias()?;
            let columns = self.parse_optional_column_list()?;
            return Ok(TableReference::InlineDerived(InlineDerivedTable {
                row_values,
                alias,
                columns,
                span: self.span_from(start),
            }));
        }
        let dml = [Keyword::Insert, Keyword::Update, Keyword::Delete, Keyword::Merge];
        if dml.iter().any(|kw| self.peek_keyword(1, *kw)) {
            self.advance();
            let data_modification_specification =
                self.parse_data_modification_specification()?;
            self.expect(&TokenKind::RightParen)?;
            let alias = self.parse_table_alias()?;
            let columns = self.parse_optional_column_list()?;
            return Ok(TableReference::DataModification(Box::new(
                DataModificationTableReference {
                    data_modification_specification,
                    alias,
                    columns,
                    span: self.span_from(start),
                },
            )));
        }
        if self.looks_like_query() {
            self.advance();
            let query_expression = self.parse_query_expression()?;
            self.expect(&TokenKind::RightParen)?;
            let alias = self.parse_table_alias()?;
            let columns = self.parse_optional_column_list()?;
            return Ok(TableReference::QueryDerived(Box::new(QueryDerivedTable {
                query_expression,
                alias,
                columns,
                span: self.span_from(start),
            })));
        }
        self.advance();
        let join = self.parse_table_reference()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(TableReference::JoinParenthesis(Box::new(JoinParenthesisTableReference {
            join,
            span: self.span_from(start),
        })))
    }

    /// `( expr, … )` of a `VALUES` list.
    pub(super) fn parse_row_value(&mut self) -> Result<RowValue, ParseError> {
        let start = self.current.span;
        let column_values = self.parse_parenthesized_list(Self::parse_scalar_expression)?;
        Ok(RowValue {
            column_values,
            span: self.span_from(start),
        })
    }

    /// `@t [alias]` or `@x.method(args) [alias] [(cols)]`.
    fn parse_variable_table(&mut self) -> Result<TableReference, ParseError> {
        let start = self.current.span;
        let variable = self.parse_variable()?;
        if self.eat(&TokenKind::Dot) {
            let method_name = self.parse_name()?;
            let parameters = self.parse_call_arguments()?;
            let alias = self.parse_table_alias()?;
            let columns = self.parse_optional_column_list()?;
            return Ok(TableReference::VariableMethodCall(VariableMethodCallTableReference {
                variable,
                method_name,
                parameters,
                alias,
                columns,
                span: self.span_from(start),
            }));
        }
        let alias = self.parse_table_alias()?;
        Ok(TableReference::Variable(VariableTableReference {
            variable,
            alias,
            span: self.span_from(start),
        }))
    }

    /// A table, view or table-valued function call.
    fn parse_named_table(&mut self) -> Result<TableReference, ParseError> {
        let start = self.current.span;
        let schema_object = self.parse_schema_object_name()?;

        if self.check(&TokenKind::LeftParen) && !self.check_legacy_hints() {
            let parameters = self.parse_call_arguments()?;
            let alias = self.parse_table_alias()?;
            let columns = self.parse_optional_column_list()?;
            let builtin = schema_object.count == 1
                && BUILTIN_TABLE_FUNCTIONS
                    .iter()
                    .any(|f| schema_object.base_identifier.matches(f));
            if builtin {
                return Ok(TableReference::BuiltIn(BuiltInFunctionTableReference {
                    name: schema_object.base_identifier,
                    parameters,
                    alias,
                    span: self.span_from(start),
                }));
            }
            return Ok(TableReference::SchemaObjectFunction(
                SchemaObjectFunctionTableReference {
                    schema_object,
                    parameters,
                    alias,
                    columns,
                    span: self.span_from(start),
                },
            ));
        }

        let for_path = if self.check_keyword(Keyword::For) && self.peek_word(1, "PATH") {
            self.advance();
            self.advance();
            true
        } else {
            false
        };
        let temporal_clause = if self.check_keyword(Keyword::For)
            && self.peek_word(1, "SYSTEM_TIME")
        {
            Some(self.parse_temporal_clause()?)
        } else {
            None
        };
        let alias = self.parse_table_alias()?;
        let table_sample_clause = if self.check_keyword(Keyword::TableSample) {
            Some(self.parse_table_sample_clause()?)
        } else {
            None
        };
        let table_hints = if self.check_legacy_hints() {
            self.parse_option_list(Self::parse_table_hint)?
        } else {
            self.parse_with_option_list(Self::parse_table_hint)?
        };
        Ok(TableReference::Named(NamedTableReference {
            schema_object,
            for_path,
            temporal_clause,
            alias,
            table_sample_clause,
            table_hints,
            span: self.span_from(start),
        }))
    }

    /// `(NOLOCK)` written without `WITH`.
    fn check_legacy_hints(&mut self) -> bool {
        if !self.check(&TokenKind::LeftParen) {
            return false;
        }
        let Some(word) = self.peek_nth(1).word().map(str::to_owned) else {
            return false;
        };
        TableHintKind::from_word(&word).is_some()
            && (self.peek_is(2, &TokenKind::RightParen) || self.peek_is(2, &TokenKind::Comma))
    }

    fn parse_temporal_clause(&mut self) -> Result<TemporalClause, ParseError> {
        let start = self.expect_keyword(Keyword::For)?;
        self.expect_word("SYSTEM_TIME")?;
        let (temporal_clause_type, start_time, end_time) = if self.eat_keyword(Keyword::As) {
            self.expect_keyword(Keyword::Of)?;
            let at = self.parse_scalar_expression()?;
            (TemporalClauseType::AsOf, Some(at), None)
        } else if self.eat_keyword(Keyword::From) {
            let from = self.parse_scalar_expression()?;
            self.expect_keyword(Keyword::To)?;
            let to = self.parse_scalar_expression()?;
            (TemporalClauseType::FromTo, Some(from), Some(to))
        } else if self.eat_keyword(Keyword::Between) {
            let from = self.parse_scalar_expression()?;
            self.expect_keyword(Keyword::And)?;
            let to = self.parse_scalar_expression()?;
            (TemporalClauseType::Between, Some(from), Some(to))
        } else if self.eat_word("CONTAINED") {
            self.expect_keyword(Keyword::In)?;
            self.expect(&TokenKind::LeftParen)?;
            let from = self.parse_scalar_expression()?;
            self.expect(&TokenKind::Comma)?;
            let to = self.parse_scalar_expression()?;
            self.expect(&TokenKind::RightParen)?;
            (TemporalClauseType::ContainedIn, Some(from), Some(to))
        } else if self.eat_keyword(Keyword::All) {
            (TemporalClauseType::All, None, None)
        } else {
            return Err(self.unexpected(&["AS OF", "FROM", "BETWEEN", "CONTAINED IN", "ALL"]));
        };
        Ok(TemporalClause {
            temporal_clause_type,
            start_time,
            end_time,
            span: self.span_from(start),
        })
    }

    fn parse_table_sample_clause(&mut self) -> Result<TableSampleClause, ParseError> {
        let start = self.expect_keyword(Keyword::TableSample)?;
        let system = self.eat_word("SYSTEM");
        self.expect(&TokenKind::LeftParen)?;
        let sample_number = self.parse_scalar_expression()?;
        let table_sample_clause_option = if self.eat_keyword(Keyword::Percent) {
            TableSampleClauseOption::Percent
        } else if self.eat_word("ROWS") {
            TableSampleClauseOption::Rows
        } else {
            TableSampleClauseOption::NotSpecified
        };
        self.expect(&TokenKind::RightParen)?;
        let repeat_seed = if self.eat_word("REPEATABLE") {
            self.expect(&TokenKind::LeftParen)?;
            let seed = self.parse_scalar_expression()?;
            self.expect(&TokenKind::RightParen)?;
            Some(seed)
        } else {
            None
        };
        Ok(TableSampleClause {
            system,
            sample_number,
            table_sample_clause_option,
            repeat_seed,
            span: self.span_from(start),
        })
    }

    /// `[AS] alias`, if present.
    pub(super) fn parse_table_alias(&mut self) -> Result<Option<Identifier>, ParseError> {
        if self.eat_keyword(Keyword::As) {
            return self.parse_identifier().map(Some);
        }
        if self.check_alias_start() && !self.check_any_word(&["APPLY", "OJ", "USING"]) {
            return self.parse_identifier().map(Some);
        }
        Ok(None)
    }

    /// `( col, … )` after an alias, if present.
    fn parse_optional_column_list(&mut self) -> Result<Vec<Identifier>, ParseError> {
        if self.check(&TokenKind::LeftParen) && self.peek_is_identifier(1) {
            return self.parse_identifier_list();
        }
        Ok(Vec::new())
    }

    /// A plain column reference.
    pub(super) fn parse_column_reference(
        &mut self,
    ) -> Result<ColumnReferenceExpression, ParseError> {
        let multi_part_identifier = self.parse_multi_part_identifier()?;
        Ok(ColumnReferenceExpression {
            column_type: ColumnType::Regular,
            span: multi_part_identifier.span,
            multi_part_identifier: Some(multi_part_identifier),
        })
    }

    /// One table hint.
    pub(super) fn parse_table_hint(&mut self) -> Result<TableHint, ParseError> {
        let start = self.current.span;
        let (hint_kind, _) = self.parse_option_key::<TableHintKind>("table hint")?;
        let hint = match hint_kind {
            TableHintKind::Index => {
                let index_values = if self.eat(&TokenKind::Eq) {
                    if self.check(&TokenKind::LeftParen) {
                        self.parse_parenthesized_list(Self::parse_index_value)?
                    } else {
                        vec![self.parse_index_value()?]
                    }
                } else {
                    self.parse_parenthesized_list(Self::parse_index_value)?
                };
                TableHint::Index(IndexTableHint {
                    hint_kind,
                    index_values,
                    span: self.span_from(start),
                })
            }
            TableHintKind::ForceSeek => {
                let mut index_value = None;
                let mut column_values = Vec::new();
                if self.eat(&TokenKind::LeftParen) {
                    index_value = Some(self.parse_index_value()?);
                    column_values = self.parse_parenthesized_list(Self::parse_column_reference)?;
                    self.expect(&TokenKind::RightParen)?;
                }
                TableHint::ForceSeek(ForceSeekTableHint {
                    hint_kind,
                    index_value,
                    column_values,
                    span: self.span_from(start),
                })
            }
            TableHintKind::SpatialWindowMaxCells => {
                self.expect(&TokenKind::Eq)?;
                let value = self.parse_integer_literal()?;
                TableHint::Literal(LiteralTableHint {
                    hint_kind,
                    value,
                    span: self.span_from(start),
                })
            }
            _ => TableHint::General(GeneralTableHint {
                hint_kind,
                span: self.span_from(start),
            }),
        };
        Ok(hint)
    }

    /// An index name or number.
    fn parse_index_value(&mut self) -> Result<IdentifierOrValueExpression, ParseError> {
        if self.check_literal() {
            return self.parse_literal().map(IdentifierOrValueExpression::Value);
        }
        self.parse_identifier().map(IdentifierOrValueExpression::Identifier)
    }

    // --- Rowset functions ---

    fn parse_openrowset(&mut self) -> Result<TableReference, ParseError> {
        let start = self.expect_keyword(Keyword::OpenRowset)?;
        self.expect(&TokenKind::LeftParen)?;

        if self.eat_keyword(Keyword::Bulk) {
            let mut data_files = vec![self.parse_string_literal()?];
            let mut options = Vec::new();
            while self.eat(&TokenKind::Comma) {
                if self.check_string() {
                    data_files.push(self.parse_string_literal()?);
                } else {
                    options.push(self.parse_bulk_insert_option()?);
                }
            }
            self.expect(&TokenKind::RightParen)?;
            let with_columns = self.parse_openrowset_columns()?;
            let alias = self.parse_table_alias()?;
            let columns = self.parse_optional_column_list()?;
            return Ok(TableReference::BulkOpenRowset(BulkOpenRowset {
                data_files,
                options,
                with_columns,
                alias,
                columns,
                span: self.span_from(start),
            }));
        }

        if self.check_word("PROVIDER") && self.peek_is(1, &TokenKind::Eq) {
            self.require(Feature::OpenRowsetCosmos, start);
            let options = self.parse_comma_separated(|p| p.parse_general_option("OPENROWSET"))?;
            self.expect(&TokenKind::RightParen)?;
            let with_columns = self.parse_openrowset_columns()?;
            let alias = self.parse_table_alias()?;
            return Ok(TableReference::OpenRowsetCosmos(OpenRowsetCosmos {
                options,
                with_columns,
                alias,
                span: self.span_from(start),
            }));
        }

        let provider_name = self.parse_string_literal()?;
        self.expect(&TokenKind::Comma)?;
        let first = self.parse_string_literal()?;
        let (data_source, user_id, password, provider_string) = if self.eat(&TokenKind::Semicolon)
        {
            let user_id = self.parse_string_literal()?;
            self.expect(&TokenKind::Semicolon)?;
            let password = self.parse_string_literal()?;
            (Some(first), Some(user_id), Some(password), None)
        } else {
            (None, None, None, Some(first))
        };
        self.expect(&TokenKind::Comma)?;
        let (object, query) = if self.check_string() {
            (None, Some(self.parse_string_literal()?))
        } else {
            (Some(self.parse_schema_object_name()?), None)
        };
        self.expect(&TokenKind::RightParen)?;
        let alias = self.parse_table_alias()?;
        let columns = self.parse_optional_column_list()?;
        Ok(TableReference::OpenRowset(OpenRowsetTableReference {
            provider_name,
            data_source,
            user_id,
            password,
            provider_string,
            object,
            query,
            alias,
            columns,
            span: self.span_from(start),
        }))
    }

    /// `WITH ( col type [COLLATE c] [ordinal], … )` after `OPENROWSET`.
    fn parse_openrowset_columns(&mut self) -> Result<Vec<OpenRowsetColumnDefinition>, ParseError> {
        if !(self.check_keyword(Keyword::With) && self.peek_is(1, &TokenKind::LeftParen)) {
            return Ok(Vec::new());
        }
        self.advance();
        self.parse_parenthesized_list(|p| {
            let column_identifier = p.parse_identifier()?;
            let start = column_identifier.span;
            let data_type = p.parse_data_type()?;
            let collation = if p.eat_keyword(Keyword::Collate) {
                Some(p.parse_identifier()?)
            } else {
                None
            };
            let column_ordinal = if p.check_literal() {
                Some(p.parse_literal()?)
            } else {
                None
            };
            Ok(OpenRowsetColumnDefinition {
                column_identifier,
                data_type,
                collation,
                column_ordinal,
                span: p.span_from(start),
            })
        })
    }

    /// One `BULK` option, shared with `BULK INSERT`.
    pub(super) fn parse_bulk_insert_option(&mut self) -> Result<BulkInsertOption, ParseError> {
        if self.check_keyword(Keyword::Order) {
            let start = self.current.span;
            self.advance();
            let columns = self.parse_parenthesized_list(Self::parse_column_with_sort_order)?;
            let is_unique = self.eat_keyword(Keyword::Unique);
            return Ok(BulkInsertOption::Order(OrderBulkInsertOption {
                option_kind: BulkInsertOptionKind::Order,
                columns,
                is_unique,
                span: self.span_from(start),
            }));
        }
        self.parse_general_option("bulk").map(BulkInsertOption::General)
    }

    fn parse_openquery(&mut self) -> Result<TableReference, ParseError> {
        let start = self.expect_keyword(Keyword::OpenQuery)?;
        self.expect(&TokenKind::LeftParen)?;
        let linked_server = self.parse_identifier()?;
        self.expect(&TokenKind::Comma)?;
        let query = self.parse_string_literal()?;
        self.expect(&TokenKind::RightParen)?;
        let alias = self.parse_table_alias()?;
        let columns = self.parse_optional_column_list()?;
        Ok(TableReference::OpenQuery(OpenQueryTableReference {
            linked_server,
            query,
            alias,
            columns,
            span: self.span_from(start),
        }))
    }

    fn parse_opendatasource(&mut self) -> Result<TableReference, ParseError> {
        let start = self.expect_keyword(Keyword::OpenDataSource)?;
        self.expect(&TokenKind::LeftParen)?;
        let provider_name = self.parse_string_literal()?;
        self.expect(&TokenKind::Comma)?;
        let init_string = self.parse_string_literal()?;
        self.expect(&TokenKind::RightParen)?;
        let data_source = AdHocDataSource {
            provider_name,
            init_string,
            span: self.span_from(start),
        };
        self.expect(&TokenKind::Dot)?;
        let object = self.parse_schema_object_name()?;
        let alias = self.parse_table_alias()?;
        Ok(TableReference::AdHoc(AdHocTableReference {
            data_source,
            object,
            alias,
            span: self.span_from(start),
        }))
    }

    fn parse_openxml(&mut self) -> Result<TableReference, ParseError> {
        let start = self.expect_keyword(Keyword::OpenXml)?;
        self.expect(&TokenKind::LeftParen)?;
        let variable = self.parse_scalar_expression()?;
        self.expect(&TokenKind::Comma)?;
        let row_pattern = self.parse_scalar_expression()?;
        let flags = if self.eat(&TokenKind::Comma) {
            Some(self.parse_scalar_expression()?)
        } else {
            None
        };
        self.expect(&TokenKind::RightParen)?;
        let mut schema_declaration_items = Vec::new();
        let mut table_name = None;
        if self.eat_keyword(Keyword::With) {
            if self.check(&TokenKind::LeftParen) {
                schema_declaration_items =
                    self.parse_parenthesized_list(Self::parse_schema_declaration_item)?;
            } else {
                table_name = Some(self.parse_schema_object_name()?);
            }
        }
        let alias = self.parse_table_alias()?;
        Ok(TableReference::OpenXml(OpenXmlTableReference {
            variable,
            row_pattern,
            flags,
            schema_declaration_items,
            table_name,
            alias,
            span: self.span_from(start),
        }))
    }

    /// `name type ['mapping']`
    fn parse_schema_declaration_item(&mut self) -> Result<SchemaDeclarationItem, ParseError> {
        let column_name = self.parse_identifier()?;
        let start = column_name.span;
        let data_type = self.parse_data_type()?;
        let mapping = if self.check_string() {
            Some(self.parse_string_literal()?)
        } else {
            None
        };
        Ok(SchemaDeclarationItem {
            column_name,
            data_type,
            mapping,
            span: self.span_from(start),
        })
    }

    fn parse_openjson(&mut self) -> Result<TableReference, ParseError> {
        let start = self.expect_word("OPENJSON")?;
        self.expect(&TokenKind::LeftParen)?;
        let variable = self.parse_scalar_expression()?;
        let row_pattern = if self.eat(&TokenKind::Comma) {
            Some(self.parse_scalar_expression()?)
        } else {
            None
        };
        self.expect(&TokenKind::RightParen)?;
        let schema_declaration_items = self.parse_with_option_list(|p| {
            let column_name = p.parse_identifier()?;
            let start = column_name.span;
            let data_type = p.parse_data_type()?;
            let mapping = if p.check_string() {
                Some(p.parse_string_literal()?)
            } else {
                None
            };
            let as_json = if p.check_keyword(Keyword::As) && p.peek_word(1, "JSON") {
                p.advance();
                p.advance();
                true
            } else {
                false
            };
            Ok(SchemaDeclarationItemOpenjson {
                column_name,
                data_type,
                mapping,
                as_json,
                span: p.span_from(start),
            })
        })?;
        let alias = self.parse_table_alias()?;
        Ok(TableReference::OpenJson(OpenJsonTableReference {
            variable,
            row_pattern,
            schema_declaration_items,
            alias,
            span: self.span_from(start),
        }))
    }

    /// `CHANGETABLE(CHANGES t, v [, FORCESEEK])` or
    /// `CHANGETABLE(VERSION t, (cols), (vals) [, FORCESEEK])`.
    fn parse_changetable(&mut self) -> Result<TableReference, ParseError> {
        let start = self.expect_word("CHANGETABLE")?;
        self.expect(&TokenKind::LeftParen)?;
        if self.eat_word("CHANGES") {
            let target = self.parse_schema_object_name()?;
            self.expect(&TokenKind::Comma)?;
            let since_version = self.parse_scalar_expression()?;
            let force_seek = self.parse_changetable_force_seek()?;
            self.expect(&TokenKind::RightParen)?;
            let alias = self.parse_table_alias()?;
            let columns = self.parse_optional_column_list()?;
            return Ok(TableReference::ChangeTableChanges(ChangeTableChangesTableReference {
                target,
                since_version,
                force_seek,
                alias,
                columns,
                span: self.span_from(start),
            }));
        }
        self.expect_word("VERSION")?;
        let target = self.parse_schema_object_name()?;
        self.expect(&TokenKind::Comma)?;
        let primary_key_columns = self.parse_identifier_list()?;
        self.expect(&TokenKind::Comma)?;
        let primary_key_values = self.parse_parenthesized_list(Self::parse_scalar_expression)?;
        let force_seek = self.parse_changetable_force_seek()?;
        self.expect(&TokenKind::RightParen)?;
        let alias = self.parse_table_alias()?;
        let columns = self.parse_optional_column_list()?;
        Ok(TableReference::ChangeTableVersion(ChangeTableVersionTableReference {
            target,
            primary_key_columns,
            primary_key_values,
            force_seek,
            alias,
            columns,
            span: self.span_from(start),
        }))
    }

    fn parse_changetable_force_seek(&mut self) -> Result<bool, ParseError> {
        if self.eat(&TokenKind::Comma) {
            self.expect_word("FORCESEEK")?;
            return Ok(true);
        }
        Ok(false)
    }

    /// `PREDICT(MODEL = m, DATA = source AS alias [, RUNTIME = r]) WITH (…)`
    fn parse_predict(&mut self) -> Result<TableReference, ParseError> {
        let start = self.expect_word("PREDICT")?;
        self.expect(&TokenKind::LeftParen)?;
        self.expect_word("MODEL")?;
        self.expect(&TokenKind::Eq)?;
        let model = self.parse_scalar_expression()?;
        self.expect(&TokenKind::Comma)?;
        self.expect_word("DATA")?;
        self.expect(&TokenKind::Eq)?;
        let data_source = self.parse_table_primary()?;
        let runtime = if self.eat(&TokenKind::Comma) {
            self.expect_word("RUNTIME")?;
            self.expect(&TokenKind::Eq)?;
            Some(self.parse_identifier()?)
        } else {
            None
        };
        self.expect(&TokenKind::RightParen)?;
        let schema_declaration_items =
            self.parse_with_option_list(Self::parse_schema_declaration_item)?;
        let alias = self.parse_table_alias()?;
        Ok(TableReference::Predict(Box::new(PredictTableReference {
            model,
            data_source,
            runtime,
            schema_declaration_items,
            alias,
            span: self.span_from(start),
        })))
    }

    /// `CONTAINSTABLE | FREETEXTTABLE (table, columns, search [, LANGUAGE l]
    /// [, top_n])`
    fn parse_full_text_table(
        &mut self,
        full_text_function_type: FullTextFunctionType,
    ) -> Result<TableReference, ParseError> {
        let start = self.current.span;
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let table_name = self.parse_schema_object_name()?;
        self.expect(&TokenKind::Comma)?;
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
        let search_condition = self.parse_scalar_expression()?;
        let mut language = None;
        let mut top_n = None;
        while self.eat(&TokenKind::Comma) {
            if self.eat_word("LANGUAGE") {
                language = Some(self.parse_scalar_expression()?);
            } else {
                top_n = Some(self.parse_scalar_expression()?);
            }
        }
        self.expect(&TokenKind::RightParen)?;
        let alias = self.parse_table_alias()?;
        Ok(TableReference::FullTextTable(FullTextTableReference {
            full_text_function_type,
            table_name,
            columns,
            property_name,
            search_condition,
            language,
            top_n,
            alias,
            span: self.span_from(start),
        }))
    }

    fn parse_semantic_table(
        &mut self,
        semantic_function_type: SemanticFunctionType,
    ) -> Result<TableReference, ParseError> {
        let start = self.current.span;
        self.advance();
        self.expect(&TokenKind::LeftParen)?;
        let table_name = self.parse_schema_object_name()?;
        self.expect(&TokenKind::Comma)?;
        let columns = if self.check(&TokenKind::LeftParen) {
            self.parse_parenthesized_list(Self::parse_full_text_column)?
        } else {
            vec![self.parse_full_text_column()?]
        };
        let mut source_key = None;
        let mut matched_column = None;
        let mut matched_key = None;
        if self.eat(&TokenKind::Comma) {
            source_key = Some(self.parse_scalar_expression()?);
            if semantic_function_type == SemanticFunctionType::SemanticSimilarityDetailsTable {
                self.expect(&TokenKind::Comma)?;
                matched_column = Some(self.parse_full_text_column()?);
                self.expect(&TokenKind::Comma)?;
                matched_key = Some(self.parse_scalar_expression()?);
            }
        }
        self.expect(&TokenKind::RightParen)?;
        let alias = self.parse_table_alias()?;
        Ok(TableReference::SemanticTable(SemanticTableReference {
            semantic_function_type,
            table_name,
            columns,
            source_key,
            matched_column,
            matched_key,
            alias,
            span: self.span_from(start),
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::parser::{ParseOptions, Parser};

    fn from(sql: &str) -> TableReference {
        let mut parser = Parser::new(sql, &ParseOptions::default());
        parser.parse_table_reference().unwrap()
    }

    #[test]
    fn test_named_table_with_alias_and_hints() {
        let TableReference::Named(t) = from("dbo.Orders AS o WITH (NOLOCK, INDEX(ix_date))") else {
            panic!("expected named table");
        };
        assert_eq!(t.schema_object.base_identifier.value, "Orders");
        assert_eq!(t.alias.unwrap().value, "o");
        assert_eq!(t.table_hints.len(), 2);
        assert_eq!(t.table_hints[0].hint_kind(), TableHintKind::NoLock);
        assert!(matches!(&t.table_hints[1], TableHint::Index(h) if h.index_values.len() == 1));
    }

    #[test]
    fn test_legacy_hint_list() {
        let TableReference::Named(t) = from("Orders o (NOLOCK)") else {
            panic!("expected named table");
        };
        assert_eq!(t.table_hints.len(), 1);
    }

    #[test]
    fn test_odbc_outer_join_escape() {
        let TableReference::OdbcQualifiedJoin(odbc) =
            from("{oj a LEFT OUTER JOIN b ON a.id = b.id}")
        else {
            panic!("expected ODBC join");
        };
        let TableReference::QualifiedJoin(join) = &odbc.table_reference else {
            panic!("expected inner join");
        };
        assert_eq!(join.qualified_join_type, QualifiedJoinType::LeftOuter);
        assert_eq!(odbc.span.end, 39);
    }

    #[test]
    fn test_joins_are_left_deep() {
        let TableReference::QualifiedJoin(j) =
            from("a INNER JOIN b ON a.id = b.id LEFT OUTER HASH JOIN c ON b.id = c.id")
        else {
            panic!("expected join");
        };
        assert_eq!(j.qualified_join_type, QualifiedJoinType::LeftOuter);
        assert_eq!(j.join_hint, JoinHint::Hash);
        assert!(matches!(j.first_table_reference, TableReference::QualifiedJoin(_)));
    }

    #[test]
    fn test_apply_and_cross_join() {
        let TableReference::UnqualifiedJoin(j) =
            from("t CROSS APPLY STRING_SPLIT(t.tags, ',') s OUTER APPLY dbo.f(t.id) AS x")
        else {
            panic!("expected apply");
        };
        assert_eq!(j.unqualified_join_type, UnqualifiedJoinType::OuterApply);
        let TableReference::UnqualifiedJoin(inner) = &j.first_table_reference else {
            panic!("expected nested apply");
        };
        assert!(matches!(inner.second_table_reference, TableReference::BuiltIn(_)));
        assert!(matches!(j.second_table_reference, TableReference::SchemaObjectFunction(_)));
    }

    #[test]
    fn test_derived_tables() {
        assert!(matches!(
            from("(SELECT 1 AS x) AS d"),
            TableReference::QueryDerived(d) if d.alias.is_some()
        ));
        let TableReference::InlineDerived(v) = from("(VALUES (1, 'a'), (2, 'b')) AS v (id, name)")
        else {
            panic!("expected VALUES table");
        };
        assert_eq!(v.row_values.len(), 2);
        assert_eq!(v.columns.len(), 2);
        assert!(matches!(
            from("(a JOIN b ON a.x = b.x)"),
            TableReference::JoinParenthesis(_)
        ));
    }

    #[test]
    fn test_pivot() {
        let TableReference::Pivoted(p) =
            from("sales PIVOT (SUM(amount) FOR quarter IN ([Q1], [Q2])) AS p")
        else {
            panic!("expected pivot");
        };
        assert_eq!(p.in_columns.len(), 2);
        assert_eq!(p.alias.as_ref().unwrap().value, "p");
        assert!(matches!(p.table_reference, TableReference::Named(_)));
    }

    #[test]
    fn test_temporal_and_sample() {
        let TableReference::Named(t) =
            from("History FOR SYSTEM_TIME BETWEEN @a AND @b h TABLESAMPLE SYSTEM (10 PERCENT)")
        else {
            panic!("expected named table");
        };
        assert_eq!(
            t.temporal_clause.unwrap().temporal_clause_type,
            TemporalClauseType::Between
        );
        assert_eq!(
            t.table_sample_clause.unwrap().table_sample_clause_option,
            TableSampleClauseOption::Percent
        );
    }

    #[test]
    fn test_rowset_functions() {
        assert!(matches!(
            from("OPENROWSET(BULK 'data.csv', FORMATFILE = 'f.fmt', FIRSTROW = 2) AS r"),
            TableReference::BulkOpenRowset(b) if b.options.len() == 2
        ));
        assert!(matches!(
            from("OPENROWSET('SQLNCLI', 'Server=x;', 'SELECT 1') AS r"),
            TableReference::OpenRowset(r) if r.query.is_some()
        ));
        assert!(matches!(
            from("OPENQUERY(Remote, 'SELECT 1') q"),
            TableReference::OpenQuery(_)
        ));
        assert!(matches!(
            from("OPENJSON(@json, '$.items') WITH (id INT '$.id', body NVARCHAR(MAX) AS JSON) j"),
            TableReference::OpenJson(j) if j.schema_declaration_items[1].as_json
        ));
        assert!(matches!(
            from("OPENDATASOURCE('SQLNCLI', 'Data Source=x').db.dbo.t"),
            TableReference::AdHoc(_)
        ));
        assert!(matches!(
            from("CHANGETABLE(CHANGES dbo.t, @v) AS ct"),
            TableReference::ChangeTableChanges(_)
        ));
    }

    #[test]
    fn test_variable_sources() {
        assert!(matches!(from("@t AS x"), TableReference::Variable(_)));
        assert!(matches!(
            from("@doc.nodes('/r') AS n(c)"),
            TableReference::VariableMethodCall(m) if m.columns.len() == 1
        ));
    }

    #[test]
    fn test_cosmos_openrowset_requires_synapse() {
        let mut parser = Parser::new(
            "OPENROWSET(PROVIDER = 'CosmosDB', CONNECTION = 'x', OBJECT = 'c') AS r",
            &ParseOptions::default(),
        );
        assert!(matches!(
            parser.parse_table_reference().unwrap(),
            TableReference::OpenRowsetCosmos(_)
        ));
        assert_eq!(parser.diagnostics()[0].code.as_str(), "TSQL4001");
    }
}
