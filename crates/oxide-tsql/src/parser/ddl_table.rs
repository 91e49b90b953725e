//! Tables, table definitions, indexes and their option bundles.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{
    AlterColumnOption, AlterIndexStatement, AlterIndexType, AlterTableAction,
    AlterTableAddTableElement, AlterTableAlterColumn, AlterTableChangeTracking,
    AlterTableConstraintModification, AlterTableDropTableElement, AlterTableDropTableElements,
    AlterTableRebuild, AlterTableSet, AlterTableStatement, AlterTableSwitch,
    AlterTableTriggerModification, CheckConstraintDefinition, ColumnConstraint, ColumnDefinition,
    ColumnEncryptionDefinition, ColumnReferenceExpression, ColumnEncryptionParameter,
    ColumnWithSortOrder, CompressionKind, ConstraintDefinition, ConstraintEnforcement,
    CreateColumnStoreIndexStatement, CreateIndexStatement, CreateTableStatement,
    DataCompressionLevel, DataCompressionOption, DefaultConstraintDefinition, DeleteUpdateAction,
    FileGroupOrPartitionScheme, ForeignKeyConstraintDefinition, GeneralIndexOption,
    GeneralTableOption, GeneratedAlwaysType, GraphConnectionBetweenNodes,
    GraphConnectionConstraintDefinition, Identifier, IdentityOptions, IndexCompressionOption,
    IndexDefinition, IndexOption, IndexOptionKind, IndexTypeKind, LedgerTableOption,
    LedgerViewColumnOption, LedgerViewOption, LedgerViewOptionKind, Literal, MaskedWithDefinition,
    NullableConstraintDefinition, OptionState, PartitionSpecifier, RetentionPeriodDefinition,
    SortOrder, Statement, SystemTimePeriodDefinition, SystemVersioningTableOption,
    TableCompressionOption, TableDefinition, TableDistributionOption, TableDistributionPolicy,
    TableElement, TableElementType, TableIndexOption, TableIndexType, TableOption, TableOptionKind,
    TableSwitchOption, TriggerEnforcement, UniqueConstraintDefinition, ValueUnit,
};
use crate::dialect::Feature;
use crate::lexer::{Keyword, Span, TokenKind};
use crate::visit::Spanned;

impl Parser<'_> {
    // --- CREATE / ALTER TABLE ---

    /// `CREATE TABLE name [AS FILETABLE] [(…)] [AS NODE | AS EDGE]
    /// [ON …] [TEXTIMAGE_ON …] [FILESTREAM_ON …] [WITH (…)] [AS SELECT …]`
    pub(super) fn parse_create_table_statement(
        &mut self,
        start: Span,
    ) -> Result<CreateTableStatement, ParseError> {
        let schema_object_name = self.parse_schema_object_name()?;
        let as_file_table = if self.check_keyword(Keyword::As) && self.peek_word(1, "FILETABLE") {
            self.advance();
            self.advance();
            true
        } else {
            false
        };
        let definition = if self.check(&TokenKind::LeftParen) {
            Some(self.parse_table_definition()?)
        } else {
            None
        };
        let mut as_node = false;
        let mut as_edge = false;
        if self.check_keyword(Keyword::As)
            && (self.peek_word(1, "NODE") || self.peek_word(1, "EDGE"))
        {
            let graph_start = self.current.span;
            self.advance();
            as_node = self.eat_word("NODE");
            as_edge = !as_node && self.eat_word("EDGE");
            self.require(Feature::GraphTables, self.span_from(graph_start));
        }
        let on_file_group_or_partition_scheme = if self.eat_keyword(Keyword::On) {
            Some(self.parse_file_group_or_partition_scheme()?)
        } else {
            None
        };
        let text_image_on = if self.eat_word("TEXTIMAGE_ON") {
            Some(self.parse_file_group_name()?)
        } else {
            None
        };
        let file_stream_on = if self.eat_word("FILESTREAM_ON") {
            Some(self.parse_file_group_name()?)
        } else {
            None
        };
        let options = self.parse_with_option_list(Self::parse_table_option)?;
        let select_statement = if self.check_keyword(Keyword::As) {
            let as_start = self.current.span;
            self.advance();
            let select = self.parse_select_statement(None)?;
            self.require(Feature::CreateTableAsSelect, self.span_from(as_start));
            Some(select)
        } else {
            None
        };
        Ok(CreateTableStatement {
            schema_object_name,
            as_file_table,
            definition,
            as_node,
            as_edge,
            on_file_group_or_partition_scheme,
            text_image_on,
            file_stream_on,
            options,
            select_statement,
            span: self.span_from(start),
        })
    }

    /// `ALTER TABLE name action`
    pub(super) fn parse_alter_table_statement(
        &mut self,
        start: Span,
    ) -> Result<AlterTableStatement, ParseError> {
        let schema_object_name = self.parse_schema_object_name()?;
        let action = self.parse_alter_table_action()?;
        Ok(AlterTableStatement {
            schema_object_name,
            action,
            span: self.span_from(start),
        })
    }

    fn parse_alter_table_action(&mut self) -> Result<AlterTableAction, ParseError> {
        let start = self.current.span;
        let existing_row_check = self.parse_existing_row_check();
        if self.eat_keyword(Keyword::Add) {
            let definition = self.parse_table_elements(start)?;
            return Ok(AlterTableAction::AddTableElement(AlterTableAddTableElement {
                existing_row_check,
                definition,
                span: self.span_from(start),
            }));
        }
        if self.check_keyword(Keyword::Check) || self.check_keyword(Keyword::NoCheck) {
            let constraint_enforcement = if self.eat_keyword(Keyword::Check) {
                ConstraintEnforcement::Check
            } else {
                self.advance();
                ConstraintEnforcement::NoCheck
            };
            self.expect_keyword(Keyword::Constraint)?;
            let all = self.eat_keyword(Keyword::All);
            let constraint_names = if all {
                Vec::new()
            } else {
                self.parse_comma_separated(Self::parse_identifier)?
            };
            return Ok(AlterTableAction::ConstraintModification(
                AlterTableConstraintModification {
                    existing_row_check,
                    constraint_enforcement,
                    all,
                    constraint_names,
                    span: self.span_from(start),
                },
            ));
        }
        if existing_row_check != ConstraintEnforcement::NotSpecified {
            return Err(self.unexpected(&["ADD", "CHECK", "NOCHECK"]));
        }
        if self.check_keyword(Keyword::Alter) && self.peek_keyword(1, Keyword::Column) {
            self.advance();
            self.advance();
            return self
                .parse_alter_column(start)
                .map(AlterTableAction::AlterColumn);
        }
        if self.eat_keyword(Keyword::Drop) {
            let elements = self.parse_comma_separated(Self::parse_drop_table_element)?;
            return Ok(AlterTableAction::DropTableElements(AlterTableDropTableElements {
                elements,
                span: self.span_from(start),
            }));
        }
        if self.check_any_word(&["ENABLE", "DISABLE"]) {
            let is_enable = self.check_word("ENABLE");
            self.advance();
            if self.eat_word("CHANGE_TRACKING") {
                let track_columns_updated = self.parse_track_columns_updated()?;
                return Ok(AlterTableAction::ChangeTracking(AlterTableChangeTracking {
                    is_enable,
                    track_columns_updated,
                    span: self.span_from(start),
                }));
            }
            self.expect_keyword(Keyword::Trigger)?;
            let all = self.eat_keyword(Keyword::All);
            let trigger_names = if all {
                Vec::new()
            } else {
                self.parse_comma_separated(Self::parse_identifier)?
            };
            return Ok(AlterTableAction::TriggerModification(AlterTableTriggerModification {
                trigger_enforcement: if is_enable {
                    TriggerEnforcement::Enable
                } else {
                    TriggerEnforcement::Disable
                },
                all,
                trigger_names,
                span: self.span_from(start),
            }));
        }
        if self.eat_word("SWITCH") {
            return self.parse_alter_table_switch(start).map(AlterTableAction::Switch);
        }
        if self.eat_keyword(Keyword::Set) {
            let options = self.parse_option_list(Self::parse_table_option)?;
            return Ok(AlterTableAction::Set(AlterTableSet {
                options,
                span: self.span_from(start),
            }));
        }
        if self.eat_word("REBUILD") {
            let partition = self.parse_partition_specifier()?;
            let index_options = self.parse_with_option_list(Self::parse_index_option)?;
            return Ok(AlterTableAction::Rebuild(AlterTableRebuild {
                partition,
                index_options,
                span: self.span_from(start),
            }));
        }
        Err(self.unexpected(&[
            "ADD", "ALTER COLUMN", "DROP", "CHECK", "NOCHECK", "ENABLE", "DISABLE", "SWITCH",
            "SET", "REBUILD",
        ]))
    }

    /// Optional `WITH CHECK | WITH NOCHECK`.
    fn parse_existing_row_check(&mut self) -> ConstraintEnforcement {
        if self.check_keyword(Keyword::With) {
            if self.peek_keyword(1, Keyword::Check) {
                self.advance();
                self.advance();
                return ConstraintEnforcement::Check;
            }
            if self.peek_keyword(1, Keyword::NoCheck) {
                self.advance();
                self.advance();
                return ConstraintEnforcement::NoCheck;
            }
        }
        ConstraintEnforcement::NotSpecified
    }

    fn parse_track_columns_updated(&mut self) -> Result<Option<bool>, ParseError> {
        if !(self.check_keyword(Keyword::With) && self.peek_is(1, &TokenKind::LeftParen)) {
            return Ok(None);
        }
        self.advance();
        self.advance();
        self.expect_word("TRACK_COLUMNS_UPDATED")?;
        self.expect(&TokenKind::Eq)?;
        let state = self.parse_option_state("TRACK_COLUMNS_UPDATED")?;
        self.expect(&TokenKind::RightParen)?;
        Ok(Some(state == OptionState::On))
    }

    /// `ALTER COLUMN name { type [COLLATE c] [NULL | NOT NULL] | ADD | DROP
    /// property } [WITH (…)]`
    fn parse_alter_column(&mut self, start: Span) -> Result<AlterTableAlterColumn, ParseError> {
        let column_identifier = self.parse_identifier()?;
        let mut data_type = None;
        let mut collation = None;
        let mut masking_function = None;
        let alter_column_option = if self.check_keyword(Keyword::Add)
            || self.check_keyword(Keyword::Drop)
        {
            let add = self.eat_keyword(Keyword::Add);
            if !add {
                self.advance();
            }
            let option = self.parse_alter_column_property(add)?;
            if add && option == AlterColumnOption::AddMaskingFunction {
                masking_function = Some(self.parse_masking_function()?);
            }
            option
        } else {
            data_type = Some(self.parse_data_type()?);
            if self.eat_keyword(Keyword::Collate) {
                collation = Some(self.parse_identifier()?);
            }
            match self.parse_nullability() {
                Some(true) => AlterColumnOption::Null,
                Some(false) => AlterColumnOption::NotNull,
                None => AlterColumnOption::NoOptionDefined,
            }
        };
        let options = self.parse_with_option_list(Self::parse_index_option)?;
        Ok(AlterTableAlterColumn {
            column_identifier,
            data_type,
            collation,
            alter_column_option,
            masking_function,
            options,
            span: self.span_from(start),
        })
    }

    fn parse_alter_column_property(&mut self, add: bool) -> Result<AlterColumnOption, ParseError> {
        let pick = |on_add, on_drop| if add { on_add } else { on_drop };
        if self.eat_keyword(Keyword::RowGuidCol) {
            return Ok(pick(AlterColumnOption::AddRowGuidCol, AlterColumnOption::DropRowGuidCol));
        }
        if self.eat_word("PERSISTED") {
            return Ok(pick(AlterColumnOption::AddPersisted, AlterColumnOption::DropPersisted));
        }
        if self.eat_words(&["NOT", "FOR", "REPLICATION"]) {
            return Ok(pick(
                AlterColumnOption::AddNotForReplication,
                AlterColumnOption::DropNotForReplication,
            ));
        }
        if self.eat_word("SPARSE") {
            return Ok(pick(AlterColumnOption::AddSparse, AlterColumnOption::DropSparse));
        }
        if self.eat_word("MASKED") {
            return Ok(pick(
                AlterColumnOption::AddMaskingFunction,
                AlterColumnOption::DropMaskingFunction,
            ));
        }
        if self.eat_word("HIDDEN") {
            return Ok(pick(AlterColumnOption::AddHidden, AlterColumnOption::DropHidden));
        }
        Err(self.unexpected(&[
            "ROWGUIDCOL",
            "PERSISTED",
            "NOT FOR REPLICATION",
            "SPARSE",
            "MASKED",
            "HIDDEN",
        ]))
    }

    /// One `DROP [CONSTRAINT | COLUMN | INDEX | PERIOD FOR SYSTEM_TIME]
    /// [IF EXISTS] name [WITH (…)]` element.
    fn parse_drop_table_element(&mut self) -> Result<AlterTableDropTableElement, ParseError> {
        let start = self.current.span;
        let table_element_type = if self.eat_keyword(Keyword::Constraint) {
            TableElementType::Constraint
        } else if self.eat_keyword(Keyword::Column) {
            TableElementType::Column
        } else if self.eat_keyword(Keyword::Index) {
            TableElementType::Index
        } else if self.eat_words(&["PERIOD", "FOR", "SYSTEM_TIME"]) {
            return Ok(AlterTableDropTableElement {
                table_element_type: TableElementType::Period,
                is_if_exists: false,
                name: None,
                drop_clustered_constraint_options: Vec::new(),
                span: self.span_from(start),
            });
        } else {
            TableElementType::NotSpecified
        };
        let is_if_exists = self.parse_if_exists();
        let name = self.parse_identifier()?;
        let drop_clustered_constraint_options =
            self.parse_with_option_list(Self::parse_index_option)?;
        Ok(AlterTableDropTableElement {
            table_element_type,
            is_if_exists,
            name: Some(name),
            drop_clustered_constraint_options,
            span: self.span_from(start),
        })
    }

    /// `SWITCH [PARTITION n] TO target [PARTITION n] [WITH (…)]`
    fn parse_alter_table_switch(&mut self, start: Span) -> Result<AlterTableSwitch, ParseError> {
        let source_partition = if self.eat_word("PARTITION") {
            Some(self.parse_scalar_expression()?)
        } else {
            None
        };
        self.expect_keyword(Keyword::To)?;
        let target_table = self.parse_schema_object_name()?;
        let target_partition = if self.eat_word("PARTITION") {
            Some(self.parse_scalar_expression()?)
        } else {
            None
        };
        let options = self.parse_with_option_list(|p| {
            p.parse_general_option::<TableSwitchOption>("SWITCH")
        })?;
        Ok(AlterTableSwitch {
            source_partition,
            target_table,
            target_partition,
            options,
            span: self.span_from(start),
        })
    }

    /// Optional `PARTITION = ALL | n` (or `PARTITION n`).
    fn parse_partition_specifier(&mut self) -> Result<Option<PartitionSpecifier>, ParseError> {
        let start = self.current.span;
        if !self.eat_word("PARTITION") {
            return Ok(None);
        }
        self.eat(&TokenKind::Eq);
        let (all, number) = if self.eat_keyword(Keyword::All) {
            (true, None)
        } else {
            (false, Some(self.parse_scalar_expression()?))
        };
        Ok(Some(PartitionSpecifier {
            all,
            number,
            span: self.span_from(start),
        }))
    }

    // --- Table definitions ---

    /// `( element, … )`
    pub(super) fn parse_table_definition(&mut self) -> Result<TableDefinition, ParseError> {
        let start = self.expect(&TokenKind::LeftParen)?;
        let elements = self.parse_comma_separated(Self::parse_table_element)?;
        self.expect(&TokenKind::RightParen)?;
        Ok(TableDefinition {
            elements,
            span: self.span_from(start),
        })
    }

    /// Unparenthesized elements after `ALTER TABLE … ADD`.
    fn parse_table_elements(&mut self, start: Span) -> Result<TableDefinition, ParseError> {
        let elements = self.parse_comma_separated(Self::parse_table_element)?;
        let span = match (elements.first(), elements.last()) {
            (Some(first), Some(last)) => first.span().merge(last.span()),
            _ => start,
        };
        Ok(TableDefinition { elements, span })
    }

    fn parse_table_element(&mut self) -> Result<TableElement, ParseError> {
        let start = self.current.span;
        if self.check_keyword(Keyword::Index) {
            return self.parse_index_definition().map(TableElement::Index);
        }
        if self.eat_words(&["PERIOD", "FOR", "SYSTEM_TIME"]) {
            self.expect(&TokenKind::LeftParen)?;
            let start_time_column = self.parse_identifier()?;
            self.expect(&TokenKind::Comma)?;
            let end_time_column = self.parse_identifier()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(TableElement::Period(SystemTimePeriodDefinition {
                start_time_column,
                end_time_column,
                span: self.span_from(start),
            }));
        }
        if self.check_table_constraint_start() {
            let constraint_identifier = self.parse_constraint_name()?;
            return self
                .parse_constraint(constraint_identifier, start, false)
                .map(TableElement::Constraint);
        }
        self.parse_column_definition().map(TableElement::Column)
    }

    fn check_table_constraint_start(&mut self) -> bool {
        self.check_keyword(Keyword::Constraint)
            || self.check_keyword(Keyword::Primary)
            || self.check_keyword(Keyword::Unique)
            || self.check_keyword(Keyword::Foreign)
            || self.check_keyword(Keyword::Check)
            || (self.check_word("CONNECTION") && self.peek_is(1, &TokenKind::LeftParen))
    }

    /// Optional `CONSTRAINT name`.
    fn parse_constraint_name(&mut self) -> Result<Option<Identifier>, ParseError> {
        if self.eat_keyword(Keyword::Constraint) {
            return self.parse_identifier().map(Some);
        }
        Ok(None)
    }

    /// `name { type | AS expr [PERSISTED] } [column attributes and
    /// constraints …]`
    fn parse_column_definition(&mut self) -> Result<ColumnDefinition, ParseError> {
        let column_identifier = self.parse_identifier()?;
        let start = column_identifier.span;
        let mut column = ColumnDefinition {
            column_identifier,
            data_type: None,
            computed_column_expression: None,
            is_persisted: false,
            collation: None,
            is_file_stream: false,
            is_sparse: false,
            generated_always: None,
            is_hidden: false,
            is_row_guid_col: false,
            constraints: Vec::new(),
            index: None,
            span: start,
        };
        if self.eat_keyword(Keyword::As) {
            column.computed_column_expression = Some(self.parse_scalar_expression()?);
            column.is_persisted = self.eat_word("PERSISTED");
        } else if !self.check(&TokenKind::Comma) && !self.check(&TokenKind::RightParen) {
            column.data_type = Some(self.parse_data_type()?);
        }
        while self.parse_column_attribute(&mut column)? {}
        column.span = self.span_from(start);
        Ok(column)
    }

    /// Parses one column attribute or constraint into `column`; returns
    /// false when none follows.
    fn parse_column_attribute(
        &mut self,
        column: &mut ColumnDefinition,
    ) -> Result<bool, ParseError> {
        let start = self.current.span;
        if self.eat_word("FILESTREAM") {
            column.is_file_stream = true;
        } else if self.eat_keyword(Keyword::Collate) {
            column.collation = Some(self.parse_identifier()?);
        } else if self.eat_word("SPARSE") {
            column.is_sparse = true;
        } else if self.eat_word("HIDDEN") {
            column.is_hidden = true;
        } else if self.eat_keyword(Keyword::RowGuidCol) {
            column.is_row_guid_col = true;
        } else if self.check_word("GENERATED") && self.peek_word(1, "ALWAYS") {
            self.advance();
            self.advance();
            column.generated_always = Some(self.parse_generated_always_type()?);
            column.is_hidden |= self.eat_word("HIDDEN");
        } else if self.eat_word("MASKED") {
            let masking_function = self.parse_masking_function()?;
            column.constraints.push(ColumnConstraint::Masked(MaskedWithDefinition {
                masking_function,
                span: self.span_from(start),
            }));
        } else if self.check_word("ENCRYPTED") && self.peek_keyword(1, Keyword::With) {
            self.advance();
            self.advance();
            let parameters = self.parse_option_list(|p| {
                p.parse_general_option::<ColumnEncryptionParameter>("column encryption")
            })?;
            column.constraints.push(ColumnConstraint::Encrypted(ColumnEncryptionDefinition {
                parameters,
                span: self.span_from(start),
            }));
        } else if self.eat_keyword(Keyword::Identity) {
            let identity = self.parse_identity_options(start)?;
            column.constraints.push(ColumnConstraint::Identity(identity));
        } else if self.check_keyword(Keyword::Index) {
            column.index = Some(self.parse_index_definition()?);
        } else if self.check_keyword(Keyword::Null)
            || (self.check_keyword(Keyword::Not) && self.peek_keyword(1, Keyword::Null))
        {
            let nullable = self.parse_nullability().unwrap_or(true);
            column.constraints.push(ColumnConstraint::Constraint(
                ConstraintDefinition::Nullable(NullableConstraintDefinition {
                    nullable,
                    span: self.span_from(start),
                }),
            ));
        } else if self.check_keyword(Keyword::Constraint)
            || self.check_keyword(Keyword::Default)
            || self.check_keyword(Keyword::Primary)
            || self.check_keyword(Keyword::Unique)
            || self.check_keyword(Keyword::Foreign)
            || self.check_keyword(Keyword::References)
            || self.check_keyword(Keyword::Check)
        {
            let constraint_identifier = self.parse_constraint_name()?;
            if constraint_identifier.is_some()
                && (self.check_keyword(Keyword::Null) || self.check_keyword(Keyword::Not))
            {
                let nullable = self.parse_nullability().unwrap_or(true);
                column.constraints.push(ColumnConstraint::Constraint(
                    ConstraintDefinition::Nullable(NullableConstraintDefinition {
                        nullable,
                        span: self.span_from(start),
                    }),
                ));
                return Ok(true);
            }
            let constraint = self.parse_constraint(constraint_identifier, start, true)?;
            column.constraints.push(ColumnConstraint::Constraint(constraint));
        } else {
            return Ok(false);
        }
        Ok(true)
    }

    /// `ROW | TRANSACTION_ID | SEQUENCE_NUMBER  START | END` after
    /// `GENERATED ALWAYS AS`.
    fn parse_generated_always_type(&mut self) -> Result<GeneratedAlwaysType, ParseError> {
        self.expect_keyword(Keyword::As)?;
        let kind = if self.eat_word("ROW") {
            0
        } else if self.eat_word("TRANSACTION_ID") {
            1
        } else if self.eat_word("SEQUENCE_NUMBER") {
            2
        } else {
            return Err(self.unexpected(&["ROW", "TRANSACTION_ID", "SEQUENCE_NUMBER"]));
        };
        let is_start = if self.eat_word("START") {
            true
        } else {
            self.expect_keyword(Keyword::End)?;
            false
        };
        Ok(match (kind, is_start) {
            (0, true) => GeneratedAlwaysType::RowStart,
            (0, false) => GeneratedAlwaysType::RowEnd,
            (1, true) => GeneratedAlwaysType::TransactionIdStart,
            (1, false) => GeneratedAlwaysType::TransactionIdEnd,
            (_, true) => GeneratedAlwaysType::SequenceNumberStart,
            (_, false) => GeneratedAlwaysType::SequenceNumberEnd,
        })
    }

    /// `WITH (FUNCTION = 'mask()')` after `MASKED`.
    fn parse_masking_function(&mut self) -> Result<Literal, ParseError> {
        self.expect_keyword(Keyword::With)?;
        self.expect(&TokenKind::LeftParen)?;
        self.expect_keyword(Keyword::Function)?;
        self.expect(&TokenKind::Eq)?;
        let function = self.parse_string_literal()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(function)
    }

    /// `[(seed, increment)] [NOT FOR REPLICATION]` after `IDENTITY`.
    fn parse_identity_options(&mut self, start: Span) -> Result<IdentityOptions, ParseError> {
        let (identity_seed, identity_increment) = if self.eat(&TokenKind::LeftParen) {
            let seed = self.parse_scalar_expression()?;
            self.expect(&TokenKind::Comma)?;
            let increment = self.parse_scalar_expression()?;
            self.expect(&TokenKind::RightParen)?;
            (Some(seed), Some(increment))
        } else {
            (None, None)
        };
        let not_for_replication = self.eat_words(&["NOT", "FOR", "REPLICATION"]);
        Ok(IdentityOptions {
            identity_seed,
            identity_increment,
            not_for_replication,
            span: self.span_from(start),
        })
    }

    /// A constraint body after an optional `CONSTRAINT name`. Column-level
    /// constraints omit their column lists.
    fn parse_constraint(
        &mut self,
        constraint_identifier: Option<Identifier>,
        start: Span,
        column_level: bool,
    ) -> Result<ConstraintDefinition, ParseError> {
        if self.eat_keyword(Keyword::Default) {
            let expression = self.parse_scalar_expression()?;
            let column = if !column_level && self.eat_keyword(Keyword::For) {
                Some(self.parse_identifier()?)
            } else {
                None
            };
            let with_values = self.eat_words(&["WITH", "VALUES"]);
            return Ok(ConstraintDefinition::Default(DefaultConstraintDefinition {
                constraint_identifier,
                expression,
                column,
                with_values,
                span: self.span_from(start),
            }));
        }
        if self.check_keyword(Keyword::Primary) || self.check_keyword(Keyword::Unique) {
            return self
                .parse_unique_constraint(constraint_identifier, start)
                .map(ConstraintDefinition::Unique);
        }
        if self.check_keyword(Keyword::Foreign) || self.check_keyword(Keyword::References) {
            return self
                .parse_foreign_key_constraint(constraint_identifier, start, column_level)
                .map(ConstraintDefinition::ForeignKey);
        }
        if self.eat_keyword(Keyword::Check) {
            let not_for_replication = self.eat_words(&["NOT", "FOR", "REPLICATION"]);
            self.expect(&TokenKind::LeftParen)?;
            let check_condition = self.parse_boolean_expression()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(ConstraintDefinition::Check(CheckConstraintDefinition {
                constraint_identifier,
                not_for_replication,
                check_condition,
                span: self.span_from(start),
            }));
        }
        if self.eat_word("CONNECTION") {
            let from_node_to_node_list = self.parse_parenthesized_list(|p| {
                let start = p.current.span;
                let from_node = p.parse_schema_object_name()?;
                p.expect_keyword(Keyword::To)?;
                let to_node = p.parse_schema_object_name()?;
                Ok(GraphConnectionBetweenNodes {
                    from_node,
                    to_node,
                    span: p.span_from(start),
                })
            })?;
            let delete_action = self.parse_referential_action(Keyword::Delete)?;
            return Ok(ConstraintDefinition::Connection(GraphConnectionConstraintDefinition {
                constraint_identifier,
                from_node_to_node_list,
                delete_action,
                span: self.span_from(start),
            }));
        }
        Err(self.unexpected(&["DEFAULT", "PRIMARY KEY", "UNIQUE", "FOREIGN KEY", "CHECK"]))
    }

    /// `PRIMARY KEY | UNIQUE [CLUSTERED | NONCLUSTERED [HASH]] [(cols)]
    /// [WITH …] [ON …] [NOT ENFORCED]`
    fn parse_unique_constraint(
        &mut self,
        constraint_identifier: Option<Identifier>,
        start: Span,
    ) -> Result<UniqueConstraintDefinition, ParseError> {
        let is_primary_key = if self.eat_keyword(Keyword::Primary) {
            self.expect_keyword(Keyword::Key)?;
            true
        } else {
            self.expect_keyword(Keyword::Unique)?;
            false
        };
        let index_type = self.parse_index_type_kind();
        let columns = if self.check(&TokenKind::LeftParen) {
            self.parse_parenthesized_list(Self::parse_column_with_sort_order)?
        } else {
            Vec::new()
        };
        let index_options = self.parse_constraint_index_options()?;
        let on_file_group_or_partition_scheme = if self.eat_keyword(Keyword::On) {
            Some(self.parse_file_group_or_partition_scheme()?)
        } else {
            None
        };
        let is_enforced = if self.eat_words(&["NOT", "ENFORCED"]) {
            Some(false)
        } else {
            None
        };
        Ok(UniqueConstraintDefinition {
            constraint_identifier,
            is_primary_key,
            index_type,
            columns,
            index_options,
            on_file_group_or_partition_scheme,
            is_enforced,
            span: self.span_from(start),
        })
    }

    /// `WITH (…)` or the legacy `WITH FILLFACTOR = n`.
    fn parse_constraint_index_options(&mut self) -> Result<Vec<IndexOption>, ParseError> {
        if self.check_keyword(Keyword::With) && self.peek_keyword(1, Keyword::FillFactor) {
            self.advance();
            return self.parse_index_option().map(|option| vec![option]);
        }
        self.parse_with_option_list(Self::parse_index_option)
    }

    /// `[FOREIGN KEY (cols)] REFERENCES t [(cols)] [ON DELETE …]
    /// [ON UPDATE …] [NOT FOR REPLICATION]`
    fn parse_foreign_key_constraint(
        &mut self,
        constraint_identifier: Option<Identifier>,
        start: Span,
        column_level: bool,
    ) -> Result<ForeignKeyConstraintDefinition, ParseError> {
        let mut columns = Vec::new();
        if self.eat_keyword(Keyword::Foreign) {
            self.expect_keyword(Keyword::Key)?;
            if !column_level || self.check(&TokenKind::LeftParen) {
                columns = self.parse_identifier_list()?;
            }
        }
        self.expect_keyword(Keyword::References)?;
        let reference_table_name = self.parse_schema_object_name()?;
        let referenced_table_columns = if self.check(&TokenKind::LeftParen) {
            self.parse_identifier_list()?
        } else {
            Vec::new()
        };
        let mut delete_action = DeleteUpdateAction::NotSpecified;
        let mut update_action = DeleteUpdateAction::NotSpecified;
        while self.check_keyword(Keyword::On) {
            if self.peek_keyword(1, Keyword::Delete) {
                delete_action = self.parse_referential_action(Keyword::Delete)?;
            } else if self.peek_keyword(1, Keyword::Update) {
                update_action = self.parse_referential_action(Keyword::Update)?;
            } else {
                break;
            }
        }
        let not_for_replication = self.eat_words(&["NOT", "FOR", "REPLICATION"]);
        Ok(ForeignKeyConstraintDefinition {
            constraint_identifier,
            columns,
            reference_table_name,
            referenced_table_columns,
            delete_action,
            update_action,
            not_for_replication,
            span: self.span_from(start),
        })
    }

    /// Optional `ON DELETE | ON UPDATE  NO ACTION | CASCADE | SET NULL |
    /// SET DEFAULT`.
    fn parse_referential_action(
        &mut self,
        event: Keyword,
    ) -> Result<DeleteUpdateAction, ParseError> {
        if !(self.check_keyword(Keyword::On) && self.peek_keyword(1, event)) {
            return Ok(DeleteUpdateAction::NotSpecified);
        }
        self.advance();
        self.advance();
        if self.eat_words(&["NO", "ACTION"]) {
            return Ok(DeleteUpdateAction::NoAction);
        }
        if self.eat_keyword(Keyword::Cascade) {
            return Ok(DeleteUpdateAction::Cascade);
        }
        if self.eat_keyword(Keyword::Set) {
            if self.eat_keyword(Keyword::Null) {
                return Ok(DeleteUpdateAction::SetNull);
            }
            self.expect_keyword(Keyword::Default)?;
            return Ok(DeleteUpdateAction::SetDefault);
        }
        Err(self.unexpected(&["NO ACTION", "CASCADE", "SET NULL", "SET DEFAULT"]))
    }

    /// `INDEX name [UNIQUE] [CLUSTERED | NONCLUSTERED] [HASH | COLUMNSTORE]
    /// [(cols)] [INCLUDE (…)] [WHERE …] [WITH (…)] [ON …]
    /// [FILESTREAM_ON …]`
    fn parse_index_definition(&mut self) -> Result<IndexDefinition, ParseError> {
        let start = self.expect_keyword(Keyword::Index)?;
        let name = self.parse_identifier()?;
        let unique = self.eat_keyword(Keyword::Unique);
        let index_type = self.parse_index_type_kind();
        let columns = if self.check(&TokenKind::LeftParen) {
            self.parse_parenthesized_list(Self::parse_column_with_sort_order)?
        } else {
            Vec::new()
        };
        let include_columns = self.parse_include_columns()?;
        let filter_predicate = if self.eat_keyword(Keyword::Where) {
            Some(self.parse_boolean_expression()?)
        } else {
            None
        };
        let index_options = self.parse_with_option_list(Self::parse_index_option)?;
        let on_file_group_or_partition_scheme = if self.eat_keyword(Keyword::On) {
            Some(self.parse_file_group_or_partition_scheme()?)
        } else {
            None
        };
        let file_stream_on = if self.eat_word("FILESTREAM_ON") {
            Some(self.parse_file_group_name()?)
        } else {
            None
        };
        Ok(IndexDefinition {
            name,
            unique,
            index_type,
            columns,
            include_columns,
            filter_predicate,
            index_options,
            on_file_group_or_partition_scheme,
            file_stream_on,
            span: self.span_from(start),
        })
    }

    /// Optional `CLUSTERED | NONCLUSTERED [HASH] | [NON]CLUSTERED COLUMNSTORE
    /// | HASH`.
    fn parse_index_type_kind(&mut self) -> Option<IndexTypeKind> {
        let clustered = if self.eat_keyword(Keyword::Clustered) {
            Some(true)
        } else if self.eat_keyword(Keyword::NonClustered) {
            Some(false)
        } else {
            None
        };
        if self.eat_word("COLUMNSTORE") {
            return Some(if clustered == Some(true) {
                IndexTypeKind::ClusteredColumnStore
            } else {
                IndexTypeKind::NonClusteredColumnStore
            });
        }
        if self.eat_word("HASH") {
            return Some(IndexTypeKind::NonClusteredHash);
        }
        clustered.map(|c| {
            if c {
                IndexTypeKind::Clustered
            } else {
                IndexTypeKind::NonClustered
            }
        })
    }

    fn parse_include_columns(
        &mut self,
    ) -> Result<Vec<ColumnReferenceExpression>, ParseError> {
        if self.eat_word("INCLUDE") {
            return self.parse_parenthesized_list(Self::parse_column_reference);
        }
        Ok(Vec::new())
    }

    /// `column [ASC | DESC]`
    pub(super) fn parse_column_with_sort_order(
        &mut self,
    ) -> Result<ColumnWithSortOrder, ParseError> {
        let column = self.parse_column_reference()?;
        let start = column.span;
        let sort_order = if self.eat_keyword(Keyword::Asc) {
            SortOrder::Ascending
        } else if self.eat_keyword(Keyword::Desc) {
            SortOrder::Descending
        } else {
            SortOrder::NotSpecified
        };
        Ok(ColumnWithSortOrder {
            column,
            sort_order,
            span: self.span_from(start),
        })
    }

    /// `fg | scheme (column) | "default"` after `ON`.
    pub(super) fn parse_file_group_or_partition_scheme(
        &mut self,
    ) -> Result<FileGroupOrPartitionScheme, ParseError> {
        let start = self.current.span;
        let name = self.parse_file_group_name()?;
        let partition_scheme_columns = if self.check(&TokenKind::LeftParen) {
            self.parse_identifier_list()?
        } else {
            Vec::new()
        };
        Ok(FileGroupOrPartitionScheme {
            name,
            partition_scheme_columns,
            span: self.span_from(start),
        })
    }

    // --- Indexes ---

    /// Returns true at `[UNIQUE] [CLUSTERED | NONCLUSTERED] [COLUMNSTORE]
    /// INDEX`.
    pub(super) fn check_index_start(&mut self) -> bool {
        let mut n = 0;
        if self.peek_keyword(n, Keyword::Unique) {
            n += 1;
        }
        if self.peek_keyword(n, Keyword::Clustered) || self.peek_keyword(n, Keyword::NonClustered)
        {
            n += 1;
        }
        if self.peek_word(n, "COLUMNSTORE") {
            n += 1;
        }
        self.peek_keyword(n, Keyword::Index)
    }

    /// `CREATE [UNIQUE] [CLUSTERED | NONCLUSTERED] INDEX …` or the
    /// columnstore form.
    pub(super) fn parse_create_index_statement(
        &mut self,
        start: Span,
    ) -> Result<Statement, ParseError> {
        let unique = self.eat_keyword(Keyword::Unique);
        let clustered = if self.eat_keyword(Keyword::Clustered) {
            Some(true)
        } else if self.eat_keyword(Keyword::NonClustered) {
            Some(false)
        } else {
            None
        };
        if self.eat_word("COLUMNSTORE") {
            self.expect_keyword(Keyword::Index)?;
            return self
                .parse_create_columnstore_index(start, clustered)
                .map(|s| Statement::CreateColumnStoreIndex(Box::new(s)));
        }
        self.expect_keyword(Keyword::Index)?;
        let name = self.parse_identifier()?;
        self.expect_keyword(Keyword::On)?;
        let on_name = self.parse_schema_object_name()?;
        let columns = self.parse_parenthesized_list(Self::parse_column_with_sort_order)?;
        let include_columns = self.parse_include_columns()?;
        let filter_predicate = if self.eat_keyword(Keyword::Where) {
            Some(self.parse_boolean_expression()?)
        } else {
            None
        };
        let index_options = self.parse_constraint_index_options()?;
        let on_file_group_or_partition_scheme = if self.eat_keyword(Keyword::On) {
            Some(self.parse_file_group_or_partition_scheme()?)
        } else {
            None
        };
        let file_stream_on = if self.eat_word("FILESTREAM_ON") {
            Some(self.parse_file_group_name()?)
        } else {
            None
        };
        Ok(Statement::CreateIndex(Box::new(CreateIndexStatement {
            unique,
            clustered,
            name,
            on_name,
            columns,
            include_columns,
            filter_predicate,
            index_options,
            on_file_group_or_partition_scheme,
            file_stream_on,
            span: self.span_from(start),
        })))
    }

    fn parse_create_columnstore_index(
        &mut self,
        start: Span,
        clustered: Option<bool>,
    ) -> Result<CreateColumnStoreIndexStatement, ParseError> {
        let name = self.parse_identifier()?;
        self.expect_keyword(Keyword::On)?;
        let on_name = self.parse_schema_object_name()?;
        let columns = if self.check(&TokenKind::LeftParen) {
            self.parse_parenthesized_list(Self::parse_column_reference)?
        } else {
            Vec::new()
        };
        let order_columns = if self.eat_keyword(Keyword::Order) {
            self.parse_parenthesized_list(Self::parse_column_reference)?
        } else {
            Vec::new()
        };
        let filter_predicate = if self.eat_keyword(Keyword::Where) {
            Some(self.parse_boolean_expression()?)
        } else {
            None
        };
        let index_options = self.parse_with_option_list(Self::parse_index_option)?;
        let on_file_group_or_partition_scheme = if self.eat_keyword(Keyword::On) {
            Some(self.parse_file_group_or_partition_scheme()?)
        } else {
            None
        };
        Ok(CreateColumnStoreIndexStatement {
            clustered,
            name,
            on_name,
            columns,
            order_columns,
            filter_predicate,
            index_options,
            on_file_group_or_partition_scheme,
            span: self.span_from(start),
        })
    }

    /// `ALTER INDEX name | ALL ON t REBUILD | REORGANIZE | DISABLE | SET |
    /// RESUME | PAUSE | ABORT …`
    pub(super) fn parse_alter_index_statement(
        &mut self,
        start: Span,
    ) -> Result<AlterIndexStatement, ParseError> {
        let (all, name) = if self.eat_keyword(Keyword::All) {
            (true, None)
        } else {
            (false, Some(self.parse_identifier()?))
        };
        self.expect_keyword(Keyword::On)?;
        let on_name = self.parse_schema_object_name()?;
        let alter_index_type = if self.eat_word("REBUILD") {
            AlterIndexType::Rebuild
        } else if self.eat_word("REORGANIZE") {
            AlterIndexType::Reorganize
        } else if self.eat_word("DISABLE") {
            AlterIndexType::Disable
        } else if self.eat_keyword(Keyword::Set) {
            AlterIndexType::Set
        } else if self.eat_word("RESUME") {
            AlterIndexType::Resume
        } else if self.eat_word("PAUSE") {
            AlterIndexType::Pause
        } else if self.eat_word("ABORT") {
            AlterIndexType::Abort
        } else {
            return Err(self.unexpected(&[
                "REBUILD", "REORGANIZE", "DISABLE", "SET", "RESUME", "PAUSE", "ABORT",
            ]));
        };
        let partition = match alter_index_type {
            AlterIndexType::Rebuild | AlterIndexType::Reorganize => {
                self.parse_partition_specifier()?
            }
            _ => None,
        };
        let index_options = if alter_index_type == AlterIndexType::Set {
            self.parse_option_list(Self::parse_index_option)?
        } else {
            self.parse_with_option_list(Self::parse_index_option)?
        };
        Ok(AlterIndexStatement {
            all,
            name,
            on_name,
            alter_index_type,
            partition,
            index_options,
            span: self.span_from(start),
        })
    }

    // --- Option bundles ---

    /// One index option.
    pub(super) fn parse_index_option(&mut self) -> Result<IndexOption, ParseError> {
        let start = self.current.span;
        let (option_kind, _) = self.parse_option_key::<IndexOptionKind>("index")?;
        match option_kind {
            IndexOptionKind::DataCompression | IndexOptionKind::XmlCompression => {
                let compression =
                    self.parse_data_compression_option(start, option_kind.as_str())?;
                Ok(IndexOption::Compression(IndexCompressionOption {
                    option_kind,
                    compression,
                    span: self.span_from(start),
                }))
            }
            _ => {
                let value =
                    self.parse_option_value(option_kind.as_str(), option_kind.value_shape())?;
                Ok(IndexOption::General(GeneralIndexOption {
                    option_kind,
                    value,
                    span: self.span_from(start),
                }))
            }
        }
    }

    /// `= level [ON PARTITIONS (range, …)]` after `DATA_COMPRESSION` or
    /// `XML_COMPRESSION`.
    fn parse_data_compression_option(
        &mut self,
        start: Span,
        option: &str,
    ) -> Result<DataCompressionOption, ParseError> {
        let compression_kind = CompressionKind::from_word(option).unwrap_or(CompressionKind::Data);
        self.expect(&TokenKind::Eq)?;
        let compression_level = self
            .current
            .word()
            .and_then(DataCompressionLevel::from_word)
            .ok_or_else(|| {
                ParseError::invalid_value(
                    option,
                    DataCompressionLevel::WORDS,
                    &self.current,
                )
            })?;
        self.advance();
        let partition_ranges = if self.check_keyword(Keyword::On) && self.peek_word(1, "PARTITIONS")
        {
            self.advance();
            self.advance();
            self.parse_parenthesized_list(Self::parse_literal_range)?
        } else {
            Vec::new()
        };
        Ok(DataCompressionOption {
            compression_kind,
            compression_level,
            partition_ranges,
            span: self.span_from(start),
        })
    }

    /// One table option.
    pub(super) fn parse_table_option(&mut self) -> Result<TableOption, ParseError> {
        let start = self.current.span;
        let (option_kind, _) = self.parse_option_key::<TableOptionKind>("table")?;
        match option_kind {
            TableOptionKind::DataCompression | TableOptionKind::XmlCompression => {
                let compression =
                    self.parse_data_compression_option(start, option_kind.as_str())?;
                Ok(TableOption::Compression(TableCompressionOption {
                    option_kind,
                    compression,
                    span: self.span_from(start),
                }))
            }
            TableOptionKind::Heap
            | TableOptionKind::ClusteredIndex
            | TableOptionKind::ClusteredColumnstoreIndex => {
                self.parse_table_index_option(start, option_kind).map(TableOption::Index)
            }
            TableOptionKind::Distribution => {
                self.require(Feature::TableDistribution, start);
                self.parse_distribution_option(start).map(TableOption::Distribution)
            }
            TableOptionKind::SystemVersioning => self
                .parse_system_versioning_option(start)
                .map(TableOption::SystemVersioning),
            TableOptionKind::Ledger => {
                self.require(Feature::LedgerTables, start);
                self.parse_ledger_option(start).map(TableOption::Ledger)
            }
            _ => {
                let value =
                    self.parse_option_value(option_kind.as_str(), option_kind.value_shape())?;
                Ok(TableOption::General(GeneralTableOption {
                    option_kind,
                    value,
                    span: self.span_from(start),
                }))
            }
        }
    }

    /// `HEAP`, `CLUSTERED COLUMNSTORE INDEX [ORDER (cols)]` or
    /// `CLUSTERED INDEX (cols)`.
    fn parse_table_index_option(
        &mut self,
        start: Span,
        option_kind: TableOptionKind,
    ) -> Result<TableIndexOption, ParseError> {
        let (index_type, columns) = match option_kind {
            TableOptionKind::Heap => (TableIndexType::Heap, Vec::new()),
            TableOptionKind::ClusteredColumnstoreIndex => {
                self.expect_keyword(Keyword::Index)?;
                let columns = if self.eat_keyword(Keyword::Order) {
                    self.parse_parenthesized_list(Self::parse_column_with_sort_order)?
                } else {
                    Vec::new()
                };
                (TableIndexType::ClusteredColumnstore, columns)
            }
            _ => {
                let columns = self.parse_parenthesized_list(Self::parse_column_with_sort_order)?;
                (TableIndexType::Clustered, columns)
            }
        };
        Ok(TableIndexOption {
            option_kind,
            index_type,
            columns,
            span: self.span_from(start),
        })
    }

    /// `= HASH (cols) | ROUND_ROBIN | REPLICATE`
    fn parse_distribution_option(
        &mut self,
        start: Span,
    ) -> Result<TableDistributionOption, ParseError> {
        self.expect(&TokenKind::Eq)?;
        let policy = self
            .current
            .word()
            .and_then(TableDistributionPolicy::from_word)
            .ok_or_else(|| {
                ParseError::invalid_value(
                    "DISTRIBUTION",
                    TableDistributionPolicy::WORDS,
                    &self.current,
                )
            })?;
        self.advance();
        let distribution_columns = if policy == TableDistributionPolicy::Hash {
            self.parse_identifier_list()?
        } else {
            Vec::new()
        };
        Ok(TableDistributionOption {
            option_kind: TableOptionKind::Distribution,
            policy,
            distribution_columns,
            span: self.span_from(start),
        })
    }

    /// `= ON [(HISTORY_TABLE = t, DATA_CONSISTENCY_CHECK = ON | OFF,
    /// HISTORY_RETENTION_PERIOD = n unit | INFINITE)] | OFF`
    fn parse_system_versioning_option(
        &mut self,
        start: Span,
    ) -> Result<SystemVersioningTableOption, ParseError> {
        self.expect(&TokenKind::Eq)?;
        let option_state = self.parse_option_state("SYSTEM_VERSIONING")?;
        let mut history_table = None;
        let mut consistency_check_enabled = OptionState::NotSet;
        let mut retention_period = None;
        if option_state == OptionState::On && self.check(&TokenKind::LeftParen) {
            self.advance();
            loop {
                if self.eat_word("HISTORY_TABLE") {
                    self.expect(&TokenKind::Eq)?;
                    history_table = Some(self.parse_schema_object_name()?);
                } else if self.eat_word("DATA_CONSISTENCY_CHECK") {
                    self.expect(&TokenKind::Eq)?;
                    consistency_check_enabled =
                        self.parse_option_state("DATA_CONSISTENCY_CHECK")?;
                } else if self.eat_word("HISTORY_RETENTION_PERIOD") {
                    self.expect(&TokenKind::Eq)?;
                    retention_period = Some(self.parse_retention_period()?);
                } else {
                    return Err(ParseError::unknown_option("SYSTEM_VERSIONING", &self.current));
                }
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(&TokenKind::RightParen)?;
        }
        Ok(SystemVersioningTableOption {
            option_kind: TableOptionKind::SystemVersioning,
            option_state,
            history_table,
            consistency_check_enabled,
            retention_period,
            span: self.span_from(start),
        })
    }

    /// `INFINITE` or `n DAY[S] | WEEK[S] | MONTH[S] | YEAR[S]`
    fn parse_retention_period(&mut self) -> Result<RetentionPeriodDefinition, ParseError> {
        let start = self.current.span;
        if self.eat_word("INFINITE") {
            return Ok(RetentionPeriodDefinition {
                is_infinity: true,
                duration: None,
                units: None,
                span: start,
            });
        }
        let duration = self.parse_integer_literal()?;
        let units = self.current.word().and_then(ValueUnit::from_word_lenient);
        if units.is_none() {
            return Err(self.unexpected(&["DAYS", "WEEKS", "MONTHS", "YEARS"]));
        }
        self.advance();
        Ok(RetentionPeriodDefinition {
            is_infinity: false,
            duration: Some(duration),
            units,
            span: self.span_from(start),
        })
    }

    /// `= ON [(LEDGER_VIEW = v [(…)], APPEND_ONLY = ON | OFF)] | OFF`
    fn parse_ledger_option(&mut self, start: Span) -> Result<LedgerTableOption, ParseError> {
        self.expect(&TokenKind::Eq)?;
        let option_state = self.parse_option_state("LEDGER")?;
        let mut append_only = OptionState::NotSet;
        let mut ledger_view_option = None;
        if option_state == OptionState::On && self.check(&TokenKind::LeftParen) {
            self.advance();
            loop {
                if self.check_word("LEDGER_VIEW") {
                    let view_start = self.current.span;
                    self.advance();
                    self.expect(&TokenKind::Eq)?;
                    let view_name = self.parse_schema_object_name()?;
                    let options = if self.check(&TokenKind::LeftParen) {
                        self.parse_parenthesized_list(Self::parse_ledger_view_column_option)?
                    } else {
                        Vec::new()
                    };
                    ledger_view_option = Some(LedgerViewOption {
                        view_name,
                        options,
                        span: self.span_from(view_start),
                    });
                } else if self.eat_word("APPEND_ONLY") {
                    self.expect(&TokenKind::Eq)?;
                    append_only = self.parse_option_state("APPEND_ONLY")?;
                } else {
                    return Err(ParseError::unknown_option("LEDGER", &self.current));
                }
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(&TokenKind::RightParen)?;
        }
        Ok(LedgerTableOption {
            option_kind: TableOptionKind::Ledger,
            option_state,
            append_only,
            ledger_view_option,
            span: self.span_from(start),
        })
    }

    fn parse_ledger_view_column_option(&mut self) -> Result<LedgerViewColumnOption, ParseError> {
        let start = self.current.span;
        let option_kind = self
            .current
            .word()
            .and_then(LedgerViewOptionKind::from_word)
            .ok_or_else(|| ParseError::unknown_option("LEDGER_VIEW", &self.current))?;
        self.advance();
        self.expect(&TokenKind::Eq)?;
        let column_name = self.parse_identifier()?;
        Ok(LedgerViewColumnOption {
            option_kind,
            column_name,
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

    fn create_table(sql: &str) -> CreateTableStatement {
        match statement(sql) {
            Statement::CreateTable(stmt) => *stmt,
            other => panic!("expected CREATE TABLE, got {}", other.kind()),
        }
    }

    fn alter_table(sql: &str) -> AlterTableAction {
        match statement(sql) {
            Statement::AlterTable(stmt) => stmt.action,
            other => panic!("expected ALTER TABLE, got {}", other.kind()),
        }
    }

    #[test]
    fn test_create_table_columns() {
        let stmt = create_table(
            "CREATE TABLE dbo.T (id INT NOT NULL PRIMARY KEY, name NVARCHAR(100) NULL)",
        );
        assert_eq!(stmt.schema_object_name.count, 2);
        let definition = stmt.definition.unwrap();
        let columns: Vec<_> = definition.column_definitions().collect();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].nullable(), Some(false));
        assert!(matches!(
            &columns[0].constraints[1],
            ColumnConstraint::Constraint(ConstraintDefinition::Unique(u)) if u.is_primary_key
        ));
        assert_eq!(columns[1].nullable(), Some(true));
    }

    #[test]
    fn test_column_attributes() {
        let stmt = create_table(
            "CREATE TABLE t (
                id INT IDENTITY(1, 1) NOT FOR REPLICATION,
                total AS price * qty PERSISTED,
                code VARCHAR(10) COLLATE Latin1_General_CI_AS SPARSE NULL,
                email VARCHAR(100) MASKED WITH (FUNCTION = 'email()'),
                row_id UNIQUEIDENTIFIER ROWGUIDCOL CONSTRAINT df_row DEFAULT NEWID(),
                valid_from DATETIME2 GENERATED ALWAYS AS ROW START HIDDEN,
                valid_to DATETIME2 GENERATED ALWAYS AS ROW END,
                PERIOD FOR SYSTEM_TIME (valid_from, valid_to)
            )",
        );
        let definition = stmt.definition.unwrap();
        let columns: Vec<_> = definition.column_definitions().collect();
        let identity = columns[0].identity_options().unwrap();
        assert!(identity.not_for_replication);
        assert!(columns[1].is_persisted);
        assert!(columns[1].data_type.is_none());
        assert!(columns[2].is_sparse && columns[2].collation.is_some());
        assert!(matches!(columns[3].constraints[0], ColumnConstraint::Masked(_)));
        assert!(columns[4].is_row_guid_col);
        assert_eq!(columns[5].generated_always, Some(GeneratedAlwaysType::RowStart));
        assert!(columns[5].is_hidden);
        assert!(matches!(definition.elements[7], TableElement::Period(_)));
    }

    #[test]
    fn test_table_constraints() {
        let stmt = create_table(
            "CREATE TABLE o (
                id INT,
                customer_id INT,
                CONSTRAINT pk_o PRIMARY KEY CLUSTERED (id DESC) WITH (FILLFACTOR = 80),
                CONSTRAINT fk_c FOREIGN KEY (customer_id) REFERENCES c (id)
                    ON DELETE CASCADE ON UPDATE NO ACTION,
                CHECK (id > 0),
                INDEX ix_c NONCLUSTERED (customer_id) INCLUDE (id)
            )",
        );
        let definition = stmt.definition.unwrap();
        let constraints: Vec<_> = definition.table_constraints().collect();
        let ConstraintDefinition::Unique(pk) = constraints[0] else {
            panic!("expected primary key");
        };
        assert_eq!(pk.index_type, Some(IndexTypeKind::Clustered));
        assert_eq!(pk.columns[0].sort_order, SortOrder::Descending);
        assert_eq!(pk.index_options.len(), 1);
        let ConstraintDefinition::ForeignKey(fk) = constraints[1] else {
            panic!("expected foreign key");
        };
        assert_eq!(fk.delete_action, DeleteUpdateAction::Cascade);
        assert_eq!(fk.update_action, DeleteUpdateAction::NoAction);
        assert!(matches!(constraints[2], ConstraintDefinition::Check(_)));
        assert_eq!(definition.indexes().count(), 1);
    }

    #[test]
    fn test_table_options() {
        let stmt = create_table(
            "CREATE TABLE t (id INT) WITH (
                SYSTEM_VERSIONING = ON (HISTORY_TABLE = dbo.t_history,
                    HISTORY_RETENTION_PERIOD = 6 MONTHS),
                DATA_COMPRESSION = PAGE ON PARTITIONS (1, 3 TO 5),
                LOCK_ESCALATION = AUTO
            )",
        );
        let kinds: Vec<_> = stmt.options.iter().map(TableOption::option_kind).collect();
        assert_eq!(
            kinds,
            [
                TableOptionKind::SystemVersioning,
                TableOptionKind::DataCompression,
                TableOptionKind::LockEscalation,
            ]
        );
        let TableOption::SystemVersioning(versioning) = &stmt.options[0] else {
            panic!("expected system versioning");
        };
        assert_eq!(
            versioning.retention_period.as_ref().unwrap().units,
            Some(ValueUnit::Months)
        );
        let TableOption::Compression(compression) = &stmt.options[1] else {
            panic!("expected compression");
        };
        assert_eq!(compression.compression.partition_ranges.len(), 2);
    }

    #[test]
    fn test_graph_and_ledger_gates() {
        let options = ParseOptions::default().with_version(SqlVersion::Sql130);
        let mut parser = Parser::new("CREATE TABLE n (id INT) AS NODE", &options);
        let Statement::CreateTable(stmt) = parser.parse_statement().unwrap() else {
            panic!("expected CREATE TABLE");
        };
        assert!(stmt.as_node);
        assert_eq!(parser.diagnostics()[0].code.as_str(), "TSQL4001");

        let mut parser = Parser::new(
            "CREATE TABLE l (id INT) WITH (LEDGER = ON (APPEND_ONLY = ON))",
            &options,
        );
        parser.parse_statement().unwrap();
        assert_eq!(parser.diagnostics().len(), 1);
    }

    #[test]
    fn test_synapse_table_forms() {
        let options = ParseOptions::default().with_version(SqlVersion::AzureSynapse);
        let mut parser = Parser::new(
            "CREATE TABLE dbo.f WITH (DISTRIBUTION = HASH (id), CLUSTERED COLUMNSTORE INDEX) \
             AS SELECT id FROM dbo.s",
            &options,
        );
        let Statement::CreateTable(stmt) = parser.parse_statement().unwrap() else {
            panic!("expected CREATE TABLE");
        };
        assert!(parser.diagnostics().is_empty());
        assert!(stmt.definition.is_none());
        assert!(stmt.select_statement.is_some());
        assert!(matches!(
            &stmt.options[0],
            TableOption::Distribution(d) if d.distribution_columns.len() == 1
        ));
    }

    #[test]
    fn test_alter_table_actions() {
        assert!(matches!(
            alter_table("ALTER TABLE t WITH NOCHECK ADD CONSTRAINT ck CHECK (a > 0)"),
            AlterTableAction::AddTableElement(a)
                if a.existing_row_check == ConstraintEnforcement::NoCheck
        ));
        assert!(matches!(
            alter_table("ALTER TABLE t ADD c INT NULL, d INT"),
            AlterTableAction::AddTableElement(a) if a.definition.elements.len() == 2
        ));
        assert!(matches!(
            alter_table("ALTER TABLE t ALTER COLUMN c NVARCHAR(50) NOT NULL"),
            AlterTableAction::AlterColumn(a)
                if a.alter_column_option == AlterColumnOption::NotNull
        ));
        assert!(matches!(
            alter_table("ALTER TABLE t ALTER COLUMN c ADD MASKED WITH (FUNCTION = 'default()')"),
            AlterTableAction::AlterColumn(a) if a.masking_function.is_some()
        ));
        assert!(matches!(
            alter_table("ALTER TABLE t DROP CONSTRAINT IF EXISTS ck, COLUMN c"),
            AlterTableAction::DropTableElements(d) if d.elements.len() == 2
        ));
        assert!(matches!(
            alter_table("ALTER TABLE t NOCHECK CONSTRAINT ALL"),
            AlterTableAction::ConstraintModification(c) if c.all
        ));
        assert!(matches!(
            alter_table("ALTER TABLE t DISABLE TRIGGER trg"),
            AlterTableAction::TriggerModification(m)
                if m.trigger_enforcement == TriggerEnforcement::Disable
        ));
        assert!(matches!(
            alter_table("ALTER TABLE t SWITCH PARTITION 1 TO t2 PARTITION 1"),
            AlterTableAction::Switch(s) if s.source_partition.is_some()
        ));
        assert!(matches!(
            alter_table("ALTER TABLE t SET (LOCK_ESCALATION = TABLE)"),
            AlterTableAction::Set(_)
        ));
        assert!(matches!(
            alter_table("ALTER TABLE t REBUILD PARTITION = ALL WITH (ONLINE = ON)"),
            AlterTableAction::Rebuild(r) if r.partition.as_ref().is_some_and(|p| p.all)
        ));
        assert!(matches!(
            alter_table("ALTER TABLE t ENABLE CHANGE_TRACKING WITH (TRACK_COLUMNS_UPDATED = ON)"),
            AlterTableAction::ChangeTracking(c) if c.track_columns_updated == Some(true)
        ));
    }

    #[test]
    fn test_create_index_forms() {
        let Statement::CreateIndex(stmt) = statement(
            "CREATE UNIQUE NONCLUSTERED INDEX ix ON dbo.t (a, b DESC) INCLUDE (c) \
             WHERE a IS NOT NULL WITH (ONLINE = ON, MAXDOP = 4) ON ps (a)",
        ) else {
            panic!("expected CREATE INDEX");
        };
        assert!(stmt.unique);
        assert_eq!(stmt.clustered, Some(false));
        assert_eq!(stmt.include_columns.len(), 1);
        assert!(stmt.filter_predicate.is_some());
        assert_eq!(stmt.index_options.len(), 2);
        assert_eq!(
            stmt.on_file_group_or_partition_scheme
                .unwrap()
                .partition_scheme_columns
                .len(),
            1
        );

        assert!(matches!(
            statement("CREATE CLUSTERED COLUMNSTORE INDEX cci ON dbo.t ORDER (a)"),
            Statement::CreateColumnStoreIndex(s) if s.order_columns.len() == 1
        ));
    }

    #[test]
    fn test_alter_index() {
        let Statement::AlterIndex(stmt) = statement(
            "ALTER INDEX ALL ON dbo.t REBUILD PARTITION = 2 WITH (DATA_COMPRESSION = ROW)",
        ) else {
            panic!("expected ALTER INDEX");
        };
        assert!(stmt.all);
        assert!(stmt.partition.is_some());
        assert!(matches!(stmt.index_options[0], IndexOption::Compression(_)));

        assert!(matches!(
            statement("ALTER INDEX ix ON t SET (ALLOW_PAGE_LOCKS = OFF)"),
            Statement::AlterIndex(s) if s.alter_index_type == AlterIndexType::Set
        ));
    }
}
