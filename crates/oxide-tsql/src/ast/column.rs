//! Table bodies: columns, constraints, inline indexes and periods.
//!
//! A [`TableDefinition`] keeps its elements in one list so columns and
//! table-level constraints stay in the order they were written.

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use super::{
    BooleanExpression, ColumnEncryptionParameter, ColumnReferenceExpression, DataTypeReference,
    Identifier, IdentifierOrValueExpression, IndexOption, Literal, ScalarExpression,
    SchemaObjectName, SortOrder,
};
use crate::lexer::Span;

/// `( element, … )` of `CREATE TABLE`, `CREATE TYPE … AS TABLE` and table
/// variables.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct TableDefinition {
    /// Columns, constraints, indexes and periods in source order.
    pub elements: Vec<TableElement>,
    /// Source span, parentheses included.
    pub span: Span,
}

impl TableDefinition {
    /// Returns the column definitions in source order.
    pub fn column_definitions(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.elements.iter().filter_map(|e| match e {
            TableElement::Column(c) => Some(c),
            _ => None,
        })
    }

    /// Returns the table-level constraints in source order.
    pub fn table_constraints(&self) -> impl Iterator<Item = &ConstraintDefinition> {
        self.elements.iter().filter_map(|e| match e {
            TableElement::Constraint(c) => Some(c),
            _ => None,
        })
    }

    /// Returns the inline index definitions in source order.
    pub fn indexes(&self) -> impl Iterator<Item = &IndexDefinition> {
        self.elements.iter().filter_map(|e| match e {
            TableElement::Index(i) => Some(i),
            _ => None,
        })
    }
}

/// One element of a table body.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum TableElement {
    /// A column.
    Column(ColumnDefinition),
    /// A table-level constraint.
    Constraint(ConstraintDefinition),
    /// `INDEX name (…)`.
    Index(IndexDefinition),
    /// `PERIOD FOR SYSTEM_TIME (start, end)`.
    Period(SystemTimePeriodDefinition),
}

/// Temporal and ledger generated column kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum GeneratedAlwaysType {
    /// `ROW START`
    RowStart,
    /// `ROW END`
    RowEnd,
    /// `TRANSACTION_ID START`
    TransactionIdStart,
    /// `TRANSACTION_ID END`
    TransactionIdEnd,
    /// `SEQUENCE_NUMBER START`
    SequenceNumberStart,
    /// `SEQUENCE_NUMBER END`
    SequenceNumberEnd,
}

/// A column definition.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ColumnDefinition {
    /// The column name.
    pub column_identifier: Identifier,
    /// The type; absent for computed columns.
    pub data_type: Option<DataTypeReference>,
    /// `AS expr` of a computed column.
    pub computed_column_expression: Option<ScalarExpression>,
    /// `PERSISTED`.
    pub is_persisted: bool,
    /// `COLLATE name`.
    pub collation: Option<Identifier>,
    /// `FILESTREAM`.
    pub is_file_stream: bool,
    /// `SPARSE`.
    pub is_sparse: bool,
    /// `GENERATED ALWAYS AS …`.
    pub generated_always: Option<GeneratedAlwaysType>,
    /// `HIDDEN`.
    pub is_hidden: bool,
    /// `ROWGUIDCOL`.
    pub is_row_guid_col: bool,
    /// Constraints and other options after the type, in source order.
    pub constraints: Vec<ColumnConstraint>,
    /// `INDEX name …` on the column.
    pub index: Option<IndexDefinition>,
    /// Source span.
    pub span: Span,
}

impl ColumnDefinition {
    /// Returns the `NULL` / `NOT NULL` setting, if written.
    #[must_use]
    pub fn nullable(&self) -> Option<bool> {
        self.constraints.iter().find_map(|c| match c {
            ColumnConstraint::Constraint(ConstraintDefinition::Nullable(n)) => Some(n.nullable),
            _ => None,
        })
    }

    /// Returns the `IDENTITY` specification, if written.
    #[must_use]
    pub fn identity_options(&self) -> Option<&IdentityOptions> {
        self.constraints.iter().find_map(|c| match c {
            ColumnConstraint::Identity(i) => Some(i),
            _ => None,
        })
    }
}

/// An item after a column's type: a constraint or a column option.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum ColumnConstraint {
    /// `NULL`, `DEFAULT`, `PRIMARY KEY`, `REFERENCES`, `CHECK`, …
    Constraint(ConstraintDefinition),
    /// `IDENTITY [(seed, increment)] [NOT FOR REPLICATION]`.
    Identity(IdentityOptions),
    /// `MASKED WITH (FUNCTION = '…')`.
    Masked(MaskedWithDefinition),
    /// `ENCRYPTED WITH ( … )`.
    Encrypted(ColumnEncryptionDefinition),
}

/// `IDENTITY [(seed, increment)] [NOT FOR REPLICATION]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct IdentityOptions {
    /// The seed.
    pub identity_seed: Option<ScalarExpression>,
    /// The increment.
    pub identity_increment: Option<ScalarExpression>,
    /// `NOT FOR REPLICATION`.
    pub not_for_replication: bool,
    /// Source span.
    pub span: Span,
}

/// `MASKED WITH (FUNCTION = 'partial(1, "X", 1)')`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct MaskedWithDefinition {
    /// The masking function text.
    pub masking_function: Literal,
    /// Source span.
    pub span: Span,
}

/// `ENCRYPTED WITH (COLUMN_ENCRYPTION_KEY = k, ENCRYPTION_TYPE = …, ALGORITHM = '…')`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ColumnEncryptionDefinition {
    /// The parameters.
    pub parameters: Vec<ColumnEncryptionParameter>,
    /// Source span.
    pub span: Span,
}

/// A column or table constraint.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum ConstraintDefinition {
    /// `NULL` / `NOT NULL`.
    Nullable(NullableConstraintDefinition),
    /// `[CONSTRAINT n] DEFAULT expr [FOR col] [WITH VALUES]`.
    Default(DefaultConstraintDefinition),
    /// `PRIMARY KEY` / `UNIQUE`.
    Unique(UniqueConstraintDefinition),
    /// `[FOREIGN KEY (cols)] REFERENCES t (cols)`.
    ForeignKey(ForeignKeyConstraintDefinition),
    /// `CHECK (cond)`.
    Check(CheckConstraintDefinition),
    /// Graph edge `CONNECTION (a TO b, …)`.
    Connection(GraphConnectionConstraintDefinition),
}

impl ConstraintDefinition {
    /// Returns the `CONSTRAINT name`, if written.
    #[must_use]
    pub fn constraint_identifier(&self) -> Option<&Identifier> {
        match self {
            Self::Nullable(_) => None,
            Self::Default(c) => c.constraint_identifier.as_ref(),
            Self::Unique(c) => c.constraint_identifier.as_ref(),
            Self::ForeignKey(c) => c.constraint_identifier.as_ref(),
            Self::Check(c) => c.constraint_identifier.as_ref(),
            Self::Connection(c) => c.constraint_identifier.as_ref(),
        }
    }
}

/// `NULL` / `NOT NULL`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct NullableConstraintDefinition {
    /// `NULL` was written (rather than `NOT NULL`).
    pub nullable: bool,
    /// Source span.
    pub span: Span,
}

/// `[CONSTRAINT n] DEFAULT expr [FOR col] [WITH VALUES]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DefaultConstraintDefinition {
    /// `CONSTRAINT name`.
    pub constraint_identifier: Option<Identifier>,
    /// The default value.
    pub expression: ScalarExpression,
    /// `FOR col` in `ALTER TABLE … ADD`.
    pub column: Option<Identifier>,
    /// `WITH VALUES`.
    pub with_values: bool,
    /// Source span.
    pub span: Span,
}

/// Physical index shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum IndexTypeKind {
    /// `CLUSTERED`
    Clustered,
    /// `NONCLUSTERED`
    NonClustered,
    /// `NONCLUSTERED HASH`
    NonClusteredHash,
    /// `CLUSTERED COLUMNSTORE`
    ClusteredColumnStore,
    /// `NONCLUSTERED COLUMNSTORE`
    NonClusteredColumnStore,
}

/// `ON filegroup`, `ON "default"` or `ON scheme (col)`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct FileGroupOrPartitionScheme {
    /// The filegroup or partition scheme.
    pub name: IdentifierOrValueExpression,
    /// Partitioning columns.
    pub partition_scheme_columns: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

/// A key column with an optional direction.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ColumnWithSortOrder {
    /// The column.
    pub column: ColumnReferenceExpression,
    /// The direction.
    pub sort_order: SortOrder,
    /// Source span.
    pub span: Span,
}

/// `[CONSTRAINT n] PRIMARY KEY | UNIQUE [CLUSTERED | NONCLUSTERED] (cols) …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct UniqueConstraintDefinition {
    /// `CONSTRAINT name`.
    pub constraint_identifier: Option<Identifier>,
    /// `PRIMARY KEY` (rather than `UNIQUE`).
    pub is_primary_key: bool,
    /// `CLUSTERED` / `NONCLUSTERED [HASH]`.
    pub index_type: Option<IndexTypeKind>,
    /// Key columns; empty for the column-level form.
    pub columns: Vec<ColumnWithSortOrder>,
    /// `WITH ( … )` index options.
    pub index_options: Vec<IndexOption>,
    /// `ON …`.
    pub on_file_group_or_partition_scheme: Option<FileGroupOrPartitionScheme>,
    /// `NOT ENFORCED` (Synapse).
    pub is_enforced: Option<bool>,
    /// Source span.
    pub span: Span,
}

/// Referential actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum DeleteUpdateAction {
    /// No action written.
    NotSpecified,
    /// `NO ACTION`
    NoAction,
    /// `CASCADE`
    Cascade,
    /// `SET NULL`
    SetNull,
    /// `SET DEFAULT`
    SetDefault,
}

/// `[CONSTRAINT n] [FOREIGN KEY (cols)] REFERENCES t [(cols)] [ON DELETE …] [ON UPDATE …]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ForeignKeyConstraintDefinition {
    /// `CONSTRAINT name`.
    pub constraint_identifier: Option<Identifier>,
    /// Referencing columns; empty for the column-level form.
    pub columns: Vec<Identifier>,
    /// The referenced table.
    pub reference_table_name: SchemaObjectName,
    /// The referenced columns.
    pub referenced_table_columns: Vec<Identifier>,
    /// `ON DELETE`.
    pub delete_action: DeleteUpdateAction,
    /// `ON UPDATE`.
    pub update_action: DeleteUpdateAction,
    /// `NOT FOR REPLICATION`.
    pub not_for_replication: bool,
    /// Source span.
    pub span: Span,
}

/// `[CONSTRAINT n] CHECK [NOT FOR REPLICATION] (cond)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CheckConstraintDefinition {
    /// `CONSTRAINT name`.
    pub constraint_identifier: Option<Identifier>,
    /// `NOT FOR REPLICATION`.
    pub not_for_replication: bool,
    /// The condition.
    pub check_condition: BooleanExpression,
    /// Source span.
    pub span: Span,
}

/// `from_node TO to_node`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct GraphConnectionBetweenNodes {
    /// The source node table.
    pub from_node: SchemaObjectName,
    /// The target node table.
    pub to_node: SchemaObjectName,
    /// Source span.
    pub span: Span,
}

/// `[CONSTRAINT n] CONNECTION (a TO b, …) [ON DELETE CASCADE]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct GraphConnectionConstraintDefinition {
    /// `CONSTRAINT name`.
    pub constraint_identifier: Option<Identifier>,
    /// The allowed node pairs.
    pub from_node_to_node_list: Vec<GraphConnectionBetweenNodes>,
    /// `ON DELETE`.
    pub delete_action: DeleteUpdateAction,
    /// Source span.
    pub span: Span,
}

/// An inline `INDEX` in a table body or on a column.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct IndexDefinition {
    /// The index name.
    pub name: Identifier,
    /// `UNIQUE`.
    pub unique: bool,
    /// `CLUSTERED`, `NONCLUSTERED [HASH]`, `[NON]CLUSTERED COLUMNSTORE`.
    pub index_type: Option<IndexTypeKind>,
    /// Key columns.
    pub columns: Vec<ColumnWithSortOrder>,
    /// `INCLUDE (cols)`.
    pub include_columns: Vec<ColumnReferenceExpression>,
    /// `WHERE filter`.
    pub filter_predicate: Option<BooleanExpression>,
    /// `WITH ( … )`.
    pub index_options: Vec<IndexOption>,
    /// `ON …`.
    pub on_file_group_or_partition_scheme: Option<FileGroupOrPartitionScheme>,
    /// `FILESTREAM_ON …`.
    pub file_stream_on: Option<IdentifierOrValueExpression>,
    /// Source span.
    pub span: Span,
}

/// `PERIOD FOR SYSTEM_TIME (start_col, end_col)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SystemTimePeriodDefinition {
    /// The period start column.
    pub start_time_column: Identifier,
    /// The period end column.
    pub end_time_column: Identifier,
    /// Source span.
    pub span: Span,
}
