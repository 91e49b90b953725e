//! Data manipulation statements.

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use super::{
    BooleanExpression, BulkInsertOption, ColumnReferenceExpression, ExecuteSpecification,
    FromClause, FunctionCall, IdentifierOrValueExpression, Identifier, Literal, LiteralRange,
    OptionClause, QueryExpression, RowValue, ScalarExpression, SchemaObjectName, SelectElement,
    TableReference, TopRowFilter, VariableReference, WhereClause, WithCtesAndXmlNamespaces,
};
use crate::lexer::Span;

/// Assignment operators of `SET`, `UPDATE … SET` and `SELECT @v = …`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum AssignmentKind {
    /// `=`
    Equals,
    /// `+=`
    AddEquals,
    /// `-=`
    SubtractEquals,
    /// `*=`
    MultiplyEquals,
    /// `/=`
    DivideEquals,
    /// `%=`
    ModEquals,
    /// `&=`
    BitwiseAndEquals,
    /// `|=`
    BitwiseOrEquals,
    /// `^=`
    BitwiseXorEquals,
}

/// `[WITH …] query [OPTION (…)]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SelectStatement {
    /// Leading CTEs and namespaces.
    pub with_ctes_and_xml_namespaces: Option<WithCtesAndXmlNamespaces>,
    /// The query.
    pub query_expression: QueryExpression,
    /// `OPTION ( hints )`.
    pub option_clause: Option<OptionClause>,
    /// Source span.
    pub span: Span,
}

/// The body of an `INSERT`, `UPDATE`, `DELETE` or `MERGE`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum DataModificationSpecification {
    /// `INSERT …`
    Insert(Box<InsertSpecification>),
    /// `UPDATE …`
    Update(Box<UpdateSpecification>),
    /// `DELETE …`
    Delete(Box<DeleteSpecification>),
    /// `MERGE …`
    Merge(Box<MergeSpecification>),
}

/// `OUTPUT elements`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct OutputClause {
    /// The returned columns.
    pub select_columns: Vec<SelectElement>,
    /// Source span.
    pub span: Span,
}

/// `OUTPUT elements INTO target [(cols)]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct OutputIntoClause {
    /// The returned columns.
    pub select_columns: Vec<SelectElement>,
    /// The table or table variable receiving the rows.
    pub into_table: TableReference,
    /// Target columns.
    pub into_table_columns: Vec<ColumnReferenceExpression>,
    /// Source span.
    pub span: Span,
}

/// `INTO` / `OVER` between `INSERT` and the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum InsertOption {
    /// Neither keyword.
    None,
    /// `INTO`
    Into,
    /// `OVER` (Synapse)
    Over,
}

/// `[WITH …] INSERT … [OPTION (…)]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct InsertStatement {
    /// Leading CTEs.
    pub with_ctes_and_xml_namespaces: Option<WithCtesAndXmlNamespaces>,
    /// The insert.
    pub insert_specification: InsertSpecification,
    /// `OPTION ( hints )`.
    pub option_clause: Option<OptionClause>,
    /// Source span.
    pub span: Span,
}

/// `INSERT [TOP (n)] [INTO] target [(cols)] [OUTPUT …] source`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct InsertSpecification {
    /// `TOP (n) [PERCENT]`.
    pub top_row_filter: Option<TopRowFilter>,
    /// `INTO` / `OVER`.
    pub insert_option: InsertOption,
    /// The target.
    pub target: TableReference,
    /// Target columns.
    pub columns: Vec<ColumnReferenceExpression>,
    /// `OUTPUT … INTO …`.
    pub output_into_clause: Option<OutputIntoClause>,
    /// `OUTPUT …`.
    pub output_clause: Option<OutputClause>,
    /// The rows inserted.
    pub insert_source: InsertSource,
    /// Source span.
    pub span: Span,
}

/// Where inserted rows come from.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum InsertSource {
    /// `VALUES (…), …` or `DEFAULT VALUES`.
    Values(ValuesInsertSource),
    /// A query.
    Select(SelectInsertSource),
    /// `EXEC proc …`.
    Execute(Box<ExecuteInsertSource>),
}

/// `VALUES (…), …` or `DEFAULT VALUES`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ValuesInsertSource {
    /// `DEFAULT VALUES`.
    pub is_default_values: bool,
    /// The rows.
    pub row_values: Vec<RowValue>,
    /// Source span.
    pub span: Span,
}

/// A query feeding an insert.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SelectInsertSource {
    /// The query.
    pub select: QueryExpression,
    /// Source span.
    pub span: Span,
}

/// A procedure call feeding an insert.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ExecuteInsertSource {
    /// The call.
    pub execute: ExecuteSpecification,
    /// Source span.
    pub span: Span,
}

/// One assignment of a `SET` list.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum SetClause {
    /// `col = expr`, `@v = expr`, `@v = col = expr`.
    Assignment(AssignmentSetClause),
    /// `col.Method(args)` or `col.WRITE(…)`.
    FunctionCall(FunctionCallSetClause),
}

/// `[@v =] [col] op expr`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AssignmentSetClause {
    /// The assigned variable.
    pub variable: Option<VariableReference>,
    /// The assigned column.
    pub column: Option<ColumnReferenceExpression>,
    /// The operator.
    pub assignment_kind: AssignmentKind,
    /// The value.
    pub new_value: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// `col.Method(args)` in a `SET` list.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct FunctionCallSetClause {
    /// The mutator call.
    pub mutator_function: FunctionCall,
    /// Source span.
    pub span: Span,
}

/// `[WITH …] UPDATE … [OPTION (…)]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct UpdateStatement {
    /// Leading CTEs.
    pub with_ctes_and_xml_namespaces: Option<WithCtesAndXmlNamespaces>,
    /// The update.
    pub update_specification: UpdateSpecification,
    /// `OPTION ( hints )`.
    pub option_clause: Option<OptionClause>,
    /// Source span.
    pub span: Span,
}

/// `UPDATE [TOP (n)] target SET … [OUTPUT …] [FROM …] [WHERE …]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct UpdateSpecification {
    /// `TOP (n) [PERCENT]`.
    pub top_row_filter: Option<TopRowFilter>,
    /// The target.
    pub target: TableReference,
    /// The assignments.
    pub set_clauses: Vec<SetClause>,
    /// `OUTPUT … INTO …`.
    pub output_into_clause: Option<OutputIntoClause>,
    /// `OUTPUT …`.
    pub output_clause: Option<OutputClause>,
    /// `FROM`.
    pub from_clause: Option<FromClause>,
    /// `WHERE`.
    pub where_clause: Option<WhereClause>,
    /// Source span.
    pub span: Span,
}

/// `[WITH …] DELETE … [OPTION (…)]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DeleteStatement {
    /// Leading CTEs.
    pub with_ctes_and_xml_namespaces: Option<WithCtesAndXmlNamespaces>,
    /// The delete.
    pub delete_specification: DeleteSpecification,
    /// `OPTION ( hints )`.
    pub option_clause: Option<OptionClause>,
    /// Source span.
    pub span: Span,
}

/// `DELETE [TOP (n)] [FROM] target [OUTPUT …] [FROM …] [WHERE …]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DeleteSpecification {
    /// `TOP (n) [PERCENT]`.
    pub top_row_filter: Option<TopRowFilter>,
    /// The target.
    pub target: TableReference,
    /// `OUTPUT … INTO …`.
    pub output_into_clause: Option<OutputIntoClause>,
    /// `OUTPUT …`.
    pub output_clause: Option<OutputClause>,
    /// `FROM`.
    pub from_clause: Option<FromClause>,
    /// `WHERE`.
    pub where_clause: Option<WhereClause>,
    /// Source span.
    pub span: Span,
}

/// `[WITH …] MERGE … ; `
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct MergeStatement {
    /// Leading CTEs.
    pub with_ctes_and_xml_namespaces: Option<WithCtesAndXmlNamespaces>,
    /// The merge.
    pub merge_specification: MergeSpecification,
    /// `OPTION ( hints )`.
    pub option_clause: Option<OptionClause>,
    /// Source span.
    pub span: Span,
}

/// `MERGE [TOP (n)] [INTO] target USING source ON cond WHEN … [OUTPUT …]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct MergeSpecification {
    /// `TOP (n) [PERCENT]`.
    pub top_row_filter: Option<TopRowFilter>,
    /// The target.
    pub target: TableReference,
    /// The `USING` source.
    pub table_reference: TableReference,
    /// The `ON` condition.
    pub search_condition: BooleanExpression,
    /// The `WHEN` clauses.
    pub action_clauses: Vec<MergeActionClause>,
    /// `OUTPUT … INTO …`.
    pub output_into_clause: Option<OutputIntoClause>,
    /// `OUTPUT …`.
    pub output_clause: Option<OutputClause>,
    /// Source span.
    pub span: Span,
}

/// The match condition of a `WHEN` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum MergeCondition {
    /// `WHEN MATCHED`
    Matched,
    /// `WHEN NOT MATCHED [BY TARGET]`
    NotMatched,
    /// `WHEN NOT MATCHED BY SOURCE`
    NotMatchedBySource,
}

/// `WHEN [NOT] MATCHED [BY …] [AND cond] THEN action`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct MergeActionClause {
    /// The match condition.
    pub condition: MergeCondition,
    /// `AND cond`.
    pub search_condition: Option<BooleanExpression>,
    /// The action.
    pub action: MergeAction,
    /// Source span.
    pub span: Span,
}

/// What a `WHEN` clause does.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum MergeAction {
    /// `UPDATE SET …`
    Update(UpdateMergeAction),
    /// `DELETE`
    Delete(DeleteMergeAction),
    /// `INSERT [(cols)] VALUES (…) | DEFAULT VALUES`
    Insert(InsertMergeAction),
}

/// `UPDATE SET …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct UpdateMergeAction {
    /// The assignments.
    pub set_clauses: Vec<SetClause>,
    /// Source span.
    pub span: Span,
}

/// `DELETE`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DeleteMergeAction {
    /// Source span.
    pub span: Span,
}

/// `INSERT [(cols)] VALUES (…)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct InsertMergeAction {
    /// Target columns.
    pub columns: Vec<ColumnReferenceExpression>,
    /// The row.
    pub source: ValuesInsertSource,
    /// Source span.
    pub span: Span,
}

/// `TRUNCATE TABLE t [WITH (PARTITIONS (…))]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct TruncateTableStatement {
    /// The table.
    pub table_name: SchemaObjectName,
    /// Partition numbers and ranges.
    pub partition_ranges: Vec<LiteralRange>,
    /// Source span.
    pub span: Span,
}

/// `BULK INSERT t FROM 'file' [WITH ( … )]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BulkInsertStatement {
    /// The target table.
    pub to: SchemaObjectName,
    /// The data file.
    pub from: IdentifierOrValueExpression,
    /// The options.
    pub options: Vec<BulkInsertOption>,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// `UPDATE STATISTICS … WITH` option names.
    pub enum StatisticsOptionKind {
        All = "ALL" => Flag,
        AutoDrop = "AUTO_DROP" => OnOff,
        Columns = "COLUMNS" => Flag,
        FullScan = "FULLSCAN" => Flag,
        Incremental = "INCREMENTAL" => OnOff,
        Index = "INDEX" => Flag,
        MaxDop = "MAXDOP" => Integer,
        NoRecompute = "NORECOMPUTE" => Flag,
        PersistSamplePercent = "PERSIST_SAMPLE_PERCENT" => OnOff,
        Resample = "RESAMPLE" => Flag,
        Sample = "SAMPLE" => Custom,
        StatsStream = "STATS_STREAM" => Literal,
    }
}

general_option! {
    /// A statistics option whose value follows the kind's shape.
    GeneralStatisticsOption, StatisticsOptionKind
}

/// `PERCENT` / `ROWS` after a sample size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum SampleUnit {
    /// `PERCENT`
    Percent,
    /// `ROWS`
    Rows,
}

/// `SAMPLE n PERCENT | ROWS`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SampleStatisticsOption {
    /// Always [`StatisticsOptionKind::Sample`].
    pub option_kind: StatisticsOptionKind,
    /// The sample size.
    pub sample: Literal,
    /// The unit.
    pub unit: SampleUnit,
    /// Source span.
    pub span: Span,
}

/// One `UPDATE STATISTICS` option.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum StatisticsOption {
    /// `NAME [= value]`.
    General(GeneralStatisticsOption),
    /// `SAMPLE n PERCENT | ROWS`.
    Sample(SampleStatisticsOption),
}

impl StatisticsOption {
    /// Returns the option's kind.
    #[must_use]
    pub const fn option_kind(&self) -> StatisticsOptionKind {
        match self {
            Self::General(o) => o.option_kind,
            Self::Sample(o) => o.option_kind,
        }
    }
}

/// `UPDATE STATISTICS t [stat | (stat, …)] [WITH …]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct UpdateStatisticsStatement {
    /// The table or indexed view.
    pub schema_object_name: SchemaObjectName,
    /// Named statistics or indexes.
    pub sub_elements: Vec<Identifier>,
    /// The options.
    pub statistics_options: Vec<StatisticsOption>,
    /// Source span.
    pub span: Span,
}
