//! Query expressions and their clauses.

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use super::{
    AssignmentKind, BooleanExpression, CursorId, Identifier, IdentifierOrValueExpression, Literal,
    MultiPartIdentifier, ScalarExpression, SchemaObjectName, TableReference, UniqueRowFilter,
    VariableReference,
};
use crate::lexer::Span;

/// A row-set producing query.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
#[ast(node = QueryExpression)]
pub enum QueryExpression {
    /// `SELECT …`
    Specification(Box<QuerySpecification>),
    /// `a UNION b` and friends.
    Binary(Box<BinaryQueryExpression>),
    /// `( query )`
    Parenthesis(Box<QueryParenthesisExpression>),
}

impl QueryExpression {
    /// Returns the trailing clauses shared by every query form.
    pub fn tail_mut(&mut self) -> QueryTail<'_> {
        match self {
            Self::Specification(q) => QueryTail {
                order_by_clause: &mut q.order_by_clause,
                offset_clause: &mut q.offset_clause,
                for_clause: &mut q.for_clause,
                span: &mut q.span,
            },
            Self::Binary(q) => QueryTail {
                order_by_clause: &mut q.order_by_clause,
                offset_clause: &mut q.offset_clause,
                for_clause: &mut q.for_clause,
                span: &mut q.span,
            },
            Self::Parenthesis(q) => QueryTail {
                order_by_clause: &mut q.order_by_clause,
                offset_clause: &mut q.offset_clause,
                for_clause: &mut q.for_clause,
                span: &mut q.span,
            },
        }
    }
}

/// Mutable access to the `ORDER BY` / `OFFSET` / `FOR` tail of a query.
#[derive(Debug)]
pub struct QueryTail<'a> {
    /// `ORDER BY`.
    pub order_by_clause: &'a mut Option<OrderByClause>,
    /// `OFFSET … FETCH`.
    pub offset_clause: &'a mut Option<OffsetClause>,
    /// `FOR …`.
    pub for_clause: &'a mut Option<ForClause>,
    /// The query's span.
    pub span: &'a mut Span,
}

/// A single `SELECT` block.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct QuerySpecification {
    /// `DISTINCT` / `ALL`.
    pub unique_row_filter: UniqueRowFilter,
    /// `TOP (n) [PERCENT] [WITH TIES]`.
    pub top_row_filter: Option<TopRowFilter>,
    /// The select list.
    pub select_elements: Vec<SelectElement>,
    /// `INTO table`.
    pub into: Option<SchemaObjectName>,
    /// `ON filegroup` after `INTO` (Synapse / SQL 2017+).
    pub on_file_group: Option<Identifier>,
    /// `FROM`.
    pub from_clause: Option<FromClause>,
    /// `WHERE`.
    pub where_clause: Option<WhereClause>,
    /// `GROUP BY`.
    pub group_by_clause: Option<GroupByClause>,
    /// `HAVING`.
    pub having_clause: Option<HavingClause>,
    /// `WINDOW`.
    pub window_clause: Option<WindowClause>,
    /// `ORDER BY`.
    pub order_by_clause: Option<OrderByClause>,
    /// `OFFSET … FETCH`.
    pub offset_clause: Option<OffsetClause>,
    /// `FOR BROWSE | XML | JSON | …`.
    pub for_clause: Option<ForClause>,
    /// Source span.
    pub span: Span,
}

/// Set operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum BinaryQueryExpressionType {
    /// `UNION`
    Union,
    /// `EXCEPT`
    Except,
    /// `INTERSECT`
    Intersect,
}

/// `a UNION [ALL] b`, `a EXCEPT b`, `a INTERSECT b`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BinaryQueryExpression {
    /// Left operand.
    pub first_query_expression: QueryExpression,
    /// The operator.
    pub binary_query_expression_type: BinaryQueryExpressionType,
    /// `ALL` was written.
    pub all: bool,
    /// Right operand.
    pub second_query_expression: QueryExpression,
    /// `ORDER BY` applying to the whole set.
    pub order_by_clause: Option<OrderByClause>,
    /// `OFFSET … FETCH`.
    pub offset_clause: Option<OffsetClause>,
    /// `FOR …`.
    pub for_clause: Option<ForClause>,
    /// Source span.
    pub span: Span,
}

/// `( query )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct QueryParenthesisExpression {
    /// The inner query.
    pub query_expression: QueryExpression,
    /// `ORDER BY`.
    pub order_by_clause: Option<OrderByClause>,
    /// `OFFSET … FETCH`.
    pub offset_clause: Option<OffsetClause>,
    /// `FOR …`.
    pub for_clause: Option<ForClause>,
    /// Source span.
    pub span: Span,
}

/// `TOP (n) [PERCENT] [WITH TIES]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct TopRowFilter {
    /// Row count or percentage.
    pub expression: ScalarExpression,
    /// `PERCENT`.
    pub percent: bool,
    /// `WITH TIES`.
    pub with_ties: bool,
    /// Source span.
    pub span: Span,
}

/// An item of a select list.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum SelectElement {
    /// `expr [AS alias]`
    ScalarExpression(SelectScalarExpression),
    /// `alias = expr`
    AliasAssignment(SelectAliasAssignment),
    /// `*` or `t.*`
    Star(SelectStarExpression),
    /// `@var = expr`
    SetVariable(SelectSetVariable),
}

/// `expr [AS] alias`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SelectScalarExpression {
    /// The value.
    pub expression: ScalarExpression,
    /// The alias.
    pub column_name: Option<IdentifierOrValueExpression>,
    /// Source span.
    pub span: Span,
}

/// `alias = expr`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SelectAliasAssignment {
    /// The alias.
    pub column_name: IdentifierOrValueExpression,
    /// The value.
    pub expression: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// `*` or `qualifier.*`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SelectStarExpression {
    /// The table qualifier.
    pub qualifier: Option<MultiPartIdentifier>,
    /// Source span.
    pub span: Span,
}

/// `@var = expr` or `@var += expr` inside a select list.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SelectSetVariable {
    /// The assigned variable.
    pub variable: VariableReference,
    /// `=`, `+=`, …
    pub assignment_kind: AssignmentKind,
    /// The value.
    pub expression: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// `FROM refs`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct FromClause {
    /// Comma-separated sources.
    pub table_references: Vec<TableReference>,
    /// Source span.
    pub span: Span,
}

/// `WHERE cond` or `WHERE CURRENT OF cursor`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct WhereClause {
    /// The condition.
    pub search_condition: Option<BooleanExpression>,
    /// Positioned update/delete cursor.
    pub cursor: Option<CursorId>,
    /// Source span.
    pub span: Span,
}

/// `GROUP BY … [WITH ROLLUP | WITH CUBE]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct GroupByClause {
    /// `GROUP BY ALL`.
    pub all: bool,
    /// The grouping items.
    pub grouping_specifications: Vec<GroupingSpecification>,
    /// Legacy `WITH ROLLUP` / `WITH CUBE`.
    pub group_by_option: Option<GroupByOption>,
    /// Source span.
    pub span: Span,
}

/// Legacy trailing `GROUP BY` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum GroupByOption {
    /// `WITH ROLLUP`
    Rollup,
    /// `WITH CUBE`
    Cube,
}

/// A grouping item.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum GroupingSpecification {
    /// A plain expression.
    Expression(ExpressionGroupingSpecification),
    /// `ROLLUP (…)`
    Rollup(RollupGroupingSpecification),
    /// `CUBE (…)`
    Cube(CubeGroupingSpecification),
    /// `GROUPING SETS (…)`
    GroupingSets(GroupingSetsGroupingSpecification),
    /// `()`
    GrandTotal(GrandTotalGroupingSpecification),
    /// `(a, b)` inside a grouping construct.
    Composite(CompositeGroupingSpecification),
}

/// A grouping expression.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ExpressionGroupingSpecification {
    /// The expression.
    pub expression: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// `ROLLUP (…)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct RollupGroupingSpecification {
    /// Arguments.
    pub arguments: Vec<GroupingSpecification>,
    /// Source span.
    pub span: Span,
}

/// `CUBE (…)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CubeGroupingSpecification {
    /// Arguments.
    pub arguments: Vec<GroupingSpecification>,
    /// Source span.
    pub span: Span,
}

/// `GROUPING SETS (…)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct GroupingSetsGroupingSpecification {
    /// The sets.
    pub sets: Vec<GroupingSpecification>,
    /// Source span.
    pub span: Span,
}

/// `()`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct GrandTotalGroupingSpecification {
    /// Source span.
    pub span: Span,
}

/// `(a, b)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CompositeGroupingSpecification {
    /// The grouped items.
    pub items: Vec<GroupingSpecification>,
    /// Source span.
    pub span: Span,
}

/// `HAVING cond`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct HavingClause {
    /// The condition.
    pub search_condition: BooleanExpression,
    /// Source span.
    pub span: Span,
}

/// `WINDOW w AS (…), …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct WindowClause {
    /// The named windows.
    pub window_definitions: Vec<WindowDefinition>,
    /// Source span.
    pub span: Span,
}

/// `name AS ([base] [PARTITION BY …] [ORDER BY …] [frame])`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct WindowDefinition {
    /// The window being defined.
    pub window_name: Identifier,
    /// A window this one extends.
    pub ref_window_name: Option<Identifier>,
    /// `PARTITION BY`.
    pub partitions: Vec<ScalarExpression>,
    /// `ORDER BY`.
    pub order_by_clause: Option<OrderByClause>,
    /// `ROWS` / `RANGE`.
    pub window_frame_clause: Option<WindowFrameClause>,
    /// Source span.
    pub span: Span,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum SortOrder {
    /// No direction written.
    NotSpecified,
    /// `ASC`
    Ascending,
    /// `DESC`
    Descending,
}

/// `ORDER BY …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct OrderByClause {
    /// The sort keys.
    pub order_by_elements: Vec<ExpressionWithSortOrder>,
    /// Source span.
    pub span: Span,
}

/// `expr [ASC|DESC]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ExpressionWithSortOrder {
    /// The key.
    pub expression: ScalarExpression,
    /// The direction.
    pub sort_order: SortOrder,
    /// Source span.
    pub span: Span,
}

/// `OFFSET n ROWS [FETCH NEXT m ROWS ONLY]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct OffsetClause {
    /// Rows skipped.
    pub offset_expression: ScalarExpression,
    /// Rows returned.
    pub fetch_expression: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// The `FOR` clause of a query.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum ForClause {
    /// `FOR BROWSE`
    Browse(BrowseForClause),
    /// `FOR READ ONLY`
    ReadOnly(ReadOnlyForClause),
    /// `FOR UPDATE [OF cols]`
    Update(UpdateForClause),
    /// `FOR XML …`
    Xml(XmlForClause),
    /// `FOR JSON …`
    Json(JsonForClause),
}

/// `FOR BROWSE`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BrowseForClause {
    /// Source span.
    pub span: Span,
}

/// `FOR READ ONLY`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ReadOnlyForClause {
    /// Source span.
    pub span: Span,
}

/// `FOR UPDATE [OF col, …]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct UpdateForClause {
    /// Updatable columns.
    pub columns: Vec<MultiPartIdentifier>,
    /// Source span.
    pub span: Span,
}

/// `FOR XML` options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum XmlForClauseOptionKind {
    /// `RAW [('row')]`
    Raw,
    /// `AUTO`
    Auto,
    /// `EXPLICIT`
    Explicit,
    /// `PATH [('row')]`
    Path,
    /// `ELEMENTS`
    Elements,
    /// `ELEMENTS XSINIL`
    ElementsXsiNil,
    /// `ELEMENTS ABSENT`
    ElementsAbsent,
    /// `XMLDATA`
    XmlData,
    /// `XMLSCHEMA [('uri')]`
    XmlSchema,
    /// `BINARY BASE64`
    BinaryBase64,
    /// `TYPE`
    Type,
    /// `ROOT [('name')]`
    Root,
}

/// One `FOR XML` option.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct XmlForClauseOption {
    /// The option.
    pub option_kind: XmlForClauseOptionKind,
    /// Parenthesized argument.
    pub value: Option<Literal>,
    /// Source span.
    pub span: Span,
}

/// `FOR XML mode [, option …]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct XmlForClause {
    /// Mode first, then directives.
    pub options: Vec<XmlForClauseOption>,
    /// Source span.
    pub span: Span,
}

/// `FOR JSON` options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum JsonForClauseOptionKind {
    /// `AUTO`
    Auto,
    /// `PATH`
    Path,
    /// `ROOT [('name')]`
    Root,
    /// `INCLUDE_NULL_VALUES`
    IncludeNullValues,
    /// `WITHOUT_ARRAY_WRAPPER`
    WithoutArrayWrapper,
}

/// One `FOR JSON` option.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct JsonForClauseOption {
    /// The option.
    pub option_kind: JsonForClauseOptionKind,
    /// Parenthesized argument.
    pub value: Option<Literal>,
    /// Source span.
    pub span: Span,
}

/// `FOR JSON mode [, option …]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct JsonForClause {
    /// Mode first, then options.
    pub options: Vec<JsonForClauseOption>,
    /// Source span.
    pub span: Span,
}

/// `OVER ([window] [PARTITION BY …] [ORDER BY …] [frame])` or `OVER w`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct OverClause {
    /// A named window reference.
    pub window_name: Option<Identifier>,
    /// `PARTITION BY`.
    pub partitions: Vec<ScalarExpression>,
    /// `ORDER BY`.
    pub order_by_clause: Option<OrderByClause>,
    /// `ROWS` / `RANGE`.
    pub window_frame_clause: Option<WindowFrameClause>,
    /// Source span.
    pub span: Span,
}

/// `ROWS` or `RANGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum WindowFrameType {
    /// `ROWS`
    Rows,
    /// `RANGE`
    Range,
}

/// `ROWS|RANGE {start | BETWEEN start AND end}`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct WindowFrameClause {
    /// Frame unit.
    pub window_frame_type: WindowFrameType,
    /// Start bound.
    pub top: WindowDelimiter,
    /// End bound, with `BETWEEN`.
    pub bottom: Option<WindowDelimiter>,
    /// Source span.
    pub span: Span,
}

/// Window frame bound kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum WindowDelimiterType {
    /// `UNBOUNDED PRECEDING`
    UnboundedPreceding,
    /// `n PRECEDING`
    ValuePreceding,
    /// `CURRENT ROW`
    CurrentRow,
    /// `n FOLLOWING`
    ValueFollowing,
    /// `UNBOUNDED FOLLOWING`
    UnboundedFollowing,
}

/// A window frame bound.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct WindowDelimiter {
    /// The row count for value bounds.
    pub offset_value: Option<ScalarExpression>,
    /// Bound kind.
    pub window_delimiter_type: WindowDelimiterType,
    /// Source span.
    pub span: Span,
}

/// `WITH [XMLNAMESPACES (…),] cte, …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct WithCtesAndXmlNamespaces {
    /// `XMLNAMESPACES (…)`.
    pub xml_namespaces: Option<XmlNamespaces>,
    /// The CTEs.
    pub common_table_expressions: Vec<CommonTableExpression>,
    /// Source span.
    pub span: Span,
}

/// `XMLNAMESPACES ('uri' AS p, DEFAULT 'uri')`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct XmlNamespaces {
    /// The declarations.
    pub elements: Vec<XmlNamespacesElement>,
    /// Source span.
    pub span: Span,
}

/// One namespace declaration.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct XmlNamespacesElement {
    /// `DEFAULT 'uri'`.
    pub is_default: bool,
    /// The URI.
    pub string: Literal,
    /// The prefix.
    pub identifier: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `name [(cols)] AS (query)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CommonTableExpression {
    /// The CTE name.
    pub expression_name: Identifier,
    /// Column names.
    pub columns: Vec<Identifier>,
    /// The defining query.
    pub query_expression: QueryExpression,
    /// Source span.
    pub span: Span,
}
