//! Scalar expression AST types.

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use super::{
    BooleanExpression, DataTypeReference, Identifier, Literal, MultiPartIdentifier, OrderByClause,
    OverClause, QueryExpression, SchemaObjectName,
};
use crate::lexer::Span;

/// Anything that produces a single value.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
#[ast(node = ScalarExpression)]
pub enum ScalarExpression {
    /// A literal value.
    Literal(Literal),
    /// A column name or pseudo column.
    ColumnReference(ColumnReferenceExpression),
    /// `@local`
    Variable(VariableReference),
    /// `@@global`
    GlobalVariable(GlobalVariableExpression),
    /// A function call, possibly with an `OVER` clause.
    FunctionCall(Box<FunctionCall>),
    /// `CURRENT_TIMESTAMP`, `USER` and similar.
    ParameterlessCall(ParameterlessCall),
    /// `CAST` / `TRY_CAST`.
    Cast(Box<CastCall>),
    /// `CONVERT` / `TRY_CONVERT`.
    Convert(Box<ConvertCall>),
    /// `PARSE` / `TRY_PARSE`.
    Parse(Box<ParseCall>),
    /// `COALESCE(…)`.
    Coalesce(CoalesceExpression),
    /// `NULLIF(a, b)`.
    NullIf(Box<NullIfExpression>),
    /// `IIF(cond, a, b)`.
    Iif(Box<IifCall>),
    /// `CASE WHEN cond THEN …`.
    SearchedCase(Box<SearchedCaseExpression>),
    /// `CASE x WHEN v THEN …`.
    SimpleCase(Box<SimpleCaseExpression>),
    /// Arithmetic, bitwise or concatenation operator.
    Binary(Box<BinaryExpression>),
    /// Prefix `+`, `-` or `~`.
    Unary(Box<UnaryExpression>),
    /// `( expr )`
    Parenthesis(Box<ParenthesisExpression>),
    /// `( SELECT … )` used as a value.
    ScalarSubquery(Box<ScalarSubquery>),
    /// `NEXT VALUE FOR seq`.
    NextValueFor(Box<NextValueForExpression>),
    /// `expr AT TIME ZONE tz`.
    AtTimeZone(Box<AtTimeZoneCall>),
    /// `expr COLLATE name`.
    Collate(Box<CollateExpression>),
    /// `{fn name(args)}`.
    OdbcFunctionCall(OdbcFunctionCall),
    /// `type::Method(args)`.
    StaticMethodCall(Box<StaticMethodCall>),
    /// `type::Property`.
    StaticPropertyAccess(Box<StaticPropertyAccess>),
    /// `IDENTITY(type, seed, increment)` in `SELECT … INTO`.
    IdentityFunctionCall(Box<IdentityFunctionCall>),
    /// `$PARTITION.pf(expr)`.
    PartitionFunctionCall(PartitionFunctionCall),
}

/// What a column reference names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum ColumnType {
    /// An ordinary column.
    Regular,
    /// `*` inside a function call such as `COUNT(*)`.
    Wildcard,
    /// `IDENTITYCOL`
    IdentityCol,
    /// `ROWGUIDCOL`
    RowGuidCol,
    /// `$ACTION`
    PseudoColumnAction,
    /// `$IDENTITY`
    PseudoColumnIdentity,
    /// `$ROWGUID`
    PseudoColumnRowGuid,
    /// `$CUID`
    PseudoColumnCuid,
    /// `$NODE_ID`
    PseudoColumnGraphNodeId,
    /// `$EDGE_ID`
    PseudoColumnGraphEdgeId,
    /// `$FROM_ID`
    PseudoColumnGraphFromId,
    /// `$TO_ID`
    PseudoColumnGraphToId,
}

impl ColumnType {
    /// Maps a `$`-prefixed pseudo column spelling to its kind.
    #[must_use]
    pub fn pseudo_column(word: &str) -> Option<Self> {
        match word.to_ascii_uppercase().as_str() {
            "$ACTION" => Some(Self::PseudoColumnAction),
            "$IDENTITY" => Some(Self::PseudoColumnIdentity),
            "$ROWGUID" => Some(Self::PseudoColumnRowGuid),
            "$CUID" => Some(Self::PseudoColumnCuid),
            "$NODE_ID" => Some(Self::PseudoColumnGraphNodeId),
            "$EDGE_ID" => Some(Self::PseudoColumnGraphEdgeId),
            "$FROM_ID" => Some(Self::PseudoColumnGraphFromId),
            "$TO_ID" => Some(Self::PseudoColumnGraphToId),
            _ => None,
        }
    }
}

/// A column reference such as `t.col`, `IDENTITYCOL` or `$ACTION`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ColumnReferenceExpression {
    /// The column kind.
    pub column_type: ColumnType,
    /// The dotted name, absent for bare pseudo columns and `*`.
    pub multi_part_identifier: Option<MultiPartIdentifier>,
    /// Source span.
    pub span: Span,
}

/// `@name`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct VariableReference {
    /// The name, including `@`.
    pub name: String,
    /// Source span.
    pub span: Span,
}

/// `@@name`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct GlobalVariableExpression {
    /// The name, including `@@`.
    pub name: String,
    /// Source span.
    pub span: Span,
}

/// `DISTINCT` / `ALL` in a select list or aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum UniqueRowFilter {
    /// Neither keyword was written.
    NotSpecified,
    /// `ALL`
    All,
    /// `DISTINCT`
    Distinct,
}

/// The receiver of a method-style function call.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum CallTarget {
    /// `schema.fn(…)` or `col.method(…)`.
    MultiPartIdentifier(MultiPartIdentifierCallTarget),
    /// `@var.method(…)`.
    Variable(VariableCallTarget),
    /// `(expr).method(…)`.
    Expression(Box<ExpressionCallTarget>),
}

/// A dotted name before the function name.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct MultiPartIdentifierCallTarget {
    /// The qualifier.
    pub multi_part_identifier: MultiPartIdentifier,
    /// Source span.
    pub span: Span,
}

/// A variable before the method name.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct VariableCallTarget {
    /// The receiver variable.
    pub variable: VariableReference,
    /// Source span.
    pub span: Span,
}

/// A parenthesized expression before the method name.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ExpressionCallTarget {
    /// The receiver expression.
    pub expression: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// `WITHIN GROUP (ORDER BY …)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct WithinGroupClause {
    /// The ordering.
    pub order_by_clause: OrderByClause,
    /// Source span.
    pub span: Span,
}

/// `IGNORE NULLS` / `RESPECT NULLS` on analytic functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum NullTreatment {
    /// `IGNORE NULLS`
    IgnoreNulls,
    /// `RESPECT NULLS`
    RespectNulls,
}

/// A function call.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct FunctionCall {
    /// Qualifier or receiver.
    pub call_target: Option<CallTarget>,
    /// The function name.
    pub function_name: Identifier,
    /// `DISTINCT` / `ALL` inside the parentheses.
    pub unique_row_filter: UniqueRowFilter,
    /// Arguments.
    pub parameters: Vec<ScalarExpression>,
    /// `IGNORE NULLS` / `RESPECT NULLS`.
    pub null_treatment: Option<NullTreatment>,
    /// `WITHIN GROUP (ORDER BY …)`.
    pub within_group_clause: Option<WithinGroupClause>,
    /// `OVER (…)`.
    pub over_clause: Option<OverClause>,
    /// Source span.
    pub span: Span,
}

/// Functions called without parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum ParameterlessCallType {
    /// `USER`
    User,
    /// `CURRENT_USER`
    CurrentUser,
    /// `SESSION_USER`
    SessionUser,
    /// `SYSTEM_USER`
    SystemUser,
    /// `CURRENT_TIMESTAMP`
    CurrentTimestamp,
    /// `CURRENT_DATE`
    CurrentDate,
}

/// A parameterless built-in such as `CURRENT_TIMESTAMP`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ParameterlessCall {
    /// Which built-in.
    pub parameterless_call_type: ParameterlessCallType,
    /// Source span.
    pub span: Span,
}

/// `CAST(expr AS type)` or `TRY_CAST(…)`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CastCall {
    /// `TRY_CAST`.
    pub is_try: bool,
    /// The value being converted.
    pub parameter: ScalarExpression,
    /// The target type.
    pub data_type: DataTypeReference,
    /// Source span.
    pub span: Span,
}

/// `CONVERT(type, expr [, style])` or `TRY_CONVERT(…)`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ConvertCall {
    /// `TRY_CONVERT`.
    pub is_try: bool,
    /// The target type.
    pub data_type: DataTypeReference,
    /// The value being converted.
    pub parameter: ScalarExpression,
    /// The style argument.
    pub style: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `PARSE(str AS type [USING culture])` or `TRY_PARSE(…)`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ParseCall {
    /// `TRY_PARSE`.
    pub is_try: bool,
    /// The string being parsed.
    pub string_value: ScalarExpression,
    /// The target type.
    pub data_type: DataTypeReference,
    /// `USING culture`.
    pub culture: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `COALESCE(a, b, …)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CoalesceExpression {
    /// The candidates.
    pub expressions: Vec<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `NULLIF(a, b)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct NullIfExpression {
    /// First argument.
    pub first_expression: ScalarExpression,
    /// Second argument.
    pub second_expression: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// `IIF(cond, then, else)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct IifCall {
    /// The condition.
    pub predicate: BooleanExpression,
    /// Value when true.
    pub then_expression: ScalarExpression,
    /// Value otherwise.
    pub else_expression: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// `WHEN cond THEN value` of a searched `CASE`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SearchedWhenClause {
    /// The condition.
    pub when_expression: BooleanExpression,
    /// The result.
    pub then_expression: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// `CASE WHEN … THEN … [ELSE …] END`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SearchedCaseExpression {
    /// The branches.
    pub when_clauses: Vec<SearchedWhenClause>,
    /// `ELSE` value.
    pub else_expression: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `WHEN value THEN result` of a simple `CASE`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SimpleWhenClause {
    /// The value compared to the input.
    pub when_expression: ScalarExpression,
    /// The result.
    pub then_expression: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// `CASE input WHEN … THEN … [ELSE …] END`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SimpleCaseExpression {
    /// The value being switched on.
    pub input_expression: ScalarExpression,
    /// The branches.
    pub when_clauses: Vec<SimpleWhenClause>,
    /// `ELSE` value.
    pub else_expression: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// Binary scalar operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum BinaryExpressionType {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `&`
    BitwiseAnd,
    /// `|`
    BitwiseOr,
    /// `^`
    BitwiseXor,
    /// `||`
    Concatenate,
}

impl BinaryExpressionType {
    /// Returns the SQL spelling of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::BitwiseAnd => "&",
            Self::BitwiseOr => "|",
            Self::BitwiseXor => "^",
            Self::Concatenate => "||",
        }
    }
}

/// `a op b`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BinaryExpression {
    /// Left operand.
    pub first_expression: ScalarExpression,
    /// The operator.
    pub binary_expression_type: BinaryExpressionType,
    /// Right operand.
    pub second_expression: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// Prefix scalar operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum UnaryExpressionType {
    /// `+`
    Positive,
    /// `-`
    Negative,
    /// `~`
    BitwiseNot,
}

/// `op expr`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct UnaryExpression {
    /// The operator.
    pub unary_expression_type: UnaryExpressionType,
    /// The operand.
    pub expression: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// `( expr )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ParenthesisExpression {
    /// The inner expression.
    pub expression: ScalarExpression,
    /// Source span, parentheses included.
    pub span: Span,
}

/// A parenthesized query used as a value.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ScalarSubquery {
    /// The query.
    pub query_expression: QueryExpression,
    /// Source span, parentheses included.
    pub span: Span,
}

/// `NEXT VALUE FOR seq [OVER (ORDER BY …)]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct NextValueForExpression {
    /// The sequence.
    pub sequence_name: SchemaObjectName,
    /// The ordering clause.
    pub over_clause: Option<OverClause>,
    /// Source span.
    pub span: Span,
}

/// `expr AT TIME ZONE tz`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AtTimeZoneCall {
    /// The date value.
    pub date_value: ScalarExpression,
    /// The time zone name.
    pub time_zone: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// `expr COLLATE name`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CollateExpression {
    /// The value.
    pub expression: ScalarExpression,
    /// The collation name.
    pub collation: Identifier,
    /// Source span.
    pub span: Span,
}

/// `{fn name(args)}`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct OdbcFunctionCall {
    /// The function name.
    pub name: Identifier,
    /// Arguments.
    pub parameters: Vec<ScalarExpression>,
    /// Source span, braces included.
    pub span: Span,
}

/// `type::Method(args)`, a static CLR method call.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct StaticMethodCall {
    /// The CLR type.
    pub type_name: SchemaObjectName,
    /// The method.
    pub method_name: Identifier,
    /// Arguments.
    pub parameters: Vec<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `type::Property`, a static CLR property read.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct StaticPropertyAccess {
    pub type_name: SchemaObjectName,
    pub property_name: Identifier,
    pub span: Span,
}

/// `IDENTITY(type [, seed, increment])`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct IdentityFunctionCall {
    /// Column type.
    pub data_type: DataTypeReference,
    /// Seed.
    pub seed: Option<ScalarExpression>,
    /// Increment.
    pub increment: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `[db.]$PARTITION.fn(expr)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct PartitionFunctionCall {
    /// Database qualifier.
    pub database_name: Option<Identifier>,
    /// The partition function.
    pub function_name: Identifier,
    /// Arguments.
    pub parameters: Vec<ScalarExpression>,
    /// Source span.
    pub span: Span,
}
