//! Boolean expressions (search conditions).

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use super::{ColumnReferenceExpression, Identifier, ScalarExpression, ScalarSubquery};
use crate::lexer::Span;

/// A search condition.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
#[ast(node = BooleanExpression)]
pub enum BooleanExpression {
    /// `a = b` and the other comparison operators.
    Comparison(Box<BooleanComparisonExpression>),
    /// `a AND b`, `a OR b`.
    Binary(Box<BooleanBinaryExpression>),
    /// `NOT a`.
    Not(Box<BooleanNotExpression>),
    /// `( cond )`.
    Parenthesis(Box<BooleanParenthesisExpression>),
    /// `x IS [NOT] NULL`.
    IsNull(Box<BooleanIsNullExpression>),
    /// `x [NOT] BETWEEN a AND b`.
    Ternary(Box<BooleanTernaryExpression>),
    /// `x [NOT] IN (…)`.
    In(Box<InPredicate>),
    /// `x [NOT] LIKE p [ESCAPE e]`.
    Like(Box<LikePredicate>),
    /// `EXISTS (subquery)`.
    Exists(Box<ExistsPredicate>),
    /// `CONTAINS(…)` / `FREETEXT(…)`.
    FullText(Box<FullTextPredicate>),
    /// `x op ANY|SOME|ALL (subquery)`.
    SubqueryComparison(Box<SubqueryComparisonPredicate>),
    /// `x IS [NOT] DISTINCT FROM y`.
    Distinct(Box<DistinctPredicate>),
    /// Graph `MATCH(…)`.
    GraphMatch(GraphMatchPredicate),
    /// `UPDATE(column)` inside a trigger.
    UpdateCall(UpdateCall),
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum ComparisonType {
    /// `=`
    Equals,
    /// `<>`
    NotEqualToBrackets,
    /// `!=`
    NotEqualToExclamation,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `<=`
    LessThanOrEqualTo,
    /// `>=`
    GreaterThanOrEqualTo,
    /// `!<`
    NotLessThan,
    /// `!>`
    NotGreaterThan,
}

impl ComparisonType {
    /// Returns the SQL spelling of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::NotEqualToBrackets => "<>",
            Self::NotEqualToExclamation => "!=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LessThanOrEqualTo => "<=",
            Self::GreaterThanOrEqualTo => ">=",
            Self::NotLessThan => "!<",
            Self::NotGreaterThan => "!>",
        }
    }
}

/// `a op b`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BooleanComparisonExpression {
    /// Left operand.
    pub first_expression: ScalarExpression,
    /// The operator.
    pub comparison_type: ComparisonType,
    /// Right operand.
    pub second_expression: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// `AND` / `OR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum BooleanBinaryExpressionType {
    /// `AND`
    And,
    /// `OR`
    Or,
}

/// `a AND b` / `a OR b`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BooleanBinaryExpression {
    /// Left operand.
    pub first_expression: BooleanExpression,
    /// The connective.
    pub binary_expression_type: BooleanBinaryExpressionType,
    /// Right operand.
    pub second_expression: BooleanExpression,
    /// Source span.
    pub span: Span,
}

/// `NOT cond`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BooleanNotExpression {
    /// The negated condition.
    pub expression: BooleanExpression,
    /// Source span.
    pub span: Span,
}

/// `( cond )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BooleanParenthesisExpression {
    /// The inner condition.
    pub expression: BooleanExpression,
    /// Source span, parentheses included.
    pub span: Span,
}

/// `x IS [NOT] NULL`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BooleanIsNullExpression {
    /// The tested value.
    pub expression: ScalarExpression,
    /// `IS NOT NULL`.
    pub is_not: bool,
    /// Source span.
    pub span: Span,
}

/// `BETWEEN` / `NOT BETWEEN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum BooleanTernaryExpressionType {
    /// `BETWEEN`
    Between,
    /// `NOT BETWEEN`
    NotBetween,
}

/// `x [NOT] BETWEEN low AND high`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BooleanTernaryExpression {
    /// The tested value.
    pub first_expression: ScalarExpression,
    /// `BETWEEN` or `NOT BETWEEN`.
    pub ternary_expression_type: BooleanTernaryExpressionType,
    /// Lower bound.
    pub second_expression: ScalarExpression,
    /// Upper bound.
    pub third_expression: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// `x [NOT] IN (values | subquery)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct InPredicate {
    /// The tested value.
    pub expression: ScalarExpression,
    /// `NOT IN`.
    pub not_defined: bool,
    /// The value list, empty when a subquery is given.
    pub values: Vec<ScalarExpression>,
    /// The subquery form.
    pub subquery: Option<ScalarSubquery>,
    /// Source span.
    pub span: Span,
}

/// `x [NOT] LIKE pattern [ESCAPE e]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct LikePredicate {
    /// The tested value.
    pub first_expression: ScalarExpression,
    /// `NOT LIKE`.
    pub not_defined: bool,
    /// The pattern.
    pub second_expression: ScalarExpression,
    /// Escape character.
    pub escape_expression: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `EXISTS (subquery)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ExistsPredicate {
    /// The subquery.
    pub subquery: ScalarSubquery,
    /// Source span.
    pub span: Span,
}

/// Full-text predicate function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum FullTextFunctionType {
    /// `CONTAINS` / `CONTAINSTABLE`
    Contains,
    /// `FREETEXT` / `FREETEXTTABLE`
    FreeText,
}

/// `CONTAINS((cols), 'search' [, LANGUAGE l])`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct FullTextPredicate {
    /// Which function.
    pub full_text_function_type: FullTextFunctionType,
    /// Searched columns; a `*` column for all.
    pub columns: Vec<ColumnReferenceExpression>,
    /// `PROPERTY(col, 'name')` target property.
    pub property_name: Option<ScalarExpression>,
    /// Search condition.
    pub value: ScalarExpression,
    /// `LANGUAGE term`.
    pub language_term: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `ANY` / `SOME` / `ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum SubqueryComparisonPredicateType {
    /// `ANY` or `SOME`
    Any,
    /// `ALL`
    All,
}

/// `x op ANY (subquery)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SubqueryComparisonPredicate {
    /// The tested value.
    pub expression: ScalarExpression,
    /// The operator.
    pub comparison_type: ComparisonType,
    /// The quantifier.
    pub subquery_comparison_predicate_type: SubqueryComparisonPredicateType,
    /// The subquery.
    pub subquery: ScalarSubquery,
    /// Source span.
    pub span: Span,
}

/// `x IS [NOT] DISTINCT FROM y`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DistinctPredicate {
    /// Left operand.
    pub first_expression: ScalarExpression,
    /// `IS NOT DISTINCT FROM`.
    pub is_not: bool,
    /// Right operand.
    pub second_expression: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// Graph `MATCH(pattern [AND pattern …])`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct GraphMatchPredicate {
    /// `AND`-connected patterns.
    pub patterns: Vec<GraphMatchComposite>,
    /// Source span.
    pub span: Span,
}

/// A chain `n1-(e1)->n2<-(e2)-n3`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct GraphMatchComposite {
    /// The first node alias.
    pub first_node: Identifier,
    /// Subsequent edge/node hops.
    pub steps: Vec<GraphMatchStep>,
    /// Source span.
    pub span: Span,
}

/// One `-(edge)->node` or `<-(edge)-node` hop.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct GraphMatchStep {
    /// The edge alias.
    pub edge: Identifier,
    /// Arrow points at `node`.
    pub arrow_on_right: bool,
    /// The target node alias.
    pub node: Identifier,
    /// Source span.
    pub span: Span,
}

/// `UPDATE(column)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct UpdateCall {
    /// The tested column.
    pub identifier: Identifier,
    /// Source span.
    pub span: Span,
}
