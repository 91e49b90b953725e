//! Tree traversal.
//!
//! Two modes are offered:
//!
//! - [`Walk`] drives a read-only [`Visitor`] over a borrowed tree, calling
//!   `pre_visit` and `post_visit` around every node in source order.
//! - [`Fold`] consumes a tree and rebuilds it bottom-up through a
//!   [`Rewriter`], whose per-category hooks may replace any subtree.
//!
//! Both are implemented for every syntax tree type by `#[derive(AstNode)]`.

use crate::ast::{
    Batch, BooleanExpression, DataTypeReference, Identifier, Literal, MultiPartIdentifier,
    QueryExpression, ScalarExpression, SchemaObjectName, Script, Statement, TableReference,
};
use crate::lexer::Span;

/// A borrowed view of a node, handed to visitor hooks.
///
/// Category sums and the handful of leaf types tools match on most often
/// get their own variant. Every other spanned node is reported as a
/// [`Node::Fragment`] tagged with its type name.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// The parse root.
    Script(&'a Script),
    /// A `GO`-separated batch.
    Batch(&'a Batch),
    /// Any statement.
    Statement(&'a Statement),
    /// Any row-set producing query.
    QueryExpression(&'a QueryExpression),
    /// Any scalar expression.
    ScalarExpression(&'a ScalarExpression),
    /// Any search condition.
    BooleanExpression(&'a BooleanExpression),
    /// Any `FROM` clause source.
    TableReference(&'a TableReference),
    /// Any data type reference.
    DataTypeReference(&'a DataTypeReference),
    /// A single identifier.
    Identifier(&'a Identifier),
    /// A dotted identifier sequence.
    MultiPartIdentifier(&'a MultiPartIdentifier),
    /// An object name of up to four parts.
    SchemaObjectName(&'a SchemaObjectName),
    /// A literal value.
    Literal(&'a Literal),
    /// Any other spanned node.
    Fragment {
        /// The Rust type name of the node.
        type_name: &'static str,
        /// The node's source span.
        span: Span,
    },
}

impl Node<'_> {
    /// Returns the source span of the node.
    #[must_use]
    pub fn span(&self) -> Span {
        match *self {
            Self::Script(n) => n.span(),
            Self::Batch(n) => n.span(),
            Self::Statement(n) => n.span(),
            Self::QueryExpression(n) => n.span(),
            Self::ScalarExpression(n) => n.span(),
            Self::BooleanExpression(n) => n.span(),
            Self::TableReference(n) => n.span(),
            Self::DataTypeReference(n) => n.span(),
            Self::Identifier(n) => n.span(),
            Self::MultiPartIdentifier(n) => n.span(),
            Self::SchemaObjectName(n) => n.span(),
            Self::Literal(n) => n.span(),
            Self::Fragment { span, .. } => span,
        }
    }

    /// Returns a short name for the kind of node.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match *self {
            Self::Script(_) => "Script",
            Self::Batch(_) => "Batch",
            Self::Statement(_) => "Statement",
            Self::QueryExpression(_) => "QueryExpression",
            Self::ScalarExpression(_) => "ScalarExpression",
            Self::BooleanExpression(_) => "BooleanExpression",
            Self::TableReference(_) => "TableReference",
            Self::DataTypeReference(_) => "DataTypeReference",
            Self::Identifier(_) => "Identifier",
            Self::MultiPartIdentifier(_) => "MultiPartIdentifier",
            Self::SchemaObjectName(_) => "SchemaObjectName",
            Self::Literal(_) => "Literal",
            Self::Fragment { type_name, .. } => type_name,
        }
    }
}

/// What a visitor wants after `pre_visit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitAction {
    /// Descend into the node's children.
    Continue,
    /// Skip the children; `post_visit` is still called.
    SkipChildren,
}

/// Read-only tree visitor.
pub trait Visitor<'ast> {
    /// Called before a node's children are walked.
    fn pre_visit(&mut self, _node: Node<'ast>) -> VisitAction {
        VisitAction::Continue
    }

    /// Called after a node's children are walked.
    fn post_visit(&mut self, _node: Node<'ast>) {}
}

/// Walks a node and its children in source order.
pub trait Walk<'ast> {
    /// Drives `visitor` over this node.
    fn walk<V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V);
}

/// Rebuilds a tree through a [`Rewriter`].
pub trait Fold: Sized {
    /// Folds this node, children first.
    #[must_use]
    fn fold<R: Rewriter + ?Sized>(self, rewriter: &mut R) -> Self;
}

/// Post-order rewrite hooks, one per node category.
///
/// Each hook receives a node whose children have already been rewritten and
/// returns its replacement. The defaults return the node unchanged.
pub trait Rewriter {
    /// Rewrites the script root.
    fn rewrite_script(&mut self, node: Script) -> Script {
        node
    }

    /// Rewrites a batch.
    fn rewrite_batch(&mut self, node: Batch) -> Batch {
        node
    }

    /// Rewrites a statement.
    fn rewrite_statement(&mut self, node: Statement) -> Statement {
        node
    }

    /// Rewrites a query expression.
    fn rewrite_query_expression(&mut self, node: QueryExpression) -> QueryExpression {
        node
    }

    /// Rewrites a scalar expression.
    fn rewrite_scalar_expression(&mut self, node: ScalarExpression) -> ScalarExpression {
        node
    }

    /// Rewrites a boolean expression.
    fn rewrite_boolean_expression(&mut self, node: BooleanExpression) -> BooleanExpression {
        node
    }

    /// Rewrites a table reference.
    fn rewrite_table_reference(&mut self, node: TableReference) -> TableReference {
        node
    }

    /// Rewrites a data type reference.
    fn rewrite_data_type_reference(&mut self, node: DataTypeReference) -> DataTypeReference {
        node
    }

    /// Rewrites an identifier.
    fn rewrite_identifier(&mut self, node: Identifier) -> Identifier {
        node
    }

    /// Rewrites a multi-part identifier.
    fn rewrite_multi_part_identifier(&mut self, node: MultiPartIdentifier) -> MultiPartIdentifier {
        node
    }

    /// Rewrites a schema object name.
    fn rewrite_schema_object_name(&mut self, node: SchemaObjectName) -> SchemaObjectName {
        node
    }

    /// Rewrites a literal.
    fn rewrite_literal(&mut self, node: Literal) -> Literal {
        node
    }
}

/// Nodes that know their source span.
pub trait Spanned {
    /// Returns the node's source span.
    fn span(&self) -> Span;
}

impl<T: Spanned> Spanned for Box<T> {
    fn span(&self) -> Span {
        (**self).span()
    }
}

impl<'ast, T: Walk<'ast>> Walk<'ast> for Box<T> {
    fn walk<V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        (**self).walk(visitor);
    }
}

impl<'ast, T: Walk<'ast>> Walk<'ast> for Option<T> {
    fn walk<V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        if let Some(inner) = self {
            inner.walk(visitor);
        }
    }
}

impl<'ast, T: Walk<'ast>> Walk<'ast> for Vec<T> {
    fn walk<V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        for item in self {
            item.walk(visitor);
        }
    }
}

impl<T: Fold> Fold for Box<T> {
    fn fold<R: Rewriter + ?Sized>(self, rewriter: &mut R) -> Self {
        Box::new((*self).fold(rewriter))
    }
}

impl<T: Fold> Fold for Option<T> {
    fn fold<R: Rewriter + ?Sized>(self, rewriter: &mut R) -> Self {
        self.map(|inner| inner.fold(rewriter))
    }
}

impl<T: Fold> Fold for Vec<T> {
    fn fold<R: Rewriter + ?Sized>(self, rewriter: &mut R) -> Self {
        self.into_iter().map(|item| item.fold(rewriter)).collect()
    }
}

macro_rules! leaf_nodes {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'ast> Walk<'ast> for $ty {
                fn walk<V: Visitor<'ast> + ?Sized>(&'ast self, _visitor: &mut V) {}
            }

            impl Fold for $ty {
                fn fold<R: Rewriter + ?Sized>(self, _rewriter: &mut R) -> Self {
                    self
                }
            }
        )*
    };
}

leaf_nodes!(String, bool, u8, u16, u32, u64, usize, i64, Span);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{QuoteType, ScalarExpression};
    use crate::parse;

    #[derive(Default)]
    struct Collector {
        names: Vec<&'static str>,
        identifiers: Vec<String>,
        depth: usize,
        max_depth: usize,
    }

    impl<'ast> Visitor<'ast> for Collector {
        fn pre_visit(&mut self, node: Node<'ast>) -> VisitAction {
            self.depth += 1;
            self.max_depth = self.max_depth.max(self.depth);
            self.names.push(node.type_name());
            if let Node::Identifier(id) = node {
                self.identifiers.push(id.value.clone());
            }
            VisitAction::Continue
        }

        fn post_visit(&mut self, _node: Node<'ast>) {
            self.depth -= 1;
        }
    }

    #[test]
    fn test_walk_visits_identifiers_in_source_order() {
        let result = parse("SELECT a, b FROM t WHERE c = 1");
        let mut collector = Collector::default();
        result.script.walk(&mut collector);
        assert_eq!(collector.identifiers, vec!["a", "b", "t", "c"]);
        assert_eq!(collector.names.first(), Some(&"Script"));
        assert_eq!(collector.depth, 0);
    }

    #[test]
    fn test_skip_children() {
        struct StopAtStatements(usize);
        impl<'ast> Visitor<'ast> for StopAtStatements {
            fn pre_visit(&mut self, node: Node<'ast>) -> VisitAction {
                if matches!(node, Node::Statement(_)) {
                    self.0 += 1;
                    return VisitAction::SkipChildren;
                }
                if matches!(node, Node::Identifier(_)) {
                    panic!("identifier reached below a skipped statement");
                }
                VisitAction::Continue
            }
        }

        let result = parse("SELECT a FROM t; SELECT b FROM u;");
        let mut visitor = StopAtStatements(0);
        result.script.walk(&mut visitor);
        assert_eq!(visitor.0, 2);
    }

    #[test]
    fn test_rewriter_renames_identifiers() {
        struct Upper;
        impl Rewriter for Upper {
            fn rewrite_identifier(&mut self, mut node: Identifier) -> Identifier {
                node.value = node.value.to_uppercase();
                node.quote_type = QuoteType::Square;
                node
            }
        }

        let original = parse("SELECT col FROM tbl").script;
        let rewritten = original.clone().fold(&mut Upper);
        let mut collector = Collector::default();
        rewritten.walk(&mut collector);
        assert_eq!(collector.identifiers, vec!["COL", "TBL"]);
        assert_ne!(original, rewritten);
    }

    #[test]
    fn test_rewriter_replaces_expressions() {
        struct Zero;
        impl Rewriter for Zero {
            fn rewrite_scalar_expression(&mut self, node: ScalarExpression) -> ScalarExpression {
                match node {
                    ScalarExpression::Literal(mut literal) => {
                        literal.value = String::from("0");
                        ScalarExpression::Literal(literal)
                    }
                    other => other,
                }
            }
        }

        let script = parse("SELECT 1 + 2").script.fold(&mut Zero);
        let json = crate::serialize::to_value(&script);
        let text = json.to_string();
        assert!(text.contains("\"Value\":\"0\""));
        assert!(!text.contains("\"Value\":\"1\""));
    }

    #[test]
    fn test_node_span() {
        let result = parse("SELECT 1");
        let node = Node::Script(&result.script);
        assert_eq!(node.span().start, 0);
        assert_eq!(node.span().end, 8);
        assert_eq!(node.type_name(), "Script");
    }
}
