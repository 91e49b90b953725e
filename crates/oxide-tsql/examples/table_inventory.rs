//! Table Inventory - Visitor Example
//!
//! Parses a small deployment script and lists, per statement, every table
//! the statement reads from, with the line it is referenced on. Diagnostics
//! are printed the way an editor integration would show them.
//!
//! Run with: cargo run --example table_inventory

use oxide_tsql::ast::TableReference;
use oxide_tsql::{LineIndex, Node, VisitAction, Visitor, Walk};

const SCRIPT: &str = "\
CREATE OR ALTER VIEW reporting.open_orders
AS
SELECT o.id, c.name, o.total
FROM sales.orders AS o
JOIN sales.customers AS c ON c.id = o.customer_id
WHERE o.closed_at IS NULL;
GO
UPDATE s SET s.last_seen = SYSUTCDATETIME()
FROM sales.sessions AS s
JOIN auth.tokens AS t ON t.session_id = s.id;
SELECT FROM nowhere;
GO 2
";

// =============================================================================
// VISITOR
// =============================================================================

/// Collects `(statement kind, table name, line)` for every named table.
#[derive(Default)]
struct TableInventory {
    statement: &'static str,
    depth: usize,
    tables: Vec<(&'static str, String, u32)>,
}

impl<'ast> Visitor<'ast> for TableInventory {
    fn pre_visit(&mut self, node: Node<'ast>) -> VisitAction {
        match node {
            Node::Statement(statement) => {
                if self.depth == 0 {
                    self.statement = statement.kind();
                }
                self.depth += 1;
            }
            Node::TableReference(TableReference::Named(named)) => {
                let name = named
                    .schema_object
                    .identifiers()
                    .iter()
                    .map(|part| part.value.as_str())
                    .collect::<Vec<_>>()
                    .join(".");
                self.tables.push((self.statement, name, named.span.line));
            }
            _ => {}
        }
        VisitAction::Continue
    }

    fn post_visit(&mut self, node: Node<'ast>) {
        if matches!(node, Node::Statement(_)) {
            self.depth -= 1;
        }
    }
}

// =============================================================================
// MAIN
// =============================================================================

fn main() {
    let result = oxide_tsql::parse(SCRIPT);
    let lines = LineIndex::new(SCRIPT);

    for (i, batch) in result.script.batches.iter().enumerate() {
        let repeat = batch.repeat_count.unwrap_or(1);
        println!("batch {} ({} statements, runs {repeat}x)", i + 1, batch.statements.len());
    }

    let mut inventory = TableInventory::default();
    result.script.walk(&mut inventory);
    for (statement, table, line) in &inventory.tables {
        println!("  {statement:<12} {table:<24} line {line}");
    }

    for diagnostic in &result.diagnostics {
        let (line, column) = lines.line_col(diagnostic.span.start);
        println!("{line}:{column}: {diagnostic}");
    }
}
