//! Whole-tree properties that hold for every script the parser accepts.

mod common;
use common::*;

use oxide_tsql::serialize::{to_json_string, to_value};
use oxide_tsql::{
    validate_script, Fold, LineIndex, Node, Rewriter, Span, Spanned, VisitAction, Visitor, Walk,
};

const CORPUS: &[&str] = &[
    "SELECT TOP (10) o.id, c.name AS customer, SUM(l.qty * l.price) AS total
     FROM dbo.orders AS o
     INNER JOIN dbo.customers AS c ON c.id = o.customer_id
     LEFT JOIN dbo.lines AS l WITH (NOLOCK) ON l.order_id = o.id
     WHERE o.placed_at >= DATEADD(MONTH, -1, GETDATE()) AND c.region IN ('EU', 'US')
     GROUP BY o.id, c.name
     HAVING SUM(l.qty) > 0
     ORDER BY total DESC;",
    "WITH ranked AS (
         SELECT id, ROW_NUMBER() OVER (PARTITION BY grp ORDER BY ts DESC) AS rn FROM events
     )
     DELETE FROM ranked WHERE rn > 1;",
    "MERGE dbo.stock AS tgt
     USING (SELECT sku, qty FROM staging.stock) AS src ON tgt.sku = src.sku
     WHEN MATCHED AND src.qty = 0 THEN DELETE
     WHEN MATCHED THEN UPDATE SET tgt.qty = src.qty
     WHEN NOT MATCHED BY TARGET THEN INSERT (sku, qty) VALUES (src.sku, src.qty)
     OUTPUT $action, inserted.sku;",
    "CREATE TABLE dbo.audit (
         id BIGINT IDENTITY(1, 1) PRIMARY KEY,
         actor SYSNAME NOT NULL DEFAULT SUSER_SNAME(),
         payload NVARCHAR(MAX) NULL CHECK (ISJSON(payload) = 1)
     ) WITH (DATA_COMPRESSION = PAGE);
     GO
     CREATE INDEX ix_audit_actor ON dbo.audit (actor) WITH (FILLFACTOR = 80);
     GO",
    "CREATE OR ALTER PROCEDURE dbo.usp_purge @days INT = 30
     AS
     BEGIN
         SET NOCOUNT ON;
         BEGIN TRY
             DELETE FROM dbo.audit WHERE DATEDIFF(DAY, created, GETDATE()) > @days;
         END TRY
         BEGIN CATCH
             THROW;
         END CATCH
     END",
    "DECLARE @i INT = 0;
     WHILE @i < 10
     BEGIN
         IF @i % 2 = 0 PRINT CONCAT('even ', @i) ELSE PRINT 'odd';
         SET @i += 1;
     END",
    "ALTER DATABASE Sales SET QUERY_STORE = ON (OPERATION_MODE = READ_WRITE), \
     AUTO_UPDATE_STATISTICS ON;
     BACKUP DATABASE Sales TO DISK = N'/tmp/s.bak' WITH COMPRESSION, STATS = 5;",
    "GRANT SELECT ON SCHEMA::sales TO reporting;
     EXEC sp_executesql N'SELECT @x', N'@x INT', @x = 1;",
];

/// Records spans seen by the walk and checks the ones that come from a
/// single token against the line index.
struct SpanAuditor<'a> {
    source: &'a str,
    lines: LineIndex<'a>,
    visited: usize,
    problems: Vec<String>,
}

impl<'a> SpanAuditor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            lines: LineIndex::new(source),
            visited: 0,
            problems: Vec::new(),
        }
    }

    fn check_line(&mut self, kind: &str, span: Span) {
        let (line, _) = self.lines.line_col(span.start);
        if line != span.line as usize {
            self.problems
                .push(format!("{kind} at {} reports line {}, not {line}", span.start, span.line));
        }
    }
}

impl<'ast> Visitor<'ast> for SpanAuditor<'_> {
    fn pre_visit(&mut self, node: Node<'ast>) -> VisitAction {
        self.visited += 1;
        let span = node.span();
        if span.start > span.end || span.end > self.source.len() {
            self.problems
                .push(format!("{} has span {}..{}", node.type_name(), span.start, span.end));
            return VisitAction::SkipChildren;
        }
        match node {
            Node::Identifier(identifier) => {
                self.check_line("Identifier", span);
                let text = span.text(self.source);
                if !text.contains(identifier.value.trim_start_matches('@')) {
                    self.problems
                        .push(format!("identifier {:?} spans {text:?}", identifier.value));
                }
            }
            Node::Statement(_) => self.check_line("Statement", span),
            _ => {}
        }
        VisitAction::Continue
    }
}

struct Identity;

impl Rewriter for Identity {}

#[test]
fn parsed_scripts_validate_cleanly() {
    for sql in CORPUS {
        let script = parse_script(sql);
        assert!(!script.is_empty(), "{sql}");
        assert_eq!(validate_script(&script), Vec::new(), "{sql}");
    }
}

#[test]
fn spans_agree_with_the_source() {
    for sql in CORPUS {
        let script = parse_script(sql);
        let mut auditor = SpanAuditor::new(sql);
        script.walk(&mut auditor);
        assert!(auditor.visited > script.statements().count(), "{sql}");
        assert!(auditor.problems.is_empty(), "{sql}: {:#?}", auditor.problems);
    }
}

#[test]
fn statement_text_starts_with_its_keyword() {
    for sql in CORPUS {
        let script = parse_script(sql);
        for statement in script.statements() {
            let text = statement.span().text(sql);
            assert!(
                text.chars().next().is_some_and(char::is_alphabetic),
                "{} starts with {text:?}",
                statement.kind()
            );
        }
    }
}

#[test]
fn identity_rewrite_keeps_the_tree() {
    for sql in CORPUS {
        let script = parse_script(sql);
        let folded = script.clone().fold(&mut Identity);
        assert_eq!(folded, script, "{sql}");
    }
}

#[test]
fn projection_is_deterministic() {
    for sql in CORPUS {
        let first = to_json_string(&parse_script(sql));
        let second = to_json_string(&parse_script(sql));
        assert_eq!(first, second);
    }
}

#[test]
fn projection_omits_absent_fields() {
    let json = to_value(&parse_script("SELECT a FROM t"));
    let statement = &json["Batches"][0]["Statements"][0];
    assert_eq!(statement["$type"], "SelectStatement");
    assert!(statement.get("OptionClause").is_none());
}

#[test]
fn batches_tile_the_script_in_order() {
    let sql = CORPUS[3];
    let script = parse_script(sql);
    assert_eq!(script.batches.len(), 2);
    let first = script.batches[0].span;
    let second = script.batches[1].span;
    assert!(first.end <= second.start);
    assert!(script.span.contains(&first) && script.span.contains(&second));
    assert!(second.text(sql).trim_start().starts_with("CREATE INDEX"));
}
