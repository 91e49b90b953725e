//! Tests for INSERT, UPDATE, DELETE, MERGE and bulk loading.

mod common;
use common::*;

use oxide_tsql::ast::*;
use oxide_tsql::DiagnosticCode;

#[test]
fn insert_values_rows() {
    let stmt = parse_insert("INSERT INTO dbo.users (id, name) VALUES (1, N'a'), (2, N'b')");
    let spec = stmt.insert_specification;
    assert_eq!(spec.insert_option, InsertOption::Into);
    assert_eq!(spec.columns.len(), 2);
    let InsertSource::Values(values) = &spec.insert_source else {
        panic!("expected VALUES source");
    };
    assert!(!values.is_default_values);
    assert_eq!(values.row_values.len(), 2);
    assert_eq!(values.row_values[1].column_values.len(), 2);
}

#[test]
fn insert_select_and_exec() {
    let stmt = parse_insert("INSERT archive SELECT * FROM live WHERE closed = 1");
    assert_eq!(stmt.insert_specification.insert_option, InsertOption::None);
    assert!(matches!(stmt.insert_specification.insert_source, InsertSource::Select(_)));

    let stmt = parse_insert("INSERT INTO #t EXEC dbo.usp_rows @day = 1");
    assert!(matches!(stmt.insert_specification.insert_source, InsertSource::Execute(_)));
}

#[test]
fn insert_with_output_clause() {
    let stmt = parse_insert("INSERT INTO t (a) OUTPUT inserted.id, inserted.a VALUES (1)");
    let output = stmt.insert_specification.output_clause.unwrap();
    assert_eq!(output.select_columns.len(), 2);
}

#[test]
fn update_with_from_and_compound_assignment() {
    let stmt = parse_update(
        "UPDATE t SET t.total += s.amount, t.updated = GETDATE() \
         FROM dbo.totals AS t JOIN staging s ON s.id = t.id WHERE s.amount <> 0",
    );
    let spec = stmt.update_specification;
    assert_eq!(spec.set_clauses.len(), 2);
    let SetClause::Assignment(first) = &spec.set_clauses[0] else {
        panic!("expected assignment");
    };
    assert_eq!(first.assignment_kind, AssignmentKind::AddEquals);
    assert!(first.column.is_some());
    assert!(spec.from_clause.is_some());
    assert!(spec.where_clause.is_some());
}

#[test]
fn update_top_and_variable_assignment() {
    let stmt = parse_update("UPDATE TOP (10) queue SET @id = id, status = 1 WHERE status = 0");
    let spec = stmt.update_specification;
    assert!(spec.top_row_filter.is_some());
    let SetClause::Assignment(first) = &spec.set_clauses[0] else {
        panic!("expected assignment");
    };
    assert_eq!(first.variable.as_ref().unwrap().name, "@id");
}

#[test]
fn delete_where_current_of_cursor() {
    let stmt = parse_delete("DELETE FROM t WHERE CURRENT OF c");
    let where_clause = stmt.delete_specification.where_clause.unwrap();
    assert!(where_clause.search_condition.is_none());
    assert_eq!(where_clause.cursor.unwrap().name.value, "c");
}

#[test]
fn delete_through_cte() {
    let stmt = parse_delete(
        "WITH dupes AS (SELECT id, ROW_NUMBER() OVER (PARTITION BY k ORDER BY id) AS rn FROM t) \
         DELETE FROM dupes WHERE rn > 1",
    );
    assert!(stmt.with_ctes_and_xml_namespaces.is_some());
}

#[test]
fn merge_with_all_action_kinds() {
    let stmt = parse_merge(
        "MERGE INTO dbo.target AS t USING dbo.source AS s ON t.id = s.id \
         WHEN MATCHED AND s.deleted = 1 THEN DELETE \
         WHEN MATCHED THEN UPDATE SET t.v = s.v \
         WHEN NOT MATCHED BY TARGET THEN INSERT (id, v) VALUES (s.id, s.v) \
         WHEN NOT MATCHED BY SOURCE THEN DELETE \
         OUTPUT $action, inserted.id;",
    );
    let spec = stmt.merge_specification;
    let conditions: Vec<MergeCondition> = spec.action_clauses.iter().map(|c| c.condition).collect();
    assert_eq!(
        conditions,
        [
            MergeCondition::Matched,
            MergeCondition::Matched,
            MergeCondition::NotMatched,
            MergeCondition::NotMatchedBySource,
        ]
    );
    assert!(spec.action_clauses[0].search_condition.is_some());
    assert!(matches!(spec.action_clauses[0].action, MergeAction::Delete(_)));
    assert!(matches!(spec.action_clauses[1].action, MergeAction::Update(_)));
    let MergeAction::Insert(insert) = &spec.action_clauses[2].action else {
        panic!("expected INSERT action");
    };
    assert_eq!(insert.columns.len(), 2);
    assert!(spec.output_clause.is_some());
}

#[test]
fn merge_target_and_source_without_aliases() {
    let stmt = parse_merge(
        "MERGE INTO stock USING incoming ON stock.sku = incoming.sku \
         WHEN MATCHED THEN UPDATE SET qty = incoming.qty \
         WHEN NOT MATCHED THEN INSERT (sku, qty) VALUES (incoming.sku, incoming.qty);",
    );
    let spec = stmt.merge_specification;
    let TableReference::Named(target) = &spec.target else {
        panic!("expected named target");
    };
    assert_eq!(target.schema_object.base_identifier.value, "stock");
    assert!(target.alias.is_none());
    let TableReference::Named(source) = &spec.table_reference else {
        panic!("expected named source");
    };
    assert_eq!(source.schema_object.base_identifier.value, "incoming");
    assert_eq!(spec.action_clauses.len(), 2);
}

#[test]
fn merge_without_semicolon_warns() {
    let result = parse_result(
        "MERGE t USING s ON t.id = s.id WHEN MATCHED THEN DELETE\nSELECT 1",
    );
    assert!(!result.has_errors());
    let warning = result.warnings().next().unwrap();
    assert_eq!(warning.code, DiagnosticCode::MergeNotTerminated);
    assert_eq!(result.script.statements().count(), 2);
}

#[test]
fn truncate_and_bulk_insert() {
    let kinds = kinds(
        "TRUNCATE TABLE dbo.t; \
         BULK INSERT dbo.t FROM 'C:\\data\\t.csv' \
             WITH (FIELDTERMINATOR = ',', FIRSTROW = 2, TABLOCK)",
    );
    assert_eq!(kinds, ["TruncateTable", "BulkInsert"]);

    let Statement::BulkInsert(bulk) =
        parse("BULK INSERT t FROM 'f.csv' WITH (ROWTERMINATOR = '\\n', BATCHSIZE = 500)")
    else {
        panic!("expected BULK INSERT");
    };
    assert_eq!(bulk.options.len(), 2);
    assert_eq!(bulk.options[1].option_kind(), BulkInsertOptionKind::BatchSize);
}

#[test]
fn update_statistics() {
    let Statement::UpdateStatistics(stats) =
        parse("UPDATE STATISTICS dbo.t WITH FULLSCAN, NORECOMPUTE")
    else {
        panic!("expected UPDATE STATISTICS");
    };
    assert_eq!(stats.statistics_options.len(), 2);
}
