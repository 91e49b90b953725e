//! Tests for schema DDL: tables, indexes, views, modules and drops.

mod common;
use common::*;

use oxide_tsql::ast::*;
use oxide_tsql::{DiagnosticCode, SqlVersion};

const MIGRATION: &str = "\
IF OBJECT_ID(N'dbo.orders', N'U') IS NOT NULL
    DROP TABLE dbo.orders;
GO
CREATE TABLE dbo.orders (
    id INT IDENTITY(1, 1) NOT NULL,
    customer_id INT NOT NULL,
    placed_at DATETIME2(3) NOT NULL CONSTRAINT df_orders_placed DEFAULT SYSUTCDATETIME(),
    total MONEY NULL,
    CONSTRAINT pk_orders PRIMARY KEY CLUSTERED (id),
    CONSTRAINT fk_orders_customer FOREIGN KEY (customer_id) REFERENCES dbo.customers (id)
);
GO
CREATE NONCLUSTERED INDEX ix_orders_customer ON dbo.orders (customer_id) INCLUDE (total);
GO
CREATE OR ALTER VIEW dbo.recent_orders
AS
SELECT id, customer_id FROM dbo.orders WHERE placed_at > DATEADD(DAY, -7, SYSUTCDATETIME());
GO
CREATE OR ALTER PROCEDURE dbo.usp_orders_for @customer_id INT
AS
BEGIN
    SET NOCOUNT ON;
    SELECT * FROM dbo.orders WHERE customer_id = @customer_id;
END
GO
";

#[test]
fn migration_script_batches() {
    let script = parse_script(MIGRATION);
    assert_eq!(script.batches.len(), 5);
    let kinds: Vec<&str> = script.statements().map(Statement::kind).collect();
    assert_eq!(kinds, ["If", "CreateTable", "CreateIndex", "View", "Procedure"]);
}

#[test]
fn migration_table_definition() {
    let script = parse_script(MIGRATION);
    let Some(Statement::CreateTable(table)) = script.batches[1].statements.first() else {
        panic!("expected CREATE TABLE in the second batch");
    };
    assert_eq!(table.schema_object_name.base_identifier.value, "orders");
    let definition = table.definition.as_ref().unwrap();
    assert_eq!(definition.column_definitions().count(), 4);
    assert_eq!(definition.table_constraints().count(), 2);

    let placed_at = definition.column_definitions().nth(2).unwrap();
    assert!(placed_at.constraints.iter().any(|c| matches!(
        c,
        ColumnConstraint::Constraint(ConstraintDefinition::Default(d))
            if d.constraint_identifier.as_ref().is_some_and(|i| i.value == "df_orders_placed")
    )));
}

#[test]
fn migration_modules_keep_their_action() {
    let script = parse_script(MIGRATION);
    let Some(Statement::View(view)) = script.batches[3].statements.first() else {
        panic!("expected VIEW");
    };
    assert_eq!(view.action, DdlAction::CreateOrAlter);

    let Some(Statement::Procedure(procedure)) = script.batches[4].statements.first() else {
        panic!("expected PROCEDURE");
    };
    assert_eq!(procedure.action, DdlAction::CreateOrAlter);
    assert_eq!(procedure.parameters.len(), 1);
    assert_eq!(procedure.statements.len(), 1);
    assert!(matches!(procedure.statements[0], Statement::BeginEndBlock(_)));
}

#[test]
fn create_or_alter_before_2016_is_flagged() {
    let result = parse_with_version(MIGRATION, SqlVersion::Sql120);
    let codes: Vec<DiagnosticCode> = result.errors().map(|d| d.code).collect();
    assert_eq!(
        codes,
        [DiagnosticCode::UnsupportedInVersion, DiagnosticCode::UnsupportedInVersion]
    );
    assert_eq!(result.script.statements().count(), 5);
}

#[test]
fn procedure_body_runs_to_end_of_batch() {
    let script = parse_script("CREATE PROC dbo.p AS\nSELECT 1;\nSELECT 2;\nGO\nSELECT 3");
    assert_eq!(script.batches.len(), 2);
    let Some(Statement::Procedure(procedure)) = script.batches[0].statements.first() else {
        panic!("expected PROCEDURE");
    };
    assert_eq!(procedure.statements.len(), 2);
    assert_eq!(script.batches[1].statements.len(), 1);
}

#[test]
fn scalar_and_table_valued_functions() {
    let Statement::Function(scalar) = parse(
        "CREATE FUNCTION dbo.add_tax (@amount MONEY) RETURNS MONEY \
         WITH SCHEMABINDING AS BEGIN RETURN @amount * 1.2 END",
    ) else {
        panic!("expected FUNCTION");
    };
    assert!(matches!(scalar.return_type, FunctionReturnType::Scalar(_)));
    assert_eq!(scalar.options.len(), 1);

    let Statement::Function(inline) = parse(
        "CREATE FUNCTION dbo.by_id (@id INT) RETURNS TABLE \
         AS RETURN SELECT * FROM t WHERE id = @id",
    ) else {
        panic!("expected FUNCTION");
    };
    assert!(matches!(inline.return_type, FunctionReturnType::Select(_)));
    assert!(inline.return_select.is_some());
}

#[test]
fn dml_trigger() {
    let Statement::Trigger(trigger) = parse(
        "CREATE TRIGGER dbo.trg_orders ON dbo.orders AFTER INSERT, DELETE \
         AS BEGIN UPDATE s SET n = n + 1 FROM stats s; END",
    ) else {
        panic!("expected TRIGGER");
    };
    assert_eq!(trigger.trigger_type, TriggerType::After);
    let actions: Vec<TriggerActionType> = trigger
        .trigger_actions
        .iter()
        .map(|a| a.trigger_action_type)
        .collect();
    assert_eq!(actions, [TriggerActionType::Insert, TriggerActionType::Delete]);
}

#[test]
fn alter_table_actions() {
    let kinds = kinds(
        "ALTER TABLE dbo.t ADD archived BIT NOT NULL CONSTRAINT df_archived DEFAULT 0; \
         ALTER TABLE dbo.t ALTER COLUMN name NVARCHAR(200) NULL; \
         ALTER TABLE dbo.t DROP COLUMN legacy; \
         ALTER TABLE dbo.t NOCHECK CONSTRAINT ALL;",
    );
    assert_eq!(kinds, ["AlterTable"; 4]);

    let Statement::AlterTable(alter) = parse("ALTER TABLE dbo.t DROP COLUMN IF EXISTS a, b") else {
        panic!("expected ALTER TABLE");
    };
    let AlterTableAction::DropTableElements(drop) = &alter.action else {
        panic!("expected DROP");
    };
    assert_eq!(drop.elements.len(), 2);
    assert!(drop.elements[0].is_if_exists);
}

#[test]
fn index_options() {
    let Statement::CreateIndex(index) = parse(
        "CREATE UNIQUE INDEX ux ON dbo.t (code) WHERE code IS NOT NULL \
         WITH (PAD_INDEX = ON, FILLFACTOR = 90, DROP_EXISTING = OFF)",
    ) else {
        panic!("expected CREATE INDEX");
    };
    assert!(index.unique);
    assert!(index.clustered.is_none());
    assert!(index.filter_predicate.is_some());
    let kinds: Vec<IndexOptionKind> =
        index.index_options.iter().map(IndexOption::option_kind).collect();
    assert_eq!(
        kinds,
        [IndexOptionKind::PadIndex, IndexOptionKind::FillFactor, IndexOptionKind::DropExisting]
    );
}

#[test]
fn drop_statements() {
    let kinds = kinds(
        "DROP TABLE IF EXISTS dbo.a, dbo.b; DROP VIEW v; DROP PROCEDURE p; \
         DROP INDEX ix ON dbo.a; DROP SCHEMA staging; DROP TRIGGER trg;",
    );
    assert_eq!(
        kinds,
        ["DropObjects", "DropObjects", "DropObjects", "DropIndex", "DropNamedObject", "DropTrigger"]
    );

    let Statement::DropObjects(drop) = parse("DROP TABLE IF EXISTS dbo.a, dbo.b") else {
        panic!("expected DROP TABLE");
    };
    assert_eq!(drop.object_kind, DropObjectKind::Table);
    assert!(drop.is_if_exists);
    assert_eq!(drop.objects.len(), 2);
}

#[test]
fn types_sequences_and_synonyms() {
    let kinds = kinds(
        "CREATE TYPE dbo.ids AS TABLE (id INT PRIMARY KEY); \
         CREATE TYPE dbo.code FROM CHAR(4) NOT NULL; \
         CREATE SEQUENCE dbo.order_no START WITH 1000 INCREMENT BY 1; \
         CREATE SYNONYM dbo.o FOR Sales.dbo.orders;",
    );
    assert_eq!(kinds, ["CreateTypeTable", "CreateTypeUddt", "Sequence", "CreateSynonym"]);
}

#[test]
fn partitioning() {
    let kinds = kinds(
        "CREATE PARTITION FUNCTION pf_year (DATE) \
             AS RANGE RIGHT FOR VALUES ('2023-01-01', '2024-01-01'); \
         CREATE PARTITION SCHEME ps_year AS PARTITION pf_year ALL TO ([PRIMARY]); \
         ALTER PARTITION FUNCTION pf_year() SPLIT RANGE ('2025-01-01');",
    );
    assert_eq!(
        kinds,
        ["CreatePartitionFunction", "CreatePartitionScheme", "AlterPartitionFunction"]
    );
}

#[test]
fn temporal_table_options() {
    let table = parse_create_table(
        "CREATE TABLE dbo.prices (\
            id INT PRIMARY KEY, \
            valid_from DATETIME2 GENERATED ALWAYS AS ROW START, \
            valid_to DATETIME2 GENERATED ALWAYS AS ROW END, \
            PERIOD FOR SYSTEM_TIME (valid_from, valid_to)) \
         WITH (SYSTEM_VERSIONING = ON (HISTORY_TABLE = dbo.prices_history))",
    );
    let Some(TableOption::SystemVersioning(versioning)) = table.options.first() else {
        panic!("expected SYSTEM_VERSIONING");
    };
    assert_eq!(versioning.option_state, OptionState::On);
    assert_eq!(
        versioning.history_table.as_ref().unwrap().base_identifier.value,
        "prices_history"
    );
}

#[test]
fn graph_tables_gated_by_version() {
    let result = parse_with_version("CREATE TABLE person (id INT) AS NODE", SqlVersion::Sql130);
    assert_eq!(result.errors().next().unwrap().code, DiagnosticCode::UnsupportedInVersion);

    let table = parse_create_table("CREATE TABLE likes AS EDGE");
    assert!(table.as_edge);
    assert!(table.definition.is_none());
}
