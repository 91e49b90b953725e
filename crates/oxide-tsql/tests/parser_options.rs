//! Tests for option bundles across statement families and their projection.

mod common;
use common::*;

use oxide_tsql::ast::*;
use oxide_tsql::serialize::to_value;
use oxide_tsql::DiagnosticCode;

#[test]
fn database_options_share_one_shape() {
    let Statement::AlterDatabaseSet(alter) =
        parse("ALTER DATABASE Sales SET AUTO_CLOSE OFF, RECOVERY FULL, COMPATIBILITY_LEVEL = 160")
    else {
        panic!("expected ALTER DATABASE SET");
    };
    let kinds: Vec<DatabaseOptionKind> =
        alter.options.iter().map(DatabaseOption::option_kind).collect();
    assert_eq!(
        kinds,
        [
            DatabaseOptionKind::AutoClose,
            DatabaseOptionKind::Recovery,
            DatabaseOptionKind::CompatibilityLevel,
        ]
    );

    let json = to_value(&alter);
    let options = &json["Options"];
    assert_eq!(options[0]["$type"], "GeneralDatabaseOption");
    assert_eq!(options[0]["OptionKind"], "AutoClose");
    assert_eq!(options[0]["Value"]["$type"], "OnOffOptionValue");
    assert_eq!(options[0]["Value"]["OptionState"], "Off");
    assert_eq!(options[1]["Value"]["$type"], "KeywordOptionValue");
    assert_eq!(options[1]["Value"]["Value"], "FULL");
    assert_eq!(options[2]["Value"]["$type"], "IntegerLiteral");
    assert_eq!(options[2]["Value"]["Value"], "160");
}

#[test]
fn nested_database_option_groups() {
    let Statement::AlterDatabaseSet(alter) = parse(
        "ALTER DATABASE CURRENT SET QUERY_STORE = ON (\
            OPERATION_MODE = READ_WRITE, \
            QUERY_CAPTURE_MODE = AUTO, \
            MAX_STORAGE_SIZE_MB = 1024)",
    ) else {
        panic!("expected ALTER DATABASE SET");
    };
    assert!(alter.use_current);
    let DatabaseOption::QueryStore(query_store) = &alter.options[0] else {
        panic!("expected QUERY_STORE");
    };
    let kinds: Vec<QueryStoreOptionKind> =
        query_store.options.iter().map(QueryStoreOption::option_kind).collect();
    assert_eq!(
        kinds,
        [
            QueryStoreOptionKind::OperationMode,
            QueryStoreOptionKind::QueryCaptureMode,
            QueryStoreOptionKind::MaxStorageSizeMb,
        ]
    );
}

#[test]
fn option_keys_are_case_insensitive() {
    let Statement::AlterDatabaseSet(upper) = parse("ALTER DATABASE d SET AUTO_SHRINK ON") else {
        panic!("expected ALTER DATABASE SET");
    };
    let Statement::AlterDatabaseSet(lower) = parse("alter database d set auto_shrink on") else {
        panic!("expected ALTER DATABASE SET");
    };
    assert_eq!(upper.options[0].option_kind(), lower.options[0].option_kind());
}

#[test]
fn unknown_option_is_reported() {
    let error = parse_err("ALTER DATABASE d SET NOT_A_REAL_OPTION ON");
    assert_eq!(error.code, DiagnosticCode::UnknownOption);
    assert_eq!(error.code.as_str(), "TSQL2003");
}

#[test]
fn invalid_option_value_is_reported() {
    let error = parse_err("ALTER DATABASE d SET AUTO_CLOSE = 'yes'");
    assert_eq!(error.code, DiagnosticCode::InvalidOptionValue);

    let error = parse_err("CREATE INDEX ix ON t (a) WITH (FILLFACTOR = ON)");
    assert_eq!(error.code, DiagnosticCode::InvalidOptionValue);
}

#[test]
fn index_options_with_compression() {
    let Statement::CreateIndex(index) = parse(
        "CREATE CLUSTERED INDEX cx ON dbo.t (id) \
         WITH (DATA_COMPRESSION = PAGE, SORT_IN_TEMPDB = ON, MAXDOP = 2)",
    ) else {
        panic!("expected CREATE INDEX");
    };
    assert_eq!(index.clustered, Some(true));
    let IndexOption::Compression(compression) = &index.index_options[0] else {
        panic!("expected DATA_COMPRESSION");
    };
    assert_eq!(compression.compression.compression_level, DataCompressionLevel::Page);
    assert_eq!(index.index_options[2].option_kind(), IndexOptionKind::MaxDop);
}

#[test]
fn backup_and_restore_options() {
    let script = parse_script(
        "BACKUP DATABASE Sales TO DISK = N'/var/backups/sales.bak' \
             WITH COMPRESSION, CHECKSUM, STATS = 10, DESCRIPTION = N'nightly'; \
         RESTORE DATABASE Sales_copy FROM DISK = N'/var/backups/sales.bak' \
             WITH MOVE N'Sales' TO N'/data/sales_copy.mdf', RECOVERY, REPLACE;",
    );
    let statements: Vec<&Statement> = script.statements().collect();

    let Statement::BackupDatabase(backup) = statements[0] else {
        panic!("expected BACKUP DATABASE");
    };
    let kinds: Vec<BackupOptionKind> =
        backup.options.iter().map(BackupOption::option_kind).collect();
    assert_eq!(
        kinds,
        [
            BackupOptionKind::Compression,
            BackupOptionKind::Checksum,
            BackupOptionKind::Stats,
            BackupOptionKind::Description,
        ]
    );

    let Statement::Restore(restore) = statements[1] else {
        panic!("expected RESTORE");
    };
    assert!(matches!(restore.options[0], RestoreOption::Move(_)));
    assert_eq!(restore.options[1].option_kind(), RestoreOptionKind::Recovery);
}

#[test]
fn table_hints_and_query_hints() {
    let stmt = parse_select(
        "SELECT * FROM dbo.t WITH (INDEX(ix_t_a), FORCESEEK, UPDLOCK) \
         OPTION (OPTIMIZE FOR (@a = 1), LOOP JOIN, MAXRECURSION 0)",
    );
    let q = specification(&stmt.query_expression);
    let from = q.from_clause.as_ref().unwrap();
    let TableReference::Named(named) = &from.table_references[0] else {
        panic!("expected named table");
    };
    assert_eq!(named.table_hints.len(), 3);
    assert!(matches!(named.table_hints[0], TableHint::Index(_)));

    let hints = stmt.option_clause.unwrap().optimizer_hints;
    assert!(matches!(&hints[0], OptimizerHint::OptimizeFor(o) if o.pairs.len() == 1));
    assert_eq!(hints.len(), 3);
}

#[test]
fn security_statements() {
    let kinds = kinds(
        "CREATE LOGIN app_login WITH PASSWORD = 'S3cret!', CHECK_POLICY = ON; \
         CREATE USER app FOR LOGIN app_login WITH DEFAULT_SCHEMA = sales; \
         CREATE ROLE readers; \
         ALTER ROLE readers ADD MEMBER app; \
         GRANT SELECT, INSERT ON SCHEMA::sales TO readers WITH GRANT OPTION; \
         DENY DELETE ON OBJECT::sales.orders TO app; \
         REVOKE INSERT ON SCHEMA::sales FROM readers;",
    );
    assert_eq!(
        kinds,
        ["CreateLogin", "CreateUser", "CreateRole", "AlterRole", "Grant", "Deny", "Revoke"]
    );

    let Statement::Grant(grant) =
        parse("GRANT SELECT, INSERT ON SCHEMA::sales TO readers WITH GRANT OPTION")
    else {
        panic!("expected GRANT");
    };
    assert_eq!(grant.permissions.len(), 2);
    assert!(grant.with_grant_option);
    let target = grant.security_target_object.unwrap();
    assert_eq!(target.object_kind, Some(SecurityObjectKind::Schema));
}

#[test]
fn server_administration() {
    let kinds = kinds(
        "DBCC CHECKDB (N'Sales') WITH NO_INFOMSGS; \
         CHECKPOINT; \
         RECONFIGURE WITH OVERRIDE; \
         KILL 53;",
    );
    assert_eq!(kinds, ["Dbcc", "Checkpoint", "Reconfigure", "Kill"]);
}
