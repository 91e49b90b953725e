//! Tests for procedural T-SQL: control flow, variables, cursors, transactions.

mod common;
use common::*;

use oxide_tsql::ast::*;

const BATCH_JOB: &str = "
DECLARE @batch INT = 500, @moved INT = 1;
DECLARE @log TABLE (id INT PRIMARY KEY, moved_at DATETIME2);

WHILE @moved > 0
BEGIN
    BEGIN TRY
        BEGIN TRANSACTION;
        DELETE TOP (@batch) FROM dbo.queue
        OUTPUT deleted.id, SYSUTCDATETIME() INTO @log (id, moved_at)
        WHERE processed = 1;
        SET @moved = @@ROWCOUNT;
        COMMIT TRANSACTION;
    END TRY
    BEGIN CATCH
        IF @@TRANCOUNT > 0 ROLLBACK TRANSACTION;
        THROW;
    END CATCH
END;

SELECT COUNT(*) FROM @log;
";

#[test]
fn batch_job_structure() {
    assert_eq!(
        kinds(BATCH_JOB),
        ["DeclareVariable", "DeclareTableVariable", "While", "Select"]
    );
}

#[test]
fn batch_job_loop_body() {
    let script = parse_script(BATCH_JOB);
    let Some(Statement::While(loop_)) = script.statements().nth(2) else {
        panic!("expected WHILE");
    };
    let Statement::BeginEndBlock(block) = &loop_.statement else {
        panic!("expected BEGIN … END");
    };
    let Some(Statement::TryCatch(try_catch)) = block.statement_list.first() else {
        panic!("expected TRY … CATCH");
    };
    let try_kinds: Vec<&str> =
        try_catch.try_statements.iter().map(Statement::kind).collect();
    assert_eq!(
        try_kinds,
        ["BeginTransaction", "Delete", "SetVariable", "CommitTransaction"]
    );
    let catch_kinds: Vec<&str> =
        try_catch.catch_statements.iter().map(Statement::kind).collect();
    assert_eq!(catch_kinds, ["If", "Throw"]);

    let Statement::Throw(rethrow) = &try_catch.catch_statements[1] else {
        panic!("expected THROW");
    };
    assert!(rethrow.error_number.is_none());
}

#[test]
fn declare_multiple_variables() {
    let Statement::DeclareVariable(declare) =
        parse("DECLARE @a INT = 1, @b NVARCHAR(MAX), @c AS DECIMAL(18, 4) = 0.5")
    else {
        panic!("expected DECLARE");
    };
    assert_eq!(declare.declarations.len(), 3);
    assert_eq!(declare.declarations[1].variable_name.name, "@b");
    assert!(declare.declarations[1].value.is_none());
    assert!(declare.declarations[2].value.is_some());
}

#[test]
fn if_else_chain() {
    let Statement::If(outer) =
        parse("IF @x = 1 PRINT 'one' ELSE IF @x = 2 PRINT 'two' ELSE PRINT 'many'")
    else {
        panic!("expected IF");
    };
    let Some(Statement::If(inner)) = &outer.else_statement else {
        panic!("expected nested IF");
    };
    assert!(matches!(inner.else_statement, Some(Statement::Print(_))));
}

#[test]
fn goto_labels_and_waitfor() {
    let kinds = kinds(
        "retry: \
         WAITFOR DELAY '00:00:05'; \
         IF @attempt < 3 GOTO retry; \
         RETURN 1;",
    );
    assert_eq!(kinds, ["Label", "WaitFor", "If", "Return"]);
}

#[test]
fn raiserror_and_throw() {
    let script = parse_script(
        "RAISERROR (N'Order %d failed', 16, 1, @id) WITH LOG; \
         THROW 50001, N'Invalid order', 1;",
    );
    let statements: Vec<&Statement> = script.statements().collect();
    let Statement::RaisError(raise) = statements[0] else {
        panic!("expected RAISERROR");
    };
    assert_eq!(raise.optional_parameters.len(), 1);
    assert_eq!(raise.raise_error_options, [RaiseErrorOption::Log]);

    let Statement::Throw(throw) = statements[1] else {
        panic!("expected THROW");
    };
    assert!(throw.error_number.is_some() && throw.message.is_some() && throw.state.is_some());
}

#[test]
fn execute_forms() {
    let kinds = kinds(
        "EXEC dbo.usp_refresh; \
         EXECUTE @rc = dbo.usp_load @day = '2024-01-01', @rows = @n OUTPUT; \
         EXEC (N'SELECT 1'); \
         EXEC sp_executesql N'SELECT @p', N'@p INT', @p = 1;",
    );
    assert_eq!(kinds, ["Execute"; 4]);

    let Statement::Execute(exec) = parse("EXEC ('SELECT ' + @cols + ' FROM t') AT linked_srv")
    else {
        panic!("expected EXEC");
    };
    let spec = exec.execute_specification;
    assert!(matches!(spec.executable_entity, ExecutableEntity::Strings(_)));
    assert_eq!(spec.linked_server.unwrap().value, "linked_srv");
}

#[test]
fn cursor_lifecycle() {
    let kinds = kinds(
        "DECLARE c CURSOR LOCAL FAST_FORWARD FOR SELECT id FROM t; \
         OPEN c; \
         FETCH NEXT FROM c INTO @id; \
         WHILE @@FETCH_STATUS = 0 FETCH NEXT FROM c INTO @id; \
         CLOSE c; \
         DEALLOCATE c;",
    );
    assert_eq!(
        kinds,
        ["DeclareCursor", "OpenCursor", "FetchCursor", "While", "CloseCursor", "DeallocateCursor"]
    );
}

#[test]
fn set_statements() {
    let kinds = kinds(
        "SET NOCOUNT ON; \
         SET XACT_ABORT ON; \
         SET TRANSACTION ISOLATION LEVEL SNAPSHOT; \
         SET IDENTITY_INSERT dbo.t ON; \
         SET STATISTICS IO, TIME ON; \
         SET ROWCOUNT 100; \
         SET DEADLOCK_PRIORITY LOW; \
         SET @v = 1;",
    );
    assert_eq!(
        kinds,
        [
            "PredicateSet",
            "PredicateSet",
            "SetTransactionIsolationLevel",
            "SetIdentityInsert",
            "SetStatistics",
            "SetRowCount",
            "GeneralSet",
            "SetVariable",
        ]
    );
}

#[test]
fn transactions() {
    let script = parse_script(
        "BEGIN TRAN t1 WITH MARK 'nightly'; \
         SAVE TRANSACTION sp1; \
         ROLLBACK TRANSACTION sp1; \
         COMMIT TRAN t1;",
    );
    let statements: Vec<&Statement> = script.statements().collect();
    let Statement::BeginTransaction(begin) = statements[0] else {
        panic!("expected BEGIN TRAN");
    };
    assert!(begin.mark_defined);
    assert_eq!(begin.name.as_ref().unwrap().value, "t1");
    assert!(matches!(statements[1], Statement::SaveTransaction(_)));
    assert!(matches!(statements[2], Statement::RollbackTransaction(_)));
    assert!(matches!(statements[3], Statement::CommitTransaction(_)));
}

#[test]
fn service_broker_conversation() {
    let kinds = kinds(
        "BEGIN DIALOG CONVERSATION @h \
             FROM SERVICE [//app/sender] TO SERVICE '//app/receiver' \
             ON CONTRACT [//app/contract] WITH ENCRYPTION = OFF; \
         SEND ON CONVERSATION @h MESSAGE TYPE [//app/msg] (@body); \
         END CONVERSATION @h WITH CLEANUP;",
    );
    assert_eq!(kinds, ["BeginDialog", "Send", "EndConversation"]);
}

#[test]
fn use_and_execute_as() {
    let kinds = kinds("USE [Sales]; EXECUTE AS USER = 'auditor'; REVERT;");
    assert_eq!(kinds, ["Use", "ExecuteAs", "Revert"]);
}
