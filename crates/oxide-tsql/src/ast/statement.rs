//! The parse root and the statement sum.

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use super::*;
use crate::lexer::Span;

/// The root of a parse: `GO`-separated batches in source order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
#[ast(node = Script)]
pub struct Script {
    /// The batches.
    pub batches: Vec<Batch>,
    /// Source span.
    pub span: Span,
}

impl Script {
    /// Iterates over every top-level statement of every batch.
    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.batches.iter().flat_map(|b| b.statements.iter())
    }

    /// Returns true if the script holds no batches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

/// Statements compiled together, terminated by `GO [n]` or end of input.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
#[ast(node = Batch)]
pub struct Batch {
    /// The statements.
    pub statements: Vec<Statement>,
    /// The `n` of `GO n`.
    pub repeat_count: Option<u32>,
    /// Source span.
    pub span: Span,
}

macro_rules! statements {
    ($($(#[$doc:meta])* $variant:ident($ty:ty),)*) => {
        /// Any top-level or nested statement.
        ///
        /// Create, alter and create-or-alter forms share one body type whose
        /// `action` field says which keyword introduced it.
        #[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
        #[serde(untagged)]
        #[ast(node = Statement)]
        pub enum Statement {
            $(
                $(#[$doc])*
                $variant(Box<$ty>),
            )*
        }

        impl Statement {
            /// Returns the variant name, e.g. `"CreateTable"`.
            #[must_use]
            pub const fn kind(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => stringify!($variant),)*
                }
            }
        }
    };
}

statements! {
    // DML
    /// `SELECT`
    Select(SelectStatement),
    /// `INSERT`
    Insert(InsertStatement),
    /// `UPDATE`
    Update(UpdateStatement),
    /// `DELETE`
    Delete(DeleteStatement),
    /// `MERGE`
    Merge(MergeStatement),
    /// `TRUNCATE TABLE`
    TruncateTable(TruncateTableStatement),
    /// `BULK INSERT`
    BulkInsert(BulkInsertStatement),
    /// `UPDATE STATISTICS`
    UpdateStatistics(UpdateStatisticsStatement),

    // Transactions and Service Broker
    /// `BEGIN TRAN`
    BeginTransaction(BeginTransactionStatement),
    /// `COMMIT`
    CommitTransaction(CommitTransactionStatement),
    /// `ROLLBACK`
    RollbackTransaction(RollbackTransactionStatement),
    /// `SAVE TRAN`
    SaveTransaction(SaveTransactionStatement),
    /// `BEGIN DIALOG`
    BeginDialog(BeginDialogStatement),
    /// `BEGIN CONVERSATION TIMER`
    BeginConversationTimer(BeginConversationTimerStatement),
    /// `RECEIVE`
    Receive(ReceiveStatement),
    /// `SEND`
    Send(SendStatement),
    /// `END CONVERSATION`
    EndConversation(EndConversationStatement),
    /// `MOVE CONVERSATION`
    MoveConversation(MoveConversationStatement),
    /// `GET CONVERSATION GROUP`
    GetConversationGroup(GetConversationGroupStatement),

    // Control flow
    /// `IF`
    If(IfStatement),
    /// `WHILE`
    While(WhileStatement),
    /// `BEGIN … END`
    BeginEndBlock(BeginEndBlockStatement),
    /// `BEGIN TRY … END CATCH`
    TryCatch(TryCatchStatement),
    /// `THROW`
    Throw(ThrowStatement),
    /// `RETURN`
    Return(ReturnStatement),
    /// `GOTO`
    Goto(GoToStatement),
    /// `label:`
    Label(LabelStatement),
    /// `BREAK`
    Break(BreakStatement),
    /// `CONTINUE`
    Continue(ContinueStatement),
    /// `WAITFOR`
    WaitFor(WaitForStatement),
    /// `PRINT`
    Print(PrintStatement),
    /// `RAISERROR`
    RaisError(RaiseErrorStatement),
    /// `DECLARE @v …`
    DeclareVariable(DeclareVariableStatement),
    /// `DECLARE @t TABLE (…)`
    DeclareTableVariable(DeclareTableVariableStatement),
    /// `SET @v = …`
    SetVariable(SetVariableStatement),
    /// `EXECUTE`
    Execute(ExecuteStatement),
    /// `EXECUTE AS`
    ExecuteAs(ExecuteAsStatement),
    /// `REVERT`
    Revert(RevertStatement),
    /// `USE`
    Use(UseStatement),

    // Cursors
    /// `DECLARE c CURSOR`
    DeclareCursor(DeclareCursorStatement),
    /// `OPEN`
    OpenCursor(OpenCursorStatement),
    /// `FETCH`
    FetchCursor(FetchCursorStatement),
    /// `CLOSE`
    CloseCursor(CloseCursorStatement),
    /// `DEALLOCATE`
    DeallocateCursor(DeallocateCursorStatement),

    // Session SET
    /// `SET NOCOUNT ON` and other flag lists
    PredicateSet(PredicateSetStatement),
    /// `SET ROWCOUNT`
    SetRowCount(SetRowCountStatement),
    /// `SET TEXTSIZE`
    SetTextSize(SetTextSizeStatement),
    /// `SET TRANSACTION ISOLATION LEVEL`
    SetTransactionIsolationLevel(SetTransactionIsolationLevelStatement),
    /// `SET IDENTITY_INSERT`
    SetIdentityInsert(SetIdentityInsertStatement),
    /// `SET STATISTICS`
    SetStatistics(SetStatisticsStatement),
    /// `SET DATEFORMAT` and other valued commands
    GeneralSet(GeneralSetStatement),

    // Permissions
    /// `GRANT`
    Grant(GrantStatement),
    /// `REVOKE`
    Revoke(RevokeStatement),
    /// `DENY`
    Deny(DenyStatement),
    /// `ADD SIGNATURE`
    AddSignature(SignatureStatement),
    /// `DROP SIGNATURE`
    DropSignature(SignatureStatement),

    // Maintenance
    /// `DBCC`
    Dbcc(DbccStatement),
    /// `BACKUP DATABASE`
    BackupDatabase(BackupDatabaseStatement),
    /// `BACKUP LOG`
    BackupTransactionLog(BackupTransactionLogStatement),
    /// `RESTORE`
    Restore(RestoreStatement),
    /// `BACKUP [SERVICE] MASTER KEY`
    BackupMasterKey(BackupMasterKeyStatement),
    /// `RESTORE [SERVICE] MASTER KEY`
    RestoreMasterKey(RestoreMasterKeyStatement),
    /// `SHUTDOWN`
    Shutdown(ShutdownStatement),
    /// `CHECKPOINT`
    Checkpoint(CheckpointStatement),
    /// `RECONFIGURE`
    Reconfigure(ReconfigureStatement),
    /// `KILL`
    Kill(KillStatement),

    // Schema objects
    /// `CREATE TABLE`
    CreateTable(CreateTableStatement),
    /// `ALTER TABLE`
    AlterTable(AlterTableStatement),
    /// `CREATE | ALTER VIEW`
    View(ViewStatement),
    /// `CREATE INDEX`
    CreateIndex(CreateIndexStatement),
    /// `CREATE COLUMNSTORE INDEX`
    CreateColumnStoreIndex(CreateColumnStoreIndexStatement),
    /// `ALTER INDEX`
    AlterIndex(AlterIndexStatement),
    /// `CREATE | ALTER PROCEDURE`
    Procedure(ProcedureStatement),
    /// `CREATE | ALTER FUNCTION`
    Function(FunctionStatement),
    /// `CREATE | ALTER TRIGGER`
    Trigger(TriggerStatement),
    /// `CREATE TYPE t FROM base`
    CreateTypeUddt(CreateTypeUddtStatement),
    /// `CREATE TYPE t AS TABLE`
    CreateTypeTable(CreateTypeTableStatement),
    /// `CREATE TYPE t EXTERNAL NAME`
    CreateTypeUdt(CreateTypeUdtStatement),
    /// `CREATE | ALTER SEQUENCE`
    Sequence(SequenceStatement),
    /// `CREATE SCHEMA`
    CreateSchema(CreateSchemaStatement),
    /// `ALTER SCHEMA … TRANSFER`
    AlterSchema(AlterSchemaStatement),
    /// `CREATE SYNONYM`
    CreateSynonym(CreateSynonymStatement),
    /// `CREATE PARTITION FUNCTION`
    CreatePartitionFunction(CreatePartitionFunctionStatement),
    /// `ALTER PARTITION FUNCTION`
    AlterPartitionFunction(AlterPartitionFunctionStatement),
    /// `CREATE PARTITION SCHEME`
    CreatePartitionScheme(CreatePartitionSchemeStatement),
    /// `ALTER PARTITION SCHEME`
    AlterPartitionScheme(AlterPartitionSchemeStatement),

    // Databases
    /// `CREATE DATABASE`
    CreateDatabase(CreateDatabaseStatement),
    /// `ALTER DATABASE … SET`
    AlterDatabaseSet(AlterDatabaseSetStatement),
    /// `ALTER DATABASE` file, name and collation actions
    AlterDatabase(AlterDatabaseStatement),
    /// `ALTER DATABASE SCOPED CONFIGURATION`
    AlterDatabaseScopedConfiguration(AlterDatabaseScopedConfigurationStatement),

    // Principals and keys
    /// `CREATE [SERVER] ROLE`
    CreateRole(CreateRoleStatement),
    /// `ALTER [SERVER] ROLE`
    AlterRole(AlterRoleStatement),
    /// `CREATE USER`
    CreateUser(CreateUserStatement),
    /// `ALTER USER`
    AlterUser(AlterUserStatement),
    /// `CREATE LOGIN`
    CreateLogin(CreateLoginStatement),
    /// `ALTER LOGIN … WITH`
    AlterLoginOptions(AlterLoginOptionsStatement),
    /// `ALTER LOGIN … ENABLE | DISABLE`
    AlterLoginEnableDisable(AlterLoginEnableDisableStatement),
    /// `ALTER LOGIN … ADD | DROP CREDENTIAL`
    AlterLoginAddDropCredential(AlterLoginAddDropCredentialStatement),
    /// `CREATE MASTER KEY`
    CreateMasterKey(CreateMasterKeyStatement),
    /// `ALTER MASTER KEY`
    AlterMasterKey(AlterMasterKeyStatement),
    /// `CREATE COLUMN MASTER KEY`
    CreateColumnMasterKey(CreateColumnMasterKeyStatement),
    /// `CREATE | ALTER COLUMN ENCRYPTION KEY`
    ColumnEncryptionKey(ColumnEncryptionKeyStatement),
    /// `CREATE | ALTER CRYPTOGRAPHIC PROVIDER`
    CryptographicProvider(CryptographicProviderStatement),
    /// `CREATE | ALTER SERVER AUDIT`
    ServerAudit(ServerAuditStatement),
    /// `CREATE | ALTER SERVER | DATABASE AUDIT SPECIFICATION`
    AuditSpecification(AuditSpecificationStatement),
    /// `CREATE | ALTER SECURITY POLICY`
    SecurityPolicy(SecurityPolicyStatement),

    // Server objects
    /// `CREATE AVAILABILITY GROUP`
    CreateAvailabilityGroup(CreateAvailabilityGroupStatement),
    /// `ALTER AVAILABILITY GROUP`
    AlterAvailabilityGroup(AlterAvailabilityGroupStatement),
    /// `CREATE FULLTEXT CATALOG`
    CreateFullTextCatalog(CreateFullTextCatalogStatement),
    /// `ALTER FULLTEXT CATALOG`
    AlterFullTextCatalog(AlterFullTextCatalogStatement),
    /// `CREATE FULLTEXT INDEX`
    CreateFullTextIndex(CreateFullTextIndexStatement),
    /// `ALTER FULLTEXT INDEX`
    AlterFullTextIndex(AlterFullTextIndexStatement),
    /// `CREATE | ALTER EVENT SESSION`
    EventSession(EventSessionStatement),
    /// `CREATE | ALTER RESOURCE POOL`
    ResourcePool(ResourcePoolStatement),
    /// `CREATE | ALTER WORKLOAD GROUP`
    WorkloadGroup(WorkloadGroupStatement),
    /// `CREATE WORKLOAD CLASSIFIER`
    CreateWorkloadClassifier(CreateWorkloadClassifierStatement),
    /// `ALTER RESOURCE GOVERNOR`
    AlterResourceGovernor(AlterResourceGovernorStatement),
    /// `CREATE | ALTER EXTERNAL DATA SOURCE`
    ExternalDataSource(ExternalDataSourceStatement),
    /// `CREATE EXTERNAL FILE FORMAT`
    CreateExternalFileFormat(CreateExternalFileFormatStatement),
    /// `CREATE EXTERNAL TABLE`
    CreateExternalTable(CreateExternalTableStatement),
    /// `CREATE | ALTER EXTERNAL LANGUAGE`
    ExternalLanguage(ExternalLanguageStatement),
    /// `CREATE | ALTER EXTERNAL LIBRARY`
    ExternalLibrary(ExternalLibraryStatement),
    /// `CREATE | ALTER QUEUE`
    Queue(QueueStatement),

    // Drops
    /// `DROP TABLE | VIEW | PROCEDURE | …` over schema-scoped names
    DropObjects(DropObjectsStatement),
    /// `DROP LOGIN | USER | ROLE | …` of one named object
    DropNamedObject(DropNamedObjectStatement),
    /// `DROP INDEX`
    DropIndex(DropIndexStatement),
    /// `DROP DATABASE`
    DropDatabase(DropDatabaseStatement),
    /// `DROP TRIGGER`
    DropTrigger(DropTriggerStatement),
    /// `DROP EVENT SESSION`
    DropEventSession(DropEventSessionStatement),
    /// `DROP FULLTEXT INDEX`
    DropFullTextIndex(DropFullTextIndexStatement),
    /// `DROP MASTER KEY`
    DropMasterKey(DropMasterKeyStatement),
}

impl From<SelectStatement> for Statement {
    fn from(statement: SelectStatement) -> Self {
        Self::Select(Box::new(statement))
    }
}
