//! Database-level DDL and maintenance statements: `CREATE`/`ALTER DATABASE`,
//! scoped configuration, `DBCC`, backup and restore, and the server control
//! commands.

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use super::{
    BackupOption, DatabaseOption, DbccNamedLiteral, DbccOption, FileDeclaration,
    FileGroupDefinition, Identifier, IdentifierOrValueExpression, Literal, OptionValue,
    RestoreOption, ScalarExpression,
};
use crate::lexer::Span;

/// How a database is attached by `CREATE DATABASE … FOR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum AttachMode {
    /// A new database.
    None,
    /// `FOR ATTACH`
    Attach,
    /// `FOR ATTACH_REBUILD_LOG`
    AttachRebuildLog,
}

/// `CREATE DATABASE`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreateDatabaseStatement {
    /// The database.
    pub database_name: Identifier,
    /// `CONTAINMENT = NONE | PARTIAL`.
    pub containment: Option<DatabaseOption>,
    /// Data files of the primary file group, after `ON [PRIMARY]`.
    pub file_declarations: Vec<FileDeclaration>,
    /// Further `FILEGROUP` definitions.
    pub file_groups: Vec<FileGroupDefinition>,
    /// `LOG ON` files.
    pub log_on: Vec<FileDeclaration>,
    /// `COLLATE name`.
    pub collation: Option<Identifier>,
    /// `WITH …` options.
    pub options: Vec<DatabaseOption>,
    /// `FOR ATTACH`.
    pub attach_mode: AttachMode,
    /// `AS SNAPSHOT OF source`.
    pub database_snapshot: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// How `ALTER DATABASE … SET` treats open transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum AlterDatabaseTerminationKind {
    /// `WITH NO_WAIT`
    NoWait,
    /// `WITH ROLLBACK IMMEDIATE`
    RollbackImmediate,
    /// `WITH ROLLBACK AFTER n [SECONDS]`
    RollbackAfter,
}

/// The `WITH` termination clause of `ALTER DATABASE … SET`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterDatabaseTermination {
    /// The termination mode.
    pub kind: AlterDatabaseTerminationKind,
    /// Seconds of `ROLLBACK AFTER`.
    pub rollback_after: Option<Literal>,
    /// Source span.
    pub span: Span,
}

/// `ALTER DATABASE name | CURRENT SET option, … [WITH termination]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterDatabaseSetStatement {
    /// The database; absent with `CURRENT`.
    pub database_name: Option<Identifier>,
    /// `CURRENT`.
    pub use_current: bool,
    /// The options.
    pub options: Vec<DatabaseOption>,
    /// `WITH NO_WAIT | ROLLBACK …`.
    pub termination: Option<AlterDatabaseTermination>,
    /// Source span.
    pub span: Span,
}

/// `ADD [LOG] FILE ( … ), … [TO FILEGROUP fg]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterDatabaseAddFile {
    /// `LOG`.
    pub is_log: bool,
    /// The added files.
    pub file_declarations: Vec<FileDeclaration>,
    /// `TO FILEGROUP fg`.
    pub file_group: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `MODIFY FILE ( … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterDatabaseModifyFile {
    /// The changed file properties.
    pub file_declaration: FileDeclaration,
    /// Source span.
    pub span: Span,
}

/// `REMOVE FILE name`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterDatabaseRemoveFile {
    /// The logical file name.
    pub file: Identifier,
    /// Source span.
    pub span: Span,
}

/// `ADD FILEGROUP fg [CONTAINS FILESTREAM | MEMORY_OPTIMIZED_DATA]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterDatabaseAddFileGroup {
    /// The file group.
    pub file_group: Identifier,
    /// `CONTAINS FILESTREAM`.
    pub contains_file_stream: bool,
    /// `CONTAINS MEMORY_OPTIMIZED_DATA`.
    pub contains_memory_optimized_data: bool,
    /// Source span.
    pub span: Span,
}

/// Updatability of a file group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum FileGroupUpdatability {
    /// `READ_ONLY` / `READONLY`
    ReadOnly,
    /// `READ_WRITE` / `READWRITE`
    ReadWrite,
}

/// `MODIFY FILEGROUP fg DEFAULT | NAME = new | READ_ONLY | READ_WRITE | AUTOGROW_…`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterDatabaseModifyFileGroup {
    /// The file group.
    pub file_group: Identifier,
    /// `DEFAULT`.
    pub is_default: bool,
    /// `NAME = new`.
    pub new_name: Option<Identifier>,
    /// `READ_ONLY` / `READ_WRITE`.
    pub updatability: Option<FileGroupUpdatability>,
    /// `AUTOGROW_ALL_FILES` (true) or `AUTOGROW_SINGLE_FILE` (false).
    pub autogrow_all_files: Option<bool>,
    /// Source span.
    pub span: Span,
}

/// `REMOVE FILEGROUP fg`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterDatabaseRemoveFileGroup {
    /// The file group.
    pub file_group: Identifier,
    /// Source span.
    pub span: Span,
}

/// `MODIFY NAME = new`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterDatabaseModifyName {
    /// The new name.
    pub new_name: Identifier,
    /// Source span.
    pub span: Span,
}

/// `COLLATE name`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterDatabaseCollate {
    /// The collation.
    pub collation: Identifier,
    /// Source span.
    pub span: Span,
}

/// File, file group, name and collation changes of `ALTER DATABASE`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum AlterDatabaseAction {
    /// `ADD [LOG] FILE`
    AddFile(AlterDatabaseAddFile),
    /// `MODIFY FILE`
    ModifyFile(AlterDatabaseModifyFile),
    /// `REMOVE FILE`
    RemoveFile(AlterDatabaseRemoveFile),
    /// `ADD FILEGROUP`
    AddFileGroup(AlterDatabaseAddFileGroup),
    /// `MODIFY FILEGROUP`
    ModifyFileGroup(AlterDatabaseModifyFileGroup),
    /// `REMOVE FILEGROUP`
    RemoveFileGroup(AlterDatabaseRemoveFileGroup),
    /// `MODIFY NAME`
    ModifyName(AlterDatabaseModifyName),
    /// `COLLATE`
    Collate(AlterDatabaseCollate),
}

/// `ALTER DATABASE name | CURRENT action`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterDatabaseStatement {
    /// The database; absent with `CURRENT`.
    pub database_name: Option<Identifier>,
    /// `CURRENT`.
    pub use_current: bool,
    /// The change.
    pub action: AlterDatabaseAction,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// `ALTER DATABASE SCOPED CONFIGURATION SET` names. Values may also be
    /// `PRIMARY`, so every kind reads a literal.
    pub enum DatabaseConfigurationOptionKind {
        AcceleratedPlanForcing = "ACCELERATED_PLAN_FORCING" => Literal,
        BatchModeAdaptiveJoins = "BATCH_MODE_ADAPTIVE_JOINS" => Literal,
        BatchModeMemoryGrantFeedback = "BATCH_MODE_MEMORY_GRANT_FEEDBACK" => Literal,
        BatchModeOnRowstore = "BATCH_MODE_ON_ROWSTORE" => Literal,
        DeferredCompilationTv = "DEFERRED_COMPILATION_TV" => Literal,
        ElevateOnline = "ELEVATE_ONLINE" => Literal,
        ElevateResumable = "ELEVATE_RESUMABLE" => Literal,
        GlobalTemporaryTableAutoDrop = "GLOBAL_TEMPORARY_TABLE_AUTO_DROP" => Literal,
        IdentityCache = "IDENTITY_CACHE" => Literal,
        InterleavedExecutionTvf = "INTERLEAVED_EXECUTION_TVF" => Literal,
        IsolateSecurityPolicyCardinality = "ISOLATE_SECURITY_POLICY_CARDINALITY" => Literal,
        LastQueryPlanStats = "LAST_QUERY_PLAN_STATS" => Literal,
        LegacyCardinalityEstimation = "LEGACY_CARDINALITY_ESTIMATION" => Literal,
        LightweightQueryProfiling = "LIGHTWEIGHT_QUERY_PROFILING" => Literal,
        MaxDop = "MAXDOP" => Literal,
        OptimizeForAdHocWorkloads = "OPTIMIZE_FOR_AD_HOC_WORKLOADS" => Literal,
        ParameterSniffing = "PARAMETER_SNIFFING" => Literal,
        QueryOptimizerHotfixes = "QUERY_OPTIMIZER_HOTFIXES" => Literal,
        RowModeMemoryGrantFeedback = "ROW_MODE_MEMORY_GRANT_FEEDBACK" => Literal,
        TsqlScalarUdfInlining = "TSQL_SCALAR_UDF_INLINING" => Literal,
        VerboseTruncationWarnings = "VERBOSE_TRUNCATION_WARNINGS" => Literal,
        XtpProcedureExecutionStatistics = "XTP_PROCEDURE_EXECUTION_STATISTICS" => Literal,
        XtpQueryExecutionStatistics = "XTP_QUERY_EXECUTION_STATISTICS" => Literal,
    }
}

general_option! {
    /// One scoped configuration setting.
    DatabaseConfigurationSetOption, DatabaseConfigurationOptionKind
}

/// `ALTER DATABASE SCOPED CONFIGURATION [FOR SECONDARY] SET name = value`
/// or `… CLEAR PROCEDURE_CACHE [plan_handle]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterDatabaseScopedConfigurationStatement {
    /// `FOR SECONDARY`.
    pub secondary: bool,
    /// The `SET` option.
    pub option: Option<DatabaseConfigurationSetOption>,
    /// `CLEAR PROCEDURE_CACHE`.
    pub clear_procedure_cache: bool,
    /// The plan handle cleared.
    pub plan_handle: Option<Literal>,
    /// Source span.
    pub span: Span,
}

keyword_enum! {
    /// `DBCC` commands.
    pub enum DbccCommand {
        CheckAlloc = "CHECKALLOC",
        CheckCatalog = "CHECKCATALOG",
        CheckConstraints = "CHECKCONSTRAINTS",
        CheckDb = "CHECKDB",
        CheckFileGroup = "CHECKFILEGROUP",
        CheckIdent = "CHECKIDENT",
        CheckTable = "CHECKTABLE",
        CleanTable = "CLEANTABLE",
        DbReindex = "DBREINDEX",
        DropCleanBuffers = "DROPCLEANBUFFERS",
        FreeProcCache = "FREEPROCCACHE",
        FreeSessionCache = "FREESESSIONCACHE",
        FreeSystemCache = "FREESYSTEMCACHE",
        Help = "HELP",
        IndexDefrag = "INDEXDEFRAG",
        InputBuffer = "INPUTBUFFER",
        OpenTran = "OPENTRAN",
        OutputBuffer = "OUTPUTBUFFER",
        Page = "PAGE",
        ProcCache = "PROCCACHE",
        ShowContig = "SHOWCONTIG",
        ShowStatistics = "SHOW_STATISTICS",
        ShrinkDatabase = "SHRINKDATABASE",
        ShrinkFile = "SHRINKFILE",
        SqlPerf = "SQLPERF",
        TraceOff = "TRACEOFF",
        TraceOn = "TRACEON",
        TraceStatus = "TRACESTATUS",
        UpdateUsage = "UPDATEUSAGE",
        UserOptions = "USEROPTIONS",
    }
}

/// `DBCC command [( args )] [WITH options]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DbccStatement {
    /// The command.
    pub command: DbccCommand,
    /// The parenthesized arguments.
    pub literals: Vec<DbccNamedLiteral>,
    /// `WITH NO_INFOMSGS, …`.
    pub options: Vec<DbccOption>,
    /// Source span.
    pub span: Span,
}

/// Backup media kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum DeviceType {
    /// A logical backup device name.
    Logical,
    /// `DISK = …`
    Disk,
    /// `TAPE = …`
    Tape,
    /// `URL = …`
    Url,
}

/// One backup device.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DeviceInfo {
    /// The device kind.
    pub device_type: DeviceType,
    /// A logical device name.
    pub logical_device: Option<Identifier>,
    /// A path, URL or variable.
    pub physical_device: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `MIRROR TO device, …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct MirrorToClause {
    /// The mirror devices.
    pub devices: Vec<DeviceInfo>,
    /// Source span.
    pub span: Span,
}

/// Which part of a database a backup or restore covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum BackupRestoreItemKind {
    /// `FILE = …`
    Files,
    /// `FILEGROUP = …`
    FileGroups,
    /// `PAGE = …`
    Page,
    /// `READ_WRITE_FILEGROUPS`
    ReadWriteFileGroups,
}

/// `FILE = 'a'`, `FILEGROUP = ('x', 'y')`, …
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BackupRestoreFileInfo {
    /// The item kind.
    pub item_kind: BackupRestoreItemKind,
    /// The named items.
    pub items: Vec<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `BACKUP DATABASE db [files] TO device, … [MIRROR TO …] [WITH …]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BackupDatabaseStatement {
    /// The database or a variable holding its name.
    pub database_name: IdentifierOrValueExpression,
    /// File or file group selection.
    pub files: Vec<BackupRestoreFileInfo>,
    /// Target devices.
    pub devices: Vec<DeviceInfo>,
    /// `MIRROR TO` clauses.
    pub mirror_to_clauses: Vec<MirrorToClause>,
    /// Options.
    pub options: Vec<BackupOption>,
    /// Source span.
    pub span: Span,
}

/// `BACKUP LOG db TO device, … [WITH …]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BackupTransactionLogStatement {
    /// The database.
    pub database_name: IdentifierOrValueExpression,
    /// Target devices.
    pub devices: Vec<DeviceInfo>,
    /// `MIRROR TO` clauses.
    pub mirror_to_clauses: Vec<MirrorToClause>,
    /// Options.
    pub options: Vec<BackupOption>,
    /// Source span.
    pub span: Span,
}

/// What a `RESTORE` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum RestoreStatementKind {
    /// `RESTORE DATABASE`
    Database,
    /// `RESTORE LOG`
    TransactionLog,
    /// `RESTORE FILELISTONLY`
    FileListOnly,
    /// `RESTORE VERIFYONLY`
    VerifyOnly,
    /// `RESTORE LABELONLY`
    LabelOnly,
    /// `RESTORE HEADERONLY`
    HeaderOnly,
    /// `RESTORE REWINDONLY`
    RewindOnly,
}

/// `RESTORE DATABASE | LOG db [files] [FROM device, …] [WITH …]` and the
/// `…ONLY` inspection forms.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct RestoreStatement {
    /// The restore form.
    pub kind: RestoreStatementKind,
    /// The database.
    pub database_name: Option<IdentifierOrValueExpression>,
    /// File or page selection.
    pub files: Vec<BackupRestoreFileInfo>,
    /// Source devices.
    pub devices: Vec<DeviceInfo>,
    /// Options.
    pub options: Vec<RestoreOption>,
    /// Source span.
    pub span: Span,
}

/// `BACKUP [SERVICE] MASTER KEY TO FILE = 'f' ENCRYPTION BY PASSWORD = 'p'`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BackupMasterKeyStatement {
    /// `SERVICE MASTER KEY`.
    pub is_service: bool,
    /// The file.
    pub file: Literal,
    /// The encryption password.
    pub password: Literal,
    /// Source span.
    pub span: Span,
}

/// `RESTORE [SERVICE] MASTER KEY FROM FILE = 'f' DECRYPTION BY PASSWORD = 'p'
/// [ENCRYPTION BY PASSWORD = 'q'] [FORCE]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct RestoreMasterKeyStatement {
    /// `SERVICE MASTER KEY`.
    pub is_service: bool,
    /// The file.
    pub file: Literal,
    /// The decryption password.
    pub password: Literal,
    /// The new encryption password.
    pub encryption_password: Option<Literal>,
    /// `FORCE`.
    pub is_force: bool,
    /// Source span.
    pub span: Span,
}

/// `SHUTDOWN [WITH NOWAIT]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ShutdownStatement {
    /// `WITH NOWAIT`.
    pub with_no_wait: bool,
    /// Source span.
    pub span: Span,
}

/// `CHECKPOINT [duration]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CheckpointStatement {
    /// The requested duration in seconds.
    pub duration: Option<Literal>,
    /// Source span.
    pub span: Span,
}

/// `RECONFIGURE [WITH OVERRIDE]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ReconfigureStatement {
    /// `WITH OVERRIDE`.
    pub with_override: bool,
    /// Source span.
    pub span: Span,
}

/// `KILL session [WITH STATUSONLY]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct KillStatement {
    /// The session id or unit of work.
    pub parameter: ScalarExpression,
    /// `WITH STATUSONLY`.
    pub with_status_only: bool,
    /// Source span.
    pub span: Span,
}

/// `DROP DATABASE [IF EXISTS] db, …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DropDatabaseStatement {
    /// `IF EXISTS`.
    pub is_if_exists: bool,
    /// The databases.
    pub databases: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

impl DatabaseConfigurationSetOption {
    /// Returns true when the value is `PRIMARY` (inherit from the primary
    /// replica).
    #[must_use]
    pub fn is_primary(&self) -> bool {
        matches!(
            &self.value,
            Some(OptionValue::Literal(literal)) if literal.value.eq_ignore_ascii_case("PRIMARY")
        )
    }
}
