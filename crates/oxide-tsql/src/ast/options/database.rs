//! Database options (`ALTER DATABASE … SET`, `CREATE DATABASE … WITH`),
//! query store options and file declarations.

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use super::{OptionState, OptionValue};
use crate::ast::{Identifier, Literal};
use crate::lexer::Span;

option_kinds! {
    /// Database option names.
    pub enum DatabaseOptionKind {
        AcceleratedDatabaseRecovery = "ACCELERATED_DATABASE_RECOVERY" => Custom,
        AllowSnapshotIsolation = "ALLOW_SNAPSHOT_ISOLATION" => OnOff,
        AnsiNullDefault = "ANSI_NULL_DEFAULT" => OnOff,
        AnsiNulls = "ANSI_NULLS" => OnOff,
        AnsiPadding = "ANSI_PADDING" => OnOff,
        AnsiWarnings = "ANSI_WARNINGS" => OnOff,
        ArithAbort = "ARITHABORT" => OnOff,
        AutoClose = "AUTO_CLOSE" => OnOff,
        AutoCreateStatistics = "AUTO_CREATE_STATISTICS" => OnOff,
        AutoShrink = "AUTO_SHRINK" => OnOff,
        AutoUpdateStatistics = "AUTO_UPDATE_STATISTICS" => OnOff,
        AutoUpdateStatisticsAsync = "AUTO_UPDATE_STATISTICS_ASYNC" => OnOff,
        AutomaticTuning = "AUTOMATIC_TUNING" => Custom,
        CatalogCollation = "CATALOG_COLLATION" => Identifier,
        ChangeTracking = "CHANGE_TRACKING" => Custom,
        CompatibilityLevel = "COMPATIBILITY_LEVEL" => Integer,
        ConcatNullYieldsNull = "CONCAT_NULL_YIELDS_NULL" => OnOff,
        Containment = "CONTAINMENT" => Enumerated(&["NONE", "PARTIAL"]),
        CursorCloseOnCommit = "CURSOR_CLOSE_ON_COMMIT" => OnOff,
        CursorDefault = "CURSOR_DEFAULT" => Enumerated(&["LOCAL", "GLOBAL"]),
        DataRetention = "DATA_RETENTION" => OnOff,
        DateCorrelationOptimization = "DATE_CORRELATION_OPTIMIZATION" => OnOff,
        DbChaining = "DB_CHAINING" => OnOff,
        DefaultFullTextLanguage = "DEFAULT_FULLTEXT_LANGUAGE" => Literal,
        DefaultLanguage = "DEFAULT_LANGUAGE" => Literal,
        DelayedDurability = "DELAYED_DURABILITY" => Enumerated(&["DISABLED", "ALLOWED", "FORCED"]),
        DisableBroker = "DISABLE_BROKER" => Flag,
        Edition = "EDITION" => String,
        Emergency = "EMERGENCY" => Flag,
        EnableBroker = "ENABLE_BROKER" => Flag,
        Encryption = "ENCRYPTION" => Enumerated(&["ON", "OFF", "SUSPEND", "RESUME"]),
        ErrorBrokerConversations = "ERROR_BROKER_CONVERSATIONS" => Flag,
        FileStream = "FILESTREAM" => Custom,
        HonorBrokerPriority = "HONOR_BROKER_PRIORITY" => OnOff,
        Ledger = "LEDGER" => OnOff,
        MaxSize = "MAXSIZE" => Quantity,
        MemoryOptimizedElevateToSnapshot = "MEMORY_OPTIMIZED_ELEVATE_TO_SNAPSHOT" => OnOff,
        MixedPageAllocation = "MIXED_PAGE_ALLOCATION" => OnOff,
        MultiUser = "MULTI_USER" => Flag,
        NestedTriggers = "NESTED_TRIGGERS" => OnOff,
        NewBroker = "NEW_BROKER" => Flag,
        NumericRoundAbort = "NUMERIC_ROUNDABORT" => OnOff,
        Offline = "OFFLINE" => Flag,
        Online = "ONLINE" => Flag,
        PageVerify = "PAGE_VERIFY" => Enumerated(&["CHECKSUM", "TORN_PAGE_DETECTION", "NONE"]),
        Parameterization = "PARAMETERIZATION" => Enumerated(&["SIMPLE", "FORCED"]),
        PersistentLogBuffer = "PERSISTENT_LOG_BUFFER" => Custom,
        QueryStore = "QUERY_STORE" => Custom,
        QuotedIdentifier = "QUOTED_IDENTIFIER" => OnOff,
        ReadCommittedSnapshot = "READ_COMMITTED_SNAPSHOT" => OnOff,
        ReadOnly = "READ_ONLY" => Flag,
        ReadWrite = "READ_WRITE" => Flag,
        Recovery = "RECOVERY" => Enumerated(&["FULL", "BULK_LOGGED", "SIMPLE"]),
        RecursiveTriggers = "RECURSIVE_TRIGGERS" => OnOff,
        RestrictedUser = "RESTRICTED_USER" => Flag,
        ServiceObjective = "SERVICE_OBJECTIVE" => Literal,
        SingleUser = "SINGLE_USER" => Flag,
        SupplementalLogging = "SUPPLEMENTAL_LOGGING" => OnOff,
        TargetRecoveryTime = "TARGET_RECOVERY_TIME" => Quantity,
        TemporalHistoryRetention = "TEMPORAL_HISTORY_RETENTION" => OnOff,
        TornPageDetection = "TORN_PAGE_DETECTION" => OnOff,
        TransformNoiseWords = "TRANSFORM_NOISE_WORDS" => OnOff,
        Trustworthy = "TRUSTWORTHY" => OnOff,
        TwoDigitYearCutoff = "TWO_DIGIT_YEAR_CUTOFF" => Integer,
    }
}

general_option! {
    /// A database option whose value follows the kind's shape.
    GeneralDatabaseOption, DatabaseOptionKind
}

/// One option of `ALTER DATABASE … SET` or `CREATE DATABASE … WITH`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum DatabaseOption {
    /// `NAME = value` or a bare flag.
    General(GeneralDatabaseOption),
    /// `QUERY_STORE …`.
    QueryStore(QueryStoreDatabaseOption),
    /// `CHANGE_TRACKING …`.
    ChangeTracking(ChangeTrackingDatabaseOption),
    /// `AUTOMATIC_TUNING …`.
    AutomaticTuning(AutomaticTuningDatabaseOption),
    /// `FILESTREAM (…)`.
    FileStream(FileStreamDatabaseOption),
    /// `ACCELERATED_DATABASE_RECOVERY = ON (…)`.
    AcceleratedDatabaseRecovery(AcceleratedDatabaseRecoveryDatabaseOption),
    /// `PERSISTENT_LOG_BUFFER = ON (DIRECTORY_NAME = '…')`.
    PersistentLogBuffer(PersistentLogBufferDatabaseOption),
}

impl DatabaseOption {
    /// Returns the option's kind.
    #[must_use]
    pub const fn option_kind(&self) -> DatabaseOptionKind {
        match self {
            Self::General(o) => o.option_kind,
            Self::QueryStore(o) => o.option_kind,
            Self::ChangeTracking(o) => o.option_kind,
            Self::AutomaticTuning(o) => o.option_kind,
            Self::FileStream(o) => o.option_kind,
            Self::AcceleratedDatabaseRecovery(o) => o.option_kind,
            Self::PersistentLogBuffer(o) => o.option_kind,
        }
    }
}

/// `QUERY_STORE [= ON|OFF] [( sub-options )]`, `QUERY_STORE CLEAR [ALL]`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct QueryStoreDatabaseOption {
    /// Always [`DatabaseOptionKind::QueryStore`].
    pub option_kind: DatabaseOptionKind,
    /// `CLEAR`.
    pub clear: bool,
    /// `CLEAR ALL`.
    pub clear_all: bool,
    /// `= ON` / `= OFF`.
    pub option_state: OptionState,
    /// The parenthesized sub-options.
    pub options: Vec<QueryStoreOption>,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// Query store sub-option names.
    pub enum QueryStoreOptionKind {
        CleanupPolicy = "CLEANUP_POLICY" => Custom,
        DataFlushIntervalSeconds = "DATA_FLUSH_INTERVAL_SECONDS" => Integer,
        IntervalLengthMinutes = "INTERVAL_LENGTH_MINUTES" => Integer,
        MaxPlansPerQuery = "MAX_PLANS_PER_QUERY" => Integer,
        MaxStorageSizeMb = "MAX_STORAGE_SIZE_MB" => Integer,
        OperationMode = "OPERATION_MODE" => Custom,
        QueryCaptureMode = "QUERY_CAPTURE_MODE" => Custom,
        QueryCapturePolicy = "QUERY_CAPTURE_POLICY" => Custom,
        SizeBasedCleanupMode = "SIZE_BASED_CLEANUP_MODE" => Custom,
        WaitStatsCaptureMode = "WAIT_STATS_CAPTURE_MODE" => OnOff,
    }
}

/// One query store sub-option.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum QueryStoreOption {
    /// `OPERATION_MODE = READ_ONLY | READ_WRITE`.
    DesiredState(QueryStoreDesiredStateOption),
    /// `QUERY_CAPTURE_MODE = ALL | AUTO | NONE | CUSTOM`.
    CapturePolicy(QueryStoreCapturePolicyOption),
    /// `SIZE_BASED_CLEANUP_MODE = AUTO | OFF`.
    SizeCleanupPolicy(QueryStoreSizeCleanupPolicyOption),
    /// `DATA_FLUSH_INTERVAL_SECONDS = n`.
    DataFlushInterval(QueryStoreDataFlushIntervalOption),
    /// `INTERVAL_LENGTH_MINUTES = n`.
    IntervalLength(QueryStoreIntervalLengthOption),
    /// `MAX_STORAGE_SIZE_MB = n`.
    MaxStorageSize(QueryStoreMaxStorageSizeOption),
    /// `MAX_PLANS_PER_QUERY = n`.
    MaxPlansPerQuery(QueryStoreMaxPlansPerQueryOption),
    /// `CLEANUP_POLICY = (STALE_QUERY_THRESHOLD_DAYS = n)`.
    TimeCleanupPolicy(QueryStoreTimeCleanupPolicyOption),
    /// `WAIT_STATS_CAPTURE_MODE = ON | OFF`.
    WaitStatsCapture(QueryStoreWaitStatsCaptureOption),
    /// `QUERY_CAPTURE_POLICY = (…)`.
    CustomCapturePolicy(QueryStoreCustomCapturePolicyOption),
}

impl QueryStoreOption {
    /// Returns the option's kind.
    #[must_use]
    pub const fn option_kind(&self) -> QueryStoreOptionKind {
        match self {
            Self::DesiredState(o) => o.option_kind,
            Self::CapturePolicy(o) => o.option_kind,
            Self::SizeCleanupPolicy(o) => o.option_kind,
            Self::DataFlushInterval(o) => o.option_kind,
            Self::IntervalLength(o) => o.option_kind,
            Self::MaxStorageSize(o) => o.option_kind,
            Self::MaxPlansPerQuery(o) => o.option_kind,
            Self::TimeCleanupPolicy(o) => o.option_kind,
            Self::WaitStatsCapture(o) => o.option_kind,
            Self::CustomCapturePolicy(o) => o.option_kind,
        }
    }

    /// Returns the kind this option's struct is built for.
    #[must_use]
    pub const fn expected_kind(&self) -> QueryStoreOptionKind {
        match self {
            Self::DesiredState(_) => QueryStoreOptionKind::OperationMode,
            Self::CapturePolicy(_) => QueryStoreOptionKind::QueryCaptureMode,
            Self::SizeCleanupPolicy(_) => QueryStoreOptionKind::SizeBasedCleanupMode,
            Self::DataFlushInterval(_) => QueryStoreOptionKind::DataFlushIntervalSeconds,
            Self::IntervalLength(_) => QueryStoreOptionKind::IntervalLengthMinutes,
            Self::MaxStorageSize(_) => QueryStoreOptionKind::MaxStorageSizeMb,
            Self::MaxPlansPerQuery(_) => QueryStoreOptionKind::MaxPlansPerQuery,
            Self::TimeCleanupPolicy(_) => QueryStoreOptionKind::CleanupPolicy,
            Self::WaitStatsCapture(_) => QueryStoreOptionKind::WaitStatsCaptureMode,
            Self::CustomCapturePolicy(_) => QueryStoreOptionKind::QueryCapturePolicy,
        }
    }
}

keyword_enum! {
    /// `OPERATION_MODE` values.
    pub enum QueryStoreDesiredState {
        ReadOnly = "READ_ONLY",
        ReadWrite = "READ_WRITE",
        Off = "OFF",
    }
}

keyword_enum! {
    /// `QUERY_CAPTURE_MODE` values.
    pub enum QueryStoreCapturePolicyOptionKind {
        All = "ALL",
        Auto = "AUTO",
        None = "NONE",
        Custom = "CUSTOM",
    }
}

keyword_enum! {
    /// `SIZE_BASED_CLEANUP_MODE` values.
    pub enum QueryStoreSizeCleanupPolicyOptionKind {
        Auto = "AUTO",
        Off = "OFF",
    }
}

/// `OPERATION_MODE = …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct QueryStoreDesiredStateOption {
    /// Always [`QueryStoreOptionKind::OperationMode`].
    pub option_kind: QueryStoreOptionKind,
    /// The requested mode.
    pub value: QueryStoreDesiredState,
    /// Source span.
    pub span: Span,
}

/// `QUERY_CAPTURE_MODE = …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct QueryStoreCapturePolicyOption {
    /// Always [`QueryStoreOptionKind::QueryCaptureMode`].
    pub option_kind: QueryStoreOptionKind,
    /// The capture mode.
    pub value: QueryStoreCapturePolicyOptionKind,
    /// Source span.
    pub span: Span,
}

/// `SIZE_BASED_CLEANUP_MODE = …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct QueryStoreSizeCleanupPolicyOption {
    /// Always [`QueryStoreOptionKind::SizeBasedCleanupMode`].
    pub option_kind: QueryStoreOptionKind,
    /// The cleanup mode.
    pub value: QueryStoreSizeCleanupPolicyOptionKind,
    /// Source span.
    pub span: Span,
}

/// `DATA_FLUSH_INTERVAL_SECONDS = n`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct QueryStoreDataFlushIntervalOption {
    /// Always [`QueryStoreOptionKind::DataFlushIntervalSeconds`].
    pub option_kind: QueryStoreOptionKind,
    /// Seconds.
    pub flush_interval: Literal,
    /// Source span.
    pub span: Span,
}

/// `INTERVAL_LENGTH_MINUTES = n`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct QueryStoreIntervalLengthOption {
    /// Always [`QueryStoreOptionKind::IntervalLengthMinutes`].
    pub option_kind: QueryStoreOptionKind,
    /// Minutes.
    pub statistics_interval: Literal,
    /// Source span.
    pub span: Span,
}

/// `MAX_STORAGE_SIZE_MB = n`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct QueryStoreMaxStorageSizeOption {
    /// Always [`QueryStoreOptionKind::MaxStorageSizeMb`].
    pub option_kind: QueryStoreOptionKind,
    /// Megabytes.
    pub max_qds_size: Literal,
    /// Source span.
    pub span: Span,
}

/// `MAX_PLANS_PER_QUERY = n`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct QueryStoreMaxPlansPerQueryOption {
    /// Always [`QueryStoreOptionKind::MaxPlansPerQuery`].
    pub option_kind: QueryStoreOptionKind,
    /// Plan count.
    pub max_plans_per_query: Literal,
    /// Source span.
    pub span: Span,
}

/// `CLEANUP_POLICY = (STALE_QUERY_THRESHOLD_DAYS = n)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct QueryStoreTimeCleanupPolicyOption {
    /// Always [`QueryStoreOptionKind::CleanupPolicy`].
    pub option_kind: QueryStoreOptionKind,
    /// Days.
    pub stale_query_threshold: Literal,
    /// Source span.
    pub span: Span,
}

/// `WAIT_STATS_CAPTURE_MODE = ON | OFF`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct QueryStoreWaitStatsCaptureOption {
    /// Always [`QueryStoreOptionKind::WaitStatsCaptureMode`].
    pub option_kind: QueryStoreOptionKind,
    /// The state.
    pub option_state: OptionState,
    /// Source span.
    pub span: Span,
}

/// `QUERY_CAPTURE_POLICY = ( … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct QueryStoreCustomCapturePolicyOption {
    /// Always [`QueryStoreOptionKind::QueryCapturePolicy`].
    pub option_kind: QueryStoreOptionKind,
    /// The thresholds.
    pub options: Vec<QueryStoreCapturePolicyThreshold>,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// Custom capture policy threshold names.
    pub enum QueryStoreCapturePolicyThresholdKind {
        ExecutionCount = "EXECUTION_COUNT" => Integer,
        StaleCapturePolicyThreshold = "STALE_CAPTURE_POLICY_THRESHOLD" => Quantity,
        TotalCompileCpuTimeMs = "TOTAL_COMPILE_CPU_TIME_MS" => Integer,
        TotalExecutionCpuTimeMs = "TOTAL_EXECUTION_CPU_TIME_MS" => Integer,
    }
}

general_option! {
    /// One threshold of a custom capture policy.
    QueryStoreCapturePolicyThreshold, QueryStoreCapturePolicyThresholdKind
}

keyword_enum! {
    /// `CHANGE_TRACKING` sub-option names.
    pub enum ChangeTrackingOptionKind {
        AutoCleanup = "AUTO_CLEANUP",
        ChangeRetention = "CHANGE_RETENTION",
    }
}

/// `CHANGE_TRACKING [= ON|OFF] [( details )]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ChangeTrackingDatabaseOption {
    /// Always [`DatabaseOptionKind::ChangeTracking`].
    pub option_kind: DatabaseOptionKind,
    /// `= ON` / `= OFF`.
    pub option_state: OptionState,
    /// `AUTO_CLEANUP = …`, `CHANGE_RETENTION = n DAYS`.
    pub details: Vec<ChangeTrackingOptionDetail>,
    /// Source span.
    pub span: Span,
}

/// One `CHANGE_TRACKING` detail.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ChangeTrackingOptionDetail {
    /// The detail.
    pub option_kind: ChangeTrackingOptionKind,
    /// `ON|OFF` for `AUTO_CLEANUP`, a quantity for `CHANGE_RETENTION`.
    pub value: OptionValue,
    /// Source span.
    pub span: Span,
}

keyword_enum! {
    /// `AUTOMATIC_TUNING = …` states.
    pub enum AutomaticTuningState {
        Inherit = "INHERIT",
        Custom = "CUSTOM",
        Auto = "AUTO",
    }
}

keyword_enum! {
    /// Automatic tuning sub-option names.
    pub enum AutomaticTuningOptionKind {
        ForceLastGoodPlan = "FORCE_LAST_GOOD_PLAN",
        CreateIndex = "CREATE_INDEX",
        DropIndex = "DROP_INDEX",
        MaintainIndex = "MAINTAIN_INDEX",
    }
}

keyword_enum! {
    /// Automatic tuning sub-option values.
    pub enum AutomaticTuningOptionState {
        On = "ON",
        Off = "OFF",
        Default = "DEFAULT",
    }
}

/// `AUTOMATIC_TUNING = INHERIT|CUSTOM|AUTO` or `AUTOMATIC_TUNING ( … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AutomaticTuningDatabaseOption {
    /// Always [`DatabaseOptionKind::AutomaticTuning`].
    pub option_kind: DatabaseOptionKind,
    /// The `= state` form.
    pub automatic_tuning_state: Option<AutomaticTuningState>,
    /// The parenthesized form.
    pub options: Vec<AutomaticTuningOption>,
    /// Source span.
    pub span: Span,
}

/// `FORCE_LAST_GOOD_PLAN = ON` and friends.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AutomaticTuningOption {
    /// The sub-option.
    pub option_kind: AutomaticTuningOptionKind,
    /// Its state.
    pub value: AutomaticTuningOptionState,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// `FILESTREAM ( … )` sub-option names.
    pub enum FileStreamOptionKind {
        DirectoryName = "DIRECTORY_NAME" => Literal,
        NonTransactedAccess = "NON_TRANSACTED_ACCESS" => Enumerated(&["OFF", "READ_ONLY", "FULL"]),
    }
}

general_option! {
    /// One `FILESTREAM` sub-option.
    FileStreamOption, FileStreamOptionKind
}

/// `FILESTREAM ( … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct FileStreamDatabaseOption {
    /// Always [`DatabaseOptionKind::FileStream`].
    pub option_kind: DatabaseOptionKind,
    /// The sub-options.
    pub options: Vec<FileStreamOption>,
    /// Source span.
    pub span: Span,
}

/// `ACCELERATED_DATABASE_RECOVERY = ON [(PERSISTENT_VERSION_STORE_FILEGROUP = fg)]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AcceleratedDatabaseRecoveryDatabaseOption {
    /// Always [`DatabaseOptionKind::AcceleratedDatabaseRecovery`].
    pub option_kind: DatabaseOptionKind,
    /// `ON` / `OFF`.
    pub option_state: OptionState,
    /// The persistent version store filegroup.
    pub filegroup: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `PERSISTENT_LOG_BUFFER = ON (DIRECTORY_NAME = 'path')`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct PersistentLogBufferDatabaseOption {
    /// Always [`DatabaseOptionKind::PersistentLogBuffer`].
    pub option_kind: DatabaseOptionKind,
    /// `ON` / `OFF`.
    pub option_state: OptionState,
    /// The DAX volume path.
    pub directory_name: Option<Literal>,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// File declaration option names.
    pub enum FileDeclarationOptionKind {
        FileGrowth = "FILEGROWTH" => Quantity,
        FileName = "FILENAME" => String,
        MaxSize = "MAXSIZE" => Quantity,
        Name = "NAME" => Literal,
        NewName = "NEWNAME" => Literal,
        Offline = "OFFLINE" => Flag,
        Size = "SIZE" => Quantity,
    }
}

general_option! {
    /// One option of a file declaration.
    FileDeclarationOption, FileDeclarationOptionKind
}

/// `[PRIMARY] ( NAME = …, FILENAME = …, SIZE = … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct FileDeclaration {
    /// `PRIMARY`.
    pub is_primary: bool,
    /// The options.
    pub options: Vec<FileDeclarationOption>,
    /// Source span.
    pub span: Span,
}

/// `FILEGROUP name [CONTAINS FILESTREAM] [DEFAULT] file, …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct FileGroupDefinition {
    /// The filegroup name.
    pub name: Identifier,
    /// `CONTAINS FILESTREAM`.
    pub contains_file_stream: bool,
    /// `CONTAINS MEMORY_OPTIMIZED_DATA`.
    pub contains_memory_optimized_data: bool,
    /// `DEFAULT`.
    pub is_default: bool,
    /// The files.
    pub file_declarations: Vec<FileDeclaration>,
    /// Source span.
    pub span: Span,
}
