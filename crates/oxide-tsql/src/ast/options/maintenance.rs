//! Bulk load, backup/restore and DBCC options.

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use crate::ast::{ColumnWithSortOrder, Identifier, Literal, ScalarExpression};
use crate::lexer::Span;

option_kinds! {
    /// `BULK INSERT … WITH ( … )` and `OPENROWSET(BULK …)` option names.
    pub enum BulkInsertOptionKind {
        BatchSize = "BATCHSIZE" => Integer,
        CheckConstraints = "CHECK_CONSTRAINTS" => Flag,
        CodePage = "CODEPAGE" => Literal,
        DataFileType = "DATAFILETYPE" => String,
        DataSource = "DATA_SOURCE" => String,
        ErrorFile = "ERRORFILE" => String,
        ErrorFileDataSource = "ERRORFILE_DATA_SOURCE" => String,
        EscapeChar = "ESCAPECHAR" => String,
        FieldQuote = "FIELDQUOTE" => String,
        FieldTerminator = "FIELDTERMINATOR" => String,
        FireTriggers = "FIRE_TRIGGERS" => Flag,
        FirstRow = "FIRSTROW" => Integer,
        Format = "FORMAT" => String,
        FormatFile = "FORMATFILE" => String,
        FormatFileDataSource = "FORMATFILE_DATA_SOURCE" => String,
        HeaderRow = "HEADER_ROW" => Literal,
        KeepIdentity = "KEEPIDENTITY" => Flag,
        KeepNulls = "KEEPNULLS" => Flag,
        KilobytesPerBatch = "KILOBYTES_PER_BATCH" => Integer,
        LastRow = "LASTROW" => Integer,
        MaxErrors = "MAXERRORS" => Integer,
        Order = "ORDER" => Custom,
        ParserVersion = "PARSER_VERSION" => String,
        RowsPerBatch = "ROWS_PER_BATCH" => Integer,
        RowTerminator = "ROWTERMINATOR" => String,
        SingleBlob = "SINGLE_BLOB" => Flag,
        SingleClob = "SINGLE_CLOB" => Flag,
        SingleNClob = "SINGLE_NCLOB" => Flag,
        TabLock = "TABLOCK" => Flag,
    }
}

general_option! {
    /// A bulk option whose value follows the kind's shape.
    GeneralBulkInsertOption, BulkInsertOptionKind
}

/// One bulk load option.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum BulkInsertOption {
    /// `NAME = value` or a flag.
    General(GeneralBulkInsertOption),
    /// `ORDER ( col [ASC|DESC], … ) [UNIQUE]`.
    Order(OrderBulkInsertOption),
}

impl BulkInsertOption {
    /// Returns the option's kind.
    #[must_use]
    pub const fn option_kind(&self) -> BulkInsertOptionKind {
        match self {
            Self::General(o) => o.option_kind,
            Self::Order(o) => o.option_kind,
        }
    }
}

/// `ORDER ( col [ASC|DESC], … ) [UNIQUE]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct OrderBulkInsertOption {
    /// Always [`BulkInsertOptionKind::Order`].
    pub option_kind: BulkInsertOptionKind,
    /// The sort columns.
    pub columns: Vec<ColumnWithSortOrder>,
    /// `UNIQUE`.
    pub is_unique: bool,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// `BACKUP … WITH` option names.
    pub enum BackupOptionKind {
        BlockSize = "BLOCKSIZE" => Integer,
        BufferCount = "BUFFERCOUNT" => Integer,
        Checksum = "CHECKSUM" => Flag,
        Compression = "COMPRESSION" => Flag,
        ContinueAfterError = "CONTINUE_AFTER_ERROR" => Flag,
        CopyOnly = "COPY_ONLY" => Flag,
        Description = "DESCRIPTION" => String,
        Differential = "DIFFERENTIAL" => Flag,
        Encryption = "ENCRYPTION" => Custom,
        ExpireDate = "EXPIREDATE" => Literal,
        Format = "FORMAT" => Flag,
        Init = "INIT" => Flag,
        MaxTransferSize = "MAXTRANSFERSIZE" => Integer,
        MediaDescription = "MEDIADESCRIPTION" => String,
        MediaName = "MEDIANAME" => String,
        MediaPassword = "MEDIAPASSWORD" => String,
        Name = "NAME" => String,
        NoChecksum = "NO_CHECKSUM" => Flag,
        NoCompression = "NO_COMPRESSION" => Flag,
        NoFormat = "NOFORMAT" => Flag,
        NoInit = "NOINIT" => Flag,
        NoRecovery = "NORECOVERY" => Flag,
        NoRewind = "NOREWIND" => Flag,
        NoSkip = "NOSKIP" => Flag,
        NoTruncate = "NO_TRUNCATE" => Flag,
        NoUnload = "NOUNLOAD" => Flag,
        Password = "PASSWORD" => String,
        Restart = "RESTART" => Flag,
        RetainDays = "RETAINDAYS" => Integer,
        Rewind = "REWIND" => Flag,
        Skip = "SKIP" => Flag,
        Standby = "STANDBY" => String,
        Stats = "STATS" => Integer,
        StopOnError = "STOP_ON_ERROR" => Flag,
        Unload = "UNLOAD" => Flag,
    }
}

general_option! {
    /// A backup option whose value follows the kind's shape.
    GeneralBackupOption, BackupOptionKind
}

/// One `BACKUP` option.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum BackupOption {
    /// `NAME = value` or a flag.
    General(GeneralBackupOption),
    /// `ENCRYPTION ( ALGORITHM = …, SERVER CERTIFICATE = … )`.
    Encryption(BackupEncryptionOption),
}

impl BackupOption {
    /// Returns the option's kind.
    #[must_use]
    pub const fn option_kind(&self) -> BackupOptionKind {
        match self {
            Self::General(o) => o.option_kind,
            Self::Encryption(o) => o.option_kind,
        }
    }
}

keyword_enum! {
    /// Backup encryptor kinds.
    pub enum BackupEncryptorType {
        ServerCertificate = "SERVER CERTIFICATE",
        ServerAsymmetricKey = "SERVER ASYMMETRIC KEY",
    }
}

/// `ENCRYPTION ( ALGORITHM = AES_256, SERVER CERTIFICATE = cert )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BackupEncryptionOption {
    /// Always [`BackupOptionKind::Encryption`].
    pub option_kind: BackupOptionKind,
    /// The algorithm name.
    pub algorithm: Identifier,
    /// The encryptor kind.
    pub encryptor_type: BackupEncryptorType,
    /// The encryptor name.
    pub encryptor_name: Identifier,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// `RESTORE … WITH` option names.
    pub enum RestoreOptionKind {
        BlockSize = "BLOCKSIZE" => Integer,
        BufferCount = "BUFFERCOUNT" => Integer,
        Checksum = "CHECKSUM" => Flag,
        ContinueAfterError = "CONTINUE_AFTER_ERROR" => Flag,
        Credential = "CREDENTIAL" => Flag,
        EnableBroker = "ENABLE_BROKER" => Flag,
        ErrorBrokerConversations = "ERROR_BROKER_CONVERSATIONS" => Flag,
        File = "FILE" => Literal,
        KeepCdc = "KEEP_CDC" => Flag,
        KeepReplication = "KEEP_REPLICATION" => Flag,
        LoadHistory = "LOADHISTORY" => Flag,
        MaxTransferSize = "MAXTRANSFERSIZE" => Integer,
        MediaName = "MEDIANAME" => String,
        MediaPassword = "MEDIAPASSWORD" => String,
        Move = "MOVE" => Custom,
        NewBroker = "NEW_BROKER" => Flag,
        NoChecksum = "NO_CHECKSUM" => Flag,
        NoRecovery = "NORECOVERY" => Flag,
        NoRewind = "NOREWIND" => Flag,
        NoUnload = "NOUNLOAD" => Flag,
        Partial = "PARTIAL" => Flag,
        Password = "PASSWORD" => String,
        Recovery = "RECOVERY" => Flag,
        Replace = "REPLACE" => Flag,
        Restart = "RESTART" => Flag,
        RestrictedUser = "RESTRICTED_USER" => Flag,
        Rewind = "REWIND" => Flag,
        Standby = "STANDBY" => String,
        Stats = "STATS" => Integer,
        StopAt = "STOPAT" => Literal,
        StopAtMark = "STOPATMARK" => String,
        StopBeforeMark = "STOPBEFOREMARK" => String,
        StopOnError = "STOP_ON_ERROR" => Flag,
        Unload = "UNLOAD" => Flag,
    }
}

general_option! {
    /// A restore option whose value follows the kind's shape.
    GeneralRestoreOption, RestoreOptionKind
}

/// One `RESTORE` option.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum RestoreOption {
    /// `NAME = value` or a flag.
    General(GeneralRestoreOption),
    /// `MOVE 'logical' TO 'physical'`.
    Move(MoveRestoreOption),
}

impl RestoreOption {
    /// Returns the option's kind.
    #[must_use]
    pub const fn option_kind(&self) -> RestoreOptionKind {
        match self {
            Self::General(o) => o.option_kind,
            Self::Move(o) => o.option_kind,
        }
    }
}

/// `MOVE 'logical' TO 'physical'`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct MoveRestoreOption {
    /// Always [`RestoreOptionKind::Move`].
    pub option_kind: RestoreOptionKind,
    /// The logical file name.
    pub logical_file_name: ScalarExpression,
    /// The target path.
    pub os_file_name: ScalarExpression,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// `DBCC … WITH` option names.
    pub enum DbccOptionKind {
        AllErrorMsgs = "ALL_ERRORMSGS" => Flag,
        AllLevels = "ALL_LEVELS" => Flag,
        CountRows = "COUNT_ROWS" => Flag,
        DataPurity = "DATA_PURITY" => Flag,
        EstimateOnly = "ESTIMATEONLY" => Flag,
        ExtendedLogicalChecks = "EXTENDED_LOGICAL_CHECKS" => Flag,
        FastOption = "FAST" => Flag,
        Histogram = "HISTOGRAM" => Flag,
        MaxDop = "MAXDOP" => Integer,
        NoIndex = "NOINDEX" => Flag,
        NoInfoMsgs = "NO_INFOMSGS" => Flag,
        PhysicalOnly = "PHYSICAL_ONLY" => Flag,
        StatHeader = "STAT_HEADER" => Flag,
        TableResults = "TABLERESULTS" => Flag,
        TabLock = "TABLOCK" => Flag,
    }
}

general_option! {
    /// One `DBCC` option.
    DbccOption, DbccOptionKind
}

/// A `DBCC` argument, optionally named (`DBCC SHRINKFILE (name = 1)`).
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DbccNamedLiteral {
    /// `name =` prefix, when present.
    pub name: Option<Identifier>,
    /// The argument.
    pub value: ScalarExpression,
    /// Source span.
    pub span: Span,
}

impl DbccNamedLiteral {
    /// Returns the argument when it is a literal.
    #[must_use]
    pub fn literal(&self) -> Option<&Literal> {
        match &self.value {
            ScalarExpression::Literal(literal) => Some(literal),
            _ => None,
        }
    }
}
