//! Table and index options.

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use super::{LiteralRange, OptionState, OptionValue};
use crate::ast::{ColumnWithSortOrder, Identifier, Literal, SchemaObjectName};
use crate::lexer::Span;

option_kinds! {
    /// Table option names (`CREATE TABLE … WITH ( … )`, `ALTER TABLE … SET ( … )`).
    pub enum TableOptionKind {
        ClusteredColumnstoreIndex = "CLUSTERED COLUMNSTORE" => Custom,
        ClusteredIndex = "CLUSTERED INDEX" => Custom,
        DataCompression = "DATA_COMPRESSION" => Custom,
        Distribution = "DISTRIBUTION" => Custom,
        Durability = "DURABILITY" => Enumerated(&["SCHEMA_ONLY", "SCHEMA_AND_DATA"]),
        FileTableCollateFileName = "FILETABLE_COLLATE_FILENAME" => Identifier,
        FileTableDirectory = "FILETABLE_DIRECTORY" => Literal,
        Heap = "HEAP" => Custom,
        Ledger = "LEDGER" => Custom,
        LockEscalation = "LOCK_ESCALATION" => Enumerated(&["TABLE", "AUTO", "DISABLE"]),
        MemoryOptimized = "MEMORY_OPTIMIZED" => OnOff,
        SystemVersioning = "SYSTEM_VERSIONING" => Custom,
        XmlCompression = "XML_COMPRESSION" => Custom,
    }
}

general_option! {
    /// A table option whose value follows the kind's shape.
    GeneralTableOption, TableOptionKind
}

/// One table option.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum TableOption {
    /// `NAME = value`.
    General(GeneralTableOption),
    /// `SYSTEM_VERSIONING = ON ( … )`.
    SystemVersioning(SystemVersioningTableOption),
    /// `LEDGER = ON ( … )`.
    Ledger(LedgerTableOption),
    /// `DATA_COMPRESSION = …` / `XML_COMPRESSION = …`.
    Compression(TableCompressionOption),
    /// `DISTRIBUTION = HASH(…) | ROUND_ROBIN | REPLICATE`.
    Distribution(TableDistributionOption),
    /// `HEAP`, `CLUSTERED COLUMNSTORE INDEX`, `CLUSTERED INDEX (…)`.
    Index(TableIndexOption),
}

impl TableOption {
    /// Returns the option's kind.
    #[must_use]
    pub const fn option_kind(&self) -> TableOptionKind {
        match self {
            Self::General(o) => o.option_kind,
            Self::SystemVersioning(o) => o.option_kind,
            Self::Ledger(o) => o.option_kind,
            Self::Compression(o) => o.option_kind,
            Self::Distribution(o) => o.option_kind,
            Self::Index(o) => o.option_kind,
        }
    }
}

/// `HISTORY_RETENTION_PERIOD = n unit | INFINITE`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct RetentionPeriodDefinition {
    /// `INFINITE`.
    pub is_infinity: bool,
    /// The count.
    pub duration: Option<Literal>,
    /// The unit word, upper-cased.
    pub units: Option<super::ValueUnit>,
    /// Source span.
    pub span: Span,
}

/// `SYSTEM_VERSIONING = ON [( HISTORY_TABLE = t [, DATA_CONSISTENCY_CHECK = ON] … )]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SystemVersioningTableOption {
    /// Always [`TableOptionKind::SystemVersioning`].
    pub option_kind: TableOptionKind,
    /// `ON` / `OFF`.
    pub option_state: OptionState,
    /// `HISTORY_TABLE = name`.
    pub history_table: Option<SchemaObjectName>,
    /// `DATA_CONSISTENCY_CHECK = ON|OFF`.
    pub consistency_check_enabled: OptionState,
    /// `HISTORY_RETENTION_PERIOD = …`.
    pub retention_period: Option<RetentionPeriodDefinition>,
    /// Source span.
    pub span: Span,
}

keyword_enum! {
    /// Ledger view column option names.
    pub enum LedgerViewOptionKind {
        TransactionIdColumnName = "TRANSACTION_ID_COLUMN_NAME",
        SequenceNumberColumnName = "SEQUENCE_NUMBER_COLUMN_NAME",
        OperationTypeColumnName = "OPERATION_TYPE_COLUMN_NAME",
        OperationTypeDescColumnName = "OPERATION_TYPE_DESC_COLUMN_NAME",
    }
}

/// `TRANSACTION_ID_COLUMN_NAME = col` and friends.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct LedgerViewColumnOption {
    /// Which column.
    pub option_kind: LedgerViewOptionKind,
    /// The column name.
    pub column_name: Identifier,
    /// Source span.
    pub span: Span,
}

/// `LEDGER_VIEW = name [( … )]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct LedgerViewOption {
    /// The view name.
    pub view_name: SchemaObjectName,
    /// Column renames.
    pub options: Vec<LedgerViewColumnOption>,
    /// Source span.
    pub span: Span,
}

/// `LEDGER = ON [( APPEND_ONLY = ON, LEDGER_VIEW = … )]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct LedgerTableOption {
    /// Always [`TableOptionKind::Ledger`].
    pub option_kind: TableOptionKind,
    /// `ON` / `OFF`.
    pub option_state: OptionState,
    /// `APPEND_ONLY = ON|OFF`.
    pub append_only: OptionState,
    /// `LEDGER_VIEW = …`.
    pub ledger_view_option: Option<LedgerViewOption>,
    /// Source span.
    pub span: Span,
}

keyword_enum! {
    /// Compression levels.
    pub enum DataCompressionLevel {
        None = "NONE",
        Row = "ROW",
        Page = "PAGE",
        Columnstore = "COLUMNSTORE",
        ColumnstoreArchive = "COLUMNSTORE_ARCHIVE",
        On = "ON",
        Off = "OFF",
    }
}

keyword_enum! {
    /// Which compression an option configures.
    pub enum CompressionKind {
        Data = "DATA_COMPRESSION",
        Xml = "XML_COMPRESSION",
    }
}

/// `DATA_COMPRESSION = level [ON PARTITIONS ( ranges )]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DataCompressionOption {
    /// Data or XML compression.
    pub compression_kind: CompressionKind,
    /// The level.
    pub compression_level: DataCompressionLevel,
    /// Partition ranges.
    pub partition_ranges: Vec<LiteralRange>,
    /// Source span.
    pub span: Span,
}

/// A compression option in a table option list.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct TableCompressionOption {
    /// [`TableOptionKind::DataCompression`] or [`TableOptionKind::XmlCompression`].
    pub option_kind: TableOptionKind,
    /// The compression settings.
    pub compression: DataCompressionOption,
    /// Source span.
    pub span: Span,
}

keyword_enum! {
    /// Synapse distribution policies.
    pub enum TableDistributionPolicy {
        Hash = "HASH",
        RoundRobin = "ROUND_ROBIN",
        Replicate = "REPLICATE",
    }
}

/// `DISTRIBUTION = HASH(col, …) | ROUND_ROBIN | REPLICATE`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct TableDistributionOption {
    /// Always [`TableOptionKind::Distribution`].
    pub option_kind: TableOptionKind,
    /// The policy.
    pub policy: TableDistributionPolicy,
    /// Hash columns.
    pub distribution_columns: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

keyword_enum! {
    /// Synapse table storage kinds.
    pub enum TableIndexType {
        Heap = "HEAP",
        ClusteredColumnstore = "CLUSTERED COLUMNSTORE INDEX",
        Clustered = "CLUSTERED INDEX",
    }
}

/// `HEAP`, `CLUSTERED COLUMNSTORE INDEX [ORDER (…)]`, `CLUSTERED INDEX (…)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct TableIndexOption {
    /// The matching [`TableOptionKind`].
    pub option_kind: TableOptionKind,
    /// The storage kind.
    pub index_type: TableIndexType,
    /// Key or order columns.
    pub columns: Vec<ColumnWithSortOrder>,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// Index option names.
    pub enum IndexOptionKind {
        AllowPageLocks = "ALLOW_PAGE_LOCKS" => OnOff,
        AllowRowLocks = "ALLOW_ROW_LOCKS" => OnOff,
        BucketCount = "BUCKET_COUNT" => Integer,
        CompressAllRowGroups = "COMPRESS_ALL_ROW_GROUPS" => OnOff,
        CompressionDelay = "COMPRESSION_DELAY" => Quantity,
        DataCompression = "DATA_COMPRESSION" => Custom,
        DropExisting = "DROP_EXISTING" => OnOff,
        FillFactor = "FILLFACTOR" => Integer,
        IgnoreDupKey = "IGNORE_DUP_KEY" => OnOff,
        LobCompaction = "LOB_COMPACTION" => OnOff,
        MaxDop = "MAXDOP" => Integer,
        MaxDuration = "MAX_DURATION" => Quantity,
        Online = "ONLINE" => OnOff,
        OptimizeForSequentialKey = "OPTIMIZE_FOR_SEQUENTIAL_KEY" => OnOff,
        PadIndex = "PAD_INDEX" => OnOff,
        Resumable = "RESUMABLE" => OnOff,
        SortInTempDb = "SORT_IN_TEMPDB" => OnOff,
        StatisticsIncremental = "STATISTICS_INCREMENTAL" => OnOff,
        StatisticsNoRecompute = "STATISTICS_NORECOMPUTE" => OnOff,
        XmlCompression = "XML_COMPRESSION" => Custom,
    }
}

general_option! {
    /// An index option whose value follows the kind's shape.
    GeneralIndexOption, IndexOptionKind
}

/// One index option.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum IndexOption {
    /// `NAME = value`.
    General(GeneralIndexOption),
    /// `DATA_COMPRESSION = …` / `XML_COMPRESSION = …`.
    Compression(IndexCompressionOption),
}

impl IndexOption {
    /// Returns the option's kind.
    #[must_use]
    pub const fn option_kind(&self) -> IndexOptionKind {
        match self {
            Self::General(o) => o.option_kind,
            Self::Compression(o) => o.option_kind,
        }
    }

    /// Returns the plain value of a general option.
    #[must_use]
    pub fn value(&self) -> Option<&OptionValue> {
        match self {
            Self::General(o) => o.value.as_ref(),
            Self::Compression(_) => None,
        }
    }
}

/// A compression option in an index option list.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct IndexCompressionOption {
    /// [`IndexOptionKind::DataCompression`] or [`IndexOptionKind::XmlCompression`].
    pub option_kind: IndexOptionKind,
    /// The compression settings.
    pub compression: DataCompressionOption,
    /// Source span.
    pub span: Span,
}
