//! Server-level objects: availability groups, full-text catalogs and
//! indexes, event sessions, the resource governor, external objects and
//! Service Broker queues.

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use super::{
    AvailabilityGroupOption, AvailabilityReplicaOption, BooleanExpression, DdlAction,
    EventSessionOption, ExternalDataSourceOption, ExternalFileFormatOption, ExternalTableOption,
    FullTextCatalogOption, FullTextIndexOption, Identifier, IdentifierOrValueExpression, Literal,
    MultiPartIdentifier, OptionValue, QueueOption, ResourcePoolOption, SchemaObjectName,
    SelectStatement, TableDefinition, WorkloadClassifierOption, WorkloadGroupParameter,
};
use crate::lexer::Span;

// ============================================================================
// Availability groups
// ============================================================================

/// `'server' WITH ( option, … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AvailabilityReplica {
    /// The server instance.
    pub server_name: Literal,
    /// The replica options.
    pub options: Vec<AvailabilityReplicaOption>,
    /// Source span.
    pub span: Span,
}

/// `CREATE AVAILABILITY GROUP g [WITH ( … )] FOR [DATABASE d, …] REPLICA ON …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreateAvailabilityGroupStatement {
    /// The group.
    pub name: Identifier,
    /// `WITH ( … )`.
    pub options: Vec<AvailabilityGroupOption>,
    /// `FOR DATABASE d, …`.
    pub databases: Vec<Identifier>,
    /// `REPLICA ON …`.
    pub replicas: Vec<AvailabilityReplica>,
    /// Source span.
    pub span: Span,
}

/// `ALTER AVAILABILITY GROUP` actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum AlterAvailabilityGroupActionType {
    /// `SET ( … )`
    Set,
    /// `ADD DATABASE d`
    AddDatabase,
    /// `REMOVE DATABASE d`
    RemoveDatabase,
    /// `ADD REPLICA ON …`
    AddReplica,
    /// `MODIFY REPLICA ON …`
    ModifyReplica,
    /// `REMOVE REPLICA ON 'server'`
    RemoveReplica,
    /// `JOIN`
    Join,
    /// `ONLINE`
    Online,
    /// `OFFLINE`
    Offline,
    /// `FAILOVER`
    Failover,
    /// `FORCE_FAILOVER_ALLOW_DATA_LOSS`
    ForceFailoverAllowDataLoss,
}

/// `ALTER AVAILABILITY GROUP g action`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterAvailabilityGroupStatement {
    /// The group.
    pub name: Identifier,
    /// The action.
    pub action_type: AlterAvailabilityGroupActionType,
    /// `SET ( … )` options.
    pub options: Vec<AvailabilityGroupOption>,
    /// Added or removed databases.
    pub databases: Vec<Identifier>,
    /// Added, modified or removed replicas.
    pub replicas: Vec<AvailabilityReplica>,
    /// Source span.
    pub span: Span,
}

// ============================================================================
// Full-text search
// ============================================================================

/// `CREATE FULLTEXT CATALOG c [ON FILEGROUP fg] [IN PATH 'p'] [WITH ( … )]
/// [AS DEFAULT] [AUTHORIZATION owner]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreateFullTextCatalogStatement {
    /// The catalog.
    pub name: Identifier,
    /// `ON FILEGROUP fg`.
    pub file_group: Option<Identifier>,
    /// `IN PATH 'p'`.
    pub path: Option<Literal>,
    /// `WITH ACCENT_SENSITIVITY = …`.
    pub options: Vec<FullTextCatalogOption>,
    /// `AS DEFAULT`.
    pub is_default: bool,
    /// `AUTHORIZATION owner`.
    pub owner: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `ALTER FULLTEXT CATALOG` actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum AlterFullTextCatalogAction {
    /// `REBUILD [WITH ACCENT_SENSITIVITY = …]`
    Rebuild,
    /// `REORGANIZE`
    Reorganize,
    /// `AS DEFAULT`
    AsDefault,
}

/// `ALTER FULLTEXT CATALOG c REBUILD | REORGANIZE | AS DEFAULT`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterFullTextCatalogStatement {
    /// The catalog.
    pub name: Identifier,
    /// The action.
    pub action: AlterFullTextCatalogAction,
    /// Rebuild options.
    pub options: Vec<FullTextCatalogOption>,
    /// Source span.
    pub span: Span,
}

/// `col [TYPE COLUMN tc] [LANGUAGE term] [STATISTICAL_SEMANTICS]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct FullTextIndexColumn {
    /// The indexed column.
    pub name: Identifier,
    /// The document type column.
    pub type_column: Option<Identifier>,
    /// The word-breaker language.
    pub language_term: Option<IdentifierOrValueExpression>,
    /// `STATISTICAL_SEMANTICS`.
    pub statistical_semantics: bool,
    /// Source span.
    pub span: Span,
}

/// `ON c [, FILEGROUP fg]` of a full-text index.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct FullTextCatalogAndFileGroup {
    /// The catalog.
    pub catalog_name: Option<Identifier>,
    /// The filegroup.
    pub file_group_name: Option<Identifier>,
    /// `FILEGROUP` was written first.
    pub file_group_is_first: bool,
    /// Source span.
    pub span: Span,
}

/// `CREATE FULLTEXT INDEX ON t ( cols ) KEY INDEX ix [ON catalog] [WITH ( … )]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreateFullTextIndexStatement {
    /// The table.
    pub on_name: SchemaObjectName,
    /// The indexed columns.
    pub full_text_index_columns: Vec<FullTextIndexColumn>,
    /// The unique key index.
    pub key_index_name: Identifier,
    /// `ON catalog`.
    pub catalog_and_file_group: Option<FullTextCatalogAndFileGroup>,
    /// `WITH ( … )`.
    pub options: Vec<FullTextIndexOption>,
    /// Source span.
    pub span: Span,
}

/// `ALTER FULLTEXT INDEX` actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum AlterFullTextIndexActionKind {
    /// `ENABLE`
    Enable,
    /// `DISABLE`
    Disable,
    /// `SET CHANGE_TRACKING …` and friends
    Set,
    /// `ADD ( cols )`
    AddColumns,
    /// `DROP ( cols )`
    DropColumns,
    /// `START FULL POPULATION`
    StartFullPopulation,
    /// `START INCREMENTAL POPULATION`
    StartIncrementalPopulation,
    /// `START UPDATE POPULATION`
    StartUpdatePopulation,
    /// `STOP POPULATION`
    StopPopulation,
    /// `PAUSE POPULATION`
    PausePopulation,
    /// `RESUME POPULATION`
    ResumePopulation,
}

/// `ALTER FULLTEXT INDEX ON t action`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterFullTextIndexStatement {
    /// The table.
    pub on_name: SchemaObjectName,
    /// The action.
    pub action_kind: AlterFullTextIndexActionKind,
    /// Added columns, or dropped ones (names only).
    pub columns: Vec<FullTextIndexColumn>,
    /// Set options, and `WITH NO POPULATION` after column changes.
    pub options: Vec<FullTextIndexOption>,
    /// Source span.
    pub span: Span,
}

// ============================================================================
// Event sessions
// ============================================================================

/// Whether an event session lives on the server or in a database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum EventSessionScope {
    /// `ON SERVER`
    Server,
    /// `ON DATABASE`
    Database,
}

/// `SET name = value` inside an event or target declaration.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct EventDeclarationSetParameter {
    /// The customizable attribute.
    pub event_field: Identifier,
    /// The value.
    pub event_value: OptionValue,
    /// Source span.
    pub span: Span,
}

/// `ADD EVENT package.event [( SET … ACTION ( … ) WHERE … )]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct EventDeclaration {
    /// `package.event`.
    pub object_name: MultiPartIdentifier,
    /// `SET field = value, …`.
    pub set_parameters: Vec<EventDeclarationSetParameter>,
    /// `ACTION ( package.action, … )`.
    pub actions: Vec<MultiPartIdentifier>,
    /// `WHERE predicate`.
    pub predicate: Option<BooleanExpression>,
    /// Source span.
    pub span: Span,
}

/// `ADD TARGET package.target [( SET … )]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct TargetDeclaration {
    /// `package.target`.
    pub object_name: MultiPartIdentifier,
    /// `SET field = value, …`.
    pub set_parameters: Vec<EventDeclarationSetParameter>,
    /// Source span.
    pub span: Span,
}

/// `DROP EVENT e` / `DROP TARGET t`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DropEventSessionElement {
    /// `TARGET` (rather than `EVENT`).
    pub is_target: bool,
    /// The dropped event or target.
    pub object_name: MultiPartIdentifier,
    /// Source span.
    pub span: Span,
}

/// One `ADD` or `DROP` clause of an event session.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum EventSessionElement {
    /// `ADD EVENT …`
    AddEvent(EventDeclaration),
    /// `ADD TARGET …`
    AddTarget(TargetDeclaration),
    /// `DROP EVENT | TARGET …`
    Drop(DropEventSessionElement),
}

/// `STATE = START | STOP` of `ALTER EVENT SESSION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum EventSessionState {
    /// `START`
    Start,
    /// `STOP`
    Stop,
}

/// `CREATE | ALTER EVENT SESSION s ON SERVER | DATABASE elements [WITH ( … )]
/// [STATE = START | STOP]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct EventSessionStatement {
    /// `CREATE` or `ALTER`.
    pub action: DdlAction,
    /// The session.
    pub name: Identifier,
    /// Server or database.
    pub session_scope: EventSessionScope,
    /// Events and targets, in source order.
    pub elements: Vec<EventSessionElement>,
    /// `WITH ( … )`.
    pub options: Vec<EventSessionOption>,
    /// `STATE = …`.
    pub state: Option<EventSessionState>,
    /// Source span.
    pub span: Span,
}

// ============================================================================
// Resource governor
// ============================================================================

/// `CREATE | ALTER RESOURCE POOL p [WITH ( … )]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ResourcePoolStatement {
    /// `CREATE` or `ALTER`.
    pub action: DdlAction,
    /// The pool.
    pub name: Identifier,
    /// The pool settings.
    pub resource_pool_parameters: Vec<ResourcePoolOption>,
    /// Source span.
    pub span: Span,
}

/// `CREATE | ALTER WORKLOAD GROUP g [WITH ( … )] [USING pool [, EXTERNAL ext]]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct WorkloadGroupStatement {
    /// `CREATE` or `ALTER`.
    pub action: DdlAction,
    /// The group.
    pub name: Identifier,
    /// The group settings.
    pub workload_group_parameters: Vec<WorkloadGroupParameter>,
    /// `USING pool`.
    pub pool_name: Option<Identifier>,
    /// `EXTERNAL pool`.
    pub external_pool_name: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `CREATE WORKLOAD CLASSIFIER c WITH ( … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreateWorkloadClassifierStatement {
    /// The classifier.
    pub classifier_name: Identifier,
    /// The classification rules.
    pub options: Vec<WorkloadClassifierOption>,
    /// Source span.
    pub span: Span,
}

/// `ALTER RESOURCE GOVERNOR RECONFIGURE | DISABLE | RESET STATISTICS |
/// WITH (CLASSIFIER_FUNCTION = f)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterResourceGovernorStatement {
    /// `RECONFIGURE`, `DISABLE`, `RESET STATISTICS` or `CLASSIFIER_FUNCTION`.
    pub command: Identifier,
    /// The classifier function, `NULL` clearing it.
    pub classifier_function: Option<SchemaObjectName>,
    /// Source span.
    pub span: Span,
}

// ============================================================================
// External objects
// ============================================================================

/// `CREATE | ALTER EXTERNAL DATA SOURCE s WITH ( … ) | SET …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ExternalDataSourceStatement {
    /// `CREATE` or `ALTER`.
    pub action: DdlAction,
    /// The data source.
    pub name: Identifier,
    /// The settings.
    pub external_data_source_options: Vec<ExternalDataSourceOption>,
    /// Source span.
    pub span: Span,
}

/// `CREATE EXTERNAL FILE FORMAT f WITH ( … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreateExternalFileFormatStatement {
    /// The format.
    pub name: Identifier,
    /// The settings.
    pub external_file_format_options: Vec<ExternalFileFormatOption>,
    /// Source span.
    pub span: Span,
}

/// `CREATE EXTERNAL TABLE t ( cols ) WITH ( … ) [AS SELECT …]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreateExternalTableStatement {
    /// The table.
    pub schema_object_name: SchemaObjectName,
    /// The column list; absent for `AS SELECT`.
    pub definition: Option<TableDefinition>,
    /// `WITH ( … )`.
    pub external_table_options: Vec<ExternalTableOption>,
    /// `AS SELECT …`.
    pub select_statement: Option<SelectStatement>,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// `EXTERNAL LANGUAGE … FROM ( … )` file option names.
    pub enum ExternalLanguageFileOptionKind {
        Content = "CONTENT" => Literal,
        EnvironmentVariables = "ENVIRONMENT_VARIABLES" => String,
        FileName = "FILE_NAME" => String,
        Parameters = "PARAMETERS" => String,
        Platform = "PLATFORM" => Enumerated(&["WINDOWS", "LINUX"]),
    }
}

general_option! {
    /// One external language file option.
    ExternalLanguageFileOption, ExternalLanguageFileOptionKind
}

/// `( CONTENT = …, FILE_NAME = …, … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ExternalLanguageFile {
    /// The file settings.
    pub options: Vec<ExternalLanguageFileOption>,
    /// Source span.
    pub span: Span,
}

/// `CREATE | ALTER EXTERNAL LANGUAGE l [AUTHORIZATION owner] FROM | ADD | SET ( … ), …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ExternalLanguageStatement {
    /// `CREATE` or `ALTER`.
    pub action: DdlAction,
    /// The language.
    pub name: Identifier,
    /// `AUTHORIZATION owner`.
    pub owner: Option<Identifier>,
    /// The alter verb: `ADD`, `SET` or `REMOVE`.
    pub alter_verb: Option<Identifier>,
    /// The language files.
    pub files: Vec<ExternalLanguageFile>,
    /// Source span.
    pub span: Span,
}

/// `CREATE | ALTER EXTERNAL LIBRARY l [AUTHORIZATION owner] FROM | SET ( … ), …
/// WITH (LANGUAGE = 'R')`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ExternalLibraryStatement {
    /// `CREATE` or `ALTER`.
    pub action: DdlAction,
    /// The library.
    pub name: Identifier,
    /// `AUTHORIZATION owner`.
    pub owner: Option<Identifier>,
    /// The library files.
    pub files: Vec<ExternalLanguageFile>,
    /// `LANGUAGE = 'R'`.
    pub language: Option<Literal>,
    /// Source span.
    pub span: Span,
}

// ============================================================================
// Service Broker queues
// ============================================================================

/// `CREATE | ALTER QUEUE q [WITH option, …] [ON filegroup | DEFAULT]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct QueueStatement {
    /// `CREATE` or `ALTER`.
    pub action: DdlAction,
    /// The queue.
    pub name: SchemaObjectName,
    /// `WITH STATUS = ON, ACTIVATION ( … ), …`.
    pub queue_options: Vec<QueueOption>,
    /// `ON filegroup`; `[DEFAULT]` keeps its quoting.
    pub on_file_group: Option<Identifier>,
    /// Source span.
    pub span: Span,
}
