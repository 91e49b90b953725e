//! Schema object DDL: tables, views, indexes, programmable modules, types,
//! sequences, schemas, synonyms, partitioning and drops.

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use super::{
    BooleanExpression, ColumnReferenceExpression, ColumnWithSortOrder, DataTypeReference,
    FileGroupOrPartitionScheme, Identifier, IdentifierOrValueExpression, IndexOption, Literal,
    ModuleOption, ProcedureReference, ScalarExpression, SchemaObjectName, SelectStatement,
    SequenceOption, Statement, TableDefinition, TableOption, VariableReference, ViewOption,
};
use crate::lexer::Span;

/// Which of `CREATE`, `ALTER` and `CREATE OR ALTER` introduced a statement
/// whose forms share one body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum DdlAction {
    /// `CREATE`
    Create,
    /// `ALTER`
    Alter,
    /// `CREATE OR ALTER`
    CreateOrAlter,
}

// ============================================================================
// Tables
// ============================================================================

/// `CREATE TABLE`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreateTableStatement {
    /// The table.
    pub schema_object_name: SchemaObjectName,
    /// `AS FILETABLE`.
    pub as_file_table: bool,
    /// The column and constraint list; absent for `AS FILETABLE` without
    /// columns.
    pub definition: Option<TableDefinition>,
    /// `AS NODE`.
    pub as_node: bool,
    /// `AS EDGE`.
    pub as_edge: bool,
    /// `ON filegroup | scheme(col)`.
    pub on_file_group_or_partition_scheme: Option<FileGroupOrPartitionScheme>,
    /// `TEXTIMAGE_ON filegroup`.
    pub text_image_on: Option<IdentifierOrValueExpression>,
    /// `FILESTREAM_ON filegroup`.
    pub file_stream_on: Option<IdentifierOrValueExpression>,
    /// `WITH ( … )`.
    pub options: Vec<TableOption>,
    /// `AS SELECT …` of a create-table-as-select.
    pub select_statement: Option<SelectStatement>,
    /// Source span.
    pub span: Span,
}

/// `WITH CHECK` / `WITH NOCHECK` and `CHECK` / `NOCHECK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum ConstraintEnforcement {
    /// Nothing written.
    NotSpecified,
    /// `CHECK`
    Check,
    /// `NOCHECK`
    NoCheck,
}

/// `ALTER TABLE t [WITH CHECK] ADD …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterTableAddTableElement {
    /// `WITH CHECK | NOCHECK`.
    pub existing_row_check: ConstraintEnforcement,
    /// The added columns, constraints, indexes and periods.
    pub definition: TableDefinition,
    /// Source span.
    pub span: Span,
}

/// What `ALTER COLUMN` changes besides the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum AlterColumnOption {
    /// Only the type or collation changes.
    NoOptionDefined,
    /// `NULL`
    Null,
    /// `NOT NULL`
    NotNull,
    /// `ADD ROWGUIDCOL`
    AddRowGuidCol,
    /// `DROP ROWGUIDCOL`
    DropRowGuidCol,
    /// `ADD PERSISTED`
    AddPersisted,
    /// `DROP PERSISTED`
    DropPersisted,
    /// `ADD NOT FOR REPLICATION`
    AddNotForReplication,
    /// `DROP NOT FOR REPLICATION`
    DropNotForReplication,
    /// `ADD SPARSE`
    AddSparse,
    /// `DROP SPARSE`
    DropSparse,
    /// `ADD MASKED WITH (FUNCTION = '…')`
    AddMaskingFunction,
    /// `DROP MASKED`
    DropMaskingFunction,
    /// `ADD HIDDEN`
    AddHidden,
    /// `DROP HIDDEN`
    DropHidden,
}

/// `ALTER TABLE t ALTER COLUMN c …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterTableAlterColumn {
    /// The column.
    pub column_identifier: Identifier,
    /// The new type.
    pub data_type: Option<DataTypeReference>,
    /// `COLLATE name`.
    pub collation: Option<Identifier>,
    /// The nullability or property change.
    pub alter_column_option: AlterColumnOption,
    /// The function of `ADD MASKED WITH (FUNCTION = '…')`.
    pub masking_function: Option<Literal>,
    /// `WITH (ONLINE = ON)`.
    pub options: Vec<IndexOption>,
    /// Source span.
    pub span: Span,
}

/// Kinds of elements removed by `ALTER TABLE … DROP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum TableElementType {
    /// No keyword; a constraint by default.
    NotSpecified,
    /// `CONSTRAINT`
    Constraint,
    /// `COLUMN`
    Column,
    /// `INDEX`
    Index,
    /// `PERIOD FOR SYSTEM_TIME`
    Period,
}

/// One element of `ALTER TABLE … DROP`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterTableDropTableElement {
    /// The element kind.
    pub table_element_type: TableElementType,
    /// `IF EXISTS`.
    pub is_if_exists: bool,
    /// The element name; absent for periods.
    pub name: Option<Identifier>,
    /// `WITH (ONLINE = ON, MAXDOP = n)` of a clustered constraint.
    pub drop_clustered_constraint_options: Vec<IndexOption>,
    /// Source span.
    pub span: Span,
}

/// `ALTER TABLE t DROP …, …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterTableDropTableElements {
    /// The dropped elements.
    pub elements: Vec<AlterTableDropTableElement>,
    /// Source span.
    pub span: Span,
}

/// `ALTER TABLE t [WITH CHECK] CHECK | NOCHECK CONSTRAINT ALL | c, …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterTableConstraintModification {
    /// `WITH CHECK | NOCHECK`.
    pub existing_row_check: ConstraintEnforcement,
    /// `CHECK | NOCHECK`.
    pub constraint_enforcement: ConstraintEnforcement,
    /// `ALL`.
    pub all: bool,
    /// The named constraints.
    pub constraint_names: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `ENABLE` / `DISABLE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum TriggerEnforcement {
    /// `ENABLE`
    Enable,
    /// `DISABLE`
    Disable,
}

/// `ALTER TABLE t ENABLE | DISABLE TRIGGER ALL | tr, …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterTableTriggerModification {
    /// Enable or disable.
    pub trigger_enforcement: TriggerEnforcement,
    /// `ALL`.
    pub all: bool,
    /// The named triggers.
    pub trigger_names: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// `ALTER TABLE … SWITCH … WITH ( … )` options.
    pub enum TableSwitchOptionKind {
        TruncateTarget = "TRUNCATE_TARGET" => OnOff,
    }
}

general_option! {
    /// One partition switch option.
    TableSwitchOption, TableSwitchOptionKind
}

/// `ALTER TABLE t SWITCH [PARTITION n] TO t2 [PARTITION m] [WITH ( … )]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterTableSwitch {
    /// The source partition.
    pub source_partition: Option<ScalarExpression>,
    /// The target table.
    pub target_table: SchemaObjectName,
    /// The target partition.
    pub target_partition: Option<ScalarExpression>,
    /// Options.
    pub options: Vec<TableSwitchOption>,
    /// Source span.
    pub span: Span,
}

/// `ALTER TABLE t SET ( … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterTableSet {
    /// The changed options.
    pub options: Vec<TableOption>,
    /// Source span.
    pub span: Span,
}

/// `PARTITION = ALL | n`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct PartitionSpecifier {
    /// `ALL`.
    pub all: bool,
    /// The partition number.
    pub number: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `ALTER TABLE t REBUILD [PARTITION = …] [WITH ( … )]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterTableRebuild {
    /// The rebuilt partition.
    pub partition: Option<PartitionSpecifier>,
    /// Rebuild options.
    pub index_options: Vec<IndexOption>,
    /// Source span.
    pub span: Span,
}

/// `ALTER TABLE t ENABLE | DISABLE CHANGE_TRACKING [WITH (TRACK_COLUMNS_UPDATED = ON)]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterTableChangeTracking {
    /// Enable or disable.
    pub is_enable: bool,
    /// `TRACK_COLUMNS_UPDATED`.
    pub track_columns_updated: Option<bool>,
    /// Source span.
    pub span: Span,
}

/// The change applied by `ALTER TABLE`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum AlterTableAction {
    /// `ADD …`
    AddTableElement(AlterTableAddTableElement),
    /// `ALTER COLUMN …`
    AlterColumn(AlterTableAlterColumn),
    /// `DROP …`
    DropTableElements(AlterTableDropTableElements),
    /// `CHECK | NOCHECK CONSTRAINT …`
    ConstraintModification(AlterTableConstraintModification),
    /// `ENABLE | DISABLE TRIGGER …`
    TriggerModification(AlterTableTriggerModification),
    /// `SWITCH …`
    Switch(AlterTableSwitch),
    /// `SET ( … )`
    Set(AlterTableSet),
    /// `REBUILD …`
    Rebuild(AlterTableRebuild),
    /// `ENABLE | DISABLE CHANGE_TRACKING`
    ChangeTracking(AlterTableChangeTracking),
}

/// `ALTER TABLE t action`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterTableStatement {
    /// The table.
    pub schema_object_name: SchemaObjectName,
    /// The change.
    pub action: AlterTableAction,
    /// Source span.
    pub span: Span,
}

// ============================================================================
// Views and indexes
// ============================================================================

/// `CREATE | ALTER | CREATE OR ALTER VIEW`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ViewStatement {
    /// The introducing keywords.
    pub action: DdlAction,
    /// The view.
    pub schema_object_name: SchemaObjectName,
    /// Column aliases.
    pub columns: Vec<Identifier>,
    /// `WITH SCHEMABINDING, …`.
    pub view_options: Vec<ViewOption>,
    /// The body.
    pub select_statement: SelectStatement,
    /// `WITH CHECK OPTION`.
    pub with_check_option: bool,
    /// Source span.
    pub span: Span,
}

/// `CREATE [UNIQUE] [CLUSTERED | NONCLUSTERED] INDEX`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreateIndexStatement {
    /// `UNIQUE`.
    pub unique: bool,
    /// `CLUSTERED` (true) or `NONCLUSTERED` (false).
    pub clustered: Option<bool>,
    /// The index.
    pub name: Identifier,
    /// The indexed table or view.
    pub on_name: SchemaObjectName,
    /// Key columns.
    pub columns: Vec<ColumnWithSortOrder>,
    /// `INCLUDE ( … )`.
    pub include_columns: Vec<ColumnReferenceExpression>,
    /// `WHERE …` of a filtered index.
    pub filter_predicate: Option<BooleanExpression>,
    /// `WITH ( … )`.
    pub index_options: Vec<IndexOption>,
    /// `ON filegroup | scheme(col)`.
    pub on_file_group_or_partition_scheme: Option<FileGroupOrPartitionScheme>,
    /// `FILESTREAM_ON`.
    pub file_stream_on: Option<IdentifierOrValueExpression>,
    /// Source span.
    pub span: Span,
}

/// `CREATE [CLUSTERED | NONCLUSTERED] COLUMNSTORE INDEX`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreateColumnStoreIndexStatement {
    /// `CLUSTERED` (true) or `NONCLUSTERED` (false).
    pub clustered: Option<bool>,
    /// The index.
    pub name: Identifier,
    /// The table.
    pub on_name: SchemaObjectName,
    /// Columns of a nonclustered columnstore index.
    pub columns: Vec<ColumnReferenceExpression>,
    /// `ORDER ( … )`.
    pub order_columns: Vec<ColumnReferenceExpression>,
    /// `WHERE …`.
    pub filter_predicate: Option<BooleanExpression>,
    /// `WITH ( … )`.
    pub index_options: Vec<IndexOption>,
    /// `ON filegroup | scheme(col)`.
    pub on_file_group_or_partition_scheme: Option<FileGroupOrPartitionScheme>,
    /// Source span.
    pub span: Span,
}

/// `ALTER INDEX` actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum AlterIndexType {
    /// `REBUILD`
    Rebuild,
    /// `REORGANIZE`
    Reorganize,
    /// `DISABLE`
    Disable,
    /// `SET ( … )`
    Set,
    /// `RESUME`
    Resume,
    /// `PAUSE`
    Pause,
    /// `ABORT`
    Abort,
}

/// `ALTER INDEX name | ALL ON t action`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterIndexStatement {
    /// `ALL`.
    pub all: bool,
    /// The index.
    pub name: Option<Identifier>,
    /// The table or view.
    pub on_name: SchemaObjectName,
    /// The action.
    pub alter_index_type: AlterIndexType,
    /// `PARTITION = …`.
    pub partition: Option<PartitionSpecifier>,
    /// `WITH ( … )` or `SET ( … )`.
    pub index_options: Vec<IndexOption>,
    /// Source span.
    pub span: Span,
}

// ============================================================================
// Programmable modules
// ============================================================================

/// `OUTPUT` / `READONLY` on a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum ParameterModifier {
    /// Nothing written.
    None,
    /// `OUT` / `OUTPUT`
    Output,
    /// `READONLY`
    ReadOnly,
}

/// `@p [AS] type [VARYING] [NULL | NOT NULL] [= default] [OUTPUT | READONLY]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ProcedureParameter {
    /// The parameter.
    pub variable_name: VariableReference,
    /// The type.
    pub data_type: DataTypeReference,
    /// `VARYING` of cursor parameters.
    pub is_varying: bool,
    /// `NULL` / `NOT NULL` of natively compiled modules.
    pub nullable: Option<bool>,
    /// The default.
    pub value: Option<ScalarExpression>,
    /// `OUTPUT` / `READONLY`.
    pub modifier: ParameterModifier,
    /// Source span.
    pub span: Span,
}

/// `EXTERNAL NAME assembly.class.method`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct MethodSpecifier {
    /// The assembly.
    pub assembly_name: Identifier,
    /// The class.
    pub class_name: Identifier,
    /// The method.
    pub method_name: Identifier,
    /// Source span.
    pub span: Span,
}

/// `CREATE | ALTER | CREATE OR ALTER PROC[EDURE]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ProcedureStatement {
    /// The introducing keywords.
    pub action: DdlAction,
    /// The procedure and its `;n` number.
    pub procedure_reference: ProcedureReference,
    /// Parameters.
    pub parameters: Vec<ProcedureParameter>,
    /// `WITH RECOMPILE, EXECUTE AS …`.
    pub options: Vec<ModuleOption>,
    /// `FOR REPLICATION`.
    pub is_for_replication: bool,
    /// `AS EXTERNAL NAME …` of a CLR procedure.
    pub method_specifier: Option<MethodSpecifier>,
    /// The body.
    pub statements: Vec<Statement>,
    /// Source span.
    pub span: Span,
}

/// `RETURNS type`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ScalarFunctionReturnType {
    /// The type.
    pub data_type: DataTypeReference,
    /// Source span.
    pub span: Span,
}

/// `RETURNS TABLE` of an inline table-valued function.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SelectFunctionReturnType {
    /// Source span of `TABLE`.
    pub span: Span,
}

/// `RETURNS @t TABLE ( … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct TableValuedFunctionReturnType {
    /// The returned variable.
    pub variable_name: VariableReference,
    /// Its definition.
    pub definition: TableDefinition,
    /// Source span.
    pub span: Span,
}

/// The `RETURNS` clause.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum FunctionReturnType {
    /// Scalar function.
    Scalar(ScalarFunctionReturnType),
    /// Inline table-valued function.
    Select(SelectFunctionReturnType),
    /// Multi-statement table-valued function.
    TableValued(TableValuedFunctionReturnType),
}

/// `CREATE | ALTER | CREATE OR ALTER FUNCTION`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct FunctionStatement {
    /// The introducing keywords.
    pub action: DdlAction,
    /// The function.
    pub name: SchemaObjectName,
    /// Parameters.
    pub parameters: Vec<ProcedureParameter>,
    /// The return shape.
    pub return_type: FunctionReturnType,
    /// `WITH SCHEMABINDING, …`.
    pub options: Vec<ModuleOption>,
    /// `AS EXTERNAL NAME …`.
    pub method_specifier: Option<MethodSpecifier>,
    /// `RETURN (select)` of an inline function.
    pub return_select: Option<SelectStatement>,
    /// The `BEGIN … END` body.
    pub statements: Vec<Statement>,
    /// Source span.
    pub span: Span,
}

/// Where a trigger is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum TriggerScope {
    /// A table or view.
    Normal,
    /// `ON DATABASE`
    Database,
    /// `ON ALL SERVER`
    AllServer,
}

/// `ON table | DATABASE | ALL SERVER`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct TriggerObject {
    /// The scope.
    pub trigger_scope: TriggerScope,
    /// The table or view for DML triggers.
    pub name: Option<SchemaObjectName>,
    /// Source span.
    pub span: Span,
}

/// When a trigger fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum TriggerType {
    /// `FOR`
    For,
    /// `AFTER`
    After,
    /// `INSTEAD OF`
    InsteadOf,
}

/// What a trigger fires on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum TriggerActionType {
    /// `INSERT`
    Insert,
    /// `UPDATE`
    Update,
    /// `DELETE`
    Delete,
    /// A DDL event or event group.
    Event,
}

/// One action of a trigger.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct TriggerAction {
    /// The action.
    pub trigger_action_type: TriggerActionType,
    /// The event name for DDL triggers.
    pub event_name: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `CREATE | ALTER | CREATE OR ALTER TRIGGER`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct TriggerStatement {
    /// The introducing keywords.
    pub action: DdlAction,
    /// The trigger.
    pub name: SchemaObjectName,
    /// The attached object.
    pub trigger_object: TriggerObject,
    /// `WITH ENCRYPTION, EXECUTE AS …`.
    pub options: Vec<ModuleOption>,
    /// `FOR | AFTER | INSTEAD OF`.
    pub trigger_type: TriggerType,
    /// The firing actions.
    pub trigger_actions: Vec<TriggerAction>,
    /// `WITH APPEND`.
    pub with_append: bool,
    /// `NOT FOR REPLICATION`.
    pub is_not_for_replication: bool,
    /// `AS EXTERNAL NAME …`.
    pub method_specifier: Option<MethodSpecifier>,
    /// The body.
    pub statements: Vec<Statement>,
    /// Source span.
    pub span: Span,
}

// ============================================================================
// Types, sequences, schemas, synonyms
// ============================================================================

/// `CREATE TYPE t FROM base [NULL | NOT NULL]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreateTypeUddtStatement {
    /// The alias type.
    pub name: SchemaObjectName,
    /// The base type.
    pub data_type: DataTypeReference,
    /// Nullability.
    pub nullable: Option<bool>,
    /// Source span.
    pub span: Span,
}

/// `CREATE TYPE t AS TABLE ( … ) [WITH ( … )]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreateTypeTableStatement {
    /// The table type.
    pub name: SchemaObjectName,
    /// Its definition.
    pub definition: TableDefinition,
    /// `WITH (MEMORY_OPTIMIZED = ON)`.
    pub options: Vec<TableOption>,
    /// Source span.
    pub span: Span,
}

/// `assembly[.class]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AssemblyName {
    /// The assembly.
    pub name: Identifier,
    /// The class.
    pub class_name: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `CREATE TYPE t EXTERNAL NAME assembly[.class]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreateTypeUdtStatement {
    /// The CLR type.
    pub name: SchemaObjectName,
    /// The implementing assembly.
    pub assembly_name: AssemblyName,
    /// Source span.
    pub span: Span,
}

/// `CREATE | ALTER SEQUENCE`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SequenceStatement {
    /// `CREATE` or `ALTER`.
    pub action: DdlAction,
    /// The sequence.
    pub name: SchemaObjectName,
    /// Options in source order.
    pub sequence_options: Vec<SequenceOption>,
    /// Source span.
    pub span: Span,
}

/// `CREATE SCHEMA name [AUTHORIZATION owner] [elements]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreateSchemaStatement {
    /// The schema.
    pub name: Identifier,
    /// The owner.
    pub owner: Option<Identifier>,
    /// Tables, views and grants created with the schema.
    pub schema_elements: Vec<Statement>,
    /// Source span.
    pub span: Span,
}

/// The entity class of `ALTER SCHEMA … TRANSFER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum TransferEntityKind {
    /// Nothing written.
    NotSpecified,
    /// `OBJECT::`
    Object,
    /// `TYPE::`
    Type,
    /// `XML SCHEMA COLLECTION::`
    XmlSchemaCollection,
}

/// `ALTER SCHEMA s TRANSFER [class::] object`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterSchemaStatement {
    /// The receiving schema.
    pub name: Identifier,
    /// The entity class.
    pub object_kind: TransferEntityKind,
    /// The transferred object.
    pub object_name: SchemaObjectName,
    /// Source span.
    pub span: Span,
}

/// `CREATE SYNONYM s FOR target`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreateSynonymStatement {
    /// The synonym.
    pub name: SchemaObjectName,
    /// The target object.
    pub for_name: SchemaObjectName,
    /// Source span.
    pub span: Span,
}

// ============================================================================
// Partitioning
// ============================================================================

/// `RANGE LEFT | RIGHT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum PartitionFunctionRange {
    /// `RANGE` alone.
    NotSpecified,
    /// `LEFT`
    Left,
    /// `RIGHT`
    Right,
}

/// `CREATE PARTITION FUNCTION pf (type) AS RANGE [LEFT | RIGHT] FOR VALUES ( … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreatePartitionFunctionStatement {
    /// The function.
    pub name: Identifier,
    /// The input type.
    pub parameter_type: DataTypeReference,
    /// Boundary side.
    pub range: PartitionFunctionRange,
    /// Boundary values.
    pub boundary_values: Vec<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `ALTER PARTITION FUNCTION pf () SPLIT | MERGE RANGE (value)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterPartitionFunctionStatement {
    /// The function.
    pub name: Identifier,
    /// `SPLIT` (rather than `MERGE`).
    pub is_split: bool,
    /// The boundary.
    pub boundary: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// `CREATE PARTITION SCHEME ps AS PARTITION pf [ALL] TO (fg, …)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreatePartitionSchemeStatement {
    /// The scheme.
    pub name: Identifier,
    /// The partition function.
    pub partition_function: Identifier,
    /// `ALL`.
    pub is_all: bool,
    /// File groups.
    pub file_groups: Vec<IdentifierOrValueExpression>,
    /// Source span.
    pub span: Span,
}

/// `ALTER PARTITION SCHEME ps NEXT USED [fg]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterPartitionSchemeStatement {
    /// The scheme.
    pub name: Identifier,
    /// The next-used file group.
    pub file_group: Option<IdentifierOrValueExpression>,
    /// Source span.
    pub span: Span,
}

// ============================================================================
// Drops
// ============================================================================

keyword_enum! {
    /// Schema-scoped objects dropped by name lists.
    pub enum DropObjectKind {
        Aggregate = "AGGREGATE",
        Default = "DEFAULT",
        ExternalTable = "EXTERNAL TABLE",
        Function = "FUNCTION",
        Procedure = "PROCEDURE",
        Queue = "QUEUE",
        Rule = "RULE",
        SecurityPolicy = "SECURITY POLICY",
        Sequence = "SEQUENCE",
        Statistics = "STATISTICS",
        Synonym = "SYNONYM",
        Table = "TABLE",
        Type = "TYPE",
        View = "VIEW",
        XmlSchemaCollection = "XML SCHEMA COLLECTION",
    }
}

/// `DROP kind [IF EXISTS] name, …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DropObjectsStatement {
    /// The object kind.
    pub object_kind: DropObjectKind,
    /// `IF EXISTS`.
    pub is_if_exists: bool,
    /// The dropped objects.
    pub objects: Vec<SchemaObjectName>,
    /// Source span.
    pub span: Span,
}

keyword_enum! {
    /// Objects named by a single identifier.
    pub enum DropNamedObjectKind {
        ApplicationRole = "APPLICATION ROLE",
        Assembly = "ASSEMBLY",
        AsymmetricKey = "ASYMMETRIC KEY",
        AvailabilityGroup = "AVAILABILITY GROUP",
        Certificate = "CERTIFICATE",
        ColumnEncryptionKey = "COLUMN ENCRYPTION KEY",
        ColumnMasterKey = "COLUMN MASTER KEY",
        Contract = "CONTRACT",
        Credential = "CREDENTIAL",
        CryptographicProvider = "CRYPTOGRAPHIC PROVIDER",
        DatabaseAuditSpecification = "DATABASE AUDIT SPECIFICATION",
        Endpoint = "ENDPOINT",
        ExternalDataSource = "EXTERNAL DATA SOURCE",
        ExternalFileFormat = "EXTERNAL FILE FORMAT",
        ExternalLanguage = "EXTERNAL LANGUAGE",
        ExternalLibrary = "EXTERNAL LIBRARY",
        FullTextCatalog = "FULLTEXT CATALOG",
        FullTextStopList = "FULLTEXT STOPLIST",
        Login = "LOGIN",
        MessageType = "MESSAGE TYPE",
        PartitionFunction = "PARTITION FUNCTION",
        PartitionScheme = "PARTITION SCHEME",
        ResourcePool = "RESOURCE POOL",
        Role = "ROLE",
        Route = "ROUTE",
        Schema = "SCHEMA",
        ServerAudit = "SERVER AUDIT",
        ServerAuditSpecification = "SERVER AUDIT SPECIFICATION",
        ServerRole = "SERVER ROLE",
        Service = "SERVICE",
        SymmetricKey = "SYMMETRIC KEY",
        User = "USER",
        WorkloadClassifier = "WORKLOAD CLASSIFIER",
        WorkloadGroup = "WORKLOAD GROUP",
    }
}

/// `DROP kind [IF EXISTS] name`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DropNamedObjectStatement {
    /// The object kind.
    pub object_kind: DropNamedObjectKind,
    /// `IF EXISTS`.
    pub is_if_exists: bool,
    /// The dropped object.
    pub name: Identifier,
    /// Source span.
    pub span: Span,
}

/// `ix ON t [WITH ( … )]` or the legacy `t.ix`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DropIndexClause {
    /// The legacy `table.index` owner, which precedes the index.
    pub legacy_object: Option<SchemaObjectName>,
    /// The index.
    pub index: Identifier,
    /// The table or view of the `ON` form.
    pub object: Option<SchemaObjectName>,
    /// `WITH (ONLINE = ON, …)`.
    pub options: Vec<IndexOption>,
    /// Source span.
    pub span: Span,
}

/// `DROP INDEX [IF EXISTS] clause, …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DropIndexStatement {
    /// `IF EXISTS`.
    pub is_if_exists: bool,
    /// The dropped indexes.
    pub drop_index_clauses: Vec<DropIndexClause>,
    /// Source span.
    pub span: Span,
}

/// `DROP TRIGGER [IF EXISTS] tr, … [ON DATABASE | ALL SERVER]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DropTriggerStatement {
    /// `IF EXISTS`.
    pub is_if_exists: bool,
    /// The dropped triggers.
    pub objects: Vec<SchemaObjectName>,
    /// The scope.
    pub trigger_scope: TriggerScope,
    /// Source span.
    pub span: Span,
}

/// `DROP EVENT SESSION [IF EXISTS] s ON SERVER | DATABASE`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DropEventSessionStatement {
    /// `IF EXISTS`.
    pub is_if_exists: bool,
    /// The session.
    pub name: Identifier,
    /// `ON SERVER` (rather than `ON DATABASE`).
    pub is_server: bool,
    /// Source span.
    pub span: Span,
}

/// `DROP FULLTEXT INDEX ON t`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DropFullTextIndexStatement {
    /// The table.
    pub table_name: SchemaObjectName,
    /// Source span.
    pub span: Span,
}

/// `DROP MASTER KEY`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DropMasterKeyStatement {
    /// Source span.
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_kind_words() {
        assert_eq!(
            DropObjectKind::from_word("xml schema collection"),
            Some(DropObjectKind::XmlSchemaCollection)
        );
        assert_eq!(
            DropNamedObjectKind::from_word("SERVER AUDIT SPECIFICATION"),
            Some(DropNamedObjectKind::ServerAuditSpecification)
        );
        assert_eq!(DropObjectKind::from_word("LOGIN"), None);
        assert!(DropNamedObjectKind::WORDS.contains(&"LOGIN"));
    }
}
