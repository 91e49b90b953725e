//! `FROM` clause sources.

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use super::{
    BooleanExpression, BulkInsertOption, ColumnReferenceExpression, DataModificationSpecification,
    DataTypeReference, FullTextFunctionType, Identifier, Literal, MultiPartIdentifier,
    QueryExpression, ScalarExpression, SchemaObjectName, TableHint, VariableReference,
};
use crate::lexer::Span;

/// Anything that yields a relation in a `FROM` clause.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
#[ast(node = TableReference)]
pub enum TableReference {
    /// `schema.table [AS alias] [WITH (hints)]`.
    Named(NamedTableReference),
    /// `( query ) AS alias`.
    QueryDerived(Box<QueryDerivedTable>),
    /// `a [INNER|LEFT|RIGHT|FULL] JOIN b ON cond`.
    QualifiedJoin(Box<QualifiedJoin>),
    /// `a CROSS JOIN b`, `a CROSS|OUTER APPLY b`.
    UnqualifiedJoin(Box<UnqualifiedJoin>),
    /// `( join )`.
    JoinParenthesis(Box<JoinParenthesisTableReference>),
    /// `schema.tvf(args)`.
    SchemaObjectFunction(SchemaObjectFunctionTableReference),
    /// Built-in table functions such as `STRING_SPLIT(…)`.
    GlobalFunction(GlobalFunctionTableReference),
    /// `@xml.nodes('…')`.
    VariableMethodCall(VariableMethodCallTableReference),
    /// `@table_variable`.
    Variable(VariableTableReference),
    /// `::fn_name(args)`.
    BuiltIn(BuiltInFunctionTableReference),
    /// `(VALUES (…), (…)) AS alias (cols)`.
    InlineDerived(InlineDerivedTable),
    /// `t PIVOT (…) AS p`.
    Pivoted(Box<PivotedTableReference>),
    /// `t UNPIVOT (…) AS u`.
    Unpivoted(Box<UnpivotedTableReference>),
    /// `OPENROWSET('provider', …)`.
    OpenRowset(OpenRowsetTableReference),
    /// `OPENROWSET(BULK 'file', …)`.
    BulkOpenRowset(BulkOpenRowset),
    /// `OPENROWSET(PROVIDER = 'CosmosDB', …)`.
    OpenRowsetCosmos(OpenRowsetCosmos),
    /// `OPENJSON(expr [, path]) [WITH (…)]`.
    OpenJson(OpenJsonTableReference),
    /// `OPENXML(@doc, 'pattern' [, flags]) [WITH (…)]`.
    OpenXml(OpenXmlTableReference),
    /// `OPENQUERY(server, 'query')`.
    OpenQuery(OpenQueryTableReference),
    /// `OPENDATASOURCE('provider', 'init').db.schema.object`.
    AdHoc(AdHocTableReference),
    /// `CHANGETABLE(CHANGES t, @v)`.
    ChangeTableChanges(ChangeTableChangesTableReference),
    /// `CHANGETABLE(VERSION t, (cols), (vals))`.
    ChangeTableVersion(ChangeTableVersionTableReference),
    /// `PREDICT(MODEL = …, DATA = …) WITH (…)`.
    Predict(Box<PredictTableReference>),
    /// `CONTAINSTABLE(…)` / `FREETEXTTABLE(…)`.
    FullTextTable(FullTextTableReference),
    /// `SEMANTICKEYPHRASETABLE(…)` and friends.
    SemanticTable(SemanticTableReference),
    /// `(INSERT|UPDATE|DELETE|MERGE … OUTPUT …) AS alias`.
    DataModification(Box<DataModificationTableReference>),
    /// `{oj … }`.
    OdbcQualifiedJoin(Box<OdbcQualifiedJoinTableReference>),
}

impl TableReference {
    /// Returns the correlation name, when the source has one.
    #[must_use]
    pub fn alias(&self) -> Option<&Identifier> {
        match self {
            Self::Named(t) => t.alias.as_ref(),
            Self::QueryDerived(t) => t.alias.as_ref(),
            Self::SchemaObjectFunction(t) => t.alias.as_ref(),
            Self::GlobalFunction(t) => t.alias.as_ref(),
            Self::VariableMethodCall(t) => t.alias.as_ref(),
            Self::Variable(t) => t.alias.as_ref(),
            Self::BuiltIn(t) => t.alias.as_ref(),
            Self::InlineDerived(t) => t.alias.as_ref(),
            Self::Pivoted(t) => t.alias.as_ref(),
            Self::Unpivoted(t) => t.alias.as_ref(),
            Self::OpenRowset(t) => t.alias.as_ref(),
            Self::BulkOpenRowset(t) => t.alias.as_ref(),
            Self::OpenRowsetCosmos(t) => t.alias.as_ref(),
            Self::OpenJson(t) => t.alias.as_ref(),
            Self::OpenXml(t) => t.alias.as_ref(),
            Self::OpenQuery(t) => t.alias.as_ref(),
            Self::AdHoc(t) => t.alias.as_ref(),
            Self::ChangeTableChanges(t) => t.alias.as_ref(),
            Self::ChangeTableVersion(t) => t.alias.as_ref(),
            Self::Predict(t) => t.alias.as_ref(),
            Self::FullTextTable(t) => t.alias.as_ref(),
            Self::SemanticTable(t) => t.alias.as_ref(),
            Self::DataModification(t) => t.alias.as_ref(),
            Self::QualifiedJoin(_)
            | Self::UnqualifiedJoin(_)
            | Self::JoinParenthesis(_)
            | Self::OdbcQualifiedJoin(_) => None,
        }
    }
}

/// A named table or view.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct NamedTableReference {
    /// The object name.
    pub schema_object: SchemaObjectName,
    /// `FOR PATH` (graph shortest-path).
    pub for_path: bool,
    /// `FOR SYSTEM_TIME …`.
    pub temporal_clause: Option<TemporalClause>,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// `TABLESAMPLE …`.
    pub table_sample_clause: Option<TableSampleClause>,
    /// `WITH ( hints )`; a legacy `(hints)` list is accepted too.
    pub table_hints: Vec<TableHint>,
    /// Source span.
    pub span: Span,
}

/// `FOR SYSTEM_TIME` forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum TemporalClauseType {
    /// `AS OF t`
    AsOf,
    /// `FROM a TO b`
    FromTo,
    /// `BETWEEN a AND b`
    Between,
    /// `CONTAINED IN (a, b)`
    ContainedIn,
    /// `ALL`
    All,
}

/// `FOR SYSTEM_TIME …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct TemporalClause {
    /// The form.
    pub temporal_clause_type: TemporalClauseType,
    /// The first time bound.
    pub start_time: Option<ScalarExpression>,
    /// The second time bound.
    pub end_time: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `PERCENT` / `ROWS` after a sample size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum TableSampleClauseOption {
    /// No unit.
    NotSpecified,
    /// `PERCENT`
    Percent,
    /// `ROWS`
    Rows,
}

/// `TABLESAMPLE [SYSTEM] (n [PERCENT|ROWS]) [REPEATABLE (seed)]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct TableSampleClause {
    /// `SYSTEM`.
    pub system: bool,
    /// The sample size.
    pub sample_number: ScalarExpression,
    /// The unit.
    pub table_sample_clause_option: TableSampleClauseOption,
    /// `REPEATABLE (seed)`.
    pub repeat_seed: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `( query ) [AS] alias [( cols )]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct QueryDerivedTable {
    /// The query.
    pub query_expression: QueryExpression,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Column aliases.
    pub columns: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

/// Join kinds with an `ON` condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum QualifiedJoinType {
    /// `[INNER] JOIN`
    Inner,
    /// `LEFT [OUTER] JOIN`
    LeftOuter,
    /// `RIGHT [OUTER] JOIN`
    RightOuter,
    /// `FULL [OUTER] JOIN`
    FullOuter,
}

/// Physical join hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum JoinHint {
    /// No hint.
    None,
    /// `LOOP`
    Loop,
    /// `HASH`
    Hash,
    /// `MERGE`
    Merge,
    /// `REMOTE`
    Remote,
}

/// `a JOIN b ON cond`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct QualifiedJoin {
    /// Left input.
    pub first_table_reference: TableReference,
    /// The join kind.
    pub qualified_join_type: QualifiedJoinType,
    /// The physical join hint.
    pub join_hint: JoinHint,
    /// Right input.
    pub second_table_reference: TableReference,
    /// The `ON` condition.
    pub search_condition: BooleanExpression,
    /// Source span.
    pub span: Span,
}

/// Join kinds without a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum UnqualifiedJoinType {
    /// `CROSS JOIN`
    CrossJoin,
    /// `CROSS APPLY`
    CrossApply,
    /// `OUTER APPLY`
    OuterApply,
}

/// `a CROSS JOIN b`, `a CROSS APPLY f(a.x)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct UnqualifiedJoin {
    /// Left input.
    pub first_table_reference: TableReference,
    /// The join kind.
    pub unqualified_join_type: UnqualifiedJoinType,
    /// Right input.
    pub second_table_reference: TableReference,
    /// Source span.
    pub span: Span,
}

/// `( a JOIN b ON … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct JoinParenthesisTableReference {
    /// The inner join.
    pub join: TableReference,
    /// Source span, parentheses included.
    pub span: Span,
}

/// `schema.tvf(args) [AS] alias [(cols)]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SchemaObjectFunctionTableReference {
    /// The function name.
    pub schema_object: SchemaObjectName,
    /// The arguments.
    pub parameters: Vec<ScalarExpression>,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Column aliases.
    pub columns: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

/// Built-in table-valued functions called without a schema.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct GlobalFunctionTableReference {
    /// The function name.
    pub name: Identifier,
    /// The arguments.
    pub parameters: Vec<ScalarExpression>,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Column aliases.
    pub columns: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `@var.method(args) [AS] alias [(cols)]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct VariableMethodCallTableReference {
    /// The variable.
    pub variable: VariableReference,
    /// The method.
    pub method_name: Identifier,
    /// The arguments.
    pub parameters: Vec<ScalarExpression>,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Column aliases.
    pub columns: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `@table_variable [AS] alias`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct VariableTableReference {
    /// The variable.
    pub variable: VariableReference,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `::fn_name(args) [AS] alias`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BuiltInFunctionTableReference {
    /// The function name.
    pub name: Identifier,
    /// The arguments.
    pub parameters: Vec<ScalarExpression>,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// One `( v, … )` row of a `VALUES` list.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct RowValue {
    /// The values.
    pub column_values: Vec<ScalarExpression>,
    /// Source span, parentheses included.
    pub span: Span,
}

/// `( VALUES (…), (…) ) [AS] alias (cols)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct InlineDerivedTable {
    /// The rows.
    pub row_values: Vec<RowValue>,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Column aliases.
    pub columns: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `t PIVOT ( agg(value) FOR col IN ([a], [b]) ) [AS] alias`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct PivotedTableReference {
    /// The pivoted input.
    pub table_reference: TableReference,
    /// The aggregate function name.
    pub aggregate_function_identifier: MultiPartIdentifier,
    /// The aggregated columns.
    pub value_columns: Vec<ColumnReferenceExpression>,
    /// The column whose values become columns.
    pub pivot_column: ColumnReferenceExpression,
    /// The new column names.
    pub in_columns: Vec<Identifier>,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `t UNPIVOT ( value FOR col IN (a, b) ) [AS] alias`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct UnpivotedTableReference {
    /// The unpivoted input.
    pub table_reference: TableReference,
    /// The value column to produce.
    pub value_column: Identifier,
    /// The name column to produce.
    pub pivot_column: Identifier,
    /// The folded columns.
    pub in_columns: Vec<ColumnReferenceExpression>,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// Legacy `OPENROWSET('provider', 'src';'user';'pwd' | 'provider string', object | 'query')`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct OpenRowsetTableReference {
    /// The OLE DB provider.
    pub provider_name: Literal,
    /// Data source of the `;`-separated form.
    pub data_source: Option<Literal>,
    /// User id of the `;`-separated form.
    pub user_id: Option<Literal>,
    /// Password of the `;`-separated form.
    pub password: Option<Literal>,
    /// The provider string form.
    pub provider_string: Option<Literal>,
    /// A remote object.
    pub object: Option<SchemaObjectName>,
    /// A pass-through query.
    pub query: Option<Literal>,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Column aliases.
    pub columns: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

/// A column of an `OPENROWSET … WITH ( … )` schema.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct OpenRowsetColumnDefinition {
    /// The column name.
    pub column_identifier: Identifier,
    /// The type.
    pub data_type: DataTypeReference,
    /// `COLLATE name`.
    pub collation: Option<Identifier>,
    /// Ordinal or JSON path.
    pub column_ordinal: Option<Literal>,
    /// Source span.
    pub span: Span,
}

/// `OPENROWSET(BULK 'file' [, …] , options) [WITH ( … )] [AS] alias`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BulkOpenRowset {
    /// The data files.
    pub data_files: Vec<Literal>,
    /// The bulk options.
    pub options: Vec<BulkInsertOption>,
    /// The `WITH` schema.
    pub with_columns: Vec<OpenRowsetColumnDefinition>,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Column aliases.
    pub columns: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// `OPENROWSET(PROVIDER = …)` option names.
    pub enum OpenRowsetCosmosOptionKind {
        Connection = "CONNECTION" => String,
        Credential = "CREDENTIAL" => Literal,
        Object = "OBJECT" => String,
        Provider = "PROVIDER" => String,
        ServerCredential = "SERVER_CREDENTIAL" => Literal,
    }
}

general_option! {
    /// One Cosmos-style `OPENROWSET` option.
    OpenRowsetCosmosOption, OpenRowsetCosmosOptionKind
}

/// `OPENROWSET(PROVIDER = 'CosmosDB', CONNECTION = '…', OBJECT = '…') [WITH ( … )] AS alias`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct OpenRowsetCosmos {
    /// The options.
    pub options: Vec<OpenRowsetCosmosOption>,
    /// The `WITH` schema.
    pub with_columns: Vec<OpenRowsetColumnDefinition>,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// A column of an `OPENJSON … WITH ( … )` schema.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SchemaDeclarationItemOpenjson {
    /// The column name.
    pub column_name: Identifier,
    /// The type.
    pub data_type: DataTypeReference,
    /// The JSON path.
    pub mapping: Option<Literal>,
    /// `AS JSON`.
    pub as_json: bool,
    /// Source span.
    pub span: Span,
}

/// `OPENJSON( expr [, path] ) [WITH ( … )] [AS] alias`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct OpenJsonTableReference {
    /// The JSON text.
    pub variable: ScalarExpression,
    /// The root path.
    pub row_pattern: Option<ScalarExpression>,
    /// The explicit schema.
    pub schema_declaration_items: Vec<SchemaDeclarationItemOpenjson>,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// A column of an `OPENXML` or `PREDICT` schema.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SchemaDeclarationItem {
    /// The column name.
    pub column_name: Identifier,
    /// The type.
    pub data_type: DataTypeReference,
    /// The XPath mapping.
    pub mapping: Option<Literal>,
    /// Source span.
    pub span: Span,
}

/// `OPENXML( @doc, 'pattern' [, flags] ) [WITH ( … ) | WITH table] [AS] alias`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct OpenXmlTableReference {
    /// The document handle.
    pub variable: ScalarExpression,
    /// The row pattern.
    pub row_pattern: ScalarExpression,
    /// The mapping flags.
    pub flags: Option<ScalarExpression>,
    /// The explicit schema.
    pub schema_declaration_items: Vec<SchemaDeclarationItem>,
    /// `WITH table_name`.
    pub table_name: Option<SchemaObjectName>,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `OPENQUERY( linked_server, 'query' ) [AS] alias`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct OpenQueryTableReference {
    /// The linked server.
    pub linked_server: Identifier,
    /// The pass-through query.
    pub query: Literal,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Column aliases.
    pub columns: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `OPENDATASOURCE( 'provider', 'init string' )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AdHocDataSource {
    /// The provider.
    pub provider_name: Literal,
    /// The connection string.
    pub init_string: Literal,
    /// Source span.
    pub span: Span,
}

/// `OPENDATASOURCE( … ).db.schema.object [AS] alias`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AdHocTableReference {
    /// The data source.
    pub data_source: AdHocDataSource,
    /// The remote object.
    pub object: SchemaObjectName,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `CHANGETABLE( CHANGES t, @last_sync [, FORCESEEK] ) [AS] alias`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ChangeTableChangesTableReference {
    /// The tracked table.
    pub target: SchemaObjectName,
    /// The baseline version.
    pub since_version: ScalarExpression,
    /// `FORCESEEK`.
    pub force_seek: bool,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Column aliases.
    pub columns: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `CHANGETABLE( VERSION t, (pk cols), (pk values) [, FORCESEEK] ) [AS] alias`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ChangeTableVersionTableReference {
    /// The tracked table.
    pub target: SchemaObjectName,
    /// The primary key columns.
    pub primary_key_columns: Vec<Identifier>,
    /// The primary key values.
    pub primary_key_values: Vec<ScalarExpression>,
    /// `FORCESEEK`.
    pub force_seek: bool,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Column aliases.
    pub columns: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `PREDICT( MODEL = m, DATA = t AS d [, RUNTIME = ONNX] ) WITH ( … ) [AS] alias`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct PredictTableReference {
    /// The model.
    pub model: ScalarExpression,
    /// The scored input.
    pub data_source: TableReference,
    /// `RUNTIME = name`.
    pub runtime: Option<Identifier>,
    /// The output schema.
    pub schema_declaration_items: Vec<SchemaDeclarationItem>,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `CONTAINSTABLE( t, cols, 'search' [, LANGUAGE l] [, top_n] ) [AS] alias`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct FullTextTableReference {
    /// `CONTAINSTABLE` or `FREETEXTTABLE`.
    pub full_text_function_type: FullTextFunctionType,
    /// The indexed table.
    pub table_name: SchemaObjectName,
    /// Searched columns; a `*` column for all.
    pub columns: Vec<ColumnReferenceExpression>,
    /// `PROPERTY(col, 'name')` target property.
    pub property_name: Option<ScalarExpression>,
    /// The search condition.
    pub search_condition: ScalarExpression,
    /// `LANGUAGE term`.
    pub language: Option<ScalarExpression>,
    /// Result row limit.
    pub top_n: Option<ScalarExpression>,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// Semantic search table functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum SemanticFunctionType {
    /// `SEMANTICKEYPHRASETABLE`
    SemanticKeyPhraseTable,
    /// `SEMANTICSIMILARITYTABLE`
    SemanticSimilarityTable,
    /// `SEMANTICSIMILARITYDETAILSTABLE`
    SemanticSimilarityDetailsTable,
}

/// `SEMANTICKEYPHRASETABLE( t, cols [, key] ) [AS] alias` and friends.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SemanticTableReference {
    /// Which function.
    pub semantic_function_type: SemanticFunctionType,
    /// The indexed table.
    pub table_name: SchemaObjectName,
    /// The source columns.
    pub columns: Vec<ColumnReferenceExpression>,
    /// The source document key.
    pub source_key: Option<ScalarExpression>,
    /// The matched column (details form).
    pub matched_column: Option<ColumnReferenceExpression>,
    /// The matched document key (details form).
    pub matched_key: Option<ScalarExpression>,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `( DML … OUTPUT … ) [AS] alias [( cols )]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DataModificationTableReference {
    /// The data modification.
    pub data_modification_specification: DataModificationSpecification,
    /// The correlation name.
    pub alias: Option<Identifier>,
    /// Column aliases.
    pub columns: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `{oj a LEFT OUTER JOIN b ON … }`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct OdbcQualifiedJoinTableReference {
    /// The escaped join.
    pub table_reference: TableReference,
    /// Source span, braces included.
    pub span: Span,
}
