//! Control flow, variables, `EXECUTE`, cursors, session `SET`,
//! transactions and Service Broker conversations.

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use super::{
    AssignmentKind, BooleanExpression, CursorOption, DataTypeReference, ExecuteAsClause,
    Identifier, IdentifierOrValueExpression, Literal, OptionState, OptionValue, ScalarExpression,
    SchemaObjectName, SelectElement, SelectStatement, Statement, TableDefinition,
    VariableReference,
};
use crate::lexer::Span;

/// `IF cond stmt [ELSE stmt]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct IfStatement {
    /// The condition.
    pub predicate: BooleanExpression,
    /// Executed when true.
    pub then_statement: Statement,
    /// Executed otherwise.
    pub else_statement: Option<Statement>,
    /// Source span.
    pub span: Span,
}

/// `WHILE cond stmt`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct WhileStatement {
    /// The loop condition.
    pub predicate: BooleanExpression,
    /// The body.
    pub statement: Statement,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// `BEGIN ATOMIC WITH ( … )` option names.
    pub enum AtomicBlockOptionKind {
        DateFirst = "DATEFIRST" => Integer,
        DateFormat = "DATEFORMAT" => Literal,
        DelayedDurability = "DELAYED_DURABILITY" => OnOff,
        IsolationLevel = "TRANSACTION ISOLATION LEVEL" => Enumerated(&[
            "SNAPSHOT", "REPEATABLE READ", "SERIALIZABLE",
        ]),
        Language = "LANGUAGE" => String,
    }
}

general_option! {
    /// One atomic block option.
    AtomicBlockOption, AtomicBlockOptionKind
}

/// `BEGIN [ATOMIC WITH ( … )] statements END`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BeginEndBlockStatement {
    /// `BEGIN ATOMIC` of natively compiled modules.
    pub is_atomic: bool,
    /// `WITH ( … )` of an atomic block.
    pub atomic_block_options: Vec<AtomicBlockOption>,
    /// The body.
    pub statement_list: Vec<Statement>,
    /// Source span.
    pub span: Span,
}

/// `BEGIN TRY … END TRY BEGIN CATCH … END CATCH`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct TryCatchStatement {
    /// The guarded statements.
    pub try_statements: Vec<Statement>,
    /// The handler.
    pub catch_statements: Vec<Statement>,
    /// Source span.
    pub span: Span,
}

/// `THROW [number, message, state]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ThrowStatement {
    /// Error number.
    pub error_number: Option<ScalarExpression>,
    /// Message.
    pub message: Option<ScalarExpression>,
    /// State.
    pub state: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `RETURN [expr]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ReturnStatement {
    /// The return value.
    pub expression: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `GOTO label`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct GoToStatement {
    /// The target label.
    pub label_name: Identifier,
    /// Source span.
    pub span: Span,
}

/// `label:`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct LabelStatement {
    /// The label name, without the colon.
    pub label: Identifier,
    /// Source span, colon included.
    pub span: Span,
}

/// `BREAK`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BreakStatement {
    /// Source span.
    pub span: Span,
}

/// `CONTINUE`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ContinueStatement {
    /// Source span.
    pub span: Span,
}

/// `WAITFOR` forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum WaitForOption {
    /// `DELAY 'hh:mm:ss'`
    Delay,
    /// `TIME 'hh:mm:ss'`
    Time,
    /// `( RECEIVE … )` or `( GET CONVERSATION GROUP … )`
    Statement,
}

/// `WAITFOR DELAY | TIME value` or `WAITFOR ( stmt ) [, TIMEOUT n]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct WaitForStatement {
    /// The form.
    pub wait_for_option: WaitForOption,
    /// The delay or time.
    pub parameter: Option<ScalarExpression>,
    /// The broker statement waited on.
    pub statement: Option<Statement>,
    /// `TIMEOUT n`.
    pub timeout: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `PRINT expr`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct PrintStatement {
    /// The printed value.
    pub expression: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// `RAISERROR … WITH` options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum RaiseErrorOption {
    /// `LOG`
    Log,
    /// `NOWAIT`
    NoWait,
    /// `SETERROR`
    SetError,
}

/// `RAISERROR (msg, severity, state [, args]) [WITH options]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct RaiseErrorStatement {
    /// Message id or text.
    pub first_parameter: ScalarExpression,
    /// Severity.
    pub second_parameter: ScalarExpression,
    /// State.
    pub third_parameter: ScalarExpression,
    /// Substitution arguments.
    pub optional_parameters: Vec<ScalarExpression>,
    /// `WITH LOG, NOWAIT, SETERROR`.
    pub raise_error_options: Vec<RaiseErrorOption>,
    /// Source span.
    pub span: Span,
}

/// One `@name [AS] type [= value]` of a `DECLARE`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DeclareVariableElement {
    /// The variable.
    pub variable_name: VariableReference,
    /// The type.
    pub data_type: DataTypeReference,
    /// The initial value.
    pub value: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `DECLARE @a INT = 1, @b CURSOR, …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DeclareVariableStatement {
    /// The declarations.
    pub declarations: Vec<DeclareVariableElement>,
    /// Source span.
    pub span: Span,
}

/// `DECLARE @t [AS] TABLE ( … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DeclareTableVariableStatement {
    /// The variable.
    pub variable_name: VariableReference,
    /// The table body.
    pub definition: TableDefinition,
    /// Source span.
    pub span: Span,
}

/// `.Method(args)` applied to a variable in `SET @x.Method(…)`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct VariableMethodCall {
    /// The method.
    pub method_name: Identifier,
    /// Arguments.
    pub parameters: Vec<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `SET @v op expr`, `SET @c = CURSOR …`, `SET @x.Method(…)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SetVariableStatement {
    /// The variable.
    pub variable: VariableReference,
    /// A mutator method call instead of an assignment.
    pub method_call: Option<VariableMethodCall>,
    /// The operator, absent for method calls.
    pub assignment_kind: Option<AssignmentKind>,
    /// The value.
    pub expression: Option<ScalarExpression>,
    /// `CURSOR …` assigned to a cursor variable.
    pub cursor_definition: Option<CursorDefinition>,
    /// Source span.
    pub span: Span,
}

/// `@p = value [OUTPUT]` or `value [OUT]` in a procedure call.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ExecuteParameter {
    /// The parameter name.
    pub variable: Option<VariableReference>,
    /// The argument; `DEFAULT` is a default literal.
    pub parameter_value: ScalarExpression,
    /// `OUTPUT` / `OUT`.
    pub is_output: bool,
    /// Source span.
    pub span: Span,
}

/// `schema.proc[;n]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ProcedureReference {
    /// The procedure.
    pub name: SchemaObjectName,
    /// The `;n` group number.
    pub number: Option<Literal>,
    /// Source span.
    pub span: Span,
}

/// A procedure named directly or through a variable.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum ProcedureReferenceName {
    /// `schema.proc`
    Reference(ProcedureReference),
    /// `@proc_name`
    Variable(VariableReference),
}

/// What an `EXECUTE` runs.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum ExecutableEntity {
    /// A procedure call.
    Procedure(ExecutableProcedureReference),
    /// `( 'sql' + @text, … )`.
    Strings(ExecutableStringList),
}

/// `proc args`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ExecutableProcedureReference {
    /// The procedure.
    pub procedure_reference: ProcedureReferenceName,
    /// The arguments.
    pub parameters: Vec<ExecuteParameter>,
    /// Source span.
    pub span: Span,
}

/// `( 'sql' [+ …] [, args] )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ExecutableStringList {
    /// The concatenated command text.
    pub strings: Vec<ScalarExpression>,
    /// Pass-through arguments for `AT server`.
    pub parameters: Vec<ExecuteParameter>,
    /// Source span.
    pub span: Span,
}

/// `[@rc =] entity [AS LOGIN|USER = 'x'] [AT server]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ExecuteSpecification {
    /// Receives the return code.
    pub variable: Option<VariableReference>,
    /// The procedure or command text.
    pub executable_entity: ExecutableEntity,
    /// `AS LOGIN | USER = 'name'`.
    pub execute_context: Option<ExecuteAsClause>,
    /// `AT linked_server`.
    pub linked_server: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `EXECUTE … WITH` option kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum ExecuteOptionKind {
    /// `RECOMPILE`
    Recompile,
    /// `RESULT SETS UNDEFINED`
    ResultSetsUndefined,
    /// `RESULT SETS NONE`
    ResultSetsNone,
    /// `RESULT SETS ( … )`
    ResultSets,
}

/// A column of an inline result set definition.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ResultColumnDefinition {
    /// The column name.
    pub column_name: Identifier,
    /// The type.
    pub data_type: DataTypeReference,
    /// `NULL` / `NOT NULL`.
    pub nullable: Option<bool>,
    /// Source span.
    pub span: Span,
}

/// Result set definition forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum ResultSetType {
    /// `( col type, … )`
    Inline,
    /// `AS OBJECT name`
    Object,
    /// `AS TYPE name`
    Type,
    /// `AS FOR XML`
    ForXml,
}

/// One result set of `WITH RESULT SETS ( … )`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ResultSetDefinition {
    /// The form.
    pub result_set_type: ResultSetType,
    /// Inline columns.
    pub columns: Vec<ResultColumnDefinition>,
    /// The object or type name.
    pub name: Option<SchemaObjectName>,
    /// Source span.
    pub span: Span,
}

/// One `EXECUTE … WITH` option.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ExecuteOption {
    /// The option.
    pub option_kind: ExecuteOptionKind,
    /// Result sets of `RESULT SETS ( … )`.
    pub definitions: Vec<ResultSetDefinition>,
    /// Source span.
    pub span: Span,
}

/// `EXEC[UTE] … [WITH options]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ExecuteStatement {
    /// The call.
    pub execute_specification: ExecuteSpecification,
    /// `WITH RECOMPILE`, `WITH RESULT SETS …`.
    pub options: Vec<ExecuteOption>,
    /// Source span.
    pub span: Span,
}

/// `EXECUTE AS LOGIN|USER = 'x' | CALLER [WITH NO REVERT | COOKIE INTO @c]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ExecuteAsStatement {
    /// The impersonated principal.
    pub execute_context: ExecuteAsClause,
    /// `WITH NO REVERT`.
    pub with_no_revert: bool,
    /// `WITH COOKIE INTO @c`.
    pub cookie: Option<VariableReference>,
    /// Source span.
    pub span: Span,
}

/// `REVERT [WITH COOKIE = @c]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct RevertStatement {
    /// The cookie.
    pub cookie: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `USE database`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct UseStatement {
    /// The database.
    pub database_name: Identifier,
    /// Source span.
    pub span: Span,
}

/// A cursor name, optionally `GLOBAL`; variables are `Var`-quoted identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CursorId {
    /// `GLOBAL`.
    pub is_global: bool,
    /// The cursor or cursor variable.
    pub name: Identifier,
    /// Source span.
    pub span: Span,
}

/// `[options] CURSOR [options] FOR select`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CursorDefinition {
    /// Options before and after `CURSOR`.
    pub options: Vec<CursorOption>,
    /// The cursor query, with any `FOR UPDATE [OF …]`.
    pub select: SelectStatement,
    /// Source span.
    pub span: Span,
}

/// `DECLARE name CURSOR … FOR select`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DeclareCursorStatement {
    /// The cursor name.
    pub name: Identifier,
    /// The definition.
    pub cursor_definition: CursorDefinition,
    /// Source span.
    pub span: Span,
}

/// `OPEN cursor`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct OpenCursorStatement {
    /// The cursor.
    pub cursor: CursorId,
    /// Source span.
    pub span: Span,
}

/// `CLOSE cursor`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CloseCursorStatement {
    /// The cursor.
    pub cursor: CursorId,
    /// Source span.
    pub span: Span,
}

/// `DEALLOCATE cursor`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DeallocateCursorStatement {
    /// The cursor.
    pub cursor: CursorId,
    /// Source span.
    pub span: Span,
}

/// `FETCH` directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum FetchOrientation {
    /// `NEXT`
    Next,
    /// `PRIOR`
    Prior,
    /// `FIRST`
    First,
    /// `LAST`
    Last,
    /// `ABSOLUTE n`
    Absolute,
    /// `RELATIVE n`
    Relative,
}

/// `NEXT`, `ABSOLUTE n`, …
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct FetchType {
    /// The direction.
    pub orientation: FetchOrientation,
    /// The row offset for `ABSOLUTE` / `RELATIVE`.
    pub row_offset: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `FETCH [direction FROM] cursor [INTO @a, …]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct FetchCursorStatement {
    /// The direction.
    pub fetch_type: Option<FetchType>,
    /// The cursor.
    pub cursor: CursorId,
    /// Receiving variables.
    pub into_variables: Vec<VariableReference>,
    /// Source span.
    pub span: Span,
}

keyword_enum! {
    /// Session flags set with `SET flag[, flag …] ON | OFF`.
    pub enum SetOptions {
        AnsiDefaults = "ANSI_DEFAULTS",
        AnsiNullDfltOff = "ANSI_NULL_DFLT_OFF",
        AnsiNullDfltOn = "ANSI_NULL_DFLT_ON",
        AnsiNulls = "ANSI_NULLS",
        AnsiPadding = "ANSI_PADDING",
        AnsiWarnings = "ANSI_WARNINGS",
        ArithAbort = "ARITHABORT",
        ArithIgnore = "ARITHIGNORE",
        ConcatNullYieldsNull = "CONCAT_NULL_YIELDS_NULL",
        CursorCloseOnCommit = "CURSOR_CLOSE_ON_COMMIT",
        FmtOnly = "FMTONLY",
        ForcePlan = "FORCEPLAN",
        ImplicitTransactions = "IMPLICIT_TRANSACTIONS",
        NoCount = "NOCOUNT",
        NoExec = "NOEXEC",
        NoBrowseTable = "NO_BROWSETABLE",
        NumericRoundAbort = "NUMERIC_ROUNDABORT",
        ParseOnly = "PARSEONLY",
        QuotedIdentifier = "QUOTED_IDENTIFIER",
        RemoteProcTransactions = "REMOTE_PROC_TRANSACTIONS",
        ShowPlanAll = "SHOWPLAN_ALL",
        ShowPlanText = "SHOWPLAN_TEXT",
        ShowPlanXml = "SHOWPLAN_XML",
        XactAbort = "XACT_ABORT",
    }
}

/// `SET NOCOUNT, XACT_ABORT ON`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct PredicateSetStatement {
    /// The flags.
    pub options: Vec<SetOptions>,
    /// `ON` (rather than `OFF`).
    pub is_on: bool,
    /// Source span.
    pub span: Span,
}

/// `SET ROWCOUNT n`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SetRowCountStatement {
    /// The row limit.
    pub number_rows: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// `SET TEXTSIZE n`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SetTextSizeStatement {
    /// The size in bytes.
    pub text_size: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// Transaction isolation levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum IsolationLevel {
    /// `READ UNCOMMITTED`
    ReadUncommitted,
    /// `READ COMMITTED`
    ReadCommitted,
    /// `REPEATABLE READ`
    RepeatableRead,
    /// `SNAPSHOT`
    Snapshot,
    /// `SERIALIZABLE`
    Serializable,
}

/// `SET TRANSACTION ISOLATION LEVEL level`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SetTransactionIsolationLevelStatement {
    /// The level.
    pub level: IsolationLevel,
    /// Source span.
    pub span: Span,
}

/// `SET IDENTITY_INSERT t ON | OFF`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SetIdentityInsertStatement {
    /// The table.
    pub table: SchemaObjectName,
    /// `ON`.
    pub is_on: bool,
    /// Source span.
    pub span: Span,
}

keyword_enum! {
    /// `SET STATISTICS` flags.
    pub enum SetStatisticsOptions {
        Io = "IO",
        Profile = "PROFILE",
        Time = "TIME",
        Xml = "XML",
    }
}

/// `SET STATISTICS IO, TIME ON | OFF`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SetStatisticsStatement {
    /// The flags.
    pub options: Vec<SetStatisticsOptions>,
    /// `ON`.
    pub is_on: bool,
    /// Source span.
    pub span: Span,
}

keyword_enum! {
    /// Session settings that take a value.
    pub enum GeneralSetCommandType {
        ContextInfo = "CONTEXT_INFO",
        DateFirst = "DATEFIRST",
        DateFormat = "DATEFORMAT",
        DeadlockPriority = "DEADLOCK_PRIORITY",
        Language = "LANGUAGE",
        LockTimeout = "LOCK_TIMEOUT",
        QueryGovernorCostLimit = "QUERY_GOVERNOR_COST_LIMIT",
    }
}

/// `SET DATEFORMAT dmy`, `SET LOCK_TIMEOUT 500`, …
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct GeneralSetStatement {
    /// The setting.
    pub command_type: GeneralSetCommandType,
    /// The value; bare words are identifier literals.
    pub parameter: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// `BEGIN [DISTRIBUTED] TRAN[SACTION] [name [WITH MARK ['desc']]]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BeginTransactionStatement {
    /// `DISTRIBUTED`.
    pub distributed: bool,
    /// The transaction name or `@variable`.
    pub name: Option<Identifier>,
    /// `WITH MARK`.
    pub mark_defined: bool,
    /// The mark description.
    pub mark_description: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `COMMIT [TRAN[SACTION] [name]] [WITH (DELAYED_DURABILITY = ON|OFF)]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CommitTransactionStatement {
    /// The transaction name or `@variable`.
    pub name: Option<Identifier>,
    /// `DELAYED_DURABILITY`.
    pub delayed_durability_option: OptionState,
    /// Source span.
    pub span: Span,
}

/// `ROLLBACK [TRAN[SACTION] [name]]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct RollbackTransactionStatement {
    /// The transaction or savepoint name.
    pub name: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `SAVE TRAN[SACTION] name`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SaveTransactionStatement {
    /// The savepoint name.
    pub name: Identifier,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// `BEGIN DIALOG … WITH` option names.
    pub enum DialogOptionKind {
        Encryption = "ENCRYPTION" => OnOff,
        Lifetime = "LIFETIME" => Custom,
        RelatedConversation = "RELATED_CONVERSATION" => Custom,
        RelatedConversationGroup = "RELATED_CONVERSATION_GROUP" => Custom,
    }
}

/// One `BEGIN DIALOG` option.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DialogOption {
    /// The option.
    pub option_kind: DialogOptionKind,
    /// The handle or lifetime expression.
    pub value: Option<ScalarExpression>,
    /// The `ON` / `OFF` of `ENCRYPTION`.
    pub option_value: Option<OptionValue>,
    /// Source span.
    pub span: Span,
}

/// `BEGIN DIALOG [CONVERSATION] @h FROM SERVICE s TO SERVICE 't' [, 'inst']
/// [ON CONTRACT c] [WITH …]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BeginDialogStatement {
    /// `CONVERSATION` was written.
    pub is_conversation: bool,
    /// Receives the dialog handle.
    pub handle: VariableReference,
    /// The initiating service.
    pub initiator_service_name: IdentifierOrValueExpression,
    /// The target service.
    pub target_service_name: ScalarExpression,
    /// The broker instance.
    pub instance_spec: Option<ScalarExpression>,
    /// `ON CONTRACT`.
    pub contract_name: Option<IdentifierOrValueExpression>,
    /// `WITH …`.
    pub options: Vec<DialogOption>,
    /// Source span.
    pub span: Span,
}

/// `BEGIN CONVERSATION TIMER (@h) TIMEOUT = n`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct BeginConversationTimerStatement {
    /// The conversation.
    pub handle: ScalarExpression,
    /// Seconds.
    pub timeout: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// `RECEIVE [TOP (n)] cols FROM queue [INTO @t] [WHERE cond]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ReceiveStatement {
    /// `TOP (n)`.
    pub top: Option<ScalarExpression>,
    /// The received columns.
    pub select_elements: Vec<SelectElement>,
    /// The queue.
    pub queue: SchemaObjectName,
    /// `INTO @table`.
    pub into: Option<VariableReference>,
    /// `WHERE conversation_handle = …`.
    pub where_clause: Option<BooleanExpression>,
    /// Source span.
    pub span: Span,
}

/// `SEND ON CONVERSATION (@h, …) [MESSAGE TYPE t] [(body)]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SendStatement {
    /// The conversations.
    pub conversation_handles: Vec<ScalarExpression>,
    /// The message type.
    pub message_type_name: Option<IdentifierOrValueExpression>,
    /// The message body.
    pub message_body: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `END CONVERSATION @h [WITH CLEANUP | WITH ERROR = n DESCRIPTION = 'd']`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct EndConversationStatement {
    /// The conversation.
    pub conversation: ScalarExpression,
    /// `WITH CLEANUP`.
    pub with_cleanup: bool,
    /// `ERROR = n`.
    pub error_code: Option<ScalarExpression>,
    /// `DESCRIPTION = 'text'`.
    pub error_description: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `MOVE CONVERSATION @h TO @group`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct MoveConversationStatement {
    /// The conversation.
    pub conversation: ScalarExpression,
    /// The target group.
    pub group: ScalarExpression,
    /// Source span.
    pub span: Span,
}

/// `GET CONVERSATION GROUP @g FROM queue`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct GetConversationGroupStatement {
    /// Receives the group id.
    pub group_id: VariableReference,
    /// The queue.
    pub queue: SchemaObjectName,
    /// Source span.
    pub span: Span,
}
