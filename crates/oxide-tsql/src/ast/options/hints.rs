//! Table hints (`WITH (NOLOCK)`) and query hints (`OPTION (…)`).

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use crate::ast::{
    ColumnReferenceExpression, IdentifierOrValueExpression, Literal, ScalarExpression,
    SchemaObjectName, VariableReference,
};
use crate::lexer::Span;

option_kinds! {
    /// Table hint names.
    pub enum TableHintKind {
        ForceScan = "FORCESCAN" => Flag,
        ForceSeek = "FORCESEEK" => Custom,
        HoldLock = "HOLDLOCK" => Flag,
        Index = "INDEX" => Custom,
        KeepDefaults = "KEEPDEFAULTS" => Flag,
        KeepIdentity = "KEEPIDENTITY" => Flag,
        IgnoreConstraints = "IGNORE_CONSTRAINTS" => Flag,
        IgnoreTriggers = "IGNORE_TRIGGERS" => Flag,
        NoExpand = "NOEXPAND" => Flag,
        NoLock = "NOLOCK" => Flag,
        NoWait = "NOWAIT" => Flag,
        PagLock = "PAGLOCK" => Flag,
        ReadCommitted = "READCOMMITTED" => Flag,
        ReadCommittedLock = "READCOMMITTEDLOCK" => Flag,
        ReadPast = "READPAST" => Flag,
        ReadUncommitted = "READUNCOMMITTED" => Flag,
        RepeatableRead = "REPEATABLEREAD" => Flag,
        RowLock = "ROWLOCK" => Flag,
        Serializable = "SERIALIZABLE" => Flag,
        Snapshot = "SNAPSHOT" => Flag,
        SpatialWindowMaxCells = "SPATIAL_WINDOW_MAX_CELLS" => Integer,
        TabLock = "TABLOCK" => Flag,
        TabLockX = "TABLOCKX" => Flag,
        UpdLock = "UPDLOCK" => Flag,
        XLock = "XLOCK" => Flag,
    }
}

/// One table hint.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum TableHint {
    /// A bare hint keyword.
    General(GeneralTableHint),
    /// `INDEX(ix, …)` or `INDEX = ix`.
    Index(IndexTableHint),
    /// `SPATIAL_WINDOW_MAX_CELLS = n`.
    Literal(LiteralTableHint),
    /// `FORCESEEK [( ix ( col, … ) )]`.
    ForceSeek(ForceSeekTableHint),
}

impl TableHint {
    /// Returns the hint's kind.
    #[must_use]
    pub const fn hint_kind(&self) -> TableHintKind {
        match self {
            Self::General(h) => h.hint_kind,
            Self::Index(h) => h.hint_kind,
            Self::Literal(h) => h.hint_kind,
            Self::ForceSeek(h) => h.hint_kind,
        }
    }
}

/// A bare table hint.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct GeneralTableHint {
    /// The hint.
    pub hint_kind: TableHintKind,
    /// Source span.
    pub span: Span,
}

/// `INDEX(ix, …)`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct IndexTableHint {
    /// Always [`TableHintKind::Index`].
    pub hint_kind: TableHintKind,
    /// Index names or ids.
    pub index_values: Vec<IdentifierOrValueExpression>,
    /// Source span.
    pub span: Span,
}

/// A table hint with a literal value.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct LiteralTableHint {
    /// The hint.
    pub hint_kind: TableHintKind,
    /// The value.
    pub value: Literal,
    /// Source span.
    pub span: Span,
}

/// `FORCESEEK [( ix ( col, … ) )]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ForceSeekTableHint {
    /// Always [`TableHintKind::ForceSeek`].
    pub hint_kind: TableHintKind,
    /// The index.
    pub index_value: Option<IdentifierOrValueExpression>,
    /// The seek columns.
    pub column_values: Vec<ColumnReferenceExpression>,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// Query hint names.
    pub enum OptimizerHintKind {
        ConcatUnion = "CONCAT UNION" => Flag,
        DisableExternalPushdown = "DISABLE EXTERNALPUSHDOWN" => Flag,
        DisableScaleOutExecution = "DISABLE SCALEOUTEXECUTION" => Flag,
        ExpandViews = "EXPAND VIEWS" => Flag,
        Fast = "FAST" => Integer,
        ForceExternalPushdown = "FORCE EXTERNALPUSHDOWN" => Flag,
        ForceOrder = "FORCE ORDER" => Flag,
        ForceScaleOutExecution = "FORCE SCALEOUTEXECUTION" => Flag,
        HashGroup = "HASH GROUP" => Flag,
        HashJoin = "HASH JOIN" => Flag,
        HashUnion = "HASH UNION" => Flag,
        IgnoreNonclusteredColumnstoreIndex = "IGNORE_NONCLUSTERED_COLUMNSTORE_INDEX" => Flag,
        KeepPlan = "KEEP PLAN" => Flag,
        KeepFixedPlan = "KEEPFIXED PLAN" => Flag,
        Label = "LABEL" => Custom,
        LoopJoin = "LOOP JOIN" => Flag,
        MaxDop = "MAXDOP" => Integer,
        MaxGrantPercent = "MAX_GRANT_PERCENT" => Custom,
        MaxRecursion = "MAXRECURSION" => Integer,
        MergeJoin = "MERGE JOIN" => Flag,
        MergeUnion = "MERGE UNION" => Flag,
        MinGrantPercent = "MIN_GRANT_PERCENT" => Custom,
        NoPerformanceSpool = "NO_PERFORMANCE_SPOOL" => Flag,
        OptimizeFor = "OPTIMIZE FOR" => Custom,
        OptimizeForUnknown = "OPTIMIZE FOR UNKNOWN" => Flag,
        OrderGroup = "ORDER GROUP" => Flag,
        ParameterizationForced = "PARAMETERIZATION FORCED" => Flag,
        ParameterizationSimple = "PARAMETERIZATION SIMPLE" => Flag,
        QueryTraceOn = "QUERYTRACEON" => Integer,
        Recompile = "RECOMPILE" => Flag,
        RobustPlan = "ROBUST PLAN" => Flag,
        TableHint = "TABLE HINT" => Custom,
        UseHint = "USE HINT" => Custom,
        UsePlan = "USE PLAN" => Custom,
    }
}

/// One query hint of an `OPTION (…)` clause.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum OptimizerHint {
    /// A bare hint.
    General(GeneralOptimizerHint),
    /// A hint with a literal value (`MAXDOP 4`, `LABEL = 'x'`).
    Literal(LiteralOptimizerHint),
    /// `OPTIMIZE FOR ( @v = value | UNKNOWN, … )`.
    OptimizeFor(OptimizeForOptimizerHint),
    /// `USE HINT ( 'name', … )`.
    UseHint(UseHintList),
    /// `TABLE HINT ( object, hint, … )`.
    TableHints(TableHintsOptimizerHint),
    /// `USE PLAN N'xml'`.
    UsePlan(LiteralOptimizerHint),
}

impl OptimizerHint {
    /// Returns the hint's kind.
    #[must_use]
    pub const fn hint_kind(&self) -> OptimizerHintKind {
        match self {
            Self::General(h) => h.hint_kind,
            Self::Literal(h) | Self::UsePlan(h) => h.hint_kind,
            Self::OptimizeFor(h) => h.hint_kind,
            Self::UseHint(h) => h.hint_kind,
            Self::TableHints(h) => h.hint_kind,
        }
    }
}

/// A bare query hint.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct GeneralOptimizerHint {
    /// The hint.
    pub hint_kind: OptimizerHintKind,
    /// Source span.
    pub span: Span,
}

/// A query hint with a literal value.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct LiteralOptimizerHint {
    /// The hint.
    pub hint_kind: OptimizerHintKind,
    /// The value.
    pub value: Literal,
    /// Source span.
    pub span: Span,
}

/// `@v = value` or `@v UNKNOWN`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct VariableValuePair {
    /// The variable.
    pub variable: VariableReference,
    /// The value to optimize for.
    pub value: Option<ScalarExpression>,
    /// `UNKNOWN`.
    pub is_for_unknown: bool,
    /// Source span.
    pub span: Span,
}

/// `OPTIMIZE FOR ( … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct OptimizeForOptimizerHint {
    /// Always [`OptimizerHintKind::OptimizeFor`].
    pub hint_kind: OptimizerHintKind,
    /// The pairs.
    pub pairs: Vec<VariableValuePair>,
    /// Source span.
    pub span: Span,
}

/// `USE HINT ( 'name', … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct UseHintList {
    /// Always [`OptimizerHintKind::UseHint`].
    pub hint_kind: OptimizerHintKind,
    /// The hint names.
    pub hints: Vec<Literal>,
    /// Source span.
    pub span: Span,
}

/// `TABLE HINT ( object [, hint …] )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct TableHintsOptimizerHint {
    /// Always [`OptimizerHintKind::TableHint`].
    pub hint_kind: OptimizerHintKind,
    /// The exposed object name.
    pub object_name: SchemaObjectName,
    /// The hints.
    pub table_hints: Vec<TableHint>,
    /// Source span.
    pub span: Span,
}

/// `OPTION ( hint, … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct OptionClause {
    /// The hints.
    pub optimizer_hints: Vec<OptimizerHint>,
    /// Source span.
    pub span: Span,
}
