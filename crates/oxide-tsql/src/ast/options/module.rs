//! Options of programmable objects, views, cursors and sequences.

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use super::ExecuteAsClause;
use crate::ast::{DataTypeReference, ScalarExpression};
use crate::lexer::Span;

option_kinds! {
    /// `WITH` options of procedures, functions and triggers.
    ///
    /// Not every kind is legal on every module; the parser rejects the
    /// mismatches.
    pub enum ModuleOptionKind {
        CalledOnNullInput = "CALLED ON" => Custom,
        Encryption = "ENCRYPTION" => Flag,
        ExecuteAs = "EXECUTE AS" => Custom,
        ExecAs = "EXEC AS" => Custom,
        Inline = "INLINE" => OnOff,
        NativeCompilation = "NATIVE_COMPILATION" => Flag,
        Recompile = "RECOMPILE" => Flag,
        ReturnsNullOnNullInput = "RETURNS NULL" => Custom,
        SchemaBinding = "SCHEMABINDING" => Flag,
    }
}

general_option! {
    /// A module option whose value follows the kind's shape.
    GeneralModuleOption, ModuleOptionKind
}

/// One option of a procedure, function or trigger.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum ModuleOption {
    /// A flag or `NAME = value`.
    General(GeneralModuleOption),
    /// `EXECUTE AS …`.
    ExecuteAs(ExecuteAsModuleOption),
}

impl ModuleOption {
    /// Returns the option's kind.
    #[must_use]
    pub const fn option_kind(&self) -> ModuleOptionKind {
        match self {
            Self::General(o) => o.option_kind,
            Self::ExecuteAs(o) => o.option_kind,
        }
    }
}

/// `EXECUTE AS CALLER | SELF | OWNER | 'user'`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ExecuteAsModuleOption {
    /// [`ModuleOptionKind::ExecuteAs`] or [`ModuleOptionKind::ExecAs`].
    pub option_kind: ModuleOptionKind,
    /// The target principal.
    pub execute_as: ExecuteAsClause,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// View option names.
    pub enum ViewOptionKind {
        Encryption = "ENCRYPTION" => Flag,
        SchemaBinding = "SCHEMABINDING" => Flag,
        ViewMetadata = "VIEW_METADATA" => Flag,
    }
}

/// One view attribute.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ViewOption {
    /// The attribute.
    pub option_kind: ViewOptionKind,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// `DECLARE … CURSOR` options.
    pub enum CursorOptionKind {
        Dynamic = "DYNAMIC" => Flag,
        FastForward = "FAST_FORWARD" => Flag,
        ForwardOnly = "FORWARD_ONLY" => Flag,
        Global = "GLOBAL" => Flag,
        Insensitive = "INSENSITIVE" => Flag,
        Keyset = "KEYSET" => Flag,
        Local = "LOCAL" => Flag,
        Optimistic = "OPTIMISTIC" => Flag,
        ReadOnly = "READ_ONLY" => Flag,
        Scroll = "SCROLL" => Flag,
        ScrollLocks = "SCROLL_LOCKS" => Flag,
        Static = "STATIC" => Flag,
        TypeWarning = "TYPE_WARNING" => Flag,
    }
}

/// One cursor option.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CursorOption {
    /// The option.
    pub option_kind: CursorOptionKind,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// Sequence option names.
    pub enum SequenceOptionKind {
        As = "AS" => Custom,
        Cache = "CACHE" => Custom,
        Cycle = "CYCLE" => Flag,
        IncrementBy = "INCREMENT BY" => Custom,
        MaxValue = "MAXVALUE" => Custom,
        MinValue = "MINVALUE" => Custom,
        Restart = "RESTART" => Custom,
        StartWith = "START WITH" => Custom,
    }
}

/// One sequence option.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum SequenceOption {
    /// A valued or `NO`-prefixed option.
    Scalar(ScalarExpressionSequenceOption),
    /// `AS type`.
    DataType(DataTypeSequenceOption),
}

impl SequenceOption {
    /// Returns the option's kind.
    #[must_use]
    pub const fn option_kind(&self) -> SequenceOptionKind {
        match self {
            Self::Scalar(o) => o.option_kind,
            Self::DataType(o) => o.option_kind,
        }
    }
}

/// `START WITH n`, `NO MAXVALUE`, `CACHE [n]`, `RESTART [WITH n]`, `CYCLE`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ScalarExpressionSequenceOption {
    /// The option.
    pub option_kind: SequenceOptionKind,
    /// The `NO` prefix.
    pub no_value: bool,
    /// The value, when written.
    pub option_value: Option<ScalarExpression>,
    /// Source span.
    pub span: Span,
}

/// `AS data_type`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DataTypeSequenceOption {
    /// Always [`SequenceOptionKind::As`].
    pub option_kind: SequenceOptionKind,
    /// The type.
    pub data_type: DataTypeReference,
    /// Source span.
    pub span: Span,
}
