//! Option bundles: the `WITH (NAME = value, …)` families attached to
//! statements.
//!
//! Each family is a closed set of kinds (an enum generated by
//! `option_kinds!`) plus a sum of option structs. Every option struct carries
//! an `option_kind` discriminator; plain `NAME = value` options share a
//! family's `General…Option` struct and keep their value as an
//! [`OptionValue`], while options with richer syntax get dedicated structs.

mod database;
mod external;
mod hints;
mod maintenance;
mod module;
mod security;
mod server;
mod table;

pub use database::*;
pub use external::*;
pub use hints::*;
pub use maintenance::*;
pub use module::*;
pub use security::*;
pub use server::*;
pub use table::*;

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use super::{Identifier, Literal, SchemaObjectName};
use crate::lexer::Span;

/// How an option's value is written after its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// No value: the option name alone.
    Flag,
    /// `ON` or `OFF`.
    OnOff,
    /// An integer literal.
    Integer,
    /// A string literal.
    String,
    /// Any literal; bare words are kept as identifier literals.
    Literal,
    /// A single identifier.
    Identifier,
    /// A schema object name.
    Name,
    /// One of a fixed set of keywords.
    Enumerated(&'static [&'static str]),
    /// A number with an optional unit (`10 MB`, `60 SECONDS`) or `UNLIMITED`.
    Quantity,
    /// Parsed by a family-specific production.
    Custom,
}

/// The kind enum of an option family.
pub trait OptionKind: Copy + Sized + 'static {
    /// Looks up a kind by its (possibly multi-word) spelling.
    fn from_word(word: &str) -> Option<Self>;

    /// Returns the canonical spelling.
    fn as_str(&self) -> &'static str;

    /// Returns how the option's value is written.
    fn value_shape(&self) -> ValueShape;

    /// Every spelling of the family, used for expected-token sets.
    fn words() -> &'static [&'static str];
}

/// A family's catch-all option struct, built from a kind and a value.
pub trait GeneralOption: Sized {
    /// The family's kind enum.
    type Kind: OptionKind;

    /// Builds the option.
    fn new(option_kind: Self::Kind, value: Option<OptionValue>, span: Span) -> Self;
}

/// The state of an `ON` / `OFF` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum OptionState {
    /// `ON`
    On,
    /// `OFF`
    Off,
    /// Not written.
    NotSet,
}

impl OptionState {
    /// Returns the canonical spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "On",
            Self::Off => "Off",
            Self::NotSet => "NotSet",
        }
    }

    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

keyword_enum! {
    /// Units accepted after a quantity.
    pub enum ValueUnit {
        Kb = "KB",
        Mb = "MB",
        Gb = "GB",
        Tb = "TB",
        Percent = "%",
        Milliseconds = "MILLISECONDS",
        Seconds = "SECONDS",
        Minutes = "MINUTES",
        Hours = "HOURS",
        Days = "DAYS",
        Weeks = "WEEKS",
        Months = "MONTHS",
        Years = "YEARS",
    }
}

impl ValueUnit {
    /// Normalizes singular time units (`1 DAY`) to their plural spelling.
    #[must_use]
    pub fn from_word_lenient(word: &str) -> Option<Self> {
        Self::from_word(word).or_else(|| match word.to_ascii_uppercase().as_str() {
            "MILLISECOND" => Some(Self::Milliseconds),
            "SECOND" => Some(Self::Seconds),
            "MINUTE" => Some(Self::Minutes),
            "HOUR" => Some(Self::Hours),
            "DAY" => Some(Self::Days),
            "WEEK" => Some(Self::Weeks),
            "MONTH" => Some(Self::Months),
            "YEAR" => Some(Self::Years),
            _ => None,
        })
    }
}

/// The value of a `NAME = value` option.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum OptionValue {
    /// `ON` / `OFF`.
    OnOff(OnOffOptionValue),
    /// A literal; bare words are identifier literals.
    Literal(Literal),
    /// An identifier.
    Identifier(Identifier),
    /// A qualified name.
    Name(SchemaObjectName),
    /// One of the option's enumerated keywords.
    Keyword(KeywordOptionValue),
    /// A number with a unit.
    Quantity(QuantityOptionValue),
}

/// `ON` / `OFF`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct OnOffOptionValue {
    /// The state written.
    pub option_state: OptionState,
    /// Source span.
    pub span: Span,
}

/// An enumerated keyword value, kept in its canonical upper-case spelling.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct KeywordOptionValue {
    /// The keyword, upper-cased; multi-word values are space-joined.
    pub value: String,
    /// Source span.
    pub span: Span,
}

/// `10 MB`, `25 PERCENT`, `2 DAYS`, `UNLIMITED`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct QuantityOptionValue {
    /// The number, or an identifier literal such as `UNLIMITED`.
    pub quantity: Literal,
    /// The unit, when written.
    pub unit: Option<ValueUnit>,
    /// Source span.
    pub span: Span,
}

impl OptionValue {
    /// Returns the `ON` / `OFF` state, if this is one.
    #[must_use]
    pub fn option_state(&self) -> Option<OptionState> {
        match self {
            Self::OnOff(value) => Some(value.option_state),
            _ => None,
        }
    }
}

/// A `from [TO to]` range, as in compression partition lists and
/// scheduler affinity.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct LiteralRange {
    /// Lower bound.
    pub from: Literal,
    /// Upper bound, when a range.
    pub to: Option<Literal>,
    /// Source span.
    pub span: Span,
}

/// `EXECUTE AS` targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum ExecuteAsOption {
    /// `CALLER`
    Caller,
    /// `SELF`
    #[serde(rename = "Self")]
    SelfPrincipal,
    /// `OWNER`
    Owner,
    /// `LOGIN = 'name'`
    Login,
    /// `USER = 'name'` or a bare string
    User,
}

/// `EXECUTE AS { CALLER | SELF | OWNER | 'name' }`, and the
/// `EXECUTE AS LOGIN | USER = 'name'` statement form.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ExecuteAsClause {
    /// The principal kind.
    pub execute_as_option: ExecuteAsOption,
    /// The principal name for `LOGIN` / `USER` / string forms.
    pub literal: Option<Literal>,
    /// Source span.
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_unit_lookup() {
        assert_eq!(ValueUnit::from_word("mb"), Some(ValueUnit::Mb));
        assert_eq!(ValueUnit::from_word_lenient("Day"), Some(ValueUnit::Days));
        assert_eq!(ValueUnit::from_word_lenient("fortnight"), None);
        assert_eq!(ValueUnit::Percent.as_str(), "%");
    }

    #[test]
    fn test_option_kind_shapes() {
        assert_eq!(DatabaseOptionKind::AutoClose.value_shape(), ValueShape::OnOff);
        assert_eq!(DatabaseOptionKind::QueryStore.value_shape(), ValueShape::Custom);
        assert_eq!(
            <DatabaseOptionKind as OptionKind>::from_word("query_store"),
            Some(DatabaseOptionKind::QueryStore)
        );
        assert!(matches!(
            DatabaseOptionKind::Recovery.value_shape(),
            ValueShape::Enumerated(words) if words.contains(&"SIMPLE")
        ));
    }

    #[test]
    fn test_multi_word_kinds() {
        assert_eq!(
            OptimizerHintKind::from_word("hash join"),
            Some(OptimizerHintKind::HashJoin)
        );
        assert_eq!(
            SequenceOptionKind::from_word("START WITH"),
            Some(SequenceOptionKind::StartWith)
        );
    }
}
