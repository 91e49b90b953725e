//! Declarative helpers for the many keyword-valued enums of the tree.

/// Declares a unit enum whose variants are spelled by fixed keywords.
///
/// Generates `from_word` (case-insensitive), `as_str` and `WORDS`.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident = $word:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::oxide_tsql_derive::AstNode,
        )]
        pub enum $name {
            $(
                #[doc = concat!("`", $word, "`")]
                $variant,
            )*
        }

        impl $name {
            /// Every accepted spelling, in declaration order.
            pub const WORDS: &'static [&'static str] = &[$($word),*];

            /// Looks up a variant by its keyword (case-insensitive).
            #[must_use]
            pub fn from_word(word: &str) -> Option<Self> {
                match word.to_ascii_uppercase().as_str() {
                    $($word => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Returns the canonical keyword spelling.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $word,)*
                }
            }
        }
    };
}

/// Declares an option kind enum: a [`keyword_enum!`] whose variants also
/// carry the [`ValueShape`](crate::ast::ValueShape) of their value.
macro_rules! option_kinds {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident = $word:literal => $shape:ident $(($($arg:tt)*))?,)*
        }
    ) => {
        keyword_enum! {
            $(#[$meta])*
            pub enum $name {
                $($variant = $word,)*
            }
        }

        impl $name {
            /// Returns how the option's value is written.
            #[must_use]
            pub const fn value_shape(&self) -> $crate::ast::ValueShape {
                match self {
                    $(Self::$variant => $crate::ast::ValueShape::$shape $(($($arg)*))?,)*
                }
            }
        }

        impl $crate::ast::OptionKind for $name {
            fn from_word(word: &str) -> Option<Self> {
                $name::from_word(word)
            }

            fn as_str(&self) -> &'static str {
                $name::as_str(self)
            }

            fn value_shape(&self) -> $crate::ast::ValueShape {
                $name::value_shape(self)
            }

            fn words() -> &'static [&'static str] {
                Self::WORDS
            }
        }
    };
}

/// Declares the catch-all option struct of a family: a kind tag plus an
/// optional value parsed by shape.
macro_rules! general_option {
    ($(#[$meta:meta])* $name:ident, $kind:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::oxide_tsql_derive::AstNode)]
        #[serde(tag = "$type", rename_all = "PascalCase")]
        pub struct $name {
            /// The option.
            pub option_kind: $kind,
            /// The value, absent for flag options.
            pub value: Option<$crate::ast::OptionValue>,
            /// Source span.
            pub span: $crate::lexer::Span,
        }

        impl $crate::ast::GeneralOption for $name {
            type Kind = $kind;

            fn new(
                option_kind: $kind,
                value: Option<$crate::ast::OptionValue>,
                span: $crate::lexer::Span,
            ) -> Self {
                Self {
                    option_kind,
                    value,
                    span,
                }
            }
        }
    };
}
