//! Token types for the T-SQL lexer.

use super::{Keyword, Span};

/// Errors raised while scanning a single token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A string literal is missing its closing quote.
    #[error("Unterminated string literal")]
    UnterminatedString,
    /// A `[bracketed]` identifier is missing its closing bracket.
    #[error("Unterminated bracketed identifier")]
    UnterminatedBracketIdentifier,
    /// A `"quoted"` identifier is missing its closing quote.
    #[error("Unterminated quoted identifier")]
    UnterminatedQuotedIdentifier,
    /// A block comment is missing its closing `*/`.
    #[error("Unterminated block comment")]
    UnterminatedComment,
    /// A `0x` literal with a non-hex digit or an odd digit count.
    #[error("Invalid binary literal: {0}")]
    InvalidBinaryLiteral(String),
    /// A character that cannot start any token.
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),
    /// The input bytes could not be decoded.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Integer literal (e.g., 42), kept as written.
    Integer(String),
    /// Decimal literal (e.g., 3.14).
    Numeric(String),
    /// Real literal in scientific notation (e.g., 1.5E10).
    Real(String),
    /// Money literal (e.g., $12.50), including the currency sign.
    Money(String),
    /// String literal with escapes resolved.
    String {
        /// The unescaped content.
        value: String,
        /// Whether the literal had an `N` prefix.
        national: bool,
    },
    /// Binary literal (e.g., 0x1F), kept as written.
    Binary(String),

    // Identifiers and keywords
    /// Regular identifier, including contextual keywords.
    Identifier(String),
    /// `[bracketed]` identifier with `]]` resolved.
    BracketIdentifier(String),
    /// `"quoted"` identifier with `""` resolved.
    QuotedIdentifier(String),
    /// Local variable (e.g., @name), including the sigil.
    Variable(String),
    /// Global variable (e.g., @@ROWCOUNT), including the sigils.
    GlobalVariable(String),
    /// Reserved keyword.
    Keyword(Keyword),

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// &
    Ampersand,
    /// |
    Pipe,
    /// ^
    Caret,
    /// ~
    Tilde,
    /// ||
    Concat,
    /// =
    Eq,
    /// <>
    LtGt,
    /// !=
    BangEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// !<
    BangLt,
    /// !>
    BangGt,
    /// +=
    PlusEq,
    /// -=
    MinusEq,
    /// *=
    StarEq,
    /// /=
    SlashEq,
    /// %=
    PercentEq,
    /// &=
    AmpersandEq,
    /// |=
    PipeEq,
    /// ^=
    CaretEq,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,
    /// :
    Colon,
    /// ::
    DoubleColon,

    // Special
    /// `GO` alone on its line, with an optional repeat count.
    BatchSeparator(Option<String>),
    /// End of input
    Eof,
    /// Malformed token
    Error(LexError),
}

impl TokenKind {
    /// Returns a short human-readable description for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Integer(text)
            | Self::Numeric(text)
            | Self::Real(text)
            | Self::Money(text)
            | Self::Binary(text) => format!("literal {text}"),
            Self::String { value, .. } => format!("string '{value}'"),
            Self::Identifier(name) => format!("identifier {name}"),
            Self::BracketIdentifier(name) => format!("identifier [{name}]"),
            Self::QuotedIdentifier(name) => format!("identifier \"{name}\""),
            Self::Variable(name) | Self::GlobalVariable(name) => format!("variable {name}"),
            Self::Keyword(kw) => kw.as_str().to_string(),
            Self::BatchSeparator(_) => String::from("GO"),
            Self::Eof => String::from("end of input"),
            Self::Error(e) => e.to_string(),
            other => format!("'{}'", other.punctuation()),
        }
    }

    /// Returns the source spelling of an operator or delimiter.
    #[must_use]
    pub const fn punctuation(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::Tilde => "~",
            Self::Concat => "||",
            Self::Eq => "=",
            Self::LtGt => "<>",
            Self::BangEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::BangLt => "!<",
            Self::BangGt => "!>",
            Self::PlusEq => "+=",
            Self::MinusEq => "-=",
            Self::StarEq => "*=",
            Self::SlashEq => "/=",
            Self::PercentEq => "%=",
            Self::AmpersandEq => "&=",
            Self::PipeEq => "|=",
            Self::CaretEq => "^=",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Dot => ".",
            Self::Colon => ":",
            Self::DoubleColon => "::",
            _ => "",
        }
    }
}

/// A token with its span in the source code.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if this is a reserved keyword.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self.kind, TokenKind::Keyword(_))
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }

    /// Returns true if the token spells `keyword`, either as a reserved
    /// keyword or as an unquoted identifier.
    #[must_use]
    pub fn is_word(&self, keyword: Keyword) -> bool {
        match &self.kind {
            TokenKind::Keyword(kw) => *kw == keyword,
            TokenKind::Identifier(name) => name.eq_ignore_ascii_case(keyword.as_str()),
            _ => false,
        }
    }

    /// Returns the unquoted word of a keyword or regular identifier token.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(kw.as_str()),
            TokenKind::Identifier(name) => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_eof() {
        let eof = Token::new(TokenKind::Eof, Span::new(0, 0, 1));
        let select = Token::new(TokenKind::Keyword(Keyword::Select), Span::new(0, 6, 1));
        assert!(eof.is_eof());
        assert!(!select.is_eof());
    }

    #[test]
    fn test_token_is_word_matches_contextual_identifier() {
        let online = Token::new(
            TokenKind::Identifier(String::from("online")),
            Span::new(0, 6, 1),
        );
        assert!(online.is_word(Keyword::Online));
        assert!(!online.is_keyword());

        let bracketed = Token::new(
            TokenKind::BracketIdentifier(String::from("ONLINE")),
            Span::new(0, 8, 1),
        );
        assert!(!bracketed.is_word(Keyword::Online));
    }

    #[test]
    fn test_describe() {
        assert_eq!(TokenKind::LtGt.describe(), "'<>'");
        assert_eq!(TokenKind::Keyword(Keyword::From).describe(), "FROM");
        assert_eq!(TokenKind::Eof.describe(), "end of input");
    }
}
