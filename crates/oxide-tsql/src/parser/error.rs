//! Parser error types and diagnostics.

use serde::Serialize;

use crate::lexer::{LexError, Span, Token, TokenKind};

/// Stable diagnostic codes.
///
/// `TSQL1xxx` are lexical, `TSQL2xxx` syntactic, `TSQL3xxx` structural and
/// `TSQL4xxx` dialect diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// `TSQL1001`
    UnterminatedString,
    /// `TSQL1002`
    UnterminatedIdentifier,
    /// `TSQL1003`
    UnterminatedComment,
    /// `TSQL1004`
    InvalidBinaryLiteral,
    /// `TSQL1005`
    UnexpectedCharacter,
    /// `TSQL1006`
    InvalidEncoding,
    /// `TSQL2001`
    UnexpectedToken,
    /// `TSQL2002`
    UnexpectedEndOfInput,
    /// `TSQL2003`
    UnknownOption,
    /// `TSQL2004`
    InvalidOptionValue,
    /// `TSQL2005`
    NestingTooDeep,
    /// `TSQL2101`
    MergeNotTerminated,
    /// `TSQL2102`
    RepeatCountOverflow,
    /// `TSQL2103`
    TooManyErrors,
    /// `TSQL3001`
    Structural,
    /// `TSQL4001`
    UnsupportedInVersion,
}

impl DiagnosticCode {
    /// Returns the stable textual code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnterminatedString => "TSQL1001",
            Self::UnterminatedIdentifier => "TSQL1002",
            Self::UnterminatedComment => "TSQL1003",
            Self::InvalidBinaryLiteral => "TSQL1004",
            Self::UnexpectedCharacter => "TSQL1005",
            Self::InvalidEncoding => "TSQL1006",
            Self::UnexpectedToken => "TSQL2001",
            Self::UnexpectedEndOfInput => "TSQL2002",
            Self::UnknownOption => "TSQL2003",
            Self::InvalidOptionValue => "TSQL2004",
            Self::NestingTooDeep => "TSQL2005",
            Self::MergeNotTerminated => "TSQL2101",
            Self::RepeatCountOverflow => "TSQL2102",
            Self::TooManyErrors => "TSQL2103",
            Self::Structural => "TSQL3001",
            Self::UnsupportedInVersion => "TSQL4001",
        }
    }

    /// Returns the code for a lexical error.
    #[must_use]
    pub const fn for_lex_error(error: &LexError) -> Self {
        match error {
            LexError::UnterminatedString => Self::UnterminatedString,
            LexError::UnterminatedBracketIdentifier | LexError::UnterminatedQuotedIdentifier => {
                Self::UnterminatedIdentifier
            }
            LexError::UnterminatedComment => Self::UnterminatedComment,
            LexError::InvalidBinaryLiteral(_) => Self::InvalidBinaryLiteral,
            LexError::UnexpectedCharacter(_) => Self::UnexpectedCharacter,
            LexError::InvalidEncoding(_) => Self::InvalidEncoding,
        }
    }
}

impl core::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DiagnosticCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

/// A parse error raised by a production.
///
/// Productions propagate it with `?`; the script driver lowers it into a
/// [`Diagnostic`] and resumes at the next statement boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message} at {}..{}", span.start, span.end)]
pub struct ParseError {
    /// Diagnostic code.
    pub code: DiagnosticCode,
    /// The error message.
    pub message: String,
    /// The location of the error.
    pub span: Span,
    /// What the parser would have accepted.
    pub expected: Vec<String>,
    /// The actual token found.
    pub found: Option<TokenKind>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            expected: Vec::new(),
            found: None,
        }
    }

    /// Creates an "unexpected token" error, or an "unexpected end of input"
    /// error when `found` is the end of input.
    #[must_use]
    pub fn unexpected(expected: &[&str], found: &Token) -> Self {
        let expected: Vec<String> = expected.iter().map(|e| (*e).to_string()).collect();
        let wanted = expected.join(", ");
        if found.is_eof() {
            return Self {
                code: DiagnosticCode::UnexpectedEndOfInput,
                message: format!("Unexpected end of input: expected {wanted}"),
                span: found.span,
                expected,
                found: Some(TokenKind::Eof),
            };
        }
        Self {
            code: DiagnosticCode::UnexpectedToken,
            message: format!(
                "Unexpected token: expected {wanted}, found {}",
                found.kind.describe()
            ),
            span: found.span,
            expected,
            found: Some(found.kind.clone()),
        }
    }

    /// Creates an "unknown option" error.
    #[must_use]
    pub fn unknown_option(family: &str, found: &Token) -> Self {
        Self {
            code: DiagnosticCode::UnknownOption,
            message: format!("Unknown {family} option: {}", found.kind.describe()),
            span: found.span,
            expected: vec![format!("{family} option")],
            found: Some(found.kind.clone()),
        }
    }

    /// Creates a "nesting too deep" error at the token that would open one
    /// more level.
    #[must_use]
    pub fn nesting_too_deep(limit: usize, found: &Token) -> Self {
        Self {
            code: DiagnosticCode::NestingTooDeep,
            message: format!("Nesting exceeds {limit} levels"),
            span: found.span,
            expected: Vec::new(),
            found: Some(found.kind.clone()),
        }
    }

    /// Creates an "invalid option value" error.
    #[must_use]
    pub fn invalid_value(option: &str, expected: &[&str], found: &Token) -> Self {
        let expected: Vec<String> = expected.iter().map(|e| (*e).to_string()).collect();
        Self {
            code: DiagnosticCode::InvalidOptionValue,
            message: format!(
                "Invalid value for {option}: expected {}, found {}",
                expected.join(", "),
                found.kind.describe()
            ),
            span: found.span,
            expected,
            found: Some(found.kind.clone()),
        }
    }
}

/// A diagnostic attached to a parse result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: DiagnosticCode,
    pub message: String,
    pub span: Span,
    /// Expected-set of a syntax error; empty otherwise.
    pub expected: Vec<String>,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    #[must_use]
    pub fn error(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            span,
            expected: Vec::new(),
        }
    }

    /// Creates a warning diagnostic.
    #[must_use]
    pub fn warning(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(code, message, span)
        }
    }

    /// Creates the diagnostic for a lexical error token.
    #[must_use]
    pub fn lexical(error: &LexError, span: Span) -> Self {
        Self::error(DiagnosticCode::for_lex_error(error), error.to_string(), span)
    }

    /// Returns true for error severity.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl From<ParseError> for Diagnostic {
    fn from(error: ParseError) -> Self {
        Self {
            severity: Severity::Error,
            code: error.code,
            message: error.message,
            span: error.span,
            expected: error.expected,
        }
    }
}

impl core::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(
            f,
            "{severity}[{}]: {} (line {}, {}..{})",
            self.code, self.message, self.span.line, self.span.start, self.span.end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_token_message() {
        let found = Token::new(TokenKind::Comma, Span::new(7, 8, 1));
        let error = ParseError::unexpected(&["expression"], &found);
        assert_eq!(error.code, DiagnosticCode::UnexpectedToken);
        assert_eq!(error.expected, vec![String::from("expression")]);
        assert!(error.message.contains("found ','"));
    }

    #[test]
    fn test_unexpected_eof_uses_own_code() {
        let found = Token::new(TokenKind::Eof, Span::new(9, 9, 1));
        let error = ParseError::unexpected(&["FROM", "WHERE"], &found);
        assert_eq!(error.code, DiagnosticCode::UnexpectedEndOfInput);
        assert_eq!(error.code.as_str(), "TSQL2002");
        assert!(error.message.contains("FROM, WHERE"));
    }

    #[test]
    fn test_lexical_codes() {
        assert_eq!(
            DiagnosticCode::for_lex_error(&LexError::UnterminatedQuotedIdentifier).as_str(),
            "TSQL1002"
        );
        let diagnostic = Diagnostic::lexical(&LexError::UnterminatedComment, Span::new(0, 2, 1));
        assert_eq!(diagnostic.code.as_str(), "TSQL1003");
        assert!(diagnostic.is_error());
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic::warning(
            DiagnosticCode::MergeNotTerminated,
            "MERGE must be terminated by a semicolon",
            Span::new(0, 5, 3),
        );
        assert_eq!(
            diagnostic.to_string(),
            "warning[TSQL2101]: MERGE must be terminated by a semicolon (line 3, 0..5)"
        );
    }
}
