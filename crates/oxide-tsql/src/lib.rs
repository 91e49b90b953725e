//! # oxide-tsql
//!
//! A T-SQL syntax tree and parser for SQL Server and Azure Synapse scripts.
//!
//! This crate provides:
//! - A hand-written lexer and recursive descent parser with Pratt expression
//!   parsing, covering queries, DML, procedural code, DDL, security and
//!   server administration statements
//! - A typed syntax tree with exact source spans on every node
//! - Read-only traversal and rebuilding rewrites over that tree
//! - A structural JSON projection and a structural validator
//!
//! ## Parsing
//!
//! Parsing never fails: malformed input yields diagnostics next to whatever
//! could be recovered.
//!
//! ```rust
//! use oxide_tsql::ast::Statement;
//!
//! let result = oxide_tsql::parse("SELECT id, name FROM dbo.users WHERE active = 1\nGO");
//! assert!(!result.has_errors());
//!
//! let batch = &result.script.batches[0];
//! assert!(matches!(batch.statements[0], Statement::Select(_)));
//! ```
//!
//! ```rust
//! let result = oxide_tsql::parse("SELECT FROM;\nPRINT 'still parsed'");
//! assert!(result.has_errors());
//! assert_eq!(result.script.statements().count(), 1);
//!
//! let error = result.errors().next().unwrap();
//! assert_eq!(error.code.as_str(), "TSQL2001");
//! ```
//!
//! ## Dialect versions
//!
//! Every construct is recognised whatever version is requested. Constructs
//! newer than the requested version raise a `TSQL4001` diagnostic:
//!
//! ```rust
//! use oxide_tsql::{ParseOptions, SqlVersion};
//!
//! let options = ParseOptions::default().with_version(SqlVersion::Sql120);
//! let result = oxide_tsql::parse_with("DROP TABLE IF EXISTS dbo.t", &options);
//! assert_eq!(result.errors().next().unwrap().code.as_str(), "TSQL4001");
//! ```

extern crate self as oxide_tsql;

pub mod ast;
pub mod dialect;
pub mod lexer;
pub mod parser;
pub mod serialize;
pub mod validate;
pub mod visit;

use tracing::debug;

pub use ast::{Batch, Script, Statement};
pub use dialect::{Feature, SqlVersion};
pub use lexer::{Keyword, LexError, Lexer, LineIndex, Span, Token, TokenKind};
pub use parser::{
    Diagnostic, DiagnosticCode, ParseError, ParseOptions, ParseResult, Parser, Severity,
};
pub use validate::{StructuralError, validate_script};
pub use visit::{Fold, Node, Rewriter, Spanned, VisitAction, Visitor, Walk};

/// Parses a script with the default options.
#[must_use]
pub fn parse(source: &str) -> ParseResult {
    parse_with(source, &ParseOptions::default())
}

/// Parses a script.
#[must_use]
pub fn parse_with(source: &str, options: &ParseOptions) -> ParseResult {
    Parser::new(source, options).parse_script()
}

/// Parses a script held as raw bytes.
///
/// A UTF-8 byte order mark or a UTF-16 (LE or BE) byte order mark selects
/// the encoding; without one the input is read as UTF-8. Spans are byte
/// offsets into the decoded UTF-8 text, byte order mark excluded.
///
/// ```rust
/// let utf16le: Vec<u8> = [0xFF, 0xFE]
///     .into_iter()
///     .chain("SELECT 1".encode_utf16().flat_map(u16::to_le_bytes))
///     .collect();
/// let result = oxide_tsql::parse_bytes(&utf16le, &Default::default());
/// assert!(!result.has_errors());
/// assert_eq!(result.script.span.end, 8);
/// ```
#[must_use]
pub fn parse_bytes(bytes: &[u8], options: &ParseOptions) -> ParseResult {
    match decode_bytes(bytes) {
        Ok(source) => parse_with(&source, options),
        Err(error) => undecodable(&error),
    }
}

/// Parses a script held as UTF-16 code units. A leading byte order mark is
/// skipped.
#[must_use]
pub fn parse_utf16(units: &[u16], options: &ParseOptions) -> ParseResult {
    match decode_utf16(units.iter().copied()) {
        Ok(source) => parse_with(&source, options),
        Err(error) => undecodable(&error),
    }
}

fn decode_bytes(bytes: &[u8]) -> Result<String, LexError> {
    match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => decode_utf8(rest),
        [0xFF, 0xFE, rest @ ..] => {
            debug!(encoding = "UTF-16LE", "decoding input");
            decode_utf16(utf16_units(rest, u16::from_le_bytes)?)
        }
        [0xFE, 0xFF, rest @ ..] => {
            debug!(encoding = "UTF-16BE", "decoding input");
            decode_utf16(utf16_units(rest, u16::from_be_bytes)?)
        }
        _ => decode_utf8(bytes),
    }
}

fn decode_utf8(bytes: &[u8]) -> Result<String, LexError> {
    core::str::from_utf8(bytes).map(str::to_owned).map_err(|error| {
        LexError::InvalidEncoding(format!(
            "invalid UTF-8 sequence at byte {}",
            error.valid_up_to()
        ))
    })
}

fn utf16_units(
    bytes: &[u8],
    from_bytes: fn([u8; 2]) -> u16,
) -> Result<impl Iterator<Item = u16> + '_, LexError> {
    let pairs = bytes.chunks_exact(2);
    if !pairs.remainder().is_empty() {
        return Err(LexError::InvalidEncoding(String::from(
            "odd number of bytes in UTF-16 input",
        )));
    }
    Ok(pairs.map(move |pair| from_bytes([pair[0], pair[1]])))
}

fn decode_utf16(units: impl Iterator<Item = u16>) -> Result<String, LexError> {
    let mut units = units.peekable();
    if units.peek() == Some(&0xFEFF) {
        units.next();
    }
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|error| {
            LexError::InvalidEncoding(format!(
                "unpaired UTF-16 surrogate {:#06X}",
                error.unpaired_surrogate()
            ))
        })
}

fn undecodable(error: &LexError) -> ParseResult {
    ParseResult {
        script: Script::default(),
        diagnostics: vec![Diagnostic::lexical(error, Span::default())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bytes_utf8_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("SELECT N'é'".as_bytes());
        let result = parse_bytes(&bytes, &ParseOptions::default());
        assert!(!result.has_errors());
        assert_eq!(result.script.span.end, "SELECT N'é'".len());
    }

    #[test]
    fn test_parse_bytes_utf16_be() {
        let mut bytes = vec![0xFE, 0xFF];
        bytes.extend("PRINT 1".encode_utf16().flat_map(u16::to_be_bytes));
        let result = parse_bytes(&bytes, &ParseOptions::default());
        assert!(!result.has_errors());
        assert_eq!(result.script.statements().count(), 1);
    }

    #[test]
    fn test_invalid_encoding_is_fatal() {
        let result = parse_bytes(&[b'S', 0xC3, 0x28], &ParseOptions::default());
        assert!(result.script.is_empty());
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].code, DiagnosticCode::InvalidEncoding);

        let result = parse_bytes(&[0xFF, 0xFE, 0x41], &ParseOptions::default());
        assert_eq!(result.diagnostics[0].code.as_str(), "TSQL1006");
    }

    #[test]
    fn test_parse_utf16() {
        let mut units = vec![0xFEFF];
        units.extend("SELECT 1; SELECT 2".encode_utf16());
        let result = parse_utf16(&units, &ParseOptions::default());
        assert_eq!(result.script.statements().count(), 2);

        let result = parse_utf16(&[0x0053, 0xD800], &ParseOptions::default());
        assert!(result.has_errors());
        assert!(result.script.is_empty());
    }
}
