//! T-SQL Lexer/Tokenizer
//!
//! This module provides a hand-written lexer for T-SQL that produces a stream
//! of tokens. Whitespace and comments are dropped; positions survive in spans.

mod keyword;
mod span;
mod token;
mod tokenizer;

pub use keyword::Keyword;
pub use span::{LineIndex, Span};
pub use token::{LexError, Token, TokenKind};
pub use tokenizer::Lexer;
