//! T-SQL Tokenizer implementation.

use super::{Keyword, LexError, Span, Token, TokenKind};

/// A lexer that tokenizes T-SQL input.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    /// The current line (1-based).
    line: u32,
    /// The line of the start of the current token.
    start_line: u32,
    /// Byte offset of the first character of the current line.
    line_start: usize,
    /// Whether `"text"` is an identifier (`SET QUOTED_IDENTIFIER ON`).
    quoted_identifier: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            line: 1,
            start_line: 1,
            line_start: 0,
            quoted_identifier: true,
        }
    }

    /// Sets whether double-quoted text lexes as an identifier (the default)
    /// or as a string literal.
    #[must_use]
    pub const fn with_quoted_identifier(mut self, quoted_identifier: bool) -> Self {
        self.quoted_identifier = quoted_identifier;
        self
    }

    /// Returns the input being tokenized.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.input
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.line_start = self.pos;
        }
        Some(c)
    }

    /// Skips whitespace and comments.
    ///
    /// Returns an error token for an unterminated block comment.
    fn skip_whitespace_and_comments(&mut self) -> Option<Token> {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                self.start = self.pos;
                self.start_line = self.line;
                self.advance();
                self.advance();
                let mut depth = 1usize;
                while depth > 0 {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            depth -= 1;
                        }
                        Some('/') if self.peek() == Some('*') => {
                            self.advance();
                            depth += 1;
                        }
                        Some(_) => {}
                        None => {
                            return Some(
                                self.make_token(TokenKind::Error(LexError::UnterminatedComment)),
                            );
                        }
                    }
                }
                continue;
            }

            return None;
        }
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos, self.start_line)
    }

    /// Creates a token with the current span.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.make_span())
    }

    fn is_identifier_start(c: char) -> bool {
        c.is_alphabetic() || c == '_' || c == '#'
    }

    fn is_identifier_part(c: char) -> bool {
        c.is_alphanumeric() || matches!(c, '_' | '@' | '#' | '$')
    }

    /// Returns the end offset and repeat count of a batch separator starting
    /// at the current position, if the rest of the line qualifies.
    fn batch_separator_ahead(&self) -> Option<(usize, Option<String>)> {
        if !self.input[self.line_start..self.pos].trim().is_empty() {
            return None;
        }
        let rest = &self.input[self.pos..];
        let word = rest.get(..2)?;
        if !word.eq_ignore_ascii_case("GO") {
            return None;
        }
        let after = &rest[2..];
        if after.chars().next().is_some_and(Self::is_identifier_part) {
            return None;
        }

        let trimmed = after.trim_start_matches([' ', '\t']);
        let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
        let token_end = if digits.is_empty() {
            self.pos + 2
        } else {
            self.pos + 2 + (after.len() - trimmed.len()) + digits.len()
        };

        let tail = self.input[token_end..].trim_start_matches([' ', '\t']);
        let line_done = tail.is_empty()
            || tail.starts_with('\n')
            || tail.starts_with('\r')
            || tail.starts_with("--");
        line_done.then(|| (token_end, (!digits.is_empty()).then_some(digits)))
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(Self::is_identifier_part) {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        match Keyword::reserved(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier(String::from(text))),
        }
    }

    /// Scans a delimited body up to `close`, where a doubled `close`
    /// escapes itself. The opening delimiter has been consumed.
    fn scan_delimited(&mut self, close: char) -> Option<String> {
        let mut value = String::new();
        loop {
            match self.advance() {
                Some(c) if c == close => {
                    if self.peek() == Some(close) {
                        self.advance();
                        value.push(close);
                    } else {
                        return Some(value);
                    }
                }
                Some(c) => value.push(c),
                None => return None,
            }
        }
    }

    /// Scans a `[bracketed]` identifier.
    fn scan_bracket_identifier(&mut self) -> Token {
        match self.scan_delimited(']') {
            Some(value) => self.make_token(TokenKind::BracketIdentifier(value)),
            None => self.make_token(TokenKind::Error(LexError::UnterminatedBracketIdentifier)),
        }
    }

    /// Scans a double-quoted identifier, or a string when quoted identifiers
    /// are off.
    fn scan_double_quoted(&mut self) -> Token {
        match self.scan_delimited('"') {
            Some(value) if self.quoted_identifier => {
                self.make_token(TokenKind::QuotedIdentifier(value))
            }
            Some(value) => self.make_token(TokenKind::String {
                value,
                national: false,
            }),
            None if self.quoted_identifier => {
                self.make_token(TokenKind::Error(LexError::UnterminatedQuotedIdentifier))
            }
            None => self.make_token(TokenKind::Error(LexError::UnterminatedString)),
        }
    }

    /// Scans a string literal. The opening quote has been consumed.
    fn scan_string(&mut self, national: bool) -> Token {
        match self.scan_delimited('\'') {
            Some(value) => self.make_token(TokenKind::String { value, national }),
            None => self.make_token(TokenKind::Error(LexError::UnterminatedString)),
        }
    }

    /// Consumes the digits, fraction and exponent of a number and reports
    /// whether a fraction and an exponent were present.
    fn scan_number_body(&mut self) -> (bool, bool) {
        let mut has_fraction = false;
        let mut has_exponent = false;

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') {
            has_fraction = true;
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
            let rest = &self.input[self.pos + 1..];
            let mut chars = rest.chars();
            let exponent_follows = match chars.next() {
                Some('+' | '-') => chars.next().is_some_and(|c| c.is_ascii_digit()),
                Some(c) => c.is_ascii_digit(),
                None => false,
            };
            if exponent_follows {
                has_exponent = true;
                self.advance();
                if self.peek().is_some_and(|c| c == '+' || c == '-') {
                    self.advance();
                }
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
            }
        }

        (has_fraction, has_exponent)
    }

    /// Scans an integer, decimal or real literal.
    fn scan_number(&mut self) -> Token {
        let (has_fraction, has_exponent) = self.scan_number_body();
        let text = String::from(&self.input[self.start..self.pos]);
        if has_exponent {
            self.make_token(TokenKind::Real(text))
        } else if has_fraction {
            self.make_token(TokenKind::Numeric(text))
        } else {
            self.make_token(TokenKind::Integer(text))
        }
    }

    /// Scans a money literal. The `$` has been consumed.
    fn scan_money(&mut self) -> Token {
        if self.peek().is_some_and(|c| c == '+' || c == '-') {
            self.advance();
        }
        self.scan_number_body();
        let text = String::from(&self.input[self.start..self.pos]);
        self.make_token(TokenKind::Money(text))
    }

    /// Scans a binary literal. `0x` has been consumed.
    fn scan_binary(&mut self) -> Token {
        let mut digits = 0usize;
        while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
            self.advance();
            digits += 1;
        }
        let mut valid = true;
        while self.peek().is_some_and(Self::is_identifier_part) {
            self.advance();
            valid = false;
        }
        let text = String::from(&self.input[self.start..self.pos]);
        if !valid || digits % 2 != 0 {
            return self.make_token(TokenKind::Error(LexError::InvalidBinaryLiteral(text)));
        }
        self.make_token(TokenKind::Binary(text))
    }

    /// Scans a `@local` or `@@global` variable. The first `@` has been
    /// consumed.
    fn scan_variable(&mut self) -> Token {
        let global = self.peek() == Some('@');
        if global {
            self.advance();
        }
        let name_start = self.pos;
        while self.peek().is_some_and(Self::is_identifier_part) {
            self.advance();
        }
        if self.pos == name_start {
            return self.make_token(TokenKind::Error(LexError::UnexpectedCharacter('@')));
        }
        let text = String::from(&self.input[self.start..self.pos]);
        if global {
            self.make_token(TokenKind::GlobalVariable(text))
        } else {
            self.make_token(TokenKind::Variable(text))
        }
    }

    /// Emits `with_eq` if the next character is `=`, otherwise `plain`.
    fn operator_or_assign(&mut self, plain: TokenKind, with_eq: TokenKind) -> Token {
        if self.peek() == Some('=') {
            self.advance();
            self.make_token(with_eq)
        } else {
            self.make_token(plain)
        }
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        if let Some(error) = self.skip_whitespace_and_comments() {
            return error;
        }
        self.start = self.pos;
        self.start_line = self.line;

        if let Some((end, count)) = self.batch_separator_ahead() {
            self.pos = end;
            return self.make_token(TokenKind::BatchSeparator(count));
        }

        let Some(c) = self.advance() else {
            return self.make_token(TokenKind::Eof);
        };

        match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '{' => self.make_token(TokenKind::LeftBrace),
            '}' => self.make_token(TokenKind::RightBrace),
            ',' => self.make_token(TokenKind::Comma),
            ';' => self.make_token(TokenKind::Semicolon),
            '~' => self.make_token(TokenKind::Tilde),
            '=' => self.make_token(TokenKind::Eq),
            '+' => self.operator_or_assign(TokenKind::Plus, TokenKind::PlusEq),
            '-' => self.operator_or_assign(TokenKind::Minus, TokenKind::MinusEq),
            '*' => self.operator_or_assign(TokenKind::Star, TokenKind::StarEq),
            '/' => self.operator_or_assign(TokenKind::Slash, TokenKind::SlashEq),
            '%' => self.operator_or_assign(TokenKind::Percent, TokenKind::PercentEq),
            '&' => self.operator_or_assign(TokenKind::Ampersand, TokenKind::AmpersandEq),
            '^' => self.operator_or_assign(TokenKind::Caret, TokenKind::CaretEq),
            '|' => {
                if self.peek() == Some('|') {
                    self.advance();
                    self.make_token(TokenKind::Concat)
                } else {
                    self.operator_or_assign(TokenKind::Pipe, TokenKind::PipeEq)
                }
            }
            ':' => {
                if self.peek() == Some(':') {
                    self.advance();
                    self.make_token(TokenKind::DoubleColon)
                } else {
                    self.make_token(TokenKind::Colon)
                }
            }
            '<' => match self.peek() {
                Some('=') => {
                    self.advance();
                    self.make_token(TokenKind::LtEq)
                }
                Some('>') => {
                    self.advance();
                    self.make_token(TokenKind::LtGt)
                }
                _ => self.make_token(TokenKind::Lt),
            },
            '>' => self.operator_or_assign(TokenKind::Gt, TokenKind::GtEq),
            '!' => match self.peek() {
                Some('=') => {
                    self.advance();
                    self.make_token(TokenKind::BangEq)
                }
                Some('<') => {
                    self.advance();
                    self.make_token(TokenKind::BangLt)
                }
                Some('>') => {
                    self.advance();
                    self.make_token(TokenKind::BangGt)
                }
                _ => self.make_token(TokenKind::Error(LexError::UnexpectedCharacter('!'))),
            },
            '.' => {
                if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.pos = self.start;
                    self.scan_number()
                } else {
                    self.make_token(TokenKind::Dot)
                }
            }

            '\'' => self.scan_string(false),
            'N' | 'n' if self.peek() == Some('\'') => {
                self.advance();
                self.scan_string(true)
            }
            '"' => self.scan_double_quoted(),
            '[' => self.scan_bracket_identifier(),
            '@' => self.scan_variable(),

            '0' if matches!(self.peek(), Some('x' | 'X')) => {
                self.advance();
                self.scan_binary()
            }
            c if c.is_ascii_digit() => {
                self.pos = self.start;
                self.scan_number()
            }
            '$' => match self.peek() {
                Some(c) if c.is_ascii_digit() || matches!(c, '.' | '+' | '-') => {
                    self.scan_money()
                }
                Some(c) if c.is_alphabetic() => self.scan_identifier(),
                _ => self.make_token(TokenKind::Error(LexError::UnexpectedCharacter('$'))),
            },

            c if Self::is_identifier_start(c) => self.scan_identifier(),

            _ => self.make_token(TokenKind::Error(LexError::UnexpectedCharacter(c))),
        }
    }

    /// Tokenizes the entire input and returns all tokens.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Token> {
        Lexer::new(input).tokenize()
    }

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    fn ident(name: &str) -> TokenKind {
        TokenKind::Identifier(String::from(name))
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert!(matches!(tokens[0].kind, TokenKind::Eof));
    }

    #[test]
    fn test_comments_only() {
        assert_eq!(
            token_kinds("-- line\n/* block /* nested */ still */  "),
            vec![TokenKind::Eof]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        let kinds = token_kinds("SELECT /* open /* nested */");
        assert_eq!(
            kinds[1],
            TokenKind::Error(LexError::UnterminatedComment)
        );
    }

    #[test]
    fn test_reserved_and_contextual_words() {
        assert_eq!(
            token_kinds("select online FROM"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                ident("online"),
                TokenKind::Keyword(Keyword::From),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_identifier_forms() {
        assert_eq!(
            token_kinds(r#"[a]]b] "x""y" #tmp ##g $action"#),
            vec![
                TokenKind::BracketIdentifier(String::from("a]b")),
                TokenKind::QuotedIdentifier(String::from("x\"y")),
                ident("#tmp"),
                ident("##g"),
                ident("$action"),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_quoted_identifier_off_makes_strings() {
        let kinds: Vec<TokenKind> = Lexer::new("\"abc\"")
            .with_quoted_identifier(false)
            .tokenize()
            .into_iter()
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds[0],
            TokenKind::String {
                value: String::from("abc"),
                national: false
            }
        );
    }

    #[test]
    fn test_variables() {
        assert_eq!(
            token_kinds("@x @@ROWCOUNT"),
            vec![
                TokenKind::Variable(String::from("@x")),
                TokenKind::GlobalVariable(String::from("@@ROWCOUNT")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_numeric_literals_keep_text() {
        assert_eq!(
            token_kinds("42 3.14 .5 1.5E10 2e-3 $12.50 0x1F 0x"),
            vec![
                TokenKind::Integer(String::from("42")),
                TokenKind::Numeric(String::from("3.14")),
                TokenKind::Numeric(String::from(".5")),
                TokenKind::Real(String::from("1.5E10")),
                TokenKind::Real(String::from("2e-3")),
                TokenKind::Money(String::from("$12.50")),
                TokenKind::Binary(String::from("0x1F")),
                TokenKind::Binary(String::from("0x")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_invalid_binary_literal() {
        assert_eq!(
            token_kinds("0x1G")[0],
            TokenKind::Error(LexError::InvalidBinaryLiteral(String::from("0x1G")))
        );
        assert_eq!(
            token_kinds("0xABC")[0],
            TokenKind::Error(LexError::InvalidBinaryLiteral(String::from("0xABC")))
        );
    }

    #[test]
    fn test_string_literals() {
        assert_eq!(
            token_kinds("'it''s' N'x'"),
            vec![
                TokenKind::String {
                    value: String::from("it's"),
                    national: false
                },
                TokenKind::String {
                    value: String::from("x"),
                    national: true
                },
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unterminated_literals() {
        assert_eq!(
            token_kinds("'abc")[0],
            TokenKind::Error(LexError::UnterminatedString)
        );
        assert_eq!(
            token_kinds("[abc")[0],
            TokenKind::Error(LexError::UnterminatedBracketIdentifier)
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            token_kinds("<> != !< !> <= >= || += %= ^= :: ."),
            vec![
                TokenKind::LtGt,
                TokenKind::BangEq,
                TokenKind::BangLt,
                TokenKind::BangGt,
                TokenKind::LtEq,
                TokenKind::GtEq,
                TokenKind::Concat,
                TokenKind::PlusEq,
                TokenKind::PercentEq,
                TokenKind::CaretEq,
                TokenKind::DoubleColon,
                TokenKind::Dot,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_batch_separator() {
        assert_eq!(
            token_kinds("SELECT 1\ngo\n  GO 3 -- again\nSELECT go"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Integer(String::from("1")),
                TokenKind::BatchSeparator(None),
                TokenKind::BatchSeparator(Some(String::from("3"))),
                TokenKind::Keyword(Keyword::Select),
                ident("go"),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_go_not_alone_on_line_is_identifier() {
        let kinds = token_kinds("GO x");
        assert_eq!(kinds[0], ident("GO"));
        let kinds = token_kinds("/* c */ GO");
        assert_eq!(kinds[0], ident("GO"));
    }

    #[test]
    fn test_spans_and_lines() {
        let tokens = tokenize("SELECT\n  [a b]");
        assert_eq!(tokens[0].span, Span::new(0, 6, 1));
        assert_eq!(tokens[1].span, Span::new(9, 14, 2));
    }
}
