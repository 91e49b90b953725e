//! T-SQL Parser implementation.
//!
//! This module owns the token cursor, the diagnostic sink and the script
//! driver. Productions live in sibling modules as further `impl Parser`
//! blocks: expressions in `expr`, queries in `query`, statements grouped by
//! area in the remaining files.

use std::collections::VecDeque;

use serde::Serialize;
use tracing::{debug, trace, warn};

use super::error::{Diagnostic, DiagnosticCode, ParseError};
use super::options::ParseOptions;
use crate::ast::{
    Batch, Identifier, LabelStatement, Literal, LiteralType, MultiPartIdentifier, QuoteType,
    SchemaObjectName, Script, Statement, VariableReference,
};
use crate::dialect::Feature;
use crate::lexer::{Keyword, Lexer, Span, Token, TokenKind};
use crate::visit::Spanned;

/// Recursive productions that may be open at once before the parser gives
/// up with `TSQL2005`. A parenthesised expression opens one or two levels.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Reserved words that may begin a statement. Error recovery resynchronises
/// on these when they appear outside parentheses.
const STATEMENT_KEYWORDS: &[Keyword] = &[
    Keyword::Add,
    Keyword::Alter,
    Keyword::Backup,
    Keyword::Begin,
    Keyword::Break,
    Keyword::Bulk,
    Keyword::Checkpoint,
    Keyword::Close,
    Keyword::Commit,
    Keyword::Continue,
    Keyword::Create,
    Keyword::Dbcc,
    Keyword::Deallocate,
    Keyword::Declare,
    Keyword::Delete,
    Keyword::Deny,
    Keyword::Drop,
    Keyword::Exec,
    Keyword::Execute,
    Keyword::Fetch,
    Keyword::Goto,
    Keyword::Grant,
    Keyword::If,
    Keyword::Insert,
    Keyword::Kill,
    Keyword::Merge,
    Keyword::Open,
    Keyword::Print,
    Keyword::RaisError,
    Keyword::Reconfigure,
    Keyword::Restore,
    Keyword::Return,
    Keyword::Revert,
    Keyword::Revoke,
    Keyword::Rollback,
    Keyword::Save,
    Keyword::Select,
    Keyword::Set,
    Keyword::Shutdown,
    Keyword::Truncate,
    Keyword::Update,
    Keyword::Use,
    Keyword::WaitFor,
    Keyword::While,
];

/// The outcome of parsing a script: the tree plus every diagnostic, in the
/// order they were raised.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParseResult {
    /// The parsed script. Statements that failed to parse are omitted.
    pub script: Script,
    /// Errors and warnings.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    /// Returns true if any error-severity diagnostic was raised.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Iterates over the error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// Iterates over the warnings.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }
}

/// T-SQL Parser.
pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
    pub(super) current: Token,
    pub(super) previous: Token,
    /// Tokens read ahead of `current`, at most three.
    lookahead: VecDeque<Token>,
    pub(super) options: ParseOptions,
    diagnostics: Vec<Diagnostic>,
    /// Errors raised, suppressed ones included.
    error_count: usize,
    /// Tokens consumed so far; recovery uses it to guarantee progress.
    consumed: usize,
    suppressing: bool,
    /// Open recursive productions; bounded by `MAX_NESTING_DEPTH`.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(source: &'a str, options: &ParseOptions) -> Self {
        let lexer = Lexer::new(source).with_quoted_identifier(options.quoted_identifier);
        let mut parser = Self {
            source,
            lexer,
            current: Token::new(TokenKind::Eof, Span::default()),
            previous: Token::new(TokenKind::Eof, Span::default()),
            lookahead: VecDeque::with_capacity(3),
            options: options.clone(),
            diagnostics: Vec::new(),
            error_count: 0,
            consumed: 0,
            suppressing: false,
            depth: 0,
        };
        parser.current = parser.next_significant();
        parser
    }

    /// Parses the whole input into `GO`-separated batches.
    ///
    /// Never fails: syntax errors become diagnostics and the parser resumes
    /// at the next statement boundary.
    #[must_use]
    pub fn parse_script(mut self) -> ParseResult {
        debug!(
            bytes = self.source.len(),
            version = %self.options.version,
            strict = self.options.strict,
            "parsing script"
        );
        let mut batches = Vec::new();
        let mut statements: Vec<Statement> = Vec::new();

        loop {
            match &self.current.kind {
                TokenKind::Eof => break,
                TokenKind::BatchSeparator(count) => {
                    let count = count.clone();
                    let go = self.current.span;
                    self.advance();
                    let repeat_count = self.repeat_count(count.as_deref(), go);
                    let span = batch_span(&statements)
                        .unwrap_or_else(|| Span::new(go.start, go.start, go.line));
                    batches.push(Batch {
                        statements: core::mem::take(&mut statements),
                        repeat_count,
                        span,
                    });
                    if self.should_stop() {
                        break;
                    }
                    continue;
                }
                TokenKind::Semicolon => {
                    self.advance();
                    continue;
                }
                _ => {}
            }

            let start = self.current.span;
            let consumed = self.consumed;
            match self.parse_terminated_statement() {
                Ok(statement) => {
                    let span = statement.span();
                    trace!(
                        kind = statement.kind(),
                        start = span.start,
                        end = span.end,
                        "parsed statement"
                    );
                    statements.push(statement);
                }
                Err(error) => {
                    self.report_error(error);
                    self.recover(start, consumed);
                }
            }
            if self.should_stop() {
                break;
            }
        }

        if let Some(span) = batch_span(&statements) {
            batches.push(Batch {
                statements,
                repeat_count: None,
                span,
            });
        }

        debug!(
            batches = batches.len(),
            diagnostics = self.diagnostics.len(),
            errors = self.error_count,
            "parsed script"
        );
        ParseResult {
            script: Script {
                batches,
                span: Span::new(0, self.source.len(), 1),
            },
            diagnostics: self.diagnostics,
        }
    }

    /// Returns the diagnostics raised so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Parses a single statement, without its terminating semicolon.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input does not start with a valid
    /// statement.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        self.nested(Self::parse_statement_body)
    }

    fn parse_statement_body(&mut self) -> Result<Statement, ParseError> {
        if self.check_label() {
            return self.parse_label_statement().map(|s| Statement::Label(Box::new(s)));
        }
        if self.check(&TokenKind::LeftParen) {
            return self.parse_select_statement(None).map(Statement::from);
        }
        let Some(keyword) = self.current.as_keyword() else {
            return self.parse_contextual_statement();
        };
        match keyword {
            Keyword::Select => self.parse_select_statement(None).map(Statement::from),
            Keyword::With => self.parse_with_statement(),
            Keyword::Insert => self
                .parse_insert_statement(None)
                .map(|s| Statement::Insert(Box::new(s))),
            Keyword::Update if self.peek_keyword(1, Keyword::Statistics) => self
                .parse_update_statistics_statement()
                .map(|s| Statement::UpdateStatistics(Box::new(s))),
            Keyword::Update => self
                .parse_update_statement(None)
                .map(|s| Statement::Update(Box::new(s))),
            Keyword::Delete => self
                .parse_delete_statement(None)
                .map(|s| Statement::Delete(Box::new(s))),
            Keyword::Merge => self
                .parse_merge_statement(None)
                .map(|s| Statement::Merge(Box::new(s))),
            Keyword::Truncate => self
                .parse_truncate_table_statement()
                .map(|s| Statement::TruncateTable(Box::new(s))),
            Keyword::Bulk => self
                .parse_bulk_insert_statement()
                .map(|s| Statement::BulkInsert(Box::new(s))),
            Keyword::Begin => self.parse_begin_statement(),
            Keyword::Commit => self
                .parse_commit_statement()
                .map(|s| Statement::CommitTransaction(Box::new(s))),
            Keyword::Rollback => self
                .parse_rollback_statement()
                .map(|s| Statement::RollbackTransaction(Box::new(s))),
            Keyword::Save => self
                .parse_save_statement()
                .map(|s| Statement::SaveTransaction(Box::new(s))),
            Keyword::End if self.peek_word(1, "CONVERSATION") => self
                .parse_end_conversation_statement()
                .map(|s| Statement::EndConversation(Box::new(s))),
            Keyword::If => self.parse_if_statement().map(|s| Statement::If(Box::new(s))),
            Keyword::While => self
                .parse_while_statement()
                .map(|s| Statement::While(Box::new(s))),
            Keyword::Break => self
                .parse_break_statement()
                .map(|s| Statement::Break(Box::new(s))),
            Keyword::Continue => self
                .parse_continue_statement()
                .map(|s| Statement::Continue(Box::new(s))),
            Keyword::Goto => self
                .parse_goto_statement()
                .map(|s| Statement::Goto(Box::new(s))),
            Keyword::Return => self
                .parse_return_statement()
                .map(|s| Statement::Return(Box::new(s))),
            Keyword::Print => self
                .parse_print_statement()
                .map(|s| Statement::Print(Box::new(s))),
            Keyword::RaisError => self
                .parse_raiserror_statement()
                .map(|s| Statement::RaisError(Box::new(s))),
            Keyword::WaitFor => self
                .parse_waitfor_statement()
                .map(|s| Statement::WaitFor(Box::new(s))),
            Keyword::Declare => self.parse_declare_statement(),
            Keyword::Set => self.parse_set_statement(),
            Keyword::Exec | Keyword::Execute => self.parse_execute_statement(),
            Keyword::Revert => self
                .parse_revert_statement()
                .map(|s| Statement::Revert(Box::new(s))),
            Keyword::Use => self.parse_use_statement().map(|s| Statement::Use(Box::new(s))),
            Keyword::Open => self
                .parse_open_cursor_statement()
                .map(|s| Statement::OpenCursor(Box::new(s))),
            Keyword::Fetch => self
                .parse_fetch_cursor_statement()
                .map(|s| Statement::FetchCursor(Box::new(s))),
            Keyword::Close => self
                .parse_close_cursor_statement()
                .map(|s| Statement::CloseCursor(Box::new(s))),
            Keyword::Deallocate => self
                .parse_deallocate_cursor_statement()
                .map(|s| Statement::DeallocateCursor(Box::new(s))),
            Keyword::Grant => self.parse_grant_statement().map(|s| Statement::Grant(Box::new(s))),
            Keyword::Revoke => self
                .parse_revoke_statement()
                .map(|s| Statement::Revoke(Box::new(s))),
            Keyword::Deny => self.parse_deny_statement().map(|s| Statement::Deny(Box::new(s))),
            Keyword::Add => self
                .parse_signature_statement(false)
                .map(|s| Statement::AddSignature(Box::new(s))),
            Keyword::Dbcc => self.parse_dbcc_statement().map(|s| Statement::Dbcc(Box::new(s))),
            Keyword::Backup => self.parse_backup_statement(),
            Keyword::Restore => self.parse_restore_statement(),
            Keyword::Shutdown => self
                .parse_shutdown_statement()
                .map(|s| Statement::Shutdown(Box::new(s))),
            Keyword::Checkpoint => self
                .parse_checkpoint_statement()
                .map(|s| Statement::Checkpoint(Box::new(s))),
            Keyword::Reconfigure => self
                .parse_reconfigure_statement()
                .map(|s| Statement::Reconfigure(Box::new(s))),
            Keyword::Kill => self.parse_kill_statement().map(|s| Statement::Kill(Box::new(s))),
            Keyword::Create => self.parse_create_statement(),
            Keyword::Alter => self.parse_alter_statement(),
            Keyword::Drop => self.parse_drop_statement(),
            _ => Err(self.unexpected(&["statement"])),
        }
    }

    /// Statements introduced by non-reserved words.
    fn parse_contextual_statement(&mut self) -> Result<Statement, ParseError> {
        if self.check_word("THROW") {
            return self.parse_throw_statement().map(|s| Statement::Throw(Box::new(s)));
        }
        if self.check_word("RECEIVE") {
            return self
                .parse_receive_statement()
                .map(|s| Statement::Receive(Box::new(s)));
        }
        if self.check_word("SEND") {
            return self.parse_send_statement().map(|s| Statement::Send(Box::new(s)));
        }
        if self.check_word("MOVE") && self.peek_word(1, "CONVERSATION") {
            return self
                .parse_move_conversation_statement()
                .map(|s| Statement::MoveConversation(Box::new(s)));
        }
        if self.check_word("GET") && self.peek_word(1, "CONVERSATION") {
            return self
                .parse_get_conversation_group_statement()
                .map(|s| Statement::GetConversationGroup(Box::new(s)));
        }
        Err(self.unexpected(&["statement"]))
    }

    /// `WITH` at statement level: common table expressions or
    /// `XMLNAMESPACES` ahead of a query or DML statement.
    fn parse_with_statement(&mut self) -> Result<Statement, ParseError> {
        let with = self.parse_with_ctes_and_xml_namespaces()?;
        match self.current.as_keyword() {
            Some(Keyword::Select) => self.parse_select_statement(Some(with)).map(Statement::from),
            Some(Keyword::Insert) => self
                .parse_insert_statement(Some(with))
                .map(|s| Statement::Insert(Box::new(s))),
            Some(Keyword::Update) => self
                .parse_update_statement(Some(with))
                .map(|s| Statement::Update(Box::new(s))),
            Some(Keyword::Delete) => self
                .parse_delete_statement(Some(with))
                .map(|s| Statement::Delete(Box::new(s))),
            Some(Keyword::Merge) => self
                .parse_merge_statement(Some(with))
                .map(|s| Statement::Merge(Box::new(s))),
            _ if self.check(&TokenKind::LeftParen) => {
                self.parse_select_statement(Some(with)).map(Statement::from)
            }
            _ => Err(self.unexpected(&["SELECT", "INSERT", "UPDATE", "DELETE", "MERGE"])),
        }
    }

    /// Returns true at `name:`.
    fn check_label(&mut self) -> bool {
        matches!(
            self.current.kind,
            TokenKind::Identifier(_) | TokenKind::BracketIdentifier(_)
        ) && matches!(self.peek_nth(1).kind, TokenKind::Colon)
    }

    fn parse_label_statement(&mut self) -> Result<LabelStatement, ParseError> {
        let label = self.parse_identifier()?;
        self.expect(&TokenKind::Colon)?;
        Ok(LabelStatement {
            span: self.span_from(label.span),
            label,
        })
    }

    /// Parses one statement and checks the terminator rules that depend on
    /// what follows it.
    pub(super) fn parse_terminated_statement(&mut self) -> Result<Statement, ParseError> {
        let statement = self.parse_statement()?;
        if matches!(statement, Statement::Merge(_)) && !self.check(&TokenKind::Semicolon) {
            self.report(Diagnostic::warning(
                DiagnosticCode::MergeNotTerminated,
                "A MERGE statement must be terminated by a semicolon",
                statement.span(),
            ));
        }
        Ok(statement)
    }

    /// Parses statements until `is_end` holds, skipping empty statements.
    /// Stops at `GO` and end of input as well.
    pub(super) fn parse_statement_list(
        &mut self,
        is_end: fn(&mut Self) -> bool,
    ) -> Result<Vec<Statement>, ParseError> {
        let mut statements = Vec::new();
        loop {
            while self.eat(&TokenKind::Semicolon) {}
            if is_end(self)
                || self.current.is_eof()
                || matches!(self.current.kind, TokenKind::BatchSeparator(_))
            {
                break;
            }
            statements.push(self.parse_terminated_statement()?);
        }
        Ok(statements)
    }

    // --- Diagnostics and recovery ---

    fn repeat_count(&mut self, count: Option<&str>, span: Span) -> Option<u32> {
        let count = count?;
        match count.parse::<u32>() {
            Ok(n) => Some(n),
            Err(_) => {
                self.report(Diagnostic::warning(
                    DiagnosticCode::RepeatCountOverflow,
                    format!("GO repeat count {count} is out of range and was ignored"),
                    span,
                ));
                None
            }
        }
    }

    /// Skips to the next statement boundary after an error.
    ///
    /// At least one token is consumed when the failed statement consumed
    /// none, so the driver always makes progress.
    fn recover(&mut self, start: Span, consumed_before: usize) {
        let mut skipped = 0usize;
        if self.consumed == consumed_before
            && !self.current.is_eof()
            && !matches!(self.current.kind, TokenKind::BatchSeparator(_))
        {
            self.advance();
            skipped += 1;
        }
        let mut depth = 0usize;
        loop {
            match &self.current.kind {
                TokenKind::Eof | TokenKind::BatchSeparator(_) => break,
                TokenKind::Semicolon => {
                    self.advance();
                    skipped += 1;
                    break;
                }
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => depth = depth.saturating_sub(1),
                TokenKind::Keyword(kw) if depth == 0 && STATEMENT_KEYWORDS.contains(kw) => break,
                _ => {}
            }
            self.advance();
            skipped += 1;
        }
        warn!(
            start = start.start,
            line = start.line,
            skipped,
            "recovered from syntax error"
        );
    }

    fn should_stop(&self) -> bool {
        self.options.strict && self.error_count > 0
    }

    /// Records a diagnostic, applying the error cap.
    pub(super) fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.error_count += 1;
            if let Some(max) = self.options.max_errors {
                if self.error_count > max {
                    if !self.suppressing {
                        self.suppressing = true;
                        warn!(max_errors = max, "error limit reached, suppressing diagnostics");
                        self.diagnostics.push(Diagnostic::warning(
                            DiagnosticCode::TooManyErrors,
                            format!("Too many errors; reporting stopped after {max}"),
                            diagnostic.span,
                        ));
                    }
                    return;
                }
            }
        }
        self.diagnostics.push(diagnostic);
    }

    pub(super) fn report_error(&mut self, error: ParseError) {
        self.report(error.into());
    }

    /// Reports syntax that the target version does not support. The
    /// construct is still parsed.
    pub(super) fn require(&mut self, feature: Feature, span: Span) {
        let version = self.options.version;
        if !version.supports(feature) {
            self.report(Diagnostic::error(
                DiagnosticCode::UnsupportedInVersion,
                format!("{} is not supported in {version}", feature.description()),
                span,
            ));
        }
    }

    /// Builds an "unexpected token" error at the current token.
    pub(super) fn unexpected(&self, expected: &[&str]) -> ParseError {
        ParseError::unexpected(expected, &self.current)
    }

    // --- Token cursor ---

    /// Reads the next token from the lexer, recording lexical errors.
    fn next_significant(&mut self) -> Token {
        loop {
            let token = self.lexer.next_token();
            if let TokenKind::Error(error) = &token.kind {
                let diagnostic = Diagnostic::lexical(error, token.span);
                self.report(diagnostic);
                continue;
            }
            return token;
        }
    }

    /// Advances to the next token.
    pub(super) fn advance(&mut self) {
        let next = match self.lookahead.pop_front() {
            Some(token) => token,
            None => self.next_significant(),
        };
        self.previous = core::mem::replace(&mut self.current, next);
        self.consumed += 1;
    }

    /// Returns the token `n` positions after the current one; `0` is the
    /// current token.
    pub(super) fn peek_nth(&mut self, n: usize) -> &Token {
        if n == 0 {
            return &self.current;
        }
        while self.lookahead.len() < n {
            let token = self.next_significant();
            self.lookahead.push_back(token);
        }
        &self.lookahead[n - 1]
    }

    /// Returns the source text covered by `span`.
    pub(super) fn text(&self, span: Span) -> &'a str {
        span.text(self.source)
    }

    /// Returns a span from `start` to the end of the last consumed token.
    pub(super) fn span_from(&self, start: Span) -> Span {
        let end = self.previous.span.end.max(start.start);
        Span::new(start.start, end, start.line)
    }

    /// Runs a recursive production one nesting level deeper.
    pub(super) fn nested<T>(
        &mut self,
        production: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::nesting_too_deep(MAX_NESTING_DEPTH, &self.current));
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    /// Checks if the current token matches the given kind.
    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current.kind) == core::mem::discriminant(kind)
    }

    /// Checks if the current token spells the given keyword, reserved or
    /// contextual.
    pub(super) fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current.is_word(keyword)
    }

    /// Checks if the current token is the unquoted word `word`.
    pub(super) fn check_word(&self, word: &str) -> bool {
        self.current
            .word()
            .is_some_and(|w| w.eq_ignore_ascii_case(word))
    }

    /// Checks the current token against several words.
    pub(super) fn check_any_word(&self, words: &[&str]) -> bool {
        words.iter().any(|w| self.check_word(w))
    }

    pub(super) fn peek_keyword(&mut self, n: usize, keyword: Keyword) -> bool {
        self.peek_nth(n).is_word(keyword)
    }

    pub(super) fn peek_word(&mut self, n: usize, word: &str) -> bool {
        self.peek_nth(n)
            .word()
            .is_some_and(|w| w.eq_ignore_ascii_case(word))
    }

    pub(super) fn peek_is(&mut self, n: usize, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.peek_nth(n).kind) == core::mem::discriminant(kind)
    }

    /// Consumes the current token if it matches `kind`.
    pub(super) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token if it spells `keyword`.
    pub(super) fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token if it is the word `word`.
    pub(super) fn eat_word(&mut self, word: &str) -> bool {
        if self.check_word(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a sequence of words if all of them are present.
    pub(super) fn eat_words(&mut self, words: &[&str]) -> bool {
        for (i, word) in words.iter().enumerate() {
            if !self.peek_word(i, word) {
                return false;
            }
        }
        for _ in words {
            self.advance();
        }
        true
    }

    /// Expects the current token to be the given kind.
    pub(super) fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(self.previous.span)
        } else {
            Err(self.unexpected(&[kind.punctuation()]))
        }
    }

    /// Expects the current token to be the given keyword.
    pub(super) fn expect_keyword(&mut self, keyword: Keyword) -> Result<Span, ParseError> {
        if self.check_keyword(keyword) {
            self.advance();
            Ok(self.previous.span)
        } else {
            Err(self.unexpected(&[keyword.as_str()]))
        }
    }

    /// Expects the current token to be the word `word`.
    pub(super) fn expect_word(&mut self, word: &str) -> Result<Span, ParseError> {
        if self.check_word(word) {
            self.advance();
            Ok(self.previous.span)
        } else {
            Err(self.unexpected(&[word]))
        }
    }

    // --- Names ---

    /// Returns true if the current token is a regular or delimited
    /// identifier.
    pub(super) fn check_identifier(&self) -> bool {
        matches!(
            self.current.kind,
            TokenKind::Identifier(_)
                | TokenKind::BracketIdentifier(_)
                | TokenKind::QuotedIdentifier(_)
        )
    }

    /// Expects and returns an identifier.
    pub(super) fn parse_identifier(&mut self) -> Result<Identifier, ParseError> {
        let (value, quote_type) = match &self.current.kind {
            TokenKind::Identifier(name) => (name.clone(), QuoteType::None),
            TokenKind::BracketIdentifier(name) => (name.clone(), QuoteType::Square),
            TokenKind::QuotedIdentifier(name) => (name.clone(), QuoteType::Double),
            _ => return Err(self.unexpected(&["identifier"])),
        };
        let span = self.current.span;
        self.advance();
        Ok(Identifier::new(value, quote_type, span))
    }

    /// Like [`Self::parse_identifier`] but also accepts reserved words, for
    /// positions where the grammar is unambiguous (method names, option
    /// values).
    pub(super) fn parse_name(&mut self) -> Result<Identifier, ParseError> {
        if self.current.is_keyword() {
            let span = self.current.span;
            self.advance();
            return Ok(Identifier::new(self.text(span), QuoteType::None, span));
        }
        self.parse_identifier()
    }

    /// Parses an identifier or a `@variable` used as a name.
    pub(super) fn parse_identifier_or_variable(&mut self) -> Result<Identifier, ParseError> {
        if let TokenKind::Variable(name) = &self.current.kind {
            let identifier = Identifier::new(name.clone(), QuoteType::Var, self.current.span);
            self.advance();
            return Ok(identifier);
        }
        self.parse_identifier()
    }

    /// Parses `a.b.c` with every part present.
    pub(super) fn parse_multi_part_identifier(
        &mut self,
    ) -> Result<MultiPartIdentifier, ParseError> {
        let first = self.parse_identifier()?;
        let start = first.span;
        let mut identifiers = vec![first];
        while self.check(&TokenKind::Dot) && self.peek_is_identifier(1) {
            self.advance();
            identifiers.push(self.parse_identifier()?);
        }
        Ok(MultiPartIdentifier {
            identifiers,
            span: self.span_from(start),
        })
    }

    pub(super) fn peek_is_identifier(&mut self, n: usize) -> bool {
        matches!(
            self.peek_nth(n).kind,
            TokenKind::Identifier(_)
                | TokenKind::BracketIdentifier(_)
                | TokenKind::QuotedIdentifier(_)
        )
    }

    /// Parses `[[[server.]database.]schema.]object`; skipped parts
    /// (`db..t`) are allowed.
    pub(super) fn parse_schema_object_name(&mut self) -> Result<SchemaObjectName, ParseError> {
        let start = self.current.span;
        let mut parts = vec![Some(self.parse_identifier()?)];
        while self.check(&TokenKind::Dot) && parts.len() < 4 {
            self.advance();
            if self.check(&TokenKind::Dot) {
                parts.push(None);
                continue;
            }
            parts.push(Some(self.parse_identifier()?));
        }
        self.schema_object_name_from_parts(parts, start)
    }

    /// Assigns parts right to left: the last part is the object.
    pub(super) fn schema_object_name_from_parts(
        &self,
        mut parts: Vec<Option<Identifier>>,
        start: Span,
    ) -> Result<SchemaObjectName, ParseError> {
        let count = u8::try_from(parts.len()).unwrap_or(u8::MAX);
        let Some(base_identifier) = parts.pop().flatten() else {
            return Err(ParseError::unexpected(&["object name"], &self.previous));
        };
        let schema_identifier = parts.pop().flatten();
        let database_identifier = parts.pop().flatten();
        let server_identifier = parts.pop().flatten();
        Ok(SchemaObjectName {
            server_identifier,
            database_identifier,
            schema_identifier,
            base_identifier,
            count,
            span: self.span_from(start),
        })
    }

    /// Parses a `@variable`.
    pub(super) fn parse_variable(&mut self) -> Result<VariableReference, ParseError> {
        match &self.current.kind {
            TokenKind::Variable(name) => {
                let variable = VariableReference {
                    name: name.clone(),
                    span: self.current.span,
                };
                self.advance();
                Ok(variable)
            }
            _ => Err(self.unexpected(&["variable"])),
        }
    }

    pub(super) fn check_variable(&self) -> bool {
        matches!(self.current.kind, TokenKind::Variable(_))
    }

    // --- Literals ---

    /// Returns true if the current token starts a literal.
    pub(super) fn check_literal(&self) -> bool {
        matches!(
            self.current.kind,
            TokenKind::Integer(_)
                | TokenKind::Numeric(_)
                | TokenKind::Real(_)
                | TokenKind::Money(_)
                | TokenKind::String { .. }
                | TokenKind::Binary(_)
                | TokenKind::Keyword(Keyword::Null)
        )
    }

    /// Parses a number, string, binary or `NULL` literal.
    pub(super) fn parse_literal(&mut self) -> Result<Literal, ParseError> {
        let span = self.current.span;
        let text = self.text(span);
        let literal = match &self.current.kind {
            TokenKind::Integer(value) => Literal {
                value: value.clone(),
                ..Literal::new(LiteralType::Integer, text, span)
            },
            TokenKind::Numeric(value) => Literal {
                value: value.clone(),
                ..Literal::new(LiteralType::Numeric, text, span)
            },
            TokenKind::Real(value) => Literal {
                value: value.clone(),
                ..Literal::new(LiteralType::Real, text, span)
            },
            TokenKind::Money(value) => Literal {
                value: value.clone(),
                ..Literal::new(LiteralType::Money, text, span)
            },
            TokenKind::Binary(value) => Literal {
                value: value.clone(),
                ..Literal::new(LiteralType::Binary, text, span)
            },
            TokenKind::String { value, national } => {
                Literal::string(value.clone(), text, *national, span)
            }
            TokenKind::Keyword(Keyword::Null) => Literal::new(LiteralType::Null, text, span),
            _ => return Err(self.unexpected(&["literal"])),
        };
        self.advance();
        Ok(literal)
    }

    /// Parses a numeric literal with an optional leading sign folded into
    /// its value.
    pub(super) fn parse_signed_literal(&mut self) -> Result<Literal, ParseError> {
        let start = self.current.span;
        let negative = match self.current.kind {
            TokenKind::Minus => true,
            TokenKind::Plus => false,
            _ => return self.parse_literal(),
        };
        self.advance();
        if !matches!(
            self.current.kind,
            TokenKind::Integer(_) | TokenKind::Numeric(_) | TokenKind::Real(_) | TokenKind::Money(_)
        ) {
            return Err(self.unexpected(&["number"]));
        }
        let literal = self.parse_literal()?;
        let span = self.span_from(start);
        let value = if negative {
            format!("-{}", literal.value)
        } else {
            literal.value
        };
        Ok(Literal {
            value,
            text: self.text(span).to_string(),
            span,
            ..literal
        })
    }

    /// Parses an integer literal, optionally signed.
    pub(super) fn parse_integer_literal(&mut self) -> Result<Literal, ParseError> {
        if matches!(
            self.current.kind,
            TokenKind::Integer(_) | TokenKind::Minus | TokenKind::Plus
        ) {
            let literal = self.parse_signed_literal()?;
            if literal.literal_type == LiteralType::Integer {
                return Ok(literal);
            }
            return Err(ParseError::unexpected(&["integer"], &self.previous));
        }
        Err(self.unexpected(&["integer"]))
    }

    pub(super) fn check_string(&self) -> bool {
        matches!(self.current.kind, TokenKind::String { .. })
    }

    /// Parses a string literal.
    pub(super) fn parse_string_literal(&mut self) -> Result<Literal, ParseError> {
        if self.check_string() {
            return self.parse_literal();
        }
        Err(self.unexpected(&["string"]))
    }

    /// Builds a literal from a bare word, as used for enumerated option
    /// values.
    pub(super) fn parse_word_literal(&mut self) -> Result<Literal, ParseError> {
        if self.current.word().is_none() {
            return Err(self.unexpected(&["word"]));
        }
        let span = self.current.span;
        self.advance();
        Ok(Literal::new(LiteralType::Identifier, self.text(span), span))
    }

    // --- Lists ---

    /// Parses `item (, item)*`.
    pub(super) fn parse_comma_separated<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = vec![item(self)?];
        while self.eat(&TokenKind::Comma) {
            items.push(item(self)?);
        }
        Ok(items)
    }

    /// Parses `( item (, item)* )`.
    pub(super) fn parse_parenthesized_list<T>(
        &mut self,
        item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let items = self.parse_comma_separated(item)?;
        self.expect(&TokenKind::RightParen)?;
        Ok(items)
    }

    /// Parses `( ident, ... )`.
    pub(super) fn parse_identifier_list(&mut self) -> Result<Vec<Identifier>, ParseError> {
        self.parse_parenthesized_list(Self::parse_identifier)
    }
}

/// The span from the first statement's start to the last statement's end.
fn batch_span(statements: &[Statement]) -> Option<Span> {
    let first = statements.first()?.span();
    let last = statements.last()?.span();
    Some(first.merge(last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::SqlVersion;

    fn parse(sql: &str) -> ParseResult {
        Parser::new(sql, &ParseOptions::default()).parse_script()
    }

    fn parse_with(sql: &str, options: ParseOptions) -> ParseResult {
        Parser::new(sql, &options).parse_script()
    }

    fn codes(result: &ParseResult) -> Vec<&'static str> {
        result.diagnostics.iter().map(|d| d.code.as_str()).collect()
    }

    #[test]
    fn test_empty_input_has_no_batches() {
        let result = parse("");
        assert!(result.script.batches.is_empty());
        assert!(result.diagnostics.is_empty());
        assert_eq!(result.script.span, Span::new(0, 0, 1));

        let result = parse("  -- nothing here\n");
        assert!(result.script.batches.is_empty());
    }

    #[test]
    fn test_go_only_yields_one_empty_batch() {
        let result = parse("GO");
        assert_eq!(result.script.batches.len(), 1);
        assert!(result.script.batches[0].statements.is_empty());
        assert_eq!(result.script.batches[0].repeat_count, None);
    }

    #[test]
    fn test_batches_and_repeat_count() {
        let sql = "SELECT 1\nGO\nSELECT 2; SELECT 3\nGO 5\nPRINT 'x'";
        let result = parse(sql);
        assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
        let batches = &result.script.batches;
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].statements.len(), 1);
        assert_eq!(batches[1].statements.len(), 2);
        assert_eq!(batches[1].repeat_count, Some(5));
        assert_eq!(batches[2].statements.len(), 1);
        assert_eq!(batches[0].span.text(sql), "SELECT 1");
        assert_eq!(batches[1].span.text(sql), "SELECT 2; SELECT 3");
    }

    #[test]
    fn test_repeat_count_overflow_warns() {
        let result = parse("SELECT 1\nGO 99999999999");
        assert_eq!(result.script.batches[0].repeat_count, None);
        assert_eq!(codes(&result), vec!["TSQL2102"]);
        assert!(!result.has_errors());
    }

    #[test]
    fn test_statement_span_excludes_semicolon() {
        let sql = "SELECT a FROM t;";
        let result = parse(sql);
        let statement = result.script.statements().next().unwrap();
        assert_eq!(statement.span().text(sql), "SELECT a FROM t");
    }

    #[test]
    fn test_recovery_continues_with_next_statement() {
        let sql = "SELECT FROM WHERE;\nSELECT 1;";
        let result = parse(sql);
        assert!(result.has_errors());
        let statements: Vec<_> = result.script.statements().collect();
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].span().text(sql), "SELECT 1");
    }

    #[test]
    fn test_recovery_stops_at_statement_keyword() {
        let sql = "SELECT 1 + FROM\nPRINT 'after'";
        let result = parse(sql);
        assert_eq!(result.errors().count(), 1);
        let kinds: Vec<_> = result.script.statements().map(Statement::kind).collect();
        assert_eq!(kinds, vec!["Print"]);
    }

    #[test]
    fn test_recovery_always_makes_progress() {
        let result = parse(") ) ) ;");
        assert!(result.has_errors());
        assert!(result.script.batches.is_empty());
    }

    #[test]
    fn test_strict_mode_stops_at_first_error() {
        let sql = "SELECT 1; SELECT FROM; SELECT 2;";
        let result = parse_with(sql, ParseOptions::default().with_strict(true));
        assert_eq!(result.errors().count(), 1);
        assert_eq!(result.script.statements().count(), 1);
    }

    #[test]
    fn test_max_errors_suppresses_and_warns_once() {
        let sql = "SELECT FROM; SELECT FROM; SELECT FROM; SELECT FROM;";
        let result = parse_with(sql, ParseOptions::default().with_max_errors(Some(2)));
        assert_eq!(result.errors().count(), 2);
        let suppressed: Vec<_> = result
            .warnings()
            .filter(|d| d.code == DiagnosticCode::TooManyErrors)
            .collect();
        assert_eq!(suppressed.len(), 1);
    }

    #[test]
    fn test_lexical_error_is_reported() {
        let result = parse("SELECT 'unterminated");
        assert!(codes(&result).contains(&"TSQL1001"));
    }

    #[test]
    fn test_merge_without_semicolon_warns() {
        let sql = "MERGE t USING s ON t.id = s.id WHEN MATCHED THEN DELETE\nSELECT 1";
        let result = parse(sql);
        assert!(codes(&result).contains(&"TSQL2101"));
        assert!(!result.has_errors());
        assert_eq!(result.script.statements().count(), 2);
    }

    #[test]
    fn test_dialect_gate_reports_but_parses() {
        let sql = "CREATE OR ALTER VIEW v AS SELECT 1 AS a";
        let result = parse_with(sql, ParseOptions::default().with_version(SqlVersion::Sql120));
        assert_eq!(codes(&result), vec!["TSQL4001"]);
        assert_eq!(result.script.statements().count(), 1);

        let result = parse(sql);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_label_statement() {
        let result = parse("retry:\nGOTO retry");
        let kinds: Vec<_> = result.script.statements().map(Statement::kind).collect();
        assert_eq!(kinds, vec!["Label", "Goto"]);
    }

    #[test]
    fn test_schema_object_name_parts() {
        let mut parser = Parser::new("srv.db..t", &ParseOptions::default());
        let name = parser.parse_schema_object_name().unwrap();
        assert_eq!(name.count, 4);
        assert_eq!(name.server_identifier.unwrap().value, "srv");
        assert_eq!(name.database_identifier.unwrap().value, "db");
        assert!(name.schema_identifier.is_none());
        assert_eq!(name.base_identifier.value, "t");
        assert_eq!(name.span, Span::new(0, 9, 1));
    }

    #[test]
    fn test_signed_literal_keeps_source_text() {
        let mut parser = Parser::new("-42", &ParseOptions::default());
        let literal = parser.parse_signed_literal().unwrap();
        assert_eq!(literal.value, "-42");
        assert_eq!(literal.text, "-42");
        assert_eq!(literal.literal_type, LiteralType::Integer);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut parser = Parser::new("BEGIN TRAN t1", &ParseOptions::default());
        assert!(parser.peek_keyword(1, Keyword::Tran));
        assert!(parser.peek_word(2, "t1"));
        assert!(parser.check_keyword(Keyword::Begin));
        parser.advance();
        assert!(parser.check_keyword(Keyword::Tran));
    }

    fn nested_parens(levels: usize) -> String {
        format!("SELECT {}1{}", "(".repeat(levels), ")".repeat(levels))
    }

    #[test]
    fn test_nesting_limit_reports_instead_of_overflowing() {
        let handle = std::thread::Builder::new()
            .stack_size(8 << 20)
            .spawn(|| parse(&format!("{};\nSELECT 2", nested_parens(3000))))
            .unwrap();
        let result = handle.join().unwrap();
        assert_eq!(codes(&result), vec!["TSQL2005"]);
        assert_eq!(result.script.statements().count(), 1);
        let span = result.diagnostics[0].span;
        assert_eq!(span.text(&nested_parens(3000)), "(");
        assert!(span.start <= 7 + MAX_NESTING_DEPTH);
    }

    #[test]
    fn test_moderate_nesting_parses() {
        let result = parse(&nested_parens(40));
        assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);

        let mut parser = Parser::new("SELECT 1", &ParseOptions::default());
        parser.parse_statement().unwrap();
        assert_eq!(parser.depth, 0);
    }
}
