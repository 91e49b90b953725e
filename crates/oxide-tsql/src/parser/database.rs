//! Databases, backup and restore, `DBCC` and the server utility statements.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{
    AcceleratedDatabaseRecoveryDatabaseOption, AlterDatabaseAction, AlterDatabaseAddFile,
    AlterDatabaseAddFileGroup, AlterDatabaseCollate, AlterDatabaseModifyFile,
    AlterDatabaseModifyFileGroup, AlterDatabaseModifyName, AlterDatabaseRemoveFile,
    AlterDatabaseRemoveFileGroup, AlterDatabaseScopedConfigurationStatement,
    AlterDatabaseSetStatement, AlterDatabaseStatement, AlterDatabaseTermination,
    AlterDatabaseTerminationKind, AttachMode, AutomaticTuningDatabaseOption, AutomaticTuningOption,
    AutomaticTuningOptionKind, AutomaticTuningOptionState, AutomaticTuningState,
    BackupDatabaseStatement, BackupEncryptionOption, BackupEncryptorType, BackupMasterKeyStatement,
    BackupOption, BackupOptionKind, BackupRestoreFileInfo, BackupRestoreItemKind,
    BackupTransactionLogStatement, ChangeTrackingDatabaseOption, ChangeTrackingOptionDetail,
    ChangeTrackingOptionKind, CheckpointStatement, CreateDatabaseStatement,
    DatabaseConfigurationSetOption, DatabaseOption, DatabaseOptionKind, DbccCommand,
    DbccNamedLiteral, DbccOption, DbccStatement, DeviceInfo, DeviceType, DropDatabaseStatement,
    FileDeclaration, FileDeclarationOption, FileGroupDefinition, FileGroupUpdatability,
    FileStreamDatabaseOption, FileStreamOption, GeneralBackupOption, GeneralDatabaseOption,
    GeneralRestoreOption, IdentifierOrValueExpression, Literal, KillStatement, MirrorToClause,
    MoveRestoreOption, OnOffOptionValue, OptionState, OptionValue,
    PersistentLogBufferDatabaseOption, QueryStoreCapturePolicyOption,
    QueryStoreCapturePolicyOptionKind, QueryStoreCapturePolicyThreshold,
    QueryStoreCustomCapturePolicyOption, QueryStoreDataFlushIntervalOption,
    QueryStoreDatabaseOption, QueryStoreDesiredState, QueryStoreDesiredStateOption,
    QueryStoreIntervalLengthOption, QueryStoreMaxPlansPerQueryOption,
    QueryStoreMaxStorageSizeOption, QueryStoreOption, QueryStoreOptionKind,
    QueryStoreSizeCleanupPolicyOption, QueryStoreSizeCleanupPolicyOptionKind,
    QueryStoreTimeCleanupPolicyOption, QueryStoreWaitStatsCaptureOption, ReconfigureStatement,
    RestoreMasterKeyStatement, RestoreOption, RestoreOptionKind, RestoreStatement,
    RestoreStatementKind, ShutdownStatement, Statement,
};
use crate::lexer::{Keyword, Span, TokenKind};

impl Parser<'_> {
    // --- CREATE DATABASE ---

    /// `CREATE DATABASE name [CONTAINMENT = …] [ON …] [LOG ON …]
    /// [COLLATE c] [WITH …] [FOR ATTACH | AS SNAPSHOT OF src]`
    pub(super) fn parse_create_database_statement(
        &mut self,
        start: Span,
    ) -> Result<CreateDatabaseStatement, ParseError> {
        let database_name = self.parse_identifier()?;
        let containment = if self.check_word("CONTAINMENT") {
            Some(self.parse_database_option()?)
        } else {
            None
        };
        let mut file_declarations = Vec::new();
        let mut file_groups = Vec::new();
        if self.eat_keyword(Keyword::On) {
            let is_primary = self.eat_keyword(Keyword::Primary);
            if !self.check_word("FILEGROUP") {
                file_declarations = self.parse_file_declarations(is_primary)?;
            }
            while self.check_word("FILEGROUP")
                || (self.check(&TokenKind::Comma) && self.peek_word(1, "FILEGROUP"))
            {
                self.eat(&TokenKind::Comma);
                file_groups.push(self.parse_file_group_definition()?);
            }
        }
        let log_on = if self.check_word("LOG") && self.peek_keyword(1, Keyword::On) {
            self.advance();
            self.advance();
            self.parse_file_declarations(false)?
        } else {
            Vec::new()
        };
        let collation = if self.eat_keyword(Keyword::Collate) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let mut options = Vec::new();
        if self.check(&TokenKind::LeftParen) {
            options = self.parse_option_list(Self::parse_database_option)?;
        }
        let mut attach_mode = AttachMode::None;
        let mut database_snapshot = None;
        if self.eat_keyword(Keyword::For) {
            if self.eat_word("ATTACH_REBUILD_LOG") {
                attach_mode = AttachMode::AttachRebuildLog;
            } else {
                self.expect_word("ATTACH")?;
                attach_mode = AttachMode::Attach;
            }
        }
        if self.eat_keyword(Keyword::With) {
            options.extend(self.parse_comma_separated(Self::parse_database_option)?);
        }
        if self.eat_keyword(Keyword::As) {
            self.expect_word("SNAPSHOT")?;
            self.expect_keyword(Keyword::Of)?;
            database_snapshot = Some(self.parse_identifier()?);
        }
        Ok(CreateDatabaseStatement {
            database_name,
            containment,
            file_declarations,
            file_groups,
            log_on,
            collation,
            options,
            attach_mode,
            database_snapshot,
            span: self.span_from(start),
        })
    }

    /// `( NAME = …, FILENAME = …, … ), …`; the first may be `PRIMARY`.
    fn parse_file_declarations(
        &mut self,
        first_is_primary: bool,
    ) -> Result<Vec<FileDeclaration>, ParseError> {
        let mut declarations = vec![self.parse_file_declaration(first_is_primary)?];
        while self.check(&TokenKind::Comma) && self.peek_is(1, &TokenKind::LeftParen) {
            self.advance();
            declarations.push(self.parse_file_declaration(false)?);
        }
        Ok(declarations)
    }

    fn parse_file_declaration(&mut self, is_primary: bool) -> Result<FileDeclaration, ParseError> {
        let start = self.current.span;
        let options = self.parse_option_list(|p| {
            p.parse_general_option::<FileDeclarationOption>("file")
        })?;
        Ok(FileDeclaration {
            is_primary,
            options,
            span: self.span_from(start),
        })
    }

    /// `FILEGROUP fg [CONTAINS FILESTREAM | MEMORY_OPTIMIZED_DATA] [DEFAULT]
    /// file, …`
    fn parse_file_group_definition(&mut self) -> Result<FileGroupDefinition, ParseError> {
        let start = self.expect_word("FILEGROUP")?;
        let name = self.parse_identifier()?;
        let (contains_file_stream, contains_memory_optimized_data) =
            self.parse_file_group_contents();
        let is_default = self.eat_keyword(Keyword::Default);
        let file_declarations = if self.check(&TokenKind::LeftParen) {
            self.parse_file_declarations(false)?
        } else {
            Vec::new()
        };
        Ok(FileGroupDefinition {
            name,
            contains_file_stream,
            contains_memory_optimized_data,
            is_default,
            file_declarations,
            span: self.span_from(start),
        })
    }

    fn parse_file_group_contents(&mut self) -> (bool, bool) {
        if self.eat_words(&["CONTAINS", "FILESTREAM"]) {
            return (true, false);
        }
        if self.eat_words(&["CONTAINS", "MEMORY_OPTIMIZED_DATA"]) {
            return (false, true);
        }
        (false, false)
    }

    // --- ALTER DATABASE ---

    /// Everything after `ALTER DATABASE`.
    pub(super) fn parse_alter_database_statement(
        &mut self,
        start: Span,
    ) -> Result<Statement, ParseError> {
        if self.eat_words(&["SCOPED", "CONFIGURATION"]) {
            return self
                .parse_alter_database_scoped_configuration(start)
                .map(|s| Statement::AlterDatabaseScopedConfiguration(Box::new(s)));
        }
        let (database_name, use_current) = if self.eat_keyword(Keyword::Current) {
            (None, true)
        } else {
            (Some(self.parse_identifier()?), false)
        };
        if self.eat_keyword(Keyword::Set) {
            let options = self.parse_comma_separated(Self::parse_database_option)?;
            let termination = self.parse_alter_database_termination()?;
            return Ok(Statement::AlterDatabaseSet(Box::new(AlterDatabaseSetStatement {
                database_name,
                use_current,
                options,
                termination,
                span: self.span_from(start),
            })));
        }
        let action = self.parse_alter_database_action()?;
        Ok(Statement::AlterDatabase(Box::new(AlterDatabaseStatement {
            database_name,
            use_current,
            action,
            span: self.span_from(start),
        })))
    }

    fn parse_alter_database_action(&mut self) -> Result<AlterDatabaseAction, ParseError> {
        let start = self.current.span;
        if self.eat_keyword(Keyword::Add) {
            if self.eat_word("FILEGROUP") {
                let file_group = self.parse_identifier()?;
                let (contains_file_stream, contains_memory_optimized_data) =
                    self.parse_file_group_contents();
                return Ok(AlterDatabaseAction::AddFileGroup(AlterDatabaseAddFileGroup {
                    file_group,
                    contains_file_stream,
                    contains_memory_optimized_data,
                    span: self.span_from(start),
                }));
            }
            let is_log = self.eat_word("LOG");
            self.expect_keyword(Keyword::File)?;
            let file_declarations = self.parse_file_declarations(false)?;
            let file_group = if !is_log && self.eat_keyword(Keyword::To) {
                self.expect_word("FILEGROUP")?;
                Some(self.parse_identifier()?)
            } else {
                None
            };
            return Ok(AlterDatabaseAction::AddFile(AlterDatabaseAddFile {
                is_log,
                file_declarations,
                file_group,
                span: self.span_from(start),
            }));
        }
        if self.eat_word("REMOVE") {
            if self.eat_word("FILEGROUP") {
                let file_group = self.parse_identifier()?;
                return Ok(AlterDatabaseAction::RemoveFileGroup(AlterDatabaseRemoveFileGroup {
                    file_group,
                    span: self.span_from(start),
                }));
            }
            self.expect_keyword(Keyword::File)?;
            let file = self.parse_identifier()?;
            return Ok(AlterDatabaseAction::RemoveFile(AlterDatabaseRemoveFile {
                file,
                span: self.span_from(start),
            }));
        }
        if self.eat_word("MODIFY") {
            if self.eat_keyword(Keyword::File) {
                let file_declaration = self.parse_file_declaration(false)?;
                return Ok(AlterDatabaseAction::ModifyFile(AlterDatabaseModifyFile {
                    file_declaration,
                    span: self.span_from(start),
                }));
            }
            if self.eat_word("FILEGROUP") {
                return self
                    .parse_modify_file_group(start)
                    .map(AlterDatabaseAction::ModifyFileGroup);
            }
            self.expect_word("NAME")?;
            self.expect(&TokenKind::Eq)?;
            let new_name = self.parse_identifier()?;
            return Ok(AlterDatabaseAction::ModifyName(AlterDatabaseModifyName {
                new_name,
                span: self.span_from(start),
            }));
        }
        if self.eat_keyword(Keyword::Collate) {
            let collation = self.parse_identifier()?;
            return Ok(AlterDatabaseAction::Collate(AlterDatabaseCollate {
                collation,
                span: self.span_from(start),
            }));
        }
        Err(self.unexpected(&["SET", "ADD", "REMOVE", "MODIFY", "COLLATE"]))
    }

    /// `fg READ_ONLY | READ_WRITE | DEFAULT | NAME = new |
    /// AUTOGROW_ALL_FILES | AUTOGROW_SINGLE_FILE` after `MODIFY FILEGROUP`.
    fn parse_modify_file_group(
        &mut self,
        start: Span,
    ) -> Result<AlterDatabaseModifyFileGroup, ParseError> {
        let file_group = self.parse_identifier()?;
        let mut modify = AlterDatabaseModifyFileGroup {
            file_group,
            is_default: false,
            new_name: None,
            updatability: None,
            autogrow_all_files: None,
            span: start,
        };
        if self.eat_keyword(Keyword::Default) {
            modify.is_default = true;
        } else if self.eat_word("NAME") {
            self.expect(&TokenKind::Eq)?;
            modify.new_name = Some(self.parse_identifier()?);
        } else if self.eat_any_word(&["READ_ONLY", "READONLY"]) {
            modify.updatability = Some(FileGroupUpdatability::ReadOnly);
        } else if self.eat_any_word(&["READ_WRITE", "READWRITE"]) {
            modify.updatability = Some(FileGroupUpdatability::ReadWrite);
        } else if self.eat_word("AUTOGROW_ALL_FILES") {
            modify.autogrow_all_files = Some(true);
        } else if self.eat_word("AUTOGROW_SINGLE_FILE") {
            modify.autogrow_all_files = Some(false);
        } else {
            return Err(self.unexpected(&[
                "DEFAULT",
                "NAME",
                "READ_ONLY",
                "READ_WRITE",
                "AUTOGROW_ALL_FILES",
                "AUTOGROW_SINGLE_FILE",
            ]));
        }
        modify.span = self.span_from(start);
        Ok(modify)
    }

    fn eat_any_word(&mut self, words: &[&str]) -> bool {
        words.iter().any(|word| self.eat_word(word))
    }

    /// Optional `WITH NO_WAIT | ROLLBACK IMMEDIATE | ROLLBACK AFTER n
    /// [SECONDS]`.
    fn parse_alter_database_termination(
        &mut self,
    ) -> Result<Option<AlterDatabaseTermination>, ParseError> {
        let start = self.current.span;
        if !self.eat_keyword(Keyword::With) {
            return Ok(None);
        }
        let (kind, rollback_after) = if self.eat_word("NO_WAIT") {
            (AlterDatabaseTerminationKind::NoWait, None)
        } else {
            self.expect_keyword(Keyword::Rollback)?;
            if self.eat_word("IMMEDIATE") {
                (AlterDatabaseTerminationKind::RollbackImmediate, None)
            } else {
                self.expect_word("AFTER")?;
                let seconds = self.parse_integer_literal()?;
                self.eat_word("SECONDS");
                (AlterDatabaseTerminationKind::RollbackAfter, Some(seconds))
            }
        };
        Ok(Some(AlterDatabaseTermination {
            kind,
            rollback_after,
            span: self.span_from(start),
        }))
    }

    /// `[FOR SECONDARY] SET option = value | CLEAR PROCEDURE_CACHE [handle]`
    fn parse_alter_database_scoped_configuration(
        &mut self,
        start: Span,
    ) -> Result<AlterDatabaseScopedConfigurationStatement, ParseError> {
        let secondary = self.eat_words(&["FOR", "SECONDARY"]);
        let mut option = None;
        let mut clear_procedure_cache = false;
        let mut plan_handle = None;
        if self.eat_keyword(Keyword::Set) {
            option = Some(self.parse_general_option::<DatabaseConfigurationSetOption>(
                "database scoped configuration",
            )?);
        } else {
            self.expect_word("CLEAR")?;
            self.expect_word("PROCEDURE_CACHE")?;
            clear_procedure_cache = true;
            if self.check_literal() {
                plan_handle = Some(self.parse_literal()?);
            }
        }
        Ok(AlterDatabaseScopedConfigurationStatement {
            secondary,
            option,
            clear_procedure_cache,
            plan_handle,
            span: self.span_from(start),
        })
    }

    // --- Database options ---

    /// One database option.
    fn parse_database_option(&mut self) -> Result<DatabaseOption, ParseError> {
        let start = self.current.span;
        let (option_kind, _) = self.parse_option_key::<DatabaseOptionKind>("database")?;
        match option_kind {
            DatabaseOptionKind::QueryStore => self
                .parse_query_store_option(start)
                .map(DatabaseOption::QueryStore),
            DatabaseOptionKind::ChangeTracking => self
                .parse_change_tracking_option(start)
                .map(DatabaseOption::ChangeTracking),
            DatabaseOptionKind::AutomaticTuning => self
                .parse_automatic_tuning_option(start)
                .map(DatabaseOption::AutomaticTuning),
            DatabaseOptionKind::FileStream => {
                self.eat(&TokenKind::Eq);
                let options = self.parse_option_list(|p| {
                    p.parse_general_option::<FileStreamOption>("FILESTREAM")
                })?;
                Ok(DatabaseOption::FileStream(FileStreamDatabaseOption {
                    option_kind,
                    options,
                    span: self.span_from(start),
                }))
            }
            DatabaseOptionKind::AcceleratedDatabaseRecovery => {
                self.expect(&TokenKind::Eq)?;
                let option_state = self.parse_option_state(option_kind.as_str())?;
                let mut filegroup = None;
                if self.eat(&TokenKind::LeftParen) {
                    self.expect_word("PERSISTENT_VERSION_STORE_FILEGROUP")?;
                    self.expect(&TokenKind::Eq)?;
                    filegroup = Some(self.parse_identifier()?);
                    self.expect(&TokenKind::RightParen)?;
                }
                Ok(DatabaseOption::AcceleratedDatabaseRecovery(
                    AcceleratedDatabaseRecoveryDatabaseOption {
                        option_kind,
                        option_state,
                        filegroup,
                        span: self.span_from(start),
                    },
                ))
            }
            DatabaseOptionKind::PersistentLogBuffer => {
                self.expect(&TokenKind::Eq)?;
                let option_state = self.parse_option_state(option_kind.as_str())?;
                let mut directory_name = None;
                if self.eat(&TokenKind::LeftParen) {
                    self.expect_word("DIRECTORY_NAME")?;
                    self.expect(&TokenKind::Eq)?;
                    directory_name = Some(self.parse_string_literal()?);
                    self.expect(&TokenKind::RightParen)?;
                }
                Ok(DatabaseOption::PersistentLogBuffer(PersistentLogBufferDatabaseOption {
                    option_kind,
                    option_state,
                    directory_name,
                    span: self.span_from(start),
                }))
            }
            _ => {
                let value =
                    self.parse_option_value(option_kind.as_str(), option_kind.value_shape())?;
                Ok(DatabaseOption::General(GeneralDatabaseOption {
                    option_kind,
                    value,
                    span: self.span_from(start),
                }))
            }
        }
    }

    /// `QUERY_STORE = ON | OFF [(…)]`, `QUERY_STORE CLEAR [ALL]` or
    /// `QUERY_STORE (…)`.
    fn parse_query_store_option(
        &mut self,
        start: Span,
    ) -> Result<QueryStoreDatabaseOption, ParseError> {
        let mut option = QueryStoreDatabaseOption {
            option_kind: DatabaseOptionKind::QueryStore,
            clear: false,
            clear_all: false,
            option_state: OptionState::NotSet,
            options: Vec::new(),
            span: start,
        };
        if self.eat_word("CLEAR") {
            option.clear = true;
            option.clear_all = self.eat_keyword(Keyword::All);
        } else {
            if self.eat(&TokenKind::Eq) {
                option.option_state = self.parse_option_state("QUERY_STORE")?;
            }
            if self.check(&TokenKind::LeftParen) {
                option.options = self.parse_option_list(Self::parse_query_store_setting)?;
            }
        }
        option.span = self.span_from(start);
        Ok(option)
    }

    fn parse_query_store_setting(&mut self) -> Result<QueryStoreOption, ParseError> {
        let start = self.current.span;
        let (option_kind, _) = self.parse_option_key::<QueryStoreOptionKind>("QUERY_STORE")?;
        self.expect(&TokenKind::Eq)?;
        let option = match option_kind {
            QueryStoreOptionKind::OperationMode => {
                let value = self.parse_keyword_value(
                    option_kind.as_str(),
                    QueryStoreDesiredState::from_word,
                    QueryStoreDesiredState::WORDS,
                )?;
                QueryStoreOption::DesiredState(QueryStoreDesiredStateOption {
                    option_kind,
                    value,
                    span: self.span_from(start),
                })
            }
            QueryStoreOptionKind::QueryCaptureMode => {
                let value = self.parse_keyword_value(
                    option_kind.as_str(),
                    QueryStoreCapturePolicyOptionKind::from_word,
                    QueryStoreCapturePolicyOptionKind::WORDS,
                )?;
                QueryStoreOption::CapturePolicy(QueryStoreCapturePolicyOption {
                    option_kind,
                    value,
                    span: self.span_from(start),
                })
            }
            QueryStoreOptionKind::SizeBasedCleanupMode => {
                let value = self.parse_keyword_value(
                    option_kind.as_str(),
                    QueryStoreSizeCleanupPolicyOptionKind::from_word,
                    QueryStoreSizeCleanupPolicyOptionKind::WORDS,
                )?;
                QueryStoreOption::SizeCleanupPolicy(QueryStoreSizeCleanupPolicyOption {
                    option_kind,
                    value,
                    span: self.span_from(start),
                })
            }
            QueryStoreOptionKind::DataFlushIntervalSeconds => {
                let flush_interval = self.parse_integer_literal()?;
                QueryStoreOption::DataFlushInterval(QueryStoreDataFlushIntervalOption {
                    option_kind,
                    flush_interval,
                    span: self.span_from(start),
                })
            }
            QueryStoreOptionKind::IntervalLengthMinutes => {
                let statistics_interval = self.parse_integer_literal()?;
                QueryStoreOption::IntervalLength(QueryStoreIntervalLengthOption {
                    option_kind,
                    statistics_interval,
                    span: self.span_from(start),
                })
            }
            QueryStoreOptionKind::MaxStorageSizeMb => {
                let max_qds_size = self.parse_integer_literal()?;
                QueryStoreOption::MaxStorageSize(QueryStoreMaxStorageSizeOption {
                    option_kind,
                    max_qds_size,
                    span: self.span_from(start),
                })
            }
            QueryStoreOptionKind::MaxPlansPerQuery => {
                let max_plans_per_query = self.parse_integer_literal()?;
                QueryStoreOption::MaxPlansPerQuery(QueryStoreMaxPlansPerQueryOption {
                    option_kind,
                    max_plans_per_query,
                    span: self.span_from(start),
                })
            }
            QueryStoreOptionKind::CleanupPolicy => {
                self.expect(&TokenKind::LeftParen)?;
                self.expect_word("STALE_QUERY_THRESHOLD_DAYS")?;
                self.expect(&TokenKind::Eq)?;
                let stale_query_threshold = self.parse_integer_literal()?;
                self.expect(&TokenKind::RightParen)?;
                QueryStoreOption::TimeCleanupPolicy(QueryStoreTimeCleanupPolicyOption {
                    option_kind,
                    stale_query_threshold,
                    span: self.span_from(start),
                })
            }
            QueryStoreOptionKind::WaitStatsCaptureMode => {
                let option_state = self.parse_option_state(option_kind.as_str())?;
                QueryStoreOption::WaitStatsCapture(QueryStoreWaitStatsCaptureOption {
                    option_kind,
                    option_state,
                    span: self.span_from(start),
                })
            }
            QueryStoreOptionKind::QueryCapturePolicy => {
                let options = self.parse_option_list(|p| {
                    p.parse_general_option::<QueryStoreCapturePolicyThreshold>(
                        "QUERY_CAPTURE_POLICY",
                    )
                })?;
                QueryStoreOption::CustomCapturePolicy(QueryStoreCustomCapturePolicyOption {
                    option_kind,
                    options,
                    span: self.span_from(start),
                })
            }
        };
        Ok(option)
    }

    /// A single-word value of a keyword enum.
    fn parse_keyword_value<T>(
        &mut self,
        option: &str,
        lookup: fn(&str) -> Option<T>,
        words: &[&str],
    ) -> Result<T, ParseError> {
        let Some(value) = self.current.word().and_then(lookup) else {
            return Err(ParseError::invalid_value(option, words, &self.current));
        };
        self.advance();
        Ok(value)
    }

    /// `CHANGE_TRACKING [=] ON | OFF [(AUTO_CLEANUP = …, CHANGE_RETENTION = …)]`
    fn parse_change_tracking_option(
        &mut self,
        start: Span,
    ) -> Result<ChangeTrackingDatabaseOption, ParseError> {
        let mut option_state = OptionState::NotSet;
        if self.eat(&TokenKind::Eq) {
            option_state = self.parse_option_state("CHANGE_TRACKING")?;
        }
        let details = if self.check(&TokenKind::LeftParen) {
            self.parse_option_list(|p| {
                let start = p.current.span;
                let option_kind = p.parse_keyword_value(
                    "CHANGE_TRACKING",
                    ChangeTrackingOptionKind::from_word,
                    ChangeTrackingOptionKind::WORDS,
                )?;
                p.expect(&TokenKind::Eq)?;
                let value = match option_kind {
                    ChangeTrackingOptionKind::AutoCleanup => {
                        let value_start = p.current.span;
                        let option_state = p.parse_option_state(option_kind.as_str())?;
                        OptionValue::OnOff(OnOffOptionValue {
                            option_state,
                            span: value_start,
                        })
                    }
                    ChangeTrackingOptionKind::ChangeRetention => {
                        OptionValue::Quantity(p.parse_quantity()?)
                    }
                };
                Ok(ChangeTrackingOptionDetail {
                    option_kind,
                    value,
                    span: p.span_from(start),
                })
            })?
        } else {
            Vec::new()
        };
        Ok(ChangeTrackingDatabaseOption {
            option_kind: DatabaseOptionKind::ChangeTracking,
            option_state,
            details,
            span: self.span_from(start),
        })
    }

    /// `AUTOMATIC_TUNING = INHERIT | CUSTOM | AUTO` or
    /// `AUTOMATIC_TUNING (FORCE_LAST_GOOD_PLAN = ON, …)`
    fn parse_automatic_tuning_option(
        &mut self,
        start: Span,
    ) -> Result<AutomaticTuningDatabaseOption, ParseError> {
        let automatic_tuning_state = if self.eat(&TokenKind::Eq) {
            Some(self.parse_keyword_value(
                "AUTOMATIC_TUNING",
                AutomaticTuningState::from_word,
                AutomaticTuningState::WORDS,
            )?)
        } else {
            None
        };
        let options = if self.check(&TokenKind::LeftParen) {
            self.parse_option_list(|p| {
                let start = p.current.span;
                let option_kind = p.parse_keyword_value(
                    "AUTOMATIC_TUNING",
                    AutomaticTuningOptionKind::from_word,
                    AutomaticTuningOptionKind::WORDS,
                )?;
                p.expect(&TokenKind::Eq)?;
                let value = p.parse_keyword_value(
                    option_kind.as_str(),
                    AutomaticTuningOptionState::from_word,
                    AutomaticTuningOptionState::WORDS,
                )?;
                Ok(AutomaticTuningOption {
                    option_kind,
                    value,
                    span: p.span_from(start),
                })
            })?
        } else {
            Vec::new()
        };
        Ok(AutomaticTuningDatabaseOption {
            option_kind: DatabaseOptionKind::AutomaticTuning,
            automatic_tuning_state,
            options,
            span: self.span_from(start),
        })
    }

    // --- DROP DATABASE ---

    /// `[IF EXISTS] db, …` after `DROP DATABASE`.
    pub(super) fn parse_drop_database_statement(
        &mut self,
        start: Span,
    ) -> Result<DropDatabaseStatement, ParseError> {
        let is_if_exists = self.parse_if_exists();
        let databases = self.parse_comma_separated(Self::parse_identifier)?;
        Ok(DropDatabaseStatement {
            is_if_exists,
            databases,
            span: self.span_from(start),
        })
    }

    // --- DBCC ---

    /// `DBCC command [( arg, … )] [WITH option, …]`
    pub(super) fn parse_dbcc_statement(&mut self) -> Result<DbccStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Dbcc)?;
        let Some(command) = self.current.word().and_then(DbccCommand::from_word) else {
            return Err(self.unexpected(&["DBCC command"]));
        };
        self.advance();
        let literals = if self.check(&TokenKind::LeftParen) {
            if self.peek_is(1, &TokenKind::RightParen) {
                self.advance();
                self.advance();
                Vec::new()
            } else {
                self.parse_parenthesized_list(Self::parse_dbcc_named_literal)?
            }
        } else {
            Vec::new()
        };
        let options = if self.eat_keyword(Keyword::With) {
            self.parse_comma_separated(|p| p.parse_general_option::<DbccOption>("DBCC"))?
        } else {
            Vec::new()
        };
        Ok(DbccStatement {
            command,
            literals,
            options,
            span: self.span_from(start),
        })
    }

    /// `[name =] value`
    fn parse_dbcc_named_literal(&mut self) -> Result<DbccNamedLiteral, ParseError> {
        let start = self.current.span;
        let name = if self.peek_is_identifier(0) && self.peek_is(1, &TokenKind::Eq) {
            let name = self.parse_identifier()?;
            self.advance();
            Some(name)
        } else {
            None
        };
        let value = self.parse_scalar_expression()?;
        Ok(DbccNamedLiteral {
            name,
            value,
            span: self.span_from(start),
        })
    }

    // --- BACKUP / RESTORE ---

    /// `BACKUP DATABASE | LOG …` or `BACKUP [SERVICE] MASTER KEY …`.
    pub(super) fn parse_backup_statement(&mut self) -> Result<Statement, ParseError> {
        let start = self.expect_keyword(Keyword::Backup)?;
        if self.check_master_key() {
            let is_service = self.eat_word("SERVICE");
            self.eat_words(&["MASTER", "KEY"]);
            self.expect_keyword(Keyword::To)?;
            let file = self.parse_key_file()?;
            self.expect_words(&["ENCRYPTION", "BY", "PASSWORD"])?;
            self.expect(&TokenKind::Eq)?;
            let password = self.parse_string_literal()?;
            return Ok(Statement::BackupMasterKey(Box::new(BackupMasterKeyStatement {
                is_service,
                file,
                password,
                span: self.span_from(start),
            })));
        }
        let is_log = if self.eat_keyword(Keyword::Database) {
            false
        } else {
            self.expect_word("LOG")?;
            true
        };
        let database_name = self.parse_database_name()?;
        let files = if is_log {
            Vec::new()
        } else {
            self.parse_backup_restore_files()?
        };
        self.expect_keyword(Keyword::To)?;
        let devices = self.parse_comma_separated(Self::parse_device_info)?;
        let mut mirror_to_clauses = Vec::new();
        while self.check_word("MIRROR") {
            let mirror_start = self.current.span;
            self.advance();
            self.expect_keyword(Keyword::To)?;
            let devices = self.parse_comma_separated(Self::parse_device_info)?;
            mirror_to_clauses.push(MirrorToClause {
                devices,
                span: self.span_from(mirror_start),
            });
        }
        let options = if self.eat_keyword(Keyword::With) {
            self.parse_comma_separated(Self::parse_backup_option)?
        } else {
            Vec::new()
        };
        if is_log {
            return Ok(Statement::BackupTransactionLog(Box::new(
                BackupTransactionLogStatement {
                    database_name,
                    devices,
                    mirror_to_clauses,
                    options,
                    span: self.span_from(start),
                },
            )));
        }
        Ok(Statement::BackupDatabase(Box::new(BackupDatabaseStatement {
            database_name,
            files,
            devices,
            mirror_to_clauses,
            options,
            span: self.span_from(start),
        })))
    }

    fn check_master_key(&mut self) -> bool {
        (self.check_word("SERVICE") && self.peek_word(1, "MASTER"))
            || (self.check_word("MASTER") && self.peek_keyword(1, Keyword::Key))
    }

    fn expect_words(&mut self, words: &[&str]) -> Result<(), ParseError> {
        for word in words {
            self.expect_word(word)?;
        }
        Ok(())
    }

    /// `FILE = 'path'`
    fn parse_key_file(&mut self) -> Result<Literal, ParseError> {
        self.expect_keyword(Keyword::File)?;
        self.expect(&TokenKind::Eq)?;
        self.parse_string_literal()
    }

    /// A database named directly, by string, or through a variable.
    fn parse_database_name(&mut self) -> Result<IdentifierOrValueExpression, ParseError> {
        if self.check_variable() {
            let identifier = self.parse_identifier_or_variable()?;
            return Ok(IdentifierOrValueExpression::Identifier(identifier));
        }
        self.parse_file_group_name()
    }

    /// `FILE = x | FILEGROUP = x | PAGE = x | READ_WRITE_FILEGROUPS`, …
    fn parse_backup_restore_files(&mut self) -> Result<Vec<BackupRestoreFileInfo>, ParseError> {
        let mut files = Vec::new();
        loop {
            let start = self.current.span;
            let item_kind = if self.check_keyword(Keyword::File) {
                BackupRestoreItemKind::Files
            } else if self.check_word("FILEGROUP") {
                BackupRestoreItemKind::FileGroups
            } else if self.check_word("PAGE") {
                BackupRestoreItemKind::Page
            } else if self.check_word("READ_WRITE_FILEGROUPS") {
                BackupRestoreItemKind::ReadWriteFileGroups
            } else {
                break;
            };
            self.advance();
            let items = if item_kind == BackupRestoreItemKind::ReadWriteFileGroups {
                Vec::new()
            } else {
                self.expect(&TokenKind::Eq)?;
                vec![self.parse_scalar_expression()?]
            };
            files.push(BackupRestoreFileInfo {
                item_kind,
                items,
                span: self.span_from(start),
            });
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(files)
    }

    /// `DISK | TAPE | URL = expr` or a logical backup device.
    fn parse_device_info(&mut self) -> Result<DeviceInfo, ParseError> {
        let start = self.current.span;
        let physical = if self.check_keyword(Keyword::Disk) {
            Some(DeviceType::Disk)
        } else if self.check_word("TAPE") {
            Some(DeviceType::Tape)
        } else if self.check_word("URL") {
            Some(DeviceType::Url)
        } else {
            None
        };
        if let Some(device_type) = physical.filter(|_| self.peek_is(1, &TokenKind::Eq)) {
            self.advance();
            self.advance();
            let physical_device = self.parse_scalar_expression()?;
            return Ok(DeviceInfo {
                device_type,
                logical_device: None,
                physical_device: Some(physical_device),
                span: self.span_from(start),
            });
        }
        let logical_device = self.parse_identifier_or_variable()?;
        Ok(DeviceInfo {
            device_type: DeviceType::Logical,
            logical_device: Some(logical_device),
            physical_device: None,
            span: self.span_from(start),
        })
    }

    fn parse_backup_option(&mut self) -> Result<BackupOption, ParseError> {
        let start = self.current.span;
        let (option_kind, _) = self.parse_option_key::<BackupOptionKind>("backup")?;
        if option_kind != BackupOptionKind::Encryption {
            let value = self.parse_option_value(option_kind.as_str(), option_kind.value_shape())?;
            return Ok(BackupOption::General(GeneralBackupOption {
                option_kind,
                value,
                span: self.span_from(start),
            }));
        }
        self.expect(&TokenKind::LeftParen)?;
        self.expect_word("ALGORITHM")?;
        self.expect(&TokenKind::Eq)?;
        let algorithm = self.parse_identifier()?;
        self.expect(&TokenKind::Comma)?;
        let Some(encryptor_type) = self.eat_multi_word(BackupEncryptorType::from_word) else {
            return Err(self.unexpected(BackupEncryptorType::WORDS));
        };
        self.expect(&TokenKind::Eq)?;
        let encryptor_name = self.parse_identifier()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(BackupOption::Encryption(BackupEncryptionOption {
            option_kind,
            algorithm,
            encryptor_type,
            encryptor_name,
            span: self.span_from(start),
        }))
    }

    /// `RESTORE DATABASE | LOG | FILELISTONLY | … [FROM devices] [WITH …]`
    /// or `RESTORE [SERVICE] MASTER KEY …`.
    pub(super) fn parse_restore_statement(&mut self) -> Result<Statement, ParseError> {
        let start = self.expect_keyword(Keyword::Restore)?;
        if self.check_master_key() {
            return self
                .parse_restore_master_key(start)
                .map(|s| Statement::RestoreMasterKey(Box::new(s)));
        }
        let kind = if self.eat_keyword(Keyword::Database) {
            RestoreStatementKind::Database
        } else if self.eat_word("LOG") {
            RestoreStatementKind::TransactionLog
        } else if self.eat_word("FILELISTONLY") {
            RestoreStatementKind::FileListOnly
        } else if self.eat_word("VERIFYONLY") {
            RestoreStatementKind::VerifyOnly
        } else if self.eat_word("LABELONLY") {
            RestoreStatementKind::LabelOnly
        } else if self.eat_word("HEADERONLY") {
            RestoreStatementKind::HeaderOnly
        } else if self.eat_word("REWINDONLY") {
            RestoreStatementKind::RewindOnly
        } else {
            return Err(self.unexpected(&[
                "DATABASE",
                "LOG",
                "FILELISTONLY",
                "VERIFYONLY",
                "LABELONLY",
                "HEADERONLY",
                "REWINDONLY",
            ]));
        };
        let has_database = matches!(
            kind,
            RestoreStatementKind::Database | RestoreStatementKind::TransactionLog
        );
        let database_name = if has_database {
            Some(self.parse_database_name()?)
        } else {
            None
        };
        let files = if has_database {
            self.parse_backup_restore_files()?
        } else {
            Vec::new()
        };
        let devices = if self.eat_keyword(Keyword::From) {
            self.parse_comma_separated(Self::parse_device_info)?
        } else {
            Vec::new()
        };
        let options = if self.eat_keyword(Keyword::With) {
            self.parse_comma_separated(Self::parse_restore_option)?
        } else {
            Vec::new()
        };
        Ok(Statement::Restore(Box::new(RestoreStatement {
            kind,
            database_name,
            files,
            devices,
            options,
            span: self.span_from(start),
        })))
    }

    fn parse_restore_option(&mut self) -> Result<RestoreOption, ParseError> {
        let start = self.current.span;
        let (option_kind, _) = self.parse_option_key::<RestoreOptionKind>("restore")?;
        if option_kind == RestoreOptionKind::Move {
            let logical_file_name = self.parse_scalar_expression()?;
            self.expect_keyword(Keyword::To)?;
            let os_file_name = self.parse_scalar_expression()?;
            return Ok(RestoreOption::Move(MoveRestoreOption {
                option_kind,
                logical_file_name,
                os_file_name,
                span: self.span_from(start),
            }));
        }
        let value = self.parse_option_value(option_kind.as_str(), option_kind.value_shape())?;
        Ok(RestoreOption::General(GeneralRestoreOption {
            option_kind,
            value,
            span: self.span_from(start),
        }))
    }

    /// `[SERVICE] MASTER KEY FROM FILE = 'f' DECRYPTION BY PASSWORD = 'p'
    /// [ENCRYPTION BY PASSWORD = 'q'] [FORCE]`
    fn parse_restore_master_key(
        &mut self,
        start: Span,
    ) -> Result<RestoreMasterKeyStatement, ParseError> {
        let is_service = self.eat_word("SERVICE");
        self.eat_words(&["MASTER", "KEY"]);
        self.expect_keyword(Keyword::From)?;
        let file = self.parse_key_file()?;
        self.expect_words(&["DECRYPTION", "BY", "PASSWORD"])?;
        self.expect(&TokenKind::Eq)?;
        let password = self.parse_string_literal()?;
        let encryption_password = if self.eat_words(&["ENCRYPTION", "BY", "PASSWORD"]) {
            self.expect(&TokenKind::Eq)?;
            Some(self.parse_string_literal()?)
        } else {
            None
        };
        let is_force = self.eat_word("FORCE");
        Ok(RestoreMasterKeyStatement {
            is_service,
            file,
            password,
            encryption_password,
            is_force,
            span: self.span_from(start),
        })
    }

    // --- Server utilities ---

    /// `SHUTDOWN [WITH NOWAIT]`
    pub(super) fn parse_shutdown_statement(&mut self) -> Result<ShutdownStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Shutdown)?;
        let with_no_wait = self.eat_words(&["WITH", "NOWAIT"]);
        Ok(ShutdownStatement {
            with_no_wait,
            span: self.span_from(start),
        })
    }

    /// `CHECKPOINT [duration]`
    pub(super) fn parse_checkpoint_statement(
        &mut self,
    ) -> Result<CheckpointStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Checkpoint)?;
        let duration = if matches!(self.current.kind, TokenKind::Integer(_)) {
            Some(self.parse_integer_literal()?)
        } else {
            None
        };
        Ok(CheckpointStatement {
            duration,
            span: self.span_from(start),
        })
    }

    /// `RECONFIGURE [WITH OVERRIDE]`
    pub(super) fn parse_reconfigure_statement(
        &mut self,
    ) -> Result<ReconfigureStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Reconfigure)?;
        let with_override = self.eat_words(&["WITH", "OVERRIDE"]);
        Ok(ReconfigureStatement {
            with_override,
            span: self.span_from(start),
        })
    }

    /// `KILL session [WITH STATUSONLY]`
    pub(super) fn parse_kill_statement(&mut self) -> Result<KillStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Kill)?;
        let parameter = self.parse_scalar_expression()?;
        let with_status_only = self.eat_words(&["WITH", "STATUSONLY"]);
        Ok(KillStatement {
            parameter,
            with_status_only,
            span: self.span_from(start),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::parser::{ParseOptions, Parser};

    fn statement(sql: &str) -> Statement {
        let mut parser = Parser::new(sql, &ParseOptions::default());
        parser.parse_statement().unwrap()
    }

    #[test]
    fn test_create_database_files() {
        let Statement::CreateDatabase(db) = statement(
            "CREATE DATABASE Sales
             ON PRIMARY (NAME = Sales_dat, FILENAME = 'C:\\data\\sales.mdf', SIZE = 10 MB,
                         MAXSIZE = UNLIMITED, FILEGROWTH = 5%),
             FILEGROUP fs CONTAINS FILESTREAM (NAME = fs1, FILENAME = 'C:\\data\\fs1')
             LOG ON (NAME = Sales_log, FILENAME = 'C:\\data\\sales.ldf')
             COLLATE Latin1_General_CI_AS
             WITH TRUSTWORTHY ON, DB_CHAINING OFF",
        ) else {
            panic!("expected CREATE DATABASE");
        };
        assert_eq!(db.file_declarations.len(), 1);
        assert!(db.file_declarations[0].is_primary);
        assert_eq!(db.file_declarations[0].options.len(), 5);
        assert!(db.file_groups[0].contains_file_stream);
        assert_eq!(db.log_on.len(), 1);
        assert!(db.collation.is_some());
        assert_eq!(db.options.len(), 2);
    }

    #[test]
    fn test_create_database_snapshot_and_attach() {
        assert!(matches!(
            statement(
                "CREATE DATABASE snap ON (NAME = d, FILENAME = 'x.ss') AS SNAPSHOT OF Sales"
            ),
            Statement::CreateDatabase(d) if d.database_snapshot.is_some()
        ));
        assert!(matches!(
            statement("CREATE DATABASE d ON (FILENAME = 'd.mdf') FOR ATTACH"),
            Statement::CreateDatabase(d) if d.attach_mode == AttachMode::Attach
        ));
        assert!(matches!(
            statement("CREATE DATABASE d CONTAINMENT = PARTIAL"),
            Statement::CreateDatabase(d) if d.containment.is_some()
        ));
    }

    #[test]
    fn test_alter_database_set() {
        let Statement::AlterDatabaseSet(stmt) = statement(
            "ALTER DATABASE CURRENT SET RECOVERY SIMPLE, \
             QUERY_STORE = ON (OPERATION_MODE = READ_WRITE, MAX_STORAGE_SIZE_MB = 100, \
             CLEANUP_POLICY = (STALE_QUERY_THRESHOLD_DAYS = 30)) \
             WITH ROLLBACK AFTER 10 SECONDS",
        ) else {
            panic!("expected ALTER DATABASE SET");
        };
        assert!(stmt.use_current);
        assert_eq!(stmt.options[0].option_kind(), DatabaseOptionKind::Recovery);
        let DatabaseOption::QueryStore(query_store) = &stmt.options[1] else {
            panic!("expected QUERY_STORE");
        };
        assert_eq!(query_store.option_state, OptionState::On);
        assert_eq!(query_store.options.len(), 3);
        let termination = stmt.termination.unwrap();
        assert_eq!(termination.kind, AlterDatabaseTerminationKind::RollbackAfter);
    }

    #[test]
    fn test_alter_database_custom_options() {
        let Statement::AlterDatabaseSet(stmt) = statement(
            "ALTER DATABASE d SET CHANGE_TRACKING = ON (CHANGE_RETENTION = 2 DAYS, \
             AUTO_CLEANUP = ON), AUTOMATIC_TUNING (FORCE_LAST_GOOD_PLAN = ON), \
             ACCELERATED_DATABASE_RECOVERY = ON, SINGLE_USER WITH NO_WAIT",
        ) else {
            panic!("expected ALTER DATABASE SET");
        };
        assert!(matches!(
            &stmt.options[0],
            DatabaseOption::ChangeTracking(c) if c.details.len() == 2
        ));
        assert!(matches!(&stmt.options[1], DatabaseOption::AutomaticTuning(_)));
        assert!(matches!(
            &stmt.options[2],
            DatabaseOption::AcceleratedDatabaseRecovery(a) if a.option_state == OptionState::On
        ));
        assert_eq!(stmt.options[3].option_kind(), DatabaseOptionKind::SingleUser);
    }

    #[test]
    fn test_alter_database_actions() {
        assert!(matches!(
            statement("ALTER DATABASE d ADD FILE (NAME = f2, FILENAME = 'f2.ndf') TO FILEGROUP fg"),
            Statement::AlterDatabase(a)
                if matches!(&a.action, AlterDatabaseAction::AddFile(f) if f.file_group.is_some())
        ));
        assert!(matches!(
            statement("ALTER DATABASE d ADD LOG FILE (NAME = l2, FILENAME = 'l2.ldf')"),
            Statement::AlterDatabase(a)
                if matches!(&a.action, AlterDatabaseAction::AddFile(f) if f.is_log)
        ));
        assert!(matches!(
            statement("ALTER DATABASE d MODIFY FILEGROUP fg READ_ONLY"),
            Statement::AlterDatabase(a) if matches!(
                &a.action,
                AlterDatabaseAction::ModifyFileGroup(m)
                    if m.updatability == Some(FileGroupUpdatability::ReadOnly)
            )
        ));
        assert!(matches!(
            statement("ALTER DATABASE d MODIFY NAME = d2"),
            Statement::AlterDatabase(a) if matches!(a.action, AlterDatabaseAction::ModifyName(_))
        ));
    }

    #[test]
    fn test_scoped_configuration() {
        let Statement::AlterDatabaseScopedConfiguration(stmt) =
            statement("ALTER DATABASE SCOPED CONFIGURATION FOR SECONDARY SET MAXDOP = PRIMARY")
        else {
            panic!("expected scoped configuration");
        };
        assert!(stmt.secondary);
        assert!(stmt.option.unwrap().is_primary());

        assert!(matches!(
            statement("ALTER DATABASE SCOPED CONFIGURATION CLEAR PROCEDURE_CACHE"),
            Statement::AlterDatabaseScopedConfiguration(s) if s.clear_procedure_cache
        ));
    }

    #[test]
    fn test_drop_database() {
        assert!(matches!(
            statement("DROP DATABASE IF EXISTS a, b"),
            Statement::DropDatabase(d) if d.is_if_exists && d.databases.len() == 2
        ));
    }

    #[test]
    fn test_dbcc() {
        let Statement::Dbcc(dbcc) =
            statement("DBCC CHECKDB (N'Sales') WITH NO_INFOMSGS, ALL_ERRORMSGS")
        else {
            panic!("expected DBCC");
        };
        assert_eq!(dbcc.command, DbccCommand::CheckDb);
        assert_eq!(dbcc.literals.len(), 1);
        assert!(dbcc.literals[0].literal().is_some());
        assert_eq!(dbcc.options.len(), 2);

        assert!(matches!(
            statement("DBCC FREEPROCCACHE"),
            Statement::Dbcc(d) if d.literals.is_empty()
        ));
    }

    #[test]
    fn test_backup() {
        let Statement::BackupDatabase(backup) = statement(
            "BACKUP DATABASE Sales FILEGROUP = 'PRIMARY' TO DISK = 'a.bak' \
             MIRROR TO DISK = 'b.bak' \
             WITH FORMAT, COMPRESSION, STATS = 10, \
             ENCRYPTION (ALGORITHM = AES_256, SERVER CERTIFICATE = BackupCert)",
        ) else {
            panic!("expected BACKUP DATABASE");
        };
        assert_eq!(backup.files[0].item_kind, BackupRestoreItemKind::FileGroups);
        assert_eq!(backup.devices[0].device_type, DeviceType::Disk);
        assert_eq!(backup.mirror_to_clauses.len(), 1);
        assert_eq!(backup.options.len(), 4);
        assert!(matches!(
            &backup.options[3],
            BackupOption::Encryption(e)
                if e.encryptor_type == BackupEncryptorType::ServerCertificate
        ));

        assert!(matches!(
            statement("BACKUP LOG @db TO backup_device"),
            Statement::BackupTransactionLog(b)
                if b.devices[0].device_type == DeviceType::Logical
        ));
    }

    #[test]
    fn test_restore() {
        let Statement::Restore(restore) = statement(
            "RESTORE DATABASE Sales FROM DISK = 'a.bak' \
             WITH MOVE 'Sales_dat' TO 'D:\\sales.mdf', REPLACE, NORECOVERY, STATS = 5",
        ) else {
            panic!("expected RESTORE");
        };
        assert_eq!(restore.kind, RestoreStatementKind::Database);
        assert!(matches!(restore.options[0], RestoreOption::Move(_)));
        assert_eq!(restore.options.len(), 4);

        assert!(matches!(
            statement("RESTORE HEADERONLY FROM DISK = 'a.bak'"),
            Statement::Restore(r) if r.database_name.is_none()
        ));
    }

    #[test]
    fn test_master_key_backup_and_restore() {
        assert!(matches!(
            statement("BACKUP SERVICE MASTER KEY TO FILE = 'k' ENCRYPTION BY PASSWORD = 'p'"),
            Statement::BackupMasterKey(b) if b.is_service
        ));
        assert!(matches!(
            statement(
                "RESTORE MASTER KEY FROM FILE = 'k' DECRYPTION BY PASSWORD = 'p' \
                 ENCRYPTION BY PASSWORD = 'q' FORCE"
            ),
            Statement::RestoreMasterKey(r) if r.is_force && r.encryption_password.is_some()
        ));
    }

    #[test]
    fn test_server_utilities() {
        assert!(matches!(
            statement("SHUTDOWN WITH NOWAIT"),
            Statement::Shutdown(s) if s.with_no_wait
        ));
        assert!(matches!(
            statement("CHECKPOINT 30"),
            Statement::Checkpoint(c) if c.duration.is_some()
        ));
        assert!(matches!(
            statement("RECONFIGURE WITH OVERRIDE"),
            Statement::Reconfigure(r) if r.with_override
        ));
        assert!(matches!(
            statement("KILL 53 WITH STATUSONLY"),
            Statement::Kill(k) if k.with_status_only
        ));
    }
}
