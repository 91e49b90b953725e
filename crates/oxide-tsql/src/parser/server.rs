//! Server-scoped objects: availability groups, full-text search, event
//! sessions, the resource governor, external objects and queues.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{
    AlterAvailabilityGroupActionType, AlterAvailabilityGroupStatement, AlterFullTextCatalogAction,
    AlterFullTextCatalogStatement, AlterFullTextIndexActionKind, AlterFullTextIndexStatement,
    AlterResourceGovernorStatement, AvailabilityGroupOption, AvailabilityReplica,
    AvailabilityReplicaOption, AvailabilityReplicaOptionKind, CreateAvailabilityGroupStatement,
    CreateExternalFileFormatStatement, CreateExternalTableStatement, CreateFullTextCatalogStatement,
    CreateFullTextIndexStatement, CreateWorkloadClassifierStatement, DdlAction,
    DropEventSessionElement, EventDeclaration, EventDeclarationSetParameter, EventSessionElement,
    EventSessionOption, EventSessionScope, EventSessionState, EventSessionStatement,
    ExternalDataSourceOption, ExternalDataSourceStatement, ExternalFileFormatContainerOption,
    ExternalFileFormatOption, ExternalFileFormatOptionKind, ExternalLanguageFile,
    ExternalLanguageFileOption, ExternalLanguageStatement, ExternalLibraryStatement,
    ExternalTableOption, FullTextCatalogAndFileGroup, FullTextCatalogOption, FullTextIndexColumn,
    FullTextIndexOption, GeneralAvailabilityReplicaOption, GeneralExternalFileFormatOption,
    GeneralQueueOption, GeneralResourcePoolOption, Identifier, IdentifierOrValueExpression,
    MultiPartIdentifier, OptionValue, QueueActivationOption, QueueActivationOptionKind,
    QueueActivationSubOption, QueueOption, QueueOptionKind, QueueStateOption, QueueStatement,
    QuoteType, ReplicaRoleOption, ReplicaRoleOptionKind, ReplicaRoleSubOption,
    ResourcePoolAffinityOption, ResourcePoolAffinityType, ResourcePoolOption,
    ResourcePoolOptionKind, ResourcePoolStatement, Statement, TargetDeclaration, ValueShape,
    WorkloadClassifierOption, WorkloadGroupParameter, WorkloadGroupStatement,
};
use crate::dialect::Feature;
use crate::lexer::{Keyword, Span, TokenKind};

impl Parser<'_> {
    /// `CREATE` / `ALTER` forms for server-scoped objects. Returns `None`
    /// when the object type is not one of them.
    pub(super) fn parse_server_object(
        &mut self,
        start: Span,
        action: DdlAction,
    ) -> Option<Result<Statement, ParseError>> {
        let is_create = action == DdlAction::Create;
        let result = if self.eat_words(&["AVAILABILITY", "GROUP"]) {
            if is_create {
                self.parse_create_availability_group_statement(start)
                    .map(|s| Statement::CreateAvailabilityGroup(Box::new(s)))
            } else {
                self.parse_alter_availability_group_statement(start)
                    .map(|s| Statement::AlterAvailabilityGroup(Box::new(s)))
            }
        } else if self.eat_words(&["FULLTEXT", "CATALOG"]) {
            if is_create {
                self.parse_create_full_text_catalog_statement(start)
                    .map(|s| Statement::CreateFullTextCatalog(Box::new(s)))
            } else {
                self.parse_alter_full_text_catalog_statement(start)
                    .map(|s| Statement::AlterFullTextCatalog(Box::new(s)))
            }
        } else if self.eat_words(&["FULLTEXT", "INDEX"]) {
            if is_create {
                self.parse_create_full_text_index_statement(start)
                    .map(|s| Statement::CreateFullTextIndex(Box::new(s)))
            } else {
                self.parse_alter_full_text_index_statement(start)
                    .map(|s| Statement::AlterFullTextIndex(Box::new(s)))
            }
        } else if self.eat_words(&["EVENT", "SESSION"]) {
            self.parse_event_session_statement(start, action)
                .map(|s| Statement::EventSession(Box::new(s)))
        } else if self.eat_words(&["RESOURCE", "POOL"]) {
            self.parse_resource_pool_statement(start, action)
                .map(|s| Statement::ResourcePool(Box::new(s)))
        } else if !is_create && self.eat_words(&["RESOURCE", "GOVERNOR"]) {
            self.parse_alter_resource_governor_statement(start)
                .map(|s| Statement::AlterResourceGovernor(Box::new(s)))
        } else if self.eat_words(&["WORKLOAD", "GROUP"]) {
            self.parse_workload_group_statement(start, action)
                .map(|s| Statement::WorkloadGroup(Box::new(s)))
        } else if is_create && self.eat_words(&["WORKLOAD", "CLASSIFIER"]) {
            self.require(Feature::WorkloadClassifier, self.span_from(start));
            self.parse_create_workload_classifier_statement(start)
                .map(|s| Statement::CreateWorkloadClassifier(Box::new(s)))
        } else if self.check_keyword(Keyword::External) {
            return self.parse_external_object(start, action);
        } else if self.eat_word("QUEUE") {
            self.parse_queue_statement(start, action)
                .map(|s| Statement::Queue(Box::new(s)))
        } else {
            return None;
        };
        Some(result)
    }

    // --- Availability groups ---

    /// `CREATE AVAILABILITY GROUP ag [WITH (…)] FOR [DATABASE db, …]
    /// REPLICA ON 'server' WITH (…), …`
    fn parse_create_availability_group_statement(
        &mut self,
        start: Span,
    ) -> Result<CreateAvailabilityGroupStatement, ParseError> {
        let name = self.parse_identifier()?;
        let options = self.parse_with_option_list(|p| {
            p.parse_general_option::<AvailabilityGroupOption>("availability group")
        })?;
        self.expect_keyword(Keyword::For)?;
        let databases = if self.eat_keyword(Keyword::Database) {
            self.parse_comma_separated(Self::parse_identifier)?
        } else {
            Vec::new()
        };
        self.expect_word("REPLICA")?;
        self.expect_keyword(Keyword::On)?;
        let replicas = self.parse_comma_separated(Self::parse_availability_replica)?;
        Ok(CreateAvailabilityGroupStatement {
            name,
            options,
            databases,
            replicas,
            span: self.span_from(start),
        })
    }

    /// `ALTER AVAILABILITY GROUP ag action`
    fn parse_alter_availability_group_statement(
        &mut self,
        start: Span,
    ) -> Result<AlterAvailabilityGroupStatement, ParseError> {
        let name = self.parse_identifier()?;
        let mut options = Vec::new();
        let mut databases = Vec::new();
        let mut replicas = Vec::new();
        let action_type = if self.eat_keyword(Keyword::Set) {
            options = self.parse_option_list(|p| {
                p.parse_general_option::<AvailabilityGroupOption>("availability group")
            })?;
            AlterAvailabilityGroupActionType::Set
        } else if self.eat_keyword(Keyword::Add) {
            if self.eat_keyword(Keyword::Database) {
                databases = self.parse_comma_separated(Self::parse_identifier)?;
                AlterAvailabilityGroupActionType::AddDatabase
            } else {
                self.expect_word("REPLICA")?;
                self.expect_keyword(Keyword::On)?;
                replicas = self.parse_comma_separated(Self::parse_availability_replica)?;
                AlterAvailabilityGroupActionType::AddReplica
            }
        } else if self.eat_word("REMOVE") {
            if self.eat_keyword(Keyword::Database) {
                databases = self.parse_comma_separated(Self::parse_identifier)?;
                AlterAvailabilityGroupActionType::RemoveDatabase
            } else {
                self.expect_word("REPLICA")?;
                self.expect_keyword(Keyword::On)?;
                let replica_start = self.current.span;
                let server_name = self.parse_string_literal()?;
                replicas.push(AvailabilityReplica {
                    server_name,
                    options: Vec::new(),
                    span: self.span_from(replica_start),
                });
                AlterAvailabilityGroupActionType::RemoveReplica
            }
        } else if self.eat_word("MODIFY") {
            self.expect_word("REPLICA")?;
            self.expect_keyword(Keyword::On)?;
            replicas.push(self.parse_availability_replica()?);
            AlterAvailabilityGroupActionType::ModifyReplica
        } else if self.eat_word("JOIN") {
            AlterAvailabilityGroupActionType::Join
        } else if self.eat_word("ONLINE") {
            AlterAvailabilityGroupActionType::Online
        } else if self.eat_word("OFFLINE") {
            AlterAvailabilityGroupActionType::Offline
        } else if self.eat_word("FAILOVER") {
            AlterAvailabilityGroupActionType::Failover
        } else if self.eat_word("FORCE_FAILOVER_ALLOW_DATA_LOSS") {
            AlterAvailabilityGroupActionType::ForceFailoverAllowDataLoss
        } else {
            return Err(self.unexpected(&[
                "SET",
                "ADD",
                "REMOVE",
                "MODIFY",
                "JOIN",
                "ONLINE",
                "OFFLINE",
                "FAILOVER",
                "FORCE_FAILOVER_ALLOW_DATA_LOSS",
            ]));
        };
        Ok(AlterAvailabilityGroupStatement {
            name,
            action_type,
            options,
            databases,
            replicas,
            span: self.span_from(start),
        })
    }

    /// `'server' WITH (option, …)`
    fn parse_availability_replica(&mut self) -> Result<AvailabilityReplica, ParseError> {
        let start = self.current.span;
        let server_name = self.parse_string_literal()?;
        let options = self.parse_with_option_list(Self::parse_availability_replica_option)?;
        Ok(AvailabilityReplica {
            server_name,
            options,
            span: self.span_from(start),
        })
    }

    fn parse_availability_replica_option(
        &mut self,
    ) -> Result<AvailabilityReplicaOption, ParseError> {
        let start = self.current.span;
        let (option_kind, _) =
            self.parse_option_key::<AvailabilityReplicaOptionKind>("availability replica")?;
        let shape = option_kind.value_shape();
        if shape != ValueShape::Custom {
            let value = self.parse_option_value(option_kind.as_str(), shape)?;
            return Ok(AvailabilityReplicaOption::General(GeneralAvailabilityReplicaOption {
                option_kind,
                value,
                span: self.span_from(start),
            }));
        }
        let options = self.parse_option_list(Self::parse_replica_role_sub_option)?;
        Ok(AvailabilityReplicaOption::Role(ReplicaRoleOption {
            option_kind,
            options,
            span: self.span_from(start),
        }))
    }

    /// `ALLOW_CONNECTIONS = …`, `READ_ONLY_ROUTING_LIST = ('a', …) | NONE`
    /// and the routing URLs.
    fn parse_replica_role_sub_option(&mut self) -> Result<ReplicaRoleSubOption, ParseError> {
        let start = self.current.span;
        let (option_kind, _) = self.parse_option_key::<ReplicaRoleOptionKind>("replica role")?;
        let values = if option_kind == ReplicaRoleOptionKind::ReadOnlyRoutingList {
            self.expect(&TokenKind::Eq)?;
            if self.eat_word("NONE") {
                Vec::new()
            } else {
                self.parse_parenthesized_list(|p| {
                    p.parse_string_literal().map(OptionValue::Literal)
                })?
            }
        } else {
            self.parse_option_value(option_kind.as_str(), option_kind.value_shape())?
                .into_iter()
                .collect()
        };
        Ok(ReplicaRoleSubOption {
            option_kind,
            values,
            span: self.span_from(start),
        })
    }

    // --- Full-text search ---

    /// `CREATE FULLTEXT CATALOG c [ON FILEGROUP fg] [IN PATH 'p']
    /// [WITH ACCENT_SENSITIVITY = …] [AS DEFAULT] [AUTHORIZATION owner]`
    fn parse_create_full_text_catalog_statement(
        &mut self,
        start: Span,
    ) -> Result<CreateFullTextCatalogStatement, ParseError> {
        let name = self.parse_identifier()?;
        let file_group = if self.check_keyword(Keyword::On) && self.peek_word(1, "FILEGROUP") {
            self.advance();
            self.advance();
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let path = if self.eat_words(&["IN", "PATH"]) {
            Some(self.parse_string_literal()?)
        } else {
            None
        };
        let options = self.parse_with_bare_option_list(|p| {
            p.parse_general_option::<FullTextCatalogOption>("fulltext catalog")
        })?;
        let is_default = self.eat_words(&["AS", "DEFAULT"]);
        let owner = if self.eat_keyword(Keyword::Authorization) {
            Some(self.parse_name()?)
        } else {
            None
        };
        Ok(CreateFullTextCatalogStatement {
            name,
            file_group,
            path,
            options,
            is_default,
            owner,
            span: self.span_from(start),
        })
    }

    /// `ALTER FULLTEXT CATALOG c {REBUILD [WITH …] | REORGANIZE | AS DEFAULT}`
    fn parse_alter_full_text_catalog_statement(
        &mut self,
        start: Span,
    ) -> Result<AlterFullTextCatalogStatement, ParseError> {
        let name = self.parse_identifier()?;
        let mut options = Vec::new();
        let action = if self.eat_word("REBUILD") {
            options = self.parse_with_bare_option_list(|p| {
                p.parse_general_option::<FullTextCatalogOption>("fulltext catalog")
            })?;
            AlterFullTextCatalogAction::Rebuild
        } else if self.eat_word("REORGANIZE") {
            AlterFullTextCatalogAction::Reorganize
        } else if self.eat_words(&["AS", "DEFAULT"]) {
            AlterFullTextCatalogAction::AsDefault
        } else {
            return Err(self.unexpected(&["REBUILD", "REORGANIZE", "AS DEFAULT"]));
        };
        Ok(AlterFullTextCatalogStatement {
            name,
            action,
            options,
            span: self.span_from(start),
        })
    }

    /// `CREATE FULLTEXT INDEX ON t (col …, …) KEY INDEX ix
    /// [ON catalog | ON (catalog, FILEGROUP fg)] [WITH …]`
    fn parse_create_full_text_index_statement(
        &mut self,
        start: Span,
    ) -> Result<CreateFullTextIndexStatement, ParseError> {
        self.expect_keyword(Keyword::On)?;
        let on_name = self.parse_schema_object_name()?;
        let full_text_index_columns = if self.check(&TokenKind::LeftParen) {
            self.parse_parenthesized_list(Self::parse_full_text_index_column)?
        } else {
            Vec::new()
        };
        self.expect_keyword(Keyword::Key)?;
        self.expect_keyword(Keyword::Index)?;
        let key_index_name = self.parse_identifier()?;
        let catalog_and_file_group = if self.eat_keyword(Keyword::On) {
            Some(self.parse_full_text_catalog_and_file_group()?)
        } else {
            None
        };
        let options = self.parse_with_bare_option_list(|p| {
            p.parse_general_option::<FullTextIndexOption>("fulltext index")
        })?;
        Ok(CreateFullTextIndexStatement {
            on_name,
            full_text_index_columns,
            key_index_name,
            catalog_and_file_group,
            options,
            span: self.span_from(start),
        })
    }

    /// `catalog`, `(catalog [, FILEGROUP fg])` or `(FILEGROUP fg [, catalog])`
    fn parse_full_text_catalog_and_file_group(
        &mut self,
    ) -> Result<FullTextCatalogAndFileGroup, ParseError> {
        let start = self.current.span;
        let mut catalog_name = None;
        let mut file_group_name = None;
        let mut file_group_is_first = false;
        if self.eat(&TokenKind::LeftParen) {
            for position in 0..2 {
                if position > 0 && !self.eat(&TokenKind::Comma) {
                    break;
                }
                if self.eat_word("FILEGROUP") {
                    file_group_is_first = position == 0;
                    file_group_name = Some(self.parse_identifier()?);
                } else {
                    catalog_name = Some(self.parse_identifier()?);
                }
            }
            self.expect(&TokenKind::RightParen)?;
        } else {
            catalog_name = Some(self.parse_identifier()?);
        }
        Ok(FullTextCatalogAndFileGroup {
            catalog_name,
            file_group_name,
            file_group_is_first,
            span: self.span_from(start),
        })
    }

    /// `col [TYPE COLUMN tc] [LANGUAGE lang] [STATISTICAL_SEMANTICS]`
    fn parse_full_text_index_column(&mut self) -> Result<FullTextIndexColumn, ParseError> {
        let start = self.current.span;
        let name = self.parse_identifier()?;
        let type_column = if self.eat_words(&["TYPE", "COLUMN"]) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let language_term = if self.eat_word("LANGUAGE") {
            Some(self.parse_language_term()?)
        } else {
            None
        };
        let statistical_semantics = self.eat_word("STATISTICAL_SEMANTICS");
        Ok(FullTextIndexColumn {
            name,
            type_column,
            language_term,
            statistical_semantics,
            span: self.span_from(start),
        })
    }

    fn parse_language_term(&mut self) -> Result<IdentifierOrValueExpression, ParseError> {
        if self.check_literal() {
            return Ok(IdentifierOrValueExpression::Value(self.parse_literal()?));
        }
        Ok(IdentifierOrValueExpression::Identifier(self.parse_identifier()?))
    }

    /// `ALTER FULLTEXT INDEX ON t action`
    fn parse_alter_full_text_index_statement(
        &mut self,
        start: Span,
    ) -> Result<AlterFullTextIndexStatement, ParseError> {
        self.expect_keyword(Keyword::On)?;
        let on_name = self.parse_schema_object_name()?;
        let mut columns = Vec::new();
        let mut options = Vec::new();
        let action_kind = if self.eat_word("ENABLE") {
            AlterFullTextIndexActionKind::Enable
        } else if self.eat_word("DISABLE") {
            AlterFullTextIndexActionKind::Disable
        } else if self.eat_keyword(Keyword::Set) {
            options.push(self.parse_general_option::<FullTextIndexOption>("fulltext index")?);
            AlterFullTextIndexActionKind::Set
        } else if self.check_keyword(Keyword::Add) || self.check_keyword(Keyword::Drop) {
            let is_add = self.eat_keyword(Keyword::Add);
            if !is_add {
                self.advance();
            }
            columns = self.parse_parenthesized_list(Self::parse_full_text_index_column)?;
            options = self.parse_with_bare_option_list(|p| {
                p.parse_general_option::<FullTextIndexOption>("fulltext index")
            })?;
            if is_add {
                AlterFullTextIndexActionKind::AddColumns
            } else {
                AlterFullTextIndexActionKind::DropColumns
            }
        } else if self.eat_word("START") {
            let kind = if self.eat_keyword(Keyword::Full) {
                AlterFullTextIndexActionKind::StartFullPopulation
            } else if self.eat_word("INCREMENTAL") {
                AlterFullTextIndexActionKind::StartIncrementalPopulation
            } else {
                self.expect_keyword(Keyword::Update)?;
                AlterFullTextIndexActionKind::StartUpdatePopulation
            };
            self.expect_word("POPULATION")?;
            kind
        } else if self.eat_words(&["STOP", "POPULATION"]) {
            AlterFullTextIndexActionKind::StopPopulation
        } else if self.eat_words(&["PAUSE", "POPULATION"]) {
            AlterFullTextIndexActionKind::PausePopulation
        } else if self.eat_words(&["RESUME", "POPULATION"]) {
            AlterFullTextIndexActionKind::ResumePopulation
        } else {
            return Err(self.unexpected(&[
                "ENABLE", "DISABLE", "SET", "ADD", "DROP", "START", "STOP", "PAUSE", "RESUME",
            ]));
        };
        Ok(AlterFullTextIndexStatement {
            on_name,
            action_kind,
            columns,
            options,
            span: self.span_from(start),
        })
    }

    // --- Event sessions ---

    /// `{CREATE | ALTER} EVENT SESSION s ON {SERVER | DATABASE}
    /// [ADD EVENT … | ADD TARGET … | DROP {EVENT | TARGET} …], …
    /// [WITH (…)] [STATE = START | STOP]`
    fn parse_event_session_statement(
        &mut self,
        start: Span,
        action: DdlAction,
    ) -> Result<EventSessionStatement, ParseError> {
        let name = self.parse_identifier()?;
        self.expect_keyword(Keyword::On)?;
        let session_scope = if self.eat_keyword(Keyword::Database) {
            EventSessionScope::Database
        } else {
            self.expect_word("SERVER")?;
            EventSessionScope::Server
        };
        let mut elements = Vec::new();
        while self.check_event_session_element() {
            elements.push(self.parse_event_session_element()?);
            self.eat(&TokenKind::Comma);
        }
        let options = self.parse_with_option_list(|p| {
            p.parse_general_option::<EventSessionOption>("event session")
        })?;
        let state = if self.eat_word("STATE") {
            self.expect(&TokenKind::Eq)?;
            if self.eat_word("START") {
                Some(EventSessionState::Start)
            } else {
                self.expect_word("STOP")?;
                Some(EventSessionState::Stop)
            }
        } else {
            None
        };
        Ok(EventSessionStatement {
            action,
            name,
            session_scope,
            elements,
            options,
            state,
            span: self.span_from(start),
        })
    }

    /// `ADD` or `DROP` followed by `EVENT` or `TARGET`; elements may or may
    /// not be separated by commas.
    fn check_event_session_element(&mut self) -> bool {
        (self.check_keyword(Keyword::Add) || self.check_keyword(Keyword::Drop))
            && (self.peek_word(1, "EVENT") || self.peek_word(1, "TARGET"))
    }

    fn parse_event_session_element(&mut self) -> Result<EventSessionElement, ParseError> {
        let start = self.current.span;
        if self.eat_keyword(Keyword::Drop) {
            let is_target = if self.eat_word("TARGET") {
                true
            } else {
                self.expect_word("EVENT")?;
                false
            };
            let object_name = self.parse_event_object_name()?;
            return Ok(EventSessionElement::Drop(DropEventSessionElement {
                is_target,
                object_name,
                span: self.span_from(start),
            }));
        }
        self.expect_keyword(Keyword::Add)?;
        if self.eat_word("TARGET") {
            let object_name = self.parse_event_object_name()?;
            let mut set_parameters = Vec::new();
            if self.eat(&TokenKind::LeftParen) {
                self.expect_keyword(Keyword::Set)?;
                set_parameters = self.parse_comma_separated(Self::parse_event_set_parameter)?;
                self.expect(&TokenKind::RightParen)?;
            }
            return Ok(EventSessionElement::AddTarget(TargetDeclaration {
                object_name,
                set_parameters,
                span: self.span_from(start),
            }));
        }
        self.expect_word("EVENT")?;
        let object_name = self.parse_event_object_name()?;
        let mut set_parameters = Vec::new();
        let mut actions = Vec::new();
        let mut predicate = None;
        if self.eat(&TokenKind::LeftParen) {
            if self.eat_keyword(Keyword::Set) {
                set_parameters = self.parse_comma_separated(Self::parse_event_set_parameter)?;
            }
            if self.eat_word("ACTION") {
                actions = self.parse_parenthesized_list(Self::parse_event_object_name)?;
            }
            if self.eat_keyword(Keyword::Where) {
                predicate = Some(self.parse_boolean_expression()?);
            }
            self.expect(&TokenKind::RightParen)?;
        }
        Ok(EventSessionElement::AddEvent(EventDeclaration {
            object_name,
            set_parameters,
            actions,
            predicate,
            span: self.span_from(start),
        }))
    }

    /// `[server.]package.object`
    fn parse_event_object_name(&mut self) -> Result<MultiPartIdentifier, ParseError> {
        let first = self.parse_name()?;
        let start = first.span;
        let mut identifiers = vec![first];
        while self.eat(&TokenKind::Dot) {
            identifiers.push(self.parse_name()?);
        }
        Ok(MultiPartIdentifier {
            identifiers,
            span: self.span_from(start),
        })
    }

    /// `field = value`
    fn parse_event_set_parameter(&mut self) -> Result<EventDeclarationSetParameter, ParseError> {
        let start = self.current.span;
        let event_field = self.parse_name()?;
        self.expect(&TokenKind::Eq)?;
        let event_value = if self.check(&TokenKind::LeftParen) {
            self.advance();
            let value = self.parse_option_literal()?;
            self.expect(&TokenKind::RightParen)?;
            value
        } else {
            self.parse_option_literal()?
        };
        Ok(EventDeclarationSetParameter {
            event_field,
            event_value: OptionValue::Literal(event_value),
            span: self.span_from(start),
        })
    }

    // --- Resource governor ---

    /// `{CREATE | ALTER} RESOURCE POOL p [WITH (…)]`
    fn parse_resource_pool_statement(
        &mut self,
        start: Span,
        action: DdlAction,
    ) -> Result<ResourcePoolStatement, ParseError> {
        let name = self.parse_identifier_or_default()?;
        let resource_pool_parameters =
            self.parse_with_option_list(Self::parse_resource_pool_option)?;
        Ok(ResourcePoolStatement {
            action,
            name,
            resource_pool_parameters,
            span: self.span_from(start),
        })
    }

    /// Pools and groups may be named `default`.
    fn parse_identifier_or_default(&mut self) -> Result<Identifier, ParseError> {
        if self.check_keyword(Keyword::Default) {
            let span = self.current.span;
            self.advance();
            return Ok(Identifier::new(self.text(span), QuoteType::None, span));
        }
        self.parse_identifier()
    }

    fn parse_resource_pool_option(&mut self) -> Result<ResourcePoolOption, ParseError> {
        let start = self.current.span;
        let (option_kind, _) = self.parse_option_key::<ResourcePoolOptionKind>("resource pool")?;
        if option_kind != ResourcePoolOptionKind::Affinity {
            let value = self.parse_option_value(option_kind.as_str(), option_kind.value_shape())?;
            return Ok(ResourcePoolOption::General(GeneralResourcePoolOption {
                option_kind,
                value,
                span: self.span_from(start),
            }));
        }
        let Some(affinity_type) =
            self.current.word().and_then(ResourcePoolAffinityType::from_word)
        else {
            return Err(self.unexpected(ResourcePoolAffinityType::WORDS));
        };
        self.advance();
        self.expect(&TokenKind::Eq)?;
        let is_auto = self.eat_word("AUTO");
        let pool_affinity_ranges = if is_auto {
            Vec::new()
        } else {
            self.parse_parenthesized_list(Self::parse_literal_range)?
        };
        Ok(ResourcePoolOption::Affinity(ResourcePoolAffinityOption {
            option_kind,
            affinity_type,
            is_auto,
            pool_affinity_ranges,
            span: self.span_from(start),
        }))
    }

    /// `{CREATE | ALTER} WORKLOAD GROUP g [WITH (…)] [USING pool
    /// [, EXTERNAL pool]]`
    fn parse_workload_group_statement(
        &mut self,
        start: Span,
        action: DdlAction,
    ) -> Result<WorkloadGroupStatement, ParseError> {
        let name = self.parse_identifier_or_default()?;
        let workload_group_parameters = self.parse_with_option_list(|p| {
            p.parse_general_option::<WorkloadGroupParameter>("workload group")
        })?;
        let mut pool_name = None;
        let mut external_pool_name = None;
        if self.eat_word("USING") {
            if !self.check_keyword(Keyword::External) {
                pool_name = Some(self.parse_identifier_or_default()?);
                self.eat(&TokenKind::Comma);
            }
            if self.eat_keyword(Keyword::External) {
                external_pool_name = Some(self.parse_identifier_or_default()?);
            }
        }
        Ok(WorkloadGroupStatement {
            action,
            name,
            workload_group_parameters,
            pool_name,
            external_pool_name,
            span: self.span_from(start),
        })
    }

    /// `CREATE WORKLOAD CLASSIFIER c WITH (WORKLOAD_GROUP = 'g', …)`
    fn parse_create_workload_classifier_statement(
        &mut self,
        start: Span,
    ) -> Result<CreateWorkloadClassifierStatement, ParseError> {
        let classifier_name = self.parse_identifier()?;
        self.expect_keyword(Keyword::With)?;
        let options = self.parse_option_list(|p| {
            p.parse_general_option::<WorkloadClassifierOption>("workload classifier")
        })?;
        Ok(CreateWorkloadClassifierStatement {
            classifier_name,
            options,
            span: self.span_from(start),
        })
    }

    /// `ALTER RESOURCE GOVERNOR {RECONFIGURE | DISABLE | RESET STATISTICS |
    /// WITH (CLASSIFIER_FUNCTION = fn | NULL)}`
    fn parse_alter_resource_governor_statement(
        &mut self,
        start: Span,
    ) -> Result<AlterResourceGovernorStatement, ParseError> {
        let command_start = self.current.span;
        let mut classifier_function = None;
        if self.eat_keyword(Keyword::With) {
            self.expect(&TokenKind::LeftParen)?;
            let command = self.parse_name()?;
            self.expect(&TokenKind::Eq)?;
            if !self.eat_keyword(Keyword::Null) {
                classifier_function = Some(self.parse_schema_object_name()?);
            }
            self.expect(&TokenKind::RightParen)?;
            return Ok(AlterResourceGovernorStatement {
                command,
                classifier_function,
                span: self.span_from(start),
            });
        }
        if !(self.eat_keyword(Keyword::Reconfigure)
            || self.eat_word("DISABLE")
            || self.eat_words(&["RESET", "STATISTICS"]))
        {
            return Err(self.unexpected(&["RECONFIGURE", "DISABLE", "RESET STATISTICS", "WITH"]));
        }
        let command_span = self.span_from(command_start);
        let command = Identifier::new(self.text(command_span), QuoteType::None, command_span);
        Ok(AlterResourceGovernorStatement {
            command,
            classifier_function,
            span: self.span_from(start),
        })
    }

    // --- External objects ---

    /// `EXTERNAL {DATA SOURCE | FILE FORMAT | TABLE | LANGUAGE | LIBRARY} …`
    fn parse_external_object(
        &mut self,
        start: Span,
        action: DdlAction,
    ) -> Option<Result<Statement, ParseError>> {
        let is_create = action == DdlAction::Create;
        if self.peek_word(1, "DATA") && self.peek_word(2, "SOURCE") {
            self.eat_words(&["EXTERNAL", "DATA", "SOURCE"]);
            return Some(
                self.parse_external_data_source_statement(start, action)
                    .map(|s| Statement::ExternalDataSource(Box::new(s))),
            );
        }
        if is_create && self.peek_keyword(1, Keyword::File) && self.peek_word(2, "FORMAT") {
            self.eat_words(&["EXTERNAL", "FILE", "FORMAT"]);
            return Some(
                self.parse_create_external_file_format_statement(start)
                    .map(|s| Statement::CreateExternalFileFormat(Box::new(s))),
            );
        }
        if is_create && self.peek_keyword(1, Keyword::Table) {
            self.advance();
            self.advance();
            return Some(
                self.parse_create_external_table_statement(start)
                    .map(|s| Statement::CreateExternalTable(Box::new(s))),
            );
        }
        if self.peek_word(1, "LANGUAGE") {
            self.advance();
            self.advance();
            return Some(
                self.parse_external_language_statement(start, action)
                    .map(|s| Statement::ExternalLanguage(Box::new(s))),
            );
        }
        if self.peek_word(1, "LIBRARY") {
            self.advance();
            self.advance();
            return Some(
                self.parse_external_library_statement(start, action)
                    .map(|s| Statement::ExternalLibrary(Box::new(s))),
            );
        }
        None
    }

    /// `CREATE EXTERNAL DATA SOURCE s WITH (…)` or
    /// `ALTER EXTERNAL DATA SOURCE s SET option, …`
    fn parse_external_data_source_statement(
        &mut self,
        start: Span,
        action: DdlAction,
    ) -> Result<ExternalDataSourceStatement, ParseError> {
        let name = self.parse_identifier()?;
        let external_data_source_options = if action == DdlAction::Create {
            self.expect_keyword(Keyword::With)?;
            self.parse_option_list(|p| {
                p.parse_general_option::<ExternalDataSourceOption>("external data source")
            })?
        } else {
            self.expect_keyword(Keyword::Set)?;
            self.parse_comma_separated(|p| {
                p.parse_general_option::<ExternalDataSourceOption>("external data source")
            })?
        };
        Ok(ExternalDataSourceStatement {
            action,
            name,
            external_data_source_options,
            span: self.span_from(start),
        })
    }

    /// `CREATE EXTERNAL FILE FORMAT f WITH (FORMAT_TYPE = …,
    /// FORMAT_OPTIONS (…), …)`
    fn parse_create_external_file_format_statement(
        &mut self,
        start: Span,
    ) -> Result<CreateExternalFileFormatStatement, ParseError> {
        let name = self.parse_identifier()?;
        self.expect_keyword(Keyword::With)?;
        let external_file_format_options = self.parse_option_list(|p| {
            let start = p.current.span;
            let (option_kind, _) =
                p.parse_option_key::<ExternalFileFormatOptionKind>("external file format")?;
            if option_kind != ExternalFileFormatOptionKind::FormatOptions {
                let value = p.parse_option_value(option_kind.as_str(), option_kind.value_shape())?;
                return Ok(ExternalFileFormatOption::General(GeneralExternalFileFormatOption {
                    option_kind,
                    value,
                    span: p.span_from(start),
                }));
            }
            let suboptions = p.parse_option_list(|p| {
                p.parse_general_option::<GeneralExternalFileFormatOption>("FORMAT_OPTIONS")
            })?;
            Ok(ExternalFileFormatOption::Container(ExternalFileFormatContainerOption {
                option_kind,
                suboptions,
                span: p.span_from(start),
            }))
        })?;
        Ok(CreateExternalFileFormatStatement {
            name,
            external_file_format_options,
            span: self.span_from(start),
        })
    }

    /// `CREATE EXTERNAL TABLE t [(columns)] WITH (…) [AS SELECT …]`
    fn parse_create_external_table_statement(
        &mut self,
        start: Span,
    ) -> Result<CreateExternalTableStatement, ParseError> {
        let schema_object_name = self.parse_schema_object_name()?;
        let definition = if self.check(&TokenKind::LeftParen) {
            Some(self.parse_table_definition()?)
        } else {
            None
        };
        self.expect_keyword(Keyword::With)?;
        let external_table_options = self.parse_option_list(|p| {
            p.parse_general_option::<ExternalTableOption>("external table")
        })?;
        let select_statement = if self.eat_keyword(Keyword::As) {
            Some(self.parse_select_statement(None)?)
        } else {
            None
        };
        Ok(CreateExternalTableStatement {
            schema_object_name,
            definition,
            external_table_options,
            select_statement,
            span: self.span_from(start),
        })
    }

    /// `{CREATE | ALTER} EXTERNAL LANGUAGE l [AUTHORIZATION o]
    /// {FROM | SET | ADD | REMOVE} (file), …`
    fn parse_external_language_statement(
        &mut self,
        start: Span,
        action: DdlAction,
    ) -> Result<ExternalLanguageStatement, ParseError> {
        let name = self.parse_identifier()?;
        let owner = self.parse_external_owner()?;
        let alter_verb = if action == DdlAction::Create {
            self.expect_keyword(Keyword::From)?;
            None
        } else if self.check_keyword(Keyword::Set)
            || self.check_keyword(Keyword::Add)
            || self.check_word("REMOVE")
        {
            Some(self.parse_name()?)
        } else {
            return Err(self.unexpected(&["SET", "ADD", "REMOVE"]));
        };
        let files = self.parse_comma_separated(Self::parse_external_language_file)?;
        Ok(ExternalLanguageStatement {
            action,
            name,
            owner,
            alter_verb,
            files,
            span: self.span_from(start),
        })
    }

    /// `{CREATE | ALTER} EXTERNAL LIBRARY lib [AUTHORIZATION o]
    /// {FROM | SET} (file), … WITH (LANGUAGE = 'R')`
    fn parse_external_library_statement(
        &mut self,
        start: Span,
        action: DdlAction,
    ) -> Result<ExternalLibraryStatement, ParseError> {
        let name = self.parse_identifier()?;
        let owner = self.parse_external_owner()?;
        if action == DdlAction::Create {
            self.expect_keyword(Keyword::From)?;
        } else {
            self.expect_keyword(Keyword::Set)?;
        }
        let files = self.parse_comma_separated(Self::parse_external_language_file)?;
        let mut language = None;
        if self.eat_keyword(Keyword::With) {
            self.expect(&TokenKind::LeftParen)?;
            self.expect_word("LANGUAGE")?;
            self.expect(&TokenKind::Eq)?;
            language = Some(self.parse_string_literal()?);
            self.expect(&TokenKind::RightParen)?;
        }
        Ok(ExternalLibraryStatement {
            action,
            name,
            owner,
            files,
            language,
            span: self.span_from(start),
        })
    }

    fn parse_external_owner(&mut self) -> Result<Option<Identifier>, ParseError> {
        if self.eat_keyword(Keyword::Authorization) {
            return self.parse_name().map(Some);
        }
        Ok(None)
    }

    fn parse_external_language_file(&mut self) -> Result<ExternalLanguageFile, ParseError> {
        let start = self.current.span;
        let options = self.parse_option_list(|p| {
            p.parse_general_option::<ExternalLanguageFileOption>("external language file")
        })?;
        Ok(ExternalLanguageFile {
            options,
            span: self.span_from(start),
        })
    }

    // --- Queues ---

    /// `CREATE QUEUE q [WITH option, …] [ON filegroup | DEFAULT]` or
    /// `ALTER QUEUE q WITH option, …`
    fn parse_queue_statement(
        &mut self,
        start: Span,
        action: DdlAction,
    ) -> Result<QueueStatement, ParseError> {
        let name = self.parse_schema_object_name()?;
        let queue_options = self.parse_with_bare_option_list(Self::parse_queue_option)?;
        let on_file_group = if action == DdlAction::Create && self.eat_keyword(Keyword::On) {
            Some(self.parse_identifier_or_default()?)
        } else {
            None
        };
        Ok(QueueStatement {
            action,
            name,
            queue_options,
            on_file_group,
            span: self.span_from(start),
        })
    }

    fn parse_queue_option(&mut self) -> Result<QueueOption, ParseError> {
        let start = self.current.span;
        let (option_kind, _) = self.parse_option_key::<QueueOptionKind>("queue")?;
        match option_kind {
            QueueOptionKind::Activation => {
                let options = self.parse_option_list(Self::parse_queue_activation_sub_option)?;
                Ok(QueueOption::Activation(QueueActivationOption {
                    option_kind,
                    options,
                    span: self.span_from(start),
                }))
            }
            QueueOptionKind::PoisonMessageHandling => {
                self.expect(&TokenKind::LeftParen)?;
                self.expect_word("STATUS")?;
                self.expect(&TokenKind::Eq)?;
                let option_state = self.parse_option_state("STATUS")?;
                self.expect(&TokenKind::RightParen)?;
                Ok(QueueOption::PoisonMessage(QueueStateOption {
                    option_kind,
                    option_state,
                    span: self.span_from(start),
                }))
            }
            _ => {
                let value =
                    self.parse_option_value(option_kind.as_str(), option_kind.value_shape())?;
                Ok(QueueOption::General(GeneralQueueOption {
                    option_kind,
                    value,
                    span: self.span_from(start),
                }))
            }
        }
    }

    /// `STATUS = …`, `PROCEDURE_NAME = …`, `MAX_QUEUE_READERS = …`,
    /// `EXECUTE AS {SELF | OWNER | 'user'}` or `DROP`.
    fn parse_queue_activation_sub_option(
        &mut self,
    ) -> Result<QueueActivationSubOption, ParseError> {
        let start = self.current.span;
        let (option_kind, _) = self.parse_option_key::<QueueActivationOptionKind>("ACTIVATION")?;
        let value = if option_kind != QueueActivationOptionKind::ExecuteAs {
            self.parse_option_value(option_kind.as_str(), option_kind.value_shape())?
        } else if self.check_string() {
            Some(OptionValue::Literal(self.parse_string_literal()?))
        } else {
            let principal = self.parse_enumerated_value("EXECUTE AS", &["SELF", "OWNER"])?;
            Some(OptionValue::Keyword(principal))
        };
        Ok(QueueActivationSubOption {
            option_kind,
            value,
            span: self.span_from(start),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::dialect::SqlVersion;
    use crate::parser::{ParseOptions, Parser};

    fn statement(sql: &str) -> Statement {
        let mut parser = Parser::new(sql, &ParseOptions::default());
        parser.parse_statement().unwrap()
    }

    #[test]
    fn test_create_availability_group() {
        let Statement::CreateAvailabilityGroup(ag) = statement(
            "CREATE AVAILABILITY GROUP ag1 WITH (AUTOMATED_BACKUP_PREFERENCE = SECONDARY) \
             FOR DATABASE Sales, Hr \
             REPLICA ON 'node1' WITH (ENDPOINT_URL = 'TCP://node1:5022', \
                 AVAILABILITY_MODE = SYNCHRONOUS_COMMIT, FAILOVER_MODE = AUTOMATIC, \
                 SECONDARY_ROLE (ALLOW_CONNECTIONS = READ_ONLY, \
                     READ_ONLY_ROUTING_URL = 'TCP://node1:1433')), \
             'node2' WITH (ENDPOINT_URL = 'TCP://node2:5022', \
                 PRIMARY_ROLE (READ_ONLY_ROUTING_LIST = ('node1', 'node2')))",
        ) else {
            panic!("expected CREATE AVAILABILITY GROUP");
        };
        assert_eq!(ag.options.len(), 1);
        assert_eq!(ag.databases.len(), 2);
        assert_eq!(ag.replicas.len(), 2);
        assert!(matches!(
            &ag.replicas[0].options[3],
            AvailabilityReplicaOption::Role(r) if r.options.len() == 2
        ));
        let AvailabilityReplicaOption::Role(primary) = &ag.replicas[1].options[1] else {
            panic!("expected PRIMARY_ROLE");
        };
        assert_eq!(primary.options[0].values.len(), 2);
    }

    #[test]
    fn test_alter_availability_group() {
        assert!(matches!(
            statement("ALTER AVAILABILITY GROUP ag1 ADD DATABASE Sales"),
            Statement::AlterAvailabilityGroup(a)
                if a.action_type == AlterAvailabilityGroupActionType::AddDatabase
        ));
        assert!(matches!(
            statement("ALTER AVAILABILITY GROUP ag1 FORCE_FAILOVER_ALLOW_DATA_LOSS"),
            Statement::AlterAvailabilityGroup(a)
                if a.action_type == AlterAvailabilityGroupActionType::ForceFailoverAllowDataLoss
        ));
        assert!(matches!(
            statement("ALTER AVAILABILITY GROUP ag1 REMOVE REPLICA ON 'node2'"),
            Statement::AlterAvailabilityGroup(a) if a.replicas.len() == 1
        ));
    }

    #[test]
    fn test_full_text_catalog() {
        assert!(matches!(
            statement(
                "CREATE FULLTEXT CATALOG ftc WITH ACCENT_SENSITIVITY = OFF AS DEFAULT \
                 AUTHORIZATION dbo"
            ),
            Statement::CreateFullTextCatalog(c) if c.is_default && c.options.len() == 1
        ));
        assert!(matches!(
            statement("ALTER FULLTEXT CATALOG ftc REBUILD WITH ACCENT_SENSITIVITY = ON"),
            Statement::AlterFullTextCatalog(c) if c.action == AlterFullTextCatalogAction::Rebuild
        ));
    }

    #[test]
    fn test_full_text_index() {
        let Statement::CreateFullTextIndex(index) = statement(
            "CREATE FULLTEXT INDEX ON dbo.Docs (Body TYPE COLUMN Ext LANGUAGE 1033 \
             STATISTICAL_SEMANTICS, Title) KEY INDEX PK_Docs ON (ftc, FILEGROUP fg) \
             WITH (CHANGE_TRACKING = AUTO, STOPLIST = SYSTEM)",
        ) else {
            panic!("expected CREATE FULLTEXT INDEX");
        };
        assert_eq!(index.full_text_index_columns.len(), 2);
        let body = &index.full_text_index_columns[0];
        assert!(body.type_column.is_some());
        assert!(body.statistical_semantics);
        let location = index.catalog_and_file_group.unwrap();
        assert!(location.catalog_name.is_some());
        assert!(!location.file_group_is_first);
        assert_eq!(index.options.len(), 2);

        assert!(matches!(
            statement("ALTER FULLTEXT INDEX ON dbo.Docs START INCREMENTAL POPULATION"),
            Statement::AlterFullTextIndex(a)
                if a.action_kind == AlterFullTextIndexActionKind::StartIncrementalPopulation
        ));
        assert!(matches!(
            statement("ALTER FULLTEXT INDEX ON dbo.Docs ADD (Summary) WITH NO POPULATION"),
            Statement::AlterFullTextIndex(a) if a.columns.len() == 1 && a.options.len() == 1
        ));
    }

    #[test]
    fn test_event_session() {
        let Statement::EventSession(session) = statement(
            "CREATE EVENT SESSION waits ON SERVER \
             ADD EVENT sqlos.wait_info (ACTION (sqlserver.sql_text) \
                 WHERE sqlserver.database_id = 5), \
             ADD TARGET package0.event_file (SET filename = N'waits.xel', max_file_size = 5) \
             WITH (MAX_MEMORY = 4096 KB, STARTUP_STATE = ON)",
        ) else {
            panic!("expected CREATE EVENT SESSION");
        };
        assert_eq!(session.session_scope, EventSessionScope::Server);
        assert_eq!(session.elements.len(), 2);
        assert!(matches!(
            &session.elements[0],
            EventSessionElement::AddEvent(e) if e.actions.len() == 1 && e.predicate.is_some()
        ));
        assert!(matches!(
            &session.elements[1],
            EventSessionElement::AddTarget(t) if t.set_parameters.len() == 2
        ));
        assert_eq!(session.options.len(), 2);

        let Statement::EventSession(session) = statement(
            "CREATE EVENT SESSION s ON SERVER \
             ADD EVENT sqlserver.error_reported \
             ADD TARGET package0.ring_buffer \
             WITH (MAX_MEMORY = 4 MB)",
        ) else {
            panic!("expected CREATE EVENT SESSION");
        };
        assert_eq!(session.elements.len(), 2);
        assert!(matches!(&session.elements[1], EventSessionElement::AddTarget(_)));
        assert_eq!(session.options.len(), 1);

        let Statement::EventSession(session) = statement(
            "ALTER EVENT SESSION s ON SERVER DROP EVENT sqlserver.a DROP TARGET package0.b",
        ) else {
            panic!("expected ALTER EVENT SESSION");
        };
        assert_eq!(session.elements.len(), 2);

        assert!(matches!(
            statement("ALTER EVENT SESSION waits ON SERVER STATE = START"),
            Statement::EventSession(s) if s.state == Some(EventSessionState::Start)
        ));
    }

    #[test]
    fn test_resource_governor() {
        let Statement::ResourcePool(pool) = statement(
            "CREATE RESOURCE POOL reports WITH (MAX_CPU_PERCENT = 30, \
             AFFINITY SCHEDULER = (0 TO 3, 8))",
        ) else {
            panic!("expected CREATE RESOURCE POOL");
        };
        assert!(matches!(
            &pool.resource_pool_parameters[1],
            ResourcePoolOption::Affinity(a) if a.pool_affinity_ranges.len() == 2
        ));

        let Statement::WorkloadGroup(group) = statement(
            "CREATE WORKLOAD GROUP adhoc WITH (IMPORTANCE = LOW, MAX_DOP = 2) USING reports",
        ) else {
            panic!("expected CREATE WORKLOAD GROUP");
        };
        assert_eq!(group.workload_group_parameters.len(), 2);
        assert!(group.pool_name.is_some());

        assert!(matches!(
            statement("ALTER RESOURCE GOVERNOR WITH (CLASSIFIER_FUNCTION = dbo.classify)"),
            Statement::AlterResourceGovernor(g) if g.classifier_function.is_some()
        ));
        assert!(matches!(
            statement("ALTER RESOURCE GOVERNOR RECONFIGURE"),
            Statement::AlterResourceGovernor(g) if g.command.value == "RECONFIGURE"
        ));
    }

    #[test]
    fn test_workload_classifier_is_synapse_only() {
        let sql = "CREATE WORKLOAD CLASSIFIER c WITH (WORKLOAD_GROUP = 'g', MEMBERNAME = 'u')";
        let mut parser = Parser::new(sql, &ParseOptions::default());
        assert!(parser.parse_statement().is_ok());
        assert!(parser.diagnostics().iter().any(|d| d.code.as_str() == "TSQL4001"));

        let options = ParseOptions {
            version: SqlVersion::AzureSynapse,
            ..ParseOptions::default()
        };
        let mut parser = Parser::new(sql, &options);
        assert!(matches!(
            parser.parse_statement().unwrap(),
            Statement::CreateWorkloadClassifier(c) if c.options.len() == 2
        ));
        assert!(parser.diagnostics().is_empty());
    }

    #[test]
    fn test_external_objects() {
        assert!(matches!(
            statement(
                "CREATE EXTERNAL DATA SOURCE lake WITH (TYPE = HADOOP, \
                 LOCATION = 'abfss://data@acct.dfs.core.windows.net', CREDENTIAL = cred)"
            ),
            Statement::ExternalDataSource(s) if s.external_data_source_options.len() == 3
        ));
        let Statement::CreateExternalFileFormat(format) = statement(
            "CREATE EXTERNAL FILE FORMAT csv WITH (FORMAT_TYPE = DELIMITEDTEXT, \
             FORMAT_OPTIONS (FIELD_TERMINATOR = ',', FIRST_ROW = 2))",
        ) else {
            panic!("expected CREATE EXTERNAL FILE FORMAT");
        };
        assert!(matches!(
            &format.external_file_format_options[1],
            ExternalFileFormatOption::Container(c) if c.suboptions.len() == 2
        ));
        let Statement::CreateExternalTable(table) = statement(
            "CREATE EXTERNAL TABLE ext.Sales (Id INT NOT NULL, Amount MONEY) \
             WITH (LOCATION = '/sales/', DATA_SOURCE = lake, FILE_FORMAT = csv, \
             REJECT_TYPE = VALUE, REJECT_VALUE = 0)",
        ) else {
            panic!("expected CREATE EXTERNAL TABLE");
        };
        assert_eq!(table.definition.unwrap().elements.len(), 2);
        assert_eq!(table.external_table_options.len(), 5);
    }

    #[test]
    fn test_external_language_and_library() {
        assert!(matches!(
            statement(
                "CREATE EXTERNAL LANGUAGE Java FROM (CONTENT = N'C:\\java.zip', \
                 FILE_NAME = 'javaextension.dll', PLATFORM = WINDOWS)"
            ),
            Statement::ExternalLanguage(l) if l.files[0].options.len() == 3
        ));
        assert!(matches!(
            statement("ALTER EXTERNAL LANGUAGE Java SET (CONTENT = 'x.zip', FILE_NAME = 'x.dll')"),
            Statement::ExternalLanguage(l) if l.alter_verb.is_some()
        ));
        assert!(matches!(
            statement(
                "CREATE EXTERNAL LIBRARY pkg AUTHORIZATION dbo FROM (CONTENT = 'pkg.zip') \
                 WITH (LANGUAGE = 'R')"
            ),
            Statement::ExternalLibrary(l) if l.owner.is_some() && l.language.is_some()
        ));
    }

    #[test]
    fn test_queues() {
        let Statement::Queue(queue) = statement(
            "CREATE QUEUE dbo.Inbox WITH STATUS = ON, RETENTION = OFF, \
             ACTIVATION (STATUS = ON, PROCEDURE_NAME = dbo.ProcessInbox, \
             MAX_QUEUE_READERS = 4, EXECUTE AS SELF), \
             POISON_MESSAGE_HANDLING (STATUS = OFF) ON [DEFAULT]",
        ) else {
            panic!("expected CREATE QUEUE");
        };
        assert_eq!(queue.queue_options.len(), 4);
        assert!(matches!(
            &queue.queue_options[2],
            QueueOption::Activation(a) if a.options.len() == 4
        ));
        assert!(queue.on_file_group.is_some());

        assert!(matches!(
            statement("ALTER QUEUE dbo.Inbox WITH ACTIVATION (DROP)"),
            Statement::Queue(q) if q.queue_options.len() == 1
        ));
    }
}
