//! Permissions, principals, keys, audits and security policies.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{
    AlterLoginAddDropCredentialStatement, AlterLoginEnableDisableStatement,
    AlterLoginOptionsStatement, AlterMasterKeyOption, AlterMasterKeyStatement,
    AlterRoleStatement, AlterUserStatement, AuditOption, AuditSpecificationPart,
    AuditSpecificationStatement, AuditTarget, AuditTargetKind, AuditTargetOption,
    ColumnEncryptionKeyAlterType, ColumnEncryptionKeyStatement, ColumnEncryptionKeyValue,
    ColumnEncryptionKeyValueParameter, ColumnMasterKeyParameter, ColumnMasterKeyParameterKind,
    CreateColumnMasterKeyStatement, CreateLoginSourceKind, CreateLoginStatement,
    CreateMasterKeyStatement, CreateRoleStatement, CreateUserStatement, CryptoMechanism,
    CryptoMechanismType, CryptographicProviderStatement, DdlAction, DenyStatement,
    GeneralPrincipalOption, GrantStatement, Identifier, Literal, PasswordPrincipalOption,
    Permission, PrincipalOption, PrincipalOptionKind, RevokeStatement, RoleAction,
    SecurityObjectKind, SecurityPolicyOption, SecurityPolicyStatement, SecurityPredicateAction,
    SecurityPredicateActionType, SecurityPredicateOperation, SecurityPredicateType,
    SecurityTargetObject, ServerAuditStatement, SignableElementKind, SignatureStatement,
    Statement, UserLoginOption, UserLoginOptionType,
};
use crate::lexer::{Keyword, Span, TokenKind};

/// Permissions end at the securable or the principal list.
const PERMISSION_STOP: [Keyword; 3] = [Keyword::On, Keyword::To, Keyword::From];

impl Parser<'_> {
    // --- GRANT / REVOKE / DENY ---

    /// `GRANT perm, … [ON securable] TO principal, … [WITH GRANT OPTION]
    /// [AS principal]`
    pub(super) fn parse_grant_statement(&mut self) -> Result<GrantStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Grant)?;
        let permissions = self.parse_permissions()?;
        let security_target_object = self.parse_security_target()?;
        self.expect_keyword(Keyword::To)?;
        let principals = self.parse_principals()?;
        let with_grant_option = self.eat_words(&["WITH", "GRANT", "OPTION"]);
        let as_clause = self.parse_as_principal()?;
        Ok(GrantStatement {
            permissions,
            security_target_object,
            principals,
            with_grant_option,
            as_clause,
            span: self.span_from(start),
        })
    }

    /// `REVOKE [GRANT OPTION FOR] perm, … [ON securable] {TO | FROM}
    /// principal, … [CASCADE] [AS principal]`
    pub(super) fn parse_revoke_statement(&mut self) -> Result<RevokeStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Revoke)?;
        let grant_option_for = self.eat_words(&["GRANT", "OPTION", "FOR"]);
        let permissions = self.parse_permissions()?;
        let security_target_object = self.parse_security_target()?;
        if !self.eat_keyword(Keyword::To) {
            self.expect_keyword(Keyword::From)?;
        }
        let principals = self.parse_principals()?;
        let cascade_option = self.eat_keyword(Keyword::Cascade);
        let as_clause = self.parse_as_principal()?;
        Ok(RevokeStatement {
            grant_option_for,
            permissions,
            security_target_object,
            principals,
            cascade_option,
            as_clause,
            span: self.span_from(start),
        })
    }

    /// `DENY perm, … [ON securable] TO principal, … [CASCADE] [AS principal]`
    pub(super) fn parse_deny_statement(&mut self) -> Result<DenyStatement, ParseError> {
        let start = self.expect_keyword(Keyword::Deny)?;
        let permissions = self.parse_permissions()?;
        let security_target_object = self.parse_security_target()?;
        self.expect_keyword(Keyword::To)?;
        let principals = self.parse_principals()?;
        let cascade_option = self.eat_keyword(Keyword::Cascade);
        let as_clause = self.parse_as_principal()?;
        Ok(DenyStatement {
            permissions,
            security_target_object,
            principals,
            cascade_option,
            as_clause,
            span: self.span_from(start),
        })
    }

    fn parse_permissions(&mut self) -> Result<Vec<Permission>, ParseError> {
        self.parse_comma_separated(|p| {
            let start = p.current.span;
            let mut identifiers = Vec::new();
            while p.current.word().is_some()
                && !PERMISSION_STOP.iter().any(|k| p.check_keyword(*k))
            {
                identifiers.push(p.parse_name()?);
            }
            if identifiers.is_empty() {
                return Err(p.unexpected(&["permission"]));
            }
            let columns = if p.check(&TokenKind::LeftParen) {
                p.parse_identifier_list()?
            } else {
                Vec::new()
            };
            Ok(Permission {
                identifiers,
                columns,
                span: p.span_from(start),
            })
        })
    }

    /// Optional `ON [class ::] securable [(columns)]`.
    fn parse_security_target(&mut self) -> Result<Option<SecurityTargetObject>, ParseError> {
        if !self.eat_keyword(Keyword::On) {
            return Ok(None);
        }
        self.parse_security_target_object().map(Some)
    }

    /// `[class ::] securable [(columns)]`
    fn parse_security_target_object(&mut self) -> Result<SecurityTargetObject, ParseError> {
        let start = self.current.span;
        let object_kind = if self.peek_class_qualifier() {
            let kind = self.eat_multi_word(SecurityObjectKind::from_word);
            self.expect(&TokenKind::DoubleColon)?;
            kind
        } else {
            None
        };
        let object_name = self.parse_multi_part_identifier()?;
        let columns = if self.check(&TokenKind::LeftParen) {
            self.parse_identifier_list()?
        } else {
            Vec::new()
        };
        Ok(SecurityTargetObject {
            object_kind,
            object_name,
            columns,
            span: self.span_from(start),
        })
    }

    /// True when up to three words are followed by `::`.
    fn peek_class_qualifier(&mut self) -> bool {
        for n in 0..4 {
            if self.peek_is(n, &TokenKind::DoubleColon) {
                return n > 0;
            }
            if self.peek_nth(n).word().is_none() {
                return false;
            }
        }
        false
    }

    fn parse_principals(&mut self) -> Result<Vec<Identifier>, ParseError> {
        self.parse_comma_separated(Self::parse_name)
    }

    fn parse_as_principal(&mut self) -> Result<Option<Identifier>, ParseError> {
        if self.eat_keyword(Keyword::As) {
            return self.parse_name().map(Some);
        }
        Ok(None)
    }

    // --- Signatures ---

    /// `{ADD | DROP} [COUNTER] SIGNATURE {TO | FROM} [class ::] module
    /// BY crypto, …`
    pub(super) fn parse_signature_statement(
        &mut self,
        is_drop: bool,
    ) -> Result<SignatureStatement, ParseError> {
        let start = if is_drop {
            self.expect_keyword(Keyword::Drop)?
        } else {
            self.expect_keyword(Keyword::Add)?
        };
        let is_counter = self.eat_word("COUNTER");
        self.expect_word("SIGNATURE")?;
        if is_drop {
            self.expect_keyword(Keyword::From)?;
        } else {
            self.expect_keyword(Keyword::To)?;
        }
        let element_kind = if self.peek_is(1, &TokenKind::DoubleColon) {
            let kind = self.current.word().and_then(SignableElementKind::from_word);
            if kind.is_none() {
                return Err(self.unexpected(SignableElementKind::WORDS));
            }
            self.advance();
            self.advance();
            kind
        } else {
            None
        };
        let element = self.parse_schema_object_name()?;
        self.expect_keyword(Keyword::By)?;
        let cryptos = self.parse_comma_separated(Self::parse_crypto_mechanism)?;
        Ok(SignatureStatement {
            is_drop,
            is_counter,
            element_kind,
            element,
            cryptos,
            span: self.span_from(start),
        })
    }

    /// `CERTIFICATE c [WITH PASSWORD = 'p' | WITH SIGNATURE = 0x…]`,
    /// `ASYMMETRIC KEY k [WITH PASSWORD = 'p']` or `PASSWORD = 'p'`.
    fn parse_crypto_mechanism(&mut self) -> Result<CryptoMechanism, ParseError> {
        let start = self.current.span;
        let Some(crypto_mechanism_type) = self.eat_multi_word(CryptoMechanismType::from_word)
        else {
            return Err(self.unexpected(CryptoMechanismType::WORDS));
        };
        if crypto_mechanism_type == CryptoMechanismType::Password {
            self.expect(&TokenKind::Eq)?;
            let password = self.parse_string_literal()?;
            return Ok(CryptoMechanism {
                crypto_mechanism_type,
                identifier: None,
                password_or_signature: Some(password),
                span: self.span_from(start),
            });
        }
        let identifier = self.parse_identifier()?;
        let password_or_signature = if self.check_keyword(Keyword::With)
            && (self.peek_word(1, "PASSWORD") || self.peek_word(1, "SIGNATURE"))
        {
            self.advance();
            self.advance();
            self.expect(&TokenKind::Eq)?;
            Some(self.parse_literal()?)
        } else {
            None
        };
        Ok(CryptoMechanism {
            crypto_mechanism_type,
            identifier: Some(identifier),
            password_or_signature,
            span: self.span_from(start),
        })
    }

    // --- Object dispatch ---

    /// `CREATE` / `ALTER` forms for principals, keys, audits and policies.
    /// Returns `None` when the object type is not one of them.
    pub(super) fn parse_security_object(
        &mut self,
        start: Span,
        action: DdlAction,
    ) -> Option<Result<Statement, ParseError>> {
        let is_create = action == DdlAction::Create;
        if self.eat_words(&["SERVER", "AUDIT", "SPECIFICATION"]) {
            return Some(
                self.parse_audit_specification_statement(start, action, true)
                    .map(|s| Statement::AuditSpecification(Box::new(s))),
            );
        }
        if self.eat_words(&["SERVER", "AUDIT"]) {
            return Some(
                self.parse_server_audit_statement(start, action)
                    .map(|s| Statement::ServerAudit(Box::new(s))),
            );
        }
        if self.check_word("SERVER") && self.peek_word(1, "ROLE") {
            self.advance();
            self.advance();
            return Some(self.parse_role_statement(start, is_create, true));
        }
        if self.eat_word("ROLE") {
            return Some(self.parse_role_statement(start, is_create, false));
        }
        if self.eat_keyword(Keyword::User) {
            return Some(if is_create {
                self.parse_create_user_statement(start)
                    .map(|s| Statement::CreateUser(Box::new(s)))
            } else {
                self.parse_alter_user_statement(start)
                    .map(|s| Statement::AlterUser(Box::new(s)))
            });
        }
        if self.eat_word("LOGIN") {
            return Some(if is_create {
                self.parse_create_login_statement(start)
                    .map(|s| Statement::CreateLogin(Box::new(s)))
            } else {
                self.parse_alter_login_statement(start)
            });
        }
        if self.eat_words(&["MASTER", "KEY"]) {
            return Some(if is_create {
                self.parse_create_master_key_statement(start)
                    .map(|s| Statement::CreateMasterKey(Box::new(s)))
            } else {
                self.parse_alter_master_key_statement(start)
                    .map(|s| Statement::AlterMasterKey(Box::new(s)))
            });
        }
        if is_create && self.eat_words(&["COLUMN", "MASTER", "KEY"]) {
            return Some(
                self.parse_create_column_master_key_statement(start)
                    .map(|s| Statement::CreateColumnMasterKey(Box::new(s))),
            );
        }
        if self.eat_words(&["COLUMN", "ENCRYPTION", "KEY"]) {
            return Some(
                self.parse_column_encryption_key_statement(start, action)
                    .map(|s| Statement::ColumnEncryptionKey(Box::new(s))),
            );
        }
        if self.eat_words(&["CRYPTOGRAPHIC", "PROVIDER"]) {
            return Some(
                self.parse_cryptographic_provider_statement(start, action)
                    .map(|s| Statement::CryptographicProvider(Box::new(s))),
            );
        }
        if self.eat_words(&["SECURITY", "POLICY"]) {
            return Some(
                self.parse_security_policy_statement(start, action)
                    .map(|s| Statement::SecurityPolicy(Box::new(s))),
            );
        }
        None
    }

    // --- Roles, users and logins ---

    /// `CREATE [SERVER] ROLE r [AUTHORIZATION owner]` or
    /// `ALTER [SERVER] ROLE r {ADD | DROP} MEMBER m | WITH NAME = new`.
    fn parse_role_statement(
        &mut self,
        start: Span,
        is_create: bool,
        is_server: bool,
    ) -> Result<Statement, ParseError> {
        let name = self.parse_identifier()?;
        if is_create {
            let owner = if self.eat_keyword(Keyword::Authorization) {
                Some(self.parse_name()?)
            } else {
                None
            };
            return Ok(Statement::CreateRole(Box::new(CreateRoleStatement {
                is_server,
                name,
                owner,
                span: self.span_from(start),
            })));
        }
        let action = if self.eat_keyword(Keyword::Add) {
            self.expect_word("MEMBER")?;
            RoleAction::AddMember
        } else if self.eat_keyword(Keyword::Drop) {
            self.expect_word("MEMBER")?;
            RoleAction::DropMember
        } else if self.eat_keyword(Keyword::With) {
            self.expect_word("NAME")?;
            self.expect(&TokenKind::Eq)?;
            RoleAction::Rename
        } else {
            return Err(self.unexpected(&["ADD MEMBER", "DROP MEMBER", "WITH NAME"]));
        };
        let target = self.parse_name()?;
        Ok(Statement::AlterRole(Box::new(AlterRoleStatement {
            is_server,
            name,
            action,
            target,
            span: self.span_from(start),
        })))
    }

    /// `CREATE USER u [{FOR | FROM} LOGIN l | … | WITHOUT LOGIN]
    /// [WITH option, …]`
    fn parse_create_user_statement(
        &mut self,
        start: Span,
    ) -> Result<CreateUserStatement, ParseError> {
        let name = self.parse_identifier()?;
        let login_start = self.current.span;
        let user_login_option = if self.eat_words(&["WITHOUT", "LOGIN"]) {
            Some(UserLoginOption {
                user_login_option_type: UserLoginOptionType::WithoutLogin,
                identifier: None,
                span: self.span_from(login_start),
            })
        } else if self.eat_keyword(Keyword::For) || self.eat_keyword(Keyword::From) {
            let user_login_option_type = if self.eat_word("LOGIN") {
                UserLoginOptionType::Login
            } else if self.eat_word("CERTIFICATE") {
                UserLoginOptionType::Certificate
            } else if self.eat_words(&["ASYMMETRIC", "KEY"]) {
                UserLoginOptionType::AsymmetricKey
            } else if self.eat_words(&["EXTERNAL", "PROVIDER"]) {
                UserLoginOptionType::External
            } else {
                return Err(self.unexpected(&[
                    "LOGIN",
                    "CERTIFICATE",
                    "ASYMMETRIC KEY",
                    "EXTERNAL PROVIDER",
                ]));
            };
            let identifier = if user_login_option_type == UserLoginOptionType::External {
                None
            } else {
                Some(self.parse_identifier()?)
            };
            Some(UserLoginOption {
                user_login_option_type,
                identifier,
                span: self.span_from(login_start),
            })
        } else {
            None
        };
        let user_options = self.parse_with_bare_option_list(Self::parse_principal_option)?;
        Ok(CreateUserStatement {
            name,
            user_login_option,
            user_options,
            span: self.span_from(start),
        })
    }

    fn parse_alter_user_statement(
        &mut self,
        start: Span,
    ) -> Result<AlterUserStatement, ParseError> {
        let name = self.parse_identifier()?;
        self.expect_keyword(Keyword::With)?;
        let user_options = self.parse_comma_separated(Self::parse_principal_option)?;
        Ok(AlterUserStatement {
            name,
            user_options,
            span: self.span_from(start),
        })
    }

    /// `CREATE LOGIN l {WITH PASSWORD = … [, option …] | FROM WINDOWS
    /// [WITH …] | FROM EXTERNAL PROVIDER | FROM CERTIFICATE c |
    /// FROM ASYMMETRIC KEY k}`
    fn parse_create_login_statement(
        &mut self,
        start: Span,
    ) -> Result<CreateLoginStatement, ParseError> {
        let name = self.parse_identifier()?;
        let mut source_name = None;
        let source_kind = if self.eat_keyword(Keyword::From) {
            if self.eat_word("WINDOWS") {
                CreateLoginSourceKind::Windows
            } else if self.eat_words(&["EXTERNAL", "PROVIDER"]) {
                CreateLoginSourceKind::ExternalProvider
            } else if self.eat_word("CERTIFICATE") {
                source_name = Some(self.parse_identifier()?);
                CreateLoginSourceKind::Certificate
            } else if self.eat_words(&["ASYMMETRIC", "KEY"]) {
                source_name = Some(self.parse_identifier()?);
                CreateLoginSourceKind::AsymmetricKey
            } else {
                return Err(self.unexpected(&[
                    "WINDOWS",
                    "EXTERNAL PROVIDER",
                    "CERTIFICATE",
                    "ASYMMETRIC KEY",
                ]));
            }
        } else {
            if !(self.check_keyword(Keyword::With) && self.peek_word(1, "PASSWORD")) {
                return Err(self.unexpected(&["WITH PASSWORD", "FROM"]));
            }
            CreateLoginSourceKind::Password
        };
        let options = if self.eat_keyword(Keyword::With) {
            self.parse_comma_separated(Self::parse_principal_option)?
        } else {
            Vec::new()
        };
        Ok(CreateLoginStatement {
            name,
            source_kind,
            source_name,
            options,
            span: self.span_from(start),
        })
    }

    /// `ALTER LOGIN l {ENABLE | DISABLE | WITH option, … |
    /// {ADD | DROP} CREDENTIAL c}`
    fn parse_alter_login_statement(&mut self, start: Span) -> Result<Statement, ParseError> {
        let name = self.parse_identifier()?;
        if self.check_word("ENABLE") || self.check_word("DISABLE") {
            let is_enable = self.eat_word("ENABLE");
            if !is_enable {
                self.advance();
            }
            return Ok(Statement::AlterLoginEnableDisable(Box::new(
                AlterLoginEnableDisableStatement {
                    name,
                    is_enable,
                    span: self.span_from(start),
                },
            )));
        }
        if self.check_keyword(Keyword::Add) || self.check_keyword(Keyword::Drop) {
            let is_add = self.eat_keyword(Keyword::Add);
            if !is_add {
                self.advance();
            }
            self.expect_word("CREDENTIAL")?;
            let credential_name = self.parse_identifier()?;
            return Ok(Statement::AlterLoginAddDropCredential(Box::new(
                AlterLoginAddDropCredentialStatement {
                    name,
                    is_add,
                    credential_name,
                    span: self.span_from(start),
                },
            )));
        }
        self.expect_keyword(Keyword::With)?;
        let options = self.parse_comma_separated(Self::parse_principal_option)?;
        Ok(Statement::AlterLoginOptions(Box::new(AlterLoginOptionsStatement {
            name,
            options,
            span: self.span_from(start),
        })))
    }

    /// One login or user option; `PASSWORD` takes `HASHED` and
    /// `MUST_CHANGE` modifiers.
    fn parse_principal_option(&mut self) -> Result<PrincipalOption, ParseError> {
        let start = self.current.span;
        let (option_kind, _) = self.parse_option_key::<PrincipalOptionKind>("principal")?;
        if option_kind == PrincipalOptionKind::Password {
            self.expect(&TokenKind::Eq)?;
            let password = self.parse_literal()?;
            let mut hashed = false;
            let mut must_change = false;
            loop {
                if self.eat_word("HASHED") {
                    hashed = true;
                } else if self.eat_word("MUST_CHANGE") {
                    must_change = true;
                } else {
                    break;
                }
            }
            return Ok(PrincipalOption::Password(PasswordPrincipalOption {
                option_kind,
                password,
                hashed,
                must_change,
                span: self.span_from(start),
            }));
        }
        let value = self.parse_option_value(option_kind.as_str(), option_kind.value_shape())?;
        Ok(PrincipalOption::General(GeneralPrincipalOption {
            option_kind,
            value,
            span: self.span_from(start),
        }))
    }

    // --- Keys ---

    /// `CREATE MASTER KEY [ENCRYPTION BY PASSWORD = 'p']`
    fn parse_create_master_key_statement(
        &mut self,
        start: Span,
    ) -> Result<CreateMasterKeyStatement, ParseError> {
        let password = if self.eat_words(&["ENCRYPTION", "BY", "PASSWORD"]) {
            self.expect(&TokenKind::Eq)?;
            Some(self.parse_string_literal()?)
        } else {
            None
        };
        Ok(CreateMasterKeyStatement {
            password,
            span: self.span_from(start),
        })
    }

    /// `ALTER MASTER KEY [FORCE] REGENERATE WITH ENCRYPTION BY PASSWORD = 'p'`
    /// or `{ADD | DROP} ENCRYPTION BY {SERVICE MASTER KEY | PASSWORD = 'p'}`.
    fn parse_alter_master_key_statement(
        &mut self,
        start: Span,
    ) -> Result<AlterMasterKeyStatement, ParseError> {
        let (option, password) = if self.check_word("FORCE") || self.check_word("REGENERATE") {
            let force = self.eat_word("FORCE");
            self.expect_word("REGENERATE")?;
            self.expect_keyword(Keyword::With)?;
            let password = self.parse_encryption_by_password()?;
            let option = if force {
                AlterMasterKeyOption::ForceRegenerate
            } else {
                AlterMasterKeyOption::Regenerate
            };
            (option, Some(password))
        } else {
            let is_add = if self.eat_keyword(Keyword::Add) {
                true
            } else {
                self.expect_keyword(Keyword::Drop)?;
                false
            };
            self.expect_word("ENCRYPTION")?;
            self.expect_keyword(Keyword::By)?;
            if self.eat_words(&["SERVICE", "MASTER", "KEY"]) {
                let option = if is_add {
                    AlterMasterKeyOption::AddEncryptionByServiceMasterKey
                } else {
                    AlterMasterKeyOption::DropEncryptionByServiceMasterKey
                };
                (option, None)
            } else {
                self.expect_word("PASSWORD")?;
                self.expect(&TokenKind::Eq)?;
                let password = self.parse_string_literal()?;
                let option = if is_add {
                    AlterMasterKeyOption::AddEncryptionByPassword
                } else {
                    AlterMasterKeyOption::DropEncryptionByPassword
                };
                (option, Some(password))
            }
        };
        Ok(AlterMasterKeyStatement {
            option,
            password,
            span: self.span_from(start),
        })
    }

    fn parse_encryption_by_password(&mut self) -> Result<Literal, ParseError> {
        self.expect_word("ENCRYPTION")?;
        self.expect_keyword(Keyword::By)?;
        self.expect_word("PASSWORD")?;
        self.expect(&TokenKind::Eq)?;
        self.parse_string_literal()
    }

    /// `CREATE COLUMN MASTER KEY k WITH (KEY_STORE_PROVIDER_NAME = …,
    /// KEY_PATH = … [, ENCLAVE_COMPUTATIONS (SIGNATURE = 0x…)])`
    fn parse_create_column_master_key_statement(
        &mut self,
        start: Span,
    ) -> Result<CreateColumnMasterKeyStatement, ParseError> {
        let name = self.parse_identifier()?;
        self.expect_keyword(Keyword::With)?;
        let parameters = self.parse_option_list(|p| {
            let start = p.current.span;
            let (option_kind, _) =
                p.parse_option_key::<ColumnMasterKeyParameterKind>("column master key")?;
            let value = if option_kind == ColumnMasterKeyParameterKind::EnclaveComputations {
                p.expect(&TokenKind::LeftParen)?;
                p.expect_word("SIGNATURE")?;
                p.expect(&TokenKind::Eq)?;
                let signature = p.parse_literal()?;
                p.expect(&TokenKind::RightParen)?;
                signature
            } else {
                p.expect(&TokenKind::Eq)?;
                p.parse_string_literal()?
            };
            Ok(ColumnMasterKeyParameter {
                option_kind,
                value,
                span: p.span_from(start),
            })
        })?;
        Ok(CreateColumnMasterKeyStatement {
            name,
            parameters,
            span: self.span_from(start),
        })
    }

    /// `CREATE COLUMN ENCRYPTION KEY k WITH VALUES (…), …` or
    /// `ALTER COLUMN ENCRYPTION KEY k {ADD | DROP} VALUE (…)`
    fn parse_column_encryption_key_statement(
        &mut self,
        start: Span,
        action: DdlAction,
    ) -> Result<ColumnEncryptionKeyStatement, ParseError> {
        let name = self.parse_identifier()?;
        let mut alter_type = None;
        if action == DdlAction::Create {
            self.expect_keyword(Keyword::With)?;
            self.expect_word("VALUES")?;
        } else {
            alter_type = Some(if self.eat_keyword(Keyword::Add) {
                ColumnEncryptionKeyAlterType::Add
            } else {
                self.expect_keyword(Keyword::Drop)?;
                ColumnEncryptionKeyAlterType::Drop
            });
            self.expect_word("VALUE")?;
        }
        let column_encryption_key_values = self.parse_comma_separated(|p| {
            let start = p.current.span;
            let parameters = p.parse_option_list(|p| {
                p.parse_general_option::<ColumnEncryptionKeyValueParameter>(
                    "column encryption key",
                )
            })?;
            Ok(ColumnEncryptionKeyValue {
                parameters,
                span: p.span_from(start),
            })
        })?;
        Ok(ColumnEncryptionKeyStatement {
            action,
            name,
            alter_type,
            column_encryption_key_values,
            span: self.span_from(start),
        })
    }

    /// `{CREATE | ALTER} CRYPTOGRAPHIC PROVIDER p [FROM FILE = 'dll']
    /// [ENABLE | DISABLE]`
    fn parse_cryptographic_provider_statement(
        &mut self,
        start: Span,
        action: DdlAction,
    ) -> Result<CryptographicProviderStatement, ParseError> {
        let name = self.parse_identifier()?;
        let file = if self.eat_keyword(Keyword::From) {
            self.expect_keyword(Keyword::File)?;
            self.expect(&TokenKind::Eq)?;
            Some(self.parse_string_literal()?)
        } else if action == DdlAction::Create {
            return Err(self.unexpected(&["FROM FILE"]));
        } else {
            None
        };
        let enabled = if self.eat_word("ENABLE") {
            Some(true)
        } else if self.eat_word("DISABLE") {
            Some(false)
        } else {
            None
        };
        Ok(CryptographicProviderStatement {
            action,
            name,
            file,
            enabled,
            span: self.span_from(start),
        })
    }

    // --- Audits ---

    /// `{CREATE | ALTER} SERVER AUDIT a [TO target] [WITH (…)]
    /// [WHERE predicate | REMOVE WHERE | MODIFY NAME = new]`
    fn parse_server_audit_statement(
        &mut self,
        start: Span,
        action: DdlAction,
    ) -> Result<ServerAuditStatement, ParseError> {
        let audit_name = self.parse_identifier()?;
        let audit_target = if self.eat_keyword(Keyword::To) {
            Some(self.parse_audit_target()?)
        } else {
            None
        };
        let options = self.parse_with_option_list(|p| {
            p.parse_general_option::<AuditOption>("server audit")
        })?;
        let mut predicate_expression = None;
        let mut remove_where = false;
        let mut new_name = None;
        if self.eat_keyword(Keyword::Where) {
            predicate_expression = Some(self.parse_boolean_expression()?);
        } else if action == DdlAction::Alter && self.eat_words(&["REMOVE", "WHERE"]) {
            remove_where = true;
        } else if action == DdlAction::Alter && self.eat_words(&["MODIFY", "NAME"]) {
            self.expect(&TokenKind::Eq)?;
            new_name = Some(self.parse_identifier()?);
        }
        Ok(ServerAuditStatement {
            action,
            audit_name,
            audit_target,
            options,
            predicate_expression,
            remove_where,
            new_name,
            span: self.span_from(start),
        })
    }

    fn parse_audit_target(&mut self) -> Result<AuditTarget, ParseError> {
        let start = self.current.span;
        let Some(target_kind) = self.current.word().and_then(AuditTargetKind::from_word) else {
            return Err(self.unexpected(AuditTargetKind::WORDS));
        };
        self.advance();
        let target_options = if self.check(&TokenKind::LeftParen) {
            self.parse_option_list(|p| {
                p.parse_general_option::<AuditTargetOption>("audit target")
            })?
        } else {
            Vec::new()
        };
        Ok(AuditTarget {
            target_kind,
            target_options,
            span: self.span_from(start),
        })
    }

    /// Everything after `{CREATE | ALTER} {SERVER | DATABASE} AUDIT
    /// SPECIFICATION`.
    pub(super) fn parse_audit_specification_statement(
        &mut self,
        start: Span,
        action: DdlAction,
        is_server: bool,
    ) -> Result<AuditSpecificationStatement, ParseError> {
        let specification_name = self.parse_identifier()?;
        let audit_name = if self.eat_words(&["FOR", "SERVER", "AUDIT"]) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let mut parts = Vec::new();
        while self.check_keyword(Keyword::Add) || self.check_keyword(Keyword::Drop) {
            parts.push(self.parse_audit_specification_part()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        let mut audit_state = None;
        if self.check_keyword(Keyword::With) && self.peek_is(1, &TokenKind::LeftParen) {
            self.advance();
            self.advance();
            self.expect_word("STATE")?;
            self.expect(&TokenKind::Eq)?;
            audit_state = Some(self.parse_option_state("STATE")?.is_on());
            self.expect(&TokenKind::RightParen)?;
        }
        Ok(AuditSpecificationStatement {
            action,
            is_server,
            specification_name,
            audit_name,
            parts,
            audit_state,
            span: self.span_from(start),
        })
    }

    /// `{ADD | DROP} (group)` or `{ADD | DROP} (action, … ON securable BY
    /// principal, …)`
    fn parse_audit_specification_part(&mut self) -> Result<AuditSpecificationPart, ParseError> {
        let start = self.current.span;
        let is_drop = !self.eat_keyword(Keyword::Add);
        if is_drop {
            self.expect_keyword(Keyword::Drop)?;
        }
        self.expect(&TokenKind::LeftParen)?;
        let mut actions = self.parse_comma_separated(Self::parse_name)?;
        let mut action_group = None;
        let mut target = None;
        let mut principals = Vec::new();
        if self.eat_keyword(Keyword::On) {
            target = Some(self.parse_security_target_object()?);
            self.expect_keyword(Keyword::By)?;
            principals = self.parse_principals()?;
        } else if actions.len() == 1 {
            action_group = actions.pop();
        } else {
            return Err(self.unexpected(&["ON"]));
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(AuditSpecificationPart {
            is_drop,
            action_group,
            actions,
            target,
            principals,
            span: self.span_from(start),
        })
    }

    // --- Security policies ---

    /// `{CREATE | ALTER} SECURITY POLICY p {ADD | ALTER | DROP} [FILTER |
    /// BLOCK] PREDICATE … , … [WITH (…)] [NOT FOR REPLICATION]`
    fn parse_security_policy_statement(
        &mut self,
        start: Span,
        action: DdlAction,
    ) -> Result<SecurityPolicyStatement, ParseError> {
        let name = self.parse_schema_object_name()?;
        let mut security_predicate_actions = Vec::new();
        while self.check_keyword(Keyword::Add)
            || self.check_keyword(Keyword::Alter)
            || self.check_keyword(Keyword::Drop)
        {
            security_predicate_actions.push(self.parse_security_predicate_action()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        let options = self.parse_with_option_list(|p| {
            p.parse_general_option::<SecurityPolicyOption>("security policy")
        })?;
        let not_for_replication = self.eat_words(&["NOT", "FOR", "REPLICATION"]);
        Ok(SecurityPolicyStatement {
            action,
            name,
            security_predicate_actions,
            options,
            not_for_replication,
            span: self.span_from(start),
        })
    }

    fn parse_security_predicate_action(
        &mut self,
    ) -> Result<SecurityPredicateAction, ParseError> {
        let start = self.current.span;
        let action_type = if self.eat_keyword(Keyword::Add) {
            SecurityPredicateActionType::Create
        } else if self.eat_keyword(Keyword::Alter) {
            SecurityPredicateActionType::Alter
        } else {
            self.expect_keyword(Keyword::Drop)?;
            SecurityPredicateActionType::Drop
        };
        let predicate_type = if self.eat_word("BLOCK") {
            SecurityPredicateType::Block
        } else {
            self.eat_word("FILTER");
            SecurityPredicateType::Filter
        };
        self.expect_word("PREDICATE")?;
        let function_call = if action_type == SecurityPredicateActionType::Drop {
            None
        } else {
            Some(self.parse_scalar_expression()?)
        };
        self.expect_keyword(Keyword::On)?;
        let target_object_name = self.parse_schema_object_name()?;
        let operation = if self.eat_words(&["AFTER", "INSERT"]) {
            SecurityPredicateOperation::AfterInsert
        } else if self.eat_words(&["AFTER", "UPDATE"]) {
            SecurityPredicateOperation::AfterUpdate
        } else if self.eat_words(&["BEFORE", "UPDATE"]) {
            SecurityPredicateOperation::BeforeUpdate
        } else if self.eat_words(&["BEFORE", "DELETE"]) {
            SecurityPredicateOperation::BeforeDelete
        } else {
            SecurityPredicateOperation::All
        };
        Ok(SecurityPredicateAction {
            action_type,
            predicate_type,
            function_call,
            target_object_name,
            operation,
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
    fn test_grant_on_object() {
        let Statement::Grant(grant) = statement(
            "GRANT SELECT, UPDATE (Name, Price) ON OBJECT::dbo.Products TO Sales, [Ops] \
             WITH GRANT OPTION AS dbo",
        ) else {
            panic!("expected GRANT");
        };
        assert_eq!(grant.permissions.len(), 2);
        assert_eq!(grant.permissions[1].name(), "UPDATE");
        assert_eq!(grant.permissions[1].columns.len(), 2);
        let target = grant.security_target_object.unwrap();
        assert_eq!(target.object_kind, Some(SecurityObjectKind::Object));
        assert_eq!(target.object_name.identifiers.len(), 2);
        assert_eq!(grant.principals.len(), 2);
        assert!(grant.with_grant_option);
        assert!(grant.as_clause.is_some());
    }

    #[test]
    fn test_grant_multi_word_permission_and_class() {
        let Statement::Grant(grant) = statement(
            "GRANT VIEW DEFINITION, ALTER ANY USER ON SCHEMA::Sales TO public",
        ) else {
            panic!("expected GRANT");
        };
        assert_eq!(grant.permissions[0].name(), "VIEW DEFINITION");
        assert_eq!(grant.permissions[1].name(), "ALTER ANY USER");
        assert_eq!(
            grant.security_target_object.unwrap().object_kind,
            Some(SecurityObjectKind::Schema)
        );

        let Statement::Grant(grant) = statement("GRANT CREATE TABLE TO dev") else {
            panic!("expected GRANT");
        };
        assert!(grant.security_target_object.is_none());
    }

    #[test]
    fn test_revoke_and_deny() {
        let Statement::Revoke(revoke) =
            statement("REVOKE GRANT OPTION FOR EXECUTE ON dbo.p FROM app CASCADE")
        else {
            panic!("expected REVOKE");
        };
        assert!(revoke.grant_option_for);
        assert!(revoke.cascade_option);
        assert!(revoke.security_target_object.unwrap().object_kind.is_none());

        assert!(matches!(
            statement("DENY DELETE ON dbo.t TO guest CASCADE"),
            Statement::Deny(d) if d.cascade_option
        ));
    }

    #[test]
    fn test_signatures() {
        let Statement::AddSignature(add) = statement(
            "ADD SIGNATURE TO OBJECT::dbo.p BY CERTIFICATE cert WITH PASSWORD = 'pw'",
        ) else {
            panic!("expected ADD SIGNATURE");
        };
        assert!(!add.is_drop);
        assert_eq!(add.element_kind, Some(SignableElementKind::Object));
        assert!(add.cryptos[0].password_or_signature.is_some());

        assert!(matches!(
            statement("DROP COUNTER SIGNATURE FROM dbo.p BY ASYMMETRIC KEY k"),
            Statement::DropSignature(s) if s.is_drop && s.is_counter
        ));
    }

    #[test]
    fn test_roles() {
        assert!(matches!(
            statement("CREATE ROLE auditors AUTHORIZATION dbo"),
            Statement::CreateRole(r) if !r.is_server && r.owner.is_some()
        ));
        assert!(matches!(
            statement("ALTER SERVER ROLE sysadmin ADD MEMBER [DOMAIN\\ops]"),
            Statement::AlterRole(r) if r.is_server && r.action == RoleAction::AddMember
        ));
        assert!(matches!(
            statement("ALTER ROLE auditors WITH NAME = reviewers"),
            Statement::AlterRole(r) if r.action == RoleAction::Rename
        ));
    }

    #[test]
    fn test_users() {
        let Statement::CreateUser(user) =
            statement("CREATE USER app FOR LOGIN app_login WITH DEFAULT_SCHEMA = sales")
        else {
            panic!("expected CREATE USER");
        };
        let login = user.user_login_option.unwrap();
        assert_eq!(login.user_login_option_type, UserLoginOptionType::Login);
        assert_eq!(user.user_options[0].option_kind(), PrincipalOptionKind::DefaultSchema);

        assert!(matches!(
            statement("CREATE USER [ext@contoso.com] FROM EXTERNAL PROVIDER"),
            Statement::CreateUser(u) if u.user_login_option.as_ref().is_some_and(|o| {
                o.user_login_option_type == UserLoginOptionType::External
            })
        ));
        assert!(matches!(
            statement("ALTER USER app WITH NAME = app2, LOGIN = other"),
            Statement::AlterUser(u) if u.user_options.len() == 2
        ));
    }

    #[test]
    fn test_logins() {
        let Statement::CreateLogin(login) = statement(
            "CREATE LOGIN app WITH PASSWORD = 'secret' MUST_CHANGE, CHECK_EXPIRATION = ON",
        ) else {
            panic!("expected CREATE LOGIN");
        };
        assert_eq!(login.source_kind, CreateLoginSourceKind::Password);
        assert!(matches!(
            &login.options[0],
            PrincipalOption::Password(p) if p.must_change && !p.hashed
        ));

        assert!(matches!(
            statement("CREATE LOGIN [CORP\\svc] FROM WINDOWS WITH DEFAULT_DATABASE = master"),
            Statement::CreateLogin(l) if l.source_kind == CreateLoginSourceKind::Windows
        ));
        assert!(matches!(
            statement("ALTER LOGIN app DISABLE"),
            Statement::AlterLoginEnableDisable(l) if !l.is_enable
        ));
        assert!(matches!(
            statement("ALTER LOGIN app ADD CREDENTIAL cred"),
            Statement::AlterLoginAddDropCredential(l) if l.is_add
        ));
        assert!(matches!(
            statement("ALTER LOGIN app WITH NO CREDENTIAL"),
            Statement::AlterLoginOptions(l)
                if l.options[0].option_kind() == PrincipalOptionKind::NoCredential
        ));
    }

    #[test]
    fn test_master_keys() {
        assert!(matches!(
            statement("CREATE MASTER KEY ENCRYPTION BY PASSWORD = 'p'"),
            Statement::CreateMasterKey(k) if k.password.is_some()
        ));
        assert!(matches!(
            statement("ALTER MASTER KEY FORCE REGENERATE WITH ENCRYPTION BY PASSWORD = 'p'"),
            Statement::AlterMasterKey(k) if k.option == AlterMasterKeyOption::ForceRegenerate
        ));
        assert!(matches!(
            statement("ALTER MASTER KEY DROP ENCRYPTION BY SERVICE MASTER KEY"),
            Statement::AlterMasterKey(k)
                if k.option == AlterMasterKeyOption::DropEncryptionByServiceMasterKey
        ));
    }

    #[test]
    fn test_column_keys() {
        let Statement::CreateColumnMasterKey(cmk) = statement(
            "CREATE COLUMN MASTER KEY cmk WITH (KEY_STORE_PROVIDER_NAME = 'AZURE_KEY_VAULT', \
             KEY_PATH = 'https://vault/keys/k', ENCLAVE_COMPUTATIONS (SIGNATURE = 0xA0B1))",
        ) else {
            panic!("expected CREATE COLUMN MASTER KEY");
        };
        assert_eq!(cmk.parameters.len(), 3);
        assert_eq!(
            cmk.parameters[2].option_kind,
            ColumnMasterKeyParameterKind::EnclaveComputations
        );

        let Statement::ColumnEncryptionKey(cek) = statement(
            "CREATE COLUMN ENCRYPTION KEY cek WITH VALUES (COLUMN_MASTER_KEY = cmk, \
             ALGORITHM = 'RSA_OAEP', ENCRYPTED_VALUE = 0x01)",
        ) else {
            panic!("expected CREATE COLUMN ENCRYPTION KEY");
        };
        assert_eq!(cek.column_encryption_key_values[0].parameters.len(), 3);

        assert!(matches!(
            statement("ALTER COLUMN ENCRYPTION KEY cek DROP VALUE (COLUMN_MASTER_KEY = cmk)"),
            Statement::ColumnEncryptionKey(k)
                if k.alter_type == Some(ColumnEncryptionKeyAlterType::Drop)
        ));
    }

    #[test]
    fn test_cryptographic_provider() {
        assert!(matches!(
            statement("CREATE CRYPTOGRAPHIC PROVIDER ekm FROM FILE = 'C:\\ekm.dll'"),
            Statement::CryptographicProvider(p) if p.file.is_some()
        ));
        assert!(matches!(
            statement("ALTER CRYPTOGRAPHIC PROVIDER ekm DISABLE"),
            Statement::CryptographicProvider(p) if p.enabled == Some(false)
        ));
    }

    #[test]
    fn test_server_audit() {
        let Statement::ServerAudit(audit) = statement(
            "CREATE SERVER AUDIT a TO FILE (FILEPATH = 'C:\\audit\\', MAXSIZE = 10 MB) \
             WITH (QUEUE_DELAY = 1000, ON_FAILURE = CONTINUE) WHERE server_principal_id = 1",
        ) else {
            panic!("expected CREATE SERVER AUDIT");
        };
        let target = audit.audit_target.unwrap();
        assert_eq!(target.target_kind, AuditTargetKind::File);
        assert_eq!(target.target_options.len(), 2);
        assert_eq!(audit.options.len(), 2);
        assert!(audit.predicate_expression.is_some());

        assert!(matches!(
            statement("ALTER SERVER AUDIT a REMOVE WHERE"),
            Statement::ServerAudit(a) if a.remove_where
        ));
    }

    #[test]
    fn test_audit_specifications() {
        let Statement::AuditSpecification(spec) = statement(
            "CREATE DATABASE AUDIT SPECIFICATION s FOR SERVER AUDIT a \
             ADD (SELECT, INSERT ON OBJECT::dbo.t BY public), \
             ADD (DATABASE_ROLE_MEMBER_CHANGE_GROUP) WITH (STATE = ON)",
        ) else {
            panic!("expected audit specification");
        };
        assert!(!spec.is_server);
        assert_eq!(spec.parts.len(), 2);
        assert_eq!(spec.parts[0].actions.len(), 2);
        assert!(spec.parts[0].target.is_some());
        assert!(spec.parts[1].action_group.is_some());
        assert_eq!(spec.audit_state, Some(true));

        assert!(matches!(
            statement("ALTER SERVER AUDIT SPECIFICATION s DROP (FAILED_LOGIN_GROUP)"),
            Statement::AuditSpecification(s) if s.is_server && s.parts[0].is_drop
        ));
    }

    #[test]
    fn test_security_policy() {
        let Statement::SecurityPolicy(policy) = statement(
            "CREATE SECURITY POLICY rls.p \
             ADD FILTER PREDICATE rls.fn(TenantId) ON dbo.Orders, \
             ADD BLOCK PREDICATE rls.fn(TenantId) ON dbo.Orders AFTER INSERT \
             WITH (STATE = ON) NOT FOR REPLICATION",
        ) else {
            panic!("expected CREATE SECURITY POLICY");
        };
        assert_eq!(policy.security_predicate_actions.len(), 2);
        assert_eq!(
            policy.security_predicate_actions[1].operation,
            SecurityPredicateOperation::AfterInsert
        );
        assert!(policy.not_for_replication);

        assert!(matches!(
            statement("ALTER SECURITY POLICY rls.p DROP FILTER PREDICATE ON dbo.Orders"),
            Statement::SecurityPolicy(p)
                if p.security_predicate_actions[0].function_call.is_none()
        ));
    }
}
