//! Permissions, signatures, principals, keys, audits and security policies.

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use super::{
    AuditOption, AuditTarget, BooleanExpression, ColumnEncryptionKeyValueParameter,
    ColumnMasterKeyParameter, CryptoMechanism, DdlAction, Identifier, Literal, MultiPartIdentifier,
    PrincipalOption, ScalarExpression, SchemaObjectName, SecurityPolicyOption,
    SignableElementKind,
};
use crate::lexer::Span;

// ============================================================================
// GRANT / REVOKE / DENY
// ============================================================================

/// A permission such as `SELECT`, `VIEW DEFINITION` or `ALTER ANY USER`,
/// optionally restricted to columns.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct Permission {
    /// The words of the permission name.
    pub identifiers: Vec<Identifier>,
    /// `( col, … )`.
    pub columns: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

impl Permission {
    /// Returns the permission name with its words joined by single spaces,
    /// upper-cased.
    #[must_use]
    pub fn name(&self) -> String {
        self.identifiers
            .iter()
            .map(|i| i.value.to_ascii_uppercase())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

keyword_enum! {
    /// Securable classes written before `::`.
    pub enum SecurityObjectKind {
        ApplicationRole = "APPLICATION ROLE",
        Assembly = "ASSEMBLY",
        AsymmetricKey = "ASYMMETRIC KEY",
        AvailabilityGroup = "AVAILABILITY GROUP",
        Certificate = "CERTIFICATE",
        Contract = "CONTRACT",
        Database = "DATABASE",
        DatabaseScopedCredential = "DATABASE SCOPED CREDENTIAL",
        Endpoint = "ENDPOINT",
        ExternalDataSource = "EXTERNAL DATA SOURCE",
        ExternalFileFormat = "EXTERNAL FILE FORMAT",
        FullTextCatalog = "FULLTEXT CATALOG",
        FullTextStopList = "FULLTEXT STOPLIST",
        Login = "LOGIN",
        MessageType = "MESSAGE TYPE",
        Object = "OBJECT",
        RemoteServiceBinding = "REMOTE SERVICE BINDING",
        Role = "ROLE",
        Route = "ROUTE",
        Schema = "SCHEMA",
        SearchPropertyList = "SEARCH PROPERTY LIST",
        Server = "SERVER",
        ServerRole = "SERVER ROLE",
        Service = "SERVICE",
        SymmetricKey = "SYMMETRIC KEY",
        Type = "TYPE",
        User = "USER",
        XmlSchemaCollection = "XML SCHEMA COLLECTION",
    }
}

/// `ON [class ::] securable [( col, … )]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SecurityTargetObject {
    /// The securable class.
    pub object_kind: Option<SecurityObjectKind>,
    /// The securable.
    pub object_name: MultiPartIdentifier,
    /// Column restriction written after the object.
    pub columns: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `GRANT perms [ON target] TO principals [WITH GRANT OPTION] [AS principal]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct GrantStatement {
    /// The permissions.
    pub permissions: Vec<Permission>,
    /// The securable.
    pub security_target_object: Option<SecurityTargetObject>,
    /// The grantees.
    pub principals: Vec<Identifier>,
    /// `WITH GRANT OPTION`.
    pub with_grant_option: bool,
    /// `AS grantor`.
    pub as_clause: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `REVOKE [GRANT OPTION FOR] perms [ON target] FROM | TO principals [CASCADE] [AS principal]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct RevokeStatement {
    /// `GRANT OPTION FOR`.
    pub grant_option_for: bool,
    /// The permissions.
    pub permissions: Vec<Permission>,
    /// The securable.
    pub security_target_object: Option<SecurityTargetObject>,
    /// The principals.
    pub principals: Vec<Identifier>,
    /// `CASCADE`.
    pub cascade_option: bool,
    /// `AS grantor`.
    pub as_clause: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `DENY perms [ON target] TO principals [CASCADE] [AS principal]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct DenyStatement {
    /// The permissions.
    pub permissions: Vec<Permission>,
    /// The securable.
    pub security_target_object: Option<SecurityTargetObject>,
    /// The principals.
    pub principals: Vec<Identifier>,
    /// `CASCADE`.
    pub cascade_option: bool,
    /// `AS grantor`.
    pub as_clause: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `ADD | DROP [COUNTER] SIGNATURE TO [class ::] module BY crypto, …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SignatureStatement {
    /// `DROP` (rather than `ADD`).
    pub is_drop: bool,
    /// `COUNTER`.
    pub is_counter: bool,
    /// The element class.
    pub element_kind: Option<SignableElementKind>,
    /// The signed module.
    pub element: SchemaObjectName,
    /// The signing keys.
    pub cryptos: Vec<CryptoMechanism>,
    /// Source span.
    pub span: Span,
}

// ============================================================================
// Principals
// ============================================================================

/// `CREATE [SERVER] ROLE r [AUTHORIZATION owner]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreateRoleStatement {
    /// `SERVER ROLE`.
    pub is_server: bool,
    /// The role.
    pub name: Identifier,
    /// The owner.
    pub owner: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `ALTER ROLE` actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum RoleAction {
    /// `ADD MEMBER m`
    AddMember,
    /// `DROP MEMBER m`
    DropMember,
    /// `WITH NAME = n`
    Rename,
}

/// `ALTER [SERVER] ROLE r ADD MEMBER m | DROP MEMBER m | WITH NAME = n`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterRoleStatement {
    /// `SERVER ROLE`.
    pub is_server: bool,
    /// The role.
    pub name: Identifier,
    /// The action.
    pub action: RoleAction,
    /// The member or new name.
    pub target: Identifier,
    /// Source span.
    pub span: Span,
}

/// How a database user maps to a server principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum UserLoginOptionType {
    /// `FOR | FROM LOGIN l`
    Login,
    /// `FOR | FROM CERTIFICATE c`
    Certificate,
    /// `FOR | FROM ASYMMETRIC KEY k`
    AsymmetricKey,
    /// `FROM EXTERNAL PROVIDER`
    External,
    /// `WITHOUT LOGIN`
    WithoutLogin,
}

/// The login mapping of `CREATE USER`.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct UserLoginOption {
    /// The mapping kind.
    pub user_login_option_type: UserLoginOptionType,
    /// The login, certificate or key.
    pub identifier: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `CREATE USER u [login mapping] [WITH options]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreateUserStatement {
    /// The user.
    pub name: Identifier,
    /// The login mapping.
    pub user_login_option: Option<UserLoginOption>,
    /// `WITH DEFAULT_SCHEMA = …, …`.
    pub user_options: Vec<PrincipalOption>,
    /// Source span.
    pub span: Span,
}

/// `ALTER USER u WITH options`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterUserStatement {
    /// The user.
    pub name: Identifier,
    /// The changed options.
    pub user_options: Vec<PrincipalOption>,
    /// Source span.
    pub span: Span,
}

/// Where a login's credentials come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum CreateLoginSourceKind {
    /// `WITH PASSWORD = …`
    Password,
    /// `FROM WINDOWS`
    Windows,
    /// `FROM EXTERNAL PROVIDER`
    ExternalProvider,
    /// `FROM CERTIFICATE c`
    Certificate,
    /// `FROM ASYMMETRIC KEY k`
    AsymmetricKey,
}

/// `CREATE LOGIN l WITH PASSWORD = … | FROM source [WITH options]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreateLoginStatement {
    /// The login.
    pub name: Identifier,
    /// The credential source.
    pub source_kind: CreateLoginSourceKind,
    /// The certificate or key of the `FROM` forms.
    pub source_name: Option<Identifier>,
    /// Options, the password of the password form included.
    pub options: Vec<PrincipalOption>,
    /// Source span.
    pub span: Span,
}

/// `ALTER LOGIN l WITH option, …`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterLoginOptionsStatement {
    /// The login.
    pub name: Identifier,
    /// The changed options.
    pub options: Vec<PrincipalOption>,
    /// Source span.
    pub span: Span,
}

/// `ALTER LOGIN l ENABLE | DISABLE`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterLoginEnableDisableStatement {
    /// The login.
    pub name: Identifier,
    /// `ENABLE`.
    pub is_enable: bool,
    /// Source span.
    pub span: Span,
}

/// `ALTER LOGIN l ADD | DROP CREDENTIAL c`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterLoginAddDropCredentialStatement {
    /// The login.
    pub name: Identifier,
    /// `ADD` (rather than `DROP`).
    pub is_add: bool,
    /// The credential.
    pub credential_name: Identifier,
    /// Source span.
    pub span: Span,
}

// ============================================================================
// Keys
// ============================================================================

/// `CREATE MASTER KEY [ENCRYPTION BY PASSWORD = 'p']`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreateMasterKeyStatement {
    /// The encryption password.
    pub password: Option<Literal>,
    /// Source span.
    pub span: Span,
}

/// `ALTER MASTER KEY` actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum AlterMasterKeyOption {
    /// `REGENERATE WITH ENCRYPTION BY PASSWORD = …`
    Regenerate,
    /// `FORCE REGENERATE WITH ENCRYPTION BY PASSWORD = …`
    ForceRegenerate,
    /// `ADD ENCRYPTION BY SERVICE MASTER KEY`
    AddEncryptionByServiceMasterKey,
    /// `ADD ENCRYPTION BY PASSWORD = …`
    AddEncryptionByPassword,
    /// `DROP ENCRYPTION BY SERVICE MASTER KEY`
    DropEncryptionByServiceMasterKey,
    /// `DROP ENCRYPTION BY PASSWORD = …`
    DropEncryptionByPassword,
}

/// `ALTER MASTER KEY action`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AlterMasterKeyStatement {
    /// The action.
    pub option: AlterMasterKeyOption,
    /// The password, when the action takes one.
    pub password: Option<Literal>,
    /// Source span.
    pub span: Span,
}

/// `CREATE COLUMN MASTER KEY k WITH ( … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CreateColumnMasterKeyStatement {
    /// The key.
    pub name: Identifier,
    /// Its parameters.
    pub parameters: Vec<ColumnMasterKeyParameter>,
    /// Source span.
    pub span: Span,
}

/// `( COLUMN_MASTER_KEY = …, ALGORITHM = …, ENCRYPTED_VALUE = … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ColumnEncryptionKeyValue {
    /// The parameters.
    pub parameters: Vec<ColumnEncryptionKeyValueParameter>,
    /// Source span.
    pub span: Span,
}

/// `ADD VALUE` / `DROP VALUE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum ColumnEncryptionKeyAlterType {
    /// `ADD VALUE`
    Add,
    /// `DROP VALUE`
    Drop,
}

/// `CREATE COLUMN ENCRYPTION KEY k WITH VALUES ( … ), …` or
/// `ALTER COLUMN ENCRYPTION KEY k ADD | DROP VALUE ( … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ColumnEncryptionKeyStatement {
    /// `CREATE` or `ALTER`.
    pub action: DdlAction,
    /// The key.
    pub name: Identifier,
    /// The change of the `ALTER` form.
    pub alter_type: Option<ColumnEncryptionKeyAlterType>,
    /// The encrypted values.
    pub column_encryption_key_values: Vec<ColumnEncryptionKeyValue>,
    /// Source span.
    pub span: Span,
}

/// `CREATE | ALTER CRYPTOGRAPHIC PROVIDER p [FROM FILE = 'path'] [ENABLE | DISABLE]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CryptographicProviderStatement {
    /// `CREATE` or `ALTER`.
    pub action: DdlAction,
    /// The provider.
    pub name: Identifier,
    /// The DLL path.
    pub file: Option<Literal>,
    /// `ENABLE` (true) or `DISABLE` (false).
    pub enabled: Option<bool>,
    /// Source span.
    pub span: Span,
}

// ============================================================================
// Audits
// ============================================================================

/// `CREATE | ALTER SERVER AUDIT a [TO target] [WITH ( … )] [WHERE … | REMOVE WHERE]
/// [MODIFY NAME = n]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ServerAuditStatement {
    /// `CREATE` or `ALTER`.
    pub action: DdlAction,
    /// The audit.
    pub audit_name: Identifier,
    /// `TO FILE ( … )`, `TO APPLICATION_LOG`, …
    pub audit_target: Option<AuditTarget>,
    /// `WITH ( … )`.
    pub options: Vec<AuditOption>,
    /// `WHERE predicate`.
    pub predicate_expression: Option<BooleanExpression>,
    /// `REMOVE WHERE`.
    pub remove_where: bool,
    /// `MODIFY NAME = n`.
    pub new_name: Option<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `ADD | DROP ( group | actions ON target BY principals )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AuditSpecificationPart {
    /// `DROP` (rather than `ADD`).
    pub is_drop: bool,
    /// An audit action group such as `FAILED_LOGIN_GROUP`.
    pub action_group: Option<Identifier>,
    /// Audited actions such as `SELECT`.
    pub actions: Vec<Identifier>,
    /// The audited securable.
    pub target: Option<SecurityTargetObject>,
    /// `BY principal, …`.
    pub principals: Vec<Identifier>,
    /// Source span.
    pub span: Span,
}

/// `CREATE | ALTER SERVER | DATABASE AUDIT SPECIFICATION s FOR SERVER AUDIT a
/// ADD ( … ), … [WITH (STATE = ON)]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AuditSpecificationStatement {
    /// `CREATE` or `ALTER`.
    pub action: DdlAction,
    /// `SERVER` (rather than `DATABASE`).
    pub is_server: bool,
    /// The specification.
    pub specification_name: Identifier,
    /// The audit.
    pub audit_name: Option<Identifier>,
    /// Added and dropped parts.
    pub parts: Vec<AuditSpecificationPart>,
    /// `STATE = ON | OFF`.
    pub audit_state: Option<bool>,
    /// Source span.
    pub span: Span,
}

// ============================================================================
// Security policies
// ============================================================================

/// `ADD`, `ALTER` or `DROP` of one predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum SecurityPredicateActionType {
    /// `ADD`
    Create,
    /// `ALTER`
    Alter,
    /// `DROP`
    Drop,
}

/// Filter or block predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum SecurityPredicateType {
    /// `FILTER`
    Filter,
    /// `BLOCK`
    Block,
}

/// Operations a block predicate guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AstNode)]
pub enum SecurityPredicateOperation {
    /// Every operation.
    All,
    /// `AFTER INSERT`
    AfterInsert,
    /// `AFTER UPDATE`
    AfterUpdate,
    /// `BEFORE UPDATE`
    BeforeUpdate,
    /// `BEFORE DELETE`
    BeforeDelete,
}

/// `ADD FILTER PREDICATE fn(cols) ON table [AFTER INSERT]`, …
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SecurityPredicateAction {
    /// Add, alter or drop.
    pub action_type: SecurityPredicateActionType,
    /// Filter or block.
    pub predicate_type: SecurityPredicateType,
    /// The predicate function call; absent when dropping.
    pub function_call: Option<ScalarExpression>,
    /// The protected table.
    pub target_object_name: SchemaObjectName,
    /// The guarded operation of a block predicate.
    pub operation: SecurityPredicateOperation,
    /// Source span.
    pub span: Span,
}

/// `CREATE | ALTER SECURITY POLICY p predicates [WITH ( … )] [NOT FOR REPLICATION]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct SecurityPolicyStatement {
    /// `CREATE` or `ALTER`.
    pub action: DdlAction,
    /// The policy.
    pub name: SchemaObjectName,
    /// Predicate changes.
    pub security_predicate_actions: Vec<SecurityPredicateAction>,
    /// `WITH (STATE = ON, SCHEMABINDING = ON)`.
    pub options: Vec<SecurityPolicyOption>,
    /// `NOT FOR REPLICATION`.
    pub not_for_replication: bool,
    /// Source span.
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::QuoteType;

    #[test]
    fn test_permission_name_joins_words() {
        let words = ["view", "DEFINITION"]
            .iter()
            .map(|w| Identifier::new(*w, QuoteType::None, Span::default()))
            .collect();
        let permission = Permission {
            identifiers: words,
            columns: Vec::new(),
            span: Span::default(),
        };
        assert_eq!(permission.name(), "VIEW DEFINITION");
    }

    #[test]
    fn test_security_object_kind_words() {
        assert_eq!(
            SecurityObjectKind::from_word("xml schema collection"),
            Some(SecurityObjectKind::XmlSchemaCollection)
        );
        assert_eq!(SecurityObjectKind::from_word("TABLE"), None);
    }
}
