//! Principal options, cryptographic mechanisms, key parameters, audit and
//! security policy options.

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use crate::ast::{Identifier, Literal};
use crate::lexer::Span;

option_kinds! {
    /// Options of `CREATE/ALTER LOGIN`, `CREATE/ALTER USER` and
    /// `CREATE/ALTER APPLICATION ROLE`.
    pub enum PrincipalOptionKind {
        AllowEncryptedValueModifications = "ALLOW_ENCRYPTED_VALUE_MODIFICATIONS" => OnOff,
        CheckExpiration = "CHECK_EXPIRATION" => OnOff,
        CheckPolicy = "CHECK_POLICY" => OnOff,
        Credential = "CREDENTIAL" => Identifier,
        DefaultDatabase = "DEFAULT_DATABASE" => Identifier,
        DefaultLanguage = "DEFAULT_LANGUAGE" => Literal,
        DefaultSchema = "DEFAULT_SCHEMA" => Identifier,
        Login = "LOGIN" => Identifier,
        Name = "NAME" => Identifier,
        NoCredential = "NO CREDENTIAL" => Flag,
        OldPassword = "OLD_PASSWORD" => String,
        Password = "PASSWORD" => Custom,
        Sid = "SID" => Literal,
        Type = "TYPE" => Enumerated(&["E", "X"]),
    }
}

general_option! {
    /// A principal option whose value follows the kind's shape.
    GeneralPrincipalOption, PrincipalOptionKind
}

/// One principal option.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum PrincipalOption {
    /// `NAME = value` or a flag.
    General(GeneralPrincipalOption),
    /// `PASSWORD = 'x' [HASHED] [MUST_CHANGE]`.
    Password(PasswordPrincipalOption),
}

impl PrincipalOption {
    /// Returns the option's kind.
    #[must_use]
    pub const fn option_kind(&self) -> PrincipalOptionKind {
        match self {
            Self::General(o) => o.option_kind,
            Self::Password(o) => o.option_kind,
        }
    }
}

/// `PASSWORD = 'secret' | 0xhash HASHED [MUST_CHANGE]`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct PasswordPrincipalOption {
    /// Always [`PrincipalOptionKind::Password`].
    pub option_kind: PrincipalOptionKind,
    /// The password or hash.
    pub password: Literal,
    /// `HASHED`.
    pub hashed: bool,
    /// `MUST_CHANGE`.
    pub must_change: bool,
    /// Source span.
    pub span: Span,
}

keyword_enum! {
    /// What a key or signature is protected by.
    pub enum CryptoMechanismType {
        Certificate = "CERTIFICATE",
        AsymmetricKey = "ASYMMETRIC KEY",
        SymmetricKey = "SYMMETRIC KEY",
        Password = "PASSWORD",
    }
}

/// `CERTIFICATE c [WITH PASSWORD = 'x']`, `PASSWORD = 'x'`, …
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct CryptoMechanism {
    /// The mechanism.
    pub crypto_mechanism_type: CryptoMechanismType,
    /// The certificate or key name.
    pub identifier: Option<Identifier>,
    /// The password or signature blob.
    pub password_or_signature: Option<Literal>,
    /// Source span.
    pub span: Span,
}

keyword_enum! {
    /// Objects a signature can be attached to.
    pub enum SignableElementKind {
        Object = "OBJECT",
        Assembly = "ASSEMBLY",
        Database = "DATABASE",
    }
}

option_kinds! {
    /// `CREATE COLUMN MASTER KEY … WITH ( … )` parameter names.
    pub enum ColumnMasterKeyParameterKind {
        EnclaveComputations = "ENCLAVE_COMPUTATIONS" => Custom,
        KeyPath = "KEY_PATH" => String,
        KeyStoreProviderName = "KEY_STORE_PROVIDER_NAME" => String,
    }
}

/// One column master key parameter.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ColumnMasterKeyParameter {
    /// The parameter.
    pub option_kind: ColumnMasterKeyParameterKind,
    /// The string value, or the `SIGNATURE` of `ENCLAVE_COMPUTATIONS`.
    pub value: Literal,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// `COLUMN ENCRYPTION KEY … VALUES ( … )` parameter names.
    pub enum ColumnEncryptionKeyValueParameterKind {
        Algorithm = "ALGORITHM" => String,
        ColumnMasterKey = "COLUMN_MASTER_KEY" => Identifier,
        EncryptedValue = "ENCRYPTED_VALUE" => Literal,
    }
}

general_option! {
    /// One column encryption key value parameter.
    ColumnEncryptionKeyValueParameter, ColumnEncryptionKeyValueParameterKind
}

option_kinds! {
    /// Column `ENCRYPTED WITH ( … )` parameter names.
    pub enum ColumnEncryptionParameterKind {
        Algorithm = "ALGORITHM" => String,
        ColumnEncryptionKey = "COLUMN_ENCRYPTION_KEY" => Identifier,
        EncryptionType = "ENCRYPTION_TYPE" => Enumerated(&["DETERMINISTIC", "RANDOMIZED"]),
    }
}

general_option! {
    /// One column encryption parameter.
    ColumnEncryptionParameter, ColumnEncryptionParameterKind
}

option_kinds! {
    /// `SERVER AUDIT … WITH ( … )` option names.
    pub enum AuditOptionKind {
        AuditGuid = "AUDIT_GUID" => String,
        OnFailure = "ON_FAILURE" => Enumerated(&["CONTINUE", "SHUTDOWN", "FAIL_OPERATION"]),
        OperatorAudit = "OPERATOR_AUDIT" => OnOff,
        QueueDelay = "QUEUE_DELAY" => Integer,
        State = "STATE" => OnOff,
    }
}

general_option! {
    /// One server audit option.
    AuditOption, AuditOptionKind
}

keyword_enum! {
    /// Where a server audit writes.
    pub enum AuditTargetKind {
        File = "FILE",
        ApplicationLog = "APPLICATION_LOG",
        SecurityLog = "SECURITY_LOG",
        Url = "URL",
        ExternalMonitor = "EXTERNAL_MONITOR",
    }
}

option_kinds! {
    /// Audit target option names.
    pub enum AuditTargetOptionKind {
        FilePath = "FILEPATH" => String,
        MaxFiles = "MAX_FILES" => Integer,
        MaxRolloverFiles = "MAX_ROLLOVER_FILES" => Quantity,
        MaxSize = "MAXSIZE" => Quantity,
        Path = "PATH" => String,
        ReserveDiskSpace = "RESERVE_DISK_SPACE" => OnOff,
        RetentionDays = "RETENTION_DAYS" => Integer,
    }
}

general_option! {
    /// One audit target option.
    AuditTargetOption, AuditTargetOptionKind
}

/// `TO FILE ( … )`, `TO APPLICATION_LOG`, …
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct AuditTarget {
    /// The destination.
    pub target_kind: AuditTargetKind,
    /// Destination options.
    pub target_options: Vec<AuditTargetOption>,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// `SECURITY POLICY … WITH ( … )` option names.
    pub enum SecurityPolicyOptionKind {
        SchemaBinding = "SCHEMABINDING" => OnOff,
        State = "STATE" => OnOff,
    }
}

general_option! {
    /// One security policy option.
    SecurityPolicyOption, SecurityPolicyOptionKind
}
